use super::*;
use crate::error::ErrorCode;

// =============================================================================
// LlmError
// =============================================================================

#[test]
fn error_codes_are_stable() {
    assert_eq!(LlmError::ConfigParse("bad".into()).error_code(), "E_CONFIG_PARSE");
    assert_eq!(LlmError::MissingApiKey { var: "KEY".into() }.error_code(), "E_MISSING_API_KEY");
    assert_eq!(LlmError::ApiRequest("timeout".into()).error_code(), "E_API_REQUEST");
    assert_eq!(LlmError::ApiResponse { status: 500, body: "oops".into() }.error_code(), "E_API_RESPONSE");
    assert_eq!(LlmError::ApiParse("json".into()).error_code(), "E_API_PARSE");
    assert_eq!(LlmError::HttpClientBuild("tls".into()).error_code(), "E_HTTP_CLIENT_BUILD");
    assert_eq!(LlmError::EmptyCompletion.error_code(), "E_EMPTY_COMPLETION");
}

#[test]
fn transient_failures_are_retryable() {
    assert!(LlmError::ApiRequest("conn refused".into()).retryable());
    assert!(LlmError::EmptyCompletion.retryable());
    for status in [429, 500, 529] {
        assert!(LlmError::ApiResponse { status, body: String::new() }.retryable(), "{status}");
    }
}

#[test]
fn caller_mistakes_are_not_retryable() {
    assert!(!LlmError::ApiResponse { status: 401, body: "unauthorized".into() }.retryable());
    assert!(!LlmError::ApiResponse { status: 400, body: "bad request".into() }.retryable());
    assert!(!LlmError::ConfigParse("bad".into()).retryable());
    assert!(!LlmError::MissingApiKey { var: "K".into() }.retryable());
    assert!(!LlmError::ApiParse("json".into()).retryable());
}

#[test]
fn missing_key_names_the_variable() {
    let err = LlmError::MissingApiKey { var: "MY_KEY".into() };
    assert!(err.to_string().contains("MY_KEY"));
}

// =============================================================================
// CompletionRequest / join_segments
// =============================================================================

#[test]
fn blank_system_is_none() {
    let request = CompletionRequest { system: "  \n", prompt: "hi", max_tokens: 10 };
    assert_eq!(request.system(), None);

    let request = CompletionRequest { system: "be brief", ..request };
    assert_eq!(request.system(), Some("be brief"));
}

#[test]
fn join_segments_skips_empty_parts() {
    assert_eq!(join_segments(["first", "", "second"]), "first\nsecond");
    assert_eq!(join_segments(Vec::<&str>::new()), "");
}
