//! Business context — the caller-supplied description a page is generated from.

use serde::{Deserialize, Serialize};

/// Brand voice used to steer copy generation.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Brand {
    pub tone: String,
    #[serde(default)]
    pub values: Vec<String>,
}

/// Immutable input to generation. Mirrors the per-page business document
/// the editor stores alongside the page.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BusinessContext {
    pub business_name: String,
    pub industry: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub goals: Vec<String>,
    #[serde(alias = "audience")]
    pub target_audience: String,
    #[serde(default)]
    pub brand: Brand,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user_id: Option<String>,
}

impl BusinessContext {
    #[must_use]
    pub fn goals_joined(&self) -> String {
        self.goals.join(", ")
    }

    #[must_use]
    pub fn brand_values_joined(&self) -> String {
        self.brand.values.join(", ")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn deserializes_audience_alias() {
        let ctx: BusinessContext = serde_json::from_value(serde_json::json!({
            "businessName": "Acme",
            "industry": "SaaS",
            "audience": "developers",
            "goals": ["signups", "retention"],
            "brand": { "tone": "playful", "values": ["speed", "clarity"] }
        }))
        .unwrap();
        assert_eq!(ctx.business_name, "Acme");
        assert_eq!(ctx.target_audience, "developers");
        assert_eq!(ctx.goals_joined(), "signups, retention");
        assert_eq!(ctx.brand_values_joined(), "speed, clarity");
        assert!(ctx.description.is_empty());
        assert!(ctx.user_id.is_none());
    }

    #[test]
    fn missing_business_name_is_rejected() {
        let result = serde_json::from_value::<BusinessContext>(serde_json::json!({
            "industry": "SaaS",
            "targetAudience": "developers"
        }));
        assert!(result.is_err());
    }
}
