use super::*;
use serde_json::json;

fn hero_json() -> serde_json::Value {
    json!({
        "title": "Ship faster with Acme",
        "subtitle": "Deploys in seconds",
        "description": "Acme takes the toil out of releases.",
        "cta": { "text": "Start free", "link": "#signup" }
    })
}

// =========================================================================
// from_value
// =========================================================================

#[test]
fn hero_from_value_accepts_minimal_shape() {
    let content = ComponentContent::from_value(ComponentKind::Hero, hero_json()).unwrap();
    assert_eq!(content.kind(), ComponentKind::Hero);
    assert_eq!(content.title(), "Ship faster with Acme");
    let ComponentContent::Hero(hero) = content else {
        panic!("expected hero");
    };
    assert!(hero.image.is_none());
    assert!(hero.background_image.is_none());
}

#[test]
fn hero_missing_cta_is_rejected() {
    let mut value = hero_json();
    value.as_object_mut().unwrap().remove("cta");
    let err = ComponentContent::from_value(ComponentKind::Hero, value).unwrap_err();
    assert!(err.to_string().contains("cta"));
}

#[test]
fn features_item_missing_icon_is_rejected() {
    let value = json!({
        "title": "Features",
        "description": "All of them",
        "items": [{ "title": "Fast", "description": "Very" }]
    });
    let err = ComponentContent::from_value(ComponentKind::Features, value).unwrap_err();
    assert!(err.to_string().contains("icon"));
}

#[test]
fn benefits_item_image_is_optional() {
    let value = json!({
        "title": "Why Acme",
        "description": "Reasons",
        "items": [
            { "title": "Save time", "description": "Hours back" },
            { "title": "Sleep well", "description": "No pages", "image": { "url": "https://x.test/a.png", "alt": "calm" } }
        ]
    });
    let ComponentContent::Benefits(benefits) = ComponentContent::from_value(ComponentKind::Benefits, value).unwrap()
    else {
        panic!("expected benefits");
    };
    assert_eq!(benefits.items.len(), 2);
    assert!(benefits.items[0].image.is_none());
    assert_eq!(benefits.items[1].image.as_ref().map(|i| i.alt.as_str()), Some("calm"));
}

#[test]
fn cta_shape_parses_bullets_in_order() {
    let value = json!({
        "title": "Ready?",
        "description": "Join today",
        "button": { "text": "Sign up", "link": "/signup" },
        "bullets": [{ "text": "No card", "icon": "credit-card" }, { "text": "Cancel anytime", "icon": "x" }]
    });
    let ComponentContent::Cta(cta) = ComponentContent::from_value(ComponentKind::Cta, value).unwrap() else {
        panic!("expected cta");
    };
    assert_eq!(cta.bullets[0].text, "No card");
    assert_eq!(cta.bullets[1].icon, "x");
}

#[test]
fn wrong_kind_shape_is_rejected() {
    assert!(ComponentContent::from_value(ComponentKind::Cta, hero_json()).is_err());
}

// =========================================================================
// serde shape
// =========================================================================

#[test]
fn content_serializes_with_kind_tag() {
    let content = ComponentContent::from_value(ComponentKind::Hero, hero_json()).unwrap();
    let tagged = serde_json::to_value(&content).unwrap();
    assert_eq!(tagged["kind"], "hero");
    assert_eq!(tagged["cta"]["link"], "#signup");

    let untagged = content.to_untagged_json();
    assert!(untagged.get("kind").is_none());
    assert_eq!(untagged, hero_json());
}

// =========================================================================
// attach_image
// =========================================================================

#[test]
fn attach_image_uses_kind_specific_slot() {
    let mut hero = ComponentContent::from_value(ComponentKind::Hero, hero_json()).unwrap();
    assert!(hero.attach_image("https://img.test/bg".into()));
    assert_eq!(hero.to_untagged_json()["backgroundImage"], "https://img.test/bg");

    let mut features = ComponentContent::Features(FeaturesContent {
        title: "F".into(),
        description: "D".into(),
        items: vec![],
        illustration: None,
    });
    assert!(features.attach_image("https://img.test/ill".into()));
    assert_eq!(features.to_untagged_json()["illustration"], "https://img.test/ill");

    let mut cta = ComponentContent::Cta(CtaContent {
        title: "T".into(),
        description: "D".into(),
        button: CallToAction { text: "Go".into(), link: "/".into() },
        bullets: vec![],
    });
    let before = cta.clone();
    assert!(!cta.attach_image("https://img.test/x".into()));
    assert_eq!(cta, before);
}

// =========================================================================
// PageComponent lifecycle
// =========================================================================

#[test]
fn generated_then_improved_keeps_identity() {
    let content = ComponentContent::from_value(ComponentKind::Hero, hero_json()).unwrap();
    let first = PageComponent::generated(content.clone());
    assert_eq!(first.version, 1);
    assert_eq!(first.status, ComponentStatus::Generated);

    let second = first.improved(content);
    assert_eq!(second.id, first.id);
    assert_eq!(second.version, 2);
    assert_eq!(second.status, ComponentStatus::Improved);
    assert_eq!(second.kind(), ComponentKind::Hero);
}

#[test]
fn generated_components_get_distinct_ids() {
    let content = ComponentContent::from_value(ComponentKind::Hero, hero_json()).unwrap();
    let a = PageComponent::generated(content.clone());
    let b = PageComponent::generated(content);
    assert_ne!(a.id, b.id);
}

#[test]
fn kind_order_and_image_support() {
    assert_eq!(
        ComponentKind::INITIAL_ORDER.map(ComponentKind::as_str),
        ["hero", "features", "benefits", "cta"]
    );
    assert!(ComponentKind::Hero.supports_image());
    assert!(ComponentKind::Benefits.supports_image());
    assert!(!ComponentKind::Cta.supports_image());
    assert_eq!(ComponentKind::Features.to_string(), "features");
}
