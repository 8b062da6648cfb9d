use super::*;
use crate::component::{CallToAction, ComponentContent, HeroContent};
use crate::context::Brand;

fn acme() -> BusinessContext {
    BusinessContext {
        business_name: "Acme".into(),
        industry: "SaaS".into(),
        description: String::new(),
        goals: vec!["signups".into(), "retention".into()],
        target_audience: "developers".into(),
        brand: Brand { tone: "playful".into(), values: vec!["speed".into(), "clarity".into()] },
        user_id: None,
    }
}

#[test]
fn every_kind_prompt_embeds_context() {
    let ctx = acme();
    for kind in ComponentKind::INITIAL_ORDER {
        let prompt = component_prompt(kind, &ctx);
        assert!(prompt.contains("Business name: Acme"), "{kind}");
        assert!(prompt.contains("Industry: SaaS"), "{kind}");
        assert!(prompt.contains("Target audience: developers"), "{kind}");
        assert!(prompt.contains("Goals: signups, retention"), "{kind}");
        assert!(prompt.contains("Brand tone: playful"), "{kind}");
        assert!(prompt.contains("Brand values: speed, clarity"), "{kind}");
    }
}

#[test]
fn every_kind_prompt_demands_bare_json_with_its_schema() {
    let ctx = acme();
    for kind in ComponentKind::INITIAL_ORDER {
        let prompt = component_prompt(kind, &ctx);
        assert!(prompt.contains("ONLY a JSON object"), "{kind}");
        assert!(prompt.contains("markdown code fences"), "{kind}");
        assert!(prompt.ends_with(schema(kind)), "{kind}");
    }
}

#[test]
fn kind_prompts_are_distinct() {
    let ctx = acme();
    assert!(hero_prompt(&ctx).contains("hero section"));
    assert!(features_prompt(&ctx).contains("features section"));
    assert!(benefits_prompt(&ctx).contains("benefits section"));
    assert!(cta_prompt(&ctx).contains("call-to-action section"));
    assert!(schema(ComponentKind::Cta).contains("bullets"));
    assert!(schema(ComponentKind::Features).contains("icon"));
}

#[test]
fn description_line_only_when_present() {
    let mut ctx = acme();
    assert!(!hero_prompt(&ctx).contains("Description:"));
    ctx.description = "Deploy tooling for small teams".into();
    assert!(hero_prompt(&ctx).contains("Description: Deploy tooling for small teams"));
}

#[test]
fn improve_prompt_embeds_current_content() {
    let component = PageComponent::generated(ComponentContent::Hero(HeroContent {
        title: "Old headline".into(),
        subtitle: "s".into(),
        description: "d".into(),
        image: None,
        cta: CallToAction { text: "Go".into(), link: "#go".into() },
        background_image: None,
    }));
    let prompt = improve_prompt(&component, &acme());
    assert!(prompt.contains("Improve the hero section"));
    assert!(prompt.contains("\"title\": \"Old headline\""));
    assert!(!prompt.contains("\"kind\""));
    assert!(prompt.contains("Business name: Acme"));
    assert!(prompt.ends_with(schema(ComponentKind::Hero)));
}

#[test]
fn image_query_prompt_asks_for_phrase_only() {
    let prompt = image_query_prompt(ComponentKind::Benefits, &acme());
    assert!(prompt.contains("benefits section"));
    assert!(prompt.contains("ONLY the search phrase"));
    assert!(prompt.contains("Industry: SaaS"));
}
