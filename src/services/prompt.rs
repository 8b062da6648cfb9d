//! Prompt builders — one pure function per section kind.
//!
//! Every generation prompt embeds the full business context and ends with a
//! strict JSON-only instruction plus the exact schema for that kind. Schemas
//! are written as example objects, which models follow more reliably than
//! JSON Schema.

use std::fmt::Write;

use crate::component::{ComponentKind, PageComponent};
use crate::context::BusinessContext;

const JSON_ONLY: &str = "Respond with ONLY a JSON object matching the schema below. \
     Do not wrap it in markdown code fences. Do not add any prose before or after it.";

const HERO_SCHEMA: &str = r##"{
  "title": "string, the headline (max 10 words)",
  "subtitle": "string, one supporting sentence",
  "description": "string, 2-3 sentences",
  "image": { "url": "string (optional)", "alt": "string" },
  "cta": { "text": "string, button label", "link": "string, e.g. #signup" }
}"##;

const FEATURES_SCHEMA: &str = r##"{
  "title": "string, section heading",
  "description": "string, one sentence",
  "items": [
    { "title": "string", "description": "string", "icon": "string, a lucide icon name such as zap or shield" }
  ]
}"##;

const BENEFITS_SCHEMA: &str = r##"{
  "title": "string, section heading",
  "description": "string, one sentence",
  "items": [
    { "title": "string", "description": "string", "image": { "url": "string (optional)", "alt": "string" } }
  ]
}"##;

const CTA_SCHEMA: &str = r##"{
  "title": "string, closing headline",
  "description": "string, one or two sentences",
  "button": { "text": "string", "link": "string" },
  "bullets": [ { "text": "string, short reassurance", "icon": "string, a lucide icon name" } ]
}"##;

#[must_use]
pub fn schema(kind: ComponentKind) -> &'static str {
    match kind {
        ComponentKind::Hero => HERO_SCHEMA,
        ComponentKind::Features => FEATURES_SCHEMA,
        ComponentKind::Benefits => BENEFITS_SCHEMA,
        ComponentKind::Cta => CTA_SCHEMA,
    }
}

fn context_block(ctx: &BusinessContext) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "Business name: {}", ctx.business_name);
    let _ = writeln!(out, "Industry: {}", ctx.industry);
    if !ctx.description.trim().is_empty() {
        let _ = writeln!(out, "Description: {}", ctx.description);
    }
    let _ = writeln!(out, "Target audience: {}", ctx.target_audience);
    let _ = writeln!(out, "Goals: {}", ctx.goals_joined());
    let _ = writeln!(out, "Brand tone: {}", ctx.brand.tone);
    let _ = writeln!(out, "Brand values: {}", ctx.brand_values_joined());
    out
}

fn with_format(mut prompt: String, kind: ComponentKind) -> String {
    prompt.push('\n');
    prompt.push_str(JSON_ONLY);
    prompt.push_str("\n\nSchema:\n");
    prompt.push_str(schema(kind));
    prompt
}

#[must_use]
pub fn hero_prompt(ctx: &BusinessContext) -> String {
    let prompt = format!(
        "Write the hero section of a landing page for this business.\n\n{}\n\
         The headline must speak directly to the target audience and reflect the brand tone. \
         The call to action should drive the first goal.\n",
        context_block(ctx)
    );
    with_format(prompt, ComponentKind::Hero)
}

#[must_use]
pub fn features_prompt(ctx: &BusinessContext) -> String {
    let prompt = format!(
        "Write the features section of a landing page for this business.\n\n{}\n\
         List 3 to 6 concrete product features. Each feature gets a short title, one sentence \
         of description, and an icon name.\n",
        context_block(ctx)
    );
    with_format(prompt, ComponentKind::Features)
}

#[must_use]
pub fn benefits_prompt(ctx: &BusinessContext) -> String {
    let prompt = format!(
        "Write the benefits section of a landing page for this business.\n\n{}\n\
         List 3 or 4 outcomes the target audience gets, phrased as results rather than features.\n",
        context_block(ctx)
    );
    with_format(prompt, ComponentKind::Benefits)
}

#[must_use]
pub fn cta_prompt(ctx: &BusinessContext) -> String {
    let prompt = format!(
        "Write the closing call-to-action section of a landing page for this business.\n\n{}\n\
         Create urgency without pressure. Add 2 or 3 short reassurance bullets.\n",
        context_block(ctx)
    );
    with_format(prompt, ComponentKind::Cta)
}

/// Generation prompt for `kind`.
#[must_use]
pub fn component_prompt(kind: ComponentKind, ctx: &BusinessContext) -> String {
    match kind {
        ComponentKind::Hero => hero_prompt(ctx),
        ComponentKind::Features => features_prompt(ctx),
        ComponentKind::Benefits => benefits_prompt(ctx),
        ComponentKind::Cta => cta_prompt(ctx),
    }
}

/// Rewrite prompt for an existing section. Embeds the current content so the
/// model keeps what works.
#[must_use]
pub fn improve_prompt(component: &PageComponent, ctx: &BusinessContext) -> String {
    let kind = component.kind();
    let current = serde_json::to_string_pretty(&component.content.to_untagged_json()).unwrap_or_default();
    let prompt = format!(
        "Improve the {kind} section of a landing page for this business.\n\n{}\n\
         Current content:\n{current}\n\n\
         Make the copy clearer, more specific to the target audience, and more persuasive. \
         Keep the same structure and keep any image URLs unchanged.\n",
        context_block(ctx)
    );
    with_format(prompt, kind)
}

/// Prompt asking for a stock-photo search phrase for a section.
#[must_use]
pub fn image_query_prompt(kind: ComponentKind, ctx: &BusinessContext) -> String {
    format!(
        "Suggest a stock photo search query for the {kind} section of a landing page.\n\n{}\n\
         Respond with ONLY the search phrase: 2 to 5 plain words, no quotes, no punctuation.",
        context_block(ctx)
    )
}

#[cfg(test)]
#[path = "prompt_test.rs"]
mod tests;
