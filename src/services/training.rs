//! Chatbot training extraction.
//!
//! Turns the business context and generated page copy into question/answer
//! pairs the chat widget can be seeded with. Pure and deterministic: the
//! same inputs always yield the same entries in the same order.

use serde::{Deserialize, Serialize};

use crate::component::{ComponentContent, PageComponent};
use crate::context::BusinessContext;

/// Where a training entry was derived from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TrainingSource {
    Context,
    Hero,
    Features,
    Benefits,
    Cta,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TrainingEntry {
    pub question: String,
    pub answer: String,
    pub source: TrainingSource,
}

/// Derive training entries from `ctx` and the page `components`, in page
/// order. Entries whose answer would be blank are skipped.
#[must_use]
pub fn extract_training_entries(ctx: &BusinessContext, components: &[PageComponent]) -> Vec<TrainingEntry> {
    let mut entries = Vec::new();
    let name = ctx.business_name.trim();

    push(&mut entries, TrainingSource::Context, format!("What is {name}?"), &ctx.description);
    push(&mut entries, TrainingSource::Context, format!("Who is {name} for?"), &ctx.target_audience);
    push(&mut entries, TrainingSource::Context, format!("What does {name} value?"), &ctx.brand_values_joined());

    for component in components {
        match &component.content {
            ComponentContent::Hero(hero) => {
                push(&mut entries, TrainingSource::Hero, format!("What does {name} offer?"), &hero.description);
            }
            ComponentContent::Features(features) => {
                for item in &features.items {
                    let question = format!("What is the {} feature?", item.title.trim());
                    push(&mut entries, TrainingSource::Features, question, &item.description);
                }
            }
            ComponentContent::Benefits(benefits) => {
                for item in &benefits.items {
                    let question = format!("How does {name} help with {}?", item.title.trim().to_lowercase());
                    push(&mut entries, TrainingSource::Benefits, question, &item.description);
                }
            }
            ComponentContent::Cta(cta) => {
                let answer = [cta.description.trim(), cta.button.text.trim()]
                    .into_iter()
                    .filter(|part| !part.is_empty())
                    .collect::<Vec<_>>()
                    .join(" ");
                push(&mut entries, TrainingSource::Cta, "How do I get started?".into(), &answer);
            }
        }
    }
    entries
}

fn push(entries: &mut Vec<TrainingEntry>, source: TrainingSource, question: String, answer: &str) {
    let answer = answer.trim();
    if answer.is_empty() {
        return;
    }
    entries.push(TrainingEntry { question, answer: answer.to_owned(), source });
}

#[cfg(test)]
#[path = "training_test.rs"]
mod tests;
