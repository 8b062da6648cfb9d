//! Page service — applies pipeline output to the editor document.
//!
//! Every operation here lands as exactly one history step, so a single undo
//! reverts a whole page population or image pass.

use tracing::info;

use crate::component::PageComponent;
use crate::context::BusinessContext;
use crate::history::HistoryManager;
use crate::state::EditorState;

use super::generation::{GenerationError, GenerationPipeline};

/// Generate the initial sections and append them to the current page.
///
/// # Errors
///
/// Propagates the pipeline failure. History is untouched in that case.
pub async fn populate_page(
    pipeline: &GenerationPipeline,
    history: &mut HistoryManager,
    template_id: &str,
    ctx: &BusinessContext,
) -> Result<EditorState, GenerationError> {
    let components = pipeline.generate_initial_components(template_id, ctx).await?;
    let next = history
        .current_state()
        .with_components(components)
        .with_setting("template", serde_json::Value::String(template_id.to_owned()));
    history.push(next);
    info!(%template_id, components = history.current_state().components.len(), "page: populated");
    Ok(history.current_state().clone())
}

/// Run image enhancement over every section of the current page and record
/// the result as one step. Returns `false` when no section changed.
pub async fn enhance_page_images(
    pipeline: &GenerationPipeline,
    history: &mut HistoryManager,
    ctx: &BusinessContext,
) -> bool {
    let current = history.current_state().clone();
    let mut enhanced = Vec::with_capacity(current.components.len());
    for component in current.components.iter().cloned() {
        enhanced.push(pipeline.enhance_with_image(component, ctx).await);
    }
    if enhanced == current.components {
        return false;
    }

    let mut base = current;
    base.components.clear();
    history.push(base.with_components(enhanced))
}

/// Swap in a revised section (improved or image-enhanced) by id. Returns
/// `false` when the id is not on the page or nothing changed.
pub fn apply_component_update(history: &mut HistoryManager, component: PageComponent) -> bool {
    let Some(next) = history.current_state().replace_component(component) else {
        return false;
    };
    history.push(next)
}

#[cfg(test)]
#[path = "page_test.rs"]
mod tests;
