//! Editor document state.
//!
//! DESIGN
//! ======
//! `EditorState` is a full snapshot of one landing page being edited. Edits
//! never mutate a snapshot in place: every helper returns a fresh value so
//! the previous one can sit in the undo history untouched. Equality is
//! structural over the whole tree, which is what history de-duplication
//! relies on.

use std::time::{SystemTime, UNIX_EPOCH};

use serde::{Deserialize, Serialize};

use crate::component::PageComponent;

/// Current time as milliseconds since Unix epoch.
pub(crate) fn now_ms() -> i64 {
    let Ok(dur) = SystemTime::now().duration_since(UNIX_EPOCH) else {
        return 0;
    };
    i64::try_from(dur.as_millis()).unwrap_or(0)
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EditorMetadata {
    pub title: String,
    /// Milliseconds since Unix epoch.
    pub last_modified: i64,
    pub version: u64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub author: Option<String>,
}

/// One snapshot of a page document.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EditorState {
    /// Sections in render order.
    pub components: Vec<PageComponent>,
    pub metadata: EditorMetadata,
    /// Free-form rendering configuration (theme, layout, style overrides).
    #[serde(default)]
    pub settings: serde_json::Map<String, serde_json::Value>,
}

impl EditorState {
    #[must_use]
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            components: Vec::new(),
            metadata: EditorMetadata { title: title.into(), last_modified: now_ms(), version: 1, author: None },
            settings: serde_json::Map::new(),
        }
    }

    /// New snapshot with `components` appended after the existing ones.
    #[must_use]
    pub fn with_components(&self, components: impl IntoIterator<Item = PageComponent>) -> Self {
        let mut next = self.clone();
        next.components.extend(components);
        next.touched()
    }

    /// New snapshot with the component sharing `component.id` swapped out.
    /// `None` when no such component exists or it already equals `component`.
    #[must_use]
    pub fn replace_component(&self, component: PageComponent) -> Option<Self> {
        let idx = self.components.iter().position(|c| c.id == component.id)?;
        if self.components[idx] == component {
            return None;
        }
        let mut next = self.clone();
        next.components[idx] = component;
        Some(next.touched())
    }

    /// New snapshot with one rendering setting overridden.
    #[must_use]
    pub fn with_setting(&self, key: impl Into<String>, value: serde_json::Value) -> Self {
        let mut next = self.clone();
        next.settings.insert(key.into(), value);
        next.touched()
    }

    fn touched(mut self) -> Self {
        self.metadata.version += 1;
        self.metadata.last_modified = now_ms();
        self
    }
}

#[cfg(test)]
#[path = "state_test.rs"]
mod tests;

#[cfg(test)]
pub mod test_helpers {
    use super::*;
    use crate::component::{CallToAction, ComponentContent, HeroContent};

    /// A hero component with fixed copy, suitable for history and state tests.
    #[must_use]
    pub fn dummy_component(title: &str) -> PageComponent {
        PageComponent::generated(ComponentContent::Hero(HeroContent {
            title: title.into(),
            subtitle: "sub".into(),
            description: "desc".into(),
            image: None,
            cta: CallToAction { text: "Go".into(), link: "#".into() },
            background_image: None,
        }))
    }

    /// A deterministic state: fixed timestamp, `n` in the title.
    #[must_use]
    pub fn numbered_state(n: usize) -> EditorState {
        EditorState {
            components: Vec::new(),
            metadata: EditorMetadata { title: format!("page {n}"), last_modified: 0, version: 1, author: None },
            settings: serde_json::Map::new(),
        }
    }
}
