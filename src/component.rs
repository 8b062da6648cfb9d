//! Page components — the typed sections a landing page is built from.
//!
//! DESIGN
//! ======
//! Content is a closed tagged union over the four section kinds. Model
//! output is only ever accepted through [`ComponentContent::from_value`],
//! which rejects objects missing any required field of the kind's shape.
//! Optional media slots (`image`, `backgroundImage`, `illustration`) and an
//! image's `url` are the only fields allowed to be absent.

use std::fmt;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

// =============================================================================
// KIND & STATUS
// =============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ComponentKind {
    Hero,
    Features,
    Benefits,
    Cta,
}

impl ComponentKind {
    /// Order in which a fresh page is populated. Hero always renders first.
    pub const INITIAL_ORDER: [Self; 4] = [Self::Hero, Self::Features, Self::Benefits, Self::Cta];

    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Hero => "hero",
            Self::Features => "features",
            Self::Benefits => "benefits",
            Self::Cta => "cta",
        }
    }

    /// Whether the section has a slot for a searched stock image.
    #[must_use]
    pub fn supports_image(self) -> bool {
        !matches!(self, Self::Cta)
    }
}

impl fmt::Display for ComponentKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ComponentStatus {
    Generated,
    Improved,
}

// =============================================================================
// CONTENT SHAPES
// =============================================================================

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ImageRef {
    /// Models often describe the picture without a URL to go with it.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
    pub alt: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CallToAction {
    pub text: String,
    pub link: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HeroContent {
    pub title: String,
    pub subtitle: String,
    pub description: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image: Option<ImageRef>,
    pub cta: CallToAction,
    /// Full-bleed background, filled in by image enhancement.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub background_image: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FeatureItem {
    pub title: String,
    pub description: String,
    pub icon: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FeaturesContent {
    pub title: String,
    pub description: String,
    pub items: Vec<FeatureItem>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub illustration: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BenefitItem {
    pub title: String,
    pub description: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image: Option<ImageRef>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BenefitsContent {
    pub title: String,
    pub description: String,
    pub items: Vec<BenefitItem>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub illustration: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CtaBullet {
    pub text: String,
    pub icon: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CtaContent {
    pub title: String,
    pub description: String,
    pub button: CallToAction,
    pub bullets: Vec<CtaBullet>,
}

/// Kind-specific section content.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum ComponentContent {
    Hero(HeroContent),
    Features(FeaturesContent),
    Benefits(BenefitsContent),
    Cta(CtaContent),
}

impl ComponentContent {
    /// Decode untagged model output as the shape for `kind`.
    ///
    /// # Errors
    ///
    /// Returns the serde error when a required field is missing or mistyped.
    pub fn from_value(kind: ComponentKind, value: serde_json::Value) -> Result<Self, serde_json::Error> {
        match kind {
            ComponentKind::Hero => serde_json::from_value(value).map(Self::Hero),
            ComponentKind::Features => serde_json::from_value(value).map(Self::Features),
            ComponentKind::Benefits => serde_json::from_value(value).map(Self::Benefits),
            ComponentKind::Cta => serde_json::from_value(value).map(Self::Cta),
        }
    }

    #[must_use]
    pub fn kind(&self) -> ComponentKind {
        match self {
            Self::Hero(_) => ComponentKind::Hero,
            Self::Features(_) => ComponentKind::Features,
            Self::Benefits(_) => ComponentKind::Benefits,
            Self::Cta(_) => ComponentKind::Cta,
        }
    }

    #[must_use]
    pub fn title(&self) -> &str {
        match self {
            Self::Hero(c) => &c.title,
            Self::Features(c) => &c.title,
            Self::Benefits(c) => &c.title,
            Self::Cta(c) => &c.title,
        }
    }

    /// Untagged JSON for this content, in the same shape the model is asked
    /// to produce.
    #[must_use]
    pub fn to_untagged_json(&self) -> serde_json::Value {
        let value = match self {
            Self::Hero(c) => serde_json::to_value(c),
            Self::Features(c) => serde_json::to_value(c),
            Self::Benefits(c) => serde_json::to_value(c),
            Self::Cta(c) => serde_json::to_value(c),
        };
        value.unwrap_or(serde_json::Value::Null)
    }

    /// Attach an image URL at the kind-specific slot. Returns `false` for
    /// kinds without one.
    pub fn attach_image(&mut self, url: String) -> bool {
        match self {
            Self::Hero(c) => c.background_image = Some(url),
            Self::Features(c) => c.illustration = Some(url),
            Self::Benefits(c) => c.illustration = Some(url),
            Self::Cta(_) => return false,
        }
        true
    }
}

// =============================================================================
// PAGE COMPONENT
// =============================================================================

/// A generated page section with identity and revision tracking.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageComponent {
    pub id: Uuid,
    pub content: ComponentContent,
    pub version: u32,
    pub status: ComponentStatus,
}

impl PageComponent {
    /// Wrap freshly generated content: new id, version 1.
    #[must_use]
    pub fn generated(content: ComponentContent) -> Self {
        Self { id: Uuid::new_v4(), content, version: 1, status: ComponentStatus::Generated }
    }

    /// Successor revision carrying `content`. Identity is preserved.
    #[must_use]
    pub fn improved(&self, content: ComponentContent) -> Self {
        Self { id: self.id, content, version: self.version + 1, status: ComponentStatus::Improved }
    }

    #[must_use]
    pub fn kind(&self) -> ComponentKind {
        self.content.kind()
    }
}

#[cfg(test)]
#[path = "component_test.rs"]
mod tests;
