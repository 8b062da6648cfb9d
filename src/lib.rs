//! Landing-page builder core: editor history plus AI section generation.

pub mod component;
pub mod context;
pub mod error;
pub mod history;
pub mod image;
pub mod llm;
pub mod services;
pub mod state;

pub use component::{ComponentContent, ComponentKind, ComponentStatus, PageComponent};
pub use context::{Brand, BusinessContext};
pub use error::ErrorCode;
pub use history::{HistoryManager, MAX_HISTORY};
pub use services::generation::{GenerationError, GenerationPipeline, PipelineConfig};
pub use state::{EditorMetadata, EditorState};
