//! Error types for story model operations

use crate::ElementKind;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum StoryModelError {
    /// The host never registered a definition for this kind. A programmer
    /// or configuration error, never bad runtime input.
    #[error("Element kind not registered: {}", .0.display_name())]
    UnregisteredKind(ElementKind),
}

pub type Result<T> = std::result::Result<T, StoryModelError>;
