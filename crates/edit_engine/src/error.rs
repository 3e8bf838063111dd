//! Error types for editing operations

use thiserror::Error;

#[derive(Debug, Error)]
pub enum EditError {
    #[error("Undo stack is empty")]
    UndoStackEmpty,

    #[error("Redo stack is empty")]
    RedoStackEmpty,

    #[error("Story model error: {0}")]
    Model(#[from] story_model::StoryModelError),
}

pub type Result<T> = std::result::Result<T, EditError>;
