//! Story actions - the closed set of commands the reducer consumes

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use story_model::{Animation, Element, ElementId, ElementKind, ElementPatch, PageId};

/// Payload for creating a new element: the kind plus attribute overrides
/// applied over the registered defaults (overrides win).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ElementSpec {
    pub kind: ElementKind,
    pub attributes: ElementPatch,
}

impl ElementSpec {
    pub fn new(kind: ElementKind) -> Self {
        Self {
            kind,
            attributes: ElementPatch::default(),
        }
    }

    pub fn with_attributes(kind: ElementKind, attributes: ElementPatch) -> Self {
        Self { kind, attributes }
    }
}

/// Donor side of a combine: either an element already on a page, or a
/// detached element value (e.g. dragged in from a media library).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum DonorRef {
    ById(ElementId),
    ByValue(Box<Element>),
}

/// The closed set of story-editing commands.
///
/// Exhaustive matching in the reducer replaces a stringly-typed dispatch
/// table: an unknown action is unrepresentable. Unresolvable references in
/// payloads are silent no-ops at reduce time.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum StoryAction {
    /// Append a freshly created element to a page
    InsertElement { page_id: PageId, spec: ElementSpec },
    /// Remove an element, cascading to animations and selection
    DeleteElement { element_id: ElementId },
    /// Duplicate an element onto its own page, cloning its animations
    DuplicateElement { element_id: ElementId },
    /// Merge a donor's media onto a recipient element
    CombineElements {
        donor: DonorRef,
        recipient_id: ElementId,
    },
    /// Insert a new page with the default background; becomes current
    AddPage { position: Option<usize> },
    /// Deep-clone a page under fresh ids, inserted after the source
    DuplicatePage { page_id: PageId },
    /// Delete a page; refuses to delete the last one
    DeletePage { page_id: PageId },
    /// Switch the current page
    SetCurrentPage { page_id: PageId },
    /// Reorder a page within the reading order
    ArrangePage { page_id: PageId, position: usize },
    /// Reorder an element within the current page's z-order
    ArrangeElement {
        element_id: ElementId,
        position: usize,
    },
    /// Patch each resolvable element on the current page
    UpdateElements {
        element_ids: Vec<ElementId>,
        patch: ElementPatch,
    },
    /// Patch a page's non-identity properties
    UpdatePage {
        page_id: PageId,
        background_color: Option<String>,
    },
    /// Replace the selection
    SetSelection { element_ids: Vec<ElementId> },
    /// Add one element to the selection
    SelectElement { element_id: ElementId },
    /// Remove one element from the selection
    UnselectElement { element_id: ElementId },
    /// Toggle one element's membership in the selection
    ToggleElementInSelection { element_id: ElementId },
    /// Append animation descriptors to a page
    AddAnimations {
        page_id: PageId,
        animations: Vec<Animation>,
    },
    /// Patch story metadata
    UpdateStory {
        title: Option<String>,
        author: Option<String>,
        modified: Option<DateTime<Utc>>,
    },
}

impl StoryAction {
    /// Get a display name for this action
    pub fn display_name(&self) -> &'static str {
        match self {
            StoryAction::InsertElement { .. } => "Insert Element",
            StoryAction::DeleteElement { .. } => "Delete Element",
            StoryAction::DuplicateElement { .. } => "Duplicate Element",
            StoryAction::CombineElements { .. } => "Combine Elements",
            StoryAction::AddPage { .. } => "Add Page",
            StoryAction::DuplicatePage { .. } => "Duplicate Page",
            StoryAction::DeletePage { .. } => "Delete Page",
            StoryAction::SetCurrentPage { .. } => "Set Current Page",
            StoryAction::ArrangePage { .. } => "Arrange Page",
            StoryAction::ArrangeElement { .. } => "Arrange Element",
            StoryAction::UpdateElements { .. } => "Update Elements",
            StoryAction::UpdatePage { .. } => "Update Page",
            StoryAction::SetSelection { .. } => "Set Selection",
            StoryAction::SelectElement { .. } => "Select Element",
            StoryAction::UnselectElement { .. } => "Unselect Element",
            StoryAction::ToggleElementInSelection { .. } => "Toggle Selection",
            StoryAction::AddAnimations { .. } => "Add Animations",
            StoryAction::UpdateStory { .. } => "Update Story",
        }
    }
}
