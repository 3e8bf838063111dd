//! Page node and page-level invariant helpers

use crate::{Animation, Element, ElementId, ElementKind, PageId};
use serde::{Deserialize, Serialize};

/// Full-bleed page width in editor units
pub const PAGE_WIDTH: f32 = 412.0;

/// Full-bleed page height in editor units
pub const PAGE_HEIGHT: f32 = 618.0;

/// One screen of the story: an ordered stack of elements plus the animation
/// descriptors that play on entry.
///
/// Invariants: at most one element has `is_background` set, and it sits at
/// index 0; `default_background_element` is only populated while a real media
/// background occupies that slot (the saved placeholder lets a deleted
/// background fall back to the synthesized default).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Page {
    id: PageId,
    /// Elements in z-order; the background element, when present, is first
    pub elements: Vec<Element>,
    /// Saved placeholder backdrop while a real media background is set
    pub default_background_element: Option<Element>,
    /// Animation descriptors that play when the page is entered
    pub animations: Vec<Animation>,
    /// Page background color (CSS color string)
    pub background_color: Option<String>,
}

impl Page {
    /// Create an empty page with no elements
    pub fn new() -> Self {
        Self {
            id: PageId::new(),
            elements: Vec::new(),
            default_background_element: None,
            animations: Vec::new(),
            background_color: None,
        }
    }

    /// Create a page containing exactly one synthesized default background
    /// element with zero geometry.
    pub fn with_default_background() -> Self {
        let mut background = Element::new(ElementKind::Shape);
        background.is_background = true;
        background.is_default_background = true;

        let mut page = Self::new();
        page.elements.push(background);
        page
    }

    /// Get the page id
    pub fn id(&self) -> PageId {
        self.id
    }

    /// Re-mint this page's id. Used when cloning a page into a fresh identity.
    pub(crate) fn reassign_id(&mut self, id: PageId) {
        self.id = id;
    }

    /// Find an element by id
    pub fn element(&self, element_id: ElementId) -> Option<&Element> {
        self.elements.iter().find(|e| e.id() == element_id)
    }

    /// Find an element by id, mutably
    pub fn element_mut(&mut self, element_id: ElementId) -> Option<&mut Element> {
        self.elements.iter_mut().find(|e| e.id() == element_id)
    }

    /// Index of an element within the z-order
    pub fn element_index(&self, element_id: ElementId) -> Option<usize> {
        self.elements.iter().position(|e| e.id() == element_id)
    }

    /// The page's background element, if any
    pub fn background_element(&self) -> Option<&Element> {
        self.elements.iter().find(|e| e.is_background)
    }

    /// Whether the page's background is still the synthesized placeholder
    pub fn has_default_background(&self) -> bool {
        self.background_element()
            .map(|e| e.is_default_background)
            .unwrap_or(false)
    }

    /// Drop every animation target that no longer resolves to an element on
    /// this page, and drop descriptors whose target list empties out.
    pub fn prune_animations(&mut self) {
        let ids: Vec<ElementId> = self.elements.iter().map(|e| e.id()).collect();
        for animation in &mut self.animations {
            animation.targets.retain(|target| ids.contains(target));
        }
        self.animations.retain(|animation| !animation.targets.is_empty());
    }
}

impl Default for Page {
    fn default() -> Self {
        Self::new()
    }
}
