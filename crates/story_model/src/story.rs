//! Story root aggregate and story-level lookups

use crate::{Element, ElementId, Page, PageId};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Story metadata
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct StoryMetadata {
    pub title: Option<String>,
    pub author: Option<String>,
    pub created: Option<DateTime<Utc>>,
    pub modified: Option<DateTime<Utc>>,
}

/// The root document aggregate: ordered pages, the current page, and the
/// selection on it.
///
/// Invariants: `current` names an existing page whenever `pages` is
/// non-empty; every selection id resolves to an element on the current page;
/// element ids are unique story-wide.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Story {
    /// Pages in reading order
    pub pages: Vec<Page>,
    /// The page currently being edited
    pub current: Option<PageId>,
    /// Ids of the selected elements on the current page
    pub selection: Vec<ElementId>,
    pub metadata: StoryMetadata,
}

impl Story {
    /// Create a story with no pages
    pub fn new() -> Self {
        Self {
            pages: Vec::new(),
            current: None,
            selection: Vec::new(),
            metadata: StoryMetadata::default(),
        }
    }

    /// Create a story with a single page carrying the default background,
    /// set as the current page.
    pub fn with_first_page() -> Self {
        let page = Page::with_default_background();
        let page_id = page.id();
        let mut story = Self::new();
        story.pages.push(page);
        story.current = Some(page_id);
        story
    }

    /// Find a page by id
    pub fn page(&self, page_id: PageId) -> Option<&Page> {
        self.pages.iter().find(|p| p.id() == page_id)
    }

    /// Find a page by id, mutably
    pub fn page_mut(&mut self, page_id: PageId) -> Option<&mut Page> {
        self.pages.iter_mut().find(|p| p.id() == page_id)
    }

    /// Index of a page within the reading order
    pub fn page_index(&self, page_id: PageId) -> Option<usize> {
        self.pages.iter().position(|p| p.id() == page_id)
    }

    /// The current page, if set
    pub fn current_page(&self) -> Option<&Page> {
        self.current.and_then(|id| self.page(id))
    }

    /// The current page, mutably
    pub fn current_page_mut(&mut self) -> Option<&mut Page> {
        let id = self.current?;
        self.page_mut(id)
    }

    /// Find an element anywhere in the story, with its owning page
    pub fn find_element(&self, element_id: ElementId) -> Option<(&Page, &Element)> {
        self.pages.iter().find_map(|page| {
            page.element(element_id).map(|element| (page, element))
        })
    }

    /// All element ids in the story, in page/z order
    pub fn element_ids(&self) -> Vec<ElementId> {
        self.pages
            .iter()
            .flat_map(|page| page.elements.iter().map(|e| e.id()))
            .collect()
    }

    /// Drop selection ids that no longer resolve on the current page
    pub fn prune_selection(&mut self) {
        let valid: Vec<ElementId> = self
            .current_page()
            .map(|page| page.elements.iter().map(|e| e.id()).collect())
            .unwrap_or_default();
        self.selection.retain(|id| valid.contains(id));
    }
}

impl Default for Story {
    fn default() -> Self {
        Self::new()
    }
}
