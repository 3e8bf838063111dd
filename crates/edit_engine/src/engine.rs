//! Story engine - owns the current story and drives dispatch

use crate::middleware::dispatch_through;
use crate::{reduce, DonorRef, ElementSpec, History, Middleware, Result, StoryAction};
use chrono::Utc;
use story_model::{
    Animation, ElementId, ElementPatch, ElementRegistry, PageId, Story,
};

/// The main editing engine: current story, element registry, snapshot
/// history, and the middleware pipeline around dispatch.
///
/// One method per command; each builds the corresponding action and runs it
/// through `dispatch`. The engine is constructed once and passed by
/// reference wherever commands are issued.
pub struct StoryEngine {
    /// Current story snapshot
    story: Story,
    /// Element-type registry, populated before the engine is used
    registry: ElementRegistry,
    /// Undo/redo history
    history: History,
    /// Interceptors around the reducer, in registration order
    middlewares: Vec<Box<dyn Middleware>>,
}

impl StoryEngine {
    /// Create an engine with a single-page story
    pub fn new(registry: ElementRegistry) -> Self {
        Self::with_story(Story::with_first_page(), registry)
    }

    /// Create an engine around an existing story
    pub fn with_story(story: Story, registry: ElementRegistry) -> Self {
        Self {
            story,
            registry,
            history: History::new(),
            middlewares: Vec::new(),
        }
    }

    /// Append a middleware to the dispatch pipeline
    pub fn add_middleware(&mut self, middleware: Box<dyn Middleware>) {
        self.middlewares.push(middleware);
    }

    /// Get the current story snapshot
    pub fn story(&self) -> &Story {
        &self.story
    }

    /// Get the element registry
    pub fn registry(&self) -> &ElementRegistry {
        &self.registry
    }

    /// Dispatch an action through the middleware pipeline and the reducer.
    ///
    /// A dispatch that leaves the story unchanged records no history entry,
    /// so silent no-ops never pollute the undo stack.
    pub fn dispatch(&mut self, action: StoryAction) -> Result<()> {
        let registry = &self.registry;
        let mut terminal =
            |story: &Story, action: &StoryAction| reduce(story, registry, action);
        let next = dispatch_through(&self.middlewares, &self.story, &action, &mut terminal)?;

        if next != self.story {
            let prior = std::mem::replace(&mut self.story, next);
            self.history.record(prior);
        }
        Ok(())
    }

    /// Restore the story as it was before the last committed mutation
    pub fn undo(&mut self) -> Result<()> {
        self.story = self.history.undo(self.story.clone())?;
        Ok(())
    }

    /// Re-apply the last undone mutation
    pub fn redo(&mut self) -> Result<()> {
        self.story = self.history.redo(self.story.clone())?;
        Ok(())
    }

    /// Check if undo is available
    pub fn can_undo(&self) -> bool {
        self.history.can_undo()
    }

    /// Check if redo is available
    pub fn can_redo(&self) -> bool {
        self.history.can_redo()
    }

    // One method per command.

    pub fn insert_element(&mut self, page_id: PageId, spec: ElementSpec) -> Result<()> {
        self.dispatch(StoryAction::InsertElement { page_id, spec })
    }

    pub fn delete_element(&mut self, element_id: ElementId) -> Result<()> {
        self.dispatch(StoryAction::DeleteElement { element_id })
    }

    pub fn duplicate_element(&mut self, element_id: ElementId) -> Result<()> {
        self.dispatch(StoryAction::DuplicateElement { element_id })
    }

    pub fn combine_elements(&mut self, donor: DonorRef, recipient_id: ElementId) -> Result<()> {
        self.dispatch(StoryAction::CombineElements {
            donor,
            recipient_id,
        })
    }

    pub fn add_page(&mut self, position: Option<usize>) -> Result<()> {
        self.dispatch(StoryAction::AddPage { position })
    }

    pub fn duplicate_page(&mut self, page_id: PageId) -> Result<()> {
        self.dispatch(StoryAction::DuplicatePage { page_id })
    }

    pub fn delete_page(&mut self, page_id: PageId) -> Result<()> {
        self.dispatch(StoryAction::DeletePage { page_id })
    }

    pub fn set_current_page(&mut self, page_id: PageId) -> Result<()> {
        self.dispatch(StoryAction::SetCurrentPage { page_id })
    }

    pub fn arrange_page(&mut self, page_id: PageId, position: usize) -> Result<()> {
        self.dispatch(StoryAction::ArrangePage { page_id, position })
    }

    pub fn arrange_element(&mut self, element_id: ElementId, position: usize) -> Result<()> {
        self.dispatch(StoryAction::ArrangeElement {
            element_id,
            position,
        })
    }

    pub fn update_elements(
        &mut self,
        element_ids: Vec<ElementId>,
        patch: ElementPatch,
    ) -> Result<()> {
        self.dispatch(StoryAction::UpdateElements { element_ids, patch })
    }

    pub fn update_page(
        &mut self,
        page_id: PageId,
        background_color: Option<String>,
    ) -> Result<()> {
        self.dispatch(StoryAction::UpdatePage {
            page_id,
            background_color,
        })
    }

    pub fn set_selection(&mut self, element_ids: Vec<ElementId>) -> Result<()> {
        self.dispatch(StoryAction::SetSelection { element_ids })
    }

    pub fn select_element(&mut self, element_id: ElementId) -> Result<()> {
        self.dispatch(StoryAction::SelectElement { element_id })
    }

    pub fn unselect_element(&mut self, element_id: ElementId) -> Result<()> {
        self.dispatch(StoryAction::UnselectElement { element_id })
    }

    pub fn toggle_element_in_selection(&mut self, element_id: ElementId) -> Result<()> {
        self.dispatch(StoryAction::ToggleElementInSelection { element_id })
    }

    pub fn add_animations(&mut self, page_id: PageId, animations: Vec<Animation>) -> Result<()> {
        self.dispatch(StoryAction::AddAnimations {
            page_id,
            animations,
        })
    }

    /// Patch story metadata, stamping the modification time at dispatch so
    /// the reducer itself stays pure.
    pub fn update_story(&mut self, title: Option<String>, author: Option<String>) -> Result<()> {
        self.dispatch(StoryAction::UpdateStory {
            title,
            author,
            modified: Some(Utc::now()),
        })
    }
}
