//! The pure story reducer
//!
//! `reduce` is the single transition function over the story aggregate: it
//! clones the input, applies the action to the clone, and returns it. All
//! unresolvable references leave the clone untouched, so callers can detect
//! no-ops by comparing snapshots. The only error is element creation with an
//! unregistered kind, which indicates a missing registration rather than bad
//! runtime input.

use crate::{element_ops, page_ops, selection_ops, Result, StoryAction};
use story_model::{ElementRegistry, Story};

/// Apply one action to a story, producing the next snapshot
pub fn reduce(story: &Story, registry: &ElementRegistry, action: &StoryAction) -> Result<Story> {
    let mut next = story.clone();

    match action {
        StoryAction::InsertElement { page_id, spec } => {
            element_ops::insert_element(&mut next, registry, *page_id, spec)?;
        }
        StoryAction::DeleteElement { element_id } => {
            element_ops::delete_element(&mut next, *element_id);
        }
        StoryAction::DuplicateElement { element_id } => {
            element_ops::duplicate_element(&mut next, *element_id);
        }
        StoryAction::CombineElements { donor, recipient_id } => {
            element_ops::combine_elements(&mut next, donor, *recipient_id);
        }
        StoryAction::AddPage { position } => {
            page_ops::add_page(&mut next, *position);
        }
        StoryAction::DuplicatePage { page_id } => {
            page_ops::duplicate_page(&mut next, *page_id);
        }
        StoryAction::DeletePage { page_id } => {
            page_ops::delete_page(&mut next, *page_id);
        }
        StoryAction::SetCurrentPage { page_id } => {
            page_ops::set_current_page(&mut next, *page_id);
        }
        StoryAction::ArrangePage { page_id, position } => {
            page_ops::arrange_page(&mut next, *page_id, *position);
        }
        StoryAction::ArrangeElement { element_id, position } => {
            element_ops::arrange_element(&mut next, *element_id, *position);
        }
        StoryAction::UpdateElements { element_ids, patch } => {
            element_ops::update_elements(&mut next, element_ids, patch);
        }
        StoryAction::UpdatePage {
            page_id,
            background_color,
        } => {
            page_ops::update_page(&mut next, *page_id, background_color.clone());
        }
        StoryAction::SetSelection { element_ids } => {
            selection_ops::set_selection(&mut next, element_ids);
        }
        StoryAction::SelectElement { element_id } => {
            selection_ops::select_element(&mut next, *element_id);
        }
        StoryAction::UnselectElement { element_id } => {
            selection_ops::unselect_element(&mut next, *element_id);
        }
        StoryAction::ToggleElementInSelection { element_id } => {
            selection_ops::toggle_element_in_selection(&mut next, *element_id);
        }
        StoryAction::AddAnimations { page_id, animations } => {
            page_ops::add_animations(&mut next, *page_id, animations);
        }
        StoryAction::UpdateStory {
            title,
            author,
            modified,
        } => {
            page_ops::update_story(&mut next, title.clone(), author.clone(), *modified);
        }
    }

    Ok(next)
}
