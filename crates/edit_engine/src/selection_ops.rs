//! Selection reducer operations
//!
//! Selection ids always refer to elements on the current page. The
//! background element is only selectable alone: it is dropped from any
//! multi-selection, and selecting it replaces the whole selection.

use story_model::{ElementId, Story};

fn background_id(story: &Story) -> Option<ElementId> {
    story
        .current_page()
        .and_then(|page| page.background_element())
        .map(|element| element.id())
}

fn on_current_page(story: &Story, element_id: ElementId) -> bool {
    story
        .current_page()
        .map(|page| page.element(element_id).is_some())
        .unwrap_or(false)
}

/// Replace the selection. Ids not on the current page are dropped, as is the
/// background element when anything else is selected with it.
pub(crate) fn set_selection(story: &mut Story, element_ids: &[ElementId]) {
    let background = background_id(story);

    let mut selection: Vec<ElementId> = Vec::new();
    for &element_id in element_ids {
        if on_current_page(story, element_id) && !selection.contains(&element_id) {
            selection.push(element_id);
        }
    }
    if selection.len() > 1 {
        selection.retain(|&id| Some(id) != background);
    }

    story.selection = selection;
}

/// Add one element to the selection
pub(crate) fn select_element(story: &mut Story, element_id: ElementId) {
    if !on_current_page(story, element_id) || story.selection.contains(&element_id) {
        return;
    }

    let background = background_id(story);
    if Some(element_id) == background {
        story.selection = vec![element_id];
        return;
    }

    story.selection.retain(|&id| Some(id) != background);
    story.selection.push(element_id);
}

/// Remove one element from the selection
pub(crate) fn unselect_element(story: &mut Story, element_id: ElementId) {
    story.selection.retain(|&id| id != element_id);
}

/// Toggle one element's membership in the selection
pub(crate) fn toggle_element_in_selection(story: &mut Story, element_id: ElementId) {
    if story.selection.contains(&element_id) {
        unselect_element(story, element_id);
    } else {
        select_element(story, element_id);
    }
}
