//! Page- and story-level reducer operations

use chrono::{DateTime, Utc};
use story_model::{duplicate_page as clone_page, Animation, Page, PageId, Story};

/// Insert a new page with the default background. With no explicit position
/// it lands right after the current page. The new page becomes current.
pub(crate) fn add_page(story: &mut Story, position: Option<usize>) {
    let page = Page::with_default_background();
    let page_id = page.id();

    let index = match position {
        Some(position) => position.min(story.pages.len()),
        None => story
            .current
            .and_then(|id| story.page_index(id))
            .map(|index| index + 1)
            .unwrap_or(story.pages.len()),
    };

    story.pages.insert(index, page);
    story.current = Some(page_id);
    story.selection.clear();
}

/// Deep-clone a page under fresh ids, inserted after the source. The copy
/// becomes the current page. Unknown page: no-op.
pub(crate) fn duplicate_page(story: &mut Story, page_id: PageId) {
    let Some(index) = story.page_index(page_id) else {
        return;
    };

    let copy = clone_page(&story.pages[index]);
    let copy_id = copy.id();
    story.pages.insert(index + 1, copy);
    story.current = Some(copy_id);
    story.selection.clear();
}

/// Delete a page. The last remaining page cannot be deleted. Deleting the
/// current page moves `current` to the nearest neighbor.
pub(crate) fn delete_page(story: &mut Story, page_id: PageId) {
    if story.pages.len() <= 1 {
        return;
    }
    let Some(index) = story.page_index(page_id) else {
        return;
    };

    story.pages.remove(index);

    if story.current == Some(page_id) {
        let neighbor = index.min(story.pages.len() - 1);
        story.current = Some(story.pages[neighbor].id());
        story.selection.clear();
    }
}

/// Switch the current page. Unknown page: no-op. Changing pages clears the
/// selection, which only ever refers to the current page.
pub(crate) fn set_current_page(story: &mut Story, page_id: PageId) {
    if story.page(page_id).is_none() {
        return;
    }
    if story.current != Some(page_id) {
        story.current = Some(page_id);
        story.selection.clear();
    }
}

/// Reorder a page within the reading order; the position is clamped
pub(crate) fn arrange_page(story: &mut Story, page_id: PageId, position: usize) {
    let Some(index) = story.page_index(page_id) else {
        return;
    };
    let target = position.min(story.pages.len() - 1);
    if target == index {
        return;
    }

    let page = story.pages.remove(index);
    story.pages.insert(target, page);
}

/// Patch a page's non-identity properties
pub(crate) fn update_page(story: &mut Story, page_id: PageId, background_color: Option<String>) {
    let Some(page) = story.page_mut(page_id) else {
        return;
    };
    if let Some(color) = background_color {
        page.background_color = Some(color);
    }
}

/// Append animation descriptors to a page. Targets are filtered to elements
/// actually on that page; descriptors left with no targets are dropped.
pub(crate) fn add_animations(story: &mut Story, page_id: PageId, animations: &[Animation]) {
    let Some(page) = story.page_mut(page_id) else {
        return;
    };

    for animation in animations {
        let mut animation = animation.clone();
        animation
            .targets
            .retain(|&target| page.element(target).is_some());
        if !animation.targets.is_empty() {
            page.animations.push(animation);
        }
    }
}

/// Patch story metadata. The caller supplies the modification timestamp so
/// the reducer stays deterministic.
pub(crate) fn update_story(
    story: &mut Story,
    title: Option<String>,
    author: Option<String>,
    modified: Option<DateTime<Utc>>,
) {
    if let Some(title) = title {
        story.metadata.title = Some(title);
    }
    if let Some(author) = author {
        story.metadata.author = Some(author);
    }
    if let Some(modified) = modified {
        story.metadata.modified = Some(modified);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use story_model::{AnimationKind, Element, ElementId, ElementKind};

    fn two_page_story() -> Story {
        let mut story = Story::with_first_page();
        add_page(&mut story, None);
        story
    }

    #[test]
    fn test_add_page_becomes_current() {
        let mut story = Story::with_first_page();
        let first_id = story.pages[0].id();

        add_page(&mut story, None);

        assert_eq!(story.pages.len(), 2);
        assert_ne!(story.current, Some(first_id));
        assert_eq!(story.current, Some(story.pages[1].id()));
        // Every new page starts with its default background
        assert!(story.pages[1].has_default_background());
    }

    #[test]
    fn test_add_page_at_position() {
        let mut story = two_page_story();

        add_page(&mut story, Some(0));

        assert_eq!(story.current, Some(story.pages[0].id()));
    }

    #[test]
    fn test_duplicate_page_inserts_copy_after_source() {
        let mut story = Story::with_first_page();
        let page_id = story.pages[0].id();

        duplicate_page(&mut story, page_id);

        assert_eq!(story.pages.len(), 2);
        assert_ne!(story.pages[1].id(), page_id);
        assert_eq!(story.current, Some(story.pages[1].id()));
    }

    #[test]
    fn test_duplicate_unknown_page_is_noop() {
        let mut story = Story::with_first_page();
        let before = story.clone();

        duplicate_page(&mut story, PageId::new());

        assert_eq!(story, before);
    }

    #[test]
    fn test_delete_last_page_is_refused() {
        let mut story = Story::with_first_page();
        let page_id = story.pages[0].id();
        let before = story.clone();

        delete_page(&mut story, page_id);

        assert_eq!(story, before);
    }

    #[test]
    fn test_delete_current_page_moves_to_neighbor() {
        let mut story = two_page_story();
        let second_id = story.pages[1].id();
        let first_id = story.pages[0].id();
        assert_eq!(story.current, Some(second_id));

        delete_page(&mut story, second_id);

        assert_eq!(story.pages.len(), 1);
        assert_eq!(story.current, Some(first_id));
    }

    #[test]
    fn test_set_current_page_clears_selection() {
        let mut story = two_page_story();
        let first_id = story.pages[0].id();
        story.selection = vec![story.pages[1].elements[0].id()];

        set_current_page(&mut story, first_id);

        assert_eq!(story.current, Some(first_id));
        assert!(story.selection.is_empty());
    }

    #[test]
    fn test_set_current_page_unknown_is_noop() {
        let mut story = two_page_story();
        let before = story.clone();

        set_current_page(&mut story, PageId::new());

        assert_eq!(story, before);
    }

    #[test]
    fn test_arrange_page_clamps_position() {
        let mut story = two_page_story();
        let first_id = story.pages[0].id();

        arrange_page(&mut story, first_id, 99);

        assert_eq!(story.pages[1].id(), first_id);
    }

    #[test]
    fn test_add_animations_filters_targets_to_page() {
        let mut story = Story::with_first_page();
        let page_id = story.pages[0].id();
        let element = Element::new(ElementKind::Image);
        let element_id = element.id();
        story.pages[0].elements.push(element);

        let valid = Animation::new(AnimationKind::FadeIn, vec![element_id, ElementId::new()]);
        let dangling = Animation::new(AnimationKind::Spin, vec![ElementId::new()]);
        add_animations(&mut story, page_id, &[valid, dangling]);

        let animations = &story.pages[0].animations;
        assert_eq!(animations.len(), 1);
        assert_eq!(animations[0].targets, vec![element_id]);
    }

    #[test]
    fn test_update_story_patches_metadata() {
        let mut story = Story::with_first_page();
        let stamp = Utc::now();

        update_story(
            &mut story,
            Some("Holiday".to_string()),
            None,
            Some(stamp),
        );

        assert_eq!(story.metadata.title.as_deref(), Some("Holiday"));
        assert!(story.metadata.author.is_none());
        assert_eq!(story.metadata.modified, Some(stamp));
    }
}
