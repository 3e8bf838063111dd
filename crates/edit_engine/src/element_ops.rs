//! Element-level reducer operations

use crate::{DonorRef, ElementSpec, Result};
use story_model::{
    duplicate_element as clone_element, Element, ElementId, ElementPatch, ElementRegistry, PageId,
    Story, DEFAULT_FOCAL, PAGE_HEIGHT, PAGE_WIDTH,
};

/// Append a freshly created element to the given page. Unknown page: no-op.
/// The new element becomes the selection when the page is current.
pub(crate) fn insert_element(
    story: &mut Story,
    registry: &ElementRegistry,
    page_id: PageId,
    spec: &ElementSpec,
) -> Result<()> {
    let current = story.current;
    let Some(page) = story.page_mut(page_id) else {
        return Ok(());
    };

    let element = registry.create_element(spec.kind, &spec.attributes)?;
    let element_id = element.id();
    page.elements.push(element);

    if current == Some(page_id) {
        story.selection = vec![element_id];
    }
    Ok(())
}

/// Remove an element from its page. A deleted real media background restores
/// the saved placeholder into slot 0. Animations and selection cascade.
pub(crate) fn delete_element(story: &mut Story, element_id: ElementId) {
    let Some(page_index) = story
        .pages
        .iter()
        .position(|page| page.element(element_id).is_some())
    else {
        return;
    };

    let page = &mut story.pages[page_index];
    let Some(index) = page.element_index(element_id) else {
        return;
    };
    let removed = page.elements.remove(index);

    if removed.is_background && !removed.is_default_background {
        if let Some(placeholder) = page.default_background_element.take() {
            page.elements.insert(0, placeholder);
        }
    }

    page.prune_animations();
    story.selection.retain(|&id| id != element_id);
}

/// Duplicate an element onto its own page, right after the source. The
/// background element is not duplicatable. Animations targeting the source
/// are cloned for the copy.
pub(crate) fn duplicate_element(story: &mut Story, element_id: ElementId) {
    let Some(page_index) = story
        .pages
        .iter()
        .position(|page| page.element(element_id).is_some())
    else {
        return;
    };

    let page_id = story.pages[page_index].id();
    let page = &mut story.pages[page_index];
    let Some(index) = page.element_index(element_id) else {
        return;
    };
    if page.elements[index].is_background {
        return;
    }

    let source = page.elements[index].clone();
    let (copy, cloned_animations) = clone_element(&source, &page.elements, &page.animations);
    let copy_id = copy.id();

    page.elements.insert(index + 1, copy);
    page.animations.extend(cloned_animations);

    if story.current == Some(page_id) {
        story.selection = vec![copy_id];
    }
}

/// Merge a donor's media properties onto a recipient element.
///
/// No-op when the recipient or an id-referenced donor does not resolve, when
/// donor and recipient are the same element, or when the donor carries no
/// resource. Combining into the default background promotes it to a real
/// media background filling the page, and saves a fresh placeholder so the
/// page can fall back when that background is deleted. Focal y is not copied:
/// vertical framing is re-derived for the new aspect ratio, so it resets to
/// the midpoint.
pub(crate) fn combine_elements(story: &mut Story, donor: &DonorRef, recipient_id: ElementId) {
    let Some(recipient_page_index) = story
        .pages
        .iter()
        .position(|page| page.element(recipient_id).is_some())
    else {
        return;
    };

    let (donor_value, donor_id): (Element, Option<ElementId>) = match donor {
        DonorRef::ById(id) => {
            if *id == recipient_id {
                return;
            }
            match story.find_element(*id) {
                Some((_, element)) => (element.clone(), Some(*id)),
                None => return,
            }
        }
        DonorRef::ByValue(element) => ((**element).clone(), None),
    };

    let Some(resource) = donor_value.resource.clone() else {
        return;
    };

    let page = &mut story.pages[recipient_page_index];
    let Some(recipient) = page.element_mut(recipient_id) else {
        return;
    };

    let was_default_background = recipient.is_default_background;
    let placeholder = was_default_background.then(|| recipient.cloned_with_fresh_id());

    if was_default_background {
        recipient.is_default_background = false;
        recipient.x = 0.0;
        recipient.y = 0.0;
        recipient.width = PAGE_WIDTH;
        recipient.height = PAGE_HEIGHT;
    }

    recipient.kind = donor_value.kind;
    recipient.resource = Some(resource);
    recipient.scale = donor_value.scale;
    recipient.flip = donor_value.flip;
    recipient.focal_x = donor_value.focal_x;
    recipient.focal_y = DEFAULT_FOCAL;
    recipient.background_overlay = None;

    if let Some(placeholder) = placeholder {
        page.default_background_element = Some(placeholder);
    }

    if let Some(donor_id) = donor_id {
        delete_element(story, donor_id);
    }
}

/// Reorder an element within the current page's z-order. The background
/// element is pinned at index 0 and nothing may displace it.
pub(crate) fn arrange_element(story: &mut Story, element_id: ElementId, position: usize) {
    let Some(page) = story.current_page_mut() else {
        return;
    };
    let Some(index) = page.element_index(element_id) else {
        return;
    };
    if page.elements[index].is_background {
        return;
    }

    let floor = usize::from(page.elements[0].is_background);
    let target = position.clamp(floor, page.elements.len() - 1);
    if target == index {
        return;
    }

    let element = page.elements.remove(index);
    page.elements.insert(target, element);
}

/// Apply a patch to each resolvable element on the current page
pub(crate) fn update_elements(story: &mut Story, element_ids: &[ElementId], patch: &ElementPatch) {
    let Some(page) = story.current_page_mut() else {
        return;
    };
    for &element_id in element_ids {
        if let Some(element) = page.element_mut(element_id) {
            patch.apply(element);
        }
    }
}
