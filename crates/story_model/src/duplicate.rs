//! Duplication helpers: fresh ids, provenance, and consistent id remapping

use crate::{Animation, Element, ElementId, Page, PageId};
use std::collections::HashMap;

/// Positional nudge applied to a duplicate that would land exactly on an
/// existing element, in editor units
pub const DUPLICATE_OFFSET: f32 = 10.0;

/// Duplicate an element under a fresh id.
///
/// `based_on` records the source id. While the copy's position collides with
/// any element in `existing`, it is nudged by `DUPLICATE_OFFSET` on both axes
/// so duplicates stay visibly distinguishable. Every animation in
/// `animations` that targets the source is cloned (fresh id) to target the
/// copy; animations targeting other elements are left untouched.
pub fn duplicate_element(
    source: &Element,
    existing: &[Element],
    animations: &[Animation],
) -> (Element, Vec<Animation>) {
    let mut copy = source.clone();
    let new_id = ElementId::new();
    copy.reassign_id(new_id);
    copy.based_on = Some(source.id());

    while existing.iter().any(|e| e.overlaps_position(&copy)) {
        copy.x += DUPLICATE_OFFSET;
        copy.y += DUPLICATE_OFFSET;
    }

    let cloned_animations = animations
        .iter()
        .filter(|animation| animation.targets_element(source.id()))
        .map(|animation| animation.cloned_for_target(new_id))
        .collect();

    (copy, cloned_animations)
}

/// Deep-clone a page under fresh identities.
///
/// A single remap table covers the page id, every element id (the background
/// and the saved default-background placeholder included), and every
/// animation target, so internal references stay consistent. Non-identity
/// fields are copied verbatim.
pub fn duplicate_page(page: &Page) -> Page {
    let mut remap: HashMap<ElementId, ElementId> = HashMap::new();
    for element in &page.elements {
        remap.insert(element.id(), ElementId::new());
    }
    if let Some(placeholder) = &page.default_background_element {
        remap.insert(placeholder.id(), ElementId::new());
    }

    let mut copy = page.clone();
    copy.reassign_id(PageId::new());

    for element in &mut copy.elements {
        let new_id = remap[&element.id()];
        element.reassign_id(new_id);
    }
    if let Some(placeholder) = &mut copy.default_background_element {
        let new_id = remap[&placeholder.id()];
        placeholder.reassign_id(new_id);
    }

    copy.animations = page
        .animations
        .iter()
        .map(|animation| animation.remapped(|id| remap.get(&id).copied()))
        .collect();

    copy
}
