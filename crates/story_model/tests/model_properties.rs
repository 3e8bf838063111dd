//! Model-wide properties: duplication identity, remap consistency, snapshots

use proptest::prelude::*;
use story_model::{
    duplicate_element, duplicate_page, Animation, AnimationKind, Element, ElementId, ElementKind,
    Page, Story,
};

#[test]
fn test_story_round_trips_through_json() {
    let mut story = Story::with_first_page();
    let mut element = Element::new(ElementKind::Text);
    element.content = Some("Hello".to_string());
    let element_id = element.id();
    story.pages[0].elements.push(element);
    story.pages[0]
        .animations
        .push(Animation::new(AnimationKind::Bounce, vec![element_id]));
    story.selection = vec![element_id];

    let json = serde_json::to_string(&story).unwrap();
    let restored: Story = serde_json::from_str(&json).unwrap();

    assert_eq!(restored, story);
}

fn elements_at(positions: &[(f32, f32)]) -> Vec<Element> {
    positions
        .iter()
        .map(|&(x, y)| {
            let mut element = Element::new(ElementKind::Shape);
            element.x = x;
            element.y = y;
            element
        })
        .collect()
}

proptest! {
    #[test]
    fn prop_duplicate_lands_on_free_position(
        positions in proptest::collection::vec((-500.0f32..500.0, -500.0f32..500.0), 1..8),
        pick in any::<proptest::sample::Index>(),
    ) {
        let elements = elements_at(&positions);
        let source = pick.get(&elements).clone();

        let (copy, _) = duplicate_element(&source, &elements, &[]);

        prop_assert_ne!(copy.id(), source.id());
        prop_assert_eq!(copy.based_on, Some(source.id()));
        prop_assert!(elements.iter().all(|e| !e.overlaps_position(&copy)));
    }

    #[test]
    fn prop_duplicate_page_never_leaks_old_ids(count in 1usize..6) {
        let mut page = Page::with_default_background();
        let mut old_ids = vec![page.elements[0].id()];
        for _ in 0..count {
            let element = Element::new(ElementKind::Image);
            old_ids.push(element.id());
            page.animations.push(Animation::new(
                AnimationKind::FadeIn,
                vec![element.id()],
            ));
            page.elements.push(element);
        }

        let copy = duplicate_page(&page);

        prop_assert_ne!(copy.id(), page.id());
        for element in &copy.elements {
            prop_assert!(!old_ids.contains(&element.id()));
        }
        // Every rewritten target resolves inside the copy, and no old target
        // id survives the remap
        for animation in &copy.animations {
            for target in &animation.targets {
                prop_assert!(!old_ids.contains(target));
                prop_assert!(copy.element(*target).is_some());
            }
        }
    }

    #[test]
    fn prop_element_ids_unique_after_duplication(rounds in 1usize..10) {
        let source = Element::new(ElementKind::Sticker);
        let mut ids: Vec<ElementId> = vec![source.id()];

        for _ in 0..rounds {
            let (copy, _) = duplicate_element(&source, &[], &[]);
            prop_assert!(!ids.contains(&copy.id()));
            ids.push(copy.id());
        }
    }
}
