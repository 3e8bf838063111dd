//! End-to-end engine flows: dispatch, history, and persistence snapshots

use edit_engine::{
    ActionLogger, DonorRef, EditError, ElementSpec, StoryAction, StoryEngine,
};
use proptest::prelude::*;
use story_model::{
    Element, ElementId, ElementKind, ElementPatch, ElementRegistry, Resource, Story,
    StoryModelError,
};

fn engine() -> StoryEngine {
    StoryEngine::new(ElementRegistry::with_builtin_kinds())
}

fn current_page_id(engine: &StoryEngine) -> story_model::PageId {
    engine.story().current.unwrap()
}

#[test]
fn test_insert_element_mints_id_and_selects() {
    let mut engine = engine();
    let page_id = current_page_id(&engine);

    engine
        .insert_element(page_id, ElementSpec::new(ElementKind::Text))
        .unwrap();

    let story = engine.story();
    let page = story.current_page().unwrap();
    assert_eq!(page.elements.len(), 2);
    let inserted = &page.elements[1];
    assert_eq!(inserted.kind, ElementKind::Text);
    assert_eq!(story.selection, vec![inserted.id()]);
}

#[test]
fn test_insert_element_unknown_page_is_silent_noop() {
    let mut engine = engine();
    let before = engine.story().clone();

    engine
        .insert_element(story_model::PageId::new(), ElementSpec::new(ElementKind::Text))
        .unwrap();

    assert_eq!(engine.story(), &before);
    assert!(!engine.can_undo());
}

#[test]
fn test_insert_element_unregistered_kind_fails_fast() {
    let mut engine = StoryEngine::new(ElementRegistry::new());
    let page_id = current_page_id(&engine);

    let err = engine
        .insert_element(page_id, ElementSpec::new(ElementKind::Sticker))
        .unwrap_err();

    assert!(matches!(
        err,
        EditError::Model(StoryModelError::UnregisteredKind(ElementKind::Sticker))
    ));
}

#[test]
fn test_undo_restores_prior_snapshot() {
    let mut engine = engine();
    let page_id = current_page_id(&engine);
    let before = engine.story().clone();

    engine
        .insert_element(page_id, ElementSpec::new(ElementKind::Shape))
        .unwrap();
    assert_ne!(engine.story(), &before);

    engine.undo().unwrap();
    assert_eq!(engine.story(), &before);
}

#[test]
fn test_redo_requires_prior_undo_and_is_cleared_by_mutation() {
    let mut engine = engine();
    let page_id = current_page_id(&engine);

    assert!(matches!(engine.redo(), Err(EditError::RedoStackEmpty)));

    engine
        .insert_element(page_id, ElementSpec::new(ElementKind::Shape))
        .unwrap();
    let after_insert = engine.story().clone();

    engine.undo().unwrap();
    assert!(engine.can_redo());

    engine.redo().unwrap();
    assert_eq!(engine.story(), &after_insert);

    // A fresh mutation after an undo invalidates the forward stack
    engine.undo().unwrap();
    engine
        .insert_element(page_id, ElementSpec::new(ElementKind::Text))
        .unwrap();
    assert!(!engine.can_redo());
}

#[test]
fn test_noop_dispatch_records_no_history() {
    let mut engine = engine();

    engine.delete_element(ElementId::new()).unwrap();

    assert!(!engine.can_undo());
}

#[test]
fn test_combine_elements_through_engine() {
    let mut engine = engine();
    let page_id = current_page_id(&engine);
    let background_id = engine.story().pages[0].elements[0].id();

    let mut donor = Element::new(ElementKind::Image);
    donor.resource = Some(Resource::new("https://cdn.example/beach.jpg", 1200, 800));
    engine
        .combine_elements(DonorRef::ByValue(Box::new(donor)), background_id)
        .unwrap();

    let page = engine.story().page(page_id).unwrap();
    assert!(!page.has_default_background());
    assert!(page.default_background_element.is_some());
    assert!(page
        .element(background_id)
        .unwrap()
        .resource
        .is_some());
}

#[test]
fn test_duplicate_page_action_keeps_references_consistent() {
    let mut engine = engine();
    let page_id = current_page_id(&engine);

    engine
        .insert_element(page_id, ElementSpec::new(ElementKind::Image))
        .unwrap();
    let element_id = engine.story().selection[0];
    engine
        .add_animations(
            page_id,
            vec![story_model::Animation::new(
                story_model::AnimationKind::FadeIn,
                vec![element_id],
            )],
        )
        .unwrap();

    engine.duplicate_page(page_id).unwrap();

    let copy = &engine.story().pages[1];
    assert_ne!(copy.id(), page_id);
    // The animation target follows the remapped element, never the old id
    assert_eq!(copy.animations.len(), 1);
    assert_ne!(copy.animations[0].targets, vec![element_id]);
    assert!(copy.element(copy.animations[0].targets[0]).is_some());
}

#[test]
fn test_update_story_stamps_modified() {
    let mut engine = engine();

    engine
        .update_story(Some("Summer Recap".to_string()), None)
        .unwrap();

    let metadata = &engine.story().metadata;
    assert_eq!(metadata.title.as_deref(), Some("Summer Recap"));
    assert!(metadata.modified.is_some());
}

#[test]
fn test_dispatch_with_logger_middleware() {
    let mut engine = engine();
    engine.add_middleware(Box::new(ActionLogger));

    engine.dispatch(StoryAction::AddPage { position: None }).unwrap();

    assert_eq!(engine.story().pages.len(), 2);
}

#[test]
fn test_update_elements_through_engine() {
    let mut engine = engine();
    let page_id = current_page_id(&engine);
    engine
        .insert_element(page_id, ElementSpec::new(ElementKind::Text))
        .unwrap();
    let element_id = engine.story().selection[0];

    let mut patch = ElementPatch::default();
    patch.rotation_angle = Some(45.0);
    engine.update_elements(vec![element_id], patch).unwrap();

    let element = engine.story().current_page().unwrap().element(element_id);
    assert_eq!(element.unwrap().rotation_angle, 45.0);
}

#[test]
fn test_story_snapshot_survives_serialization() {
    let mut engine = engine();
    let page_id = current_page_id(&engine);
    engine
        .insert_element(
            page_id,
            ElementSpec::with_attributes(
                ElementKind::Image,
                ElementPatch::default()
                    .at(24.0, 48.0)
                    .with_resource(Resource::new("https://cdn.example/dog.gif", 480, 270)),
            ),
        )
        .unwrap();

    let json = serde_json::to_string(engine.story()).unwrap();
    let restored: Story = serde_json::from_str(&json).unwrap();

    assert_eq!(&restored, engine.story());
}

fn assert_background_invariants(story: &Story) {
    for page in &story.pages {
        let backgrounds = page.elements.iter().filter(|e| e.is_background).count();
        assert!(backgrounds <= 1, "page has {backgrounds} background elements");

        let has_default = page.elements.iter().any(|e| e.is_default_background);
        assert!(
            !(has_default && page.default_background_element.is_some()),
            "default background and saved placeholder are mutually exclusive"
        );
    }
}

#[test]
fn test_background_invariants_hold_across_editing() {
    let mut engine = engine();
    let page_id = current_page_id(&engine);
    let background_id = engine.story().pages[0].elements[0].id();

    let mut donor = Element::new(ElementKind::Video);
    donor.resource = Some(Resource::new("https://cdn.example/surf.mp4", 1920, 1080));

    engine
        .combine_elements(DonorRef::ByValue(Box::new(donor)), background_id)
        .unwrap();
    assert_background_invariants(engine.story());

    engine.duplicate_page(page_id).unwrap();
    assert_background_invariants(engine.story());

    engine.delete_element(background_id).unwrap();
    assert_background_invariants(engine.story());

    engine.add_page(None).unwrap();
    assert_background_invariants(engine.story());

    engine.undo().unwrap();
    engine.undo().unwrap();
    assert_background_invariants(engine.story());
}

proptest! {
    #[test]
    fn prop_undo_rewinds_every_committed_action(
        commands in proptest::collection::vec(0u8..3, 1..10),
    ) {
        let mut engine = engine();
        let initial = engine.story().clone();

        for command in commands {
            let page_id = current_page_id(&engine);
            match command {
                0 => engine
                    .insert_element(page_id, ElementSpec::new(ElementKind::Shape))
                    .unwrap(),
                1 => engine.add_page(None).unwrap(),
                _ => engine.duplicate_page(page_id).unwrap(),
            }
        }

        while engine.can_undo() {
            engine.undo().unwrap();
        }
        prop_assert_eq!(engine.story(), &initial);
    }
}
