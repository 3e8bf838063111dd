//! Element-type registry with per-kind default attributes
//!
//! The host registers a definition per element kind before any element is
//! created. Creation merges shared defaults, the kind's registered defaults,
//! and caller overrides, in that order -- later layers win.

use crate::{Element, ElementKind, ElementPatch, Result, StoryModelError, DEFAULT_SCALE};
use std::collections::HashMap;

/// Registered defaults for one element kind
#[derive(Debug, Clone)]
pub struct ElementDefinition {
    pub kind: ElementKind,
    /// Kind-specific default attributes, applied over the shared defaults
    pub defaults: ElementPatch,
}

impl ElementDefinition {
    pub fn new(kind: ElementKind, defaults: ElementPatch) -> Self {
        Self { kind, defaults }
    }
}

/// Maps element kinds to their registered definitions
#[derive(Debug, Clone, Default)]
pub struct ElementRegistry {
    definitions: HashMap<ElementKind, ElementDefinition>,
}

impl ElementRegistry {
    /// Create an empty registry
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a registry with every built-in kind registered
    pub fn with_builtin_kinds() -> Self {
        let mut registry = Self::new();

        registry.register(ElementDefinition::new(
            ElementKind::Text,
            ElementPatch::default().with_content("").sized(160.0, 44.0),
        ));
        for kind in [ElementKind::Image, ElementKind::Video, ElementKind::Gif] {
            let mut defaults = ElementPatch::default();
            defaults.scale = Some(DEFAULT_SCALE);
            defaults.focal_x = Some(50.0);
            defaults.focal_y = Some(50.0);
            registry.register(ElementDefinition::new(kind, defaults));
        }
        for kind in [
            ElementKind::Shape,
            ElementKind::Sticker,
            ElementKind::Product,
            ElementKind::AudioSticker,
        ] {
            registry.register(ElementDefinition::new(kind, ElementPatch::default()));
        }

        registry
    }

    /// Register (or replace) a kind's definition
    pub fn register(&mut self, definition: ElementDefinition) {
        self.definitions.insert(definition.kind, definition);
    }

    /// Look up a kind's definition
    pub fn definition(&self, kind: ElementKind) -> Option<&ElementDefinition> {
        self.definitions.get(&kind)
    }

    /// Create an element of the given kind with a fresh id.
    ///
    /// Merge order: shared defaults, then the kind's registered defaults,
    /// then `overrides`. An unregistered kind is a configuration error and
    /// fails fast rather than silently producing a half-defaulted element.
    pub fn create_element(&self, kind: ElementKind, overrides: &ElementPatch) -> Result<Element> {
        let definition = self
            .definitions
            .get(&kind)
            .ok_or(StoryModelError::UnregisteredKind(kind))?;

        let mut element = Element::new(kind);
        definition.defaults.apply(&mut element);
        overrides.apply(&mut element);
        Ok(element)
    }
}
