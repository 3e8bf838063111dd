//! Declarative animation descriptors attached to pages
//!
//! A descriptor names the effect, its timing parameters, and the element ids
//! it targets. Descriptors carry no playback state; live playback is the
//! animation crate's concern.

use crate::{AnimationId, ElementId};
use serde::{Deserialize, Serialize};

/// Default effect duration in milliseconds
pub const DEFAULT_DURATION_MS: u64 = 1000;

/// The closed set of animation effects
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum AnimationKind {
    FadeIn,
    FlyIn,
    Pulse,
    Spin,
    Zoom,
    Drop,
    Pan,
    Twirl,
    Bounce,
}

/// Easing curve applied to an effect
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum Easing {
    Linear,
    #[default]
    Ease,
    EaseIn,
    EaseOut,
    EaseInOut,
}

/// Playback direction of an effect
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum PlaybackDirection {
    #[default]
    Normal,
    Reverse,
    Alternate,
    AlternateReverse,
}

/// How many times an effect repeats
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum IterationCount {
    Finite(u32),
    Infinite,
}

impl Default for IterationCount {
    fn default() -> Self {
        IterationCount::Finite(1)
    }
}

/// Timing parameters shared by all effects
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AnimationParams {
    /// Effect duration in milliseconds
    pub duration_ms: u64,
    /// Delay before the effect starts, in milliseconds
    pub delay_ms: u64,
    pub easing: Easing,
    pub direction: PlaybackDirection,
    pub iterations: IterationCount,
}

impl Default for AnimationParams {
    fn default() -> Self {
        Self {
            duration_ms: DEFAULT_DURATION_MS,
            delay_ms: 0,
            easing: Easing::default(),
            direction: PlaybackDirection::default(),
            iterations: IterationCount::default(),
        }
    }
}

/// An animation descriptor: an effect applied to one or more target elements
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Animation {
    id: AnimationId,
    /// Ids of the elements this effect animates
    pub targets: Vec<ElementId>,
    pub kind: AnimationKind,
    pub params: AnimationParams,
}

impl Animation {
    /// Create a descriptor with default timing parameters
    pub fn new(kind: AnimationKind, targets: Vec<ElementId>) -> Self {
        Self {
            id: AnimationId::new(),
            targets,
            kind,
            params: AnimationParams::default(),
        }
    }

    /// Builder: set the timing parameters
    pub fn with_params(mut self, params: AnimationParams) -> Self {
        self.params = params;
        self
    }

    /// Get the animation id
    pub fn id(&self) -> AnimationId {
        self.id
    }

    /// Whether this descriptor targets the given element
    pub fn targets_element(&self, element_id: ElementId) -> bool {
        self.targets.contains(&element_id)
    }

    /// Clone this descriptor under a fresh id, targeting exactly the given
    /// element. Used when an element is duplicated: the clone animates the
    /// duplicate, never the duplicate's siblings.
    pub fn cloned_for_target(&self, target: ElementId) -> Self {
        Self {
            id: AnimationId::new(),
            targets: vec![target],
            kind: self.kind,
            params: self.params,
        }
    }

    /// Clone this descriptor under a fresh id, rewriting each target through
    /// the supplied mapping. Targets absent from the mapping are kept as-is.
    pub fn remapped(&self, map: impl Fn(ElementId) -> Option<ElementId>) -> Self {
        Self {
            id: AnimationId::new(),
            targets: self
                .targets
                .iter()
                .map(|&target| map(target).unwrap_or(target))
                .collect(),
            kind: self.kind,
            params: self.params,
        }
    }
}
