//! Element types for page content
//!
//! Elements are the positioned content units on a page: text, media (image,
//! video, gif), shapes, stickers, products, and audio stickers. All kinds
//! share one struct with a closed kind tag; media-only attributes are unset
//! for non-media kinds.

use crate::ElementId;
use serde::{Deserialize, Serialize};

/// Shared default opacity, in percent
pub const DEFAULT_OPACITY: f32 = 100.0;

/// Default media scale, in percent
pub const DEFAULT_SCALE: f32 = 100.0;

/// Default focal point coordinate, in percent (midpoint)
pub const DEFAULT_FOCAL: f32 = 50.0;

/// The closed set of element kinds the editor supports
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ElementKind {
    Text,
    Image,
    Video,
    Gif,
    Shape,
    Sticker,
    Product,
    AudioSticker,
}

impl ElementKind {
    /// Whether elements of this kind carry a media resource
    pub fn is_media(&self) -> bool {
        matches!(self, ElementKind::Image | ElementKind::Video | ElementKind::Gif)
    }

    /// Get a display name for the element kind
    pub fn display_name(&self) -> &'static str {
        match self {
            ElementKind::Text => "Text",
            ElementKind::Image => "Image",
            ElementKind::Video => "Video",
            ElementKind::Gif => "GIF",
            ElementKind::Shape => "Shape",
            ElementKind::Sticker => "Sticker",
            ElementKind::Product => "Product",
            ElementKind::AudioSticker => "Audio Sticker",
        }
    }
}

/// A reference to an external media asset
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Resource {
    /// Source URL of the asset
    pub src: String,
    /// Intrinsic width in pixels
    pub width: u32,
    /// Intrinsic height in pixels
    pub height: u32,
    /// Poster/preview image URL (video resources)
    pub poster: Option<String>,
    /// Alternative text
    pub alt: Option<String>,
}

impl Resource {
    /// Create a resource for the given source URL and intrinsic size
    pub fn new(src: impl Into<String>, width: u32, height: u32) -> Self {
        Self {
            src: src.into(),
            width,
            height,
            poster: None,
            alt: None,
        }
    }
}

/// Mirroring flags for media elements
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Flip {
    pub horizontal: bool,
    pub vertical: bool,
}

/// Overlay drawn on top of a background media element
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum BackgroundOverlay {
    Solid,
    LinearGradient,
    RadialGradient,
}

/// A positioned, typed content unit on a page
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Element {
    id: ElementId,
    /// Kind tag; immutable once created
    pub kind: ElementKind,
    /// Position of the top-left corner, in editor units
    pub x: f32,
    pub y: f32,
    /// Dimensions in editor units
    pub width: f32,
    pub height: f32,
    /// Rotation in degrees
    pub rotation_angle: f32,
    /// Opacity in percent (0-100)
    pub opacity: f32,
    /// Whether resizing keeps the aspect ratio
    pub lock_aspect_ratio: bool,
    /// Whether the element is locked against editing
    pub is_locked: bool,
    /// Whether the element is hidden from display
    pub is_hidden: bool,
    /// Whether this element is the page's full-bleed backdrop
    pub is_background: bool,
    /// Whether this is the synthesized placeholder backdrop (no real media set)
    pub is_default_background: bool,
    /// Id of the element this one was duplicated from
    pub based_on: Option<ElementId>,
    /// Media asset reference (media kinds only)
    pub resource: Option<Resource>,
    /// Media zoom in percent
    pub scale: f32,
    /// Horizontal focal point in percent
    pub focal_x: f32,
    /// Vertical focal point in percent
    pub focal_y: f32,
    /// Mirroring flags
    pub flip: Flip,
    /// Overlay on background media
    pub background_overlay: Option<BackgroundOverlay>,
    /// Text content (text kind only)
    pub content: Option<String>,
}

impl Element {
    /// Create an element of the given kind carrying only the shared defaults.
    /// Kind-specific defaults are applied by the element registry.
    pub fn new(kind: ElementKind) -> Self {
        Self {
            id: ElementId::new(),
            kind,
            x: 0.0,
            y: 0.0,
            width: 0.0,
            height: 0.0,
            rotation_angle: 0.0,
            opacity: DEFAULT_OPACITY,
            lock_aspect_ratio: true,
            is_locked: false,
            is_hidden: false,
            is_background: false,
            is_default_background: false,
            based_on: None,
            resource: None,
            scale: DEFAULT_SCALE,
            focal_x: DEFAULT_FOCAL,
            focal_y: DEFAULT_FOCAL,
            flip: Flip::default(),
            background_overlay: None,
            content: None,
        }
    }

    /// Get the element id
    pub fn id(&self) -> ElementId {
        self.id
    }

    /// Re-mint this element's id. Used when cloning an element into a fresh
    /// identity; provenance is tracked separately via `based_on`.
    pub(crate) fn reassign_id(&mut self, id: ElementId) {
        self.id = id;
    }

    /// Clone this element under a fresh id, without recording provenance
    pub fn cloned_with_fresh_id(&self) -> Element {
        let mut copy = self.clone();
        copy.id = ElementId::new();
        copy
    }

    /// Whether this element occupies the same position as another
    pub fn overlaps_position(&self, other: &Element) -> bool {
        self.x == other.x && self.y == other.y
    }
}

/// Explicit patch over an element's mutable attributes.
///
/// Every field is optional; set fields win over the current value. Identity
/// (`id`, `kind`, `based_on`) and the background flags are not patchable --
/// those change only through dedicated operations.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ElementPatch {
    pub x: Option<f32>,
    pub y: Option<f32>,
    pub width: Option<f32>,
    pub height: Option<f32>,
    pub rotation_angle: Option<f32>,
    pub opacity: Option<f32>,
    pub lock_aspect_ratio: Option<bool>,
    pub is_locked: Option<bool>,
    pub is_hidden: Option<bool>,
    pub resource: Option<Resource>,
    pub scale: Option<f32>,
    pub focal_x: Option<f32>,
    pub focal_y: Option<f32>,
    pub flip: Option<Flip>,
    pub background_overlay: Option<BackgroundOverlay>,
    pub content: Option<String>,
}

impl ElementPatch {
    /// Apply the patch field by field; set fields overwrite
    pub fn apply(&self, element: &mut Element) {
        if let Some(x) = self.x {
            element.x = x;
        }
        if let Some(y) = self.y {
            element.y = y;
        }
        if let Some(width) = self.width {
            element.width = width;
        }
        if let Some(height) = self.height {
            element.height = height;
        }
        if let Some(rotation_angle) = self.rotation_angle {
            element.rotation_angle = rotation_angle;
        }
        if let Some(opacity) = self.opacity {
            element.opacity = opacity;
        }
        if let Some(lock_aspect_ratio) = self.lock_aspect_ratio {
            element.lock_aspect_ratio = lock_aspect_ratio;
        }
        if let Some(is_locked) = self.is_locked {
            element.is_locked = is_locked;
        }
        if let Some(is_hidden) = self.is_hidden {
            element.is_hidden = is_hidden;
        }
        if let Some(resource) = &self.resource {
            element.resource = Some(resource.clone());
        }
        if let Some(scale) = self.scale {
            element.scale = scale;
        }
        if let Some(focal_x) = self.focal_x {
            element.focal_x = focal_x;
        }
        if let Some(focal_y) = self.focal_y {
            element.focal_y = focal_y;
        }
        if let Some(flip) = self.flip {
            element.flip = flip;
        }
        if let Some(overlay) = self.background_overlay {
            element.background_overlay = Some(overlay);
        }
        if let Some(content) = &self.content {
            element.content = Some(content.clone());
        }
    }

    /// Builder: set position
    pub fn at(mut self, x: f32, y: f32) -> Self {
        self.x = Some(x);
        self.y = Some(y);
        self
    }

    /// Builder: set dimensions
    pub fn sized(mut self, width: f32, height: f32) -> Self {
        self.width = Some(width);
        self.height = Some(height);
        self
    }

    /// Builder: set the media resource
    pub fn with_resource(mut self, resource: Resource) -> Self {
        self.resource = Some(resource);
        self
    }

    /// Builder: set text content
    pub fn with_content(mut self, content: impl Into<String>) -> Self {
        self.content = Some(content.into());
        self
    }
}
