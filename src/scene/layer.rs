use crate::foundation::core::{Affine, FrameIndex, Point, Rect, Size, Transform2D};
use crate::timeline::phase::PhaseKind;

/// How an image fills its layer box.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ImageFit {
    /// Scale to fit inside the box, letterboxing as needed.
    Contain,
    /// Scale to cover the box, cropping overflow.
    Cover,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FontWeight {
    #[default]
    Normal,
    Bold,
}

/// Text appearance. Text is centered in its layer box.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct TextStyle {
    pub size_px: f64,
    pub color_rgba8: [u8; 4],
    pub weight: FontWeight,
    pub family: String,
    /// Truncate with an ellipsis past the layer width instead of overflowing.
    pub ellipsize: bool,
}

impl TextStyle {
    pub fn new(size_px: f64, color_rgba8: [u8; 4]) -> Self {
        Self {
            size_px,
            color_rgba8,
            weight: FontWeight::Normal,
            family: "sans-serif".to_string(),
            ellipsize: false,
        }
    }

    pub fn bold(mut self) -> Self {
        self.weight = FontWeight::Bold;
        self
    }

    pub fn family(mut self, family: impl Into<String>) -> Self {
        self.family = family.into();
        self
    }

    pub fn ellipsize(mut self) -> Self {
        self.ellipsize = true;
        self
    }
}

#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum LayerContent {
    Solid {
        color_rgba8: [u8; 4],
        corner_radius: f64,
    },
    /// Horizontal gradient with evenly spaced stops, left to right.
    LinearGradient { stops: Vec<[u8; 4]> },
    Image {
        source: String,
        fit: ImageFit,
        corner_radius: f64,
    },
    Text { text: String, style: TextStyle },
    Group { children: Vec<Layer> },
}

/// One node of a frame's visual tree.
///
/// `rect` places the layer in its parent's space; `transform` is applied in the
/// layer's local space (`0..width`, `0..height`) before that placement.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Layer {
    pub id: String,
    pub z: i32,
    pub rect: Rect,
    pub transform: Transform2D,
    pub opacity: f64,
    /// Clip this layer and its descendants to its own box.
    pub clip: bool,
    pub content: LayerContent,
}

impl Layer {
    fn new(id: impl Into<String>, rect: Rect, content: LayerContent) -> Self {
        Self {
            id: id.into(),
            z: 0,
            rect,
            transform: Transform2D::centered(rect.size()),
            opacity: 1.0,
            clip: false,
            content,
        }
    }

    pub fn solid(id: impl Into<String>, rect: Rect, color_rgba8: [u8; 4]) -> Self {
        Self::new(
            id,
            rect,
            LayerContent::Solid {
                color_rgba8,
                corner_radius: 0.0,
            },
        )
    }

    pub fn gradient(id: impl Into<String>, rect: Rect, stops: Vec<[u8; 4]>) -> Self {
        Self::new(id, rect, LayerContent::LinearGradient { stops })
    }

    pub fn image(id: impl Into<String>, rect: Rect, source: impl Into<String>, fit: ImageFit) -> Self {
        Self::new(
            id,
            rect,
            LayerContent::Image {
                source: source.into(),
                fit,
                corner_radius: 0.0,
            },
        )
    }

    pub fn text(id: impl Into<String>, rect: Rect, text: impl Into<String>, style: TextStyle) -> Self {
        Self::new(
            id,
            rect,
            LayerContent::Text {
                text: text.into(),
                style,
            },
        )
    }

    pub fn group(id: impl Into<String>, rect: Rect, children: Vec<Layer>) -> Self {
        Self::new(id, rect, LayerContent::Group { children })
    }

    pub fn with_z(mut self, z: i32) -> Self {
        self.z = z;
        self
    }

    pub fn with_opacity(mut self, opacity: f64) -> Self {
        self.opacity = opacity.clamp(0.0, 1.0);
        self
    }

    pub fn with_transform(mut self, transform: Transform2D) -> Self {
        self.transform = transform;
        self
    }

    /// Rounded corners for solid and image layers; ignored for other content.
    pub fn with_corner_radius(mut self, radius: f64) -> Self {
        match &mut self.content {
            LayerContent::Solid { corner_radius, .. } | LayerContent::Image { corner_radius, .. } => {
                *corner_radius = radius;
            }
            _ => {}
        }
        self
    }

    pub fn clipped(mut self) -> Self {
        self.clip = true;
        self
    }

    pub fn children(&self) -> &[Layer] {
        match &self.content {
            LayerContent::Group { children } => children,
            _ => &[],
        }
    }

    /// Depth-first search by id.
    pub fn find(&self, id: &str) -> Option<&Layer> {
        if self.id == id {
            return Some(self);
        }
        self.children().iter().find_map(|c| c.find(id))
    }
}

/// Layer tree for one global frame.
#[derive(Clone, Debug, PartialEq, serde::Serialize)]
pub struct FrameGraph {
    pub frame: FrameIndex,
    pub phase: PhaseKind,
    /// Frame offset inside `phase`.
    pub local_frame: FrameIndex,
    pub layers: Vec<Layer>,
}

/// Non-group layer resolved into world space.
#[derive(Clone, Debug, PartialEq, serde::Serialize)]
pub struct ResolvedLayer {
    pub id: String,
    pub size: Size,
    /// Maps local `0..size` coordinates to frame pixels.
    pub world: Affine,
    /// Product of this layer's and all ancestors' opacity.
    pub opacity: f64,
    /// Axis-aligned world-space clip, if any ancestor clips.
    pub clip: Option<Rect>,
    pub content: LayerContent,
}

impl FrameGraph {
    pub fn find(&self, id: &str) -> Option<&Layer> {
        self.layers.iter().find_map(|l| l.find(id))
    }

    /// Painter-ordered leaves: siblings by ascending `z` (stable), parents before children.
    pub fn flatten(&self) -> Vec<ResolvedLayer> {
        let mut out = Vec::new();
        flatten_into(&self.layers, Affine::IDENTITY, 1.0, None, &mut out);
        out
    }
}

fn flatten_into(
    layers: &[Layer],
    parent: Affine,
    parent_opacity: f64,
    parent_clip: Option<Rect>,
    out: &mut Vec<ResolvedLayer>,
) {
    let mut ordered: Vec<&Layer> = layers.iter().collect();
    ordered.sort_by_key(|l| l.z);

    for layer in ordered {
        let world = parent
            * Affine::translate(layer.rect.origin().to_vec2())
            * layer.transform.to_affine();
        let opacity = parent_opacity * layer.opacity;
        let clip = if layer.clip {
            let own = world.transform_rect_bbox(Rect::from_origin_size(
                Point::ORIGIN,
                layer.rect.size(),
            ));
            Some(parent_clip.map_or(own, |c| c.intersect(own)))
        } else {
            parent_clip
        };

        match &layer.content {
            LayerContent::Group { children } => {
                flatten_into(children, world, opacity, clip, out);
            }
            content => out.push(ResolvedLayer {
                id: layer.id.clone(),
                size: layer.rect.size(),
                world,
                opacity,
                clip,
                content: content.clone(),
            }),
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/scene/layer.rs"]
mod tests;
