use crate::scene::layer::{FontWeight, FrameGraph, ImageFit, Layer, LayerContent};
use xxhash_rust::xxh3::Xxh3;

const XXH3_SEED: u64 = 0x8b5ad4a0c7d8e9f1;

/// Stable 128-bit digest of a frame's layer tree.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, serde::Serialize)]
pub struct FrameFingerprint {
    pub hi: u64,
    pub lo: u64,
}

/// Compute a stable fingerprint for an evaluated frame.
///
/// Hosts use it to skip re-encoding duplicate frames. The global frame index and the
/// phase-local frame are not hashed, so a still frame fingerprints identically over
/// time.
pub fn fingerprint_frame(graph: &FrameGraph) -> FrameFingerprint {
    let mut h = StableHasher::new();
    write_layers(&mut h, &graph.layers);
    h.finish()
}

struct StableHasher {
    inner: Xxh3,
}

impl StableHasher {
    fn new() -> Self {
        Self {
            inner: Xxh3::with_seed(XXH3_SEED),
        }
    }

    fn write_bytes(&mut self, b: &[u8]) {
        self.inner.update(b);
    }

    fn write_u8(&mut self, v: u8) {
        self.write_bytes(&[v]);
    }

    fn write_bool(&mut self, v: bool) {
        self.write_u8(u8::from(v));
    }

    fn write_u32(&mut self, v: u32) {
        self.write_bytes(&v.to_le_bytes());
    }

    fn write_u64(&mut self, v: u64) {
        self.write_bytes(&v.to_le_bytes());
    }

    fn write_f64(&mut self, v: f64) {
        self.write_u64(v.to_bits());
    }

    fn write_str(&mut self, s: &str) {
        self.write_u64(s.len() as u64);
        self.write_bytes(s.as_bytes());
    }

    fn finish(self) -> FrameFingerprint {
        let v = self.inner.digest128();
        FrameFingerprint {
            hi: (v >> 64) as u64,
            lo: v as u64,
        }
    }
}

fn write_layers(h: &mut StableHasher, layers: &[Layer]) {
    h.write_u32(layers.len() as u32);
    for layer in layers {
        write_layer(h, layer);
    }
}

fn write_layer(h: &mut StableHasher, layer: &Layer) {
    h.write_str(&layer.id);
    h.write_u32(layer.z as u32);
    for c in [layer.rect.x0, layer.rect.y0, layer.rect.x1, layer.rect.y1] {
        h.write_f64(c);
    }
    for c in layer.transform.to_affine().as_coeffs() {
        h.write_f64(c);
    }
    h.write_f64(layer.opacity);
    h.write_bool(layer.clip);

    match &layer.content {
        LayerContent::Solid {
            color_rgba8,
            corner_radius,
        } => {
            h.write_u8(0);
            h.write_bytes(color_rgba8);
            h.write_f64(*corner_radius);
        }
        LayerContent::LinearGradient { stops } => {
            h.write_u8(1);
            h.write_u32(stops.len() as u32);
            for s in stops {
                h.write_bytes(s);
            }
        }
        LayerContent::Image {
            source,
            fit,
            corner_radius,
        } => {
            h.write_u8(2);
            h.write_str(source);
            h.write_u8(match fit {
                ImageFit::Contain => 0,
                ImageFit::Cover => 1,
            });
            h.write_f64(*corner_radius);
        }
        LayerContent::Text { text, style } => {
            h.write_u8(3);
            h.write_str(text);
            h.write_f64(style.size_px);
            h.write_bytes(&style.color_rgba8);
            h.write_u8(match style.weight {
                FontWeight::Normal => 0,
                FontWeight::Bold => 1,
            });
            h.write_str(&style.family);
            h.write_bool(style.ellipsize);
        }
        LayerContent::Group { children } => {
            h.write_u8(4);
            write_layers(h, children);
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/compile/fingerprint.rs"]
mod tests;
