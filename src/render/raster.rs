use crate::foundation::error::{SigflowError, SigflowResult};

/// Largest raster edge we are willing to allocate.
const MAX_DIM: u32 = 16_384;

/// Rasterized overlay in premultiplied RGBA8.
#[derive(Clone, Debug)]
pub struct OverlayFrame {
    /// Width in pixels.
    pub width: u32,
    /// Height in pixels.
    pub height: u32,
    /// Premultiplied RGBA8, row-major.
    pub data: Vec<u8>,
}

impl OverlayFrame {
    /// Convert to straight-alpha RGBA8 for image encoders.
    pub fn to_straight_rgba8(&self) -> Vec<u8> {
        let mut out = self.data.clone();
        for px in out.chunks_exact_mut(4) {
            let a = u16::from(px[3]);
            if a == 0 {
                continue;
            }
            for c in &mut px[..3] {
                *c = ((u16::from(*c) * 255 + a / 2) / a).min(255) as u8;
            }
        }
        out
    }
}

/// Rasterize an SVG document at `scale`, optionally over an opaque background.
pub fn rasterize_svg(
    svg: &str,
    scale: f32,
    background: Option<[u8; 4]>,
) -> SigflowResult<OverlayFrame> {
    if !scale.is_finite() || scale <= 0.0 {
        return Err(SigflowError::render("raster scale must be finite and > 0"));
    }

    let opts = usvg::Options::default();
    let tree = usvg::Tree::from_str(svg, &opts)
        .map_err(|e| SigflowError::render(format!("parse overlay svg: {e}")))?;

    let to_px = |v: f32| -> SigflowResult<u32> {
        let px = (v * scale).ceil();
        if !px.is_finite() || px < 1.0 {
            return Err(SigflowError::render("overlay has invalid width/height"));
        }
        Ok(px as u32)
    };
    let width = to_px(tree.size().width())?;
    let height = to_px(tree.size().height())?;
    if width > MAX_DIM || height > MAX_DIM {
        return Err(SigflowError::render(format!(
            "overlay raster size too large: {width}x{height} (max {MAX_DIM}x{MAX_DIM})"
        )));
    }

    let mut pixmap = resvg::tiny_skia::Pixmap::new(width, height)
        .ok_or_else(|| SigflowError::render("failed to allocate overlay pixmap"))?;
    if let Some([r, g, b, a]) = background {
        pixmap.fill(resvg::tiny_skia::Color::from_rgba8(r, g, b, a));
    }

    let xform = resvg::tiny_skia::Transform::from_scale(scale, scale);
    resvg::render(&tree, xform, &mut pixmap.as_mut());

    Ok(OverlayFrame {
        width,
        height,
        data: pixmap.data().to_vec(),
    })
}

#[cfg(test)]
#[path = "../../tests/unit/render/raster.rs"]
mod tests;
