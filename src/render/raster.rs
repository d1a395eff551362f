use std::path::Path;

use anyhow::Context as _;

use crate::{
    foundation::error::{PenumbraError, PenumbraResult},
    render::svg::{SvgStyle, snapshot_to_svg},
    sequence::session::FrameSnapshot,
};

/// Rasterized frame in premultiplied RGBA8.
#[derive(Clone, Debug)]
pub struct RasterFrame {
    /// Width in pixels.
    pub width: u32,
    /// Height in pixels.
    pub height: u32,
    /// `width * height * 4` bytes, premultiplied.
    pub data: Vec<u8>,
}

impl RasterFrame {
    /// Premultiplied RGBA of pixel `(x, y)`.
    pub fn pixel(&self, x: u32, y: u32) -> Option<[u8; 4]> {
        if x >= self.width || y >= self.height {
            return None;
        }
        let i = ((y * self.width + x) * 4) as usize;
        Some([
            self.data[i],
            self.data[i + 1],
            self.data[i + 2],
            self.data[i + 3],
        ])
    }
}

/// Parse `svg` and render it scaled to `width` x `height`.
pub fn rasterize_svg(svg: &str, width: u32, height: u32) -> PenumbraResult<RasterFrame> {
    if width == 0 || height == 0 {
        return Err(PenumbraError::render("raster size must be > 0"));
    }
    let opts = usvg::Options::default();
    let tree = usvg::Tree::from_str(svg, &opts).context("parse svg tree")?;

    let mut pixmap = resvg::tiny_skia::Pixmap::new(width, height)
        .ok_or_else(|| PenumbraError::render("failed to allocate pixmap"))?;

    let sx = (width as f32) / tree.size().width();
    let sy = (height as f32) / tree.size().height();
    let xform = resvg::tiny_skia::Transform::from_scale(sx, sy);

    resvg::render(&tree, xform, &mut pixmap.as_mut());
    Ok(RasterFrame {
        width,
        height,
        data: pixmap.data().to_vec(),
    })
}

/// Draw one instant of the animation.
#[tracing::instrument(skip(snapshot, style), fields(cycle = snapshot.cycle, time = snapshot.time))]
pub fn render_snapshot(
    snapshot: &FrameSnapshot,
    style: &SvgStyle,
    width: u32,
    height: u32,
) -> PenumbraResult<RasterFrame> {
    let svg = snapshot_to_svg(snapshot, style);
    rasterize_svg(&svg, width, height)
}

/// Write `frame` as a straight-alpha PNG, creating parent directories.
pub fn write_png(frame: &RasterFrame, path: &Path) -> PenumbraResult<()> {
    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
    {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("create output dir '{}'", parent.display()))?;
    }

    let mut straight = frame.data.clone();
    unpremultiply_rgba8_in_place(&mut straight);
    image::save_buffer_with_format(
        path,
        &straight,
        frame.width,
        frame.height,
        image::ColorType::Rgba8,
        image::ImageFormat::Png,
    )
    .with_context(|| format!("write png '{}'", path.display()))?;
    Ok(())
}

fn unpremultiply_rgba8_in_place(rgba: &mut [u8]) {
    for px in rgba.chunks_exact_mut(4) {
        let a = px[3] as u16;
        if a == 0 || a == 255 {
            continue;
        }
        for c in &mut px[..3] {
            *c = ((*c as u16 * 255 + a / 2) / a).min(255) as u8;
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/render/raster.rs"]
mod tests;
