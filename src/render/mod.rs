//! SVG serialization and raster previews for the external drawing surface.

mod raster;
mod svg;

pub use raster::{RasterFrame, rasterize_svg, render_snapshot, write_png};
pub use svg::{SvgStyle, cycle_to_svg, snapshot_to_svg};
