//! SVG serialization of cycles and snapshots.
//!
//! The animated document relies on the surface's declarative `<animate>`
//! support; the static document draws one instant and is what the raster
//! backend consumes.

use crate::{
    animation::track::ValueTrack,
    config::model::PenumbraConfig,
    geometry::path::PathDesc,
    sequence::{cycle::Cycle, session::FrameSnapshot},
};

const SVG_NS: &str = "http://www.w3.org/2000/svg";
const GRADIENT_ID: &str = "ringGradient";
const CORE_STROKE_VALUES: &str = "white;black;black";

/// Colors, stroke widths and viewport of the rendered document.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct SvgStyle {
    /// Document width in pixels.
    pub width: u32,
    /// Document height in pixels.
    pub height: u32,
    /// `min-x min-y width height`; the ring center is the origin.
    pub view_box: [f64; 4],
    /// Gradient stop at 50%.
    pub inner_color: String,
    /// Gradient stop at 70%.
    pub middle_color: String,
    /// Gradient stop at 100%.
    pub outer_color: String,
    /// Optional full-viewport fill painted first.
    pub background: Option<String>,
    /// Stroke width of the morphing path.
    pub morph_stroke_width: f64,
    /// Stroke width of the core circle.
    pub core_stroke_width: f64,
    /// Stroke width of tracer curves.
    pub tracer_stroke_width: f64,
}

impl Default for SvgStyle {
    fn default() -> Self {
        Self {
            width: 1000,
            height: 1000,
            view_box: [-500.0, -250.0, 1000.0, 1000.0],
            inner_color: "#5F406C".to_string(),
            middle_color: "#ff902f".to_string(),
            outer_color: "#8be4d9".to_string(),
            background: None,
            morph_stroke_width: 3.0,
            core_stroke_width: 4.0,
            tracer_stroke_width: 1.0,
        }
    }
}

impl SvgStyle {
    fn open(&self, out: &mut String) {
        let [x, y, w, h] = self.view_box;
        push_line(
            out,
            format!(
                r#"<svg xmlns="{SVG_NS}" width="{}" height="{}" viewBox="{x} {y} {w} {h}">"#,
                self.width, self.height
            ),
        );
        if let Some(bg) = &self.background {
            push_line(
                out,
                format!(r#"  <rect x="{x}" y="{y}" width="{w}" height="{h}" fill="{bg}" />"#),
            );
        }
        push_line(
            out,
            format!(
                r#"  <defs>
    <radialGradient id="{GRADIENT_ID}">
      <stop offset="50%" stop-color="{}" />
      <stop offset="70%" stop-color="{}" />
      <stop offset="100%" stop-color="{}" />
    </radialGradient>
  </defs>"#,
                self.inner_color, self.middle_color, self.outer_color
            ),
        );
    }
}

fn push_line(out: &mut String, line: String) {
    out.push_str(&line);
    out.push('\n');
}

fn join_values(values: &[f64]) -> String {
    values
        .iter()
        .map(f64::to_string)
        .collect::<Vec<_>>()
        .join(";")
}

fn animate_scalar(out: &mut String, attribute: &str, track: &ValueTrack<f64>) {
    push_line(
        out,
        format!(
            r#"    <animate attributeName="{attribute}" values="{}" begin="{}s" dur="{}s" repeatCount="{}" />"#,
            join_values(track.values()),
            track.begin(),
            track.dur(),
            repeat_count(track.repeats()),
        ),
    );
}

fn repeat_count(repeat: bool) -> &'static str {
    if repeat { "indefinite" } else { "1" }
}

/// Animated document for one cycle: core circle, morphing path and tracers.
pub fn cycle_to_svg(cycle: &Cycle, config: &PenumbraConfig, style: &SvgStyle) -> String {
    let mut out = String::new();
    style.open(&mut out);

    let core = PathDesc::circle(config.base_radius).to_svg_d();
    let dur = cycle.keyframes.dur();
    push_line(
        &mut out,
        format!(
            r#"  <path id="coreCircle" d="{core}" opacity="0" fill="black" stroke-width="{}">"#,
            style.core_stroke_width
        ),
    );
    push_line(
        &mut out,
        format!(
            r#"    <animate attributeName="stroke" values="{CORE_STROKE_VALUES}" begin="{}s" dur="{dur}s" repeatCount="indefinite" />"#,
            cycle.core_opacity.begin()
        ),
    );
    animate_scalar(&mut out, "opacity", &cycle.core_opacity);
    out.push_str("  </path>\n");

    let morph_values = cycle
        .keyframes
        .values()
        .iter()
        .map(PathDesc::to_svg_d)
        .collect::<Vec<_>>()
        .join(";");
    push_line(
        &mut out,
        format!(
            r#"  <path id="movingPath" fill="none" stroke="url(#{GRADIENT_ID})" stroke-width="{}">"#,
            style.morph_stroke_width
        ),
    );
    push_line(
        &mut out,
        format!(
            r#"    <animate attributeName="d" values="{morph_values}" begin="{}s" dur="{dur}s" repeatCount="{}" />"#,
            cycle.keyframes.begin(),
            repeat_count(cycle.keyframes.repeats()),
        ),
    );
    animate_scalar(&mut out, "opacity", &cycle.morph_opacity);
    out.push_str("  </path>\n");

    push_line(
        &mut out,
        format!(r#"  <g class="tracers" data-cycle="{}">"#, cycle.index),
    );
    for tracer in &cycle.tracers {
        push_line(
            &mut out,
            format!(
                r#"  <path class="tracerPath" data-ring="{}" d="{}" fill="none" stroke="url(#{GRADIENT_ID})" stroke-width="{}" opacity="0">"#,
                tracer.ring_index,
                tracer.path.to_svg_d(),
                style.tracer_stroke_width
            ),
        );
        animate_scalar(&mut out, "opacity", &tracer.visibility);
        out.push_str("  </path>\n");
    }
    out.push_str("  </g>\n");

    out.push_str("</svg>\n");
    out
}

/// Static document drawing `snapshot` as it looks at its instant.
pub fn snapshot_to_svg(snapshot: &FrameSnapshot, style: &SvgStyle) -> String {
    let mut out = String::new();
    style.open(&mut out);

    push_line(
        &mut out,
        format!(
            r#"  <path d="{}" fill="black" stroke="white" stroke-width="{}" opacity="{}" />"#,
            PathDesc::circle(snapshot.core_radius).to_svg_d(),
            style.core_stroke_width,
            snapshot.core_opacity
        ),
    );
    push_line(
        &mut out,
        format!(
            r#"  <path d="{}" fill="none" stroke="url(#{GRADIENT_ID})" stroke-width="{}" opacity="{}" />"#,
            snapshot.morph_path.to_svg_d(),
            style.morph_stroke_width,
            snapshot.morph_opacity
        ),
    );
    for (path, opacity) in &snapshot.tracers {
        if *opacity <= 0.0 {
            continue;
        }
        push_line(
            &mut out,
            format!(
                r#"  <path d="{}" fill="none" stroke="url(#{GRADIENT_ID})" stroke-width="{}" opacity="{opacity}" />"#,
                path.to_svg_d(),
                style.tracer_stroke_width
            ),
        );
    }

    out.push_str("</svg>\n");
    out
}

#[cfg(test)]
#[path = "../../tests/unit/render/svg.rs"]
mod tests;
