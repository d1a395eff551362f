use kurbo::{PathEl, Shape as _};

use crate::foundation::{
    core::{BezPath, CubicBez, Point},
    error::{PenumbraError, PenumbraResult},
};

/// One drawing command of a path description.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(tag = "op", rename_all = "snake_case")]
pub enum PathCommand {
    /// Start a new subpath at `to`.
    MoveTo {
        /// Subpath start.
        to: Point,
    },
    /// Cubic Bezier from the current point to `to`.
    CubicTo {
        /// First control point.
        c1: Point,
        /// Second control point.
        c2: Point,
        /// End point.
        to: Point,
    },
}

impl PathCommand {
    /// Point the pen rests on after this command.
    pub fn end_point(&self) -> Point {
        match *self {
            Self::MoveTo { to } | Self::CubicTo { to, .. } => to,
        }
    }
}

/// Renderer-agnostic path description: typed commands, serialized by the surface.
#[derive(Clone, Debug, Default, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(transparent)]
pub struct PathDesc {
    commands: Vec<PathCommand>,
}

impl PathDesc {
    /// Wrap a command list.
    pub fn new(commands: Vec<PathCommand>) -> Self {
        Self { commands }
    }

    /// Circle of radius `r` around the origin, as four cubic arcs.
    pub fn circle(r: f64) -> Self {
        let path = kurbo::Circle::new(Point::ORIGIN, r).to_path(1e-6);
        let mut commands = Vec::with_capacity(5);
        for el in path.elements() {
            match *el {
                PathEl::MoveTo(to) => commands.push(PathCommand::MoveTo { to }),
                PathEl::CurveTo(c1, c2, to) => commands.push(PathCommand::CubicTo { c1, c2, to }),
                // Circles are emitted as cubics; the closing segment is degenerate.
                PathEl::ClosePath | PathEl::LineTo(_) | PathEl::QuadTo(..) => {}
            }
        }
        Self { commands }
    }

    /// Convert a kurbo path made of moves and cubics.
    pub fn from_bez_path(path: &BezPath) -> PenumbraResult<Self> {
        let mut commands = Vec::new();
        for el in path.elements() {
            match *el {
                PathEl::MoveTo(to) => commands.push(PathCommand::MoveTo { to }),
                PathEl::CurveTo(c1, c2, to) => commands.push(PathCommand::CubicTo { c1, c2, to }),
                PathEl::ClosePath => {}
                PathEl::LineTo(_) | PathEl::QuadTo(..) => {
                    return Err(PenumbraError::render(
                        "path description only carries move and cubic commands",
                    ));
                }
            }
        }
        Ok(Self { commands })
    }

    /// Commands in drawing order.
    pub fn commands(&self) -> &[PathCommand] {
        &self.commands
    }

    /// `true` when there is nothing to draw.
    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }

    /// Every point the path passes through: the move target and each segment end.
    pub fn end_points(&self) -> impl Iterator<Item = Point> + '_ {
        self.commands.iter().map(PathCommand::end_point)
    }

    /// Cubic segments with their start points resolved.
    pub fn segments(&self) -> impl Iterator<Item = CubicBez> + '_ {
        let mut pen = Point::ORIGIN;
        self.commands.iter().filter_map(move |cmd| match *cmd {
            PathCommand::MoveTo { to } => {
                pen = to;
                None
            }
            PathCommand::CubicTo { c1, c2, to } => {
                let seg = CubicBez::new(pen, c1, c2, to);
                pen = to;
                Some(seg)
            }
        })
    }

    /// `kurbo` representation for geometry queries and raster backends.
    pub fn to_bez_path(&self) -> BezPath {
        let mut path = BezPath::new();
        for cmd in &self.commands {
            match *cmd {
                PathCommand::MoveTo { to } => path.move_to(to),
                PathCommand::CubicTo { c1, c2, to } => path.curve_to(c1, c2, to),
            }
        }
        path
    }

    /// SVG `d` attribute text: `M x,y C c1x,c1y c2x,c2y x,y ...`.
    pub fn to_svg_d(&self) -> String {
        let mut out = String::with_capacity(self.commands.len() * 48);
        for (i, cmd) in self.commands.iter().enumerate() {
            if i > 0 {
                out.push(' ');
            }
            let text = match *cmd {
                PathCommand::MoveTo { to } => format!("M {},{}", to.x, to.y),
                PathCommand::CubicTo { c1, c2, to } => format!(
                    "C {},{} {},{} {},{}",
                    c1.x, c1.y, c2.x, c2.y, to.x, to.y
                ),
            };
            out.push_str(&text);
        }
        out
    }
}

#[cfg(test)]
#[path = "../../tests/unit/geometry/path.rs"]
mod tests;
