//! Geometry helpers: path data and derived shape dimensions
//!
//! All inputs here are already in device units.

use glam::{DVec2, dvec2};

use super::svg::fmt_num;

/// Fluent builder for SVG path data.
///
/// Commands are separated by a single space and coordinates within a
/// command by commas, e.g. `M0,-1 v2 a1,1 0 0 0 2,0 z`.
#[derive(Debug, Clone, Default)]
pub struct PathData {
    commands: Vec<String>,
}

impl PathData {
    pub fn new() -> Self {
        Self::default()
    }

    /// Absolute move-to
    pub fn m(mut self, x: f64, y: f64) -> Self {
        self.commands.push(format!("M{},{}", fmt_num(x), fmt_num(y)));
        self
    }

    /// Relative vertical line
    pub fn v(mut self, dy: f64) -> Self {
        self.commands.push(format!("v{}", fmt_num(dy)));
        self
    }

    /// Relative elliptical arc with zero x-axis rotation
    pub fn a(mut self, rx: f64, ry: f64, large_arc: bool, sweep: bool, dx: f64, dy: f64) -> Self {
        self.commands.push(format!(
            "a{},{} 0 {} {} {},{}",
            fmt_num(rx),
            fmt_num(ry),
            u8::from(large_arc),
            u8::from(sweep),
            fmt_num(dx),
            fmt_num(dy)
        ));
        self
    }

    /// Close path
    pub fn z(mut self) -> Self {
        self.commands.push("z".to_string());
        self
    }

    pub fn build(self) -> String {
        self.commands.join(" ")
    }
}

/// Vertical capsule: two semicircular caps of radius `width / 2` joined by
/// straight sides of length `height - width`, centered on `center`.
///
/// When `height < width` the straight length goes negative and the sides
/// overlap; the path is still emitted.
pub fn capsule_path(center: DVec2, width: f64, height: f64) -> String {
    let radius = width / 2.0;
    let straight = height - width;

    PathData::new()
        .m(center.x - radius, center.y - straight / 2.0)
        .v(straight)
        .a(radius, radius, false, false, width, 0.0)
        .v(-straight)
        .a(radius, radius, false, false, -width, 0.0)
        .z()
        .build()
}

/// Top-left corner of a `size` rectangle centered on `center`.
pub fn centered_rect_origin(center: DVec2, size: DVec2) -> DVec2 {
    center - size / 2.0
}

/// Top-left corner of a `size` rectangle centered on the origin, for shapes
/// positioned through a `transform` attribute instead.
pub fn local_rect_origin(size: DVec2) -> DVec2 {
    dvec2(-size.x / 2.0, -size.y / 2.0)
}

/// Corner radius that makes a rounded rectangle a full stadium.
pub fn stadium_radius(width: f64, height: f64) -> f64 {
    width.min(height) / 2.0
}

/// `translate(x y) rotate(angle)`, with `degrees` already in SVG's sense
/// (see [`ViewTransform::device_rotation`](crate::types::ViewTransform::device_rotation)).
pub fn translate_rotate(center: DVec2, degrees: f64) -> String {
    format!(
        "translate({} {}) rotate({})",
        fmt_num(center.x),
        fmt_num(center.y),
        fmt_num(degrees)
    )
}

/// `translate(x y)`
pub fn translate(center: DVec2) -> String {
    format!("translate({} {})", fmt_num(center.x), fmt_num(center.y))
}

/// `x1,y1 x2,y2 ...` for a polygon `points` attribute
pub fn points_attr(points: &[DVec2]) -> String {
    points
        .iter()
        .map(|p| format!("{},{}", fmt_num(p.x), fmt_num(p.y)))
        .collect::<Vec<_>>()
        .join(" ")
}
