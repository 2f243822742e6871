//! Plated hole shapes shared by the assembly and PCB views
//!
//! Every supported hole becomes one `<g>` holding the outer (copper) shape
//! followed by the inner (drill) shape, so the drill paints on top.

use glam::{DVec2, dvec2};

use crate::circuit::{PcbPlatedHole, PlatedHoleShape};
use crate::types::ViewTransform;

use super::geometry::{capsule_path, centered_rect_origin, stadium_radius};
use super::svg::{ElementName, SvgObject};

/// Classes and fills for one view's holes
#[derive(Debug, Clone, Copy)]
pub struct HoleStyle<'a> {
    pub outer_class: &'static str,
    pub outer_pad_class: &'static str,
    pub inner_class: &'static str,
    pub outer_fill: &'a str,
    pub inner_fill: &'a str,
}

impl<'a> HoleStyle<'a> {
    pub fn assembly(outer_fill: &'a str, inner_fill: &'a str) -> Self {
        HoleStyle {
            outer_class: "assembly-hole-outer",
            outer_pad_class: "assembly-hole-outer-pad",
            inner_class: "assembly-hole-inner",
            outer_fill,
            inner_fill,
        }
    }

    pub fn pcb(outer_fill: &'a str, inner_fill: &'a str) -> Self {
        HoleStyle {
            outer_class: "pcb-hole-outer",
            outer_pad_class: "pcb-hole-outer-pad",
            inner_class: "pcb-hole-inner",
            outer_fill,
            inner_fill,
        }
    }
}

fn capsule(class: &str, fill: &str, center: DVec2, size: DVec2) -> SvgObject {
    SvgObject::new(ElementName::Path)
        .with_attr("class", class)
        .with_attr("fill", fill)
        .with_attr("d", capsule_path(center, size.x, size.y))
}

fn circle(class: &str, fill: &str, center: DVec2, radius: f64) -> SvgObject {
    SvgObject::new(ElementName::Circle)
        .with_attr("class", class)
        .with_attr("fill", fill)
        .with_num("cx", center.x)
        .with_num("cy", center.y)
        .with_num("r", radius)
}

fn rect(class: &str, fill: &str, center: DVec2, size: DVec2) -> SvgObject {
    let origin = centered_rect_origin(center, size);
    SvgObject::new(ElementName::Rect)
        .with_attr("class", class)
        .with_attr("fill", fill)
        .with_num("x", origin.x)
        .with_num("y", origin.y)
        .with_num("width", size.x)
        .with_num("height", size.y)
}

/// Build the outer + inner group for a hole, or `None` for shapes we don't
/// draw. `center` is the hole position already in device units.
///
/// Hole dimensions all scale by `|a|`.
pub fn hole_group(
    hole: &PcbPlatedHole,
    transform: &ViewTransform,
    center: DVec2,
    style: &HoleStyle,
) -> Option<SvgObject> {
    let k = transform.scale_x();

    let (outer, inner) = match hole.shape {
        PlatedHoleShape::Pill {
            outer_width,
            outer_height,
            hole_width,
            hole_height,
        } => {
            if outer_height < outer_width || hole_height < hole_width {
                crate::log::warn!(
                    id = hole.pcb_plated_hole_id.as_str(),
                    "pill hole shorter than it is wide"
                );
            }
            let outer = dvec2(outer_width, outer_height) * k;
            let inner = dvec2(hole_width, hole_height) * k;
            (
                capsule(style.outer_class, style.outer_fill, center, outer),
                capsule(style.inner_class, style.inner_fill, center, inner),
            )
        }
        PlatedHoleShape::Circle {
            outer_diameter,
            hole_diameter,
        } => {
            let outer_radius = outer_diameter * k / 2.0;
            let hole_radius = hole_diameter * k / 2.0;
            (
                circle(style.outer_class, style.outer_fill, center, outer_radius),
                circle(style.inner_class, style.inner_fill, center, hole_radius),
            )
        }
        PlatedHoleShape::CircularHoleWithRectPad {
            hole_diameter,
            rect_pad_width,
            rect_pad_height,
        } => {
            let pad_size = dvec2(rect_pad_width, rect_pad_height) * k;
            let hole_radius = hole_diameter * k / 2.0;
            (
                rect(style.outer_pad_class, style.outer_fill, center, pad_size),
                circle(style.inner_class, style.inner_fill, center, hole_radius),
            )
        }
        PlatedHoleShape::PillHoleWithRectPad {
            hole_width,
            hole_height,
            rect_pad_width,
            rect_pad_height,
        } => {
            let hole_size = dvec2(hole_width, hole_height) * k;
            let radius = stadium_radius(hole_size.x, hole_size.y);
            (
                rect(
                    style.outer_pad_class,
                    style.outer_fill,
                    center,
                    dvec2(rect_pad_width, rect_pad_height) * k,
                ),
                rect(style.inner_class, style.inner_fill, center, hole_size)
                    .with_num("rx", radius)
                    .with_num("ry", radius),
            )
        }
        PlatedHoleShape::Unsupported => {
            crate::log::debug!(
                id = hole.pcb_plated_hole_id.as_str(),
                "skipping plated hole with unsupported shape"
            );
            return None;
        }
    };

    Some(SvgObject::group().with_child(outer).with_child(inner))
}
