//! SMT pad shapes shared by the assembly and PCB views

use glam::{DVec2, dvec2};

use crate::circuit::{PcbSmtPad, SmtPadShape};
use crate::types::ViewTransform;

use super::geometry::{centered_rect_origin, local_rect_origin, points_attr, translate_rotate};
use super::labels::LabelAnchor;
use super::svg::{ElementName, SvgObject};

/// Class and fill for one view's pads
#[derive(Debug, Clone, Copy)]
pub struct PadStyle<'a> {
    pub class: &'static str,
    pub fill: &'a str,
}

fn pad_element(name: ElementName, style: &PadStyle) -> SvgObject {
    SvgObject::new(name)
        .with_attr("class", style.class)
        .with_attr("fill", style.fill)
}

fn sized(el: SvgObject, origin: DVec2, size: DVec2) -> SvgObject {
    el.with_num("x", origin.x)
        .with_num("y", origin.y)
        .with_num("width", size.x)
        .with_num("height", size.y)
}

/// Build the shape element for a pad plus the anchor its label uses, or
/// `None` for shapes we don't draw.
///
/// Widths and radii scale by `|a|`, heights by `|d|`. Polygon vertices are
/// positions, so they go through the full transform instead.
pub fn pad_shape(
    pad: &PcbSmtPad,
    transform: &ViewTransform,
    style: &PadStyle,
) -> Option<(SvgObject, LabelAnchor)> {
    let center = transform.apply(pad.x, pad.y);
    let (kx, ky) = (transform.scale_x(), transform.scale_y());

    let (shape, anchor) = match &pad.shape {
        SmtPadShape::RotatedRect {
            width,
            height,
            ccw_rotation: Some(rotation),
        } if *rotation != 0.0 => {
            let size = dvec2(width * kx, height * ky);
            let placement = translate_rotate(center, transform.device_rotation(*rotation));
            let origin = local_rect_origin(size);
            let rect = sized(pad_element(ElementName::Rect, style), origin, size)
                .with_attr("transform", placement.clone());
            (rect, LabelAnchor::Transform(placement))
        }
        SmtPadShape::Rect { width, height } | SmtPadShape::RotatedRect { width, height, .. } => {
            let size = dvec2(width * kx, height * ky);
            let rect = sized(
                pad_element(ElementName::Rect, style),
                centered_rect_origin(center, size),
                size,
            );
            (rect, LabelAnchor::Center(center))
        }
        SmtPadShape::Pill { width, height, radius } => {
            let size = dvec2(width * kx, height * ky);
            let radius = radius * kx;
            let rect = sized(
                pad_element(ElementName::Rect, style),
                centered_rect_origin(center, size),
                size,
            )
            .with_num("rx", radius)
            .with_num("ry", radius);
            (rect, LabelAnchor::Center(center))
        }
        SmtPadShape::Circle { radius } => {
            let circle = pad_element(ElementName::Circle, style)
                .with_num("cx", center.x)
                .with_num("cy", center.y)
                .with_num("r", radius * kx);
            (circle, LabelAnchor::Center(center))
        }
        SmtPadShape::Polygon { points } => {
            let points: Vec<DVec2> = points
                .iter()
                .map(|p| transform.apply(p.x, p.y))
                .collect();
            let polygon = pad_element(ElementName::Polygon, style)
                .with_attr("points", points_attr(&points));
            (polygon, LabelAnchor::Center(center))
        }
        SmtPadShape::Unsupported => {
            crate::log::debug!(
                id = pad.pcb_smtpad_id.as_str(),
                "skipping smt pad with unsupported shape"
            );
            return None;
        }
    };

    Some((shape.with_attr("data-layer", pad.layer.as_str()), anchor))
}
