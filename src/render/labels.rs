//! Pad number labels
//!
//! Resolves the text a pad or hole is labelled with and builds the centered
//! `<text>` element that carries it.

use glam::DVec2;

use crate::circuit::{CircuitElement, source_component_name};

use super::defaults;
use super::geometry::translate;
use super::svg::{ElementName, SvgObject};

/// Part of an id after its last `_`, or the whole id when it has none.
/// Empty results count as missing.
pub fn id_suffix(id: &str) -> Option<&str> {
    let suffix = id.rsplit_once('_').map_or(id, |(_, tail)| tail);
    (!suffix.is_empty()).then_some(suffix)
}

/// First non-empty port hint, else the id suffix.
pub fn pad_number<'a>(port_hints: &'a [String], id: &'a str) -> Option<&'a str> {
    port_hints
        .first()
        .map(String::as_str)
        .filter(|hint| !hint.is_empty())
        .or_else(|| id_suffix(id))
}

/// Prefix a pad number with its owning component's name when the circuit
/// names it: `R1.2`. Falls back to the bare pad number.
pub fn component_label(
    pad_number: &str,
    pcb_component_id: Option<&str>,
    circuit: &[CircuitElement],
) -> String {
    match source_component_name(pcb_component_id, circuit) {
        Some(name) => format!("{}.{}", name, pad_number),
        None => {
            crate::log::debug!(
                pad_number,
                pcb_component_id = ?pcb_component_id,
                "no named source component, using bare pad number"
            );
            pad_number.to_string()
        }
    }
}

/// Where a label sits relative to the shape it names
#[derive(Debug, Clone, PartialEq)]
pub enum LabelAnchor {
    /// Untransformed center in device units
    Center(DVec2),
    /// A full `transform` attribute shared with a rotated shape
    Transform(String),
}

impl LabelAnchor {
    fn transform_attr(&self) -> String {
        match self {
            LabelAnchor::Center(center) => translate(*center),
            LabelAnchor::Transform(t) => t.clone(),
        }
    }
}

/// Text styling for one view
#[derive(Debug, Clone, Copy)]
pub struct LabelStyle {
    pub class: Option<&'static str>,
    pub fill: &'static str,
    pub font_size: &'static str,
}

fn label_element(style: &LabelStyle) -> SvgObject {
    let text = SvgObject::new(ElementName::Text);
    match style.class {
        Some(class) => text.with_attr("class", class),
        None => text,
    }
}

fn with_font(text: SvgObject, style: &LabelStyle) -> SvgObject {
    text.with_attr("fill", style.fill)
        .with_attr("font-family", defaults::FONT_FAMILY)
        .with_attr("font-size", style.font_size)
        .with_attr("text-anchor", defaults::TEXT_ANCHOR)
        .with_attr("dominant-baseline", defaults::DOMINANT_BASELINE)
}

/// Hole label: positioned with `x`/`y` at the hole center.
pub fn hole_label(value: &str, center: DVec2, style: &LabelStyle) -> SvgObject {
    let text = label_element(style)
        .with_num("x", center.x)
        .with_num("y", center.y);
    with_font(text, style).with_text(value)
}

/// Pad label: drawn at the origin and moved by a `transform`, so a rotated
/// pad's label rotates with it.
pub fn pad_label(
    value: &str,
    anchor: &LabelAnchor,
    style: &LabelStyle,
    layer: Option<&str>,
) -> SvgObject {
    let text = label_element(style).with_attr("x", "0").with_attr("y", "0");
    let text = with_font(text, style)
        .with_attr("transform", anchor.transform_attr());
    let text = match layer {
        Some(layer) => text.with_attr("data-layer", layer),
        None => text,
    };
    text.with_text(value)
}
