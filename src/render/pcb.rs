//! PCB view: copper-colored pads and holes with component-qualified labels

use crate::circuit::{CircuitElement, PcbPlatedHole, PcbSmtPad};

use super::context::PcbContext;
use super::defaults;
use super::holes::{HoleStyle, hole_group};
use super::labels::{LabelStyle, component_label, hole_label, pad_label, pad_number};
use super::pads::{PadStyle, pad_shape};
use super::svg::SvgObject;

const HOLE_LABEL: LabelStyle = LabelStyle {
    class: Some(defaults::PCB_HOLE_NUMBER_CLASS),
    fill: defaults::PCB_LABEL_COLOR,
    font_size: defaults::PCB_ANNOTATED_FONT_SIZE,
};

/// Render a plated hole for the PCB view.
///
/// Holes go through every layer, so the layer filter does not apply. The
/// label is `<component>.<pad>` when `circuit` names the owning component.
pub fn create_svg_objects_from_pcb_plated_hole(
    hole: &PcbPlatedHole,
    ctx: &PcbContext,
    circuit: &[CircuitElement],
) -> Vec<SvgObject> {
    let center = ctx.transform.apply(hole.x, hole.y);
    let style = HoleStyle::pcb(&ctx.color_map.copper.top, &ctx.color_map.drill);

    let Some(group) = hole_group(hole, &ctx.transform, center, &style) else {
        return Vec::new();
    };

    let mut objects = vec![group];
    if let Some(number) = pad_number(&hole.port_hints, &hole.pcb_plated_hole_id) {
        let text = component_label(number, hole.pcb_component_id.as_deref(), circuit);
        objects.push(hole_label(&text, center, &HOLE_LABEL));
    }
    objects
}

/// Render an SMT pad for the PCB view.
///
/// Pads off the context's layer filter render nothing. Every rendered pad is
/// labelled; pads without port hints show `X`.
pub fn create_svg_objects_from_smt_pad(
    pad: &PcbSmtPad,
    ctx: &PcbContext,
    circuit: &[CircuitElement],
) -> Vec<SvgObject> {
    if !ctx.shows_layer(&pad.layer) {
        crate::log::debug!(
            id = pad.pcb_smtpad_id.as_str(),
            layer = pad.layer.as_str(),
            "pad filtered out by layer"
        );
        return Vec::new();
    }

    let style = PadStyle {
        class: defaults::PCB_PAD_CLASS,
        fill: ctx.color_map.layer_color(&pad.layer),
    };

    let Some((shape, anchor)) = pad_shape(pad, &ctx.transform, &style) else {
        return Vec::new();
    };

    let number = pad
        .port_hints
        .first()
        .map(String::as_str)
        .filter(|hint| !hint.is_empty())
        .unwrap_or(defaults::PCB_PAD_FALLBACK_LABEL);
    let text = if ctx.pad_labels.names_components() {
        component_label(number, pad.pcb_component_id.as_deref(), circuit)
    } else {
        number.to_string()
    };

    let label_style = LabelStyle {
        class: None,
        fill: defaults::PCB_LABEL_COLOR,
        font_size: ctx.pad_labels.font_size(),
    };

    vec![shape, pad_label(&text, &anchor, &label_style, None)]
}
