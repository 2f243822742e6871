//! Assembly view: grayscale silhouettes with black pad numbers

use crate::circuit::{PcbPlatedHole, PcbSmtPad};

use super::context::AssemblyContext;
use super::defaults;
use super::holes::{HoleStyle, hole_group};
use super::labels::{LabelStyle, hole_label, pad_label, pad_number};
use super::pads::{PadStyle, pad_shape};
use super::svg::SvgObject;

const HOLE_LABEL: LabelStyle = LabelStyle {
    class: Some(defaults::ASSEMBLY_HOLE_NUMBER_CLASS),
    fill: defaults::ASSEMBLY_LABEL_COLOR,
    font_size: defaults::ASSEMBLY_FONT_SIZE,
};

const PAD_LABEL: LabelStyle = LabelStyle {
    class: Some(defaults::ASSEMBLY_PAD_NUMBER_CLASS),
    fill: defaults::ASSEMBLY_LABEL_COLOR,
    font_size: defaults::ASSEMBLY_FONT_SIZE,
};

/// Render a plated hole for the assembly view.
///
/// Returns the hole group, followed by its pad number when one can be found
/// in the port hints or the hole id.
pub fn create_svg_objects_from_assembly_plated_hole(
    hole: &PcbPlatedHole,
    ctx: &AssemblyContext,
) -> Vec<SvgObject> {
    let center = ctx.transform.apply(hole.x, hole.y);
    let style = HoleStyle::assembly(defaults::ASSEMBLY_PAD_COLOR, defaults::ASSEMBLY_HOLE_COLOR);

    let Some(group) = hole_group(hole, &ctx.transform, center, &style) else {
        return Vec::new();
    };

    let mut objects = vec![group];
    if let Some(number) = pad_number(&hole.port_hints, &hole.pcb_plated_hole_id) {
        objects.push(hole_label(number, center, &HOLE_LABEL));
    }
    objects
}

/// Render an SMT pad for the assembly view.
///
/// The assembly view shows every layer; there is no layer filter here.
pub fn create_svg_objects_from_assembly_smt_pad(
    pad: &PcbSmtPad,
    ctx: &AssemblyContext,
) -> Vec<SvgObject> {
    let style = PadStyle {
        class: defaults::ASSEMBLY_PAD_CLASS,
        fill: defaults::ASSEMBLY_PAD_COLOR,
    };

    let Some((shape, anchor)) = pad_shape(pad, &ctx.transform, &style) else {
        return Vec::new();
    };

    let mut objects = vec![shape];
    if let Some(number) = pad_number(&pad.port_hints, &pad.pcb_smtpad_id) {
        let layer = Some(pad.layer.as_str());
        objects.push(pad_label(number, &anchor, &PAD_LABEL, layer));
    }
    objects
}
