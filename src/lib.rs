//! Turn PCB plated holes and SMT pads into SVG element trees.
//!
//! Each renderer takes one circuit record and a view context and returns the
//! SVG objects for it, in paint order. Two views are supported:
//!
//! - **assembly**: grayscale pad and hole silhouettes with pad numbers
//! - **pcb**: copper-colored pads and holes, labelled `<component>.<pad>`
//!
//! Renderers never fail. Unsupported shapes produce no objects.
//!
//! ```rust
//! use boardsvg::{PcbContext, ViewTransform, create_svg_objects_from_smt_pad};
//! use boardsvg::circuit::{PcbSmtPad, SmtPadShape};
//!
//! let pad = PcbSmtPad {
//!     pcb_smtpad_id: "pcb_smtpad_0".to_string(),
//!     pcb_component_id: None,
//!     x: 10.0,
//!     y: 5.0,
//!     layer: "top".to_string(),
//!     port_hints: vec!["1".to_string()],
//!     shape: SmtPadShape::Circle { radius: 0.5 },
//! };
//! let ctx = PcbContext::new(ViewTransform::uniform_scale(2.0).unwrap());
//!
//! let objects = create_svg_objects_from_smt_pad(&pad, &ctx, &[]);
//! assert_eq!(objects[0].attr("cx"), Some("20"));
//! assert_eq!(objects[0].attr("r"), Some("1"));
//! ```

pub mod circuit;
pub mod errors;
mod log;
pub mod render;
pub mod types;

pub use circuit::CircuitElement;
pub use errors::ContextError;
pub use render::*;
pub use types::ViewTransform;

/// Render any circuit record for the assembly view. Records that are not
/// pads or holes produce nothing.
pub fn render_assembly_element(element: &CircuitElement, ctx: &AssemblyContext) -> Vec<SvgObject> {
    match element {
        CircuitElement::PcbPlatedHole(hole) => {
            create_svg_objects_from_assembly_plated_hole(hole, ctx)
        }
        CircuitElement::PcbSmtPad(pad) => create_svg_objects_from_assembly_smt_pad(pad, ctx),
        _ => Vec::new(),
    }
}

/// Render any circuit record for the PCB view, using `circuit` to name
/// owning components. Records that are not pads or holes produce nothing.
pub fn render_pcb_element(
    element: &CircuitElement,
    ctx: &PcbContext,
    circuit: &[CircuitElement],
) -> Vec<SvgObject> {
    match element {
        CircuitElement::PcbPlatedHole(hole) => {
            create_svg_objects_from_pcb_plated_hole(hole, ctx, circuit)
        }
        CircuitElement::PcbSmtPad(pad) => create_svg_objects_from_smt_pad(pad, ctx, circuit),
        _ => Vec::new(),
    }
}
