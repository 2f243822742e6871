//! SVG object rendering for plated holes and SMT pads
//!
//! This module is organized into submodules:
//! - `svg`: the element tree renderers produce, and number formatting
//! - `geometry`: path data and derived shape dimensions
//! - `context`: per-view settings (`AssemblyContext`, `PcbContext`)
//! - `defaults`: fixed colors, fonts and class names
//! - `labels`: pad number resolution and text elements
//! - `holes` / `pads`: shape dispatch shared by both views
//! - `assembly` / `pcb`: the view entry points

pub mod assembly;
pub mod context;
pub mod defaults;
pub mod geometry;
pub mod holes;
pub mod labels;
pub mod pads;
pub mod pcb;
pub mod svg;

pub use assembly::{
    create_svg_objects_from_assembly_plated_hole, create_svg_objects_from_assembly_smt_pad,
};
pub use context::{AssemblyContext, ColorMap, CopperColors, PadLabelProfile, PcbContext};
pub use pcb::{create_svg_objects_from_pcb_plated_hole, create_svg_objects_from_smt_pad};
pub use svg::{ElementName, SvgNode, SvgObject, fmt_num};
