//! Fixed colors, fonts, sizes and class names

pub const FONT_FAMILY: &str = "Arial, sans-serif";
pub const TEXT_ANCHOR: &str = "middle";
pub const DOMINANT_BASELINE: &str = "central";

// Assembly view: grayscale silhouettes, sized in an already-scaled space
pub const ASSEMBLY_PAD_COLOR: &str = "rgb(210, 210, 210)";
pub const ASSEMBLY_HOLE_COLOR: &str = "rgb(190, 190, 190)";
pub const ASSEMBLY_LABEL_COLOR: &str = "#000000";
pub const ASSEMBLY_FONT_SIZE: &str = "0.8";

// PCB view: device-pixel font sizes
pub const PCB_LABEL_COLOR: &str = "#ffffff";
pub const PCB_ANNOTATED_FONT_SIZE: &str = "10";
pub const PCB_MINIMAL_FONT_SIZE: &str = "5";

/// Pad number used by PCB pads without port hints
pub const PCB_PAD_FALLBACK_LABEL: &str = "X";

/// Fill for layers missing from the color map
pub const UNKNOWN_LAYER_COLOR: &str = "white";

pub const ASSEMBLY_PAD_CLASS: &str = "assembly-pad";
pub const ASSEMBLY_PAD_NUMBER_CLASS: &str = "assembly-pad-number";
pub const ASSEMBLY_HOLE_NUMBER_CLASS: &str = "assembly-hole-number";
pub const PCB_PAD_CLASS: &str = "pcb-pad";
pub const PCB_HOLE_NUMBER_CLASS: &str = "pcb-hole-number";
