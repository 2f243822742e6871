//! Circuit records consumed by the renderers.
//!
//! Field names follow circuit-json so records deserialize straight from a
//! loader's output. Only the records the renderers read are modelled; every
//! other `type` lands in [`CircuitElement::Other`].

use serde::{Deserialize, Deserializer, Serialize};

/// A 2D point in board units
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct BoardPoint {
    pub x: f64,
    pub y: f64,
}

impl BoardPoint {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// Loaders write `"port_hints": null` for unlabelled pads; read it as empty.
fn deserialize_port_hints<'de, D>(deserializer: D) -> Result<Vec<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let hints = Option::<Vec<String>>::deserialize(deserializer)?;
    Ok(hints.unwrap_or_default())
}

/// A drilled, plated hole with its copper annulus
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PcbPlatedHole {
    #[serde(default)]
    pub pcb_plated_hole_id: String,
    #[serde(default)]
    pub pcb_component_id: Option<String>,
    #[serde(default)]
    pub x: f64,
    #[serde(default)]
    pub y: f64,
    #[serde(default, deserialize_with = "deserialize_port_hints")]
    pub port_hints: Vec<String>,
    #[serde(flatten)]
    pub shape: PlatedHoleShape,
}

/// Plated hole geometry, tagged by `shape`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "shape", rename_all = "snake_case")]
pub enum PlatedHoleShape {
    Circle {
        outer_diameter: f64,
        hole_diameter: f64,
    },
    /// Vertical capsule. `outer_height >= outer_width` for a sane shape.
    Pill {
        outer_width: f64,
        outer_height: f64,
        hole_width: f64,
        hole_height: f64,
    },
    CircularHoleWithRectPad {
        hole_diameter: f64,
        rect_pad_width: f64,
        rect_pad_height: f64,
    },
    PillHoleWithRectPad {
        hole_width: f64,
        hole_height: f64,
        rect_pad_width: f64,
        rect_pad_height: f64,
    },
    #[serde(other)]
    Unsupported,
}

/// A surface-mount pad on a single copper layer
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PcbSmtPad {
    #[serde(default)]
    pub pcb_smtpad_id: String,
    #[serde(default)]
    pub pcb_component_id: Option<String>,
    #[serde(default)]
    pub x: f64,
    #[serde(default)]
    pub y: f64,
    pub layer: String,
    #[serde(default, deserialize_with = "deserialize_port_hints")]
    pub port_hints: Vec<String>,
    #[serde(flatten)]
    pub shape: SmtPadShape,
}

/// SMT pad geometry, tagged by `shape`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "shape", rename_all = "snake_case")]
pub enum SmtPadShape {
    Rect {
        width: f64,
        height: f64,
    },
    RotatedRect {
        width: f64,
        height: f64,
        /// Counter-clockwise, in degrees
        #[serde(default)]
        ccw_rotation: Option<f64>,
    },
    Pill {
        width: f64,
        height: f64,
        radius: f64,
    },
    Circle {
        radius: f64,
    },
    /// Vertices are absolute board positions, in drawing order.
    Polygon {
        #[serde(default)]
        points: Vec<BoardPoint>,
    },
    #[serde(other)]
    Unsupported,
}

/// Physical placement of a component on the board
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PcbComponent {
    pub pcb_component_id: String,
    #[serde(default)]
    pub source_component_id: Option<String>,
}

/// Schematic-level component definition
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SourceComponent {
    pub source_component_id: String,
    #[serde(default)]
    pub name: Option<String>,
}

/// Any record of a circuit, tagged by `type`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum CircuitElement {
    PcbComponent(PcbComponent),
    SourceComponent(SourceComponent),
    PcbPlatedHole(PcbPlatedHole),
    #[serde(rename = "pcb_smtpad")]
    PcbSmtPad(PcbSmtPad),
    #[serde(other)]
    Other,
}

impl CircuitElement {
    pub fn as_pcb_component(&self) -> Option<&PcbComponent> {
        match self {
            CircuitElement::PcbComponent(c) => Some(c),
            _ => None,
        }
    }

    pub fn as_source_component(&self) -> Option<&SourceComponent> {
        match self {
            CircuitElement::SourceComponent(c) => Some(c),
            _ => None,
        }
    }
}

/// Resolve the schematic name of the component owning a pad or hole.
///
/// Linear scan, first match wins. The placement must reference a source
/// component, and that source must carry a name.
pub fn source_component_name<'a>(
    pcb_component_id: Option<&str>,
    circuit: &'a [CircuitElement],
) -> Option<&'a str> {
    let pcb_component_id = pcb_component_id?;

    let component = circuit
        .iter()
        .filter_map(CircuitElement::as_pcb_component)
        .find(|c| c.pcb_component_id == pcb_component_id)?;
    let source_component_id = component.source_component_id.as_deref()?;

    circuit
        .iter()
        .filter_map(CircuitElement::as_source_component)
        .find(|s| s.source_component_id == source_component_id)?
        .name
        .as_deref()
}
