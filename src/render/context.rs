//! Rendering contexts - the per-view settings a renderer reads
//!
//! Contexts are plain values built with `with_*` methods. Nothing in them is
//! mutated during rendering.

use serde::{Deserialize, Serialize};

use crate::types::ViewTransform;

use super::defaults;

/// Copper fill per layer name
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CopperColors {
    pub top: String,
    pub inner1: String,
    pub inner2: String,
    pub inner3: String,
    pub inner4: String,
    pub inner5: String,
    pub inner6: String,
    pub bottom: String,
}

impl Default for CopperColors {
    fn default() -> Self {
        Self {
            top: "rgb(200, 52, 52)".to_string(),
            inner1: "rgb(255, 140, 0)".to_string(),
            inner2: "rgb(255, 215, 0)".to_string(),
            inner3: "rgb(50, 205, 50)".to_string(),
            inner4: "rgb(64, 224, 208)".to_string(),
            inner5: "rgb(138, 43, 226)".to_string(),
            inner6: "rgb(255, 105, 180)".to_string(),
            bottom: "rgb(77, 127, 196)".to_string(),
        }
    }
}

impl CopperColors {
    pub fn get(&self, layer: &str) -> Option<&str> {
        let color = match layer {
            "top" => &self.top,
            "inner1" => &self.inner1,
            "inner2" => &self.inner2,
            "inner3" => &self.inner3,
            "inner4" => &self.inner4,
            "inner5" => &self.inner5,
            "inner6" => &self.inner6,
            "bottom" => &self.bottom,
            _ => return None,
        };
        Some(color.as_str())
    }
}

/// Layer-to-color mapping for the PCB view.
///
/// Deserializes with defaults for every missing field, so a caller's config
/// only needs the colors it overrides.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ColorMap {
    pub copper: CopperColors,
    pub drill: String,
}

impl Default for ColorMap {
    fn default() -> Self {
        Self {
            copper: CopperColors::default(),
            drill: "#FF26E2".to_string(),
        }
    }
}

impl ColorMap {
    /// Fill for a pad on `layer`; unknown layers fall back to white.
    pub fn layer_color(&self, layer: &str) -> &str {
        self.copper.get(layer).unwrap_or(defaults::UNKNOWN_LAYER_COLOR)
    }
}

/// How PCB pad labels are built
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PadLabelProfile {
    /// `<component>.<pad>` when the owning component has a name, 10px text
    #[default]
    Annotated,
    /// Bare pad number, small text, no component lookup
    Minimal,
}

impl PadLabelProfile {
    pub fn font_size(self) -> &'static str {
        match self {
            PadLabelProfile::Annotated => defaults::PCB_ANNOTATED_FONT_SIZE,
            PadLabelProfile::Minimal => defaults::PCB_MINIMAL_FONT_SIZE,
        }
    }

    pub fn names_components(self) -> bool {
        matches!(self, PadLabelProfile::Annotated)
    }
}

/// Settings for the assembly view
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct AssemblyContext {
    pub transform: ViewTransform,
}

impl AssemblyContext {
    pub fn new(transform: ViewTransform) -> Self {
        Self { transform }
    }
}

/// Settings for the PCB view
#[derive(Debug, Clone, PartialEq, Default)]
pub struct PcbContext {
    pub transform: ViewTransform,
    /// When set, pads on any other layer render nothing
    pub layer: Option<String>,
    pub color_map: ColorMap,
    pub pad_labels: PadLabelProfile,
}

impl PcbContext {
    pub fn new(transform: ViewTransform) -> Self {
        Self {
            transform,
            ..Self::default()
        }
    }

    pub fn with_layer_filter(mut self, layer: impl Into<String>) -> Self {
        self.layer = Some(layer.into());
        self
    }

    pub fn with_color_map(mut self, color_map: ColorMap) -> Self {
        self.color_map = color_map;
        self
    }

    pub fn with_pad_labels(mut self, profile: PadLabelProfile) -> Self {
        self.pad_labels = profile;
        self
    }

    /// Whether a pad on `layer` passes the layer filter
    pub fn shows_layer(&self, layer: &str) -> bool {
        self.layer.as_deref().is_none_or(|filter| filter == layer)
    }
}
