use serde::{Deserialize, Serialize};

/// Design parameters of a ski outline.
///
/// All values are millimeters. Widths are full widths; the outline builder
/// halves them for the symmetric half profile. Nothing here is validated,
/// see [`crate::operations::ValidateParameters`].
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SkiParameters {
    /// Overall length, tip end (x = 0) to tail end.
    pub total_length: f64,
    /// Width at the waist.
    pub waist_width: f64,
    /// Radius of the rounded nose.
    pub tip_arc_radius: f64,
    /// Radius of the rounded tail.
    pub tail_arc_radius: f64,
    /// Width at the tip taper point.
    pub tip_taper_width: f64,
    /// Width at the tail taper point.
    pub tail_taper_width: f64,
    /// Distance from the tip end to the start of the tip taper.
    pub tip_taper_offset: f64,
    /// Distance from the tail end to the start of the tail taper.
    pub tail_taper_offset: f64,
    /// Length of the tip taper.
    pub tip_taper_length: f64,
    /// Length of the tail taper.
    pub tail_taper_length: f64,
    /// Shift of the waist from the geometric center, positive towards the tail.
    pub setback: f64,
}

impl Default for SkiParameters {
    fn default() -> Self {
        Self {
            total_length: 1870.0,
            waist_width: 112.0,
            tip_arc_radius: 56.0,
            tail_arc_radius: 56.0,
            tip_taper_width: 135.0,
            tail_taper_width: 130.0,
            tip_taper_offset: 250.0,
            tail_taper_offset: 150.0,
            tip_taper_length: 100.0,
            tail_taper_length: 100.0,
            setback: 100.0,
        }
    }
}

impl SkiParameters {
    /// Returns the x-position of the waist.
    #[must_use]
    pub fn waist_x(&self) -> f64 {
        self.total_length * 0.5 + self.setback
    }
}

/// Shape family of the outline.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Mode {
    /// Tip arc, waist and tail arc only.
    Classic,
    /// Adds tip and tail taper points between the arcs and the waist.
    #[default]
    Tapered,
}

/// Names one field of [`SkiParameters`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ParameterField {
    TotalLength,
    WaistWidth,
    TipArcRadius,
    TailArcRadius,
    TipTaperWidth,
    TailTaperWidth,
    TipTaperOffset,
    TailTaperOffset,
    TipTaperLength,
    TailTaperLength,
    Setback,
}

impl ParameterField {
    /// Every field, in declaration order.
    pub const ALL: [Self; 11] = [
        Self::TotalLength,
        Self::WaistWidth,
        Self::TipArcRadius,
        Self::TailArcRadius,
        Self::TipTaperWidth,
        Self::TailTaperWidth,
        Self::TipTaperOffset,
        Self::TailTaperOffset,
        Self::TipTaperLength,
        Self::TailTaperLength,
        Self::Setback,
    ];

    /// Returns the snake-case field name.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::TotalLength => "total_length",
            Self::WaistWidth => "waist_width",
            Self::TipArcRadius => "tip_arc_radius",
            Self::TailArcRadius => "tail_arc_radius",
            Self::TipTaperWidth => "tip_taper_width",
            Self::TailTaperWidth => "tail_taper_width",
            Self::TipTaperOffset => "tip_taper_offset",
            Self::TailTaperOffset => "tail_taper_offset",
            Self::TipTaperLength => "tip_taper_length",
            Self::TailTaperLength => "tail_taper_length",
            Self::Setback => "setback",
        }
    }

    /// Whether the field takes part in building an outline of the given mode.
    #[must_use]
    pub const fn applies_to(self, mode: Mode) -> bool {
        match self {
            Self::TipTaperWidth
            | Self::TailTaperWidth
            | Self::TipTaperOffset
            | Self::TailTaperOffset
            | Self::TipTaperLength
            | Self::TailTaperLength => matches!(mode, Mode::Tapered),
            _ => true,
        }
    }

    /// Reads this field from `params`.
    #[must_use]
    pub fn get(self, params: &SkiParameters) -> f64 {
        match self {
            Self::TotalLength => params.total_length,
            Self::WaistWidth => params.waist_width,
            Self::TipArcRadius => params.tip_arc_radius,
            Self::TailArcRadius => params.tail_arc_radius,
            Self::TipTaperWidth => params.tip_taper_width,
            Self::TailTaperWidth => params.tail_taper_width,
            Self::TipTaperOffset => params.tip_taper_offset,
            Self::TailTaperOffset => params.tail_taper_offset,
            Self::TipTaperLength => params.tip_taper_length,
            Self::TailTaperLength => params.tail_taper_length,
            Self::Setback => params.setback,
        }
    }

    /// Writes `value` into this field of `params`.
    pub fn set(self, params: &mut SkiParameters, value: f64) {
        let slot = match self {
            Self::TotalLength => &mut params.total_length,
            Self::WaistWidth => &mut params.waist_width,
            Self::TipArcRadius => &mut params.tip_arc_radius,
            Self::TailArcRadius => &mut params.tail_arc_radius,
            Self::TipTaperWidth => &mut params.tip_taper_width,
            Self::TailTaperWidth => &mut params.tail_taper_width,
            Self::TipTaperOffset => &mut params.tip_taper_offset,
            Self::TailTaperOffset => &mut params.tail_taper_offset,
            Self::TipTaperLength => &mut params.tip_taper_length,
            Self::TailTaperLength => &mut params.tail_taper_length,
            Self::Setback => &mut params.setback,
        };
        *slot = value;
    }
}
