//! Tissue regions of the wound cross-section.
//!
//! The scenario cuts a V-shaped wound into the skin. In the x/y plane the
//! wound edge is the curve `y = |slope * x + intercept| + offset`; points on
//! or above it are blood-filled wound, points below it are tissue. Tissue
//! is epidermis above `epidermis_level` and dermis below, and the dermis has
//! a collagen-exposed band where platelets are activated. z is irrelevant.

use cicatrix_core::error::{CicatrixError, Result};
use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Region {
    /// Blood-filled wound.
    Wound,
    Epidermis,
    Dermis,
    /// Dermis deep enough past the wound edge to expose collagen.
    ExposedDermis,
}

impl Region {
    pub const ALL: [Region; 4] = [
        Region::Wound,
        Region::Epidermis,
        Region::Dermis,
        Region::ExposedDermis,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            Region::Wound => "wound",
            Region::Epidermis => "epidermis",
            Region::Dermis => "dermis",
            Region::ExposedDermis => "exposed dermis",
        }
    }
}

impl fmt::Display for Region {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Shape of the wound cross-section.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct WoundGeometry {
    pub slope: f64,
    pub intercept: f64,
    /// Vertical offset of the wound edge; also the depth term of the
    /// collagen-exposure predicate.
    pub offset: f64,
    /// Tissue above this y is epidermis.
    pub epidermis_level: f64,
    /// Collagen depth past which dermis counts as exposed.
    pub collagen_exposure_depth: f64,
}

impl Default for WoundGeometry {
    fn default() -> Self {
        Self {
            slope: -2.0,
            intercept: 100.0,
            offset: 20.0,
            epidermis_level: 60.0,
            collagen_exposure_depth: 25.0,
        }
    }
}

impl WoundGeometry {
    /// y of the wound edge at `x`.
    pub fn wound_boundary(&self, x: f64) -> f64 {
        (self.slope * x + self.intercept).abs() + self.offset
    }

    /// Collagen depth at `(x, y)`: `y - wound_boundary(x) + offset`.
    pub fn collagen_depth(&self, x: f64, y: f64) -> f64 {
        y - self.wound_boundary(x) + self.offset
    }

    pub fn classify(&self, x: f64, y: f64) -> Region {
        if y >= self.wound_boundary(x) {
            Region::Wound
        } else if y > self.epidermis_level {
            Region::Epidermis
        } else if self.collagen_depth(x, y) > self.collagen_exposure_depth {
            Region::ExposedDermis
        } else {
            Region::Dermis
        }
    }

    pub fn validate(&self) -> Result<()> {
        let fields = [
            ("geometry.slope", self.slope),
            ("geometry.intercept", self.intercept),
            ("geometry.offset", self.offset),
            ("geometry.epidermis_level", self.epidermis_level),
            ("geometry.collagen_exposure_depth", self.collagen_exposure_depth),
        ];
        for (field, value) in fields {
            if !value.is_finite() {
                return Err(CicatrixError::invalid_config(field, value, "must be finite"));
            }
        }
        Ok(())
    }
}
