//! Scenario configuration.
//!
//! Every tunable number of the wound scenario lives here, with the values
//! of the reference scenario as defaults. Configs are plain serde structs so
//! callers can load them from any format; [`ScenarioConfig::validate`] is
//! the single gate that runs before any agent is created.

use crate::region::WoundGeometry;
use cicatrix_core::error::{CicatrixError, ConfigError, Result};
use cicatrix_core::signal::{self, SubstanceDefinition};
use serde::{Deserialize, Serialize};

/// Top-level scenario configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScenarioConfig {
    /// Base seed; population and lifecycle draw from independent streams of it.
    #[serde(default = "default_seed")]
    pub seed: u64,
    /// Lower end of the sampling cube, on every axis.
    #[serde(default = "default_bound_min")]
    pub bound_min: f64,
    /// Upper end of the sampling cube, on every axis.
    #[serde(default = "default_bound_max")]
    pub bound_max: f64,
    /// Number of position samples drawn by the generator.
    #[serde(default = "default_target_count")]
    pub target_count: usize,
    /// Timesteps the scheduler runs after population.
    #[serde(default = "default_steps")]
    pub steps: u64,
    /// Attach the growth/division behavior to generated fibroblasts.
    #[serde(default)]
    pub fibroblast_growth: bool,
    #[serde(default)]
    pub geometry: WoundGeometry,
    #[serde(default)]
    pub lifecycle: LifecycleConfig,
    #[serde(default = "SubstanceDefinition::wound_defaults")]
    pub substances: Vec<SubstanceDefinition>,
}

/// Parameters of the fibroblast growth/division rule.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LifecycleConfig {
    /// Volume added per timestep while growing.
    #[serde(default = "default_growth_increment")]
    pub growth_increment: f64,
    /// Range of each random displacement component while growing.
    #[serde(default = "default_displacement_range")]
    pub displacement_range: [f64; 2],
    /// Diameter at which a fibroblast stops growing.
    #[serde(default = "default_mature_diameter_threshold")]
    pub mature_diameter_threshold: f64,
    /// Chance that a mature, division-capable fibroblast divides in a step.
    #[serde(default = "default_division_probability")]
    pub division_probability: f64,
}

// Default value functions
fn default_seed() -> u64 { 4357 }
fn default_bound_min() -> f64 { 0.0 }
fn default_bound_max() -> f64 { 100.0 }
fn default_target_count() -> usize { 10_000 }
fn default_steps() -> u64 { 1000 }
fn default_growth_increment() -> f64 { 100.0 }
fn default_displacement_range() -> [f64; 2] { [-2.0, 2.0] }
fn default_mature_diameter_threshold() -> f64 { 4.0 }
fn default_division_probability() -> f64 { 0.8 }

impl Default for ScenarioConfig {
    fn default() -> Self {
        Self {
            seed: default_seed(),
            bound_min: default_bound_min(),
            bound_max: default_bound_max(),
            target_count: default_target_count(),
            steps: default_steps(),
            fibroblast_growth: false,
            geometry: WoundGeometry::default(),
            lifecycle: LifecycleConfig::default(),
            substances: SubstanceDefinition::wound_defaults(),
        }
    }
}

impl Default for LifecycleConfig {
    fn default() -> Self {
        Self {
            growth_increment: default_growth_increment(),
            displacement_range: default_displacement_range(),
            mature_diameter_threshold: default_mature_diameter_threshold(),
            division_probability: default_division_probability(),
        }
    }
}

impl ScenarioConfig {
    /// Scenario with a different sample count, everything else default.
    pub fn with_target_count(mut self, target_count: usize) -> Self {
        self.target_count = target_count;
        self
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    pub fn with_bounds(mut self, bound_min: f64, bound_max: f64) -> Self {
        self.bound_min = bound_min;
        self.bound_max = bound_max;
        self
    }

    /// Parse a JSON scenario and validate it.
    pub fn from_json(json: &str) -> Result<Self> {
        let config: ScenarioConfig = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<()> {
        if !(self.bound_max - self.bound_min).is_finite() || self.bound_min > self.bound_max {
            return Err(ConfigError::InvalidBounds {
                min: self.bound_min,
                max: self.bound_max,
            }
            .into());
        }
        self.geometry.validate()?;
        self.lifecycle.validate()?;
        signal::validate_table(&self.substances)
    }
}

impl LifecycleConfig {
    /// Whether a division-capable fibroblast leaves more than one
    /// division-capable descendant on average (`2p > 1`), in which case the
    /// fibroblast count grows without bound.
    pub fn is_supercritical(&self) -> bool {
        2.0 * self.division_probability > 1.0
    }

    pub fn validate(&self) -> Result<()> {
        if !(self.growth_increment.is_finite() && self.growth_increment > 0.0) {
            return Err(CicatrixError::invalid_config(
                "lifecycle.growth_increment",
                self.growth_increment,
                "must be a finite, positive volume",
            ));
        }
        let [low, high] = self.displacement_range;
        if !(high - low).is_finite() || low > high {
            return Err(CicatrixError::invalid_config(
                "lifecycle.displacement_range",
                format!("[{low}, {high}]"),
                "must have a finite width with low <= high",
            ));
        }
        if !(self.mature_diameter_threshold.is_finite() && self.mature_diameter_threshold > 0.0) {
            return Err(CicatrixError::invalid_config(
                "lifecycle.mature_diameter_threshold",
                self.mature_diameter_threshold,
                "must be a finite, positive diameter",
            ));
        }
        if !(0.0..=1.0).contains(&self.division_probability) {
            return Err(CicatrixError::out_of_range(
                "lifecycle.division_probability",
                0.0,
                1.0,
                self.division_probability,
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_reference_scenario() {
        let config = ScenarioConfig::default();
        assert_eq!(config.target_count, 10_000);
        assert_eq!(config.lifecycle.growth_increment, 100.0);
        assert_eq!(config.lifecycle.displacement_range, [-2.0, 2.0]);
        assert_eq!(config.lifecycle.mature_diameter_threshold, 4.0);
        assert_eq!(config.lifecycle.division_probability, 0.8);
        assert!(!config.fibroblast_growth);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn inverted_bounds_rejected() {
        let err = ScenarioConfig::default().with_bounds(10.0, -10.0).validate().unwrap_err();
        assert_eq!(
            err,
            CicatrixError::Config(ConfigError::InvalidBounds { min: 10.0, max: -10.0 })
        );
    }

    #[test]
    fn non_finite_bounds_rejected() {
        assert!(ScenarioConfig::default().with_bounds(f64::NAN, 1.0).validate().is_err());
        assert!(ScenarioConfig::default().with_bounds(0.0, f64::INFINITY).validate().is_err());
    }

    #[test]
    fn bounds_with_overflowing_width_rejected() {
        let err = ScenarioConfig::default()
            .with_bounds(-1e308, 1e308)
            .validate()
            .unwrap_err();
        assert!(matches!(err, CicatrixError::Config(ConfigError::InvalidBounds { .. })));
        assert!(ScenarioConfig::default().with_bounds(-1e300, 1e300).validate().is_ok());
    }

    #[test]
    fn displacement_with_overflowing_width_rejected() {
        let mut config = LifecycleConfig::default();
        config.displacement_range = [-f64::MAX, f64::MAX];
        assert!(config.validate().is_err());
    }

    #[test]
    fn degenerate_bounds_allowed() {
        assert!(ScenarioConfig::default().with_bounds(5.0, 5.0).validate().is_ok());
    }

    #[test]
    fn probability_out_of_range_rejected() {
        let mut config = ScenarioConfig::default();
        config.lifecycle.division_probability = 1.5;
        assert!(matches!(
            config.validate().unwrap_err(),
            CicatrixError::Config(ConfigError::OutOfRange { .. })
        ));
    }

    #[test]
    fn default_division_probability_is_supercritical() {
        let mut config = LifecycleConfig::default();
        assert!(config.is_supercritical());
        config.division_probability = 0.5;
        assert!(!config.is_supercritical());
    }

    #[test]
    fn non_positive_increment_rejected() {
        let mut config = LifecycleConfig::default();
        config.growth_increment = 0.0;
        assert!(config.validate().is_err());
        config.growth_increment = -1.0;
        assert!(config.validate().is_err());
    }

    #[test]
    fn inverted_displacement_rejected() {
        let mut config = LifecycleConfig::default();
        config.displacement_range = [2.0, -2.0];
        assert!(config.validate().is_err());
    }

    #[test]
    fn partial_json_fills_defaults() {
        let config: ScenarioConfig =
            serde_json::from_str(r#"{"target_count": 12, "lifecycle": {"division_probability": 0.5}}"#)
                .unwrap();
        assert_eq!(config.target_count, 12);
        assert_eq!(config.lifecycle.division_probability, 0.5);
        assert_eq!(config.lifecycle.growth_increment, 100.0);
        assert_eq!(config.substances.len(), 2);
    }

    #[test]
    fn negative_count_does_not_deserialize() {
        let err = ScenarioConfig::from_json(r#"{"target_count": -1}"#).unwrap_err();
        assert!(matches!(err, CicatrixError::Serialization(_)));
    }

    #[test]
    fn from_json_validates() {
        let err = ScenarioConfig::from_json(r#"{"bound_min": 5.0, "bound_max": 1.0}"#).unwrap_err();
        assert!(err.is_config());
        let ok = ScenarioConfig::from_json(r#"{"seed": 9}"#).unwrap();
        assert_eq!(ok, ScenarioConfig::default().with_seed(9));
    }

    #[test]
    fn malformed_substance_name_rejected_at_parse() {
        let json = r#"{"substances": [{"name": "bad name", "diffusion_coefficient": 0.1,
                       "decay_constant": 0.1, "resolution": 10}]}"#;
        assert!(ScenarioConfig::from_json(json).is_err());
    }
}
