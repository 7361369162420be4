//! Diffusible substances, referenced by name.
//!
//! The diffusion field itself lives in the host. Agents only carry a name
//! plus a rate (secretion) or a coefficient (chemotaxis); the substance
//! table records the parameters the host needs to build the field.

use crate::error::{CicatrixError, ConfigError, Result};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::fmt;

/// Platelet-derived growth factor, secreted by platelets.
pub const PDGF: &str = "PDGF";
/// Transforming growth factor beta, secreted by macrophages.
pub const TGF_B: &str = "TGF-b";

/// A validated substance name.
///
/// Non-empty, at most 64 characters, only ASCII letters, digits, `.`, `_`
/// and `-`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct SubstanceName(String);

impl SubstanceName {
    pub const MAX_LEN: usize = 64;

    pub fn new(name: impl Into<String>) -> Result<Self> {
        let name = name.into();
        let well_formed = !name.is_empty()
            && name.len() <= Self::MAX_LEN
            && name
                .chars()
                .all(|c| c.is_ascii_alphanumeric() || matches!(c, '.' | '_' | '-'));
        if !well_formed {
            return Err(ConfigError::MalformedSubstanceName(name).into());
        }
        Ok(Self(name))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl TryFrom<String> for SubstanceName {
    type Error = CicatrixError;

    fn try_from(value: String) -> Result<Self> {
        SubstanceName::new(value)
    }
}

impl From<SubstanceName> for String {
    fn from(name: SubstanceName) -> String {
        name.0
    }
}

impl fmt::Display for SubstanceName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Host-side parameters of one diffusible substance.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SubstanceDefinition {
    pub name: SubstanceName,
    /// Diffusion coefficient of the continuum field.
    pub diffusion_coefficient: f64,
    /// Decay constant of the continuum field.
    pub decay_constant: f64,
    /// Grid resolution per axis.
    pub resolution: u32,
}

impl SubstanceDefinition {
    pub fn pdgf() -> Self {
        Self {
            name: SubstanceName(PDGF.to_string()),
            diffusion_coefficient: 0.015,
            decay_constant: 0.001,
            resolution: 40,
        }
    }

    pub fn tgf_b() -> Self {
        Self {
            name: SubstanceName(TGF_B.to_string()),
            diffusion_coefficient: 0.005,
            decay_constant: 0.001,
            resolution: 40,
        }
    }

    /// The two substances of the wound scenario.
    pub fn wound_defaults() -> Vec<Self> {
        vec![Self::pdgf(), Self::tgf_b()]
    }

    pub fn validate(&self) -> Result<()> {
        let field = |suffix: &str| format!("substances.{}.{}", self.name, suffix);
        if !(self.diffusion_coefficient.is_finite() && self.diffusion_coefficient >= 0.0) {
            return Err(CicatrixError::invalid_config(
                field("diffusion_coefficient"),
                self.diffusion_coefficient,
                "must be a finite, non-negative number",
            ));
        }
        if !(self.decay_constant.is_finite() && self.decay_constant >= 0.0) {
            return Err(CicatrixError::invalid_config(
                field("decay_constant"),
                self.decay_constant,
                "must be a finite, non-negative number",
            ));
        }
        if self.resolution == 0 {
            return Err(CicatrixError::invalid_config(
                field("resolution"),
                self.resolution,
                "must be at least 1",
            ));
        }
        Ok(())
    }
}

/// Check a substance table for per-entry validity and duplicate names.
pub fn validate_table(table: &[SubstanceDefinition]) -> Result<()> {
    let mut seen = HashSet::new();
    for definition in table {
        definition.validate()?;
        if !seen.insert(definition.name.as_str()) {
            return Err(ConfigError::DuplicateSubstance(definition.name.to_string()).into());
        }
    }
    Ok(())
}

/// Resolve `name` against the table, failing if it was never defined.
pub fn lookup<'a>(table: &'a [SubstanceDefinition], name: &str) -> Result<&'a SubstanceName> {
    table
        .iter()
        .map(|d| &d.name)
        .find(|n| n.as_str() == name)
        .ok_or_else(|| ConfigError::UndefinedSubstance(name.to_string()).into())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_scenario_names() {
        assert_eq!(SubstanceName::new("TGF-b").unwrap().as_str(), "TGF-b");
        assert!(SubstanceName::new("PDGF").is_ok());
    }

    #[test]
    fn rejects_malformed_names() {
        let long = "x".repeat(65);
        for bad in ["", "TGF b", "PDGF\n", "ä", long.as_str()] {
            let err = SubstanceName::new(bad).unwrap_err();
            assert!(matches!(err, CicatrixError::Config(ConfigError::MalformedSubstanceName(_))));
        }
    }

    #[test]
    fn deserializing_validates() {
        let ok: SubstanceName = serde_json::from_str("\"PDGF\"").unwrap();
        assert_eq!(ok.as_str(), PDGF);
        assert!(serde_json::from_str::<SubstanceName>("\"two words\"").is_err());
    }

    #[test]
    fn duplicate_names_rejected() {
        let table = vec![SubstanceDefinition::pdgf(), SubstanceDefinition::pdgf()];
        assert_eq!(
            validate_table(&table).unwrap_err(),
            CicatrixError::Config(ConfigError::DuplicateSubstance("PDGF".into()))
        );
    }

    #[test]
    fn lookup_reports_undefined() {
        let table = vec![SubstanceDefinition::pdgf()];
        assert!(lookup(&table, PDGF).is_ok());
        assert_eq!(
            lookup(&table, TGF_B).unwrap_err(),
            CicatrixError::Config(ConfigError::UndefinedSubstance("TGF-b".into()))
        );
    }
}
