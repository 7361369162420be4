//! Population generator: the one-shot scene setup.
//!
//! Draws `target_count` positions uniformly from the configured cube,
//! classifies each by [`WoundGeometry::classify`] and creates the cells that
//! belong in that region:
//!
//! | region          | agents created                                     |
//! |-----------------|----------------------------------------------------|
//! | wound           | platelet (secretes PDGF)                           |
//! | epidermis       | keratinocyte                                       |
//! | dermis          | neutrophil, fibroblast, macrophage                 |
//! | exposed dermis  | neutrophil, fibroblast, macrophage, platelet       |
//!
//! The pass is all-or-nothing: configuration is validated first, agents are
//! staged, and the sink only sees them once every sample has been placed.

use crate::config::ScenarioConfig;
use crate::region::Region;
use cicatrix_core::prelude::*;
use cicatrix_core::signal;
use serde::Serialize;
use std::collections::BTreeMap;
use tracing::{debug, info};

pub const PLATELET_DIAMETER: f64 = 1.0;
pub const PLATELET_PDGF_SECRETION: f64 = 1.0;
pub const KERATINOCYTE_DIAMETER: f64 = 21.0;
pub const KERATINOCYTE_MASS: f64 = 1.0;
pub const NEUTROPHIL_DIAMETER: f64 = 8.4;
pub const NEUTROPHIL_PDGF_SENSITIVITY: f64 = 0.19;
pub const FIBROBLAST_DIAMETER: f64 = 4.0;
pub const FIBROBLAST_TGF_B_SENSITIVITY: f64 = 0.03;
pub const MACROPHAGE_DIAMETER: f64 = 8.4;
pub const MACROPHAGE_PDGF_SENSITIVITY: f64 = 0.13;
pub const MACROPHAGE_TGF_B_SECRETION: f64 = 1.0;

/// Upper bound on the staging buffer reserved up front.
const STAGING_CAPACITY_HINT: usize = 1 << 16;

/// Substance handles and switches needed to build the scenario's cells.
#[derive(Debug, Clone)]
pub struct CellTemplates {
    pdgf: SubstanceName,
    tgf_b: SubstanceName,
    fibroblast_growth: bool,
}

impl CellTemplates {
    /// Resolve the scenario's substances against the configured table.
    pub fn resolve(config: &ScenarioConfig) -> Result<Self> {
        Ok(Self {
            pdgf: signal::lookup(&config.substances, PDGF)?.clone(),
            tgf_b: signal::lookup(&config.substances, TGF_B)?.clone(),
            fibroblast_growth: config.fibroblast_growth,
        })
    }

    pub fn platelet(&self, position: Position) -> Agent {
        Agent::new(CellRole::Platelet, position, PLATELET_DIAMETER)
            .with_behavior(Behavior::secretion(self.pdgf.clone(), PLATELET_PDGF_SECRETION))
    }

    pub fn keratinocyte(&self, position: Position) -> Agent {
        Agent::new(CellRole::Keratinocyte, position, KERATINOCYTE_DIAMETER)
            .with_mass(KERATINOCYTE_MASS)
    }

    pub fn neutrophil(&self, position: Position) -> Agent {
        Agent::new(CellRole::Neutrophil, position, NEUTROPHIL_DIAMETER)
            .with_behavior(Behavior::chemotaxis(self.pdgf.clone(), NEUTROPHIL_PDGF_SENSITIVITY))
    }

    pub fn fibroblast(&self, position: Position) -> Agent {
        let mut agent = Agent::new(CellRole::fibroblast(), position, FIBROBLAST_DIAMETER)
            .with_behavior(Behavior::chemotaxis(
                self.tgf_b.clone(),
                FIBROBLAST_TGF_B_SENSITIVITY,
            ));
        if self.fibroblast_growth {
            agent.add_behavior(Behavior::Growth);
        }
        agent
    }

    pub fn macrophage(&self, position: Position) -> Agent {
        Agent::new(CellRole::Macrophage, position, MACROPHAGE_DIAMETER)
            .with_behavior(Behavior::chemotaxis(self.pdgf.clone(), MACROPHAGE_PDGF_SENSITIVITY))
            .with_behavior(Behavior::secretion(self.tgf_b.clone(), MACROPHAGE_TGF_B_SECRETION))
    }

    /// Append the cells for one sample in `region` to `out`.
    pub fn populate(&self, region: Region, position: Position, out: &mut Vec<Agent>) {
        match region {
            Region::Wound => out.push(self.platelet(position)),
            Region::Epidermis => out.push(self.keratinocyte(position)),
            Region::Dermis | Region::ExposedDermis => {
                out.push(self.neutrophil(position));
                out.push(self.fibroblast(position));
                out.push(self.macrophage(position));
                if region == Region::ExposedDermis {
                    out.push(self.platelet(position));
                }
            }
        }
    }
}

/// What one generation pass produced.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct PopulationReport {
    pub samples: usize,
    pub inserted: usize,
    pub census: BTreeMap<CellKind, usize>,
    pub regions: BTreeMap<Region, usize>,
}

impl PopulationReport {
    pub fn count(&self, kind: CellKind) -> usize {
        self.census.get(&kind).copied().unwrap_or(0)
    }

    pub fn samples_in(&self, region: Region) -> usize {
        self.regions.get(&region).copied().unwrap_or(0)
    }
}

/// Run the population phase: sample, classify, create, then insert everything into `sink`.
///
/// Fails with a configuration error before drawing anything if the config is
/// invalid or a scenario substance is missing from the table.
pub fn generate<R, S>(config: &ScenarioConfig, rng: &mut R, sink: &mut S) -> Result<PopulationReport>
where
    R: UniformSampler + ?Sized,
    S: AgentSink + ?Sized,
{
    config.validate()?;
    let templates = CellTemplates::resolve(config)?;
    debug!(
        target_count = config.target_count,
        bound_min = config.bound_min,
        bound_max = config.bound_max,
        fibroblast_growth = config.fibroblast_growth,
        "generating population"
    );

    let mut report = PopulationReport {
        samples: config.target_count,
        ..PopulationReport::default()
    };
    let mut staged = Vec::with_capacity(config.target_count.min(STAGING_CAPACITY_HINT));

    for _ in 0..config.target_count {
        let x = rng.uniform(config.bound_min, config.bound_max);
        let y = rng.uniform(config.bound_min, config.bound_max);
        let z = rng.uniform(config.bound_min, config.bound_max);

        let region = config.geometry.classify(x, y);
        *report.regions.entry(region).or_insert(0) += 1;
        templates.populate(region, Position::new(x, y, z), &mut staged);
    }

    for agent in staged {
        *report.census.entry(agent.kind()).or_insert(0) += 1;
        sink.insert(agent);
        report.inserted += 1;
    }

    info!(
        samples = report.samples,
        inserted = report.inserted,
        wound = report.samples_in(Region::Wound),
        epidermis = report.samples_in(Region::Epidermis),
        dermis = report.samples_in(Region::Dermis) + report.samples_in(Region::ExposedDermis),
        "population generated"
    );
    Ok(report)
}
