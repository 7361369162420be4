//! Runtime prelude: re-exports the most commonly used runtime types.

pub use crate::config::{LifecycleConfig, ScenarioConfig};
pub use crate::lifecycle::{GrowthRule, LifecycleOutcome, LifecyclePhase};
pub use crate::population::{generate, CellTemplates, PopulationReport};
pub use crate::region::{Region, WoundGeometry};
pub use crate::registry::AgentRegistry;
pub use crate::rng::{SeededSampler, Stream};
pub use crate::tissue::{Tissue, TissueEvent, TissueStats};
