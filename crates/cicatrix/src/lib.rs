//! # Cicatrix
//!
//! A wound-healing agent scenario: a cross-section of injured skin populated
//! with the cells that show up early in healing, and a lifecycle rule that
//! lets fibroblasts grow and divide.
//!
//! ## Quick Start
//!
//! ```rust
//! use cicatrix::prelude::*;
//!
//! let mut config = ScenarioConfig::default().with_target_count(200);
//! config.fibroblast_growth = true;
//!
//! let mut tissue = Tissue::new(config).unwrap();
//! let report = tissue.populate().unwrap();
//! assert!(report.inserted >= 200);
//!
//! // With the default division probability the fibroblast count grows
//! // exponentially, so keep runs short.
//! tissue.run(10);
//! let stats = tissue.stats();
//! println!("{} agents after {} steps", stats.population, stats.tick);
//! ```
//!
//! ## Bring your own host
//!
//! The generator and the growth rule only need a sampler and a sink, so they
//! can be driven by any scheduler:
//!
//! ```rust
//! use cicatrix::prelude::*;
//!
//! let config = ScenarioConfig::default().with_target_count(100);
//! let mut rng = SeededSampler::new(4357);
//! let mut agents: Vec<Agent> = Vec::new();
//! generate(&config, &mut rng, &mut agents).unwrap();
//!
//! let rule = GrowthRule::default();
//! for agent in agents.iter_mut() {
//!     agent.add_behavior(Behavior::Growth);
//!     rule.step(agent, &mut rng);
//! }
//! ```
//!
//! ## Regions
//!
//! | Region | Condition | Cells per sample |
//! |--------|-----------|------------------|
//! | Wound | `y >= abs(-2x + 100) + 20` | platelet |
//! | Epidermis | `y > 60` | keratinocyte |
//! | Dermis | otherwise | neutrophil, fibroblast, macrophage |
//! | Exposed dermis | dermis with collagen depth above the exposure depth | dermis cells + platelet |
//!
//! Crates:
//!
//! - [`cicatrix_core`] - agents, roles, behaviors, substances and the collaborator traits
//! - [`cicatrix_runtime`] - generator, lifecycle rule, seeded sampler and the `Tissue` scheduler

pub use cicatrix_core as core;
pub use cicatrix_runtime as runtime;

/// Prelude module for convenient imports.
///
/// ```rust
/// use cicatrix::prelude::*;
/// ```
pub mod prelude {
    pub use cicatrix_core::prelude::*;
    pub use cicatrix_runtime::prelude::*;
}
