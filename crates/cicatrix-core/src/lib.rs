//! # Cicatrix Core
//!
//! Core types for the cicatrix wound-healing scenario.
//!
//! This crate defines what an agent *is* and the narrow interfaces through
//! which the scenario talks to its host:
//!
//! - **Agent** - a cell with a position, a sphere diameter, one immutable role
//!   and a list of attached behaviors
//! - **CellRole** - Platelet, Keratinocyte, Neutrophil, Fibroblast (with its
//!   division state) or Macrophage
//! - **Behavior** - secretion into a named substance, chemotaxis along a
//!   named substance, or growth/division
//! - **AgentSink** - the registry that takes ownership of created agents
//! - **UniformSampler** - the source of independent uniform draws
//!
//! ## Quick Start
//!
//! ```rust
//! use cicatrix_core::prelude::*;
//!
//! let pdgf = SubstanceName::new("PDGF").unwrap();
//! let platelet = Agent::new(CellRole::Platelet, Position::new(50.0, 90.0, 3.0), 1.0)
//!     .with_behavior(Behavior::secretion(pdgf, 1.0));
//!
//! let mut sink: Vec<Agent> = Vec::new();
//! let id = AgentSink::insert(&mut sink, platelet);
//! assert_eq!(id, AgentId(0));
//! ```

pub mod agent;
pub mod behavior;
pub mod error;
pub mod geometry;
pub mod prelude;
pub mod sampler;
pub mod signal;
pub mod sink;
pub mod types;
