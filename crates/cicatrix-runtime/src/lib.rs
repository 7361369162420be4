//! # Cicatrix Runtime
//!
//! The scenario itself, plus a small reference host to run it.
//!
//! - [`population::generate`] places the initial cells into the wound
//!   cross-section
//! - [`lifecycle::GrowthRule`] is the per-timestep fibroblast rule
//! - [`tissue::Tissue`] owns a registry and a seeded sampler and drives both

pub mod config;
pub mod lifecycle;
pub mod population;
pub mod prelude;
pub mod region;
pub mod registry;
pub mod rng;
pub mod tissue;
