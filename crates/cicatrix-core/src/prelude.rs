//! Cicatrix Core Prelude: convenient imports for common usage.
//!
//! ```rust
//! use cicatrix_core::prelude::*;
//! ```

pub use crate::types::{AgentId, CellKind, CellRole, FibroblastState, Position, Tick};

pub use crate::agent::Agent;
pub use crate::behavior::Behavior;
pub use crate::signal::{SubstanceDefinition, SubstanceName, PDGF, TGF_B};

// Collaborator traits
pub use crate::sampler::UniformSampler;
pub use crate::sink::AgentSink;

pub use crate::error::{AgentError, CicatrixError, ConfigError, Result};
