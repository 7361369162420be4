//! Behaviors: per-timestep rules attached to an agent.
//!
//! Behaviors are plain data. Secretion and chemotaxis are associations with a
//! named substance that the host's field solver acts on; growth marks the
//! agent for the fibroblast lifecycle rule.

use crate::signal::SubstanceName;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Behavior {
    /// Emit `quantity` of a substance into its field each timestep.
    Secretion {
        substance: SubstanceName,
        quantity: f64,
    },
    /// Bias movement up the gradient of a substance.
    Chemotaxis {
        substance: SubstanceName,
        sensitivity: f64,
    },
    /// Grow, then divide or go quiescent.
    Growth,
}

impl Behavior {
    pub fn secretion(substance: SubstanceName, quantity: f64) -> Self {
        Behavior::Secretion {
            substance,
            quantity,
        }
    }

    pub fn chemotaxis(substance: SubstanceName, sensitivity: f64) -> Self {
        Behavior::Chemotaxis {
            substance,
            sensitivity,
        }
    }

    /// Whether a division daughter receives a copy of this behavior.
    ///
    /// Only growth is inherited; a daughter does not secrete or follow
    /// gradients unless the host attaches those again.
    pub fn copies_to_daughter(&self) -> bool {
        matches!(self, Behavior::Growth)
    }
}
