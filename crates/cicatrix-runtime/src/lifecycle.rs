//! Fibroblast lifecycle rule: grow, then divide or go quiescent.
//!
//! Two phases, derived from the diameter on every call rather than stored:
//!
//! - **Growing** (`diameter < mature_diameter_threshold`): add
//!   `growth_increment` volume and jitter the position by three uniform
//!   draws from `displacement_range`.
//! - **Mature**: if the cell can still divide and a uniform `[0, 1)` draw is
//!   below `division_probability`, divide. Otherwise the cell loses the
//!   ability to divide for good.
//!
//! Agents that are not fibroblasts are skipped without touching the sampler.

use crate::config::LifecycleConfig;
use cicatrix_core::prelude::*;
use tracing::trace;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LifecyclePhase {
    Growing,
    Mature,
}

/// What a single [`GrowthRule::step`] did to an agent.
#[derive(Debug, Clone, PartialEq)]
pub enum LifecycleOutcome {
    /// Not a fibroblast; nothing happened.
    Skipped,
    /// Gained volume and moved.
    Grew,
    /// Divided. The stepped agent is now the first daughter; this is the second,
    /// waiting to be inserted into the registry.
    Divided(Box<Agent>),
    /// Lost the ability to divide during this step.
    Quiesced,
    /// Mature and already unable to divide.
    Dormant,
}

#[derive(Debug, Clone)]
pub struct GrowthRule {
    config: LifecycleConfig,
}

impl GrowthRule {
    pub fn new(config: LifecycleConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self { config })
    }

    /// Current phase of a fibroblast, `None` for other roles.
    pub fn phase(&self, agent: &Agent) -> Option<LifecyclePhase> {
        agent.can_divide()?;
        if agent.diameter() < self.config.mature_diameter_threshold {
            Some(LifecyclePhase::Growing)
        } else {
            Some(LifecyclePhase::Mature)
        }
    }

    pub fn step<R: UniformSampler + ?Sized>(&self, agent: &mut Agent, rng: &mut R) -> LifecycleOutcome {
        let Some(phase) = self.phase(agent) else {
            return LifecycleOutcome::Skipped;
        };

        if phase == LifecyclePhase::Growing {
            agent.change_volume(self.config.growth_increment);
            let [low, high] = self.config.displacement_range;
            agent.update_position(rng.uniform_array3(low, high));
            trace!(diameter = agent.diameter(), "fibroblast grew");
            return LifecycleOutcome::Grew;
        }

        let can_divide = agent.can_divide().unwrap_or(false);
        if can_divide && rng.uniform(0.0, 1.0) < self.config.division_probability {
            let axis = rng.uniform_array3(-1.0, 1.0);
            let daughter = agent.divide(axis);
            return LifecycleOutcome::Divided(Box::new(daughter));
        }

        match agent.fibroblast_mut().map(FibroblastState::stop_dividing) {
            Some(true) => LifecycleOutcome::Quiesced,
            _ => LifecycleOutcome::Dormant,
        }
    }
}

impl Default for GrowthRule {
    fn default() -> Self {
        Self {
            config: LifecycleConfig::default(),
        }
    }
}
