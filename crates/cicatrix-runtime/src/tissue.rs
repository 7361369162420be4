//! Tissue: the reference scheduler.
//!
//! Owns the registry, the lifecycle rule and the lifecycle random stream.
//! The population phase runs exactly once; after that each
//! [`step`](Tissue::step):
//! 1. Snapshots the ids present at the start of the step
//! 2. Applies the growth rule to each of them that carries the growth behavior
//! 3. Inserts division daughters (first stepped on the next tick)
//! 4. Advances the tick counter

use crate::config::ScenarioConfig;
use crate::lifecycle::{GrowthRule, LifecycleOutcome, LifecyclePhase};
use crate::population::{self, PopulationReport};
use crate::registry::AgentRegistry;
use crate::rng::{SeededSampler, Stream};
use cicatrix_core::prelude::*;
use serde::Serialize;
use std::collections::BTreeMap;
use tracing::{debug, info, instrument};

/// Event emitted by the tissue during a step.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub enum TissueEvent {
    /// A fibroblast divided; `mother` kept its id, `daughter` is new.
    Divided { mother: AgentId, daughter: AgentId },
    /// A fibroblast lost the ability to divide.
    Quiesced { id: AgentId },
    /// A step completed.
    StepComplete {
        tick: Tick,
        population: usize,
        divisions: usize,
    },
}

/// Statistics about the tissue.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TissueStats {
    pub tick: Tick,
    pub population: usize,
    pub census: BTreeMap<CellKind, usize>,
    /// Fibroblasts with the growth behavior still below the maturity threshold.
    pub growing: usize,
    /// Fibroblasts with the growth behavior at or above the threshold.
    pub mature: usize,
    /// Fibroblasts that can still divide, with or without the growth behavior.
    pub division_capable: usize,
    pub total_divisions: usize,
    pub total_quiesced: usize,
}

pub struct Tissue {
    config: ScenarioConfig,
    registry: AgentRegistry,
    rule: GrowthRule,
    lifecycle_rng: SeededSampler,
    tick: Tick,
    populated: bool,
    total_divisions: usize,
    total_quiesced: usize,
}

impl Tissue {
    /// Create an empty tissue. The configuration is validated here.
    pub fn new(config: ScenarioConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self {
            rule: GrowthRule::new(config.lifecycle.clone())?,
            lifecycle_rng: SeededSampler::for_stream(config.seed, Stream::Lifecycle),
            registry: AgentRegistry::new(),
            tick: 0,
            populated: false,
            total_divisions: 0,
            total_quiesced: 0,
            config,
        })
    }

    pub fn config(&self) -> &ScenarioConfig {
        &self.config
    }

    /// Run the population phase into this tissue's registry.
    ///
    /// Fails with [`CicatrixError::AlreadyPopulated`] on a second call.
    pub fn populate(&mut self) -> Result<PopulationReport> {
        if self.populated {
            return Err(CicatrixError::AlreadyPopulated {
                population: self.registry.len(),
            });
        }
        let mut rng = SeededSampler::for_stream(self.config.seed, Stream::Population);
        let report = population::generate(&self.config, &mut rng, &mut self.registry)?;
        self.populated = true;
        Ok(report)
    }

    /// Add an agent outside the population phase.
    pub fn spawn(&mut self, agent: Agent) -> AgentId {
        self.registry.insert(agent)
    }

    /// Attach the growth behavior to a registered fibroblast.
    pub fn attach_growth(&mut self, id: AgentId) -> Result<()> {
        let agent = self
            .registry
            .get_mut(id)
            .ok_or_else(|| CicatrixError::agent_not_found(id))?;
        if agent.can_divide().is_none() {
            return Err(AgentError::Unsupported {
                id,
                kind: agent.kind(),
                operation: "attach growth",
            }
            .into());
        }
        agent.add_behavior(Behavior::Growth);
        Ok(())
    }

    /// Run a single timestep.
    #[instrument(level = "debug", skip(self), fields(tick = self.tick))]
    pub fn step(&mut self) -> Vec<TissueEvent> {
        let mut events = Vec::new();
        let mut daughters: Vec<(AgentId, Agent)> = Vec::new();

        for id in self.registry.ids() {
            let Some(agent) = self.registry.get_mut(id) else {
                continue;
            };
            if !agent.has_growth() {
                continue;
            }
            match self.rule.step(agent, &mut self.lifecycle_rng) {
                LifecycleOutcome::Divided(daughter) => daughters.push((id, *daughter)),
                LifecycleOutcome::Quiesced => {
                    self.total_quiesced += 1;
                    events.push(TissueEvent::Quiesced { id });
                }
                LifecycleOutcome::Skipped | LifecycleOutcome::Grew | LifecycleOutcome::Dormant => {}
            }
        }

        let divisions = daughters.len();
        for (mother, daughter) in daughters {
            let daughter = self.registry.insert(daughter);
            debug!(%mother, %daughter, "fibroblast divided");
            events.push(TissueEvent::Divided { mother, daughter });
        }
        self.total_divisions += divisions;

        self.tick += 1;
        events.push(TissueEvent::StepComplete {
            tick: self.tick,
            population: self.registry.len(),
            divisions,
        });
        events
    }

    /// Run `steps` timesteps.
    pub fn run(&mut self, steps: u64) -> Vec<Vec<TissueEvent>> {
        let mut all_events = Vec::new();
        for _ in 0..steps {
            all_events.push(self.step());
        }
        info!(
            tick = self.tick,
            population = self.registry.len(),
            divisions = self.total_divisions,
            quiesced = self.total_quiesced,
            "run complete"
        );
        all_events
    }

    /// Get tissue statistics.
    pub fn stats(&self) -> TissueStats {
        let mut growing = 0;
        let mut mature = 0;
        let mut division_capable = 0;
        for (_, agent) in self.registry.iter() {
            if agent.can_divide() == Some(true) {
                division_capable += 1;
            }
            if !agent.has_growth() {
                continue;
            }
            match self.rule.phase(agent) {
                Some(LifecyclePhase::Growing) => growing += 1,
                Some(LifecyclePhase::Mature) => mature += 1,
                None => {}
            }
        }

        TissueStats {
            tick: self.tick,
            population: self.registry.len(),
            census: self.registry.census(),
            growing,
            mature,
            division_capable,
            total_divisions: self.total_divisions,
            total_quiesced: self.total_quiesced,
        }
    }

    pub fn registry(&self) -> &AgentRegistry {
        &self.registry
    }

    pub fn current_tick(&self) -> Tick {
        self.tick
    }

    pub fn is_populated(&self) -> bool {
        self.populated
    }
}
