//! In-memory agent registry.
//!
//! Agents are filed under sequential ids and iterated in id order, so a run
//! with a fixed seed visits agents in the same order every time.

use cicatrix_core::prelude::*;
use std::collections::BTreeMap;

#[derive(Debug, Clone, Default)]
pub struct AgentRegistry {
    agents: BTreeMap<AgentId, Agent>,
    next_id: u64,
}

impl AgentRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.agents.len()
    }

    pub fn is_empty(&self) -> bool {
        self.agents.is_empty()
    }

    pub fn get(&self, id: AgentId) -> Option<&Agent> {
        self.agents.get(&id)
    }

    pub fn get_mut(&mut self, id: AgentId) -> Option<&mut Agent> {
        self.agents.get_mut(&id)
    }

    /// Removal policy hook for the host; the scenario itself never removes agents.
    pub fn remove(&mut self, id: AgentId) -> Option<Agent> {
        self.agents.remove(&id)
    }

    /// Ids of all agents currently registered, in ascending order.
    pub fn ids(&self) -> Vec<AgentId> {
        self.agents.keys().copied().collect()
    }

    pub fn iter(&self) -> impl Iterator<Item = (AgentId, &Agent)> {
        self.agents.iter().map(|(id, agent)| (*id, agent))
    }

    /// Number of agents per role.
    pub fn census(&self) -> BTreeMap<CellKind, usize> {
        let mut census = BTreeMap::new();
        for agent in self.agents.values() {
            *census.entry(agent.kind()).or_insert(0) += 1;
        }
        census
    }
}

impl AgentSink for AgentRegistry {
    fn insert(&mut self, agent: Agent) -> AgentId {
        let id = AgentId(self.next_id);
        self.next_id += 1;
        self.agents.insert(id, agent);
        id
    }
}
