//! AgentSink: where created agents go.
//!
//! The sink owns every agent it receives and later iterates or schedules
//! them. A plain `Vec<Agent>` is a sink, which is all most tests need
//! (call it as `AgentSink::insert(&mut v, agent)`; `Vec::insert` shadows it).

use crate::agent::Agent;
use crate::types::AgentId;

pub trait AgentSink {
    /// Take ownership of `agent` and return the identifier it was filed under.
    fn insert(&mut self, agent: Agent) -> AgentId;
}

impl AgentSink for Vec<Agent> {
    fn insert(&mut self, agent: Agent) -> AgentId {
        self.push(agent);
        AgentId((self.len() - 1) as u64)
    }
}

impl<S: AgentSink + ?Sized> AgentSink for &mut S {
    fn insert(&mut self, agent: Agent) -> AgentId {
        (**self).insert(agent)
    }
}
