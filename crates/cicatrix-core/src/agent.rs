//! Agent: one simulated cell.
//!
//! An agent is a record, not a trait object: position, sphere diameter, an
//! immutable [`CellRole`] and the behaviors attached to it. Role-specific
//! state (the fibroblast's division flag) lives inside the role variant.

use crate::behavior::Behavior;
use crate::geometry::{diameter_from_volume, volume_from_diameter, MIN_DIAMETER, MIN_VOLUME};
use crate::signal::SubstanceName;
use crate::types::*;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Agent {
    role: CellRole,
    position: Position,
    diameter: f64,
    mass: Option<f64>,
    behaviors: Vec<Behavior>,
}

impl Agent {
    /// Create an agent of the given role with a spherical `diameter`.
    pub fn new(role: CellRole, position: Position, diameter: f64) -> Self {
        Self {
            role,
            position,
            diameter: diameter.max(MIN_DIAMETER),
            mass: None,
            behaviors: Vec::new(),
        }
    }

    pub fn with_mass(mut self, mass: f64) -> Self {
        self.mass = Some(mass);
        self
    }

    pub fn with_behavior(mut self, behavior: Behavior) -> Self {
        self.behaviors.push(behavior);
        self
    }

    pub fn role(&self) -> &CellRole {
        &self.role
    }

    pub fn kind(&self) -> CellKind {
        self.role.kind()
    }

    pub fn position(&self) -> Position {
        self.position
    }

    pub fn diameter(&self) -> f64 {
        self.diameter
    }

    /// Sphere volume derived from the diameter.
    pub fn volume(&self) -> f64 {
        volume_from_diameter(self.diameter)
    }

    pub fn mass(&self) -> Option<f64> {
        self.mass
    }

    pub fn behaviors(&self) -> &[Behavior] {
        &self.behaviors
    }

    /// First secretion behavior: the substance and its emission rate.
    pub fn emission(&self) -> Option<(&SubstanceName, f64)> {
        self.behaviors.iter().find_map(|b| match b {
            Behavior::Secretion {
                substance,
                quantity,
            } => Some((substance, *quantity)),
            _ => None,
        })
    }

    /// First chemotaxis behavior: the substance and the sensitivity.
    pub fn chemotaxis(&self) -> Option<(&SubstanceName, f64)> {
        self.behaviors.iter().find_map(|b| match b {
            Behavior::Chemotaxis {
                substance,
                sensitivity,
            } => Some((substance, *sensitivity)),
            _ => None,
        })
    }

    pub fn has_growth(&self) -> bool {
        self.behaviors.contains(&Behavior::Growth)
    }

    /// Attach a behavior. Attaching growth twice is a no-op.
    pub fn add_behavior(&mut self, behavior: Behavior) {
        if behavior == Behavior::Growth && self.has_growth() {
            return;
        }
        self.behaviors.push(behavior);
    }

    /// `Some(can_divide)` for fibroblasts, `None` for every other role.
    pub fn can_divide(&self) -> Option<bool> {
        match &self.role {
            CellRole::Fibroblast(state) => Some(state.can_divide()),
            _ => None,
        }
    }

    /// Mutable access to the fibroblast state, if this agent is a fibroblast.
    pub fn fibroblast_mut(&mut self) -> Option<&mut FibroblastState> {
        match &mut self.role {
            CellRole::Fibroblast(state) => Some(state),
            _ => None,
        }
    }

    /// Add `delta` to the volume; the volume never drops below [`MIN_VOLUME`].
    pub fn change_volume(&mut self, delta: f64) {
        let volume = (self.volume() + delta).max(MIN_VOLUME);
        self.diameter = diameter_from_volume(volume).max(MIN_DIAMETER);
    }

    /// Move by `delta`.
    pub fn update_position(&mut self, delta: Position) {
        self.position = self.position + delta;
    }

    /// Split into two daughters of equal volume.
    ///
    /// `self` becomes the first daughter and the returned agent is the
    /// second. The two are pushed apart along `axis` (normalized here; a zero
    /// axis falls back to +x) by a quarter of the daughter diameter each.
    /// Both carry the daughter role from [`CellRole::daughter`]; the new agent
    /// only inherits behaviors for which [`Behavior::copies_to_daughter`] holds.
    pub fn divide(&mut self, axis: Position) -> Agent {
        let axis = axis.normalized().unwrap_or(Position::new(1.0, 0.0, 0.0));

        let half = (self.volume() / 2.0).max(MIN_VOLUME);
        self.diameter = diameter_from_volume(half).max(MIN_DIAMETER);
        self.mass = self.mass.map(|m| m / 2.0);
        self.role = self.role.daughter();

        let offset = axis * (self.diameter() / 4.0);
        let center = self.position;
        self.position = center - offset;

        Agent {
            role: self.role.daughter(),
            position: center + offset,
            diameter: self.diameter,
            mass: self.mass,
            behaviors: self
                .behaviors
                .iter()
                .filter(|b| b.copies_to_daughter())
                .cloned()
                .collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::signal::PDGF;

    fn fibroblast(diameter: f64) -> Agent {
        Agent::new(CellRole::fibroblast(), Position::new(10.0, 10.0, 10.0), diameter)
    }

    #[test]
    fn diameter_roundtrips_through_volume() {
        let a = Agent::new(CellRole::Neutrophil, Position::ORIGIN, 8.4);
        assert!((a.diameter() - 8.4).abs() < 1e-9);
    }

    #[test]
    fn only_fibroblasts_have_division_state() {
        assert_eq!(fibroblast(4.0).can_divide(), Some(true));
        let mut k = Agent::new(CellRole::Keratinocyte, Position::ORIGIN, 21.0);
        assert_eq!(k.can_divide(), None);
        assert!(k.fibroblast_mut().is_none());
    }

    #[test]
    fn growth_is_attached_once() {
        let mut a = fibroblast(2.0);
        a.add_behavior(Behavior::Growth);
        a.add_behavior(Behavior::Growth);
        assert_eq!(a.behaviors().len(), 1);
        assert!(a.has_growth());
    }

    #[test]
    fn divide_halves_volume_and_conserves_center() {
        let mut mother = fibroblast(4.0);
        mother.add_behavior(Behavior::Growth);
        mother.add_behavior(Behavior::secretion(SubstanceName::new(PDGF).unwrap(), 1.0));
        let volume = mother.volume();
        let center = mother.position();

        let daughter = mother.divide(Position::new(0.0, 0.0, 2.0));

        assert!((mother.volume() - volume / 2.0).abs() < 1e-9);
        assert!((daughter.volume() - volume / 2.0).abs() < 1e-9);
        assert!(mother.diameter() < 4.0);

        let midpoint = (mother.position() + daughter.position()) * 0.5;
        assert!(midpoint.distance_to(&center) < 1e-9);
        assert!(daughter.position().z > mother.position().z);

        assert_eq!(mother.can_divide(), Some(true));
        assert_eq!(daughter.can_divide(), Some(true));
        assert_eq!(daughter.behaviors(), &[Behavior::Growth]);
        assert!(mother.emission().is_some());
    }

    #[test]
    fn divide_with_zero_axis_uses_x() {
        let mut mother = fibroblast(4.0);
        let daughter = mother.divide(Position::ORIGIN);
        assert!(daughter.position().x > mother.position().x);
        assert_eq!(daughter.position().y, mother.position().y);
    }
}
