//! Shared types used across the scenario crates.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::{Add, Mul, Sub};

/// Identifier handed out by an [`AgentSink`](crate::sink::AgentSink) on insertion.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct AgentId(pub u64);

impl fmt::Display for AgentId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "agent-{}", self.0)
    }
}

/// A point (or displacement) in 3D continuous space.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Position {
    pub x: f64,
    pub y: f64,
    pub z: f64,
}

impl Position {
    pub const ORIGIN: Position = Position { x: 0.0, y: 0.0, z: 0.0 };

    pub fn new(x: f64, y: f64, z: f64) -> Self {
        Self { x, y, z }
    }

    pub fn distance_to(&self, other: &Position) -> f64 {
        (*self - *other).norm()
    }

    /// Euclidean length, treating the position as a vector.
    pub fn norm(&self) -> f64 {
        (self.x * self.x + self.y * self.y + self.z * self.z).sqrt()
    }

    /// Unit vector in the same direction, or `None` for a (near) zero vector.
    pub fn normalized(&self) -> Option<Position> {
        let n = self.norm();
        if n < f64::EPSILON {
            return None;
        }
        Some(*self * (1.0 / n))
    }
}

impl Add for Position {
    type Output = Position;

    fn add(self, rhs: Position) -> Position {
        Position::new(self.x + rhs.x, self.y + rhs.y, self.z + rhs.z)
    }
}

impl Sub for Position {
    type Output = Position;

    fn sub(self, rhs: Position) -> Position {
        Position::new(self.x - rhs.x, self.y - rhs.y, self.z - rhs.z)
    }
}

impl Mul<f64> for Position {
    type Output = Position;

    fn mul(self, rhs: f64) -> Position {
        Position::new(self.x * rhs, self.y * rhs, self.z * rhs)
    }
}

/// Fieldless tag for a cell role, used for counting and display.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CellKind {
    Platelet,
    Keratinocyte,
    Neutrophil,
    Fibroblast,
    Macrophage,
}

impl CellKind {
    pub const ALL: [CellKind; 5] = [
        CellKind::Platelet,
        CellKind::Keratinocyte,
        CellKind::Neutrophil,
        CellKind::Fibroblast,
        CellKind::Macrophage,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            CellKind::Platelet => "platelet",
            CellKind::Keratinocyte => "keratinocyte",
            CellKind::Neutrophil => "neutrophil",
            CellKind::Fibroblast => "fibroblast",
            CellKind::Macrophage => "macrophage",
        }
    }
}

impl fmt::Display for CellKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// The role of an agent. Assigned at creation and never replaced.
///
/// Only the Fibroblast variant carries mutable state; every other role is a
/// plain tag. Code that acts on one role matches on its variant instead of
/// downcasting.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CellRole {
    Platelet,
    Keratinocyte,
    Neutrophil,
    Fibroblast(FibroblastState),
    Macrophage,
}

impl CellRole {
    /// A fibroblast that is still able to divide.
    pub fn fibroblast() -> Self {
        CellRole::Fibroblast(FibroblastState::new())
    }

    pub fn kind(&self) -> CellKind {
        match self {
            CellRole::Platelet => CellKind::Platelet,
            CellRole::Keratinocyte => CellKind::Keratinocyte,
            CellRole::Neutrophil => CellKind::Neutrophil,
            CellRole::Fibroblast(_) => CellKind::Fibroblast,
            CellRole::Macrophage => CellKind::Macrophage,
        }
    }

    /// Role of a division daughter: same kind, and a fibroblast daughter
    /// starts out able to divide again.
    pub fn daughter(&self) -> CellRole {
        match self {
            CellRole::Fibroblast(state) => CellRole::Fibroblast(state.daughter()),
            other => other.clone(),
        }
    }
}

/// Division state of a fibroblast.
///
/// `can_divide` only ever goes from `true` to `false` on a given instance;
/// the sole way back to `true` is a new daughter from [`FibroblastState::daughter`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct FibroblastState {
    can_divide: bool,
    cell_color: u32,
}

impl FibroblastState {
    pub fn new() -> Self {
        Self {
            can_divide: true,
            cell_color: 0,
        }
    }

    pub fn with_cell_color(mut self, cell_color: u32) -> Self {
        self.cell_color = cell_color;
        self
    }

    pub fn can_divide(&self) -> bool {
        self.can_divide
    }

    pub fn cell_color(&self) -> u32 {
        self.cell_color
    }

    /// Permanently disable division. Returns `true` if this call changed the state.
    pub fn stop_dividing(&mut self) -> bool {
        std::mem::replace(&mut self.can_divide, false)
    }

    /// State for a freshly divided daughter.
    pub fn daughter(&self) -> Self {
        Self {
            can_divide: true,
            cell_color: self.cell_color,
        }
    }
}

impl Default for FibroblastState {
    fn default() -> Self {
        Self::new()
    }
}

/// The current timestep of the simulation.
pub type Tick = u64;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn stop_dividing_reports_first_transition_only() {
        let mut state = FibroblastState::new();
        assert!(state.can_divide());
        assert!(state.stop_dividing());
        assert!(!state.stop_dividing());
        assert!(!state.can_divide());
    }

    #[test]
    fn daughter_can_divide_and_keeps_color() {
        let mut state = FibroblastState::new().with_cell_color(7);
        state.stop_dividing();
        let daughter = state.daughter();
        assert!(daughter.can_divide());
        assert_eq!(daughter.cell_color(), 7);
    }

    #[test]
    fn role_kind_matches_variant() {
        assert_eq!(CellRole::fibroblast().kind(), CellKind::Fibroblast);
        assert_eq!(CellRole::Macrophage.kind(), CellKind::Macrophage);
        assert_eq!(CellRole::Platelet.daughter(), CellRole::Platelet);
    }

    #[test]
    fn normalized_rejects_zero_vector() {
        assert!(Position::ORIGIN.normalized().is_none());
        let unit = Position::new(3.0, 0.0, 4.0).normalized().unwrap();
        assert!((unit.norm() - 1.0).abs() < 1e-12);
    }
}
