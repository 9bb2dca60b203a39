//! Agent class enum shared by the scene and trace crates.
//!
//! The class decides which steering rules apply and which position registry
//! an agent commits to.  Classes are fully isolated: walkers and skaters
//! never observe each other's positions.

/// The kind of ambient character an agent is.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum AgentClass {
    /// Ground character: avoids obstacles and fellow walkers.
    Walker,
    /// Rink character: stays inside the rink and avoids fellow skaters.
    Skater,
}

impl AgentClass {
    /// Human-readable label, useful for CSV column values.
    pub fn as_str(self) -> &'static str {
        match self {
            AgentClass::Walker => "walker",
            AgentClass::Skater => "skater",
        }
    }
}

impl std::fmt::Display for AgentClass {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
