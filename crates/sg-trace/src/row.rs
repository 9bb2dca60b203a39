//! Plain data row types written by trace backends.

use sg_core::AgentClass;

/// One agent's committed pose on one recorded frame.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PoseRow {
    pub frame:   u64,
    pub class:   AgentClass,
    /// The agent's id within its class; walker 0 and skater 0 are distinct
    /// agents, so rows are keyed by `(class, agent)`.
    pub agent:   u32,
    pub x:       f32,
    pub z:       f32,
    /// Yaw in radians, unwrapped (see `sg_core::Pose`).
    pub heading: f32,
}

/// Summary of one frame: how many agents were ticked.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FrameRow {
    pub frame:  u64,
    pub agents: u64,
}
