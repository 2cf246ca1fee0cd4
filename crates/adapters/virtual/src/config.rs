//! Virtual building configuration.

use serde::Deserialize;

/// Shape of the simulated building.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct VirtualConfig {
    /// Number of doors in the door bank.
    pub doors: usize,
    /// Number of lights.
    pub lights: usize,
    /// Number of fire-alarm detectors.
    pub detectors: usize,
    /// Doors that start out faulted (zero-based).
    pub faulty_doors: Vec<usize>,
    /// Lights that start out faulted (zero-based).
    pub faulty_lights: Vec<usize>,
    /// Detectors that start out faulted (zero-based).
    pub faulty_detectors: Vec<usize>,
    /// Whether the alert log accepts records at startup.
    pub alerts_online: bool,
}

impl Default for VirtualConfig {
    fn default() -> Self {
        Self {
            doors: 8,
            lights: 10,
            detectors: 8,
            faulty_doors: Vec::new(),
            faulty_lights: Vec::new(),
            faulty_detectors: Vec::new(),
            alerts_online: true,
        }
    }
}
