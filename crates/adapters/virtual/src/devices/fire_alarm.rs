//! Virtual fire-alarm detectors — status only.

use std::sync::Mutex;

use smartbuilding_app::ports::FireAlarmSensor;
use smartbuilding_domain::fault::Subsystem;

use super::{lock, render_status};

/// A network of simulated detectors; `true` means healthy.
pub struct VirtualFireAlarm {
    detectors: Mutex<Vec<bool>>,
}

impl VirtualFireAlarm {
    #[must_use]
    pub fn new(count: usize) -> Self {
        Self {
            detectors: Mutex::new(vec![true; count]),
        }
    }

    /// Mark the given detectors as faulted; unknown ids are ignored.
    #[must_use]
    pub fn with_faulted(self, detector_ids: &[usize]) -> Self {
        for &detector_id in detector_ids {
            self.set_faulted(detector_id, true);
        }
        self
    }

    /// Set or clear the fault on one detector. Returns `false` for unknown ids.
    pub fn set_faulted(&self, detector_id: usize, faulted: bool) -> bool {
        match lock(&self.detectors).get_mut(detector_id) {
            Some(healthy) => {
                *healthy = !faulted;
                true
            }
            None => false,
        }
    }
}

impl Default for VirtualFireAlarm {
    fn default() -> Self {
        Self::new(8)
    }
}

impl FireAlarmSensor for VirtualFireAlarm {
    fn status(&self) -> String {
        render_status(Subsystem::FireAlarm, lock(&self.detectors).iter().copied())
    }
}
