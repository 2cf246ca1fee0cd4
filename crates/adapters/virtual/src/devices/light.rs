//! Virtual lighting — lights switch on and off unless faulted.

use std::sync::Mutex;

use smartbuilding_app::ports::LightControl;
use smartbuilding_domain::fault::Subsystem;

use super::{lock, render_status};

#[derive(Debug, Clone, Copy, Default)]
struct Light {
    on: bool,
    faulted: bool,
}

/// A bank of simulated lights, all off initially.
pub struct VirtualLights {
    lights: Mutex<Vec<Light>>,
}

impl VirtualLights {
    #[must_use]
    pub fn new(count: usize) -> Self {
        Self {
            lights: Mutex::new(vec![Light::default(); count]),
        }
    }

    /// Mark the given lights as faulted; unknown ids are ignored.
    #[must_use]
    pub fn with_faulted(self, light_ids: &[usize]) -> Self {
        for &light_id in light_ids {
            self.set_faulted(light_id, true);
        }
        self
    }

    /// Set or clear the fault on one light. Returns `false` for unknown ids.
    pub fn set_faulted(&self, light_id: usize, faulted: bool) -> bool {
        match lock(&self.lights).get_mut(light_id) {
            Some(light) => {
                light.faulted = faulted;
                true
            }
            None => false,
        }
    }

    /// Whether a light is on, or `None` for an unknown id.
    #[must_use]
    pub fn is_on(&self, light_id: usize) -> Option<bool> {
        lock(&self.lights).get(light_id).map(|light| light.on)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        lock(&self.lights).len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl Default for VirtualLights {
    fn default() -> Self {
        Self::new(10)
    }
}

impl LightControl for VirtualLights {
    fn set_all_lights(&self, on: bool) {
        for light in lock(&self.lights).iter_mut().filter(|light| !light.faulted) {
            light.on = on;
        }
    }

    fn set_light(&self, on: bool, light_id: usize) {
        match lock(&self.lights).get_mut(light_id) {
            Some(light) if !light.faulted => light.on = on,
            _ => tracing::debug!(light_id, on, "light did not respond"),
        }
    }

    fn status(&self) -> String {
        render_status(
            Subsystem::Lights,
            lock(&self.lights).iter().map(|light| !light.faulted),
        )
    }
}
