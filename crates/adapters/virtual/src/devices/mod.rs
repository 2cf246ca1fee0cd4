//! Virtual device banks — doors, lights, fire-alarm detectors.
//!
//! Each bank renders its status as the subsystem label followed by one
//! `OK,` or `FAULT,` per member, e.g. `Doors,OK,FAULT,OK,`.

mod door;
mod fire_alarm;
mod light;

pub use door::{DoorState, VirtualDoors};
pub use fire_alarm::VirtualFireAlarm;
pub use light::VirtualLights;

use std::sync::{Mutex, MutexGuard, PoisonError};

use smartbuilding_domain::fault::{FAULT_MARKER, Subsystem};

fn render_status(subsystem: Subsystem, health: impl IntoIterator<Item = bool>) -> String {
    let mut status = format!("{subsystem},");
    for healthy in health {
        status.push_str(if healthy { "OK" } else { FAULT_MARKER });
        status.push(',');
    }
    status
}

pub(crate) fn lock<T>(mutex: &Mutex<T>) -> MutexGuard<'_, T> {
    mutex.lock().unwrap_or_else(PoisonError::into_inner)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_render_label_then_one_entry_per_member() {
        let status = render_status(Subsystem::Doors, [true, false, true]);
        assert_eq!(status, "Doors,OK,FAULT,OK,");
    }

    #[test]
    fn should_render_label_alone_for_empty_bank() {
        assert_eq!(render_status(Subsystem::FireAlarm, []), "FireAlarm,");
    }
}
