//! Virtual door bank — doors can be opened, locked, or stuck in a fault.

use std::sync::Mutex;

use smartbuilding_app::ports::DoorControl;
use smartbuilding_domain::fault::Subsystem;

use super::{lock, render_status};

/// Position of a single door.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DoorState {
    Locked,
    Open,
}

#[derive(Debug, Clone, Copy)]
struct Door {
    state: DoorState,
    faulted: bool,
}

/// A bank of simulated doors, all locked initially.
///
/// A faulted door ignores every command and makes the bulk operations
/// report failure.
pub struct VirtualDoors {
    doors: Mutex<Vec<Door>>,
}

impl VirtualDoors {
    #[must_use]
    pub fn new(count: usize) -> Self {
        let door = Door {
            state: DoorState::Locked,
            faulted: false,
        };
        Self {
            doors: Mutex::new(vec![door; count]),
        }
    }

    /// Mark the given doors as faulted; unknown ids are ignored.
    #[must_use]
    pub fn with_faulted(self, door_ids: &[usize]) -> Self {
        for &door_id in door_ids {
            self.set_faulted(door_id, true);
        }
        self
    }

    /// Set or clear the fault on one door. Returns `false` for unknown ids.
    pub fn set_faulted(&self, door_id: usize, faulted: bool) -> bool {
        match lock(&self.doors).get_mut(door_id) {
            Some(door) => {
                door.faulted = faulted;
                true
            }
            None => false,
        }
    }

    #[must_use]
    pub fn door_state(&self, door_id: usize) -> Option<DoorState> {
        lock(&self.doors).get(door_id).map(|door| door.state)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        lock(&self.doors).len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    fn move_all(&self, target: DoorState) -> bool {
        let mut doors = lock(&self.doors);
        let mut all_moved = true;
        for door in doors.iter_mut() {
            if door.faulted {
                all_moved = false;
            } else {
                door.state = target;
            }
        }
        all_moved
    }

    fn move_one(&self, door_id: usize, target: DoorState) -> bool {
        match lock(&self.doors).get_mut(door_id) {
            Some(door) if !door.faulted => {
                door.state = target;
                true
            }
            _ => {
                tracing::debug!(door_id, ?target, "door did not respond");
                false
            }
        }
    }
}

impl Default for VirtualDoors {
    fn default() -> Self {
        Self::new(8)
    }
}

impl DoorControl for VirtualDoors {
    fn open_all_doors(&self) -> bool {
        self.move_all(DoorState::Open)
    }

    fn lock_all_doors(&self) -> bool {
        self.move_all(DoorState::Locked)
    }

    fn open_door(&self, door_id: usize) -> bool {
        self.move_one(door_id, DoorState::Open)
    }

    fn lock_door(&self, door_id: usize) -> bool {
        self.move_one(door_id, DoorState::Locked)
    }

    fn status(&self) -> String {
        render_status(
            Subsystem::Doors,
            lock(&self.doors).iter().map(|door| !door.faulted),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_start_with_eight_locked_doors() {
        let doors = VirtualDoors::default();
        assert_eq!(doors.len(), 8);
        assert_eq!(doors.door_state(0), Some(DoorState::Locked));
        assert_eq!(doors.status(), "Doors,OK,OK,OK,OK,OK,OK,OK,OK,");
    }

    #[test]
    fn should_open_and_lock_all_healthy_doors() {
        let doors = VirtualDoors::new(3);
        assert!(doors.open_all_doors());
        assert_eq!(doors.door_state(2), Some(DoorState::Open));
        assert!(doors.lock_all_doors());
        assert_eq!(doors.door_state(2), Some(DoorState::Locked));
    }

    #[test]
    fn should_report_failure_when_a_door_is_faulted() {
        let doors = VirtualDoors::new(3).with_faulted(&[1]);
        assert!(!doors.open_all_doors());
        assert_eq!(doors.door_state(0), Some(DoorState::Open));
        assert_eq!(doors.door_state(1), Some(DoorState::Locked));
        assert_eq!(doors.status(), "Doors,OK,FAULT,OK,");
    }

    #[test]
    fn should_operate_single_door() {
        let doors = VirtualDoors::new(2);
        assert!(doors.open_door(1));
        assert_eq!(doors.door_state(1), Some(DoorState::Open));
        assert_eq!(doors.door_state(0), Some(DoorState::Locked));
        assert!(doors.lock_door(1));
        assert_eq!(doors.door_state(1), Some(DoorState::Locked));
    }

    #[test]
    fn should_refuse_unknown_or_faulted_door() {
        let doors = VirtualDoors::new(2).with_faulted(&[0]);
        assert!(!doors.open_door(0));
        assert!(!doors.open_door(5));
        assert_eq!(doors.door_state(5), None);
    }

    #[test]
    fn should_clear_fault() {
        let doors = VirtualDoors::new(1).with_faulted(&[0]);
        assert!(doors.set_faulted(0, false));
        assert!(doors.open_all_doors());
        assert!(!doors.set_faulted(3, true));
    }
}
