//! Device ports — doors, lights and the fire-alarm sensor.
//!
//! Status strings are owned by the implementation. The controller only
//! concatenates them and looks for the
//! [`FAULT_MARKER`](smartbuilding_domain::fault::FAULT_MARKER).

use std::sync::Arc;

/// Door bank of a building.
pub trait DoorControl: Send + Sync {
    /// Open every door. Returns `true` only if all doors opened.
    fn open_all_doors(&self) -> bool;

    /// Lock every door. Returns `true` only if all doors locked.
    fn lock_all_doors(&self) -> bool;

    /// Open a single door.
    fn open_door(&self, door_id: usize) -> bool;

    /// Lock a single door.
    fn lock_door(&self, door_id: usize) -> bool;

    /// Current status string of the door bank.
    fn status(&self) -> String;
}

/// Lighting of a building.
pub trait LightControl: Send + Sync {
    /// Switch every light on or off.
    fn set_all_lights(&self, on: bool);

    /// Switch a single light on or off.
    fn set_light(&self, on: bool, light_id: usize);

    /// Current status string of the lighting.
    fn status(&self) -> String;
}

/// Fire-alarm sensor network. Status only, it cannot be driven.
pub trait FireAlarmSensor: Send + Sync {
    fn status(&self) -> String;
}

impl<T: DoorControl + ?Sized> DoorControl for Arc<T> {
    fn open_all_doors(&self) -> bool {
        (**self).open_all_doors()
    }

    fn lock_all_doors(&self) -> bool {
        (**self).lock_all_doors()
    }

    fn open_door(&self, door_id: usize) -> bool {
        (**self).open_door(door_id)
    }

    fn lock_door(&self, door_id: usize) -> bool {
        (**self).lock_door(door_id)
    }

    fn status(&self) -> String {
        (**self).status()
    }
}

impl<T: LightControl + ?Sized> LightControl for Arc<T> {
    fn set_all_lights(&self, on: bool) {
        (**self).set_all_lights(on);
    }

    fn set_light(&self, on: bool, light_id: usize) {
        (**self).set_light(on, light_id);
    }

    fn status(&self) -> String {
        (**self).status()
    }
}

impl<T: FireAlarmSensor + ?Sized> FireAlarmSensor for Arc<T> {
    fn status(&self) -> String {
        (**self).status()
    }
}
