//! Port definitions — traits that adapters implement.
//!
//! Ports are the boundaries between the controller and the physical building
//! or remote services. Every call is synchronous and blocking. A controller
//! owns each collaborator as a boxed trait object (`Box<dyn …>`); the `Arc`
//! forwarding impls let callers hand it a shared handle and keep one for
//! themselves (virtual devices, test fakes, real hardware).

pub mod devices;
pub mod transport;

pub use devices::{DoorControl, FireAlarmSensor, LightControl};
pub use transport::{AlertTransport, NotificationTransport, TransportError};
