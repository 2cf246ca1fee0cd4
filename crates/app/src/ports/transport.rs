//! Transport ports — remote alert logging and email notification.
//!
//! The wire format of either transport is the implementation's business.

use std::sync::Arc;

/// Failure reported by a transport.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum TransportError {
    /// The remote endpoint could not be reached at all.
    #[error("{service} is unavailable")]
    Unavailable { service: &'static str },

    /// The remote endpoint failed the request; the message is its own.
    #[error("{0}")]
    Failed(String),
}

/// Remote logging service for alarms and maintenance requests.
pub trait AlertTransport: Send + Sync {
    /// Record that the fire alarm was raised, tagged with the state name.
    ///
    /// # Errors
    ///
    /// Returns a [`TransportError`] when the record could not be delivered.
    fn log_fire_alarm(&self, tag: &str) -> Result<(), TransportError>;

    /// Request an engineer for the subsystems listed in `fault_summary`.
    ///
    /// # Errors
    ///
    /// Returns a [`TransportError`] when the request could not be delivered.
    fn log_engineer_required(&self, fault_summary: &str) -> Result<(), TransportError>;
}

/// Email delivery.
pub trait NotificationTransport: Send + Sync {
    /// Send a plain-text email.
    ///
    /// # Errors
    ///
    /// Returns a [`TransportError`] when the message could not be sent.
    fn send_email(&self, to: &str, subject: &str, body: &str) -> Result<(), TransportError>;
}

impl<T: AlertTransport + ?Sized> AlertTransport for Arc<T> {
    fn log_fire_alarm(&self, tag: &str) -> Result<(), TransportError> {
        (**self).log_fire_alarm(tag)
    }

    fn log_engineer_required(&self, fault_summary: &str) -> Result<(), TransportError> {
        (**self).log_engineer_required(fault_summary)
    }
}

impl<T: NotificationTransport + ?Sized> NotificationTransport for Arc<T> {
    fn send_email(&self, to: &str, subject: &str, body: &str) -> Result<(), TransportError> {
        (**self).send_email(to, subject, body)
    }
}
