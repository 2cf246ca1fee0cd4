//! Tracing-backed transports.
//!
//! Stand-ins for the remote web log and the mail gateway: every delivery is
//! emitted as a structured `tracing` event and kept in memory so that it can
//! be inspected afterwards.

use std::sync::Mutex;
use std::sync::atomic::{AtomicBool, Ordering};

use smartbuilding_app::ports::{AlertTransport, NotificationTransport, TransportError};

use crate::devices::lock;

/// A record accepted by [`TracingAlertTransport`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AlertRecord {
    FireAlarm(String),
    EngineerRequired(String),
}

/// Alert log that can be switched offline to simulate an outage.
pub struct TracingAlertTransport {
    online: AtomicBool,
    records: Mutex<Vec<AlertRecord>>,
}

impl TracingAlertTransport {
    #[must_use]
    pub fn new(online: bool) -> Self {
        Self {
            online: AtomicBool::new(online),
            records: Mutex::new(Vec::new()),
        }
    }

    pub fn set_online(&self, online: bool) {
        self.online.store(online, Ordering::Relaxed);
    }

    #[must_use]
    pub fn is_online(&self) -> bool {
        self.online.load(Ordering::Relaxed)
    }

    /// Records accepted so far, oldest first.
    #[must_use]
    pub fn records(&self) -> Vec<AlertRecord> {
        lock(&self.records).clone()
    }

    fn accept(&self, record: AlertRecord) -> Result<(), TransportError> {
        if !self.is_online() {
            return Err(TransportError::Unavailable {
                service: "alert log",
            });
        }
        lock(&self.records).push(record);
        Ok(())
    }
}

impl Default for TracingAlertTransport {
    fn default() -> Self {
        Self::new(true)
    }
}

impl AlertTransport for TracingAlertTransport {
    fn log_fire_alarm(&self, tag: &str) -> Result<(), TransportError> {
        self.accept(AlertRecord::FireAlarm(tag.to_string()))?;
        tracing::warn!(tag, "fire alarm logged");
        Ok(())
    }

    fn log_engineer_required(&self, fault_summary: &str) -> Result<(), TransportError> {
        self.accept(AlertRecord::EngineerRequired(fault_summary.to_string()))?;
        tracing::warn!(faults = fault_summary, "engineer required");
        Ok(())
    }
}

/// An email handed to [`TracingNotifier`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Email {
    pub to: String,
    pub subject: String,
    pub body: String,
}

/// Mail gateway that only logs and keeps an outbox.
#[derive(Default)]
pub struct TracingNotifier {
    outbox: Mutex<Vec<Email>>,
}

impl TracingNotifier {
    /// Emails sent so far, oldest first.
    #[must_use]
    pub fn sent(&self) -> Vec<Email> {
        lock(&self.outbox).clone()
    }
}

impl NotificationTransport for TracingNotifier {
    fn send_email(&self, to: &str, subject: &str, body: &str) -> Result<(), TransportError> {
        tracing::info!(to, subject, body, "email sent");
        lock(&self.outbox).push(Email {
            to: to.to_string(),
            subject: subject.to_string(),
            body: body.to_string(),
        });
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_keep_records_in_order() {
        let alerts = TracingAlertTransport::default();
        alerts.log_fire_alarm("fire alarm").unwrap();
        alerts.log_engineer_required("Doors,").unwrap();
        assert_eq!(
            alerts.records(),
            vec![
                AlertRecord::FireAlarm("fire alarm".to_string()),
                AlertRecord::EngineerRequired("Doors,".to_string()),
            ]
        );
    }

    #[test]
    fn should_fail_while_offline() {
        let alerts = TracingAlertTransport::new(false);
        let err = alerts.log_fire_alarm("fire alarm").unwrap_err();
        assert_eq!(err.to_string(), "alert log is unavailable");
        assert!(alerts.log_engineer_required("Lights,").is_err());
        assert!(alerts.records().is_empty());
    }

    #[test]
    fn should_accept_again_once_back_online() {
        let alerts = TracingAlertTransport::new(false);
        alerts.set_online(true);
        assert!(alerts.is_online());
        assert!(alerts.log_fire_alarm("fire alarm").is_ok());
    }

    #[test]
    fn should_store_sent_email() {
        let notifier = TracingNotifier::default();
        notifier
            .send_email("ops@example.com", "subject", "body")
            .unwrap();
        assert_eq!(
            notifier.sent(),
            vec![Email {
                to: "ops@example.com".to_string(),
                subject: "subject".to_string(),
                body: "body".to_string(),
            }]
        );
    }
}
