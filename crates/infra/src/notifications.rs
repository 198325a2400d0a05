//! Notification facade implementations for tests/dev.

use std::sync::{Mutex, PoisonError};

use tracing::info;

use invoiceflow_app::{NotificationFacade, NotifyData};

/// Records every notification for later inspection in tests.
#[derive(Debug, Default)]
pub struct RecordingNotificationFacade {
    sent: Mutex<Vec<NotifyData>>,
}

impl RecordingNotificationFacade {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn sent(&self) -> Vec<NotifyData> {
        self.sent
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }
}

impl NotificationFacade for RecordingNotificationFacade {
    fn notify(&self, data: NotifyData) {
        self.sent
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push(data);
    }
}

/// Logs notifications instead of delivering them (local development
/// stand-in for a real transport).
#[derive(Debug, Default)]
pub struct LoggingNotificationFacade;

impl LoggingNotificationFacade {
    pub fn new() -> Self {
        Self
    }
}

impl NotificationFacade for LoggingNotificationFacade {
    fn notify(&self, data: NotifyData) {
        info!(
            resource_id = %data.resource_id,
            to_email = %data.to_email,
            subject = %data.subject,
            "notification dispatched"
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use invoiceflow_core::InvoiceId;

    #[test]
    fn recording_facade_keeps_notifications_in_order() {
        let facade = RecordingNotificationFacade::new();
        let first = InvoiceId::new();
        let second = InvoiceId::new();

        for id in [first, second] {
            facade.notify(NotifyData {
                resource_id: id,
                to_email: "john@example.com".into(),
                subject: "Your Invoice is Ready".into(),
                message: "hello".into(),
            });
        }

        let sent = facade.sent();
        assert_eq!(sent.len(), 2);
        assert_eq!(sent[0].resource_id, first);
        assert_eq!(sent[1].resource_id, second);
    }
}
