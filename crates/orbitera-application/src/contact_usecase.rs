//! Public contact form.

use std::sync::Arc;
use std::time::Duration;

use orbitera_core::error::Result;
use orbitera_core::record::{ContactSubmission, Message, Record, RecordStore};
use orbitera_infrastructure::PersistedMessageStore;

pub struct ContactUseCase {
    messages: Arc<PersistedMessageStore>,
    submit_delay: Duration,
}

impl ContactUseCase {
    pub fn new(messages: Arc<PersistedMessageStore>, submit_delay: Duration) -> Self {
        Self {
            messages,
            submit_delay,
        }
    }

    /// Validates the form, waits the configured latency and stores the message.
    ///
    /// A rejected form returns `OrbiteraError::Validation` right away without
    /// waiting or writing anything.
    pub async fn submit(&self, submission: ContactSubmission) -> Result<Message> {
        Message::validate(&submission)?;

        if !self.submit_delay.is_zero() {
            tokio::time::sleep(self.submit_delay).await;
        }

        let message = self.messages.add(submission)?;
        tracing::info!("[ContactUseCase] Message {} sent", message.id);
        Ok(message)
    }
}
