use std::sync::Arc;

use async_trait::async_trait;
use harmonia_core::{Email, EmailNotifier, EmailNotifierError};
use tokio::sync::RwLock;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SentEmail {
    pub recipient: String,
    pub token: String,
    pub kind: SentEmailKind,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SentEmailKind {
    Verification,
    PasswordReset,
}

/// Records outbound mail instead of sending it. Used by tests and local
/// development runs without a mail transport.
#[derive(Default, Clone)]
pub struct MockEmailNotifier {
    sent: Arc<RwLock<Vec<SentEmail>>>,
}

impl MockEmailNotifier {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn sent(&self) -> Vec<SentEmail> {
        self.sent.read().await.clone()
    }

    async fn record(&self, recipient: &Email, token: &str, kind: SentEmailKind) {
        tracing::debug!(recipient = %recipient, ?kind, "recording mock email");
        self.sent.write().await.push(SentEmail {
            recipient: recipient.as_str().to_owned(),
            token: token.to_owned(),
            kind,
        });
    }
}

#[async_trait]
impl EmailNotifier for MockEmailNotifier {
    async fn send_verification_email(
        &self,
        recipient: &Email,
        token: &str,
    ) -> Result<(), EmailNotifierError> {
        self.record(recipient, token, SentEmailKind::Verification).await;
        Ok(())
    }

    async fn send_password_reset_email(
        &self,
        recipient: &Email,
        token: &str,
    ) -> Result<(), EmailNotifierError> {
        self.record(recipient, token, SentEmailKind::PasswordReset).await;
        Ok(())
    }
}
