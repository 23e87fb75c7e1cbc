use async_trait::async_trait;
use harmonia_core::{Email, EmailNotifier, EmailNotifierError};
use reqwest::Client;
use secrecy::{ExposeSecret, Secret};
use serde::Serialize;

/// Postmark-backed mail transport.
///
/// Verification and reset mails carry a link into the frontend with the
/// token as a query parameter. Callers treat failures as best-effort.
#[derive(Clone)]
pub struct PostmarkEmailNotifier {
    http_client: Client,
    base_url: String,
    sender: Email,
    frontend_base_url: String,
    authorization_token: Secret<String>,
}

impl PostmarkEmailNotifier {
    pub fn new(
        base_url: String,
        sender: Email,
        frontend_base_url: String,
        authorization_token: Secret<String>,
        http_client: Client,
    ) -> Self {
        Self {
            http_client,
            base_url,
            sender,
            frontend_base_url,
            authorization_token,
        }
    }

    async fn send(
        &self,
        recipient: &Email,
        subject: &str,
        body: &str,
    ) -> Result<(), EmailNotifierError> {
        let url = format!("{}/email", self.base_url.trim_end_matches('/'));
        let request = SendEmailRequest {
            from: self.sender.as_str(),
            to: recipient.as_str(),
            subject,
            text_body: body,
        };

        let response = self
            .http_client
            .post(&url)
            .header(
                "X-Postmark-Server-Token",
                self.authorization_token.expose_secret(),
            )
            .json(&request)
            .send()
            .await
            .map_err(|e| EmailNotifierError::Transport(e.to_string()))?;

        response
            .error_for_status()
            .map(|_| ())
            .map_err(|e| EmailNotifierError::Transport(e.to_string()))
    }
}

#[async_trait]
impl EmailNotifier for PostmarkEmailNotifier {
    #[tracing::instrument(name = "Sending verification email", skip_all)]
    async fn send_verification_email(
        &self,
        recipient: &Email,
        token: &str,
    ) -> Result<(), EmailNotifierError> {
        let link = format!("{}/verify-email?token={token}", self.frontend_base_url);
        let body = format!("Welcome! Please confirm your email address:\n\n{link}\n");
        self.send(recipient, "Confirm your email address", &body)
            .await
    }

    #[tracing::instrument(name = "Sending password reset email", skip_all)]
    async fn send_password_reset_email(
        &self,
        recipient: &Email,
        token: &str,
    ) -> Result<(), EmailNotifierError> {
        let link = format!("{}/reset-password?token={token}", self.frontend_base_url);
        let body = format!("A password reset was requested for your account:\n\n{link}\n");
        self.send(recipient, "Reset your password", &body).await
    }
}

#[derive(Serialize)]
#[serde(rename_all = "PascalCase")]
struct SendEmailRequest<'a> {
    from: &'a str,
    to: &'a str,
    subject: &'a str,
    text_body: &'a str,
}
