//! Simulated contact-form submission.
//!
//! The page has no mail backend; submission waits a realistic delay and
//! reports a fixed confirmation, exactly as the site does today.

use std::time::Duration;

pub const SUBMIT_LATENCY: Duration = Duration::from_millis(1500);

pub const SUCCESS_MESSAGE: &str =
    "¡Mensaje enviado con éxito! Nos pondremos en contacto contigo pronto.";

#[derive(Debug, Clone)]
pub struct ContactMessage {
    pub name: String,
    pub email: String,
    pub message: String,
}

pub async fn send_message(message: &ContactMessage) -> String {
    tracing::debug!("Simulating contact submission from {}", message.email);
    tokio::time::sleep(SUBMIT_LATENCY).await;
    SUCCESS_MESSAGE.to_string()
}
