//! Client-side contact form: field checks and a simulated delivery.

use regex_lite::Regex;
use std::sync::OnceLock;
use std::time::{Duration, Instant};
use thiserror::Error;

pub const SENDING_TEXT: &str = "Enviando mensagem...";
pub const SUCCESS_TEXT: &str = "Mensagem enviada com sucesso! Obrigado por entrar em contato.";

/// Validation failures. The display text is shown to the user as-is.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormError {
    #[error("Por favor, preencha todos os campos")]
    MissingFields,

    #[error("Por favor, insira um e-mail válido")]
    InvalidEmail,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FeedbackStatus {
    #[default]
    Idle,
    Sending,
    Error,
    Success,
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct FormFeedback {
    pub text: String,
    pub status: FeedbackStatus,
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ContactForm {
    pub name: String,
    pub email: String,
    pub subject: String,
    pub message: String,
    feedback: FormFeedback,
}

pub fn is_valid_email(email: &str) -> bool {
    static EMAIL: OnceLock<Regex> = OnceLock::new();
    EMAIL
        .get_or_init(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("email pattern is valid"))
        .is_match(email)
}

impl ContactForm {
    pub fn new(name: &str, email: &str, subject: &str, message: &str) -> Self {
        Self {
            name: name.to_string(),
            email: email.to_string(),
            subject: subject.to_string(),
            message: message.to_string(),
            feedback: FormFeedback::default(),
        }
    }

    pub fn feedback(&self) -> &FormFeedback {
        &self.feedback
    }

    pub fn validate(&self) -> Result<(), FormError> {
        let fields = [&self.name, &self.email, &self.subject, &self.message];
        if fields.iter().any(|f| f.trim().is_empty()) {
            return Err(FormError::MissingFields);
        }
        if !is_valid_email(self.email.trim()) {
            return Err(FormError::InvalidEmail);
        }
        Ok(())
    }

    pub fn show_sending(&mut self) {
        self.feedback = FormFeedback {
            text: SENDING_TEXT.to_string(),
            status: FeedbackStatus::Sending,
        };
    }

    pub fn show_error(&mut self, error: FormError) {
        self.feedback = FormFeedback {
            text: format!("\u{274c} {}", error),
            status: FeedbackStatus::Error,
        };
    }

    pub fn show_success(&mut self, message: &str) {
        self.feedback = FormFeedback {
            text: format!("\u{2705} {}", message),
            status: FeedbackStatus::Success,
        };
    }

    /// Clear the fields. Feedback stays visible.
    pub fn reset(&mut self) {
        self.name.clear();
        self.email.clear();
        self.subject.clear();
        self.message.clear();
    }
}

/// A submission accepted locally and waiting out its simulated delivery delay.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PendingSubmission {
    ready_at: Instant,
}

impl PendingSubmission {
    pub fn new(submitted_at: Instant, delay: Duration) -> Self {
        Self {
            ready_at: submitted_at + delay,
        }
    }

    pub fn is_ready(&self, now: Instant) -> bool {
        now >= self.ready_at
    }
}
