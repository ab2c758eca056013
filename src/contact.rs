use std::{collections::BTreeMap, fmt, future::Future, ops::RangeInclusive, sync::LazyLock};

use regex::Regex;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::config::EmailJsConfig;

static EMAIL_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("email pattern should compile")
});

const NAME_LEN: RangeInclusive<usize> = 2..=50;
const SUBJECT_LEN: RangeInclusive<usize> = 5..=100;
const MESSAGE_LEN: RangeInclusive<usize> = 10..=1000;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Field {
    Name,
    Email,
    Subject,
    Message,
}

impl Field {
    pub fn all() -> [Field; 4] {
        [Field::Name, Field::Email, Field::Subject, Field::Message]
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Field::Name => "name",
            Field::Email => "email",
            Field::Subject => "subject",
            Field::Message => "message",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Field::Name => "Name",
            Field::Email => "Email",
            Field::Subject => "Subject",
            Field::Message => "Message",
        }
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Field-level validation messages, at most one per field.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FormErrors(BTreeMap<Field, String>);

impl FormErrors {
    pub fn get(&self, field: Field) -> Option<&str> {
        self.0.get(&field).map(String::as_str)
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn fields(&self) -> impl Iterator<Item = Field> + '_ {
        self.0.keys().copied()
    }

    pub fn clear(&mut self, field: Field) {
        self.0.remove(&field);
    }

    fn insert(&mut self, field: Field, message: impl Into<String>) {
        self.0.insert(field, message.into());
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactForm {
    pub name: String,
    pub email: String,
    pub subject: String,
    pub message: String,
}

impl ContactForm {
    pub fn set(&mut self, field: Field, value: String) {
        match field {
            Field::Name => self.name = value,
            Field::Email => self.email = value,
            Field::Subject => self.subject = value,
            Field::Message => self.message = value,
        }
    }

    pub fn value(&self, field: Field) -> &str {
        match field {
            Field::Name => &self.name,
            Field::Email => &self.email,
            Field::Subject => &self.subject,
            Field::Message => &self.message,
        }
    }

    /// Checks every field and reports all failures at once.
    pub fn validate(&self) -> Result<(), FormErrors> {
        let mut errors = FormErrors::default();

        check_length(&mut errors, Field::Name, &self.name, NAME_LEN);
        let email = self.email.trim();
        if email.is_empty() {
            errors.insert(Field::Email, "Email is required");
        } else if !EMAIL_PATTERN.is_match(email) {
            errors.insert(Field::Email, "Please enter a valid email address");
        }
        check_length(&mut errors, Field::Subject, &self.subject, SUBJECT_LEN);
        check_length(&mut errors, Field::Message, &self.message, MESSAGE_LEN);

        if errors.is_empty() {
            Ok(())
        } else {
            Err(errors)
        }
    }

    /// Builds the provider's template parameters from a valid form.
    pub fn to_params(&self, recipient: &str) -> Result<EmailParams, FormErrors> {
        self.validate()?;
        let from_email = self.email.trim().to_string();
        Ok(EmailParams {
            from_name: self.name.trim().to_string(),
            reply_to: from_email.clone(),
            from_email,
            subject: self.subject.trim().to_string(),
            message: self.message.trim().to_string(),
            to_email: recipient.to_string(),
        })
    }
}

fn check_length(errors: &mut FormErrors, field: Field, value: &str, range: RangeInclusive<usize>) {
    let len = value.trim().chars().count();
    let label = field.label();
    if len == 0 {
        errors.insert(field, format!("{label} is required"));
    } else if len < *range.start() {
        errors.insert(
            field,
            format!("{label} must be at least {} characters", range.start()),
        );
    } else if len > *range.end() {
        errors.insert(
            field,
            format!("{label} must be at most {} characters", range.end()),
        );
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EmailParams {
    pub from_name: String,
    pub from_email: String,
    pub subject: String,
    pub message: String,
    pub to_email: String,
    pub reply_to: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SubmitStatus {
    #[default]
    Idle,
    Success,
    Error,
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ContactError {
    #[error("email request failed: {0}")]
    Request(String),
    #[error("email provider rejected the message ({status}): {body}")]
    Rejected { status: u16, body: String },
    #[error("email sending is only available in the browser")]
    Unavailable,
}

pub trait EmailSender {
    fn send(&self, params: &EmailParams) -> impl Future<Output = Result<(), ContactError>>;
}

/// Validates `form` and hands it to `sender`.
///
/// Validation failures come back as `Err` and never reach the sender. A send failure is
/// not retried; it becomes [`SubmitStatus::Error`] and the user resubmits.
pub async fn submit<S: EmailSender>(
    form: &ContactForm,
    recipient: &str,
    sender: &S,
) -> Result<SubmitStatus, FormErrors> {
    let params = form.to_params(recipient)?;
    match sender.send(&params).await {
        Ok(()) => {
            log::info!("contact message sent for {}", params.from_email);
            Ok(SubmitStatus::Success)
        }
        Err(e) => {
            log::error!("contact message failed: {e}");
            Ok(SubmitStatus::Error)
        }
    }
}

#[cfg_attr(not(feature = "hydrate"), allow(dead_code))]
#[derive(Debug, Serialize)]
struct EmailJsPayload<'a> {
    service_id: &'a str,
    template_id: &'a str,
    user_id: &'a str,
    template_params: &'a EmailParams,
}

/// Sends through the EmailJS REST API.
#[derive(Debug, Clone, Default)]
pub struct EmailJsSender {
    config: EmailJsConfig,
}

impl EmailJsSender {
    pub fn new(config: EmailJsConfig) -> Self {
        if !config.is_configured() {
            log::warn!("EmailJS public key is not configured, contact messages will fail");
        }
        Self { config }
    }

    pub fn config(&self) -> &EmailJsConfig {
        &self.config
    }
}

impl EmailSender for EmailJsSender {
    #[cfg(feature = "hydrate")]
    async fn send(&self, params: &EmailParams) -> Result<(), ContactError> {
        use gloo_net::http::Request;

        let payload = EmailJsPayload {
            service_id: self.config.service_id,
            template_id: self.config.template_id,
            user_id: self.config.public_key,
            template_params: params,
        };
        let response = Request::post(EmailJsConfig::ENDPOINT)
            .json(&payload)
            .map_err(|e| ContactError::Request(e.to_string()))?
            .send()
            .await
            .map_err(|e| ContactError::Request(e.to_string()))?;
        if response.ok() {
            return Ok(());
        }
        let status = response.status();
        let body = response.text().await.unwrap_or_default();
        Err(ContactError::Rejected { status, body })
    }

    #[cfg(not(feature = "hydrate"))]
    async fn send(&self, _params: &EmailParams) -> Result<(), ContactError> {
        Err(ContactError::Unavailable)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Mutex;

    #[derive(Default)]
    struct RecordingSender {
        sent: Mutex<Vec<EmailParams>>,
        fail: bool,
    }

    impl EmailSender for RecordingSender {
        async fn send(&self, params: &EmailParams) -> Result<(), ContactError> {
            self.sent
                .lock()
                .expect("should be able to lock sent list")
                .push(params.clone());
            if self.fail {
                Err(ContactError::Rejected {
                    status: 400,
                    body: "The Public Key is invalid".to_string(),
                })
            } else {
                Ok(())
            }
        }
    }

    fn valid_form() -> ContactForm {
        ContactForm {
            name: "Jordan".to_string(),
            email: "jordan@example.com".to_string(),
            subject: "New website".to_string(),
            message: "I'd like a portfolio site built.".to_string(),
        }
    }

    #[test]
    fn test_valid_form() {
        assert_eq!(valid_form().validate(), Ok(()));
    }

    #[test]
    fn test_email_pattern() {
        let mut form = valid_form();
        for bad in ["not-an-email", "a@b", "@example.com", "a b@example.com", "a@@b.com"] {
            form.email = bad.to_string();
            let errors = form.validate().expect_err(bad);
            assert!(errors.get(Field::Email).is_some(), "{bad} should be rejected");
            assert_eq!(errors.len(), 1);
        }
        for good in ["a@b.co", "first.last@sub.example.org", "  padded@example.com "] {
            form.email = good.to_string();
            assert!(form.validate().is_ok(), "{good} should be accepted");
        }
    }

    #[test]
    fn test_length_limits() {
        let mut form = valid_form();
        form.name = "J".to_string();
        form.subject = "Hi".to_string();
        form.message = "too short".to_string();
        let errors = form.validate().unwrap_err();
        assert_eq!(
            errors.fields().collect::<Vec<_>>(),
            vec![Field::Name, Field::Subject, Field::Message]
        );
        assert_eq!(
            errors.get(Field::Name),
            Some("Name must be at least 2 characters")
        );

        form = valid_form();
        form.message = "x".repeat(1001);
        assert_eq!(
            form.validate().unwrap_err().get(Field::Message),
            Some("Message must be at most 1000 characters")
        );
        form.message = "x".repeat(1000);
        assert!(form.validate().is_ok());
    }

    #[test]
    fn test_whitespace_only_is_required() {
        let mut form = valid_form();
        form.subject = "     ".to_string();
        assert_eq!(
            form.validate().unwrap_err().get(Field::Subject),
            Some("Subject is required")
        );
    }

    #[test]
    fn test_lengths_count_characters() {
        let mut form = valid_form();
        // Two characters, six bytes
        form.name = "সি".to_string();
        assert!(form.validate().is_ok());
    }

    #[test]
    fn test_params_from_form() {
        let mut form = valid_form();
        form.name = "  Jordan ".to_string();
        let params = form.to_params("owner@example.com").unwrap();
        assert_eq!(params.from_name, "Jordan");
        assert_eq!(params.from_email, "jordan@example.com");
        assert_eq!(params.reply_to, "jordan@example.com");
        assert_eq!(params.to_email, "owner@example.com");
    }

    #[tokio::test]
    async fn test_invalid_email_never_sends() {
        let sender = RecordingSender::default();
        let mut form = valid_form();
        form.email = "not-an-email".to_string();

        let res = submit(&form, "owner@example.com", &sender).await;
        let errors = res.expect_err("submission should be rejected");
        assert!(errors.get(Field::Email).is_some());
        assert!(sender.sent.lock().unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_submit_success() {
        let sender = RecordingSender::default();
        let res = submit(&valid_form(), "owner@example.com", &sender).await;
        assert_eq!(res, Ok(SubmitStatus::Success));
        let sent = sender.sent.lock().unwrap();
        assert_eq!(sent.len(), 1);
        assert_eq!(sent[0].subject, "New website");
    }

    #[tokio::test]
    async fn test_send_failure_is_error_status() {
        let sender = RecordingSender {
            fail: true,
            ..Default::default()
        };
        let res = submit(&valid_form(), "owner@example.com", &sender).await;
        assert_eq!(res, Ok(SubmitStatus::Error));
        // Exactly one attempt, no retry
        assert_eq!(sender.sent.lock().unwrap().len(), 1);
    }

    #[test]
    fn test_clear_single_error() {
        let mut errors = ContactForm::default().validate().unwrap_err();
        assert_eq!(errors.len(), 4);
        errors.clear(Field::Email);
        assert_eq!(errors.get(Field::Email), None);
        assert_eq!(errors.get(Field::Name), Some("Name is required"));
    }

    #[test]
    fn test_form_field_accessors() {
        let mut form = ContactForm::default();
        for field in Field::all() {
            form.set(field, format!("{field} value"));
        }
        assert_eq!(form.value(Field::Subject), "subject value");
        assert_eq!(form.email, "email value");
    }

    #[test]
    fn test_emailjs_payload_shape() {
        let params = valid_form().to_params("owner@example.com").unwrap();
        let payload = EmailJsPayload {
            service_id: "service_x",
            template_id: "template_y",
            user_id: "key",
            template_params: &params,
        };
        let json = serde_json::to_value(&payload).unwrap();
        assert_eq!(json["service_id"], "service_x");
        assert_eq!(json["user_id"], "key");
        assert_eq!(json["template_params"]["reply_to"], "jordan@example.com");
        assert_eq!(json["template_params"]["to_email"], "owner@example.com");
    }
}
