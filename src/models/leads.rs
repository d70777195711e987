//! Lead-capture types: contact inquiries, newsletter subscriptions, and
//! brochure requests.

use serde::{Deserialize, Serialize};

/// Subject line attached to every contact-form submission.
const CONTACT_SUBJECT: &str = "Contact Form Inquiry";

/// Source tag attached to every contact-form submission.
const CONTACT_SOURCE: &str = "contact-form";

/// Triage state of a contact inquiry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ContactStatus {
    #[serde(rename = "new")]
    New,
    #[serde(rename = "contacted")]
    Contacted,
    #[serde(rename = "resolved")]
    Resolved,
}

impl std::fmt::Display for ContactStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ContactStatus::New => write!(f, "new"),
            ContactStatus::Contacted => write!(f, "contacted"),
            ContactStatus::Resolved => write!(f, "resolved"),
        }
    }
}

/// Contact inquiry as returned by the admin list endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Contact {
    pub id: String,
    pub name: String,
    pub email: String,
    pub phone: String,
    pub message: String,
    #[serde(default)]
    pub status: Option<ContactStatus>,
    #[serde(rename = "createdAt")]
    pub created_at: Option<String>,
}

/// Contact form as filled in by a visitor, before submission.
#[derive(Debug, Clone)]
pub struct ContactForm {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub phone: String,
    pub description: String,
}

/// Wire payload for `POST /api/contact`. First and last name collapse into
/// a single `name` field; subject and source are fixed.
#[derive(Debug, Clone, Serialize)]
pub struct ContactSubmission {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub message: String,
    pub subject: String,
    pub source: String,
}

impl From<&ContactForm> for ContactSubmission {
    fn from(form: &ContactForm) -> Self {
        Self {
            name: format!("{} {}", form.first_name.trim(), form.last_name.trim()),
            email: form.email.clone(),
            phone: form.phone.clone(),
            message: form.description.clone(),
            subject: CONTACT_SUBJECT.to_string(),
            source: CONTACT_SOURCE.to_string(),
        }
    }
}

/// Subscription state of a newsletter entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SubscriberStatus {
    #[serde(rename = "active")]
    Active,
    #[serde(rename = "unsubscribed")]
    Unsubscribed,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewsletterSubscriber {
    pub id: String,
    pub email: String,
    pub status: SubscriberStatus,
    #[serde(rename = "subscribedAt")]
    pub subscribed_at: Option<String>,
}

/// Payload for `POST /api/brochure/request`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BrochureRequest {
    pub email: String,
    #[serde(rename = "propertyName")]
    pub property_name: String,
}
