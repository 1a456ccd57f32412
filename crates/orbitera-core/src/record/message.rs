//! Contact-form message domain model.

use chrono::{DateTime, TimeZone, Utc};
use serde::{Deserialize, Serialize};

use super::id::{RecordId, iso_timestamp};
use super::repository::Record;
use super::validation::{FormErrors, looks_like_email};

/// A message left through the public contact form.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Message {
    pub id: RecordId,
    pub name: String,
    pub email: String,
    pub subject: String,
    pub message: String,
    /// Submission time, ISO-8601 with millisecond precision.
    pub timestamp: String,
}

/// Contact form input.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactSubmission {
    pub name: String,
    pub email: String,
    pub subject: String,
    pub message: String,
}

impl ContactSubmission {
    pub fn new(
        name: impl Into<String>,
        email: impl Into<String>,
        subject: impl Into<String>,
        message: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            email: email.into(),
            subject: subject.into(),
            message: message.into(),
        }
    }
}

impl Record for Message {
    type Draft = ContactSubmission;
    const ENTITY: &'static str = "message";

    fn id(&self) -> RecordId {
        self.id
    }

    fn validate(draft: &ContactSubmission) -> Result<(), FormErrors> {
        let mut errors = FormErrors::new();
        errors.require("name", "Name", &draft.name);
        errors.require("email", "Email", &draft.email);
        errors.require("subject", "Subject", &draft.subject);
        errors.require("message", "Message", &draft.message);
        if !errors.contains("email") && !looks_like_email(&draft.email) {
            errors.insert("email", "Please enter a valid email address");
        }
        errors.into_result()
    }

    fn from_draft(draft: ContactSubmission, id: RecordId, created_at: DateTime<Utc>) -> Self {
        Self {
            id,
            name: draft.name,
            email: draft.email,
            subject: draft.subject,
            message: draft.message,
            timestamp: iso_timestamp(created_at),
        }
    }
}

impl Message {
    /// Parsed submission time, if the stored timestamp is well formed.
    pub fn sent_at(&self) -> Option<DateTime<Utc>> {
        DateTime::parse_from_rfc3339(&self.timestamp)
            .ok()
            .map(|t| t.with_timezone(&Utc))
    }

    /// Avatar letter: first character of the sender name, upper-cased.
    pub fn initial(&self) -> String {
        self.name
            .chars()
            .next()
            .map(|c| c.to_uppercase().collect())
            .unwrap_or_else(|| "?".to_string())
    }

    /// `mailto:` link pre-filled with a `Re:` subject.
    pub fn reply_link(&self) -> String {
        format!("mailto:{}?subject=Re: {}", self.email, self.subject)
    }

    /// Long form date, e.g. `16 Oct 2026, 09:30 am`. Empty when unparsable.
    pub fn display_date_in<Tz: TimeZone>(&self, tz: &Tz) -> String
    where
        Tz::Offset: std::fmt::Display,
    {
        match self.sent_at() {
            Some(at) => at
                .with_timezone(tz)
                .format("%-d %b %Y, %I:%M %P")
                .to_string(),
            None => String::new(),
        }
    }

    /// Date part only, as shown in the inbox list.
    pub fn short_date_in<Tz: TimeZone>(&self, tz: &Tz) -> String
    where
        Tz::Offset: std::fmt::Display,
    {
        self.display_date_in(tz)
            .split(',')
            .next()
            .unwrap_or_default()
            .to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn sample() -> Message {
        Message::from_draft(
            ContactSubmission::new("rahul", "rahul@example.com", "Website", "Hello"),
            RecordId(1),
            Utc.with_ymd_and_hms(2026, 10, 16, 9, 30, 0).unwrap(),
        )
    }

    #[test]
    fn test_from_draft_sets_iso_timestamp() {
        let msg = sample();
        assert_eq!(msg.timestamp, "2026-10-16T09:30:00.000Z");
        assert!(msg.sent_at().is_some());
    }

    #[test]
    fn test_validate_requires_all_fields() {
        let errors = Message::validate(&ContactSubmission::default()).unwrap_err();
        let fields: Vec<&str> = errors.fields().collect();
        assert_eq!(fields, vec!["email", "message", "name", "subject"]);
        assert_eq!(errors.get("email"), Some("Email is required"));
    }

    #[test]
    fn test_validate_rejects_malformed_email() {
        let draft = ContactSubmission::new("A", "not-an-email", "S", "M");
        let errors = Message::validate(&draft).unwrap_err();
        assert_eq!(errors.len(), 1);
        assert_eq!(errors.get("email"), Some("Please enter a valid email address"));
    }

    #[test]
    fn test_initial_and_reply_link() {
        let msg = sample();
        assert_eq!(msg.initial(), "R");
        assert_eq!(msg.reply_link(), "mailto:rahul@example.com?subject=Re: Website");

        let anonymous = Message {
            name: String::new(),
            ..msg
        };
        assert_eq!(anonymous.initial(), "?");
    }

    #[test]
    fn test_display_dates() {
        let msg = sample();
        assert_eq!(msg.display_date_in(&Utc), "16 Oct 2026, 09:30 am");
        assert_eq!(msg.short_date_in(&Utc), "16 Oct 2026");
    }

    #[test]
    fn test_display_date_unparsable_is_empty() {
        let msg = Message {
            timestamp: "yesterday".to_string(),
            ..sample()
        };
        assert_eq!(msg.display_date_in(&Utc), "");
    }

    #[test]
    fn test_json_shape() {
        let json = serde_json::to_value(sample()).unwrap();
        assert_eq!(json["id"], 1);
        assert_eq!(json["name"], "rahul");
        assert_eq!(json["timestamp"], "2026-10-16T09:30:00.000Z");
    }
}
