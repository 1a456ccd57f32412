//! Agency service offering domain model.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::id::RecordId;
use super::repository::Record;
use super::validation::FormErrors;

/// Icon given to a service added without one.
pub const DEFAULT_SERVICE_ICON: &str = "⚡";

/// A service the agency offers, managed from the admin area.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Service {
    pub id: RecordId,
    pub title: String,
    pub description: String,
    pub icon: String,
}

/// "Add New Service" form input.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ServiceDraft {
    pub title: String,
    pub description: String,
    /// Optional emoji.
    pub icon: String,
}

impl ServiceDraft {
    pub fn new(title: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            description: description.into(),
            icon: String::new(),
        }
    }

    pub fn with_icon(mut self, icon: impl Into<String>) -> Self {
        self.icon = icon.into();
        self
    }
}

impl Record for Service {
    type Draft = ServiceDraft;
    const ENTITY: &'static str = "service";

    fn id(&self) -> RecordId {
        self.id
    }

    fn validate(draft: &ServiceDraft) -> Result<(), FormErrors> {
        let mut errors = FormErrors::new();
        errors.require("title", "Title", &draft.title);
        errors.require("description", "Description", &draft.description);
        errors.into_result()
    }

    fn from_draft(draft: ServiceDraft, id: RecordId, _created_at: DateTime<Utc>) -> Self {
        let icon = if draft.icon.trim().is_empty() {
            DEFAULT_SERVICE_ICON.to_string()
        } else {
            draft.icon
        };
        Self {
            id,
            title: draft.title,
            description: draft.description,
            icon,
        }
    }
}

impl Service {
    /// Services shown before anything has been added in this session.
    pub fn seed() -> Vec<Service> {
        let entry = |id: i64, title: &str, description: &str, icon: &str| Service {
            id: RecordId(id),
            title: title.to_string(),
            description: description.to_string(),
            icon: icon.to_string(),
        };
        vec![
            entry(
                1,
                "UI/UX Design",
                "Pixel-perfect interfaces grounded in user psychology.",
                "🎨",
            ),
            entry(
                2,
                "Web Development",
                "Fast, scalable apps built with modern technologies.",
                "⚡",
            ),
            entry(
                3,
                "Brand Identity",
                "Cohesive visual identities that communicate values.",
                "🔮",
            ),
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_icon() {
        let service = Service::from_draft(ServiceDraft::new("SEO", "Rank higher"), RecordId(9), Utc::now());
        assert_eq!(service.icon, DEFAULT_SERVICE_ICON);

        let custom = Service::from_draft(
            ServiceDraft::new("SEO", "Rank higher").with_icon("🔍"),
            RecordId(10),
            Utc::now(),
        );
        assert_eq!(custom.icon, "🔍");
    }

    #[test]
    fn test_empty_title_and_description() {
        let errors = Service::validate(&ServiceDraft::default()).unwrap_err();
        assert_eq!(errors.get("title"), Some("Title is required"));
        assert_eq!(errors.get("description"), Some("Description is required"));
    }

    #[test]
    fn test_seed() {
        let titles: Vec<String> = Service::seed().into_iter().map(|s| s.title).collect();
        assert_eq!(titles, vec!["UI/UX Design", "Web Development", "Brand Identity"]);
    }
}
