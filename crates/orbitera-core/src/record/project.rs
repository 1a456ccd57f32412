//! Portfolio project domain model.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::id::RecordId;
use super::repository::Record;
use super::validation::FormErrors;

/// A portfolio entry managed from the admin area.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Project {
    pub id: RecordId,
    pub title: String,
    pub description: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
}

/// "Add New Project" form input.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProjectDraft {
    pub title: String,
    pub description: String,
    /// Optional; left blank when there is no image.
    pub image_url: String,
}

impl ProjectDraft {
    pub fn new(title: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            description: description.into(),
            image_url: String::new(),
        }
    }

    pub fn with_image_url(mut self, image_url: impl Into<String>) -> Self {
        self.image_url = image_url.into();
        self
    }
}

impl Record for Project {
    type Draft = ProjectDraft;
    const ENTITY: &'static str = "project";

    fn id(&self) -> RecordId {
        self.id
    }

    fn validate(draft: &ProjectDraft) -> Result<(), FormErrors> {
        let mut errors = FormErrors::new();
        errors.require("title", "Title", &draft.title);
        errors.require("description", "Description", &draft.description);
        errors.into_result()
    }

    fn from_draft(draft: ProjectDraft, id: RecordId, _created_at: DateTime<Utc>) -> Self {
        let image_url = Some(draft.image_url).filter(|url| !url.trim().is_empty());
        Self {
            id,
            title: draft.title,
            description: draft.description,
            image_url,
        }
    }
}

impl Project {
    /// Projects shown before anything has been added in this session.
    pub fn seed() -> Vec<Project> {
        vec![
            Project {
                id: RecordId(1),
                title: "Nexus Labs".to_string(),
                description: "Futuristic SaaS platform UI".to_string(),
                image_url: None,
            },
            Project {
                id: RecordId(2),
                title: "AuraFit".to_string(),
                description: "Fitness tracking mobile app".to_string(),
                image_url: None,
            },
        ]
    }
}
