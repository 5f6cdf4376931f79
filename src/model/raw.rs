// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! Vendor JSON shapes for file collaborations and their conversion into
//! typed [`CollaborationRecord`]s.
//!
//! A collaboration as returned by the storage API looks like:
//!
//! ```json
//! {
//!   "type": "collaboration",
//!   "id": "987",
//!   "status": "accepted",
//!   "accessible_by": { "type": "user", "id": "user1", "login": "user1@example.com" }
//! }
//! ```
//!
//! The API may grow collaborator types or statuses this crate does not know
//! about. Those are handled by [`UnsupportedRecordPolicy`] during [`ingest`].

use serde::{Deserialize, Serialize};

use crate::errors::RecordError;
use crate::model::{CollaborationRecord, CollaborationStatus, CollaboratorKind};
use crate::observability::messages::source::RecordSkipped;
use crate::observability::messages::StructuredLog;

/// The identity a collaboration points at.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RawCollaborator {
    #[serde(rename = "type")]
    pub collaborator_type: String,
    pub id: String,
    #[serde(default)]
    pub login: Option<String>,
    #[serde(default)]
    pub name: Option<String>,
}

/// A single collaboration entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RawCollaboration {
    #[serde(default)]
    pub id: Option<String>,
    pub status: String,
    #[serde(default)]
    pub accessible_by: Option<RawCollaborator>,
}

/// One already-paginated listing of a file's collaborations.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CollaborationPage {
    #[serde(default)]
    pub total_count: Option<u64>,
    pub entries: Vec<RawCollaboration>,
}

/// Error body returned by the API in place of a listing.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct ApiErrorBody {
    #[serde(rename = "type")]
    pub body_type: String,
    pub status: i32,
    #[serde(default)]
    pub message: String,
}

/// What to do with a collaboration that has no typed representation.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum UnsupportedRecordPolicy {
    /// Drop it and log a warning.
    #[default]
    Skip,
    /// Abort the whole ingestion.
    Fail,
}

impl RawCollaboration {
    pub fn new(status: &str, collaborator_type: &str, id: &str, login: Option<&str>) -> Self {
        Self {
            id: None,
            status: status.to_string(),
            accessible_by: Some(RawCollaborator {
                collaborator_type: collaborator_type.to_string(),
                id: id.to_string(),
                login: login.map(str::to_string),
                name: None,
            }),
        }
    }

    pub fn try_into_record(self) -> Result<CollaborationRecord, RecordError> {
        let collaborator = self.accessible_by.ok_or(RecordError::MissingCollaborator {
            collaboration_id: self.id,
        })?;

        let kind = match collaborator.collaborator_type.to_ascii_lowercase().as_str() {
            "user" => CollaboratorKind::User,
            "group" => CollaboratorKind::Group,
            _ => {
                return Err(RecordError::UnsupportedCollaboratorType {
                    collaborator_type: collaborator.collaborator_type,
                    collaborator_id: collaborator.id,
                })
            }
        };

        let status = match self.status.to_ascii_lowercase().as_str() {
            "accepted" => CollaborationStatus::Accepted,
            "pending" => CollaborationStatus::Pending,
            _ => {
                return Err(RecordError::UnsupportedStatus {
                    status: self.status,
                    collaborator_id: collaborator.id,
                })
            }
        };

        Ok(CollaborationRecord {
            kind,
            id: collaborator.id,
            status,
            email: collaborator.login,
        })
    }
}

impl TryFrom<RawCollaboration> for CollaborationRecord {
    type Error = RecordError;

    fn try_from(raw: RawCollaboration) -> Result<Self, Self::Error> {
        raw.try_into_record()
    }
}

/// Convert raw entries into typed records, preserving their order.
pub fn ingest<I>(
    raws: I,
    policy: UnsupportedRecordPolicy,
) -> Result<Vec<CollaborationRecord>, RecordError>
where
    I: IntoIterator<Item = RawCollaboration>,
{
    let mut records = Vec::new();
    for raw in raws {
        match raw.try_into_record() {
            Ok(record) => records.push(record),
            Err(error) => match policy {
                UnsupportedRecordPolicy::Fail => return Err(error),
                UnsupportedRecordPolicy::Skip => RecordSkipped { error: &error }.log(),
            },
        }
    }
    Ok(records)
}
