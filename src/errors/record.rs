// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! Errors for converting raw vendor collaborations into typed records.

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RecordError {
    /// The collaborator is neither a user nor a group.
    #[error("Unsupported collaborator type '{collaborator_type}' for collaborator '{collaborator_id}'")]
    UnsupportedCollaboratorType {
        collaborator_type: String,
        collaborator_id: String,
    },

    /// The collaboration is neither accepted nor pending.
    #[error("Unsupported collaboration status '{status}' for collaborator '{collaborator_id}'")]
    UnsupportedStatus {
        status: String,
        collaborator_id: String,
    },

    /// The collaboration names no collaborator at all.
    #[error("Collaboration '{}' has no collaborator", .collaboration_id.as_deref().unwrap_or("<unknown>"))]
    MissingCollaborator { collaboration_id: Option<String> },
}
