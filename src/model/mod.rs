// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

mod raw;
mod record;

pub use raw::{
    ingest, ApiErrorBody, CollaborationPage, RawCollaboration, RawCollaborator,
    UnsupportedRecordPolicy,
};
pub use record::{CollaborationRecord, CollaborationStatus, CollaboratorKind};
