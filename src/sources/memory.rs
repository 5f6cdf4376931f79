// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! In-memory record source.
//!
//! Returns scripted collaborations (or a scripted error) per file id and
//! records every file id it was asked for.

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;

use crate::errors::{FetchError, NOT_FOUND_STATUS};
use crate::model::RawCollaboration;
use crate::sources::api_error_message;
use crate::traits::RecordSource;

#[derive(Default)]
pub struct InMemoryRecordSource {
    files: HashMap<String, Result<Vec<RawCollaboration>, FetchError>>,
    requests: Arc<RwLock<Vec<String>>>,
}

impl InMemoryRecordSource {
    pub fn new() -> Self {
        Self::default()
    }

    /// Script the collaborations returned for `file_id`.
    pub fn with_collaborations(mut self, file_id: &str, entries: Vec<RawCollaboration>) -> Self {
        self.files.insert(file_id.to_string(), Ok(entries));
        self
    }

    /// Script a failure for `file_id`.
    pub fn with_error(mut self, file_id: &str, error: FetchError) -> Self {
        self.files.insert(file_id.to_string(), Err(error));
        self
    }

    /// File ids requested so far, in call order.
    pub async fn requested_file_ids(&self) -> Vec<String> {
        self.requests.read().await.clone()
    }
}

#[async_trait]
impl RecordSource for InMemoryRecordSource {
    async fn fetch_collaborations(&self, file_id: &str) -> Result<Vec<RawCollaboration>, FetchError> {
        self.requests.write().await.push(file_id.to_string());

        match self.files.get(file_id) {
            Some(scripted) => scripted.clone(),
            None => Err(FetchError::not_found(
                NOT_FOUND_STATUS,
                api_error_message(NOT_FOUND_STATUS),
            )),
        }
    }

    fn name(&self) -> &'static str {
        "in_memory"
    }
}
