// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

use async_trait::async_trait;

use crate::errors::FetchError;
use crate::model::RawCollaboration;

/// Supplies every collaboration of a file, already paginated.
///
/// Authentication, retries and paging belong to the implementation; callers
/// see a finite list or a classified [`FetchError`].
#[async_trait]
pub trait RecordSource: Send + Sync {
    async fn fetch_collaborations(&self, file_id: &str) -> Result<Vec<RawCollaboration>, FetchError>;

    fn name(&self) -> &'static str;
}
