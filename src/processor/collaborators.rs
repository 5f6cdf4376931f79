// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

use async_trait::async_trait;
use std::sync::Arc;
use std::time::Instant;
use tracing::Instrument;

use crate::classifier::{classify_outcome, Attributes, ClassificationOutcome};
use crate::config::{validate_prefix, Config};
use crate::model::{ingest, CollaborationStatus, UnsupportedRecordPolicy};
use crate::observability::messages::classifier::ClassificationCompleted;
use crate::observability::messages::processor::{
    ProcessorExecutionCompleted, ProcessorExecutionFailed, ProcessorExecutionStarted,
};
use crate::observability::messages::source::{CollaborationsFetched, FetchFailed};
use crate::observability::messages::StructuredLog;
use crate::processor::{FileIdProperty, INVALID_FILE_ID_STATUS, UNSUPPORTED_RECORD_STATUS};
use crate::traits::{FlowRequest, FlowResponse, Processor, RecordSource};
use crate::utils::overlay_attributes;

/// Fetches a file's collaborations and routes them as attributes.
///
/// * `success` - incoming attributes plus the classified collaboration attributes
/// * `not_found` - the file does not exist; `error.code` and `error.message` added
/// * `failure` - any other problem; `error.code` and `error.message` added
pub struct CollaboratorsProcessor {
    source: Arc<dyn RecordSource>,
    file_id: FileIdProperty,
    attribute_prefix: Option<String>,
    unsupported_records: UnsupportedRecordPolicy,
}

impl CollaboratorsProcessor {
    pub fn new(source: Arc<dyn RecordSource>, file_id: FileIdProperty) -> Self {
        Self {
            source,
            file_id,
            attribute_prefix: None,
            unsupported_records: UnsupportedRecordPolicy::default(),
        }
    }

    /// Build from a loaded configuration.
    pub fn from_config(source: Arc<dyn RecordSource>, cfg: &Config) -> Result<Self, String> {
        let file_id = FileIdProperty::parse(&cfg.file_id)?;
        Ok(Self::new(source, file_id)
            .with_attribute_prefix(cfg.attribute_prefix.clone())?
            .with_unsupported_records(cfg.unsupported_records))
    }

    /// Set the prefix joined in front of every produced attribute. An empty
    /// prefix means none; a prefix with empty segments is rejected.
    pub fn with_attribute_prefix(mut self, prefix: Option<String>) -> Result<Self, String> {
        let prefix = prefix.filter(|p| !p.is_empty());
        if let Some(p) = &prefix {
            validate_prefix(p)?;
        }
        self.attribute_prefix = prefix;
        Ok(self)
    }

    pub fn with_unsupported_records(mut self, policy: UnsupportedRecordPolicy) -> Self {
        self.unsupported_records = policy;
        self
    }

    /// Produce the outcome for one file id.
    pub async fn classify_file(&self, file_id: &str) -> ClassificationOutcome {
        let fetched = match self.source.fetch_collaborations(file_id).await {
            Ok(entries) => {
                CollaborationsFetched {
                    source: self.source.name(),
                    file_id,
                    entry_count: entries.len(),
                }
                .log();

                match ingest(entries, self.unsupported_records) {
                    Ok(records) => Ok(records),
                    Err(error) => {
                        return ClassificationOutcome::Failure {
                            code: UNSUPPORTED_RECORD_STATUS,
                            message: error.to_string(),
                        }
                    }
                }
            }
            Err(error) => {
                FetchFailed {
                    source: self.source.name(),
                    file_id,
                    error: &error,
                }
                .log();
                Err(error)
            }
        };

        if let Ok(records) = &fetched {
            let accepted_count = records
                .iter()
                .filter(|r| r.status == CollaborationStatus::Accepted)
                .count();
            ClassificationCompleted {
                file_id,
                total_count: records.len(),
                accepted_count,
                pending_count: records.len() - accepted_count,
            }
            .log();
        }

        classify_outcome(fetched, self.attribute_prefix.as_deref())
    }

    fn respond(&self, incoming: Attributes, outcome: ClassificationOutcome) -> FlowResponse {
        let route = outcome.route();
        FlowResponse {
            route,
            attributes: overlay_attributes(incoming, outcome.into_attributes()),
        }
    }

    fn log_failure(&self, outcome: &ClassificationOutcome) {
        if let ClassificationOutcome::NotFound { code, message }
        | ClassificationOutcome::Failure { code, message } = outcome
        {
            ProcessorExecutionFailed {
                processor_id: self.name(),
                route: outcome.route().as_str(),
                code: *code,
                message: message.as_str(),
            }
            .log();
        }
    }
}

#[async_trait]
impl Processor for CollaboratorsProcessor {
    async fn process(&self, req: FlowRequest) -> FlowResponse {
        let started = Instant::now();
        let file_id = self.file_id.resolve(&req.attributes);
        let incoming = Attributes::from(req.attributes);

        let Some(file_id) = file_id else {
            let outcome = ClassificationOutcome::Failure {
                code: INVALID_FILE_ID_STATUS,
                message: format!("File id '{}' resolved to an empty value", self.file_id),
            };
            self.log_failure(&outcome);
            return self.respond(incoming, outcome);
        };

        let started_msg = ProcessorExecutionStarted {
            processor_id: self.name(),
            file_id: &file_id,
        };
        started_msg.log();
        let span = started_msg.span("process");

        let outcome = self.classify_file(&file_id).instrument(span).await;
        match &outcome {
            ClassificationOutcome::Success(attributes) => ProcessorExecutionCompleted {
                processor_id: self.name(),
                file_id: &file_id,
                attribute_count: attributes.len(),
                duration: started.elapsed(),
            }
            .log(),
            _ => self.log_failure(&outcome),
        }

        self.respond(incoming, outcome)
    }

    fn name(&self) -> &'static str {
        "file_collaborators"
    }
}
