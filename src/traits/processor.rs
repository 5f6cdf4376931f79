// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

use async_trait::async_trait;
use std::collections::HashMap;

use crate::classifier::{Attributes, Route};

/// A unit of work entering a processor: just its attributes.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FlowRequest {
    pub attributes: HashMap<String, String>,
}

impl FlowRequest {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_attribute(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.attributes.insert(name.into(), value.into());
        self
    }
}

/// A unit of work leaving a processor, routed to one relationship.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FlowResponse {
    pub route: Route,
    pub attributes: Attributes,
}

#[async_trait]
pub trait Processor: Send + Sync {
    async fn process(&self, req: FlowRequest) -> FlowResponse;

    fn name(&self) -> &'static str;
}
