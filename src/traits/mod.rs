// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

pub mod processor;
pub mod source;

pub use processor::{FlowRequest, FlowResponse, Processor};
pub use source::RecordSource;
