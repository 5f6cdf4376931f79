// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

pub mod classifier;    // record partitioning + outcomes
pub mod config;        // processor configuration
pub mod errors;        // error handling
pub mod model;         // typed and vendor collaboration records
pub mod observability;
pub mod processor;     // file-collaborators processor
pub mod sources;       // record source implementations
pub mod traits;        // unified abstractions
pub mod utils;
