// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

use std::env;
use std::sync::Arc;

use anyhow::{anyhow, Context, Result};
use collab_classifier::classifier::Route;
use collab_classifier::config::load_and_validate_config;
use collab_classifier::processor::CollaboratorsProcessor;
use collab_classifier::sources::JsonFileRecordSource;
use collab_classifier::traits::{FlowRequest, Processor};
use tracing_subscriber::EnvFilter;

fn init_tracing() {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .init();
}

/// Parse `name=value` arguments into the incoming attributes.
fn parse_request(args: &[String]) -> Result<FlowRequest> {
    args.iter().try_fold(FlowRequest::new(), |request, arg| {
        let (name, value) = arg
            .split_once('=')
            .ok_or_else(|| anyhow!("expected attribute as name=value, got '{}'", arg))?;
        Ok(request.with_attribute(name, value))
    })
}

#[tokio::main]
async fn main() -> Result<()> {
    init_tracing();

    let args: Vec<String> = env::args().collect();
    if args.len() < 2 {
        eprintln!("Usage: {} <config.yaml|config.toml> [name=value ...]", args[0]);
        eprintln!("Example: {} collaborators.yaml box.id=12345", args[0]);
        std::process::exit(1);
    }

    let config_file = &args[1];
    let config = load_and_validate_config(config_file)
        .with_context(|| format!("loading {}", config_file))?;
    let request = parse_request(&args[2..])?;

    let source = Arc::new(JsonFileRecordSource::new(&config.source.directory));
    let processor =
        CollaboratorsProcessor::from_config(source, &config).map_err(|e| anyhow!(e))?;

    let response = processor.process(request).await;

    println!("route: {}", response.route);
    for (name, value) in response.attributes.iter() {
        println!("{} = {:?}", name, value);
    }

    if response.route != Route::Success {
        std::process::exit(2);
    }
    Ok(())
}
