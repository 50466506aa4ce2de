pub mod chart;
pub mod config;
pub mod properties;
pub mod sequence;

use crate::api::VisualizerClient;
use crate::config::Config;
use crate::state::{MutationDataManager, StateEvent};
use crate::utils::progress_bar_builder::ProgressBarBuilder;
use anyhow::{Context, Result};
use std::sync::Arc;
use std::time::Duration;

/// Builds a manager for the configured backend and loads it, showing a
/// spinner while the two requests run.
pub async fn load_mutation_data(config: &Config) -> Result<MutationDataManager<VisualizerClient>> {
    let client = VisualizerClient::from_config(config)?;

    let progress = ProgressBarBuilder::new(format!("Fetching mutation data from {}...", client.base_url()))
        .with_tick(Duration::from_millis(120))
        .build()?;
    let spinner = progress.clone();

    let mut manager = MutationDataManager::new(client).with_callback(Arc::new(move |event: &StateEvent| {
        match event {
            StateEvent::ParentSequenceLoaded { length } => {
                spinner.set_message(format!("Parent sequence loaded ({} residues), fetching variants...", length))
            }
            StateEvent::VariantsLoaded { count } => {
                spinner.set_message(format!("{} variants loaded", count))
            }
            _ => {}
        }
    }));

    let result = manager.initialize().await;
    progress.finish_and_clear();
    result.context("Failed to load mutation data")?;

    Ok(manager)
}
