pub mod api;
pub mod cli;
pub mod commands;
pub mod config;
pub mod export;
pub mod mutation;
pub mod state;
pub mod types;
pub mod utils;

// Re-export main API
pub use api::{ApiError, ApiResult, VariantSource, VisualizerClient};
pub use state::{MutationDataManager, MutationState, StateEvent};
pub use types::{Mutation, MutationChartData, ParentSequenceData};
