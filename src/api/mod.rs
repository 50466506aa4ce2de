pub mod client;

use crate::types::{Mutation, ParentSequenceData};
use serde::Serialize;
use std::future::Future;
use thiserror::Error;

pub use client::VisualizerClient;

/// Result types that can be serialized to JSON
pub type ApiResult<T> = Result<T, ApiError>;

/// API-level errors
#[derive(Debug, Clone, Error, Serialize, PartialEq)]
pub enum ApiError {
    #[error("Error fetching {endpoint}: {message}")]
    Fetch { endpoint: String, message: String },

    #[error("Invalid mutation descriptor '{descriptor}': {reason}")]
    InvalidMutation { descriptor: String, reason: String },

    #[error("Mutation '{descriptor}' targets position {position}, parent sequence has {length} residues")]
    PositionOutOfRange {
        descriptor: String,
        position: usize,
        length: usize,
    },

    #[error("Unknown property: {0}")]
    UnknownProperty(String),

    #[error("Mutation data has not been loaded")]
    NotInitialized,

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("IO error: {0}")]
    Io(String),
}

impl ApiError {
    pub(crate) fn invalid_mutation(descriptor: &str, reason: impl Into<String>) -> Self {
        ApiError::InvalidMutation {
            descriptor: descriptor.to_string(),
            reason: reason.into(),
        }
    }
}

impl From<std::io::Error> for ApiError {
    fn from(err: std::io::Error) -> Self {
        ApiError::Io(err.to_string())
    }
}

impl From<toml::de::Error> for ApiError {
    fn from(err: toml::de::Error) -> Self {
        ApiError::Config(err.to_string())
    }
}

impl From<toml::ser::Error> for ApiError {
    fn from(err: toml::ser::Error) -> Self {
        ApiError::Config(err.to_string())
    }
}

/// Anything that can hand out the two visualizer payloads.
///
/// `VisualizerClient` talks to the backend; tests and offline tools can
/// plug in their own source.
pub trait VariantSource {
    fn fetch_mutation_data(&self) -> impl Future<Output = ApiResult<Vec<Mutation>>>;
    fn fetch_parent_sequence_data(&self) -> impl Future<Output = ApiResult<ParentSequenceData>>;
}
