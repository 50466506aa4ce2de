mod config;

pub use config::{Config, BASE_URL_ENV};
