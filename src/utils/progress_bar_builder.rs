use indicatif::{ProgressBar, ProgressStyle};
use anyhow::Result;
use std::time::Duration;

const STYLE_TEMPLATE: &str = "{spinner:.green} {msg}";

pub(crate) struct ProgressBarBuilder {
    message: String,
    tick_interval: Option<Duration>,
}

impl ProgressBarBuilder {
    pub(crate) fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            tick_interval: None,
        }
    }

    pub(crate) fn with_tick(mut self, interval: Duration) -> Self {
        self.tick_interval = Some(interval);
        self
    }

    pub(crate) fn build(self) -> Result<ProgressBar> {
        let pb = ProgressBar::new_spinner();
        pb.set_style(ProgressStyle::default_spinner().template(STYLE_TEMPLATE)?);
        pb.set_message(self.message);

        if let Some(interval) = self.tick_interval {
            pb.enable_steady_tick(interval);
        }

        Ok(pb)
    }
}
