use crate::config::Config;
use crate::export::{write_chart, ChartFormat};
use crate::utils::output::open_output;
use anyhow::{Context, Result};
use std::io::Write;

pub async fn run(
    config: &Config,
    property: Option<String>,
    format: ChartFormat,
    output_file: Option<String>,
) -> Result<()> {
    let mut manager = super::load_mutation_data(config).await?;

    if let Some(property) = property {
        manager.select_property(&property)?;
    }
    let rows = manager.data_for_selected_property()?;

    let mut out = open_output(output_file.as_deref())?;
    write_chart(&mut out, &rows, format)?;
    out.flush().context("Failed to write chart data")?;
    Ok(())
}
