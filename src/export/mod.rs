pub mod formats;

use crate::types::MutationChartData;
use std::io::{self, Write};

#[derive(clap::ValueEnum, Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ChartFormat {
    #[default]
    #[value(name = "json")]
    Json,
    #[value(name = "tsv")]
    Tsv,
}

pub fn write_chart<W: Write>(
    writer: &mut W,
    rows: &[MutationChartData],
    format: ChartFormat,
) -> io::Result<()> {
    match format {
        ChartFormat::Json => formats::chart::write_json(writer, rows),
        ChartFormat::Tsv => formats::chart::write_tsv(writer, rows),
    }
}
