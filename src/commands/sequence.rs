use crate::config::Config;
use crate::export::formats::fasta::write_fasta;
use crate::utils::output::open_output;
use anyhow::{Context, Result};
use std::io::Write;

pub async fn run(config: &Config, fasta: bool, output_file: Option<String>) -> Result<()> {
    let manager = super::load_mutation_data(config).await?;
    let state = manager.state();

    let mut out = open_output(output_file.as_deref())?;
    if fasta {
        write_fasta(&mut out, "parent", &state.parent_sequence)?;
        write_fasta(
            &mut out,
            &format!("mutated variants={}", state.variants.len()),
            &state.mutated_sequence,
        )?;
    } else {
        writeln!(out, "parent\t{}", state.parent_sequence)?;
        writeln!(out, "mutated\t{}", state.mutated_sequence)?;
    }
    out.flush().context("Failed to write sequences")?;
    Ok(())
}
