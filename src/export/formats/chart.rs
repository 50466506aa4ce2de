use crate::types::MutationChartData;
use std::io::{self, Write};

pub fn write_json<W: Write>(writer: &mut W, rows: &[MutationChartData]) -> io::Result<()> {
    serde_json::to_writer_pretty(&mut *writer, rows)?;
    writeln!(writer)
}

/// One row per variant; compound residues are joined with `+` and missing
/// values are left blank.
pub fn write_tsv<W: Write>(writer: &mut W, rows: &[MutationChartData]) -> io::Result<()> {
    writeln!(writer, "position\tvalue\tmutated\toriginal")?;
    for row in rows {
        let value = row.value.map(|v| v.to_string()).unwrap_or_default();
        let mutated = row
            .mutated_amino_acid
            .iter()
            .map(|c| c.to_string())
            .collect::<Vec<_>>()
            .join("+");
        let original = row
            .original_amino_acid
            .map(|c| c.to_string())
            .unwrap_or_default();
        writeln!(
            writer,
            "{}\t{}\t{}\t{}",
            row.mutation_position, value, mutated, original
        )?;
    }
    Ok(())
}
