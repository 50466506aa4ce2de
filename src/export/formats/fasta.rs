use std::io::{self, Write};

pub const LINE_WIDTH: usize = 60;

pub fn write_fasta<W: Write>(writer: &mut W, header: &str, sequence: &str) -> io::Result<()> {
    writeln!(writer, ">{}", header)?;
    let residues: Vec<char> = sequence.chars().collect();
    for line in residues.chunks(LINE_WIDTH) {
        writeln!(writer, "{}", line.iter().collect::<String>())?;
    }
    Ok(())
}
