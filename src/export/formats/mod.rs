pub mod chart;
pub mod fasta;
