use clap::Parser;
use std::path::PathBuf;

/// Convert scores history files into comma, pipe or tab delimited files
///
/// Each input line holds six single-quoted fields:
/// 'date' 'team1' 'score1' 'team2' 'score2' 'location'
#[derive(Debug, Parser)]
#[command(name = "pipescores", version)]
pub struct Cli {
    /// Input files followed by as many output files, paired in order
    #[arg(value_name = "INPUT... OUTPUT...")]
    pub paths: Vec<PathBuf>,

    /// Output delimiter: '|' for pipe, a tab (or '\t') for tab, comma when omitted
    #[arg(short = 'd', long = "delimiter", value_name = "DELIM", allow_hyphen_values = true)]
    pub delimiter: Option<String>,
}
