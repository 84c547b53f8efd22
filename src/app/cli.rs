use clap::Parser;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[clap(author, version, about = "Finds the survivable descents through a trail map.", long_about = None)]
pub struct Cli {
    /// Trail map file with one waypoint per line: a label followed by its
    /// supplies and obstacles.
    pub trail_file: PathBuf,

    /// Suppress the verbose run log, printing only the accepted descents.
    #[clap(short, long)]
    pub quiet: bool,
}
