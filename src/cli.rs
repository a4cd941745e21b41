use clap::Parser;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "rzim")]
#[command(version)]
#[command(about = "Inspect and verify ZIM archives", long_about = None)]
#[command(after_help = "Examples:\n  \
  rzim wikipedia.zim           print the archive header\n  \
  rzim -c wikipedia.zim        also verify the archive checksum\n  \
  rzim -q -c wikipedia.zim     verify silently, exit status only")]
pub struct Cli {
    /// ZIM file path
    #[arg(value_name = "FILE")]
    pub file: PathBuf,

    /// Verify the archive checksum (reads the entire file)
    #[arg(short = 'c', long = "check")]
    pub check: bool,

    /// Quiet mode (exit status only)
    #[arg(short = 'q', long = "quiet")]
    pub quiet: bool,
}
