use clap::Parser;
use std::path::PathBuf;

#[derive(Parser)]
#[command(version, about)]
pub struct Cli {
    /// Binary image, little-endian 16-bit words
    pub image: PathBuf,
    /// Start paused in the debug console
    #[arg(long)]
    pub step: bool,
    /// Feed this file to the program before reading the terminal
    #[arg(long)]
    pub script: Option<PathBuf>,
    /// No line editor: stdin bytes in, stdout out
    #[arg(long)]
    pub batch: bool,
    /// Log every instruction (same as RUST_LOG=trace)
    #[arg(long)]
    pub trace: bool,
}
