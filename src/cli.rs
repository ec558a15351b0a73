use clap::Parser;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "signspeak")]
#[command(about = "Sign language translation app with mock recognition and playback", long_about = None)]
pub struct Cli {
    /// TOML configuration file (delays, window size, initial settings)
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// TOML scenario to run instead of waiting for user input
    #[arg(short, long)]
    pub scenario: Option<PathBuf>,

    /// Run the scenario without a window on a simulated clock
    #[arg(long, requires = "scenario")]
    pub headless: bool,

    /// Trace-level logging
    #[arg(short, long)]
    pub verbose: bool,
}

impl Cli {
    /// Log filter used when RUST_LOG is not set
    pub fn default_filter(&self) -> &'static str {
        if self.verbose {
            "signspeak=trace,info"
        } else {
            "signspeak=debug,info"
        }
    }
}
