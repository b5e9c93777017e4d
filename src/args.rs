use clap::Parser;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Path to the configuration file, defaults to config.yaml
    #[arg(short, long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Hosts to resolve. Read from stdin, one per line, when omitted
    pub hosts: Vec<String>,
}
