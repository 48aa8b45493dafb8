use clap::Parser;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "tabdb")]
#[command(author, version, about = "A miniature SQL-like database over tab-separated table files")]
pub struct Cli {
    /// Directory holding one sub-directory per database
    #[arg(short, long, env = "TABDB_ROOT", default_value = "databases")]
    pub root: PathBuf,

    /// Select this database before running anything else
    #[arg(short, long)]
    pub database: Option<String>,

    /// Execute statements directly (non-interactive mode)
    #[arg(short, long)]
    pub query: Option<String>,

    /// Log filter used when RUST_LOG is not set
    #[arg(long, default_value = "warn")]
    pub log_level: String,
}

impl Cli {
    pub fn parse_args() -> Self {
        Cli::parse()
    }
}
