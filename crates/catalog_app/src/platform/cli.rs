use std::path::PathBuf;

use clap::Parser;

/// Browse a remote movie catalog by genre from the terminal.
#[derive(Debug, Parser)]
#[command(name = "catalog", version)]
pub struct Cli {
    /// Configuration file (RON).
    #[arg(long, default_value = "catalog.ron")]
    pub config: PathBuf,

    /// Open this genre id right away.
    #[arg(long)]
    pub category: Option<u64>,

    /// Log level override (error, warn, info, debug, trace).
    #[arg(long = "log")]
    pub log_level: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_to_local_config_file() {
        let cli = Cli::parse_from(["catalog"]);
        assert_eq!(cli.config, PathBuf::from("catalog.ron"));
        assert_eq!(cli.category, None);
    }

    #[test]
    fn accepts_category_and_log_level() {
        let cli = Cli::parse_from(["catalog", "--category", "28", "--log", "debug"]);
        assert_eq!(cli.category, Some(28));
        assert_eq!(cli.log_level.as_deref(), Some("debug"));
    }
}
