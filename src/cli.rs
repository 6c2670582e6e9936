//! Command-line arguments

use std::path::PathBuf;

use clap::{Parser, ValueEnum};

use crate::suggestion::Mode;

/// Spin up lunch suggestions in your terminal
#[derive(Debug, Parser)]
#[command(name = "lunchspin", version, about)]
pub struct Cli {
    /// Path to the config file (default: {config_dir}/lunchspin/config.toml)
    #[arg(long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Start in a specific mode instead of eat-out
    #[arg(long, value_enum)]
    pub mode: Option<ModeArg>,
}

/// CLI spelling of the suggestion mode
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ModeArg {
    EatOut,
    CookHome,
}

impl From<ModeArg> for Mode {
    fn from(arg: ModeArg) -> Self {
        match arg {
            ModeArg::EatOut => Mode::EatOut,
            ModeArg::CookHome => Mode::CookHome,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_args() {
        let cli = Cli::parse_from(["lunchspin"]);
        assert!(cli.config.is_none());
        assert!(cli.mode.is_none());
    }

    #[test]
    fn test_mode_flag() {
        let cli = Cli::parse_from(["lunchspin", "--mode", "cook-home"]);
        assert_eq!(cli.mode, Some(ModeArg::CookHome));
        assert_eq!(Mode::from(cli.mode.unwrap()), Mode::CookHome);
    }

    #[test]
    fn test_config_flag() {
        let cli = Cli::parse_from(["lunchspin", "--config", "/tmp/custom.toml"]);
        assert_eq!(cli.config.as_deref(), Some(std::path::Path::new("/tmp/custom.toml")));
    }

    #[test]
    fn test_unknown_mode_rejected() {
        assert!(Cli::try_parse_from(["lunchspin", "--mode", "delivery"]).is_err());
    }
}
