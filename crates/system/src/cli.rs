//! Command line argument processing for Mouse Engine applications
//!
//! This module provides a shared CLI argument structure using clap that
//! applications can extend.
//!
//! # Usage
//!
//! ```ignore
//! use system::CommonArgs;
//! use clap::Parser;
//!
//! #[derive(Parser)]
//! struct MyAppArgs {
//!     #[command(flatten)]
//!     common: CommonArgs,
//! }
//!
//! fn main() {
//!     let args = MyAppArgs::parse();
//!     let config = args.common.apply_to(AppConfig::new("My App"));
//!     // ...
//! }
//! ```

use clap::Args;
use std::path::PathBuf;

/// Common command line arguments shared by all applications
///
/// Every argument is optional; running without flags opens the window with
/// built-in defaults. Use `#[command(flatten)]` to include these in your own
/// argument struct.
#[derive(Args, Debug, Clone, Default)]
pub struct CommonArgs {
    /// Run N frames, save a screenshot of the last one, then exit
    #[arg(long, value_name = "FRAMES")]
    pub debug: Option<u64>,

    /// Load settings from a TOML file
    #[arg(long, short = 'c', value_name = "PATH")]
    pub config: Option<PathBuf>,
}

impl CommonArgs {
    /// Apply the common arguments to an AppConfig
    #[cfg(feature = "runtime")]
    pub fn apply_to(&self, mut config: crate::AppConfig) -> crate::AppConfig {
        if let Some(frames) = self.debug {
            config = config.with_debug_mode(frames);
        }
        config
    }

    /// Get the config path if specified
    pub fn config_path(&self) -> Option<&PathBuf> {
        self.config.as_ref()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;

    #[derive(Parser)]
    struct TestArgs {
        #[command(flatten)]
        common: CommonArgs,
    }

    #[test]
    fn test_no_args() {
        let args = TestArgs::parse_from(["test"]);
        assert!(args.common.debug.is_none());
        assert!(args.common.config.is_none());
    }

    #[test]
    fn test_debug_arg() {
        let args = TestArgs::parse_from(["test", "--debug", "100"]);
        assert_eq!(args.common.debug, Some(100));
    }

    #[test]
    fn test_debug_requires_number() {
        assert!(TestArgs::try_parse_from(["test", "--debug", "many"]).is_err());
    }

    #[test]
    fn test_config_short_arg() {
        let args = TestArgs::parse_from(["test", "-c", "mouse.toml"]);
        assert_eq!(
            args.common.config_path(),
            Some(&PathBuf::from("mouse.toml"))
        );
    }
}
