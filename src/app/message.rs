// SPDX-License-Identifier: MPL-2.0
//! Top-level messages and runtime flags for the application.

use crate::error::Result;
use crate::ui::stage;
use std::time::Instant;

/// Top-level messages consumed by `App::update`.
#[derive(Debug, Clone)]
pub enum Message {
    Stage(stage::Message),
    /// Hardware-style back: Escape, Backspace, or the mouse back button.
    BackPressed,
    /// Animation frame while a transition plays.
    Frame(Instant),
    /// Hide the startup warning banner.
    DismissWarning,
}

/// Command-line usage.
pub const USAGE: &str = "\
Usage: storefront [OPTIONS]

Options:
  --lang <LOCALE>       UI language (e.g. en-US, fr)
  --config-dir <DIR>    Directory holding settings.toml
  -v, --verbose         Debug logging for this crate
  -h, --help            Print this help";

/// Runtime flags passed in from the CLI to tweak startup behavior.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct Flags {
    /// Optional locale override in BCP-47 form (e.g. `fr`, `en-US`).
    pub lang: Option<String>,
    /// Optional config directory override (for settings.toml).
    /// Takes precedence over `STOREFRONT_CONFIG_DIR`.
    pub config_dir: Option<String>,
    pub verbose: bool,
    pub help: bool,
}

impl Flags {
    /// Parses flags, rejecting unknown arguments.
    pub fn from_args(mut args: pico_args::Arguments) -> Result<Self> {
        let flags = Flags {
            help: args.contains(["-h", "--help"]),
            verbose: args.contains(["-v", "--verbose"]),
            lang: args.opt_value_from_str("--lang")?,
            config_dir: args.opt_value_from_str("--config-dir")?,
        };

        let rest = args.finish();
        if let Some(unexpected) = rest.first() {
            return Err(crate::error::Error::Args(format!(
                "unexpected argument: {}",
                unexpected.to_string_lossy()
            )));
        }
        Ok(flags)
    }
}
