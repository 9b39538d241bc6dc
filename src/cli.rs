use crate::app::run;
use crate::dispatch::print_greeting;
use crate::greeter::GreeterKind;
use anyhow::{Result, bail};
use argh::FromArgs;
use std::io::Write;
use tracing::debug;

/// Name greeted by `--greeter` when `--name` is omitted.
pub const DEFAULT_NAME: &str = "world";

#[derive(FromArgs, Debug, PartialEq)]
/// Print a simple greeting, a formal greeting and a versioned greeting.
pub struct Cli {
    #[argh(switch)]
    /// print the package version and exit.
    pub version: bool,

    #[argh(option, short = 'g')]
    /// greet once with a single greeter (simple or formal) instead of running the full sequence.
    pub greeter: Option<GreeterKind>,

    #[argh(option, short = 'n')]
    /// name to greet with --greeter; defaults to "world".
    pub name: Option<String>,
}

/// Text printed by `--version`.
pub fn version_line() -> String {
    format!("{} {}", env!("CARGO_PKG_NAME"), env!("CARGO_PKG_VERSION"))
}

impl Cli {
    /// Executes the parsed command line against standard output.
    ///
    /// Without flags this is the regular greeting sequence, see [`run`].
    pub fn execute(&self) -> Result<()> {
        if self.version {
            debug!("printing version");
            let mut stdout = std::io::stdout().lock();
            writeln!(stdout, "{}", version_line())?;
            stdout.flush()?;
            return Ok(());
        }

        match (self.greeter, &self.name) {
            (Some(kind), name) => {
                debug!(greeter = %kind, "dispatching greeting");
                print_greeting(&kind, name.as_deref().unwrap_or(DEFAULT_NAME))
            }
            (None, Some(_)) => bail!("--name requires --greeter"),
            (None, None) => run(),
        }
    }
}
