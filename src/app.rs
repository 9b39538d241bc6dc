use crate::dispatch::print_greeting;
use crate::greeter::{FormalGreeter, SimpleGreeter};
use crate::version::versioned_greeting;
use anyhow::Result;
use std::io::Write;
use tracing::debug;

/// Run the fixed greeting sequence on standard output.
///
/// The output is always:
/// ```text
/// Hello, world
/// Good day, world
/// [v1] Hello, versioned world
/// ```
pub fn run() -> Result<()> {
    debug!(greeter = "simple", "dispatching greeting");
    print_greeting(&SimpleGreeter, "world")?;

    debug!(greeter = "formal", "dispatching greeting");
    print_greeting(&FormalGreeter, "world")?;

    debug!("writing versioned greeting");
    let mut stdout = std::io::stdout().lock();
    writeln!(stdout, "{}", versioned_greeting("versioned world"))?;
    stdout.flush()?;
    Ok(())
}
