use crate::greeter::Greeter;
use anyhow::Result;
use std::io::Write;

/// Write the greeting produced by `greeter` for `name`, followed by a newline.
///
/// Works for any [`Greeter`]; the concrete type is never inspected.
pub fn write_greeting(greeter: &dyn Greeter, name: &str, out: &mut dyn Write) -> Result<()> {
    writeln!(out, "{}", greeter.greet(name))?;
    Ok(())
}

/// Print the greeting produced by `greeter` for `name` to standard output.
pub fn print_greeting(greeter: &dyn Greeter, name: &str) -> Result<()> {
    let mut stdout = std::io::stdout().lock();
    write_greeting(greeter, name, &mut stdout)?;
    stdout.flush()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::greeter::{FormalGreeter, GreeterKind, SimpleGreeter};
    use std::io;

    #[test]
    fn test_dispatch_simple_writes_single_line() {
        let mut out = Vec::new();
        write_greeting(&SimpleGreeter, "world", &mut out).unwrap();
        assert_eq!(String::from_utf8(out).unwrap(), "Hello, world\n");
    }

    #[test]
    fn test_dispatch_formal_writes_single_line() {
        let mut out = Vec::new();
        write_greeting(&FormalGreeter, "world", &mut out).unwrap();
        assert_eq!(String::from_utf8(out).unwrap(), "Good day, world\n");
    }

    #[test]
    fn test_dispatch_accepts_runtime_selected_kind() -> Result<(), anyhow::Error> {
        let mut out = Vec::new();
        for kind in GreeterKind::ALL {
            write_greeting(&kind, "you", &mut out)?;
        }
        assert_eq!(String::from_utf8(out)?, "Hello, you\nGood day, you\n");
        Ok(())
    }

    struct ClosedPipe;

    impl Write for ClosedPipe {
        fn write(&mut self, _buf: &[u8]) -> io::Result<usize> {
            Err(io::Error::from(io::ErrorKind::BrokenPipe))
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    #[test]
    fn test_dispatch_propagates_write_errors() {
        let err = write_greeting(&SimpleGreeter, "world", &mut ClosedPipe).unwrap_err();
        let io_err = err.downcast_ref::<io::Error>().unwrap();
        assert_eq!(io_err.kind(), io::ErrorKind::BrokenPipe);
    }
}
