use anyhow::{Result, anyhow};
use std::fmt;
use std::str::FromStr;

/// Object-safe capability for anything that can greet someone by name.
///
/// Implementations must be pure and total: every input, including the empty
/// string, yields a greeting and nothing else is touched.
pub trait Greeter {
    /// Build the greeting for `name`.
    fn greet(&self, name: &str) -> String;
}

impl<T: Greeter + ?Sized> Greeter for &T {
    fn greet(&self, name: &str) -> String {
        (**self).greet(name)
    }
}

impl<T: Greeter + ?Sized> Greeter for Box<T> {
    fn greet(&self, name: &str) -> String {
        (**self).greet(name)
    }
}

/// Greets with a plain "Hello".
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SimpleGreeter;

impl Greeter for SimpleGreeter {
    fn greet(&self, name: &str) -> String {
        format!("Hello, {name}")
    }
}

/// Greets with a formal "Good day".
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FormalGreeter;

impl Greeter for FormalGreeter {
    fn greet(&self, name: &str) -> String {
        format!("Good day, {name}")
    }
}

/// Every greeter known to the crate, selectable by name.
///
/// Useful when the variant is picked at runtime instead of at compile time:
/// ```
/// use greeters::{Greeter, GreeterKind};
/// let kind: GreeterKind = "formal".parse().unwrap();
/// assert_eq!(kind.greet("world"), "Good day, world");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GreeterKind {
    Simple,
    Formal,
}

impl GreeterKind {
    /// All variants, in declaration order.
    pub const ALL: [GreeterKind; 2] = [GreeterKind::Simple, GreeterKind::Formal];

    /// Canonical lowercase name, as accepted by [`FromStr`].
    pub fn name(self) -> &'static str {
        match self {
            GreeterKind::Simple => "simple",
            GreeterKind::Formal => "formal",
        }
    }
}

impl Greeter for GreeterKind {
    fn greet(&self, name: &str) -> String {
        match self {
            GreeterKind::Simple => SimpleGreeter.greet(name),
            GreeterKind::Formal => FormalGreeter.greet(name),
        }
    }
}

impl fmt::Display for GreeterKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for GreeterKind {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self> {
        GreeterKind::ALL
            .into_iter()
            .find(|kind| kind.name().eq_ignore_ascii_case(s))
            .ok_or_else(|| {
                let known: Vec<&str> = GreeterKind::ALL.iter().map(|k| k.name()).collect();
                anyhow!("unknown greeter: {s} (expected one of: {})", known.join(", "))
            })
    }
}
