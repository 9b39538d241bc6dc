//! A tiny greeting library built around a single capability.
//!
//! The [`Greeter`] trait describes anything that can produce a greeting for a name.
//! Two implementations ship with the crate, [`SimpleGreeter`] and [`FormalGreeter`],
//! and [`print_greeting`] accepts any of them without knowing the concrete type.
//! [`versioned_greeting`] prefixes a greeting with the crate's [`APP_VERSION`].
//!
//! The `greeters` binary calls [`run`], which prints a fixed sequence of greetings
//! to standard output.

mod app;
pub mod cli;
mod dispatch;
pub mod greeter;
pub mod logging;
mod version;

pub use app::run;
pub use dispatch::{print_greeting, write_greeting};
pub use greeter::{FormalGreeter, Greeter, GreeterKind, SimpleGreeter};
pub use version::{APP_VERSION, versioned_greeting};
