#![deny(clippy::all, clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
//! hello-users — a greeting writer and a passwd user exporter.
//!
//! The two binaries share this library:
//!
//! - `greeting` renders `"{greeting}, {name}!"` from flags or an interactive
//!   prompt and writes it to an existing `out.txt` (or stdout with `--preview`).
//! - `user-export` reads `/etc/passwd`, drops system accounts (uid < 1000) and
//!   prints the rest as JSON or CSV.

pub mod cli;
pub mod commands;
pub mod config;
pub mod errors;
pub mod greeting;
pub mod sink;
pub mod users;

pub use config::{ExportConfig, GreetingConfig};
pub use errors::ToolError;
