//! # CLI Behavior
//!
//! This is **one possible UI client** for counselapp, not the application itself.
//! The CLI is the only place that knows about terminal I/O, exit codes and output formatting.
//!
//! ## One-Shot Commands
//!
//! - `counsel list [collection]` prints a filtered table. Filters given as flags apply
//!   only to that invocation.
//! - `counsel dashboard` prints the chart datasets for one college.
//! - `counsel config` prints the resolved configuration.
//!
//! Running `counsel` with no command is the same as `counsel list`.
//!
//! ## Sessions
//!
//! `counsel session` reads one command per line from stdin and drives the management view
//! the way the dashboard screen would: switch collections, filter, open a form, fill it in,
//! submit or cancel. A failing line is reported on stderr and the session goes on.
//!
//! ## Output
//!
//! `--output term` (default) renders aligned, coloured tables. `--output json` prints the
//! same data as JSON for scripting.
//!
//! ## Module Structure
//!
//! - `setup`: argument parsing via clap
//! - `commands`: dispatch and per-command handlers
//! - `session`: the interactive line protocol
//! - `render`: tables, charts and messages

mod commands;
mod render;
mod session;
pub mod setup;

pub use commands::run;
