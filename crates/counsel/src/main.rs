//! # Counsel CLI
//!
//! The binary is intentionally thin: the CLI lives in `src/cli/`, while this file only
//! invokes `cli::run()` and handles process termination.
//!
//! ## Workspace Structure
//!
//! - `crates/counselapp/`: UI-agnostic core (records, filters, view controller)
//! - `crates/counsel/`: this CLI, one client of `counselapp`
//!
//! ## Layering
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │  CLI Layer (crates/counsel/src/cli/)                        │
//! │  - clap argument parsing (setup.rs)                         │
//! │  - dispatch, config and logging setup (commands.rs)         │
//! │  - interactive line protocol (session.rs)                   │
//! │  - tables and charts for the terminal (render.rs)           │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  API Layer (crates/counselapp/src/api.rs)                   │
//! │  - CounselApi: stores, view controller, config              │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! Everything from `api.rs` inward is UI agnostic. The CLI owns every user-facing
//! concern: argument parsing, logging setup, rendering, error reporting and exit codes.

mod cli;

fn main() {
    if let Err(e) = cli::run() {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
