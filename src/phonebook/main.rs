//! # Phonebook CLI
//!
//! The binary is intentionally thin: the interactive client lives in `cli/`, while
//! this file only invokes `cli::run()` and handles process termination.
//!
//! Everything from `api.rs` inward is UI agnostic. The CLI layer owns every
//! user-facing concern: argument parsing, logging setup, the prompt loop, error
//! reporting, and rendering through minijinja templates.

mod cli;

fn main() {
    if let Err(e) = cli::run() {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
