//! cinepath: movie genre recommendations from a binary questionnaire
//!
//! Layers, innermost first: `domain` (tree, traversal, undo, metrics),
//! `application` (history service), `infrastructure` (I/O and wiring),
//! `cli` (argument parsing and rendering).

pub mod application;
pub mod cli;
pub mod config;
pub mod domain;
pub mod exitcode;
pub mod infrastructure;
pub mod util;
