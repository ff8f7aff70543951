//! # check
//!
//! Command-line front end: resolves a test name against the predicate
//! [`Registry`](wordcheck::predicates::Registry) and prints `yes`, `no`, the
//! usage line, or `Huh?` for an unknown test.
//!
//! The word argument is opaque data. It is only ever handed to
//! [`Predicate::matches`](wordcheck::predicates::Predicate::matches) and never
//! reaches a format string, a shell, or a fixed-size buffer.

mod cli;
mod dispatch;

pub use crate::cli::Cli;
pub use crate::dispatch::{DispatchError, PROGRAM, Verdict, dispatch, run, usage};
