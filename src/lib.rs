// lib.rs

//! Calculator REPL with shell-style recall history.
//!
//! [`history::CircularHistory`] is the recall navigator; [`workspace::Workspace`]
//! wires it to submissions and the edit line.

pub mod builtins;
pub mod completion;
pub mod config;
pub mod error;
pub mod evaluator;
pub mod history;
pub mod logger;
pub mod recall;
pub mod repl;
pub mod util;
pub mod workspace;

pub use error::{CalcError, EvalError};
pub use history::CircularHistory;
pub use workspace::Workspace;
