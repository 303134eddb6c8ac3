//! Termtris (workspace facade crate).
//!
//! This package keeps the public `termtris::{core,input,term,types}` API in
//! one place while the implementation lives in dedicated crates under
//! `crates/`.

pub use termtris_core as core;
pub use termtris_input as input;
pub use termtris_term as term;
pub use termtris_types as types;
