pub mod cli;
pub mod cli_handlers;
pub mod core;
pub mod error;
pub mod graph;
pub mod health;
pub mod models;
pub mod tier;

pub use error::{OoxError, Result};
pub use graph::{Graph, OrderElement};
pub use models::*;
