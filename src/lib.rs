mod classifier;
mod db;
mod error;
mod rules;
pub mod session;
mod types;

pub use classifier::Classifier;
pub use error::{Error, Result};
pub use rules::{builtin_rules, classify};
pub use types::*;
