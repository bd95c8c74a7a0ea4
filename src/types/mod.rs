mod browser;
mod rule;

pub use browser::*;
pub use rule::*;
