pub mod month;
pub mod plan;

pub use month::*;
pub use plan::*;
