pub mod plan_mapper;

pub use plan_mapper::*;
