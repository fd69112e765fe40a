pub mod plan;
pub mod sink;
