pub mod gradient;
pub mod plan;
pub mod reference;
