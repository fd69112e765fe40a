pub mod cpu;
pub mod icon;
pub mod pipeline;
