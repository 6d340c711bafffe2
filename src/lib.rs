pub mod generator;
pub mod grid;
pub mod template;
