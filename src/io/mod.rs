// src/io/mod.rs
pub mod ncgen;
pub mod reader;

pub use ncgen::NcgenCompiler;
pub use reader::BinaryGrid;
