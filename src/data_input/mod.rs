// src/data_input/mod.rs

pub mod measurement;
pub mod measurement_parser;

// src/data_input/mod.rs
