// src/data_analysis/mod.rs

pub mod aggregate;
pub mod expansion;
pub mod filter;
pub mod linear_fit;
pub mod time_series;

// src/data_analysis/mod.rs
