// src/plot_functions/mod.rs

pub mod plot_temp_coeff;

// src/plot_functions/mod.rs
