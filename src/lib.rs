// src/lib.rs
pub mod cli;
pub mod core;
pub mod models;
pub mod report;

pub use cli::{Args, analyze, run};
