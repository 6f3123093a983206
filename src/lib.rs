// src/lib.rs
// Library interface for crtscan
pub mod cli;
pub mod config;
pub mod crtsh;
pub mod dedupe;
pub mod output;
pub mod probe;
pub mod progress;
pub mod report;
pub mod stats;
pub mod types;
