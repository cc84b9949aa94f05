pub mod cli;
pub mod config;
pub mod error;
pub mod git;
pub mod hours;
pub mod model;
