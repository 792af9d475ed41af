//! Command implementations for the agentsmd CLI

pub mod generate;
