//! Livestock AI CLI
//!
//! Client for the classification proxy: validates and encodes local
//! images, drives sequential batch classification, keeps a session
//! history and exports results as JSON reports.

pub mod classifier;
pub mod cli;
pub mod config;
pub mod encoder;
pub mod error;
pub mod export;
pub mod history;
pub mod scanner;
