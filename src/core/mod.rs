//! Core library components.
//!
//! Parsing, classification and parameter-store logic, independent of the
//! command line.

pub mod classify;
pub mod config;
pub mod constants;
pub mod domain;
pub mod env;
pub mod fs;
pub mod generate;
pub mod mapper;
pub mod prefix;
pub mod store;
pub mod template;
