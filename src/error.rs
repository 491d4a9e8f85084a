//! Error types.
//!
//! One top-level [`Error`] with a nested enum per concern, so callers can
//! match on the category (usage, file, template, store, config) and `main`
//! can attach a hint.

use std::path::PathBuf;
use thiserror::Error;

/// Top-level error for every salter operation.
#[derive(Error, Debug)]
pub enum Error {
    /// Missing or conflicting command-line flags for the selected action.
    #[error("{0}")]
    Usage(String),

    /// A file could not be read.
    #[error("failed to read {path}: {source}")]
    ReadFile {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// A file could not be written.
    #[error("failed to write {path}: {source}")]
    WriteFile {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Template(#[from] TemplateError),

    #[error(transparent)]
    Store(#[from] StoreError),
}

/// Tool configuration errors (`config.json`).
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("failed to read config {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse config {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("invalid config value for {field}: {reason}")]
    InvalidValue { field: &'static str, reason: String },

    #[error("failed to serialize default config: {0}")]
    Serialize(#[source] serde_json::Error),

    #[error("failed to write default config {path}: {source}")]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Task-definition document errors.
#[derive(Error, Debug)]
pub enum TemplateError {
    #[error("failed to parse task definition {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("no container definitions found")]
    NoContainerDefinitions,

    #[error("no secrets found in the first container definition")]
    NoSecrets,

    #[error("failed to serialize task definition: {0}")]
    Serialize(#[source] serde_json::Error),
}

/// Remote parameter store errors.
#[derive(Error, Debug)]
pub enum StoreError {
    #[error("failed to get parameter {name}: {reason}")]
    Get { name: String, reason: String },

    #[error("failed to put parameter {name}: {reason}")]
    Put { name: String, reason: String },

    #[error("failed to list parameters under {prefix}: {reason}")]
    List { prefix: String, reason: String },

    #[error("parameter not found: {0}")]
    NotFound(String),

    #[error("failed to start the AWS client runtime: {0}")]
    Runtime(String),

    #[error("this build has no parameter store backend (enable the `aws` feature)")]
    Unsupported,
}

pub type Result<T> = std::result::Result<T, Error>;
