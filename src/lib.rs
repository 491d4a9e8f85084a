//! Salter - AWS SSM Parameter Store from the command line.
//!
//! # Architecture
//!
//! ```text
//! src/
//! ├── cli/              # Command-line interface
//! │   ├── help          # Per-action help text
//! │   ├── output        # Console output helpers
//! │   ├── parameter     # get / put
//! │   ├── generate      # .env -> task definition
//! │   ├── template      # task definition <-> store
//! │   └── prefix        # store -> .env + task definition
//! └── core/             # Core library components
//!     ├── classify      # Secret detection
//!     ├── env           # .env parsing and writing
//!     ├── mapper        # ARN / path / key conversions
//!     ├── domain/       # Parameter and task-definition types
//!     ├── store/        # ParameterStore trait, SSM and in-memory backends
//!     ├── config        # config.json handling
//!     ├── generate      # generate operation
//!     ├── template      # put-from-template and fetch-from-template
//!     └── prefix        # get-by-prefix operation
//! ```

pub mod cli;
pub mod core;
pub mod error;
