//! Constants used throughout salter.
//!
//! Centralizes file names, defaults and remote-service limits.

/// Tool configuration file name, resolved against the working directory.
pub const CONFIG_FILE: &str = "config.json";

/// Default path prefix used when synthesizing parameter references.
pub const DEFAULT_PARAMETER_PREFIX: &str = "/preprod/testing/";

/// Default AWS region when neither the flag nor the config names one.
pub const DEFAULT_REGION: &str = "ap-southeast-3";

/// Page size for listing parameters by path (the service maximum).
pub const LIST_PAGE_SIZE: i32 = 10;

/// Date suffix for bulk template exports: day, month, two-digit year.
pub const DATE_SUFFIX_FORMAT: &str = "%d%m%y";

/// Environment variable holding the log filter.
pub const LOG_ENV: &str = "SALTER_LOG";
