//! Configuration for envcheck.
//!
//! envcheck has no configuration file. The policy constants that govern a
//! check (log location and bounds, timeouts, probe caps) live in
//! [`Settings`], whose [`Default`] is the production configuration.
//!
//! # Example
//!
//! ```
//! use envcheck::config::Settings;
//! use std::time::Duration;
//!
//! let settings = Settings::default();
//! assert_eq!(settings.log_capacity, 10);
//! assert_eq!(settings.run_timeout, Duration::from_secs(3));
//! ```

pub mod settings;

pub use settings::{
    Settings, DEFAULT_LOG_PATH, FACT_MAX_CHARS, LOG_CAPACITY, RUN_TIMEOUT, VERSION_TIMEOUT,
};
