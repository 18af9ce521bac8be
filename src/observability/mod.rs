//! Structured logging for the engine and the bundled binary.
//!
//! Library code only emits `tracing` events and spans. Installing a subscriber is
//! left to the embedding program; [`init_tracing`] is the one the binary uses.
//!
//! # Configuration
//!
//! The filter is resolved from:
//! 1. `RUST_LOG` environment variable (highest priority)
//! 2. `trace_level` in the configuration file
//! 3. Default: `"info"`
//!
//! # Usage
//!
//! ```rust
//! use visionary::observability::init_tracing;
//! use visionary::Config;
//!
//! init_tracing(&Config::default());
//! tracing::debug!("engine starting");
//! ```
//!
//! # Modules
//!
//! - [`init`]: Subscriber setup

mod init;

pub use init::init_tracing;
