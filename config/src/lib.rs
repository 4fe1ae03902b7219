//! # Config Crate
//!
//! Centralized configuration constants for the JavaScript CST → ESTree
//! pipeline. Recursion bounds and stack-growth sizes are defined here so the
//! parsing engine and the tree transformer agree on them.
//!
//! ## Usage
//!
//! ```rust
//! use config::constants::{GlobalConfig, DEFAULT_MAX_NESTING_DEPTH};
//!
//! let config = GlobalConfig::default();
//! assert_eq!(config.max_nesting_depth, Some(DEFAULT_MAX_NESTING_DEPTH));
//!
//! // A caller that trusts its input may lift the bound entirely.
//! let unbounded = GlobalConfig::new(None).expect("valid config");
//! assert!(unbounded.max_nesting_depth.is_none());
//! ```
//!
//! ## Design Principles
//!
//! - **Single Source of Truth**: All constants defined once, used everywhere
//! - **Validated Snapshots**: `GlobalConfig` can only hold sane values
//! - **Well-Documented**: Every constant has clear documentation

pub mod constants;
