//! # Parse Options
//!
//! Dialect selection and recursion bounds for one parse.

use crate::lexer::Dialects;
use config::constants::GlobalConfig;

/// Options for [`parse_with`](crate::parse_with).
///
/// ## Example
///
/// ```rust
/// use js_cst::{Dialect, Dialects, ParseOptions};
///
/// let options = ParseOptions::default().with_dialects(Dialects::none().with(Dialect::Ts));
/// assert!(options.dialects.contains(Dialect::Ts));
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ParseOptions {
    /// Enabled grammar dialects.
    pub dialects: Dialects,
    /// Nesting bound and stack-growth sizes.
    pub config: GlobalConfig,
}

impl ParseOptions {
    /// Returns a copy with the given dialects.
    pub fn with_dialects(mut self, dialects: Dialects) -> Self {
        self.dialects = dialects;
        self
    }

    /// Returns a copy with the given configuration.
    pub fn with_config(mut self, config: GlobalConfig) -> Self {
        self.config = config;
        self
    }
}
