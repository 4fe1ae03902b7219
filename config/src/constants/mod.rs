//! Centralized configuration values shared across the ESTree pipeline.
//!
//! Each public item in this module documents its purpose and provides a minimal
//! usage example so that downstream crates can remain declarative and avoid
//! scattering literals.

use std::fmt;

/// Default bound on syntactic nesting, applied both while parsing and while
/// rebuilding the ESTree.
///
/// Long left-associative chains such as `a + b + c + ...` nest one level per
/// operator, so the bound is generous.
///
/// # Examples
/// ```
/// use config::constants::DEFAULT_MAX_NESTING_DEPTH;
/// assert!(DEFAULT_MAX_NESTING_DEPTH >= 1024);
/// ```
pub const DEFAULT_MAX_NESTING_DEPTH: usize = 4096;

/// Bytes of stack space allocated for each new segment when recursion grows
/// past the red zone using the `stacker` crate.
///
/// # Examples
/// ```
/// use config::constants::STACKER_STACK_SIZE_BYTES;
/// assert!(STACKER_STACK_SIZE_BYTES >= 1024);
/// ```
pub const STACKER_STACK_SIZE_BYTES: usize = 8 * 1024 * 1024;

/// Remaining stack below which `stacker` switches to a fresh segment.
///
/// # Examples
/// ```
/// use config::constants::{STACKER_RED_ZONE_BYTES, STACKER_STACK_SIZE_BYTES};
/// assert!(STACKER_RED_ZONE_BYTES < STACKER_STACK_SIZE_BYTES);
/// ```
pub const STACKER_RED_ZONE_BYTES: usize = 128 * 1024;

/// Immutable snapshot of global configuration settings that can be shared
/// between crates.
///
/// # Examples
/// ```
/// use config::constants::GlobalConfig;
/// let config = GlobalConfig::default();
/// assert!(config.stack_size_bytes > config.red_zone_bytes);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GlobalConfig {
    /// Maximum nesting depth, or `None` to rely on stack growth alone.
    pub max_nesting_depth: Option<usize>,
    /// Red zone handed to `stacker::maybe_grow`.
    pub red_zone_bytes: usize,
    /// Segment size handed to `stacker::maybe_grow`.
    pub stack_size_bytes: usize,
}

impl GlobalConfig {
    /// Builds a configuration with the given nesting bound and the default
    /// stack-growth sizes.
    ///
    /// # Examples
    /// ```
    /// use config::constants::GlobalConfig;
    /// let cfg = GlobalConfig::new(Some(64)).expect("valid config");
    /// assert_eq!(cfg.max_nesting_depth, Some(64));
    /// assert!(GlobalConfig::new(Some(0)).is_err());
    /// ```
    pub fn new(max_nesting_depth: Option<usize>) -> Result<Self, ConfigError> {
        Self::with_stack(
            max_nesting_depth,
            STACKER_RED_ZONE_BYTES,
            STACKER_STACK_SIZE_BYTES,
        )
    }

    /// Builds a configuration enforcing strict validation of every field.
    ///
    /// # Examples
    /// ```
    /// use config::constants::{ConfigError, GlobalConfig};
    /// let err = GlobalConfig::with_stack(None, 4096, 1024).unwrap_err();
    /// assert_eq!(err, ConfigError::InvalidStack { red_zone: 4096, stack_size: 1024 });
    /// ```
    pub fn with_stack(
        max_nesting_depth: Option<usize>,
        red_zone_bytes: usize,
        stack_size_bytes: usize,
    ) -> Result<Self, ConfigError> {
        if max_nesting_depth == Some(0) {
            return Err(ConfigError::InvalidNestingDepth);
        }
        if red_zone_bytes == 0 || red_zone_bytes >= stack_size_bytes {
            return Err(ConfigError::InvalidStack {
                red_zone: red_zone_bytes,
                stack_size: stack_size_bytes,
            });
        }
        Ok(Self {
            max_nesting_depth,
            red_zone_bytes,
            stack_size_bytes,
        })
    }
}

impl Default for GlobalConfig {
    fn default() -> Self {
        Self {
            max_nesting_depth: Some(DEFAULT_MAX_NESTING_DEPTH),
            red_zone_bytes: STACKER_RED_ZONE_BYTES,
            stack_size_bytes: STACKER_STACK_SIZE_BYTES,
        }
    }
}

/// Error returned when invalid configuration values are provided.
#[derive(Debug, PartialEq, Eq)]
pub enum ConfigError {
    /// Raised when a nesting bound of zero is requested.
    InvalidNestingDepth,
    /// Raised when the red zone is empty or not smaller than the segment size.
    InvalidStack { red_zone: usize, stack_size: usize },
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::InvalidNestingDepth => {
                write!(f, "max_nesting_depth must be at least 1")
            }
            ConfigError::InvalidStack {
                red_zone,
                stack_size,
            } => {
                write!(
                    f,
                    "red zone must be non-zero and smaller than the stack segment: {red_zone} >= {stack_size}"
                )
            }
        }
    }
}

impl std::error::Error for ConfigError {}

#[cfg(test)]
mod tests;
