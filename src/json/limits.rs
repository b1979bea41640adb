//! Resource bounds and strictness policy for validation.
//!
//! Nesting depth is the only dimension that drives recursion, so it is always
//! bounded. The remaining knobs exist for callers that validate untrusted
//! input and want to reject it before scanning.

/// Default maximum nesting depth for arrays and objects.
pub const DEFAULT_MAX_NESTING_DEPTH: u64 = 256;

/// Hard upper bound on nesting depth, whatever the configured limit.
///
/// Each level costs a few stack frames, so this keeps the deepest accepted
/// document well inside a 2 MiB thread stack.
pub const MAX_NESTING_DEPTH_CEILING: u64 = 1024;

/// Limits applied during validation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Limits {
    /// Maximum total input size in bytes (InputTooLarge)
    pub max_input_size: u64,
    /// Maximum nesting depth for arrays/objects (NestingTooDeep)
    pub max_nesting_depth: u64,
    /// Whether `\u` escapes must form valid surrogate pairs (LoneSurrogate)
    pub reject_lone_surrogates: bool,
}

impl Limits {
    /// Plain RFC 8259 grammar with a nesting bound.
    pub const fn standard() -> Self {
        Self {
            max_input_size: u64::MAX,
            max_nesting_depth: DEFAULT_MAX_NESTING_DEPTH,
            reject_lone_surrogates: false,
        }
    }

    /// Tight limits for untrusted input.
    pub const fn strict() -> Self {
        Self {
            max_input_size: 1024 * 1024, // 1 MiB
            max_nesting_depth: 64,
            reject_lone_surrogates: true,
        }
    }

    /// Copy of `self` with a different nesting bound, clamped to
    /// [`MAX_NESTING_DEPTH_CEILING`].
    pub const fn with_max_nesting_depth(mut self, depth: u64) -> Self {
        self.max_nesting_depth = if depth > MAX_NESTING_DEPTH_CEILING {
            MAX_NESTING_DEPTH_CEILING
        } else {
            depth
        };
        self
    }

    /// Nesting bound actually enforced during validation.
    pub fn effective_nesting_depth(&self) -> u64 {
        self.max_nesting_depth.min(MAX_NESTING_DEPTH_CEILING)
    }

    /// Copy of `self` with a different input size bound.
    pub const fn with_max_input_size(mut self, size: u64) -> Self {
        self.max_input_size = size;
        self
    }
}

impl Default for Limits {
    fn default() -> Self {
        Self::standard()
    }
}
