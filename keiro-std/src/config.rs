//! Hub configuration.

use keiro_core::Flag;

/// How a non-zero dispatch flag is compared with a registration's flag.
///
/// A dispatch carrying [`Flag::ALL`] reaches every listener in either mode.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum FlagMatching {
    /// The registration's flag must equal the dispatch flag.
    #[default]
    Exact,
    /// The registration's flag must share at least one bit with the
    /// dispatch flag.
    Intersects,
}

impl FlagMatching {
    /// Whether a listener registered with `registered` receives a dispatch
    /// carrying `dispatched`.
    pub fn matches(self, registered: Flag, dispatched: Flag) -> bool {
        if dispatched.is_all() {
            return true;
        }
        match self {
            FlagMatching::Exact => registered == dispatched,
            FlagMatching::Intersects => registered.intersects(dispatched),
        }
    }
}

/// What initialization does with an identity whose factory fails.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ResolutionPolicy {
    /// Abort initialization with `ConfigurationError::Unresolvable`.
    #[default]
    FailFast,
    /// Log a warning and keep an empty slot that dispatch skips.
    Placeholder,
}

/// Configuration of an [`EventHub`](crate::EventHub).
///
/// # Example
///
/// ```rust
/// use keiro_std::{DispatchConfig, EventHub, FlagMatching, ResolutionPolicy};
///
/// static HUB: EventHub = EventHub::with_config(
///     DispatchConfig::new()
///         .flag_matching(FlagMatching::Intersects)
///         .on_unresolved(ResolutionPolicy::Placeholder),
/// );
/// # assert!(!HUB.is_initialized());
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DispatchConfig {
    /// Flag comparison used by dispatch.
    pub flag_matching: FlagMatching,
    /// Handling of unresolvable identities during initialization.
    pub on_unresolved: ResolutionPolicy,
}

impl DispatchConfig {
    /// Exact flag matching, fail-fast resolution.
    pub const fn new() -> Self {
        Self {
            flag_matching: FlagMatching::Exact,
            on_unresolved: ResolutionPolicy::FailFast,
        }
    }

    /// Set the flag comparison.
    pub const fn flag_matching(mut self, flag_matching: FlagMatching) -> Self {
        self.flag_matching = flag_matching;
        self
    }

    /// Set the resolution policy.
    pub const fn on_unresolved(mut self, policy: ResolutionPolicy) -> Self {
        self.on_unresolved = policy;
        self
    }
}
