//! The hub: a registry that is populated once and then dispatched from.
//!
//! [`EventHub`] owns the one-shot initialization sequence:
//!
//! 1. pull records from every [`Loader`] and group them,
//! 2. stable-sort each group by priority,
//! 3. construct every listener,
//! 4. publish the finished [`Registry`].
//!
//! The sequence runs inside a critical section and its result is published
//! through a [`OnceLock`], so concurrent first callers run it exactly once and
//! every reader that sees the registry sees it fully built. Dispatch itself
//! takes no lock.

use crate::{
    config::DispatchConfig,
    dispatch::{DispatchOutcome, Dispatcher},
    registry::{Registry, RegistryBuilder},
};
use keiro_core::{ConfigurationError, DispatchError, Flag, Loader, Payload};
use std::sync::{Mutex, OnceLock, PoisonError};

/// A group-scoped event dispatcher with at-most-once initialization.
///
/// A hub can be owned and passed around, shared via `Arc`, or placed in a
/// `static` since its constructors are `const`.
///
/// # Example
///
/// ```rust
/// use keiro_std::{EventHub, loaders::ManualLoader};
/// use keiro_core::{Identity, Listener, RegistrationRecord};
///
/// #[derive(Default)]
/// struct Greeter;
/// impl Listener for Greeter {}
///
/// let loader = ManualLoader::new()
///     .register(RegistrationRecord::new("hello", Identity::of::<Greeter>()));
///
/// let hub = EventHub::new();
/// hub.initialize([&loader]).unwrap();
///
/// let outcome = hub.dispatch("hello").unwrap();
/// assert_eq!(outcome.invoked_count, 1);
/// ```
#[derive(Debug)]
pub struct EventHub {
    config: DispatchConfig,
    registry: OnceLock<Registry>,
    init_lock: Mutex<()>,
}

impl EventHub {
    /// Create an uninitialized hub with the default configuration.
    pub const fn new() -> Self {
        Self::with_config(DispatchConfig::new())
    }

    /// Create an uninitialized hub with `config`.
    pub const fn with_config(config: DispatchConfig) -> Self {
        Self {
            config,
            registry: OnceLock::new(),
            init_lock: Mutex::new(()),
        }
    }

    /// The configuration this hub was built with.
    pub fn config(&self) -> &DispatchConfig {
        &self.config
    }

    /// Whether initialization has completed successfully.
    pub fn is_initialized(&self) -> bool {
        self.registry.get().is_some()
    }

    /// The published registry, once initialization has completed.
    pub fn registry(&self) -> Option<&Registry> {
        self.registry.get()
    }

    /// Populate the registry from `loaders`, at most once.
    ///
    /// The first successful call builds and publishes the registry. Calls made
    /// afterwards return immediately without consulting their loaders. Callers
    /// racing the first one block until it finishes and then return.
    ///
    /// If loading or resolution fails, nothing is published and a later call
    /// may try again.
    pub fn initialize<I>(&self, loaders: I) -> Result<(), ConfigurationError>
    where
        I: IntoIterator,
        I::Item: Loader,
    {
        if self.is_initialized() {
            tracing::trace!("already initialized");
            return Ok(());
        }

        let _guard = self.init_lock.lock().unwrap_or_else(PoisonError::into_inner);
        if self.is_initialized() {
            tracing::trace!("initialized by a concurrent caller");
            return Ok(());
        }

        let registry = self.populate(loaders)?;
        tracing::info!(
            groups = registry.groups().count(),
            listeners = registry.len(),
            "event hub initialized"
        );
        self.registry.get_or_init(move || registry);
        Ok(())
    }

    fn populate<I>(&self, loaders: I) -> Result<Registry, ConfigurationError>
    where
        I: IntoIterator,
        I::Item: Loader,
    {
        let mut builder = RegistryBuilder::new();

        for loader in loaders {
            let records = loader.load().map_err(|source| ConfigurationError::Loader {
                loader: loader.name().to_owned(),
                source,
            })?;
            tracing::debug!(loader = loader.name(), records = records.len(), "loaded");

            for record in records {
                builder.append_record(record)?;
            }
        }

        builder.build(self.config.on_unresolved)
    }

    /// A dispatcher over the published registry.
    ///
    /// Returns `None` before initialization has completed.
    pub fn dispatcher(&self) -> Option<Dispatcher<'_>> {
        self.registry()
            .map(|registry| Dispatcher::new(registry, self.config.flag_matching))
    }

    /// Dispatch to every listener of `group` with no payload.
    pub fn dispatch(&self, group: &str) -> Result<DispatchOutcome, DispatchError> {
        self.dispatch_with(group, Flag::ALL, &Payload::new())
    }

    /// Dispatch to the listeners of `group` matching `flag`, with no payload.
    pub fn dispatch_flagged(
        &self,
        group: &str,
        flag: impl Into<Flag>,
    ) -> Result<DispatchOutcome, DispatchError> {
        self.dispatch_with(group, flag, &Payload::new())
    }

    /// Dispatch `payload` to every listener of `group`.
    pub fn dispatch_payload(
        &self,
        group: &str,
        payload: &Payload,
    ) -> Result<DispatchOutcome, DispatchError> {
        self.dispatch_with(group, Flag::ALL, payload)
    }

    /// Dispatch `payload` to the listeners of `group` matching `flag`.
    ///
    /// Before initialization has completed this behaves like a dispatch to an
    /// unknown group.
    pub fn dispatch_with(
        &self,
        group: &str,
        flag: impl Into<Flag>,
        payload: &Payload,
    ) -> Result<DispatchOutcome, DispatchError> {
        match self.dispatcher() {
            Some(dispatcher) => dispatcher.dispatch_with(group, flag, payload),
            None => {
                tracing::trace!(group, "dispatch before initialization");
                Ok(DispatchOutcome::default())
            }
        }
    }
}

impl Default for EventHub {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(feature = "inventory")]
impl EventHub {
    /// Initialize from the receivers collected at link time.
    ///
    /// This is the cheap path: no discovery happens at runtime, so it may be
    /// called from any context.
    pub fn static_init(&self) -> Result<(), ConfigurationError> {
        self.initialize([crate::loaders::InventoryLoader])
    }
}

#[cfg(feature = "tokio")]
impl EventHub {
    /// Initialize on tokio's blocking pool.
    ///
    /// This is the path for loaders that perform expensive discovery: the
    /// calling task yields while the loaders run on a blocking thread.
    pub async fn initialize_in_background<L>(
        self: std::sync::Arc<Self>,
        loaders: Vec<L>,
    ) -> Result<(), keiro_core::KeiroError>
    where
        L: Loader + 'static,
    {
        if self.is_initialized() {
            return Ok(());
        }

        tokio::task::spawn_blocking(move || self.initialize(loaders))
            .await
            .map_err(keiro_core::BoxError::from)??;
        Ok(())
    }
}
