//! Registration records.

use crate::{
    error::BoxError,
    flag::Flag,
    listener::{BoxListener, Listener},
    priority,
};
use std::{borrow::Cow, fmt, sync::Arc};

type Factory = dyn Fn() -> Result<BoxListener, BoxError> + Send + Sync;

/// Everything needed to construct exactly one listener instance.
///
/// An identity pairs a display name (used in logs and errors) with a factory.
/// Resolving the identity calls the factory; a factory returning `Err` makes
/// the identity unresolvable.
#[derive(Clone)]
pub struct Identity {
    name: Cow<'static, str>,
    factory: Arc<Factory>,
}

impl Identity {
    /// Create an identity from a fallible factory.
    pub fn new<F>(name: impl Into<Cow<'static, str>>, factory: F) -> Self
    where
        F: Fn() -> Result<BoxListener, BoxError> + Send + Sync + 'static,
    {
        Self {
            name: name.into(),
            factory: Arc::new(factory),
        }
    }

    /// Identity for a listener type constructed through `Default`.
    ///
    /// The name is the type's path.
    pub fn of<L: Listener + Default>() -> Self {
        Self::new(std::any::type_name::<L>(), || Ok(Box::new(L::default())))
    }

    /// Identity that always yields a clone of `listener`.
    pub fn from_instance<L: Listener + Clone>(
        name: impl Into<Cow<'static, str>>,
        listener: L,
    ) -> Self {
        Self::new(name, move || Ok(Box::new(listener.clone())))
    }

    /// The display name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Construct the listener.
    pub fn resolve(&self) -> Result<BoxListener, BoxError> {
        (self.factory)()
    }
}

impl fmt::Debug for Identity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("Identity").field(&self.name).finish()
    }
}

/// Immutable description of one listener registration.
///
/// # Example
///
/// ```rust
/// use keiro_core::{Flag, Identity, Listener, RegistrationRecord, priority};
///
/// #[derive(Default)]
/// struct Audit;
/// impl Listener for Audit {}
///
/// let record = RegistrationRecord::new("login", Identity::of::<Audit>())
///     .with_priority(priority::HIGH)
///     .with_flag(Flag::new(0b10));
///
/// assert_eq!(record.group(), "login");
/// assert_eq!(record.priority(), 0);
/// ```
#[derive(Clone, Debug)]
pub struct RegistrationRecord {
    group: Cow<'static, str>,
    priority: i32,
    flag: Flag,
    identity: Identity,
    module: Option<Cow<'static, str>>,
}

impl RegistrationRecord {
    /// Create a record at [`priority::MEDIUM`] matching [`Flag::ALL`].
    pub fn new(group: impl Into<Cow<'static, str>>, identity: Identity) -> Self {
        Self {
            group: group.into(),
            priority: priority::MEDIUM,
            flag: Flag::ALL,
            identity,
            module: None,
        }
    }

    /// Set priority (lower = invoked first).
    pub fn with_priority(mut self, priority: i32) -> Self {
        self.priority = priority;
        self
    }

    /// Set the flag.
    pub fn with_flag(mut self, flag: impl Into<Flag>) -> Self {
        self.flag = flag.into();
        self
    }

    /// Name the module (usually the crate) that contributed this record.
    pub fn with_module(mut self, module: impl Into<Cow<'static, str>>) -> Self {
        self.module = Some(module.into());
        self
    }

    /// The group this record belongs to.
    pub fn group(&self) -> &str {
        &self.group
    }

    /// The priority.
    pub fn priority(&self) -> i32 {
        self.priority
    }

    /// The flag.
    pub fn flag(&self) -> Flag {
        self.flag
    }

    /// The identity used to construct the listener.
    pub fn identity(&self) -> &Identity {
        &self.identity
    }

    /// The contributing module, if one was recorded.
    pub fn module(&self) -> Option<&str> {
        self.module.as_deref()
    }
}
