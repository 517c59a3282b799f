use keiro_core::{BoxError, Loader, RegistrationRecord};
use std::{borrow::Cow, fmt};

type LoadFn = dyn Fn() -> Result<Vec<RegistrationRecord>, BoxError> + Send + Sync;

/// A loader backed by a closure.
///
/// Use it to plug any discovery mechanism (a directory scan, a plugin
/// manifest, generated code) into initialization.
pub struct FnLoader {
    name: Cow<'static, str>,
    load: Box<LoadFn>,
}

impl FnLoader {
    /// Create a named loader from `load`.
    pub fn new<F>(name: impl Into<Cow<'static, str>>, load: F) -> Self
    where
        F: Fn() -> Result<Vec<RegistrationRecord>, BoxError> + Send + Sync + 'static,
    {
        Self {
            name: name.into(),
            load: Box::new(load),
        }
    }
}

impl fmt::Debug for FnLoader {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FnLoader").field("name", &self.name).finish()
    }
}

impl Loader for FnLoader {
    fn name(&self) -> &str {
        &self.name
    }

    fn load(&self) -> Result<Vec<RegistrationRecord>, BoxError> {
        (self.load)()
    }
}
