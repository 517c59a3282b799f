use keiro_core::{BoxError, Loader, RegistrationRecord};

/// A loader holding records registered by explicit calls.
///
/// # Example
///
/// ```rust
/// use keiro_core::{Identity, Listener, Loader, RegistrationRecord, priority};
/// use keiro_std::loaders::ManualLoader;
///
/// #[derive(Default)]
/// struct Cache;
/// impl Listener for Cache {}
///
/// let loader = ManualLoader::new()
///     .register(RegistrationRecord::new("logout", Identity::of::<Cache>()))
///     .register(
///         RegistrationRecord::new("login", Identity::of::<Cache>()).with_priority(priority::LOW),
///     );
///
/// assert_eq!(loader.load().unwrap().len(), 2);
/// ```
#[derive(Debug, Clone, Default)]
pub struct ManualLoader {
    records: Vec<RegistrationRecord>,
}

impl ManualLoader {
    /// Create an empty loader.
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a record.
    pub fn register(mut self, record: RegistrationRecord) -> Self {
        self.register_mut(record);
        self
    }

    /// Register a record (mutable version).
    pub fn register_mut(&mut self, record: RegistrationRecord) {
        self.records.push(record);
    }

    /// Number of registered records.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Check if no records were registered.
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

impl FromIterator<RegistrationRecord> for ManualLoader {
    fn from_iter<T: IntoIterator<Item = RegistrationRecord>>(iter: T) -> Self {
        Self {
            records: iter.into_iter().collect(),
        }
    }
}

impl Loader for ManualLoader {
    fn name(&self) -> &str {
        "manual"
    }

    fn load(&self) -> Result<Vec<RegistrationRecord>, BoxError> {
        Ok(self.records.clone())
    }
}
