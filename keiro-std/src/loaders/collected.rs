use keiro_core::{BoxError, BoxListener, Flag, Identity, Loader, RegistrationRecord, priority};

/// A listener registration collected via `inventory`.
///
/// Receivers are usually submitted by the `#[receiver]` attribute, which also
/// records the submitting crate's name as the module. They can be submitted by
/// hand:
///
/// ```rust,ignore
/// inventory::submit! {
///     Receiver::new("login", "app::Audit", || Ok(Box::new(Audit)))
///         .with_priority(priority::HIGH)
///         .with_module(env!("CARGO_PKG_NAME"))
/// }
/// ```
pub struct Receiver {
    group: &'static str,
    name: &'static str,
    module: Option<&'static str>,
    priority: i32,
    flag: u32,
    construct: fn() -> Result<BoxListener, BoxError>,
}

impl Receiver {
    /// Create a receiver at [`priority::MEDIUM`] matching [`Flag::ALL`].
    pub const fn new(
        group: &'static str,
        name: &'static str,
        construct: fn() -> Result<BoxListener, BoxError>,
    ) -> Self {
        Self {
            group,
            name,
            module: None,
            priority: priority::MEDIUM,
            flag: Flag::ALL.bits(),
            construct,
        }
    }

    /// Set priority.
    pub const fn with_priority(mut self, priority: i32) -> Self {
        self.priority = priority;
        self
    }

    /// Set flag bits.
    pub const fn with_flag(mut self, flag: u32) -> Self {
        self.flag = flag;
        self
    }

    /// Set the name of the module that submitted this receiver.
    pub const fn with_module(mut self, module: &'static str) -> Self {
        self.module = Some(module);
        self
    }

    /// Convert into a registration record.
    pub fn to_record(&self) -> RegistrationRecord {
        let record = RegistrationRecord::new(self.group, Identity::new(self.name, self.construct))
            .with_priority(self.priority)
            .with_flag(self.flag);
        match self.module {
            Some(module) => record.with_module(module),
            None => record,
        }
    }
}

inventory::collect!(Receiver);

/// Loads every [`Receiver`] submitted anywhere in the final binary.
///
/// Submission order across crates is unspecified, so only priority gives a
/// reliable order between receivers of one group.
#[derive(Debug, Clone, Copy, Default)]
pub struct InventoryLoader;

impl Loader for InventoryLoader {
    fn name(&self) -> &str {
        "inventory"
    }

    fn load(&self) -> Result<Vec<RegistrationRecord>, BoxError> {
        Ok(inventory::iter::<Receiver>
            .into_iter()
            .map(|receiver| {
                tracing::trace!(
                    group = receiver.group,
                    identity = receiver.name,
                    module = receiver.module,
                    "collected receiver"
                );
                receiver.to_record()
            })
            .collect())
    }
}
