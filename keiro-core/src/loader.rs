//! Loader trait.

use crate::{error::BoxError, record::RegistrationRecord};

/// A source of registration records.
///
/// Loaders are consulted once, during initialization. They may be backed by
/// link-time collection, explicit registration calls, or an expensive runtime
/// scan; the initializer only cares that each record has a non-empty group
/// and a resolvable identity.
#[diagnostic::on_unimplemented(
    message = "`{Self}` is not a `Loader`",
    label = "missing `Loader` implementation",
    note = "Loaders must implement `load` returning the records they discovered."
)]
pub trait Loader: Send + Sync {
    /// Name used in logs and errors.
    fn name(&self) -> &str {
        std::any::type_name::<Self>()
    }

    /// Produce the records this loader knows about.
    fn load(&self) -> Result<Vec<RegistrationRecord>, BoxError>;
}

impl<L: Loader + ?Sized> Loader for Box<L> {
    fn name(&self) -> &str {
        (**self).name()
    }

    fn load(&self) -> Result<Vec<RegistrationRecord>, BoxError> {
        (**self).load()
    }
}

impl<L: Loader + ?Sized> Loader for &L {
    fn name(&self) -> &str {
        (**self).name()
    }

    fn load(&self) -> Result<Vec<RegistrationRecord>, BoxError> {
        (**self).load()
    }
}
