//! Key-value data carried by a dispatched event.

use std::{
    any::Any,
    collections::HashMap,
    fmt,
    sync::Arc,
};

type Value = Arc<dyn Any + Send + Sync>;

/// The data attached to a dispatch call.
///
/// Keys are strings; values may be any thread-safe `'static` type and are
/// read back by downcasting with [`Payload::get`]. Cloning a payload is cheap:
/// values are shared, not copied.
///
/// # Example
///
/// ```rust
/// use keiro_core::Payload;
///
/// let payload = Payload::new().with("user_id", 42_u64).with("name", "ada");
///
/// assert_eq!(payload.get::<u64>("user_id"), Some(&42));
/// assert_eq!(payload.get::<&str>("name"), Some(&"ada"));
/// assert_eq!(payload.get::<String>("name"), None);
/// ```
#[derive(Clone, Default)]
pub struct Payload {
    entries: HashMap<String, Value>,
}

impl Payload {
    /// Create an empty payload.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add an entry, builder style.
    pub fn with<T>(mut self, key: impl Into<String>, value: T) -> Self
    where
        T: Any + Send + Sync,
    {
        self.insert(key, value);
        self
    }

    /// Add or replace an entry.
    pub fn insert<T>(&mut self, key: impl Into<String>, value: T) -> &mut Self
    where
        T: Any + Send + Sync,
    {
        self.entries.insert(key.into(), Arc::new(value));
        self
    }

    /// Read an entry as `T`.
    ///
    /// Returns `None` if the key is missing or holds a different type.
    pub fn get<T: Any>(&self, key: &str) -> Option<&T> {
        self.entries.get(key)?.downcast_ref::<T>()
    }

    /// Remove an entry, returning whether it was present.
    pub fn remove(&mut self, key: &str) -> bool {
        self.entries.remove(key).is_some()
    }

    /// Check whether a key is present, regardless of its value type.
    pub fn contains_key(&self, key: &str) -> bool {
        self.entries.contains_key(key)
    }

    /// Iterate over the keys, in no particular order.
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().map(String::as_str)
    }

    /// Number of entries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Check if the payload has no entries.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl fmt::Debug for Payload {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut keys: Vec<&str> = self.keys().collect();
        keys.sort_unstable();
        f.debug_struct("Payload").field("keys", &keys).finish()
    }
}
