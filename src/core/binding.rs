//! Logger bindings and backend identities

use std::any::TypeId;
use std::fmt;

/// What a logger is scoped to: a Rust type or a plain name.
///
/// A binding only takes part in the cache key and is handed to the backend
/// so it can name its native logger. The core never interprets it further.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Binding {
    /// Bound to a type, identified by its `TypeId` and full type name
    Type { id: TypeId, name: &'static str },
    /// Bound to an arbitrary name
    Name(String),
}

impl Binding {
    /// Bind to the type `T`
    ///
    /// # Examples
    ///
    /// ```
    /// use lazylog::Binding;
    ///
    /// struct Server;
    /// let binding = Binding::of::<Server>();
    /// assert!(binding.is_type());
    /// assert!(binding.as_str().ends_with("Server"));
    /// ```
    #[must_use]
    pub fn of<T: ?Sized + 'static>() -> Self {
        Binding::Type {
            id: TypeId::of::<T>(),
            name: std::any::type_name::<T>(),
        }
    }

    /// Bind to a name
    #[must_use]
    pub fn named(name: impl Into<String>) -> Self {
        Binding::Name(name.into())
    }

    /// The string form used for cache keys and backend naming
    pub fn as_str(&self) -> &str {
        match self {
            Binding::Type { name, .. } => name,
            Binding::Name(name) => name,
        }
    }

    pub fn is_type(&self) -> bool {
        matches!(self, Binding::Type { .. })
    }

    /// Cache key prefix distinguishing type-bound from name-bound lookups
    pub(crate) fn key_prefix(&self) -> &'static str {
        match self {
            Binding::Type { .. } => "::type::",
            Binding::Name(_) => "::name::",
        }
    }
}

impl fmt::Display for Binding {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl From<&str> for Binding {
    fn from(name: &str) -> Self {
        Binding::Name(name.to_string())
    }
}

impl From<String> for Binding {
    fn from(name: String) -> Self {
        Binding::Name(name)
    }
}

impl From<&Binding> for Binding {
    fn from(binding: &Binding) -> Self {
        binding.clone()
    }
}

/// Tag identifying one backend adapter implementation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct BackendId(&'static str);

impl BackendId {
    pub const fn new(tag: &'static str) -> Self {
        BackendId(tag)
    }

    pub const fn as_str(&self) -> &'static str {
        self.0
    }
}

impl fmt::Display for BackendId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.0)
    }
}
