//! # Variadic Arguments
//!
//! Listeners accept any number of arguments of any type. [`Args`] carries
//! them as an ordered list of type-erased [`Arg`] values; a listener picks
//! out what it expects with [`Args::get`], and an index past the end simply
//! yields `None`, which plays the role of an absent argument.
//!
//! # Example
//!
//! ```rust,ignore
//! use hark_core::{Args, args};
//!
//! let args = args!["two", 3u32];
//! assert_eq!(args.get::<&str>(0), Some(&"two"));
//! assert_eq!(args.get::<u32>(1), Some(&3));
//! assert_eq!(args.get::<u32>(2), None);
//! ```

use std::{any::Any, fmt, sync::Arc};

/// A single type-erased argument.
///
/// Cloning is O(1): the value lives behind an `Arc` and is shared by every
/// listener of an emission.
#[derive(Clone)]
pub struct Arg {
    value: Arc<dyn Any + Send + Sync>,
    type_name: &'static str,
}

impl Arg {
    /// Wrap a value.
    pub fn new<T: Any + Send + Sync>(value: T) -> Self {
        Self {
            value: Arc::new(value),
            type_name: std::any::type_name::<T>(),
        }
    }

    /// Borrow the value if it is a `T`.
    pub fn downcast_ref<T: Any>(&self) -> Option<&T> {
        self.value.downcast_ref::<T>()
    }

    /// Check whether the value is a `T`.
    pub fn is<T: Any>(&self) -> bool {
        self.value.is::<T>()
    }

    /// The type name recorded when the value was wrapped.
    pub fn type_name(&self) -> &'static str {
        self.type_name
    }
}

impl fmt::Debug for Arg {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("Arg").field(&self.type_name).finish()
    }
}

/// The ordered argument list handed to every listener of an emission.
#[derive(Clone, Default, Debug)]
pub struct Args(Vec<Arg>);

impl Args {
    /// An empty argument list.
    pub fn new() -> Self {
        Self(Vec::new())
    }

    /// Append a value, builder style.
    pub fn with<T: Any + Send + Sync>(mut self, value: T) -> Self {
        self.push(value);
        self
    }

    /// Append a value.
    pub fn push<T: Any + Send + Sync>(&mut self, value: T) {
        self.0.push(Arg::new(value));
    }

    /// Borrow argument `index` as a `T`.
    ///
    /// Returns `None` when the argument is absent or has another type.
    pub fn get<T: Any>(&self, index: usize) -> Option<&T> {
        self.0.get(index).and_then(Arg::downcast_ref)
    }

    /// The raw argument at `index`.
    pub fn arg(&self, index: usize) -> Option<&Arg> {
        self.0.get(index)
    }

    /// Number of arguments.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// `true` when no arguments were passed.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Iterate over the raw arguments.
    pub fn iter(&self) -> std::slice::Iter<'_, Arg> {
        self.0.iter()
    }
}

impl From<Vec<Arg>> for Args {
    fn from(args: Vec<Arg>) -> Self {
        Self(args)
    }
}

impl FromIterator<Arg> for Args {
    fn from_iter<I: IntoIterator<Item = Arg>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

impl<'a> IntoIterator for &'a Args {
    type Item = &'a Arg;
    type IntoIter = std::slice::Iter<'a, Arg>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

/// Build an [`Args`] list from a comma separated list of values.
///
/// `args![]` is the empty list.
#[macro_export]
macro_rules! args {
    () => {
        $crate::Args::new()
    };
    ($($value:expr),+ $(,)?) => {
        $crate::Args::new()$(.with($value))+
    };
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, PartialEq)]
    struct Three {
        three: u8,
    }

    #[test]
    fn test_get_by_type() {
        let args = args![1i32, "two", Three { three: 3 }];
        assert_eq!(args.len(), 3);
        assert_eq!(args.get::<i32>(0), Some(&1));
        assert_eq!(args.get::<&str>(1), Some(&"two"));
        assert_eq!(args.get::<Three>(2), Some(&Three { three: 3 }));
    }

    #[test]
    fn test_absent_argument_is_none() {
        let args = args![];
        assert!(args.is_empty());
        assert_eq!(args.get::<&str>(0), None);
    }

    #[test]
    fn test_wrong_type_is_none() {
        let args = args!["hello"];
        assert_eq!(args.get::<String>(0), None);
        assert!(args.arg(0).is_some_and(|arg| arg.is::<&str>()));
    }

    #[test]
    fn test_clone_shares_values() {
        let args = args![String::from("shared")];
        let cloned = args.clone();
        let a = args.get::<String>(0).map(|s| s as *const String);
        let b = cloned.get::<String>(0).map(|s| s as *const String);
        assert_eq!(a, b);
    }

    #[test]
    fn test_debug_shows_type_names() {
        let args = args![7u8];
        assert_eq!(format!("{args:?}"), "Args([Arg(\"u8\")])");
    }
}
