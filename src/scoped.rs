//! Temporary replacement of registry entries
//!
//! [`ScopedOverride`] swaps a constructor into a [`Registry`] for as
//! long as the guard lives, and swaps the original back when the guard
//! is dropped; on normal exit, early return, `?` and unwinding alike.
//!
//! ```
//! use decimal_bigint::{configure, registry, BigInteger, Calculate, Constructor, DigitBuffer, Operation, ScopedOverride};
//!
//! struct Ignore;
//!
//! impl Calculate for Ignore {
//!     fn calculate(&self, _: &mut DigitBuffer, _: &DigitBuffer) {}
//!     fn name(&self) -> &'static str { "ignore" }
//! }
//!
//! configure();
//! let registry = registry();
//! {
//!     let _guard = ScopedOverride::with(&registry, Operation::Sum, || Box::new(Ignore) as Box<dyn Calculate>);
//!     assert_eq!((BigInteger::from(2u8) + BigInteger::from(3u8)).to_string(), "2");
//! }
//! assert_eq!((BigInteger::from(2u8) + BigInteger::from(3u8)).to_string(), "5");
//! ```

use std::fmt;
use std::hash::Hash;

use tracing::{debug, warn};

use crate::registry::{Constructor, Registry};


/// Guard replacing the constructor of one registry key
///
/// Only keys which already have an entry can be overridden; for a
/// missing key the guard is inactive and leaves the registry
/// untouched in both directions.
///
#[must_use = "the override is undone as soon as the guard is dropped"]
pub struct ScopedOverride<'r, K, I>
where
    K: Eq + Hash + Clone + fmt::Debug,
    I: ?Sized,
{
    registry: &'r Registry<K, I>,
    key: K,
    replacement: Constructor<I>,
    original: Option<Constructor<I>>,
}

impl<'r, K, I> ScopedOverride<'r, K, I>
where
    K: Eq + Hash + Clone + fmt::Debug,
    I: ?Sized,
{
    /// Install `replacement` under `key` until the guard is dropped
    pub fn new(registry: &'r Registry<K, I>, key: K, replacement: Constructor<I>) -> Self {
        let original = registry.replace(&key, replacement.clone());
        if original.is_none() {
            warn!(key = ?key, "override of unregistered key has no effect");
        } else {
            debug!(key = ?key, "override installed");
        }

        ScopedOverride {
            registry: registry,
            key: key,
            replacement: replacement,
            original: original,
        }
    }

    /// Install closure `f` as constructor under `key`
    pub fn with<F>(registry: &'r Registry<K, I>, key: K, f: F) -> Self
    where
        F: Fn() -> Box<I> + 'static,
    {
        Self::new(registry, key, Constructor::new(f))
    }

    /// Key being overridden
    pub fn key(&self) -> &K {
        &self.key
    }

    /// Constructor installed by this guard
    pub fn replacement(&self) -> &Constructor<I> {
        &self.replacement
    }

    /// Constructor which will be restored on drop
    pub fn original(&self) -> Option<&Constructor<I>> {
        self.original.as_ref()
    }

    /// True if the guard replaced an existing entry
    pub fn is_active(&self) -> bool {
        self.original.is_some()
    }
}

impl<K, I> Drop for ScopedOverride<'_, K, I>
where
    K: Eq + Hash + Clone + fmt::Debug,
    I: ?Sized,
{
    fn drop(&mut self) {
        if let Some(original) = self.original.take() {
            self.registry.replace(&self.key, original);
            debug!(key = ?self.key, "override restored");
        }
    }
}

impl<K, I> fmt::Debug for ScopedOverride<'_, K, I>
where
    K: Eq + Hash + Clone + fmt::Debug,
    I: ?Sized,
{
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.debug_struct("ScopedOverride")
            .field("key", &self.key)
            .field("active", &self.is_active())
            .finish()
    }
}


#[cfg(test)]
mod test {
    use super::*;
    use std::panic;

    type IntRegistry = Registry<u32, u64>;

    fn registry_with_123() -> IntRegistry {
        let registry = IntRegistry::new();
        assert!(registry.register(1, || Box::new(123)));
        registry
    }

    #[test]
    fn override_is_restored_at_end_of_scope() {
        let registry = registry_with_123();
        {
            let guard = ScopedOverride::with(&registry, 1, || Box::new(456));
            assert!(guard.is_active());
            assert_eq!(*registry.resolve(&1).unwrap(), 456);
        }
        assert_eq!(*registry.resolve(&1).unwrap(), 123);
        assert_eq!(registry.len(), 1);
    }

    #[test]
    fn override_decorating_original() {
        let registry = registry_with_123();
        {
            let original = registry.find(&1).unwrap();
            let _guard = ScopedOverride::with(&registry, 1, move || {
                let mut value = original.create();
                *value *= 2;
                value
            });
            assert_eq!(*registry.resolve(&1).unwrap(), 246);
        }
        assert_eq!(*registry.resolve(&1).unwrap(), 123);
    }

    #[test]
    fn restores_original_constructor_identity() {
        let registry = registry_with_123();
        let before = registry.find(&1).unwrap();
        {
            let guard = ScopedOverride::with(&registry, 1, || Box::new(0));
            assert!(guard.original().unwrap().ptr_eq(&before));
            assert!(registry.find(&1).unwrap().ptr_eq(guard.replacement()));
        }
        assert!(registry.find(&1).unwrap().ptr_eq(&before));
    }

    #[test]
    fn nested_overrides_unwind_in_order() {
        let registry = registry_with_123();
        {
            let _outer = ScopedOverride::with(&registry, 1, || Box::new(1));
            {
                let _inner = ScopedOverride::with(&registry, 1, || Box::new(2));
                assert_eq!(*registry.resolve(&1).unwrap(), 2);
            }
            assert_eq!(*registry.resolve(&1).unwrap(), 1);
        }
        assert_eq!(*registry.resolve(&1).unwrap(), 123);
    }

    #[test]
    fn restored_on_early_return() {
        fn run(registry: &IntRegistry) -> Result<u64, &'static str> {
            let _guard = ScopedOverride::with(registry, 1, || Box::new(999));
            let value = *registry.resolve(&1).ok_or("missing")?;
            if value == 999 {
                return Err("bail out");
            }
            Ok(value)
        }

        let registry = registry_with_123();
        assert_eq!(run(&registry), Err("bail out"));
        assert_eq!(*registry.resolve(&1).unwrap(), 123);
    }

    #[test]
    fn restored_on_panic() {
        let registry = registry_with_123();
        let result = panic::catch_unwind(panic::AssertUnwindSafe(|| {
            let _guard = ScopedOverride::with(&registry, 1, || Box::new(999));
            assert_eq!(*registry.resolve(&1).unwrap(), 999);
            panic!("leaving scope by unwinding");
        }));
        assert!(result.is_err());
        assert_eq!(*registry.resolve(&1).unwrap(), 123);
    }

    #[test]
    fn unregistered_key_is_left_untouched() {
        let registry = registry_with_123();
        {
            let guard = ScopedOverride::with(&registry, 2, || Box::new(456));
            assert!(!guard.is_active());
            assert!(registry.resolve(&2).is_none());
        }
        assert!(!registry.contains(&2));
        assert_eq!(registry.len(), 1);
    }
}
