//! Keyed registry of constructors
//!
//! A [`Registry`] maps a key to a [`Constructor`] producing a fresh,
//! boxed instance of some interface type `I` each time the key is
//! resolved. The crate uses one registry for arithmetic strategies
//! (see [`ArithmeticRegistry`](crate::ArithmeticRegistry)), but the
//! type is generic over both key and interface.
//!
//! Registration is insert-once. Overwriting an entry is the separate,
//! explicit [`Registry::replace`] operation, which is what
//! [`ScopedOverride`](crate::ScopedOverride) builds on.
//!
//! The registry uses interior mutability and is not `Sync`; share it
//! by reference within one thread.

use std::cell::RefCell;
use std::collections::HashMap;
use std::fmt;
use std::hash::Hash;
use std::rc::Rc;

use tracing::{debug, trace};


/// Reference counted function creating new instances of `I`
///
pub struct Constructor<I: ?Sized> {
    create: Rc<dyn Fn() -> Box<I>>,
}

impl<I: ?Sized> Constructor<I> {
    /// Wrap a closure as constructor
    pub fn new<F>(f: F) -> Self
    where
        F: Fn() -> Box<I> + 'static,
    {
        Constructor { create: Rc::new(f) }
    }

    /// Produce a new instance
    pub fn create(&self) -> Box<I> {
        (self.create)()
    }

    /// True if both handles refer to the same underlying function
    pub fn ptr_eq(&self, other: &Constructor<I>) -> bool {
        Rc::ptr_eq(&self.create, &other.create)
    }
}

impl<I: ?Sized> Clone for Constructor<I> {
    fn clone(&self) -> Self {
        Constructor { create: Rc::clone(&self.create) }
    }
}

impl<I: ?Sized> fmt::Debug for Constructor<I> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "Constructor({:p})", Rc::as_ptr(&self.create))
    }
}


/// Mapping of keys to constructors of `I`
///
pub struct Registry<K, I: ?Sized> {
    constructors: RefCell<HashMap<K, Constructor<I>>>,
}

impl<K, I> Registry<K, I>
where
    K: Eq + Hash + Clone + fmt::Debug,
    I: ?Sized,
{
    /// Create an empty registry
    pub fn new() -> Self {
        Registry {
            constructors: RefCell::new(HashMap::new()),
        }
    }

    /// Register closure as constructor for `key`
    ///
    /// Returns false, leaving the registry untouched, if `key`
    /// already has a constructor.
    ///
    pub fn register<F>(&self, key: K, f: F) -> bool
    where
        F: Fn() -> Box<I> + 'static,
    {
        self.register_constructor(key, Constructor::new(f))
    }

    /// Register constructor for `key`, unless one already exists
    pub fn register_constructor(&self, key: K, constructor: Constructor<I>) -> bool {
        use std::collections::hash_map::Entry;

        match self.constructors.borrow_mut().entry(key) {
            Entry::Occupied(entry) => {
                debug!(key = ?entry.key(), "constructor already registered");
                false
            }
            Entry::Vacant(entry) => {
                debug!(key = ?entry.key(), "registered constructor");
                entry.insert(constructor);
                true
            }
        }
    }

    /// Overwrite the constructor of an existing key
    ///
    /// Returns the previous constructor so it can be restored later.
    /// If `key` has no entry nothing is inserted and `None` is returned.
    ///
    pub fn replace(&self, key: &K, constructor: Constructor<I>) -> Option<Constructor<I>> {
        let mut constructors = self.constructors.borrow_mut();
        let previous = constructors
            .get_mut(key)
            .map(|slot| std::mem::replace(slot, constructor));

        debug!(key = ?key, replaced = previous.is_some(), "replace constructor");
        previous
    }

    /// Constructor currently registered for `key`
    pub fn find(&self, key: &K) -> Option<Constructor<I>> {
        self.constructors.borrow().get(key).cloned()
    }

    /// Create a new instance using the constructor registered for `key`
    ///
    /// The constructor runs after the internal map is released, so it
    /// may itself use this registry.
    ///
    pub fn resolve(&self, key: &K) -> Option<Box<I>> {
        match self.find(key) {
            Some(constructor) => Some(constructor.create()),
            None => {
                trace!(key = ?key, "no constructor registered");
                None
            }
        }
    }

    /// True if `key` has a registered constructor
    pub fn contains(&self, key: &K) -> bool {
        self.constructors.borrow().contains_key(key)
    }

    /// Number of registered constructors
    pub fn len(&self) -> usize {
        self.constructors.borrow().len()
    }

    /// True if nothing is registered
    pub fn is_empty(&self) -> bool {
        self.constructors.borrow().is_empty()
    }

    /// Snapshot of all registered keys (unordered)
    pub fn keys(&self) -> Vec<K> {
        self.constructors.borrow().keys().cloned().collect()
    }

    /// Snapshot of all registered entries (unordered)
    pub fn entries(&self) -> Vec<(K, Constructor<I>)> {
        self.constructors
            .borrow()
            .iter()
            .map(|(k, c)| (k.clone(), c.clone()))
            .collect()
    }

    /// Remove every registration
    pub fn clear(&self) {
        let mut constructors = self.constructors.borrow_mut();
        debug!(count = constructors.len(), "clearing registry");
        constructors.clear();
    }
}

impl<K, I> Default for Registry<K, I>
where
    K: Eq + Hash + Clone + fmt::Debug,
    I: ?Sized,
{
    fn default() -> Self {
        Self::new()
    }
}

impl<K, I> fmt::Debug for Registry<K, I>
where
    K: Eq + Hash + Clone + fmt::Debug,
    I: ?Sized,
{
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.debug_struct("Registry")
            .field("keys", &self.keys())
            .finish()
    }
}


#[cfg(test)]
mod test {
    use super::*;

    type IntRegistry = Registry<u32, u64>;

    fn value_123() -> Box<u64> {
        Box::new(123)
    }

    fn value_456() -> Box<u64> {
        Box::new(456)
    }

    #[test]
    fn new_registry_is_empty() {
        let registry = IntRegistry::new();
        assert!(registry.is_empty());
        assert_eq!(registry.len(), 0);
        assert!(registry.resolve(&1).is_none());
    }

    #[test]
    fn register_is_insert_once() {
        let registry = IntRegistry::new();

        assert!(registry.register(1, value_123));
        assert!(!registry.is_empty());
        assert_eq!(registry.len(), 1);

        assert!(!registry.register(1, value_456));
        assert_eq!(registry.len(), 1);
        assert_eq!(*registry.resolve(&1).unwrap(), 123);
    }

    #[test]
    fn resolve_creates_fresh_instances() {
        let registry = Registry::<&str, Vec<u8>>::new();
        registry.register("v", || Box::new(vec![1, 2]));

        let mut a = registry.resolve(&"v").unwrap();
        a.push(3);
        let b = registry.resolve(&"v").unwrap();

        assert_eq!(*a, vec![1, 2, 3]);
        assert_eq!(*b, vec![1, 2]);
    }

    #[test]
    fn resolve_missing_key() {
        let registry = IntRegistry::new();
        registry.register(1, value_123);
        assert!(registry.resolve(&2).is_none());
        assert!(!registry.contains(&2));
        assert!(registry.contains(&1));
    }

    #[test]
    fn replace_returns_previous() {
        let registry = IntRegistry::new();
        registry.register(1, value_123);
        let original = registry.find(&1).unwrap();

        let previous = registry.replace(&1, Constructor::new(value_456)).unwrap();
        assert!(previous.ptr_eq(&original));
        assert_eq!(*registry.resolve(&1).unwrap(), 456);
        assert_eq!(registry.len(), 1);
    }

    #[test]
    fn replace_missing_key_inserts_nothing() {
        let registry = IntRegistry::new();
        assert!(registry.replace(&7, Constructor::new(value_456)).is_none());
        assert!(registry.is_empty());
        assert!(!registry.contains(&7));
    }

    #[test]
    fn entries_enumerates_everything() {
        let registry = IntRegistry::new();
        registry.register(1, value_123);
        registry.register(2, value_456);

        let mut seen: Vec<(u32, u64)> = registry
            .entries()
            .into_iter()
            .map(|(key, constructor)| (key, *constructor.create()))
            .collect();
        seen.sort();
        assert_eq!(seen, vec![(1, 123), (2, 456)]);

        let mut keys = registry.keys();
        keys.sort();
        assert_eq!(keys, vec![1, 2]);
    }

    #[test]
    fn clear_removes_all() {
        let registry = IntRegistry::new();
        registry.register(1, value_123);
        registry.register(2, value_456);
        registry.clear();

        assert!(registry.is_empty());
        assert!(registry.resolve(&1).is_none());
        assert!(registry.register(1, value_456));
    }

    #[test]
    fn constructor_may_use_registry() {
        let registry = Rc::new(IntRegistry::new());
        registry.register(1, value_123);

        let inner = Rc::downgrade(&registry);
        registry.register(2, move || {
            let base = inner.upgrade().and_then(|r| r.resolve(&1)).map_or(0, |v| *v);
            Box::new(base + 1)
        });

        assert_eq!(*registry.resolve(&2).unwrap(), 124);
    }
}
