//! Wiring of the default arithmetic strategies
//!
//! Every thread owns one ambient [`ArithmeticRegistry`], used by the
//! operator implementations of [`BigInteger`](crate::BigInteger). It
//! starts out empty; [`configure`] installs the default strategies.

use std::rc::Rc;

use tracing::debug;

use crate::arithmetic::{Multiplication, Sum};
use crate::operation::{Calculate, Operation};
use crate::registry::Registry;


/// Registry resolving arithmetic strategies by operation
pub type ArithmeticRegistry = Registry<Operation, dyn Calculate>;

thread_local! {
    static ARITHMETIC_REGISTRY: Rc<ArithmeticRegistry> = Rc::new(ArithmeticRegistry::new());
}

/// Handle to this thread's ambient arithmetic registry
///
/// Every thread has its own registry; a handle is `!Send` and cannot
/// be passed to another thread.
///
pub fn registry() -> Rc<ArithmeticRegistry> {
    ARITHMETIC_REGISTRY.with(Rc::clone)
}

/// Configure this thread's ambient registry with the default strategies
///
/// This configures the calling thread only. Other threads start with
/// an empty registry and must call `configure()` themselves, or use
/// an explicit registry with
/// [`add_assign_with`](crate::BigInteger::add_assign_with) and
/// [`mul_assign_with`](crate::BigInteger::mul_assign_with).
///
/// Shorthand for `Configurator::new().configure(&registry())`.
///
pub fn configure() {
    Configurator::new().configure(&registry());
}


/// Installs the default strategies into a registry
///
#[derive(Clone, Copy, Debug, Default)]
pub struct Configurator;

impl Configurator {
    pub fn new() -> Configurator {
        Configurator
    }

    /// Clear `registry` and register [`Sum`] and [`Multiplication`]
    ///
    /// Calling this repeatedly always yields the same state.
    ///
    pub fn configure(&self, registry: &ArithmeticRegistry) {
        registry.clear();
        registry.register(Operation::Sum, || Box::new(Sum) as Box<dyn Calculate>);
        registry.register(Operation::Multiplication, || Box::new(Multiplication) as Box<dyn Calculate>);
        debug!(strategies = registry.len(), "arithmetic registry configured");
    }
}


#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn ambient_registry_starts_empty() {
        // each test runs on its own thread
        assert!(registry().is_empty());
    }

    #[test]
    fn configure_registers_defaults() {
        configure();
        let registry = registry();
        assert_eq!(registry.len(), 2);
        assert_eq!(registry.resolve(&Operation::Sum).unwrap().name(), "sum");
        assert_eq!(registry.resolve(&Operation::Multiplication).unwrap().name(), "multiplication");
        assert!(registry.resolve(&Operation::Difference).is_none());
        assert!(registry.resolve(&Operation::Division).is_none());
    }

    #[test]
    fn configure_affects_calling_thread_only() {
        configure();
        assert_eq!(registry().len(), 2);

        let (other_len, other_sum) = std::thread::spawn(|| {
            let mut n = crate::BigInteger::from(1u8);
            let sum = n.checked_add_assign(&crate::BigInteger::from(1u8));
            (registry().len(), sum)
        })
        .join()
        .unwrap();
        assert_eq!(other_len, 0);
        assert_eq!(other_sum, Err(crate::ArithmeticError::Unregistered(Operation::Sum)));

        std::thread::spawn(|| {
            configure();
            let n = crate::BigInteger::from(1u8) + crate::BigInteger::from(1u8);
            assert_eq!(n.to_decimal_string(), "2");
        })
        .join()
        .unwrap();
    }

    #[test]
    fn configure_is_idempotent() {
        let registry = ArithmeticRegistry::new();
        let configurator = Configurator::new();
        configurator.configure(&registry);
        configurator.configure(&registry);
        assert_eq!(registry.len(), 2);
    }

    #[test]
    fn configure_resets_overwritten_state() {
        let registry = ArithmeticRegistry::new();
        registry.register(Operation::Sum, || Box::new(Multiplication) as Box<dyn Calculate>);
        registry.register(Operation::Division, || Box::new(Sum) as Box<dyn Calculate>);

        Configurator::new().configure(&registry);

        assert_eq!(registry.resolve(&Operation::Sum).unwrap().name(), "sum");
        assert!(!registry.contains(&Operation::Division));
    }

    #[test]
    fn explicit_registries_are_independent() {
        let a = ArithmeticRegistry::new();
        let b = ArithmeticRegistry::new();
        Configurator::new().configure(&a);
        assert_eq!(a.len(), 2);
        assert!(b.is_empty());
    }
}
