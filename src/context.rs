//! Context Store - Subtree-scoped values for nested components.
//!
//! A host renderer pushes a scope when it starts building a component's
//! children and pops it when it is done. Values provided inside a scope are
//! visible to everything built inside it, including nested scopes, and are
//! dropped with the scope.
//!
//! ```ignore
//! use hawk_ui::context::{ContextKey, provide_context, get_context, with_context_scope};
//!
//! const THEME: ContextKey<String> = ContextKey::new("theme");
//!
//! with_context_scope(|| {
//!     provide_context(&THEME, "dark".to_string());
//!     with_context_scope(|| {
//!         assert_eq!(get_context(&THEME).as_deref(), Some("dark"));
//!     });
//! });
//! assert!(get_context(&THEME).is_none());
//! ```

use std::any::{Any, TypeId};
use std::cell::RefCell;
use std::collections::HashMap;
use std::fmt;
use std::marker::PhantomData;

// =============================================================================
// Keys
// =============================================================================

/// Typed key for a context value.
///
/// Two keys only collide if both the name and the value type match.
pub struct ContextKey<T> {
    name: &'static str,
    _marker: PhantomData<fn() -> T>,
}

impl<T> ContextKey<T> {
    pub const fn new(name: &'static str) -> Self {
        Self {
            name,
            _marker: PhantomData,
        }
    }

    pub fn name(&self) -> &'static str {
        self.name
    }
}

impl<T> fmt::Debug for ContextKey<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("ContextKey").field(&self.name).finish()
    }
}

type SlotId = (&'static str, TypeId);

fn slot_id<T: 'static>(key: &ContextKey<T>) -> SlotId {
    (key.name, TypeId::of::<T>())
}

// =============================================================================
// Scope Stack
// =============================================================================

type Scope = HashMap<SlotId, Box<dyn Any>>;

thread_local! {
    /// Innermost scope last. The base scope at index 0 is never popped.
    static SCOPES: RefCell<Vec<Scope>> = RefCell::new(vec![Scope::new()]);
}

/// Open a new scope for a component's children.
pub fn push_context_scope() {
    SCOPES.with(|scopes| scopes.borrow_mut().push(Scope::new()));
}

/// Close the innermost scope, dropping everything provided in it.
pub fn pop_context_scope() {
    // Values are dropped after the borrow ends; their destructors may touch
    // the store.
    let _closed = SCOPES.with(|scopes| {
        let mut scopes = scopes.borrow_mut();
        if scopes.len() > 1 {
            scopes.pop()
        } else {
            scopes.last_mut().map(std::mem::take)
        }
    });
}

/// Number of open scopes, counting the base scope.
pub fn context_depth() -> usize {
    SCOPES.with(|scopes| scopes.borrow().len())
}

struct ScopeGuard;

impl Drop for ScopeGuard {
    fn drop(&mut self) {
        pop_context_scope();
    }
}

/// Run `f` inside a fresh scope. The scope is closed even if `f` panics.
pub fn with_context_scope<R>(f: impl FnOnce() -> R) -> R {
    push_context_scope();
    let _guard = ScopeGuard;
    f()
}

// =============================================================================
// Get / Set / Has
// =============================================================================

/// Publish `value` under `key` in the innermost scope and hand it back.
///
/// A value already provided under the same key in this scope is replaced.
pub fn provide_context<T: Clone + 'static>(key: &ContextKey<T>, value: T) -> T {
    log::trace!("provide context `{}`", key.name);
    SCOPES.with(|scopes| {
        let mut scopes = scopes.borrow_mut();
        if let Some(scope) = scopes.last_mut() {
            scope.insert(slot_id(key), Box::new(value.clone()));
        }
    });
    value
}

/// Read the value nearest to the innermost scope.
pub fn get_context<T: Clone + 'static>(key: &ContextKey<T>) -> Option<T> {
    let id = slot_id(key);
    SCOPES.with(|scopes| {
        scopes
            .borrow()
            .iter()
            .rev()
            .find_map(|scope| scope.get(&id))
            .and_then(|value| value.downcast_ref::<T>())
            .cloned()
    })
}

/// Check whether any open scope has a value for `key`.
pub fn has_context<T: 'static>(key: &ContextKey<T>) -> bool {
    let id = slot_id(key);
    SCOPES.with(|scopes| scopes.borrow().iter().any(|scope| scope.contains_key(&id)))
}

// =============================================================================
// Reset (for testing)
// =============================================================================

/// Drop every scope and value on this thread.
pub fn reset_context_state() {
    let _old = SCOPES.with(|scopes| {
        std::mem::replace(&mut *scopes.borrow_mut(), vec![Scope::new()])
    });
}

#[cfg(test)]
mod tests {
    use super::*;

    const NUMBER: ContextKey<i32> = ContextKey::new("number");
    const LABEL: ContextKey<String> = ContextKey::new("label");

    #[test]
    fn test_provide_and_get() {
        reset_context_state();

        assert!(!has_context(&NUMBER));
        assert_eq!(provide_context(&NUMBER, 42), 42);
        assert!(has_context(&NUMBER));
        assert_eq!(get_context(&NUMBER), Some(42));
    }

    #[test]
    fn test_nested_scope_sees_parent() {
        reset_context_state();

        with_context_scope(|| {
            provide_context(&LABEL, "root".to_string());
            with_context_scope(|| {
                assert_eq!(get_context(&LABEL).as_deref(), Some("root"));
            });
        });
        assert!(!has_context(&LABEL));
    }

    #[test]
    fn test_inner_scope_shadows_outer() {
        reset_context_state();

        with_context_scope(|| {
            provide_context(&NUMBER, 1);
            with_context_scope(|| {
                provide_context(&NUMBER, 2);
                assert_eq!(get_context(&NUMBER), Some(2));
            });
            assert_eq!(get_context(&NUMBER), Some(1));
        });
    }

    #[test]
    fn test_same_name_different_type() {
        reset_context_state();

        const AS_TEXT: ContextKey<String> = ContextKey::new("number");
        provide_context(&NUMBER, 7);

        assert!(!has_context(&AS_TEXT));
        assert_eq!(get_context(&AS_TEXT), None);
    }

    #[test]
    fn test_scope_depth() {
        reset_context_state();

        assert_eq!(context_depth(), 1);
        push_context_scope();
        push_context_scope();
        assert_eq!(context_depth(), 3);
        pop_context_scope();
        pop_context_scope();
        assert_eq!(context_depth(), 1);

        // Base scope survives but is emptied
        provide_context(&NUMBER, 3);
        pop_context_scope();
        assert_eq!(context_depth(), 1);
        assert!(!has_context(&NUMBER));
    }

    #[test]
    fn test_scope_closed_on_panic() {
        reset_context_state();

        let result = std::panic::catch_unwind(|| {
            with_context_scope(|| {
                provide_context(&NUMBER, 9);
                panic!("boom");
            })
        });

        assert!(result.is_err());
        assert_eq!(context_depth(), 1);
        assert!(!has_context(&NUMBER));
    }
}
