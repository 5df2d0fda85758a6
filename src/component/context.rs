//! Context passing and props-level callbacks

use std::any::{Any, TypeId};
use std::collections::HashMap;
use std::fmt::Debug;
use std::sync::{Arc, RwLock};

use crate::component::ComponentError;

/// A type-erased value that can be stored in a context
pub trait ContextValue: Any + Send + Sync {
    fn as_any(&self) -> &dyn Any;
    fn debug_string(&self) -> String;
}

impl<T: Any + Clone + Send + Sync + Debug + 'static> ContextValue for T {
    fn as_any(&self) -> &dyn Any {
        self
    }

    fn debug_string(&self) -> String {
        format!("{:?}", self)
    }
}

/// Provider for ambient values shared down the component tree (e.g. the theme)
#[derive(Clone, Default)]
pub struct ContextProvider {
    /// Parent context provider
    parent: Option<Box<ContextProvider>>,
    values: Arc<RwLock<HashMap<TypeId, Box<dyn ContextValue>>>>,
}

impl Debug for ContextProvider {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ContextProvider")
            .field("parent", &self.parent.is_some())
            .field(
                "values",
                &self
                    .values
                    .read()
                    .map(|values| values.values().map(|v| v.debug_string()).collect::<Vec<_>>())
                    .unwrap_or_default(),
            )
            .finish()
    }
}

impl ContextProvider {
    /// Create a new context provider
    pub fn new() -> Self {
        Self {
            parent: None,
            values: Arc::new(RwLock::new(HashMap::new())),
        }
    }

    /// Create a context provider with a parent
    pub fn with_parent(parent: ContextProvider) -> Self {
        Self {
            parent: Some(Box::new(parent)),
            values: Arc::new(RwLock::new(HashMap::new())),
        }
    }

    /// Set a value in the context, replacing any previous value of the same type
    pub fn provide<T: Clone + Send + Sync + Debug + 'static>(
        &self,
        value: T,
    ) -> Result<(), ComponentError> {
        let mut values = self.values.write().map_err(|_| {
            ComponentError::LockError("Failed to acquire write lock for context values".to_string())
        })?;
        values.insert(TypeId::of::<T>(), Box::new(value));
        Ok(())
    }

    /// Get a value from this context, falling back to the parent chain
    pub fn consume<T: Clone + Send + Sync + 'static>(&self) -> Option<T> {
        let type_id = TypeId::of::<T>();

        let local = self.values.read().ok().and_then(|values| {
            values
                .get(&type_id)
                .and_then(|value| value.as_any().downcast_ref::<T>().cloned())
        });

        match local {
            Some(value) => Some(value),
            None => self.parent.as_ref().and_then(|parent| parent.consume::<T>()),
        }
    }

    /// Check if a type exists in this context or any parent
    pub fn has<T: 'static>(&self) -> bool {
        let exists_here = self
            .values
            .read()
            .map(|values| values.contains_key(&TypeId::of::<T>()))
            .unwrap_or(false);

        exists_here || self.parent.as_ref().is_some_and(|parent| parent.has::<T>())
    }

    /// Remove a value from this context (parents are untouched)
    pub fn remove<T: 'static>(&self) -> bool {
        self.values
            .write()
            .map(|mut values| values.remove(&TypeId::of::<T>()).is_some())
            .unwrap_or(false)
    }
}

/// A callback function that can be passed as a prop
pub struct Callback<Args, Ret = ()> {
    /// The function to call
    func: Arc<dyn Fn(Args) -> Ret + Send + Sync>,
}

impl<Args, Ret> Clone for Callback<Args, Ret> {
    fn clone(&self) -> Self {
        Self {
            func: self.func.clone(),
        }
    }
}

impl<Args, Ret> Debug for Callback<Args, Ret> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str("Callback(..)")
    }
}

impl<Args, Ret> Callback<Args, Ret> {
    /// Create a new callback
    pub fn new<F>(func: F) -> Self
    where
        F: Fn(Args) -> Ret + Send + Sync + 'static,
    {
        Self {
            func: Arc::new(func),
        }
    }

    /// Call the callback with the given arguments
    pub fn call(&self, args: Args) -> Ret {
        (self.func)(args)
    }
}

/// Convenience function for creating a callback
pub fn callback<F, Args, Ret>(func: F) -> Callback<Args, Ret>
where
    F: Fn(Args) -> Ret + Send + Sync + 'static,
{
    Callback::new(func)
}
