//! Component model for OrbitKit
//!
//! This module contains the types and traits shared by every kit component:
//! the [`Component`] trait and its lifecycle, the [`Context`] handed to
//! components at creation, props-level [`Callback`]s, and the [`Node`] tree
//! that `render` produces.

mod context;
mod error;
mod lifecycle;
mod node;


pub use context::{callback, Callback, ContextProvider, ContextValue};
pub use error::ComponentError;
pub use lifecycle::LifecycleManager;
pub use node::Node;

/// Lifecycle phase of a component
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LifecyclePhase {
    /// Component is created but not yet mounted
    #[default]
    Created,
    /// Component is being mounted
    Mounting,
    /// Component is fully mounted and operational
    Mounted,
    /// Component is about to be updated
    BeforeUpdate,
    /// Component is updating
    Updating,
    /// Component is about to be unmounted
    BeforeUnmount,
    /// Component is being unmounted
    Unmounting,
    /// Component is unmounted and inactive
    Unmounted,
}

/// Props trait - implemented by all component props types
pub trait Props: 'static + Send + Sync {
    /// Get the type name for debugging
    fn type_name(&self) -> &'static str;
}

impl<T: 'static + Clone + Send + Sync> Props for T {
    fn type_name(&self) -> &'static str {
        std::any::type_name::<T>()
    }
}

/// Component trait - implemented by all UI components
pub trait Component: Send + Sync + 'static {
    /// The props type for this component
    type Props: Props + Clone;

    /// Create a new component instance
    fn create(props: Self::Props, context: Context) -> Self
    where
        Self: Sized;

    /// Initialize the component - called once, before the first mount
    fn initialize(&mut self) -> Result<(), ComponentError> {
        Ok(())
    }

    /// Mount component - called when component is first added to the tree
    fn mount(&mut self) -> Result<(), ComponentError> {
        Ok(())
    }

    /// Called before component updates with new props
    fn before_update(&mut self, _new_props: &Self::Props) -> Result<(), ComponentError> {
        Ok(())
    }

    /// Update component with new props
    fn update(&mut self, props: Self::Props) -> Result<(), ComponentError>;

    /// Called after the component has updated
    fn after_update(&mut self) -> Result<(), ComponentError> {
        Ok(())
    }

    /// Called before component is unmounted
    fn before_unmount(&mut self) -> Result<(), ComponentError> {
        Ok(())
    }

    /// Unmount component - called when component is removed from the tree
    fn unmount(&mut self) -> Result<(), ComponentError> {
        Ok(())
    }

    /// Render component - returns child nodes
    fn render(&self) -> Result<Vec<Node>, ComponentError>;
}

/// Context passed to components providing access to shared context values
#[derive(Clone, Debug, Default)]
pub struct Context {
    /// Current lifecycle phase
    lifecycle_phase: LifecyclePhase,

    /// Context provider for parent-child communication
    context_provider: ContextProvider,
}

impl Context {
    /// Create a new context
    pub fn new() -> Self {
        Self {
            lifecycle_phase: LifecyclePhase::Created,
            context_provider: ContextProvider::new(),
        }
    }

    /// Create a new context with a parent context provider
    pub fn with_parent(parent: &Context) -> Self {
        Self {
            lifecycle_phase: LifecyclePhase::Created,
            context_provider: ContextProvider::with_parent(parent.context_provider.clone()),
        }
    }

    /// The context provider for this context
    pub fn provider(&self) -> &ContextProvider {
        &self.context_provider
    }

    /// Shorthand for looking up an ambient value through the provider chain
    pub fn consume<T: Clone + Send + Sync + 'static>(&self) -> Option<T> {
        self.context_provider.consume::<T>()
    }

    /// Current lifecycle phase
    pub fn lifecycle_phase(&self) -> LifecyclePhase {
        self.lifecycle_phase
    }

    /// Set the current lifecycle phase
    pub fn set_lifecycle_phase(&mut self, phase: LifecyclePhase) {
        self.lifecycle_phase = phase;
    }
}
