//! Component lifecycle management for Orbit UI framework

use crate::component::{Component, ComponentError, Context, LifecyclePhase, Node};

/// Drives a single component through its lifecycle phases
pub struct LifecycleManager<C: Component> {
    /// Current phase of the component
    phase: LifecyclePhase,

    /// Whether `initialize` has already run
    initialized: bool,

    /// Component instance being managed
    component: C,

    /// Context for the component
    context: Context,
}

impl<C: Component + std::fmt::Debug> std::fmt::Debug for LifecycleManager<C> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("LifecycleManager")
            .field("phase", &self.phase)
            .field("component", &self.component)
            .finish()
    }
}

impl<C: Component> LifecycleManager<C> {
    /// Create the component from its props and wrap it
    pub fn new(props: C::Props, context: Context) -> Self {
        let component = C::create(props, context.clone());
        Self {
            phase: LifecyclePhase::Created,
            initialized: false,
            component,
            context,
        }
    }

    /// Get the current lifecycle phase
    pub fn current_phase(&self) -> LifecyclePhase {
        self.phase
    }

    /// Get a reference to the component
    pub fn component(&self) -> &C {
        &self.component
    }

    /// Get a mutable reference to the component (for event delivery)
    pub fn component_mut(&mut self) -> &mut C {
        &mut self.component
    }

    /// Get a reference to the component's context
    pub fn context(&self) -> &Context {
        &self.context
    }

    fn enter(&mut self, phase: LifecyclePhase) {
        self.phase = phase;
        self.context.set_lifecycle_phase(phase);
    }

    fn expect_phase(&self, expected: LifecyclePhase, operation: &str) -> Result<(), ComponentError> {
        if self.phase != expected {
            return Err(ComponentError::InvalidLifecycleTransition(
                self.phase,
                operation.to_string(),
            ));
        }
        Ok(())
    }

    /// Initialize the component (post-creation, at most once)
    pub fn initialize(&mut self) -> Result<(), ComponentError> {
        self.expect_phase(LifecyclePhase::Created, "initialize")?;
        if self.initialized {
            return Ok(());
        }
        self.component.initialize()?;
        self.initialized = true;
        Ok(())
    }

    /// Mount the component to the tree, initializing it first if needed
    pub fn mount(&mut self) -> Result<(), ComponentError> {
        self.expect_phase(LifecyclePhase::Created, "mount")?;
        self.initialize()?;

        self.enter(LifecyclePhase::Mounting);
        match self.component.mount() {
            Ok(()) => {
                self.enter(LifecyclePhase::Mounted);
                log::debug!("mounted {}", std::any::type_name::<C>());
                Ok(())
            }
            Err(err) => {
                // Reset phase on error
                self.enter(LifecyclePhase::Created);
                Err(err)
            }
        }
    }

    /// Update the component with new props
    pub fn update(&mut self, props: C::Props) -> Result<(), ComponentError> {
        self.expect_phase(LifecyclePhase::Mounted, "update")?;

        let result = self.run_update(props);

        // The component stays mounted whether or not the update succeeded
        self.enter(LifecyclePhase::Mounted);
        result
    }

    fn run_update(&mut self, props: C::Props) -> Result<(), ComponentError> {
        self.enter(LifecyclePhase::BeforeUpdate);
        self.component.before_update(&props)?;

        self.enter(LifecyclePhase::Updating);
        self.component.update(props)?;
        self.component.after_update()
    }

    /// Unmount the component from the tree
    pub fn unmount(&mut self) -> Result<(), ComponentError> {
        self.expect_phase(LifecyclePhase::Mounted, "unmount")?;

        self.enter(LifecyclePhase::BeforeUnmount);
        if let Err(err) = self.component.before_unmount() {
            self.enter(LifecyclePhase::Mounted);
            return Err(err);
        }

        self.enter(LifecyclePhase::Unmounting);
        self.component.unmount()?;
        self.enter(LifecyclePhase::Unmounted);
        log::debug!("unmounted {}", std::any::type_name::<C>());
        Ok(())
    }

    /// Render the component
    pub fn render(&self) -> Result<Vec<Node>, ComponentError> {
        self.expect_phase(LifecyclePhase::Mounted, "render")?;
        self.component.render()
    }
}
