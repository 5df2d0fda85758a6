// Core module of the OrbitKit component library
pub mod component;
pub mod kit;

/// Version of the OrbitKit library
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Re-export of common types for convenience
pub mod prelude {
    pub use crate::component::{
        callback, Callback, Component, ComponentError, Context, ContextProvider,
        LifecycleManager, LifecyclePhase, Node, Props,
    };
    pub use crate::kit::prelude::*;
}

/// Initialize OrbitKit.
///
/// The library only logs through the `log` facade; installing a logger is
/// left to the host application.
pub fn init() -> Result<(), Error> {
    log::info!("OrbitKit {} initialized", VERSION);
    Ok(())
}

/// Render a component and serialize its nodes to markup
pub fn render_to_markup<C: crate::component::Component>(component: &C) -> Result<String, Error> {
    let nodes = component
        .render()
        .map_err(|err| Error::Render(err.to_string()))?;
    Ok(nodes.iter().map(crate::component::Node::to_markup).collect())
}

/// Errors that can occur in OrbitKit
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("Rendering error: {0}")]
    Render(String),

    #[error("Component error: {0}")]
    Component(String),

    #[error("Configuration error: {0}")]
    Config(#[from] serde_json::Error),
}
