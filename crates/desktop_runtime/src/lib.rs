//! Desktop window-manager runtime: state model, transition reducer, and shell UI.

#![warn(missing_docs, rustdoc::broken_intra_doc_links)]

pub mod components;
pub mod host;
pub mod model;
pub mod reducer;
pub mod runtime_context;
pub mod window_manager;

pub use components::DesktopShell;
pub use host::DesktopHostContext;
pub use model::*;
pub use reducer::{reduce_desktop, DesktopAction, RuntimeEffect};
pub use runtime_context::{use_desktop_runtime, DesktopProvider, DesktopRuntimeContext};
