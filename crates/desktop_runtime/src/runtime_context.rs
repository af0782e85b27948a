//! Runtime provider and context wiring for the desktop shell.
//!
//! This module owns the long-lived reducer container and effect execution. UI composition stays
//! in [`crate::components`].

use leptos::*;

use crate::{
    host::DesktopHostContext,
    model::{DesktopState, InteractionState},
    reducer::{reduce_desktop, DesktopAction},
};

#[derive(Clone, Copy)]
/// Leptos context for reading desktop runtime state and dispatching [`DesktopAction`] values.
pub struct DesktopRuntimeContext {
    /// Host service bundle for executing runtime side effects and environment queries.
    pub host: StoredValue<DesktopHostContext>,
    /// Reactive desktop state signal.
    pub state: RwSignal<DesktopState>,
    /// Reactive pointer-gesture state signal.
    pub interaction: RwSignal<InteractionState>,
    /// Reducer dispatch callback.
    pub dispatch: Callback<DesktopAction>,
}

impl DesktopRuntimeContext {
    /// Dispatches a reducer action through the runtime context callback.
    pub fn dispatch_action(&self, action: DesktopAction) {
        self.dispatch.call(action);
    }
}

#[component]
/// Provides [`DesktopRuntimeContext`] to descendant components.
pub fn DesktopProvider(
    /// Injected browser host bundle assembled by the entry layer.
    host_context: DesktopHostContext,
    children: Children,
) -> impl IntoView {
    let host = store_value(host_context);
    let state = create_rw_signal(DesktopState::default());
    let interaction = create_rw_signal(InteractionState::default());

    let dispatch = Callback::new(move |action: DesktopAction| {
        let mut desktop = state.get_untracked();
        let mut gestures = interaction.get_untracked();
        let previous_desktop = desktop.clone();
        let previous_gestures = gestures.clone();

        let effects = reduce_desktop(&mut desktop, &mut gestures, action);
        if desktop != previous_desktop {
            state.set(desktop);
        }
        if gestures != previous_gestures {
            interaction.set(gestures);
        }
        for effect in effects {
            host.get_value().run_runtime_effect(effect);
        }
    });

    let runtime = DesktopRuntimeContext {
        host,
        state,
        interaction,
        dispatch,
    };

    provide_context(runtime);

    children().into_view()
}

/// Returns the current [`DesktopRuntimeContext`].
///
/// # Panics
///
/// Panics if called outside [`DesktopProvider`].
pub fn use_desktop_runtime() -> DesktopRuntimeContext {
    use_context::<DesktopRuntimeContext>().expect("DesktopRuntimeContext not provided")
}
