//! Desktop shell UI composition and the top-level pointer-gesture dispatcher.

mod icons;
mod taskbar;
mod window;

use std::time::Duration;

use leptos::*;

use self::{icons::DesktopIconLayer, taskbar::Taskbar, window::DesktopWindow};
use crate::{
    model::{PointerPosition, WindowLifecycle},
    reducer::DesktopAction,
    runtime_context::{use_desktop_runtime, DesktopRuntimeContext},
};

/// Delay before the finished selection rectangle visual is removed.
const SELECTION_RECT_LINGER: Duration = Duration::from_millis(200);
/// Click-suppression window after an icon drag ends.
const ICON_CLICK_SUPPRESSION: Duration = Duration::from_millis(100);

pub(crate) fn pointer_from_pointer_event(ev: &web_sys::PointerEvent) -> PointerPosition {
    PointerPosition {
        x: ev.client_x(),
        y: ev.client_y(),
    }
}

pub(crate) fn stop_mouse_event(ev: &web_sys::MouseEvent) {
    ev.prevent_default();
    ev.stop_propagation();
}

fn end_active_pointer_interaction(runtime: DesktopRuntimeContext) {
    let interaction = runtime.interaction.get_untracked();

    if interaction.dragging.is_some() {
        runtime.dispatch_action(DesktopAction::EndMove);
    }
    if interaction.resizing.is_some() {
        runtime.dispatch_action(DesktopAction::EndResize);
    }
    if interaction.selecting.is_some() {
        runtime.dispatch_action(DesktopAction::EndSelection);
        set_timeout(
            move || runtime.dispatch_action(DesktopAction::ClearSelectionRect),
            SELECTION_RECT_LINGER,
        );
    }
    if interaction.icon_drag.is_some() {
        runtime.dispatch_action(DesktopAction::EndIconDrag);
        set_timeout(
            move || runtime.dispatch_action(DesktopAction::ClearIconOpenSuppression),
            ICON_CLICK_SUPPRESSION,
        );
    }
}

#[component]
/// Full desktop shell: backdrop, icons, selection rectangle, window layer, and taskbar.
///
/// All pointer-move/up handling funnels through this component, so a gesture keeps receiving
/// events for its whole duration no matter which element is under the pointer.
pub fn DesktopShell() -> impl IntoView {
    let runtime = use_desktop_runtime();
    let state = runtime.state;

    let on_backdrop_pointer_down = move |ev: web_sys::PointerEvent| {
        // Selection only starts on the empty backdrop; windows and icons stop propagation.
        runtime.dispatch_action(DesktopAction::BeginSelection {
            pointer: pointer_from_pointer_event(&ev),
        });
    };

    let on_pointer_move = move |ev: web_sys::PointerEvent| {
        let pointer = pointer_from_pointer_event(&ev);
        let interaction = runtime.interaction.get_untracked();
        let viewport = runtime.host.get_value().viewport_rect();

        if interaction.dragging.is_some() {
            runtime.dispatch_action(DesktopAction::UpdateMove { pointer, viewport });
        }
        if interaction.resizing.is_some() {
            runtime.dispatch_action(DesktopAction::UpdateResize { pointer, viewport });
        }
        if interaction.selecting.is_some() {
            runtime.dispatch_action(DesktopAction::UpdateSelection { pointer });
        }
        if interaction.icon_drag.is_some() {
            runtime.dispatch_action(DesktopAction::UpdateIconDrag { pointer });
        }
    };
    let on_pointer_end = move |_| end_active_pointer_interaction(runtime);

    // Minimized windows stay mounted (hidden by the window chrome) so panel state survives
    // minimize/restore; only Close unmounts a panel and destroys its state.
    let open_windows = move || {
        state
            .get()
            .windows
            .iter()
            .filter(|w| w.lifecycle != WindowLifecycle::Closed)
            .map(|w| w.panel)
            .collect::<Vec<_>>()
    };

    view! {
        <div
            id="desktop-shell-root"
            class="desktop-shell"
            tabindex="-1"
            data-theme=move || state.get().theme.attribute_value()
            on:pointermove=on_pointer_move
            on:pointerup=on_pointer_end
            on:pointercancel=on_pointer_end
        >
            <div class="desktop-backdrop" on:pointerdown=on_backdrop_pointer_down></div>

            <SelectionRectangle />
            <DesktopIconLayer />

            <div class="desktop-window-layer">
                <For each=open_windows key=|panel| panel.slug() let:panel>
                    <DesktopWindow panel=panel />
                </For>
            </div>

            <Taskbar />
        </div>
    }
}

#[component]
fn SelectionRectangle() -> impl IntoView {
    let runtime = use_desktop_runtime();

    let rect = Signal::derive(move || {
        let interaction = runtime.interaction.get();
        interaction.selecting.or(interaction.completed_selection)
    });

    view! {
        <Show when=move || rect.get().is_some() fallback=|| ()>
            {move || {
                let selection = rect.get().expect("selection rect while shown");
                let (min, max) = selection.normalized();
                view! {
                    <div
                        class="selection-area"
                        aria-hidden="true"
                        style=format!(
                            "left:{}px;top:{}px;width:{}px;height:{}px;",
                            min.x,
                            min.y,
                            max.x - min.x,
                            max.y - min.y
                        )
                    />
                }
                    .into_view()
            }}
        </Show>
    }
}
