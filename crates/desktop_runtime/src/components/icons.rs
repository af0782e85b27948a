use desktop_app_contract::PanelId;
use leptos::*;

use super::pointer_from_pointer_event;
use crate::reducer::DesktopAction;
use crate::runtime_context::use_desktop_runtime;

#[component]
pub(super) fn DesktopIconLayer() -> impl IntoView {
    view! {
        <For each=|| PanelId::ALL key=|panel| panel.slug() let:panel>
            <DesktopIconButton panel=panel />
        </For>
    }
}

#[component]
fn DesktopIconButton(panel: PanelId) -> impl IntoView {
    let runtime = use_desktop_runtime();
    let state = runtime.state;

    let position = Signal::derive(move || state.get().icon(panel).position);
    let is_selected = Signal::derive(move || state.get().icon_is_selected(panel));
    let is_dragging = Signal::derive(move || runtime.interaction.get().icon_drag.is_some());

    let on_pointer_down = move |ev: web_sys::PointerEvent| {
        if ev.pointer_type() == "mouse" && ev.button() != 0 {
            return;
        }
        ev.prevent_default();
        ev.stop_propagation();
        runtime.dispatch_action(DesktopAction::BeginIconDrag {
            panel,
            pointer: pointer_from_pointer_event(&ev),
        });
    };

    // The reducer drops this open while click suppression is armed after a drag.
    let on_click = move |ev: web_sys::MouseEvent| {
        ev.stop_propagation();
        runtime.dispatch_action(DesktopAction::OpenIconPanel { panel });
    };

    view! {
        <div
            class=move || {
                let mut classes = format!("desktop-shortcut shortcut-{}", panel.slug());
                if is_selected.get() {
                    classes.push_str(" selected");
                }
                if is_dragging.get() {
                    classes.push_str(" dragging");
                }
                classes
            }
            style=move || {
                let pos = position.get();
                format!("left:{}px;top:{}px;", pos.x, pos.y)
            }
            title=format!("Open {}", panel.title())
            on:pointerdown=on_pointer_down
            on:click=on_click
        >
            <div class="shortcut-glyph" aria-hidden="true">{panel.icon_glyph()}</div>
            <span class="shortcut-label">{panel.icon_label()}</span>
        </div>
    }
}
