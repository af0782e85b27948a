use desktop_app_contract::{AppCommand, AppHost, PanelId};
use leptos::*;
#[cfg(target_arch = "wasm32")]
use wasm_bindgen::JsCast;

use super::{pointer_from_pointer_event, stop_mouse_event};
use crate::model::WindowLifecycle;
use crate::reducer::DesktopAction;
use crate::runtime_context::use_desktop_runtime;

#[cfg(target_arch = "wasm32")]
fn try_set_pointer_capture(ev: &web_sys::PointerEvent) {
    if let Some(target) = ev.current_target() {
        if let Ok(element) = target.dyn_into::<web_sys::Element>() {
            let _ = element.set_pointer_capture(ev.pointer_id());
        }
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn try_set_pointer_capture(_: &web_sys::PointerEvent) {}

#[component]
pub(super) fn DesktopWindow(panel: PanelId) -> impl IntoView {
    let runtime = use_desktop_runtime();

    let window = Signal::derive(move || *runtime.state.get().window(panel));
    let is_maximized =
        Signal::derive(move || window.get().lifecycle == WindowLifecycle::Maximized);

    let focus = move |_: web_sys::PointerEvent| {
        if !window.get_untracked().is_focused {
            runtime.dispatch_action(DesktopAction::FocusWindow { panel });
        }
    };
    let minimize = move |_| runtime.dispatch_action(DesktopAction::MinimizeWindow { panel });
    let close = move |_| runtime.dispatch_action(DesktopAction::ClosePanel { panel });
    let toggle_maximize = move |_| {
        if is_maximized.get_untracked() {
            runtime.dispatch_action(DesktopAction::RestoreWindow { panel });
        } else {
            runtime.dispatch_action(DesktopAction::MaximizeWindow {
                panel,
                viewport: runtime.host.get_value().maximize_viewport_rect(),
            });
        }
    };
    let begin_move = move |ev: web_sys::PointerEvent| {
        if ev.pointer_type() == "mouse" && ev.button() != 0 {
            return;
        }
        if ev.pointer_type() != "mouse" && !ev.is_primary() {
            return;
        }
        try_set_pointer_capture(&ev);
        ev.prevent_default();
        runtime.dispatch_action(DesktopAction::BeginMove {
            panel,
            pointer: pointer_from_pointer_event(&ev),
        });
    };
    let titlebar_double_click = move |ev: web_sys::MouseEvent| {
        stop_mouse_event(&ev);
        runtime.dispatch_action(DesktopAction::CenterWindow {
            panel,
            viewport: runtime.host.get_value().viewport_rect(),
        });
    };
    let begin_resize = move |ev: web_sys::PointerEvent| {
        if ev.pointer_type() == "mouse" && ev.button() != 0 {
            return;
        }
        try_set_pointer_capture(&ev);
        ev.prevent_default();
        ev.stop_propagation();
        runtime.dispatch_action(DesktopAction::BeginResize {
            panel,
            pointer: pointer_from_pointer_event(&ev),
        });
    };

    let section_class = move || {
        let win = window.get();
        let mut classes = format!("desktop-window window-{}", panel.slug());
        if win.is_focused {
            classes.push_str(" focused");
        }
        match win.lifecycle {
            WindowLifecycle::Minimized => classes.push_str(" minimized"),
            WindowLifecycle::Maximized => classes.push_str(" maximized"),
            WindowLifecycle::Closed | WindowLifecycle::Normal => {}
        }
        classes
    };
    // Minimized windows stay in the tree (hidden) so panel state survives minimize/restore.
    let section_style = move || {
        let win = window.get();
        format!(
            "left:{}px;top:{}px;width:{}px;height:{}px;z-index:{};{}",
            win.rect.x,
            win.rect.y,
            win.rect.w,
            win.rect.h,
            win.z_index,
            if win.lifecycle == WindowLifecycle::Minimized {
                "display:none;"
            } else {
                ""
            }
        )
    };

    view! {
        <section
            class=section_class
            style=section_style
            on:pointerdown=focus
            role="dialog"
            aria-label=panel.title()
        >
            <header
                class="titlebar"
                on:pointerdown=begin_move
                on:dblclick=titlebar_double_click
            >
                <div class="titlebar-controls">
                    <button
                        class="titlebar-dot dot-close"
                        aria-label="Close window"
                        on:pointerdown=move |ev: web_sys::PointerEvent| {
                            ev.prevent_default();
                            ev.stop_propagation();
                        }
                        on:mousedown=move |ev| stop_mouse_event(&ev)
                        on:click=move |ev| {
                            stop_mouse_event(&ev);
                            close(ev);
                        }
                    >
                        "\u{00d7}"
                    </button>
                    <button
                        class="titlebar-dot dot-minimize"
                        aria-label="Minimize window"
                        on:pointerdown=move |ev: web_sys::PointerEvent| {
                            ev.prevent_default();
                            ev.stop_propagation();
                        }
                        on:mousedown=move |ev| stop_mouse_event(&ev)
                        on:click=move |ev| {
                            stop_mouse_event(&ev);
                            minimize(ev);
                        }
                    >
                        "\u{2212}"
                    </button>
                    <button
                        class="titlebar-dot dot-maximize"
                        aria-label=move || {
                            if is_maximized.get() {
                                "Restore window"
                            } else {
                                "Maximize window"
                            }
                        }
                        on:pointerdown=move |ev: web_sys::PointerEvent| {
                            ev.prevent_default();
                            ev.stop_propagation();
                        }
                        on:mousedown=move |ev| stop_mouse_event(&ev)
                        on:click=move |ev| {
                            stop_mouse_event(&ev);
                            toggle_maximize(ev);
                        }
                    >
                        "\u{25a1}"
                    </button>
                </div>
                <span class="titlebar-title">{panel.title()}</span>
                <div class="titlebar-spacer"></div>
            </header>
            <div class="window-body">
                <WindowBody panel=panel />
            </div>
            <Show when=move || !is_maximized.get() fallback=|| ()>
                <div
                    class="resize-handle resize-bottom-right"
                    aria-hidden="true"
                    on:pointerdown=begin_resize
                />
            </Show>
        </section>
    }
}

#[component]
fn WindowBody(panel: PanelId) -> impl IntoView {
    let runtime = use_desktop_runtime();
    let services = runtime.host.get_value().app_services();
    let host = AppHost::new(Callback::new(move |command: AppCommand| {
        runtime.dispatch_action(DesktopAction::HandleAppCommand { panel, command });
    }));

    match panel {
        PanelId::Terminal => view! {
            <desktop_app_terminal::TerminalApp host=host />
        }
        .into_view(),
        PanelId::Explorer => view! {
            <desktop_app_explorer::ExplorerApp services=services />
        }
        .into_view(),
        PanelId::Settings => {
            let theme = Signal::derive(move || runtime.state.get().theme);
            let sound_enabled = Signal::derive(move || runtime.state.get().sound_enabled);
            view! {
                <desktop_app_settings::SettingsApp
                    host=host
                    theme=theme
                    sound_enabled=sound_enabled
                />
            }
            .into_view()
        }
    }
}
