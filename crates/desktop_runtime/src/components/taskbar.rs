use std::time::Duration;

use leptos::*;

use crate::model::WindowLifecycle;
use crate::reducer::DesktopAction;
use crate::runtime_context::use_desktop_runtime;

fn current_clock_text() -> String {
    js_sys::Date::new_0()
        .to_locale_time_string("en-US")
        .as_string()
        .unwrap_or_default()
}

#[component]
pub(super) fn Taskbar() -> impl IntoView {
    let runtime = use_desktop_runtime();
    let state = runtime.state;

    let clock = create_rw_signal(current_clock_text());
    if let Ok(interval) =
        set_interval_with_handle(move || clock.set(current_clock_text()), Duration::from_secs(1))
    {
        on_cleanup(move || interval.clear());
    }

    let minimized_panels = move || {
        state
            .get()
            .windows
            .iter()
            .filter(|w| w.lifecycle == WindowLifecycle::Minimized)
            .map(|w| w.panel)
            .collect::<Vec<_>>()
    };

    view! {
        <div class="taskbar">
            <div class="taskbar-windows">
                <For each=minimized_panels key=|panel| panel.slug() let:panel>
                    <button
                        type="button"
                        class="taskbar-button"
                        title=format!("Restore {}", panel.title())
                        on:click=move |_| {
                            runtime.dispatch_action(DesktopAction::RestoreWindow { panel });
                        }
                    >
                        <span class="taskbar-glyph" aria-hidden="true">{panel.icon_glyph()}</span>
                        {panel.title()}
                    </button>
                </For>
            </div>
            <div class="taskbar-status">
                <span>"Portfolio OS v1.0"</span>
                <span>{move || clock.get()}</span>
            </div>
        </div>
    }
}
