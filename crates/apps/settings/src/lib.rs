//! Settings desktop app: theme selection and the sound-effects toggle.
//!
//! The panel owns no state of its own; it reads the desktop-level theme and sound flag through
//! injected signals and mutates them with [`AppCommand`] values, so every consumer (window
//! chrome, terminal cues) observes the change at once.

#![warn(missing_docs, rustdoc::broken_intra_doc_links)]

use desktop_app_contract::{AppCommand, AppHost, ThemeMode};
use leptos::*;
use platform_host::SoundEffect;

#[component]
/// Settings app window contents.
pub fn SettingsApp(
    /// Command bridge to the desktop runtime.
    host: AppHost,
    /// Current desktop theme.
    theme: Signal<ThemeMode>,
    /// Current sound-effects toggle.
    sound_enabled: Signal<bool>,
) -> impl IntoView {
    let host_for_dark = host.clone();
    let host_for_light = host.clone();
    let host_for_sound = host.clone();

    view! {
        <div class="settings-content">
            <section class="settings-section">
                <h3>"Appearance"</h3>
                <div class="settings-row">
                    <span class="settings-label">"Theme"</span>
                    <div class="settings-options">
                        <button
                            type="button"
                            class=move || if theme.get() == ThemeMode::Dark { "active" } else { "" }
                            on:click=move |_| {
                                host_for_dark.send(AppCommand::SetTheme(ThemeMode::Dark));
                                host_for_dark.send(AppCommand::PlaySound(SoundEffect::Click));
                            }
                        >
                            "Dark"
                        </button>
                        <button
                            type="button"
                            class=move || if theme.get() == ThemeMode::Light { "active" } else { "" }
                            on:click=move |_| {
                                host_for_light.send(AppCommand::SetTheme(ThemeMode::Light));
                                host_for_light.send(AppCommand::PlaySound(SoundEffect::Click));
                            }
                        >
                            "Light"
                        </button>
                    </div>
                </div>
            </section>

            <section class="settings-section">
                <h3>"Sound"</h3>
                <div class="settings-row">
                    <span class="settings-label">"Sound Effects"</span>
                    <button
                        type="button"
                        class=move || if sound_enabled.get() { "toggle on" } else { "toggle" }
                        on:click=move |_| {
                            host_for_sound
                                .send(AppCommand::SetSoundEnabled(!sound_enabled.get_untracked()));
                        }
                    >
                        {move || if sound_enabled.get() { "Enabled" } else { "Disabled" }}
                    </button>
                </div>
            </section>

            <section class="settings-section settings-summary">
                <div>{move || format!("Theme: {}", theme.get().label())}</div>
                <div>{move || {
                    format!(
                        "Sound: {}",
                        if sound_enabled.get() { "On" } else { "Off" }
                    )
                }}</div>
            </section>
        </div>
    }
}
