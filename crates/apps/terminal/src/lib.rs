//! Terminal desktop app: a static command table over an in-memory transcript.
//!
//! Commands resolve against a fixed table keyed by the lowercased, trimmed input; side-effecting
//! commands go back to the desktop runtime through the injected [`AppHost`]. The transcript and
//! input buffer live only in this component, so closing the window destroys them.

#![warn(missing_docs, rustdoc::broken_intra_doc_links)]

mod commands;

use desktop_app_contract::{
    panel_primary_input_dom_id, AppCommand, AppHost, PanelId,
};
use leptos::ev::KeyboardEvent;
use leptos::*;
use platform_host::SoundEffect;

pub use commands::{evaluate_command, next_history_cursor, CommandOutcome, HistoryNavigation};

#[derive(Debug, Clone, PartialEq, Eq)]
enum TranscriptEntry {
    Prompt { command: String },
    Output { text: String },
}

const PROMPT_LABEL: &str = "user@portfolio:~$";

fn current_date_time_text() -> String {
    js_sys::Date::new_0()
        .to_locale_string("en-US", &wasm_bindgen::JsValue::UNDEFINED)
        .as_string()
        .unwrap_or_default()
}

/// Renders one output block, turning `http…` words into links.
fn output_view(text: String) -> View {
    let words: Vec<String> = text.split(' ').map(str::to_string).collect();
    let last = words.len().saturating_sub(1);
    words
        .into_iter()
        .enumerate()
        .map(|(index, word)| {
            let trailing_space = if index < last { " " } else { "" };
            if word.starts_with("http") {
                view! {
                    <a href=word.clone() target="_blank" rel="noopener noreferrer">{word}</a>
                    {trailing_space}
                }
                .into_view()
            } else {
                view! { {format!("{word}{trailing_space}")} }.into_view()
            }
        })
        .collect_view()
}

#[component]
/// Terminal app window contents.
pub fn TerminalApp(
    /// Command bridge to the desktop runtime.
    host: AppHost,
) -> impl IntoView {
    let input = create_rw_signal(String::new());
    let transcript = create_rw_signal(Vec::<TranscriptEntry>::new());
    let command_history = create_rw_signal(Vec::<String>::new());
    let history_cursor = create_rw_signal::<Option<usize>>(None);
    let show_video = create_rw_signal(false);
    let input_id = panel_primary_input_dom_id(PanelId::Terminal);

    let clear_transcript = move || {
        transcript.set(Vec::new());
        command_history.set(Vec::new());
        history_cursor.set(None);
    };

    let submit_command = {
        let host = host.clone();
        move |raw: String| {
            if raw.trim().is_empty() {
                return;
            }

            command_history.update(|history| history.push(raw.clone()));
            history_cursor.set(None);
            input.set(String::new());

            let outcome = evaluate_command(&raw);
            if outcome == CommandOutcome::Clear {
                clear_transcript();
                host.send(AppCommand::PlaySound(SoundEffect::Click));
                return;
            }

            transcript.update(|entries| {
                entries.push(TranscriptEntry::Prompt { command: raw.clone() });
            });
            match outcome {
                CommandOutcome::Clear => {}
                CommandOutcome::Text(text) => transcript.update(|entries| {
                    entries.push(TranscriptEntry::Output { text });
                }),
                CommandOutcome::OpenPanel { panel, output } => {
                    transcript.update(|entries| {
                        entries.push(TranscriptEntry::Output {
                            text: output.to_string(),
                        });
                    });
                    host.send(AppCommand::OpenPanel(panel));
                }
                CommandOutcome::ShowVideo => show_video.set(true),
                CommandOutcome::HideVideo { output } => {
                    show_video.set(false);
                    transcript.update(|entries| {
                        entries.push(TranscriptEntry::Output {
                            text: output.to_string(),
                        });
                    });
                }
                CommandOutcome::Date => transcript.update(|entries| {
                    entries.push(TranscriptEntry::Output {
                        text: current_date_time_text(),
                    });
                }),
                CommandOutcome::Exit { output } => {
                    transcript.update(|entries| {
                        entries.push(TranscriptEntry::Output {
                            text: output.to_string(),
                        });
                    });
                    host.send(AppCommand::CloseSelf);
                }
                CommandOutcome::NotFound { message } => transcript.update(|entries| {
                    entries.push(TranscriptEntry::Output { text: message });
                }),
            }
        }
    };

    let navigate_history = move |direction: i32| {
        let history = command_history.get_untracked();
        match next_history_cursor(history.len(), history_cursor.get_untracked(), direction) {
            HistoryNavigation::Unchanged => {}
            HistoryNavigation::Select(index) => {
                history_cursor.set(Some(index));
                input.set(history[index].clone());
            }
            HistoryNavigation::ClearInput => {
                history_cursor.set(None);
                input.set(String::new());
            }
        }
    };

    let submit_on_enter = submit_command.clone();
    let on_keydown = move |ev: KeyboardEvent| match ev.key().as_str() {
        "Enter" => submit_on_enter(input.get_untracked()),
        "ArrowUp" => {
            ev.prevent_default();
            navigate_history(-1);
        }
        "ArrowDown" => {
            ev.prevent_default();
            navigate_history(1);
        }
        "Escape" => {
            if show_video.get_untracked() {
                show_video.set(false);
                transcript.update(|entries| {
                    entries.push(TranscriptEntry::Output {
                        text: "Video closed. Back to terminal!".to_string(),
                    });
                });
            }
        }
        _ => {}
    };

    let indexed_entries = move || {
        transcript
            .get()
            .into_iter()
            .enumerate()
            .collect::<Vec<_>>()
    };

    view! {
        <div class="terminal-content">
            <div class="terminal-welcome">
                <div class="terminal-welcome-title">"Brage Stofringshaug - Developer"</div>
                <div>"Welcome to my terminal, have a look around!"</div>
                <div>"Type 'help' to see available commands."</div>
            </div>

            <div class="terminal-lines" role="log" aria-live="polite">
                <For each=indexed_entries key=|(idx, _)| *idx let:entry>
                    {match entry.1 {
                        TranscriptEntry::Prompt { command } => view! {
                            <div class="terminal-prompt-line">
                                <span class="terminal-prompt">{PROMPT_LABEL}</span>
                                " "
                                {command}
                            </div>
                        }
                        .into_view(),
                        TranscriptEntry::Output { text } => view! {
                            <div class="terminal-output">{output_view(text)}</div>
                        }
                        .into_view(),
                    }}
                </For>
            </div>

            <Show when=move || show_video.get() fallback=|| ()>
                <div class="terminal-video">
                    <div class="terminal-video-title">
                        "Rick Astley - Never Gonna Give You Up"
                    </div>
                    <iframe
                        src="https://www.youtube.com/embed/dQw4w9WgXcQ?autoplay=1&mute=0"
                        title="Rick Astley - Never Gonna Give You Up"
                        allow="accelerometer; autoplay; clipboard-write; encrypted-media; gyroscope; picture-in-picture"
                    ></iframe>
                    <div class="terminal-video-hint">
                        "Press ESC or type 'closevideo' to close the video"
                    </div>
                </div>
            </Show>

            <div class="terminal-input-row">
                <span class="terminal-prompt">{PROMPT_LABEL}</span>
                <input
                    id=input_id
                    class="terminal-input"
                    type="text"
                    value=move || input.get()
                    on:input=move |ev| input.set(event_target_value(&ev))
                    on:keydown=on_keydown
                    autocomplete="off"
                    spellcheck="false"
                />
                <span class="cursor-blink" aria-hidden="true">"|"</span>
            </div>
        </div>
    }
}
