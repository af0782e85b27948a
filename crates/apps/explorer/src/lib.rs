//! Remote file browser desktop app backed by the injected file-browsing service.
//!
//! Every directory navigation fetches a fresh listing; there is no cache. Responses carry the
//! sequence number of the request that issued them, and anything that is not the latest issued
//! request for this panel is discarded, so a slow response can never overwrite a newer
//! navigation's state.

#![warn(missing_docs, rustdoc::broken_intra_doc_links)]

mod navigation;

use desktop_app_contract::AppServices;
use leptos::*;
use platform_host::{
    format_file_size, preview_kind, PreviewKind, RemoteFileEntry,
};

pub use navigation::PathStack;

const CONTENT_ERROR_PLACEHOLDER: &str = "Error loading file content";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ViewMode {
    List,
    Grid,
}

fn entry_glyph(entry: &RemoteFileEntry) -> &'static str {
    if entry.is_dir() {
        return "\u{1F4C1}";
    }
    match entry.extension.as_deref() {
        Some("pdf" | "doc" | "docx") => "\u{1F4D5}",
        extension => match preview_kind(extension) {
            PreviewKind::Image => "\u{1F5BC}",
            PreviewKind::Text => "\u{1F4C4}",
            PreviewKind::Download => "\u{1F4C4}",
        },
    }
}

fn kind_label(entry: &RemoteFileEntry) -> &'static str {
    if entry.is_dir() {
        return "Folder";
    }
    match entry.extension.as_deref() {
        Some("pdf" | "doc" | "docx") => "Document",
        Some("js" | "ts" | "tsx" | "jsx" | "py" | "java" | "cpp" | "c" | "cs" | "php" | "rb"
        | "go") => "Code",
        extension => match preview_kind(extension) {
            PreviewKind::Image => "Image",
            PreviewKind::Text => "Text",
            PreviewKind::Download => "File",
        },
    }
}

fn format_modified(unix_ms: u64) -> String {
    let date = js_sys::Date::new(&wasm_bindgen::JsValue::from_f64(unix_ms as f64));
    let day = date
        .to_locale_date_string("en-US", &wasm_bindgen::JsValue::UNDEFINED)
        .as_string()
        .unwrap_or_default();
    let time = date
        .to_locale_time_string("en-US")
        .as_string()
        .unwrap_or_default();
    format!("{day} {time}")
}

fn entry_summary(entry: &RemoteFileEntry) -> String {
    if entry.is_dir() {
        "Folder".to_string()
    } else {
        format!(
            "{} \u{2022} {}",
            format_file_size(entry.size.unwrap_or(0)),
            format_modified(entry.last_modified_unix_ms)
        )
    }
}

#[component]
/// File explorer app window contents.
pub fn ExplorerApp(
    /// Injected platform services (file browsing).
    services: AppServices,
) -> impl IntoView {
    let path_stack = create_rw_signal(PathStack::default());
    let entries = create_rw_signal(Vec::<RemoteFileEntry>::new());
    let loading = create_rw_signal(false);
    let selected = create_rw_signal::<Option<RemoteFileEntry>>(None);
    let file_content = create_rw_signal(String::new());
    let content_loading = create_rw_signal(false);
    let image_preview = create_rw_signal(String::new());
    let view_mode = create_rw_signal(ViewMode::List);

    // Monotonic request tags; a response is applied only if it is the latest issued.
    let listing_seq = create_rw_signal(0u64);
    let content_seq = create_rw_signal(0u64);

    let load_listing = {
        let services = services.clone();
        move |path: String| {
            let seq = listing_seq.get_untracked() + 1;
            listing_seq.set(seq);
            loading.set(true);
            let services = services.clone();
            spawn_local(async move {
                let result = services.files.list_dir(&path).await;
                if listing_seq.get_untracked() != seq {
                    return;
                }
                match result {
                    Ok(listing) => entries.set(listing.files),
                    Err(err) => {
                        logging::warn!("explorer listing failed: {err}");
                        entries.set(Vec::new());
                    }
                }
                loading.set(false);
            });
        }
    };

    let load_content = {
        let services = services.clone();
        move |path: String| {
            let seq = content_seq.get_untracked() + 1;
            content_seq.set(seq);
            content_loading.set(true);
            let services = services.clone();
            spawn_local(async move {
                let result = services.files.read_text_file(&path).await;
                if content_seq.get_untracked() != seq {
                    return;
                }
                match result {
                    Ok(content) => file_content.set(content),
                    Err(err) => {
                        logging::warn!("explorer content failed: {err}");
                        file_content.set(CONTENT_ERROR_PLACEHOLDER.to_string());
                    }
                }
                content_loading.set(false);
            });
        }
    };

    let clear_preview = move || {
        selected.set(None);
        file_content.set(String::new());
        image_preview.set(String::new());
    };

    let load_listing_initial = load_listing.clone();
    create_effect(move |started: Option<()>| {
        if started.is_none() {
            load_listing_initial(path_stack.get_untracked().current());
        }
    });

    let load_listing_for_open = load_listing.clone();
    let services_for_open = services.clone();
    let load_content_for_open = load_content.clone();
    let open_entry = move |entry: RemoteFileEntry| {
        if entry.is_dir() {
            path_stack.update(|stack| stack.push(entry.name.clone()));
            clear_preview();
            load_listing_for_open(path_stack.get_untracked().current());
            return;
        }

        match preview_kind(entry.extension.as_deref()) {
            PreviewKind::Text => {
                image_preview.set(String::new());
                load_content_for_open(entry.path.clone());
            }
            PreviewKind::Image => {
                file_content.set(String::new());
                image_preview.set(services_for_open.files.asset_url(&entry.path));
            }
            PreviewKind::Download => {
                file_content.set(String::new());
                image_preview.set(String::new());
            }
        }
        selected.set(Some(entry));
    };

    let load_listing_for_back = load_listing.clone();
    let go_back = move |_| {
        let mut changed = false;
        path_stack.update(|stack| changed = stack.pop());
        if changed {
            clear_preview();
            load_listing_for_back(path_stack.get_untracked().current());
        }
    };

    let services_for_download = services.clone();
    let download_href = move |path: &str| services_for_download.files.asset_url(path);

    let open_for_list = open_entry.clone();
    let open_for_grid = open_entry.clone();
    let download_for_list = download_href.clone();
    let download_for_grid = download_href.clone();
    let download_for_preview = download_href.clone();

    view! {
        <div class="explorer-content">
            <div class="explorer-toolbar">
                <button
                    type="button"
                    class="explorer-back"
                    disabled=move || !path_stack.get().can_go_back()
                    on:click=go_back
                >
                    "\u{2190} Back"
                </button>
                <span class="explorer-path">{move || path_stack.get().breadcrumb()}</span>
                <div class="explorer-view-modes">
                    <button
                        type="button"
                        class=move || if view_mode.get() == ViewMode::List { "active" } else { "" }
                        on:click=move |_| view_mode.set(ViewMode::List)
                    >
                        "List"
                    </button>
                    <button
                        type="button"
                        class=move || if view_mode.get() == ViewMode::Grid { "active" } else { "" }
                        on:click=move |_| view_mode.set(ViewMode::Grid)
                    >
                        "Grid"
                    </button>
                </div>
            </div>

            <div class="explorer-workspace">
                <div class="explorer-pane">
                    <Show
                        when=move || !loading.get()
                        fallback=|| view! { <div class="explorer-loading">"Loading files..."</div> }
                    >
                        {
                            let open_for_list = open_for_list.clone();
                            let open_for_grid = open_for_grid.clone();
                            let download_for_list = download_for_list.clone();
                            let download_for_grid = download_for_grid.clone();
                            move || {
                            let open_for_list = open_for_list.clone();
                            let open_for_grid = open_for_grid.clone();
                            let download_for_list = download_for_list.clone();
                            let download_for_grid = download_for_grid.clone();
                            match view_mode.get() {
                                ViewMode::List => view! {
                                    <div class="explorer-list">
                                        <For each=move || entries.get() key=|entry| entry.id.clone() let:entry>
                                            {{
                                                let open = open_for_list.clone();
                                                let row_entry = entry.clone();
                                                let download = (!entry.is_dir())
                                                    .then(|| download_for_list(&entry.path));
                                                view! {
                                                    <div class="explorer-row" on:click=move |_| open(row_entry.clone())>
                                                        <span class="entry-glyph" aria-hidden="true">{entry_glyph(&entry)}</span>
                                                        <div class="entry-meta">
                                                            <div class="entry-name">{entry.name.clone()}</div>
                                                            <div class="entry-summary">{entry_summary(&entry)}</div>
                                                        </div>
                                                        {download.map(|href| view! {
                                                            <a
                                                                class="entry-download"
                                                                href=href
                                                                download=entry.name.clone()
                                                                title="Download file"
                                                                on:click=move |ev: web_sys::MouseEvent| ev.stop_propagation()
                                                            >
                                                                "\u{2193}"
                                                            </a>
                                                        })}
                                                    </div>
                                                }
                                            }}
                                        </For>
                                    </div>
                                }
                                .into_view(),
                                ViewMode::Grid => view! {
                                    <div class="explorer-grid">
                                        <For each=move || entries.get() key=|entry| entry.id.clone() let:entry>
                                            {{
                                                let open = open_for_grid.clone();
                                                let cell_entry = entry.clone();
                                                let download = (!entry.is_dir())
                                                    .then(|| download_for_grid(&entry.path));
                                                view! {
                                                    <div class="explorer-cell" on:click=move |_| open(cell_entry.clone())>
                                                        <span class="entry-glyph entry-glyph-lg" aria-hidden="true">{entry_glyph(&entry)}</span>
                                                        <div class="entry-name" title=entry.name.clone()>{entry.name.clone()}</div>
                                                        <div class="entry-summary">
                                                            {if entry.is_dir() {
                                                                "Folder".to_string()
                                                            } else {
                                                                format_file_size(entry.size.unwrap_or(0))
                                                            }}
                                                        </div>
                                                        {download.map(|href| view! {
                                                            <a
                                                                class="entry-download"
                                                                href=href
                                                                download=entry.name.clone()
                                                                title="Download file"
                                                                on:click=move |ev: web_sys::MouseEvent| ev.stop_propagation()
                                                            >
                                                                "Download"
                                                            </a>
                                                        })}
                                                    </div>
                                                }
                                            }}
                                        </For>
                                    </div>
                                }
                                .into_view(),
                            }
                        }}
                    </Show>
                </div>

                <Show when=move || selected.get().is_some() fallback=|| ()>
                    {
                        let download_for_preview = download_for_preview.clone();
                        move || {
                        let entry = selected.get().expect("selected entry while shown");
                        let download = download_for_preview(&entry.path);
                        view! {
                            <aside class="explorer-preview">
                                <h3 class="preview-name">{entry.name.clone()}</h3>
                                <div class="preview-details">
                                    <div>{format!("Type: {}", kind_label(&entry))}</div>
                                    <div>{format!("Size: {}", format_file_size(entry.size.unwrap_or(0)))}</div>
                                    <div>{format!("Modified: {}", format_modified(entry.last_modified_unix_ms))}</div>
                                    <div class="preview-path" title=entry.path.clone()>
                                        {format!("Path: {}", entry.path)}
                                    </div>
                                </div>
                                <a class="preview-download" href=download download=entry.name.clone()>
                                    "Download File"
                                </a>
                                <div class="preview-body">
                                    <Show
                                        when=move || !content_loading.get()
                                        fallback=|| view! { <div class="explorer-loading">"Loading file content..."</div> }
                                    >
                                        {move || {
                                            let image = image_preview.get();
                                            let content = file_content.get();
                                            if !image.is_empty() {
                                                view! { <img src=image alt="preview" /> }.into_view()
                                            } else if !content.is_empty() {
                                                view! { <pre class="preview-text">{content}</pre> }.into_view()
                                            } else {
                                                view! {
                                                    <div class="preview-empty">
                                                        "Click download to get this file"
                                                    </div>
                                                }
                                                .into_view()
                                            }
                                        }}
                                    </Show>
                                </div>
                            </aside>
                        }
                            .into_view()
                    }}
                </Show>
            </div>

            <div class="app-statusbar">
                <span>{move || format!("{} item(s)", entries.get().len())}</span>
                <span>{move || if loading.get() { "Loading" } else { "Ready" }}</span>
            </div>
        </div>
    }
}
