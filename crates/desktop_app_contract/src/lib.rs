//! Shared contract types between the desktop window manager runtime and the built-in panels.
//!
//! Panels never mutate desktop state directly: they send [`AppCommand`] values through an
//! injected [`AppHost`], and they reach platform capabilities (audio, file browsing) through the
//! service bundle in [`AppServices`]. The runtime owns the reducer that interprets commands.

#![warn(missing_docs, rustdoc::broken_intra_doc_links)]

use std::rc::Rc;

use leptos::{Callable, Callback};
use platform_host::{AudioPort, FileBrowserService, SoundEffect};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
/// The fixed set of desktop panels.
pub enum PanelId {
    /// Terminal panel.
    Terminal,
    /// Remote file explorer panel.
    Explorer,
    /// Settings panel.
    Settings,
}

impl PanelId {
    /// All panels in desktop-icon order.
    pub const ALL: [PanelId; 3] = [PanelId::Terminal, PanelId::Explorer, PanelId::Settings];

    /// Window/taskbar title.
    pub fn title(self) -> &'static str {
        match self {
            Self::Terminal => "Terminal",
            Self::Explorer => "File Explorer",
            Self::Settings => "Settings",
        }
    }

    /// Desktop icon label.
    pub fn icon_label(self) -> &'static str {
        match self {
            Self::Terminal => "Terminal",
            Self::Explorer => "Files",
            Self::Settings => "Settings",
        }
    }

    /// Glyph rendered inside the desktop icon and taskbar button.
    pub fn icon_glyph(self) -> &'static str {
        match self {
            Self::Terminal => ">",
            Self::Explorer => "\u{1F4C1}",
            Self::Settings => "\u{2699}",
        }
    }

    /// Stable DOM/CSS slug.
    pub fn slug(self) -> &'static str {
        match self {
            Self::Terminal => "terminal",
            Self::Explorer => "explorer",
            Self::Settings => "settings",
        }
    }
}

impl std::fmt::Display for PanelId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.slug())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
/// Desktop-wide color theme selected in the settings panel.
pub enum ThemeMode {
    /// Dark theme (default).
    Dark,
    /// Light theme.
    Light,
}

impl Default for ThemeMode {
    fn default() -> Self {
        Self::Dark
    }
}

impl ThemeMode {
    /// Value rendered into the desktop root's `data-theme` attribute.
    pub fn attribute_value(self) -> &'static str {
        match self {
            Self::Dark => "dark",
            Self::Light => "light",
        }
    }

    /// Human-readable label for the settings summary.
    pub fn label(self) -> &'static str {
        match self {
            Self::Dark => "Dark Mode",
            Self::Light => "Light Mode",
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
/// Commands a panel may send to the desktop runtime.
pub enum AppCommand {
    /// Open (or restore) another panel's window.
    OpenPanel(PanelId),
    /// Close the sending panel's window.
    CloseSelf,
    /// Change the desktop theme.
    SetTheme(ThemeMode),
    /// Enable or disable UI sound effects.
    SetSoundEnabled(bool),
    /// Play a named sound effect, subject to the sound toggle.
    PlaySound(SoundEffect),
}

#[derive(Clone)]
/// Command bridge handed to a mounted panel.
pub struct AppHost {
    command_sender: Callback<AppCommand>,
}

impl AppHost {
    /// Creates a host bridge around a runtime command callback.
    pub fn new(command_sender: Callback<AppCommand>) -> Self {
        Self { command_sender }
    }

    /// Sends a command to the desktop runtime.
    pub fn send(&self, command: AppCommand) {
        self.command_sender.call(command);
    }
}

#[derive(Clone)]
/// Capability bundle injected into panels at mount time.
pub struct AppServices {
    /// Shared audio output port.
    pub audio: Rc<dyn AudioPort>,
    /// File-browsing service behind the explorer panel.
    pub files: Rc<dyn FileBrowserService>,
}

/// Returns the DOM id a panel renders on its primary text input so the runtime can focus it
/// when the window opens or is raised.
pub fn panel_primary_input_dom_id(panel: PanelId) -> String {
    format!("panel-primary-input-{}", panel.slug())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn panel_metadata_is_stable() {
        assert_eq!(PanelId::Terminal.title(), "Terminal");
        assert_eq!(PanelId::Explorer.icon_label(), "Files");
        assert_eq!(PanelId::Settings.slug(), "settings");
        assert_eq!(PanelId::ALL.len(), 3);
    }

    #[test]
    fn theme_mode_round_trips_through_serde() {
        let raw = serde_json::to_string(&ThemeMode::Light).expect("serialize");
        assert_eq!(raw, "\"light\"");
        let parsed: ThemeMode = serde_json::from_str(&raw).expect("deserialize");
        assert_eq!(parsed, ThemeMode::Light);
        assert_eq!(ThemeMode::default(), ThemeMode::Dark);
    }

    #[test]
    fn primary_input_dom_id_embeds_the_panel_slug() {
        assert_eq!(
            panel_primary_input_dom_id(PanelId::Terminal),
            "panel-primary-input-terminal"
        );
    }
}
