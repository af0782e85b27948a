//! Reducer actions, side-effect intents, and transition logic for the desktop runtime.
//!
//! Every pointer/keyboard interaction and panel command funnels into [`reduce_desktop`]; it is
//! the authoritative transition engine for window lifecycle, gestures, icon selection, and
//! shell preferences. Side effects (sound cues, input focus) are returned as intents for the
//! host layer to execute.

use desktop_app_contract::{AppCommand, PanelId, ThemeMode};
use platform_host::SoundEffect;

use crate::model::{
    default_panel_rect, DesktopState, DragSession, IconDragSession, InteractionState,
    PointerPosition, ResizeSession, SelectionDrag, WindowLifecycle, WindowRect,
};
use crate::window_manager::{
    focus_window_internal, icons_within_selection, normalize_window_stack,
    resize_rect_bottom_right, translate_icons,
};

#[derive(Debug, Clone, PartialEq)]
/// Actions accepted by [`reduce_desktop`] to mutate [`DesktopState`].
pub enum DesktopAction {
    /// Open a closed panel, restore it if minimized, or focus it if already visible.
    OpenPanel {
        /// Target panel.
        panel: PanelId,
    },
    /// Open a panel via its desktop icon; ignored inside the post-drag suppression window.
    OpenIconPanel {
        /// Target panel.
        panel: PanelId,
    },
    /// Close a panel's window from any lifecycle state.
    ClosePanel {
        /// Target panel.
        panel: PanelId,
    },
    /// Focus (and raise) a panel's window.
    FocusWindow {
        /// Target panel.
        panel: PanelId,
    },
    /// Minimize a visible window, leaving its geometry unchanged.
    MinimizeWindow {
        /// Target panel.
        panel: PanelId,
    },
    /// Maximize a window into the available viewport, snapshotting its geometry.
    MaximizeWindow {
        /// Target panel.
        panel: PanelId,
        /// Available viewport rectangle (margins and taskbar already subtracted).
        viewport: WindowRect,
    },
    /// Restore a window: minimized → normal unchanged, maximized → pre-maximize snapshot.
    RestoreWindow {
        /// Target panel.
        panel: PanelId,
    },
    /// Center a window over the viewport without changing size or lifecycle.
    CenterWindow {
        /// Target panel.
        panel: PanelId,
        /// Full viewport rectangle.
        viewport: WindowRect,
    },
    /// Begin dragging a window by its title bar.
    BeginMove {
        /// Window being dragged.
        panel: PanelId,
        /// Pointer position at drag start.
        pointer: PointerPosition,
    },
    /// Update an in-progress window drag, clamping to the viewport.
    UpdateMove {
        /// Current pointer position.
        pointer: PointerPosition,
        /// Full viewport rectangle.
        viewport: WindowRect,
    },
    /// End the active window drag.
    EndMove,
    /// Begin resizing a window from its bottom-right handle.
    BeginResize {
        /// Window being resized.
        panel: PanelId,
        /// Pointer position at resize start.
        pointer: PointerPosition,
    },
    /// Update an in-progress resize, flooring at the minimum size and capping at the viewport.
    UpdateResize {
        /// Current pointer position.
        pointer: PointerPosition,
        /// Full viewport rectangle.
        viewport: WindowRect,
    },
    /// End the active window resize.
    EndResize,
    /// Begin a rectangle selection on the desktop background, clearing any prior selection.
    BeginSelection {
        /// Pointer-down origin.
        pointer: PointerPosition,
    },
    /// Track the selection rectangle to the current pointer.
    UpdateSelection {
        /// Current pointer position.
        pointer: PointerPosition,
    },
    /// Finalize the selection: icons whose centers fall in the rectangle become selected.
    EndSelection,
    /// Remove the lingering selection rectangle visual (dispatched after a short delay).
    ClearSelectionRect,
    /// Begin dragging an icon; becomes a group drag when it is part of a multi-selection.
    BeginIconDrag {
        /// Icon under the pointer.
        panel: PanelId,
        /// Pointer position at drag start.
        pointer: PointerPosition,
    },
    /// Update an in-progress icon drag.
    UpdateIconDrag {
        /// Current pointer position.
        pointer: PointerPosition,
    },
    /// End the active icon drag, arming click suppression if the pointer moved.
    EndIconDrag,
    /// Disarm icon click suppression (dispatched after a short delay).
    ClearIconOpenSuppression,
    /// Change the desktop theme.
    SetTheme {
        /// New theme.
        theme: ThemeMode,
    },
    /// Enable or disable UI sound effects.
    SetSoundEnabled {
        /// New toggle value.
        enabled: bool,
    },
    /// Interpret a command sent by a mounted panel.
    HandleAppCommand {
        /// Sending panel.
        panel: PanelId,
        /// Command payload.
        command: AppCommand,
    },
}

#[derive(Debug, Clone, PartialEq)]
/// Side-effect intents emitted by [`reduce_desktop`] for the host layer to execute.
pub enum RuntimeEffect {
    /// Play a named UI sound effect (already gated on the sound toggle).
    PlaySound(SoundEffect),
    /// Move focus into the panel's primary input.
    FocusPanelInput(PanelId),
}

fn find_window_mut(state: &mut DesktopState, panel: PanelId) -> &mut crate::model::WindowRecord {
    state
        .windows
        .iter_mut()
        .find(|w| w.panel == panel)
        .expect("every panel has a window record")
}

fn push_sound(state: &DesktopState, effects: &mut Vec<RuntimeEffect>, effect: SoundEffect) {
    if state.sound_enabled {
        effects.push(RuntimeEffect::PlaySound(effect));
    }
}

fn open_panel(
    state: &mut DesktopState,
    panel: PanelId,
    effects: &mut Vec<RuntimeEffect>,
) {
    let window = find_window_mut(state, panel);
    match window.lifecycle {
        WindowLifecycle::Closed => {
            window.rect = default_panel_rect(panel);
            window.restore_rect = None;
            window.lifecycle = WindowLifecycle::Normal;
            focus_window_internal(state, panel);
            push_sound(state, effects, SoundEffect::WindowOpen);
            effects.push(RuntimeEffect::FocusPanelInput(panel));
        }
        WindowLifecycle::Minimized => {
            window.lifecycle = WindowLifecycle::Normal;
            focus_window_internal(state, panel);
            push_sound(state, effects, SoundEffect::WindowOpen);
            effects.push(RuntimeEffect::FocusPanelInput(panel));
        }
        WindowLifecycle::Normal | WindowLifecycle::Maximized => {
            focus_window_internal(state, panel);
            effects.push(RuntimeEffect::FocusPanelInput(panel));
        }
    }
}

/// Applies a [`DesktopAction`] to the desktop runtime state and collects resulting side effects.
///
/// Gesture updates without a matching active session are no-ops, which keeps the reducer total:
/// stray pointer events after a gesture ended cannot corrupt state.
pub fn reduce_desktop(
    state: &mut DesktopState,
    interaction: &mut InteractionState,
    action: DesktopAction,
) -> Vec<RuntimeEffect> {
    let mut effects = Vec::new();
    match action {
        DesktopAction::OpenPanel { panel } => {
            open_panel(state, panel, &mut effects);
        }
        DesktopAction::OpenIconPanel { panel } => {
            if !interaction.suppress_icon_open && interaction.icon_drag.is_none() {
                push_sound(state, &mut effects, SoundEffect::Click);
                open_panel(state, panel, &mut effects);
            }
        }
        DesktopAction::ClosePanel { panel } => {
            let window = find_window_mut(state, panel);
            window.lifecycle = WindowLifecycle::Closed;
            window.restore_rect = None;
            window.is_focused = false;
            normalize_window_stack(state);
            push_sound(state, &mut effects, SoundEffect::WindowClose);
        }
        DesktopAction::FocusWindow { panel } => {
            focus_window_internal(state, panel);
            effects.push(RuntimeEffect::FocusPanelInput(panel));
        }
        DesktopAction::MinimizeWindow { panel } => {
            let window = find_window_mut(state, panel);
            if window.lifecycle.is_visible() {
                window.lifecycle = WindowLifecycle::Minimized;
                window.is_focused = false;
            }
            normalize_window_stack(state);
            push_sound(state, &mut effects, SoundEffect::Click);
        }
        DesktopAction::MaximizeWindow { panel, viewport } => {
            let window = find_window_mut(state, panel);
            if window.lifecycle == WindowLifecycle::Normal {
                window.restore_rect = Some(window.rect);
                window.rect = viewport;
                window.lifecycle = WindowLifecycle::Maximized;
                focus_window_internal(state, panel);
            }
            push_sound(state, &mut effects, SoundEffect::Click);
        }
        DesktopAction::RestoreWindow { panel } => {
            let window = find_window_mut(state, panel);
            match window.lifecycle {
                WindowLifecycle::Maximized => {
                    if let Some(restore_rect) = window.restore_rect.take() {
                        window.rect = restore_rect;
                    }
                    window.lifecycle = WindowLifecycle::Normal;
                    focus_window_internal(state, panel);
                    push_sound(state, &mut effects, SoundEffect::Click);
                }
                WindowLifecycle::Minimized => {
                    window.lifecycle = WindowLifecycle::Normal;
                    focus_window_internal(state, panel);
                    push_sound(state, &mut effects, SoundEffect::WindowOpen);
                }
                WindowLifecycle::Closed | WindowLifecycle::Normal => {}
            }
        }
        DesktopAction::CenterWindow { panel, viewport } => {
            let window = find_window_mut(state, panel);
            if window.lifecycle.is_visible() {
                window.rect = window.rect.centered_in(viewport);
            }
        }
        DesktopAction::BeginMove { panel, pointer } => {
            let rect_start = find_window_mut(state, panel).rect;
            focus_window_internal(state, panel);
            interaction.dragging = Some(DragSession {
                panel,
                pointer_start: pointer,
                rect_start,
            });
        }
        DesktopAction::UpdateMove { pointer, viewport } => {
            if let Some(session) = interaction.dragging.clone() {
                let dx = pointer.x - session.pointer_start.x;
                let dy = pointer.y - session.pointer_start.y;
                let window = find_window_mut(state, session.panel);
                if window.lifecycle == WindowLifecycle::Normal {
                    window.rect = session.rect_start.offset(dx, dy).clamped_within(viewport);
                }
            }
        }
        DesktopAction::EndMove => {
            interaction.dragging = None;
        }
        DesktopAction::BeginResize { panel, pointer } => {
            let rect_start = find_window_mut(state, panel).rect;
            focus_window_internal(state, panel);
            interaction.resizing = Some(ResizeSession {
                panel,
                pointer_start: pointer,
                rect_start,
            });
        }
        DesktopAction::UpdateResize { pointer, viewport } => {
            if let Some(session) = interaction.resizing.clone() {
                let dx = pointer.x - session.pointer_start.x;
                let dy = pointer.y - session.pointer_start.y;
                let window = find_window_mut(state, session.panel);
                if window.lifecycle == WindowLifecycle::Normal {
                    window.rect = resize_rect_bottom_right(session.rect_start, dx, dy, viewport);
                }
            }
        }
        DesktopAction::EndResize => {
            interaction.resizing = None;
        }
        DesktopAction::BeginSelection { pointer } => {
            state.selected_icons.clear();
            interaction.completed_selection = None;
            interaction.selecting = Some(SelectionDrag {
                start: pointer,
                current: pointer,
            });
        }
        DesktopAction::UpdateSelection { pointer } => {
            if let Some(selection) = interaction.selecting.as_mut() {
                selection.current = pointer;
            }
        }
        DesktopAction::EndSelection => {
            if let Some(selection) = interaction.selecting.take() {
                state.selected_icons = icons_within_selection(&state.icons, &selection);
                interaction.completed_selection = Some(selection);
            }
        }
        DesktopAction::ClearSelectionRect => {
            interaction.completed_selection = None;
        }
        DesktopAction::BeginIconDrag { panel, pointer } => {
            let is_group_drag = state.icon_is_selected(panel) && state.selected_icons.len() > 1;
            interaction.icon_drag = Some(if is_group_drag {
                IconDragSession::Group {
                    last_pointer: pointer,
                    moved: false,
                }
            } else {
                let icon = state.icon(panel);
                IconDragSession::Single {
                    panel,
                    grab_offset: PointerPosition {
                        x: pointer.x - icon.position.x,
                        y: pointer.y - icon.position.y,
                    },
                    moved: false,
                }
            });
        }
        DesktopAction::UpdateIconDrag { pointer } => match interaction.icon_drag.as_mut() {
            Some(IconDragSession::Single { panel, grab_offset, moved }) => {
                let panel = *panel;
                let target = PointerPosition {
                    x: pointer.x - grab_offset.x,
                    y: pointer.y - grab_offset.y,
                };
                *moved = true;
                if let Some(icon) = state.icons.iter_mut().find(|i| i.panel == panel) {
                    icon.position = target;
                }
            }
            Some(IconDragSession::Group { last_pointer, moved }) => {
                let dx = pointer.x - last_pointer.x;
                let dy = pointer.y - last_pointer.y;
                *last_pointer = pointer;
                *moved = true;
                let selected = state.selected_icons.clone();
                translate_icons(state, &selected, dx, dy);
            }
            None => {}
        },
        DesktopAction::EndIconDrag => {
            if let Some(session) = interaction.icon_drag.take() {
                if session.moved() {
                    interaction.suppress_icon_open = true;
                }
            }
        }
        DesktopAction::ClearIconOpenSuppression => {
            interaction.suppress_icon_open = false;
        }
        DesktopAction::SetTheme { theme } => {
            state.theme = theme;
        }
        DesktopAction::SetSoundEnabled { enabled } => {
            state.sound_enabled = enabled;
            if enabled {
                effects.push(RuntimeEffect::PlaySound(SoundEffect::Click));
            }
        }
        DesktopAction::HandleAppCommand { panel, command } => match command {
            AppCommand::OpenPanel(target) => {
                open_panel(state, target, &mut effects);
            }
            AppCommand::CloseSelf => {
                effects.extend(reduce_desktop(
                    state,
                    interaction,
                    DesktopAction::ClosePanel { panel },
                ));
            }
            AppCommand::SetTheme(theme) => {
                state.theme = theme;
            }
            AppCommand::SetSoundEnabled(enabled) => {
                effects.extend(reduce_desktop(
                    state,
                    interaction,
                    DesktopAction::SetSoundEnabled { enabled },
                ));
            }
            AppCommand::PlaySound(effect) => {
                push_sound(state, &mut effects, effect);
            }
        },
    }

    normalize_window_stack(state);
    effects
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::model::{DesktopState, InteractionState, MIN_WINDOW_HEIGHT, MIN_WINDOW_WIDTH};

    const VIEWPORT: WindowRect = WindowRect { x: 0, y: 0, w: 1280, h: 720 };

    fn open(state: &mut DesktopState, interaction: &mut InteractionState, panel: PanelId) {
        reduce_desktop(state, interaction, DesktopAction::OpenPanel { panel });
    }

    #[test]
    fn opening_a_closed_panel_uses_default_geometry_and_takes_focus() {
        let mut state = DesktopState::default();
        let mut interaction = InteractionState::default();

        open(&mut state, &mut interaction, PanelId::Terminal);

        let win = state.window(PanelId::Terminal);
        assert_eq!(win.lifecycle, WindowLifecycle::Normal);
        assert_eq!(win.rect, default_panel_rect(PanelId::Terminal));
        assert!(win.is_focused);
        assert_eq!(state.focused_panel(), Some(PanelId::Terminal));
    }

    #[test]
    fn reopening_after_close_returns_to_default_geometry() {
        let mut state = DesktopState::default();
        let mut interaction = InteractionState::default();

        open(&mut state, &mut interaction, PanelId::Explorer);
        reduce_desktop(
            &mut state,
            &mut interaction,
            DesktopAction::BeginMove { panel: PanelId::Explorer, pointer: PointerPosition { x: 0, y: 0 } },
        );
        reduce_desktop(
            &mut state,
            &mut interaction,
            DesktopAction::UpdateMove { pointer: PointerPosition { x: 150, y: 90 }, viewport: VIEWPORT },
        );
        reduce_desktop(&mut state, &mut interaction, DesktopAction::EndMove);
        reduce_desktop(
            &mut state,
            &mut interaction,
            DesktopAction::ClosePanel { panel: PanelId::Explorer },
        );
        assert_eq!(state.window(PanelId::Explorer).lifecycle, WindowLifecycle::Closed);

        open(&mut state, &mut interaction, PanelId::Explorer);
        assert_eq!(state.window(PanelId::Explorer).rect, default_panel_rect(PanelId::Explorer));
    }

    #[test]
    fn drag_positions_stay_clamped_to_the_viewport_no_matter_how_far_the_pointer_goes() {
        let mut state = DesktopState::default();
        let mut interaction = InteractionState::default();
        open(&mut state, &mut interaction, PanelId::Terminal);

        reduce_desktop(
            &mut state,
            &mut interaction,
            DesktopAction::BeginMove { panel: PanelId::Terminal, pointer: PointerPosition { x: 60, y: 60 } },
        );

        let far_points = [
            PointerPosition { x: -5000, y: -5000 },
            PointerPosition { x: 50_000, y: 50_000 },
            PointerPosition { x: -1, y: 9999 },
            PointerPosition { x: 640, y: 360 },
        ];
        for pointer in far_points {
            reduce_desktop(
                &mut state,
                &mut interaction,
                DesktopAction::UpdateMove { pointer, viewport: VIEWPORT },
            );
            let rect = state.window(PanelId::Terminal).rect;
            assert!(rect.x >= 0 && rect.x + rect.w <= VIEWPORT.w, "x bound: {rect:?}");
            assert!(rect.y >= 0 && rect.y + rect.h <= VIEWPORT.h, "y bound: {rect:?}");
        }
    }

    #[test]
    fn resize_respects_the_minimum_floor_and_viewport_ceiling() {
        let mut state = DesktopState::default();
        let mut interaction = InteractionState::default();
        open(&mut state, &mut interaction, PanelId::Settings);

        reduce_desktop(
            &mut state,
            &mut interaction,
            DesktopAction::BeginResize { panel: PanelId::Settings, pointer: PointerPosition { x: 600, y: 650 } },
        );
        reduce_desktop(
            &mut state,
            &mut interaction,
            DesktopAction::UpdateResize { pointer: PointerPosition { x: -2000, y: -2000 }, viewport: VIEWPORT },
        );
        let rect = state.window(PanelId::Settings).rect;
        assert_eq!((rect.w, rect.h), (MIN_WINDOW_WIDTH, MIN_WINDOW_HEIGHT));

        reduce_desktop(
            &mut state,
            &mut interaction,
            DesktopAction::UpdateResize { pointer: PointerPosition { x: 5000, y: 5000 }, viewport: VIEWPORT },
        );
        let rect = state.window(PanelId::Settings).rect;
        assert!(rect.x + rect.w <= VIEWPORT.w);
        assert!(rect.y + rect.h <= VIEWPORT.h);
        reduce_desktop(&mut state, &mut interaction, DesktopAction::EndResize);
        assert_eq!(interaction.resizing, None);
    }

    #[test]
    fn maximize_then_restore_round_trips_to_the_exact_prior_geometry() {
        let mut state = DesktopState::default();
        let mut interaction = InteractionState::default();
        open(&mut state, &mut interaction, PanelId::Terminal);

        reduce_desktop(
            &mut state,
            &mut interaction,
            DesktopAction::BeginMove { panel: PanelId::Terminal, pointer: PointerPosition { x: 0, y: 0 } },
        );
        reduce_desktop(
            &mut state,
            &mut interaction,
            DesktopAction::UpdateMove { pointer: PointerPosition { x: 33, y: 71 }, viewport: VIEWPORT },
        );
        reduce_desktop(&mut state, &mut interaction, DesktopAction::EndMove);
        let before = state.window(PanelId::Terminal).rect;

        let available = WindowRect { x: 20, y: 20, w: 1240, h: 620 };
        reduce_desktop(
            &mut state,
            &mut interaction,
            DesktopAction::MaximizeWindow { panel: PanelId::Terminal, viewport: available },
        );
        let win = state.window(PanelId::Terminal);
        assert_eq!(win.lifecycle, WindowLifecycle::Maximized);
        assert_eq!(win.rect, available);
        assert_eq!(win.restore_rect, Some(before));

        reduce_desktop(
            &mut state,
            &mut interaction,
            DesktopAction::RestoreWindow { panel: PanelId::Terminal },
        );
        let win = state.window(PanelId::Terminal);
        assert_eq!(win.lifecycle, WindowLifecycle::Normal);
        assert_eq!(win.rect, before);
        assert_eq!(win.restore_rect, None);
    }

    #[test]
    fn minimize_retains_geometry_and_restore_brings_it_back_unchanged() {
        let mut state = DesktopState::default();
        let mut interaction = InteractionState::default();
        open(&mut state, &mut interaction, PanelId::Explorer);
        let before = state.window(PanelId::Explorer).rect;

        reduce_desktop(
            &mut state,
            &mut interaction,
            DesktopAction::MinimizeWindow { panel: PanelId::Explorer },
        );
        let win = state.window(PanelId::Explorer);
        assert_eq!(win.lifecycle, WindowLifecycle::Minimized);
        assert_eq!(win.rect, before);
        assert!(!win.is_focused);

        reduce_desktop(
            &mut state,
            &mut interaction,
            DesktopAction::RestoreWindow { panel: PanelId::Explorer },
        );
        let win = state.window(PanelId::Explorer);
        assert_eq!(win.lifecycle, WindowLifecycle::Normal);
        assert_eq!(win.rect, before);
        assert!(win.is_focused);
    }

    #[test]
    fn centering_keeps_size_and_lifecycle() {
        let mut state = DesktopState::default();
        let mut interaction = InteractionState::default();
        open(&mut state, &mut interaction, PanelId::Terminal);

        reduce_desktop(
            &mut state,
            &mut interaction,
            DesktopAction::CenterWindow { panel: PanelId::Terminal, viewport: VIEWPORT },
        );
        let win = state.window(PanelId::Terminal);
        assert_eq!(win.lifecycle, WindowLifecycle::Normal);
        assert_eq!((win.rect.w, win.rect.h), (800, 600));
        assert_eq!((win.rect.x, win.rect.y), ((1280 - 800) / 2, (720 - 600) / 2));
    }

    #[test]
    fn rectangle_selection_picks_icons_by_center_and_group_drag_moves_them_together() {
        let mut state = DesktopState::default();
        let mut interaction = InteractionState::default();

        reduce_desktop(
            &mut state,
            &mut interaction,
            DesktopAction::BeginSelection { pointer: PointerPosition { x: 0, y: 0 } },
        );
        reduce_desktop(
            &mut state,
            &mut interaction,
            DesktopAction::UpdateSelection { pointer: PointerPosition { x: 180, y: 120 } },
        );
        reduce_desktop(&mut state, &mut interaction, DesktopAction::EndSelection);

        assert_eq!(state.selected_icons, vec![PanelId::Terminal, PanelId::Explorer]);
        assert!(interaction.completed_selection.is_some());
        reduce_desktop(&mut state, &mut interaction, DesktopAction::ClearSelectionRect);
        assert_eq!(interaction.completed_selection, None);

        let settings_before = state.icon(PanelId::Settings).position;
        reduce_desktop(
            &mut state,
            &mut interaction,
            DesktopAction::BeginIconDrag { panel: PanelId::Terminal, pointer: PointerPosition { x: 50, y: 40 } },
        );
        assert!(matches!(interaction.icon_drag, Some(IconDragSession::Group { .. })));
        reduce_desktop(
            &mut state,
            &mut interaction,
            DesktopAction::UpdateIconDrag { pointer: PointerPosition { x: 75, y: 30 } },
        );
        reduce_desktop(&mut state, &mut interaction, DesktopAction::EndIconDrag);

        assert_eq!(state.icon(PanelId::Terminal).position, PointerPosition { x: 57, y: 22 });
        assert_eq!(state.icon(PanelId::Explorer).position, PointerPosition { x: 153, y: 22 });
        assert_eq!(state.icon(PanelId::Settings).position, settings_before);
        assert!(interaction.suppress_icon_open);
    }

    #[test]
    fn single_icon_drag_follows_the_grab_offset_and_suppresses_the_click() {
        let mut state = DesktopState::default();
        let mut interaction = InteractionState::default();

        reduce_desktop(
            &mut state,
            &mut interaction,
            DesktopAction::BeginIconDrag { panel: PanelId::Settings, pointer: PointerPosition { x: 240, y: 48 } },
        );
        assert!(matches!(interaction.icon_drag, Some(IconDragSession::Single { .. })));
        reduce_desktop(
            &mut state,
            &mut interaction,
            DesktopAction::UpdateIconDrag { pointer: PointerPosition { x: 400, y: 200 } },
        );
        reduce_desktop(&mut state, &mut interaction, DesktopAction::EndIconDrag);

        // Grab offset was (16, 16) from the icon's (224, 32) origin.
        assert_eq!(state.icon(PanelId::Settings).position, PointerPosition { x: 384, y: 184 });
        assert!(interaction.suppress_icon_open);

        reduce_desktop(
            &mut state,
            &mut interaction,
            DesktopAction::OpenIconPanel { panel: PanelId::Settings },
        );
        assert_eq!(state.window(PanelId::Settings).lifecycle, WindowLifecycle::Closed);

        reduce_desktop(&mut state, &mut interaction, DesktopAction::ClearIconOpenSuppression);
        reduce_desktop(
            &mut state,
            &mut interaction,
            DesktopAction::OpenIconPanel { panel: PanelId::Settings },
        );
        assert_eq!(state.window(PanelId::Settings).lifecycle, WindowLifecycle::Normal);
    }

    #[test]
    fn starting_a_selection_clears_the_previous_selection_set() {
        let mut state = DesktopState::default();
        let mut interaction = InteractionState::default();
        state.selected_icons = vec![PanelId::Terminal, PanelId::Explorer];

        reduce_desktop(
            &mut state,
            &mut interaction,
            DesktopAction::BeginSelection { pointer: PointerPosition { x: 600, y: 600 } },
        );
        assert!(state.selected_icons.is_empty());
        reduce_desktop(&mut state, &mut interaction, DesktopAction::EndSelection);
        assert!(state.selected_icons.is_empty());
    }

    #[test]
    fn icon_click_without_a_drag_opens_the_panel() {
        let mut state = DesktopState::default();
        let mut interaction = InteractionState::default();

        reduce_desktop(
            &mut state,
            &mut interaction,
            DesktopAction::BeginIconDrag { panel: PanelId::Terminal, pointer: PointerPosition { x: 40, y: 40 } },
        );
        reduce_desktop(&mut state, &mut interaction, DesktopAction::EndIconDrag);
        assert!(!interaction.suppress_icon_open, "no movement, no suppression");

        reduce_desktop(
            &mut state,
            &mut interaction,
            DesktopAction::OpenIconPanel { panel: PanelId::Terminal },
        );
        assert_eq!(state.window(PanelId::Terminal).lifecycle, WindowLifecycle::Normal);
    }

    #[test]
    fn sound_effects_are_gated_on_the_toggle() {
        let mut state = DesktopState::default();
        let mut interaction = InteractionState::default();

        let effects = reduce_desktop(
            &mut state,
            &mut interaction,
            DesktopAction::OpenPanel { panel: PanelId::Terminal },
        );
        assert!(effects.iter().all(|e| !matches!(e, RuntimeEffect::PlaySound(_))));

        reduce_desktop(
            &mut state,
            &mut interaction,
            DesktopAction::SetSoundEnabled { enabled: true },
        );
        let effects = reduce_desktop(
            &mut state,
            &mut interaction,
            DesktopAction::OpenPanel { panel: PanelId::Explorer },
        );
        assert!(effects.contains(&RuntimeEffect::PlaySound(SoundEffect::WindowOpen)));
    }

    #[test]
    fn app_commands_route_through_the_reducer() {
        let mut state = DesktopState::default();
        let mut interaction = InteractionState::default();
        open(&mut state, &mut interaction, PanelId::Terminal);

        reduce_desktop(
            &mut state,
            &mut interaction,
            DesktopAction::HandleAppCommand {
                panel: PanelId::Terminal,
                command: AppCommand::OpenPanel(PanelId::Explorer),
            },
        );
        assert_eq!(state.window(PanelId::Explorer).lifecycle, WindowLifecycle::Normal);
        assert_eq!(state.focused_panel(), Some(PanelId::Explorer));

        reduce_desktop(
            &mut state,
            &mut interaction,
            DesktopAction::HandleAppCommand {
                panel: PanelId::Terminal,
                command: AppCommand::CloseSelf,
            },
        );
        assert_eq!(state.window(PanelId::Terminal).lifecycle, WindowLifecycle::Closed);

        reduce_desktop(
            &mut state,
            &mut interaction,
            DesktopAction::HandleAppCommand {
                panel: PanelId::Settings,
                command: AppCommand::SetTheme(ThemeMode::Light),
            },
        );
        assert_eq!(state.theme, ThemeMode::Light);
    }

    #[test]
    fn maximized_windows_ignore_drag_and_resize_updates() {
        let mut state = DesktopState::default();
        let mut interaction = InteractionState::default();
        open(&mut state, &mut interaction, PanelId::Terminal);
        let available = WindowRect { x: 20, y: 20, w: 1240, h: 620 };
        reduce_desktop(
            &mut state,
            &mut interaction,
            DesktopAction::MaximizeWindow { panel: PanelId::Terminal, viewport: available },
        );

        reduce_desktop(
            &mut state,
            &mut interaction,
            DesktopAction::BeginMove { panel: PanelId::Terminal, pointer: PointerPosition { x: 0, y: 0 } },
        );
        reduce_desktop(
            &mut state,
            &mut interaction,
            DesktopAction::UpdateMove { pointer: PointerPosition { x: 300, y: 300 }, viewport: VIEWPORT },
        );
        assert_eq!(state.window(PanelId::Terminal).rect, available);
    }
}
