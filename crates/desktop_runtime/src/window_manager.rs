//! Shared window-manager transition helpers used by the desktop reducer.

use desktop_app_contract::PanelId;

use crate::model::{
    DesktopIcon, DesktopState, PointerPosition, SelectionDrag, WindowLifecycle, WindowRect,
    MIN_WINDOW_HEIGHT, MIN_WINDOW_WIDTH,
};

/// Focuses and raises `panel`, ensuring it is the top, focused, visible window.
pub fn focus_window_internal(state: &mut DesktopState, panel: PanelId) {
    let Some(index) = state.windows.iter().position(|w| w.panel == panel) else {
        return;
    };

    let already_focused_top = index + 1 == state.windows.len()
        && state
            .windows
            .get(index)
            .map(|w| w.is_focused && w.lifecycle.is_visible())
            .unwrap_or(false);
    if already_focused_top {
        return;
    }

    for window in &mut state.windows {
        window.is_focused = false;
    }
    let mut window = state.windows.remove(index);
    window.is_focused = true;
    if window.lifecycle == WindowLifecycle::Minimized {
        window.lifecycle = WindowLifecycle::Normal;
    }
    state.windows.push(window);
    normalize_window_stack(state);
}

/// Normalizes z-index ordering and focus invariants for all managed windows.
pub fn normalize_window_stack(state: &mut DesktopState) {
    let mut has_focused = false;
    for (idx, window) in state.windows.iter_mut().enumerate() {
        window.z_index = (idx + 1) as u32;
        if !window.lifecycle.is_visible() {
            window.is_focused = false;
        }
        if window.is_focused {
            if has_focused {
                window.is_focused = false;
            } else {
                has_focused = true;
            }
        }
    }

    if !has_focused {
        if let Some(top_visible) = state
            .windows
            .iter_mut()
            .rev()
            .find(|w| w.lifecycle.is_visible())
        {
            top_visible.is_focused = true;
        }
    }
}

/// Applies a bottom-right resize delta, flooring each axis at the minimum size and capping it so
/// the window's far edge stays inside the viewport given its current position.
pub fn resize_rect_bottom_right(start: WindowRect, dx: i32, dy: i32, viewport: WindowRect) -> WindowRect {
    let floored_w = (start.w + dx).max(MIN_WINDOW_WIDTH);
    let floored_h = (start.h + dy).max(MIN_WINDOW_HEIGHT);
    WindowRect {
        w: floored_w.min(viewport.w - start.x),
        h: floored_h.min(viewport.h - start.y),
        ..start
    }
}

/// Returns the panels whose icon centers fall inside the selection rectangle.
pub fn icons_within_selection(icons: &[DesktopIcon], selection: &SelectionDrag) -> Vec<PanelId> {
    icons
        .iter()
        .filter(|icon| selection.contains(icon.center()))
        .map(|icon| icon.panel)
        .collect()
}

/// Translates the given icons by `(dx, dy)`.
pub fn translate_icons(state: &mut DesktopState, panels: &[PanelId], dx: i32, dy: i32) {
    for icon in &mut state.icons {
        if panels.contains(&icon.panel) {
            icon.position = PointerPosition {
                x: icon.position.x + dx,
                y: icon.position.y + dy,
            };
        }
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::model::DesktopState;

    fn open_all(state: &mut DesktopState) {
        for window in &mut state.windows {
            window.lifecycle = WindowLifecycle::Normal;
        }
    }

    #[test]
    fn focusing_raises_window_to_the_top_of_the_stack() {
        let mut state = DesktopState::default();
        open_all(&mut state);

        focus_window_internal(&mut state, PanelId::Terminal);
        assert_eq!(state.windows.last().map(|w| w.panel), Some(PanelId::Terminal));
        assert_eq!(state.focused_panel(), Some(PanelId::Terminal));

        focus_window_internal(&mut state, PanelId::Settings);
        assert_eq!(state.windows.last().map(|w| w.panel), Some(PanelId::Settings));
        assert_eq!(state.focused_panel(), Some(PanelId::Settings));
        let z: Vec<u32> = state.windows.iter().map(|w| w.z_index).collect();
        assert_eq!(z, vec![1, 2, 3]);
    }

    #[test]
    fn normalize_gives_focus_to_the_top_visible_window() {
        let mut state = DesktopState::default();
        open_all(&mut state);
        state.windows[2].lifecycle = WindowLifecycle::Minimized;
        state.windows[2].is_focused = true;

        normalize_window_stack(&mut state);

        assert!(!state.windows[2].is_focused);
        assert_eq!(state.focused_panel(), Some(state.windows[1].panel));
    }

    #[test]
    fn resize_floors_at_minimum_and_caps_at_the_viewport_edge() {
        let viewport = WindowRect { x: 0, y: 0, w: 1280, h: 720 };
        let start = WindowRect { x: 600, y: 400, w: 500, h: 280 };

        let shrunk = resize_rect_bottom_right(start, -400, -100, viewport);
        assert_eq!((shrunk.w, shrunk.h), (MIN_WINDOW_WIDTH, MIN_WINDOW_HEIGHT));

        let grown = resize_rect_bottom_right(start, 400, 400, viewport);
        assert_eq!(grown.w, viewport.w - start.x);
        assert_eq!(grown.h, viewport.h - start.y);
        assert_eq!((grown.x, grown.y), (start.x, start.y));
    }

    #[test]
    fn selection_hit_test_uses_icon_centers() {
        let state = DesktopState::default();
        let selection = SelectionDrag {
            start: PointerPosition { x: 0, y: 0 },
            current: PointerPosition { x: 180, y: 120 },
        };

        let hit = icons_within_selection(&state.icons, &selection);
        assert_eq!(hit, vec![PanelId::Terminal, PanelId::Explorer]);
    }

    #[test]
    fn group_translation_moves_only_the_named_icons() {
        let mut state = DesktopState::default();
        let before_settings = state.icon(PanelId::Settings).position;

        translate_icons(&mut state, &[PanelId::Terminal, PanelId::Explorer], 10, -5);

        assert_eq!(state.icon(PanelId::Terminal).position, PointerPosition { x: 42, y: 27 });
        assert_eq!(state.icon(PanelId::Explorer).position, PointerPosition { x: 138, y: 27 });
        assert_eq!(state.icon(PanelId::Settings).position, before_settings);
    }
}
