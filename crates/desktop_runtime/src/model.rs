//! Desktop window-manager state: geometry, lifecycle, icons, and in-flight gestures.

use desktop_app_contract::{PanelId, ThemeMode};
use serde::{Deserialize, Serialize};

/// Minimum managed window width.
pub const MIN_WINDOW_WIDTH: i32 = 400;
/// Minimum managed window height.
pub const MIN_WINDOW_HEIGHT: i32 = 300;
/// Half extent of a desktop icon; the icon's center is `position + (HALF, HALF)`.
pub const ICON_HALF_EXTENT_PX: i32 = 48;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
/// Pointer position in viewport coordinates.
pub struct PointerPosition {
    /// Horizontal coordinate.
    pub x: i32,
    /// Vertical coordinate.
    pub y: i32,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
/// Window geometry in viewport coordinates.
pub struct WindowRect {
    /// Left edge.
    pub x: i32,
    /// Top edge.
    pub y: i32,
    /// Width.
    pub w: i32,
    /// Height.
    pub h: i32,
}

impl WindowRect {
    /// Returns the rect translated by `(dx, dy)`.
    pub fn offset(self, dx: i32, dy: i32) -> Self {
        Self {
            x: self.x + dx,
            y: self.y + dy,
            ..self
        }
    }

    /// Returns the rect with size floored at `(min_w, min_h)`.
    pub fn clamped_min(self, min_w: i32, min_h: i32) -> Self {
        Self {
            w: self.w.max(min_w),
            h: self.h.max(min_h),
            ..self
        }
    }

    /// Returns the rect with its position clamped so the window stays inside `viewport`.
    ///
    /// Both axes land in `[0, viewport_dimension - window_dimension]`; a window larger than the
    /// viewport pins to the origin.
    pub fn clamped_within(self, viewport: WindowRect) -> Self {
        let max_x = (viewport.w - self.w).max(0);
        let max_y = (viewport.h - self.h).max(0);
        Self {
            x: self.x.clamp(0, max_x),
            y: self.y.clamp(0, max_y),
            ..self
        }
    }

    /// Returns the rect recentered over `viewport` without changing its size.
    pub fn centered_in(self, viewport: WindowRect) -> Self {
        Self {
            x: (viewport.w - self.w) / 2,
            y: (viewport.h - self.h) / 2,
            ..self
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
/// Lifecycle of a managed window. Exactly one variant is active per window.
pub enum WindowLifecycle {
    /// Not present on screen or in the taskbar; reopening uses default geometry.
    Closed,
    /// Visible at its own geometry.
    Normal,
    /// Hidden, represented by a taskbar affordance; geometry retained unchanged.
    Minimized,
    /// Filling the available viewport; the pre-maximize geometry is kept for restore.
    Maximized,
}

impl WindowLifecycle {
    /// Returns `true` when the window renders on the desktop.
    pub fn is_visible(self) -> bool {
        matches!(self, Self::Normal | Self::Maximized)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
/// One managed window. Each panel owns exactly one.
pub struct WindowRecord {
    /// Panel rendered inside this window.
    pub panel: PanelId,
    /// Current geometry.
    pub rect: WindowRect,
    /// Geometry snapshot taken when maximizing, reverted on restore.
    pub restore_rect: Option<WindowRect>,
    /// Lifecycle state.
    pub lifecycle: WindowLifecycle,
    /// Render stacking order; rebuilt from stack position after every transition.
    pub z_index: u32,
    /// Focus flag; at most one window holds it.
    pub is_focused: bool,
}

impl WindowRecord {
    fn closed(panel: PanelId) -> Self {
        Self {
            panel,
            rect: default_panel_rect(panel),
            restore_rect: None,
            lifecycle: WindowLifecycle::Closed,
            z_index: 0,
            is_focused: false,
        }
    }
}

/// Default geometry used when a panel opens from `Closed`.
pub fn default_panel_rect(panel: PanelId) -> WindowRect {
    match panel {
        PanelId::Terminal => WindowRect {
            x: 50,
            y: 50,
            w: 800,
            h: 600,
        },
        PanelId::Explorer => WindowRect {
            x: 100,
            y: 100,
            w: 800,
            h: 600,
        },
        PanelId::Settings => WindowRect {
            x: 200,
            y: 150,
            w: 400,
            h: 500,
        },
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
/// A desktop icon and its draggable position.
pub struct DesktopIcon {
    /// Panel the icon opens.
    pub panel: PanelId,
    /// Top-left position in viewport coordinates.
    pub position: PointerPosition,
}

impl DesktopIcon {
    /// Center point used for rectangle-selection hit tests.
    pub fn center(&self) -> PointerPosition {
        PointerPosition {
            x: self.position.x + ICON_HALF_EXTENT_PX,
            y: self.position.y + ICON_HALF_EXTENT_PX,
        }
    }
}

fn default_icon_layout() -> Vec<DesktopIcon> {
    PanelId::ALL
        .iter()
        .enumerate()
        .map(|(index, panel)| DesktopIcon {
            panel: *panel,
            position: PointerPosition {
                x: 32 + (index as i32) * 96,
                y: 32,
            },
        })
        .collect()
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
/// In-progress rectangle selection between the pointer-down point and the current pointer.
pub struct SelectionDrag {
    /// Pointer-down origin.
    pub start: PointerPosition,
    /// Latest pointer position.
    pub current: PointerPosition,
}

impl SelectionDrag {
    /// Normalized `(top_left, bottom_right)` corners of the rectangle.
    pub fn normalized(&self) -> (PointerPosition, PointerPosition) {
        (
            PointerPosition {
                x: self.start.x.min(self.current.x),
                y: self.start.y.min(self.current.y),
            },
            PointerPosition {
                x: self.start.x.max(self.current.x),
                y: self.start.y.max(self.current.y),
            },
        )
    }

    /// Whether `point` falls inside the normalized rectangle (inclusive).
    pub fn contains(&self, point: PointerPosition) -> bool {
        let (min, max) = self.normalized();
        point.x >= min.x && point.x <= max.x && point.y >= min.y && point.y <= max.y
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
/// Window drag gesture.
pub struct DragSession {
    /// Window being dragged.
    pub panel: PanelId,
    /// Pointer position at drag start.
    pub pointer_start: PointerPosition,
    /// Window rect at drag start.
    pub rect_start: WindowRect,
}

#[derive(Debug, Clone, PartialEq, Eq)]
/// Bottom-right-corner resize gesture.
pub struct ResizeSession {
    /// Window being resized.
    pub panel: PanelId,
    /// Pointer position at resize start.
    pub pointer_start: PointerPosition,
    /// Window rect at resize start.
    pub rect_start: WindowRect,
}

#[derive(Debug, Clone, PartialEq, Eq)]
/// Icon drag gesture: a single icon, or the whole multi-selection moving together.
pub enum IconDragSession {
    /// Dragging one icon by a grab offset from its top-left corner.
    Single {
        /// Icon being dragged.
        panel: PanelId,
        /// Pointer offset from the icon's top-left at drag start.
        grab_offset: PointerPosition,
        /// Whether any movement happened (drives click suppression).
        moved: bool,
    },
    /// Dragging every selected icon by the same per-move delta.
    Group {
        /// Pointer position at the previous update.
        last_pointer: PointerPosition,
        /// Whether any movement happened (drives click suppression).
        moved: bool,
    },
}

impl IconDragSession {
    /// Whether the gesture moved the pointer at all.
    pub fn moved(&self) -> bool {
        match self {
            Self::Single { moved, .. } | Self::Group { moved, .. } => *moved,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
/// Transient pointer-gesture state. At most one gesture is active at a time.
pub struct InteractionState {
    /// Active window drag.
    pub dragging: Option<DragSession>,
    /// Active window resize.
    pub resizing: Option<ResizeSession>,
    /// Active rectangle selection.
    pub selecting: Option<SelectionDrag>,
    /// Rectangle left on screen briefly after the selection gesture ends.
    pub completed_selection: Option<SelectionDrag>,
    /// Active icon drag.
    pub icon_drag: Option<IconDragSession>,
    /// Set right after an icon drag so the terminating click is not read as an open.
    pub suppress_icon_open: bool,
}

#[derive(Debug, Clone, PartialEq)]
/// Authoritative desktop state owned by the runtime reducer.
pub struct DesktopState {
    /// Managed windows in stacking order (last = topmost).
    pub windows: Vec<WindowRecord>,
    /// Desktop icons and their positions.
    pub icons: Vec<DesktopIcon>,
    /// Panels currently in the icon selection set.
    pub selected_icons: Vec<PanelId>,
    /// Active color theme.
    pub theme: ThemeMode,
    /// Whether UI sound effects are enabled.
    pub sound_enabled: bool,
}

impl Default for DesktopState {
    fn default() -> Self {
        Self {
            windows: PanelId::ALL.iter().map(|p| WindowRecord::closed(*p)).collect(),
            icons: default_icon_layout(),
            selected_icons: Vec::new(),
            theme: ThemeMode::default(),
            sound_enabled: false,
        }
    }
}

impl DesktopState {
    /// Returns the window record for `panel`.
    pub fn window(&self, panel: PanelId) -> &WindowRecord {
        self.windows
            .iter()
            .find(|w| w.panel == panel)
            .expect("every panel has a window record")
    }

    /// Returns the focused panel, if any window holds focus.
    pub fn focused_panel(&self) -> Option<PanelId> {
        self.windows.iter().find(|w| w.is_focused).map(|w| w.panel)
    }

    /// Returns the icon record for `panel`.
    pub fn icon(&self, panel: PanelId) -> &DesktopIcon {
        self.icons
            .iter()
            .find(|i| i.panel == panel)
            .expect("every panel has a desktop icon")
    }

    /// Whether `panel` is part of the current icon selection.
    pub fn icon_is_selected(&self, panel: PanelId) -> bool {
        self.selected_icons.contains(&panel)
    }
}
