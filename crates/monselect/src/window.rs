//! Application-window capability.

use crate::geom::PointPx;

/// Presentation mode of the application window.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum WindowMode {
    /// Ordinary movable window.
    Windowed,
    /// Exclusive fullscreen on one monitor.
    Fullscreen,
    /// Borderless window covering one monitor.
    WindowedFullscreen,
}

/// Host window-management capability for the live application window.
///
/// Methods take `&self`; windowing backends hand out interior-mutable
/// handles (winit's `Window` does its own synchronization).
pub trait AppWindow {
    /// Current presentation mode.
    fn window_mode(&self) -> WindowMode;

    /// Switch the window to `mode`.
    fn set_window_mode(&self, mode: WindowMode);

    /// Move the window's top-left corner to `pos`.
    fn move_to(&self, pos: PointPx);
}

impl<T: AppWindow + ?Sized> AppWindow for &T {
    fn window_mode(&self) -> WindowMode {
        (**self).window_mode()
    }

    fn set_window_mode(&self, mode: WindowMode) {
        (**self).set_window_mode(mode);
    }

    fn move_to(&self, pos: PointPx) {
        (**self).move_to(pos);
    }
}
