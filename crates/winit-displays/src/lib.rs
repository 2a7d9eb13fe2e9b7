//! winit-backed implementations of the `monselect` capabilities.
//!
//! [`WinitDisplays`] enumerates monitors through an active winit event loop
//! and [`WinitWindow`] drives a live `winit` window. Both are thin adapters;
//! all placement decisions stay in `monselect`.

use monselect::{
    AppWindow, DisplayMetrics, MonitorDescriptor, MonitorList, PointPx, WindowMode, WorkArea,
};
use thiserror::Error;
use tracing::debug;
use winit::{
    dpi::{PhysicalPosition, PhysicalSize},
    event_loop::ActiveEventLoop,
    monitor::MonitorHandle,
    window::{Fullscreen, Window},
};

/// Failures raised while standing up the winit backend.
///
/// Enumeration and window moves themselves are infallible; only building
/// the event loop and creating a window can fail.
#[derive(Error, Debug)]
pub enum Error {
    /// The winit event loop could not be created or exited abnormally.
    #[error("event loop error: {0}")]
    EventLoop(#[from] winit::error::EventLoopError),

    /// The OS refused to create the application window.
    #[error("window creation failed: {0}")]
    CreateWindow(#[from] winit::error::OsError),
}

/// Convenience alias for backend results.
pub type Result<T> = std::result::Result<T, Error>;

/// Display enumeration over an active winit event loop.
pub struct WinitDisplays<'a> {
    /// The running event loop; monitor queries are only valid while it is
    /// active.
    event_loop: &'a ActiveEventLoop,
}

impl<'a> WinitDisplays<'a> {
    /// Borrow the active event loop for enumeration.
    #[must_use]
    pub fn new(event_loop: &'a ActiveEventLoop) -> Self {
        Self { event_loop }
    }
}

impl DisplayMetrics for WinitDisplays<'_> {
    fn rebuild(&self) -> MonitorList {
        let primary = self.event_loop.primary_monitor();
        let list: MonitorList = self
            .event_loop
            .available_monitors()
            .enumerate()
            .map(|(i, handle)| descriptor(i, &handle, primary.as_ref()))
            .collect();
        debug!("enumerated {} monitors", list.len());
        list
    }
}

/// Build a descriptor for one monitor.
///
/// winit exposes no native monitor identifier, so the geometry stands in as
/// an opaque id; it is unique per monitor within one enumeration.
fn descriptor(
    index: usize,
    handle: &MonitorHandle,
    primary: Option<&MonitorHandle>,
) -> MonitorDescriptor {
    let pos = handle.position();
    let size = handle.size();
    MonitorDescriptor {
        id: monitor_id(pos, size),
        name: handle
            .name()
            .unwrap_or_else(|| format!("Display {index}")),
        work_area: WorkArea::from_origin_size(pos.x, pos.y, size.width, size.height),
        primary: primary == Some(handle),
    }
}

/// Geometry-derived opaque identifier for a monitor.
fn monitor_id(pos: PhysicalPosition<i32>, size: PhysicalSize<u32>) -> String {
    format!("{}x{}@{},{}", size.width, size.height, pos.x, pos.y)
}

/// [`AppWindow`] over a live winit window.
pub struct WinitWindow {
    /// The wrapped window handle.
    window: Window,
}

impl WinitWindow {
    /// Wrap a winit window.
    #[must_use]
    pub fn new(window: Window) -> Self {
        Self { window }
    }

    /// Access the underlying winit window.
    #[must_use]
    pub fn inner(&self) -> &Window {
        &self.window
    }
}

impl AppWindow for WinitWindow {
    fn window_mode(&self) -> WindowMode {
        match self.window.fullscreen() {
            Some(Fullscreen::Exclusive(_)) => WindowMode::Fullscreen,
            Some(Fullscreen::Borderless(_)) => WindowMode::WindowedFullscreen,
            None => WindowMode::Windowed,
        }
    }

    fn set_window_mode(&self, mode: WindowMode) {
        match mode {
            WindowMode::Windowed => self.window.set_fullscreen(None),
            WindowMode::WindowedFullscreen => self
                .window
                .set_fullscreen(Some(Fullscreen::Borderless(None))),
            WindowMode::Fullscreen => {
                // Exclusive fullscreen needs a concrete video mode; fall back
                // to borderless when the current monitor exposes none.
                let video_mode = self
                    .window
                    .current_monitor()
                    .and_then(|m| m.video_modes().next());
                match video_mode {
                    Some(vm) => self.window.set_fullscreen(Some(Fullscreen::Exclusive(vm))),
                    None => {
                        debug!("no video mode available; using borderless fullscreen");
                        self.window
                            .set_fullscreen(Some(Fullscreen::Borderless(None)));
                    }
                }
            }
        }
    }

    fn move_to(&self, pos: PointPx) {
        self.window
            .set_outer_position(PhysicalPosition::new(pos.x, pos.y));
    }
}
