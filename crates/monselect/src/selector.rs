//! Monitor selection and window placement.

use std::fmt;

use tracing::{debug, info};

use crate::{
    geom::PointPx,
    monitors::{DisplayMetrics, MonitorList},
    window::{AppWindow, WindowMode},
};

/// Platform workarounds applied while moving the window.
///
/// Chosen once at startup; tests inject whichever variant they need so the
/// placement logic is exercised on any platform.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct PlacementQuirks {
    /// Moving a fullscreen window is unreliable on this platform: switch to
    /// windowed mode for the move, then restore the previous mode.
    pub windowed_move_roundtrip: bool,
}

impl PlacementQuirks {
    /// Quirks for the platform this binary was built for.
    ///
    /// Linux windowing systems reject or misplace moves of fullscreen
    /// windows, so the windowed round-trip is enabled there.
    #[must_use]
    pub fn for_platform() -> Self {
        Self {
            windowed_move_roundtrip: cfg!(target_os = "linux"),
        }
    }

    /// No workarounds; windows are moved directly.
    #[must_use]
    pub const fn none() -> Self {
        Self {
            windowed_move_roundtrip: false,
        }
    }

    /// Force the windowed round-trip regardless of platform.
    #[must_use]
    pub const fn windowed_roundtrip() -> Self {
        Self {
            windowed_move_roundtrip: true,
        }
    }
}

/// Outcome of a placement request.
///
/// Placement is fire-and-forget: none of these are errors and callers are
/// free to ignore the value. The variants exist so scripting layers and
/// tests can observe what happened.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Placement {
    /// The window was moved to the given position.
    Moved(PointPx),
    /// The index did not name a monitor; nothing was done.
    OutOfRange {
        /// Length of the monitor list at the time of the request.
        len: usize,
    },
    /// No application window exists; nothing was done.
    NoWindow,
}

impl Placement {
    /// True when the window was actually moved.
    #[must_use]
    pub fn moved(self) -> bool {
        matches!(self, Self::Moved(_))
    }
}

impl fmt::Display for Placement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Moved(pos) => write!(f, "moved to {pos}"),
            Self::OutOfRange { len } => {
                write!(f, "index out of range ({len} monitors)")
            }
            Self::NoWindow => write!(f, "no application window"),
        }
    }
}

/// Places the application window on a chosen monitor.
///
/// Holds the injected display capability, an optional window handle (a
/// missing window is a valid state, e.g. a headless host), and the platform
/// quirks selected at startup.
pub struct MonitorSelector<D, W> {
    /// Display-enumeration capability, re-queried on every operation.
    displays: D,
    /// The live application window, when one exists.
    window: Option<W>,
    /// Workarounds applied during moves.
    quirks: PlacementQuirks,
}

impl<D: DisplayMetrics, W: AppWindow> MonitorSelector<D, W> {
    /// Build a selector over the given capabilities.
    pub fn new(displays: D, window: Option<W>, quirks: PlacementQuirks) -> Self {
        Self {
            displays,
            window,
            quirks,
        }
    }

    /// A fresh enumeration of the current monitor configuration.
    #[must_use]
    pub fn monitors(&self) -> MonitorList {
        self.displays.rebuild()
    }

    /// Monitor identifiers in enumeration order. Empty when no monitors
    /// are attached.
    #[must_use]
    pub fn monitor_ids(&self) -> Vec<String> {
        self.displays.rebuild().ids()
    }

    /// Monitor display names in enumeration order.
    #[must_use]
    pub fn monitor_names(&self) -> Vec<String> {
        self.displays.rebuild().names()
    }

    /// Move the application window to the work-area origin of monitor
    /// `index`.
    ///
    /// Re-enumerates monitors first, so `index` is interpreted against the
    /// current configuration. An out-of-range index or a missing window
    /// leaves everything untouched.
    pub fn place_on_monitor(&self, index: usize) -> Placement {
        let monitors = self.displays.rebuild();
        let len = monitors.len();
        let Some(monitor) = monitors.get(index) else {
            debug!("monitor index {} out of range (len {}); ignoring", index, len);
            return Placement::OutOfRange { len };
        };
        let target = monitor.work_area.origin();
        let Some(window) = self.window.as_ref() else {
            debug!("no application window; skipping move");
            return Placement::NoWindow;
        };

        if self.quirks.windowed_move_roundtrip {
            // Fullscreen windows can't be moved here; go windowed for the
            // move and restore whatever mode the window was in.
            let mode = window.window_mode();
            window.set_window_mode(WindowMode::Windowed);
            window.move_to(target);
            window.set_window_mode(mode);
        } else {
            window.move_to(target);
        }
        info!("moved window to {} (monitor '{}')", target, monitor.id);
        Placement::Moved(target)
    }

    /// [`place_on_monitor`](Self::place_on_monitor) for callers holding a
    /// signed index; negative values are out of range by definition.
    pub fn place_on_monitor_signed(&self, index: i64) -> Placement {
        match usize::try_from(index) {
            Ok(i) => self.place_on_monitor(i),
            Err(_) => {
                debug!("negative monitor index {}; ignoring", index);
                Placement::OutOfRange {
                    len: self.displays.rebuild().len(),
                }
            }
        }
    }

    /// Move the application window to the primary monitor, when the
    /// enumeration flags one.
    pub fn place_on_primary(&self) -> Placement {
        let monitors = self.displays.rebuild();
        match monitors.primary_index() {
            Some(i) => self.place_on_monitor(i),
            None => {
                debug!("no primary monitor flagged; ignoring");
                Placement::OutOfRange {
                    len: monitors.len(),
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use std::cell::{Cell, RefCell};

    use proptest::prelude::*;

    use super::*;
    use crate::{
        geom::WorkArea,
        monitors::{MonitorDescriptor, MonitorList},
    };

    /// Display capability backed by a fixed list; counts enumerations.
    struct FakeDisplays {
        monitors: Vec<MonitorDescriptor>,
        rebuilds: Cell<usize>,
    }

    impl FakeDisplays {
        fn new(monitors: Vec<MonitorDescriptor>) -> Self {
            Self {
                monitors,
                rebuilds: Cell::new(0),
            }
        }
    }

    impl DisplayMetrics for FakeDisplays {
        fn rebuild(&self) -> MonitorList {
            self.rebuilds.set(self.rebuilds.get() + 1);
            self.monitors.iter().cloned().collect()
        }
    }

    /// Every call the selector makes against the window, in order.
    #[derive(Clone, Copy, Debug, PartialEq, Eq)]
    enum Call {
        SetMode(WindowMode),
        Move(PointPx),
    }

    struct FakeWindow {
        mode: Cell<WindowMode>,
        calls: RefCell<Vec<Call>>,
    }

    impl FakeWindow {
        fn new(mode: WindowMode) -> Self {
            Self {
                mode: Cell::new(mode),
                calls: RefCell::new(Vec::new()),
            }
        }
    }

    impl AppWindow for FakeWindow {
        fn window_mode(&self) -> WindowMode {
            self.mode.get()
        }

        fn set_window_mode(&self, mode: WindowMode) {
            self.mode.set(mode);
            self.calls.borrow_mut().push(Call::SetMode(mode));
        }

        fn move_to(&self, pos: PointPx) {
            self.calls.borrow_mut().push(Call::Move(pos));
        }
    }

    fn monitor(id: &str, name: &str, wa: WorkArea, primary: bool) -> MonitorDescriptor {
        MonitorDescriptor {
            id: id.into(),
            name: name.into(),
            work_area: wa,
            primary,
        }
    }

    fn two_monitors() -> Vec<MonitorDescriptor> {
        vec![
            monitor("A", "Primary", WorkArea::new(0, 0, 1920, 1080), true),
            monitor("B", "Secondary", WorkArea::new(1920, 0, 3840, 1080), false),
        ]
    }

    fn selector<'a>(
        displays: &'a FakeDisplays,
        window: Option<&'a FakeWindow>,
        quirks: PlacementQuirks,
    ) -> MonitorSelector<&'a FakeDisplays, &'a FakeWindow> {
        MonitorSelector::new(displays, window, quirks)
    }

    #[test]
    fn ids_and_names_match_enumeration_order() {
        let displays = FakeDisplays::new(two_monitors());
        let sel = selector(&displays, None, PlacementQuirks::none());
        assert_eq!(sel.monitor_ids(), vec!["A", "B"]);
        assert_eq!(sel.monitor_names(), vec!["Primary", "Secondary"]);
    }

    #[test]
    fn empty_enumeration_yields_empty_lists() {
        let displays = FakeDisplays::new(Vec::new());
        let sel = selector(&displays, None, PlacementQuirks::none());
        assert!(sel.monitor_ids().is_empty());
        assert!(sel.monitor_names().is_empty());
    }

    #[test]
    fn valid_index_moves_to_work_area_origin() {
        let displays = FakeDisplays::new(two_monitors());
        let window = FakeWindow::new(WindowMode::Windowed);
        let sel = selector(&displays, Some(&window), PlacementQuirks::none());
        let placement = sel.place_on_monitor(1);
        assert_eq!(placement, Placement::Moved(PointPx::new(1920, 0)));
        assert_eq!(*window.calls.borrow(), vec![Call::Move(PointPx::new(1920, 0))]);
    }

    #[test]
    fn out_of_range_index_touches_nothing() {
        let displays = FakeDisplays::new(two_monitors());
        let window = FakeWindow::new(WindowMode::Fullscreen);
        let sel = selector(&displays, Some(&window), PlacementQuirks::windowed_roundtrip());
        let placement = sel.place_on_monitor(5);
        assert_eq!(placement, Placement::OutOfRange { len: 2 });
        assert!(window.calls.borrow().is_empty());
    }

    #[test]
    fn negative_index_is_out_of_range() {
        let displays = FakeDisplays::new(two_monitors());
        let window = FakeWindow::new(WindowMode::Windowed);
        let sel = selector(&displays, Some(&window), PlacementQuirks::none());
        assert!(!sel.place_on_monitor_signed(-1).moved());
        assert!(window.calls.borrow().is_empty());
    }

    #[test]
    fn missing_window_is_a_no_op() {
        let displays = FakeDisplays::new(two_monitors());
        let sel = selector(&displays, None, PlacementQuirks::none());
        assert_eq!(sel.place_on_monitor(0), Placement::NoWindow);
    }

    #[test]
    fn roundtrip_quirk_restores_mode() {
        let displays = FakeDisplays::new(two_monitors());
        let window = FakeWindow::new(WindowMode::WindowedFullscreen);
        let sel = selector(&displays, Some(&window), PlacementQuirks::windowed_roundtrip());
        let placement = sel.place_on_monitor(0);
        assert!(placement.moved());
        // Mode observable after the call equals the mode before it, and the
        // move happened while windowed.
        assert_eq!(window.mode.get(), WindowMode::WindowedFullscreen);
        assert_eq!(
            *window.calls.borrow(),
            vec![
                Call::SetMode(WindowMode::Windowed),
                Call::Move(PointPx::new(0, 0)),
                Call::SetMode(WindowMode::WindowedFullscreen),
            ]
        );
    }

    #[test]
    fn direct_move_never_touches_mode() {
        let displays = FakeDisplays::new(two_monitors());
        let window = FakeWindow::new(WindowMode::Fullscreen);
        let sel = selector(&displays, Some(&window), PlacementQuirks::none());
        assert!(sel.place_on_monitor(0).moved());
        assert_eq!(*window.calls.borrow(), vec![Call::Move(PointPx::new(0, 0))]);
        assert_eq!(window.mode.get(), WindowMode::Fullscreen);
    }

    #[test]
    fn place_on_primary_resolves_flagged_monitor() {
        let mut monitors = two_monitors();
        monitors.swap(0, 1);
        let displays = FakeDisplays::new(monitors);
        let window = FakeWindow::new(WindowMode::Windowed);
        let sel = selector(&displays, Some(&window), PlacementQuirks::none());
        assert_eq!(sel.place_on_primary(), Placement::Moved(PointPx::new(0, 0)));
    }

    #[test]
    fn every_operation_re_enumerates() {
        let displays = FakeDisplays::new(two_monitors());
        let window = FakeWindow::new(WindowMode::Windowed);
        let sel = selector(&displays, Some(&window), PlacementQuirks::none());
        let _ = sel.monitor_ids();
        let _ = sel.monitor_names();
        let _ = sel.place_on_monitor(0);
        assert_eq!(displays.rebuilds.get(), 3);
    }

    proptest! {
        #[test]
        fn any_out_of_range_index_is_ignored(count in 0usize..6, extra in 0usize..32) {
            let monitors = (0..count)
                .map(|i| {
                    monitor(
                        &format!("id{i}"),
                        &format!("Display {i}"),
                        WorkArea::from_origin_size(1920 * i as i32, 0, 1920, 1080),
                        i == 0,
                    )
                })
                .collect::<Vec<_>>();
            let displays = FakeDisplays::new(monitors);
            let window = FakeWindow::new(WindowMode::Fullscreen);
            let sel = selector(&displays, Some(&window), PlacementQuirks::windowed_roundtrip());
            let placement = sel.place_on_monitor(count + extra);
            prop_assert_eq!(placement, Placement::OutOfRange { len: count });
            prop_assert!(window.calls.borrow().is_empty());
        }
    }
}
