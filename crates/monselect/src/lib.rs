//! monselect: pick a monitor, move the application window onto it.
//!
//! The host owns display enumeration and window management; this crate only
//! decides *where* the window should go. Both host subsystems are consumed
//! through capability traits ([`DisplayMetrics`] and [`AppWindow`]) so the
//! placement logic runs unchanged against a real windowing backend or a
//! test fake.
//!
//! Monitor snapshots are valid for a single enumeration only (the monitor
//! configuration may change between calls), so every operation re-queries
//! the display capability and nothing is cached.

mod geom;
mod monitors;
mod selector;
mod window;

pub use geom::{PointPx, WorkArea};
pub use monitors::{DisplayMetrics, MonitorDescriptor, MonitorList};
pub use selector::{MonitorSelector, Placement, PlacementQuirks};
pub use window::{AppWindow, WindowMode};
