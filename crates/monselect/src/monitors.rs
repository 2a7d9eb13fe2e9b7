//! Monitor snapshots and the display capability.

use std::{ops::Index, slice};

use crate::geom::WorkArea;

/// Immutable snapshot of one monitor, as reported by the host display layer.
///
/// Descriptors are only meaningful for the enumeration that produced them;
/// hold on to the `id` if you need to re-find a monitor later.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MonitorDescriptor {
    /// Opaque host-assigned identifier.
    pub id: String,
    /// Human-readable display name.
    pub name: String,
    /// Usable rectangle in virtual-screen coordinates.
    pub work_area: WorkArea,
    /// Whether this is the primary monitor.
    pub primary: bool,
}

/// Ordered, index-addressable list of monitors from a single enumeration.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct MonitorList(Vec<MonitorDescriptor>);

impl MonitorList {
    /// Wrap an enumeration result, preserving its order.
    #[must_use]
    pub fn new(monitors: Vec<MonitorDescriptor>) -> Self {
        Self(monitors)
    }

    /// Number of monitors.
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// True when no monitors were enumerated.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Descriptor at `index`, or `None` when out of range.
    #[must_use]
    pub fn get(&self, index: usize) -> Option<&MonitorDescriptor> {
        self.0.get(index)
    }

    /// Iterate over descriptors in enumeration order.
    pub fn iter(&self) -> slice::Iter<'_, MonitorDescriptor> {
        self.0.iter()
    }

    /// Index of the first monitor flagged as primary, if any.
    #[must_use]
    pub fn primary_index(&self) -> Option<usize> {
        self.0.iter().position(|m| m.primary)
    }

    /// Identifiers in enumeration order.
    #[must_use]
    pub fn ids(&self) -> Vec<String> {
        self.0.iter().map(|m| m.id.clone()).collect()
    }

    /// Display names in enumeration order.
    #[must_use]
    pub fn names(&self) -> Vec<String> {
        self.0.iter().map(|m| m.name.clone()).collect()
    }
}

impl Index<usize> for MonitorList {
    type Output = MonitorDescriptor;

    fn index(&self, index: usize) -> &MonitorDescriptor {
        &self.0[index]
    }
}

impl FromIterator<MonitorDescriptor> for MonitorList {
    fn from_iter<I: IntoIterator<Item = MonitorDescriptor>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

impl IntoIterator for MonitorList {
    type Item = MonitorDescriptor;
    type IntoIter = std::vec::IntoIter<MonitorDescriptor>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

impl<'a> IntoIterator for &'a MonitorList {
    type Item = &'a MonitorDescriptor;
    type IntoIter = slice::Iter<'a, MonitorDescriptor>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

/// Host display-enumeration capability.
///
/// `rebuild` returns the current configuration and is treated as
/// authoritative; the host contract has no failure mode, an empty list is
/// simply a machine with no monitors attached.
pub trait DisplayMetrics {
    /// Enumerate the current monitor configuration.
    fn rebuild(&self) -> MonitorList;
}

impl<T: DisplayMetrics + ?Sized> DisplayMetrics for &T {
    fn rebuild(&self) -> MonitorList {
        (**self).rebuild()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geom::WorkArea;

    fn sample() -> MonitorList {
        MonitorList::new(vec![
            MonitorDescriptor {
                id: "A".into(),
                name: "Primary".into(),
                work_area: WorkArea::new(0, 0, 1920, 1080),
                primary: true,
            },
            MonitorDescriptor {
                id: "B".into(),
                name: "Secondary".into(),
                work_area: WorkArea::new(1920, 0, 3840, 1080),
                primary: false,
            },
        ])
    }

    #[test]
    fn ids_and_names_preserve_order() {
        let list = sample();
        assert_eq!(list.ids(), vec!["A", "B"]);
        assert_eq!(list.names(), vec!["Primary", "Secondary"]);
    }

    #[test]
    fn primary_index_finds_flagged_monitor() {
        assert_eq!(sample().primary_index(), Some(0));
        assert_eq!(MonitorList::default().primary_index(), None);
    }

    #[test]
    fn get_is_none_out_of_range() {
        let list = sample();
        assert!(list.get(1).is_some());
        assert!(list.get(2).is_none());
    }
}
