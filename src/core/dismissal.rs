//! Outside-press dismissal for the sidebar.

use std::cell::Cell;

use super::viewport::ViewportClass;

/// Read/write access to the sidebar open flag.
///
/// This is the only surface exposed to toggle buttons and the dismissal
/// watcher.
pub trait OpenState {
    fn is_open(&self) -> bool;
    fn set_open(&self, open: bool);
}

impl<T: OpenState + ?Sized> OpenState for &T {
    fn is_open(&self) -> bool {
        (**self).is_open()
    }

    fn set_open(&self, open: bool) {
        (**self).set_open(open);
    }
}

impl OpenState for Cell<bool> {
    fn is_open(&self) -> bool {
        self.get()
    }

    fn set_open(&self, open: bool) {
        self.set(open);
    }
}

/// Why a press did not close the sidebar.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum IgnoreReason {
    /// Wide sidebars are docked and never dismissed.
    WideViewport,
    /// Nothing to dismiss.
    AlreadyClosed,
    /// The press landed on the sidebar itself.
    InsideSidebar,
}

/// Outcome of a single press.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Dismissal {
    Ignored(IgnoreReason),
    Dismissed,
}

/// Closes the sidebar when a press lands outside of it on a narrow viewport.
#[derive(Clone, Copy, Debug)]
pub struct DismissalWatcher<S> {
    state: S,
}

impl<S: OpenState> DismissalWatcher<S> {
    pub fn new(state: S) -> Self {
        Self { state }
    }

    /// Run the guard chain for one pointer press.
    ///
    /// `inside_sidebar` is true when the event path contains the sidebar
    /// root element.
    pub fn on_press(&self, class: ViewportClass, inside_sidebar: bool) -> Dismissal {
        let outcome = if !class.is_narrow() {
            Dismissal::Ignored(IgnoreReason::WideViewport)
        } else if !self.state.is_open() {
            Dismissal::Ignored(IgnoreReason::AlreadyClosed)
        } else if inside_sidebar {
            Dismissal::Ignored(IgnoreReason::InsideSidebar)
        } else {
            self.state.set_open(false);
            Dismissal::Dismissed
        };

        if outcome == Dismissal::Dismissed {
            log::debug!("sidebar dismissed by outside press");
        }
        outcome
    }
}

#[cfg(test)]
mod tests {
    use std::cell::Cell;

    use super::*;

    /// Counts writes so "exactly once" can be asserted.
    #[derive(Default)]
    struct CountingState {
        open: Cell<bool>,
        writes: Cell<usize>,
    }

    impl OpenState for CountingState {
        fn is_open(&self) -> bool {
            self.open.get()
        }

        fn set_open(&self, open: bool) {
            self.writes.set(self.writes.get() + 1);
            self.open.set(open);
        }
    }

    fn open_state() -> CountingState {
        CountingState {
            open: Cell::new(true),
            writes: Cell::new(0),
        }
    }

    #[test]
    fn test_wide_viewport_never_dismisses() {
        let state = open_state();
        let watcher = DismissalWatcher::new(&state);

        for inside in [false, true, false, false] {
            assert_eq!(
                watcher.on_press(ViewportClass::Wide, inside),
                Dismissal::Ignored(IgnoreReason::WideViewport)
            );
        }
        assert!(state.open.get());
        assert_eq!(state.writes.get(), 0);
    }

    #[test]
    fn test_outside_press_closes_exactly_once() {
        let state = open_state();
        let watcher = DismissalWatcher::new(&state);

        assert_eq!(watcher.on_press(ViewportClass::Narrow, false), Dismissal::Dismissed);
        assert!(!state.open.get());
        assert_eq!(state.writes.get(), 1);

        // Further outside presses are no-ops
        for _ in 0..3 {
            assert_eq!(
                watcher.on_press(ViewportClass::Narrow, false),
                Dismissal::Ignored(IgnoreReason::AlreadyClosed)
            );
        }
        assert_eq!(state.writes.get(), 1);
    }

    #[test]
    fn test_inside_press_keeps_sidebar_open() {
        let state = open_state();
        let watcher = DismissalWatcher::new(&state);

        assert_eq!(
            watcher.on_press(ViewportClass::Narrow, true),
            Dismissal::Ignored(IgnoreReason::InsideSidebar)
        );
        assert!(state.open.get());
        assert_eq!(state.writes.get(), 0);
    }

    #[test]
    fn test_guard_order_checks_viewport_first() {
        let state = Cell::new(false);
        let watcher = DismissalWatcher::new(&state);

        assert_eq!(
            watcher.on_press(ViewportClass::Wide, false),
            Dismissal::Ignored(IgnoreReason::WideViewport)
        );
        assert_eq!(
            watcher.on_press(ViewportClass::Narrow, true),
            Dismissal::Ignored(IgnoreReason::AlreadyClosed)
        );
        assert!(!state.get());
    }
}
