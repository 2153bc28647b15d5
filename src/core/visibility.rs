//! Sidebar visibility policy.
//!
//! Maps the viewport reading and the open/closed state onto an animation
//! command and hands it to an [`AnimationControls`] implementation. The
//! controller never toggles the open state itself.
//!
//! | Viewport | Open | Command |
//! |----------|------|---------|
//! | Narrow | no | Hidden (instant on first evaluation, animated after) |
//! | Narrow | yes | Visible (animated) |
//! | Confirmed wide | any | Visible (animated) |
//! | Provisional wide | any | nothing until confirmed |

use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

use super::viewport::{ViewportClass, ViewportReading};

/// Logical end state of the sidebar animation.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum AnimationTarget {
    /// Slid out of view.
    #[default]
    Hidden,
    /// Fully on screen.
    Visible,
}

/// How a target should be reached.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub enum AnimationMode {
    /// Jump straight to the target.
    #[default]
    Instant,
    /// Transition over the given number of seconds.
    Animated { duration_secs: f64 },
}

/// A single instruction for the animation engine.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct AnimationCommand {
    pub target: AnimationTarget,
    pub mode: AnimationMode,
}

impl AnimationCommand {
    pub fn instant(target: AnimationTarget) -> Self {
        Self {
            target,
            mode: AnimationMode::Instant,
        }
    }

    pub fn animated(target: AnimationTarget, duration_secs: f64) -> Self {
        Self {
            target,
            mode: AnimationMode::Animated { duration_secs },
        }
    }
}

/// Imperative handle onto whatever actually moves the sidebar.
pub trait AnimationControls {
    /// Apply `target` immediately, without a transition.
    fn set(&self, target: AnimationTarget);

    /// Transition to `target` over `duration_secs`.
    fn start(&self, target: AnimationTarget, duration_secs: f64);
}

/// Target dictated by the policy table, ignoring first-load handling.
pub fn target_for(class: ViewportClass, open: bool) -> AnimationTarget {
    if class.is_narrow() && !open {
        AnimationTarget::Hidden
    } else {
        AnimationTarget::Visible
    }
}

/// One-way flag recording that the first viewport evaluation happened.
///
/// Cloning shares the flag. One instance is created per application and
/// injected into every controller, so a remounted sidebar does not replay
/// the first-load behavior.
#[derive(Clone, Debug, Default)]
pub struct FirstLoadMarker(Arc<AtomicBool>);

impl FirstLoadMarker {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_done(&self) -> bool {
        self.0.load(Ordering::Relaxed)
    }

    pub fn mark_done(&self) {
        self.0.store(true, Ordering::Relaxed);
    }
}

/// Decides and dispatches sidebar animation commands.
pub struct VisibilityController<C> {
    controls: C,
    first_load: FirstLoadMarker,
    duration_secs: f64,
}

impl<C: AnimationControls> VisibilityController<C> {
    pub fn new(controls: C, first_load: FirstLoadMarker, duration_secs: f64) -> Self {
        Self {
            controls,
            first_load,
            duration_secs,
        }
    }

    /// Re-evaluate the policy for the latest inputs.
    ///
    /// Returns the command that was dispatched, or `None` when the reading
    /// is a provisional wide value that should not be acted on yet.
    pub fn evaluate(&self, reading: ViewportReading, open: bool) -> Option<AnimationCommand> {
        if reading == ViewportReading::Provisional(ViewportClass::Wide) {
            return None;
        }

        let class = reading.class();
        let target = target_for(class, open);

        // First paint on a narrow screen: hide without a slide-out
        let first_hide = target == AnimationTarget::Hidden && !self.first_load.is_done();
        if target == AnimationTarget::Hidden || !class.is_narrow() {
            self.first_load.mark_done();
        }

        let command = if first_hide {
            AnimationCommand::instant(target)
        } else {
            AnimationCommand::animated(target, self.duration_secs)
        };

        self.dispatch(command);
        Some(command)
    }

    fn dispatch(&self, command: AnimationCommand) {
        log::debug!("sidebar animation: {:?}", command);
        match command.mode {
            AnimationMode::Instant => self.controls.set(command.target),
            AnimationMode::Animated { duration_secs } => {
                self.controls.start(command.target, duration_secs)
            }
        }
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use std::cell::RefCell;
    use std::rc::Rc;

    use super::*;

    const DURATION: f64 = 0.5;

    /// Records every command it receives. Clones share the log, so a test
    /// keeps one handle and gives the other to the controller.
    #[derive(Clone, Default)]
    pub(crate) struct Recorder(Rc<RefCell<Vec<AnimationCommand>>>);

    impl Recorder {
        pub(crate) fn last(&self) -> Option<AnimationCommand> {
            self.0.borrow().last().copied()
        }

        pub(crate) fn len(&self) -> usize {
            self.0.borrow().len()
        }

        pub(crate) fn commands(&self) -> Vec<AnimationCommand> {
            self.0.borrow().clone()
        }
    }

    pub(crate) fn is_animated(command: &AnimationCommand) -> bool {
        matches!(command.mode, AnimationMode::Animated { .. })
    }

    impl AnimationControls for Recorder {
        fn set(&self, target: AnimationTarget) {
            self.0.borrow_mut().push(AnimationCommand::instant(target));
        }

        fn start(&self, target: AnimationTarget, duration_secs: f64) {
            self.0
                .borrow_mut()
                .push(AnimationCommand::animated(target, duration_secs));
        }
    }

    fn controller() -> (VisibilityController<Recorder>, Recorder) {
        let recorder = Recorder::default();
        let ctl = VisibilityController::new(recorder.clone(), FirstLoadMarker::new(), DURATION);
        (ctl, recorder)
    }

    fn narrow() -> ViewportReading {
        ViewportReading::Confirmed(ViewportClass::Narrow)
    }

    fn wide() -> ViewportReading {
        ViewportReading::Confirmed(ViewportClass::Wide)
    }

    #[test]
    fn test_target_table() {
        assert_eq!(target_for(ViewportClass::Narrow, false), AnimationTarget::Hidden);
        assert_eq!(target_for(ViewportClass::Narrow, true), AnimationTarget::Visible);
        assert_eq!(target_for(ViewportClass::Wide, false), AnimationTarget::Visible);
        assert_eq!(target_for(ViewportClass::Wide, true), AnimationTarget::Visible);
    }

    #[test]
    fn test_controller_agrees_with_target_table() {
        for class in [ViewportClass::Narrow, ViewportClass::Wide] {
            for open in [false, true] {
                // Fresh and already-loaded controllers must both follow the table
                for loaded in [false, true] {
                    let marker = FirstLoadMarker::new();
                    if loaded {
                        marker.mark_done();
                    }
                    let ctl = VisibilityController::new(Recorder::default(), marker, DURATION);
                    let command = ctl
                        .evaluate(ViewportReading::Confirmed(class), open)
                        .expect("confirmed readings always produce a command");
                    assert_eq!(
                        command.target,
                        target_for(class, open),
                        "{class:?} open={open} loaded={loaded}"
                    );
                }
            }
        }
    }

    #[test]
    fn test_first_narrow_hide_is_instant() {
        let (ctl, recorder) = controller();

        let first = ctl.evaluate(narrow(), false).unwrap();
        assert_eq!(first, AnimationCommand::instant(AnimationTarget::Hidden));

        let second = ctl.evaluate(narrow(), false).unwrap();
        assert_eq!(second, AnimationCommand::animated(AnimationTarget::Hidden, DURATION));
        assert_eq!(recorder.len(), 2);
    }

    #[test]
    fn test_open_on_narrow_does_not_consume_first_load() {
        let marker = FirstLoadMarker::new();
        let ctl = VisibilityController::new(Recorder::default(), marker.clone(), DURATION);

        let command = ctl.evaluate(narrow(), true).unwrap();
        assert_eq!(command, AnimationCommand::animated(AnimationTarget::Visible, DURATION));
        assert!(!marker.is_done());
    }

    #[test]
    fn test_confirmed_wide_marks_first_load() {
        let marker = FirstLoadMarker::new();
        let ctl = VisibilityController::new(Recorder::default(), marker.clone(), DURATION);

        let command = ctl.evaluate(wide(), false).unwrap();
        assert_eq!(command, AnimationCommand::animated(AnimationTarget::Visible, DURATION));
        assert!(marker.is_done());

        // Shrinking the window afterwards animates the slide-out
        let command = ctl.evaluate(narrow(), false).unwrap();
        assert!(is_animated(&command));
    }

    #[test]
    fn test_provisional_wide_is_ignored() {
        let marker = FirstLoadMarker::new();
        let recorder = Recorder::default();
        let ctl = VisibilityController::new(recorder.clone(), marker.clone(), DURATION);

        assert_eq!(ctl.evaluate(ViewportReading::default(), false), None);
        assert_eq!(ctl.evaluate(ViewportReading::default(), true), None);
        assert_eq!(recorder.len(), 0);
        assert!(!marker.is_done());

        // The confirmed narrow reading that follows still gets the instant hide
        let command = ctl.evaluate(narrow(), false).unwrap();
        assert_eq!(command, AnimationCommand::instant(AnimationTarget::Hidden));
    }

    #[test]
    fn test_provisional_narrow_is_acted_on() {
        let (ctl, _) = controller();
        let reading = ViewportReading::Provisional(ViewportClass::Narrow);

        let command = ctl.evaluate(reading, false).unwrap();
        assert_eq!(command, AnimationCommand::instant(AnimationTarget::Hidden));
    }

    #[test]
    fn test_marker_is_shared_between_controllers() {
        let marker = FirstLoadMarker::new();
        let first = VisibilityController::new(Recorder::default(), marker.clone(), DURATION);
        first.evaluate(narrow(), false);

        // A remounted sidebar with the same marker animates right away
        let second = VisibilityController::new(Recorder::default(), marker, DURATION);
        let command = second.evaluate(narrow(), false).unwrap();
        assert!(is_animated(&command));
    }

    #[test]
    fn test_dispatch_routes_to_set_and_start() {
        let (ctl, recorder) = controller();
        ctl.evaluate(narrow(), false);
        ctl.evaluate(narrow(), true);

        assert_eq!(
            recorder.commands(),
            vec![
                AnimationCommand::instant(AnimationTarget::Hidden),
                AnimationCommand::animated(AnimationTarget::Visible, DURATION),
            ]
        );
        assert_eq!(
            recorder.last(),
            Some(AnimationCommand::animated(AnimationTarget::Visible, DURATION))
        );
    }
}
