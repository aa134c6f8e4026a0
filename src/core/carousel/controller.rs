//! Carousel controller: navigation, listeners and auto-advance
//!
//! The controller wraps a [`CarouselState`] and adds the two pieces of behavior
//! the page needs on top of plain index arithmetic:
//!
//! - **Listeners**: explicit `subscribe`/`unsubscribe` registration. Every index
//!   change is pushed to all registered listeners.
//! - **Auto-advance**: a repeating timer that calls `next()`. It runs only while
//!   the controller is active *and* has at least one listener, and is torn down
//!   through [`TimerGuard`] as soon as either condition stops holding or the
//!   controller is dropped.
//!
//! Everything runs on a single thread; shared state lives behind `Rc`.

use std::cell::{Cell, RefCell};
use std::rc::Rc;
use std::time::Duration;

use super::scheduler::{AUTO_ADVANCE_PERIOD, Scheduler, TimerGuard};
use super::state::{CarouselError, CarouselState};

/// How manual navigation interacts with the auto-advance timer
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AdvancePolicy {
    /// Manual navigation leaves the timer running on its own schedule
    #[default]
    Independent,
    /// Manual navigation restarts the timer period
    ResetOnInteraction,
}

/// Controller settings
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CarouselOptions {
    pub looping: bool,
    pub period: Duration,
    pub policy: AdvancePolicy,
}

impl Default for CarouselOptions {
    fn default() -> Self {
        Self {
            looping: true,
            period: AUTO_ADVANCE_PERIOD,
            policy: AdvancePolicy::default(),
        }
    }
}

impl CarouselOptions {
    /// Set whether navigation wraps around at either end
    pub fn looping(mut self, looping: bool) -> Self {
        self.looping = looping;
        self
    }

    /// Set the auto-advance period
    pub fn period(mut self, period: Duration) -> Self {
        self.period = period;
        self
    }

    /// Set the manual navigation policy
    pub fn policy(mut self, policy: AdvancePolicy) -> Self {
        self.policy = policy;
        self
    }
}

/// Handle returned by [`CarouselController::subscribe`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ListenerId(u64);

type Listener = Rc<dyn Fn(usize)>;

struct Inner<T> {
    state: RefCell<CarouselState<T>>,
    listeners: RefCell<Vec<(ListenerId, Listener)>>,
    next_listener: Cell<u64>,
    active: Cell<bool>,
    timer: RefCell<Option<TimerGuard>>,
    scheduler: Rc<dyn Scheduler>,
    options: CarouselOptions,
}

/// Auto-advancing carousel with listener notifications
pub struct CarouselController<T: 'static> {
    inner: Rc<Inner<T>>,
}

impl<T: 'static> CarouselController<T> {
    /// Create an inactive controller positioned on the first item.
    pub fn new(
        items: Vec<T>,
        options: CarouselOptions,
        scheduler: Rc<dyn Scheduler>,
    ) -> Result<Self, CarouselError> {
        let state = CarouselState::new(items, options.looping)?;

        Ok(Self {
            inner: Rc::new(Inner {
                state: RefCell::new(state),
                listeners: RefCell::new(Vec::new()),
                next_listener: Cell::new(0),
                active: Cell::new(false),
                timer: RefCell::new(None),
                scheduler,
                options,
            }),
        })
    }

    pub fn current_index(&self) -> usize {
        self.inner.state.borrow().current_index()
    }

    pub fn len(&self) -> usize {
        self.inner.state.borrow().len()
    }

    /// Always `false`: construction rejects empty lists
    pub fn is_empty(&self) -> bool {
        self.inner.state.borrow().is_empty()
    }

    /// Run `f` against the active item
    pub fn with_current<R>(&self, f: impl FnOnce(&T) -> R) -> R {
        f(self.inner.state.borrow().current())
    }

    /// Move forward one item. Returns `true` if the index changed.
    pub fn next(&self) -> bool {
        self.inner.interact(CarouselState::next)
    }

    /// Move back one item. Returns `true` if the index changed.
    pub fn previous(&self) -> bool {
        self.inner.interact(CarouselState::previous)
    }

    /// Jump to `index`. Out-of-range indices are rejected without side effects.
    pub fn go_to(&self, index: usize) -> Result<bool, CarouselError> {
        // Validate first so the closure below cannot fail
        let len = self.len();
        if index >= len {
            return Err(CarouselError::IndexOutOfRange { index, len });
        }

        Ok(self
            .inner
            .interact(|state| state.go_to(index).unwrap_or(false)))
    }

    /// Register a listener called with the new index after every change.
    pub fn subscribe(&self, listener: impl Fn(usize) + 'static) -> ListenerId {
        let id = ListenerId(self.inner.next_listener.get());
        self.inner.next_listener.set(id.0 + 1);

        let listener: Listener = Rc::new(listener);
        self.inner.listeners.borrow_mut().push((id, listener));

        self.inner.sync_timer();
        id
    }

    /// Remove a listener. Returns `false` if `id` was not registered.
    pub fn unsubscribe(&self, id: ListenerId) -> bool {
        let removed = {
            let mut listeners = self.inner.listeners.borrow_mut();
            let before = listeners.len();
            listeners.retain(|(listener_id, _)| *listener_id != id);
            listeners.len() != before
        };

        self.inner.sync_timer();
        removed
    }

    pub fn listener_count(&self) -> usize {
        self.inner.listeners.borrow().len()
    }

    /// Allow auto-advance. The timer starts once a listener is registered.
    pub fn activate(&self) {
        self.inner.active.set(true);
        self.inner.sync_timer();
    }

    /// Stop auto-advance and release the timer.
    pub fn deactivate(&self) {
        self.inner.active.set(false);
        self.inner.sync_timer();
    }

    pub fn is_active(&self) -> bool {
        self.inner.active.get()
    }

    /// Whether the auto-advance timer is currently running
    pub fn is_auto_advancing(&self) -> bool {
        self.inner.timer.borrow().is_some()
    }
}

impl<T: 'static> Inner<T> {
    /// Apply a state change and notify listeners if the index moved.
    fn apply(&self, op: impl FnOnce(&mut CarouselState<T>) -> bool) -> bool {
        let changed = op(&mut *self.state.borrow_mut());
        if changed {
            let index = self.state.borrow().current_index();
            self.notify(index);
        }
        changed
    }

    /// Manual navigation: apply the change, then honor the advance policy.
    fn interact(self: &Rc<Self>, op: impl FnOnce(&mut CarouselState<T>) -> bool) -> bool {
        let changed = self.apply(op);

        if changed
            && self.options.policy == AdvancePolicy::ResetOnInteraction
            && self.timer.borrow().is_some()
        {
            self.stop_timer();
            self.sync_timer();
        }

        changed
    }

    fn notify(&self, index: usize) {
        // Snapshot so listeners may (un)subscribe or navigate re-entrantly
        let listeners: Vec<Listener> = self
            .listeners
            .borrow()
            .iter()
            .map(|(_, listener)| listener.clone())
            .collect();

        for listener in listeners {
            listener(index);
        }
    }

    fn should_run(&self) -> bool {
        self.active.get() && !self.listeners.borrow().is_empty()
    }

    /// Start or stop the timer so that it runs exactly when it should.
    fn sync_timer(self: &Rc<Self>) {
        let running = self.timer.borrow().is_some();

        match (self.should_run(), running) {
            (true, false) => self.start_timer(),
            (false, true) => self.stop_timer(),
            _ => {}
        }
    }

    fn start_timer(self: &Rc<Self>) {
        let weak = Rc::downgrade(self);
        let guard = self.scheduler.every(
            self.options.period,
            Box::new(move || {
                if let Some(inner) = weak.upgrade() {
                    inner.apply(CarouselState::next);
                }
            }),
        );

        *self.timer.borrow_mut() = Some(guard);
    }

    fn stop_timer(&self) {
        let guard = self.timer.borrow_mut().take();
        drop(guard);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::carousel::scheduler::ManualScheduler;

    fn controller(
        items: Vec<char>,
        options: CarouselOptions,
    ) -> (CarouselController<char>, ManualScheduler) {
        let scheduler = ManualScheduler::default();
        let controller =
            CarouselController::new(items, options, Rc::new(scheduler.clone())).unwrap();
        (controller, scheduler)
    }

    fn recorder(controller: &CarouselController<char>) -> (ListenerId, Rc<RefCell<Vec<usize>>>) {
        let seen = Rc::new(RefCell::new(Vec::new()));
        let sink = seen.clone();
        let id = controller.subscribe(move |index| sink.borrow_mut().push(index));
        (id, seen)
    }

    #[test]
    fn test_new_rejects_empty_items() {
        let result = CarouselController::<char>::new(
            Vec::new(),
            CarouselOptions::default(),
            Rc::new(ManualScheduler::default()),
        );
        assert!(matches!(result, Err(CarouselError::Empty)));
    }

    #[test]
    fn test_new_is_inactive_at_first_item() {
        let (carousel, scheduler) = controller(vec!['a', 'b'], CarouselOptions::default());

        assert_eq!(carousel.current_index(), 0);
        assert_eq!(carousel.len(), 2);
        assert!(!carousel.is_active());
        assert!(!carousel.is_auto_advancing());
        assert_eq!(scheduler.active(), 0);
        assert_eq!(carousel.with_current(|item| *item), 'a');
    }

    #[test]
    fn test_listeners_receive_changed_indices() {
        let (carousel, _) = controller(vec!['a', 'b', 'c'], CarouselOptions::default());
        let (_, seen) = recorder(&carousel);

        carousel.next();
        carousel.go_to(0).unwrap();
        carousel.previous();

        assert_eq!(*seen.borrow(), vec![1, 0, 2]);
    }

    #[test]
    fn test_unchanged_index_does_not_notify() {
        let options = CarouselOptions::default().looping(false);
        let (carousel, _) = controller(vec!['a', 'b'], options);
        let (_, seen) = recorder(&carousel);

        assert!(!carousel.previous());
        assert_eq!(carousel.go_to(0), Ok(false));

        assert!(seen.borrow().is_empty());
    }

    #[test]
    fn test_rejected_go_to_keeps_state_and_listeners_quiet() {
        let (carousel, _) = controller(vec!['a', 'b', 'c'], CarouselOptions::default());
        let (_, seen) = recorder(&carousel);

        let result = carousel.go_to(3);

        assert_eq!(
            result,
            Err(CarouselError::IndexOutOfRange { index: 3, len: 3 })
        );
        assert_eq!(carousel.current_index(), 0);
        assert!(seen.borrow().is_empty());
    }

    #[test]
    fn test_unsubscribe_stops_notifications() {
        let (carousel, _) = controller(vec!['a', 'b', 'c'], CarouselOptions::default());
        let (id, seen) = recorder(&carousel);

        carousel.next();
        assert!(carousel.unsubscribe(id));
        carousel.next();

        assert_eq!(*seen.borrow(), vec![1]);
        assert!(!carousel.unsubscribe(id));
        assert_eq!(carousel.listener_count(), 0);
    }

    #[test]
    fn test_listener_may_navigate_reentrantly() {
        let (carousel, _) = controller(vec!['a', 'b', 'c'], CarouselOptions::default());
        let carousel = Rc::new(carousel);
        let weak = Rc::downgrade(&carousel);

        carousel.subscribe(move |index| {
            if index == 1 {
                if let Some(carousel) = weak.upgrade() {
                    carousel.next();
                }
            }
        });

        carousel.next();
        assert_eq!(carousel.current_index(), 2);
    }

    #[test]
    fn test_timer_requires_activation_and_listener() {
        let (carousel, scheduler) = controller(vec!['a', 'b', 'c'], CarouselOptions::default());

        carousel.activate();
        assert!(!carousel.is_auto_advancing());

        let (id, _) = recorder(&carousel);
        assert!(carousel.is_auto_advancing());
        assert_eq!(scheduler.active(), 1);
        assert_eq!(scheduler.period(), Some(AUTO_ADVANCE_PERIOD));

        carousel.unsubscribe(id);
        assert!(!carousel.is_auto_advancing());
        assert_eq!(scheduler.active(), 0);
    }

    #[test]
    fn test_timer_ticks_advance_and_wrap() {
        let (carousel, scheduler) = controller(vec!['a', 'b', 'c'], CarouselOptions::default());
        let (_, seen) = recorder(&carousel);
        carousel.activate();

        for _ in 0..3 {
            scheduler.fire();
        }

        assert_eq!(carousel.current_index(), 0);
        assert_eq!(*seen.borrow(), vec![1, 2, 0]);
    }

    #[test]
    fn test_deactivate_and_reactivate() {
        let (carousel, scheduler) = controller(vec!['a', 'b', 'c'], CarouselOptions::default());
        let _ = recorder(&carousel);
        carousel.activate();
        scheduler.fire();

        carousel.deactivate();
        assert_eq!(scheduler.active(), 0);
        assert_eq!(scheduler.fire(), 0);
        assert_eq!(carousel.current_index(), 1);

        carousel.activate();
        assert_eq!(scheduler.active(), 1);
        scheduler.fire();
        assert_eq!(carousel.current_index(), 2);
    }

    #[test]
    fn test_drop_cancels_timer() {
        let (carousel, scheduler) = controller(vec!['a', 'b'], CarouselOptions::default());
        let (_, seen) = recorder(&carousel);
        carousel.activate();
        assert_eq!(scheduler.active(), 1);

        drop(carousel);

        assert_eq!(scheduler.active(), 0);
        assert_eq!(scheduler.fire(), 0);
        assert!(seen.borrow().is_empty());
    }

    #[test]
    fn test_independent_policy_keeps_timer() {
        let (carousel, scheduler) = controller(vec!['a', 'b', 'c'], CarouselOptions::default());
        let _ = recorder(&carousel);
        carousel.activate();

        carousel.next();
        carousel.go_to(0).unwrap();

        assert_eq!(scheduler.started(), 1);
    }

    #[test]
    fn test_reset_policy_restarts_timer_on_manual_change() {
        let options = CarouselOptions::default()
            .policy(AdvancePolicy::ResetOnInteraction)
            .period(Duration::from_secs(2));
        let (carousel, scheduler) = controller(vec!['a', 'b', 'c'], options);
        let _ = recorder(&carousel);
        carousel.activate();
        assert_eq!(scheduler.started(), 1);

        carousel.next();
        assert_eq!(scheduler.started(), 2);
        assert_eq!(scheduler.active(), 1);
        assert_eq!(scheduler.period(), Some(Duration::from_secs(2)));

        // No change, no restart
        carousel.go_to(1).unwrap();
        assert_eq!(scheduler.started(), 2);

        scheduler.fire();
        assert_eq!(carousel.current_index(), 2);
        assert_eq!(scheduler.started(), 2);
    }

    #[test]
    fn test_reset_policy_without_running_timer_starts_nothing() {
        let options = CarouselOptions::default().policy(AdvancePolicy::ResetOnInteraction);
        let (carousel, scheduler) = controller(vec!['a', 'b'], options);

        carousel.next();

        assert_eq!(scheduler.started(), 0);
    }

    #[test]
    fn test_options_builder() {
        let options = CarouselOptions::default()
            .looping(false)
            .period(Duration::from_millis(750))
            .policy(AdvancePolicy::ResetOnInteraction);

        assert!(!options.looping);
        assert_eq!(options.period, Duration::from_millis(750));
        assert_eq!(options.policy, AdvancePolicy::ResetOnInteraction);
        assert_eq!(AdvancePolicy::default(), AdvancePolicy::Independent);
    }
}
