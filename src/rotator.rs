//! Rotator state machine: authoritative slide index, autoplay timer
//! lifecycle and the nav-marker projection.

use log::debug;

use crate::config::RotatorConfig;
use crate::timer::IntervalTimer;

pub type AdvanceCallback = Box<dyn FnMut(usize)>;

/// Generated navigation markers, one per slide. A projection of the
/// rotator's active index, never the source of truth.
pub struct NavLinks {
    active: Vec<bool>,
}

impl NavLinks {
    fn new(count: usize) -> Self {
        let mut active = vec![false; count];
        if let Some(first) = active.first_mut() {
            *first = true;
        }
        Self { active }
    }

    pub fn len(&self) -> usize {
        self.active.len()
    }

    pub fn is_empty(&self) -> bool {
        self.active.is_empty()
    }

    pub fn is_active(&self, index: usize) -> bool {
        self.active.get(index).copied().unwrap_or(false)
    }

    pub fn active_marker(&self) -> Option<usize> {
        self.active.iter().position(|&marker| marker)
    }

    fn set_active(&mut self, index: usize) {
        for marker in &mut self.active {
            *marker = false;
        }
        self.active[index] = true;
    }
}

pub struct Rotator {
    config: RotatorConfig,
    slide_count: usize,
    active_index: usize,
    nav: NavLinks,
    timer: Option<IntervalTimer>,
    hovering: bool,
    on_advance: Option<AdvanceCallback>,
}

impl Rotator {
    /// With zero slides the instance is inert: no markers, no timer,
    /// every operation a no-op.
    pub fn new(config: RotatorConfig, slide_count: usize) -> Self {
        let mut rotator = Self {
            slide_count,
            active_index: 0,
            nav: NavLinks::new(slide_count),
            timer: None,
            hovering: false,
            on_advance: None,
            config,
        };
        rotator.arm_timer();
        rotator
    }

    pub fn set_on_advance(&mut self, callback: AdvanceCallback) {
        self.on_advance = Some(callback);
    }

    pub fn active_index(&self) -> usize {
        self.active_index
    }

    pub fn slide_count(&self) -> usize {
        self.slide_count
    }

    pub fn nav(&self) -> &NavLinks {
        &self.nav
    }

    pub fn is_playing(&self) -> bool {
        self.timer.is_some()
    }

    /// Drives the autoplay timer. Each elapsed interval moves one slide
    /// forward; ticking never re-arms the timer.
    pub fn tick(&mut self, dt: f32) {
        if self.slide_count == 0 {
            return;
        }
        let fired = self.timer.as_mut().is_some_and(|timer| timer.tick(dt));
        if fired {
            self.step_to((self.active_index + 1) % self.slide_count);
        }
    }

    /// Move one slide forward, wrapping past the end. Next control.
    pub fn advance(&mut self) {
        if self.slide_count == 0 {
            return;
        }
        self.step_to((self.active_index + 1) % self.slide_count);
        self.arm_timer();
    }

    /// Move one slide backward, wrapping past the start. Previous control.
    pub fn retreat(&mut self) {
        if self.slide_count == 0 {
            return;
        }
        self.step_to((self.active_index + self.slide_count - 1) % self.slide_count);
        self.arm_timer();
    }

    /// Activate the slide behind the clicked nav marker. Out-of-range
    /// indices are ignored.
    pub fn select(&mut self, index: usize) {
        if index >= self.slide_count {
            return;
        }
        self.step_to(index);
        self.arm_timer();
    }

    pub fn pointer_enter(&mut self) {
        self.hovering = true;
        if self.config.autopause {
            self.timer = None;
            debug!("autoplay suspended");
        }
    }

    pub fn pointer_leave(&mut self) {
        self.hovering = false;
        if self.config.autopause {
            self.arm_timer();
        }
    }

    fn step_to(&mut self, index: usize) {
        self.active_index = index;
        self.nav.set_active(index);
        debug!("slide {} active", index);
        if let Some(callback) = self.on_advance.as_mut() {
            callback(index);
        }
    }

    // Single owner of the timer slot: always cleared before a fresh
    // timer is stored, so at most one timer exists at any time.
    fn arm_timer(&mut self) {
        self.timer = None;
        if self.slide_count > 0 && self.config.autoplay && !(self.config.autopause && self.hovering) {
            self.timer = Some(IntervalTimer::new(self.config.interval_ms));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;
    use std::rc::Rc;

    use crate::constants::DEFAULT_INTERVAL_MS;

    const INTERVAL: f32 = DEFAULT_INTERVAL_MS as f32 / 1000.0;

    fn config() -> RotatorConfig {
        RotatorConfig::default()
    }

    #[test]
    fn starts_on_first_slide_with_first_marker_active() {
        let rotator = Rotator::new(config(), 3);
        assert_eq!(rotator.active_index(), 0);
        assert_eq!(rotator.nav().len(), 3);
        assert_eq!(rotator.nav().active_marker(), Some(0));
        assert!(rotator.is_playing());
    }

    #[test]
    fn full_cycle_returns_to_start() {
        for count in 1..=6 {
            let mut rotator = Rotator::new(config(), count);
            for _ in 0..count {
                rotator.advance();
            }
            assert_eq!(rotator.active_index(), 0);
        }
    }

    #[test]
    fn advance_steps_forward_one_with_single_active_marker() {
        let mut rotator = Rotator::new(config(), 5);
        for step in 0..12 {
            rotator.advance();
            let expected = (step + 1) % 5;
            assert_eq!(rotator.active_index(), expected);
            assert_eq!(rotator.nav().active_marker(), Some(expected));
            let active_count = (0..5).filter(|&marker| rotator.nav().is_active(marker)).count();
            assert_eq!(active_count, 1);
        }
    }

    #[test]
    fn retreat_steps_backward_one_with_wraparound() {
        let mut rotator = Rotator::new(config(), 4);
        rotator.retreat();
        assert_eq!(rotator.active_index(), 3);
        rotator.retreat();
        assert_eq!(rotator.active_index(), 2);
        rotator.advance();
        rotator.advance();
        assert_eq!(rotator.active_index(), 0);
    }

    #[test]
    fn select_activates_clicked_marker() {
        let mut rotator = Rotator::new(config(), 4);
        rotator.select(2);
        assert_eq!(rotator.active_index(), 2);
        assert_eq!(rotator.nav().active_marker(), Some(2));
        rotator.select(9);
        assert_eq!(rotator.active_index(), 2);
    }

    #[test]
    fn timer_tick_advances_at_interval() {
        let mut rotator = Rotator::new(config(), 3);
        rotator.tick(INTERVAL / 2.0);
        assert_eq!(rotator.active_index(), 0);
        rotator.tick(INTERVAL / 2.0);
        assert_eq!(rotator.active_index(), 1);
    }

    #[test]
    fn manual_advance_resets_the_timer() {
        let mut rotator = Rotator::new(config(), 3);
        rotator.tick(INTERVAL - 0.1);
        rotator.advance();
        assert_eq!(rotator.active_index(), 1);
        // The old deadline passing must not fire the fresh timer
        rotator.tick(0.2);
        assert_eq!(rotator.active_index(), 1);
        rotator.tick(INTERVAL);
        assert_eq!(rotator.active_index(), 2);
    }

    #[test]
    fn autoplay_disabled_never_ticks() {
        let mut autoplay_off = config();
        autoplay_off.autoplay = false;
        let mut rotator = Rotator::new(autoplay_off, 3);
        assert!(!rotator.is_playing());
        rotator.tick(INTERVAL * 3.0);
        assert_eq!(rotator.active_index(), 0);
    }

    #[test]
    fn hover_suspends_and_leave_resumes_with_full_interval() {
        let mut rotator = Rotator::new(config(), 3);
        rotator.tick(INTERVAL / 2.0);
        rotator.pointer_enter();
        assert!(!rotator.is_playing());
        rotator.tick(INTERVAL * 2.0);
        assert_eq!(rotator.active_index(), 0);
        rotator.pointer_leave();
        assert!(rotator.is_playing());
        rotator.tick(INTERVAL / 2.0);
        assert_eq!(rotator.active_index(), 0);
        rotator.tick(INTERVAL / 2.0);
        assert_eq!(rotator.active_index(), 1);
    }

    #[test]
    fn hover_ignored_without_autopause() {
        let mut autopause_off = config();
        autopause_off.autopause = false;
        let mut rotator = Rotator::new(autopause_off, 3);
        rotator.pointer_enter();
        assert!(rotator.is_playing());
        rotator.tick(INTERVAL);
        assert_eq!(rotator.active_index(), 1);
    }

    #[test]
    fn default_scenario_four_slides() {
        let mut rotator = Rotator::new(config(), 4);
        assert_eq!(rotator.active_index(), 0);
        assert_eq!(rotator.nav().active_marker(), Some(0));
        rotator.tick(INTERVAL);
        assert_eq!(rotator.active_index(), 1);
        rotator.retreat();
        assert_eq!(rotator.active_index(), 0);
        rotator.select(3);
        assert_eq!(rotator.active_index(), 3);
    }

    #[test]
    fn zero_slides_is_inert() {
        let mut rotator = Rotator::new(config(), 0);
        assert!(rotator.nav().is_empty());
        assert!(!rotator.is_playing());
        rotator.advance();
        rotator.retreat();
        rotator.select(0);
        rotator.tick(INTERVAL * 2.0);
        rotator.pointer_enter();
        rotator.pointer_leave();
        assert_eq!(rotator.active_index(), 0);
        assert!(!rotator.is_playing());
    }

    #[test]
    fn callback_fires_with_new_index() {
        let seen = Rc::new(RefCell::new(Vec::new()));
        let sink = Rc::clone(&seen);
        let mut rotator = Rotator::new(config(), 3);
        rotator.set_on_advance(Box::new(move |index| sink.borrow_mut().push(index)));
        rotator.advance();
        rotator.select(0);
        rotator.tick(INTERVAL);
        assert_eq!(*seen.borrow(), vec![1, 0, 1]);
    }
}
