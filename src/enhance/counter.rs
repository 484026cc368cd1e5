use std::cell::RefCell;
use std::rc::Rc;

use gloo_timers::callback::Interval;
use wasm_bindgen::JsValue;
use web_sys::{Document, Element, IntersectionObserverInit};

use super::{select_all, Enhancements, ViewportObserver};
use crate::config::{COUNTER_DURATION_MS, COUNTER_THRESHOLD, COUNTER_TICK_MS};

pub const COUNTER_SELECTOR: &str = "[data-target]";
pub const COUNTED_CLASS: &str = "counted";

/// Counts from zero towards `target` in fixed steps, one step per tick.
#[derive(Clone, Debug, PartialEq)]
pub struct CounterAnimation {
    target: i64,
    increment: f64,
    current: f64,
    finished: bool,
}

impl CounterAnimation {
    pub fn new(target: i64, duration_ms: u32) -> Self {
        let ticks = (duration_ms as f64 / COUNTER_TICK_MS as f64).max(1.0);
        Self {
            target,
            increment: target as f64 / ticks,
            current: 0.0,
            finished: false,
        }
    }

    /// Next value to display, or `None` once the target has been shown.
    pub fn tick(&mut self) -> Option<i64> {
        if self.finished {
            return None;
        }
        self.current += self.increment;
        if self.current >= self.target as f64 {
            self.finished = true;
            Some(self.target)
        } else {
            Some(self.current.floor() as i64)
        }
    }

    pub fn is_finished(&self) -> bool {
        self.finished
    }
}

/// Leading integer of an attribute value, the way `parseInt` reads it
/// ("250+" is 250).
pub fn parse_target(raw: &str) -> Option<i64> {
    let raw = raw.trim_start();
    let digits_end = raw
        .char_indices()
        .find(|&(i, c)| !(c.is_ascii_digit() || (i == 0 && (c == '-' || c == '+'))))
        .map(|(i, _)| i)
        .unwrap_or(raw.len());
    raw[..digits_end].parse().ok()
}

type IntervalSlot = Rc<RefCell<Option<Interval>>>;

/// Running counter timers. Each clears its own slot when it finishes;
/// dropping the set stops whatever is still running.
#[derive(Default)]
pub struct CounterAnimations {
    running: Rc<RefCell<Vec<IntervalSlot>>>,
}

impl CounterAnimations {
    fn registry(&self) -> Rc<RefCell<Vec<IntervalSlot>>> {
        self.running.clone()
    }
}

impl Drop for CounterAnimations {
    fn drop(&mut self) {
        for slot in self.running.borrow().iter() {
            slot.borrow_mut().take();
        }
    }
}

fn start(running: &RefCell<Vec<IntervalSlot>>, element: Element, mut animation: CounterAnimation) {
    let slot: IntervalSlot = Rc::default();
    let own_slot = slot.clone();
    let interval = Interval::new(COUNTER_TICK_MS, move || {
        if let Some(value) = animation.tick() {
            element.set_text_content(Some(&value.to_string()));
        }
        if animation.is_finished() {
            own_slot.borrow_mut().take();
        }
    });
    *slot.borrow_mut() = Some(interval);
    running.borrow_mut().push(slot);
}

/// A counter runs once: only on its first intersection.
pub fn should_start(is_intersecting: bool, already_counted: bool) -> bool {
    is_intersecting && !already_counted
}

pub fn wire(document: &Document, page: &mut Enhancements) {
    let counters = select_all(document, COUNTER_SELECTOR);
    if counters.is_empty() {
        return;
    }

    let init = IntersectionObserverInit::new();
    init.set_threshold(&JsValue::from_f64(COUNTER_THRESHOLD));

    let running = page.counters().registry();
    let observer = ViewportObserver::new(&init, move |entry, _| {
        let element = entry.target();
        if !should_start(entry.is_intersecting(), element.class_list().contains(COUNTED_CLASS)) {
            return;
        }
        let _ = element.class_list().add_1(COUNTED_CLASS);

        match element.get_attribute("data-target").as_deref().and_then(parse_target) {
            Some(target) => {
                start(&running, element, CounterAnimation::new(target, COUNTER_DURATION_MS))
            }
            None => log::warn!("counter has no numeric data-target"),
        }
    });

    match observer {
        Ok(observer) => {
            for counter in &counters {
                observer.observe(counter);
            }
            page.observe(observer);
        }
        Err(err) => log::warn!("counter observer unavailable: {:?}", err),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn run(mut animation: CounterAnimation) -> Vec<i64> {
        std::iter::from_fn(|| animation.tick()).collect()
    }

    #[test]
    fn counts_up_to_exact_target() {
        let values = run(CounterAnimation::new(100, COUNTER_DURATION_MS));
        assert!(values.windows(2).all(|pair| pair[0] <= pair[1]));
        assert_eq!(values.last(), Some(&100));
        assert!(values.iter().all(|&v| (0..=100).contains(&v)));
        assert!((125..=126).contains(&values.len()));
    }

    #[test]
    fn finished_animation_stays_quiet() {
        let mut animation = CounterAnimation::new(100, COUNTER_DURATION_MS);
        while animation.tick().is_some() {}
        assert!(animation.is_finished());
        assert_eq!(animation.tick(), None);
        assert_eq!(animation.tick(), None);
    }

    #[test]
    fn non_positive_targets_snap_immediately() {
        assert_eq!(run(CounterAnimation::new(0, COUNTER_DURATION_MS)), vec![0]);
        assert_eq!(run(CounterAnimation::new(-5, COUNTER_DURATION_MS)), vec![-5]);
    }

    #[test]
    fn intermediate_values_are_floored() {
        let mut animation = CounterAnimation::new(10, 160);
        assert_eq!(animation.tick(), Some(1));
        let mut animation = CounterAnimation::new(5, 160);
        assert_eq!(animation.tick(), Some(0));
    }

    #[test]
    fn parses_targets_like_parse_int() {
        assert_eq!(parse_target("100"), Some(100));
        assert_eq!(parse_target(" 250+"), Some(250));
        assert_eq!(parse_target("-3"), Some(-3));
        assert_eq!(parse_target("12k clients"), Some(12));
        assert_eq!(parse_target("abc"), None);
        assert_eq!(parse_target(""), None);
    }

    #[test]
    fn starts_only_on_first_intersection() {
        assert!(should_start(true, false));
        assert!(!should_start(true, true));
        assert!(!should_start(false, false));
        assert!(!should_start(false, true));
    }
}
