//! Small helpers shared by the pages, also published to other scripts on
//! the page as `window.CosmicDestiny`.

use std::cell::{Cell, RefCell};
use std::rc::Rc;

use chrono::{DateTime, NaiveDate};
use gloo_timers::callback::Timeout;
use wasm_bindgen::prelude::*;
use web_sys::js_sys::{Date, Function, Object, Reflect};

use crate::zodiac::{zodiac_sign_name, ZodiacSign};

pub const GLOBAL_NAMESPACE: &str = "CosmicDestiny";
pub const INVALID_DATE: &str = "Invalid Date";

/// Something that can run a task once after a delay. Dropping the returned
/// handle cancels the task if it has not run yet.
pub trait Timer: Clone + 'static {
    type Handle: 'static;

    fn schedule(&self, millis: u32, task: Box<dyn FnOnce()>) -> Self::Handle;
}

/// `setTimeout` through gloo. `Timeout` clears itself on drop.
#[derive(Clone, Copy, Debug, Default)]
pub struct BrowserTimer;

impl Timer for BrowserTimer {
    type Handle = Timeout;

    fn schedule(&self, millis: u32, task: Box<dyn FnOnce()>) -> Timeout {
        Timeout::new(millis, task)
    }
}

/// Long US form, e.g. "March 21, 2024".
pub fn format_date(date: NaiveDate) -> String {
    date.format("%B %-d, %Y").to_string()
}

/// Accepts `YYYY-MM-DD` or an RFC 3339 timestamp.
pub fn format_date_str(input: &str) -> Option<String> {
    let input = input.trim();
    if let Ok(date) = NaiveDate::parse_from_str(input, "%Y-%m-%d") {
        return Some(format_date(date));
    }
    DateTime::parse_from_rfc3339(input)
        .ok()
        .map(|stamp| format_date(stamp.date_naive()))
}

pub fn debounce<A: 'static>(func: impl Fn(A) + 'static, wait: u32) -> impl Fn(A) + 'static {
    debounce_with(BrowserTimer, func, wait)
}

pub fn throttle<A: 'static>(func: impl Fn(A) + 'static, limit: u32) -> impl Fn(A) + 'static {
    throttle_with(BrowserTimer, func, limit)
}

/// Every call cancels the pending one, so a burst collapses into a single
/// trailing call with the last arguments.
pub fn debounce_with<T: Timer, A: 'static>(
    timer: T,
    func: impl Fn(A) + 'static,
    wait: u32,
) -> impl Fn(A) + 'static {
    let func = Rc::new(func);
    let pending: Rc<RefCell<Option<T::Handle>>> = Rc::default();
    move |args: A| {
        pending.borrow_mut().take();
        let func = func.clone();
        let handle = timer.schedule(wait, Box::new(move || func(args)));
        *pending.borrow_mut() = Some(handle);
    }
}

/// The first call runs immediately; anything arriving within `limit` after
/// it is dropped.
pub fn throttle_with<T: Timer, A: 'static>(
    timer: T,
    func: impl Fn(A) + 'static,
    limit: u32,
) -> impl Fn(A) + 'static {
    let in_throttle = Rc::new(Cell::new(false));
    let reset: Rc<RefCell<Option<T::Handle>>> = Rc::default();
    move |args: A| {
        if in_throttle.get() {
            return;
        }
        func(args);
        in_throttle.set(true);
        let flag = in_throttle.clone();
        let handle = timer.schedule(limit, Box::new(move || flag.set(false)));
        *reset.borrow_mut() = Some(handle);
    }
}

fn format_js_date(value: &JsValue) -> String {
    let date = Date::new(value);
    if date.get_time().is_nan() {
        return INVALID_DATE.to_string();
    }
    NaiveDate::from_ymd_opt(date.get_full_year() as i32, date.get_month() + 1, date.get_date())
        .map(format_date)
        .unwrap_or_else(|| INVALID_DATE.to_string())
}

fn call_js(func: &Function, arg: &JsValue) {
    if let Err(err) = func.call1(&JsValue::NULL, arg) {
        log::warn!("wrapped callback threw: {:?}", err);
    }
}

/// Publishes `formatDate`, `getZodiacSign`, `debounce`, `throttle` and the
/// sign table under `window.CosmicDestiny`. Wrapped functions forward their
/// first argument.
pub fn install_global_api() -> Result<(), JsValue> {
    let window = web_sys::window().ok_or_else(|| JsValue::from_str("no window"))?;
    let api = Object::new();

    let format_date_js = Closure::wrap(Box::new(|value: JsValue| format_js_date(&value))
        as Box<dyn Fn(JsValue) -> String>);
    Reflect::set(&api, &"formatDate".into(), &format_date_js.into_js_value())?;

    let zodiac_js = Closure::wrap(Box::new(|month: u32, day: u32| {
        zodiac_sign_name(month, day).to_string()
    }) as Box<dyn Fn(u32, u32) -> String>);
    Reflect::set(&api, &"getZodiacSign".into(), &zodiac_js.into_js_value())?;

    let debounce_js = Closure::wrap(Box::new(|func: Function, wait: f64| {
        let wrapped = debounce(move |arg: JsValue| call_js(&func, &arg), wait as u32);
        Closure::wrap(Box::new(move |arg: JsValue| wrapped(arg)) as Box<dyn Fn(JsValue)>)
            .into_js_value()
    }) as Box<dyn Fn(Function, f64) -> JsValue>);
    Reflect::set(&api, &"debounce".into(), &debounce_js.into_js_value())?;

    let throttle_js = Closure::wrap(Box::new(|func: Function, limit: f64| {
        let wrapped = throttle(move |arg: JsValue| call_js(&func, &arg), limit as u32);
        Closure::wrap(Box::new(move |arg: JsValue| wrapped(arg)) as Box<dyn Fn(JsValue)>)
            .into_js_value()
    }) as Box<dyn Fn(Function, f64) -> JsValue>);
    Reflect::set(&api, &"throttle".into(), &throttle_js.into_js_value())?;

    let signs = serde_wasm_bindgen::to_value(&ZodiacSign::ALL)?;
    Reflect::set(&api, &"signs".into(), &signs)?;

    Reflect::set(&window, &GLOBAL_NAMESPACE.into(), &api)?;
    log::debug!("installed window.{}", GLOBAL_NAMESPACE);
    Ok(())
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;

    struct Scheduled {
        due: u32,
        cancelled: Rc<Cell<bool>>,
        task: Box<dyn FnOnce()>,
    }

    #[derive(Default)]
    struct Clock {
        now: u32,
        tasks: Vec<Scheduled>,
    }

    /// Timer driven by hand from tests.
    #[derive(Clone, Default)]
    pub(crate) struct ManualTimer {
        clock: Rc<RefCell<Clock>>,
    }

    pub(crate) struct ManualHandle(Rc<Cell<bool>>);

    impl Drop for ManualHandle {
        fn drop(&mut self) {
            self.0.set(true);
        }
    }

    impl Timer for ManualTimer {
        type Handle = ManualHandle;

        fn schedule(&self, millis: u32, task: Box<dyn FnOnce()>) -> ManualHandle {
            let cancelled = Rc::new(Cell::new(false));
            let mut clock = self.clock.borrow_mut();
            let due = clock.now + millis;
            clock.tasks.push(Scheduled {
                due,
                cancelled: cancelled.clone(),
                task,
            });
            ManualHandle(cancelled)
        }
    }

    impl ManualTimer {
        pub(crate) fn advance(&self, millis: u32) {
            let target = self.clock.borrow().now + millis;
            loop {
                let next = {
                    let mut clock = self.clock.borrow_mut();
                    clock.tasks.retain(|t| !t.cancelled.get());
                    let due = clock
                        .tasks
                        .iter()
                        .enumerate()
                        .filter(|(_, t)| t.due <= target)
                        .min_by_key(|(_, t)| t.due)
                        .map(|(i, _)| i);
                    match due {
                        Some(i) => {
                            let task = clock.tasks.remove(i);
                            clock.now = task.due;
                            Some(task.task)
                        }
                        None => {
                            clock.now = target;
                            None
                        }
                    }
                };
                match next {
                    Some(task) => task(),
                    None => break,
                }
            }
        }
    }

    fn recorder() -> (Rc<RefCell<Vec<u32>>>, impl Fn(u32) + 'static) {
        let calls = Rc::new(RefCell::new(Vec::new()));
        let sink = calls.clone();
        (calls, move |value| sink.borrow_mut().push(value))
    }

    #[test]
    fn debounce_collapses_a_burst_into_one_trailing_call() {
        let timer = ManualTimer::default();
        let (calls, record) = recorder();
        let debounced = debounce_with(timer.clone(), record, 100);

        debounced(1);
        timer.advance(50);
        debounced(2);
        timer.advance(50);
        debounced(3);
        assert!(calls.borrow().is_empty());

        timer.advance(99);
        assert!(calls.borrow().is_empty());
        timer.advance(1);
        assert_eq!(*calls.borrow(), vec![3]);

        timer.advance(1000);
        assert_eq!(*calls.borrow(), vec![3]);
    }

    #[test]
    fn debounce_fires_again_after_a_quiet_period() {
        let timer = ManualTimer::default();
        let (calls, record) = recorder();
        let debounced = debounce_with(timer.clone(), record, 20);

        debounced(1);
        timer.advance(20);
        debounced(2);
        timer.advance(20);
        assert_eq!(*calls.borrow(), vec![1, 2]);
    }

    #[test]
    fn throttle_fires_first_call_and_drops_the_rest_within_limit() {
        let timer = ManualTimer::default();
        let (calls, record) = recorder();
        let throttled = throttle_with(timer.clone(), record, 100);

        throttled(1);
        assert_eq!(*calls.borrow(), vec![1]);
        timer.advance(10);
        throttled(2);
        timer.advance(80);
        throttled(3);
        assert_eq!(*calls.borrow(), vec![1]);

        timer.advance(10);
        throttled(4);
        assert_eq!(*calls.borrow(), vec![1, 4]);
    }

    #[test]
    fn formats_dates_in_long_us_form() {
        let date = NaiveDate::from_ymd_opt(2024, 3, 5).unwrap();
        assert_eq!(format_date(date), "March 5, 2024");
        assert_eq!(format_date_str("2023-12-25").as_deref(), Some("December 25, 2023"));
        assert_eq!(
            format_date_str("2021-07-23T10:00:00+02:00").as_deref(),
            Some("July 23, 2021")
        );
        assert_eq!(format_date_str("not a date"), None);
    }
}
