use log::Level;

pub const SITE_NAME: &str = "Cosmic Destiny";

/// Scroll offset past which the navbar switches to its solid background.
pub const NAVBAR_SOLID_AFTER: f64 = 100.0;
/// Scroll offset past which the back-to-top control is shown.
pub const BACK_TO_TOP_AFTER: f64 = 300.0;
pub const PARALLAX_FACTOR: f64 = 0.5;

pub const COUNTER_DURATION_MS: u32 = 2000;
pub const COUNTER_TICK_MS: u32 = 16;

pub const RIPPLE_LIFETIME_MS: u32 = 600;
pub const SELECT_FLASH_MS: u32 = 1000;
pub const TAB_FADE_DELAY_MS: u32 = 10;

pub const FADE_IN_THRESHOLD: f64 = 0.1;
pub const FADE_IN_ROOT_MARGIN: &str = "0px 0px -50px 0px";
pub const COUNTER_THRESHOLD: f64 = 0.5;

pub const ACCENT_SHADOW: &str = "0 12px 40px rgba(108, 92, 231, 0.3)";
pub const ACCENT_BORDER: &str = "var(--violet-blue)";

#[cfg(debug_assertions)]
pub fn log_level() -> Level {
    Level::Info
}

#[cfg(not(debug_assertions))]
pub fn log_level() -> Level {
    Level::Warn
}
