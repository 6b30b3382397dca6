// Every tunable of the presentation engine is fixed at compile time.

/// Duration of the outline overlay glide towards the pointer.
pub const OUTLINE_GLIDE_MS: f64 = 500.0;

pub const HOVER_SCALE: f64 = 1.5;
pub const HOVER_TINT: &str = "rgba(14, 215, 181, 0.1)";
pub const BASELINE_TINT: &str = "transparent";

pub const REVEAL_OFFSET_PX: u32 = 20;
pub const REVEAL_DURATION_MS: u32 = 800;
pub const REVEAL_STAGGER_MS: u32 = 200;
pub const REVEAL_EASING: &str = "cubic-bezier(0.25, 0.8, 0.25, 1)";
/// Delay between mount and the reveal trigger.
pub const REVEAL_TRIGGER_MS: u32 = 100;

pub const COUNTER_DURATION_MS: f64 = 2000.0;
/// Assumed frame budget. Displays far from 60Hz stretch or shrink the run.
pub const COUNTER_FRAME_MS: f64 = 16.0;

/// Header switches to its compact style past this many pixels of scroll.
pub const HEADER_SCROLL_THRESHOLD: f64 = 50.0;

pub const ACKNOWLEDGMENT: &str = "Thank you for your message! We will get back to you soon.";

pub mod selectors {
    pub const CURSOR_DOT: &str = ".cursor-dot";
    pub const CURSOR_OUTLINE: &str = ".cursor-outline";
    pub const INTERACTIVE: &str = "a, button, .service-card, .work-card, .testimonial-card";
    pub const REVEAL: &str = ".reveal-text";
    pub const STATS: &str = ".stats";
    pub const STAT_NUMBER: &str = ".stat-number";
    pub const FRAGMENT_ANCHORS: &str = "a[href^=\"#\"]";
    pub const CONTACT_FORM: &str = ".contact-form";
}
