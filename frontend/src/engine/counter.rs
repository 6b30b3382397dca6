use std::cell::RefCell;
use std::rc::Rc;

use gloo_render::{request_animation_frame, AnimationFrame};
use web_sys::Element;

use crate::config;

/// One-shot guard for the stats counters. Lives exactly as long as the
/// engine that owns it.
#[derive(Debug, Default)]
pub struct AnimationGate {
    has_animated: bool,
}

impl AnimationGate {
    pub fn has_animated(&self) -> bool {
        self.has_animated
    }

    /// Armed -> Triggered the first time the region is visible. Returns true
    /// only for that observation.
    pub fn observe(&mut self, region: Option<ViewportBox>, viewport_height: f64) -> bool {
        if self.has_animated {
            return false;
        }
        match region {
            Some(region) if region.intersects(viewport_height) => {
                self.has_animated = true;
                true
            }
            _ => false,
        }
    }
}

/// Vertical extent of a region relative to the viewport top.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ViewportBox {
    pub top: f64,
    pub bottom: f64,
}

impl ViewportBox {
    /// Any partial overlap counts.
    pub fn intersects(&self, viewport_height: f64) -> bool {
        self.top < viewport_height && self.bottom >= 0.0
    }
}

impl From<web_sys::DomRect> for ViewportBox {
    fn from(rect: web_sys::DomRect) -> Self {
        Self {
            top: rect.top(),
            bottom: rect.bottom(),
        }
    }
}

/// Leading decimal digits of a `data-target` value, after an optional `+`;
/// anything else counts as 0.
pub fn parse_target(raw: &str) -> u32 {
    let raw = raw.trim_start();
    let digits: String = raw
        .strip_prefix('+')
        .unwrap_or(raw)
        .chars()
        .take_while(|c| c.is_ascii_digit())
        .collect();
    digits.parse().unwrap_or(0)
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CounterStep {
    Counting(u32),
    Finished(u32),
}

impl CounterStep {
    pub fn value(self) -> u32 {
        match self {
            CounterStep::Counting(v) | CounterStep::Finished(v) => v,
        }
    }
}

#[derive(Debug)]
pub struct CounterTarget {
    target: u32,
    current: f64,
    increment: f64,
    finished: bool,
}

impl CounterTarget {
    pub fn new(target: u32) -> Self {
        let frames = config::COUNTER_DURATION_MS / config::COUNTER_FRAME_MS;
        Self {
            target,
            current: 0.0,
            increment: f64::from(target) / frames,
            finished: false,
        }
    }

    /// Advances one frame. Once the accumulator reaches the target the
    /// display is pinned to the target exactly and further steps are no-ops.
    pub fn step(&mut self) -> CounterStep {
        if self.finished {
            return CounterStep::Finished(self.target);
        }
        self.current += self.increment;
        if self.current < f64::from(self.target) {
            CounterStep::Counting(self.current.floor() as u32)
        } else {
            self.finished = true;
            CounterStep::Finished(self.target)
        }
    }
}

/// A counter element animating on animation frames.
pub struct CounterRun {
    element: Element,
    counter: RefCell<CounterTarget>,
    frame: RefCell<Option<AnimationFrame>>,
}

impl CounterRun {
    /// Runs the first step immediately, the rest once per frame.
    pub fn start(element: Element) -> Rc<Self> {
        let target = element
            .get_attribute("data-target")
            .map(|raw| parse_target(&raw))
            .unwrap_or(0);
        let run = Rc::new(Self {
            element,
            counter: RefCell::new(CounterTarget::new(target)),
            frame: RefCell::new(None),
        });
        run.tick();
        run
    }

    fn tick(self: &Rc<Self>) {
        self.frame.borrow_mut().take();
        let step = self.counter.borrow_mut().step();
        self.element.set_text_content(Some(&step.value().to_string()));
        if let CounterStep::Counting(_) = step {
            let run = Rc::clone(self);
            let handle = request_animation_frame(move |_| run.tick());
            *self.frame.borrow_mut() = Some(handle);
        }
    }

    /// Drops any pending frame, which also releases the frame's hold on `self`.
    pub fn cancel(&self) {
        self.frame.borrow_mut().take();
    }
}
