use web_sys::js_sys::{Object, Reflect};
use web_sys::{Document, FillMode, HtmlElement, KeyframeAnimationOptions};

use super::dom;
use crate::config::{self, selectors};

#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct PointerPosition {
    pub x: f64,
    pub y: f64,
}

impl PointerPosition {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    fn left(&self) -> String {
        format!("{}px", self.x)
    }

    fn top(&self) -> String {
        format!("{}px", self.y)
    }
}

/// Visual state of the outline overlay.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Affordance {
    #[default]
    Baseline,
    Hovering,
}

impl Affordance {
    pub fn scale(self) -> f64 {
        match self {
            Affordance::Baseline => 1.0,
            Affordance::Hovering => config::HOVER_SCALE,
        }
    }

    pub fn background(self) -> &'static str {
        match self {
            Affordance::Baseline => config::BASELINE_TINT,
            Affordance::Hovering => config::HOVER_TINT,
        }
    }

    /// Scales about the overlay's own center.
    pub fn transform(self) -> String {
        format!("translate(-50%, -50%) scale({})", self.scale())
    }
}

/// Where overlay writes end up. The page uses [`DomOverlay`].
pub trait OverlayTarget {
    fn place_dot(&self, position: PointerPosition);
    fn glide_outline(&self, position: PointerPosition);
    fn style_outline(&self, affordance: Affordance);
}

/// The dot and outline elements, either of which may be missing from the page.
pub struct DomOverlay {
    dot: Option<HtmlElement>,
    outline: Option<HtmlElement>,
}

impl DomOverlay {
    pub fn find(document: &Document) -> Self {
        let dot = dom::query_html(document, selectors::CURSOR_DOT);
        let outline = dom::query_html(document, selectors::CURSOR_OUTLINE);
        if dot.is_none() || outline.is_none() {
            log::debug!(
                "cursor overlay incomplete (dot: {}, outline: {})",
                dot.is_some(),
                outline.is_some()
            );
        }
        Self { dot, outline }
    }
}

impl OverlayTarget for DomOverlay {
    fn place_dot(&self, position: PointerPosition) {
        if let Some(dot) = &self.dot {
            dom::set_styles(dot, &[("left", &position.left()), ("top", &position.top())]);
        }
    }

    fn glide_outline(&self, position: PointerPosition) {
        let Some(outline) = &self.outline else {
            return;
        };
        let keyframe = Object::new();
        let _ = Reflect::set(&keyframe, &"left".into(), &position.left().into());
        let _ = Reflect::set(&keyframe, &"top".into(), &position.top().into());

        let options = KeyframeAnimationOptions::new();
        options.set_duration(config::OUTLINE_GLIDE_MS);
        options.set_fill(FillMode::Forwards);
        let _ = outline.animate_with_keyframe_animation_options(Some(&keyframe), &options);
    }

    fn style_outline(&self, affordance: Affordance) {
        if let Some(outline) = &self.outline {
            dom::set_styles(
                outline,
                &[
                    ("transform", &affordance.transform()),
                    ("background-color", affordance.background()),
                ],
            );
        }
    }
}

/// Single owner of the cursor overlay. The pointer follower and the hover
/// handlers both write through here; the last write wins.
pub struct CursorOverlay<T: OverlayTarget = DomOverlay> {
    target: T,
    position: Option<PointerPosition>,
    affordance: Affordance,
}

impl<T: OverlayTarget> CursorOverlay<T> {
    pub fn new(target: T) -> Self {
        Self {
            target,
            position: None,
            affordance: Affordance::Baseline,
        }
    }

    /// Dot jumps to `position`; the outline glides there.
    pub fn set_position(&mut self, position: PointerPosition) {
        self.position = Some(position);
        self.target.place_dot(position);
        self.target.glide_outline(position);
    }

    pub fn set_affordance(&mut self, affordance: Affordance) {
        self.affordance = affordance;
        self.target.style_outline(affordance);
    }

    pub fn position(&self) -> Option<PointerPosition> {
        self.position
    }

    pub fn affordance(&self) -> Affordance {
        self.affordance
    }
}

/// Per-element hover flags, indexed by the element's position in the
/// interactive set. Only a change in an element's own flag produces an
/// affordance write; repeated or unmatched events are dropped.
#[derive(Debug, Default)]
pub struct HoverTracker {
    hovering: Vec<bool>,
}

impl HoverTracker {
    pub fn new(len: usize) -> Self {
        Self {
            hovering: vec![false; len],
        }
    }

    pub fn enter(&mut self, index: usize) -> Option<Affordance> {
        self.flip(index, true).then_some(Affordance::Hovering)
    }

    pub fn leave(&mut self, index: usize) -> Option<Affordance> {
        self.flip(index, false).then_some(Affordance::Baseline)
    }

    pub fn is_hovering(&self, index: usize) -> bool {
        self.hovering.get(index).copied().unwrap_or(false)
    }

    fn flip(&mut self, index: usize, hovering: bool) -> bool {
        match self.hovering.get_mut(index) {
            Some(flag) if *flag != hovering => {
                *flag = hovering;
                true
            }
            _ => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;

    #[derive(Debug, PartialEq)]
    enum Write {
        Dot(PointerPosition),
        Outline(PointerPosition),
        Style(Affordance),
    }

    #[derive(Default)]
    struct Recorder {
        writes: RefCell<Vec<Write>>,
    }

    impl OverlayTarget for Recorder {
        fn place_dot(&self, position: PointerPosition) {
            self.writes.borrow_mut().push(Write::Dot(position));
        }

        fn glide_outline(&self, position: PointerPosition) {
            self.writes.borrow_mut().push(Write::Outline(position));
        }

        fn style_outline(&self, affordance: Affordance) {
            self.writes.borrow_mut().push(Write::Style(affordance));
        }
    }

    impl OverlayTarget for &Recorder {
        fn place_dot(&self, position: PointerPosition) {
            (*self).place_dot(position)
        }

        fn glide_outline(&self, position: PointerPosition) {
            (*self).glide_outline(position)
        }

        fn style_outline(&self, affordance: Affordance) {
            (*self).style_outline(affordance)
        }
    }

    #[test]
    fn dot_tracks_every_move_exactly() {
        let recorder = Recorder::default();
        let mut overlay = CursorOverlay::new(&recorder);
        let moves = [
            PointerPosition::new(0.0, 0.0),
            PointerPosition::new(13.5, 240.25),
            PointerPosition::new(1919.0, 1079.0),
            PointerPosition::new(13.5, 240.25),
        ];

        for position in moves {
            overlay.set_position(position);
            assert_eq!(overlay.position(), Some(position));
        }

        let dots: Vec<_> = recorder
            .writes
            .borrow()
            .iter()
            .filter_map(|w| match w {
                Write::Dot(p) => Some(*p),
                _ => None,
            })
            .collect();
        assert_eq!(dots, moves);
    }

    #[test]
    fn outline_glides_to_the_same_point_as_the_dot() {
        let recorder = Recorder::default();
        let mut overlay = CursorOverlay::new(&recorder);
        overlay.set_position(PointerPosition::new(42.0, 7.0));

        assert_eq!(
            *recorder.writes.borrow(),
            vec![
                Write::Dot(PointerPosition::new(42.0, 7.0)),
                Write::Outline(PointerPosition::new(42.0, 7.0)),
            ]
        );
    }

    fn hover<T: OverlayTarget>(overlay: &mut CursorOverlay<T>, change: Option<Affordance>) {
        if let Some(affordance) = change {
            overlay.set_affordance(affordance);
        }
    }

    #[test]
    fn enter_then_leave_returns_outline_to_baseline() {
        let recorder = Recorder::default();
        let mut overlay = CursorOverlay::new(&recorder);
        let mut tracker = HoverTracker::new(1);

        hover(&mut overlay, tracker.enter(0));
        assert_eq!(overlay.affordance(), Affordance::Hovering);
        assert_eq!(overlay.affordance().transform(), "translate(-50%, -50%) scale(1.5)");

        hover(&mut overlay, tracker.leave(0));
        assert_eq!(overlay.affordance(), Affordance::Baseline);
        assert_eq!(overlay.affordance().transform(), "translate(-50%, -50%) scale(1)");
        assert_eq!(overlay.affordance().background(), "transparent");
        assert!(!tracker.is_hovering(0));
    }

    #[test]
    fn interleaved_hovers_resolve_per_element() {
        let mut overlay = CursorOverlay::new(Recorder::default());
        let mut tracker = HoverTracker::new(2);

        hover(&mut overlay, tracker.enter(0));
        hover(&mut overlay, tracker.enter(1));
        hover(&mut overlay, tracker.leave(0));
        assert!(!tracker.is_hovering(0));
        assert!(tracker.is_hovering(1));
        // shared overlay follows the most recent event
        assert_eq!(overlay.affordance(), Affordance::Baseline);

        hover(&mut overlay, tracker.leave(1));
        assert!(!tracker.is_hovering(1));
        assert_eq!(overlay.affordance(), Affordance::Baseline);
    }

    #[test]
    fn repeated_events_do_not_rewrite_the_outline() {
        let recorder = Recorder::default();
        let mut overlay = CursorOverlay::new(&recorder);
        let mut tracker = HoverTracker::new(1);

        hover(&mut overlay, tracker.leave(0));
        hover(&mut overlay, tracker.enter(0));
        hover(&mut overlay, tracker.enter(0));
        hover(&mut overlay, tracker.leave(0));
        hover(&mut overlay, tracker.leave(0));

        assert_eq!(
            *recorder.writes.borrow(),
            vec![Write::Style(Affordance::Hovering), Write::Style(Affordance::Baseline)]
        );
    }

    #[test]
    fn unknown_hover_index_is_ignored() {
        let mut tracker = HoverTracker::new(1);
        assert_eq!(tracker.enter(5), None);
        assert!(!tracker.is_hovering(5));
        assert!(!tracker.is_hovering(0));
    }
}
