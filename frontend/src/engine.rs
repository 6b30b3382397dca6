//! Interactive layer of the page: cursor follower, hover affordance, staged
//! reveal, stats counters, smooth anchor scrolling and the contact form stub.
//!
//! [`PresentationEngine::mount`] attaches to whatever regions the document
//! currently has. Dropping the engine detaches every listener and cancels
//! pending timers and frames.

pub mod anchors;
pub mod counter;
pub mod cursor;
pub mod dom;
pub mod form;
pub mod reveal;

use std::cell::RefCell;
use std::rc::Rc;

use gloo_events::{EventListener, EventListenerOptions};
use gloo_timers::callback::Timeout;
use log::{debug, info, warn};
use wasm_bindgen::JsCast;
use web_sys::{Document, HtmlFormElement, MouseEvent, Window};

use crate::config::{self, selectors};
use counter::{AnimationGate, CounterRun, ViewportBox};
use cursor::{CursorOverlay, DomOverlay, HoverTracker, PointerPosition};
use form::DomForm;
use reveal::RevealStage;

#[derive(Default)]
struct StatsState {
    gate: AnimationGate,
    runs: Vec<Rc<CounterRun>>,
}

#[derive(Default)]
pub struct PresentationEngine {
    listeners: Vec<EventListener>,
    reveal_timer: Option<Timeout>,
    stats: Rc<RefCell<StatsState>>,
}

impl PresentationEngine {
    pub fn mount() -> Self {
        let mut engine = Self::default();
        let Some(window) = web_sys::window() else {
            warn!("no window, presentation engine left inert");
            return engine;
        };
        let Some(document) = window.document() else {
            warn!("no document, presentation engine left inert");
            return engine;
        };

        let overlay = Rc::new(RefCell::new(CursorOverlay::new(DomOverlay::find(&document))));
        engine.follow_pointer(&window, &overlay);
        engine.attach_hover(&document, &overlay);
        engine.stage_reveal(&document);
        engine.attach_anchors(&document);
        engine.watch_stats(&window, &document);
        engine.attach_form(&window, &document);

        info!("presentation engine mounted ({} listeners)", engine.listeners.len());
        engine
    }

    fn follow_pointer(&mut self, window: &Window, overlay: &Rc<RefCell<CursorOverlay>>) {
        let overlay = Rc::clone(overlay);
        self.listeners.push(EventListener::new(window, "mousemove", move |event| {
            if let Some(event) = event.dyn_ref::<MouseEvent>() {
                let position = PointerPosition::new(event.client_x().into(), event.client_y().into());
                overlay.borrow_mut().set_position(position);
            }
        }));
    }

    fn attach_hover(&mut self, document: &Document, overlay: &Rc<RefCell<CursorOverlay>>) {
        let elements = dom::query_all(document, selectors::INTERACTIVE);
        let hover = Rc::new(RefCell::new(HoverTracker::new(elements.len())));

        for (index, element) in elements.iter().enumerate() {
            let (enter_overlay, enter_hover) = (Rc::clone(overlay), Rc::clone(&hover));
            self.listeners.push(EventListener::new(element, "mouseenter", move |_| {
                if let Some(affordance) = enter_hover.borrow_mut().enter(index) {
                    enter_overlay.borrow_mut().set_affordance(affordance);
                }
            }));

            let (leave_overlay, leave_hover) = (Rc::clone(overlay), Rc::clone(&hover));
            self.listeners.push(EventListener::new(element, "mouseleave", move |_| {
                if let Some(affordance) = leave_hover.borrow_mut().leave(index) {
                    leave_overlay.borrow_mut().set_affordance(affordance);
                }
            }));
        }
    }

    fn stage_reveal(&mut self, document: &Document) {
        let regions = dom::query_all_html(document, selectors::REVEAL);
        if regions.is_empty() {
            return;
        }
        let mut stage = RevealStage::prime(regions);
        self.reveal_timer = Some(Timeout::new(config::REVEAL_TRIGGER_MS, move || {
            stage.reveal();
        }));
    }

    fn attach_anchors(&mut self, document: &Document) {
        for anchor in dom::query_all(document, selectors::FRAGMENT_ANCHORS) {
            let document = document.clone();
            let target = anchor.clone();
            let listener = EventListener::new_with_options(
                &anchor,
                "click",
                EventListenerOptions::enable_prevent_default(),
                move |event| {
                    event.prevent_default();
                    let Some(href) = target.get_attribute("href") else {
                        return;
                    };
                    match anchors::resolve(&href, |id| document.get_element_by_id(id)) {
                        Some(region) => {
                            debug!("scrolling to {href}");
                            anchors::smooth_scroll_to(&region);
                        }
                        None => debug!("no region for {href:?}"),
                    }
                },
            );
            self.listeners.push(listener);
        }
    }

    fn watch_stats(&mut self, window: &Window, document: &Document) {
        let check = {
            let window = window.clone();
            let document = document.clone();
            let stats = Rc::clone(&self.stats);
            move || check_stats(&window, &document, &stats)
        };
        check();
        self.listeners.push(EventListener::new(window, "scroll", move |_| check()));
    }

    fn attach_form(&mut self, window: &Window, document: &Document) {
        let Some(contact) = dom::query_one(document, selectors::CONTACT_FORM)
            .and_then(|el| el.dyn_into::<HtmlFormElement>().ok())
        else {
            debug!("no contact form on page");
            return;
        };
        let surface = DomForm::new(window.clone(), contact.clone());
        self.listeners.push(EventListener::new_with_options(
            &contact,
            "submit",
            EventListenerOptions::enable_prevent_default(),
            move |event| {
                event.prevent_default();
                form::acknowledge_submission(&surface);
            },
        ));
    }
}

fn check_stats(window: &Window, document: &Document, stats: &RefCell<StatsState>) {
    if stats.borrow().gate.has_animated() {
        return;
    }
    let region = dom::query_one(document, selectors::STATS)
        .map(|el| ViewportBox::from(el.get_bounding_client_rect()));
    let mut stats = stats.borrow_mut();
    if !stats.gate.observe(region, dom::viewport_height(window)) {
        return;
    }
    let counters = dom::query_all(document, selectors::STAT_NUMBER);
    debug!("stats visible, animating {} counters", counters.len());
    stats.runs = counters.into_iter().map(CounterRun::start).collect();
}

impl Drop for PresentationEngine {
    fn drop(&mut self) {
        self.reveal_timer.take();
        for run in self.stats.borrow().runs.iter() {
            run.cancel();
        }
        if !self.listeners.is_empty() {
            info!("presentation engine detached");
        }
    }
}
