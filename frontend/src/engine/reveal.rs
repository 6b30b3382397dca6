use web_sys::HtmlElement;

use super::dom;
use crate::config;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RevealState {
    Hidden,
    Revealed,
}

/// Reveal-tagged regions in document order. Transitions only go
/// hidden -> revealed.
#[derive(Debug)]
pub struct RevealQueue {
    states: Vec<RevealState>,
}

impl RevealQueue {
    pub fn new(len: usize) -> Self {
        Self {
            states: vec![RevealState::Hidden; len],
        }
    }

    pub fn len(&self) -> usize {
        self.states.len()
    }

    pub fn is_empty(&self) -> bool {
        self.states.is_empty()
    }

    pub fn state(&self, index: usize) -> Option<RevealState> {
        self.states.get(index).copied()
    }

    /// Stagger applied through `transition-delay`, not through separate timers.
    pub fn delay_ms(index: usize) -> u32 {
        index as u32 * config::REVEAL_STAGGER_MS
    }

    /// Marks every region revealed and returns how many changed.
    pub fn reveal_all(&mut self) -> usize {
        let mut changed = 0;
        for state in &mut self.states {
            if *state == RevealState::Hidden {
                *state = RevealState::Revealed;
                changed += 1;
            }
        }
        changed
    }
}

fn hidden_styles(index: usize) -> [(&'static str, String); 4] {
    [
        ("opacity", "0".to_string()),
        ("transform", format!("translateY({}px)", config::REVEAL_OFFSET_PX)),
        (
            "transition",
            format!("all {}ms {}", config::REVEAL_DURATION_MS, config::REVEAL_EASING),
        ),
        ("transition-delay", format!("{}ms", RevealQueue::delay_ms(index))),
    ]
}

const REVEALED_STYLES: [(&str, &str); 2] = [("opacity", "1"), ("transform", "translateY(0)")];

/// The reveal regions of the page together with their queue.
pub struct RevealStage {
    regions: Vec<HtmlElement>,
    queue: RevealQueue,
}

impl RevealStage {
    /// Puts every region into its hidden state with its staggered delay.
    pub fn prime(regions: Vec<HtmlElement>) -> Self {
        for (index, region) in regions.iter().enumerate() {
            let styles = hidden_styles(index);
            let styles: Vec<(&str, &str)> =
                styles.iter().map(|(k, v)| (*k, v.as_str())).collect();
            dom::set_styles(region, &styles);
        }
        let queue = RevealQueue::new(regions.len());
        Self { regions, queue }
    }

    pub fn reveal(&mut self) {
        if self.queue.reveal_all() == 0 {
            return;
        }
        log::debug!("revealing {} regions", self.queue.len());
        for region in &self.regions {
            dom::set_styles(region, &REVEALED_STYLES);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn delays_cascade_in_document_order() {
        let delays: Vec<u32> = (0..4).map(RevealQueue::delay_ms).collect();
        assert_eq!(delays, vec![0, 200, 400, 600]);
    }

    #[test]
    fn hidden_style_starts_offset_and_transparent() {
        let styles = hidden_styles(2);
        assert_eq!(styles[0], ("opacity", "0".to_string()));
        assert_eq!(styles[1], ("transform", "translateY(20px)".to_string()));
        assert_eq!(
            styles[2],
            ("transition", "all 800ms cubic-bezier(0.25, 0.8, 0.25, 1)".to_string())
        );
        assert_eq!(styles[3], ("transition-delay", "400ms".to_string()));
    }

    #[test]
    fn reveal_happens_once_and_never_reverts() {
        let mut queue = RevealQueue::new(3);
        assert!((0..3).all(|i| queue.state(i) == Some(RevealState::Hidden)));

        assert_eq!(queue.reveal_all(), 3);
        assert!((0..3).all(|i| queue.state(i) == Some(RevealState::Revealed)));

        assert_eq!(queue.reveal_all(), 0);
        assert!((0..3).all(|i| queue.state(i) == Some(RevealState::Revealed)));
    }

    #[test]
    fn empty_queue_is_inert() {
        let mut queue = RevealQueue::new(0);
        assert!(queue.is_empty());
        assert_eq!(queue.reveal_all(), 0);
        assert_eq!(queue.state(0), None);
    }
}
