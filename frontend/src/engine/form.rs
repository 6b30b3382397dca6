use web_sys::{HtmlFormElement, Window};

use crate::config;

/// What a contact form submission touches.
pub trait FormSurface {
    /// Blocks until the visitor dismisses the message.
    fn acknowledge(&self, message: &str);
    fn clear(&self);
}

pub struct DomForm {
    window: Window,
    form: HtmlFormElement,
}

impl DomForm {
    pub fn new(window: Window, form: HtmlFormElement) -> Self {
        Self { window, form }
    }
}

impl FormSurface for DomForm {
    fn acknowledge(&self, message: &str) {
        let _ = self.window.alert_with_message(message);
    }

    fn clear(&self) {
        self.form.reset();
    }
}

/// Placeholder until submissions go somewhere: thank the visitor and empty
/// the fields. Nothing is sent or kept.
pub fn acknowledge_submission(surface: &impl FormSurface) {
    log::info!("contact form submitted");
    surface.acknowledge(config::ACKNOWLEDGMENT);
    surface.clear();
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;

    #[derive(Default)]
    struct Recorder {
        fields: RefCell<Vec<String>>,
        messages: RefCell<Vec<String>>,
    }

    impl FormSurface for Recorder {
        fn acknowledge(&self, message: &str) {
            self.messages.borrow_mut().push(message.to_string());
        }

        fn clear(&self) {
            for field in self.fields.borrow_mut().iter_mut() {
                field.clear();
            }
        }
    }

    #[test]
    fn submission_acknowledges_once_and_clears_fields() {
        let form = Recorder::default();
        *form.fields.borrow_mut() = vec![
            "Ada".to_string(),
            "ada@example.com".to_string(),
            String::new(),
            "A booking app".to_string(),
        ];

        acknowledge_submission(&form);

        assert_eq!(
            *form.messages.borrow(),
            vec!["Thank you for your message! We will get back to you soon.".to_string()]
        );
        assert!(form.fields.borrow().iter().all(String::is_empty));
    }
}
