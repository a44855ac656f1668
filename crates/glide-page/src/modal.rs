//! Job Application Modal
//!
//! Open/close lifecycle for the application dialog plus the simulated
//! submission flow. Trigger buttons carry the job title in `data-job`;
//! anything marked `data-close-modal` closes the dialog. While the
//! dialog is open the body carries a scroll-lock class.

use glide_dom::{DomSurface, NodeId};

use crate::page::PageAction;
use crate::timers::TimerQueue;

/// Document id of the modal root
pub const JOB_MODAL_ID: &str = "job-modal";
/// Document id of the title placeholder inside the dialog
pub const JOB_TITLE_ID: &str = "job-title-placeholder";
/// Document id of the hidden position input
pub const JOB_POSITION_ID: &str = "job-position";
/// Document id of the submit button
pub const JOB_SUBMIT_ID: &str = "job-submit";
/// Document id of the modal form's feedback element
pub const JOB_FEEDBACK_ID: &str = "job-feedback";

/// Attribute on trigger buttons naming the job title
pub const JOB_MARKER: &str = "data-job";
/// Attribute on elements that close the dialog
pub const CLOSE_MARKER: &str = "data-close-modal";

/// Class flag on the open dialog
pub const OPEN_CLASS: &str = "is-open";
/// Class flag locking body scroll while the dialog is open
pub const SCROLL_LOCK_CLASS: &str = "u-no-scroll";

const SUCCESS_CLASS: &str = "is-success";
const SENDING_TEXT: &str = "Sending...";
const SENT_TEXT: &str = "Application sent successfully! We'll be in touch.";

const SUBMIT_DELAY_MS: u64 = 1500;
const CLOSE_DELAY_MS: u64 = 2000;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum State {
    Closed,
    Open,
    Sending,
}

/// Application dialog driver
#[derive(Debug)]
pub struct JobModal {
    modal: NodeId,
    body: NodeId,
    state: State,
    button_label: Option<String>,
}

impl JobModal {
    /// Bind to the modal root; `None` when the page has no dialog or no
    /// trigger buttons
    pub fn bind(surface: &dyn DomSurface, body: NodeId) -> Option<Self> {
        let modal = surface.element_by_id(JOB_MODAL_ID)?;
        if surface.query_marked(JOB_MARKER).is_empty() {
            return None;
        }
        Some(Self {
            modal,
            body,
            state: State::Closed,
            button_label: None,
        })
    }

    pub fn is_open(&self) -> bool {
        self.state != State::Closed
    }

    /// A trigger button was clicked: open with its job title
    pub fn trigger_clicked(&mut self, surface: &mut dyn DomSurface, trigger: NodeId) {
        let Some(title) = surface.attribute(trigger, JOB_MARKER) else {
            return;
        };
        self.open(surface, &title);
    }

    /// Open the dialog for the given job title
    pub fn open(&mut self, surface: &mut dyn DomSurface, title: &str) {
        if let Some(placeholder) = surface.element_by_id(JOB_TITLE_ID) {
            surface.set_text(placeholder, title);
        }
        if let Some(position) = surface.element_by_id(JOB_POSITION_ID) {
            surface.set_attribute(position, "value", title);
        }
        surface.add_class(self.modal, OPEN_CLASS);
        surface.set_attribute(self.modal, "aria-hidden", "false");
        surface.add_class(self.body, SCROLL_LOCK_CLASS);
        self.state = State::Open;
    }

    /// Close the dialog and reset its feedback; idempotent
    pub fn close(&mut self, surface: &mut dyn DomSurface) {
        if self.state == State::Closed {
            return;
        }
        surface.remove_class(self.modal, OPEN_CLASS);
        surface.set_attribute(self.modal, "aria-hidden", "true");
        surface.remove_class(self.body, SCROLL_LOCK_CLASS);
        if let Some(feedback) = surface.element_by_id(JOB_FEEDBACK_ID) {
            surface.set_text(feedback, "");
            surface.remove_class(feedback, SUCCESS_CLASS);
        }
        self.restore_button(surface);
        self.state = State::Closed;
    }

    /// Escape closes the dialog only while it is open
    pub fn escape(&mut self, surface: &mut dyn DomSurface) {
        if self.is_open() {
            self.close(surface);
        }
    }

    /// Form submitted: enter the sending state and start the simulated
    /// submission delay
    pub fn submit(&mut self, surface: &mut dyn DomSurface, timers: &mut TimerQueue<PageAction>) {
        if self.state != State::Open {
            return;
        }
        if let Some(button) = surface.element_by_id(JOB_SUBMIT_ID) {
            self.button_label = surface.text(button);
            surface.set_text(button, SENDING_TEXT);
            surface.set_attribute(button, "disabled", "");
        }
        self.state = State::Sending;
        timers.schedule(SUBMIT_DELAY_MS, PageAction::JobSubmitComplete);
    }

    /// Simulated submission finished: show success and schedule the
    /// automatic close
    pub fn submit_complete(
        &mut self,
        surface: &mut dyn DomSurface,
        timers: &mut TimerQueue<PageAction>,
    ) {
        if self.state != State::Sending {
            return;
        }
        if let Some(feedback) = surface.element_by_id(JOB_FEEDBACK_ID) {
            surface.set_text(feedback, SENT_TEXT);
            surface.add_class(feedback, SUCCESS_CLASS);
        }
        self.restore_button(surface);
        self.state = State::Open;
        timers.schedule(CLOSE_DELAY_MS, PageAction::CloseJobModal);
    }

    fn restore_button(&mut self, surface: &mut dyn DomSurface) {
        if let Some(button) = surface.element_by_id(JOB_SUBMIT_ID) {
            if let Some(label) = self.button_label.take() {
                surface.set_text(button, &label);
            }
            surface.remove_attribute(button, "disabled");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use glide_dom::{HeadlessElement, HeadlessSurface, NodeId, Rect, Viewport};

    struct Fixture {
        surface: HeadlessSurface,
        modal: JobModal,
        modal_node: NodeId,
        body: NodeId,
        trigger: NodeId,
        button: NodeId,
        feedback: NodeId,
    }

    fn fixture() -> Fixture {
        let mut surface = HeadlessSurface::new(Viewport::new(1000.0, 800.0));
        let body = surface.insert(HeadlessElement::default());
        let modal_node = surface.insert_section(JOB_MODAL_ID, 0.0);
        surface.insert_section(JOB_TITLE_ID, 0.0);
        surface.insert_section(JOB_POSITION_ID, 0.0);
        let button = surface.insert(HeadlessElement {
            id: Some(JOB_SUBMIT_ID.to_string()),
            text: "Send application".to_string(),
            ..Default::default()
        });
        let feedback = surface.insert_section(JOB_FEEDBACK_ID, 0.0);
        let trigger = surface.insert_marked(JOB_MARKER, "Dispatch Manager", Rect::default());

        let modal = JobModal::bind(&surface, body).unwrap();
        Fixture {
            surface,
            modal,
            modal_node,
            body,
            trigger,
            button,
            feedback,
        }
    }

    #[test]
    fn test_open_sets_title_position_and_scroll_lock() {
        let mut f = fixture();
        let trigger = f.trigger;
        f.modal.trigger_clicked(&mut f.surface, trigger);

        assert!(f.modal.is_open());
        assert!(f.surface.has_class(f.modal_node, OPEN_CLASS));
        assert_eq!(
            f.surface.attribute(f.modal_node, "aria-hidden").unwrap(),
            "false"
        );
        assert!(f.surface.has_class(f.body, SCROLL_LOCK_CLASS));

        let title = f.surface.element_by_id(JOB_TITLE_ID).unwrap();
        assert_eq!(f.surface.text(title).unwrap(), "Dispatch Manager");
        let position = f.surface.element_by_id(JOB_POSITION_ID).unwrap();
        assert_eq!(
            f.surface.attribute(position, "value").unwrap(),
            "Dispatch Manager"
        );
    }

    #[test]
    fn test_close_resets_everything() {
        let mut f = fixture();
        f.modal.open(&mut f.surface, "Driver");
        f.modal.close(&mut f.surface);

        assert!(!f.modal.is_open());
        assert!(!f.surface.has_class(f.modal_node, OPEN_CLASS));
        assert_eq!(
            f.surface.attribute(f.modal_node, "aria-hidden").unwrap(),
            "true"
        );
        assert!(!f.surface.has_class(f.body, SCROLL_LOCK_CLASS));
        assert_eq!(f.surface.text(f.feedback).unwrap(), "");

        // Closing again is a no-op.
        f.modal.close(&mut f.surface);
    }

    #[test]
    fn test_escape_only_closes_while_open() {
        let mut f = fixture();
        f.modal.escape(&mut f.surface);
        assert!(!f.modal.is_open());

        f.modal.open(&mut f.surface, "Driver");
        f.modal.escape(&mut f.surface);
        assert!(!f.modal.is_open());
    }

    #[test]
    fn test_submission_flow_with_timers() {
        let mut f = fixture();
        let mut timers = TimerQueue::new();

        f.modal.open(&mut f.surface, "Driver");
        f.modal.submit(&mut f.surface, &mut timers);

        assert_eq!(f.surface.text(f.button).unwrap(), "Sending...");
        assert!(f.surface.attribute(f.button, "disabled").is_some());

        // Submitting again while sending is ignored.
        f.modal.submit(&mut f.surface, &mut timers);
        assert_eq!(timers.len(), 1);

        for action in timers.advance(1500) {
            assert_eq!(action, PageAction::JobSubmitComplete);
            f.modal.submit_complete(&mut f.surface, &mut timers);
        }
        assert_eq!(
            f.surface.text(f.feedback).unwrap(),
            "Application sent successfully! We'll be in touch."
        );
        assert_eq!(f.surface.text(f.button).unwrap(), "Send application");
        assert!(f.surface.attribute(f.button, "disabled").is_none());

        for action in timers.advance(1500 + 2000) {
            assert_eq!(action, PageAction::CloseJobModal);
            f.modal.close(&mut f.surface);
        }
        assert!(!f.modal.is_open());
    }

    #[test]
    fn test_bind_requires_modal_and_triggers() {
        let mut surface = HeadlessSurface::new(Viewport::new(1000.0, 800.0));
        let body = surface.insert(HeadlessElement::default());
        assert!(JobModal::bind(&surface, body).is_none());

        surface.insert_section(JOB_MODAL_ID, 0.0);
        assert!(JobModal::bind(&surface, body).is_none());

        surface.insert_marked(JOB_MARKER, "Driver", Rect::default());
        assert!(JobModal::bind(&surface, body).is_some());
    }
}
