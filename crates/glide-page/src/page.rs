//! Page Runtime
//!
//! Binds every collaborator against the page-ready DOM snapshot and
//! fans host events out to them. Every binding is fail-open: a missing
//! landmark just means that feature is absent from this page.

use glide_dom::{DomSurface, NodeId};
use glide_motion::{FrameScheduler, MotionConfig, MotionEngine};

use crate::back_to_top::BackToTop;
use crate::forms::{QuoteForm, QuoteFormError, QuoteSubmission};
use crate::menu::NavMenu;
use crate::modal::JobModal;
use crate::preloader::{Preloader, LOADED_CLASS};
use crate::timers::TimerQueue;

/// Document id of the footer year stamp
pub const YEAR_ID: &str = "year";

/// Deferred page-level work routed through the timer queue
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PageAction {
    FinalizePreloader,
    RemovePreloader,
    JobSubmitComplete,
    CloseJobModal,
}

/// The whole behavior layer of one page
#[derive(Debug)]
pub struct PageRuntime {
    engine: MotionEngine,
    timers: TimerQueue<PageAction>,
    preloader: Option<Preloader>,
    quote: Option<QuoteForm>,
    modal: Option<JobModal>,
    back_to_top: Option<BackToTop>,
    menu: Option<NavMenu>,
}

impl PageRuntime {
    /// Bind at page-ready. `body` is the host's body element; `year` is
    /// the current calendar year for the footer stamp.
    pub fn bind(
        surface: &mut dyn DomSurface,
        scheduler: &mut dyn FrameScheduler,
        config: MotionConfig,
        body: NodeId,
        year: i32,
    ) -> Self {
        if let Some(span) = surface.element_by_id(YEAR_ID) {
            surface.set_text(span, &year.to_string());
        }

        let engine = MotionEngine::init(surface, config, scheduler);

        let preloader = Preloader::bind(surface, body);
        if preloader.is_none() {
            // No preloader to wait for; the page is presentable now.
            surface.add_class(body, LOADED_CLASS);
        }

        let quote = QuoteForm::bind(surface);
        let modal = JobModal::bind(surface, body);
        let back_to_top = BackToTop::bind(surface);
        let menu = NavMenu::bind(surface);

        tracing::info!(
            preloader = preloader.is_some(),
            quote = quote.is_some(),
            modal = modal.is_some(),
            back_to_top = back_to_top.is_some(),
            menu = menu.is_some(),
            "page runtime bound"
        );

        Self {
            engine,
            timers: TimerQueue::new(),
            preloader,
            quote,
            modal,
            back_to_top,
            menu,
        }
    }

    pub fn engine(&self) -> &MotionEngine {
        &self.engine
    }

    /// True while the job modal is open
    pub fn modal_open(&self) -> bool {
        self.modal.as_ref().is_some_and(|m| m.is_open())
    }

    /// Pending deferred actions
    pub fn pending_timers(&self) -> usize {
        self.timers.len()
    }

    // === Host events ===

    pub fn on_scroll(&mut self, surface: &mut dyn DomSurface) {
        self.engine.on_scroll(surface);
        if let Some(control) = &self.back_to_top {
            control.on_scroll(surface);
        }
    }

    pub fn on_pointer_move(&mut self, surface: &dyn DomSurface, client_x: f64, client_y: f64) {
        self.engine.on_pointer_move(surface, client_x, client_y);
    }

    pub fn on_frame(&mut self, surface: &mut dyn DomSurface, scheduler: &mut dyn FrameScheduler) {
        self.engine.on_frame(surface, scheduler);
    }

    /// Nav item clicked (host already suppressed default navigation);
    /// also collapses the mobile menu
    pub fn on_nav_click(&mut self, surface: &mut dyn DomSurface, item: NodeId) {
        self.engine.on_nav_click(surface, item);
        if let Some(menu) = &self.menu {
            menu.nav_item_clicked(surface);
        }
    }

    /// Key pressed; only Escape is interesting
    pub fn on_key_down(&mut self, surface: &mut dyn DomSurface, key: &str) {
        if key != "Escape" {
            return;
        }
        if let Some(modal) = &mut self.modal {
            modal.escape(surface);
        }
        if let Some(menu) = &self.menu {
            menu.escape(surface);
        }
    }

    /// Host load event: start the preloader teardown
    pub fn on_load(&mut self, surface: &mut dyn DomSurface) {
        if let Some(preloader) = &mut self.preloader {
            preloader.on_load(surface, self.engine.motion(), &mut self.timers);
        }
    }

    /// The preloader's hide transition finished
    pub fn on_preloader_transition_end(&mut self, surface: &mut dyn DomSurface) {
        if let Some(preloader) = &mut self.preloader {
            preloader.remove(surface, &mut self.timers);
        }
    }

    /// Advance the page clock, running every action that came due
    pub fn advance(&mut self, surface: &mut dyn DomSurface, now_ms: u64) {
        for action in self.timers.advance(now_ms) {
            match action {
                PageAction::FinalizePreloader => {
                    if let Some(preloader) = &mut self.preloader {
                        preloader.finalize(surface, &mut self.timers);
                    }
                }
                PageAction::RemovePreloader => {
                    if let Some(preloader) = &mut self.preloader {
                        preloader.remove(surface, &mut self.timers);
                    }
                }
                PageAction::JobSubmitComplete => {
                    if let Some(modal) = &mut self.modal {
                        modal.submit_complete(surface, &mut self.timers);
                    }
                }
                PageAction::CloseJobModal => {
                    if let Some(modal) = &mut self.modal {
                        modal.close(surface);
                    }
                }
            }
        }
    }

    // === Form and modal entry points ===

    /// Quote form submitted. Absent form is a successful no-op so hosts
    /// can wire the handler unconditionally.
    pub fn submit_quote(
        &mut self,
        surface: &mut dyn DomSurface,
        submission: &QuoteSubmission,
    ) -> Result<(), QuoteFormError> {
        match &self.quote {
            Some(form) => form.submit(surface, submission),
            None => Ok(()),
        }
    }

    /// A `data-job` trigger was clicked
    pub fn job_trigger_clicked(&mut self, surface: &mut dyn DomSurface, trigger: NodeId) {
        if let Some(modal) = &mut self.modal {
            modal.trigger_clicked(surface, trigger);
        }
    }

    /// A `data-close-modal` element was clicked
    pub fn job_close_clicked(&mut self, surface: &mut dyn DomSurface) {
        if let Some(modal) = &mut self.modal {
            modal.close(surface);
        }
    }

    /// The job application form was submitted
    pub fn job_submitted(&mut self, surface: &mut dyn DomSurface) {
        if let Some(modal) = &mut self.modal {
            modal.submit(surface, &mut self.timers);
        }
    }

    /// The back-to-top control was clicked
    pub fn back_to_top_clicked(&mut self, surface: &mut dyn DomSurface) {
        if let Some(control) = &self.back_to_top {
            control.clicked(surface);
        }
    }

    /// The mobile menu toggle was clicked
    pub fn menu_toggle_clicked(&mut self, surface: &mut dyn DomSurface) {
        if let Some(menu) = &self.menu {
            menu.toggle_clicked(surface);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use glide_dom::{HeadlessElement, HeadlessSurface, Viewport};
    use glide_motion::ManualScheduler;

    #[test]
    fn test_bare_page_binds_nothing_but_still_loads() {
        let mut surface = HeadlessSurface::new(Viewport::new(1000.0, 800.0));
        let body = surface.insert(HeadlessElement::default());

        let mut scheduler = ManualScheduler::new();
        let mut page = PageRuntime::bind(
            &mut surface,
            &mut scheduler,
            MotionConfig::default(),
            body,
            2026,
        );

        // No preloader: presentable immediately.
        assert!(surface.has_class(body, LOADED_CLASS));

        // Every handler is safe to call on a bare page.
        page.on_scroll(&mut surface);
        page.on_key_down(&mut surface, "Escape");
        page.on_load(&mut surface);
        page.advance(&mut surface, 10_000);
        assert!(page
            .submit_quote(&mut surface, &QuoteSubmission::default())
            .is_ok());
    }

    #[test]
    fn test_year_stamp() {
        let mut surface = HeadlessSurface::new(Viewport::new(1000.0, 800.0));
        let body = surface.insert(HeadlessElement::default());
        let span = surface.insert_section(YEAR_ID, 0.0);

        let mut scheduler = ManualScheduler::new();
        PageRuntime::bind(
            &mut surface,
            &mut scheduler,
            MotionConfig::default(),
            body,
            2026,
        );
        assert_eq!(surface.text(span).unwrap(), "2026");
    }
}
