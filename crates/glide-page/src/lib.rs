//! Glide Page - Page Behavior Layer
//!
//! Everything around the animation core: preloader teardown, the quote
//! request form, the job application modal, the back-to-top control,
//! and the mobile nav menu, composed by [`PageRuntime`]. All timing is
//! host-stepped through a deterministic timer queue.

/// Back-to-top control
pub mod back_to_top;
/// Quote request form validation and feedback
pub mod forms;
/// Mobile nav menu toggle
pub mod menu;
/// Job application modal
pub mod modal;
/// Page composition and event dispatch
pub mod page;
/// Preloader teardown
pub mod preloader;
/// Deterministic deferred actions
pub mod timers;

pub use forms::{QuoteFormError, QuoteSubmission};
pub use page::{PageAction, PageRuntime};
pub use timers::{TimerId, TimerQueue};
