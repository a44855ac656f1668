//! Glide Demo - Headless Page Walkthrough
//!
//! Builds an in-memory marketing page, binds the full behavior layer,
//! and scripts a visitor session through it: load, scroll, pointer
//! sweep, nav click, quote form, job application. Run with
//! `RUST_LOG=debug` to watch the engine work.

use anyhow::ensure;
use glide_dom::{DomSurface, HeadlessElement, HeadlessSurface, NodeId, Rect, Viewport};
use glide_motion::{
    ManualScheduler, MotionConfig, ACTIVE_CLASS, ANIMATE_MARKER, DEPTH_MARKER, NAV_ID,
    SECTION_MARKER, STICKY_CLASS, VISIBLE_CLASS,
};
use glide_page::modal::JOB_MARKER;
use glide_page::{PageRuntime, QuoteSubmission};

struct Demo {
    surface: HeadlessSurface,
    body: NodeId,
    nav_items: Vec<NodeId>,
    cards: Vec<NodeId>,
    job_trigger: NodeId,
}

fn build_demo_page() -> Demo {
    let mut surface = HeadlessSurface::new(Viewport::new(1280.0, 800.0));

    let body = surface.insert(HeadlessElement::default());
    surface.insert_section("preloader", 0.0);
    surface.insert_section("year", 0.0);
    surface.insert_section(NAV_ID, 0.0);
    surface.insert_section("nav-toggle", 0.0);

    surface.insert_section("home", 0.0);
    surface.insert_section("services", 600.0);
    surface.insert_section("careers", 1400.0);
    surface.insert_section("contact", 2200.0);

    let nav_items = ["home", "services", "careers", "contact"]
        .iter()
        .map(|s| surface.insert_marked(SECTION_MARKER, s, Rect::default()))
        .collect();

    let cards = vec![
        surface.insert_marked(ANIMATE_MARKER, "", Rect::from_xywh(40.0, 260.0, 380.0, 240.0)),
        surface.insert_marked(ANIMATE_MARKER, "", Rect::from_xywh(40.0, 1000.0, 380.0, 240.0)),
        surface.insert_marked(ANIMATE_MARKER, "", Rect::from_xywh(40.0, 1800.0, 380.0, 240.0)),
    ];

    surface.insert_marked(DEPTH_MARKER, "0.3", Rect::from_xywh(0.0, 0.0, 1280.0, 500.0));
    surface.insert_marked(DEPTH_MARKER, "0.7", Rect::from_xywh(0.0, 0.0, 1280.0, 500.0));

    surface.insert_section("quote-feedback", 2300.0);
    surface.insert_section("job-modal", 0.0);
    surface.insert_section("job-title-placeholder", 0.0);
    surface.insert_section("job-position", 0.0);
    surface.insert(HeadlessElement {
        id: Some("job-submit".to_string()),
        text: "Send application".to_string(),
        ..Default::default()
    });
    surface.insert_section("job-feedback", 0.0);
    let job_trigger = surface.insert_marked(JOB_MARKER, "Dispatch Manager", Rect::default());
    surface.insert_section("backToTop", 0.0);

    Demo {
        surface,
        body,
        nav_items,
        cards,
        job_trigger,
    }
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let mut demo = build_demo_page();
    let mut scheduler = ManualScheduler::new();
    let mut page = PageRuntime::bind(
        &mut demo.surface,
        &mut scheduler,
        MotionConfig::default(),
        demo.body,
        2026,
    );

    // Page finishes loading; the preloader fades and is torn down.
    page.on_load(&mut demo.surface);
    page.advance(&mut demo.surface, 280);
    page.on_preloader_transition_end(&mut demo.surface);
    ensure!(demo.surface.has_class(demo.body, "is-loaded"));
    tracing::info!("preloader torn down");

    // The visitor scrolls through the page; reveals accumulate and the
    // nav tracks the current section.
    let nav = demo.surface.element_by_id(NAV_ID).unwrap();
    for scroll in (0..=2400).step_by(120) {
        demo.surface.set_scroll_y(scroll as f64);
        // Approximate viewport-relative movement of the reveal cards.
        for (&card, doc_top) in demo.cards.iter().zip([260.0, 1000.0, 1800.0]) {
            demo.surface.element_mut(card).unwrap().rect =
                Rect::from_xywh(40.0, doc_top - scroll as f64, 380.0, 240.0);
        }
        page.on_scroll(&mut demo.surface);
    }
    ensure!(demo.surface.has_class(nav, STICKY_CLASS));
    ensure!(demo
        .cards
        .iter()
        .all(|&c| demo.surface.has_class(c, VISIBLE_CLASS)));
    ensure!(demo.surface.has_class(demo.nav_items[3], ACTIVE_CLASS));
    tracing::info!("scroll sweep complete, all cards revealed");

    // Pointer drifts to the upper right while frames render parallax.
    page.on_pointer_move(&demo.surface, 1100.0, 180.0);
    for _ in 0..120 {
        ensure!(scheduler.take_pending(), "frame chain broke");
        page.on_frame(&mut demo.surface, &mut scheduler);
    }
    tracing::info!(frames = page.engine().frames_rendered(), "parallax settled");

    // Back to the services section via the nav.
    page.on_nav_click(&mut demo.surface, demo.nav_items[1]);
    ensure!(demo.surface.scroll_y() == 600.0);

    // Quote form: one rejected attempt, then a valid one.
    let invalid = QuoteSubmission {
        name: "Ada Lovelace".into(),
        phone: "12".into(),
        service: "maintenance".into(),
    };
    ensure!(page.submit_quote(&mut demo.surface, &invalid).is_err());
    let valid = QuoteSubmission {
        phone: "020 7946 0018".into(),
        ..invalid
    };
    ensure!(page.submit_quote(&mut demo.surface, &valid).is_ok());
    tracing::info!("quote form accepted");

    // Job application: open, submit, wait out the simulated send.
    page.job_trigger_clicked(&mut demo.surface, demo.job_trigger);
    ensure!(page.modal_open());
    page.job_submitted(&mut demo.surface);
    page.advance(&mut demo.surface, 280 + 1500);
    page.advance(&mut demo.surface, 280 + 1500 + 2000);
    ensure!(!page.modal_open());
    tracing::info!("job application sent and modal closed");

    println!("demo session completed");
    Ok(())
}
