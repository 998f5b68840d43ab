//! Application state for one page session.
//!
//! `App` owns every page component. Handlers receive it by `&mut` and the
//! event loop drives its timers through [`App::tick`]; nothing is global.

mod actions;
mod navigation;
mod state;

use std::time::{Duration, Instant};

use ratatui::layout::Rect;
use tracing::{debug, info};

use crate::config::Config;
use crate::debounce::Debouncer;
use crate::notify::{NotificationCenter, NotificationId, Severity};
use crate::site::content::{self, STATS};
use crate::site::scroll::{self, HeaderState, SectionAnchor};
use crate::site::{
    ContactForm, CounterAnimation, Faq, LoadingScreen, PaymentModal, Portfolio, RevealTracker,
};
use crate::timer::TimerQueue;
use crate::toggle::ToggleGroup;

pub use state::{Deferred, Target};

/// Rows taken by the sticky header
pub const HEADER_HEIGHT: u16 = 3;

/// Toggle item for the mobile menu
pub const MENU: &str = "menu";

/// Rendered page geometry, reported back by the renderer after each draw
#[derive(Debug, Clone, Default)]
pub struct PageLayout {
    /// Where each section starts
    pub anchors: Vec<SectionAnchor>,
    /// Animated elements and their top rows
    pub elements: Vec<(String, u16)>,
    /// Total page height in rows
    pub height: u16,
}

/// Screen areas of clickable overlays, cached during draw for mouse mapping
#[derive(Debug, Clone, Default)]
pub struct HitAreas {
    pub toasts: Vec<(NotificationId, Rect)>,
    pub menu: Option<Rect>,
    pub menu_button: Option<Rect>,
    pub modal: Option<Rect>,
}

pub struct App {
    pub config: Config,
    pub notifications: NotificationCenter,
    /// Mobile menu: a one-item independent group
    pub menu: ToggleGroup,
    pub portfolio: Portfolio,
    pub faq: Faq,
    pub form: ContactForm,
    pub payment: PaymentModal,
    pub header: HeaderState,
    pub loading: LoadingScreen,
    pub reveal: RevealTracker,
    /// One slot per headline stat, started when the stat scrolls into view
    pub counters: Vec<Option<CounterAnimation>>,
    pub layout: PageLayout,
    pub hit_areas: HitAreas,
    pub scroll_offset: u16,
    pub viewport_height: u16,
    /// Section highlighted in the nav
    pub active_nav: Option<String>,
    pub scroll_top_visible: bool,
    /// Index into `targets()`
    pub focus: usize,
    pub show_help: bool,
    deferred: TimerQueue<Deferred>,
    header_debounce: Debouncer,
    nav_debounce: Debouncer,
    scroll_top_debounce: Debouncer,
}

impl App {
    pub fn new(config: Config, now: Instant) -> Self {
        let mut notifications = NotificationCenter::with_capacity(config.notifications.capacity)
            .with_default_dismiss_after(config.notifications.dismiss_after());
        notifications.on_change(|visible| debug!(count = visible.len(), "toast stack changed"));
        let timing = &config.timing;
        let header_debounce = Debouncer::new(Duration::from_millis(timing.header_debounce_ms));
        let nav_debounce = Debouncer::new(Duration::from_millis(timing.nav_debounce_ms));
        let scroll_top_debounce =
            Debouncer::new(Duration::from_millis(timing.scroll_top_debounce_ms));
        let loading = LoadingScreen::new(now, timing);

        let app = Self {
            notifications,
            menu: ToggleGroup::independent([MENU]),
            portfolio: content::portfolio(),
            faq: content::faq(),
            form: ContactForm::new(),
            payment: PaymentModal::new(),
            header: HeaderState::default(),
            loading,
            reveal: RevealTracker::new(),
            counters: vec![None; STATS.len()],
            layout: PageLayout::default(),
            hit_areas: HitAreas::default(),
            scroll_offset: 0,
            viewport_height: 0,
            active_nav: Some("home".to_string()),
            scroll_top_visible: false,
            focus: 0,
            show_help: false,
            deferred: TimerQueue::new(),
            header_debounce,
            nav_debounce,
            scroll_top_debounce,
            config,
        };
        info!("{} app initialized", content::BRAND);
        app
    }

    /// Show a toast with the configured auto-dismiss delay
    pub fn notify(
        &mut self,
        now: Instant,
        message: impl Into<String>,
        severity: Severity,
    ) -> NotificationId {
        self.notifications.notify(now, message, severity)
    }

    /// Record the end of initial setup (first frame drawn)
    pub fn mark_loaded(&mut self, now: Instant) {
        self.loading.mark_loaded(now);
    }

    /// Store geometry from the latest render and re-run view-dependent effects.
    pub fn set_layout(&mut self, layout: PageLayout, viewport_height: u16, now: Instant) {
        self.layout = layout;
        self.viewport_height = viewport_height;
        self.scroll_offset = self.scroll_offset.min(self.max_scroll());
        self.observe_reveals(now);
    }

    pub fn max_scroll(&self) -> u16 {
        self.layout.height.saturating_sub(self.viewport_height)
    }

    /// Scrolling is locked while the mobile menu or a modal is open
    pub fn scroll_locked(&self) -> bool {
        self.menu.is_active(MENU) || self.payment.is_open()
    }

    /// Schedule deferred work
    pub(crate) fn defer(&mut self, now: Instant, delay_ms: u64, work: Deferred) {
        debug!(?work, delay_ms, "deferred work scheduled");
        self.deferred.schedule(now, Duration::from_millis(delay_ms), work);
    }

    pub fn has_pending_work(&self) -> bool {
        !self.deferred.is_empty()
    }

    /// Advance every timer-driven piece of state to `now`.
    pub fn tick(&mut self, now: Instant) {
        self.notifications.tick(now);

        for (_, work) in self.deferred.drain_due(now) {
            self.run_deferred(work, now);
        }

        if self.header_debounce.poll(now) {
            self.header.update(self.scroll_offset, &self.config.scroll);
        }
        if self.nav_debounce.poll(now) {
            self.active_nav = scroll::active_section(
                &self.layout.anchors,
                self.scroll_offset,
                HEADER_HEIGHT,
                &self.config.scroll,
            )
            .map(str::to_string);
        }
        if self.scroll_top_debounce.poll(now) {
            self.scroll_top_visible =
                scroll::scroll_top_visible(self.scroll_offset, &self.config.scroll);
            self.clamp_focus();
        }
    }

    fn run_deferred(&mut self, work: Deferred, now: Instant) {
        match work {
            Deferred::FormSent => self.finish_form(now),
            Deferred::PaymentDone => self.finish_payment(now),
            Deferred::ScrollTo(section) => self.scroll_to_section(section, now),
        }
    }

    /// Reveal elements now in view and start counters for revealed stats.
    fn observe_reveals(&mut self, now: Instant) {
        let elements = self
            .layout
            .elements
            .iter()
            .map(|(id, top)| (id.as_str(), *top));
        let revealed = self
            .reveal
            .observe(elements, self.scroll_offset, self.viewport_height);

        for id in revealed {
            let Some(index) = stat_index(&id) else {
                continue;
            };
            if let Some(slot) = self.counters.get_mut(index) {
                let target = STATS[index].1;
                slot.get_or_insert_with(|| {
                    CounterAnimation::start(target, now, &self.config.timing)
                });
            }
        }
    }

    /// Current display value of a headline stat
    pub fn counter_value(&self, index: usize, now: Instant) -> u64 {
        match self.counters.get(index) {
            Some(Some(counter)) => counter.value(now),
            _ => 0,
        }
    }
}

/// Element id used for a headline stat
pub fn stat_element_id(index: usize) -> String {
    format!("stat-{index}")
}

fn stat_index(id: &str) -> Option<usize> {
    id.strip_prefix("stat-")?.parse().ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    pub(crate) fn layout() -> PageLayout {
        PageLayout {
            anchors: vec![
                SectionAnchor::new("home", 0),
                SectionAnchor::new("services", 30),
                SectionAnchor::new("portfolio", 60),
                SectionAnchor::new("pricing", 90),
                SectionAnchor::new("faq", 120),
                SectionAnchor::new("contact", 150),
            ],
            elements: vec![(stat_element_id(0), 10), (stat_element_id(1), 70)],
            height: 200,
        }
    }

    #[test]
    fn stat_ids_round_trip() {
        assert_eq!(stat_index(&stat_element_id(2)), Some(2));
        assert_eq!(stat_index("service-1"), None);
    }

    #[test]
    fn set_layout_clamps_scroll_and_starts_visible_counters() {
        let t0 = Instant::now();
        let mut app = App::new(Config::default(), t0);
        app.scroll_offset = 500;
        app.set_layout(layout(), 40, t0);

        assert_eq!(app.scroll_offset, 160);
        // Stat 0 sits at row 10, outside the 160..200 viewport
        assert!(app.counters[0].is_none());
    }

    #[test]
    fn counters_start_when_scrolled_into_view() {
        let t0 = Instant::now();
        let mut app = App::new(Config::default(), t0);
        app.set_layout(layout(), 40, t0);

        assert!(app.counters[0].is_some());
        assert!(app.counters[1].is_none());
        assert_eq!(app.counter_value(0, t0 + Duration::from_secs(5)), STATS[0].1);
        assert_eq!(app.counter_value(1, t0 + Duration::from_secs(5)), 0);
    }

    #[test]
    fn scroll_locked_while_menu_or_modal_open() {
        let mut app = App::new(Config::default(), Instant::now());
        assert!(!app.scroll_locked());
        app.menu.toggle(MENU).unwrap();
        assert!(app.scroll_locked());
        app.menu.deactivate_all();
        app.payment.open("monthly");
        assert!(app.scroll_locked());
    }
}
