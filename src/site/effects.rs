//! Time-based page effects: loading screen, stat counters and reveal-on-scroll.

use std::collections::HashSet;
use std::time::{Duration, Instant};

use crate::config::TimingConfig;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoadingPhase {
    Loading,
    FadingOut,
    Hidden,
}

/// Splash screen shown while the page "loads".
///
/// Fades out a fixed delay after load (or at the fallback deadline, whichever
/// comes first) and disappears once the fade completes.
#[derive(Debug, Clone)]
pub struct LoadingScreen {
    started_at: Instant,
    loaded_at: Option<Instant>,
    delay: Duration,
    fade: Duration,
    fallback: Duration,
}

impl LoadingScreen {
    pub fn new(now: Instant, timing: &TimingConfig) -> Self {
        Self {
            started_at: now,
            loaded_at: None,
            delay: Duration::from_millis(timing.loading_ms),
            fade: Duration::from_millis(timing.loading_fade_ms),
            fallback: Duration::from_millis(timing.loading_fallback_ms),
        }
    }

    /// Record the load event. Only the first call counts.
    pub fn mark_loaded(&mut self, now: Instant) {
        self.loaded_at.get_or_insert(now);
    }

    fn fade_starts_at(&self) -> Instant {
        let fallback = self.started_at + self.fallback;
        match self.loaded_at {
            Some(loaded) => (loaded + self.delay).min(fallback),
            None => fallback,
        }
    }

    pub fn phase(&self, now: Instant) -> LoadingPhase {
        let fade_start = self.fade_starts_at();
        if now < fade_start {
            LoadingPhase::Loading
        } else if now < fade_start + self.fade {
            LoadingPhase::FadingOut
        } else {
            LoadingPhase::Hidden
        }
    }

    pub fn is_hidden(&self, now: Instant) -> bool {
        self.phase(now) == LoadingPhase::Hidden
    }
}

/// Count-up animation for a statistic, driven by fixed-length frames.
#[derive(Debug, Clone, Copy)]
pub struct CounterAnimation {
    target: u64,
    started_at: Instant,
    step: f64,
    frame: Duration,
}

impl CounterAnimation {
    pub fn start(target: u64, now: Instant, timing: &TimingConfig) -> Self {
        let frame_ms = timing.counter_frame_ms.max(1);
        let frames = (timing.counter_duration_ms as f64 / frame_ms as f64).max(1.0);
        Self {
            target,
            started_at: now,
            step: target as f64 / frames,
            frame: Duration::from_millis(frame_ms),
        }
    }

    pub fn target(&self) -> u64 {
        self.target
    }

    /// Displayed value: whole frames elapsed times the step, capped at target.
    pub fn value(&self, now: Instant) -> u64 {
        let elapsed = now.saturating_duration_since(self.started_at);
        let frames = (elapsed.as_millis() / self.frame.as_millis().max(1)) as f64;
        let current = self.step * frames;
        if current >= self.target as f64 {
            self.target
        } else {
            current.floor() as u64
        }
    }

    pub fn is_finished(&self, now: Instant) -> bool {
        self.value(now) >= self.target
    }
}

/// Tracks which elements have scrolled into view.
///
/// Elements start hidden; the first time one intersects the viewport it is
/// revealed and never observed again.
#[derive(Debug, Clone, Default)]
pub struct RevealTracker {
    revealed: HashSet<String>,
}

impl RevealTracker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Observe elements given as `(id, top row)` against the viewport rows
    /// `[offset, offset + height)`. Returns ids revealed by this call.
    pub fn observe<'a, I>(&mut self, elements: I, offset: u16, height: u16) -> Vec<String>
    where
        I: IntoIterator<Item = (&'a str, u16)>,
    {
        let bottom = offset.saturating_add(height);
        let mut newly = Vec::new();
        for (id, top) in elements {
            if top >= offset && top < bottom && !self.revealed.contains(id) {
                self.revealed.insert(id.to_string());
                newly.push(id.to_string());
            }
        }
        newly
    }

    pub fn is_revealed(&self, id: &str) -> bool {
        self.revealed.contains(id)
    }
}
