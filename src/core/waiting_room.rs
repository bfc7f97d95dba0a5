//! Waiting-room simulation
//!
//! Holds the live state of the waiting-room widget: which member is
//! highlighted, whether a celebration pulse is running, the pending
//! floating toasts, and the derived energy level. The roster itself is
//! never mutated here.
//!
//! The host calls [`WaitingRoom::tick`] every [`TICK_PERIOD`] and schedules
//! [`WaitingRoom::end_celebration`] and [`WaitingRoom::dismiss`] from the
//! returned [`TickOutcome`].

use std::time::Duration;

use derive_more::Display;

use super::entropy::Entropy;
use super::roster::{MemberStatus, TeamMember, count_by_status};

/// Cadence of the simulation tick
pub const TICK_PERIOD: Duration = Duration::from_millis(4000);

/// How long a celebration pulse lasts
pub const CELEBRATION_WINDOW: Duration = Duration::from_millis(2000);

/// How long a toast stays on screen
pub const TOAST_LIFETIME: Duration = Duration::from_millis(3000);

/// A tick celebrates when the sample is strictly above this
pub const CELEBRATION_THRESHOLD: f64 = 0.7;

/// Energy shown before the first tick
pub const INITIAL_ENERGY: f64 = 0.5;

/// Member highlighted before the first tick
pub const INITIAL_ACTIVE: usize = 1;

pub const STATUS_MESSAGES: [&str; 5] = [
    "API endpoint optimized! 🚀",
    "Tests passing! ✅",
    "Code review complete! 💯",
    "Database sync successful! 🔄",
    "Performance boost! ⚡",
];

/// Synthetic toast identity derived from the creation timestamp
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Display)]
pub struct ToastId(pub u64);

/// Floating status message
#[derive(Debug, Clone, PartialEq)]
pub struct StatusToast {
    pub id: ToastId,
    pub text: &'static str,
    /// Horizontal position in percent, within [20, 80)
    pub x: f64,
    /// Vertical position in percent, within [30, 70)
    pub y: f64,
}

/// Display-only scalar in `[0.2, 1.0]`
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd)]
pub struct EnergyLevel(f64);

impl EnergyLevel {
    pub const MIN: f64 = 0.2;
    pub const MAX: f64 = 1.0;

    /// `0.2 + 0.8 * working / len`, 0.2 for an empty roster
    pub fn from_roster(roster: &[TeamMember]) -> Self {
        if roster.is_empty() {
            return Self(Self::MIN);
        }
        let working = count_by_status(roster, MemberStatus::Working) as f64;
        Self::new(Self::MIN + (Self::MAX - Self::MIN) * working / roster.len() as f64)
    }

    pub fn new(value: f64) -> Self {
        Self(value.clamp(Self::MIN, Self::MAX))
    }

    pub fn value(&self) -> f64 {
        self.0
    }

    pub fn width_percent(&self) -> f64 {
        self.0 * 100.0
    }

    /// CSS background for the energy bar fill
    pub fn gradient(&self) -> String {
        format!(
            "linear-gradient(90deg, #F59E0B {:.1}%, #10B981 {:.1}%, #6366F1 100%)",
            self.0 * 30.0,
            self.0 * 70.0
        )
    }
}

/// What the host must schedule after a tick
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct TickOutcome {
    /// Set when the tick started a celebration; carries the new toast
    pub celebration: Option<ToastId>,
}

/// Live state of the waiting-room widget
#[derive(Debug, Clone)]
pub struct WaitingRoom {
    roster: Vec<TeamMember>,
    active: usize,
    celebrating: bool,
    energy: EnergyLevel,
    toasts: Vec<StatusToast>,
    last_toast: Option<ToastId>,
}

impl WaitingRoom {
    pub fn new(roster: Vec<TeamMember>) -> Self {
        let active = INITIAL_ACTIVE.min(roster.len().saturating_sub(1));
        Self {
            roster,
            active,
            celebrating: false,
            energy: EnergyLevel::new(INITIAL_ENERGY),
            toasts: Vec::new(),
            last_toast: None,
        }
    }

    pub fn roster(&self) -> &[TeamMember] {
        &self.roster
    }

    pub fn active(&self) -> usize {
        self.active
    }

    pub fn is_active(&self, index: usize) -> bool {
        self.active == index
    }

    pub fn is_celebrating(&self) -> bool {
        self.celebrating
    }

    pub fn energy(&self) -> EnergyLevel {
        self.energy
    }

    pub fn toasts(&self) -> &[StatusToast] {
        &self.toasts
    }

    pub fn blocked_count(&self) -> usize {
        count_by_status(&self.roster, MemberStatus::Waiting)
    }

    /// Advance the simulation by one period.
    ///
    /// `now_ms` seeds the toast id; ids stay strictly increasing even when
    /// the clock does not move between ticks.
    pub fn tick(&mut self, entropy: &mut impl Entropy, now_ms: u64) -> TickOutcome {
        if !self.roster.is_empty() {
            self.active = (self.active + 1) % self.roster.len();
        }

        let mut outcome = TickOutcome::default();
        if entropy.unit() > CELEBRATION_THRESHOLD {
            self.celebrating = true;
            let toast = StatusToast {
                id: self.next_toast_id(now_ms),
                text: STATUS_MESSAGES[entropy.index(STATUS_MESSAGES.len())],
                x: entropy.span(20.0, 60.0),
                y: entropy.span(30.0, 40.0),
            };
            outcome.celebration = Some(toast.id);
            self.toasts.push(toast);
        }

        self.energy = EnergyLevel::from_roster(&self.roster);
        outcome
    }

    pub fn end_celebration(&mut self) {
        self.celebrating = false;
    }

    /// Remove a toast by id; false if it was already gone
    pub fn dismiss(&mut self, id: ToastId) -> bool {
        let before = self.toasts.len();
        self.toasts.retain(|t| t.id != id);
        self.toasts.len() != before
    }

    fn next_toast_id(&mut self, now_ms: u64) -> ToastId {
        let id = match self.last_toast {
            Some(ToastId(last)) if now_ms <= last => ToastId(last + 1),
            _ => ToastId(now_ms),
        };
        self.last_toast = Some(id);
        id
    }
}

impl Default for WaitingRoom {
    fn default() -> Self {
        Self::new(super::roster::default_roster())
    }
}
