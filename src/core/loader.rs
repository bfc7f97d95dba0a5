//! Loader sequence state machine
//!
//! Narrates five fixed stages while a progress ring fills. The progress
//! clock and the step clock tick independently; the sequence reports
//! completion exactly once, on the tick where progress first reaches 100.

use std::time::Duration;

use super::entropy::Entropy;
use super::timing::{DEFAULT_TICK, ProgressClock, StepClock};

/// Default total duration of the splash
pub const DEFAULT_LOADER_DURATION: Duration = Duration::from_millis(3500);

/// Delay between reaching 100% and invoking the completion callback
pub const COMPLETION_GRACE: Duration = Duration::from_millis(800);

/// Circumference of the progress ring (r = 50)
pub const RING_CIRCUMFERENCE: f64 = 314.0;

/// Number of decorative particles behind the splash
pub const PARTICLE_COUNT: usize = 20;

pub const PARTICLE_PALETTE: [&str; 5] = ["#6366F1", "#8B5CF6", "#10B981", "#F59E0B", "#EC4899"];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StepIcon {
    Clock,
    Check,
}

/// One narrated stage
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LoaderStep {
    pub text: &'static str,
    pub icon: StepIcon,
    pub color: &'static str,
}

pub static LOADER_STEPS: [LoaderStep; 5] = [
    LoaderStep {
        text: "Initializing Waitroom...",
        icon: StepIcon::Clock,
        color: "#6366F1",
    },
    LoaderStep {
        text: "Loading team data...",
        icon: StepIcon::Clock,
        color: "#8B5CF6",
    },
    LoaderStep {
        text: "Analyzing dependencies...",
        icon: StepIcon::Clock,
        color: "#10B981",
    },
    LoaderStep {
        text: "Optimizing workflow...",
        icon: StepIcon::Clock,
        color: "#F59E0B",
    },
    LoaderStep {
        text: "Ready to eliminate bottlenecks!",
        icon: StepIcon::Check,
        color: "#10B981",
    },
];

/// Marker returned once when the progress ring fills
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[must_use = "the completion callback must be scheduled"]
pub struct Completion {
    /// Wait this long before invoking the callback
    pub after: Duration,
}

#[derive(Debug, Clone, PartialEq)]
pub struct LoaderSequence {
    progress: ProgressClock,
    steps: StepClock,
    complete: bool,
}

impl LoaderSequence {
    pub fn new(duration: Duration) -> Self {
        Self {
            progress: ProgressClock::new(duration, DEFAULT_TICK),
            steps: StepClock::new(duration, LOADER_STEPS.len()),
            complete: false,
        }
    }

    /// Period of the progress interval
    pub fn progress_period(&self) -> Duration {
        self.progress.tick_period()
    }

    /// Period of the step interval
    pub fn step_period(&self) -> Duration {
        self.steps.period()
    }

    /// Advance the progress ring; `Some` exactly once, when it first fills
    pub fn on_progress_tick(&mut self) -> Option<Completion> {
        if self.complete {
            return None;
        }
        self.progress.tick();
        if self.progress.is_full() {
            self.complete = true;
            return Some(Completion {
                after: COMPLETION_GRACE,
            });
        }
        None
    }

    pub fn on_step_tick(&mut self) -> usize {
        self.steps.tick()
    }

    pub fn progress(&self) -> f64 {
        self.progress.value()
    }

    /// Progress rounded for the label in the middle of the ring
    pub fn percent(&self) -> u32 {
        self.progress().round() as u32
    }

    pub fn step_index(&self) -> usize {
        self.steps.index()
    }

    pub fn is_last_step(&self) -> bool {
        self.steps.is_last()
    }

    pub fn current_step(&self) -> &'static LoaderStep {
        &LOADER_STEPS[self.steps.index().min(LOADER_STEPS.len() - 1)]
    }

    pub fn is_complete(&self) -> bool {
        self.complete
    }

    /// `stroke-dashoffset` of the progress ring
    pub fn dash_offset(&self) -> f64 {
        RING_CIRCUMFERENCE - RING_CIRCUMFERENCE * self.progress() / 100.0
    }
}

impl Default for LoaderSequence {
    fn default() -> Self {
        Self::new(DEFAULT_LOADER_DURATION)
    }
}

/// Decorative dot in the splash background
#[derive(Debug, Clone, PartialEq)]
pub struct Particle {
    pub x: f64,
    pub y: f64,
    pub size: f64,
    pub delay: f64,
    pub duration: f64,
    pub color: &'static str,
    pub drift_x: f64,
    pub drift_y: f64,
}

impl Particle {
    pub fn random(entropy: &mut impl Entropy) -> Self {
        Self {
            x: entropy.span(0.0, 100.0),
            y: entropy.span(0.0, 100.0),
            delay: entropy.span(0.0, 2.0),
            duration: entropy.span(3.0, 2.0),
            size: entropy.span(2.0, 4.0),
            color: PARTICLE_PALETTE[entropy.index(PARTICLE_PALETTE.len())],
            drift_x: entropy.span(-50.0, 100.0),
            drift_y: entropy.span(-50.0, 100.0),
        }
    }

    /// Inline style carrying position, size and animation timing
    pub fn style(&self) -> String {
        format!(
            "left: {:.2}%; top: {:.2}%; width: {:.2}px; height: {:.2}px; background: {}; \
             animation-delay: {:.2}s; animation-duration: {:.2}s; \
             --drift-x: {:.1}px; --drift-y: {:.1}px;",
            self.x,
            self.y,
            self.size,
            self.size,
            self.color,
            self.delay,
            self.duration,
            self.drift_x,
            self.drift_y,
        )
    }
}

pub fn particle_field(entropy: &mut impl Entropy, count: usize) -> Vec<Particle> {
    (0..count).map(|_| Particle::random(entropy)).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::entropy::seeded;
    use crate::core::entropy::testing::Scripted;

    #[test]
    fn test_initial_sequence() {
        let seq = LoaderSequence::default();
        assert_eq!(seq.progress(), 0.0);
        assert_eq!(seq.percent(), 0);
        assert_eq!(seq.step_index(), 0);
        assert_eq!(seq.current_step().text, "Initializing Waitroom...");
        assert!(!seq.is_complete());
        assert_eq!(seq.dash_offset(), RING_CIRCUMFERENCE);
        assert_eq!(seq.step_period(), Duration::from_millis(700));
        assert_eq!(seq.progress_period(), Duration::from_millis(50));
    }

    #[test]
    fn test_completion_fires_exactly_once() {
        let mut seq = LoaderSequence::new(Duration::from_millis(1000));
        let completions: Vec<usize> = (1..=100)
            .filter(|_| seq.on_progress_tick().is_some())
            .collect();
        assert_eq!(completions, vec![20]);
        assert!(seq.is_complete());
        assert_eq!(seq.percent(), 100);
        assert_eq!(seq.dash_offset(), 0.0);
    }

    #[test]
    fn test_completion_carries_grace_delay() {
        let mut seq = LoaderSequence::new(Duration::from_millis(100));
        assert_eq!(seq.on_progress_tick(), None);
        assert_eq!(
            seq.on_progress_tick(),
            Some(Completion {
                after: Duration::from_millis(800)
            })
        );
    }

    #[test]
    fn test_steps_hold_on_ready() {
        let mut seq = LoaderSequence::default();
        for _ in 0..10 {
            seq.on_step_tick();
        }
        assert_eq!(seq.step_index(), 4);
        assert!(seq.is_last_step());
        assert_eq!(seq.current_step().icon, StepIcon::Check);
        assert_eq!(seq.current_step().text, "Ready to eliminate bottlenecks!");
    }

    #[test]
    fn test_steps_are_fixed() {
        let texts: Vec<&str> = LOADER_STEPS.iter().map(|s| s.text).collect();
        assert_eq!(
            texts,
            vec![
                "Initializing Waitroom...",
                "Loading team data...",
                "Analyzing dependencies...",
                "Optimizing workflow...",
                "Ready to eliminate bottlenecks!",
            ]
        );
        assert!(
            LOADER_STEPS[..4]
                .iter()
                .all(|step| step.icon == StepIcon::Clock)
        );
    }

    #[test]
    fn test_percent_rounds() {
        let mut seq = LoaderSequence::new(Duration::from_millis(3500));
        // 1 tick of 50ms over 3500ms = 1.428...%
        let _ = seq.on_progress_tick();
        assert_eq!(seq.percent(), 1);
        let _ = seq.on_progress_tick();
        assert_eq!(seq.percent(), 3);
    }

    #[test]
    fn test_particle_field_size_and_ranges() {
        let mut rng = seeded(11);
        let field = particle_field(&mut rng, PARTICLE_COUNT);
        assert_eq!(field.len(), 20);
        for p in &field {
            assert!((0.0..100.0).contains(&p.x));
            assert!((0.0..100.0).contains(&p.y));
            assert!((2.0..6.0).contains(&p.size));
            assert!((0.0..2.0).contains(&p.delay));
            assert!((3.0..5.0).contains(&p.duration));
            assert!((-50.0..50.0).contains(&p.drift_x));
            assert!(PARTICLE_PALETTE.contains(&p.color));
        }
    }

    #[test]
    fn test_particle_style() {
        let mut script = Scripted::new(&[0.5, 0.25, 0.0, 0.5, 0.5, 0.0, 0.5, 0.5]);
        let particle = Particle::random(&mut script);
        assert_eq!(particle.x, 50.0);
        assert_eq!(particle.y, 25.0);
        assert_eq!(particle.color, "#6366F1");

        let style = particle.style();
        assert!(style.contains("left: 50.00%"));
        assert!(style.contains("top: 25.00%"));
        assert!(style.contains("width: 4.00px"));
        assert!(style.contains("animation-duration: 4.00s"));
    }
}
