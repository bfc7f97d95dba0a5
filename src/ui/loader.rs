//! Splash screen shown before the landing page
//!
//! Drives a [`LoaderSequence`] from two browser intervals and hands over to
//! the page through `on_complete` once the ring has filled and the grace
//! delay has passed. The server renders the first frame (0%, first step);
//! particles and timers only exist in the browser.

use std::time::Duration;

use leptos::prelude::*;

#[cfg(any(feature = "hydrate", test))]
use crate::core::loader::Completion;
use crate::core::loader::{DEFAULT_LOADER_DURATION, LoaderSequence, Particle, RING_CIRCUMFERENCE};
use crate::ui::icon::{Icon, icons};
#[cfg(any(feature = "hydrate", test))]
use crate::ui::timers::TimerSlot;

/// Number of floating shapes around the ring
const FLOATING_SHAPES: usize = 6;

/// Advance the ring; its interval is cleared once the ring is full
#[cfg(any(feature = "hydrate", test))]
fn progress_tick<H: 'static>(
    sequence: RwSignal<LoaderSequence>,
    interval: TimerSlot<H>,
) -> Option<Completion> {
    let completion = sequence.try_update(LoaderSequence::on_progress_tick).flatten();
    if sequence
        .try_with_untracked(LoaderSequence::is_complete)
        .unwrap_or(true)
    {
        interval.clear();
    }
    completion
}

/// Advance the status line; its interval is cleared on the last step
#[cfg(any(feature = "hydrate", test))]
fn step_tick<H: 'static>(sequence: RwSignal<LoaderSequence>, interval: TimerSlot<H>) {
    let on_last = sequence
        .try_update(|seq| {
            seq.on_step_tick();
            seq.is_last_step()
        })
        .unwrap_or(true);
    if on_last {
        interval.clear();
    }
}

#[component]
pub fn WaitroomLoader(
    /// Invoked once, after the progress ring has filled
    on_complete: Callback<()>,
    /// Total time for the ring to fill
    #[prop(default = DEFAULT_LOADER_DURATION)]
    duration: Duration,
) -> impl IntoView {
    let sequence = RwSignal::new(LoaderSequence::new(duration));
    let particles = RwSignal::new(Vec::<Particle>::new());

    #[cfg(feature = "hydrate")]
    {
        use leptos::logging::log;

        use crate::core::entropy::seeded;
        use crate::core::loader::{PARTICLE_COUNT, particle_field};
        use crate::ui::timers::{TimerSet, use_interval};

        // Generated after hydration so the server markup stays stable
        Effect::new(move |_| {
            let mut rng = seeded(js_sys::Date::now() as u64);
            particles.set(particle_field(&mut rng, PARTICLE_COUNT));
        });

        let timers = TimerSet::new();
        let (progress_period, step_period) =
            sequence.with_untracked(|seq| (seq.progress_period(), seq.step_period()));

        use_interval(progress_period, move |interval| {
            if let Some(completion) = progress_tick(sequence, interval) {
                log!(
                    "loader filled, handing over in {}ms",
                    completion.after.as_millis()
                );
                timers.schedule(completion.after, move || on_complete.run(()));
            }
        });

        use_interval(step_period, move |interval| step_tick(sequence, interval));
    }

    #[cfg(not(feature = "hydrate"))]
    let _ = on_complete;

    let is_complete = Memo::new(move |_| sequence.with(LoaderSequence::is_complete));
    let step = Memo::new(move |_| sequence.with(|seq| *seq.current_step()));

    view! {
        <div class="loader-screen" role="status" aria-live="polite">
            <div class="loader-particles" aria-hidden="true">
                {move || {
                    particles.get().into_iter().map(|particle| {
                        view! { <span class="loader-particle" style=particle.style()></span> }
                    }).collect_view()
                }}
            </div>

            <div class="loader-floating" aria-hidden="true">
                {(0..FLOATING_SHAPES).map(|i| {
                    view! { <span class=format!("loader-float loader-float-{}", i + 1)></span> }
                }).collect_view()}
            </div>

            <div class="loader-content">
                <div class="loader-logo">
                    <LoaderLogo />
                    <span class="loader-brand">"Waitroom"</span>
                </div>

                <div class="loader-ring" class:complete=move || is_complete.get()>
                    <svg viewBox="0 0 120 120" class="loader-ring-svg">
                        <defs>
                            <linearGradient id="loader-ring-gradient" x1="0%" y1="0%" x2="100%" y2="100%">
                                <stop offset="0%" stop-color="#6366F1" />
                                <stop offset="50%" stop-color="#8B5CF6" />
                                <stop offset="100%" stop-color="#10B981" />
                            </linearGradient>
                        </defs>
                        <circle class="loader-ring-track" cx="60" cy="60" r="50" fill="none" stroke-width="6" />
                        <circle
                            class="loader-ring-fill"
                            cx="60"
                            cy="60"
                            r="50"
                            fill="none"
                            stroke="url(#loader-ring-gradient)"
                            stroke-width="6"
                            stroke-linecap="round"
                            stroke-dasharray=RING_CIRCUMFERENCE.to_string()
                            stroke-dashoffset=move || format!("{:.2}", sequence.with(LoaderSequence::dash_offset))
                            transform="rotate(-90 60 60)"
                        />
                    </svg>
                    <div class="loader-ring-label">
                        <Show
                            when=move || is_complete.get()
                            fallback=move || view! {
                                <span class="loader-percent">{move || format!("{}%", sequence.with(LoaderSequence::percent))}</span>
                            }
                        >
                            <span class="loader-success">
                                <Icon name=icons::CHECK class="w-10 h-10" />
                            </span>
                        </Show>
                    </div>
                    <Show when=move || is_complete.get()>
                        <span class="loader-ripple" aria-hidden="true"></span>
                    </Show>
                </div>

                <div class="loader-step" style=move || format!("color: {};", step.get().color)>
                    {move || view! { <Icon name=icons::for_step(step.get().icon) class="w-5 h-5" /> }}
                    <span class="loader-step-text">{move || step.get().text}</span>
                </div>
            </div>
        </div>
    }
}

#[component]
fn LoaderLogo() -> impl IntoView {
    view! {
        <div class="brand-logo">
            <Icon name=icons::CLOCK class="w-6 h-6 text-white" />
        </div>
    }
}

#[cfg(test)]
mod tests {
    use std::cell::Cell;
    use std::rc::Rc;

    use super::*;
    use crate::core::loader::{COMPLETION_GRACE, LOADER_STEPS};
    use crate::ui::timers::PendingTimers;

    /// Stand-in timer handle counting its own cancellation
    struct Counted(Rc<Cell<usize>>);

    impl Drop for Counted {
        fn drop(&mut self) {
            self.0.set(self.0.get() + 1);
        }
    }

    fn one_second() -> RwSignal<LoaderSequence> {
        RwSignal::new(LoaderSequence::new(Duration::from_millis(1000)))
    }

    #[test]
    fn test_progress_interval_cleared_when_full() {
        let owner = Owner::new();
        let cleared = Rc::new(Cell::new(0));

        owner.with(|| {
            let sequence = one_second();
            let interval = TimerSlot::new();
            interval.arm(Counted(cleared.clone()));

            let mut completions = 0;
            let mut ticks = 0;
            while interval.is_armed() {
                ticks += 1;
                assert!(ticks <= 1000, "progress interval never cleared");
                if progress_tick(sequence, interval).is_some() {
                    completions += 1;
                }
            }

            assert_eq!(completions, 1);
            assert_eq!(cleared.get(), 1);
            assert!(sequence.with_untracked(LoaderSequence::is_complete));
            assert_eq!(sequence.with_untracked(LoaderSequence::percent), 100);
        });
    }

    #[test]
    fn test_step_interval_cleared_on_last_step() {
        let owner = Owner::new();
        let cleared = Rc::new(Cell::new(0));

        owner.with(|| {
            let sequence = one_second();
            let interval = TimerSlot::new();
            interval.arm(Counted(cleared.clone()));

            let mut ticks = 0;
            while interval.is_armed() {
                ticks += 1;
                assert!(ticks <= 100, "step interval never cleared");
                step_tick(sequence, interval);
            }

            assert_eq!(ticks, LOADER_STEPS.len() - 1);
            assert_eq!(cleared.get(), 1);
            assert!(sequence.with_untracked(LoaderSequence::is_last_step));
        });
    }

    #[test]
    fn test_unmount_cancels_pending_completion() {
        let owner = Owner::new();
        let cleared = Rc::new(Cell::new(0));
        let fired = Rc::new(Cell::new(false));

        owner.with(|| {
            let sequence = one_second();
            let progress = TimerSlot::new();
            progress.arm(Counted(cleared.clone()));
            let steps = TimerSlot::new();
            steps.arm(Counted(cleared.clone()));
            let timers = PendingTimers::new();

            let completion = (0..1000)
                .find_map(|_| progress_tick(sequence, progress))
                .expect("ring fills");
            assert_eq!(completion.after, COMPLETION_GRACE);
            timers.hold(fired.clone(), Counted(cleared.clone()));
        });

        // only the progress interval is gone so far
        assert_eq!(cleared.get(), 1);

        owner.cleanup();
        assert_eq!(cleared.get(), 3);
        assert!(!fired.get());
    }

    #[test]
    fn test_unmount_before_full_cancels_both_intervals() {
        let owner = Owner::new();
        let cleared = Rc::new(Cell::new(0));

        owner.with(|| {
            let sequence = one_second();
            let progress = TimerSlot::new();
            progress.arm(Counted(cleared.clone()));
            let steps = TimerSlot::new();
            steps.arm(Counted(cleared.clone()));

            assert_eq!(progress_tick(sequence, progress), None);
            step_tick(sequence, steps);
            assert!(progress.is_armed() && steps.is_armed());
        });

        owner.cleanup();
        assert_eq!(cleared.get(), 2);
    }
}
