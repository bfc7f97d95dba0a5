//! Timeline scenarios driving the state machines the way the browser timers do.

#[cfg(test)]
mod tests {
    use std::collections::BTreeMap;
    use std::time::Duration;

    use crate::core::entropy::seeded;
    use crate::core::entropy::testing::Scripted;
    use crate::core::loader::LoaderSequence;
    use crate::core::waiting_room::{
        CELEBRATION_WINDOW, TICK_PERIOD, TOAST_LIFETIME, ToastId, WaitingRoom,
    };

    fn ms(d: Duration) -> u64 {
        d.as_millis() as u64
    }

    /// Events of the loader timeline, ordered the way a timer queue would fire them
    #[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
    enum LoaderEvent {
        Step,
        Progress,
        Complete,
    }

    struct LoaderRun {
        step_changes: Vec<(u64, usize)>,
        full_at: Option<u64>,
        completed_at: Vec<u64>,
    }

    /// Run the loader on a virtual clock until `until_ms`
    fn run_loader(duration_ms: u64, until_ms: u64) -> LoaderRun {
        let mut seq = LoaderSequence::new(Duration::from_millis(duration_ms));
        let progress_every = ms(seq.progress_period());
        let step_every = ms(seq.step_period());

        let mut queue: BTreeMap<(u64, LoaderEvent), ()> = BTreeMap::new();
        queue.insert((progress_every, LoaderEvent::Progress), ());
        queue.insert((step_every, LoaderEvent::Step), ());

        let mut run = LoaderRun {
            step_changes: vec![(0, 0)],
            full_at: None,
            completed_at: Vec::new(),
        };

        while let Some(((now, event), ())) = queue.pop_first() {
            if now > until_ms {
                break;
            }
            match event {
                LoaderEvent::Progress => {
                    if let Some(completion) = seq.on_progress_tick() {
                        run.full_at = Some(now);
                        queue.insert((now + ms(completion.after), LoaderEvent::Complete), ());
                    }
                    queue.insert((now + progress_every, LoaderEvent::Progress), ());
                }
                LoaderEvent::Step => {
                    let before = seq.step_index();
                    let after = seq.on_step_tick();
                    if after != before {
                        run.step_changes.push((now, after));
                    }
                    queue.insert((now + step_every, LoaderEvent::Step), ());
                }
                LoaderEvent::Complete => run.completed_at.push(now),
            }
        }
        run
    }

    #[test]
    fn test_loader_one_second_scenario() {
        let run = run_loader(1000, 10_000);

        let boundaries: Vec<u64> = run.step_changes.iter().map(|(t, _)| *t).collect();
        assert_eq!(boundaries, vec![0, 200, 400, 600, 800]);
        assert_eq!(run.step_changes.last(), Some(&(800, 4)));

        assert_eq!(run.full_at, Some(1000));
        assert_eq!(run.completed_at, vec![1800]);
    }

    #[test]
    fn test_loader_default_duration_completes_once() {
        let run = run_loader(3500, 60_000);
        assert_eq!(run.full_at, Some(3500));
        assert_eq!(run.completed_at, vec![4300]);
        assert!(run.step_changes.iter().all(|(t, i)| *t <= 3500 && *i <= 4));
    }

    #[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
    enum RoomEvent {
        EndCelebration,
        Dismiss(ToastId),
        Tick,
    }

    #[test]
    fn test_toasts_removed_after_exact_lifetime() {
        let mut room = WaitingRoom::default();
        let mut rng = seeded(314);
        let mut queue: BTreeMap<(u64, RoomEvent), ()> = BTreeMap::new();
        queue.insert((ms(TICK_PERIOD), RoomEvent::Tick), ());

        let mut created: BTreeMap<ToastId, u64> = BTreeMap::new();
        let mut lifetimes = Vec::new();

        while let Some(((now, event), ())) = queue.pop_first() {
            if now > 400_000 {
                break;
            }
            match event {
                RoomEvent::Tick => {
                    let outcome = room.tick(&mut rng, now);
                    if let Some(id) = outcome.celebration {
                        assert!(created.insert(id, now).is_none(), "duplicate id {id}");
                        queue.insert((now + ms(CELEBRATION_WINDOW), RoomEvent::EndCelebration), ());
                        queue.insert((now + ms(TOAST_LIFETIME), RoomEvent::Dismiss(id)), ());
                    }
                    queue.insert((now + ms(TICK_PERIOD), RoomEvent::Tick), ());
                }
                RoomEvent::EndCelebration => room.end_celebration(),
                RoomEvent::Dismiss(id) => {
                    assert!(room.dismiss(id));
                    lifetimes.push(now - created[&id]);
                }
            }
            // a toast outlives neither its lifetime nor the next tick
            assert!(room.toasts().len() <= 1);
        }

        assert!(!lifetimes.is_empty());
        assert!(lifetimes.iter().all(|&l| l == 3000));
    }

    #[test]
    fn test_celebration_flag_window() {
        let mut room = WaitingRoom::default();
        let mut always = Scripted::new(&[0.95]);

        let outcome = room.tick(&mut always, 4000);
        assert!(outcome.celebration.is_some());
        assert!(room.is_celebrating());

        // host fires end_celebration at 6000, before the next tick at 8000
        room.end_celebration();
        assert!(!room.is_celebrating());
    }

    #[test]
    fn test_steady_state_energy_for_seed() {
        let mut room = WaitingRoom::default();
        let mut rng = seeded(1);
        for i in 1..=10u64 {
            room.tick(&mut rng, i * 4000);
            assert!((room.energy().value() - 0.466_666).abs() < 1e-3);
        }
    }
}
