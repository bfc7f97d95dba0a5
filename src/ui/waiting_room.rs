//! Animated waiting-room widget in the hero
//!
//! Every four seconds the highlighted member advances and, now and then, a
//! status toast floats up. Toasts leave on their own after three seconds.

use leptos::prelude::*;

use crate::core::roster::{
    DependencyLink, MemberStatus, TeamMember, dependency_links, find_by_id, first_name,
};
use crate::core::waiting_room::{StatusToast, WaitingRoom};
use crate::ui::icon::{Icon, icons};

#[component]
pub fn ElegantWaitingRoom() -> impl IntoView {
    let room = RwSignal::new(WaitingRoom::default());

    #[cfg(feature = "hydrate")]
    {
        use crate::core::entropy::seeded;
        use crate::core::waiting_room::{CELEBRATION_WINDOW, TICK_PERIOD, TOAST_LIFETIME};
        use crate::ui::timers::{TimerSet, use_interval};

        let timers = TimerSet::new();
        let mut rng = seeded(js_sys::Date::now() as u64);

        use_interval(TICK_PERIOD, move |_| {
            let now = js_sys::Date::now() as u64;
            let Some(outcome) = room.try_update(|room| room.tick(&mut rng, now)) else {
                return;
            };
            if let Some(id) = outcome.celebration {
                timers.schedule(CELEBRATION_WINDOW, move || {
                    room.try_update(WaitingRoom::end_celebration);
                });
                timers.schedule(TOAST_LIFETIME, move || {
                    room.try_update(|room| room.dismiss(id));
                });
            }
        });
    }

    // The roster is fixed; only the highlight and the overlays change
    let roster = room.with_untracked(|room| room.roster().to_vec());
    let links = dependency_links(&roster);
    let blocked = room.with_untracked(WaitingRoom::blocked_count);

    let energy_style = move || {
        room.with(|room| {
            let energy = room.energy();
            format!(
                "width: {:.0}%; background: {};",
                energy.width_percent(),
                energy.gradient()
            )
        })
    };

    view! {
        <div class="waiting-room" class:celebrating=move || room.with(WaitingRoom::is_celebrating)>
            <div class="waiting-room-header">
                <div>
                    <h3 class="waiting-room-title">"Team Dependencies"</h3>
                    <p class="waiting-room-subtitle">"Live view of who's waiting on whom"</p>
                </div>
                <span class="live-badge">
                    <span class="live-dot"></span>
                    "Live"
                </span>
            </div>

            <div class="energy-meter">
                <div class="energy-meter-label">
                    <Icon name=icons::BOLT class="w-4 h-4" />
                    <span>"Team Energy"</span>
                </div>
                <div class="energy-track">
                    <div class="energy-fill" style=energy_style></div>
                </div>
            </div>

            <div class="member-list">
                {roster.iter().cloned().enumerate().map(|(index, member)| {
                    let active = Signal::derive(move || room.with(|room| room.is_active(index)));
                    view! { <MemberCard member=member active=active /> }
                }).collect_view()}
            </div>

            <DependencyChain links=links roster=roster.clone() />

            <div class="blocked-summary">
                <Icon name=icons::ALERT class="w-4 h-4" />
                <span>{format!("{} of {} teammates blocked", blocked, roster.len())}</span>
            </div>

            <div class="toast-layer" aria-live="polite">
                {move || {
                    room.with(|room| room.toasts().to_vec())
                        .into_iter()
                        .map(|toast| view! { <FloatingToast toast=toast /> })
                        .collect_view()
                }}
            </div>
        </div>
    }
}

#[component]
fn MemberCard(member: TeamMember, active: Signal<bool>) -> impl IntoView {
    let status_class = format!("member-status status-{}", member.status);
    let task_icon = icons::for_task(member.task_icon());

    let detail = match member.status {
        MemberStatus::Working => member.progress.map(|progress| {
            view! {
                <div class="member-progress">
                    <div class="member-progress-track">
                        <div
                            class="member-progress-fill"
                            style=format!("width: {}%; background: {};", progress, member.status.color())
                        ></div>
                    </div>
                    <span class="member-progress-value">{format!("{}%", progress)}</span>
                </div>
            }
            .into_any()
        }),
        MemberStatus::Waiting => member.waiting_for.map(|target| {
            view! {
                <div class="member-waiting">
                    <span>"Waiting for "<strong>{first_name(target)}</strong></span>
                    {member.blocked_time.map(|time| view! {
                        <span class="member-blocked-time">
                            <Icon name=icons::CLOCK class="w-3 h-3" />
                            {time}
                        </span>
                    })}
                </div>
            }
            .into_any()
        }),
        MemberStatus::Completed => Some(
            view! {
                <div class="member-done">
                    <Icon name=icons::CHECK class="w-4 h-4" />
                    "Done"
                </div>
            }
            .into_any(),
        ),
    };

    view! {
        <div class="member-card" class:active=move || active.get()>
            <div class="member-avatar" style=format!("background: {};", member.avatar)>
                {member.initials()}
            </div>
            <div class="member-body">
                <div class="member-heading">
                    <span class="member-name">{member.name}</span>
                    <span class=status_class>{member.status.to_string()}</span>
                </div>
                <span class="member-role">{member.role}</span>
                <div class="member-task">
                    <Icon name=task_icon class="w-4 h-4" />
                    <span>{member.task}</span>
                </div>
                {detail}
            </div>
        </div>
    }
}

/// "A → B" chain for every resolved dependency
#[component]
fn DependencyChain(links: Vec<DependencyLink>, roster: Vec<TeamMember>) -> impl IntoView {
    let rows = links
        .into_iter()
        .filter_map(|link| {
            let from = find_by_id(&roster, link.from)?;
            let to = find_by_id(&roster, link.to)?;
            Some((from.first_name(), to.first_name()))
        })
        .collect::<Vec<_>>();

    view! {
        <ul class="dependency-chain">
            {rows.into_iter().map(|(from, to)| view! {
                <li class="dependency-link">
                    <span>{from}</span>
                    <Icon name=icons::ARROW_RIGHT class="w-3 h-3" />
                    <span>{to}</span>
                </li>
            }).collect_view()}
        </ul>
    }
}

#[component]
fn FloatingToast(toast: StatusToast) -> impl IntoView {
    view! {
        <div
            class="status-toast"
            data-toast-id=toast.id.to_string()
            style=format!("left: {:.1}%; top: {:.1}%;", toast.x, toast.y)
        >
            {toast.text}
        </div>
    }
}
