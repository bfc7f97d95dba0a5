//! Interactive "how it works" walkthrough

use leptos::prelude::*;

use crate::core::Section;
use crate::core::content::{HOW_IT_WORKS, how_it_works_step};
use crate::ui::icon::{Icon, icons};

#[component]
pub fn HowItWorks() -> impl IntoView {
    let (active_step, set_active_step) = signal(HOW_IT_WORKS[0].id);
    let step = Memo::new(move |_| how_it_works_step(active_step.get()).id);

    view! {
        <section id=Section::HowItWorks.id() class="how-it-works">
            <div class="section-inner">
                <div class="section-heading">
                    <span class="section-eyebrow">"How it Works"</span>
                    <h2 class="section-title">"From blocked to unblocked in three steps"</h2>
                </div>

                <div class="how-grid">
                    <div class="how-nav" role="tablist">
                        {HOW_IT_WORKS.iter().map(|item| {
                            let id = item.id;
                            let is_active = Signal::derive(move || step.get() == id);
                            view! {
                                <button
                                    class="how-nav-item"
                                    class:active=move || is_active.get()
                                    role="tab"
                                    aria-selected=move || is_active.get().to_string()
                                    aria-controls="how-panel"
                                    on:click=move |_| set_active_step.set(id)
                                >
                                    <span class="how-nav-number" style=format!("background: {};", item.color)>
                                        {id}
                                    </span>
                                    <span class="how-nav-text">
                                        <span class="how-nav-title">{item.title}</span>
                                        <span class="how-nav-description">{item.description}</span>
                                    </span>
                                </button>
                            }
                        }).collect_view()}
                    </div>

                    <div id="how-panel" class="how-panel" role="tabpanel">
                        {move || {
                            let current = how_it_works_step(step.get());
                            view! {
                                <div class="how-panel-icon" style=format!("background: {};", current.color)>
                                    <Icon name=current.icon class="w-8 h-8 text-white" />
                                </div>
                                <h3 class="how-panel-title">{current.title}</h3>
                                <p class="how-panel-description">{current.description}</p>
                                <ul class="how-panel-details">
                                    {current.details.iter().map(|detail| view! {
                                        <li>
                                            <Icon name=icons::CHECK class="w-4 h-4" />
                                            <span>{*detail}</span>
                                        </li>
                                    }).collect_view()}
                                </ul>
                            }
                        }}
                    </div>
                </div>
            </div>
        </section>
    }
}
