use leptos::prelude::*;

use crate::core::typewriter::HERO_WORDS;

/// Cycles the hero words with a blinking caret
#[component]
pub fn TypewriterText(#[prop(default = "")] class: &'static str) -> impl IntoView {
    // Server markup carries the first word so the headline is never empty
    let text = RwSignal::new(HERO_WORDS[0]);

    #[cfg(feature = "hydrate")]
    {
        use gloo_timers::future::TimeoutFuture;
        use leptos::task::spawn_local;

        use crate::core::typewriter::{DEFAULT_HOLD, Typewriter};
        use crate::ui::timers::browser_millis;

        let mut typewriter = Typewriter::default().revealed();

        spawn_local(async move {
            let mut delay = DEFAULT_HOLD;
            loop {
                TimeoutFuture::new(browser_millis(delay)).await;
                delay = typewriter.step();
                // stops once the component is gone
                if text.try_set(typewriter.visible()).is_some() {
                    break;
                }
            }
        });
    }

    view! {
        <span class=format!("typewriter {}", class)>
            <span class="typewriter-text">{move || text.get()}</span>
            <span class="typewriter-caret" aria-hidden="true">"|"</span>
        </span>
    }
}
