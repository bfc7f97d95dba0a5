//! Landing page component
//!
//! The marketing page shown once the loader hands over:
//! - Header with section navigation and a mobile drawer
//! - Hero with the rotating headline, stats and the live waiting room
//! - Features, how it works, pricing and testimonials
//! - Call-to-action, contact form and footer

use leptos::prelude::*;
use leptos_meta::{Meta, Title};

use crate::core::Section;
use crate::core::content::{
    BONUS_FEATURES, CONTACT_PERKS, CONTACT_STATS, CTA_PERKS, FEATURES, FOOTER_LINKS, Feature,
    HERO_STATS, PRICING, PricingTier, TEAM_SIZES, TESTIMONIALS, Testimonial,
};
use crate::core::roster::initials;
use crate::ui::common::{FormField, SelectField, TextAreaField};
use crate::ui::how_it_works::HowItWorks;
use crate::ui::icon::{Icon, icons};
use crate::ui::scroll::scroll_to_section;
use crate::ui::typewriter::TypewriterText;
use crate::ui::waiting_room::ElegantWaitingRoom;

#[component]
pub fn LandingPage() -> impl IntoView {
    view! {
        <SeoMeta />

        <div class="landing">
            <Header />
            <Hero />
            <FeaturesSection />
            <HowItWorks />
            <PricingSection />
            <TestimonialsSection />
            <CtaSection />
            <ContactSection />
            <Footer />
        </div>
    }
}

#[component]
fn SeoMeta() -> impl IntoView {
    view! {
        <Title text="Waitroom - See who's waiting on whom" />
        <Meta name="description" content="Waitroom shows every task dependency on your team, who is blocked and for how long, so work keeps moving." />
        <Meta property="og:type" content="website" />
        <Meta property="og:title" content="Waitroom - See who's waiting on whom" />
    }
}

/// Header component with mobile menu support
#[component]
fn Header() -> impl IntoView {
    let (mobile_menu_open, set_mobile_menu_open) = signal(false);

    let go_to = move |section: Section| {
        set_mobile_menu_open.set(false);
        scroll_to_section(section);
    };

    view! {
        <header class="site-header">
            <div class="header-inner">
                <a href="/" class="header-brand">
                    <Logo />
                    <span class="brand-name">"Waitroom"</span>
                </a>

                // Desktop Navigation
                <nav class="header-nav">
                    {Section::NAV.into_iter().map(|section| view! {
                        <button class="nav-link" on:click=move |_| go_to(section)>
                            {section.label()}
                        </button>
                    }).collect_view()}
                    <button class="btn btn-primary btn-small" on:click=move |_| go_to(Section::Contact)>
                        "Get Started"
                    </button>
                </nav>

                <button
                    class="mobile-menu-toggle"
                    on:click=move |_| set_mobile_menu_open.update(|open| *open = !*open)
                    aria-label="Toggle mobile menu"
                    aria-expanded=move || mobile_menu_open.get().to_string()
                >
                    {move || {
                        if mobile_menu_open.get() {
                            view! { <Icon name=icons::X class="w-6 h-6" /> }.into_any()
                        } else {
                            view! { <Icon name=icons::MENU class="w-6 h-6" /> }.into_any()
                        }
                    }}
                </button>
            </div>

            // Mobile drawer
            <div class="mobile-drawer" class:open=move || mobile_menu_open.get()>
                <nav class="mobile-nav">
                    {Section::NAV.into_iter().map(|section| view! {
                        <button class="mobile-nav-link" on:click=move |_| go_to(section)>
                            {section.label()}
                        </button>
                    }).collect_view()}
                </nav>
            </div>
        </header>
    }
}

#[component]
fn Hero() -> impl IntoView {
    view! {
        <section class="hero">
            <div class="hero-inner">
                <div class="hero-copy">
                    <span class="hero-badge">
                        <Icon name=icons::STAR class="w-4 h-4" />
                        "Dependency tracking for modern teams"
                    </span>
                    <h1 class="hero-title">
                        "Stop "
                        <TypewriterText class="hero-highlight" />
                        <br />
                        "Start Shipping"
                    </h1>
                    <p class="hero-subtitle">
                        "Waitroom shows who is waiting on whom, how long they've been blocked, and what to unblock first."
                    </p>
                    <div class="hero-actions">
                        <button class="btn btn-primary" on:click=move |_| scroll_to_section(Section::Contact)>
                            "Start Free Trial"
                            <Icon name=icons::ARROW_RIGHT class="w-5 h-5" />
                        </button>
                        <button class="btn btn-secondary" on:click=move |_| scroll_to_section(Section::HowItWorks)>
                            "See How It Works"
                        </button>
                    </div>
                    <div class="hero-stats">
                        {HERO_STATS.iter().map(|stat| view! {
                            <div class="hero-stat">
                                <span class="hero-stat-value">{stat.value}</span>
                                <span class="hero-stat-label">{stat.label}</span>
                            </div>
                        }).collect_view()}
                    </div>
                </div>
                <div class="hero-visual">
                    <ElegantWaitingRoom />
                </div>
            </div>
        </section>
    }
}

#[component]
fn FeaturesSection() -> impl IntoView {
    view! {
        <section id=Section::Features.id() class="features">
            <div class="section-inner">
                <div class="section-heading">
                    <span class="section-eyebrow">"Features"</span>
                    <h2 class="section-title">"Everything you need to unblock your team"</h2>
                    <p class="section-subtitle">
                        "Dependencies, blockers and progress in one place, updated as work happens."
                    </p>
                </div>

                <div class="feature-grid">
                    {FEATURES.iter().map(|feature| view! { <FeatureCard feature=feature /> }).collect_view()}
                </div>

                <div class="bonus-grid">
                    {BONUS_FEATURES.iter().map(|bonus| view! {
                        <div class="bonus-card">
                            <span class="bonus-title">{bonus.value}</span>
                            <span class="bonus-label">{bonus.label}</span>
                        </div>
                    }).collect_view()}
                </div>
            </div>
        </section>
    }
}

#[component]
fn FeatureCard(feature: &'static Feature) -> impl IntoView {
    view! {
        <div class=format!("feature-card tone-{}", feature.tone)>
            <div class="feature-icon">
                <Icon name=feature.icon class="w-6 h-6" />
            </div>
            <h3 class="feature-title">{feature.title}</h3>
            <p class="feature-description">{feature.description}</p>
        </div>
    }
}

#[component]
fn PricingSection() -> impl IntoView {
    view! {
        <section id=Section::Pricing.id() class="pricing">
            <div class="section-inner">
                <div class="section-heading">
                    <span class="section-eyebrow">"Pricing"</span>
                    <h2 class="section-title">"Simple, transparent pricing"</h2>
                    <p class="section-subtitle">"Start free. Upgrade when your team grows."</p>
                </div>

                <div class="pricing-grid">
                    {PRICING.iter().map(|tier| view! { <PricingCard tier=tier /> }).collect_view()}
                </div>
            </div>
        </section>
    }
}

#[component]
fn PricingCard(tier: &'static PricingTier) -> impl IntoView {
    let price = match tier.monthly_usd {
        Some(usd) => view! {
            <span class="price-amount">{format!("${}", usd)}</span>
            <span class="price-period">"/month"</span>
        }
        .into_any(),
        None => view! { <span class="price-amount">"Custom"</span> }.into_any(),
    };

    view! {
        <div class=format!("pricing-card {}", tier.class) class:featured=tier.featured>
            {tier.featured.then(|| view! { <span class="pricing-badge">"Most Popular"</span> })}

            <h3 class="pricing-name">{tier.name}</h3>
            <div class="pricing-price">{price}</div>

            <ul class="pricing-features">
                {tier.features.iter().map(|(icon, text)| view! {
                    <li>
                        <Icon name=*icon class="w-5 h-5" />
                        <span>{*text}</span>
                    </li>
                }).collect_view()}
            </ul>

            <button
                class=if tier.featured { "btn btn-primary btn-block" } else { "btn btn-secondary btn-block" }
                on:click=move |_| scroll_to_section(Section::Contact)
            >
                {tier.cta}
            </button>
        </div>
    }
}

#[component]
fn TestimonialsSection() -> impl IntoView {
    view! {
        <section class="testimonials">
            <div class="section-inner">
                <div class="section-heading">
                    <span class="section-eyebrow">"Testimonials"</span>
                    <h2 class="section-title">"Teams ship faster with Waitroom"</h2>
                </div>

                <div class="testimonial-grid">
                    {TESTIMONIALS.iter().map(|testimonial| view! { <TestimonialCard testimonial=testimonial /> }).collect_view()}
                </div>
            </div>
        </section>
    }
}

#[component]
fn TestimonialCard(testimonial: &'static Testimonial) -> impl IntoView {
    view! {
        <figure class="testimonial-card">
            <div class="testimonial-stars" aria-label="5 out of 5 stars">
                {(0..5).map(|_| view! { <Icon name=icons::STAR class="w-4 h-4" /> }).collect_view()}
            </div>
            <blockquote class="testimonial-text">{testimonial.text}</blockquote>
            <div class="testimonial-metric" style=format!("color: {};", testimonial.color)>
                <span class="testimonial-metric-value">{testimonial.metric}</span>
                <span class="testimonial-metric-label">{testimonial.metric_label}</span>
            </div>
            <figcaption class="testimonial-author">
                <span class="testimonial-avatar" style=format!("background: {};", testimonial.color)>
                    {initials(testimonial.name)}
                </span>
                <span>
                    <span class="testimonial-name">{testimonial.name}</span>
                    <span class="testimonial-role">{format!("{}, {}", testimonial.role, testimonial.company)}</span>
                </span>
            </figcaption>
        </figure>
    }
}

#[component]
fn CtaSection() -> impl IntoView {
    view! {
        <section class="cta">
            <div class="section-inner cta-inner">
                <h2 class="cta-title">"Ready to stop waiting?"</h2>
                <p class="cta-subtitle">"Join thousands of teams who see their blockers before they cost a sprint."</p>
                <div class="cta-actions">
                    <button class="btn btn-light" on:click=move |_| scroll_to_section(Section::Contact)>
                        "Start Your Free Trial"
                        <Icon name=icons::ARROW_RIGHT class="w-5 h-5" />
                    </button>
                </div>
                <div class="cta-perks">
                    {CTA_PERKS.iter().map(|perk| view! {
                        <div class="cta-perk">
                            <span class="cta-perk-icon" style=format!("background: {};", perk.color)>
                                <Icon name=perk.icon class="w-5 h-5 text-white" />
                            </span>
                            <span>
                                <span class="cta-perk-title">{perk.title}</span>
                                <span class="cta-perk-subtitle">{perk.subtitle}</span>
                            </span>
                        </div>
                    }).collect_view()}
                </div>
            </div>
        </section>
    }
}

/// Contact section; the form is display-only
#[component]
fn ContactSection() -> impl IntoView {
    let name = RwSignal::new(String::new());
    let email = RwSignal::new(String::new());
    let company = RwSignal::new(String::new());
    let team_size = RwSignal::new(String::new());
    let challenges = RwSignal::new(String::new());
    let team_sizes: &'static [&'static str] = &TEAM_SIZES;

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
    };

    view! {
        <section id=Section::Contact.id() class="contact">
            <div class="section-inner contact-grid">
                <div class="contact-copy">
                    <span class="section-eyebrow">"Contact"</span>
                    <h2 class="section-title">"Let's unblock your team"</h2>
                    <p class="section-subtitle">
                        "Tell us about your team and we'll show you where the waiting happens."
                    </p>
                    <ul class="contact-perks">
                        {CONTACT_PERKS.iter().map(|perk| view! {
                            <li>
                                <Icon name=icons::CHECK class="w-5 h-5" />
                                <span>{*perk}</span>
                            </li>
                        }).collect_view()}
                    </ul>
                    <div class="contact-stats">
                        {CONTACT_STATS.iter().map(|stat| view! {
                            <div class="contact-stat">
                                <span class="contact-stat-value">{stat.value}</span>
                                <span class="contact-stat-label">{stat.label}</span>
                            </div>
                        }).collect_view()}
                    </div>
                </div>

                <form class="contact-form" on:submit=on_submit>
                    <div class="form-row">
                        <FormField label="Full Name" name="name" placeholder="Jane Doe" value=name />
                        <FormField label="Work Email" name="email" input_type="email" placeholder="jane@company.com" value=email />
                    </div>
                    <div class="form-row">
                        <FormField label="Company" name="company" placeholder="Acme Inc." value=company />
                        <SelectField label="Team Size" name="team_size" placeholder="Select team size" options=team_sizes value=team_size />
                    </div>
                    <TextAreaField
                        label="Biggest workflow challenges"
                        name="challenges"
                        placeholder="Where does work get stuck today?"
                        value=challenges
                    />
                    <button type="submit" class="btn btn-primary btn-block">
                        <Icon name=icons::MAIL class="w-5 h-5" />
                        "Request a Demo"
                    </button>
                </form>
            </div>
        </section>
    }
}

#[component]
fn Logo() -> impl IntoView {
    view! {
        <div class="brand-logo">
            <Icon name=icons::CLOCK class="w-6 h-6 text-white" />
        </div>
    }
}

#[component]
fn Footer() -> impl IntoView {
    view! {
        <footer class="site-footer">
            <div class="section-inner">
                <div class="footer-grid">
                    <div class="footer-brand">
                        <div class="header-brand">
                            <Logo />
                            <span class="brand-name">"Waitroom"</span>
                        </div>
                        <p class="footer-tagline">"See who's waiting on whom, and keep work moving."</p>
                    </div>

                    {FOOTER_LINKS.iter().map(|group| view! {
                        <div class="footer-group">
                            <h4 class="footer-heading">{group.title}</h4>
                            <ul>
                                {group.links.iter().map(|(label, href)| view! {
                                    <li><a href=*href class="footer-link">{*label}</a></li>
                                }).collect_view()}
                            </ul>
                        </div>
                    }).collect_view()}
                </div>

                <div class="footer-bottom">
                    <span>"© 2025 Waitroom. All rights reserved."</span>
                </div>
            </div>
        </footer>
    }
}
