//! Static display content of the landing page

use crate::core::icons;

/// Page sections reachable from the navigation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Section {
    Features,
    HowItWorks,
    Pricing,
    Contact,
}

impl Section {
    pub const NAV: [Section; 4] = [
        Section::Features,
        Section::HowItWorks,
        Section::Pricing,
        Section::Contact,
    ];

    /// DOM id of the section element
    pub fn id(&self) -> &'static str {
        match self {
            Section::Features => "features",
            Section::HowItWorks => "how-it-works",
            Section::Pricing => "pricing",
            Section::Contact => "contact",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Section::Features => "Features",
            Section::HowItWorks => "How it Works",
            Section::Pricing => "Pricing",
            Section::Contact => "Contact",
        }
    }
}

pub struct Stat {
    pub value: &'static str,
    pub label: &'static str,
}

pub const HERO_STATS: [Stat; 3] = [
    Stat { value: "10K+", label: "Teams Unblocked" },
    Stat { value: "2M+", label: "Dependencies Tracked" },
    Stat { value: "71%", label: "Faster Delivery" },
];

pub struct Feature {
    pub icon: &'static str,
    pub title: &'static str,
    pub description: &'static str,
    pub tone: &'static str,
}

pub static FEATURES: [Feature; 3] = [
    Feature {
        icon: icons::EYE,
        title: "Complete Visibility",
        description: "Get a bird's eye view of all task dependencies. See exactly who's waiting for what and why.",
        tone: "primary",
    },
    Feature {
        icon: icons::SYNC,
        title: "Real-time Updates",
        description: "Track progress as it happens. Get notified when blockers are resolved and work can proceed.",
        tone: "secondary",
    },
    Feature {
        icon: icons::TEAM,
        title: "Better Collaboration",
        description: "Foster accountability and transparency. Everyone knows their impact on the team's progress.",
        tone: "tertiary",
    },
];

pub const BONUS_FEATURES: [Stat; 4] = [
    Stat { value: "Smart AI Insights", label: "Predictive analytics" },
    Stat { value: "Easy Integration", label: "50+ tool connectors" },
    Stat { value: "Cloud Powered", label: "99.9% uptime" },
    Stat { value: "Lightning Fast", label: "Sub-second response" },
];

/// One step of the "how it works" walkthrough
pub struct HowItWorksStep {
    pub id: u8,
    pub title: &'static str,
    pub description: &'static str,
    pub icon: &'static str,
    pub color: &'static str,
    pub details: [&'static str; 4],
}

pub static HOW_IT_WORKS: [HowItWorksStep; 3] = [
    HowItWorksStep {
        id: 1,
        title: "Connect Your Tools",
        description: "Integrate with your existing workflow in seconds",
        icon: icons::API,
        color: "#6366F1",
        details: [
            "One-click integrations with 50+ tools",
            "Import existing tasks and dependencies",
            "Automatic team member sync",
            "No workflow disruption",
        ],
    },
    HowItWorksStep {
        id: 2,
        title: "Automatic Detection",
        description: "AI discovers dependencies and tracks blockers instantly",
        icon: icons::SYNC,
        color: "#10B981",
        details: [
            "Smart dependency mapping",
            "Real-time progress tracking",
            "Automated blocker detection",
            "Intelligent priority scoring",
        ],
    },
    HowItWorksStep {
        id: 3,
        title: "Instant Insights",
        description: "Get actionable alerts and unblock your team",
        icon: icons::BELL,
        color: "#F59E0B",
        details: [
            "Real-time dashboard updates",
            "Smart notification system",
            "Bottleneck predictions",
            "Performance analytics",
        ],
    },
];

/// Step with the given id, falling back to the first one
pub fn how_it_works_step(id: u8) -> &'static HowItWorksStep {
    HOW_IT_WORKS
        .iter()
        .find(|step| step.id == id)
        .unwrap_or(&HOW_IT_WORKS[0])
}

pub struct PricingTier {
    pub name: &'static str,
    /// `None` renders as "Custom"
    pub monthly_usd: Option<u32>,
    pub features: &'static [(&'static str, &'static str)],
    pub cta: &'static str,
    pub featured: bool,
    pub class: &'static str,
}

pub static PRICING: [PricingTier; 3] = [
    PricingTier {
        name: "Starter",
        monthly_usd: Some(29),
        features: &[
            ("team", "Up to 10 users"),
            ("api", "Basic integrations"),
            ("bell", "Email notifications"),
            ("check", "Standard support"),
        ],
        cta: "Get Started Free",
        featured: false,
        class: "starter",
    },
    PricingTier {
        name: "Professional",
        monthly_usd: Some(99),
        features: &[
            ("team", "Unlimited users"),
            ("api", "All integrations"),
            ("bell", "Slack & email alerts"),
            ("rocket", "Priority support"),
            ("chart", "Advanced analytics"),
        ],
        cta: "Start Free Trial",
        featured: true,
        class: "featured",
    },
    PricingTier {
        name: "Enterprise",
        monthly_usd: None,
        features: &[
            ("bolt", "Unlimited everything"),
            ("code", "Custom integrations"),
            ("check", "SLA guarantee"),
            ("user", "Dedicated support"),
            ("cloud", "On-premise option"),
        ],
        cta: "Contact Sales",
        featured: false,
        class: "enterprise",
    },
];

pub struct Testimonial {
    pub name: &'static str,
    pub role: &'static str,
    pub company: &'static str,
    pub text: &'static str,
    pub metric: &'static str,
    pub metric_label: &'static str,
    pub color: &'static str,
}

pub static TESTIMONIALS: [Testimonial; 3] = [
    Testimonial {
        name: "Sarah Chen",
        role: "Engineering Manager",
        company: "TechCorp",
        text: "Waitroom transformed how we manage dependencies. We've reduced blocked time by 70%!",
        metric: "70%",
        metric_label: "Less Blocked Time",
        color: "#10B981",
    },
    Testimonial {
        name: "Mike Johnson",
        role: "Product Owner",
        company: "StartupXYZ",
        text: "Finally, a tool that shows the real bottlenecks in our workflow. Game changer!",
        metric: "3x",
        metric_label: "Faster Delivery",
        color: "#6366F1",
    },
    Testimonial {
        name: "Lisa Park",
        role: "Scrum Master",
        company: "AgileCo",
        text: "The visibility Waitroom provides is incredible. Our sprints run so much smoother now.",
        metric: "90%",
        metric_label: "Sprint Success",
        color: "#EC4899",
    },
];

pub struct Perk {
    pub icon: &'static str,
    pub title: &'static str,
    pub subtitle: &'static str,
    pub color: &'static str,
}

pub const CTA_PERKS: [Perk; 3] = [
    Perk {
        icon: icons::CLOCK,
        title: "14-day free trial",
        subtitle: "Get started in minutes",
        color: "#6366F1",
    },
    Perk {
        icon: icons::CARD,
        title: "No credit card required",
        subtitle: "Start risk-free today",
        color: "#10B981",
    },
    Perk {
        icon: icons::CHECK,
        title: "Cancel anytime",
        subtitle: "No long-term commitments",
        color: "#EC4899",
    },
];

pub const CONTACT_PERKS: [&str; 3] = [
    "Free consultation call",
    "Custom demo for your team",
    "Implementation support",
];

pub const CONTACT_STATS: [Stat; 3] = [
    Stat { value: "2,847", label: "Teams using Waitroom" },
    Stat { value: "71%", label: "Faster delivery" },
    Stat { value: "< 2min", label: "Response time" },
];

pub const TEAM_SIZES: [&str; 4] = ["1-10 people", "11-50 people", "51-200 people", "200+ people"];

pub struct LinkGroup {
    pub title: &'static str,
    pub links: [(&'static str, &'static str); 4],
}

pub const FOOTER_LINKS: [LinkGroup; 4] = [
    LinkGroup {
        title: "Product",
        links: [
            ("Features", "#features"),
            ("Pricing", "#pricing"),
            ("Integrations", "#integrations"),
            ("Changelog", "#changelog"),
        ],
    },
    LinkGroup {
        title: "Company",
        links: [
            ("About", "#about"),
            ("Blog", "#blog"),
            ("Careers", "#careers"),
            ("Contact", "#contact"),
        ],
    },
    LinkGroup {
        title: "Support",
        links: [
            ("Help Center", "#help"),
            ("Documentation", "#docs"),
            ("Status", "#status"),
            ("Community", "#community"),
        ],
    },
    LinkGroup {
        title: "Legal",
        links: [
            ("Privacy Policy", "#privacy"),
            ("Terms of Service", "#terms"),
            ("Security", "#security"),
            ("Cookies", "#cookies"),
        ],
    },
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_section_ids_are_distinct_anchors() {
        let ids: Vec<&str> = Section::NAV.iter().map(Section::id).collect();
        assert_eq!(ids, vec!["features", "how-it-works", "pricing", "contact"]);
    }

    #[test]
    fn test_how_it_works_lookup_falls_back_to_first() {
        assert_eq!(how_it_works_step(2).title, "Automatic Detection");
        assert_eq!(how_it_works_step(3).title, "Instant Insights");
        assert_eq!(how_it_works_step(0).title, "Connect Your Tools");
        assert_eq!(how_it_works_step(42).id, 1);
    }

    #[test]
    fn test_exactly_one_featured_tier() {
        let featured: Vec<&str> = PRICING.iter().filter(|t| t.featured).map(|t| t.name).collect();
        assert_eq!(featured, vec!["Professional"]);
        assert_eq!(PRICING[2].monthly_usd, None);
    }
}
