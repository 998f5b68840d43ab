//! Static copy for the landing page.

use super::faq::{Faq, FaqEntry};
use super::portfolio::{Portfolio, PortfolioItem};

pub const BRAND: &str = "PixelPerfect Graphix";
pub const TAGLINE: &str = "Premium design templates and custom graphics for growing brands";

/// Page sections in display order: (anchor id, nav label)
pub const SECTIONS: [(&str, &str); 6] = [
    ("home", "Home"),
    ("services", "Services"),
    ("portfolio", "Portfolio"),
    ("pricing", "Pricing"),
    ("faq", "FAQ"),
    ("contact", "Contact"),
];

pub const HERO_BUTTONS: [&str; 2] = ["Get Started", "View Portfolio"];

/// Headline statistics: (label, value the counter animates to)
pub const STATS: [(&str, u64); 3] = [
    ("Happy clients", 500),
    ("Templates", 1200),
    ("Projects delivered", 850),
];

pub struct Service {
    pub title: &'static str,
    pub blurb: &'static str,
    /// Label of the card's button
    pub button: &'static str,
}

pub const SERVICES: [Service; 3] = [
    Service {
        title: "Template Subscriptions",
        blurb: "Hundreds of ready-made social, print and brand templates.",
        button: "Learn More",
    },
    Service {
        title: "Brand Identity",
        blurb: "Logos, palettes and guidelines crafted for your business.",
        button: "Get Custom Design",
    },
    Service {
        title: "Print & Packaging",
        blurb: "Cards, flyers and packaging that look sharp on paper.",
        button: "Get Custom Quote",
    },
];

pub const PORTFOLIO_CATEGORIES: [&str; 3] = ["branding", "print", "digital"];

const PORTFOLIO_ITEMS: [(&str, &str); 6] = [
    ("Chai Corner logo", "branding"),
    ("Festive greeting cards", "print"),
    ("Fitness studio identity", "branding"),
    ("Bakery menu board", "print"),
    ("Instagram launch kit", "digital"),
    ("Webinar banner set", "digital"),
];

const FAQ_ENTRIES: [(&str, &str, &str); 4] = [
    (
        "faq-formats",
        "Which file formats do I get?",
        "Every template ships as editable PSD, AI and Canva files plus print-ready PDF.",
    ),
    (
        "faq-cancel",
        "Can I cancel anytime?",
        "Yes. Plans renew until cancelled and you keep everything already downloaded.",
    ),
    (
        "faq-commercial",
        "Can I use templates for client work?",
        "Quarterly and annual plans include a commercial license for client projects.",
    ),
    (
        "faq-custom",
        "Do you take custom design requests?",
        "Absolutely. Use the contact form and we'll send a quote within 24 hours.",
    ),
];

pub const PROCESS_STEPS: [&str; 4] = ["Discover", "Design", "Refine", "Deliver"];

pub const TESTIMONIALS: [(&str, &str); 2] = [
    ("Priya S.", "Our brand finally looks as good as our coffee."),
    ("Rahul M.", "Templates saved our small team hours every week."),
];

pub fn portfolio() -> Portfolio {
    Portfolio::new(
        PORTFOLIO_CATEGORIES,
        PORTFOLIO_ITEMS
            .iter()
            .map(|(title, category)| PortfolioItem::new(*title, *category))
            .collect(),
    )
}

pub fn faq() -> Faq {
    Faq::new(
        FAQ_ENTRIES
            .iter()
            .map(|(id, question, answer)| FaqEntry {
                id: (*id).to_string(),
                question: (*question).to_string(),
                answer: (*answer).to_string(),
            })
            .collect(),
    )
}
