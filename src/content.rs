//! Every piece of marketing copy on the landing page, kept as data so the
//! page component only describes layout and behavior.

pub struct NavLink {
    pub label: &'static str,
    pub href: &'static str,
}

pub const NAV_LINKS: &[NavLink] = &[
    NavLink {
        label: "Features",
        href: "#features",
    },
    NavLink {
        label: "AI Superpowers",
        href: "#ai",
    },
    NavLink {
        label: "Who It's For",
        href: "#who",
    },
    NavLink {
        label: "Pricing",
        href: "#pricing",
    },
];

pub struct Stat {
    pub value: &'static str,
    pub label: &'static str,
}

pub const HERO_STATS: &[Stat] = &[
    Stat {
        value: "85%",
        label: "Time Saved",
    },
    Stat {
        value: "1.2k+",
        label: "Active Users",
    },
    Stat {
        value: "92%",
        label: "Satisfaction",
    },
];

/// Line items shown in the hero mockup's AI summary card.
pub const SUMMARY_LINES: &[(&str, &str)] = &[
    ("Demolition", "$4,250"),
    ("Electrical", "$6,800"),
    ("Plumbing", "$5,400"),
    ("Flooring", "$8,000"),
    ("Finishes", "$4,000"),
];

pub struct MockBid {
    pub label: &'static str,
    pub total: &'static str,
    pub timeline: &'static str,
    pub stars: u8,
    pub badge: &'static str,
    pub accent: &'static str,
}

pub const MOCK_BIDS: &[MockBid] = &[
    MockBid {
        label: "Bid #1",
        total: "$28,450",
        timeline: "4-6 weeks",
        stars: 4,
        badge: "Recommended",
        accent: "green",
    },
    MockBid {
        label: "Bid #2",
        total: "$32,100",
        timeline: "3-4 weeks",
        stars: 3,
        badge: "Faster Timeline",
        accent: "yellow",
    },
];

pub const PROBLEMS: &[&str] = &[
    "Manual quote entry in multiple systems, wasting hours on data entry",
    "Endless spreadsheets with complex formulas that only one person understands",
    "Scattered notes and lost information leading to costly errors",
];

pub const SOLUTIONS: &[&str] = &[
    "One unified workspace for all quotes and bids with automated capture",
    "AI-powered comparisons and summaries that highlight what matters",
    "Smart organization with browser extension that works where you do",
];

pub struct FeatureTab {
    pub label: &'static str,
    pub title: &'static str,
    pub blurb: &'static str,
    pub checks: [&'static str; 2],
}

pub const FEATURE_TABS: &[FeatureTab] = &[
    FeatureTab {
        label: "Quote Capture",
        title: "Instant Quote Capture",
        blurb: "Capture quotes from any source - PDF files, emails, websites, or even photos of paper documents. Our AI automatically extracts key details.",
        checks: ["Supports PDF, DOCX, XLSX, JPG", "Extracts line items"],
    },
    FeatureTab {
        label: "Bid Analysis",
        title: "Smart Bid Comparison",
        blurb: "AI-powered analysis automatically compares bids, highlights differences, and helps you identify the best option based on multiple factors.",
        checks: ["Side-by-side comparisons", "Highlights discrepancies"],
    },
    FeatureTab {
        label: "Team Collaboration",
        title: "Team Collaboration",
        blurb: "Share projects with team members, assign roles, track changes, and collaborate in real-time with notifications and shared annotations.",
        checks: ["Real-time updates", "Role-based permissions"],
    },
    FeatureTab {
        label: "Project Dashboard",
        title: "Project Dashboard",
        blurb: "Get a bird's-eye view of all your projects, track bid status, monitor budgets, and see team activity all from one centralized dashboard.",
        checks: ["Project status tracking", "Budget visualization"],
    },
];

pub struct FeatureCard {
    pub icon: &'static str,
    pub title: &'static str,
    pub blurb: &'static str,
}

pub const FEATURE_CARDS: &[FeatureCard] = &[
    FeatureCard {
        icon: "fas fa-upload",
        title: "Quote Upload",
        blurb: "Upload quotes directly from any webpage using our browser extension.",
    },
    FeatureCard {
        icon: "fas fa-wand-magic-sparkles",
        title: "Smart Bid Comparison",
        blurb: "AI automatically compares bids and highlights key differences.",
    },
    FeatureCard {
        icon: "fas fa-building",
        title: "Company Dashboard",
        blurb: "Centralized workspace for teams to manage all projects.",
    },
    FeatureCard {
        icon: "fas fa-users",
        title: "Team Collaboration",
        blurb: "Share projects, notes, and quotes with team members in real-time.",
    },
    FeatureCard {
        icon: "fas fa-credit-card",
        title: "Payment Tracking",
        blurb: "Monitor payments, installments, and contractor billing.",
    },
    FeatureCard {
        icon: "fas fa-shield-halved",
        title: "Admin Controls",
        blurb: "Manage user roles, permissions, and account settings.",
    },
];

pub struct AiPower {
    pub title: &'static str,
    pub blurb: &'static str,
}

pub const AI_POWERS: &[AiPower] = &[
    AiPower {
        title: "Quote Summarization",
        blurb: "AI instantly extracts key details from any PDF, image, or webpage quote, saving hours of manual data entry.",
    },
    AiPower {
        title: "Bid Comparison",
        blurb: "Highlight differences between multiple bids to spot inconsistencies, scope gaps, and potential risks.",
    },
    AiPower {
        title: "Document Generation",
        blurb: "Turn quick notes into formal proposals, reports, and contracts with proper formatting and terminology.",
    },
    AiPower {
        title: "Smart Suggestions",
        blurb: "Get intelligent insights on pricing, timeline, and material recommendations based on historical data.",
    },
];

pub const AI_INSIGHTS: &[&str] = &[
    "Bid #1 includes premium materials ($8k more than standard grade)",
    "Bid #2 has shorter timeline but 20% higher labor costs",
    "Both bids missing permit fees (~$1,200 based on local regulations)",
    "Recommendation: Request itemized breakdown of material costs",
];

pub struct FaqEntry {
    pub question: &'static str,
    pub answer: &'static str,
}

pub const FAQS: &[FaqEntry] = &[
    FaqEntry {
        question: "How does Esteammate compare estimates from different contractors?",
        answer: "Esteammate uses AI to analyze line items across multiple bids, identifying price differences, material quality variations, and scope discrepancies. The system highlights these differences and provides insights on market rates, helping you make informed decisions.",
    },
    FaqEntry {
        question: "How accurate is the AI in understanding construction terminology?",
        answer: "Our AI model is specifically trained on construction and real estate documentation, with over 10 million bid documents in its training data. It accurately recognizes industry-specific terminology, regional pricing variations, and common scoping patterns.",
    },
    FaqEntry {
        question: "Is there a limit to how many quotes I can upload and compare?",
        answer: "Free accounts can compare up to 3 quotes per project. Premium plans allow unlimited quote comparisons and storage, plus additional features like historical bid analysis and custom reporting.",
    },
];

pub struct Persona {
    pub title: &'static str,
    pub icon: &'static str,
    pub blurb: &'static str,
}

pub const PERSONAS: &[Persona] = &[
    Persona {
        title: "Estimators",
        icon: "fas fa-calculator",
        blurb: "Streamline quote creation and comparison process, saving hours on each project.",
    },
    Persona {
        title: "General Contractors",
        icon: "fas fa-helmet-safety",
        blurb: "Manage subcontractor bids and project budgets with greater accuracy and oversight.",
    },
    Persona {
        title: "Renovation Firms",
        icon: "fas fa-house-chimney",
        blurb: "Track project quotes and contractor performance across multiple simultaneous projects.",
    },
    Persona {
        title: "Bidding Companies",
        icon: "fas fa-file-signature",
        blurb: "Create professional bids and track client responses with automated follow-ups.",
    },
];

pub struct Plan {
    pub name: &'static str,
    pub audience: &'static str,
    pub price: &'static str,
    pub features: &'static [&'static str],
    pub cta: &'static str,
    pub popular: bool,
}

pub const PLANS: &[Plan] = &[
    Plan {
        name: "Basic",
        audience: "For solo estimators",
        price: "$19",
        features: &[
            "Up to 10 projects",
            "3 quotes per project",
            "Basic AI features",
            "Browser extension",
        ],
        cta: "Get Started",
        popular: false,
    },
    Plan {
        name: "Pro",
        audience: "For small teams",
        price: "$49",
        features: &[
            "Unlimited projects",
            "10 quotes per project",
            "Advanced AI analysis",
            "Team collaboration (up to 5)",
        ],
        cta: "Get Started",
        popular: true,
    },
    Plan {
        name: "Enterprise",
        audience: "For large organizations",
        price: "$99",
        features: &[
            "Everything in Pro, plus:",
            "Unlimited team members",
            "SSO & advanced security",
            "Custom integrations",
        ],
        cta: "Contact Sales",
        popular: false,
    },
];

pub struct FooterColumn {
    pub heading: &'static str,
    pub links: &'static [NavLink],
}

pub const FOOTER_COLUMNS: &[FooterColumn] = &[
    FooterColumn {
        heading: "Product",
        links: &[
            NavLink {
                label: "Features",
                href: "#features",
            },
            NavLink {
                label: "AI Capabilities",
                href: "#ai",
            },
            NavLink {
                label: "Pricing",
                href: "#pricing",
            },
            NavLink {
                label: "FAQ",
                href: "#faq",
            },
        ],
    },
    FooterColumn {
        heading: "Company",
        links: &[
            NavLink {
                label: "About",
                href: "#",
            },
            NavLink {
                label: "Blog",
                href: "#",
            },
            NavLink {
                label: "Careers",
                href: "#",
            },
            NavLink {
                label: "Press",
                href: "#",
            },
        ],
    },
    FooterColumn {
        heading: "Resources",
        links: &[
            NavLink {
                label: "Documentation",
                href: "#",
            },
            NavLink {
                label: "Guides",
                href: "#",
            },
            NavLink {
                label: "API",
                href: "#",
            },
            NavLink {
                label: "Support",
                href: "#",
            },
        ],
    },
    FooterColumn {
        heading: "Legal",
        links: &[
            NavLink {
                label: "Privacy",
                href: "#",
            },
            NavLink {
                label: "Terms",
                href: "#",
            },
            NavLink {
                label: "Cookie Policy",
                href: "#",
            },
            NavLink {
                label: "Contact",
                href: "#",
            },
        ],
    },
];

pub struct SocialLink {
    pub name: &'static str,
    pub icon: &'static str,
}

pub const SOCIAL_LINKS: &[SocialLink] = &[
    SocialLink {
        name: "LinkedIn",
        icon: "fab fa-linkedin",
    },
    SocialLink {
        name: "Twitter",
        icon: "fab fa-x-twitter",
    },
    SocialLink {
        name: "GitHub",
        icon: "fab fa-github",
    },
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn exactly_one_popular_plan() {
        assert_eq!(PLANS.iter().filter(|p| p.popular).count(), 1);
        assert_eq!(PLANS.len(), 3);
    }

    #[test]
    fn feature_tabs_cover_four_topics() {
        assert_eq!(FEATURE_TABS.len(), 4);
        for tab in FEATURE_TABS {
            assert!(!tab.label.is_empty());
            assert!(!tab.blurb.is_empty());
        }
    }

    #[test]
    fn faqs_have_answers() {
        assert_eq!(FAQS.len(), 3);
        for faq in FAQS {
            assert!(!faq.question.is_empty());
            assert!(!faq.answer.is_empty());
        }
    }

    #[test]
    fn mock_bids_stay_in_star_range() {
        for bid in MOCK_BIDS {
            assert!(bid.stars <= 5);
        }
    }
}
