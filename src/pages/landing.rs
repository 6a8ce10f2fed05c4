use gloo_timers::callback::Timeout;
use web_sys::{MouseEvent, ScrollBehavior, ScrollToOptions};
use yew::prelude::*;

use crate::components::reveal::{Animation, Reveal};
use crate::components::scroll::{
    float_offset, navbar_height, parallax, scroll_top_visible, use_scroll_offset,
};
use crate::content::{
    AI_INSIGHTS, AI_POWERS, FAQS, FEATURE_CARDS, FEATURE_TABS, FOOTER_COLUMNS, HERO_STATS,
    MOCK_BIDS, NAV_LINKS, PERSONAS, PLANS, PROBLEMS, SOCIAL_LINKS, SOLUTIONS, SUMMARY_LINES,
};
use crate::theme::use_theme;

#[derive(Properties, PartialEq)]
struct FaqItemProps {
    index: usize,
    question: &'static str,
    answer: &'static str,
    open: bool,
    on_toggle: Callback<usize>,
}

#[function_component(FaqItem)]
fn faq_item(props: &FaqItemProps) -> Html {
    let toggle = {
        let on_toggle = props.on_toggle.clone();
        let index = props.index;
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            on_toggle.emit(index);
        })
    };
    html! {
        <div id={format!("faq-{}", props.index)} class={classes!("faq-item", props.open.then_some("open"))}>
            <button class="faq-question" onclick={toggle}>
                <span>{ props.question }</span>
                <i class="fas fa-chevron-down faq-chevron"></i>
            </button>
            <div class="faq-answer">
                <p>{ props.answer }</p>
            </div>
        </div>
    }
}

#[function_component(Landing)]
pub fn landing() -> Html {
    let theme = use_theme();
    let scroll_y = use_scroll_offset();
    let menu_open = use_state(|| false);
    let active_tab = use_state(|| 0usize);
    let show_tooltip = use_state(|| false);
    let active_faq = use_state(|| None::<usize>);

    // Scroll to top only on initial mount
    {
        use_effect_with_deps(
            move |_| {
                if let Some(window) = web_sys::window() {
                    window.scroll_to_with_x_and_y(0.0, 0.0);
                }
                || ()
            },
            (),
        );
    }

    // Open and scroll to a question when the page is entered via #faq-N
    {
        let active_faq = active_faq.clone();
        use_effect_with_deps(
            move |_| {
                if let Some(window) = web_sys::window() {
                    if let Ok(hash) = window.location().hash() {
                        if let Some(index) = hash
                            .strip_prefix("#faq-")
                            .and_then(|n| n.parse::<usize>().ok())
                            .filter(|&i| i < FAQS.len())
                        {
                            active_faq.set(Some(index));
                            // Let the accordion expand before scrolling to it
                            let timeout = Timeout::new(100, move || {
                                if let Some(element) = web_sys::window()
                                    .and_then(|w| w.document())
                                    .and_then(|doc| doc.get_element_by_id(&format!("faq-{}", index)))
                                {
                                    element.scroll_into_view_with_bool(true);
                                }
                            });
                            timeout.forget();
                        }
                    }
                }
                || ()
            },
            (),
        );
    }

    let toggle_menu = {
        let menu_open = menu_open.clone();
        Callback::from(move |_: MouseEvent| menu_open.set(!*menu_open))
    };
    let toggle_dark = {
        let toggle = theme.toggle.clone();
        Callback::from(move |_: MouseEvent| toggle.emit(()))
    };
    let tooltip_on = {
        let show_tooltip = show_tooltip.clone();
        Callback::from(move |_: MouseEvent| show_tooltip.set(true))
    };
    let tooltip_off = {
        let show_tooltip = show_tooltip.clone();
        Callback::from(move |_: MouseEvent| show_tooltip.set(false))
    };
    let select_tab = {
        let active_tab = active_tab.clone();
        Callback::from(move |index: usize| active_tab.set(index))
    };
    let toggle_faq = {
        let active_faq = active_faq.clone();
        Callback::from(move |index: usize| {
            active_faq.set(if *active_faq == Some(index) {
                None
            } else {
                Some(index)
            });
        })
    };
    let scroll_to_top = Callback::from(|e: MouseEvent| {
        e.prevent_default();
        if let Some(window) = web_sys::window() {
            let options = ScrollToOptions::new();
            options.set_top(0.0);
            options.set_behavior(ScrollBehavior::Smooth);
            window.scroll_to_with_scroll_to_options(&options);
        }
    });

    let tab = &FEATURE_TABS[*active_tab];
    let float_style = format!(
        "transform: translateY({:.2}px); transition: transform 0.3s ease-out;",
        float_offset(scroll_y)
    );

    html! {
        <div class={classes!("landing", theme.dark.then_some("dark"))}>
            <style>{ LANDING_CSS }</style>

            // Background gradient blobs drifting against the scroll direction
            <div class="bg-blobs">
                <div
                    class="blob blob-pink"
                    style={format!("transform: rotate(-12deg) translateY({:.2}px);", parallax(scroll_y, 0.05))}
                ></div>
                <div
                    class="blob blob-blue"
                    style={format!("transform: translateY({:.2}px);", parallax(scroll_y, -0.03))}
                ></div>
            </div>

            <nav class="navbar" style={format!("height: {}px;", navbar_height(scroll_y))}>
                <div class="navbar-inner">
                    <a href="#" class="logo">{"Esteammate"}</a>
                    <button class="menu-button" onclick={toggle_menu.clone()}>
                        <i class={if *menu_open { "fas fa-xmark" } else { "fas fa-bars" }}></i>
                    </button>
                    <div class="nav-links">
                        { for NAV_LINKS.iter().map(|link| html! {
                            <a href={link.href} class="nav-link">{ link.label }</a>
                        }) }
                        <button class="icon-button" onclick={toggle_dark.clone()}>
                            <i class={if theme.dark { "fas fa-sun" } else { "fas fa-moon" }}></i>
                        </button>
                        <a href="#" class="cta-button small">{"Get Early Access"}</a>
                    </div>
                </div>
                if *menu_open {
                    <div class="mobile-menu">
                        { for NAV_LINKS.iter().map(|link| html! {
                            <a href={link.href} class="mobile-link" onclick={toggle_menu.clone()}>{ link.label }</a>
                        }) }
                        <div class="mobile-menu-footer">
                            <span>{"Toggle dark mode"}</span>
                            <button class="icon-button" onclick={toggle_dark.clone()}>
                                <i class={if theme.dark { "fas fa-sun" } else { "fas fa-moon" }}></i>
                            </button>
                        </div>
                    </div>
                }
            </nav>

            <header class="hero">
                <Reveal animation={Animation::SlideFromRight} class="hero-copy">
                    <h1>
                        <span class="gradient-text">{"Smarter Bids. Faster Quotes."}</span>
                        <span class="hero-sub-line">{"Powered by "}<span class="ai-highlight">{"AI"}</span></span>
                    </h1>
                    <p class="hero-lede">
                        {"Manage quotes, compare bids, and automate estimating tasks with one powerful tool."}
                    </p>
                    <div class="hero-actions">
                        <a href="#" class="cta-button">
                            {"Get Early Access"}
                            <i class="fas fa-arrow-up-right-from-square"></i>
                        </a>
                    </div>
                    <div class="hero-stats">
                        { for HERO_STATS.iter().map(|stat| html! {
                            <div class="stat">
                                <div class="stat-value gradient-text">{ stat.value }</div>
                                <div class="stat-label">{ stat.label }</div>
                            </div>
                        }) }
                    </div>
                </Reveal>

                <Reveal animation={Animation::SlideFromLeft} delay_ms={300} class="hero-mockup-slot">
                    <div class="mockup" style={float_style}>
                        <div class="mockup-chrome">
                            <span class="dot red"></span>
                            <span class="dot yellow"></span>
                            <span class="dot green"></span>
                        </div>
                        <div class="mockup-body">
                            <div class="upload-row">
                                <div
                                    class="upload-icon"
                                    onmouseenter={tooltip_on}
                                    onmouseleave={tooltip_off}
                                >
                                    <i class="fas fa-upload"></i>
                                    if *show_tooltip {
                                        <div class="tooltip">
                                            {"Click to upload any quote format - PDF, images, or text"}
                                        </div>
                                    }
                                </div>
                                <div>
                                    <div class="upload-title">{"Quote Uploaded"}</div>
                                    <div class="upload-meta">{"Project: Downtown Renovation"}</div>
                                </div>
                                <div class="upload-time">
                                    <i class="fas fa-clock"></i>{" Just now"}
                                </div>
                            </div>
                            <div class="summary-card">
                                <div class="summary-heading">
                                    <i class="fas fa-wand-magic-sparkles pulse"></i>{" AI Summary"}
                                </div>
                                <p>{"Total cost: "}<strong>{"$28,450"}</strong>{". Includes:"}</p>
                                <ul class="summary-lines">
                                    { for SUMMARY_LINES.iter().map(|(item, cost)| html! {
                                        <li><span>{ *item }</span><strong>{ *cost }</strong></li>
                                    }) }
                                </ul>
                                <div class="summary-footer">
                                    <span><i class="fas fa-clock"></i>{" Timeline: 4-6 weeks"}</span>
                                    <span class="link-text">{"View full details"}</span>
                                </div>
                            </div>
                            <div class="bid-row">
                                { for MOCK_BIDS.iter().map(|bid| html! {
                                    <div class={classes!("bid-card", bid.accent)}>
                                        <div class="bid-head">
                                            <span class="bid-label">{ bid.label }</span>
                                            <span class="bid-stars">
                                                { for (0..5u8).map(|i| html! {
                                                    <i class={classes!("fas", "fa-star", (i >= bid.stars).then_some("dim"))}></i>
                                                }) }
                                            </span>
                                        </div>
                                        <div class="bid-total">{ bid.total }</div>
                                        <div class="bid-timeline"><i class="fas fa-clock"></i>{" "}{ bid.timeline }</div>
                                        <span class="bid-badge">{ bid.badge }</span>
                                    </div>
                                }) }
                            </div>
                            <button class="cta-button full">
                                {"Compare Details"}<i class="fas fa-chevron-right"></i>
                            </button>
                        </div>
                        <div class="typing-cursor"></div>
                    </div>
                </Reveal>
            </header>

            <section class="trust-strip">
                <Reveal animation={Animation::Fade} delay_ms={200}>
                    <p class="trust-label">{"TRUSTED BY INDUSTRY LEADERS"}</p>
                    <div class="trust-logos">
                        { for (0..5).map(|_| html! { <div class="logo-placeholder"></div> }) }
                    </div>
                </Reveal>
            </section>

            <section class="problem-solution">
                <Reveal animation={Animation::ScaleUp} class="section-center">
                    <h2>{"Estimating shouldn't feel like firefighting."}</h2>
                    <div class="ps-grid">
                        <Reveal animation={Animation::SlideFromRight} delay_ms={200} class="ps-card">
                            <h3><span class="ps-icon bad"><i class="fas fa-xmark"></i></span>{"The Problem"}</h3>
                            <ul>
                                { for PROBLEMS.iter().map(|line| html! {
                                    <li><i class="fas fa-xmark bad-mark"></i><span>{ *line }</span></li>
                                }) }
                            </ul>
                        </Reveal>
                        <Reveal animation={Animation::SlideFromLeft} delay_ms={200} class="ps-card">
                            <h3><span class="ps-icon good"><i class="fas fa-check"></i></span>{"The Solution"}</h3>
                            <ul>
                                { for SOLUTIONS.iter().map(|line| html! {
                                    <li><i class="fas fa-check good-mark"></i><span>{ *line }</span></li>
                                }) }
                            </ul>
                        </Reveal>
                    </div>
                </Reveal>
            </section>

            <section id="features" class="features">
                <Reveal animation={Animation::Fade} class="section-center">
                    <h2 class="underlined">{"Key Features"}</h2>
                    <p class="section-lede">{"Everything you need to streamline your estimation workflow."}</p>
                </Reveal>
                <div class="tab-layout">
                    <Reveal animation={Animation::SlideFromRight} delay_ms={100} class="tab-list">
                        { for FEATURE_TABS.iter().enumerate().map(|(index, entry)| {
                            let select_tab = select_tab.clone();
                            let onclick = Callback::from(move |_: MouseEvent| select_tab.emit(index));
                            html! {
                                <div
                                    class={classes!("tab", (index == *active_tab).then_some("active"))}
                                    {onclick}
                                >
                                    <span>{ entry.label }</span>
                                    if index == *active_tab {
                                        <i class="fas fa-chevron-right"></i>
                                    }
                                </div>
                            }
                        }) }
                    </Reveal>
                    <Reveal animation={Animation::SlideFromLeft} delay_ms={200} class="tab-panel">
                        <div class="tab-content" key={tab.label}>
                            <h3>{ tab.title }</h3>
                            <p>{ tab.blurb }</p>
                            <div class="tab-preview"></div>
                            <div class="tab-checks">
                                { for tab.checks.iter().map(|check| html! {
                                    <span><i class="fas fa-check good-mark"></i>{ *check }</span>
                                }) }
                            </div>
                        </div>
                    </Reveal>
                </div>
                <div class="card-grid">
                    { for FEATURE_CARDS.iter().enumerate().map(|(index, card)| {
                        let animation = if index % 2 == 0 { Animation::Fade } else { Animation::ScaleUp };
                        html! {
                            <Reveal {animation} delay_ms={100 * index as u32} class="feature-card">
                                <div class="feature-icon"><i class={card.icon}></i></div>
                                <h3>{ card.title }</h3>
                                <p>{ card.blurb }</p>
                                <a href="#" class="learn-more">{"Learn more "}<i class="fas fa-arrow-right"></i></a>
                            </Reveal>
                        }
                    }) }
                </div>
            </section>

            <section id="ai" class="ai-section">
                <Reveal animation={Animation::Fade} class="ai-layout">
                    <div class="ai-copy">
                        <h2>
                            <span class="ai-badge"><i class="fas fa-wand-magic-sparkles"></i></span>
                            {"AI Superpowers"}
                        </h2>
                        <div class="ai-powers">
                            { for AI_POWERS.iter().enumerate().map(|(index, power)| html! {
                                <Reveal animation={Animation::SlideFromRight} delay_ms={100 * (index as u32 + 1)} class="ai-power">
                                    <h3><i class="fas fa-wand-magic-sparkles"></i>{ power.title }</h3>
                                    <p>{ power.blurb }</p>
                                </Reveal>
                            }) }
                        </div>
                    </div>
                    <Reveal animation={Animation::SlideFromLeft} delay_ms={200} class="ai-mock-slot">
                        <div class="ai-mock">
                            <div class="glow glow-blue"></div>
                            <div class="glow glow-pink"></div>
                            <div class="insight-card">
                                <div class="summary-heading">
                                    <i class="fas fa-wand-magic-sparkles pulse"></i>{" AI Insights"}
                                </div>
                                { for AI_INSIGHTS.iter().map(|line| html! { <p>{ *line }</p> }) }
                            </div>
                            <div class="insight-footer">
                                <span class="link-text">
                                    <i class="fas fa-wand-magic-sparkles"></i>{" Generate Detailed Report"}
                                </span>
                                <i class="fas fa-arrow-right"></i>
                            </div>
                            <div class="typing-cursor"></div>
                        </div>
                    </Reveal>
                </Reveal>
            </section>

            <section id="faq" class="faq-section">
                <Reveal animation={Animation::Fade} class="section-center">
                    <h2>{"Frequently Asked Questions"}</h2>
                    <p class="section-lede">{"Everything you need to know about Esteammate"}</p>
                </Reveal>
                <div class="faq-list">
                    { for FAQS.iter().enumerate().map(|(index, faq)| html! {
                        <Reveal animation={Animation::Fade} delay_ms={100 * index as u32}>
                            <FaqItem
                                {index}
                                question={faq.question}
                                answer={faq.answer}
                                open={*active_faq == Some(index)}
                                on_toggle={toggle_faq.clone()}
                            />
                        </Reveal>
                    }) }
                </div>
            </section>

            <section id="who" class="personas">
                <Reveal animation={Animation::Fade} class="section-center">
                    <h2>{"Who It's For"}</h2>
                    <p class="section-lede">{"Tailored for construction and real estate professionals."}</p>
                </Reveal>
                <div class="persona-grid">
                    { for PERSONAS.iter().enumerate().map(|(index, persona)| html! {
                        <Reveal animation={Animation::ScaleUp} delay_ms={100 * index as u32} class="persona-card">
                            <div class="persona-icon"><i class={persona.icon}></i></div>
                            <h3>{ persona.title }</h3>
                            <p>{ persona.blurb }</p>
                            <a href="#" class="learn-more">{"Learn more "}<i class="fas fa-arrow-right"></i></a>
                        </Reveal>
                    }) }
                </div>
            </section>

            <section id="pricing" class="pricing">
                <Reveal animation={Animation::Fade} class="section-center">
                    <h2>{"Simple plans for individuals and teams"}</h2>
                    <p class="section-lede">{"Choose the plan that works best for your estimation needs."}</p>
                    <div class="plan-grid">
                        { for PLANS.iter().enumerate().map(|(index, plan)| {
                            let animation = match index {
                                0 => Animation::SlideFromRight,
                                1 => Animation::ScaleUp,
                                _ => Animation::SlideFromLeft,
                            };
                            html! {
                                <Reveal {animation} delay_ms={100} class={classes!("plan-card", plan.popular.then_some("popular"))}>
                                    if plan.popular {
                                        <span class="popular-badge">{"POPULAR"}</span>
                                    }
                                    <h3>{ plan.name }</h3>
                                    <p class="plan-audience">{ plan.audience }</p>
                                    <div class="plan-price">
                                        <span class="amount">{ plan.price }</span>
                                        <span class="period">{"/month"}</span>
                                    </div>
                                    <ul>
                                        { for plan.features.iter().map(|feature| html! {
                                            <li><i class="fas fa-check good-mark"></i><span>{ *feature }</span></li>
                                        }) }
                                    </ul>
                                    <a href="#" class={if plan.popular { "cta-button full" } else { "outline-button full" }}>
                                        { plan.cta }
                                    </a>
                                </Reveal>
                            }
                        }) }
                    </div>
                    <p class="plan-footnote">{"All plans include a 14-day free trial. No credit card required."}</p>
                </Reveal>
            </section>

            <section class="cta-section">
                <Reveal animation={Animation::ScaleUp} class="cta-panel">
                    <h2>{"Ready to streamline your estimating process?"}</h2>
                    <p class="section-lede">
                        {"Join thousands of professionals who are saving time and improving accuracy with Esteammate."}
                    </p>
                    <div class="cta-actions">
                        <a href="#" class="cta-button">
                            {"Get Early Access"}<i class="fas fa-arrow-up-right-from-square"></i>
                        </a>
                        <a href="#" class="outline-button">
                            <i class="fas fa-play"></i>{" Watch Demo"}
                        </a>
                    </div>
                </Reveal>
            </section>

            <footer class="footer">
                <div class="footer-main">
                    <div class="footer-brand">
                        <span class="logo">{"Esteammate"}</span>
                        <p>
                            {"Smarter Bids. Faster Quotes. Powered by AI. Simplifying the estimating process for construction professionals."}
                        </p>
                        <span class="powered-by">{"Powered by OpenAI"}</span>
                        <div class="socials">
                            { for SOCIAL_LINKS.iter().map(|social| html! {
                                <a href="#" title={social.name}><i class={social.icon}></i></a>
                            }) }
                        </div>
                    </div>
                    <div class="footer-columns">
                        { for FOOTER_COLUMNS.iter().map(|column| html! {
                            <div class="footer-column">
                                <h3>{ column.heading }</h3>
                                <ul>
                                    { for column.links.iter().map(|link| html! {
                                        <li><a href={link.href}>{ link.label }</a></li>
                                    }) }
                                </ul>
                            </div>
                        }) }
                    </div>
                </div>
                <div class="footer-bottom">
                    <p>{"© 2025 Esteammate. All rights reserved."}</p>
                    <div class="footer-bottom-actions">
                        <button class="icon-button" onclick={toggle_dark}>
                            <i class={if theme.dark { "fas fa-sun" } else { "fas fa-moon" }}></i>
                        </button>
                        <a href="#">{"Change region"}</a>
                    </div>
                </div>
            </footer>

            <div class="floating-cta">
                <a href="#">{"Get Early Access"}</a>
            </div>

            <button
                class={classes!("scroll-top", scroll_top_visible(scroll_y).then_some("visible"))}
                onclick={scroll_to_top}
            >
                <i class="fas fa-chevron-up"></i>
            </button>
        </div>
    }
}

const LANDING_CSS: &str = r#"
.landing {
    --bg: #f9fafb;
    --text: #1f2937;
    --muted: #6b7280;
    --surface: #ffffff;
    --surface-alt: #f3f4f6;
    --border: #e5e7eb;
    --pink: #db2777;
    --blue: #60a5fa;
    --gradient: linear-gradient(90deg, #db2777, #60a5fa);
    background: var(--bg);
    color: var(--text);
    font-family: 'Inter', 'Helvetica Neue', Arial, sans-serif;
    min-height: 100vh;
    overflow-x: hidden;
    position: relative;
}
.landing.dark {
    --bg: #111827;
    --text: #f9fafb;
    --muted: #9ca3af;
    --surface: #1f2937;
    --surface-alt: #374151;
    --border: #374151;
}

.bg-blobs {
    position: fixed;
    inset: 0;
    pointer-events: none;
    overflow: hidden;
    z-index: 0;
}
.blob {
    position: absolute;
    border-radius: 50%;
    filter: blur(120px);
}
.blob-pink {
    top: -30vh;
    right: -20vw;
    width: 70vw;
    height: 70vh;
    background: rgba(244, 114, 182, 0.2);
}
.blob-blue {
    bottom: -20vh;
    left: -20vw;
    width: 60vw;
    height: 60vh;
    background: rgba(96, 165, 250, 0.2);
}
.landing.dark .blob-pink { background: rgba(131, 24, 67, 0.2); }
.landing.dark .blob-blue { background: rgba(30, 58, 138, 0.2); }

.gradient-text {
    background: var(--gradient);
    -webkit-background-clip: text;
    background-clip: text;
    color: transparent;
    display: block;
}

.navbar {
    position: fixed;
    top: 0;
    left: 0;
    right: 0;
    z-index: 50;
    background: color-mix(in srgb, var(--surface) 80%, transparent);
    backdrop-filter: blur(12px);
    box-shadow: 0 1px 2px rgba(0, 0, 0, 0.05);
    transition: height 0.3s ease;
}
.navbar-inner {
    max-width: 80rem;
    margin: 0 auto;
    padding: 0 1.5rem;
    height: 100%;
    display: flex;
    align-items: center;
    justify-content: space-between;
}
.logo {
    font-size: 1.25rem;
    font-weight: 700;
    background: var(--gradient);
    -webkit-background-clip: text;
    background-clip: text;
    color: transparent;
    text-decoration: none;
}
.nav-links {
    display: flex;
    align-items: center;
    gap: 1.5rem;
}
.nav-link {
    font-size: 0.875rem;
    font-weight: 500;
    color: var(--muted);
    text-decoration: none;
    white-space: nowrap;
    transition: color 0.3s ease;
}
.nav-link:hover { color: var(--text); }
.menu-button {
    display: none;
    background: none;
    border: none;
    color: var(--text);
    font-size: 1.5rem;
    cursor: pointer;
}
.icon-button {
    padding: 0.5rem;
    border: none;
    border-radius: 9999px;
    background: var(--surface-alt);
    color: var(--text);
    cursor: pointer;
    transition: transform 0.3s ease;
}
.icon-button:hover { transform: scale(1.1); }
.mobile-menu {
    position: absolute;
    width: 100%;
    background: var(--surface);
    box-shadow: 0 10px 15px rgba(0, 0, 0, 0.1);
    padding: 0.5rem 1.25rem 1rem;
    animation: slideDown 0.3s ease-out forwards;
}
.mobile-link {
    display: block;
    padding: 0.75rem;
    border-radius: 0.375rem;
    color: var(--text);
    text-decoration: none;
    font-weight: 500;
}
.mobile-link:hover { background: var(--surface-alt); }
.mobile-menu-footer {
    display: flex;
    align-items: center;
    justify-content: space-between;
    margin-top: 1rem;
    padding-top: 1rem;
    border-top: 1px solid var(--border);
    color: var(--muted);
    font-size: 0.875rem;
}

.cta-button {
    display: inline-flex;
    align-items: center;
    justify-content: center;
    gap: 0.5rem;
    padding: 1rem 2rem;
    border: none;
    border-radius: 0.375rem;
    background: var(--gradient);
    color: #ffffff;
    font-weight: 500;
    text-decoration: none;
    cursor: pointer;
    box-shadow: 0 10px 15px rgba(0, 0, 0, 0.1);
    transition: transform 0.3s ease, box-shadow 0.3s ease;
}
.cta-button:hover {
    transform: translateY(-2px);
    box-shadow: 0 20px 25px rgba(0, 0, 0, 0.15);
}
.cta-button.small { padding: 0.5rem 1rem; font-size: 0.875rem; }
.cta-button.full { width: 100%; padding: 0.75rem; font-size: 0.875rem; }
.outline-button {
    display: inline-flex;
    align-items: center;
    justify-content: center;
    gap: 0.5rem;
    padding: 1rem 2rem;
    border: 2px solid var(--border);
    border-radius: 0.375rem;
    background: var(--surface);
    color: var(--text);
    font-weight: 500;
    text-decoration: none;
    cursor: pointer;
    transition: transform 0.3s ease, background 0.3s ease;
}
.outline-button:hover { transform: translateY(-2px); background: var(--surface-alt); }
.outline-button.full { width: 100%; padding: 0.75rem; font-size: 0.875rem; }

.hero {
    max-width: 80rem;
    margin: 0 auto;
    padding: 7rem 1.5rem 5rem;
    display: flex;
    flex-wrap: wrap;
    align-items: center;
    gap: 2rem;
    position: relative;
    z-index: 1;
}
.hero-copy { flex: 1 1 26rem; }
.hero-copy h1 {
    font-size: clamp(2.25rem, 5vw, 3.75rem);
    font-weight: 700;
    letter-spacing: -0.025em;
    line-height: 1.1;
}
.hero-sub-line { display: block; margin-top: 0.5rem; }
.ai-highlight {
    position: relative;
    padding: 0 0.25rem;
    border-radius: 0.25rem;
    background: linear-gradient(90deg, rgba(219, 39, 119, 0.2), rgba(96, 165, 250, 0.2));
    animation: pulse 2s ease-in-out infinite;
}
.hero-lede {
    margin-top: 1.5rem;
    font-size: 1.25rem;
    color: var(--muted);
}
.hero-actions { margin-top: 2.5rem; }
.hero-stats {
    margin-top: 3rem;
    display: grid;
    grid-template-columns: repeat(3, 1fr);
    gap: 1rem;
    text-align: center;
}
.stat-value { font-size: 1.5rem; font-weight: 700; }
.stat-label { font-size: 0.75rem; margin-top: 0.25rem; color: var(--muted); }

.hero-mockup-slot { flex: 1 1 26rem; display: flex; justify-content: flex-end; }
.mockup {
    position: relative;
    max-width: 32rem;
    width: 100%;
    padding: 1rem;
    border-radius: 0.75rem;
    background: var(--surface);
    box-shadow: 0 25px 50px rgba(0, 0, 0, 0.25);
    overflow: hidden;
}
.mockup-chrome { display: flex; gap: 0.25rem; margin-bottom: 0.75rem; }
.dot { width: 0.5rem; height: 0.5rem; border-radius: 50%; }
.dot.red { background: #ef4444; }
.dot.yellow { background: #eab308; }
.dot.green { background: #22c55e; }
.mockup-body {
    padding: 1rem;
    border-radius: 0.5rem;
    background: var(--surface-alt);
}
.upload-row {
    display: flex;
    align-items: center;
    margin-bottom: 1.5rem;
    position: relative;
}
.upload-icon {
    position: relative;
    padding: 0.75rem;
    margin-right: 1rem;
    border-radius: 0.375rem;
    background: var(--surface);
    color: var(--blue);
    box-shadow: 0 4px 6px rgba(0, 0, 0, 0.1);
    cursor: pointer;
}
.tooltip {
    position: absolute;
    top: -3rem;
    left: 0;
    width: 10rem;
    padding: 0.5rem;
    border-radius: 0.25rem;
    background: #3b82f6;
    color: #ffffff;
    font-size: 0.75rem;
    box-shadow: 0 10px 15px rgba(0, 0, 0, 0.1);
    z-index: 10;
    animation: fadeIn 0.3s ease-out forwards;
}
.upload-title { font-size: 0.875rem; font-weight: 500; }
.upload-meta { font-size: 0.75rem; color: var(--muted); }
.upload-time {
    margin-left: auto;
    font-size: 0.75rem;
    color: var(--muted);
}
.summary-card {
    padding: 1rem;
    margin-bottom: 1.5rem;
    border-radius: 0.375rem;
    background: var(--surface);
    font-size: 0.875rem;
    box-shadow: 0 4px 6px rgba(0, 0, 0, 0.1);
}
.summary-heading {
    display: flex;
    align-items: center;
    gap: 0.5rem;
    margin-bottom: 0.75rem;
    font-size: 0.875rem;
    font-weight: 500;
    color: #3b82f6;
}
.summary-lines { list-style: none; margin: 0.5rem 0 0; padding: 0; }
.summary-lines li {
    display: flex;
    justify-content: space-between;
    margin-bottom: 0.25rem;
    color: var(--muted);
}
.summary-footer {
    display: flex;
    justify-content: space-between;
    margin-top: 0.75rem;
    font-size: 0.75rem;
    color: var(--muted);
}
.link-text { color: #3b82f6; cursor: pointer; }
.link-text:hover { text-decoration: underline; }
.bid-row { display: flex; gap: 0.75rem; margin-bottom: 1.25rem; }
.bid-card {
    flex: 1;
    padding: 0.75rem;
    border-radius: 0.375rem;
    background: var(--surface);
    box-shadow: 0 4px 6px rgba(0, 0, 0, 0.1);
    cursor: pointer;
    transition: transform 0.3s ease, box-shadow 0.3s ease;
}
.bid-card:hover { transform: scale(1.05); box-shadow: 0 10px 15px rgba(0, 0, 0, 0.1); }
.bid-card.green { border-left: 2px solid #22c55e; }
.bid-card.yellow { border-left: 2px solid #eab308; }
.bid-head { display: flex; justify-content: space-between; }
.bid-label { font-size: 0.75rem; font-weight: 500; }
.bid-stars { font-size: 0.625rem; color: #22c55e; }
.bid-card.yellow .bid-stars { color: #eab308; }
.bid-stars .dim { color: #9ca3af; }
.bid-total { font-size: 1.125rem; font-weight: 700; }
.bid-timeline { font-size: 0.75rem; color: var(--muted); }
.bid-badge {
    display: inline-block;
    margin-top: 0.5rem;
    padding: 0.125rem 0.375rem;
    border-radius: 0.25rem;
    background: rgba(34, 197, 94, 0.15);
    color: #15803d;
    font-size: 0.75rem;
}
.bid-card.yellow .bid-badge { background: rgba(234, 179, 8, 0.15); color: #a16207; }
.typing-cursor {
    position: absolute;
    bottom: 1.5rem;
    right: 1.5rem;
    width: 2px;
    height: 1rem;
    background: #3b82f6;
    animation: pulse 1s ease-in-out infinite;
}

.trust-strip {
    position: relative;
    z-index: 1;
    padding: 2rem 1.5rem;
    background: color-mix(in srgb, var(--surface) 70%, transparent);
    backdrop-filter: blur(12px);
    text-align: center;
}
.trust-label {
    font-size: 0.875rem;
    font-weight: 500;
    color: var(--muted);
    margin-bottom: 1.5rem;
}
.trust-logos {
    display: flex;
    flex-wrap: wrap;
    justify-content: center;
    gap: 2rem;
}
.logo-placeholder {
    height: 2rem;
    width: 8rem;
    border-radius: 0.25rem;
    background: var(--border);
    opacity: 0.5;
    transition: opacity 0.3s ease;
}
.logo-placeholder:hover { opacity: 1; }

section { position: relative; z-index: 1; }
.section-center { text-align: center; }
.section-center h2, .features h2, .pricing h2 {
    font-size: clamp(1.875rem, 4vw, 2.25rem);
    font-weight: 700;
}
.underlined {
    position: relative;
    display: inline-block;
}
.underlined::after {
    content: '';
    position: absolute;
    bottom: -0.5rem;
    left: 50%;
    transform: translateX(-50%);
    height: 4px;
    width: 6rem;
    border-radius: 2px;
    background: var(--gradient);
}
.section-lede {
    margin: 1.5rem auto 0;
    max-width: 42rem;
    font-size: 1.125rem;
    color: var(--muted);
}

.problem-solution {
    padding: 5rem 1.5rem;
    background: color-mix(in srgb, var(--surface) 70%, transparent);
    backdrop-filter: blur(12px);
}
.ps-grid {
    margin: 2.5rem auto 0;
    max-width: 48rem;
    display: grid;
    gap: 2rem;
    grid-template-columns: repeat(auto-fit, minmax(18rem, 1fr));
}
.ps-card {
    padding: 2rem;
    border-radius: 0.5rem;
    background: var(--surface-alt);
    box-shadow: 0 20px 25px rgba(0, 0, 0, 0.1);
    text-align: left;
    transition: transform 0.3s ease, box-shadow 0.3s ease;
}
.ps-card:hover { transform: translateY(-4px); box-shadow: 0 25px 50px rgba(0, 0, 0, 0.15); }
.ps-card h3 {
    display: flex;
    align-items: center;
    gap: 0.75rem;
    font-size: 1.25rem;
    font-weight: 600;
    margin-bottom: 1rem;
}
.ps-icon {
    display: inline-flex;
    align-items: center;
    justify-content: center;
    width: 2.5rem;
    height: 2.5rem;
    border-radius: 50%;
}
.ps-icon.bad { background: rgba(239, 68, 68, 0.2); color: #ef4444; }
.ps-icon.good { background: rgba(34, 197, 94, 0.2); color: #22c55e; }
.ps-card ul { list-style: none; margin: 0; padding: 0; }
.ps-card li {
    display: flex;
    align-items: flex-start;
    gap: 0.75rem;
    margin-bottom: 1rem;
    font-size: 0.875rem;
    color: var(--muted);
}
.bad-mark { color: #ef4444; margin-top: 0.2rem; }
.good-mark { color: #22c55e; margin-top: 0.2rem; }

.features { padding: 6rem 1.5rem; }
.tab-layout {
    max-width: 80rem;
    margin: 4rem auto 0;
    display: flex;
    flex-wrap: wrap;
    gap: 2rem;
}
.tab-list { flex: 1 1 16rem; display: flex; flex-direction: column; gap: 0.5rem; }
.tab {
    padding: 1rem;
    border-radius: 0.5rem;
    cursor: pointer;
    display: flex;
    align-items: center;
    justify-content: space-between;
    font-weight: 500;
    transition: background 0.3s ease, box-shadow 0.3s ease;
}
.tab:hover { background: color-mix(in srgb, var(--surface) 50%, transparent); }
.tab.active {
    background: var(--surface);
    border-left: 4px solid var(--pink);
    box-shadow: 0 4px 6px rgba(0, 0, 0, 0.1);
}
.tab.active i { color: var(--pink); }
.tab-panel { flex: 2 1 28rem; }
.tab-content {
    padding: 1.5rem;
    border-radius: 0.75rem;
    background: var(--surface);
    box-shadow: 0 20px 25px rgba(0, 0, 0, 0.1);
    animation: fadeIn 0.5s ease-out forwards;
    text-align: left;
}
.tab-content h3 { font-size: 1.25rem; font-weight: 600; margin-bottom: 1rem; }
.tab-content > p { color: var(--muted); margin-bottom: 1.5rem; }
.tab-preview {
    aspect-ratio: 16 / 9;
    border-radius: 0.5rem;
    background: linear-gradient(135deg, #111827, #374151);
    border-bottom: 4px solid transparent;
    border-image: var(--gradient) 1;
}
.tab-checks {
    margin-top: 1.5rem;
    display: flex;
    gap: 1rem;
    font-size: 0.875rem;
    color: var(--muted);
}
.tab-checks span { display: inline-flex; align-items: center; gap: 0.375rem; }

.card-grid {
    max-width: 80rem;
    margin: 3rem auto 0;
    display: grid;
    gap: 2rem;
    grid-template-columns: repeat(auto-fit, minmax(18rem, 1fr));
}
.feature-card {
    padding: 2rem;
    border-radius: 0.75rem;
    background: var(--surface);
    box-shadow: 0 10px 15px rgba(0, 0, 0, 0.1);
    transition: transform 0.3s ease, box-shadow 0.3s ease;
}
.feature-card:hover { transform: translateY(-4px) scale(1.02); box-shadow: 0 20px 25px rgba(0, 0, 0, 0.15); }
.feature-icon {
    display: flex;
    align-items: center;
    justify-content: center;
    width: 3.5rem;
    height: 3.5rem;
    margin-bottom: 1.5rem;
    border-radius: 50%;
    background: var(--gradient);
    color: #ffffff;
    font-size: 1.25rem;
    transition: transform 0.5s ease;
}
.feature-card:hover .feature-icon { transform: rotate(12deg); }
.feature-card h3 { font-size: 1.25rem; font-weight: 600; margin-bottom: 0.75rem; }
.feature-card p { font-size: 0.875rem; color: var(--muted); }
.learn-more {
    display: inline-flex;
    align-items: center;
    gap: 0.25rem;
    margin-top: 1rem;
    font-size: 0.875rem;
    font-weight: 500;
    color: #3b82f6;
    text-decoration: none;
}
.learn-more:hover { color: #1d4ed8; }

.ai-section {
    padding: 6rem 1.5rem;
    background: color-mix(in srgb, var(--surface) 70%, transparent);
    backdrop-filter: blur(12px);
}
.ai-layout {
    max-width: 80rem;
    margin: 0 auto;
    display: flex;
    flex-wrap: wrap;
    align-items: center;
    gap: 3rem;
}
.ai-copy { flex: 1 1 26rem; }
.ai-copy h2 {
    display: flex;
    align-items: center;
    gap: 0.75rem;
    font-size: clamp(1.875rem, 4vw, 2.25rem);
    font-weight: 700;
    margin-bottom: 1.5rem;
}
.ai-badge {
    display: inline-flex;
    padding: 0.5rem;
    border-radius: 50%;
    background: linear-gradient(90deg, rgba(219, 39, 119, 0.2), rgba(96, 165, 250, 0.2));
    color: var(--blue);
}
.ai-powers { display: flex; flex-direction: column; gap: 1.5rem; }
.ai-power {
    padding: 1.25rem;
    border-radius: 0.75rem;
    background: var(--surface-alt);
    box-shadow: 0 10px 15px rgba(0, 0, 0, 0.1);
    cursor: pointer;
    transition: transform 0.3s ease, box-shadow 0.3s ease;
}
.ai-power:hover { transform: translateY(-4px); box-shadow: 0 20px 25px rgba(0, 0, 0, 0.15); }
.ai-power h3 {
    display: flex;
    align-items: center;
    gap: 0.5rem;
    font-size: 1.125rem;
    font-weight: 500;
    color: var(--text);
}
.ai-power h3 i { color: var(--blue); }
.ai-power p { margin-top: 0.75rem; font-size: 0.875rem; color: var(--muted); }
.ai-mock-slot { flex: 1 1 26rem; }
.ai-mock {
    position: relative;
    padding: 1.5rem;
    border-radius: 0.75rem;
    background: var(--surface);
    box-shadow: 0 25px 50px rgba(0, 0, 0, 0.25);
}
.glow {
    position: absolute;
    border-radius: 50%;
    filter: blur(16px);
    animation: pulse 2s ease-in-out infinite;
}
.glow-blue { top: -1.5rem; right: -1.5rem; width: 3rem; height: 3rem; background: rgba(96, 165, 250, 0.3); }
.glow-pink { bottom: -1.5rem; left: -1.5rem; width: 3.5rem; height: 3.5rem; background: rgba(219, 39, 119, 0.3); }
.insight-card {
    padding: 1.25rem;
    margin-bottom: 1.5rem;
    border-radius: 0.25rem;
    border-left: 3px solid var(--blue);
    background: var(--surface-alt);
}
.insight-card p { font-size: 0.875rem; color: var(--muted); margin: 0.5rem 0 0; }
.insight-footer {
    display: flex;
    align-items: center;
    justify-content: space-between;
    font-size: 0.875rem;
}

.faq-section { padding: 5rem 1.5rem; }
.faq-list {
    max-width: 56rem;
    margin: 3rem auto 0;
    display: flex;
    flex-direction: column;
    gap: 1rem;
}
.faq-item {
    border-radius: 0.75rem;
    background: var(--surface);
    box-shadow: 0 4px 6px rgba(0, 0, 0, 0.1);
    overflow: hidden;
    transition: box-shadow 0.3s ease;
}
.faq-item.open { box-shadow: 0 20px 25px rgba(0, 0, 0, 0.15); }
.faq-question {
    width: 100%;
    display: flex;
    align-items: center;
    justify-content: space-between;
    padding: 1.25rem;
    border: none;
    background: none;
    color: var(--text);
    font-size: 1.125rem;
    font-weight: 500;
    text-align: left;
    cursor: pointer;
}
.faq-chevron { transition: transform 0.3s ease; }
.faq-item.open .faq-chevron { transform: rotate(180deg); }
.faq-answer {
    max-height: 0;
    overflow: hidden;
    transition: max-height 0.3s ease;
}
.faq-item.open .faq-answer { max-height: 15rem; }
.faq-answer p {
    padding: 0 1.25rem 1.25rem;
    margin: 0;
    border-top: 1px solid var(--border);
    padding-top: 1rem;
    color: var(--muted);
}

.personas {
    padding: 6rem 1.5rem;
    background: color-mix(in srgb, var(--surface) 70%, transparent);
    backdrop-filter: blur(12px);
}
.persona-grid {
    max-width: 80rem;
    margin: 4rem auto 0;
    display: grid;
    gap: 2rem;
    grid-template-columns: repeat(auto-fit, minmax(15rem, 1fr));
}
.persona-card {
    padding: 2rem;
    border-radius: 0.75rem;
    background: var(--surface-alt);
    box-shadow: 0 10px 15px rgba(0, 0, 0, 0.1);
    text-align: center;
    transition: transform 0.3s ease, box-shadow 0.3s ease;
}
.persona-card:hover { transform: translateY(-8px) scale(1.05); box-shadow: 0 20px 25px rgba(0, 0, 0, 0.15); }
.persona-icon {
    display: flex;
    align-items: center;
    justify-content: center;
    width: 5rem;
    height: 5rem;
    margin: 0 auto 1.5rem;
    border-radius: 50%;
    background: var(--gradient);
    color: #ffffff;
    font-size: 1.75rem;
    transition: transform 0.5s ease;
}
.persona-card:hover .persona-icon { transform: scale(1.1); }
.persona-card h3 { font-size: 1.25rem; font-weight: 600; margin-bottom: 0.75rem; }
.persona-card p { font-size: 0.875rem; color: var(--muted); }

.pricing { padding: 6rem 1.5rem; }
.plan-grid {
    max-width: 64rem;
    margin: 2.5rem auto 0;
    display: grid;
    gap: 2rem;
    grid-template-columns: repeat(auto-fit, minmax(16rem, 1fr));
}
.plan-card {
    position: relative;
    padding: 1.5rem;
    border-radius: 0.75rem;
    background: var(--surface);
    box-shadow: 0 20px 25px rgba(0, 0, 0, 0.1);
    text-align: left;
    transition: transform 0.3s ease, box-shadow 0.3s ease;
}
.plan-card:hover { transform: translateY(-8px); box-shadow: 0 25px 50px rgba(0, 0, 0, 0.2); }
.plan-card.popular { border-top: 4px solid transparent; border-image: var(--gradient) 1; }
.popular-badge {
    position: absolute;
    top: 0;
    right: 0;
    padding: 0.25rem 0.75rem;
    border-bottom-left-radius: 0.5rem;
    background: var(--gradient);
    color: #ffffff;
    font-size: 0.75rem;
    font-weight: 700;
}
.plan-card h3 { font-size: 1.25rem; font-weight: 600; }
.plan-audience { font-size: 0.875rem; color: var(--muted); margin-bottom: 1rem; }
.plan-price { display: flex; align-items: flex-end; margin-bottom: 1.5rem; }
.plan-price .amount { font-size: 2.25rem; font-weight: 700; }
.plan-price .period { margin-left: 0.25rem; color: var(--muted); }
.plan-card ul { list-style: none; margin: 0 0 2rem; padding: 0; }
.plan-card li {
    display: flex;
    align-items: flex-start;
    gap: 0.5rem;
    margin-bottom: 0.75rem;
    font-size: 0.875rem;
    color: var(--muted);
}
.plan-footnote { margin-top: 3rem; font-size: 0.875rem; color: var(--muted); }

.cta-section { padding: 6rem 1.5rem; }
.cta-panel {
    max-width: 60rem;
    margin: 0 auto;
    padding: 3rem 1.5rem 4rem;
    border-radius: 1rem;
    background: var(--surface);
    box-shadow: 0 25px 50px rgba(0, 0, 0, 0.25);
    text-align: center;
}
.cta-panel h2 {
    font-size: clamp(1.875rem, 4vw, 2.25rem);
    font-weight: 700;
    margin-bottom: 1.5rem;
}
.cta-actions {
    margin-top: 2.5rem;
    display: flex;
    flex-wrap: wrap;
    justify-content: center;
    gap: 1.5rem;
}

.footer {
    position: relative;
    z-index: 1;
    padding: 4rem 1.5rem 2rem;
    border-top: 1px solid var(--border);
    background: var(--bg);
}
.footer-main {
    max-width: 80rem;
    margin: 0 auto;
    display: flex;
    flex-wrap: wrap;
    justify-content: space-between;
    gap: 3rem;
}
.footer-brand { max-width: 20rem; }
.footer-brand .logo { font-size: 1.5rem; }
.footer-brand p { margin-top: 1rem; font-size: 0.875rem; color: var(--muted); }
.powered-by { display: block; margin-top: 1.5rem; font-size: 0.75rem; color: var(--muted); }
.socials { margin-top: 2rem; display: flex; gap: 1.25rem; }
.socials a {
    color: var(--muted);
    font-size: 1.25rem;
    transition: transform 0.3s ease, color 0.3s ease;
}
.socials a:hover { color: var(--text); transform: scale(1.1); }
.footer-columns {
    display: grid;
    gap: 2rem;
    grid-template-columns: repeat(auto-fit, minmax(8rem, 1fr));
    flex: 1;
}
.footer-column h3 {
    font-size: 0.875rem;
    font-weight: 600;
    margin-bottom: 1rem;
}
.footer-column ul { list-style: none; margin: 0; padding: 0; }
.footer-column li { margin-bottom: 0.75rem; }
.footer-column a {
    font-size: 0.875rem;
    color: var(--muted);
    text-decoration: none;
}
.footer-column a:hover { color: var(--text); text-decoration: underline; }
.footer-bottom {
    max-width: 80rem;
    margin: 3rem auto 0;
    padding-top: 2rem;
    border-top: 1px solid var(--border);
    display: flex;
    flex-wrap: wrap;
    align-items: center;
    justify-content: space-between;
    gap: 1rem;
    font-size: 0.875rem;
    color: var(--muted);
}
.footer-bottom-actions { display: flex; align-items: center; gap: 1rem; }
.footer-bottom-actions a { color: var(--muted); text-decoration: none; }
.footer-bottom-actions a:hover { text-decoration: underline; }

.floating-cta {
    display: none;
    position: fixed;
    bottom: 0;
    left: 0;
    right: 0;
    padding: 1rem;
    background: var(--gradient);
    z-index: 30;
    animation: slideUpIn 0.5s ease-out forwards;
}
.floating-cta a {
    display: block;
    width: 100%;
    padding: 0.75rem;
    border: 1px solid #ffffff;
    border-radius: 0.375rem;
    color: #ffffff;
    font-weight: 500;
    text-align: center;
    text-decoration: none;
    transition: background 0.3s ease, color 0.3s ease;
}
.floating-cta a:hover { background: #ffffff; color: var(--pink); }

.scroll-top {
    position: fixed;
    bottom: 1.5rem;
    right: 1.5rem;
    padding: 0.75rem 0.9rem;
    border: none;
    border-radius: 50%;
    background: var(--gradient);
    color: #ffffff;
    box-shadow: 0 10px 15px rgba(0, 0, 0, 0.2);
    cursor: pointer;
    z-index: 30;
    opacity: 0;
    transform: translateY(2.5rem);
    transition: opacity 0.3s ease, transform 0.3s ease;
    pointer-events: none;
}
.scroll-top.visible {
    opacity: 1;
    transform: translateY(0);
    pointer-events: auto;
}

@media (max-width: 768px) {
    .nav-links { display: none; }
    .menu-button { display: block; }
    .floating-cta { display: block; }
    .hero { padding-top: 6rem; }
    .hero-mockup-slot { justify-content: center; }
}

@keyframes slideDown {
    from { max-height: 0; opacity: 0; }
    to { max-height: 400px; opacity: 1; }
}
@keyframes fadeIn {
    from { opacity: 0; }
    to { opacity: 1; }
}
@keyframes slideUpIn {
    from { transform: translateY(100%); }
    to { transform: translateY(0); }
}
@keyframes pulse {
    0%, 100% { opacity: 1; }
    50% { opacity: 0.5; }
}
"#;
