use log::info;
use yew::prelude::*;

use crate::components::reveal::Reveal;
use crate::components::shapes::FloatingShapes;
use crate::components::stat_counter::StatCounter;
use crate::config;
use crate::content;

/// Per-card reveal stagger inside a section.
const REVEAL_STAGGER_MS: u32 = 120;

#[function_component(About)]
pub fn about() -> Html {
    info!("Rendering About page");

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

    let mailto = format!("mailto:{}", config::CONTACT_EMAIL);

    html! {
        <div class="about-page">
            <section class="about-hero">
                <FloatingShapes />
                <div class="hero-inner">
                    <h1>{"We build the web you're proud to ship"}</h1>
                    <p>
                        {"Clearline Studio is a web-development agency of twenty-two \
                          people who care about fast pages, honest estimates, and \
                          software that still works when we're gone."}
                    </p>
                    <a class="hero-cta" href="#story">{"Read our story"}</a>
                </div>
            </section>

            <section class="about-story" id="story">
                <Reveal>
                    <h2>{"How we got here"}</h2>
                    <p class="section-lede">
                        {"Twelve years, one rule: ship something real every week."}
                    </p>
                </Reveal>
                <div class="timeline">
                    {
                        content::TIMELINE.iter().enumerate().map(|(i, entry)| {
                            html! {
                                <Reveal class="timeline-row" delay_ms={(i as u32) * REVEAL_STAGGER_MS}>
                                    <div class="timeline-year">{entry.year}</div>
                                    <div class="timeline-card">
                                        <h3>{entry.title}</h3>
                                        <p>{entry.body}</p>
                                    </div>
                                </Reveal>
                            }
                        }).collect::<Html>()
                    }
                </div>
            </section>

            <section class="about-values">
                <Reveal>
                    <h2>{"What we're here for"}</h2>
                </Reveal>
                <div class="values-grid">
                    {
                        content::VALUES.iter().enumerate().map(|(i, card)| {
                            html! {
                                <Reveal class="value-card" delay_ms={(i as u32) * REVEAL_STAGGER_MS}>
                                    <span class="value-icon">{card.icon}</span>
                                    <h3>{card.title}</h3>
                                    <p>{card.body}</p>
                                </Reveal>
                            }
                        }).collect::<Html>()
                    }
                </div>
            </section>

            <section class="about-team" id="team">
                <Reveal>
                    <h2>{"The people"}</h2>
                    <p class="section-lede">
                        {"Four of the twenty-two faces you'd actually talk to."}
                    </p>
                </Reveal>
                <div class="team-grid">
                    {
                        content::TEAM.iter().enumerate().map(|(i, member)| {
                            html! {
                                <Reveal class="team-card" delay_ms={(i as u32) * REVEAL_STAGGER_MS}>
                                    <div
                                        class="team-avatar"
                                        style={format!("background: {};", member.accent)}
                                    >
                                        {member.initials}
                                    </div>
                                    <h3>{member.name}</h3>
                                    <span class="team-role">{member.role}</span>
                                    <p>{member.bio}</p>
                                </Reveal>
                            }
                        }).collect::<Html>()
                    }
                </div>
            </section>

            <section class="about-stats" id="stats">
                <Reveal>
                    <h2>{"In numbers"}</h2>
                </Reveal>
                <div class="stats-grid">
                    {
                        content::STATS.iter().enumerate().map(|(i, stat)| {
                            html! {
                                <StatCounter
                                    icon={stat.icon}
                                    label={stat.label}
                                    target={stat.target}
                                    suffix={stat.suffix}
                                    start_delay_ms={(i as u32) * content::STAT_STAGGER_MS}
                                />
                            }
                        }).collect::<Html>()
                    }
                </div>
            </section>

            <section class="about-cta">
                <Reveal>
                    <h2>{"Have something worth building?"}</h2>
                    <p>
                        {"Tell us what you're trying to ship. We'll tell you what \
                          it takes, including the parts you won't want to hear."}
                    </p>
                    <div class="cta-buttons">
                        <a class="cta-primary" href={mailto}>{"Start a project"}</a>
                        <a class="cta-secondary" href="#story">{"See how we work"}</a>
                    </div>
                </Reveal>
            </section>

            <footer class="about-footer">
                <span>{"© 2026 Clearline Studio"}</span>
                <a href={config::site_url()}>{"clearline.studio"}</a>
                <a href={format!("mailto:{}", config::CONTACT_EMAIL)}>
                    {config::CONTACT_EMAIL}
                </a>
            </footer>

            <style>
                {r#"
.about-page {
    padding-top: 74px;
    min-height: 100vh;
    color: #ffffff;
    background: #1a1a1a;
    position: relative;
}

.about-page section {
    padding: 6rem 2rem;
    position: relative;
}

.about-page h2 {
    font-size: 2.5rem;
    text-align: center;
    margin-bottom: 1rem;
    background: linear-gradient(45deg, #fff, #7EB2FF);
    -webkit-background-clip: text;
    -webkit-text-fill-color: transparent;
}

.section-lede {
    text-align: center;
    color: #999;
    font-size: 1.1rem;
    margin-bottom: 3rem;
}

/* Scroll-triggered fades. `Reveal` only toggles the class. */
.reveal {
    opacity: 0;
    transform: translateY(24px);
    transition: opacity 0.7s ease, transform 0.7s ease;
}

.reveal.revealed {
    opacity: 1;
    transform: translateY(0);
}

/* ── Hero ─────────────────────────────────────────────────────────── */

.about-hero {
    min-height: 70vh;
    display: flex;
    align-items: center;
    justify-content: center;
    text-align: center;
    background: radial-gradient(ellipse at top, rgba(30, 144, 255, 0.12), transparent 60%);
    overflow: hidden;
}

.hero-inner {
    position: relative;
    z-index: 1;
    max-width: 720px;
}

.about-hero h1 {
    font-size: 3.5rem;
    margin-bottom: 1.5rem;
    background: linear-gradient(45deg, #fff, #7EB2FF);
    -webkit-background-clip: text;
    -webkit-text-fill-color: transparent;
}

.about-hero p {
    font-size: 1.2rem;
    color: #999;
    margin-bottom: 2.5rem;
    line-height: 1.7;
}

.hero-cta {
    display: inline-block;
    padding: 1rem 2.5rem;
    border-radius: 8px;
    background: linear-gradient(45deg, #1E90FF, #4169E1);
    color: #fff;
    text-decoration: none;
    font-size: 1.1rem;
    transition: transform 0.3s ease, box-shadow 0.3s ease;
}

.hero-cta:hover {
    transform: translateY(-2px);
    box-shadow: 0 8px 24px rgba(30, 144, 255, 0.3);
}

/* ── Story timeline ───────────────────────────────────────────────── */

.timeline {
    max-width: 800px;
    margin: 0 auto;
    border-left: 1px solid rgba(30, 144, 255, 0.3);
    padding-left: 2rem;
}

.timeline-row {
    display: flex;
    gap: 2rem;
    margin-bottom: 3rem;
}

.timeline-year {
    flex: 0 0 4.5rem;
    font-size: 1.3rem;
    font-weight: bold;
    color: #7EB2FF;
}

.timeline-card {
    background: rgba(30, 144, 255, 0.05);
    border: 1px solid rgba(30, 144, 255, 0.1);
    border-radius: 12px;
    padding: 1.5rem 2rem;
    transition: transform 0.3s ease, border-color 0.3s ease;
}

.timeline-card:hover {
    transform: translateY(-4px);
    border-color: rgba(30, 144, 255, 0.4);
}

.timeline-card h3 {
    margin: 0 0 0.75rem 0;
    font-size: 1.3rem;
}

.timeline-card p {
    margin: 0;
    color: #999;
    line-height: 1.7;
}

/* ── Values ───────────────────────────────────────────────────────── */

.about-values {
    background: rgba(30, 144, 255, 0.03);
}

.values-grid {
    max-width: 1100px;
    margin: 3rem auto 0;
    display: grid;
    grid-template-columns: repeat(auto-fit, minmax(280px, 1fr));
    gap: 2rem;
}

.value-card {
    background: rgba(26, 26, 26, 0.85);
    border: 1px solid rgba(30, 144, 255, 0.1);
    border-radius: 16px;
    padding: 2.5rem 2rem;
    text-align: center;
    transition: transform 0.3s ease, border-color 0.3s ease;
}

.value-card:hover {
    transform: translateY(-6px);
    border-color: rgba(30, 144, 255, 0.4);
}

.value-icon {
    font-size: 2.5rem;
    display: block;
    margin-bottom: 1rem;
}

.value-card h3 {
    font-size: 1.4rem;
    margin-bottom: 1rem;
}

.value-card p {
    color: #999;
    line-height: 1.7;
    margin: 0;
}

/* ── Team ─────────────────────────────────────────────────────────── */

.team-grid {
    max-width: 1100px;
    margin: 3rem auto 0;
    display: grid;
    grid-template-columns: repeat(auto-fit, minmax(240px, 1fr));
    gap: 2rem;
}

.team-card {
    background: rgba(30, 144, 255, 0.05);
    border: 1px solid rgba(30, 144, 255, 0.1);
    border-radius: 16px;
    padding: 2.5rem 1.5rem;
    text-align: center;
    transition: transform 0.3s ease, box-shadow 0.3s ease;
}

.team-card:hover {
    transform: translateY(-6px);
    box-shadow: 0 12px 32px rgba(0, 0, 0, 0.4);
}

.team-avatar {
    width: 88px;
    height: 88px;
    border-radius: 50%;
    margin: 0 auto 1.25rem;
    display: flex;
    align-items: center;
    justify-content: center;
    font-size: 1.8rem;
    font-weight: bold;
    color: #fff;
}

.team-card h3 {
    margin: 0 0 0.25rem 0;
    font-size: 1.25rem;
}

.team-role {
    color: #7EB2FF;
    font-size: 0.95rem;
    display: block;
    margin-bottom: 1rem;
}

.team-card p {
    color: #999;
    line-height: 1.6;
    font-size: 0.95rem;
    margin: 0;
}

/* ── Stats ────────────────────────────────────────────────────────── */

.about-stats {
    background: rgba(30, 144, 255, 0.03);
}

.stats-grid {
    max-width: 1000px;
    margin: 3rem auto 0;
    display: grid;
    grid-template-columns: repeat(auto-fit, minmax(200px, 1fr));
    gap: 2rem;
}

.stat-card {
    display: flex;
    flex-direction: column;
    align-items: center;
    gap: 0.5rem;
    background: rgba(26, 26, 26, 0.85);
    border: 1px solid rgba(30, 144, 255, 0.1);
    border-radius: 16px;
    padding: 2.5rem 1.5rem;
    transition: border-color 0.3s ease;
}

.stat-card:hover {
    border-color: rgba(30, 144, 255, 0.4);
}

.stat-icon {
    font-size: 2rem;
}

.stat-value {
    font-size: 2.8rem;
    font-weight: bold;
    color: #7EB2FF;
    font-variant-numeric: tabular-nums;
}

.stat-label {
    color: #999;
    font-size: 1rem;
}

/* ── CTA ──────────────────────────────────────────────────────────── */

.about-cta {
    text-align: center;
    background: radial-gradient(ellipse at bottom, rgba(30, 144, 255, 0.12), transparent 60%);
}

.about-cta p {
    color: #999;
    max-width: 560px;
    margin: 0 auto 2.5rem;
    font-size: 1.15rem;
    line-height: 1.7;
}

.cta-buttons {
    display: flex;
    gap: 1.5rem;
    justify-content: center;
    flex-wrap: wrap;
}

.cta-primary,
.cta-secondary {
    padding: 1rem 2.5rem;
    border-radius: 8px;
    font-size: 1.1rem;
    text-decoration: none;
    transition: transform 0.3s ease, box-shadow 0.3s ease;
}

.cta-primary {
    background: linear-gradient(45deg, #1E90FF, #4169E1);
    color: #fff;
}

.cta-secondary {
    border: 1px solid rgba(30, 144, 255, 0.4);
    color: #7EB2FF;
}

.cta-primary:hover,
.cta-secondary:hover {
    transform: translateY(-2px);
    box-shadow: 0 8px 24px rgba(30, 144, 255, 0.25);
}

/* ── Footer ───────────────────────────────────────────────────────── */

.about-footer {
    display: flex;
    justify-content: space-between;
    align-items: center;
    padding: 2rem;
    border-top: 1px solid rgba(30, 144, 255, 0.1);
    color: #666;
    font-size: 0.95rem;
}

.about-footer a {
    color: #7EB2FF;
    text-decoration: none;
}

@media (max-width: 768px) {
    .about-page section {
        padding: 4rem 1rem;
    }

    .about-hero h1 {
        font-size: 2.5rem;
    }

    .about-page h2 {
        font-size: 2rem;
    }

    .timeline {
        padding-left: 1rem;
    }

    .timeline-row {
        flex-direction: column;
        gap: 0.5rem;
    }

    .about-footer {
        flex-direction: column;
        gap: 0.5rem;
    }
}
                "#}
            </style>
        </div>
    }
}
