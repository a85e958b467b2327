//! Public landing page.

use leptos::prelude::*;

use crate::components::header::Header;
use crate::components::stat_card::StatCard;

/// Headline platform figures as `(value, label)`.
const STATS: [(&str, &str); 4] = [
    ("12,450+", "Issues Reported"),
    ("9,800+", "Issues Resolved"),
    ("35,000+", "Active Citizens"),
    ("4.2 days", "Avg. Resolution"),
];

/// "How it works" steps as `(icon, title, description)`.
const FEATURES: [(&str, &str, &str); 3] = [
    (
        "📍",
        "Location-Based Reporting",
        "Pinpoint civic issues on a map for precise reporting and faster resolution by local authorities.",
    ),
    (
        "🤖",
        "AI-Powered Prioritization",
        "Machine learning algorithms analyze and prioritize issues based on severity and community impact.",
    ),
    (
        "👥",
        "Community Engagement",
        "Citizens can upvote issues, track progress, and collaborate with neighbors for collective impact.",
    ),
];

#[component]
pub fn HomePage() -> impl IntoView {
    view! {
        <div class="page">
            <Header/>
            <section class="hero">
                <h1 class="hero__title">"Report Civic Issues." <br/> "Drive Real Change."</h1>
                <p class="hero__lead">
                    "An AI-powered platform connecting citizens with local authorities to identify, prioritize, and resolve community issues faster."
                </p>
                <div class="hero__actions">
                    <a href="/citizen/login" class="button button--secondary">"Report an Issue →"</a>
                    <a href="/authority/login" class="button button--outline-light">"Authority Portal"</a>
                </div>
            </section>

            <section class="container stat-grid">
                {STATS.iter().map(|&(value, label)| view! { <StatCard label=label value=value/> }).collect::<Vec<_>>()}
            </section>

            <section class="container features">
                <h2 class="features__title">"How It Works"</h2>
                <p class="features__lead">"A simple three-step process to make your community better."</p>
                <div class="features__grid">
                    {FEATURES
                        .iter()
                        .map(|&(icon, title, description)| {
                            view! {
                                <div class="card feature-card">
                                    <div class="feature-card__icon">{icon}</div>
                                    <h3>{title}</h3>
                                    <p>{description}</p>
                                </div>
                            }
                        })
                        .collect::<Vec<_>>()}
                </div>
            </section>

            <footer class="footer">"© 2026 CivicPulse. Built for better communities."</footer>
        </div>
    }
}
