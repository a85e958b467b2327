//! Citizen landing route: own report history and the entry to the report flow.

#[cfg(test)]
#[path = "citizen_dashboard_test.rs"]
mod citizen_dashboard_test;

use leptos::prelude::*;
use reports::{ReportHistorySummary, ReportStatus, StaticComplaints};

use crate::components::header::Header;
use crate::components::stat_card::StatCard;

pub fn status_badge_class(status: ReportStatus) -> &'static str {
    match status {
        ReportStatus::Submitted => "badge badge--outline",
        ReportStatus::InProgress => "badge badge--secondary",
        ReportStatus::Resolved => "badge badge--primary",
    }
}

pub fn status_icon(status: ReportStatus) -> &'static str {
    match status {
        ReportStatus::Submitted => "⚠",
        ReportStatus::InProgress => "⏱",
        ReportStatus::Resolved => "✓",
    }
}

#[component]
pub fn CitizenDashboardPage() -> impl IntoView {
    let data = expect_context::<StaticComplaints>();
    let history = data.citizen_reports().to_vec();
    let summary = ReportHistorySummary::from_reports(&history);

    let rows = history
        .into_iter()
        .map(|report| {
            view! {
                <li class="history__row">
                    <span class="history__icon" aria-hidden="true">{status_icon(report.status)}</span>
                    <div class="history__text">
                        <p class="history__title">{report.title}</p>
                        <p class="history__meta">{format!("{} · {}", report.category, report.date)}</p>
                    </div>
                    <span class=status_badge_class(report.status)>{report.status.as_str()}</span>
                </li>
            }
        })
        .collect::<Vec<_>>();

    view! {
        <div class="page">
            <Header/>
            <div class="container citizen-dashboard">
                <div class="page-title">
                    <div>
                        <h1>"My Dashboard"</h1>
                        <p class="page-title__lead">"Track and manage your reported issues"</p>
                    </div>
                    <div class="page-title__actions">
                        <a href="/citizen/report" class="button button--primary">"＋ Report Issue"</a>
                        <a href="/" class="button button--outline" aria-label="Sign out">"⎋"</a>
                    </div>
                </div>

                <div class="stat-grid stat-grid--three">
                    <StatCard label="Total Reports" value=summary.total.to_string() tone="primary"/>
                    <StatCard label="In Progress" value=summary.in_progress.to_string() tone="warning"/>
                    <StatCard label="Resolved" value=summary.resolved.to_string() tone="accent"/>
                </div>

                <section class="card">
                    <h2 class="card__title">"Recent Reports"</h2>
                    <ul class="history">{rows}</ul>
                </section>
            </div>
        </div>
    }
}
