//! Authority dashboard: summary counters, filterable complaint list, and the
//! recent-submissions table.
//!
//! SYSTEM CONTEXT
//! ==============
//! Reads the bundled `StaticComplaints` from context. Filtering runs on every
//! change of the two `<select>`s; the collection itself never changes.

#[cfg(test)]
#[path = "authority_dashboard_test.rs"]
mod authority_dashboard_test;

use leptos::prelude::*;
use reports::{ComplaintSummary, IssueType, RecentIssue, Severity, StaticComplaints, filter_complaints};

use crate::components::complaint_list::{ComplaintList, priority_class};
use crate::components::stat_card::StatCard;
use crate::state::dashboard::{DashboardState, Section, issue_type_value, severity_value};

/// Stat cards as `(label, value, tone)`.
pub fn summary_cards(summary: &ComplaintSummary) -> [(&'static str, String, &'static str); 4] {
    [
        ("Open Issues", summary.open.to_string(), "danger"),
        ("In Progress", summary.in_progress.to_string(), "warning"),
        ("Resolved", summary.resolved.to_string(), "accent"),
        ("Total Reports", summary.total_reports.to_string(), "primary"),
    ]
}

#[component]
pub fn AuthorityDashboardPage() -> impl IntoView {
    let data = StoredValue::new(expect_context::<StaticComplaints>());
    let state = RwSignal::new(DashboardState::default());
    let summary = data.with_value(|d| ComplaintSummary::from_complaints(reports::ComplaintSource::complaints(d)));

    let filtered = move || {
        let filter = state.with(|s| s.filter);
        data.with_value(|d| filter_complaints(d, &filter).into_iter().cloned().collect::<Vec<_>>())
    };

    let on_severity = move |ev: leptos::ev::Event| {
        let raw = event_target_value(&ev);
        state.update(|s| {
            if let Err(e) = s.set_severity(&raw) {
                leptos::logging::warn!("ignoring severity filter: {e}");
            }
        });
    };
    let on_issue_type = move |ev: leptos::ev::Event| {
        let raw = event_target_value(&ev);
        state.update(|s| {
            if let Err(e) = s.set_issue_type(&raw) {
                leptos::logging::warn!("ignoring issue type filter: {e}");
            }
        });
    };

    let sidebar_items = Section::ALL
        .into_iter()
        .map(|section| {
            view! {
                <button
                    class="sidebar__item"
                    class:sidebar__item--active=move || state.with(|s| s.section == section)
                    on:click=move |_| state.update(|s| s.select(section))
                >
                    {section.label()}
                </button>
            }
        })
        .collect::<Vec<_>>();

    let stats = summary_cards(&summary)
        .into_iter()
        .map(|(label, value, tone)| view! { <StatCard label=label value=value tone=tone/> })
        .collect::<Vec<_>>();

    let recent_rows = data.with_value(|d| d.recent_issues().iter().cloned().map(recent_row).collect::<Vec<_>>());

    view! {
        <div class="admin">
            <aside class="sidebar" class:sidebar--open=move || state.with(|s| s.sidebar_open)>
                <div class="sidebar__brand">
                    <span>"CivicPulse Admin"</span>
                    <button
                        class="sidebar__close"
                        aria-label="Close menu"
                        on:click=move |_| state.update(|s| s.sidebar_open = false)
                    >
                        "✕"
                    </button>
                </div>
                <nav class="sidebar__nav">{sidebar_items}</nav>
                <a href="/" class="sidebar__signout">"⎋ Sign Out"</a>
            </aside>
            <Show when=move || state.with(|s| s.sidebar_open)>
                <div class="sidebar__overlay" on:click=move |_| state.update(|s| s.sidebar_open = false)></div>
            </Show>

            <div class="admin__main">
                <header class="admin__header">
                    <button
                        class="admin__menu"
                        aria-label="Open menu"
                        on:click=move |_| state.update(DashboardState::toggle_sidebar)
                    >
                        "☰"
                    </button>
                    <h1>{move || state.with(|s| s.section.label())}</h1>
                </header>

                <main class="admin__content">
                    <div class="stat-grid">{stats}</div>

                    <section class="card">
                        <div class="card__header">
                            <h2 class="card__title">"Complaints"</h2>
                            <div class="filters">
                                <select class="select" aria-label="Severity" on:change=on_severity>
                                    <option value="all" prop:selected=move || state.with(|s| s.filter.severity.is_none())>
                                        "All severities"
                                    </option>
                                    {Severity::ALL
                                        .into_iter()
                                        .map(|sev| {
                                            view! {
                                                <option
                                                    value=severity_value(Some(sev))
                                                    prop:selected=move || state.with(|s| s.filter.severity == Some(sev))
                                                >
                                                    {sev.as_str()}
                                                </option>
                                            }
                                        })
                                        .collect::<Vec<_>>()}
                                </select>
                                <select class="select" aria-label="Issue type" on:change=on_issue_type>
                                    <option value="all" prop:selected=move || state.with(|s| s.filter.issue_type.is_none())>
                                        "All types"
                                    </option>
                                    {IssueType::ALL
                                        .into_iter()
                                        .map(|t| {
                                            view! {
                                                <option
                                                    value=issue_type_value(Some(t))
                                                    prop:selected=move || state.with(|s| s.filter.issue_type == Some(t))
                                                >
                                                    {t.label()}
                                                </option>
                                            }
                                        })
                                        .collect::<Vec<_>>()}
                                </select>
                            </div>
                        </div>
                        {move || view! { <ComplaintList complaints=filtered()/> }}
                    </section>

                    <section class="card">
                        <h2 class="card__title">"Recent Submissions"</h2>
                        <div class="table-scroll">
                            <table class="table">
                                <thead>
                                    <tr>
                                        <th>"Issue"</th>
                                        <th class="hide-sm">"Area"</th>
                                        <th>"Priority"</th>
                                        <th class="hide-md">"Status"</th>
                                        <th class="hide-lg">"Date"</th>
                                    </tr>
                                </thead>
                                <tbody>{recent_rows}</tbody>
                            </table>
                        </div>
                    </section>
                </main>
            </div>
        </div>
    }
}

fn recent_row(issue: RecentIssue) -> impl IntoView {
    view! {
        <tr>
            <td class="table__title">{issue.title}</td>
            <td class="hide-sm">{issue.area}</td>
            <td>
                <span class=priority_class(issue.priority)>{issue.priority.as_str()}</span>
            </td>
            <td class="hide-md">{issue.status.as_str()}</td>
            <td class="hide-lg">{issue.date}</td>
        </tr>
    }
}
