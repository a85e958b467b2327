//! Complaint cards for the authority dashboard.
//!
//! Presentation only: callers pass the already-filtered list.

#[cfg(test)]
#[path = "complaint_list_test.rs"]
mod complaint_list_test;

use leptos::prelude::*;
use leptos::tachys::view::any_view::IntoAny;
use reports::{Complaint, Priority, Severity};

pub const EMPTY_MESSAGE: &str = "No complaints match the selected filters.";

pub fn severity_class(severity: Severity) -> &'static str {
    match severity {
        Severity::Low => "tag tag--muted",
        Severity::Medium => "tag tag--warning",
        Severity::High => "tag tag--danger",
    }
}

pub fn priority_class(priority: Priority) -> &'static str {
    match priority {
        Priority::Critical => "badge badge--danger",
        Priority::High => "badge badge--primary",
        Priority::Medium => "badge badge--secondary",
        Priority::Low => "badge badge--outline",
    }
}

/// Cluster tag, shown only when several citizens reported the same issue.
pub fn duplicate_label(count: u32) -> Option<String> {
    (count > 1).then(|| format!("{count} reports"))
}

pub fn confidence_label(confidence: u8) -> String {
    format!("{confidence}% AI")
}

#[component]
pub fn ComplaintList(complaints: Vec<Complaint>) -> impl IntoView {
    if complaints.is_empty() {
        return view! { <div class="card complaint-list__empty">{EMPTY_MESSAGE}</div> }.into_any();
    }

    let cards = complaints.into_iter().map(|c| view! { <ComplaintCard complaint=c/> }).collect::<Vec<_>>();
    view! { <div class="complaint-list">{cards}</div> }.into_any()
}

#[component]
fn ComplaintCard(complaint: Complaint) -> impl IntoView {
    let Complaint {
        title,
        issue_type,
        severity,
        priority,
        status,
        area,
        date,
        duplicate_count,
        image_url,
        ai_confidence,
        description,
        ..
    } = complaint;
    let alt = title.clone();

    view! {
        <article class="card complaint-card">
            <img class="complaint-card__image" src=image_url alt=alt loading="lazy"/>
            <div class="complaint-card__body">
                <div class="complaint-card__top">
                    <h3 class="complaint-card__title">{title}</h3>
                    <span class=priority_class(priority)>{priority.as_str()}</span>
                </div>
                <p class="complaint-card__description">{description}</p>
                <div class="complaint-card__tags">
                    <span class="tag tag--primary">{issue_type.label()}</span>
                    <span class=severity_class(severity)>{severity.as_str()}</span>
                    {duplicate_label(duplicate_count).map(|label| view! { <span class="tag tag--muted">{label}</span> })}
                    <span class="tag tag--muted complaint-card__confidence">{confidence_label(ai_confidence)}</span>
                </div>
                <div class="complaint-card__meta">
                    <span>{area}</span>
                    <span>{date}</span>
                    <span class="complaint-card__status">{status.as_str()}</span>
                </div>
            </div>
        </article>
    }
}
