//! Report form: photo, location, details, then simulated verification.
//!
//! SYSTEM CONTEXT
//! ==============
//! The page owns a `ReportFlow`: draft, location picker, and submission
//! state in one value. On mount it asks the device for a position once; until
//! that resolves the map stays hidden. Submitting waits `VERIFICATION_DELAY`
//! and then asks a seeded `SimulatedVerifier` for the verdict. A finished
//! flow swaps the form for a result card; "Try Again" returns to the form
//! with every field intact.
//!
//! ERROR HANDLING
//! ==============
//! Geolocation failure silently falls back to the default coordinate.
//! Submit is disabled until the draft is complete; a stray submit is ignored.
//! Async continuations check that the page still exists before writing.

#[cfg(test)]
#[path = "report_issue_test.rs"]
mod report_issue_test;

use leptos::prelude::*;
use reports::submission::VERIFICATION_DELAY;
use reports::{CapturedImage, Coordinate, IssueType, ReportFlow, SimulatedVerifier, SubmissionState};

use crate::components::camera_capture::CameraCapture;
use crate::components::header::Header;
use crate::components::location_map::LocationMap;
use crate::device::random_seed;

pub const SUCCESS_TITLE: &str = "Issue Reported Successfully";
pub const SUCCESS_BODY: &str = "Your report has been verified by AI and submitted to the local authorities. You'll receive updates on your dashboard.";
pub const FAILURE_TITLE: &str = "Verification Failed";

/// Parse the issue type `<select>` value; the placeholder maps to `None`.
pub fn parse_issue_type(raw: &str) -> Option<IssueType> {
    raw.parse().ok()
}

/// Heading for the result card, if the flow has finished.
pub fn result_title(state: SubmissionState) -> Option<&'static str> {
    match state {
        SubmissionState::Success => Some(SUCCESS_TITLE),
        SubmissionState::Failure => Some(FAILURE_TITLE),
        SubmissionState::Idle | SubmissionState::Verifying => None,
    }
}

#[component]
pub fn ReportIssuePage() -> impl IntoView {
    let flow = RwSignal::new(ReportFlow::new());
    let verifier = StoredValue::new(SimulatedVerifier::seeded(random_seed()));

    #[cfg(feature = "hydrate")]
    leptos::task::spawn_local(async move {
        use reports::Geolocator as _;

        let geolocator = crate::device::geolocation::DeviceGeolocator::default();
        let result = geolocator.current_position(reports::PositionOptions::default()).await;
        if let Err(e) = &result {
            leptos::logging::log!("using default location: {e}");
        }
        if let Some(Some(location)) = flow.try_update(|f| f.resolve_location(result)) {
            leptos::logging::log!("report location set to {location}");
        }
    });

    let on_submit = Callback::new(move |()| {
        if !flow.with_untracked(ReportFlow::can_submit) {
            return;
        }
        let Some(Ok(report)) = flow.try_update(ReportFlow::submit) else {
            return;
        };
        leptos::logging::log!("verifying {} report at {}", report.issue_type, report.location);

        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            use reports::Verifier as _;

            gloo_timers::future::sleep(VERIFICATION_DELAY).await;
            let Some(verdict) = verifier.try_update_value(|v| v.verify(&report)) else {
                return;
            };
            if let Some(state) = flow.try_update(|f| f.complete(verdict)) {
                leptos::logging::log!("verification finished: {state:?}");
            }
        });
        #[cfg(not(feature = "hydrate"))]
        let _ = (report, verifier, VERIFICATION_DELAY);
    });

    let finished = move || flow.with(|f| f.state().is_finished());

    view! {
        <div class="page">
            <Header/>
            <Show
                when=finished
                fallback=move || view! { <ReportForm flow=flow on_submit=on_submit/> }
            >
                <VerificationResult flow=flow/>
            </Show>
        </div>
    }
}

#[component]
fn ReportForm(flow: RwSignal<ReportFlow>, on_submit: Callback<()>) -> impl IntoView {
    let verifying = Signal::derive(move || flow.with(|f| f.state() == SubmissionState::Verifying));

    let image = Signal::derive(move || flow.with(|f| f.draft().image.clone()));
    let on_capture = Callback::new(move |photo: CapturedImage| {
        flow.update(|f| {
            f.edit(|d| d.image = Some(photo));
        });
    });
    let on_clear = Callback::new(move |()| {
        flow.update(|f| {
            f.edit(|d| d.image = None);
        });
    });

    let position = Signal::derive(move || flow.with(|f| f.location().coordinate()));
    let on_move = Callback::new(move |to: Coordinate| {
        if flow.try_update(|f| f.move_location(to)).flatten().is_none() {
            leptos::logging::log!("location is locked while verifying");
        }
    });
    let locating = move || flow.with(|f| f.location().is_locating());

    let on_issue_type = move |ev: leptos::ev::Event| {
        let issue_type = parse_issue_type(&event_target_value(&ev));
        flow.update(|f| {
            f.edit(|d| d.issue_type = issue_type);
        });
    };
    let on_description = move |ev: leptos::ev::Event| {
        let text = event_target_value(&ev);
        flow.update(|f| {
            f.edit(|d| d.description = text);
        });
    };
    let selected = move || flow.with(|f| f.draft().issue_type);

    view! {
        <div class="container report">
            <a href="/citizen/dashboard" class="button button--ghost">"← Back to Dashboard"</a>
            <h1>"Report an Issue"</h1>

            <section class="card">
                <h2 class="card__title">"1. Capture Photo"</h2>
                <CameraCapture image=image on_capture=on_capture on_clear=on_clear locked=verifying/>
            </section>

            <section class="card">
                <h2 class="card__title">"2. Confirm Location"</h2>
                <p class="report__location">
                    <span class="report__pin" class:spinner=locating aria-hidden="true">
                        {move || if locating() { "" } else { "📍" }}
                    </span>
                    <span>{move || flow.with(|f| f.location().label())}</span>
                </p>
                <Show when=move || !locating()>
                    <LocationMap position=position on_change=on_move/>
                    <p class="hint">"Drag the marker or tap the map to adjust location."</p>
                </Show>
            </section>

            <section class="card">
                <h2 class="card__title">"3. Issue Details"</h2>
                <label for="issue-type">"Issue Type"</label>
                <select id="issue-type" class="select" disabled=move || verifying.get() on:change=on_issue_type>
                    <option value="" disabled=true prop:selected=move || selected().is_none()>
                        "Select issue type"
                    </option>
                    {IssueType::ALL
                        .into_iter()
                        .map(|t| {
                            view! {
                                <option value=t.as_str() prop:selected=move || selected() == Some(t)>
                                    {t.label()}
                                </option>
                            }
                        })
                        .collect::<Vec<_>>()}
                </select>
                <label for="description">"Description (optional)"</label>
                <textarea
                    id="description"
                    class="textarea"
                    rows="3"
                    placeholder="Briefly describe the issue…"
                    disabled=move || verifying.get()
                    prop:value=move || flow.with(|f| f.draft().description.clone())
                    on:input=on_description
                ></textarea>
            </section>

            <Show
                when=move || verifying.get()
                fallback=move || {
                    view! {
                        <button
                            class="button button--primary button--block"
                            disabled=move || !flow.with(ReportFlow::can_submit)
                            on:click=move |_| on_submit.run(())
                        >
                            "Submit Report"
                        </button>
                    }
                }
            >
                <div class="card verifying">
                    <span class="verifying__icon" aria-hidden="true">"🤖"</span>
                    <div>
                        <p class="verifying__title">"AI Verification in Progress"</p>
                        <p class="verifying__detail">"Analyzing image and validating issue…"</p>
                    </div>
                    <span class="spinner"></span>
                </div>
            </Show>
        </div>
    }
}

#[component]
fn VerificationResult(flow: RwSignal<ReportFlow>) -> impl IntoView {
    let failed = move || flow.with(|f| f.state() == SubmissionState::Failure);
    let title = move || flow.with(|f| result_title(f.state())).unwrap_or_default();
    let body = move || {
        flow.with(|f| f.rejection().map_or_else(|| SUCCESS_BODY.to_owned(), |r| r.reason.clone()))
    };

    view! {
        <div class="container result">
            <div class="card result__card">
                <div class="result__icon" class:result__icon--failure=failed aria-hidden="true">
                    {move || if failed() { "✕" } else { "✓" }}
                </div>
                <h2>{title}</h2>
                <p>{body}</p>
                <div class="result__actions">
                    <a href="/citizen/dashboard" class="button button--outline">"Back to Dashboard"</a>
                    <Show when=failed>
                        <button
                            class="button button--primary"
                            on:click=move |_| {
                                flow.update(|f| {
                                    f.retry();
                                });
                            }
                        >
                            "Try Again"
                        </button>
                    </Show>
                </div>
            </div>
        </div>
    }
}
