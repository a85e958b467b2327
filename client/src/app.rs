//! Root application component with routing and context providers.

use leptos::prelude::*;
use leptos_meta::{MetaTags, Stylesheet, Title, provide_meta_context};
use leptos_router::{
    StaticSegment,
    components::{Route, Router, Routes},
};
use reports::StaticComplaints;

use crate::pages::{
    authority_dashboard::AuthorityDashboardPage, authority_login::AuthorityLoginPage,
    citizen_dashboard::CitizenDashboardPage, citizen_login::CitizenLoginPage, home::HomePage,
    not_found::NotFoundPage, report_issue::ReportIssuePage,
};

/// HTML shell rendered on the server for SSR + hydration.
pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <AutoReload options=options.clone()/>
                <HydrationScripts options/>
                <MetaTags/>
            </head>
            <body>
                <App/>
            </body>
        </html>
    }
}

/// Root application component.
///
/// Loads the bundled complaint data once and provides it to every page.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();
    provide_context(load_complaints());

    view! {
        <Stylesheet id="leptos" href="/pkg/civicpulse.css"/>
        <Title text="CivicPulse"/>

        <Router>
            <Routes fallback=NotFoundPage>
                <Route path=StaticSegment("") view=HomePage/>
                <Route path=(StaticSegment("citizen"), StaticSegment("login")) view=CitizenLoginPage/>
                <Route path=(StaticSegment("citizen"), StaticSegment("dashboard")) view=CitizenDashboardPage/>
                <Route path=(StaticSegment("citizen"), StaticSegment("report")) view=ReportIssuePage/>
                <Route path=(StaticSegment("authority"), StaticSegment("login")) view=AuthorityLoginPage/>
                <Route path=(StaticSegment("authority"), StaticSegment("dashboard")) view=AuthorityDashboardPage/>
            </Routes>
        </Router>
    }
}

/// Parse the bundled fixtures. A malformed bundle degrades to empty lists
/// rather than taking the whole app down.
fn load_complaints() -> StaticComplaints {
    StaticComplaints::load().unwrap_or_else(|e| {
        leptos::logging::warn!("complaint data unavailable: {e}");
        StaticComplaints::default()
    })
}
