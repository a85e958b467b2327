//! Authority sign-in form.
//!
//! There is no account check; submitting goes straight to the dashboard.

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::components::header::Header;

#[component]
pub fn AuthorityLoginPage() -> impl IntoView {
    let navigate = use_navigate();
    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        navigate("/authority/dashboard", NavigateOptions::default());
    };

    view! {
        <div class="page">
            <Header/>
            <div class="login-page">
                <div class="card login-card">
                    <div class="login-card__icon" aria-hidden="true">"🛡"</div>
                    <h1>"Authority Login"</h1>
                    <p class="login-card__subtitle">"Access the municipal issue management system"</p>
                    <form class="login-form" on:submit=on_submit>
                        <label for="email">"Official Email"</label>
                        <input id="email" class="login-input" type="email" placeholder="admin@municipality.gov"/>
                        <label for="password">"Password"</label>
                        <input id="password" class="login-input" type="password" placeholder="••••••••"/>
                        <button class="button button--primary login-button" type="submit">"Sign In"</button>
                    </form>
                    <p class="login-card__note">"For authorized government personnel only."</p>
                </div>
            </div>
        </div>
    }
}
