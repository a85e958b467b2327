//! Citizen sign-in form.
//!
//! Like the authority form this is navigation only: any submission opens the
//! citizen dashboard.

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::components::header::Header;

#[component]
pub fn CitizenLoginPage() -> impl IntoView {
    let navigate = use_navigate();
    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        navigate("/citizen/dashboard", NavigateOptions::default());
    };

    view! {
        <div class="page">
            <Header/>
            <div class="login-page">
                <div class="card login-card">
                    <div class="login-card__icon" aria-hidden="true">"👤"</div>
                    <h1>"Citizen Portal"</h1>
                    <p class="login-card__subtitle">"Sign in to report issues and track their progress"</p>
                    <form class="login-form" on:submit=on_submit>
                        <label for="email">"Email"</label>
                        <input id="email" class="login-input" type="email" placeholder="you@example.com"/>
                        <label for="password">"Password"</label>
                        <input id="password" class="login-input" type="password" placeholder="••••••••"/>
                        <button class="button button--primary login-button" type="submit">"Sign In"</button>
                    </form>
                </div>
            </div>
        </div>
    }
}
