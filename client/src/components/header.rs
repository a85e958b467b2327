//! Top navigation bar shared by the public pages.

#[cfg(test)]
#[path = "header_test.rs"]
mod header_test;

use leptos::prelude::*;
use leptos_router::hooks::use_location;

/// Navigation entries as `(path, label)`.
pub const NAV_LINKS: [(&str, &str); 3] =
    [("/", "Home"), ("/citizen/login", "Citizen Portal"), ("/authority/login", "Authority Login")];

/// Class for a nav link, marking the one matching `pathname`.
pub fn nav_link_class(path: &str, pathname: &str) -> &'static str {
    if path == pathname { "header__link header__link--active" } else { "header__link" }
}

#[component]
pub fn Header() -> impl IntoView {
    let pathname = use_location().pathname;
    let mobile_open = RwSignal::new(false);

    let links = move |mobile: bool| {
        NAV_LINKS
            .iter()
            .map(|&(path, label)| {
                view! {
                    <a
                        href=path
                        class=move || nav_link_class(path, &pathname.get())
                        on:click=move |_| {
                            if mobile {
                                mobile_open.set(false);
                            }
                        }
                    >
                        {label}
                    </a>
                }
            })
            .collect::<Vec<_>>()
    };

    view! {
        <header class="header">
            <div class="header__bar">
                <a href="/" class="header__brand">
                    <span class="header__logo" aria-hidden="true">"🛡"</span>
                    <span class="header__name">"CivicPulse"</span>
                </a>
                <nav class="header__nav">{links(false)}</nav>
                <button
                    class="header__toggle"
                    aria-label="Toggle navigation"
                    on:click=move |_| mobile_open.update(|open| *open = !*open)
                >
                    {move || if mobile_open.get() { "✕" } else { "☰" }}
                </button>
            </div>
            <Show when=move || mobile_open.get()>
                <nav class="header__nav header__nav--mobile">{links(true)}</nav>
            </Show>
        </header>
    }
}
