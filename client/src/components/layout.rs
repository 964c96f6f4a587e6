//! Site chrome: promo banner, header navigation and footer.

use leptos::prelude::*;
use leptos_router::components::A;

use crate::state::auth::AuthState;
use crate::state::ui::UiState;

/// Top navigation with auth-aware account actions.
#[component]
pub fn Header() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let ui = expect_context::<RwSignal<UiState>>();

    let on_sign_out = move |_| {
        #[cfg(feature = "hydrate")]
        {
            leptos::task::spawn_local(async move {
                crate::net::api::sign_out().await;
                auth.set(AuthState::default());
                if let Some(w) = web_sys::window() {
                    let _ = w.location().set_href("/");
                }
            });
        }
    };

    view! {
        <Show when=move || ui.with(|u| u.promo_banner)>
            <div class="promo-banner">
                <A href="/offers">"Limited-time offers are live. See what's on →"</A>
            </div>
        </Show>
        <header class="site-header">
            <A href="/" attr:class="site-header__brand">"DevStudio"</A>
            <button
                class="site-header__menu"
                aria-label="Toggle navigation"
                on:click=move |_| ui.update(UiState::toggle_nav)
            >
                "☰"
            </button>
            <nav class="site-header__nav" class:site-header__nav--open=move || ui.with(|u| u.nav_open)>
                <A href="/services">"Services"</A>
                <A href="/case-studies">"Case studies"</A>
                <A href="/offers">"Offers"</A>
                <A href="/booking">"Book a project"</A>
                <Show
                    when=move || auth.with(AuthState::is_signed_in)
                    fallback=move || {
                        view! {
                            <Show when=move || !auth.with(|a| a.loading)>
                                <A href="/login">"Log in"</A>
                            </Show>
                        }
                    }
                >
                    <A href="/dashboard">{move || auth.with(AuthState::display_name)}</A>
                    <button class="button button--link" on:click=on_sign_out>
                        "Sign out"
                    </button>
                </Show>
            </nav>
        </header>
    }
}

#[component]
pub fn Footer() -> impl IntoView {
    view! {
        <footer class="site-footer">
            <p>"© DevStudio. Websites and web applications, built to last."</p>
            <nav class="site-footer__nav">
                <A href="/services">"Services"</A>
                <A href="/case-studies">"Case studies"</A>
                <A href="/booking">"Contact"</A>
            </nav>
        </footer>
    }
}
