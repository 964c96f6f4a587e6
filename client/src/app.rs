//! Root application component with routing and context providers.

use leptos::prelude::*;
use leptos_meta::{MetaTags, Stylesheet, Title, provide_meta_context};
use leptos_router::{
    ParamSegment, StaticSegment,
    components::{Route, Router, Routes},
};

use crate::components::failure::FailureBoundary;
use crate::components::layout::{Footer, Header};
use crate::pages::{
    admin::AdminPage, auth_callback::AuthCallbackPage, booking::BookingPage,
    case_studies::{CaseStudiesPage, CaseStudyPage}, checkout_success::CheckoutSuccessPage,
    dashboard::DashboardPage, home::HomePage, login::LoginPage, not_found::NotFoundPage,
    offers::OffersPage, services::ServicesPage,
};
use crate::state::{auth::AuthState, ui::UiState};
use crate::util::location::{self, SharedLocation};

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
/// Provides the auth, UI and location contexts and sets up routing. The whole
/// route outlet sits inside an app-level failure boundary.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let auth = RwSignal::new(AuthState::loading());
    let ui = RwSignal::new(UiState::default());
    provide_context(auth);
    provide_context(ui);
    provide_context::<SharedLocation>(location::ambient());

    #[cfg(feature = "hydrate")]
    leptos::task::spawn_local(async move {
        let user = crate::net::api::fetch_current_user().await;
        auth.set(AuthState { user, loading: false });
        if let Some(check) = crate::net::api::check_flag(crate::state::ui::PROMO_BANNER_GATE).await {
            ui.update(|u| u.apply_flag(&check));
        }
    });

    view! {
        <Stylesheet id="leptos" href="/pkg/devstudio.css"/>
        <Title text="DevStudio"/>

        <Router>
            <Header/>
            <main class="site-main">
                <FailureBoundary label="app">
                    <Routes fallback=|| view! { <NotFoundPage/> }>
                        <Route path=StaticSegment("") view=HomePage/>
                        <Route path=StaticSegment("services") view=ServicesPage/>
                        <Route path=StaticSegment("case-studies") view=CaseStudiesPage/>
                        <Route path=(StaticSegment("case-studies"), ParamSegment("slug")) view=CaseStudyPage/>
                        <Route path=StaticSegment("offers") view=OffersPage/>
                        <Route path=StaticSegment("booking") view=BookingPage/>
                        <Route path=(StaticSegment("checkout"), StaticSegment("success")) view=CheckoutSuccessPage/>
                        <Route path=StaticSegment("login") view=LoginPage/>
                        <Route path=(StaticSegment("auth"), StaticSegment("callback")) view=AuthCallbackPage/>
                        <Route path=StaticSegment("dashboard") view=DashboardPage/>
                        <Route path=StaticSegment("admin") view=AdminPage/>
                    </Routes>
                </FailureBoundary>
            </main>
            <Footer/>
        </Router>
    }
}
