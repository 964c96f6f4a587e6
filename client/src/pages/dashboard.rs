//! User dashboard.
//!
//! SYSTEM CONTEXT
//! ==============
//! The server's session gate redirects anonymous visitors to `/login` before
//! this page renders; here we only load the user's todos in the browser.

#[cfg(test)]
#[path = "dashboard_test.rs"]
mod dashboard_test;

use leptos::prelude::*;
use leptos_meta::Title;
use leptos_router::components::A;

use crate::boundary::RenderError;
use crate::components::failure::FailureBoundary;
use crate::net::api;
use crate::net::types::Todo;
use crate::state::auth::AuthState;

/// Count of open items, for the summary line.
pub(crate) fn open_count(todos: &[Todo]) -> usize {
    todos.iter().filter(|t| !t.done).count()
}

#[component]
pub fn DashboardPage() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();

    view! {
        <Title text="Dashboard | DevStudio"/>
        <section class="section">
            <h1>"Your dashboard"</h1>
            <p class="dashboard__greeting">
                {move || format!("Signed in as {}", auth.with(AuthState::display_name))}
            </p>
            <h2>"Project checklist"</h2>
            <FailureBoundary label="dashboard-todos">
                <TodoPanel/>
            </FailureBoundary>
            <A href="/booking" attr:class="button">"Book another project"</A>
        </section>
    }
}

/// Owns the todos fetch, so a boundary retry fetches again.
#[component]
fn TodoPanel() -> impl IntoView {
    let todos = LocalResource::new(api::fetch_todos);
    view! {
        <Suspense fallback=|| view! { <p class="deferred-placeholder">"Loading your checklist…"</p> }>
            {move || Suspend::new(async move {
                let items = todos.await.map_err(RenderError::Data)?;
                Ok::<_, RenderError>(view! { <TodoList todos=items/> })
            })}
        </Suspense>
    }
}

#[component]
fn TodoList(todos: Vec<Todo>) -> impl IntoView {
    let open = open_count(&todos);
    view! {
        <p class="todo-summary">{format!("{open} of {} items open", todos.len())}</p>
        <ul class="todo-list">
            {todos
                .into_iter()
                .map(|todo| {
                    view! {
                        <li class="todo-list__item" class:todo-list__item--done=todo.done>
                            {todo.title}
                        </li>
                    }
                })
                .collect_view()}
        </ul>
    }
}
