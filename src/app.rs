//! EWM Admin Console App
//!
//! Navigation bar, the active resource page and the notification bar.

use ewm_client::ApiConfig;
use leptos::prelude::*;

use crate::components::{CategoriesPage, CompilationsPage, EventsPage, NavBar, NotificationBar, Page, UsersPage};
use crate::context::AppContext;

#[component]
pub fn App() -> impl IntoView {
    let config = ApiConfig::from_build_env();
    tracing::info!(base_url = %config.base_url, acting_user = config.acting_user_id, "starting admin console");

    // Provide context to all children
    provide_context(AppContext::new(config));

    let (page, set_page) = signal(Page::default());

    view! {
        <div class="app-layout">
            <NavBar page=page set_page=set_page />

            // Each page owns its controller; switching pages reloads from the backend
            <main class="main-content">
                {move || match page.get() {
                    Page::Events => view! { <EventsPage /> }.into_any(),
                    Page::Users => view! { <UsersPage /> }.into_any(),
                    Page::Categories => view! { <CategoriesPage /> }.into_any(),
                    Page::Compilations => view! { <CompilationsPage /> }.into_any(),
                }}
            </main>

            <NotificationBar />
        </div>
    }
}
