//! Navigation Bar Component

use leptos::prelude::*;

/// Top level views, one per resource
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Page {
    #[default]
    Events,
    Users,
    Categories,
    Compilations,
}

impl Page {
    pub const ALL: [Page; 4] = [Page::Events, Page::Users, Page::Categories, Page::Compilations];

    pub fn label(&self) -> &'static str {
        match self {
            Page::Events => "Events",
            Page::Users => "Users",
            Page::Categories => "Categories",
            Page::Compilations => "Compilations",
        }
    }
}

#[component]
pub fn NavBar(page: ReadSignal<Page>, set_page: WriteSignal<Page>) -> impl IntoView {
    view! {
        <nav class="nav-bar">
            <span class="nav-brand">"EWM Admin"</span>
            {Page::ALL.into_iter().map(|target| view! {
                <button
                    class=move || if page.get() == target { "nav-btn active" } else { "nav-btn" }
                    on:click=move |_| set_page.set(target)
                >
                    {target.label()}
                </button>
            }).collect_view()}
        </nav>
    }
}
