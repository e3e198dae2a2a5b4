//! Compilations Page

use ewm_sync::resources::Compilations;
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::components::{CheckboxField, FormDialog, TextField};
use crate::context::AppContext;

/// Select value <-> `pinned` filter
fn pinned_from_param(value: &str) -> Option<bool> {
    match value {
        "true" => Some(true),
        "false" => Some(false),
        _ => None,
    }
}

#[component]
pub fn CompilationsPage() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext should be provided");
    let compilations = ctx.controller::<Compilations>();
    let state = *compilations.state();

    Effect::new(move |_| {
        spawn_local(async move {
            compilations.load().await;
        });
    });

    view! {
        <section class="page">
            <header class="page-header">
                <h1>"Compilations"</h1>
                <select
                    class="filter-select"
                    prop:value=move || state.with(|s| s.filters().pinned.map(|p| p.to_string()).unwrap_or_default())
                    on:change=move |ev| {
                        let pinned = pinned_from_param(&event_target_value(&ev));
                        state.update(|s| s.filters_mut().pinned = pinned);
                        spawn_local(async move {
                            compilations.load().await;
                        });
                    }
                >
                    <option value="">"All"</option>
                    <option value="true">"Pinned"</option>
                    <option value="false">"Not pinned"</option>
                </select>
                <button class="primary-btn" on:click=move |_| compilations.open_create()>
                    "New compilation"
                </button>
            </header>

            <Show when=move || state.with(|s| s.is_loading())>
                <p class="loading">"Loading..."</p>
            </Show>

            <table class="data-table">
                <thead>
                    <tr>
                        <th>"ID"</th>
                        <th>"Title"</th>
                        <th>"Pinned"</th>
                        <th>"Events"</th>
                        <th></th>
                    </tr>
                </thead>
                <tbody>
                    {move || state.records().into_iter().map(|compilation| {
                        let id = compilation.id;
                        let titles = compilation
                            .events
                            .iter()
                            .map(|event| event.title.as_str())
                            .collect::<Vec<_>>()
                            .join(", ");
                        let title = compilation.title.clone();
                        let pinned = if compilation.pinned { "Yes" } else { "No" };
                        view! {
                            <tr>
                                <td>{id}</td>
                                <td>{title}</td>
                                <td>{pinned}</td>
                                <td class="event-titles">{titles}</td>
                                <td class="row-actions">
                                    <button class="edit-btn" on:click=move |_| compilations.open_edit(&compilation)>
                                        "Edit"
                                    </button>
                                    <button
                                        class="delete-btn"
                                        on:click=move |_| spawn_local(async move {
                                            compilations.remove(id).await;
                                        })
                                    >
                                        "Delete"
                                    </button>
                                </td>
                            </tr>
                        }
                    }).collect_view()}
                </tbody>
            </table>

            <Show when=move || state.with(|s| s.is_dialog_open())>
                <FormDialog controller=compilations>
                    <TextField
                        label="Title"
                        value=Signal::derive(move || state.draft_field(|d| d.title.clone()))
                        on_input=move |v: String| state.edit_draft(|d| d.title = v)
                    />
                    <CheckboxField
                        label="Pinned"
                        checked=Signal::derive(move || state.draft_field(|d| d.pinned))
                        on_change=move |v: bool| state.edit_draft(|d| d.pinned = v)
                    />
                    <TextField
                        label="Event IDs"
                        placeholder="3, 7, 12"
                        value=Signal::derive(move || state.draft_field(|d| d.event_ids.clone()))
                        on_input=move |v: String| state.edit_draft(|d| d.event_ids = v)
                    />
                </FormDialog>
            </Show>
        </section>
    }
}
