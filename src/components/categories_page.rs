//! Categories Page

use ewm_sync::resources::Categories;
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::components::{FormDialog, TextField};
use crate::context::AppContext;

#[component]
pub fn CategoriesPage() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext should be provided");
    let categories = ctx.controller::<Categories>();
    let state = *categories.state();

    // Load on mount
    Effect::new(move |_| {
        spawn_local(async move {
            categories.load().await;
        });
    });

    view! {
        <section class="page">
            <header class="page-header">
                <h1>"Categories"</h1>
                <button class="primary-btn" on:click=move |_| categories.open_create()>
                    "New category"
                </button>
            </header>

            <Show when=move || state.with(|s| s.is_loading())>
                <p class="loading">"Loading..."</p>
            </Show>

            <table class="data-table">
                <thead>
                    <tr>
                        <th>"ID"</th>
                        <th>"Name"</th>
                        <th></th>
                    </tr>
                </thead>
                <tbody>
                    {move || state.records().into_iter().map(|category| {
                        let id = category.id;
                        let name = category.name.clone();
                        view! {
                            <tr>
                                <td>{id}</td>
                                <td>{name}</td>
                                <td class="row-actions">
                                    <button class="edit-btn" on:click=move |_| categories.open_edit(&category)>
                                        "Edit"
                                    </button>
                                    <button
                                        class="delete-btn"
                                        on:click=move |_| spawn_local(async move {
                                            categories.remove(id).await;
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
                <FormDialog controller=categories>
                    <TextField
                        label="Name"
                        value=Signal::derive(move || state.draft_field(|d| d.name.clone()))
                        on_input=move |name: String| state.edit_draft(|d| d.name = name)
                    />
                </FormDialog>
            </Show>
        </section>
    }
}
