//! Users Page
//!
//! User list with create/delete, plus a small form for the follower
//! relation (the backend has no user edit endpoint).

use ewm_client::services::users;
use ewm_sync::resources::Users;
use ewm_sync::Notify;
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::components::{FormDialog, NumberField, TextField};
use crate::context::AppContext;

#[component]
pub fn UsersPage() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext should be provided");
    let users = ctx.controller::<Users>();
    let state = *users.state();

    Effect::new(move |_| {
        spawn_local(async move {
            users.load().await;
        });
    });

    view! {
        <section class="page">
            <header class="page-header">
                <h1>"Users"</h1>
                <button class="primary-btn" on:click=move |_| users.open_create()>
                    "New user"
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
                        <th>"Email"</th>
                        <th></th>
                    </tr>
                </thead>
                <tbody>
                    {move || state.records().into_iter().map(|user| {
                        let id = user.id;
                        view! {
                            <tr>
                                <td>{id}</td>
                                <td>{user.name}</td>
                                <td>{user.email}</td>
                                <td class="row-actions">
                                    <button
                                        class="delete-btn"
                                        on:click=move |_| spawn_local(async move {
                                            users.remove(id).await;
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

            <FollowerForm />

            <Show when=move || state.with(|s| s.is_dialog_open())>
                <FormDialog controller=users>
                    <TextField
                        label="Name"
                        value=Signal::derive(move || state.draft_field(|d| d.name.clone()))
                        on_input=move |name: String| state.edit_draft(|d| d.name = name)
                    />
                    <TextField
                        label="Email"
                        input_type="email"
                        value=Signal::derive(move || state.draft_field(|d| d.email.clone()))
                        on_input=move |email: String| state.edit_draft(|d| d.email = email)
                    />
                </FormDialog>
            </Show>
        </section>
    }
}

// ============================================================================
// Followers
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum FollowAction {
    Add,
    Remove,
}

#[component]
fn FollowerForm() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext should be provided");
    let (user_id, set_user_id) = signal(0i64);
    let (follower_id, set_follower_id) = signal(0i64);
    let (busy, set_busy) = signal(false);

    let run = move |action: FollowAction| {
        let (user, follower) = (user_id.get_untracked(), follower_id.get_untracked());
        if user <= 0 || follower <= 0 || user == follower {
            ctx.notices.error("Enter two different user ids".to_string());
            return;
        }
        set_busy.set(true);
        spawn_local(async move {
            let result = match action {
                FollowAction::Add => users::add_follower(&ctx.api, user, follower).await,
                FollowAction::Remove => users::remove_follower(&ctx.api, user, follower).await,
            };
            match (action, result) {
                (FollowAction::Add, Ok(())) => ctx.notices.success("Follower added successfully".to_string()),
                (FollowAction::Remove, Ok(())) => ctx.notices.success("Follower removed successfully".to_string()),
                (FollowAction::Add, Err(e)) => {
                    tracing::warn!(user, follower, error = %e, "add follower failed");
                    ctx.notices.error("Error adding follower".to_string());
                }
                (FollowAction::Remove, Err(e)) => {
                    tracing::warn!(user, follower, error = %e, "remove follower failed");
                    ctx.notices.error("Error removing follower".to_string());
                }
            }
            set_busy.try_set(false);
        });
    };

    view! {
        <div class="follower-form">
            <h2>"Followers"</h2>
            <NumberField label="User ID" value=user_id on_input=move |id: i64| set_user_id.set(id) />
            <NumberField label="Follower ID" value=follower_id on_input=move |id: i64| set_follower_id.set(id) />
            <div class="follower-actions">
                <button class="primary-btn" disabled=move || busy.get() on:click=move |_| run(FollowAction::Add)>
                    "Follow"
                </button>
                <button class="cancel-btn" disabled=move || busy.get() on:click=move |_| run(FollowAction::Remove)>
                    "Unfollow"
                </button>
            </div>
        </div>
    }
}
