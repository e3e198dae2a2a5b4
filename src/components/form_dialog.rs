//! Form Dialog Component
//!
//! Modal create/edit form shared by all resource pages. The fields are
//! passed as children; title, submit state and the validation hint come
//! from the controller's dialog state.

use ewm_sync::{DialogMode, Resource};
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::state::{now, Controller};

#[component]
pub fn FormDialog<R: Resource>(controller: Controller<R>, children: Children) -> impl IntoView {
    let state = *controller.state();

    let title = move || {
        state.with(|s| match s.dialog().map(|dialog| dialog.mode) {
            Some(DialogMode::Edit { id }) => format!("Edit {} #{id}", R::NOUN.singular),
            _ => format!("New {}", R::NOUN.singular),
        })
    };
    // Incomplete drafts only disable the button, the hint says why
    let hint = move || state.with(|s| s.draft_error().map(|e| e.to_string()));

    let submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        spawn_local(async move {
            controller.submit(now()).await;
        });
    };

    view! {
        <div class="modal-backdrop" on:click=move |_| controller.cancel()>
            <form class="modal-dialog" on:click=|ev| ev.stop_propagation() on:submit=submit>
                <h2>{title}</h2>
                <div class="modal-body">{children()}</div>
                {move || hint().map(|text| view! { <p class="form-hint">{text}</p> })}
                <div class="modal-actions">
                    <button type="button" class="cancel-btn" on:click=move |_| controller.cancel()>
                        "Cancel"
                    </button>
                    <button
                        type="submit"
                        class="primary-btn"
                        disabled=move || !state.with(|s| s.can_submit())
                    >
                        {move || if state.with(|s| s.is_submitting()) { "Saving..." } else { "Save" }}
                    </button>
                </div>
            </form>
        </div>
    }
}
