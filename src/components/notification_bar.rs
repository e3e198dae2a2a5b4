//! Notification Bar Component
//!
//! Shows the single current notification. Auto-hide is scheduled by
//! [`Notices`](crate::state::Notices); the close button hides it at once.

use leptos::prelude::*;

use crate::context::AppContext;

#[component]
pub fn NotificationBar() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext should be provided");
    let notice = ctx.notices.state();

    view! {
        <Show when=move || notice.with(|n| n.visible)>
            <div
                class=move || notice.with(|n| format!("notification {}", n.severity.css_class()))
                role="status"
            >
                <span class="notification-message">{move || notice.with(|n| n.message.clone())}</span>
                <button class="notification-close" on:click=move |_| ctx.notices.dismiss()>
                    "×"
                </button>
            </div>
        </Show>
    }
}
