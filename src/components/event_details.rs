//! Event Details Component
//!
//! Modal with the full event, its description rendered from Markdown and
//! the participation requests, which the initiator can confirm or reject.

use ewm_client::dto::RequestStatusUpdate;
use ewm_client::models::{Event, ParticipationRequest, RequestStatus};
use ewm_client::services::events;
use ewm_sync::Notify;
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::context::AppContext;
use crate::markdown::render_markdown;

#[component]
pub fn EventDetails(
    /// Record from the listing, shown until a fresh copy arrives
    event: Event,
    #[prop(into)] on_close: Callback<()>,
) -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext should be provided");
    let event_id = event.id;
    let initiator_id = event.initiator.id;
    let (current, set_current) = signal(event);
    let (requests, set_requests) = signal(Vec::<ParticipationRequest>::new());

    let load_requests = move || {
        spawn_local(async move {
            match events::requests(&ctx.api, initiator_id, event_id).await {
                Ok(list) => {
                    set_requests.try_set(list);
                }
                Err(e) => {
                    tracing::warn!(event_id, error = %e, "loading requests failed");
                    ctx.notices.error("Error loading requests".to_string());
                }
            }
        });
    };

    Effect::new(move |_| {
        spawn_local(async move {
            // Unpublished events are not visible on the public endpoint
            match events::get(&ctx.api, event_id).await {
                Ok(fresh) => {
                    set_current.try_set(fresh);
                }
                Err(e) if e.is_not_found() => tracing::debug!(event_id, "event not public yet"),
                Err(e) => tracing::warn!(event_id, error = %e, "refreshing event failed"),
            }
        });
        load_requests();
    });

    let decide = move |request_id: i64, status: RequestStatus| {
        spawn_local(async move {
            let update = RequestStatusUpdate {
                request_ids: vec![request_id],
                status,
            };
            match events::update_requests(&ctx.api, initiator_id, event_id, &update).await {
                Ok(_) => {
                    let verb = if status == RequestStatus::Confirmed { "confirmed" } else { "rejected" };
                    ctx.notices.success(format!("Request {verb} successfully"));
                    load_requests();
                }
                Err(e) => {
                    tracing::warn!(event_id, request_id, error = %e, "updating request failed");
                    ctx.notices.error("Error updating request".to_string());
                }
            }
        });
    };

    view! {
        <div class="modal-backdrop" on:click=move |_| on_close.run(())>
            <div class="modal-dialog wide" on:click=|ev| ev.stop_propagation()>
                <header class="modal-header">
                    <h2>{move || current.with(|e| e.title.clone())}</h2>
                    <button class="cancel-btn" on:click=move |_| on_close.run(())>"×"</button>
                </header>
                <p class="event-annotation">{move || current.with(|e| e.annotation.clone())}</p>
                <div
                    class="event-description markdown"
                    inner_html=move || current.with(|e| render_markdown(e.description.as_deref().unwrap_or("")))
                ></div>
                <dl class="event-meta">
                    <dt>"Date"</dt>
                    <dd>{move || current.with(|e| e.event_date.clone())}</dd>
                    <dt>"State"</dt>
                    <dd>{move || current.with(|e| e.state.clone().unwrap_or_default())}</dd>
                    <dt>"Views"</dt>
                    <dd>{move || current.with(|e| e.views.unwrap_or(0))}</dd>
                    <dt>"Location"</dt>
                    <dd>{move || current.with(|e| {
                        e.location.map(|l| format!("{:.5}, {:.5}", l.lat, l.lon)).unwrap_or_default()
                    })}</dd>
                </dl>

                <h3>"Participation requests"</h3>
                <Show
                    when=move || requests.with(|r| !r.is_empty())
                    fallback=|| view! { <p class="empty">"No requests"</p> }
                >
                    <table class="data-table">
                        <thead>
                            <tr>
                                <th>"ID"</th>
                                <th>"Requester"</th>
                                <th>"Created"</th>
                                <th>"Status"</th>
                                <th></th>
                            </tr>
                        </thead>
                        <tbody>
                            {move || requests.get().into_iter().map(|request| {
                                let id = request.id;
                                let pending = request.status == RequestStatus::Pending;
                                view! {
                                    <tr>
                                        <td>{id}</td>
                                        <td>{request.requester}</td>
                                        <td>{request.created}</td>
                                        <td>{status_label(request.status)}</td>
                                        <td class="row-actions">
                                            <Show when=move || pending>
                                                <button class="confirm-btn" on:click=move |_| decide(id, RequestStatus::Confirmed)>
                                                    "Confirm"
                                                </button>
                                                <button class="delete-btn" on:click=move |_| decide(id, RequestStatus::Rejected)>
                                                    "Reject"
                                                </button>
                                            </Show>
                                        </td>
                                    </tr>
                                }
                            }).collect_view()}
                        </tbody>
                    </table>
                </Show>
            </div>
        </div>
    }
}

fn status_label(status: RequestStatus) -> &'static str {
    match status {
        RequestStatus::Pending => "Pending",
        RequestStatus::Confirmed => "Confirmed",
        RequestStatus::Rejected => "Rejected",
        RequestStatus::Canceled => "Canceled",
    }
}
