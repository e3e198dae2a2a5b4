//! Events Page
//!
//! Filter bar, event cards and the create/edit dialog. Date and time are
//! edited in separate inputs and only combined when the draft is sent.

use ewm_client::models::{Category, Event};
use ewm_client::PaidFilter;
use ewm_sync::resources::{Categories, EventDraft, Events};
use ewm_sync::ResourceState;
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::components::{
    CheckboxField, DecimalField, EventDetails, FormDialog, NumberField, TextAreaField, TextField,
};
use crate::context::AppContext;
use crate::state::{Controller, SignalCell};

#[component]
pub fn EventsPage() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext should be provided");
    let events = ctx.controller::<Events>();
    let categories = ctx.controller::<Categories>();
    let state = *events.state();
    let (details, set_details) = signal::<Option<Event>>(None);

    // Categories feed the filter chips and the form select
    Effect::new(move |_| {
        spawn_local(async move {
            categories.load().await;
            events.load().await;
        });
    });

    view! {
        <section class="page">
            <header class="page-header">
                <h1>"Events"</h1>
                <button
                    class="primary-btn"
                    on:click=move |_| events.open_create_with(EventDraft::for_user(ctx.acting_user_id()))
                >
                    "New event"
                </button>
            </header>

            <FilterBar events=events categories=*categories.state() />

            <Show when=move || state.with(|s| s.is_loading())>
                <p class="loading">"Loading..."</p>
            </Show>

            <div class="event-grid">
                {move || state.records().into_iter().map(|event| {
                    let for_edit = event.clone();
                    let for_details = event.clone();
                    view! {
                        <EventCard event=event>
                            <button class="edit-btn" on:click=move |_| events.open_edit(&for_edit)>
                                "Edit"
                            </button>
                            <button class="details-btn" on:click=move |_| set_details.set(Some(for_details.clone()))>
                                "Details"
                            </button>
                        </EventCard>
                    }
                }).collect_view()}
            </div>

            <Show when=move || state.with(|s| s.is_dialog_open())>
                <FormDialog controller=events>
                    <EventFields state=state categories=*categories.state() />
                </FormDialog>
            </Show>

            {move || details.get().map(|event| view! {
                <EventDetails event=event on_close=move |_| set_details.set(None) />
            })}
        </section>
    }
}

// ============================================================================
// Filter bar
// ============================================================================

#[component]
fn FilterBar(events: Controller<Events>, categories: SignalCell<ResourceState<Categories>>) -> impl IntoView {
    let state = *events.state();
    let apply = move || {
        spawn_local(async move {
            events.load().await;
        });
    };

    view! {
        <form class="filter-bar" on:submit=move |ev: web_sys::SubmitEvent| {
            ev.prevent_default();
            apply();
        }>
            <input
                type="search"
                placeholder="Search by title..."
                prop:value=move || state.with(|s| s.filters().title.clone())
                on:input=move |ev| {
                    let title = event_target_value(&ev);
                    state.update(|s| s.filters_mut().title = title);
                }
            />
            <select
                prop:value=move || state.with(|s| s.filters().paid.as_param().unwrap_or("").to_string())
                on:change=move |ev| {
                    let paid = PaidFilter::from_param(&event_target_value(&ev));
                    state.update(|s| s.filters_mut().paid = paid);
                    apply();
                }
            >
                {PaidFilter::ALL.into_iter().map(|paid| view! {
                    <option value=paid.as_param().unwrap_or("")>{paid.label()}</option>
                }).collect_view()}
            </select>
            <div class="category-chips">
                {move || categories.records().into_iter().map(|category| {
                    let id = category.id;
                    let selected = move || state.with(|s| s.filters().categories.contains(&id));
                    view! {
                        <button
                            type="button"
                            class=move || if selected() { "chip active" } else { "chip" }
                            on:click=move |_| {
                                state.update(|s| s.filters_mut().toggle_category(id));
                                apply();
                            }
                        >
                            {category.name}
                        </button>
                    }
                }).collect_view()}
            </div>
            <button type="submit" class="primary-btn">"Search"</button>
        </form>
    }
}

// ============================================================================
// Card
// ============================================================================

#[component]
fn EventCard(event: Event, children: Children) -> impl IntoView {
    let limit = match event.participant_limit {
        Some(0) | None => "unlimited".to_string(),
        Some(limit) => limit.to_string(),
    };
    let confirmed = event.confirmed_requests.unwrap_or(0);

    view! {
        <article class="event-card">
            <header>
                <h3>{event.title}</h3>
                <span class="event-state">{event.state.unwrap_or_default()}</span>
            </header>
            <p class="event-annotation">{event.annotation}</p>
            <dl class="event-meta">
                <dt>"Category"</dt>
                <dd>{event.category.name}</dd>
                <dt>"Date"</dt>
                <dd>{event.event_date}</dd>
                <dt>"Initiator"</dt>
                <dd>{event.initiator.name}</dd>
                <dt>"Participants"</dt>
                <dd>{format!("{confirmed} / {limit}")}</dd>
            </dl>
            <span class=if event.paid { "badge paid" } else { "badge free" }>
                {if event.paid { "Paid" } else { "Free" }}
            </span>
            <div class="card-actions">{children()}</div>
        </article>
    }
}

// ============================================================================
// Form
// ============================================================================

fn draft_text(state: SignalCell<ResourceState<Events>>, get: fn(&EventDraft) -> &String) -> Signal<String> {
    Signal::derive(move || state.draft_field(|d| get(d).clone()))
}

#[component]
fn EventFields(
    state: SignalCell<ResourceState<Events>>,
    categories: SignalCell<ResourceState<Categories>>,
) -> impl IntoView {
    view! {
        <TextField
            label="Title"
            value=draft_text(state, |d| &d.title)
            on_input=move |v: String| state.edit_draft(|d| d.title = v)
        />
        <TextAreaField
            label="Annotation"
            value=draft_text(state, |d| &d.annotation)
            on_input=move |v: String| state.edit_draft(|d| d.annotation = v)
        />
        <TextAreaField
            label="Description (Markdown)"
            value=draft_text(state, |d| &d.description)
            on_input=move |v: String| state.edit_draft(|d| d.description = v)
        />
        <label class="form-field">
            <span class="form-label">"Category"</span>
            <select
                prop:value=move || state.draft_field(|d| d.category_id.map(|id| id.to_string()).unwrap_or_default())
                on:change=move |ev| {
                    let category_id = event_target_value(&ev).parse::<i64>().ok();
                    state.edit_draft(|d| d.category_id = category_id);
                }
            >
                <option value="">"Select a category"</option>
                {move || categories.records().into_iter().map(|Category { id, name }| view! {
                    <option value=id.to_string()>{name}</option>
                }).collect_view()}
            </select>
        </label>
        <div class="form-row">
            <TextField
                label="Date"
                input_type="date"
                value=draft_text(state, |d| &d.date)
                on_input=move |v: String| state.edit_draft(|d| d.date = v)
            />
            <TextField
                label="Time"
                input_type="time"
                value=draft_text(state, |d| &d.time)
                on_input=move |v: String| state.edit_draft(|d| d.time = v)
            />
        </div>
        <NumberField
            label="Participant limit (0 = unlimited)"
            value=Signal::derive(move || state.draft_field(|d| i64::from(d.participant_limit)))
            on_input=move |v: i64| state.edit_draft(|d| d.participant_limit = i32::try_from(v).unwrap_or(i32::MAX))
        />
        <div class="form-row">
            <CheckboxField
                label="Paid"
                checked=Signal::derive(move || state.draft_field(|d| d.paid))
                on_change=move |v: bool| state.edit_draft(|d| d.paid = v)
            />
            <CheckboxField
                label="Request moderation"
                checked=Signal::derive(move || state.draft_field(|d| d.request_moderation))
                on_change=move |v: bool| state.edit_draft(|d| d.request_moderation = v)
            />
        </div>
        <div class="form-row">
            <DecimalField
                label="Latitude"
                value=Signal::derive(move || state.draft_field(|d| d.location.lat))
                on_input=move |v: f64| state.edit_draft(|d| d.location.lat = v)
            />
            <DecimalField
                label="Longitude"
                value=Signal::derive(move || state.draft_field(|d| d.location.lon))
                on_input=move |v: f64| state.edit_draft(|d| d.location.lon = v)
            />
        </div>
    }
}
