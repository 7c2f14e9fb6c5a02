//! Record Panel Component
//!
//! Look up, update or delete a single item or clock-in by id.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::api::{self, pretty_json};
use crate::components::{notify_failure, notify_success, Collection, LabeledInput};
use crate::models::{ClockInUpdate, ItemUpdate};
use crate::notice::Operation;
use crate::store::{store_clear_view, store_set_view, store_view, use_app_store, ResultSlot};

#[component]
pub fn RecordPanel() -> impl IntoView {
    let store = use_app_store();
    let kind = RwSignal::new(Collection::Items);
    let record_id = RwSignal::new(String::new());

    // Update fields; blank means unchanged
    let name = RwSignal::new(String::new());
    let email = RwSignal::new(String::new());
    let item_name = RwSignal::new(String::new());
    let quantity = RwSignal::new(String::new());
    let expiry_date = RwSignal::new(String::new());
    let location = RwSignal::new(String::new());

    let clear_update_fields = move || {
        for field in [name, email, item_name, quantity, expiry_date, location] {
            field.set(String::new());
        }
    };

    let lookup = move |_| {
        let id = record_id.get_untracked();
        if id.trim().is_empty() { return; }
        let kind = kind.get_untracked();

        spawn_local(async move {
            let client = api::http_client();
            let (op, result) = match kind {
                Collection::Items => (
                    Operation::FetchItem,
                    client.get_item(&id).await.map(|record| pretty_json(&record)),
                ),
                Collection::ClockIns => (
                    Operation::FetchClockIn,
                    client.get_clock_in(&id).await.map(|record| pretty_json(&record)),
                ),
            };
            match result {
                Ok(text) => store_set_view(&store, ResultSlot::Record, text),
                Err(err) => notify_failure(store, op, &err),
            }
        });
    };

    let update = move |_| {
        let id = record_id.get_untracked();
        if id.trim().is_empty() { return; }
        let kind = kind.get_untracked();
        let item_update = ItemUpdate::from_form(
            &name.get_untracked(),
            &email.get_untracked(),
            &item_name.get_untracked(),
            &quantity.get_untracked(),
            &expiry_date.get_untracked(),
        );
        let clock_in_update = ClockInUpdate::from_form(&email.get_untracked(), &location.get_untracked());

        spawn_local(async move {
            let client = api::http_client();
            let (op, result) = match kind {
                Collection::Items => (Operation::UpdateItem, client.update_item(&id, &item_update).await),
                Collection::ClockIns => (Operation::UpdateClockIn, client.update_clock_in(&id, &clock_in_update).await),
            };
            match result {
                Ok(message) => {
                    clear_update_fields();
                    notify_success(store, op, message);
                }
                Err(err) => notify_failure(store, op, &err),
            }
        });
    };

    let delete = move |_| {
        let id = record_id.get_untracked();
        if id.trim().is_empty() { return; }
        let kind = kind.get_untracked();

        spawn_local(async move {
            let client = api::http_client();
            let (op, result) = match kind {
                Collection::Items => (Operation::DeleteItem, client.delete_item(&id).await),
                Collection::ClockIns => (Operation::DeleteClockIn, client.delete_clock_in(&id).await),
            };
            match result {
                Ok(message) => {
                    record_id.set(String::new());
                    store_clear_view(&store, ResultSlot::Record);
                    notify_success(store, op, message);
                }
                Err(err) => notify_failure(store, op, &err),
            }
        });
    };

    view! {
        <section class="panel record-panel">
            <div class="panel-header">
                <h2>"Record"</h2>
                <select on:change=move |ev| {
                    let next = if event_target_value(&ev) == "clock-in" {
                        Collection::ClockIns
                    } else {
                        Collection::Items
                    };
                    kind.set(next);
                    store_clear_view(&store, ResultSlot::Record);
                }>
                    <option value="items" selected=true>"Item"</option>
                    <option value="clock-in">"Clock-In"</option>
                </select>
            </div>

            <LabeledInput label="Record id" id="record-id" value=record_id placeholder="e.g. 65f0c0ffee..." />
            <div class="button-row">
                <button type="button" on:click=lookup>"Fetch"</button>
                <button type="button" class="danger" on:click=delete>"Delete"</button>
            </div>

            <details class="update-fields">
                <summary>"Update fields"</summary>
                <Show
                    when=move || kind.get() == Collection::Items
                    fallback=move || view! {
                        <LabeledInput label="Email" id="update-clockin-email" input_type="email" value=email />
                        <LabeledInput label="Location" id="update-location" value=location />
                    }
                >
                    <LabeledInput label="Name" id="update-name" value=name />
                    <LabeledInput label="Email" id="update-email" input_type="email" value=email />
                    <LabeledInput label="Item" id="update-item-name" value=item_name />
                    <LabeledInput label="Quantity" id="update-quantity" input_type="number" value=quantity />
                    <LabeledInput label="Expiry date" id="update-expiry-date" input_type="date" value=expiry_date />
                </Show>
                <button type="button" on:click=update>"Update"</button>
            </details>

            <pre id="record-result" class="result">
                {move || store_view(&store, ResultSlot::Record).unwrap_or_default()}
            </pre>
        </section>
    }
}
