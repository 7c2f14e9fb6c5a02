//! Query Panel Component
//!
//! Filtered views and the per-owner item count.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::api::{self, pretty_json};
use crate::components::{notify_failure, LabeledInput};
use crate::models::{ClockInFilter, ItemFilter};
use crate::notice::Operation;
use crate::store::{store_set_view, store_view, use_app_store, AppStore, ResultSlot};

fn show_query_result(store: AppStore, op: Operation, result: crate::error::ApiResult<serde_json::Value>) {
    match result {
        Ok(body) => store_set_view(&store, ResultSlot::Query, pretty_json(&body)),
        Err(err) => notify_failure(store, op, &err),
    }
}

#[component]
pub fn QueryPanel() -> impl IntoView {
    let store = use_app_store();

    let item_email = RwSignal::new(String::new());
    let item_expiry = RwSignal::new(String::new());
    let item_inserted = RwSignal::new(String::new());
    let item_quantity = RwSignal::new(String::new());
    let item_id = RwSignal::new(String::new());

    let clock_in_email = RwSignal::new(String::new());
    let clock_in_location = RwSignal::new(String::new());
    let clock_in_since = RwSignal::new(String::new());

    let filter_items = move |_| {
        let filter = ItemFilter {
            email: item_email.get_untracked(),
            expiry_date: item_expiry.get_untracked(),
            insert_date: item_inserted.get_untracked(),
            quantity: item_quantity.get_untracked(),
            id: item_id.get_untracked(),
        };
        spawn_local(async move {
            let result = api::http_client().filter_items(&filter).await;
            show_query_result(store, Operation::FilterItems, result);
        });
    };

    let aggregate_items = move |_| {
        spawn_local(async move {
            let result = api::http_client().aggregate_items().await;
            show_query_result(store, Operation::AggregateItems, result);
        });
    };

    let filter_clock_ins = move |_| {
        let filter = ClockInFilter {
            email: clock_in_email.get_untracked(),
            location: clock_in_location.get_untracked(),
            insert_datetime: clock_in_since.get_untracked(),
        };
        spawn_local(async move {
            let result = api::http_client().filter_clock_ins(&filter).await;
            show_query_result(store, Operation::FilterClockIns, result);
        });
    };

    view! {
        <section class="panel query-panel">
            <h2>"Search"</h2>

            <fieldset>
                <legend>"Items"</legend>
                <LabeledInput label="Email" id="filter-item-email" input_type="email" value=item_email />
                <LabeledInput label="Expires on/after" id="filter-expiry" input_type="date" value=item_expiry />
                <LabeledInput label="Added on/after" id="filter-inserted" input_type="date" value=item_inserted />
                <LabeledInput label="Quantity at least" id="filter-quantity" input_type="number" value=item_quantity />
                <LabeledInput label="Id" id="filter-item-id" value=item_id />
                <div class="button-row">
                    <button type="button" on:click=filter_items>"Filter Items"</button>
                    <button type="button" on:click=aggregate_items>"Count by Email"</button>
                </div>
            </fieldset>

            <fieldset>
                <legend>"Clock-Ins"</legend>
                <LabeledInput label="Email" id="filter-clockin-email" input_type="email" value=clock_in_email />
                <LabeledInput label="Location" id="filter-location" value=clock_in_location />
                <LabeledInput
                    label="Since"
                    id="filter-since"
                    value=clock_in_since
                    placeholder="YYYY-MM-DD HH:MM:SS"
                />
                <button type="button" on:click=filter_clock_ins>"Filter Clock-Ins"</button>
            </fieldset>

            <pre id="query-result" class="result">
                {move || store_view(&store, ResultSlot::Query).unwrap_or_default()}
            </pre>
        </section>
    }
}
