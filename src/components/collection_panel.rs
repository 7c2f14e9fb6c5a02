//! Collection Panel Component
//!
//! On-demand fetch of a whole collection, shown as pretty-printed JSON.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::api::{self, pretty_json};
use crate::components::notify_failure;
use crate::notice::Operation;
use crate::store::{store_set_view, store_view, use_app_store, ResultSlot};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Collection {
    Items,
    ClockIns,
}

impl Collection {
    fn title(&self) -> &'static str {
        match self {
            Collection::Items => "Items",
            Collection::ClockIns => "Clock-Ins",
        }
    }

    fn button_label(&self) -> &'static str {
        match self {
            Collection::Items => "Get Items",
            Collection::ClockIns => "Get Clock-Ins",
        }
    }

    fn result_id(&self) -> &'static str {
        match self {
            Collection::Items => "items-result",
            Collection::ClockIns => "clockins-result",
        }
    }

    fn operation(&self) -> Operation {
        match self {
            Collection::Items => Operation::FetchItems,
            Collection::ClockIns => Operation::FetchClockIns,
        }
    }

    fn slot(&self) -> ResultSlot {
        match self {
            Collection::Items => ResultSlot::Items,
            Collection::ClockIns => ResultSlot::ClockIns,
        }
    }
}

#[component]
pub fn CollectionPanel(collection: Collection) -> impl IntoView {
    let store = use_app_store();

    let fetch = move |_| {
        spawn_local(async move {
            let client = api::http_client();
            let result = match collection {
                Collection::Items => client.get_items().await,
                Collection::ClockIns => client.get_clock_ins().await,
            };
            match result {
                Ok(body) => store_set_view(&store, collection.slot(), pretty_json(&body)),
                Err(err) => notify_failure(store, collection.operation(), &err),
            }
        });
    };

    view! {
        <section class="panel collection-panel">
            <div class="panel-header">
                <h2>{collection.title()}</h2>
                <button type="button" on:click=fetch>{collection.button_label()}</button>
            </div>
            <pre id=collection.result_id() class="result">
                {move || store_view(&store, collection.slot()).unwrap_or_default()}
            </pre>
        </section>
    }
}
