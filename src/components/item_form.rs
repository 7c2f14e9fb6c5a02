//! Item Form Component
//!
//! Submits a new inventory item to `POST /items`.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::api::{self, ApiClient, Transport};
use crate::components::{schedule_dismiss, LabeledInput};
use crate::models::ItemSubmission;
use crate::notice::Operation;
use crate::store::{store_push_failure, store_push_success, use_app_store, AppStore};

/// One signal per input
#[derive(Clone, Copy)]
struct ItemFields {
    name: RwSignal<String>,
    email: RwSignal<String>,
    item_name: RwSignal<String>,
    quantity: RwSignal<String>,
    expiry_date: RwSignal<String>,
}

impl ItemFields {
    fn new() -> Self {
        Self {
            name: RwSignal::new(String::new()),
            email: RwSignal::new(String::new()),
            item_name: RwSignal::new(String::new()),
            quantity: RwSignal::new(String::new()),
            expiry_date: RwSignal::new(String::new()),
        }
    }

    /// Current values, taken as typed
    fn submission(&self) -> ItemSubmission {
        ItemSubmission {
            name: self.name.get_untracked(),
            email: self.email.get_untracked(),
            item_name: self.item_name.get_untracked(),
            quantity: self.quantity.get_untracked(),
            expiry_date: self.expiry_date.get_untracked(),
        }
    }

    fn reset(&self) {
        let empty = ItemSubmission::default();
        self.name.set(empty.name);
        self.email.set(empty.email);
        self.item_name.set(empty.item_name);
        self.quantity.set(empty.quantity);
        self.expiry_date.set(empty.expiry_date);
    }
}

/// POST the form; clear it on success. Returns the queued notice id.
async fn submit_item_form<T: Transport>(
    client: &ApiClient<T>,
    fields: ItemFields,
    store: &AppStore,
) -> Option<u32> {
    let submission = fields.submission();
    match client.submit_item(&submission).await {
        Ok(()) => {
            fields.reset();
            store_push_success(store, Operation::AddItem, None)
        }
        Err(err) => Some(store_push_failure(store, Operation::AddItem, &err)),
    }
}

#[component]
pub fn ItemForm() -> impl IntoView {
    let store = use_app_store();
    let fields = ItemFields::new();

    let submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        spawn_local(async move {
            if let Some(id) = submit_item_form(&api::http_client(), fields, &store).await {
                schedule_dismiss(store, id);
            }
        });
    };

    view! {
        <form id="item-form" class="panel entry-form" on:submit=submit>
            <h2>"Add Item"</h2>
            <LabeledInput label="Name" id="name" value=fields.name />
            <LabeledInput label="Email" id="email" value=fields.email />
            <LabeledInput label="Item" id="item-name" value=fields.item_name />
            <LabeledInput label="Quantity" id="quantity" value=fields.quantity />
            <LabeledInput label="Expiry date" id="expiry-date" input_type="date" value=fields.expiry_date />
            <button type="submit">"Add Item"</button>
        </form>
    }
}
