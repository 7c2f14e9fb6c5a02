//! Notice Stack Component
//!
//! Toasts for operation outcomes. Each one dismisses itself after a few
//! seconds or on click.

use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::error::ApiError;
use crate::notice::Operation;
use crate::store::{
    store_dismiss_notice, store_notices, store_push_failure, store_push_success, use_app_store, AppStore,
};

const NOTICE_TIMEOUT_MS: u32 = 4_000;

/// Remove a queued notice once its display time is up
pub fn schedule_dismiss(store: AppStore, id: u32) {
    spawn_local(async move {
        TimeoutFuture::new(NOTICE_TIMEOUT_MS).await;
        store_dismiss_notice(&store, id);
    });
}

pub fn notify_failure(store: AppStore, op: Operation, err: &ApiError) {
    let id = store_push_failure(&store, op, err);
    schedule_dismiss(store, id);
}

pub fn notify_success(store: AppStore, op: Operation, server_message: Option<String>) {
    if let Some(id) = store_push_success(&store, op, server_message) {
        schedule_dismiss(store, id);
    }
}

#[component]
pub fn NoticeStack() -> impl IntoView {
    let store = use_app_store();

    view! {
        <div class="notice-stack" role="status" aria-live="polite">
            <For
                each=move || store_notices(&store)
                key=|notice| notice.id
                children=move |notice| {
                    let id = notice.id;
                    view! {
                        <div
                            class=notice.level.css_class()
                            on:click=move |_| store_dismiss_notice(&store, id)
                        >
                            {notice.text}
                        </div>
                    }
                }
            />
        </div>
    }
}
