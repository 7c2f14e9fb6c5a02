//! Global Application State Store
//!
//! Uses Leptos reactive_stores for fine-grained reactivity.

use leptos::prelude::*;
use reactive_stores::Store;

use crate::error::ApiError;
use crate::notice::{failure_message, success_message, Notice, NoticeLevel, NoticeQueue, Operation};

/// Display regions that show pretty-printed response bodies
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ResultSlot {
    Items,
    ClockIns,
    Record,
    Query,
}

/// Global application state with field-level reactivity
#[derive(Clone, Debug, Default, Store)]
pub struct AppState {
    /// Toasts currently on screen
    pub notices: NoticeQueue,
    /// Last `GET /items` body
    pub items_view: Option<String>,
    /// Last `GET /clock-in` body
    pub clock_ins_view: Option<String>,
    /// Last single-record lookup
    pub record_view: Option<String>,
    /// Last filter or aggregate result
    pub query_view: Option<String>,
}

/// Type alias for the store
pub type AppStore = Store<AppState>;

/// Get the app store from context
pub fn use_app_store() -> AppStore {
    expect_context::<AppStore>()
}

// ========================
// Store Helper Functions
// ========================

/// Queue a notice, returning its id
pub fn store_push_notice(store: &AppStore, level: NoticeLevel, text: String) -> u32 {
    store.notices().write().push(level, text)
}

/// Queue the failure notice for `op`
pub fn store_push_failure(store: &AppStore, op: Operation, err: &ApiError) -> u32 {
    store_push_notice(store, NoticeLevel::Error, failure_message(op, err))
}

/// Queue the success notice for `op`, if it has one
pub fn store_push_success(store: &AppStore, op: Operation, server_message: Option<String>) -> Option<u32> {
    let text = success_message(op, server_message)?;
    log::info!("{}", text);
    Some(store_push_notice(store, NoticeLevel::Success, text))
}

pub fn store_dismiss_notice(store: &AppStore, id: u32) {
    store.notices().write().dismiss(id);
}

/// Visible notices (tracked)
pub fn store_notices(store: &AppStore) -> Vec<Notice> {
    store.notices().read().notices().to_vec()
}

/// Subscribe the current effect to notice changes without reading them
pub fn store_track_notices(store: &AppStore) {
    store.notices().track();
}

/// Replace the text shown in a result region
pub fn store_set_view(store: &AppStore, slot: ResultSlot, text: String) {
    match slot {
        ResultSlot::Items => *store.items_view().write() = Some(text),
        ResultSlot::ClockIns => *store.clock_ins_view().write() = Some(text),
        ResultSlot::Record => *store.record_view().write() = Some(text),
        ResultSlot::Query => *store.query_view().write() = Some(text),
    }
}

pub fn store_clear_view(store: &AppStore, slot: ResultSlot) {
    match slot {
        ResultSlot::Items => *store.items_view().write() = None,
        ResultSlot::ClockIns => *store.clock_ins_view().write() = None,
        ResultSlot::Record => *store.record_view().write() = None,
        ResultSlot::Query => *store.query_view().write() = None,
    }
}

/// Text of a result region (tracked)
pub fn store_view(store: &AppStore, slot: ResultSlot) -> Option<String> {
    match slot {
        ResultSlot::Items => store.items_view().get(),
        ResultSlot::ClockIns => store.clock_ins_view().get(),
        ResultSlot::Record => store.record_view().get(),
        ResultSlot::Query => store.query_view().get(),
    }
}
