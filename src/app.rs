//! Stockroom App
//!
//! Main application component: entry forms on the left, read-back panels
//! on the right.

use leptos::prelude::*;
use reactive_stores::Store;

use crate::components::{
    ActivityLog, ClockInForm, Collection, CollectionPanel, ItemForm, NoticeStack, QueryPanel, RecordPanel,
};
use crate::store::AppState;

#[component]
pub fn App() -> impl IntoView {
    // Provide the store to all children
    provide_context(Store::new(AppState::default()));

    view! {
        <div class="app-layout">
            <NoticeStack />

            <main class="main-content">
                <h1>"Stockroom"</h1>

                <div class="columns">
                    <div class="column">
                        <ItemForm />
                        <ClockInForm />
                        <RecordPanel />
                    </div>

                    <div class="column">
                        <CollectionPanel collection=Collection::Items />
                        <CollectionPanel collection=Collection::ClockIns />
                        <QueryPanel />
                    </div>
                </div>

                <ActivityLog />
            </main>
        </div>
    }
}
