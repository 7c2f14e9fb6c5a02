//! Activity Log Component
//!
//! Recent lines from the rolling logger, refreshed whenever a notice
//! appears or on demand.

use leptos::prelude::*;

use crate::store::{store_track_notices, use_app_store};

#[component]
pub fn ActivityLog() -> impl IntoView {
    let store = use_app_store();
    let (lines, set_lines) = signal(Vec::<String>::new());

    Effect::new(move |_| {
        store_track_notices(&store);
        set_lines.set(rolling_logger::recent_lines());
    });

    view! {
        <details class="panel activity-log">
            <summary>"Activity"</summary>
            <button type="button" on:click=move |_| set_lines.set(rolling_logger::recent_lines())>
                "Refresh"
            </button>
            <pre class="result">{move || lines.get().join("\n")}</pre>
        </details>
    }
}
