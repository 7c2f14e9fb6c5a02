//! Clock-In Form Component

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::api::{self, ApiClient, Transport};
use crate::components::{schedule_dismiss, LabeledInput};
use crate::models::ClockInSubmission;
use crate::notice::Operation;
use crate::store::{store_push_failure, store_push_success, use_app_store, AppStore};

#[derive(Clone, Copy)]
struct ClockInFields {
    email: RwSignal<String>,
    location: RwSignal<String>,
}

impl ClockInFields {
    fn new() -> Self {
        Self {
            email: RwSignal::new(String::new()),
            location: RwSignal::new(String::new()),
        }
    }

    fn submission(&self) -> ClockInSubmission {
        ClockInSubmission {
            email: self.email.get_untracked(),
            location: self.location.get_untracked(),
        }
    }

    fn reset(&self) {
        self.email.set(String::new());
        self.location.set(String::new());
    }
}

async fn submit_clock_in_form<T: Transport>(
    client: &ApiClient<T>,
    fields: ClockInFields,
    store: &AppStore,
) -> Option<u32> {
    match client.submit_clock_in(&fields.submission()).await {
        Ok(()) => {
            fields.reset();
            store_push_success(store, Operation::RecordClockIn, None)
        }
        Err(err) => Some(store_push_failure(store, Operation::RecordClockIn, &err)),
    }
}

/// Records a clock-in via `POST /clock-in`
#[component]
pub fn ClockInForm() -> impl IntoView {
    let store = use_app_store();
    let fields = ClockInFields::new();

    let submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        spawn_local(async move {
            if let Some(id) = submit_clock_in_form(&api::http_client(), fields, &store).await {
                schedule_dismiss(store, id);
            }
        });
    };

    view! {
        <form id="clockin-form" class="panel entry-form" on:submit=submit>
            <h2>"Clock In"</h2>
            <LabeledInput label="Email" id="clockin-email" value=fields.email />
            <LabeledInput label="Location" id="location" value=fields.location />
            <button type="submit">"Clock In"</button>
        </form>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::fake::{client_replying, RecordingTransport};
    use crate::notice::NoticeLevel;
    use crate::store::{store_notices, AppState};
    use reactive_stores::Store;
    use serde_json::json;

    fn setup() -> (Owner, AppStore, ClockInFields) {
        let owner = Owner::new();
        owner.set();
        let fields = ClockInFields::new();
        fields.email.set("ada@example.com".to_string());
        fields.location.set("HQ".to_string());
        (owner, Store::new(AppState::default()), fields)
    }

    #[tokio::test]
    async fn test_success_clears_fields_and_queues_notice() {
        let (_owner, store, fields) = setup();
        let client = client_replying(200, r#"{"message":"Clock-In record created successfully"}"#);

        submit_clock_in_form(&client, fields, &store).await;

        assert_eq!(fields.submission(), ClockInSubmission::default());
        assert_eq!(client.transport().single_body(), json!({"email": "ada@example.com", "location": "HQ"}));
        let notices = store_notices(&store);
        assert_eq!(notices.len(), 1);
        assert_eq!(notices[0].level, NoticeLevel::Success);
        assert_eq!(notices[0].text, "Clock-In recorded successfully!");
    }

    #[tokio::test]
    async fn test_rejection_keeps_fields_and_shows_detail() {
        let (_owner, store, fields) = setup();
        let client = client_replying(400, r#"{"detail":"location is required"}"#);

        submit_clock_in_form(&client, fields, &store).await;

        assert_eq!(fields.location.get_untracked(), "HQ");
        assert_eq!(fields.email.get_untracked(), "ada@example.com");
        let notices = store_notices(&store);
        assert_eq!(notices.len(), 1);
        assert_eq!(notices[0].level, NoticeLevel::Error);
        assert_eq!(notices[0].text, "Failed to record Clock-In: location is required");
    }

    #[tokio::test]
    async fn test_network_failure_keeps_fields() {
        let (_owner, store, fields) = setup();
        let client = ApiClient::new(RecordingTransport::default().fail("connection refused"));

        submit_clock_in_form(&client, fields, &store).await;

        assert_eq!(fields.location.get_untracked(), "HQ");
        assert_eq!(
            store_notices(&store)[0].text,
            "Failed to record Clock-In: Network error (connection refused)"
        );
    }
}
