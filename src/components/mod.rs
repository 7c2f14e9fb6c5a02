//! UI Components
//!
//! Reusable Leptos components.

mod activity_log;
mod clock_in_form;
mod collection_panel;
mod item_form;
mod labeled_input;
mod notice_stack;
mod query_panel;
mod record_panel;

pub use activity_log::ActivityLog;
pub use clock_in_form::ClockInForm;
pub use collection_panel::{Collection, CollectionPanel};
pub use item_form::ItemForm;
pub use labeled_input::LabeledInput;
pub use notice_stack::{notify_failure, notify_success, schedule_dismiss, NoticeStack};
pub use query_panel::QueryPanel;
pub use record_panel::RecordPanel;
