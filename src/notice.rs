//! User Notices
//!
//! Toast messages shown in place of blocking alerts, and the exact wording
//! for each backend operation.

use crate::error::ApiError;

/// Backend operations that report to the user
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operation {
    AddItem,
    RecordClockIn,
    FetchItems,
    FetchClockIns,
    FetchItem,
    UpdateItem,
    DeleteItem,
    FilterItems,
    AggregateItems,
    FetchClockIn,
    UpdateClockIn,
    DeleteClockIn,
    FilterClockIns,
}

impl Operation {
    fn failure_prefix(&self) -> &'static str {
        match self {
            Operation::AddItem => "Failed to add item",
            Operation::RecordClockIn => "Failed to record Clock-In",
            Operation::FetchItems => "Failed to fetch items",
            Operation::FetchClockIns => "Failed to fetch Clock-Ins",
            Operation::FetchItem => "Failed to fetch item",
            Operation::UpdateItem => "Failed to update item",
            Operation::DeleteItem => "Failed to delete item",
            Operation::FilterItems => "Failed to filter items",
            Operation::AggregateItems => "Failed to aggregate items",
            Operation::FetchClockIn => "Failed to fetch Clock-In",
            Operation::UpdateClockIn => "Failed to update Clock-In",
            Operation::DeleteClockIn => "Failed to delete Clock-In",
            Operation::FilterClockIns => "Failed to filter Clock-Ins",
        }
    }

    /// Fallback success text when the server sends no message.
    /// Reads render into a panel and have none.
    fn success_text(&self) -> Option<&'static str> {
        match self {
            Operation::AddItem => Some("Item added successfully!"),
            Operation::RecordClockIn => Some("Clock-In recorded successfully!"),
            Operation::UpdateItem => Some("Item updated successfully"),
            Operation::DeleteItem => Some("Item deleted successfully"),
            Operation::UpdateClockIn => Some("Clock-In record updated successfully"),
            Operation::DeleteClockIn => Some("Record deleted successfully"),
            _ => None,
        }
    }
}

/// `Failed to add item: <detail>` and friends
pub fn failure_message(op: Operation, err: &ApiError) -> String {
    format!("{}: {}", op.failure_prefix(), err.user_detail())
}

/// Text for a successful write.
///
/// Form submissions always use the fixed wording; updates and deletes
/// prefer what the server said.
pub fn success_message(op: Operation, server_message: Option<String>) -> Option<String> {
    match op {
        Operation::AddItem | Operation::RecordClockIn => op.success_text().map(str::to_string),
        _ => server_message
            .filter(|m| !m.trim().is_empty())
            .or_else(|| op.success_text().map(str::to_string)),
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeLevel {
    Success,
    Error,
}

impl NoticeLevel {
    pub fn css_class(&self) -> &'static str {
        match self {
            NoticeLevel::Success => "notice success",
            NoticeLevel::Error => "notice error",
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Notice {
    pub id: u32,
    pub level: NoticeLevel,
    pub text: String,
}

/// Visible notices, newest last
#[derive(Debug, Clone, Default, PartialEq)]
pub struct NoticeQueue {
    notices: Vec<Notice>,
    next_id: u32,
}

/// Older notices beyond this are dropped
pub const MAX_VISIBLE_NOTICES: usize = 5;

impl NoticeQueue {
    pub fn push(&mut self, level: NoticeLevel, text: impl Into<String>) -> u32 {
        let id = self.next_id;
        self.next_id = self.next_id.wrapping_add(1);
        self.notices.push(Notice { id, level, text: text.into() });
        if self.notices.len() > MAX_VISIBLE_NOTICES {
            let excess = self.notices.len() - MAX_VISIBLE_NOTICES;
            self.notices.drain(..excess);
        }
        id
    }

    pub fn dismiss(&mut self, id: u32) {
        self.notices.retain(|n| n.id != id);
    }

    pub fn notices(&self) -> &[Notice] {
        &self.notices
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn status(detail: Option<&str>) -> ApiError {
        ApiError::Status {
            status: 400,
            detail: detail.map(str::to_string),
        }
    }

    #[test]
    fn test_add_item_failure_message() {
        assert_eq!(
            failure_message(Operation::AddItem, &status(Some("quantity must be positive"))),
            "Failed to add item: quantity must be positive"
        );
    }

    #[test]
    fn test_clock_in_failure_without_detail() {
        let message = failure_message(Operation::RecordClockIn, &status(None));
        assert_eq!(message, "Failed to record Clock-In: Unknown error");
        assert!(message.ends_with("Unknown error"));
    }

    #[test]
    fn test_fetch_failure_messages() {
        assert_eq!(
            failure_message(Operation::FetchItems, &status(Some("X"))),
            "Failed to fetch items: X"
        );
        assert_eq!(
            failure_message(Operation::FetchClockIns, &status(None)),
            "Failed to fetch Clock-Ins: Unknown error"
        );
    }

    #[test]
    fn test_submission_success_wording_is_fixed() {
        assert_eq!(
            success_message(Operation::RecordClockIn, Some("Clock-In record created successfully".to_string())).as_deref(),
            Some("Clock-In recorded successfully!")
        );
        assert_eq!(
            success_message(Operation::AddItem, None).as_deref(),
            Some("Item added successfully!")
        );
    }

    #[test]
    fn test_write_success_prefers_server_message() {
        assert_eq!(
            success_message(Operation::DeleteItem, Some("Item deleted successfully".to_string())).as_deref(),
            Some("Item deleted successfully")
        );
        assert_eq!(
            success_message(Operation::UpdateClockIn, Some("  ".to_string())).as_deref(),
            Some("Clock-In record updated successfully")
        );
        assert_eq!(success_message(Operation::FetchItems, None), None);
    }

    #[test]
    fn test_queue_push_and_dismiss() {
        let mut queue = NoticeQueue::default();
        let first = queue.push(NoticeLevel::Success, "one");
        let second = queue.push(NoticeLevel::Error, "two");
        assert_ne!(first, second);

        queue.dismiss(first);
        assert_eq!(queue.notices().len(), 1);
        assert_eq!(queue.notices()[0].text, "two");

        // unknown id is a no-op
        queue.dismiss(99);
        assert_eq!(queue.notices().len(), 1);
    }

    #[test]
    fn test_queue_drops_oldest_beyond_limit() {
        let mut queue = NoticeQueue::default();
        for i in 0..(MAX_VISIBLE_NOTICES + 2) {
            queue.push(NoticeLevel::Success, format!("n{}", i));
        }
        assert_eq!(queue.notices().len(), MAX_VISIBLE_NOTICES);
        assert_eq!(queue.notices()[0].text, "n2");
    }
}
