//! Click event passed from the redirect path to the background worker.

/// An in-memory click notification.
///
/// Created in the redirect resolver after the alias is known to be active,
/// sent over a bounded channel with `try_send`, and consumed by
/// [`crate::domain::click_worker::run_click_worker`]. The channel hop keeps
/// statistics writes entirely off the redirect critical path: a full queue
/// or a dead worker costs a counter increment, never the redirect.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ClickEvent {
    pub alias_id: i64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_click_event_is_copyable_across_task_boundaries() {
        let event = ClickEvent { alias_id: 42 };
        let copied = event;
        assert_eq!(copied, event);
        assert_eq!(copied.alias_id, 42);
    }
}
