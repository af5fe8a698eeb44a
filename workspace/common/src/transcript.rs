use chrono::{DateTime, Utc};

use crate::query::QueryResponse;

/// Who produced a transcript entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Speaker {
    User,
    Bot,
}

/// Payload of one transcript entry.
#[derive(Debug, Clone, PartialEq)]
pub enum EntryContent {
    /// The user's free-text prompt, echoed verbatim.
    Prompt(String),
    /// A service reply (or the synthetic error reply).
    Reply(QueryResponse),
}

/// One user/bot exchange line in the chat view.
#[derive(Debug, Clone, PartialEq)]
pub struct TranscriptEntry {
    pub speaker: Speaker,
    pub content: EntryContent,
    pub at: DateTime<Utc>,
}

/// Discrete transitions of the chat state machine.
#[derive(Debug, Clone, PartialEq)]
pub enum ChatAction {
    /// A prompt was sent to the service.
    Submitted(String),
    /// A submission resolved, successfully or not.
    Resolved(Result<QueryResponse, String>),
}

/// Explicit chat state: an append-only transcript plus a count of
/// unresolved submissions. Overlapping submissions run independently and
/// each appends its reply whenever it resolves; `in_flight` keeps the
/// loading indicator up until the last one lands.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ChatState {
    pub transcript: Vec<TranscriptEntry>,
    pub in_flight: usize,
}

impl ChatState {
    pub fn is_busy(&self) -> bool {
        self.in_flight > 0
    }

    /// Applies one transition. Failures become a synthetic error reply and
    /// are otherwise treated exactly like a successful response.
    pub fn apply(&mut self, action: ChatAction) {
        match action {
            ChatAction::Submitted(prompt) => {
                self.transcript.push(TranscriptEntry {
                    speaker: Speaker::User,
                    content: EntryContent::Prompt(prompt),
                    at: Utc::now(),
                });
                self.in_flight += 1;
            }
            ChatAction::Resolved(result) => {
                let reply = result.unwrap_or_else(QueryResponse::failure);
                self.transcript.push(TranscriptEntry {
                    speaker: Speaker::Bot,
                    content: EntryContent::Reply(reply),
                    at: Utc::now(),
                });
                self.in_flight = self.in_flight.saturating_sub(1);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn reply_message(entry: &TranscriptEntry) -> Option<&str> {
        match &entry.content {
            EntryContent::Reply(resp) => resp.message.as_deref(),
            EntryContent::Prompt(_) => None,
        }
    }

    #[test]
    fn submission_appends_user_entry_and_sets_busy() {
        let mut state = ChatState::default();
        state.apply(ChatAction::Submitted("Sales by ShipRegion".to_string()));

        assert_eq!(state.transcript.len(), 1);
        assert_eq!(state.transcript[0].speaker, Speaker::User);
        assert_eq!(
            state.transcript[0].content,
            EntryContent::Prompt("Sales by ShipRegion".to_string())
        );
        assert!(state.is_busy());
    }

    #[test]
    fn resolution_appends_bot_entry_and_clears_busy() {
        let mut state = ChatState::default();
        state.apply(ChatAction::Submitted("q".to_string()));
        state.apply(ChatAction::Resolved(Ok(QueryResponse {
            message: Some("done".to_string()),
            ..QueryResponse::default()
        })));

        assert_eq!(state.transcript.len(), 2);
        assert_eq!(state.transcript[1].speaker, Speaker::Bot);
        assert_eq!(reply_message(&state.transcript[1]), Some("done"));
        assert!(!state.is_busy());
    }

    #[test]
    fn failed_submission_becomes_error_bubble() {
        let mut state = ChatState::default();
        state.apply(ChatAction::Submitted("q".to_string()));
        state.apply(ChatAction::Resolved(Err("timeout".to_string())));

        assert_eq!(reply_message(&state.transcript[1]), Some("❌ Error: timeout"));
        assert!(!state.is_busy());
    }

    #[test]
    fn overlapping_submissions_append_in_resolution_order() {
        let mut state = ChatState::default();
        state.apply(ChatAction::Submitted("first".to_string()));
        state.apply(ChatAction::Submitted("second".to_string()));
        assert_eq!(state.in_flight, 2);

        state.apply(ChatAction::Resolved(Ok(QueryResponse {
            message: Some("second answer".to_string()),
            ..QueryResponse::default()
        })));
        assert!(state.is_busy());

        state.apply(ChatAction::Resolved(Err("timeout".to_string())));
        assert!(!state.is_busy());

        assert_eq!(state.transcript.len(), 4);
        assert_eq!(reply_message(&state.transcript[2]), Some("second answer"));
        assert_eq!(reply_message(&state.transcript[3]), Some("❌ Error: timeout"));
    }

    #[test]
    fn stray_resolution_does_not_underflow() {
        let mut state = ChatState::default();
        state.apply(ChatAction::Resolved(Err("late".to_string())));

        assert_eq!(state.in_flight, 0);
        assert_eq!(state.transcript.len(), 1);
    }
}
