//! Blocking yes/no confirmation before destructive actions.

/// Prompt shown before every delete.
pub const DELETE_PROMPT: &str = "정말 삭제하시겠습니까?";

/// A blocking yes/no decision presented to the user. Deletes ask through
/// this before any request is sent.
pub trait Confirm {
    fn confirm(&self, prompt: &str) -> bool;
}

/// Answers yes to everything.
#[derive(Debug, Clone, Copy, Default)]
pub struct AcceptAll;

impl Confirm for AcceptAll {
    fn confirm(&self, _prompt: &str) -> bool {
        true
    }
}

/// Answers no to everything.
#[derive(Debug, Clone, Copy, Default)]
pub struct DeclineAll;

impl Confirm for DeclineAll {
    fn confirm(&self, _prompt: &str) -> bool {
        false
    }
}
