//! The single authorization decision point for post mutation.

use uuid::Uuid;

use super::Post;

/// Outcome of an ownership check.
///
/// A denial is not an error: callers answer it with the same redirect a
/// successful mutation produces, so a caller cannot distinguish "not yours"
/// from "done".
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MutationDecision {
    Allow,
    Deny,
}

impl MutationDecision {
    pub fn is_allowed(self) -> bool {
        self == MutationDecision::Allow
    }
}

/// Decide whether `principal` may edit or delete `post`.
///
/// Allowed only when a principal is present and it matches the post's
/// author. Anonymous and mismatched principals are both denied; there is no
/// third outcome. Every mutating handler must route through this function
/// rather than comparing ids itself.
///
/// The caller resolves the post before asking; a missing post is a distinct
/// not-found condition that never reaches this check.
pub fn authorize_mutation(principal: Option<Uuid>, post: &Post) -> MutationDecision {
    match principal {
        Some(user_id) if user_id == post.author_id => MutationDecision::Allow,
        _ => MutationDecision::Deny,
    }
}
