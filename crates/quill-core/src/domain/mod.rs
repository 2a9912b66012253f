//! Domain entities and the ownership rules that govern them.

mod guard;

mod post;

mod user;

pub use guard::{MutationDecision, authorize_mutation};
pub use post::Post;
pub use user::User;
