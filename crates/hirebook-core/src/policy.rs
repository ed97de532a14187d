//! Access policy for every resource operation.
//!
//! The policy is a single table keyed by [`Action`]. Each action requires
//! one of three levels of access: none, an administrator, or an
//! administrator or the account the operation targets. Evaluation is a pure
//! function of the actor, the action and the optional target username.

mod action;
pub use action::{Action, Rule};

mod actor;
pub use actor::{Actor, Role};

mod decision;
pub use decision::{Decision, DenyReason};

/// Decides whether `actor` may perform `action`.
///
/// `target` is the username an account-scoped action operates on. It is
/// ignored by actions that are not account scoped.
pub fn evaluate(actor: &Actor, action: Action, target: Option<&str>) -> Decision {
    let role = actor.role();

    match action.rule() {
        Rule::Public => Decision::Allow,
        Rule::Admin => match role {
            Role::Admin(_) => Decision::Allow,
            Role::Anonymous => Decision::Deny(DenyReason::LoginRequired),
            Role::User(_) => Decision::Deny(DenyReason::AdminRequired),
        },
        Rule::AdminOrSelf => match (role, target) {
            (Role::Admin(_), _) => Decision::Allow,
            (Role::Anonymous, _) => Decision::Deny(DenyReason::LoginRequired),
            (Role::User(_), None) => Decision::Deny(DenyReason::MissingTarget),
            (Role::User(username), Some(target)) if username == target => Decision::Allow,
            (Role::User(_), Some(_)) => Decision::Deny(DenyReason::NotOwner),
        },
    }
}
