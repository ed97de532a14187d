use crate::{Error, Result};

use std::{fmt, str::FromStr};

/// A logical operation subject to the access policy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Action {
    ListOrganizations,
    GetOrganization,
    CreateOrganization,
    UpdateOrganization,
    DeleteOrganization,

    ListPostings,
    GetPosting,
    CreatePosting,
    UpdatePosting,
    DeletePosting,

    CreateAccount,
    ListAccounts,
    GetAccount,
    UpdateAccount,
    DeleteAccount,

    /// Grant or revoke an account's administrator role.
    ChangeAccountRole,

    /// Apply to a posting on behalf of an account.
    ApplyToPosting,
}

/// The access an action requires.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Rule {
    /// Anyone, including anonymous callers.
    Public,

    /// Administrators only.
    Admin,

    /// Administrators, or the authenticated account the action targets.
    AdminOrSelf,
}

const NAMES: &[(Action, &str)] = &[
    (Action::ListOrganizations, "list-organizations"),
    (Action::GetOrganization, "get-organization"),
    (Action::CreateOrganization, "create-organization"),
    (Action::UpdateOrganization, "update-organization"),
    (Action::DeleteOrganization, "delete-organization"),
    (Action::ListPostings, "list-postings"),
    (Action::GetPosting, "get-posting"),
    (Action::CreatePosting, "create-posting"),
    (Action::UpdatePosting, "update-posting"),
    (Action::DeletePosting, "delete-posting"),
    (Action::CreateAccount, "create-account"),
    (Action::ListAccounts, "list-accounts"),
    (Action::GetAccount, "get-account"),
    (Action::UpdateAccount, "update-account"),
    (Action::DeleteAccount, "delete-account"),
    (Action::ChangeAccountRole, "change-account-role"),
    (Action::ApplyToPosting, "apply-to-posting"),
];

impl Action {
    pub const ALL: [Action; 17] = [
        Action::ListOrganizations,
        Action::GetOrganization,
        Action::CreateOrganization,
        Action::UpdateOrganization,
        Action::DeleteOrganization,
        Action::ListPostings,
        Action::GetPosting,
        Action::CreatePosting,
        Action::UpdatePosting,
        Action::DeletePosting,
        Action::CreateAccount,
        Action::ListAccounts,
        Action::GetAccount,
        Action::UpdateAccount,
        Action::DeleteAccount,
        Action::ChangeAccountRole,
        Action::ApplyToPosting,
    ];

    pub fn rule(self) -> Rule {
        use Action::*;

        match self {
            ListOrganizations | GetOrganization | ListPostings | GetPosting => Rule::Public,
            CreateOrganization | UpdateOrganization | DeleteOrganization => Rule::Admin,
            CreatePosting | UpdatePosting | DeletePosting => Rule::Admin,
            CreateAccount | ListAccounts | ChangeAccountRole => Rule::Admin,
            GetAccount | UpdateAccount | DeleteAccount | ApplyToPosting => Rule::AdminOrSelf,
        }
    }

    /// Returns true when the action operates on a specific account and needs
    /// a target username to be evaluated.
    pub fn is_account_scoped(self) -> bool {
        self.rule() == Rule::AdminOrSelf
    }

    pub fn as_str(self) -> &'static str {
        NAMES
            .iter()
            .find(|(action, _)| *action == self)
            .map(|(_, name)| *name)
            .unwrap_or("unknown")
    }
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Action {
    type Err = Error;

    fn from_str(s: &str) -> Result<Action> {
        NAMES
            .iter()
            .find(|(_, name)| *name == s)
            .map(|(action, _)| *action)
            .ok_or_else(|| err!("unknown action `{s}`"))
    }
}
