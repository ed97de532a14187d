use crate::{Error, Result};

use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Decision {
    Allow,
    Deny(DenyReason),
}

/// Why a request was denied. Only for logs; callers see a generic
/// authorization failure.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DenyReason {
    LoginRequired,
    AdminRequired,
    NotOwner,
    MissingTarget,
}

impl Decision {
    pub fn is_allow(self) -> bool {
        matches!(self, Decision::Allow)
    }

    pub fn is_deny(self) -> bool {
        !self.is_allow()
    }

    /// Converts a denial into [`Error::unauthorized`]. The deny reason is
    /// not carried over.
    pub fn into_result(self) -> Result<()> {
        match self {
            Decision::Allow => Ok(()),
            Decision::Deny(_) => Err(Error::unauthorized("access denied")),
        }
    }
}

impl fmt::Display for DenyReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            DenyReason::LoginRequired => "authentication required",
            DenyReason::AdminRequired => "administrator required",
            DenyReason::NotOwner => "administrator or account owner required",
            DenyReason::MissingTarget => "no target account",
        })
    }
}
