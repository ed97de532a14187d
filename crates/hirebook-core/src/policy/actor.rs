/// The caller of an operation, as resolved by the credential verifier.
///
/// Lives for a single request and is never persisted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Actor {
    Anonymous,
    Authenticated { username: String, is_admin: bool },
}

/// The classification of an actor used by the policy table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Role<'a> {
    Anonymous,
    User(&'a str),
    Admin(&'a str),
}

impl Actor {
    pub fn anonymous() -> Actor {
        Actor::Anonymous
    }

    pub fn user(username: impl Into<String>) -> Actor {
        Actor::Authenticated {
            username: username.into(),
            is_admin: false,
        }
    }

    pub fn admin(username: impl Into<String>) -> Actor {
        Actor::Authenticated {
            username: username.into(),
            is_admin: true,
        }
    }

    /// Builds an actor from the verified credential claims, if any.
    pub fn from_claims(claims: Option<(String, bool)>) -> Actor {
        match claims {
            Some((username, is_admin)) => Actor::Authenticated { username, is_admin },
            None => Actor::Anonymous,
        }
    }

    pub fn role(&self) -> Role<'_> {
        match self {
            Actor::Anonymous => Role::Anonymous,
            Actor::Authenticated {
                username,
                is_admin: true,
            } => Role::Admin(username),
            Actor::Authenticated { username, .. } => Role::User(username),
        }
    }

    pub fn username(&self) -> Option<&str> {
        match self {
            Actor::Anonymous => None,
            Actor::Authenticated { username, .. } => Some(username),
        }
    }
}
