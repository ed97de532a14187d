use crate::{
    Account, Db, NewAccount, NewOrganization, NewPosting, Organization, OrganizationFilter,
    Posting, PostingFilter, Result,
};

use hirebook_core::{
    policy::{self, Action, Actor, Decision, Role},
    stmt::Assignments,
};

/// Runs resource operations on behalf of one actor.
///
/// Every operation is checked against the access policy before any
/// statement is executed. A denied operation fails with
/// [`Error::unauthorized`](crate::Error::unauthorized), which is never
/// reported as a missing record.
#[derive(Debug, Clone)]
pub struct Session<'a> {
    db: &'a Db,
    actor: Actor,
}

impl<'a> Session<'a> {
    pub fn new(db: &'a Db, actor: Actor) -> Session<'a> {
        Session { db, actor }
    }

    pub fn actor(&self) -> &Actor {
        &self.actor
    }

    fn authorize(&self, action: Action, target: Option<&str>) -> Result<()> {
        let decision = policy::evaluate(&self.actor, action, target);

        if let Decision::Deny(reason) = decision {
            tracing::warn!(
                %action,
                %reason,
                actor = self.actor.username().unwrap_or("<anonymous>"),
                target,
                "access denied"
            );
        }

        decision.into_result()
    }

    pub async fn list_organizations(&self, filter: &OrganizationFilter) -> Result<Vec<Organization>> {
        self.authorize(Action::ListOrganizations, None)?;
        Organization::list(self.db, filter).await
    }

    pub async fn get_organization(&self, handle: &str) -> Result<Organization> {
        self.authorize(Action::GetOrganization, None)?;
        Organization::get(self.db, handle).await
    }

    pub async fn create_organization(&self, new: NewOrganization) -> Result<Organization> {
        self.authorize(Action::CreateOrganization, None)?;
        Organization::create(self.db, new).await
    }

    pub async fn update_organization(
        &self,
        handle: &str,
        assignments: &Assignments,
    ) -> Result<Organization> {
        self.authorize(Action::UpdateOrganization, None)?;
        Organization::update(self.db, handle, assignments).await
    }

    pub async fn remove_organization(&self, handle: &str) -> Result<()> {
        self.authorize(Action::DeleteOrganization, None)?;
        Organization::remove(self.db, handle).await
    }

    pub async fn list_postings(&self, filter: &PostingFilter) -> Result<Vec<Posting>> {
        self.authorize(Action::ListPostings, None)?;
        Posting::list(self.db, filter).await
    }

    pub async fn get_posting(&self, id: i64) -> Result<Posting> {
        self.authorize(Action::GetPosting, None)?;
        Posting::get(self.db, id).await
    }

    pub async fn create_posting(&self, new: NewPosting) -> Result<Posting> {
        self.authorize(Action::CreatePosting, None)?;
        Posting::create(self.db, new).await
    }

    pub async fn update_posting(&self, id: i64, assignments: &Assignments) -> Result<Posting> {
        self.authorize(Action::UpdatePosting, None)?;
        Posting::update(self.db, id, assignments).await
    }

    pub async fn remove_posting(&self, id: i64) -> Result<()> {
        self.authorize(Action::DeletePosting, None)?;
        Posting::remove(self.db, id).await
    }

    pub async fn register_account(&self, new: NewAccount) -> Result<Account> {
        self.authorize(Action::CreateAccount, None)?;
        Account::register(self.db, new).await
    }

    pub async fn list_accounts(&self) -> Result<Vec<Account>> {
        self.authorize(Action::ListAccounts, None)?;
        Account::list(self.db).await
    }

    pub async fn get_account(&self, username: &str) -> Result<Account> {
        self.authorize(Action::GetAccount, Some(username))?;
        Account::get(self.db, username).await
    }

    /// Updates an account. Owners may edit their profile; only an
    /// administrator may change the role.
    pub async fn update_account(&self, username: &str, assignments: &Assignments) -> Result<Account> {
        self.authorize(Action::UpdateAccount, Some(username))?;

        if Account::changes_role(assignments) {
            self.authorize(Action::ChangeAccountRole, Some(username))?;
        }

        match self.actor.role() {
            Role::Admin(_) => Account::update(self.db, username, assignments).await,
            _ => Account::update_profile(self.db, username, assignments).await,
        }
    }

    pub async fn remove_account(&self, username: &str) -> Result<()> {
        self.authorize(Action::DeleteAccount, Some(username))?;
        Account::remove(self.db, username).await
    }

    pub async fn apply_to_posting(&self, username: &str, posting_id: i64) -> Result<i64> {
        self.authorize(Action::ApplyToPosting, Some(username))?;
        Account::apply(self.db, username, posting_id).await
    }
}
