// Ownership authorization - one predicate, two enforcement phases
use crate::domain::dashboard::Dashboard;
use crate::domain::user::User;

/// Authenticated identity extracted from the request's security context.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Principal {
    pub id: String,
}

/// Security context handed to checks by the enforcement framework.
/// An unauthenticated request carries no principal.
#[derive(Debug, Clone, Default)]
pub struct RequestContext {
    pub principal: Option<Principal>,
}

impl RequestContext {
    pub fn anonymous() -> Self {
        Self { principal: None }
    }

    pub fn for_principal(id: impl Into<String>) -> Self {
        Self {
            principal: Some(Principal { id: id.into() }),
        }
    }
}

/// A record that belongs to a user.
pub trait OwnedRecord {
    fn owner_id(&self) -> &str;
}

impl OwnedRecord for Dashboard {
    fn owner_id(&self) -> &str {
        &self.owner_id
    }
}

impl OwnedRecord for User {
    // A user record is owned by itself.
    fn owner_id(&self) -> &str {
        &self.id
    }
}

/// True iff the record's owner is the authenticated principal.
/// Fails closed: no principal, or any id mismatch, denies.
pub fn same_user(record: &dyn OwnedRecord, context: &RequestContext) -> bool {
    match &context.principal {
        Some(principal) => record.owner_id() == principal.id,
        None => false,
    }
}

/// When in a mutation's lifecycle a check runs: before the mutation is
/// attempted, or immediately before it is durably committed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CheckPhase {
    Operation,
    Commit,
}

type Check = fn(&dyn OwnedRecord, &RequestContext) -> bool;

/// Named checks registered per enforcement phase, evaluated by the
/// external policy framework around each mutation.
pub struct AuthorizationPipeline {
    checks: Vec<(CheckPhase, &'static str, Check)>,
}

impl AuthorizationPipeline {
    pub fn new() -> Self {
        Self { checks: Vec::new() }
    }

    /// The stock pipeline: the one `same_user` predicate registered at
    /// both phases, so pre-check and commit-check cannot diverge.
    pub fn with_same_user_checks() -> Self {
        let mut pipeline = Self::new();
        pipeline.register(CheckPhase::Operation, "same-user", same_user);
        pipeline.register(CheckPhase::Commit, "same-user", same_user);
        pipeline
    }

    pub fn register(&mut self, phase: CheckPhase, name: &'static str, check: Check) {
        self.checks.push((phase, name, check));
    }

    /// Evaluate every check registered for the phase; all must pass.
    /// A phase with no registered checks denies.
    pub fn evaluate(
        &self,
        phase: CheckPhase,
        record: &dyn OwnedRecord,
        context: &RequestContext,
    ) -> bool {
        let mut evaluated = false;
        for (check_phase, name, check) in &self.checks {
            if *check_phase != phase {
                continue;
            }
            evaluated = true;
            if !check(record, context) {
                tracing::debug!("authorization check {} denied at {:?}", name, phase);
                return false;
            }
        }
        evaluated
    }
}

impl Default for AuthorizationPipeline {
    fn default() -> Self {
        Self::with_same_user_checks()
    }
}
