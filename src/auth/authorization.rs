use crate::auth::session::Session;
use crate::error::{CrmError, CrmResult};
use crate::models::users::Role;
use crate::models::{clients, contracts, events};

/// Deny unless the session carries the required role.
pub fn require_role(session: &Session, role: Role) -> CrmResult<()> {
    if session.role == role {
        Ok(())
    } else {
        Err(CrmError::PermissionDenied(format!(
            "this operation requires the {role} role"
        )))
    }
}

/// A record scoped to a single responsible user.
///
/// One polymorphic ownership predicate instead of per-entity id comparisons:
/// the owner is the commercial contact for a client, the authoring
/// administration user for a contract, and the assigned support contact for
/// an event.
pub trait Owned {
    /// Entity name used in denial messages.
    const KIND: &'static str;

    /// `None` means nobody owns the record yet (an unclaimed event).
    fn owner_id(&self) -> Option<i32>;
}

impl Owned for clients::Model {
    const KIND: &'static str = "client";

    fn owner_id(&self) -> Option<i32> {
        Some(self.commercial_contact_id)
    }
}

impl Owned for contracts::Model {
    const KIND: &'static str = "contract";

    fn owner_id(&self) -> Option<i32> {
        Some(self.author_id)
    }
}

impl Owned for events::Model {
    const KIND: &'static str = "event";

    fn owner_id(&self) -> Option<i32> {
        self.support_contact_id
    }
}

/// Deny unless the session user is the record's owner.
pub fn require_owner<R: Owned>(record: &R, session: &Session) -> CrmResult<()> {
    match record.owner_id() {
        Some(id) if id == session.user_id => Ok(()),
        _ => Err(CrmError::PermissionDenied(format!(
            "you can only modify {}s you are responsible for",
            R::KIND
        ))),
    }
}
