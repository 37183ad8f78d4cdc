//! Role/ownership decision table.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::domain::value_objects::AuthenticatedUser;
use crate::errors::{DomainError, DomainResult};

/// The requesting principal
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Actor {
    Anonymous,
    Authenticated { id: Uuid, is_admin: bool },
}

impl Actor {
    /// The actor's user id, when authenticated
    pub fn user_id(&self) -> Option<Uuid> {
        match self {
            Actor::Anonymous => None,
            Actor::Authenticated { id, .. } => Some(*id),
        }
    }

    pub fn is_admin(&self) -> bool {
        matches!(self, Actor::Authenticated { is_admin: true, .. })
    }
}

impl From<&AuthenticatedUser> for Actor {
    fn from(user: &AuthenticatedUser) -> Self {
        Actor::Authenticated {
            id: user.user_id,
            is_admin: user.is_admin,
        }
    }
}

/// Actions gated by the policy
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Action {
    Read,
    Create,
    Update,
    Delete,
    /// Like/favourite toggling
    Toggle,
}

/// Resource categories appearing in the decision table
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ResourceKind {
    Subject,
    Course,
    Module,
    Comment,
    Rating,
}

/// A resource as the policy sees it: a kind plus its recorded owner.
///
/// For creation inside a parent (a module in a course), `owner_id` is the
/// parent's owner, which is who "Owner" means for that row.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Resource {
    pub kind: ResourceKind,
    pub owner_id: Option<Uuid>,
}

impl Resource {
    pub fn new(kind: ResourceKind, owner_id: Option<Uuid>) -> Self {
        Self { kind, owner_id }
    }

    pub fn subject() -> Self {
        Self::new(ResourceKind::Subject, None)
    }

    pub fn course(owner_id: Option<Uuid>) -> Self {
        Self::new(ResourceKind::Course, owner_id)
    }

    pub fn module(course_owner_id: Option<Uuid>) -> Self {
        Self::new(ResourceKind::Module, course_owner_id)
    }

    pub fn comment(author_id: Option<Uuid>) -> Self {
        Self::new(ResourceKind::Comment, author_id)
    }

    pub fn rating(rater_id: Option<Uuid>) -> Self {
        Self::new(ResourceKind::Rating, rater_id)
    }
}

/// Decide whether `actor` may perform `action` on `resource`.
///
/// Admin satisfies every role requirement. Cells absent from the table
/// deny.
pub fn allow(actor: &Actor, action: Action, resource: &Resource) -> bool {
    if actor.is_admin() {
        return true;
    }

    let is_authenticated = matches!(actor, Actor::Authenticated { .. });
    let is_owner = match (actor.user_id(), resource.owner_id) {
        (Some(id), Some(owner)) => id == owner,
        _ => false,
    };

    use Action::*;
    use ResourceKind::*;
    match (resource.kind, action) {
        (Subject, Read) => true,
        // Subject mutation is admin-only; admins returned above
        (Subject, Create | Update | Delete) => false,

        (Course, Read) => true,
        (Course, Create) => is_authenticated,
        (Course, Update | Delete) => is_owner,
        (Course, Toggle) => is_authenticated,

        (Module, Create | Update | Delete) => is_owner,

        (Comment, Create) => is_authenticated,
        (Comment, Update | Delete) => is_owner,

        (Rating, Create) => is_authenticated,
        (Rating, Update | Delete) => is_owner,

        _ => false,
    }
}

/// Like [`allow`], but denial becomes `DomainError::Forbidden`.
///
/// The error is never a silent no-op and never explains which requirement
/// failed.
pub fn authorize(actor: &Actor, action: Action, resource: &Resource) -> DomainResult<()> {
    if allow(actor, action, resource) {
        Ok(())
    } else {
        Err(DomainError::Forbidden)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn user(id: Uuid) -> Actor {
        Actor::Authenticated {
            id,
            is_admin: false,
        }
    }

    fn admin() -> Actor {
        Actor::Authenticated {
            id: Uuid::new_v4(),
            is_admin: true,
        }
    }

    #[test]
    fn test_anonymous_can_read_catalogue() {
        assert!(allow(&Actor::Anonymous, Action::Read, &Resource::subject()));
        assert!(allow(
            &Actor::Anonymous,
            Action::Read,
            &Resource::course(None)
        ));
    }

    #[test]
    fn test_anonymous_denied_course_create() {
        assert!(!allow(
            &Actor::Anonymous,
            Action::Create,
            &Resource::course(None)
        ));
    }

    #[test]
    fn test_subject_mutation_is_admin_only() {
        let someone = user(Uuid::new_v4());
        assert!(!allow(&someone, Action::Create, &Resource::subject()));
        assert!(!allow(&someone, Action::Delete, &Resource::subject()));
        assert!(allow(&admin(), Action::Create, &Resource::subject()));
    }

    #[test]
    fn test_course_owner_may_update_and_delete() {
        let owner_id = Uuid::new_v4();
        let owner = user(owner_id);
        let course = Resource::course(Some(owner_id));

        assert!(allow(&owner, Action::Update, &course));
        assert!(allow(&owner, Action::Delete, &course));

        let stranger = user(Uuid::new_v4());
        assert!(!allow(&stranger, Action::Update, &course));
        assert!(!allow(&stranger, Action::Delete, &course));
    }

    #[test]
    fn test_authenticated_may_toggle() {
        let someone = user(Uuid::new_v4());
        let course = Resource::course(Some(Uuid::new_v4()));

        assert!(allow(&someone, Action::Toggle, &course));
        assert!(!allow(&Actor::Anonymous, Action::Toggle, &course));
    }

    #[test]
    fn test_authenticated_may_create_rating() {
        let someone = user(Uuid::new_v4());
        let rating = Resource::rating(None);

        assert!(allow(&someone, Action::Create, &rating));
        assert!(!allow(&Actor::Anonymous, Action::Create, &rating));
    }

    #[test]
    fn test_comment_update_is_author_only() {
        let author_id = Uuid::new_v4();
        let comment = Resource::comment(Some(author_id));

        assert!(allow(&user(author_id), Action::Update, &comment));
        assert!(!allow(&user(Uuid::new_v4()), Action::Update, &comment));
    }

    #[test]
    fn test_rating_update_is_owner_only() {
        let rater_id = Uuid::new_v4();
        let rating = Resource::rating(Some(rater_id));

        assert!(allow(&user(rater_id), Action::Update, &rating));
        assert!(!allow(&user(Uuid::new_v4()), Action::Update, &rating));
    }

    #[test]
    fn test_admin_is_allowed_everything() {
        let admin = admin();
        let other_owner = Some(Uuid::new_v4());

        for resource in [
            Resource::subject(),
            Resource::course(other_owner),
            Resource::module(other_owner),
            Resource::comment(other_owner),
            Resource::rating(other_owner),
        ] {
            for action in [
                Action::Read,
                Action::Create,
                Action::Update,
                Action::Delete,
                Action::Toggle,
            ] {
                assert!(allow(&admin, action, &resource));
            }
        }
    }

    #[test]
    fn test_denial_is_forbidden_error() {
        let err = authorize(&Actor::Anonymous, Action::Create, &Resource::course(None))
            .expect_err("anonymous create must be denied");
        assert!(matches!(err, DomainError::Forbidden));
    }

    #[test]
    fn test_undefined_cells_deny() {
        let someone = user(Uuid::new_v4());
        // Read is not exposed for modules, comments, or ratings
        assert!(!allow(&someone, Action::Read, &Resource::module(None)));
        assert!(!allow(&someone, Action::Read, &Resource::rating(None)));
        // Toggling a subject is meaningless and denied
        assert!(!allow(&someone, Action::Toggle, &Resource::subject()));
    }
}
