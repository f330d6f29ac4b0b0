//! Two-phase authentication context
//!
//! A session starts unauthenticated, resolves the user's identity, then
//! resolves which organization the session is scoped to. Roles only exist
//! once the organization phase is complete, so a context that claims an
//! organization without a user or roles cannot be built.

use serde::Serialize;

use forge_common::StateError;

use crate::permissions;
use crate::roles::{Role, RoleSet};
use crate::types::{Membership, Organization, User};

/// Progress of the two authentication phases
#[derive(Debug, Clone, Default, PartialEq)]
pub enum AuthPhase {
    #[default]
    Unauthenticated,
    /// Identity phase complete
    IdentityResolved { user: User },
    /// Identity and organization phases complete
    FullyResolved {
        user: User,
        organization: Organization,
        roles: RoleSet,
    },
}

impl AuthPhase {
    pub fn name(&self) -> &'static str {
        match self {
            AuthPhase::Unauthenticated => "unauthenticated",
            AuthPhase::IdentityResolved { .. } => "identity_resolved",
            AuthPhase::FullyResolved { .. } => "fully_resolved",
        }
    }
}

impl std::fmt::Display for AuthPhase {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// Current auth context after two-phase authentication
#[derive(Debug, Clone, Default, PartialEq)]
pub struct AuthContext {
    phase: AuthPhase,
}

impl AuthContext {
    /// Create an empty auth context (unauthenticated)
    pub fn empty() -> Self {
        Self::default()
    }

    pub fn phase(&self) -> &AuthPhase {
        &self.phase
    }

    /// Current user (from identity phase)
    pub fn user(&self) -> Option<&User> {
        match &self.phase {
            AuthPhase::Unauthenticated => None,
            AuthPhase::IdentityResolved { user } | AuthPhase::FullyResolved { user, .. } => {
                Some(user)
            }
        }
    }

    /// Current organization (from context phase)
    pub fn organization(&self) -> Option<&Organization> {
        match &self.phase {
            AuthPhase::FullyResolved { organization, .. } => Some(organization),
            _ => None,
        }
    }

    /// User's roles in the current organization; empty until the org phase completes
    pub fn roles(&self) -> &[Role] {
        match &self.phase {
            AuthPhase::FullyResolved { roles, .. } => roles.as_slice(),
            _ => &[],
        }
    }

    /// Whether identity phase is complete
    pub fn is_authenticated(&self) -> bool {
        !matches!(self.phase, AuthPhase::Unauthenticated)
    }

    /// Whether context phase is complete (org selected)
    pub fn has_org_context(&self) -> bool {
        matches!(self.phase, AuthPhase::FullyResolved { .. })
    }

    /// Complete the identity phase.
    ///
    /// Re-resolving the same user refreshes the stored record and keeps any
    /// organization context. A different user requires signing out first.
    pub fn resolve_identity(&mut self, user: User) -> Result<(), StateError> {
        if let Some(current) = self.user() {
            if current.id != user.id {
                return Err(self.invalid("resolve_identity"));
            }
        }

        tracing::debug!(user_id = %user.id, from = %self.phase, "Identity resolved");

        self.phase = match std::mem::take(&mut self.phase) {
            AuthPhase::FullyResolved {
                organization,
                roles,
                ..
            } => AuthPhase::FullyResolved {
                user,
                organization,
                roles,
            },
            _ => AuthPhase::IdentityResolved { user },
        };
        Ok(())
    }

    /// Complete (or switch) the organization phase using the user's membership
    pub fn resolve_organization(
        &mut self,
        organization: Organization,
        membership: &Membership,
    ) -> Result<(), StateError> {
        let user_id = match self.user() {
            Some(user) => user.id,
            None => return Err(self.invalid("resolve_organization")),
        };

        if membership.user_id != user_id {
            return Err(StateError::GuardFailed(
                "Membership does not belong to the authenticated user".to_string(),
            ));
        }
        if membership.organization_id != organization.id {
            return Err(StateError::GuardFailed(
                "Membership does not belong to the selected organization".to_string(),
            ));
        }
        if membership.roles.is_empty() {
            return Err(StateError::GuardFailed(
                "Membership grants no roles".to_string(),
            ));
        }

        tracing::debug!(
            user_id = %user_id,
            organization_id = %organization.id,
            roles = ?membership.roles.as_slice(),
            "Organization context resolved"
        );

        self.phase = match std::mem::take(&mut self.phase) {
            AuthPhase::IdentityResolved { user } | AuthPhase::FullyResolved { user, .. } => {
                AuthPhase::FullyResolved {
                    user,
                    organization,
                    roles: membership.roles.clone(),
                }
            }
            AuthPhase::Unauthenticated => return Err(self.invalid("resolve_organization")),
        };
        Ok(())
    }

    /// Drop the organization context, keeping the identity
    pub fn clear_organization(&mut self) -> Result<(), StateError> {
        if let AuthPhase::FullyResolved { user, .. } = &self.phase {
            self.phase = AuthPhase::IdentityResolved { user: user.clone() };
        } else if !self.is_authenticated() {
            return Err(self.invalid("clear_organization"));
        }
        Ok(())
    }

    /// Reset to the unauthenticated state (session end)
    pub fn sign_out(&mut self) {
        self.phase = AuthPhase::Unauthenticated;
    }

    fn invalid(&self, event: &str) -> StateError {
        StateError::InvalidTransition {
            from: self.phase.to_string(),
            event: event.to_string(),
        }
    }

    // Permission checks against the current organization's roles

    pub fn has_role(&self, required: Role) -> bool {
        permissions::has_role(self.roles(), required)
    }

    pub fn can_manage_users(&self) -> bool {
        permissions::can_manage_users(self.roles())
    }

    pub fn can_manage_settings(&self) -> bool {
        permissions::can_manage_settings(self.roles())
    }

    pub fn can_edit_content(&self) -> bool {
        permissions::can_edit_content(self.roles())
    }

    pub fn has_portal_access(&self) -> bool {
        permissions::has_portal_access(self.roles())
    }

    pub fn is_owner(&self) -> bool {
        permissions::is_owner(self.roles())
    }
}

/// Client-facing shape of the context
#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct AuthContextView<'a> {
    user: Option<&'a User>,
    organization: Option<&'a Organization>,
    roles: &'a [Role],
    is_authenticated: bool,
    has_org_context: bool,
}

impl Serialize for AuthContext {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        AuthContextView {
            user: self.user(),
            organization: self.organization(),
            roles: self.roles(),
            is_authenticated: self.is_authenticated(),
            has_org_context: self.has_org_context(),
        }
        .serialize(serializer)
    }
}

/// Create an empty auth context (unauthenticated)
pub fn create_empty_auth_context() -> AuthContext {
    AuthContext::empty()
}

/// Check if auth context is fully established (both phases complete)
pub fn is_fully_authenticated(context: &AuthContext) -> bool {
    context.is_authenticated() && context.has_org_context()
}
