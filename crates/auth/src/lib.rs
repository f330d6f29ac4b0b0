//! Role/permission model and two-phase auth context for Forge
//!
//! Provides the closed role hierarchy, pure permission predicates over a
//! caller's roles, and the phase-tagged `AuthContext` those predicates read.

mod context;
mod permissions;
mod roles;
mod types;
mod validation;

pub use context::{create_empty_auth_context, is_fully_authenticated, AuthContext, AuthPhase};
pub use permissions::{
    can_edit_content, can_manage_settings, can_manage_users, has_all_roles, has_any_role,
    has_portal_access, has_role, is_owner,
};
pub use roles::{role_has_authority, Role, RoleSet, ROLES};
pub use types::{Membership, Organization, User};
pub use validation::validate_organization_slug;
