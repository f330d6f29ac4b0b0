//! Role checking and permission predicates
//!
//! All checks are plain set-membership tests over the caller's roles in the
//! current organization. Order and duplicates in `roles` never matter.

use crate::roles::Role;

// ============================================================================
// Role checking
// ============================================================================

/// Check if the user holds a specific role
pub fn has_role(roles: &[Role], required: Role) -> bool {
    roles.contains(&required)
}

/// Check if the user holds any of the required roles.
///
/// An empty requirement is never satisfied.
pub fn has_any_role(roles: &[Role], required: &[Role]) -> bool {
    required.iter().any(|role| roles.contains(role))
}

/// Check if the user holds every required role.
///
/// An empty requirement is always satisfied.
pub fn has_all_roles(roles: &[Role], required: &[Role]) -> bool {
    required.iter().all(|role| roles.contains(role))
}

// ============================================================================
// Permission checks
// ============================================================================

/// Owner or admin
pub fn can_manage_users(roles: &[Role]) -> bool {
    has_any_role(roles, &[Role::Owner, Role::Admin])
}

/// Owner or admin
pub fn can_manage_settings(roles: &[Role]) -> bool {
    has_any_role(roles, &[Role::Owner, Role::Admin])
}

/// Owner, admin or member
pub fn can_edit_content(roles: &[Role]) -> bool {
    has_any_role(roles, &[Role::Owner, Role::Admin, Role::Member])
}

/// Any role grants portal entry
pub fn has_portal_access(roles: &[Role]) -> bool {
    !roles.is_empty()
}

pub fn is_owner(roles: &[Role]) -> bool {
    has_role(roles, Role::Owner)
}
