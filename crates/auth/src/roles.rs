//! Organization roles and the fixed authority hierarchy
//!
//! The role set is closed: owner > admin > member > stakeholder.

use std::ops::Deref;
use std::str::FromStr;

use forge_common::Error;
use serde::{Deserialize, Serialize};

/// Role a user holds within an organization.
///
/// Variant order follows the authority hierarchy, so `Ord` compares seniority.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    /// Portal-only access for external stakeholders
    Stakeholder = 0,
    Member = 1,
    Admin = 2,
    /// Full organization control
    Owner = 3,
}

/// All available roles, most senior first
pub const ROLES: [Role; 4] = [Role::Owner, Role::Admin, Role::Member, Role::Stakeholder];

impl Role {
    /// Position in the authority hierarchy; higher means more authority
    pub fn rank(self) -> u8 {
        self as u8
    }

    /// Check if this role is at least as senior as `required`
    pub fn has_authority(self, required: Role) -> bool {
        self.rank() >= required.rank()
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Role::Owner => "owner",
            Role::Admin => "admin",
            Role::Member => "member",
            Role::Stakeholder => "stakeholder",
        }
    }
}

impl std::fmt::Display for Role {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Role {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ROLES
            .into_iter()
            .find(|role| role.as_str() == s)
            .ok_or_else(|| Error::Validation(format!("Unknown role: {s}")))
    }
}

/// Check if `user_role` carries at least the authority of `required_role`.
///
/// This is a hierarchy comparison between two single roles. It is not a
/// membership check; use [`crate::has_role`] for that.
pub fn role_has_authority(user_role: Role, required_role: Role) -> bool {
    user_role.has_authority(required_role)
}

/// Deduplicated set of roles held by one user in one organization.
///
/// Kept sorted most senior first; derefs to `&[Role]` so it can be passed
/// straight to the permission predicates.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "Vec<Role>", into = "Vec<Role>")]
pub struct RoleSet(Vec<Role>);

impl RoleSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn as_slice(&self) -> &[Role] {
        &self.0
    }

    /// Most senior role in the set
    pub fn highest(&self) -> Option<Role> {
        self.0.first().copied()
    }
}

impl Deref for RoleSet {
    type Target = [Role];

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl AsRef<[Role]> for RoleSet {
    fn as_ref(&self) -> &[Role] {
        &self.0
    }
}

impl FromIterator<Role> for RoleSet {
    fn from_iter<I: IntoIterator<Item = Role>>(iter: I) -> Self {
        let mut roles: Vec<Role> = iter.into_iter().collect();
        roles.sort_unstable_by(|a, b| b.cmp(a));
        roles.dedup();
        RoleSet(roles)
    }
}

impl From<Vec<Role>> for RoleSet {
    fn from(roles: Vec<Role>) -> Self {
        roles.into_iter().collect()
    }
}

impl From<RoleSet> for Vec<Role> {
    fn from(set: RoleSet) -> Self {
        set.0
    }
}
