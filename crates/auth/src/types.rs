//! Auth domain entities
//!
//! Users and organizations are owned by the identity provider; this crate
//! only reads them. A `Membership` binds one user to one organization with
//! the set of roles the user holds there.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::ValidateEmail;

use forge_common::{Error, Result};

use crate::roles::{role_has_authority, Role, RoleSet};
use crate::validation::validate_organization_slug;

/// Maximum display name / organization name length
const MAX_NAME_LENGTH: usize = 100;

/// User identity record
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct User {
    pub id: Uuid,
    pub email: String,
    pub display_name: Option<String>,
    pub avatar_url: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl User {
    /// Create a new user with validation
    pub fn new(id: Uuid, email: String, display_name: Option<String>) -> Result<Self> {
        if !email.validate_email() {
            return Err(Error::Validation("Invalid email format".to_string()));
        }

        if let Some(ref name) = display_name {
            if name.is_empty() || name.chars().count() > MAX_NAME_LENGTH {
                return Err(Error::Validation(format!(
                    "Display name must be 1-{} characters",
                    MAX_NAME_LENGTH
                )));
            }
        }

        let now = Utc::now();
        Ok(User {
            id,
            email,
            display_name,
            avatar_url: None,
            created_at: now,
            updated_at: now,
        })
    }
}

/// Organization (tenant) record
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Organization {
    pub id: Uuid,
    pub name: String,
    pub slug: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Organization {
    /// Create a new organization with validation
    pub fn new(name: String, slug: String) -> Result<Self> {
        if name.trim().is_empty() || name.chars().count() > MAX_NAME_LENGTH {
            return Err(Error::Validation(format!(
                "Organization name must be 1-{} characters",
                MAX_NAME_LENGTH
            )));
        }

        if !validate_organization_slug(&slug) {
            return Err(Error::Validation(
                "Slug must be lowercase alphanumeric with single hyphens".to_string(),
            ));
        }

        let now = Utc::now();
        Ok(Organization {
            id: Uuid::new_v4(),
            name,
            slug,
            created_at: now,
            updated_at: now,
        })
    }
}

/// Membership entity - association between User and Organization
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Membership {
    pub id: Uuid,
    pub user_id: Uuid,
    pub organization_id: Uuid,
    pub roles: RoleSet,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Membership {
    /// Create a new membership; at least one role is required
    pub fn new(
        user_id: Uuid,
        organization_id: Uuid,
        roles: impl IntoIterator<Item = Role>,
    ) -> Result<Self> {
        let roles: RoleSet = roles.into_iter().collect();
        if roles.is_empty() {
            return Err(Error::Validation(
                "Membership must grant at least one role".to_string(),
            ));
        }

        let now = Utc::now();
        Ok(Membership {
            id: Uuid::new_v4(),
            user_id,
            organization_id,
            roles,
            created_at: now,
            updated_at: now,
        })
    }

    /// Most senior role held through this membership
    pub fn highest_role(&self) -> Option<Role> {
        self.roles.highest()
    }

    /// Check if any held role is at least as senior as `required`
    pub fn has_authority(&self, required: Role) -> bool {
        self.roles
            .iter()
            .any(|role| role_has_authority(*role, required))
    }
}
