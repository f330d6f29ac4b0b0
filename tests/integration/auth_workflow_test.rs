//! Two-phase authentication workflow across the public auth API

use forge_auth::{
    can_edit_content, can_manage_settings, can_manage_users, create_empty_auth_context,
    has_all_roles, has_any_role, has_portal_access, is_fully_authenticated, is_owner,
    role_has_authority, Membership, Organization, Role, User, ROLES,
};
use uuid::Uuid;

fn user(email: &str) -> User {
    User::new(Uuid::new_v4(), email.to_string(), None).unwrap()
}

fn org(slug: &str) -> Organization {
    Organization::new(slug.to_uppercase(), slug.to_string()).unwrap()
}

#[test]
fn test_session_lifecycle() -> anyhow::Result<()> {
    let alice = user("alice@example.com");
    let acme = org("acme");
    let membership = Membership::new(alice.id, acme.id, [Role::Admin, Role::Member])?;

    // Session start
    let mut ctx = create_empty_auth_context();
    assert!(!is_fully_authenticated(&ctx));
    assert!(!has_portal_access(ctx.roles()));

    // Identity phase
    ctx.resolve_identity(alice)?;
    assert!(ctx.is_authenticated());
    assert!(!is_fully_authenticated(&ctx));
    assert!(!can_edit_content(ctx.roles()));

    // Organization phase
    ctx.resolve_organization(acme, &membership)?;
    assert!(is_fully_authenticated(&ctx));
    assert!(can_manage_users(ctx.roles()));
    assert!(can_manage_settings(ctx.roles()));
    assert!(can_edit_content(ctx.roles()));
    assert!(!is_owner(ctx.roles()));
    assert!(has_all_roles(ctx.roles(), &[Role::Admin, Role::Member]));

    // Session end
    ctx.sign_out();
    assert!(!ctx.is_authenticated());
    assert!(ctx.roles().is_empty());
    Ok(())
}

#[test]
fn test_stakeholder_has_portal_access_only() -> anyhow::Result<()> {
    let bob = user("bob@example.com");
    let acme = org("acme");
    let membership = Membership::new(bob.id, acme.id, [Role::Stakeholder])?;

    let mut ctx = create_empty_auth_context();
    ctx.resolve_identity(bob)?;
    ctx.resolve_organization(acme, &membership)?;

    assert!(has_portal_access(ctx.roles()));
    assert!(!can_edit_content(ctx.roles()));
    assert!(!can_manage_users(ctx.roles()));
    assert!(!has_any_role(ctx.roles(), &[Role::Owner, Role::Admin, Role::Member]));
    Ok(())
}

#[test]
fn test_membership_check_is_not_hierarchy_check() {
    // An owner outranks a member...
    assert!(role_has_authority(Role::Owner, Role::Member));

    // ...but holding `owner` is not the same as holding `member`
    let roles = [Role::Owner];
    assert!(!has_any_role(&roles, &[Role::Member]));
    assert!(can_edit_content(&roles));
}

#[test]
fn test_hierarchy_is_reflexive_for_every_role() {
    for role in ROLES {
        assert!(role_has_authority(role, role));
    }
}
