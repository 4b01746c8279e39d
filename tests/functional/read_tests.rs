//! Read-only functional tests
//!
//! These tests do not modify any data and are safe to run against any
//! organization.

use predicates::prelude::*;

use super::FunctionalTestContext;

// ============================================================================
// Status and Profiles
// ============================================================================

#[test]
#[cfg_attr(not(feature = "functional-tests"), ignore)]
fn test_status_shows_config() {
    let ctx = FunctionalTestContext::new();

    ctx.run(&["status"])
        .success()
        .stdout(predicate::str::contains("Configuration"))
        .stdout(predicate::str::contains("API key configured"));
}

#[test]
#[cfg_attr(not(feature = "functional-tests"), ignore)]
fn test_profile_list_json_format() {
    let ctx = FunctionalTestContext::new();

    ctx.run(&["profile", "list", "--format", "json"])
        .success()
        .stdout(predicate::str::contains("\"active_profile\""));
}

// ============================================================================
// Organization Commands
// ============================================================================

#[test]
#[cfg_attr(not(feature = "functional-tests"), ignore)]
fn test_org_list_returns_orgs() {
    let ctx = FunctionalTestContext::new();

    ctx.run(&["org", "list"]).success();
}

#[test]
#[cfg_attr(not(feature = "functional-tests"), ignore)]
fn test_org_list_json_format() {
    let ctx = FunctionalTestContext::new();

    ctx.run(&["org", "list", "--format", "json"])
        .success()
        .stdout(predicate::str::contains("\"data\""))
        .stdout(predicate::str::contains("\"meta\""));
}

#[test]
#[cfg_attr(not(feature = "functional-tests"), ignore)]
fn test_org_get_json_format() {
    let ctx = FunctionalTestContext::new();

    ctx.run(&["org", "get", "--format", "json"])
        .success()
        .stdout(predicate::str::contains("\"id\""))
        .stdout(predicate::str::contains("\"name\""));
}

// ============================================================================
// Projects and Users
// ============================================================================

#[test]
#[cfg_attr(not(feature = "functional-tests"), ignore)]
fn test_project_list_succeeds() {
    let ctx = FunctionalTestContext::new();

    // May be empty, but should succeed
    ctx.run(&["project", "list"]).success();
}

#[test]
#[cfg_attr(not(feature = "functional-tests"), ignore)]
fn test_project_list_with_limit() {
    let ctx = FunctionalTestContext::new();

    ctx.run(&["project", "list", "--limit", "1", "--format", "json"])
        .success();
}

#[test]
#[cfg_attr(not(feature = "functional-tests"), ignore)]
fn test_user_list_json_format() {
    let ctx = FunctionalTestContext::new();

    ctx.run(&["user", "list", "--format", "json"])
        .success()
        .stdout(predicate::str::contains("\"email\""));
}

// ============================================================================
// Project-scoped Commands
// ============================================================================

#[test]
#[cfg_attr(not(feature = "functional-tests"), ignore)]
fn test_database_list_in_profile_project() {
    let ctx = FunctionalTestContext::new();

    let output = ctx.command(&["database", "list"]).output().unwrap();
    if !output.status.success() {
        // Profiles without a project can't list databases
        let stderr = String::from_utf8_lossy(&output.stderr);
        assert!(stderr.contains("no project selected"), "stderr: {}", stderr);
    }
}
