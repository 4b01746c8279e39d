//! Error scenario functional tests
//!
//! Failed operations should return actionable messages.

use predicates::prelude::*;

use super::{FunctionalTestContext, TEST_RESOURCE_PREFIX};

// ============================================================================
// Organization Errors
// ============================================================================

#[test]
#[cfg_attr(not(feature = "functional-tests"), ignore)]
fn test_unknown_org_returns_error() {
    let ctx = FunctionalTestContext::new();

    ctx.run(&["org", "get", "--org", "00000000-0000-0000-0000-000000000000"])
        .failure()
        .stderr(
            predicate::str::contains("not found")
                .or(predicate::str::contains("Access denied"))
                .or(predicate::str::contains("Error")),
        );
}

// ============================================================================
// Missing Resources
// ============================================================================

#[test]
#[cfg_attr(not(feature = "functional-tests"), ignore)]
fn test_nonexistent_project_returns_not_found() {
    let ctx = FunctionalTestContext::new();
    let name = format!("{}-nonexistent-99999", TEST_RESOURCE_PREFIX);

    ctx.run(&["project", "get", &name])
        .failure()
        .stderr(predicate::str::contains("not found"));
}

#[test]
#[cfg_attr(not(feature = "functional-tests"), ignore)]
fn test_nonexistent_project_delete_fails() {
    let ctx = FunctionalTestContext::new();
    let name = format!("{}-nonexistent-99999", TEST_RESOURCE_PREFIX);

    let stderr = ctx.run_failure(&["project", "delete", &name, "--yes"]);
    assert!(stderr.contains(&name), "stderr: {}", stderr);
}

#[test]
#[cfg_attr(not(feature = "functional-tests"), ignore)]
fn test_nonexistent_user_returns_not_found() {
    let ctx = FunctionalTestContext::new();

    ctx.run(&["user", "get", "capella-functest-nobody@example.invalid"])
        .failure()
        .stderr(predicate::str::contains("not found"));
}

// ============================================================================
// Authentication
// ============================================================================

#[test]
#[cfg_attr(not(feature = "functional-tests"), ignore)]
fn test_invalid_api_key_is_rejected() {
    let ctx = FunctionalTestContext::new();

    ctx.command(&["org", "list"])
        .env("CAPELLA_API_KEY", "capella-functest-invalid-key")
        .assert()
        .failure()
        .stderr(
            predicate::str::contains("Authentication failed")
                .or(predicate::str::contains("Access denied")),
        );
}
