//! Mutation functional tests
//!
//! Each test creates resources with the `capella-functest-*` prefix and
//! cleans them up automatically.
//!
//! **IMPORTANT**: Database tests create billable clusters and take tens of
//! minutes. Use only against a test organization unless you explicitly
//! confirm production usage.

use predicates::prelude::*;

use super::{FunctionalTestContext, TestCluster, TestProject, test_resource_name};

// ============================================================================
// Projects
// ============================================================================

#[test]
#[cfg_attr(not(feature = "functional-tests"), ignore)]
fn test_project_create_and_auto_cleanup() {
    let project = TestProject::create("project");
    assert!(project.created, "project create failed");

    let ctx = FunctionalTestContext::new();
    ctx.run(&["project", "get", &project.name])
        .success()
        .stdout(predicate::str::contains(&project.name));
}

#[test]
#[cfg_attr(not(feature = "functional-tests"), ignore)]
fn test_project_create_is_idempotent() {
    let project = TestProject::create("idempotent");
    assert!(project.created, "project create failed");

    let ctx = FunctionalTestContext::new();
    ctx.run(&["project", "create", &project.name])
        .success()
        .stdout(predicate::str::contains("already exists"));
}

#[test]
#[cfg_attr(not(feature = "functional-tests"), ignore)]
fn test_project_create_json_then_delete() {
    let ctx = FunctionalTestContext::new();
    let name = test_resource_name("json");

    ctx.run(&["project", "create", &name, "--format", "json"])
        .success()
        .stdout(predicate::str::contains("\"id\""))
        .stdout(predicate::str::contains(&name));

    ctx.run(&["project", "delete", &name, "--yes"]).success();
    ctx.run(&["project", "get", &name]).failure();
}

// ============================================================================
// Database Lifecycle
// ============================================================================

#[test]
#[cfg_attr(not(feature = "functional-tests"), ignore)]
fn test_database_lifecycle() {
    let project = TestProject::create("lifecycle");
    assert!(project.created, "project create failed");

    let database = TestCluster::database(&project);
    assert!(database.created, "database create failed");
    database.wait_healthy().success();

    let ctx = project.context();

    ctx.run(&["database", "get", &database.name, "--format", "json"])
        .success()
        .stdout(predicate::str::contains("healthy"));

    ctx.run(&["cidr", "add", &database.name, "10.1.2.0/24", "--comment", "functest"])
        .success();
    ctx.run(&["cidr", "list", &database.name])
        .success()
        .stdout(predicate::str::contains("10.1.2.0/24"));

    let user = test_resource_name("user");
    ctx.run(&[
        "credential",
        "create",
        &database.name,
        &user,
        "--password",
        "Functest-Passw0rd!",
        "--read-only",
    ])
    .success();
    ctx.run(&["credential", "list", &database.name])
        .success()
        .stdout(predicate::str::contains(&user));
    ctx.run(&["credential", "delete", &database.name, &user])
        .success();

    // `database` drops first and waits for the cluster to go before the
    // project is deleted.
    drop(database);
}

// ============================================================================
// Columnar Lifecycle
// ============================================================================

#[test]
#[cfg_attr(not(feature = "functional-tests"), ignore)]
fn test_columnar_lifecycle() {
    let project = TestProject::create("columnar");
    assert!(project.created, "project create failed");

    let columnar = TestCluster::columnar(&project);
    assert!(columnar.created, "columnar create failed");
    columnar.wait_healthy().success();

    let ctx = project.context();
    ctx.run(&["columnar", "list", "--format", "json"])
        .success()
        .stdout(predicate::str::contains(&columnar.name));

    ctx.run(&["cidr", "add", &columnar.name, "10.1.3.0/24", "--columnar"])
        .success();
    ctx.run(&["cidr", "list", &columnar.name, "--columnar"])
        .success()
        .stdout(predicate::str::contains("10.1.3.0/24"));

    ctx.run(&["columnar", "delete", &columnar.name, "--yes"])
        .success();
    ctx.run(&[
        "columnar",
        "wait",
        &columnar.name,
        "destroying",
        "--timeout",
        "1800",
    ])
    .success();

    // Already gone; the guard's delete just fails quietly.
    drop(columnar);
}
