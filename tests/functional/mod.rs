//! Functional test harness for the capella CLI
//!
//! Provides a test context and safety guards for running the binary against
//! the real Capella management API. Tests are opt-in via the `functional-tests`
//! feature.
//!
//! ```bash
//! # Against a test organization
//! CAPELLA_PROFILE=test cargo test --features functional-tests --test functional
//!
//! # Against production (requires explicit confirmation)
//! CAPELLA_PROFILE=default CAPELLA_FUNCTIONAL_TESTS_CONFIRM=yes \
//!     cargo test --features functional-tests --test functional
//! ```

use std::env;
use std::path::PathBuf;
use std::process::Command;

#[allow(deprecated)]
use assert_cmd::cargo::cargo_bin;
#[allow(unused_imports)]
use assert_cmd::prelude::*;

pub mod error_tests;
pub mod mutation_tests;
pub mod read_tests;

// ============================================================================
// Test Configuration
// ============================================================================

/// Prefix for test resources to identify and clean up
pub const TEST_RESOURCE_PREFIX: &str = "capella-functest";

/// Production API host (requires explicit confirmation)
const PRODUCTION_API_HOST: &str = "cloudapi.cloud.couchbase.com";

/// Region used when creating databases
const DEFAULT_TEST_REGION: &str = "us-east-2";

const PRODUCTION_WARNING: &str = r#"
╔══════════════════════════════════════════════════════════════════╗
║  ⚠️  PRODUCTION API WARNING                                       ║
║                                                                   ║
║  You are about to run functional tests against:                   ║
║    https://cloudapi.cloud.couchbase.com (PRODUCTION)              ║
║                                                                   ║
║  This will make real API calls and create billable resources.     ║
║                                                                   ║
║  To proceed, set: CAPELLA_FUNCTIONAL_TESTS_CONFIRM=yes            ║
╚══════════════════════════════════════════════════════════════════╝
"#;

// ============================================================================
// FunctionalTestContext
// ============================================================================

/// Context for functional tests providing command execution and safety guards.
pub struct FunctionalTestContext {
    /// Profile to use for API calls (from CAPELLA_PROFILE)
    pub profile: Option<String>,
    /// Project every command runs against, overriding the profile's
    pub project: Option<String>,
    /// Path to the capella binary
    pub binary_path: PathBuf,
}

impl FunctionalTestContext {
    /// Create a new test context, refusing to target production unconfirmed.
    pub fn new() -> Self {
        let profile = env::var("CAPELLA_PROFILE").ok();

        Self::check_production_safety(&profile);

        Self {
            profile,
            project: None,
            binary_path: cargo_bin!("capella").to_path_buf(),
        }
    }

    /// Run every later command inside `project`.
    pub fn in_project(mut self, project: &str) -> Self {
        self.project = Some(project.to_string());
        self
    }

    /// `status` prints a custom host only when one is configured, so no
    /// such line means the default production host.
    fn check_production_safety(profile: &Option<String>) {
        let mut cmd = Command::new(cargo_bin!("capella"));
        cmd.arg("status");
        if let Some(p) = profile {
            cmd.args(["--profile", p]);
        }

        if let Ok(output) = cmd.output() {
            let stdout = String::from_utf8_lossy(&output.stdout);
            if !stdout.contains("Custom API host") || stdout.contains(PRODUCTION_API_HOST) {
                Self::require_production_confirmation();
            }
        }
    }

    fn require_production_confirmation() {
        if env::var("CAPELLA_FUNCTIONAL_TESTS_CONFIRM").as_deref() != Ok("yes") {
            eprintln!("{}", PRODUCTION_WARNING);
            panic!(
                "Production confirmation required. Set CAPELLA_FUNCTIONAL_TESTS_CONFIRM=yes to proceed."
            );
        }
    }

    /// Build a Command with profile settings applied.
    ///
    /// This does NOT execute the command - use `run()` for that.
    pub fn command(&self, args: &[&str]) -> Command {
        let mut cmd = Command::new(&self.binary_path);
        cmd.env("NO_COLOR", "1");
        if let Some(ref p) = self.profile {
            cmd.args(["--profile", p]);
        }
        if let Some(ref project) = self.project {
            cmd.env("CAPELLA_PROJECT", project);
        }
        cmd.args(args);
        cmd
    }

    /// Execute command and return an assertion object for chaining.
    pub fn run(&self, args: &[&str]) -> assert_cmd::assert::Assert {
        self.command(args).assert()
    }

    /// Execute command and expect success, returning stdout as String.
    pub fn run_success(&self, args: &[&str]) -> String {
        let output = self
            .command(args)
            .output()
            .expect("Failed to execute command");

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            panic!(
                "Command failed: capella {}\nstderr: {}",
                args.join(" "),
                stderr
            );
        }

        String::from_utf8_lossy(&output.stdout).to_string()
    }

    /// Execute command and expect failure, returning stderr as String.
    pub fn run_failure(&self, args: &[&str]) -> String {
        let output = self
            .command(args)
            .output()
            .expect("Failed to execute command");

        if output.status.success() {
            panic!("Command unexpectedly succeeded: capella {}", args.join(" "));
        }

        String::from_utf8_lossy(&output.stderr).to_string()
    }
}

impl Default for FunctionalTestContext {
    fn default() -> Self {
        Self::new()
    }
}

// ============================================================================
// Test Resource Naming
// ============================================================================

/// Generate a test resource name like `capella-functest-db-1706123456`.
pub fn test_resource_name(suffix: &str) -> String {
    use std::time::{SystemTime, UNIX_EPOCH};
    let ts = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap()
        .as_secs();
    format!("{}-{}-{}", TEST_RESOURCE_PREFIX, suffix, ts)
}

/// Region for database and columnar tests.
pub fn test_region() -> String {
    env::var("CAPELLA_FUNCTIONAL_TESTS_REGION").unwrap_or_else(|_| DEFAULT_TEST_REGION.to_string())
}

// ============================================================================
// RAII Wrappers
// ============================================================================

/// A project that deletes itself on drop, even if the test panics.
pub struct TestProject {
    ctx: FunctionalTestContext,
    pub name: String,
    pub created: bool,
}

impl TestProject {
    pub fn create(suffix: &str) -> Self {
        let ctx = FunctionalTestContext::new();
        let name = test_resource_name(suffix);

        let created = ctx
            .command(&["project", "create", &name])
            .output()
            .map(|output| output.status.success())
            .unwrap_or(false);

        if created {
            eprintln!("[TEST] Created project: {}", name);
        } else {
            eprintln!("[TEST] Failed to create project: {}", name);
        }

        Self { ctx, name, created }
    }

    /// A context whose commands run inside this project.
    pub fn context(&self) -> FunctionalTestContext {
        FunctionalTestContext::new().in_project(&self.name)
    }
}

impl Drop for TestProject {
    fn drop(&mut self) {
        if self.created {
            eprintln!("[TEST] Cleaning up project: {}", self.name);
            let _ = self
                .ctx
                .command(&["project", "delete", &self.name, "--yes"])
                .output();
        }
    }
}

/// A database or columnar cluster inside a [`TestProject`], deleted and
/// waited out on drop.
///
/// Capella refuses to delete a project that still has clusters, so this must
/// be dropped before its project.
pub struct TestCluster {
    ctx: FunctionalTestContext,
    /// CLI command group: `database` or `columnar`
    pub kind: &'static str,
    pub name: String,
    pub created: bool,
}

impl TestCluster {
    /// Smallest single-node database the API accepts.
    pub fn database(project: &TestProject) -> Self {
        Self::create(
            project,
            "database",
            &["--nodes", "1", "--compute", "4x16", "--storage", "64"],
        )
    }

    pub fn columnar(project: &TestProject) -> Self {
        Self::create(project, "columnar", &["--nodes", "1", "--compute", "4x32"])
    }

    fn create(project: &TestProject, kind: &'static str, sizing: &[&str]) -> Self {
        let ctx = project.context();
        let name = test_resource_name(if kind == "database" { "db" } else { "col" });
        let region = test_region();

        let mut args = vec![kind, "create", name.as_str(), "--region", region.as_str()];
        args.extend_from_slice(sizing);

        let created = ctx
            .command(&args)
            .output()
            .map(|output| output.status.success())
            .unwrap_or(false);

        if created {
            eprintln!("[TEST] Created {}: {}", kind, name);
        } else {
            eprintln!("[TEST] Failed to create {}: {}", kind, name);
        }

        Self {
            ctx,
            kind,
            name,
            created,
        }
    }

    /// Block until the cluster reports `healthy`.
    pub fn wait_healthy(&self) -> assert_cmd::assert::Assert {
        self.ctx.run(&[
            self.kind,
            "wait",
            &self.name,
            "healthy",
            "--until",
            "--timeout",
            "3600",
        ])
    }
}

impl Drop for TestCluster {
    fn drop(&mut self) {
        if self.created {
            eprintln!("[TEST] Cleaning up {}: {}", self.kind, self.name);
            let _ = self
                .ctx
                .command(&[self.kind, "delete", &self.name, "--yes"])
                .output();
            let _ = self
                .ctx
                .command(&[self.kind, "wait", &self.name, "destroying", "--timeout", "1800"])
                .output();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resource_name_format() {
        let name = test_resource_name("db");
        assert!(name.starts_with("capella-functest-db-"));
        let ts = name.rsplit('-').next().unwrap();
        assert!(ts.parse::<u64>().is_ok());
    }

    #[test]
    fn test_region_defaults() {
        if env::var("CAPELLA_FUNCTIONAL_TESTS_REGION").is_err() {
            assert_eq!(test_region(), DEFAULT_TEST_REGION);
        }
    }
}
