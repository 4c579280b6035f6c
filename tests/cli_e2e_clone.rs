//! End-to-end tests for the `devault clone` command.
//!
//! Only the network test actually reaches a remote; it runs with the
//! `integration-tests` feature.

mod common;
use common::prelude::*;

#[test]
fn test_clone_invalid_url() {
    let fixture = TestFixture::new().with_vault();

    fixture
        .command()
        .args(["clone", "ftp://example.com/org/repo"])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("Invalid URL"))
        .stderr(predicate::str::contains("hint:"));

    fixture.vault_child("hosts").assert(predicate::path::missing());
}

#[test]
fn test_clone_existing_target_is_refused() {
    let fixture = TestFixture::new()
        .with_vault()
        .with_file("hosts/github.com/org/repo/keep.txt", "local work");

    fixture
        .command()
        .args(["clone", "https://github.com/Org/Repo.git"])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("already exists"));

    fixture
        .vault_child("hosts/github.com/org/repo/keep.txt")
        .assert("local work");
}

#[test]
fn test_clone_url_escaping_vault_is_refused() {
    let fixture = TestFixture::new().with_vault();

    fixture
        .command()
        .args(["clone", "https://h/../../../outside/x.git"])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("outside the vault"));

    assert!(!fixture.path().join("outside").exists());
}

#[test]
#[cfg_attr(not(feature = "integration-tests"), ignore)]
fn test_clone_into_hosts_and_collection() {
    let fixture = TestFixture::new().with_vault();
    if !git_available() {
        return;
    }

    fixture
        .command()
        .args([
            "clone",
            "https://github.com/octocat/Hello-World.git",
            "samples",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("Cloned"))
        .stdout(predicate::str::contains("[LINK]"));

    let target = fixture.vault().join("hosts/github.com/octocat/hello-world");
    assert!(target.join(".git").is_dir());
    assert!(fixture.vault().join("samples/hello-world/.git").is_dir());
}
