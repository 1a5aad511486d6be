//! Failure classes and their exit statuses.

use std::fs;

use sysdeploy::domain::ports::DeployEvent;
use sysdeploy::infrastructure::fs::temp_path_for;
use sysdeploy::presentation::ExitStatus;

use crate::common::*;

#[test]
fn relative_destination_is_a_manifest_error() {
    let env = TestEnv::new();
    let src = env.write_source("a.conf", "X");
    env.write_manifest(&[ManifestItem::new(
        &src,
        "etc/relative.conf",
        "0644",
        &env.user,
        &env.group,
    )]);

    let (status, events) = env.deploy(&env.settings());

    assert_eq!(status, ExitStatus::ManifestInvalid);
    assert_eq!(status.code(), 4);
    assert!(events.is_empty());
}

#[test]
fn missing_source_is_a_manifest_error() {
    let env = TestEnv::new();
    env.write_manifest(&[env.item("files/absent.conf", &env.dst("etc/a.conf"), "0644")]);

    let (status, _) = env.deploy(&env.settings());

    assert_eq!(status, ExitStatus::ManifestInvalid);
}

#[test]
fn symbolic_mode_is_a_manifest_error() {
    let env = TestEnv::new();
    let src = env.write_source("a.conf", "X");
    env.write_manifest(&[env.item(&src, &env.dst("etc/a.conf"), "rw-r--r--")]);

    let (status, _) = env.deploy(&env.settings());

    assert_eq!(status, ExitStatus::ManifestInvalid);
}

#[test]
fn missing_manifest_is_a_manifest_error() {
    let env = TestEnv::new();

    let (status, _) = env.deploy(&env.settings());

    assert_eq!(status, ExitStatus::ManifestInvalid);
}

#[test]
fn invalid_entry_anywhere_means_nothing_is_applied() {
    let env = TestEnv::new();
    let src = env.write_source("a.conf", "X");
    let first = env.dst("etc/first.conf");
    env.write_manifest_raw(&format!(
        "files:\n  - src: {src}\n    dst: {}\n    mode: \"0644\"\n    owner: {u}\n    group: {g}\n  - src: {src}\n    dst: {}\n    mode: \"0644\"\n    owner: {u}\n",
        first.display(),
        env.dst("etc/second.conf").display(),
        u = env.user,
        g = env.group,
    ));

    let (status, _) = env.deploy(&env.settings());

    assert_eq!(status, ExitStatus::ManifestInvalid);
    assert!(!first.exists());
}

#[test]
fn unknown_group_fails_the_deploy_after_earlier_entries() {
    let env = TestEnv::new();
    let src = env.write_source("a.conf", "X");
    let first = env.dst("etc/first.conf");
    let second = env.write_dst("etc/second.conf", "keep");
    let mut bad = env.item(&src, &second, "0644");
    bad.group = "sysdeploy-no-such-group".to_string();
    env.write_manifest(&[env.item(&src, &first, "0644"), bad]);

    let (status, events) = env.deploy(&env.settings());

    assert_eq!(status, ExitStatus::DeployFailed);
    assert_eq!(status.code(), 5);
    assert_eq!(fs::read_to_string(&first).unwrap(), "X");
    assert_eq!(fs::read_to_string(&second).unwrap(), "keep");
    assert!(!temp_path_for(&second).exists());
    assert!(events
        .iter()
        .any(|e| matches!(e, DeployEvent::EntryFailed { index: 2, .. })));
}

#[test]
fn unknown_owner_surfaces_in_dry_run() {
    let env = TestEnv::new();
    let src = env.write_source("a.conf", "X");
    let mut item = env.item(&src, &env.dst("etc/a.conf"), "0644");
    item.owner = "sysdeploy-no-such-user".to_string();
    env.write_manifest(&[item]);
    let mut settings = env.settings();
    settings.dry_run = true;

    let (status, _) = env.deploy(&settings);

    assert_eq!(status, ExitStatus::DeployFailed);
}

#[test]
fn directory_at_destination_fails_the_deploy() {
    let env = TestEnv::new();
    let src = env.write_source("a.conf", "X");
    let dst = env.dst("etc/conf.d");
    fs::create_dir_all(&dst).unwrap();
    env.write_manifest(&[env.item(&src, &dst, "0644")]);

    let (status, _) = env.deploy(&env.settings());

    assert_eq!(status, ExitStatus::DeployFailed);
    assert!(dst.is_dir());
}
