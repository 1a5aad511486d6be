//! Successful deploys: create, replace with backup, skip unchanged.

use std::fs;
use std::os::unix::fs::{MetadataExt, PermissionsExt};

use nix::unistd::{getegid, geteuid};
use sysdeploy::domain::ports::DeployEvent;
use sysdeploy::presentation::ExitStatus;

use crate::common::*;

#[test]
fn creates_missing_destination_with_exact_bits_and_no_backup() {
    let env = TestEnv::new();
    let src = env.write_source("a.conf", RESOLVED_CONF);
    let dst = env.dst("etc/example/a.conf");
    env.write_manifest(&[env.item(&src, &dst, "0644")]);

    let (status, events) = env.deploy(&env.settings());

    assert_eq!(status, ExitStatus::Success);
    assert_eq!(fs::read_to_string(&dst).unwrap(), RESOLVED_CONF);
    let meta = fs::metadata(&dst).unwrap();
    assert_eq!(meta.permissions().mode() & 0o7777, 0o644);
    assert_eq!(meta.uid(), geteuid().as_raw());
    assert_eq!(meta.gid(), getegid().as_raw());
    assert!(!env.backup_of(&dst).exists());
    assert!(events.iter().any(|e| matches!(
        e,
        DeployEvent::Completed {
            changed_any: true,
            ..
        }
    )));
}

#[test]
fn replaces_existing_destination_and_keeps_prior_content() {
    let env = TestEnv::new();
    let src = env.write_source("b.conf", "NEW");
    let dst = env.write_dst("etc/example/b.conf", "OLD");
    env.write_manifest(&[env.item(&src, &dst, "0600")]);

    let (status, _) = env.deploy(&env.settings());

    assert_eq!(status, ExitStatus::Success);
    assert_eq!(fs::read_to_string(&dst).unwrap(), "NEW");
    assert_eq!(
        fs::metadata(&dst).unwrap().permissions().mode() & 0o7777,
        0o600
    );
    assert_eq!(fs::read_to_string(env.backup_of(&dst)).unwrap(), "OLD");
}

#[test]
fn identical_destination_is_skipped_without_backup() {
    let env = TestEnv::new();
    let src = env.write_source("c.conf", DNSMASQ_CONF);
    let dst = env.write_dst("etc/dnsmasq.d/c.conf", DNSMASQ_CONF);
    env.write_manifest(&[env.item(&src, &dst, "0644")]);

    let (status, events) = env.deploy(&env.settings());

    assert_eq!(status, ExitStatus::Success);
    assert!(!env.backup_of(&dst).exists());
    assert!(events.iter().any(|e| matches!(
        e,
        DeployEvent::Completed {
            changed_any: false,
            ..
        }
    )));
}

#[test]
fn second_run_changes_nothing() {
    let env = TestEnv::new();
    let wg = env.write_source("wg0.conf", WG_CONF);
    let resolved = env.write_source("resolved.conf", RESOLVED_CONF);
    let wg_dst = env.write_dst("etc/wireguard/wg0.conf", "[Interface]\n");
    let resolved_dst = env.dst("etc/systemd/resolved.conf");
    env.write_manifest(&[
        env.item(&wg, &wg_dst, "0600"),
        env.item(&resolved, &resolved_dst, "0644"),
    ]);

    let (first, _) = env.deploy(&env.settings());
    let backup = fs::read(env.backup_of(&wg_dst)).unwrap();
    let mtime = fs::metadata(&wg_dst).unwrap().modified().unwrap();
    let (second, events) = env.deploy(&env.settings());

    assert_eq!(first, ExitStatus::Success);
    assert_eq!(second, ExitStatus::Success);
    assert_eq!(fs::read(env.backup_of(&wg_dst)).unwrap(), backup);
    assert_eq!(fs::metadata(&wg_dst).unwrap().modified().unwrap(), mtime);
    let unchanged = events
        .iter()
        .filter(|e| matches!(e, DeployEvent::EntryUnchanged { .. }))
        .count();
    assert_eq!(unchanged, 2);
}

#[test]
fn later_change_overwrites_the_single_backup_slot() {
    let env = TestEnv::new();
    let dst = env.write_dst("etc/nftables.conf", "v1");
    let src = env.write_source("nftables.conf", "v2");
    env.write_manifest(&[env.item(&src, &dst, "0644")]);
    env.deploy(&env.settings());

    env.write_source("nftables.conf", "v3");
    let (status, _) = env.deploy(&env.settings());

    assert_eq!(status, ExitStatus::Success);
    assert_eq!(fs::read_to_string(&dst).unwrap(), "v3");
    assert_eq!(fs::read_to_string(env.backup_of(&dst)).unwrap(), "v2");
    let slot_dir = env.backup_of(&dst).parent().unwrap().to_path_buf();
    assert_eq!(fs::read_dir(slot_dir).unwrap().count(), 1);
}

#[test]
fn source_resolves_against_repo_root_when_not_next_to_manifest() {
    let env = TestEnv::new();
    fs::create_dir_all(env.repo_root().join("shared")).unwrap();
    fs::write(env.repo_root().join("shared/hosts"), "127.0.0.1 localhost\n").unwrap();
    let dst = env.dst("etc/hosts");
    env.write_manifest(&[env.item("shared/hosts", &dst, "644")]);

    let (status, _) = env.deploy(&env.settings());

    assert_eq!(status, ExitStatus::Success);
    assert_eq!(fs::read_to_string(&dst).unwrap(), "127.0.0.1 localhost\n");
}

#[test]
fn dry_run_reports_but_leaves_host_untouched() {
    let env = TestEnv::new();
    let src = env.write_source("b.conf", "NEW");
    let dst = env.write_dst("etc/example/b.conf", "OLD");
    let fresh = env.dst("etc/fresh/c.conf");
    env.write_manifest(&[env.item(&src, &dst, "0600"), env.item(&src, &fresh, "0644")]);
    let mut settings = env.settings();
    settings.dry_run = true;

    let (status, events) = env.deploy(&settings);

    assert_eq!(status, ExitStatus::Success);
    assert_eq!(fs::read_to_string(&dst).unwrap(), "OLD");
    assert!(!fresh.parent().unwrap().exists());
    assert!(!env.backup_root().exists());
    assert_eq!(
        events
            .iter()
            .filter(|e| matches!(e, DeployEvent::Rename { .. }))
            .count(),
        2
    );
}

#[test]
fn empty_manifest_succeeds() {
    let env = TestEnv::new();
    env.write_manifest(&[]);

    let (status, _) = env.deploy(&env.settings());

    assert_eq!(status, ExitStatus::Success);
}
