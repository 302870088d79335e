// Copyright (c) 2026 OverTheFlow and Contributors
//
// This Source Code Form is subject to the terms of the Mozilla Public License, v. 2.0.
// If a copy of the MPL was not distributed with this file, You can obtain one at
// https://mozilla.org/MPL/2.0/.

#![cfg(test)]
use std::io;

use macswap_common::error::MacError;
use macswap_common::platform::{Elevation, Platform};
use macswap_core::{ApplyOutcome, InterfaceMacController};

use crate::utils::{ScriptedRunner, linux_ifconfig, macos_ifconfig};

const OLD: &str = "aa:bb:cc:dd:ee:ff";
const NEW: &str = "02:1a:2b:3c:4d:5e";

#[test]
fn test_linux_run_changes_address() -> anyhow::Result<()> {
    let runner = ScriptedRunner::new().then_ok(&linux_ifconfig("eth0", OLD));

    let report = InterfaceMacController::new("eth0", NEW, Platform::Linux, &runner)
        .with_elevation(Elevation::Sudo)
        .run()?;

    assert_eq!(report.previous.as_str(), OLD);
    assert_eq!(report.requested.as_str(), NEW);
    assert_eq!(report.outcome, ApplyOutcome::Applied);
    assert_eq!(report.verified, None, "No read-back unless asked for");
    assert_eq!(
        runner.history(),
        vec![
            "ifconfig eth0".to_string(),
            "sudo ifconfig eth0 down".to_string(),
            format!("sudo ifconfig eth0 hw ether {NEW}"),
            "sudo ifconfig eth0 up".to_string(),
        ]
    );
    Ok(())
}

#[test]
fn test_macos_run_with_verification() -> anyhow::Result<()> {
    let runner = ScriptedRunner::new()
        .then_ok(&macos_ifconfig("en0", OLD))
        .then_ok("")
        .then_ok("")
        .then_ok("")
        .then_ok(&macos_ifconfig("en0", &NEW.to_uppercase()));

    let report = InterfaceMacController::new("en0", NEW, Platform::MacOs, &runner)
        .with_elevation(Elevation::None)
        .with_verify(true)
        .run()?;

    assert_eq!(report.verified, Some(true));
    let history = runner.history();
    assert_eq!(history.len(), 5);
    assert_eq!(history[2], format!("ifconfig en0 ether {NEW}"));
    assert_eq!(history[4], "ifconfig en0");
    Ok(())
}

#[test]
fn test_verification_mismatch_fails() {
    let runner = ScriptedRunner::new()
        .then_ok(&linux_ifconfig("eth0", OLD))
        .then_ok("")
        .then_ok("")
        .then_ok("")
        .then_ok(&linux_ifconfig("eth0", OLD));

    let result = InterfaceMacController::new("eth0", NEW, Platform::Linux, &runner)
        .with_verify(true)
        .run();

    match result {
        Err(MacError::Verification {
            expected, actual, ..
        }) => {
            assert_eq!(expected, NEW);
            assert_eq!(actual, OLD);
        }
        other => panic!("Expected verification failure, got {other:?}"),
    }
}

#[test]
fn test_read_failure_stops_before_apply() {
    let runner = ScriptedRunner::new().then_fail(
        1,
        "ifconfig: eth7: error fetching interface information: Device not found",
    );

    let err = InterfaceMacController::new("eth7", NEW, Platform::Linux, &runner)
        .run()
        .unwrap_err();

    assert!(err.is_retrieval(), "Expected retrieval error, got {err:?}");
    assert!(err.to_string().contains("eth7"));
    assert_eq!(runner.history(), vec!["ifconfig eth7"], "Apply must not start");
}

#[test]
fn test_set_failure_never_brings_interface_up() {
    let runner = ScriptedRunner::new()
        .then_ok(&linux_ifconfig("eth0", OLD))
        .then_ok("")
        .then_fail(1, "SIOCSIFHWADDR: Cannot assign requested address");

    let err = InterfaceMacController::new("eth0", NEW, Platform::Linux, &runner)
        .with_elevation(Elevation::Sudo)
        .run()
        .unwrap_err();

    match &err {
        MacError::Apply {
            interface,
            command,
            detail,
        } => {
            assert_eq!(interface, "eth0");
            assert!(command.contains("hw ether"));
            assert!(detail.contains("Cannot assign requested address"));
        }
        other => panic!("Expected apply failure, got {other:?}"),
    }

    let history = runner.history();
    assert_eq!(history.len(), 3);
    assert!(
        !history.iter().any(|c| c.ends_with(" up")),
        "Up step must not run after a failed set: {history:?}"
    );
}

#[test]
fn test_down_step_spawn_error_is_apply_error() {
    let runner = ScriptedRunner::new()
        .then_ok(&linux_ifconfig("eth0", OLD))
        .then_spawn_error(io::ErrorKind::NotFound, "sudo: command not found");

    let err = InterfaceMacController::new("eth0", NEW, Platform::Linux, &runner)
        .run()
        .unwrap_err();

    assert!(matches!(err, MacError::Apply { .. }));
    assert!(err.to_string().contains("sudo: command not found"));
    assert_eq!(runner.history().len(), 2);
}

#[test]
fn test_windows_reads_but_never_writes() -> anyhow::Result<()> {
    let ipconfig = "Ethernet adapter Ethernet:\n\n   Physical Address. . . . . . . . . : AA-BB-CC-DD-EE-FF\n";
    let runner = ScriptedRunner::new().then_ok(ipconfig);

    let report = InterfaceMacController::new("Ethernet", NEW, Platform::Windows, &runner).run()?;

    assert_eq!(report.previous.as_str(), "AA:BB:CC:DD:EE:FF");
    assert_eq!(report.outcome, ApplyOutcome::ManualConfigurationRequired);
    assert_eq!(runner.history(), vec!["ipconfig /all"]);
    Ok(())
}

#[test]
fn test_invalid_target_touches_nothing() {
    for bad in ["00-11-22-33-44-55", "00:11:22:33:44", "GG:11:22:33:44:55", ""] {
        let runner = ScriptedRunner::new();
        let err = InterfaceMacController::new("eth0", bad, Platform::Linux, &runner)
            .run()
            .unwrap_err();
        assert!(matches!(err, MacError::Format(_)), "{bad:?} gave {err:?}");
        assert!(runner.history().is_empty());
    }
}

#[test]
fn test_dry_run_only_reads() -> anyhow::Result<()> {
    let runner = ScriptedRunner::new().then_ok(&linux_ifconfig("eth0", OLD));

    let report = InterfaceMacController::new("eth0", NEW, Platform::Linux, &runner)
        .with_dry_run(true)
        .with_verify(true)
        .run()?;

    match &report.outcome {
        ApplyOutcome::DryRun(planned) => {
            let planned: Vec<String> = planned.iter().map(ToString::to_string).collect();
            assert_eq!(planned[1], format!("sudo ifconfig eth0 hw ether {NEW}"));
        }
        other => panic!("Expected dry run, got {other:?}"),
    }
    assert_eq!(report.verified, None);
    assert_eq!(runner.history(), vec!["ifconfig eth0"]);
    Ok(())
}

#[test]
fn test_unknown_platform_is_unsupported() {
    let runner = ScriptedRunner::new();
    let err = InterfaceMacController::new("em0", NEW, Platform::from_os_name("freebsd"), &runner)
        .run()
        .unwrap_err();

    assert!(matches!(err, MacError::UnsupportedPlatform(_)));
    assert!(runner.history().is_empty());
}
