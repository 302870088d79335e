// Copyright (c) 2026 OverTheFlow and Contributors
//
// This Source Code Form is subject to the terms of the Mozilla Public License, v. 2.0.
// If a copy of the MPL was not distributed with this file, You can obtain one at
// https://mozilla.org/MPL/2.0/.

use colored::*;
use macswap_common::{config::Config, info, mac::MacAddress, platform::Platform};
use macswap_core::{ApplyOutcome, InterfaceMacController, RunReport, SystemRunner};

use crate::terminal::{
    colors, format,
    print::{self, Print},
    prompt,
};

pub fn set(
    interface: Option<&str>,
    mac: Option<&str>,
    random: bool,
    platform: Platform,
    cfg: &Config,
) -> anyhow::Result<()> {
    let interface: String = match interface {
        Some(name) => name.to_string(),
        None => prompt::ask("Interface")?,
    };

    let target: String = match (mac, random) {
        (Some(mac), _) => mac.to_string(),
        (None, true) => {
            let mac = MacAddress::random(&mut rand::rng());
            info!("Generated random MAC address {mac}");
            mac.to_string()
        }
        (None, false) => prompt::ask("New MAC address")?,
    };

    Print::header("change mac address");
    if !Print::is_quiet() {
        print::aligned_line("Platform", platform.to_string());
        print::aligned_line("Interface", interface.as_str());
        print::aligned_line("Target", target.as_str());
    }

    let controller = InterfaceMacController::new(interface, target, platform, SystemRunner)
        .with_elevation(cfg.elevation)
        .with_dry_run(cfg.dry_run)
        .with_verify(cfg.verify);

    let report = controller.run()?;
    print_report(&report);

    Ok(())
}

fn print_report(report: &RunReport) {
    if Print::is_quiet() || report.outcome == ApplyOutcome::ManualConfigurationRequired {
        return;
    }

    print::tree_head(0, &report.interface);
    let mut details = vec![
        format::mac_to_detail("Before", &report.previous, colors::MAC_ADDR),
        format::mac_to_detail("After", &report.requested, colors::NEW_MAC_ADDR),
    ];
    if let Some(vendor) = format::vendor_to_detail(&report.requested) {
        details.push(vendor);
    }
    if let ApplyOutcome::DryRun(_) = report.outcome {
        details.push(("Mode".to_string(), "dry run".yellow()));
    }
    if report.verified == Some(true) {
        details.push(("Check".to_string(), "verified".green()));
    }
    print::as_tree(details);
}
