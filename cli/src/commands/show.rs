// Copyright (c) 2026 OverTheFlow and Contributors
//
// This Source Code Form is subject to the terms of the Mozilla Public License, v. 2.0.
// If a copy of the MPL was not distributed with this file, You can obtain one at
// https://mozilla.org/MPL/2.0/.

use macswap_common::{info, platform::Platform};
use macswap_core::{InterfaceMacController, SystemRunner};

use crate::terminal::{
    colors, format,
    print::{self, Print},
};

pub fn show(interface: &str, platform: Platform) -> anyhow::Result<()> {
    let controller = InterfaceMacController::new(interface, "", platform, SystemRunner);

    let mac = controller.current_mac()?;

    if Print::is_quiet() {
        info!("Current MAC address of {interface}: {mac}");
        return Ok(());
    }

    Print::header("current mac address");
    print::tree_head(0, interface);
    let mut details = vec![format::mac_to_detail("MAC", &mac, colors::MAC_ADDR)];
    if let Some(vendor) = format::vendor_to_detail(&mac) {
        details.push(vendor);
    }
    print::as_tree(details);

    Ok(())
}
