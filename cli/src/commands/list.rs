// Copyright (c) 2026 OverTheFlow and Contributors
//
// This Source Code Form is subject to the terms of the Mozilla Public License, v. 2.0.
// If a copy of the MPL was not distributed with this file, You can obtain one at
// https://mozilla.org/MPL/2.0/.

use anyhow::ensure;
use macswap_common::info;
use pnet::datalink::{self, NetworkInterface};

use crate::{
    mprint,
    terminal::{
        format,
        print::{self, Print},
    },
};

pub fn list() -> anyhow::Result<()> {
    let mut interfaces: Vec<NetworkInterface> = datalink::interfaces()
        .into_iter()
        .filter(|i| !i.is_loopback())
        .collect();

    ensure!(!interfaces.is_empty(), "No network interfaces found");

    // wired first, like most people expect
    interfaces.sort_by_key(|i| if i.name.starts_with('e') { 0 } else { 1 });

    if Print::is_quiet() {
        for intf in &interfaces {
            let mac = intf.mac.map(|m| m.to_string()).unwrap_or_else(|| "-".into());
            info!("{} {}", intf.name, mac);
        }
        return Ok(());
    }

    Print::header("network interfaces");
    for (idx, intf) in interfaces.iter().enumerate() {
        print::tree_head(idx, &intf.name);
        print::as_tree(format::interface_details(intf));

        if idx + 1 != interfaces.len() {
            mprint!();
        }
    }

    Ok(())
}
