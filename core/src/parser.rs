// Copyright (c) 2026 OverTheFlow and Contributors
//
// This Source Code Form is subject to the terms of the Mozilla Public License, v. 2.0.
// If a copy of the MPL was not distributed with this file, You can obtain one at
// https://mozilla.org/MPL/2.0/.

//! Scrapes hardware addresses out of `ifconfig` and `ipconfig /all` output.

use std::sync::OnceLock;

use macswap_common::mac::MacAddress;
use regex::Regex;

static IFCONFIG_ETHER: OnceLock<Regex> = OnceLock::new();
static IPCONFIG_PHYSICAL: OnceLock<Regex> = OnceLock::new();

fn ifconfig_ether() -> &'static Regex {
    IFCONFIG_ETHER
        .get_or_init(|| Regex::new(r"ether ([0-9a-fA-F:]{17})").expect("ifconfig pattern is valid"))
}

fn ipconfig_physical() -> &'static Regex {
    IPCONFIG_PHYSICAL.get_or_init(|| {
        Regex::new(r"([a-fA-F0-9]{2}[-:]){5}[a-fA-F0-9]{2}").expect("ipconfig pattern is valid")
    })
}

/// Finds the address following the `ether` marker in `ifconfig <iface>` output.
///
/// A 17-character capture that is not six proper octets (`aa:bb::cc:dd:ee:f`)
/// is treated as no match.
pub fn parse_ifconfig(output: &str) -> Option<MacAddress> {
    let caps = ifconfig_ether().captures(output)?;
    MacAddress::parse(caps.get(1)?.as_str()).ok()
}

/// Returns the first MAC-shaped token anywhere in `ipconfig /all` output.
///
/// `ipconfig` prints every adapter, so this is whichever one comes first,
/// not necessarily the one the operator named.
pub fn parse_ipconfig(output: &str) -> Option<MacAddress> {
    let found = ipconfig_physical().find(output)?;
    MacAddress::normalize(found.as_str()).ok()
}
