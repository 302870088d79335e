// Copyright (c) 2026 OverTheFlow and Contributors
//
// This Source Code Form is subject to the terms of the Mozilla Public License, v. 2.0.
// If a copy of the MPL was not distributed with this file, You can obtain one at
// https://mozilla.org/MPL/2.0/.

use crate::terminal::colors;
use colored::*;
use macswap_common::mac::{self, MacAddress};
use pnet::datalink::NetworkInterface;

pub type Detail = (String, ColoredString);

pub fn mac_to_detail(key: &str, mac: &MacAddress, color: Color) -> Detail {
    (key.to_string(), mac.to_string().color(color))
}

pub fn vendor_to_detail(mac: &MacAddress) -> Option<Detail> {
    mac::get_vendor(mac).map(|vendor| ("Vendor".to_string(), vendor.color(colors::SECONDARY)))
}

pub fn state_to_detail(interface: &NetworkInterface) -> Detail {
    let state: ColoredString = if interface.is_up() {
        "up".green()
    } else {
        "down".red()
    };
    ("State".to_string(), state)
}

/// Details shown under an interface in `macswap list`.
pub fn interface_details(interface: &NetworkInterface) -> Vec<Detail> {
    let mut details: Vec<Detail> = vec![state_to_detail(interface)];

    let mac: Option<MacAddress> = interface
        .mac
        .and_then(|m| MacAddress::parse(&m.to_string()).ok());

    match mac {
        Some(mac) => {
            details.push(mac_to_detail("MAC", &mac, colors::MAC_ADDR));
            if let Some(vendor) = vendor_to_detail(&mac) {
                details.push(vendor);
            }
        }
        None => details.push(("MAC".to_string(), "none".color(colors::SEPARATOR))),
    }

    details
}
