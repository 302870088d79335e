// Copyright (c) 2026 OverTheFlow and Contributors
//
// This Source Code Form is subject to the terms of the Mozilla Public License, v. 2.0.
// If a copy of the MPL was not distributed with this file, You can obtain one at
// https://mozilla.org/MPL/2.0/.

//! The exact command lines used on each platform.
//!
//! | Platform | Read               | Write (in order)                                        |
//! |----------|--------------------|---------------------------------------------------------|
//! | Linux    | `ifconfig <iface>` | `down`, `hw ether <mac>`, `up`                          |
//! | macOS    | `ifconfig <iface>` | `down`, `ether <mac>`, `up`                             |
//! | Windows  | `ipconfig /all`    | none                                                    |

use macswap_common::command::Invocation;
use macswap_common::mac::MacAddress;
use macswap_common::platform::{Elevation, Platform};

/// The command that prints the interface's current address, if the platform has one.
pub fn read_invocation(platform: &Platform, interface: &str) -> Option<Invocation> {
    match platform {
        Platform::Linux | Platform::MacOs => Some(Invocation::new("ifconfig", &[interface])),
        Platform::Windows => Some(Invocation::new("ipconfig", &["/all"])),
        Platform::Other(_) => None,
    }
}

/// The down/set/up triple, or `None` where there is no supported write path.
pub fn apply_sequence(
    platform: &Platform,
    interface: &str,
    mac: &MacAddress,
    elevation: Elevation,
) -> Option<[Invocation; 3]> {
    let set = match platform {
        Platform::Linux => Invocation::new("ifconfig", &[interface, "hw", "ether", mac.as_str()]),
        Platform::MacOs => Invocation::new("ifconfig", &[interface, "ether", mac.as_str()]),
        Platform::Windows | Platform::Other(_) => return None,
    };

    Some([
        Invocation::new("ifconfig", &[interface, "down"]).elevated(elevation),
        set.elevated(elevation),
        Invocation::new("ifconfig", &[interface, "up"]).elevated(elevation),
    ])
}
