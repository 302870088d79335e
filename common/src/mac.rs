// Copyright (c) 2026 OverTheFlow and Contributors
//
// This Source Code Form is subject to the terms of the Mozilla Public License, v. 2.0.
// If a copy of the MPL was not distributed with this file, You can obtain one at
// https://mozilla.org/MPL/2.0/.

//! This module is used for **Medium Access Control (MAC)** address handling.
//!
//! A [`MacAddress`] can only be obtained through validation, so any value of the
//! type is guaranteed to be in canonical `XX:XX:XX:XX:XX:XX` form.
//!
//! It also wraps the **Organizationally unique identifier (OUI)** database,
//! thus being able to link a vendor (e.g Cisco) to a MAC address.

use std::fmt;
use std::sync::OnceLock;

use mac_oui::Oui;
use rand::Rng;
use regex::Regex;

use crate::error::{MacError, MacResult};

static CANONICAL: OnceLock<Regex> = OnceLock::new();
static OUI_DB: OnceLock<Option<Oui>> = OnceLock::new();

fn canonical() -> &'static Regex {
    CANONICAL.get_or_init(|| {
        Regex::new(r"^([0-9A-Fa-f]{2}:){5}[0-9A-Fa-f]{2}$").expect("canonical MAC pattern is valid")
    })
}

/// Returns `true` iff `mac` is six colon-separated pairs of hex digits.
///
/// Hyphenated forms are rejected; see [`MacAddress::normalize`].
pub fn is_valid(mac: &str) -> bool {
    canonical().is_match(mac)
}

/// A hardware address in canonical colon-separated form.
///
/// The letter case given by the caller (or the OS) is preserved.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct MacAddress(String);

impl MacAddress {
    /// Accepts only the canonical form. Surrounding whitespace is ignored.
    pub fn parse(input: &str) -> MacResult<Self> {
        let trimmed = input.trim();
        if is_valid(trimmed) {
            Ok(Self(trimmed.to_string()))
        } else {
            Err(MacError::Format(input.to_string()))
        }
    }

    /// Like [`MacAddress::parse`] but first turns `AA-BB-..` into `AA:BB:..`.
    ///
    /// Meant for addresses printed by platform tools, not for operator input.
    pub fn normalize(input: &str) -> MacResult<Self> {
        Self::parse(&input.trim().replace('-', ":"))
    }

    /// A random locally administered unicast address.
    pub fn random<R: Rng + ?Sized>(rng: &mut R) -> Self {
        let mut octets = [0u8; 6];
        rng.fill(&mut octets[..]);
        // set the locally-administered bit, clear the multicast bit
        octets[0] = (octets[0] | 0b0000_0010) & 0b1111_1110;
        let text = octets
            .iter()
            .map(|o| format!("{o:02x}"))
            .collect::<Vec<_>>()
            .join(":");
        Self(text)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Compares two addresses ignoring letter case.
    pub fn same_address(&self, other: &MacAddress) -> bool {
        self.0.eq_ignore_ascii_case(&other.0)
    }
}

impl fmt::Display for MacAddress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Retrieves or initializes the **Organizationally unique identifier** database.
///
/// A database that fails to load simply disables vendor lookups.
fn get_oui_db() -> Option<&'static Oui> {
    OUI_DB.get_or_init(|| Oui::default().ok()).as_ref()
}

/// Identify the vendor of a MAC address.
pub fn get_vendor(mac: &MacAddress) -> Option<String> {
    let db = get_oui_db()?;
    match db.lookup_by_mac(mac.as_str()) {
        Ok(Some(entry)) => Some(entry.company_name.clone()),
        _ => None,
    }
}

// ╔════════════════════════════════════════════╗
// ║ ████████╗███████╗███████╗████████╗███████╗ ║
// ║ ╚══██╔══╝██╔════╝██╔════╝╚══██╔══╝██╔════╝ ║
// ║    ██║   █████╗  ███████╗   ██║   ███████╗ ║
// ║    ██║   ██╔══╝  ╚════██║   ██║   ╚════██║ ║
// ║    ██║   ███████╗███████║   ██║   ███████║ ║
// ║    ╚═╝   ╚══════╝╚══════╝   ╚═╝   ╚══════╝ ║
// ╚════════════════════════════════════════════╝

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_canonical_examples() {
        assert!(is_valid("00:11:22:33:44:55"));
        assert!(is_valid("aa:BB:cc:DD:ee:FF"));
        assert!(!is_valid("00-11-22-33-44-55"));
        assert!(!is_valid("00:11:22:33:44"));
        assert!(!is_valid("GG:11:22:33:44:55"));
        assert!(!is_valid("00:11:22:33:44:55:66"));
        assert!(!is_valid("0011:22:33:44:55"));
        assert!(!is_valid("00:11:22:33:44:55:"));
        assert!(!is_valid(""));
    }

    #[test]
    fn test_parse_keeps_case_and_trims() {
        let mac = MacAddress::parse("  AA:bb:CC:dd:EE:ff\n").unwrap();
        assert_eq!(mac.as_str(), "AA:bb:CC:dd:EE:ff");
    }

    #[test]
    fn test_parse_rejects_hyphens() {
        let err = MacAddress::parse("AA-BB-CC-DD-EE-FF").unwrap_err();
        assert!(matches!(err, MacError::Format(s) if s == "AA-BB-CC-DD-EE-FF"));
    }

    #[test]
    fn test_normalize_hyphens() {
        let mac = MacAddress::normalize("AA-BB-CC-DD-EE-FF").unwrap();
        assert_eq!(mac.as_str(), "AA:BB:CC:DD:EE:FF");
    }

    #[test]
    fn test_same_address_ignores_case() {
        let a = MacAddress::parse("aa:bb:cc:dd:ee:ff").unwrap();
        let b = MacAddress::parse("AA:BB:CC:DD:EE:FF").unwrap();
        let c = MacAddress::parse("AA:BB:CC:DD:EE:00").unwrap();
        assert!(a.same_address(&b));
        assert!(!a.same_address(&c));
    }

    #[test]
    fn test_random_is_local_unicast() {
        let mut rng = rand::rng();
        for _ in 0..64 {
            let mac = MacAddress::random(&mut rng);
            assert!(is_valid(mac.as_str()), "{mac} is not canonical");
            let first = u8::from_str_radix(&mac.as_str()[..2], 16).unwrap();
            assert_eq!(first & 0b10, 0b10, "locally administered bit missing in {mac}");
            assert_eq!(first & 0b01, 0, "multicast bit set in {mac}");
        }
    }

    #[test]
    fn test_unknown_vendor_lookup() {
        // This is a locally administered address (no vendors linked to it)
        let mac = MacAddress::parse("DE:AD:BE:EF:00:00").unwrap();
        assert!(get_vendor(&mac).is_none(), "Should return None for random/unknown MAC");
    }

    proptest! {
        #[test]
        fn prop_canonical_strings_validate(s in "([0-9A-Fa-f]{2}:){5}[0-9A-Fa-f]{2}") {
            prop_assert!(is_valid(&s));
            prop_assert!(MacAddress::parse(&s).is_ok());
        }

        #[test]
        fn prop_hyphenated_strings_fail_but_normalize(s in "([0-9A-Fa-f]{2}-){5}[0-9A-Fa-f]{2}") {
            prop_assert!(!is_valid(&s));
            let normalized = MacAddress::normalize(&s).unwrap();
            prop_assert_eq!(normalized.as_str(), s.replace('-', ":"));
        }

        #[test]
        fn prop_wrong_group_count_fails(n in 1usize..12, byte in "[0-9A-Fa-f]{2}") {
            prop_assume!(n != 6);
            let s = vec![byte; n].join(":");
            prop_assert!(!is_valid(&s));
        }

        #[test]
        fn prop_non_hex_octet_fails(pos in 0usize..6, bad in "[G-Zg-z]") {
            let mut groups = vec!["00".to_string(); 6];
            groups[pos] = format!("{bad}0");
            prop_assert!(!is_valid(&groups.join(":")));
        }

        #[test]
        fn prop_validate_is_stable(s in "\\PC{0,24}") {
            let first = is_valid(&s);
            for _ in 0..3 {
                prop_assert_eq!(is_valid(&s), first);
            }
        }
    }
}
