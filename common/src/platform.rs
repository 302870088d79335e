// Copyright (c) 2026 OverTheFlow and Contributors
//
// This Source Code Form is subject to the terms of the Mozilla Public License, v. 2.0.
// If a copy of the MPL was not distributed with this file, You can obtain one at
// https://mozilla.org/MPL/2.0/.

//! # Host Platform
//!
//! The host operating system is resolved once at startup and handed to
//! everything that needs to branch on it. Nothing below the CLI layer ever
//! asks the OS again.

use std::fmt;

/// Operating systems the controller knows how to talk to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Platform {
    Linux,
    MacOs,
    Windows,
    /// Anything else. Keeps the raw OS name for error messages.
    Other(String),
}

impl Platform {
    /// Resolves the platform this binary was compiled for.
    pub fn detect() -> Self {
        Self::from_os_name(std::env::consts::OS)
    }

    /// Maps an OS name (as reported by `std::env::consts::OS` or typed by a user)
    /// onto a [`Platform`]. Matching is case-insensitive.
    pub fn from_os_name(name: &str) -> Self {
        match name.trim().to_ascii_lowercase().as_str() {
            "linux" => Self::Linux,
            "macos" | "darwin" => Self::MacOs,
            "windows" => Self::Windows,
            other => Self::Other(other.to_string()),
        }
    }

    /// Platforms that ship `ifconfig` and accept the down/set/up sequence.
    pub fn is_unix_like(&self) -> bool {
        matches!(self, Self::Linux | Self::MacOs)
    }
}

impl fmt::Display for Platform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Linux => write!(f, "Linux"),
            Self::MacOs => write!(f, "macOS"),
            Self::Windows => write!(f, "Windows"),
            Self::Other(name) if name.is_empty() => write!(f, "unknown"),
            Self::Other(name) => write!(f, "{name}"),
        }
    }
}

/// How mutating commands obtain root privileges.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Elevation {
    /// Prefix every mutating command with `sudo`.
    #[default]
    Sudo,
    /// Run commands as-is (already root, or the operator opted out).
    None,
}
