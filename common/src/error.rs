// Copyright (c) 2026 OverTheFlow and Contributors
//
// This Source Code Form is subject to the terms of the Mozilla Public License, v. 2.0.
// If a copy of the MPL was not distributed with this file, You can obtain one at
// https://mozilla.org/MPL/2.0/.

use thiserror::Error;

use crate::platform::Platform;

pub type MacResult<T> = Result<T, MacError>;

/// Every way a lookup or change of an interface's hardware address can fail.
#[derive(Error, Debug)]
pub enum MacError {
    /// The requested address is not in `XX:XX:XX:XX:XX:XX` form.
    #[error("invalid MAC address '{0}' (expected XX:XX:XX:XX:XX:XX)")]
    Format(String),

    #[error("could not retrieve the MAC address of '{interface}': {detail}")]
    Retrieval { interface: String, detail: String },

    /// The read command succeeded but printed nothing that looks like a MAC.
    #[error("MAC address not found for interface '{interface}'")]
    MacNotFound { interface: String },

    #[error("MAC address change failed on '{interface}' at `{command}`: {detail}")]
    Apply {
        interface: String,
        command: String,
        detail: String,
    },

    #[error("unsupported platform: {0}")]
    UnsupportedPlatform(Platform),

    #[error("'{interface}' reports {actual} after the change, expected {expected}")]
    Verification {
        interface: String,
        expected: String,
        actual: String,
    },
}

impl MacError {
    /// True for both flavours of read failure.
    pub fn is_retrieval(&self) -> bool {
        matches!(self, Self::Retrieval { .. } | Self::MacNotFound { .. })
    }
}
