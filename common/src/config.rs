// Copyright (c) 2026 OverTheFlow and Contributors
//
// This Source Code Form is subject to the terms of the Mozilla Public License, v. 2.0.
// If a copy of the MPL was not distributed with this file, You can obtain one at
// https://mozilla.org/MPL/2.0/.

use crate::platform::Elevation;

/// Global configuration options for a single run.
///
/// This struct controls the runtime behavior of the application, including
/// UI verbosity and how the address change is carried out.
/// It is constructed from CLI arguments; nothing is persisted.
#[derive(Debug, Clone, Default)]
pub struct Config {
    /// Toggles the display of the startup banner.
    pub no_banner: bool,

    /// Controls the visual density of the terminal output.
    ///
    /// # Levels
    /// * **0** (Default): Banner, headers and colored status lines.
    /// * **1+**: Status lines only.
    pub quiet: u8,

    /// How many `-v` flags were given. Events tagged with a higher
    /// `verbosity` field are suppressed.
    pub verbosity: u8,

    /// Print the down/set/up sequence instead of executing it.
    ///
    /// The current address is still read from the interface.
    pub dry_run: bool,

    /// Re-read the interface after applying and fail if the address
    /// does not match the requested one.
    pub verify: bool,

    /// Whether mutating commands are wrapped in `sudo`.
    pub elevation: Elevation,
}
