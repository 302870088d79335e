// Copyright (c) 2026 OverTheFlow and Contributors
//
// This Source Code Form is subject to the terms of the Mozilla Public License, v. 2.0.
// If a copy of the MPL was not distributed with this file, You can obtain one at
// https://mozilla.org/MPL/2.0/.

//! # Interface MAC Controller
//!
//! Reads and replaces the hardware address of one named interface.
//!
//! A run walks `Validating -> Reading -> Applying` and stops at the first
//! failure. Nothing is retried and nothing is rolled back: if the set step
//! fails after the interface was brought down, it stays down.
//!
//! Success of the apply step means "no command reported a failure". Unless
//! verification is switched on, the interface is not read again afterwards.

use macswap_common::command::{CommandOutput, CommandRunner, Invocation};
use macswap_common::error::{MacError, MacResult};
use macswap_common::mac::{self, MacAddress};
use macswap_common::platform::{Elevation, Platform};
use macswap_common::{debug, info, success, warn};

use crate::{parser, platform_commands};

/// What [`InterfaceMacController::apply_mac`] actually did.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ApplyOutcome {
    /// The down/set/up sequence ran and every step exited zero.
    Applied,
    /// Dry run: these commands would have been executed.
    DryRun(Vec<Invocation>),
    /// The platform has no supported write path (Windows). Nothing was executed.
    ManualConfigurationRequired,
}

/// Summary of a completed run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunReport {
    pub interface: String,
    pub previous: MacAddress,
    pub requested: MacAddress,
    pub outcome: ApplyOutcome,
    /// `Some(true)` when the interface was re-read and matched.
    /// `None` when verification was off or nothing was applied.
    pub verified: Option<bool>,
}

pub struct InterfaceMacController<R: CommandRunner> {
    interface: String,
    target: String,
    platform: Platform,
    runner: R,
    elevation: Elevation,
    dry_run: bool,
    verify: bool,
}

impl<R: CommandRunner> InterfaceMacController<R> {
    pub fn new<I, T>(interface: I, target: T, platform: Platform, runner: R) -> Self
    where
        I: Into<String>,
        T: Into<String>,
    {
        Self {
            interface: interface.into(),
            target: target.into(),
            platform,
            runner,
            elevation: Elevation::default(),
            dry_run: false,
            verify: false,
        }
    }

    pub fn with_elevation(mut self, elevation: Elevation) -> Self {
        self.elevation = elevation;
        self
    }

    pub fn with_dry_run(mut self, dry_run: bool) -> Self {
        self.dry_run = dry_run;
        self
    }

    pub fn with_verify(mut self, verify: bool) -> Self {
        self.verify = verify;
        self
    }

    /// Pure format check, see [`mac::is_valid`].
    pub fn validate(mac: &str) -> bool {
        mac::is_valid(mac)
    }

    /// Asks the OS for the interface's current hardware address.
    pub fn current_mac(&self) -> MacResult<MacAddress> {
        let invocation = platform_commands::read_invocation(&self.platform, &self.interface)
            .ok_or_else(|| MacError::UnsupportedPlatform(self.platform.clone()))?;

        let output = self.execute(&invocation).map_err(|detail| MacError::Retrieval {
            interface: self.interface.clone(),
            detail,
        })?;

        let found = if self.platform.is_unix_like() {
            parser::parse_ifconfig(&output.stdout)
        } else {
            parser::parse_ipconfig(&output.stdout)
        };

        found.ok_or_else(|| MacError::MacNotFound {
            interface: self.interface.clone(),
        })
    }

    /// Installs `target` on the interface with the platform's down/set/up sequence.
    ///
    /// Aborts on the first failing step. Later steps are never attempted and
    /// earlier ones are not undone.
    pub fn apply_mac(&self, target: &MacAddress) -> MacResult<ApplyOutcome> {
        let sequence = match platform_commands::apply_sequence(
            &self.platform,
            &self.interface,
            target,
            self.elevation,
        ) {
            Some(sequence) => sequence,
            None if self.platform == Platform::Windows => {
                info!(
                    "Changing the MAC address is not supported on Windows. \
                     Use the adapter's advanced properties in Device Manager or a third-party tool."
                );
                return Ok(ApplyOutcome::ManualConfigurationRequired);
            }
            None => return Err(MacError::UnsupportedPlatform(self.platform.clone())),
        };

        if self.dry_run {
            for invocation in &sequence {
                info!("Would run: {invocation}");
            }
            return Ok(ApplyOutcome::DryRun(sequence.to_vec()));
        }

        for invocation in &sequence {
            self.execute(invocation).map_err(|detail| MacError::Apply {
                interface: self.interface.clone(),
                command: invocation.to_string(),
                detail,
            })?;
        }

        Ok(ApplyOutcome::Applied)
    }

    /// Validate, read, apply and (optionally) verify, reporting each step.
    pub fn run(&self) -> MacResult<RunReport> {
        debug!(verbosity = 1, "Validating '{}'", self.target);
        if !Self::validate(&self.target) {
            return Err(MacError::Format(self.target.clone()));
        }
        let requested = MacAddress::parse(&self.target)?;

        debug!(verbosity = 1, "Reading current address of {}", self.interface);
        let previous = self.current_mac()?;
        info!("Current MAC address of {}: {}", self.interface, previous);

        if previous.same_address(&requested) {
            warn!("{} already uses {}", self.interface, requested);
        }

        debug!(verbosity = 1, "Applying {} to {}", requested, self.interface);
        let outcome = self.apply_mac(&requested)?;

        let verified = match outcome {
            ApplyOutcome::Applied if self.verify => {
                let actual = self.current_mac()?;
                if !actual.same_address(&requested) {
                    return Err(MacError::Verification {
                        interface: self.interface.clone(),
                        expected: requested.to_string(),
                        actual: actual.to_string(),
                    });
                }
                Some(true)
            }
            _ => None,
        };

        if outcome == ApplyOutcome::Applied {
            success!(
                "MAC address of {} changed from {} to {}",
                self.interface,
                previous,
                requested
            );
        }

        Ok(RunReport {
            interface: self.interface.clone(),
            previous,
            requested,
            outcome,
            verified,
        })
    }

    /// Runs one command, turning spawn errors and non-zero exits into a detail string.
    fn execute(&self, invocation: &Invocation) -> Result<CommandOutput, String> {
        let output = self
            .runner
            .run(invocation)
            .map_err(|e| format!("`{invocation}` could not be started: {e}"))?;

        if output.success() {
            Ok(output)
        } else {
            Err(output.failure_detail())
        }
    }
}
