// Copyright (c) 2026 OverTheFlow and Contributors
//
// This Source Code Form is subject to the terms of the Mozilla Public License, v. 2.0.
// If a copy of the MPL was not distributed with this file, You can obtain one at
// https://mozilla.org/MPL/2.0/.

//! # Command Line Interface Definitions
//!
//! The *definition* of arguments, flags and help text lives here; each
//! subcommand's execution logic lives in its own submodule.
//!
//! [`CommandLine`] carries the global flags, [`Commands`] the mutually
//! exclusive operation modes. `From<&CommandLine> for Config` keeps the core
//! crates unaware of clap.

pub mod list;
pub mod set;
pub mod show;

use clap::{ArgAction, Parser, Subcommand};
use macswap_common::{config::Config, platform::Elevation};

#[derive(Parser, Debug)]
#[command(name = "macswap")]
#[command(about = "Read or change the hardware (MAC) address of a network interface.")]
#[command(version)]
pub struct CommandLine {
    #[command(subcommand)]
    pub command: Commands,

    /// Hide the banner
    #[arg(long = "no-banner", global = true)]
    pub no_banner: bool,

    /// Reduce UI visual density (status lines only)
    #[arg(short = 'q', long = "quiet", action = ArgAction::Count, global = true)]
    pub quiet: u8,

    /// Increase logging detail (-v: debug logs and executed commands)
    #[arg(short = 'v', long = "verbose", action = ArgAction::Count, global = true)]
    pub verbosity: u8,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Change the MAC address of an interface (prompts for missing values)
    #[command(alias = "s")]
    Set {
        /// Interface name, e.g. eth0 or en0
        #[arg(value_name = "INTERFACE")]
        interface: Option<String>,

        /// New address in XX:XX:XX:XX:XX:XX form
        #[arg(value_name = "MAC", conflicts_with = "random")]
        mac: Option<String>,

        /// Generate a random locally administered address
        #[arg(short = 'r', long = "random")]
        random: bool,

        /// Re-read the interface afterwards and fail on mismatch
        #[arg(long = "verify")]
        verify: bool,

        /// Print the commands instead of running them
        #[arg(short = 'n', long = "dry-run")]
        dry_run: bool,

        /// Do not prefix commands with sudo
        #[arg(long = "no-sudo")]
        no_sudo: bool,
    },

    /// Show the current MAC address of an interface
    #[command(alias = "g")]
    Show {
        #[arg(value_name = "INTERFACE")]
        interface: String,
    },

    /// List local interfaces and their MAC addresses
    #[command(alias = "l")]
    List,
}

impl CommandLine {
    pub fn parse_args() -> Self {
        Self::parse()
    }
}

/// Picks how mutating commands get root.
pub fn elevation_for(no_sudo: bool, running_as_root: bool) -> Elevation {
    if no_sudo || running_as_root {
        Elevation::None
    } else {
        Elevation::Sudo
    }
}

impl From<&CommandLine> for Config {
    fn from(cmd: &CommandLine) -> Self {
        let mut cfg = Self {
            no_banner: cmd.no_banner,
            quiet: cmd.quiet,
            verbosity: cmd.verbosity,
            ..Default::default()
        };

        if let Commands::Set {
            verify,
            dry_run,
            no_sudo,
            ..
        } = &cmd.command
        {
            cfg.verify = *verify;
            cfg.dry_run = *dry_run;
            cfg.elevation = elevation_for(*no_sudo, is_root::is_root());
        }

        cfg
    }
}
