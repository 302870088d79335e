// Copyright (c) 2026 OverTheFlow and Contributors
//
// This Source Code Form is subject to the terms of the Mozilla Public License, v. 2.0.
// If a copy of the MPL was not distributed with this file, You can obtain one at
// https://mozilla.org/MPL/2.0/.

//! # macswap CLI Entry Point
//!
//! Bootstraps logging, maps clap arguments onto [`Config`], resolves the host
//! platform once and dispatches to the selected command.
//!
//! This is the only error boundary: whatever a command returns is logged as a
//! single `[ERROR]` line and turned into a non-zero [`ExitCode`].

mod commands;
mod terminal;

use std::process::ExitCode;

use macswap_common::{config::Config, debug, error, platform::Platform};

use crate::{
    commands::{CommandLine, Commands, list, set, show},
    terminal::{logging, print::Print},
};

fn main() -> ExitCode {
    let commands = CommandLine::parse_args();
    logging::init_logging(commands.verbosity);

    let cfg = Config::from(&commands);

    let _ = Print::init(&cfg);
    Print::banner();

    let platform = Platform::detect();
    debug!(verbosity = 1, "Detected platform: {platform}");

    let result = match &commands.command {
        Commands::Set {
            interface,
            mac,
            random,
            ..
        } => set::set(interface.as_deref(), mac.as_deref(), *random, platform, &cfg),
        Commands::Show { interface } => show::show(interface, platform),
        Commands::List => list::list(),
    };

    let exit_code = match result {
        Ok(_) => ExitCode::SUCCESS,
        Err(e) => {
            error!("{e:#}");
            ExitCode::FAILURE
        }
    };

    Print::end_of_program();

    exit_code
}
