// Copyright (c) 2026 OverTheFlow and Contributors
//
// This Source Code Form is subject to the terms of the Mozilla Public License, v. 2.0.
// If a copy of the MPL was not distributed with this file, You can obtain one at
// https://mozilla.org/MPL/2.0/.

use std::io;
use std::process::Command;

use macswap_common::command::{CommandOutput, CommandRunner, Invocation};
use macswap_common::debug;

/// Runs invocations as real child processes and waits for them.
///
/// There is no timeout: a hung `ifconfig` hangs the caller.
pub struct SystemRunner;

impl CommandRunner for SystemRunner {
    fn run(&self, invocation: &Invocation) -> io::Result<CommandOutput> {
        debug!(verbosity = 1, "Running `{invocation}`");

        let output = Command::new(&invocation.program)
            .args(&invocation.args)
            .output()?;

        Ok(CommandOutput {
            code: output.status.code(),
            stdout: String::from_utf8_lossy(&output.stdout).to_string(),
            stderr: String::from_utf8_lossy(&output.stderr).to_string(),
        })
    }
}
