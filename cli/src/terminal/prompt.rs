// Copyright (c) 2026 OverTheFlow and Contributors
//
// This Source Code Form is subject to the terms of the Mozilla Public License, v. 2.0.
// If a copy of the MPL was not distributed with this file, You can obtain one at
// https://mozilla.org/MPL/2.0/.

use anyhow::{Context, ensure};
use colored::*;
use console::Term;

use crate::terminal::colors;

/// Asks for one line of input on the controlling terminal.
///
/// Empty answers are rejected so the controller never sees a blank interface.
pub fn ask(question: &str) -> anyhow::Result<String> {
    let term = Term::stdout();
    let prompt = format!(
        "{} {}: ",
        "?".color(colors::ACCENT).bold(),
        question.color(colors::PRIMARY)
    );
    term.write_str(&prompt).context("failed to write prompt")?;
    let answer = term.read_line().context("failed to read from terminal")?;
    let answer = answer.trim().to_string();
    ensure!(!answer.is_empty(), "{question} must not be empty");
    Ok(answer)
}
