// Copyright (c) 2026 OverTheFlow and Contributors
//
// This Source Code Form is subject to the terms of the Mozilla Public License, v. 2.0.
// If a copy of the MPL was not distributed with this file, You can obtain one at
// https://mozilla.org/MPL/2.0/.

//! # Terminal Logging
//!
//! Wires `tracing` to stderr and renders each event with a fixed, colored
//! prefix so a human can tell outcomes apart at a glance:
//!
//! ```text
//! [INFO] Current MAC address of eth0: aa:bb:cc:dd:ee:ff
//! [SUCCESS] MAC address of eth0 changed from aa:bb:cc:dd:ee:ff to 02:00:00:00:00:01
//! [ERROR] MAC address change failed on 'eth0' at `sudo ifconfig eth0 down`: ...
//! ```

use colored::*;
use tracing::field::{Field, Visit};
use tracing::{Event, Level, Subscriber};
use tracing_subscriber::fmt::FormatEvent;
use tracing_subscriber::fmt::format::{self, Writer};
use tracing_subscriber::registry::LookupSpan;
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

/// Target used by [`mprint!`](crate::mprint) for raw, prefix-less lines.
pub const PRINT_TARGET: &str = "macswap::print";

/// Wires up the global tracing subscriber.
///
/// `RUST_LOG` overrides the filter; otherwise `-v` enables debug events.
pub fn init_logging(verbosity: u8) {
    let default_filter = match verbosity {
        0 => "info",
        _ => "debug",
    };
    let filter_layer =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter));

    let formatting_layer = tracing_subscriber::fmt::layer()
        .event_format(MacswapFormatter {
            max_verbosity: verbosity,
        })
        .with_writer(std::io::stderr);

    tracing_subscriber::registry()
        .with(filter_layer)
        .with(formatting_layer)
        .init();
}

pub struct MacswapFormatter {
    pub max_verbosity: u8,
}

/// Maps a level and `status` field onto the printed prefix.
pub fn prefix_for(level: &Level, status: Option<&str>) -> ColoredString {
    match *level {
        Level::TRACE => "[TRACE]".dimmed(),
        Level::DEBUG => "[DEBUG]".blue(),
        Level::INFO => match status {
            Some("success") => "[SUCCESS]".green().bold(),
            _ => "[INFO]".cyan().bold(),
        },
        Level::WARN => "[WARN]".yellow().bold(),
        Level::ERROR => "[ERROR]".red().bold(),
    }
}

impl<S, N> FormatEvent<S, N> for MacswapFormatter
where
    S: Subscriber + for<'a> LookupSpan<'a>,
    N: for<'a> format::FormatFields<'a> + 'static,
{
    fn format_event(
        &self,
        _ctx: &tracing_subscriber::fmt::FmtContext<'_, S, N>,
        mut writer: Writer<'_>,
        event: &Event<'_>,
    ) -> std::fmt::Result {
        let meta = event.metadata();

        if meta.target() == PRINT_TARGET {
            let mut visitor = RawVisitor::new(writer.by_ref());
            event.record(&mut visitor);
            return writeln!(writer);
        }

        let mut meta_visitor = MetaVisitor::default();
        event.record(&mut meta_visitor);

        let event_verbosity = meta_visitor.verbosity.unwrap_or(0);
        if event_verbosity > self.max_verbosity {
            return Ok(());
        }

        let prefix = prefix_for(meta.level(), meta_visitor.status.as_deref());
        write!(writer, "{prefix} ")?;

        let mut output_visitor = OutputVisitor::new(writer.by_ref());
        event.record(&mut output_visitor);

        writeln!(writer)
    }
}

#[derive(Default)]
struct MetaVisitor {
    status: Option<String>,
    verbosity: Option<u8>,
}

impl Visit for MetaVisitor {
    fn record_debug(&mut self, _field: &Field, _value: &dyn std::fmt::Debug) {}

    fn record_u64(&mut self, field: &Field, value: u64) {
        if field.name() == "verbosity" {
            self.verbosity = Some(u8::try_from(value).unwrap_or(u8::MAX));
        }
    }

    fn record_i64(&mut self, field: &Field, value: i64) {
        if field.name() == "verbosity" {
            self.verbosity = Some(u8::try_from(value.max(0)).unwrap_or(u8::MAX));
        }
    }

    fn record_str(&mut self, field: &Field, value: &str) {
        if field.name() == "status" {
            self.status = Some(value.to_string());
        }
    }
}

struct OutputVisitor<'a> {
    writer: Writer<'a>,
}

impl<'a> OutputVisitor<'a> {
    fn new(writer: Writer<'a>) -> Self {
        Self { writer }
    }
}

impl Visit for OutputVisitor<'_> {
    fn record_debug(&mut self, field: &Field, value: &dyn std::fmt::Debug) {
        if field.name() == "status" || field.name() == "verbosity" {
            return;
        }

        if field.name() == "message" {
            let _ = write!(self.writer, "{:?}", value);
        } else {
            let _ = write!(self.writer, " {}={:?}", field.name().italic(), value);
        }
    }

    fn record_str(&mut self, field: &Field, value: &str) {
        if field.name() == "status" {
            return;
        }
        if field.name() == "message" {
            let _ = write!(self.writer, "{}", value);
        } else {
            let _ = write!(self.writer, " {}={}", field.name().italic(), value);
        }
    }
}

struct RawVisitor<'a> {
    writer: Writer<'a>,
}

impl<'a> RawVisitor<'a> {
    fn new(writer: Writer<'a>) -> Self {
        Self { writer }
    }
}

impl Visit for RawVisitor<'_> {
    // `raw_msg = %..` arrives here; Debug of a DisplayValue forwards to Display
    fn record_debug(&mut self, field: &Field, value: &dyn std::fmt::Debug) {
        if field.name() == "raw_msg" {
            let _ = write!(self.writer, "{:?}", value);
        }
    }

    fn record_str(&mut self, field: &Field, value: &str) {
        if field.name() == "raw_msg" {
            let _ = write!(self.writer, "{}", value);
        }
    }
}
