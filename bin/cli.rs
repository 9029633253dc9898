use crate::applet::Applet;
use anyhow::Error as Anyhow;
use clap::Parser;
use std::io::stderr;
use tracing::{instrument, Level};
use tracing_subscriber::fmt::{format::FmtSpan, layer};
use tracing_subscriber::{filter::Targets, prelude::*, registry, util::SubscriberInitExt};

/// Command line interface.
#[derive(Parser)]
#[clap(author, version, about)]
pub struct Cli {
    /// Verbosity level of the match log, which is written to stderr.
    #[clap(short, long, default_value_t = Level::WARN)]
    verbosity: Level,

    #[clap(subcommand)]
    applet: Option<Applet>,
}

impl Cli {
    #[instrument(level = "trace", skip(self), err)]
    pub fn execute(self) -> Result<(), Anyhow> {
        let filter = Targets::new()
            .with_target("cli", self.verbosity)
            .with_target("lib::pig", self.verbosity)
            .with_default(Level::WARN);

        // Rolls and holds are spans, their close events only show when debugging.
        let spans = if self.verbosity >= Level::DEBUG {
            FmtSpan::CLOSE
        } else {
            FmtSpan::NONE
        };

        let writer = layer()
            .compact()
            .without_time()
            .with_span_events(spans)
            .with_writer(stderr);

        registry().with(filter).with(writer).init();

        self.applet.unwrap_or_default().execute()
    }
}
