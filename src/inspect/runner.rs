//! The three inspection modes, driving reports from the tracker streams.

use std::io::{self, Write};
use std::pin::pin;
use std::time::Duration;

use futures::{Stream, StreamExt, future};

use crate::config::Verbosity;
use crate::inspect::report::{self, ReportOutcome};
use crate::inspect::tracker;
use crate::platform::{WindowHandle, WindowSystem};

/// Options governing one inspector run.
#[derive(Debug, Clone)]
pub struct InspectOptions {
    pub brief: bool,
    pub poll_interval: Duration,
    pub verbosity: Verbosity,
}

impl Default for InspectOptions {
    fn default() -> Self {
        InspectOptions {
            brief: false,
            poll_interval: Duration::from_millis(100),
            verbosity: Verbosity::Quiet,
        }
    }
}

/// Runs inspection invocations against a window system, writing every
/// report to the sink it was constructed with.
pub struct Inspector<'a, S, W> {
    system: &'a S,
    out: W,
    options: InspectOptions,
}

impl<'a, S: WindowSystem, W: Write> Inspector<'a, S, W> {
    pub fn new(system: &'a S, out: W, options: InspectOptions) -> Self {
        Inspector {
            system,
            out,
            options,
        }
    }

    /// Report the target once, immediately. No polling.
    pub fn inspect(&mut self, target: WindowHandle) -> io::Result<()> {
        self.report(target).map(|_| ())
    }

    /// Poll until the target is the foreground window, then report once.
    pub async fn wait_foreground(&mut self, target: WindowHandle) -> io::Result<()> {
        report::write_timestamp_header(&mut self.out)?;
        writeln!(
            self.out,
            "Waiting for {target} to become the foreground window..."
        )?;

        let system = self.system;
        let samples = tracker::observations(system, self.options.poll_interval);
        self.wait_stream(samples, target).await
    }

    /// Report every foreground change, forever.
    pub async fn monitor_foreground(&mut self) -> io::Result<()> {
        report::write_timestamp_header(&mut self.out)?;
        writeln!(self.out, "Monitoring the foreground window for changes...")?;

        let system = self.system;
        let samples = tracker::observations(system, self.options.poll_interval);
        self.monitor_stream(samples).await
    }

    async fn wait_stream(
        &mut self,
        samples: impl Stream<Item = WindowHandle>,
        target: WindowHandle,
    ) -> io::Result<()> {
        let verbosity = self.options.verbosity;
        let mut matches = pin!(samples.filter(move |observed| {
            if verbosity.log_samples() {
                eprintln!("observed foreground: {observed}");
            }
            future::ready(*observed == target)
        }));

        if let Some(observed) = matches.next().await {
            if verbosity.log_gating() {
                eprintln!("{observed} reached the foreground");
            }
            self.report(observed)?;
        }
        Ok(())
    }

    async fn monitor_stream(
        &mut self,
        samples: impl Stream<Item = WindowHandle>,
    ) -> io::Result<()> {
        let verbosity = self.options.verbosity;
        let samples = samples.inspect(move |observed| {
            if verbosity.log_samples() {
                eprintln!("observed foreground: {observed}");
            }
        });

        let mut changed = pin!(tracker::changes(samples));
        while let Some(foreground) = changed.next().await {
            if verbosity.log_gating() {
                eprintln!("foreground changed: {foreground}");
            }
            self.report(foreground)?;
        }
        Ok(())
    }

    fn report(&mut self, target: WindowHandle) -> io::Result<ReportOutcome> {
        report::write_report(&mut self.out, self.system, target, self.options.brief)
    }
}
