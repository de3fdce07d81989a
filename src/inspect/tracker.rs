//! Foreground-window observation streams.
//!
//! The foreground window is a poll-only query, so the tracker exposes it
//! as a pull-based stream: one sample per tick, sleeping only between
//! ticks. Nothing is spawned; consumers drive the polling cadence.

use std::time::Duration;

use futures::{Stream, StreamExt, future};

use crate::platform::{WindowHandle, WindowSystem};

/// One foreground sample per tick. The first sample is immediate; every
/// later one follows a sleep of `interval`.
pub fn observations<S: WindowSystem>(
    system: &S,
    interval: Duration,
) -> impl Stream<Item = WindowHandle> + '_ {
    futures::stream::unfold(true, move |first| async move {
        if !first {
            tokio::time::sleep(interval).await;
        }
        Some((system.foreground_window(), false))
    })
}

/// Keep only samples that differ from the previous one. The previous
/// sample starts out absent, so the first sample always passes.
pub fn changes(
    samples: impl Stream<Item = WindowHandle>,
) -> impl Stream<Item = WindowHandle> {
    samples
        .scan(None, |previous: &mut Option<WindowHandle>, current| {
            let changed = *previous != Some(current);
            *previous = Some(current);
            future::ready(Some(changed.then_some(current)))
        })
        .filter_map(|sample| future::ready(sample))
}
