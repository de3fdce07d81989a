//! Report rendering.
//!
//! Every report goes to an explicit writable sink so callers (and tests)
//! decide where the text lands. A report is best-effort: the ownership
//! query is the only gate, and any later sub-query failure prints a
//! notice and leaves the rest of the report intact.

use std::io::{self, Write};

use crate::inspect::flags::describe_bits;
use crate::platform::{INPUT_STATE_FLAG_NAMES, WindowHandle, WindowSystem};

/// What a report attempt produced.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReportOutcome {
    Reported,
    InvalidWindow,
}

fn local_timestamp() -> String {
    // e.g. "Tue May 16 03:24:31.123 PM"
    chrono::Local::now()
        .format("%a %b %d %I:%M:%S%.3f %p")
        .to_string()
}

/// The banner preceding every report block and mode announcement.
pub fn write_timestamp_header<W: Write>(out: &mut W) -> io::Result<()> {
    writeln!(
        out,
        "\n------------------------ {} ------------------------",
        local_timestamp()
    )
}

fn bool_str(value: bool) -> &'static str {
    if value { "TRUE" } else { "FALSE" }
}

fn write_window_names<S: WindowSystem, W: Write>(
    out: &mut W,
    system: &S,
    window: WindowHandle,
) -> io::Result<()> {
    writeln!(out, "Name: \"{}\"", system.window_text(window))?;
    writeln!(out, "Class name: \"{}\"", system.window_class(window))
}

/// Emit one report for `target`: timestamp banner, then either the
/// invalid-window notice or the field battery (identity, related windows,
/// state predicates, and unless `brief` the extended blocks).
pub fn write_report<S: WindowSystem, W: Write>(
    out: &mut W,
    system: &S,
    target: WindowHandle,
    brief: bool,
) -> io::Result<ReportOutcome> {
    write_timestamp_header(out)?;

    let Some(owner) = system.window_owner(target) else {
        writeln!(out, "Invalid window {target}")?;
        return Ok(ReportOutcome::InvalidWindow);
    };

    writeln!(out, "HWND: {target}")?;
    match system.process_name(owner.process_id) {
        Some(name) => writeln!(out, "pid: {} ({name})", owner.process_id)?,
        None => writeln!(out, "pid: {}", owner.process_id)?,
    }
    writeln!(out, "tid: {}", owner.thread_id)?;
    write_window_names(out, system, target)?;
    writeln!(out)?;

    if let Some(root) = system.root_owner(target).filter(|r| *r != target) {
        writeln!(out, "Root owner: {root}")?;
        write_window_names(out, system, root)?;
        writeln!(out)?;
    }

    if let Some(popup) = system.enabled_popup(target).filter(|p| *p != target) {
        writeln!(out, "Enabled popup: {popup}")?;
        write_window_names(out, system, popup)?;
        writeln!(out)?;
    }

    writeln!(out, "Minimized: {}", bool_str(system.is_minimized(target)))?;
    writeln!(out, "Maximized: {}", bool_str(system.is_maximized(target)))?;
    writeln!(out, "Enabled: {}", bool_str(system.is_enabled(target)))?;
    writeln!(out, "Visible: {}", bool_str(system.is_visible(target)))?;

    if brief {
        return Ok(ReportOutcome::Reported);
    }

    writeln!(out)?;

    match system.input_state(owner.thread_id) {
        Ok(Some(state)) => {
            writeln!(
                out,
                "Input state flags: {}",
                describe_bits(state.flags, INPUT_STATE_FLAG_NAMES)
            )?;
            writeln!(out, "Active window: {}", state.active)?;
            writeln!(out, "Focus window: {}", state.focus)?;
            writeln!(out, "Capture window: {}", state.capture)?;
            writeln!(out, "Menu owner window: {}", state.menu_owner)?;
            writeln!(out, "Move/size window: {}", state.move_size)?;
            writeln!(out, "Caret window: {}", state.caret)?;
            writeln!(out, "Caret rect: {}", state.caret_rect)?;
        }
        Ok(None) => writeln!(out, "Input state is empty")?,
        Err(e) => writeln!(out, "{e}")?,
    }

    writeln!(out)?;

    match system.placement(target) {
        Ok(placement) => {
            writeln!(out, "Show state: {}", placement.show_state)?;
            writeln!(out, "Max position: {}", placement.max_position)?;
            writeln!(out, "Min position: {}", placement.min_position)?;
            writeln!(out, "Normal rect: {}", placement.normal_rect)?;
        }
        Err(e) => writeln!(out, "{e}")?,
    }

    writeln!(out)?;

    match system.window_rect(target) {
        Ok(rect) => writeln!(out, "Window rect: {rect}")?,
        Err(e) => writeln!(out, "{e}")?,
    }
    match system.client_rect(target) {
        Ok(rect) => writeln!(out, "Client rect: {rect}")?,
        Err(e) => writeln!(out, "{e}")?,
    }

    writeln!(out)?;

    match system.monitor(target) {
        Some(monitor) => writeln!(out, "Monitor: {monitor}")?,
        None => writeln!(out, "Monitor: <none>")?,
    }

    match system.foreground_lock_timeout() {
        Ok(timeout) => writeln!(
            out,
            "Foreground lock timeout: {timeout} ({} seconds)",
            timeout / 1000
        )?,
        Err(e) => writeln!(out, "{e}")?,
    }

    Ok(ReportOutcome::Reported)
}
