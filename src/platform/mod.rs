pub mod types;

#[cfg(test)]
pub mod fake;
#[cfg(windows)]
pub mod win32;

pub use types::{
    INPUT_STATE_FLAG_NAMES, InputState, MonitorHandle, Placement, Point, QueryError, Rect,
    ShowState, WindowHandle, WindowOwner,
};

/// The platform introspection queries the inspector consumes. One
/// production implementation exists (Win32); tests script their own.
pub trait WindowSystem {
    /// Current foreground window; null when no window has the foreground.
    fn foreground_window(&self) -> WindowHandle;

    /// Owning thread and process, or `None` when the handle is not a live
    /// window. This is the per-report liveness check.
    fn window_owner(&self, window: WindowHandle) -> Option<WindowOwner>;

    /// Executable name for a process id, resolved by scanning the
    /// running-process list.
    fn process_name(&self, process_id: u32) -> Option<String>;

    fn window_text(&self, window: WindowHandle) -> String;

    fn window_class(&self, window: WindowHandle) -> String;

    /// Root owner ancestor, when the window has one.
    fn root_owner(&self, window: WindowHandle) -> Option<WindowHandle>;

    /// Enabled popup owned by the window, when one exists.
    fn enabled_popup(&self, window: WindowHandle) -> Option<WindowHandle>;

    fn is_minimized(&self, window: WindowHandle) -> bool;

    fn is_maximized(&self, window: WindowHandle) -> bool;

    fn is_enabled(&self, window: WindowHandle) -> bool;

    fn is_visible(&self, window: WindowHandle) -> bool;

    /// Input state of a GUI thread; `Ok(None)` when the block is entirely
    /// unset.
    fn input_state(&self, thread_id: u32) -> Result<Option<InputState>, QueryError>;

    fn placement(&self, window: WindowHandle) -> Result<Placement, QueryError>;

    fn window_rect(&self, window: WindowHandle) -> Result<Rect, QueryError>;

    fn client_rect(&self, window: WindowHandle) -> Result<Rect, QueryError>;

    /// Monitor the window is on; `None` when it intersects no monitor.
    fn monitor(&self, window: WindowHandle) -> Option<MonitorHandle>;

    /// System-wide foreground lock timeout, in milliseconds.
    fn foreground_lock_timeout(&self) -> Result<u32, QueryError>;
}
