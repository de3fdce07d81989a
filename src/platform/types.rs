use std::fmt;

/// Opaque OS window handle. May be null (`0x0`): a null handle is a legal
/// observation (no window has the foreground) but never a legal target.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct WindowHandle(isize);

impl WindowHandle {
    pub const NULL: WindowHandle = WindowHandle(0);

    pub fn from_raw(raw: isize) -> Self {
        WindowHandle(raw)
    }

    pub fn raw(self) -> isize {
        self.0
    }

    pub fn is_null(self) -> bool {
        self.0 == 0
    }
}

impl fmt::Display for WindowHandle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "0x{:x}", self.0)
    }
}

/// Handle of the display monitor a window sits on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MonitorHandle(isize);

impl MonitorHandle {
    pub fn from_raw(raw: isize) -> Self {
        MonitorHandle(raw)
    }

    pub fn raw(self) -> isize {
        self.0
    }
}

impl fmt::Display for MonitorHandle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "0x{:x}", self.0)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Point {
    pub x: i32,
    pub y: i32,
}

impl fmt::Display for Point {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Rect {
    pub left: i32,
    pub top: i32,
    pub right: i32,
    pub bottom: i32,
}

impl fmt::Display for Rect {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "({}, {})-({}, {})",
            self.left, self.top, self.right, self.bottom
        )
    }
}

/// Thread and process owning a window.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WindowOwner {
    pub thread_id: u32,
    pub process_id: u32,
}

/// Show-command classification from the window placement query.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShowState {
    Normal,
    Minimized,
    Maximized,
    Other(u32),
}

impl fmt::Display for ShowState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ShowState::Normal => write!(f, "SW_SHOWNORMAL"),
            ShowState::Minimized => write!(f, "SW_SHOWMINIMIZED"),
            ShowState::Maximized => write!(f, "SW_SHOWMAXIMIZED"),
            ShowState::Other(_) => write!(f, "<unknown>"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Placement {
    pub show_state: ShowState,
    pub max_position: Point,
    pub min_position: Point,
    pub normal_rect: Rect,
}

/// Input state of a GUI thread: the windows tied to the thread's input
/// queue plus the caret position and state flag bits.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InputState {
    pub flags: u32,
    pub active: WindowHandle,
    pub focus: WindowHandle,
    pub capture: WindowHandle,
    pub menu_owner: WindowHandle,
    pub move_size: WindowHandle,
    pub caret: WindowHandle,
    pub caret_rect: Rect,
}

impl InputState {
    /// True when the platform returned the block with nothing set, the
    /// common case for threads that do not hold the foreground.
    pub fn is_empty(&self) -> bool {
        self.flags == 0
            && self.active.is_null()
            && self.focus.is_null()
            && self.capture.is_null()
            && self.menu_owner.is_null()
            && self.move_size.is_null()
            && self.caret.is_null()
            && self.caret_rect == Rect::default()
    }
}

/// Input-state flag bits, named as the platform names them.
pub const INPUT_STATE_FLAG_NAMES: &[(u32, &str)] = &[
    (0x0001, "GUI_CARETBLINKING"),
    (0x0002, "GUI_INMOVESIZE"),
    (0x0004, "GUI_INMENUMODE"),
    (0x0008, "GUI_SYSTEMMENUMODE"),
    (0x0010, "GUI_POPUPMENUMODE"),
];

/// A platform query that failed, carrying the query name and the OS
/// last-error code. Never fatal: the report prints it and moves on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct QueryError {
    pub query: &'static str,
    pub code: u32,
}

impl fmt::Display for QueryError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} failed (os error {})", self.query, self.code)
    }
}

impl std::error::Error for QueryError {}
