//! Win32 backend for the platform query trait.

use windows::Win32::Foundation::{CloseHandle, HWND, POINT, RECT};
use windows::Win32::Graphics::Gdi::{HMONITOR, MONITOR_DEFAULTTONULL, MonitorFromWindow};
use windows::Win32::System::Diagnostics::ToolHelp::{
    CreateToolhelp32Snapshot, PROCESSENTRY32W, Process32FirstW, Process32NextW, TH32CS_SNAPPROCESS,
};
use windows::Win32::UI::Input::KeyboardAndMouse::IsWindowEnabled;
use windows::Win32::UI::WindowsAndMessaging::{
    GA_ROOTOWNER, GUITHREADINFO, GW_ENABLEDPOPUP, GetAncestor, GetClassNameW, GetClientRect,
    GetForegroundWindow, GetGUIThreadInfo, GetWindow, GetWindowPlacement, GetWindowRect,
    GetWindowTextW, GetWindowThreadProcessId, IsIconic, IsWindowVisible, IsZoomed,
    SPI_GETFOREGROUNDLOCKTIMEOUT, SW_SHOWMAXIMIZED, SW_SHOWMINIMIZED, SW_SHOWNORMAL,
    SYSTEM_PARAMETERS_INFO_UPDATE_FLAGS, SystemParametersInfoW, WINDOWPLACEMENT,
};

use crate::platform::WindowSystem;
use crate::platform::types::{
    InputState, MonitorHandle, Placement, Point, QueryError, Rect, ShowState, WindowHandle,
    WindowOwner,
};

pub struct Win32WindowSystem;

impl Win32WindowSystem {
    pub fn new() -> Self {
        Win32WindowSystem
    }
}

impl Default for Win32WindowSystem {
    fn default() -> Self {
        Self::new()
    }
}

fn hwnd(handle: WindowHandle) -> HWND {
    HWND(handle.raw() as *mut core::ffi::c_void)
}

fn handle_from(hwnd: HWND) -> WindowHandle {
    WindowHandle::from_raw(hwnd.0 as isize)
}

fn point_from(point: POINT) -> Point {
    Point {
        x: point.x,
        y: point.y,
    }
}

fn rect_from(rect: RECT) -> Rect {
    Rect {
        left: rect.left,
        top: rect.top,
        right: rect.right,
        bottom: rect.bottom,
    }
}

fn query_error(query: &'static str, error: &windows::core::Error) -> QueryError {
    // HRESULT 0x8007xxxx carries the Win32 last-error code in the low word.
    QueryError {
        query,
        code: (error.code().0 & 0xFFFF) as u32,
    }
}

impl WindowSystem for Win32WindowSystem {
    fn foreground_window(&self) -> WindowHandle {
        handle_from(unsafe { GetForegroundWindow() })
    }

    fn window_owner(&self, window: WindowHandle) -> Option<WindowOwner> {
        let mut process_id = 0u32;
        let thread_id = unsafe { GetWindowThreadProcessId(hwnd(window), Some(&mut process_id)) };
        if thread_id == 0 {
            return None;
        }
        Some(WindowOwner {
            thread_id,
            process_id,
        })
    }

    fn process_name(&self, process_id: u32) -> Option<String> {
        unsafe {
            let snapshot = CreateToolhelp32Snapshot(TH32CS_SNAPPROCESS, 0).ok()?;

            let mut entry = PROCESSENTRY32W {
                dwSize: std::mem::size_of::<PROCESSENTRY32W>() as u32,
                ..Default::default()
            };

            let mut name = None;
            if Process32FirstW(snapshot, &mut entry).is_ok() {
                loop {
                    if entry.th32ProcessID == process_id {
                        let len = entry
                            .szExeFile
                            .iter()
                            .position(|&c| c == 0)
                            .unwrap_or(entry.szExeFile.len());
                        name = Some(String::from_utf16_lossy(&entry.szExeFile[..len]));
                        break;
                    }
                    if Process32NextW(snapshot, &mut entry).is_err() {
                        break;
                    }
                }
            }

            CloseHandle(snapshot).ok();
            name
        }
    }

    fn window_text(&self, window: WindowHandle) -> String {
        let mut buffer = [0u16; 512];
        let len = unsafe { GetWindowTextW(hwnd(window), &mut buffer) };
        String::from_utf16_lossy(&buffer[..len.max(0) as usize])
    }

    fn window_class(&self, window: WindowHandle) -> String {
        let mut buffer = [0u16; 256];
        let len = unsafe { GetClassNameW(hwnd(window), &mut buffer) };
        String::from_utf16_lossy(&buffer[..len.max(0) as usize])
    }

    fn root_owner(&self, window: WindowHandle) -> Option<WindowHandle> {
        let owner = unsafe { GetAncestor(hwnd(window), GA_ROOTOWNER) };
        if owner.is_invalid() {
            return None;
        }
        Some(handle_from(owner))
    }

    fn enabled_popup(&self, window: WindowHandle) -> Option<WindowHandle> {
        let popup = unsafe { GetWindow(hwnd(window), GW_ENABLEDPOPUP) }.ok()?;
        if popup.is_invalid() {
            return None;
        }
        Some(handle_from(popup))
    }

    fn is_minimized(&self, window: WindowHandle) -> bool {
        unsafe { IsIconic(hwnd(window)) }.as_bool()
    }

    fn is_maximized(&self, window: WindowHandle) -> bool {
        unsafe { IsZoomed(hwnd(window)) }.as_bool()
    }

    fn is_enabled(&self, window: WindowHandle) -> bool {
        unsafe { IsWindowEnabled(hwnd(window)) }.as_bool()
    }

    fn is_visible(&self, window: WindowHandle) -> bool {
        unsafe { IsWindowVisible(hwnd(window)) }.as_bool()
    }

    fn input_state(&self, thread_id: u32) -> Result<Option<InputState>, QueryError> {
        let mut info = GUITHREADINFO {
            cbSize: std::mem::size_of::<GUITHREADINFO>() as u32,
            ..Default::default()
        };

        // Fails with error 87 for threads the caller cannot query, e.g.
        // elevated console windows.
        unsafe { GetGUIThreadInfo(thread_id, &mut info) }
            .map_err(|e| query_error("GetGUIThreadInfo", &e))?;

        let state = InputState {
            flags: info.flags.0,
            active: handle_from(info.hwndActive),
            focus: handle_from(info.hwndFocus),
            capture: handle_from(info.hwndCapture),
            menu_owner: handle_from(info.hwndMenuOwner),
            move_size: handle_from(info.hwndMoveSize),
            caret: handle_from(info.hwndCaret),
            caret_rect: rect_from(info.rcCaret),
        };

        Ok((!state.is_empty()).then_some(state))
    }

    fn placement(&self, window: WindowHandle) -> Result<Placement, QueryError> {
        let mut placement = WINDOWPLACEMENT {
            length: std::mem::size_of::<WINDOWPLACEMENT>() as u32,
            ..Default::default()
        };

        unsafe { GetWindowPlacement(hwnd(window), &mut placement) }
            .map_err(|e| query_error("GetWindowPlacement", &e))?;

        let show_state = match placement.showCmd {
            cmd if cmd == SW_SHOWNORMAL.0 as u32 => ShowState::Normal,
            cmd if cmd == SW_SHOWMINIMIZED.0 as u32 => ShowState::Minimized,
            cmd if cmd == SW_SHOWMAXIMIZED.0 as u32 => ShowState::Maximized,
            other => ShowState::Other(other),
        };

        Ok(Placement {
            show_state,
            max_position: point_from(placement.ptMaxPosition),
            min_position: point_from(placement.ptMinPosition),
            normal_rect: rect_from(placement.rcNormalPosition),
        })
    }

    fn window_rect(&self, window: WindowHandle) -> Result<Rect, QueryError> {
        let mut rect = RECT::default();
        unsafe { GetWindowRect(hwnd(window), &mut rect) }
            .map_err(|e| query_error("GetWindowRect", &e))?;
        Ok(rect_from(rect))
    }

    fn client_rect(&self, window: WindowHandle) -> Result<Rect, QueryError> {
        let mut rect = RECT::default();
        unsafe { GetClientRect(hwnd(window), &mut rect) }
            .map_err(|e| query_error("GetClientRect", &e))?;
        Ok(rect_from(rect))
    }

    fn monitor(&self, window: WindowHandle) -> Option<MonitorHandle> {
        let monitor: HMONITOR = unsafe { MonitorFromWindow(hwnd(window), MONITOR_DEFAULTTONULL) };
        if monitor.is_invalid() {
            return None;
        }
        Some(MonitorHandle::from_raw(monitor.0 as isize))
    }

    fn foreground_lock_timeout(&self) -> Result<u32, QueryError> {
        let mut timeout = 0u32;
        unsafe {
            SystemParametersInfoW(
                SPI_GETFOREGROUNDLOCKTIMEOUT,
                0,
                Some(&mut timeout as *mut u32 as *mut core::ffi::c_void),
                SYSTEM_PARAMETERS_INFO_UPDATE_FLAGS(0),
            )
        }
        .map_err(|e| query_error("SystemParametersInfoW", &e))?;
        Ok(timeout)
    }
}
