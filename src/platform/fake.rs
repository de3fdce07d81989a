//! Scripted in-memory window system for exercising the inspection core.

use std::cell::RefCell;
use std::collections::{HashMap, VecDeque};

use crate::platform::WindowSystem;
use crate::platform::types::{
    InputState, MonitorHandle, Placement, Point, QueryError, Rect, ShowState, WindowHandle,
    WindowOwner,
};

pub struct FakeWindow {
    pub owner: WindowOwner,
    pub text: String,
    pub class: String,
    pub root_owner: Option<WindowHandle>,
    pub enabled_popup: Option<WindowHandle>,
    pub minimized: bool,
    pub maximized: bool,
    pub enabled: bool,
    pub visible: bool,
    pub placement: Result<Placement, QueryError>,
    pub window_rect: Result<Rect, QueryError>,
    pub client_rect: Result<Rect, QueryError>,
    pub monitor: Option<MonitorHandle>,
}

impl FakeWindow {
    pub fn new(thread_id: u32, process_id: u32) -> Self {
        let outer = Rect {
            left: 10,
            top: 10,
            right: 410,
            bottom: 310,
        };
        FakeWindow {
            owner: WindowOwner {
                thread_id,
                process_id,
            },
            text: String::from("Untitled"),
            class: String::from("FakeWindowClass"),
            root_owner: None,
            enabled_popup: None,
            minimized: false,
            maximized: false,
            enabled: true,
            visible: true,
            placement: Ok(Placement {
                show_state: ShowState::Normal,
                max_position: Point { x: -1, y: -1 },
                min_position: Point { x: -1, y: -1 },
                normal_rect: outer,
            }),
            window_rect: Ok(outer),
            client_rect: Ok(Rect {
                left: 0,
                top: 0,
                right: 400,
                bottom: 300,
            }),
            monitor: Some(MonitorHandle::from_raw(0x10001)),
        }
    }
}

pub struct FakeWindowSystem {
    pub windows: HashMap<isize, FakeWindow>,
    pub foreground_script: RefCell<VecDeque<WindowHandle>>,
    pub process_names: HashMap<u32, String>,
    pub input_states: HashMap<u32, Result<Option<InputState>, QueryError>>,
    pub lock_timeout: Result<u32, QueryError>,
}

impl Default for FakeWindowSystem {
    fn default() -> Self {
        FakeWindowSystem {
            windows: HashMap::new(),
            foreground_script: RefCell::new(VecDeque::new()),
            process_names: HashMap::new(),
            input_states: HashMap::new(),
            lock_timeout: Ok(200_000),
        }
    }
}

impl FakeWindowSystem {
    pub fn with_window(mut self, handle: WindowHandle, window: FakeWindow) -> Self {
        self.windows.insert(handle.raw(), window);
        self
    }

    /// Queue the foreground samples later polls will observe, in order.
    /// Once the script runs dry, polls observe a null foreground.
    pub fn script_foreground(&self, samples: &[WindowHandle]) {
        self.foreground_script
            .borrow_mut()
            .extend(samples.iter().copied());
    }

    fn window(&self, handle: WindowHandle) -> Option<&FakeWindow> {
        self.windows.get(&handle.raw())
    }
}

impl WindowSystem for FakeWindowSystem {
    fn foreground_window(&self) -> WindowHandle {
        self.foreground_script
            .borrow_mut()
            .pop_front()
            .unwrap_or(WindowHandle::NULL)
    }

    fn window_owner(&self, window: WindowHandle) -> Option<WindowOwner> {
        self.window(window).map(|w| w.owner)
    }

    fn process_name(&self, process_id: u32) -> Option<String> {
        self.process_names.get(&process_id).cloned()
    }

    fn window_text(&self, window: WindowHandle) -> String {
        self.window(window).map(|w| w.text.clone()).unwrap_or_default()
    }

    fn window_class(&self, window: WindowHandle) -> String {
        self.window(window)
            .map(|w| w.class.clone())
            .unwrap_or_default()
    }

    fn root_owner(&self, window: WindowHandle) -> Option<WindowHandle> {
        self.window(window).and_then(|w| w.root_owner)
    }

    fn enabled_popup(&self, window: WindowHandle) -> Option<WindowHandle> {
        self.window(window).and_then(|w| w.enabled_popup)
    }

    fn is_minimized(&self, window: WindowHandle) -> bool {
        self.window(window).is_some_and(|w| w.minimized)
    }

    fn is_maximized(&self, window: WindowHandle) -> bool {
        self.window(window).is_some_and(|w| w.maximized)
    }

    fn is_enabled(&self, window: WindowHandle) -> bool {
        self.window(window).is_some_and(|w| w.enabled)
    }

    fn is_visible(&self, window: WindowHandle) -> bool {
        self.window(window).is_some_and(|w| w.visible)
    }

    fn input_state(&self, thread_id: u32) -> Result<Option<InputState>, QueryError> {
        self.input_states
            .get(&thread_id)
            .copied()
            .unwrap_or(Ok(None))
    }

    fn placement(&self, window: WindowHandle) -> Result<Placement, QueryError> {
        self.window(window).map(|w| w.placement).unwrap_or(Err(QueryError {
            query: "GetWindowPlacement",
            code: 1400,
        }))
    }

    fn window_rect(&self, window: WindowHandle) -> Result<Rect, QueryError> {
        self.window(window).map(|w| w.window_rect).unwrap_or(Err(QueryError {
            query: "GetWindowRect",
            code: 1400,
        }))
    }

    fn client_rect(&self, window: WindowHandle) -> Result<Rect, QueryError> {
        self.window(window).map(|w| w.client_rect).unwrap_or(Err(QueryError {
            query: "GetClientRect",
            code: 1400,
        }))
    }

    fn monitor(&self, window: WindowHandle) -> Option<MonitorHandle> {
        self.window(window).and_then(|w| w.monitor)
    }

    fn foreground_lock_timeout(&self) -> Result<u32, QueryError> {
        self.lock_timeout
    }
}
