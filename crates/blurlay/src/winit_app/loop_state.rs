use winit::{
    event::{ElementState, WindowEvent},
    keyboard::{KeyCode, PhysicalKey},
};

/// State of the render loop. `Closed` is terminal.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum LoopState {
    #[default]
    Running,
    Closed,
}

/// What a window event means to the render loop.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LoopSignal {
    CloseRequested,
    EscapePressed,
    Redraw,
    Ignored,
}

impl LoopState {
    pub fn next(self, signal: LoopSignal) -> Self {
        match (self, signal) {
            (Self::Closed, _) => Self::Closed,
            (Self::Running, LoopSignal::CloseRequested | LoopSignal::EscapePressed) => Self::Closed,
            (Self::Running, LoopSignal::Redraw | LoopSignal::Ignored) => Self::Running,
        }
    }
}

impl LoopSignal {
    pub fn from_window_event(event: &WindowEvent) -> Self {
        match event {
            WindowEvent::CloseRequested | WindowEvent::Destroyed => Self::CloseRequested,

            WindowEvent::RedrawRequested => Self::Redraw,

            WindowEvent::KeyboardInput { event, .. }
                if is_close_key(event.physical_key, event.state) =>
            {
                Self::EscapePressed
            }

            _ => Self::Ignored,
        }
    }
}

fn is_close_key(key: PhysicalKey, state: ElementState) -> bool {
    let keycode = match key {
        PhysicalKey::Code(code) => code,
        PhysicalKey::Unidentified(_) => return false,
    };

    state == ElementState::Pressed && keycode == KeyCode::Escape
}
