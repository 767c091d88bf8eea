use winit::{
    event::{ElementState, KeyEvent},
    keyboard::{KeyCode, PhysicalKey},
};

/// Loop-control request produced by a key press.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppCommand {
    Toggle,
    Restart,
    Stop,
}

#[derive(Clone, Copy)]
pub struct InputSettings {
    pub toggle_key: PhysicalKey,
    pub restart_key: PhysicalKey,
    pub stop_key: PhysicalKey,
}

impl Default for InputSettings {
    fn default() -> Self {
        Self {
            toggle_key: PhysicalKey::Code(KeyCode::Space),
            restart_key: PhysicalKey::Code(KeyCode::KeyR),
            stop_key: PhysicalKey::Code(KeyCode::Escape),
        }
    }
}

pub struct InputManager {
    settings: InputSettings,
}

impl InputManager {
    pub fn new(settings: &InputSettings) -> InputManager {
        InputManager {
            settings: *settings,
        }
    }

    pub fn handle_keyboard_input(&self, event: &KeyEvent) -> Option<AppCommand> {
        self.map_key(event.physical_key, event.state, event.repeat)
    }

    fn map_key(
        &self,
        key: PhysicalKey,
        state: ElementState,
        repeat: bool,
    ) -> Option<AppCommand> {
        // Held keys auto-repeat; acting on repeats would toggle rapidly.
        if state != ElementState::Pressed || repeat {
            return None;
        }

        if key == self.settings.toggle_key {
            Some(AppCommand::Toggle)
        } else if key == self.settings.restart_key {
            Some(AppCommand::Restart)
        } else if key == self.settings.stop_key {
            Some(AppCommand::Stop)
        } else {
            None
        }
    }
}
