use std::sync::Arc;

use anyhow::Result;
use winit::{
    dpi::{PhysicalSize, Size},
    event::{Event, WindowEvent},
    event_loop::{ControlFlow, EventLoop, EventLoopWindowTarget},
    window::{Window, WindowBuilder},
};

use crate::render::passage_renderer::PassageRenderer;

use super::{
    app::{App, AppSettings},
    frame::{FrameHandle, FrameScheduler},
    input_manager::{AppCommand, InputManager, InputSettings},
};

/// Frame scheduler backed by the window's redraw queue. A redraw request
/// cannot be revoked, so `cancel_tick` relies on the controller dropping
/// the fired tick by its cleared pending handle.
pub struct RedrawScheduler {
    window: Arc<Window>,
    next_id: u64,
}

impl RedrawScheduler {
    fn new(window: Arc<Window>) -> RedrawScheduler {
        RedrawScheduler { window, next_id: 0 }
    }
}

impl FrameScheduler for RedrawScheduler {
    fn schedule_tick(&mut self) -> FrameHandle {
        self.next_id += 1;
        self.window.request_redraw();
        FrameHandle::new(self.next_id)
    }

    fn cancel_tick(&mut self, _handle: FrameHandle) {}
}

#[derive(Clone)]
pub struct RuntimeSettings {
    pub initial_size: Size,
    pub title: String,
    pub resizable: bool,
    pub input_settings: InputSettings,
    pub app_settings: AppSettings,
}

impl Default for RuntimeSettings {
    fn default() -> Self {
        Self {
            initial_size: Size::Physical(PhysicalSize::new(800, 600)),
            title: "Passage".into(),
            resizable: true,
            input_settings: Default::default(),
            app_settings: Default::default(),
        }
    }
}

/// Hosts the loop controller inside a winit event loop.
pub struct Runtime {
    event_loop: Option<EventLoop<()>>,
    _window: Arc<Window>,
    input_manager: InputManager,
    app: App<RedrawScheduler>,
}

impl Runtime {
    pub fn new(settings: &RuntimeSettings) -> Result<Runtime> {
        let event_loop = EventLoop::new()?;
        event_loop.set_control_flow(ControlFlow::Wait);

        let window = Arc::new(
            WindowBuilder::new()
                .with_inner_size(settings.initial_size)
                .with_title(settings.title.clone())
                .with_resizable(settings.resizable)
                .build(&event_loop)?,
        );

        let app = App::new(
            &settings.app_settings,
            Box::new(PassageRenderer::new()),
            RedrawScheduler::new(window.clone()),
        );

        Ok(Runtime {
            event_loop: Some(event_loop),
            _window: window,
            input_manager: InputManager::new(&settings.input_settings),
            app,
        })
    }

    pub fn run(&mut self) -> Result<()> {
        self.app.init();
        self.app.start();

        let event_loop = self.event_loop.take().unwrap();
        event_loop.run(move |event, elwt| self.handle_event(event, elwt))?;

        Ok(())
    }

    fn handle_event(&mut self, event: Event<()>, elwt: &EventLoopWindowTarget<()>) {
        match event {
            Event::WindowEvent {
                event: WindowEvent::CloseRequested,
                ..
            } => elwt.exit(),
            Event::WindowEvent {
                event: WindowEvent::RedrawRequested,
                ..
            } => self.app.tick(),
            Event::WindowEvent {
                event: WindowEvent::KeyboardInput { event, .. },
                ..
            } => {
                if let Some(command) = self.input_manager.handle_keyboard_input(&event) {
                    self.apply_command(command);
                }
            }
            Event::LoopExiting => self.app.shutdown(),
            _ => (),
        }
    }

    fn apply_command(&mut self, command: AppCommand) {
        match command {
            AppCommand::Toggle => self.app.toggle(),
            AppCommand::Restart => self.app.restart(),
            AppCommand::Stop => self.app.stop(),
        }
    }
}
