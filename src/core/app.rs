use log::{info, warn};

use crate::render::renderer::Renderer;

use super::frame::{FrameHandle, FrameScheduler};
use super::time_manager::{Clock, MonotonicClock, TimeManager};

#[derive(Clone, Default)]
pub struct AppSettings {
    /// Suppresses the per-frame elapsed-time log line. Rendering still
    /// occurs.
    pub reduced_motion: bool,
}

impl AppSettings {
    /// Reads the reduced-motion preference from the environment, the
    /// desktop analog of the `prefers-reduced-motion` media query.
    pub fn from_env() -> AppSettings {
        AppSettings {
            reduced_motion: std::env::var_os("PASSAGE_REDUCED_MOTION").is_some(),
        }
    }
}

/// Drives the frame loop: asks the scheduler for ticks while running,
/// forwards delta/elapsed time to the renderer on each tick.
///
/// Invariant: `pending_frame` is `Some` exactly while the app is running
/// with a frame scheduled but not yet fired or cancelled.
pub struct App<S: FrameScheduler, C: Clock = MonotonicClock> {
    settings: AppSettings,
    is_running: bool,
    pending_frame: Option<FrameHandle>,
    time_manager: TimeManager<C>,
    renderer: Box<dyn Renderer>,
    scheduler: S,
}

impl<S: FrameScheduler> App<S> {
    pub fn new(settings: &AppSettings, renderer: Box<dyn Renderer>, scheduler: S) -> App<S> {
        App::with_time_manager(settings, renderer, scheduler, TimeManager::new())
    }
}

impl<S: FrameScheduler, C: Clock> App<S, C> {
    pub fn with_time_manager(
        settings: &AppSettings,
        renderer: Box<dyn Renderer>,
        scheduler: S,
        time_manager: TimeManager<C>,
    ) -> App<S, C> {
        App {
            settings: settings.clone(),
            is_running: false,
            pending_frame: None,
            time_manager,
            renderer,
            scheduler,
        }
    }

    pub fn init(&mut self) {
        info!("Passage app starting...");
        self.renderer.init();
        self.time_manager.reset();
        info!("Passage app initialized");
    }

    pub fn start(&mut self) {
        if self.is_running {
            warn!("App is already running");
            return;
        }

        self.is_running = true;
        self.pending_frame = Some(self.scheduler.schedule_tick());
        info!("Passage app started");
    }

    pub fn stop(&mut self) {
        if !self.is_running {
            warn!("App is not running");
            return;
        }

        self.is_running = false;
        if let Some(handle) = self.pending_frame.take() {
            self.scheduler.cancel_tick(handle);
        }
        info!("Passage app stopped");
    }

    pub fn restart(&mut self) {
        self.stop();
        self.time_manager.reset();
        self.start();
        info!("Passage app restarted");
    }

    pub fn toggle(&mut self) {
        if self.is_running {
            self.stop();
        } else {
            self.start();
        }
    }

    /// One frame callback. Ticks that arrive while stopped, or after
    /// their handle was cancelled, are dropped.
    pub fn tick(&mut self) {
        if !self.is_running || self.pending_frame.take().is_none() {
            return;
        }

        let delta = self.time_manager.delta_seconds();
        let elapsed = self.time_manager.elapsed_seconds();

        if !self.settings.reduced_motion {
            info!("Elapsed: {elapsed:.2}s");
        }

        self.renderer.render(delta, elapsed);

        // Checked after the render call returns, so a stop requested
        // during the frame schedules nothing further.
        if self.is_running {
            self.pending_frame = Some(self.scheduler.schedule_tick());
        }
    }

    /// Stops the loop if needed and tears down the renderer.
    pub fn shutdown(&mut self) {
        if self.is_running {
            self.stop();
        }
        self.renderer.destroy();
    }

    pub fn is_running(&self) -> bool {
        self.is_running
    }

    pub fn elapsed_seconds(&self) -> f64 {
        self.time_manager.elapsed_seconds()
    }
}
