use log::info;

use super::renderer::Renderer;

/// Placeholder renderer. Drawing logic will land here as the app grows.
pub struct PassageRenderer {
    initialized: bool,
}

impl PassageRenderer {
    pub fn new() -> PassageRenderer {
        PassageRenderer { initialized: false }
    }

    pub fn initialized(&self) -> bool {
        self.initialized
    }
}

impl Default for PassageRenderer {
    fn default() -> Self {
        Self::new()
    }
}

impl Renderer for PassageRenderer {
    fn init(&mut self) {
        if self.initialized {
            return;
        }
        info!("Passage renderer initialized");
        self.initialized = true;
    }

    fn render(&mut self, _delta_seconds: f64, _elapsed_seconds: f64) {
        if !self.initialized {
            self.init();
        }
    }

    fn destroy(&mut self) {
        info!("Passage renderer destroyed");
        self.initialized = false;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn init_is_idempotent() {
        let mut renderer = PassageRenderer::new();
        renderer.init();
        renderer.init();
        assert!(renderer.initialized());
    }

    #[test]
    fn render_initializes_lazily() {
        let mut renderer = PassageRenderer::new();
        renderer.render(0.016, 0.016);
        assert!(renderer.initialized());
    }

    #[test]
    fn destroy_clears_initialized_state() {
        let mut renderer = PassageRenderer::new();
        renderer.init();
        renderer.destroy();
        assert!(!renderer.initialized());
    }
}
