/// Per-frame render hook driven by the loop controller.
pub trait Renderer {
    /// Prepares rendering state. Idempotent.
    fn init(&mut self);

    /// Renders one frame. `delta_seconds` is the time since the previous
    /// tick, `elapsed_seconds` the time since the last clock reset.
    fn render(&mut self, delta_seconds: f64, elapsed_seconds: f64);

    /// Releases rendering state.
    fn destroy(&mut self);
}
