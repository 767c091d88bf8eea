pub mod passage_renderer;
pub mod renderer;
