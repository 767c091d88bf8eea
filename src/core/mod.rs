pub mod app;
pub mod frame;
pub mod input_manager;
pub mod runtime;
pub mod time_manager;
