pub mod calendar_renderer;
