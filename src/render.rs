pub mod animation_renderer;
pub mod canvas;
pub mod renderer;
