//! Small pixel-buffer UI engine: layout primitives, hit testing, a CPU 2D renderer and a
//! windowed runner on `pixels` + `winit`.

pub mod app;
pub mod graphics;
pub mod pixels_renderer;
pub mod surface;
pub mod ui;
pub mod ui_tree;
