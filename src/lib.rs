#![warn(clippy::all, rust_2018_idioms)]

pub mod app;
pub mod color;
pub mod command;
pub mod config;
pub mod editor;
pub mod error;
pub mod file_handler;
pub mod fill;
pub mod history;
pub mod input;
pub mod panels;
pub mod pixel_buffer;
pub mod renderer;
pub mod stroke;
pub mod tool;
pub mod viewport;

pub use app::ColoringApp;
pub use color::{ColorCategory, FillColor, Palette, PaletteMode};
pub use command::Command;
pub use config::EditorConfig;
pub use editor::{Editor, SharedEditor};
pub use fill::{FillResult, FloodFill, SkipReason};
pub use history::HistoryStore;
pub use input::{GestureController, GestureState, InputHandler, TouchEvent, TouchPhase};
pub use pixel_buffer::{BufferPoint, PixelBuffer, Snapshot};
pub use renderer::CanvasRenderer;
pub use tool::Tool;
pub use viewport::ViewportTransform;
