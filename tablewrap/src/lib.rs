pub mod config;
pub mod element;
pub mod reflow;
pub mod render;
pub mod viewport;

pub use config::{Classes, Options, SplitAt};
pub use element::{Cell, Row, Table};
pub use reflow::{Reflow, ReflowState};
pub use render::render_table;
