pub mod app;
pub mod color;
pub mod data;
pub mod figure;
pub mod spec;
pub mod state;
pub mod ui;
