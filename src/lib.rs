pub mod app;
pub mod chart;
pub mod color;
pub mod constants;
pub mod data;
pub mod layout;
pub mod pipeline;
pub mod state;
pub mod ui;
pub mod web;
