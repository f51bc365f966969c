//! Contract workflow diagram (MVVM)
//!
//! - geometry.rs: canvas size, node boxes, edge paths
//! - view_model.rs: graph signal, drag, connect mode, dialogs
//! - view.rs: SVG canvas and side panels

mod geometry;
mod view;
mod view_model;

pub use view::WorkflowDiagram;
