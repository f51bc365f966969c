mod view;

pub use view::DocumentViewer;
