mod view;

pub use view::DocumentTranslation;
