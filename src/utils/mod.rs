pub mod string;

pub use string::{strip_colors, to_title_case, translate_colors};
