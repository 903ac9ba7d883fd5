pub mod platform;

pub use platform::{detect_with, detect_wordpress, is_wordpress, wordpress_candidates};
