pub mod images;

pub use images::{image_for, DEFAULT_IMAGE};
