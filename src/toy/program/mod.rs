pub mod loader;

pub use loader::{parse_image, parse_inputs, read_image, read_inputs, Image};
