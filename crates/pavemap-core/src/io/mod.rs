pub mod image_io;

pub use image_io::{load_raster, save_mask, save_report};
