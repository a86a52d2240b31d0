pub mod consts;
pub mod detection;
pub mod error;
pub mod io;
pub mod pipeline;
pub mod raster;
pub mod report;
