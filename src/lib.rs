pub mod codec;
pub mod convert;
pub mod dat;
pub mod error;
pub mod ppm;
pub mod raster;

pub use codec::{GrayscaleCodec, PngCodec};
pub use convert::Converter;
pub use dat::GrayMap;
pub use error::RasterError;
pub use raster::Raster;
