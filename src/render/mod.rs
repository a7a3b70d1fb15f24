pub mod frame;
pub mod raster;

pub use frame::Renderer;
pub use raster::{AxisLabels, Chart, column_index, value_row};
