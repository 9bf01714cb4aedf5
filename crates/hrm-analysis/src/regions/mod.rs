//! Anatomical regions: the sensor map, region resolution, and pan-colonic detection.

pub mod map;
pub mod pan_colonic;
pub mod resolver;

pub use map::{ActiveRegion, RegionMap, SensorRange};
pub use pan_colonic::PanColonicDetector;
pub use resolver::RegionResolver;
