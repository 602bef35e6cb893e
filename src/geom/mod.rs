mod algorithm;
mod geom;

pub use algorithm::*;
pub use geom::Geometries;
