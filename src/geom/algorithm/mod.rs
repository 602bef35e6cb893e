mod centroid;
mod dissolve;
mod proj;
mod simplify;

pub use centroid::vertex_mean_centroid;
pub use dissolve::dissolve;
pub use simplify::{repair, simplify_multipolygon, SimplifyOutcome};
