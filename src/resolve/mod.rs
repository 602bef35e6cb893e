mod lsg_type;
mod normalize;
mod resolver;
mod stats;

pub use lsg_type::LsgType;
pub use normalize::{normalize_name, strip_suffix, title_case, SuffixPolicy};
pub use resolver::{DistrictResolver, MatchStrategy, Resolution, SYNTHESIZED_SUFFIXES};
pub use stats::MatchStatistics;
