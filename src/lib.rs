#![doc = "Kerala LSG boundary pipeline: district tagging, dissolve, simplification, officials merge and search index"]
mod common;
mod config;
mod error;
mod feature;
mod geom;
mod officials;
mod pipeline;
mod reference;
mod resolve;
mod search;

#[doc(inline)]
pub use config::{Layout, DISTRICT_TOLERANCE, LSG_TOLERANCE, UNKNOWN_DISTRICT};

#[doc(inline)]
pub use error::PipelineError;

#[doc(inline)]
pub use feature::{Feature, FeatureCollection, RawFeature, ResolvedFeature};

#[doc(inline)]
pub use geom::{dissolve, repair, simplify_multipolygon, vertex_mean_centroid, Geometries, SimplifyOutcome};

#[doc(inline)]
pub use officials::{
    merge_officials, MergeStats, Officials, OfficialsRecord, OfficialsTable, President, Secretary, OFFICIALS_COLUMNS,
};

#[doc(inline)]
pub use pipeline::{
    dissolve_districts, extract_districts, generate_search_index, merge_officials_data, run_all,
    simplify_boundaries, simplify_collection, tag_collection, tag_districts, write_reference, DistrictArea,
    DistrictsSummary, OfficialsSummary, ReferenceSummary, SearchSummary, SimplifyCounts, SimplifyJob,
    SimplifyReport, SimplifySummary, Stage, StageSummary, TagSummary,
};

#[doc(inline)]
pub use reference::{DistrictLsgs, LsgCategory, ReferenceEntry, ReferenceStats, ReferenceTable};

#[doc(inline)]
pub use resolve::{
    normalize_name, strip_suffix, title_case, DistrictResolver, LsgType, MatchStatistics, MatchStrategy,
    Resolution, SuffixPolicy, SYNTHESIZED_SUFFIXES,
};

#[doc(inline)]
pub use search::{Head, SearchEntry, SearchIndex, DEFAULT_ENTRY_TYPE};
