//! Career catalog, recommendation selection and advisor-list normalization.

mod catalog;
pub mod domain;
mod fallback;
mod lookup;
mod selector;
mod template;

pub use catalog::CareerCatalog;
pub use domain::{CareerDescriptor, RecommendationSource};
pub use fallback::{fallback_insight, fallback_recommendations};
pub use lookup::trait_for_field;
pub use selector::{
    normalize_ai_recommendations, normalize_top_fields, select_recommendations,
    AI_RECOMMENDATION_COUNT, CATALOG_RECOMMENDATION_LIMIT,
};
