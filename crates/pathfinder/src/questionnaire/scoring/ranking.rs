use super::super::domain::TraitCategory;
use super::tally::TraitTally;

pub(crate) const DEFAULT_DOMINANT: TraitCategory = TraitCategory::Tech;
pub(crate) const DEFAULT_SECONDARY: TraitCategory = TraitCategory::Business;

/// Picks dominant and secondary traits by scanning tallies in declaration order.
///
/// A trait only displaces the current dominant with a strictly greater count, so ties
/// keep the earlier trait. The displaced dominant becomes the secondary candidate.
pub(crate) fn rank_traits(tally: &TraitTally) -> (TraitCategory, TraitCategory) {
    let mut dominant: Option<TraitCategory> = None;
    let mut dominant_count = 0;
    let mut secondary: Option<TraitCategory> = None;
    let mut secondary_count = 0;

    for (category, count) in tally.counts() {
        if count > dominant_count {
            secondary = dominant;
            secondary_count = dominant_count;
            dominant = Some(category);
            dominant_count = count;
        } else if count > secondary_count {
            secondary = Some(category);
            secondary_count = count;
        }
    }

    let Some(dominant) = dominant else {
        return (DEFAULT_DOMINANT, DEFAULT_SECONDARY);
    };

    let secondary = secondary
        .filter(|category| *category != dominant)
        .or_else(|| {
            TraitCategory::ordered()
                .into_iter()
                .find(|category| *category != dominant)
        })
        .unwrap_or(DEFAULT_SECONDARY);

    (dominant, secondary)
}
