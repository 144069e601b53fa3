use super::catalog::CareerCatalog;
use super::domain::CareerDescriptor;
use crate::questionnaire::{PersonalityProfile, TraitCategory};

/// Upper bound used when rendering catalog-derived recommendations.
pub const CATALOG_RECOMMENDATION_LIMIT: usize = 6;

/// Advisor-sourced lists are always normalized to exactly this many entries.
pub const AI_RECOMMENDATION_COUNT: usize = 5;

/// Builds a bounded, title-deduplicated recommendation list for a profile.
///
/// Dominant-type careers come first in catalog order. Secondary-type careers follow,
/// with entries that also match the dominant type ahead of the rest. The result may be
/// empty when the catalog has nothing for either trait.
pub fn select_recommendations(
    profile: &PersonalityProfile,
    catalog: &CareerCatalog,
    max_results: usize,
) -> Vec<CareerDescriptor> {
    let dominant = profile.dominant_type;
    let mut selected: Vec<CareerDescriptor> = Vec::new();

    for career in catalog.careers_for(dominant) {
        if contains_title(&selected, &career.title) {
            continue;
        }
        let mut career = career.clone();
        if career.fit_reason.is_none() {
            career.fit_reason = Some(dominant_fit_reason(dominant));
        }
        selected.push(career);
    }

    let (cross_matching, remaining): (Vec<&CareerDescriptor>, Vec<&CareerDescriptor>) = catalog
        .careers_for(profile.secondary_type)
        .iter()
        .partition(|career| career.matches(dominant));

    for career in cross_matching.into_iter().chain(remaining) {
        if !contains_title(&selected, &career.title) {
            selected.push(career.clone());
        }
    }

    selected.truncate(max_results);
    selected
}

/// Pads or trims an advisor list to exactly [`AI_RECOMMENDATION_COUNT`] entries.
///
/// Repeated titles keep their first occurrence only. Missing entries are clones of the last
/// one, titled `"<title> (Specialization N)"` where `N` is the synthesized entry's 1-based
/// position. An empty list stays empty.
pub fn normalize_ai_recommendations(
    recommendations: Vec<CareerDescriptor>,
) -> Vec<CareerDescriptor> {
    let mut unique: Vec<CareerDescriptor> = Vec::with_capacity(recommendations.len());
    for career in recommendations {
        if !contains_title(&unique, &career.title) {
            unique.push(career);
        }
    }
    let mut recommendations = unique;

    if let Some(last) = recommendations.last().cloned() {
        while recommendations.len() < AI_RECOMMENDATION_COUNT {
            let mut copy = last.clone();
            copy.title = format!(
                "{} (Specialization {})",
                last.title,
                recommendations.len() + 1
            );
            recommendations.push(copy);
        }
    }

    recommendations.truncate(AI_RECOMMENDATION_COUNT);
    recommendations
}

/// Normalizes the advisor's headline fields to exactly [`AI_RECOMMENDATION_COUNT`] entries,
/// deriving them from the recommendation titles when none were supplied.
pub fn normalize_top_fields(
    mut top_fields: Vec<String>,
    recommendations: &[CareerDescriptor],
) -> Vec<String> {
    if top_fields.is_empty() {
        top_fields = recommendations
            .iter()
            .map(|career| career.title.clone())
            .collect();
    }

    if let Some(last) = top_fields.last().cloned() {
        let mut padded = last;
        while top_fields.len() < AI_RECOMMENDATION_COUNT {
            padded = format!("{padded} (Specialization)");
            top_fields.push(padded.clone());
        }
    }

    top_fields.truncate(AI_RECOMMENDATION_COUNT);
    top_fields
}

fn contains_title(selected: &[CareerDescriptor], title: &str) -> bool {
    selected.iter().any(|career| career.title == title)
}

fn dominant_fit_reason(dominant: TraitCategory) -> String {
    format!(
        "Matches your dominant {} personality type.",
        dominant.label().to_ascii_lowercase()
    )
}
