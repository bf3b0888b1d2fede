//! Summary statistics over a set of segments.
//!
//! Every function here is total: an empty input gives zero reach, empty
//! distributions and an empty ranking.

use std::collections::BTreeMap;

use crate::catalog::{AudienceSegment, Language, SocialClass, State, UsageIntensity};

/// Segments per social class. Classes with no segment are absent.
pub(crate) fn aggregate_by_class<'a, I>(segments: I) -> BTreeMap<SocialClass, usize>
where
    I: IntoIterator<Item = &'a AudienceSegment>,
{
    count_by(segments, |s| s.social_class)
}

pub(crate) fn aggregate_by_intensity<'a, I>(segments: I) -> BTreeMap<UsageIntensity, usize>
where
    I: IntoIterator<Item = &'a AudienceSegment>,
{
    count_by(segments, |s| s.usage_intensity)
}

pub(crate) fn aggregate_by_language<'a, I>(segments: I) -> BTreeMap<Language, usize>
where
    I: IntoIterator<Item = &'a AudienceSegment>,
{
    count_by(segments, |s| s.primary_language)
}

/// Segments per state. A segment is counted once for each state it lists.
pub(crate) fn aggregate_by_region<'a, I>(segments: I) -> BTreeMap<State, usize>
where
    I: IntoIterator<Item = &'a AudienceSegment>,
{
    segments
        .into_iter()
        .flat_map(|s| s.regions.iter().copied())
        .fold(BTreeMap::new(), |mut acc, region| {
            *acc.entry(region).or_insert(0) += 1;
            acc
        })
}

fn count_by<'a, I, K, F>(segments: I, key: F) -> BTreeMap<K, usize>
where
    I: IntoIterator<Item = &'a AudienceSegment>,
    K: Ord,
    F: Fn(&AudienceSegment) -> K,
{
    segments
        .into_iter()
        .fold(BTreeMap::new(), |mut acc, segment| {
            *acc.entry(key(segment)).or_insert(0) += 1;
            acc
        })
}

#[derive(Debug, Clone, PartialEq)]
pub(crate) struct ClassShare {
    pub(crate) class: SocialClass,
    pub(crate) count: usize,
    /// Share of all input segments, from 0 to 100.
    pub(crate) percent: f64,
}

/// Per-class counts with their share of the input.
///
/// The denominator is the number of input segments. An empty input yields
/// no rows rather than a division by zero.
#[allow(clippy::cast_precision_loss)]
pub(crate) fn class_shares(segments: &[&AudienceSegment]) -> Vec<ClassShare> {
    let total = segments.len();
    if total == 0 {
        return Vec::new();
    }
    aggregate_by_class(segments.iter().copied())
        .into_iter()
        .map(|(class, count)| ClassShare {
            class,
            count,
            percent: count as f64 / total as f64 * 100.0,
        })
        .collect()
}

/// Sum of estimated sizes.
pub(crate) fn total_reach<'a, I>(segments: I) -> u64
where
    I: IntoIterator<Item = &'a AudienceSegment>,
{
    segments.into_iter().map(|s| s.estimated_size).sum()
}

/// Total reach in millions with one decimal, e.g. `"8.6M"`. Halves round
/// away from zero, so 3,250,000 reads `"3.3M"`.
#[allow(clippy::cast_precision_loss)]
pub(crate) fn potential_reach_millions(total: u64) -> String {
    let tenths = (total as f64 / 100_000.0).round();
    format!("{:.1}M", tenths / 10.0)
}

#[derive(Debug, Clone, PartialEq)]
pub(crate) struct ReachEntry {
    pub(crate) name: String,
    /// Estimated size in thousands.
    pub(crate) reach: f64,
}

/// Segments ranked by descending reach. Equal reaches keep input order.
#[allow(clippy::cast_precision_loss)]
pub(crate) fn reach_ranking<'a, I>(segments: I) -> Vec<ReachEntry>
where
    I: IntoIterator<Item = &'a AudienceSegment>,
{
    let mut ranking: Vec<ReachEntry> = segments
        .into_iter()
        .map(|s| ReachEntry {
            name: s.name.clone(),
            reach: s.estimated_size as f64 / 1000.0,
        })
        .collect();
    ranking.sort_by(|a, b| b.reach.total_cmp(&a.reach));
    ranking
}
