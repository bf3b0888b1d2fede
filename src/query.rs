use async_graphql::InputObject;
use serde::Deserialize;

use crate::catalog::{
    parse_selection, AgeGroup, AudienceSegment, ItemCategory, SocialClass, State, UnknownLabel,
};

/// The user's current query over the segment catalog. Every unset field
/// matches all segments.
#[derive(InputObject, Default, Clone, Debug, PartialEq, Eq)]
#[graphql(name = "SegmentFilter")]
pub(crate) struct FilterSpec {
    /// Case-insensitive keyword matched against the segment name, its
    /// special requirements and its cultural triggers.
    #[graphql(default)]
    pub(crate) term: String,
    /// Filter by a state the segment lives in.
    pub(crate) region: Option<State>,
    /// Filter by age bracket.
    pub(crate) age_group: Option<AgeGroup>,
    /// Filter by social class.
    pub(crate) social_class: Option<SocialClass>,
    /// Filter by item-category affinity.
    pub(crate) category: Option<ItemCategory>,
}

impl FilterSpec {
    fn matches(&self, segment: &AudienceSegment, term: &str) -> bool {
        let matches_term = term.is_empty()
            || segment.name.to_lowercase().contains(term)
            || segment.special_requirements.to_lowercase().contains(term)
            || segment
                .cultural_triggers
                .iter()
                .any(|t| t.to_lowercase().contains(term));

        matches_term
            && self
                .region
                .is_none_or(|region| segment.regions.contains(&region))
            && self
                .age_group
                .is_none_or(|age| segment.age_group == age)
            && self
                .social_class
                .is_none_or(|class| segment.social_class == class)
            && self
                .category
                .is_none_or(|category| segment.top_item_affinities.contains(&category))
    }
}

/// Returns the segments matching every active predicate of `spec`, in
/// catalog order.
pub(crate) fn filter<'a>(
    segments: &'a [AudienceSegment],
    spec: &FilterSpec,
) -> Vec<&'a AudienceSegment> {
    let term = spec.term.to_lowercase();
    segments
        .iter()
        .filter(|segment| spec.matches(segment, &term))
        .collect()
}

/// Query-string form of [`FilterSpec`], as sent by download links.
#[derive(Deserialize, Debug, Default)]
#[serde(rename_all = "camelCase")]
pub(crate) struct FilterParams {
    term: Option<String>,
    region: Option<String>,
    age_group: Option<String>,
    social_class: Option<String>,
    category: Option<String>,
}

impl TryFrom<FilterParams> for FilterSpec {
    type Error = UnknownLabel;

    fn try_from(params: FilterParams) -> Result<Self, Self::Error> {
        Ok(Self {
            term: params.term.unwrap_or_default(),
            region: parse_selection(params.region.as_deref())?,
            age_group: parse_selection(params.age_group.as_deref())?,
            social_class: parse_selection(params.social_class.as_deref())?,
            category: parse_selection(params.category.as_deref())?,
        })
    }
}
