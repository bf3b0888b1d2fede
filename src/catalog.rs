//! The in-memory market dataset.
//!
//! A [`Catalog`] is built once at startup, validated, and then shared
//! read-only with every request handler.

/// Implements `Display`, `Serialize` and `FromStr` for a [`Labelled`]
/// enumeration in terms of its display label.
macro_rules! labelled {
    ($ty:ty) => {
        impl std::fmt::Display for $ty {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                f.write_str(self.label())
            }
        }

        impl serde::Serialize for $ty {
            fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
            where
                S: serde::Serializer,
            {
                serializer.serialize_str(self.label())
            }
        }

        impl std::str::FromStr for $ty {
            type Err = crate::catalog::UnknownLabel;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                crate::catalog::parse_label(s).ok_or_else(|| crate::catalog::UnknownLabel {
                    kind: stringify!($ty),
                    value: s.to_string(),
                })
            }
        }
    };
}

mod dataset;
mod reference;
mod segment;

use std::{collections::HashSet, sync::Arc};

use thiserror::Error;

pub(crate) use self::{
    reference::{AdPlatform, CaseStudy, ConversionSpeed, SetupComplexity, StrategicTip},
    segment::{
        AgeGroup, AudienceSegment, Gender, ItemCategory, Language, SocialClass, State,
        UsageIntensity,
    },
};

/// Selection value that matches every segment.
pub(crate) const WILDCARD: &str = "All";

/// Highest trust factor an ad platform can carry.
const MAX_TRUST_FACTOR: u8 = 5;

/// A closed enumeration whose external representation is a display label.
pub(crate) trait Labelled: Sized + Copy + 'static {
    /// Every variant, in declaration order.
    const ALL: &'static [Self];

    /// The display string presentation code formats on.
    fn label(self) -> &'static str;

    /// A short alternative spelling accepted when parsing.
    fn code(self) -> &'static str {
        self.label()
    }
}

#[derive(Debug, Error, PartialEq, Eq)]
#[error("unknown {kind} `{value}`")]
pub(crate) struct UnknownLabel {
    pub(crate) kind: &'static str,
    pub(crate) value: String,
}

/// Finds the variant whose label or code matches `value`, ignoring ASCII case.
pub(crate) fn parse_label<T: Labelled>(value: &str) -> Option<T> {
    let value = value.trim();
    T::ALL.iter().copied().find(|variant| {
        variant.label().eq_ignore_ascii_case(value) || variant.code().eq_ignore_ascii_case(value)
    })
}

/// Parses an optional selection where a missing value, an empty string or
/// [`WILDCARD`] mean "match all".
pub(crate) fn parse_selection<T>(value: Option<&str>) -> Result<Option<T>, UnknownLabel>
where
    T: Labelled + std::str::FromStr<Err = UnknownLabel>,
{
    match value.map(str::trim) {
        None | Some("") => Ok(None),
        Some(v) if v.eq_ignore_ascii_case(WILDCARD) => Ok(None),
        Some(v) => v.parse().map(Some),
    }
}

#[derive(Debug, Error, PartialEq, Eq)]
pub(crate) enum CatalogError {
    #[error("duplicate segment id `{0}`")]
    DuplicateSegmentId(String),
    #[error("segment `{0}` lists no regions")]
    NoRegions(String),
    #[error("segment `{segment}` lists affinity `{category}` more than once")]
    DuplicateAffinity {
        segment: String,
        category: ItemCategory,
    },
    #[error("duplicate case study id `{0}`")]
    DuplicateCaseStudyId(String),
    #[error("platform `{platform}` has trust factor {value}, expected 0 to 5")]
    TrustFactorOutOfRange { platform: String, value: u8 },
}

struct Inner {
    segments: Vec<AudienceSegment>,
    case_studies: Vec<CaseStudy>,
    platforms: Vec<AdPlatform>,
    tips: Vec<StrategicTip>,
}

/// Immutable collection of segments and the reference data shown next to
/// them. Cloning is cheap.
#[derive(Clone)]
pub(crate) struct Catalog {
    inner: Arc<Inner>,
}

impl Catalog {
    /// Validates the records and freezes them into a catalog.
    ///
    /// # Errors
    ///
    /// Returns an error if a segment id repeats, a segment has no region or
    /// repeats an affinity, a case study id repeats, or a platform's trust
    /// factor is above five.
    pub(crate) fn new(
        segments: Vec<AudienceSegment>,
        case_studies: Vec<CaseStudy>,
        platforms: Vec<AdPlatform>,
        tips: Vec<StrategicTip>,
    ) -> Result<Self, CatalogError> {
        let mut ids = HashSet::new();
        for segment in &segments {
            if !ids.insert(segment.id.as_str()) {
                return Err(CatalogError::DuplicateSegmentId(segment.id.clone()));
            }
            if segment.regions.is_empty() {
                return Err(CatalogError::NoRegions(segment.id.clone()));
            }
            let mut seen = HashSet::new();
            if let Some(category) = segment
                .top_item_affinities
                .iter()
                .find(|category| !seen.insert(**category))
            {
                return Err(CatalogError::DuplicateAffinity {
                    segment: segment.id.clone(),
                    category: *category,
                });
            }
        }

        let mut case_ids = HashSet::new();
        for case in &case_studies {
            if !case_ids.insert(case.id.as_str()) {
                return Err(CatalogError::DuplicateCaseStudyId(case.id.clone()));
            }
        }

        if let Some(platform) = platforms
            .iter()
            .find(|p| p.trust_factor > MAX_TRUST_FACTOR)
        {
            return Err(CatalogError::TrustFactorOutOfRange {
                platform: platform.name.clone(),
                value: platform.trust_factor,
            });
        }

        Ok(Self {
            inner: Arc::new(Inner {
                segments,
                case_studies,
                platforms,
                tips,
            }),
        })
    }

    /// The built-in Malaysian SME market dataset.
    pub(crate) fn malaysian() -> Result<Self, CatalogError> {
        Self::new(
            dataset::segments(),
            dataset::case_studies(),
            dataset::ad_platforms(),
            dataset::strategic_tips(),
        )
    }

    pub(crate) fn segments(&self) -> &[AudienceSegment] {
        &self.inner.segments
    }

    pub(crate) fn segment(&self, id: &str) -> Option<&AudienceSegment> {
        self.inner.segments.iter().find(|s| s.id == id)
    }

    pub(crate) fn case_studies(&self) -> &[CaseStudy] {
        &self.inner.case_studies
    }

    pub(crate) fn platforms(&self) -> &[AdPlatform] {
        &self.inner.platforms
    }

    pub(crate) fn tips(&self) -> &[StrategicTip] {
        &self.inner.tips
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;

    pub(crate) fn segment(id: &str, class: SocialClass) -> AudienceSegment {
        AudienceSegment {
            id: id.to_string(),
            name: format!("Segment {id}"),
            regions: vec![State::Selangor],
            age_group: AgeGroup::YoungProfessional,
            gender: Gender::All,
            social_class: class,
            estimated_size: 1_000,
            usage_intensity: UsageIntensity::Medium,
            purchasing_behavior: Vec::new(),
            pain_points: Vec::new(),
            preferred_content: Vec::new(),
            special_requirements: String::new(),
            cultural_triggers: Vec::new(),
            primary_language: Language::Malay,
            peak_activity_time: "8 PM - 11 PM".to_string(),
            top_item_affinities: vec![ItemCategory::Fmcg],
        }
    }

    #[test]
    fn malaysian_dataset_is_valid() {
        let catalog = Catalog::malaysian().unwrap();
        assert_eq!(catalog.segments().len(), 6);
        assert_eq!(catalog.case_studies().len(), 2);
        assert_eq!(catalog.platforms().len(), 4);
        assert_eq!(catalog.tips().len(), 3);
        assert!(catalog.segments().iter().all(|s| !s.regions.is_empty()));
    }

    #[test]
    fn lookup_by_id() {
        let catalog = Catalog::malaysian().unwrap();
        let found = catalog.segment("seg-002").unwrap();
        assert_eq!(found.name, "Johor Bahru Cross-Border Shoppers");
        assert!(catalog.segment("seg-999").is_none());
    }

    #[test]
    fn rejects_duplicate_ids() {
        let segments = vec![
            segment("a", SocialClass::M40),
            segment("a", SocialClass::T20),
        ];
        let err = Catalog::new(segments, Vec::new(), Vec::new(), Vec::new())
            .err()
            .unwrap();
        assert_eq!(err, CatalogError::DuplicateSegmentId("a".to_string()));
    }

    #[test]
    fn rejects_empty_regions() {
        let mut s = segment("a", SocialClass::M40);
        s.regions.clear();
        let err = Catalog::new(vec![s], Vec::new(), Vec::new(), Vec::new())
            .err()
            .unwrap();
        assert_eq!(err, CatalogError::NoRegions("a".to_string()));
    }

    #[test]
    fn rejects_repeated_affinity() {
        let mut s = segment("a", SocialClass::M40);
        s.top_item_affinities = vec![
            ItemCategory::Fashion,
            ItemCategory::Fmcg,
            ItemCategory::Fashion,
        ];
        let err = Catalog::new(vec![s], Vec::new(), Vec::new(), Vec::new())
            .err()
            .unwrap();
        assert_eq!(
            err,
            CatalogError::DuplicateAffinity {
                segment: "a".to_string(),
                category: ItemCategory::Fashion,
            }
        );
    }

    #[test]
    fn rejects_untrusted_platform() {
        let mut platforms = dataset::ad_platforms();
        platforms[0].trust_factor = 6;
        let err = Catalog::new(Vec::new(), Vec::new(), platforms, Vec::new())
            .err()
            .unwrap();
        assert!(matches!(
            err,
            CatalogError::TrustFactorOutOfRange { value: 6, .. }
        ));
    }

    #[test]
    fn parses_labels_and_codes() {
        assert_eq!(parse_label::<State>("kuala lumpur"), Some(State::KualaLumpur));
        assert_eq!(parse_label::<SocialClass>("T20"), Some(SocialClass::T20));
        assert_eq!(
            parse_label::<SocialClass>("M40 (Middle Income)"),
            Some(SocialClass::M40)
        );
        assert_eq!(
            "Fashion & Apparel".parse::<ItemCategory>(),
            Ok(ItemCategory::Fashion)
        );
        assert!("Atlantis".parse::<State>().is_err());
    }

    #[test]
    fn wildcard_selection() {
        assert_eq!(parse_selection::<State>(None), Ok(None));
        assert_eq!(parse_selection::<State>(Some("All")), Ok(None));
        assert_eq!(parse_selection::<State>(Some("")), Ok(None));
        assert_eq!(
            parse_selection::<State>(Some("Johor")),
            Ok(Some(State::Johor))
        );
        let err = parse_selection::<AgeGroup>(Some("99+")).unwrap_err();
        assert_eq!(err.to_string(), "unknown AgeGroup `99+`");
    }

    #[test]
    fn labels_serialize_as_display_strings() {
        let json = serde_json::to_value(SocialClass::B40).unwrap();
        assert_eq!(json, "B40 (Lower Income)");
        assert_eq!(AgeGroup::Silver.to_string(), "55+");
    }
}
