use async_graphql::{ComplexObject, Context, Enum, Result, SimpleObject};
use serde::Serialize;

use super::{AudienceSegment, Catalog, Labelled};

#[derive(Enum, Copy, Clone, Eq, PartialEq, Debug)]
pub(crate) enum SetupComplexity {
    Low,
    Medium,
    High,
}

impl Labelled for SetupComplexity {
    const ALL: &'static [Self] = &[Self::Low, Self::Medium, Self::High];

    fn label(self) -> &'static str {
        match self {
            Self::Low => "Low",
            Self::Medium => "Medium",
            Self::High => "High",
        }
    }
}

labelled!(SetupComplexity);

#[derive(Enum, Copy, Clone, Eq, PartialEq, Debug)]
pub(crate) enum ConversionSpeed {
    Fast,
    Medium,
    Slow,
}

impl Labelled for ConversionSpeed {
    const ALL: &'static [Self] = &[Self::Fast, Self::Medium, Self::Slow];

    fn label(self) -> &'static str {
        match self {
            Self::Fast => "Fast",
            Self::Medium => "Medium",
            Self::Slow => "Slow",
        }
    }
}

labelled!(ConversionSpeed);

/// A documented campaign run against one of the segments.
#[derive(SimpleObject, Serialize, Clone, Debug)]
#[graphql(complex)]
#[serde(rename_all = "camelCase")]
pub(crate) struct CaseStudy {
    pub(crate) id: String,
    pub(crate) title: String,
    pub(crate) industry: String,
    pub(crate) strategy: String,
    pub(crate) results: String,
    /// Id of the segment the campaign targeted. Not checked against the
    /// catalog.
    pub(crate) target_audience_id: String,
}

#[ComplexObject]
impl CaseStudy {
    /// The targeted segment, or `null` if the id does not resolve.
    async fn target_audience(&self, ctx: &Context<'_>) -> Result<Option<AudienceSegment>> {
        let catalog = ctx.data::<Catalog>()?;
        Ok(catalog.segment(&self.target_audience_id).cloned())
    }
}

/// An advertising channel benchmarked against WhatsApp.
#[derive(SimpleObject, Serialize, Clone, Debug)]
#[serde(rename_all = "camelCase")]
pub(crate) struct AdPlatform {
    pub(crate) name: String,
    pub(crate) setup_complexity: SetupComplexity,
    /// Estimated cost-per-lead range, as display text.
    pub(crate) avg_cpl: String,
    /// Zero to five.
    pub(crate) trust_factor: u8,
    pub(crate) conversion_speed: ConversionSpeed,
    pub(crate) best_for: String,
    pub(crate) malaysian_context: String,
}

#[derive(SimpleObject, Serialize, Clone, Debug)]
pub(crate) struct StrategicTip {
    pub(crate) title: String,
    pub(crate) description: String,
}
