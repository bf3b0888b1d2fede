use async_graphql::{Context, Object, Result, SimpleObject};

use crate::{
    catalog::{Catalog, Language, SocialClass, State, UsageIntensity},
    query::{filter, FilterSpec},
    stats,
};

#[derive(SimpleObject)]
struct ClassCount {
    class: SocialClass,
    count: usize,
    /// Share of the matching segments, from 0 to 100.
    percent: f64,
}

#[derive(SimpleObject)]
struct SegmentReach {
    name: String,
    /// Estimated size in thousands.
    reach: f64,
}

#[derive(SimpleObject)]
struct IntensityCount {
    intensity: UsageIntensity,
    count: usize,
}

#[derive(SimpleObject)]
struct LanguageCount {
    language: Language,
    count: usize,
}

#[derive(SimpleObject)]
struct RegionCount {
    region: State,
    count: usize,
}

#[derive(SimpleObject)]
struct SegmentStat {
    /// The number of matching segments.
    active_segment_count: usize,

    /// The sum of estimated sizes.
    total_reach: u64,

    /// The total reach in millions, e.g. "8.6M".
    potential_reach: String,

    /// The distribution of matching segments by social class.
    class_distribution: Vec<ClassCount>,

    /// Matching segments by descending reach.
    reach_ranking: Vec<SegmentReach>,

    intensity_distribution: Vec<IntensityCount>,

    language_distribution: Vec<LanguageCount>,

    /// A segment living in several states counts once in each.
    region_distribution: Vec<RegionCount>,
}

#[derive(Default)]
pub(super) struct SegmentStatQuery {}

#[Object]
impl SegmentStatQuery {
    #[allow(clippy::unused_async)]
    async fn segment_stat(
        &self,
        ctx: &Context<'_>,
        #[graphql(name = "filter", default)] spec: FilterSpec,
    ) -> Result<SegmentStat> {
        let catalog = ctx.data::<Catalog>()?;
        let filtered = filter(catalog.segments(), &spec);
        let segments = || filtered.iter().copied();

        let total_reach = stats::total_reach(segments());
        let class_distribution = stats::class_shares(&filtered)
            .into_iter()
            .map(|share| ClassCount {
                class: share.class,
                count: share.count,
                percent: share.percent,
            })
            .collect();
        let reach_ranking = stats::reach_ranking(segments())
            .into_iter()
            .map(|entry| SegmentReach {
                name: entry.name,
                reach: entry.reach,
            })
            .collect();
        let intensity_distribution = stats::aggregate_by_intensity(segments())
            .into_iter()
            .map(|(intensity, count)| IntensityCount { intensity, count })
            .collect();
        let language_distribution = stats::aggregate_by_language(segments())
            .into_iter()
            .map(|(language, count)| LanguageCount { language, count })
            .collect();
        let region_distribution = stats::aggregate_by_region(segments())
            .into_iter()
            .map(|(region, count)| RegionCount { region, count })
            .collect();

        Ok(SegmentStat {
            active_segment_count: filtered.len(),
            total_reach,
            potential_reach: stats::potential_reach_millions(total_reach),
            class_distribution,
            reach_ranking,
            intensity_distribution,
            language_distribution,
            region_distribution,
        })
    }
}
