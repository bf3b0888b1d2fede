use async_graphql::{Context, Object, Result, SimpleObject};

use crate::{
    catalog::{AdPlatform, CaseStudy, Catalog, StrategicTip},
    view::View,
};

#[derive(SimpleObject)]
struct NavigationItem {
    view: View,
    label: &'static str,
    /// Font Awesome icon class.
    icon: &'static str,
}

impl From<View> for NavigationItem {
    fn from(view: View) -> Self {
        Self {
            view,
            label: view.label(),
            icon: view.icon(),
        }
    }
}

/// Static reference data shown around the segment tables.
#[derive(Default)]
pub(super) struct ReferenceQuery;

#[Object]
impl ReferenceQuery {
    #[allow(clippy::unused_async)]
    async fn case_studies(&self, ctx: &Context<'_>) -> Result<Vec<CaseStudy>> {
        Ok(ctx.data::<Catalog>()?.case_studies().to_vec())
    }

    #[allow(clippy::unused_async)]
    async fn ad_platforms(&self, ctx: &Context<'_>) -> Result<Vec<AdPlatform>> {
        Ok(ctx.data::<Catalog>()?.platforms().to_vec())
    }

    #[allow(clippy::unused_async)]
    async fn strategic_tips(&self, ctx: &Context<'_>) -> Result<Vec<StrategicTip>> {
        Ok(ctx.data::<Catalog>()?.tips().to_vec())
    }

    /// The dashboard views, in menu order.
    #[allow(clippy::unused_async)]
    async fn navigation(&self) -> Vec<NavigationItem> {
        View::ALL.into_iter().map(NavigationItem::from).collect()
    }
}

#[cfg(test)]
mod tests {
    use crate::api::TestSchema;

    #[tokio::test]
    async fn case_studies_resolve_their_segment() {
        let schema = TestSchema::new();
        let query = r"
        {
            caseStudies {
                id
                targetAudience {
                    id
                }
            }
        }";
        let res = schema.execute(query).await;
        assert_eq!(
            res.data.to_string(),
            "{caseStudies: [{id: \"cs-001\", targetAudience: {id: \"seg-001\"}}, \
             {id: \"cs-002\", targetAudience: {id: \"seg-002\"}}]}"
        );
    }

    #[tokio::test]
    async fn platforms_and_tips() {
        let schema = TestSchema::new();
        let query = r"
        {
            adPlatforms {
                name
                trustFactor
            }
            strategicTips {
                title
            }
        }";
        let res = schema.execute(query).await;
        let json = res.data.into_json().unwrap();
        let platforms = json["adPlatforms"].as_array().unwrap();
        assert_eq!(platforms.len(), 4);
        assert_eq!(platforms[0]["name"], "WhatsApp Business");
        assert!(platforms
            .iter()
            .all(|p| p["trustFactor"].as_u64().unwrap() <= 5));
        assert_eq!(json["strategicTips"].as_array().unwrap().len(), 3);
    }

    #[tokio::test]
    async fn navigation_menu() {
        let schema = TestSchema::new();
        let query = r"
        {
            navigation {
                view
                label
            }
        }";
        let res = schema.execute(query).await;
        assert_eq!(
            res.data.to_string(),
            "{navigation: [{view: OVERVIEW, label: \"OVERVIEW\"}, \
             {view: DATA_HUB, label: \"DATA HUB\"}, {view: AD_MATRIX, label: \"AD MATRIX\"}, \
             {view: ADVISOR, label: \"ADVISOR AI\"}]}"
        );
    }
}
