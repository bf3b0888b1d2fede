use async_graphql::{
    connection::{query, Connection, EmptyFields},
    Context, Object, Result,
};

use crate::{
    api,
    catalog::{AudienceSegment, Catalog},
    export,
    query::{filter, FilterSpec},
};

#[derive(Default)]
pub(super) struct SegmentQuery;

#[Object]
impl SegmentQuery {
    /// Segments matching `filter`, in catalog order.
    async fn segments(
        &self,
        ctx: &Context<'_>,
        #[graphql(name = "filter", default)] spec: FilterSpec,
        after: Option<String>,
        before: Option<String>,
        first: Option<i32>,
        last: Option<i32>,
    ) -> Result<Connection<String, AudienceSegment, EmptyFields, EmptyFields>> {
        let catalog = ctx.data::<Catalog>()?;
        let nodes: Vec<AudienceSegment> = filter(catalog.segments(), &spec)
            .into_iter()
            .cloned()
            .collect();
        query(
            after,
            before,
            first,
            last,
            |after, before, first, last| async move {
                api::load_connection(nodes, after, before, first, last)
            },
        )
        .await
    }

    #[allow(clippy::unused_async)]
    async fn segment(&self, ctx: &Context<'_>, id: String) -> Result<Option<AudienceSegment>> {
        let catalog = ctx.data::<Catalog>()?;
        Ok(catalog.segment(&id).cloned())
    }

    /// The matching segments rendered as CSV.
    #[allow(clippy::unused_async)]
    async fn segments_csv(
        &self,
        ctx: &Context<'_>,
        #[graphql(name = "filter", default)] spec: FilterSpec,
    ) -> Result<String> {
        let catalog = ctx.data::<Catalog>()?;
        Ok(export::to_csv(&filter(catalog.segments(), &spec)))
    }
}

#[cfg(test)]
mod tests {
    use crate::api::TestSchema;

    #[tokio::test]
    async fn all_segments_by_default() {
        let schema = TestSchema::new();
        let query = r"
        {
            segments {
                edges {
                    node {
                        id
                    }
                }
                pageInfo {
                    hasNextPage
                }
            }
        }";
        let res = schema.execute(query).await;
        assert_eq!(
            res.data.to_string(),
            "{segments: {edges: [{node: {id: \"seg-001\"}}, {node: {id: \"seg-002\"}}, \
             {node: {id: \"seg-003\"}}, {node: {id: \"seg-004\"}}, {node: {id: \"seg-005\"}}, \
             {node: {id: \"seg-006\"}}], pageInfo: {hasNextPage: false}}}"
        );
    }

    #[tokio::test]
    async fn filter_by_region() {
        let schema = TestSchema::new();
        let query = r"
        {
            segments(filter: { region: JOHOR }) {
                edges {
                    node {
                        name
                        socialClass
                    }
                }
            }
        }";
        let res = schema.execute(query).await;
        assert_eq!(
            res.data.to_string(),
            "{segments: {edges: [{node: {name: \"Johor Bahru Cross-Border Shoppers\", \
             socialClass: T20}}]}}"
        );
    }

    #[tokio::test]
    async fn unmatched_region_is_empty() {
        let schema = TestSchema::new();
        let query = r"
        {
            segments(filter: { region: PERLIS }) {
                edges {
                    node {
                        id
                    }
                }
            }
        }";
        let res = schema.execute(query).await;
        assert_eq!(res.data.to_string(), "{segments: {edges: []}}");
    }

    #[tokio::test]
    async fn paging_with_cursors() {
        let schema = TestSchema::new();
        let query = r"
        {
            segments(first: 2) {
                edges {
                    cursor
                    node {
                        id
                    }
                }
                pageInfo {
                    hasNextPage
                    endCursor
                }
            }
        }";
        let res = schema.execute(query).await;
        let json = res.data.into_json().unwrap();
        let edges = json["segments"]["edges"].as_array().unwrap();
        assert_eq!(edges.len(), 2);
        assert_eq!(json["segments"]["pageInfo"]["hasNextPage"], true);
        let end = json["segments"]["pageInfo"]["endCursor"].as_str().unwrap();

        let query = format!(
            r#"
            {{
                segments(first: 10, after: "{end}") {{
                    edges {{
                        node {{
                            id
                        }}
                    }}
                    pageInfo {{
                        hasNextPage
                        hasPreviousPage
                    }}
                }}
            }}"#
        );
        let res = schema.execute(&query).await;
        let json = res.data.into_json().unwrap();
        let ids: Vec<&str> = json["segments"]["edges"]
            .as_array()
            .unwrap()
            .iter()
            .map(|edge| edge["node"]["id"].as_str().unwrap())
            .collect();
        assert_eq!(ids, ["seg-003", "seg-004", "seg-005", "seg-006"]);
        assert_eq!(json["segments"]["pageInfo"]["hasNextPage"], false);
    }

    #[tokio::test]
    async fn last_and_before() {
        let schema = TestSchema::new();
        let query = r"
        {
            segments(last: 2) {
                edges {
                    node {
                        id
                    }
                }
                pageInfo {
                    hasPreviousPage
                    startCursor
                }
            }
        }";
        let res = schema.execute(query).await;
        let json = res.data.into_json().unwrap();
        assert_eq!(json["segments"]["edges"][0]["node"]["id"], "seg-005");
        assert_eq!(json["segments"]["pageInfo"]["hasPreviousPage"], true);
        let start = json["segments"]["pageInfo"]["startCursor"].as_str().unwrap();

        let query = format!(
            r#"
            {{
                segments(last: 1, before: "{start}") {{
                    edges {{
                        node {{
                            id
                        }}
                    }}
                }}
            }}"#
        );
        let res = schema.execute(&query).await;
        assert_eq!(
            res.data.to_string(),
            "{segments: {edges: [{node: {id: \"seg-004\"}}]}}"
        );
    }

    #[tokio::test]
    async fn unknown_cursor_is_an_error() {
        let schema = TestSchema::new();
        let query = r#"
        {
            segments(after: "c2VnLTk5OQ==") {
                edges {
                    node {
                        id
                    }
                }
            }
        }"#;
        let res = schema.execute(query).await;
        assert_eq!(res.errors.len(), 1);
    }

    #[tokio::test]
    async fn lookup_and_missing() {
        let schema = TestSchema::new();
        let query = r#"
        {
            found: segment(id: "seg-006") {
                name
                regions
                topItemAffinities
            }
            missing: segment(id: "seg-999") {
                name
            }
        }"#;
        let res = schema.execute(query).await;
        assert_eq!(
            res.data.to_string(),
            "{found: {name: \"Putrajaya Civil Servants\", regions: [PUTRAJAYA], \
             topItemAffinities: [SERVICES, FOOD_BEVERAGE]}, missing: null}"
        );
    }

    #[tokio::test]
    async fn csv_for_filtered_segments() {
        let schema = TestSchema::new();
        let query = r#"
        {
            segmentsCsv(filter: { term: "putrajaya" })
        }"#;
        let res = schema.execute(query).await;
        let json = res.data.into_json().unwrap();
        let csv = json["segmentsCsv"].as_str().unwrap();
        let mut lines = csv.lines();
        assert_eq!(
            lines.next(),
            Some("Name,Reach,Class,Age,Peak Time,Top Affinities")
        );
        assert!(lines
            .next()
            .unwrap()
            .starts_with("\"Putrajaya Civil Servants\",\"450000\""));
        assert_eq!(lines.next(), None);
    }
}
