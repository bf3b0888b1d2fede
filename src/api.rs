mod reference;
mod report;
mod segment;
mod segment_stat;

use std::{fmt::Display, sync::Arc};

use async_graphql::{
    types::connection::{Connection, Edge, EmptyFields},
    EmptySubscription, MergedObject, OutputType, Result,
};
use base64::{engine::general_purpose, Engine as _};

use crate::{advisor::ReportRequester, catalog::Catalog, report::ReportTracker};

/// The default page size for connections when neither `first` nor `last` is provided.
const DEFAULT_PAGE_SIZE: usize = 100;

/// A set of queries defined in the schema.
///
/// This is exposed only for [`Schema`], and not used directly.
#[derive(Default, MergedObject)]
pub(crate) struct Query(
    segment::SegmentQuery,
    segment_stat::SegmentStatQuery,
    reference::ReferenceQuery,
    report::ReportQuery,
);

/// A set of mutations defined in the schema.
#[derive(Default, MergedObject)]
pub(crate) struct Mutation(report::ReportMutation);

pub(crate) type Schema = async_graphql::Schema<Query, Mutation, EmptySubscription>;

pub(crate) fn schema(
    catalog: Catalog,
    requester: Arc<dyn ReportRequester>,
    tracker: ReportTracker,
) -> Schema {
    Schema::build(Query::default(), Mutation::default(), EmptySubscription)
        .data(catalog)
        .data(requester)
        .data(tracker)
        .finish()
}

fn encode_cursor<T: Display>(node: &T) -> String {
    general_purpose::STANDARD.encode(node.to_string())
}

fn decode_cursor(cursor: &str) -> Result<String> {
    let bytes = general_purpose::STANDARD.decode(cursor)?;
    Ok(String::from_utf8(bytes)?)
}

fn connect_cursor<T>(
    select_vec: Vec<T>,
    prev: bool,
    next: bool,
) -> Connection<String, T, EmptyFields, EmptyFields>
where
    T: OutputType + Display,
{
    let mut connection: Connection<String, T, EmptyFields, EmptyFields> =
        Connection::new(prev, next);
    for output in select_vec {
        connection
            .edges
            .push(Edge::new(encode_cursor(&output), output));
    }
    connection
}

/// Position of the node whose cursor is `cursor`.
fn locate<T: Display>(nodes: &[T], cursor: &str) -> Result<usize> {
    let key = decode_cursor(cursor)?;
    nodes
        .iter()
        .position(|node| node.to_string() == key)
        .ok_or_else(|| format!("unknown cursor `{cursor}`").into())
}

/// Pages through `nodes`, whose cursors are the base64 of their `Display`
/// form.
fn load_connection<N>(
    nodes: Vec<N>,
    after: Option<String>,
    before: Option<String>,
    first: Option<usize>,
    last: Option<usize>,
) -> Result<Connection<String, N, EmptyFields, EmptyFields>>
where
    N: Display + OutputType,
{
    let (nodes, has_previous, has_next) = if let Some(before) = before {
        if after.is_some() {
            return Err("cannot use both `after` and `before`".into());
        }
        if first.is_some() {
            return Err("'before' and 'first' cannot be specified simultaneously".into());
        }
        let last = last.unwrap_or(DEFAULT_PAGE_SIZE);
        let end = locate(&nodes, &before)?;
        let iter = nodes.into_iter().take(end).rev();
        let (mut nodes, has_previous) = collect_nodes(iter, last);
        nodes.reverse();
        (nodes, has_previous, false)
    } else if let Some(after) = after {
        if last.is_some() {
            return Err("'after' and 'last' cannot be specified simultaneously".into());
        }
        let first = first.unwrap_or(DEFAULT_PAGE_SIZE);
        let start = locate(&nodes, &after)? + 1;
        let iter = nodes.into_iter().skip(start);
        let (nodes, has_next) = collect_nodes(iter, first);
        (nodes, false, has_next)
    } else if let Some(last) = last {
        if first.is_some() {
            return Err("first and last cannot be used together".into());
        }
        let iter = nodes.into_iter().rev();
        let (mut nodes, has_previous) = collect_nodes(iter, last);
        nodes.reverse();
        (nodes, has_previous, false)
    } else {
        let first = first.unwrap_or(DEFAULT_PAGE_SIZE);
        let (nodes, has_next) = collect_nodes(nodes.into_iter(), first);
        (nodes, false, has_next)
    };
    Ok(connect_cursor(nodes, has_previous, has_next))
}

fn collect_nodes<I, T>(mut iter: I, size: usize) -> (Vec<T>, bool)
where
    I: Iterator<Item = T>,
{
    let mut nodes = Vec::with_capacity(size);
    if size == 0 {
        return (nodes, iter.next().is_some());
    }
    let mut has_more = false;
    while let Some(node) = iter.next() {
        nodes.push(node);
        if nodes.len() == size {
            has_more = iter.next().is_some();
            break;
        }
    }
    (nodes, has_more)
}

#[cfg(test)]
struct TestSchema {
    requester: Arc<crate::advisor::tests::StubRequester>,
    schema: Schema,
}

#[cfg(test)]
impl TestSchema {
    fn new() -> Self {
        Self::with_requester(crate::advisor::tests::StubRequester::answering("OK"))
    }

    fn with_requester(requester: crate::advisor::tests::StubRequester) -> Self {
        let requester = Arc::new(requester);
        let schema = schema(
            Catalog::malaysian().unwrap(),
            requester.clone(),
            ReportTracker::default(),
        );
        Self { requester, schema }
    }

    async fn execute(&self, query: &str) -> async_graphql::Response {
        let request: async_graphql::Request = query.into();
        self.schema.execute(request).await
    }
}
