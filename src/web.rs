use std::{convert::Infallible, net::SocketAddr, path::Path};

use async_graphql::http::GraphiQLSource;
use async_graphql_warp::GraphQLResponse;
use tracing::{info, warn};
use warp::{
    http::{
        header::{CONTENT_DISPOSITION, CONTENT_TYPE},
        StatusCode,
    },
    reply::{self, Reply},
    Filter, Rejection,
};

use crate::{
    api::Schema,
    catalog::Catalog,
    export::{to_csv, EXPORT_FILE_NAME},
    query::{filter, FilterParams, FilterSpec},
};

/// Runs the server, over TLS if `tls` holds certificate and key paths.
pub(crate) async fn serve(
    schema: Schema,
    catalog: Catalog,
    addr: SocketAddr,
    tls: Option<(&Path, &Path)>,
) {
    let routes = routes(schema, catalog);
    if let Some((cert, key)) = tls {
        info!("Listening on https://{addr}");
        warp::serve(routes)
            .tls()
            .cert_path(cert)
            .key_path(key)
            .run(addr)
            .await;
    } else {
        info!("Listening on http://{addr}");
        warp::serve(routes).run(addr).await;
    }
}

fn routes(
    schema: Schema,
    catalog: Catalog,
) -> impl Filter<Extract = (impl Reply,), Error = Rejection> + Clone {
    let graphql = warp::path("graphql")
        .and(warp::path::end())
        .and(warp::post())
        .and(async_graphql_warp::graphql(schema))
        .and_then(
            |(schema, request): (Schema, async_graphql::Request)| async move {
                Ok::<_, Infallible>(GraphQLResponse::from(schema.execute(request).await))
            },
        );

    let graphiql = warp::path::end().and(warp::get()).map(|| {
        reply::html(GraphiQLSource::build().endpoint("/graphql").finish())
    });

    let export = warp::path("export")
        .and(warp::path::end())
        .and(warp::get())
        .and(warp::query::<FilterParams>())
        .map(move |params: FilterParams| export_csv(&catalog, params));

    graphql
        .or(graphiql)
        .or(export)
        .with(warp::trace::request())
}

/// Responds with the matching segments as a CSV attachment, or 400 if a
/// selection names an unknown value.
fn export_csv(catalog: &Catalog, params: FilterParams) -> reply::Response {
    match FilterSpec::try_from(params) {
        Ok(spec) => {
            let csv = to_csv(&filter(catalog.segments(), &spec));
            let csv = reply::with_header(csv, CONTENT_TYPE, "text/csv; charset=utf-8");
            reply::with_header(
                csv,
                CONTENT_DISPOSITION,
                format!("attachment; filename=\"{EXPORT_FILE_NAME}\""),
            )
            .into_response()
        }
        Err(e) => {
            warn!("Rejected export request: {e}");
            reply::with_status(e.to_string(), StatusCode::BAD_REQUEST).into_response()
        }
    }
}
