use std::sync::Arc;

use axum::extract::{Query, State};
use axum::http::StatusCode;
use axum::response::{Html, IntoResponse, Response};
use axum::Json;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use super::page;
use super::WebState;
use crate::chart::{ChartError, PieChart, ScatterChart};
use crate::constants::APP_VERSION;
use crate::data::model::{PayloadRange, SiteSelection};
use crate::layout::DashboardLayout;
use crate::pipeline::{payload_outcome_chart, site_success_chart};

#[derive(Debug, Error)]
pub enum WebError {
    #[error("chart could not be built: {0}")]
    Chart(#[from] ChartError),
}

impl IntoResponse for WebError {
    fn into_response(self) -> Response {
        log::error!("{self}");
        (StatusCode::INTERNAL_SERVER_ERROR, self.to_string()).into_response()
    }
}

/// `?site=`; absent means "All Sites".
#[derive(Debug, Deserialize)]
pub struct SiteQuery {
    #[serde(default)]
    pub site: SiteSelection,
}

/// `?site=&low=&high=`; absent bounds fall back to the layout defaults.
#[derive(Debug, Deserialize)]
pub struct PayloadQuery {
    #[serde(default)]
    pub site: SiteSelection,
    pub low: Option<f64>,
    pub high: Option<f64>,
}

#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
    pub launches: usize,
}

pub async fn index(State(state): State<Arc<WebState>>) -> Html<String> {
    Html(page::render(&state.layout))
}

pub async fn health_check(State(state): State<Arc<WebState>>) -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "healthy".to_string(),
        version: APP_VERSION.to_string(),
        launches: state.table.len(),
    })
}

pub async fn layout(State(state): State<Arc<WebState>>) -> Json<DashboardLayout> {
    Json(state.layout.clone())
}

pub async fn site_success(
    State(state): State<Arc<WebState>>,
    Query(query): Query<SiteQuery>,
) -> Result<Json<PieChart>, WebError> {
    let chart = site_success_chart(&state.table, &query.site)?;
    Ok(Json(chart))
}

pub async fn payload_outcome(
    State(state): State<Arc<WebState>>,
    Query(query): Query<PayloadQuery>,
) -> Result<Json<ScatterChart>, WebError> {
    let default = state.layout.payload_slider.value;
    let range = PayloadRange::new(
        query.low.unwrap_or(default.low),
        query.high.unwrap_or(default.high),
    );
    let chart = payload_outcome_chart(&state.table, &query.site, range)?;
    Ok(Json(chart))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::model::tests::two_site_table;
    use axum::http::Uri;

    fn state() -> Arc<WebState> {
        Arc::new(WebState::new(two_site_table()))
    }

    #[tokio::test]
    async fn site_success_matches_pipeline() {
        let state = state();
        let Json(pie) = site_success(
            State(state.clone()),
            Query(SiteQuery { site: SiteSelection::All }),
        )
        .await
        .unwrap();
        assert_eq!(pie, site_success_chart(&state.table, &SiteSelection::All).unwrap());
        assert_eq!(pie.total(), 3);
    }

    #[tokio::test]
    async fn payload_outcome_uses_layout_defaults() {
        let state = state();
        let Json(chart) = payload_outcome(
            State(state.clone()),
            Query(PayloadQuery { site: SiteSelection::All, low: None, high: None }),
        )
        .await
        .unwrap();
        let expected = payload_outcome_chart(
            &state.table,
            &SiteSelection::All,
            state.layout.payload_slider.value,
        )
        .unwrap();
        assert_eq!(chart, expected);
    }

    #[tokio::test]
    async fn unknown_site_is_empty_not_an_error() {
        let Json(chart) = payload_outcome(
            State(state()),
            Query(PayloadQuery {
                site: SiteSelection::from("Nowhere"),
                low: Some(0.0),
                high: Some(10_000.0),
            }),
        )
        .await
        .unwrap();
        assert!(chart.is_empty());
    }

    #[test]
    fn query_strings_parse() {
        let uri: Uri = "http://localhost/api/charts/payload-outcome?site=All%20Sites&low=500&high=500"
            .parse()
            .unwrap();
        let Query(q) = Query::<PayloadQuery>::try_from_uri(&uri).unwrap();
        assert_eq!(q.site, SiteSelection::All);
        assert_eq!(q.low, Some(500.0));

        let uri: Uri = "http://localhost/api/charts/site-success".parse().unwrap();
        let Query(q) = Query::<SiteQuery>::try_from_uri(&uri).unwrap();
        assert_eq!(q.site, SiteSelection::All);

        let uri: Uri = "http://localhost/api/charts/payload-outcome?low=heavy".parse().unwrap();
        assert!(Query::<PayloadQuery>::try_from_uri(&uri).is_err());
    }

    #[tokio::test]
    async fn index_embeds_layout() {
        let Html(body) = index(State(state())).await;
        assert!(body.contains("SpaceX Launch Records Dashboard"));
        assert!(body.contains("success-payload-scatter-chart"));
    }
}
