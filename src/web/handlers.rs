use actix_web::{web, HttpResponse};
use serde::{Deserialize, Serialize};

use crate::analysis::{GrowthAnalyzer, SeriesSummary};
use crate::error::GrowthError;
use crate::io::{self, SeriesDocument};
use crate::models::GrowthParameters;

use super::state::AppState;

// ---------------------------------------------------------------------------
// Error wrapper
// ---------------------------------------------------------------------------

#[derive(Debug, Serialize)]
struct ErrorBody {
    error: String,
    details: String,
}

#[derive(Debug)]
pub(crate) struct WebError(GrowthError);

impl From<GrowthError> for WebError {
    fn from(e: GrowthError) -> Self {
        WebError(e)
    }
}

impl std::fmt::Display for WebError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl actix_web::ResponseError for WebError {
    fn error_response(&self) -> HttpResponse {
        let (status, error_type) = match &self.0 {
            GrowthError::InvalidArgument(_) => {
                (actix_web::http::StatusCode::BAD_REQUEST, "Bad Request")
            }
            _ => (
                actix_web::http::StatusCode::INTERNAL_SERVER_ERROR,
                "Internal Server Error",
            ),
        };
        HttpResponse::build(status).json(ErrorBody {
            error: error_type.to_string(),
            details: self.0.to_string(),
        })
    }
}

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

/// Query-string parameters; omitted values take the configured defaults.
#[derive(Debug, Deserialize)]
pub struct SeriesQuery {
    n0: Option<f64>,
    r: Option<f64>,
    t_max: Option<f64>,
}

/// Build parameters from optional inputs and apply the configured range policy.
fn resolve(
    state: &AppState,
    n0: Option<f64>,
    r: Option<f64>,
    t_max: Option<f64>,
) -> Result<GrowthParameters, GrowthError> {
    let bounds = state.bounds();
    let params = GrowthParameters::from_real(
        n0.unwrap_or(bounds.n0.default),
        r.unwrap_or(bounds.r.default),
        t_max.unwrap_or(bounds.t_max.default),
    )?;
    bounds.check(&params)?;
    Ok(params)
}

fn series_response(params: &GrowthParameters) -> HttpResponse {
    let series = GrowthAnalyzer::new(params).series();
    let summary = SeriesSummary::compute(params, &series);
    HttpResponse::Ok().json(SeriesDocument {
        parameters: params,
        summary: &summary,
        points: series.points(),
    })
}

// ---------------------------------------------------------------------------
// Handlers
// ---------------------------------------------------------------------------

pub async fn bounds(state: web::Data<AppState>) -> HttpResponse {
    HttpResponse::Ok().json(state.bounds())
}

pub async fn series_query(
    state: web::Data<AppState>,
    query: web::Query<SeriesQuery>,
) -> Result<HttpResponse, WebError> {
    let params = resolve(&state, query.n0, query.r, query.t_max)?;
    tracing::debug!(n0 = params.n0(), r = params.r(), t_max = params.t_max(), "series request");
    Ok(series_response(&params))
}

pub async fn series_json(
    state: web::Data<AppState>,
    body: web::Json<GrowthParameters>,
) -> Result<HttpResponse, WebError> {
    let params = body.into_inner();
    state.bounds().check(&params)?;
    Ok(series_response(&params))
}

#[derive(Debug, Deserialize)]
pub struct ExportQuery {
    format: Option<String>,
    n0: Option<f64>,
    r: Option<f64>,
    t_max: Option<f64>,
}

pub async fn export(
    state: web::Data<AppState>,
    query: web::Query<ExportQuery>,
) -> Result<HttpResponse, WebError> {
    let params = resolve(&state, query.n0, query.r, query.t_max)?;
    let series = GrowthAnalyzer::new(&params).series();
    let fmt = query.format.as_deref().unwrap_or("csv");

    match fmt {
        "csv" => {
            let data = io::series_to_csv_bytes(&series)?;
            Ok(HttpResponse::Ok()
                .content_type("text/csv")
                .insert_header((
                    "Content-Disposition",
                    "attachment; filename=\"growth_series.csv\"",
                ))
                .body(data))
        }
        "json" => {
            let summary = SeriesSummary::compute(&params, &series);
            let doc = SeriesDocument {
                parameters: &params,
                summary: &summary,
                points: series.points(),
            };
            let data = io::series_to_json(&doc, true)?;
            Ok(HttpResponse::Ok()
                .content_type("application/json")
                .insert_header((
                    "Content-Disposition",
                    "attachment; filename=\"growth_series.json\"",
                ))
                .body(data))
        }
        _ => Ok(HttpResponse::BadRequest().json(ErrorBody {
            error: "Bad Request".to_string(),
            details: format!("Unsupported export format: {fmt}. Use csv or json."),
        })),
    }
}

// ---------------------------------------------------------------------------
// Static file handlers
// ---------------------------------------------------------------------------

pub async fn index_html() -> HttpResponse {
    HttpResponse::Ok()
        .content_type("text/html; charset=utf-8")
        .body(include_str!("../../static/index.html"))
}

pub async fn app_js() -> HttpResponse {
    HttpResponse::Ok()
        .content_type("application/javascript; charset=utf-8")
        .body(include_str!("../../static/app.js"))
}

pub async fn style_css() -> HttpResponse {
    HttpResponse::Ok()
        .content_type("text/css; charset=utf-8")
        .body(include_str!("../../static/style.css"))
}
