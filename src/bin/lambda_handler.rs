//! AWS Lambda handler for loan projections
//!
//! Accepts a borrower position via JSON and returns the schedule as parallel
//! `balance`, `interest` and `payment` series plus a summary.
//!
//! Supports Lambda Function URLs for direct HTTP access.

use lambda_http::{run, service_fn, Body, Error, Request, Response};
use log::warn;
use serde::{Deserialize, Serialize};

use loan_projection::projection::{ScheduleSeries, SimulationSummary};
use loan_projection::{LoanError, LoanSimulator, LoanTerms};

/// Input for a projection
#[derive(Debug, Deserialize)]
pub struct ProjectionRequest {
    pub starting_balance: f64,

    /// Start date as DD/MM/YYYY
    pub start_date: String,

    pub starting_salary: f64,

    /// Overrides for the default loan terms
    #[serde(default)]
    pub terms: Option<LoanTerms>,
}

/// Output from the projection
#[derive(Debug, Serialize)]
pub struct ProjectionResponse {
    #[serde(flatten)]
    pub series: ScheduleSeries,
    pub summary: SimulationSummary,
    pub execution_time_ms: u64,
}

fn project(request: ProjectionRequest) -> Result<ProjectionResponse, LoanError> {
    let start = std::time::Instant::now();

    let simulator = LoanSimulator::new(request.terms.unwrap_or_default());
    let result = simulator.simulate_from_str(
        request.starting_balance,
        &request.start_date,
        request.starting_salary,
    )?;

    Ok(ProjectionResponse {
        series: result.series(),
        summary: result.summary(),
        execution_time_ms: start.elapsed().as_millis() as u64,
    })
}

fn cors(builder: lambda_http::http::response::Builder) -> lambda_http::http::response::Builder {
    builder
        .header("Access-Control-Allow-Origin", "*")
        .header("Access-Control-Allow-Methods", "POST, OPTIONS")
        .header("Access-Control-Allow-Headers", "Content-Type")
}

fn error_response(status: u16, message: &str) -> Result<Response<Body>, Error> {
    let body = serde_json::json!({ "error": message });
    Ok(cors(Response::builder())
        .status(status)
        .header("Content-Type", "application/json")
        .body(Body::Text(body.to_string()))?)
}

fn json_response(body: &ProjectionResponse) -> Result<Response<Body>, Error> {
    Ok(cors(Response::builder())
        .status(200)
        .header("Content-Type", "application/json")
        .body(Body::Text(serde_json::to_string(body)?))?)
}

async fn handler(event: Request) -> Result<Response<Body>, Error> {
    if event.method().as_str() == "OPTIONS" {
        return Ok(cors(Response::builder()).status(200).body(Body::Empty)?);
    }

    let body_str = match event.body() {
        Body::Text(s) => s.clone(),
        Body::Binary(b) => String::from_utf8_lossy(b).to_string(),
        Body::Empty => "{}".to_string(),
    };

    let request: ProjectionRequest = match serde_json::from_str(&body_str) {
        Ok(r) => r,
        Err(e) => return error_response(400, &format!("Invalid JSON: {}", e)),
    };

    match project(request) {
        Ok(response) => json_response(&response),
        Err(e) => {
            warn!("Rejected projection request: {}", e);
            let status = if e.is_invalid_input() { 400 } else { 500 };
            error_response(status, &e.to_string())
        }
    }
}

#[tokio::main]
async fn main() -> Result<(), Error> {
    env_logger::init();
    run(service_fn(handler)).await
}
