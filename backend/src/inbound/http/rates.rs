//! Exchange rate handlers.

use actix_web::{get, web};
use chrono::NaiveDate;

use crate::domain::ports::ExchangeRateQuery;
use crate::domain::{DomainError, ExchangeRate};
use crate::inbound::http::state::HttpState;
use crate::inbound::http::{ApiError, ApiResult};

/// List exchange rates recorded on a given day.
///
/// The date segment is parsed explicitly so malformed input yields the
/// standard error envelope rather than a bare 400.
#[utoipa::path(
    get,
    path = "/api/v1/exchange-rates/{date}",
    params(
        ("date" = String, Path, description = "Rate date, ISO 8601 (YYYY-MM-DD)")
    ),
    responses(
        (status = 200, description = "Rates recorded on the date", body = [ExchangeRate]),
        (status = 400, description = "Malformed date", body = ApiError),
        (status = 500, description = "Internal server error", body = ApiError),
        (status = 503, description = "Database unavailable", body = ApiError)
    ),
    tags = ["rates"],
    operation_id = "listExchangeRates"
)]
#[get("/exchange-rates/{date}")]
pub async fn rates_on(
    state: web::Data<HttpState>,
    path: web::Path<String>,
) -> ApiResult<web::Json<Vec<ExchangeRate>>> {
    let raw = path.into_inner();
    let date: NaiveDate = raw.parse().map_err(|_| {
        DomainError::invalid_request(format!("invalid date '{raw}', expected YYYY-MM-DD"))
    })?;
    let rates = state.rates.rates_on(date).await?;
    Ok(web::Json(rates))
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::{test as actix_test, App};
    use serde_json::Value;

    async fn get_response(uri: &str) -> actix_web::dev::ServiceResponse {
        let app = actix_test::init_service(
            App::new()
                .app_data(web::Data::new(HttpState::fixtures()))
                .service(web::scope("/api/v1").service(rates_on)),
        )
        .await;
        actix_test::call_service(&app, actix_test::TestRequest::get().uri(uri).to_request()).await
    }

    #[actix_web::test]
    async fn rates_for_valid_date_include_currency_and_rate() {
        let response = get_response("/api/v1/exchange-rates/2024-01-15").await;
        assert!(response.status().is_success());
        let bytes = actix_test::read_body(response).await;
        let value: Value = serde_json::from_slice(&bytes).expect("response JSON");
        let rates = value.as_array().expect("array");
        assert!(!rates.is_empty());
        assert_eq!(
            rates[0].get("rateDate").and_then(Value::as_str),
            Some("2024-01-15")
        );
        assert!(rates[0].get("currency").and_then(Value::as_str).is_some());
        assert!(rates[0].get("rate").and_then(Value::as_f64).is_some());
    }

    #[actix_web::test]
    async fn malformed_date_yields_invalid_request_envelope() {
        let response = get_response("/api/v1/exchange-rates/15-01-2024").await;
        assert_eq!(response.status(), actix_web::http::StatusCode::BAD_REQUEST);
        let bytes = actix_test::read_body(response).await;
        let value: Value = serde_json::from_slice(&bytes).expect("error payload");
        assert_eq!(
            value.get("code").and_then(Value::as_str),
            Some("invalid_request")
        );
    }
}
