//! Integration tests for the sales endpoints
//!
//! Drives the full application (seeded demo ledger, no latency) through
//! recording, listing, filtering, summarizing and delete requests.

#[path = "../helpers/mod.rs"]
mod helpers;

use actix_web::{test, App};
use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde_json::{json, Value};

use helpers::{decimal, test_state};

#[actix_web::test]
async fn test_health_check() {
    let state = test_state();
    let app = test::init_service(App::new().configure(|cfg| state.configure(cfg))).await;

    let resp = test::call_service(&app, test::TestRequest::get().uri("/health").to_request()).await;
    assert_eq!(resp.status(), 200);
}

#[actix_web::test]
async fn test_record_sale_with_default_rate() {
    let state = test_state();
    let app = test::init_service(App::new().configure(|cfg| state.configure(cfg))).await;

    let req = test::TestRequest::post()
        .uri("/api/sales")
        .set_json(json!({ "serviceType": "6", "quantity": 3, "notes": "Aadhaar cards" }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), 201);

    let sale: Value = test::read_body_json(resp).await;
    assert_eq!(sale["serviceType"]["name"], "Lamination");
    assert_eq!(decimal(&sale["rate"]), dec!(40));
    assert_eq!(decimal(&sale["total"]), dec!(120));

    // New sales land at the top of the list
    let req = test::TestRequest::get().uri("/api/sales").to_request();
    let sales: Vec<Value> = test::call_and_read_body_json(&app, req).await;
    assert_eq!(sales.len(), 6);
    assert_eq!(sales[0]["id"], sale["id"]);
}

#[actix_web::test]
async fn test_record_sale_rejects_bad_input() {
    let state = test_state();
    let app = test::init_service(App::new().configure(|cfg| state.configure(cfg))).await;

    let zero_quantity = test::TestRequest::post()
        .uri("/api/sales")
        .set_json(json!({ "serviceType": "1", "quantity": 0 }))
        .to_request();
    let resp = test::call_service(&app, zero_quantity).await;
    assert_eq!(resp.status(), 400);

    let unknown_service = test::TestRequest::post()
        .uri("/api/sales")
        .set_json(json!({ "serviceType": "99" }))
        .to_request();
    let resp = test::call_service(&app, unknown_service).await;
    assert_eq!(resp.status(), 400);

    let malformed = test::TestRequest::post()
        .uri("/api/sales")
        .insert_header(("content-type", "application/json"))
        .set_payload("{ not json")
        .to_request();
    let resp = test::call_service(&app, malformed).await;
    assert_eq!(resp.status(), 400);

    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["error"]["code"], 400);
}

#[actix_web::test]
async fn test_record_sale_rejects_oversized_totals() {
    let state = test_state();
    let app = test::init_service(App::new().configure(|cfg| state.configure(cfg))).await;

    let overflowing = test::TestRequest::post()
        .uri("/api/sales")
        .set_json(json!({
            "serviceType": "1",
            "quantity": 4294967295u32,
            "rate": "79228162514264337593543950335"
        }))
        .to_request();
    let resp = test::call_service(&app, overflowing).await;
    assert_eq!(resp.status(), 400);

    let past_maximum = test::TestRequest::post()
        .uri("/api/sales")
        .set_json(json!({ "serviceType": "1", "quantity": 2, "rate": "1000000000000" }))
        .to_request();
    let resp = test::call_service(&app, past_maximum).await;
    assert_eq!(resp.status(), 400);

    let req = test::TestRequest::get().uri("/api/sales/summary").to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), 200);

    let req = test::TestRequest::get().uri("/api/sales").to_request();
    let sales: Vec<Value> = test::call_and_read_body_json(&app, req).await;
    assert_eq!(sales.len(), 5);
}

#[actix_web::test]
async fn test_list_sales_filters() {
    let state = test_state();
    let app = test::init_service(App::new().configure(|cfg| state.configure(cfg))).await;

    let req = test::TestRequest::get()
        .uri("/api/sales?dateFrom=2025-12-10&dateTo=2025-12-10")
        .to_request();
    let sales: Vec<Value> = test::call_and_read_body_json(&app, req).await;
    let ids: Vec<&str> = sales.iter().filter_map(|s| s["id"].as_str()).collect();
    assert_eq!(ids, vec!["1", "4"]);

    let req = test::TestRequest::get().uri("/api/sales?serviceType=6").to_request();
    let sales: Vec<Value> = test::call_and_read_body_json(&app, req).await;
    assert_eq!(sales.len(), 1);
    assert_eq!(sales[0]["notes"], "ID Cards");

    let req = test::TestRequest::get().uri("/api/sales?search=RESUME").to_request();
    let sales: Vec<Value> = test::call_and_read_body_json(&app, req).await;
    assert_eq!(sales.len(), 1);
    assert_eq!(sales[0]["serviceType"]["name"], "Printout (B/W)");
}

#[actix_web::test]
async fn test_sales_summary() {
    let state = test_state();
    let app = test::init_service(App::new().configure(|cfg| state.configure(cfg))).await;

    let req = test::TestRequest::get()
        .uri("/api/sales/summary?dateFrom=2025-12-07&dateTo=2025-12-10")
        .to_request();
    let summary: Value = test::call_and_read_body_json(&app, req).await;

    assert_eq!(summary["kpis"]["count"], 5);
    assert_eq!(decimal(&summary["kpis"]["total"]), dec!(175));
    assert_eq!(decimal(&summary["kpis"]["average"]), dec!(35));
    assert_eq!(decimal(&summary["kpis"]["max"]), dec!(80));

    let top = &summary["breakdown"][0];
    assert_eq!(top["key"], "Lamination");
    assert_eq!(decimal(&top["units"]), dec!(2));
    assert_eq!(decimal(&top["averageRate"]), dec!(40));
    assert_eq!(decimal(&top["percentage"]), dec!(45.71));

    let trend = &summary["trend"];
    assert_eq!(trend["labels"], json!(["Dec 7", "Dec 8", "Dec 9", "Dec 10"]));
    assert_eq!(trend["counts"], json!([1, 1, 1, 2]));

    let values: Vec<Decimal> = trend["values"]
        .as_array()
        .map(|v| v.iter().map(decimal).collect())
        .unwrap_or_default();
    assert_eq!(values, vec![dec!(30), dec!(80), dec!(25), dec!(40)]);
}

#[actix_web::test]
async fn test_sales_summary_trend_window_is_capped() {
    let state = test_state();
    let app = test::init_service(App::new().configure(|cfg| state.configure(cfg))).await;

    let req = test::TestRequest::get()
        .uri("/api/sales/summary?dateFrom=0001-01-01&dateTo=2025-12-10")
        .to_request();
    let summary: Value = test::call_and_read_body_json(&app, req).await;

    assert_eq!(summary["kpis"]["count"], 5);

    let trend = &summary["trend"];
    assert_eq!(trend["dateFrom"], "2024-12-10");
    assert_eq!(trend["dateTo"], "2025-12-10");
    assert_eq!(trend["labels"].as_array().map(Vec::len), Some(366));
    assert_eq!(trend["labels"][365], "Dec 10");
}

#[actix_web::test]
async fn test_service_types() {
    let state = test_state();
    let app = test::init_service(App::new().configure(|cfg| state.configure(cfg))).await;

    let req = test::TestRequest::get().uri("/api/sales/service-types").to_request();
    let services: Vec<Value> = test::call_and_read_body_json(&app, req).await;

    assert_eq!(services.len(), 10);
    assert_eq!(services[0]["name"], "Xerox (B/W)");
    assert_eq!(decimal(&services[0]["defaultRate"]), dec!(2));
}

#[actix_web::test]
async fn test_delete_is_acknowledged_but_not_applied() {
    let state = test_state();
    let app = test::init_service(App::new().configure(|cfg| state.configure(cfg))).await;

    let req = test::TestRequest::delete().uri("/api/sales/3").to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), 202);

    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["deleted"], false);

    let req = test::TestRequest::delete().uri("/api/sales/missing").to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), 404);

    let req = test::TestRequest::get().uri("/api/sales").to_request();
    let sales: Vec<Value> = test::call_and_read_body_json(&app, req).await;
    assert_eq!(sales.len(), 5);
}
