//! Integration tests for the overview report and the dashboard
//!
//! Both endpoints take `asOf` so the seeded December 2025 ledger produces
//! stable numbers regardless of the wall clock.

#[path = "../helpers/mod.rs"]
mod helpers;

use actix_web::{test, App};
use rust_decimal_macros::dec;
use serde_json::Value;

use helpers::{decimal, test_state};

#[actix_web::test]
async fn test_overview_for_explicit_period() {
    let state = test_state();
    let app = test::init_service(App::new().configure(|cfg| state.configure(cfg))).await;

    let req = test::TestRequest::get()
        .uri("/api/reports/overview?dateFrom=2025-12-04&dateTo=2025-12-10&asOf=2025-12-10")
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), 200);

    let report: Value = test::read_body_json(resp).await;
    assert_eq!(report["startDate"], "2025-12-04");
    assert_eq!(report["endDate"], "2025-12-10");

    let kpis = &report["kpis"];
    assert_eq!(decimal(&kpis["totalRevenue"]), dec!(175));
    assert_eq!(decimal(&kpis["totalExpenses"]), dec!(18700));
    assert_eq!(decimal(&kpis["netProfit"]), dec!(-18525));
    assert_eq!(kpis["totalTransactions"], 5);

    let days = report["revenueExpense"].as_array().cloned().unwrap_or_default();
    assert_eq!(days.len(), 7);
    assert_eq!(days[0]["label"], "Dec 4");
    assert_eq!(decimal(&days[1]["expense"]), dec!(1200));
    assert_eq!(decimal(&days[6]["revenue"]), dec!(40));
    assert_eq!(decimal(&days[6]["expense"]), dec!(15000));

    assert_eq!(report["serviceDistribution"][0]["service"], "Lamination");
    assert_eq!(
        decimal(&report["serviceDistribution"][0]["percentage"]),
        dec!(45.71)
    );
}

#[actix_web::test]
async fn test_overview_defaults_to_last_seven_days() {
    let state = test_state();
    let app = test::init_service(App::new().configure(|cfg| state.configure(cfg))).await;

    let req = test::TestRequest::get()
        .uri("/api/reports/overview?asOf=2025-12-10")
        .to_request();
    let report: Value = test::call_and_read_body_json(&app, req).await;

    assert_eq!(report["startDate"], "2025-12-04");
    assert_eq!(report["endDate"], "2025-12-10");
}

#[actix_web::test]
async fn test_overview_rejects_bad_ranges() {
    let state = test_state();
    let app = test::init_service(App::new().configure(|cfg| state.configure(cfg))).await;

    for uri in [
        "/api/reports/overview?dateFrom=2025-12-10&dateTo=2025-12-01&asOf=2025-12-10",
        "/api/reports/overview?dateFrom=2025-12-01&dateTo=2025-12-20&asOf=2025-12-10",
        "/api/reports/overview?dateFrom=2024-01-01&dateTo=2025-12-10&asOf=2025-12-10",
        "/api/reports/overview?dateFrom=10/12/2025&asOf=2025-12-10",
    ] {
        let req = test::TestRequest::get().uri(uri).to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), 400, "expected 400 for {}", uri);
    }
}

#[actix_web::test]
async fn test_dashboard_as_of_seed_day() {
    let state = test_state();
    let app = test::init_service(App::new().configure(|cfg| state.configure(cfg))).await;

    let req = test::TestRequest::get()
        .uri("/api/dashboard?asOf=2025-12-10")
        .to_request();
    let dashboard: Value = test::call_and_read_body_json(&app, req).await;

    assert_eq!(dashboard["asOf"], "2025-12-10");

    let kpis = dashboard["kpis"].as_array().cloned().unwrap_or_default();
    assert_eq!(kpis.len(), 4);
    assert_eq!(kpis[0]["title"], "Today's Income");
    assert_eq!(decimal(&kpis[0]["amount"]), dec!(40));
    assert_eq!(kpis[0]["trend"], "up");
    assert_eq!(decimal(&kpis[3]["amount"]), dec!(175));

    let activities = dashboard["recentActivities"].as_array().cloned().unwrap_or_default();
    assert_eq!(activities.len(), 5);
    assert_eq!(activities[0]["type"], "sale");
    assert_eq!(activities[0]["id"], "4");
    assert_eq!(activities[2]["type"], "expense");

    let charts = &dashboard["charts"];
    assert_eq!(charts["dailyRevenue"].as_array().map(Vec::len), Some(15));
    assert_eq!(charts["monthlyRevenue"].as_array().map(Vec::len), Some(3));
    assert_eq!(charts["serviceBreakdown"][0]["service"], "Lamination");
}

#[actix_web::test]
async fn test_dashboard_rejects_malformed_as_of() {
    let state = test_state();
    let app = test::init_service(App::new().configure(|cfg| state.configure(cfg))).await;

    let req = test::TestRequest::get()
        .uri("/api/dashboard?asOf=yesterday")
        .to_request();
    assert_eq!(test::call_service(&app, req).await.status(), 400);
}
