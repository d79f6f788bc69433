//! Integration tests for the plan command against a mock planner

#![allow(deprecated)]

use predicates::prelude::*;
use serde_json::json;
use std::fs;
use tempfile::TempDir;
use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

mod common;
use common::wayfare_cmd;

const ITINERARY: &str = "**Goa Getaway**\n## Budget (₹)\n- 15000 per person\n## Safety Tips\n- Swim at flagged beaches\n### Day 1\n- Baga beach\n- Fort Aguada\n### Day 2\n- Old Goa churches";

async fn mount_itinerary(server: &MockServer) {
    Mock::given(method("POST"))
        .and(path("/plan"))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(json!({ "itinerary_markdown": ITINERARY })),
        )
        .mount(server)
        .await;
}

fn plan_args(cmd: &mut assert_cmd::Command, output: &std::path::Path) {
    cmd.arg("plan")
        .arg("--from")
        .arg("Hyderabad")
        .arg("--to")
        .arg("Goa")
        .arg("--start")
        .arg("2025-03-01")
        .arg("--end")
        .arg("2025-03-04")
        .arg("--interests")
        .arg("beaches")
        .arg("--output")
        .arg(output);
}

#[tokio::test(flavor = "multi_thread")]
async fn test_plan_exports_full_page() {
    let server = MockServer::start().await;
    mount_itinerary(&server).await;

    Mock::given(method("GET"))
        .and(path("/images"))
        .and(query_param("destination", "Goa"))
        .and(query_param("count", "6"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!(["https://img/1.jpg"])))
        .mount(&server)
        .await;

    Mock::given(method("GET"))
        .and(path("/hotels"))
        .and(query_param("destination", "Goa"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([
            {"name": "Sea View", "price": "₹4500/night", "rating": "4.4", "description": "Near beach", "image": "https://img/h.jpg"}
        ])))
        .mount(&server)
        .await;

    let temp = TempDir::new().unwrap();
    let output = temp.path().join("goa.html");

    let mut cmd = wayfare_cmd();
    cmd.current_dir(temp.path()).env("WAYFARE_API_BASE", server.uri());
    plan_args(&mut cmd, &output);

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("Planning 3 days: Hyderabad -> Goa"))
        .stdout(predicate::str::contains("Day 1  (2 activities)"))
        .stdout(predicate::str::contains("2 days, 1 photos, 1 hotels"));

    let html = fs::read_to_string(&output).unwrap();
    assert!(html.contains("<title>Travel Plan: Goa</title>"));
    assert!(html.contains("https://img/1.jpg"));
    assert!(html.contains("Sea View"));

    let hotels = html.find("<section id=\"hotels\">").unwrap();
    let budget = html.find("<h2>Budget (₹)</h2>").unwrap();
    let safety = html.find("<h2>Safety Tips</h2>").unwrap();
    assert!(budget < hotels && hotels < safety);

    let gallery = html.find("<section id=\"gallery\">").unwrap();
    let title = html.find("<h1>Goa Getaway</h1>").unwrap();
    assert!(title < gallery && gallery < budget);
}

#[tokio::test(flavor = "multi_thread")]
async fn test_plan_survives_gallery_and_hotel_failures() {
    let server = MockServer::start().await;
    mount_itinerary(&server).await;

    Mock::given(method("GET"))
        .and(path("/images"))
        .respond_with(ResponseTemplate::new(500).set_body_json(json!({"detail": "Unsplash error"})))
        .mount(&server)
        .await;

    Mock::given(method("GET"))
        .and(path("/hotels"))
        .respond_with(ResponseTemplate::new(500).set_body_json(json!({"detail": "Hotels error"})))
        .mount(&server)
        .await;

    let temp = TempDir::new().unwrap();
    let output = temp.path().join("goa.html");

    let mut cmd = wayfare_cmd();
    cmd.current_dir(temp.path()).env("WAYFARE_API_BASE", server.uri());
    plan_args(&mut cmd, &output);

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("2 days, 0 photos, 0 hotels"))
        .stderr(predicate::str::contains("image load error"))
        .stderr(predicate::str::contains("hotel load error"));

    let html = fs::read_to_string(&output).unwrap();
    assert!(!html.contains("id=\"gallery\""));
    assert!(!html.contains("id=\"hotels\""));
    assert!(html.contains("<h3 class='day-title'>🌍 Day 2</h3>"));
}

#[tokio::test(flavor = "multi_thread")]
async fn test_plan_failure_writes_inline_error() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/plan"))
        .respond_with(
            ResponseTemplate::new(500).set_body_json(json!({"detail": "Planner error: quota"})),
        )
        .mount(&server)
        .await;

    let temp = TempDir::new().unwrap();
    let output = temp.path().join("goa.html");

    let mut cmd = wayfare_cmd();
    cmd.current_dir(temp.path()).env("WAYFARE_API_BASE", server.uri());
    plan_args(&mut cmd, &output);

    cmd.assert()
        .code(4)
        .stderr(predicate::str::contains("Planner error: quota"));

    let html = fs::read_to_string(&output).unwrap();
    assert!(html.contains("<strong>Error:</strong> Planner error: quota"));
}

#[test]
fn test_plan_missing_fields_fails_before_request() {
    let temp = TempDir::new().unwrap();

    wayfare_cmd()
        .current_dir(temp.path())
        .env("WAYFARE_API_BASE", "http://127.0.0.1:9")
        .arg("plan")
        .arg("--to")
        .arg("Goa")
        .assert()
        .code(3)
        .stderr(predicate::str::contains("Please fill all fields."));

    assert!(!temp.path().join("travel_plan.html").exists());
}
