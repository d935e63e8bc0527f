//! End-to-end tests through the public dispatch boundary.

use std::sync::Arc;

use chrono::TimeZone;
use logistics_mcp_server::core::FixedClock;
use logistics_mcp_server::domains::logistics::ReferenceData;
use logistics_mcp_server::domains::tools::ToolRegistry;
use logistics_mcp_server::{Config, LogisticsServer};
use rmcp::model::{CallToolResult, JsonObject, RawContent};
use serde_json::{Value, json};

const TS: &str = "2025-08-01T09:00:00.000Z";

fn server() -> LogisticsServer {
    let clock = FixedClock::new(chrono::Utc.with_ymd_and_hms(2025, 8, 1, 9, 0, 0).unwrap());
    LogisticsServer::with_parts(
        Config::default(),
        ToolRegistry::logistics(),
        Arc::new(ReferenceData::builtin()),
        Arc::new(clock),
    )
}

fn call(server: &LogisticsServer, name: &str, args: Value) -> CallToolResult {
    let arguments: Option<JsonObject> = args.as_object().cloned();
    server.dispatch(name, arguments)
}

fn body(result: &CallToolResult) -> Value {
    result.structured_content.clone().expect("structured content")
}

fn texts(result: &CallToolResult) -> Vec<String> {
    result
        .content
        .iter()
        .filter_map(|c| match &c.raw {
            RawContent::Text(t) => Some(t.text.clone()),
            _ => None,
        })
        .collect()
}

#[test]
fn lists_six_tools_in_registration_order() {
    let server = server();
    let names: Vec<String> = server
        .registry()
        .list_tools()
        .into_iter()
        .map(|t| t.name.to_string())
        .collect();
    assert_eq!(
        names,
        vec![
            "health_ping",
            "logi_master_invoice_audit",
            "check_container_status",
            "calculate_hvdc_shipping_cost",
            "logi_master_predict",
            "logi_master_weather_tie",
        ]
    );
}

#[test]
fn health_ping_with_missing_arguments() {
    let result = server().dispatch("health_ping", None);
    assert_eq!(result.is_error, Some(false));
    assert_eq!(body(&result), json!({ "ok": true, "ts": TS, "echo": "" }));
    assert_eq!(texts(&result).last().map(String::as_str), Some("✅ health ping"));
}

#[test]
fn success_content_carries_json_then_summary() {
    let result = call(&server(), "health_ping", json!({ "echo": "x" }));
    let texts = texts(&result);
    assert_eq!(texts.len(), 2);
    let parsed: Value = serde_json::from_str(&texts[0]).unwrap();
    assert_eq!(parsed, body(&result));
    assert_eq!(texts[1], "✅ health ping echo:x");
}

#[test]
fn unknown_tool_is_an_error_envelope() {
    let result = call(&server(), "no_such_tool", json!({}));
    assert_eq!(result.is_error, Some(true));
    assert_eq!(
        body(&result),
        json!({
            "ok": false,
            "code": "TOOL_NOT_FOUND",
            "ts": TS,
            "message": "Unknown tool: no_such_tool",
            "details": { "name": "no_such_tool" },
        })
    );
}

#[test]
fn invalid_container_id_is_bad_input() {
    let result = call(
        &server(),
        "check_container_status",
        json!({ "container_id": "ABC123" }),
    );
    let body = body(&result);
    assert_eq!(body["code"], json!("BAD_INPUT"));
    assert_eq!(body["message"], json!("container_id must be ISO 6346 compliant"));
}

#[test]
fn every_tool_is_idempotent() {
    let server = server();
    let calls = [
        ("health_ping", json!({ "echo": "x" })),
        (
            "logi_master_invoice_audit",
            json!({ "invoice_path": "HVDC-INV-042.pdf", "incoterm": "DAP", "hs_code": "8504.90" }),
        ),
        ("check_container_status", json!({ "container_id": "MSCU1234567" })),
        (
            "calculate_hvdc_shipping_cost",
            json!({
                "equipment_type": "transformer",
                "weight": 12000,
                "origin_port": "BUSAN",
                "destination_port": "JEBEL ALI",
            }),
        ),
        (
            "logi_master_predict",
            json!({ "origin": "ULSAN", "destination": "RUWAIS", "weight": 500 }),
        ),
        (
            "logi_master_weather_tie",
            json!({ "route": "BUSAN-JEBEL ALI", "departure_date": "2025-08-10" }),
        ),
    ];

    for (name, args) in calls {
        let first = call(&server, name, args.clone());
        let second = call(&server, name, args);
        assert_eq!(first.is_error, second.is_error, "{}", name);
        assert_eq!(body(&first), body(&second), "{}", name);
        assert_eq!(texts(&first), texts(&second), "{}", name);
    }
}

#[test]
fn shipping_cost_total_is_sum_of_components() {
    let result = call(
        &server(),
        "calculate_hvdc_shipping_cost",
        json!({
            "equipment_type": "transformer",
            "weight": 12000,
            "origin_port": "BUSAN",
            "destination_port": "JEBEL ALI",
        }),
    );
    let breakdown = &body(&result)["breakdown_usd"];
    let sum: i64 = [
        "base",
        "weight",
        "hvdc_handling",
        "insurance",
        "demurrage_reserve",
        "detention_reserve",
    ]
    .iter()
    .map(|k| breakdown[k].as_i64().unwrap())
    .sum();
    assert_eq!(breakdown["total"].as_i64(), Some(sum));
    assert_eq!(sum, 60_130);
}

#[test]
fn shipping_cost_rejects_zero_weight() {
    let result = call(
        &server(),
        "calculate_hvdc_shipping_cost",
        json!({
            "equipment_type": "transformer",
            "weight": 0,
            "origin_port": "BUSAN",
            "destination_port": "JEBEL ALI",
        }),
    );
    assert_eq!(body(&result)["code"], json!("BAD_INPUT"));
}

#[test]
fn shipping_cost_rejects_weights_too_large_to_price() {
    for weight in [json!(1e300), json!(4e18)] {
        let result = call(
            &server(),
            "calculate_hvdc_shipping_cost",
            json!({
                "equipment_type": "transformer",
                "weight": weight,
                "origin_port": "BUSAN",
                "destination_port": "JEBEL ALI",
            }),
        );
        assert_eq!(result.is_error, Some(true));
        let body = body(&result);
        assert_eq!(body["code"], json!("BAD_INPUT"));
        assert_eq!(body["message"], json!("weight out of range"));
    }
}

#[test]
fn missing_required_fields_use_tool_messages() {
    let cases = [
        ("logi_master_invoice_audit", json!({}), "invoice_path required"),
        ("logi_master_predict", json!({ "weight": 1 }), "origin/destination required"),
        ("logi_master_weather_tie", json!({}), "route/departure_date required"),
        (
            "logi_master_weather_tie",
            json!({ "route": "BUSAN-JEBEL ALI" }),
            "route/departure_date required",
        ),
        (
            "logi_master_predict",
            json!({ "origin": "A", "destination": "B" }),
            "weight must be greater than zero",
        ),
    ];

    for (name, args, message) in cases {
        let result = call(&server(), name, args);
        assert_eq!(result.is_error, Some(true), "{}", name);
        let body = body(&result);
        assert_eq!(body["code"], json!("BAD_INPUT"), "{}", name);
        assert_eq!(body["message"], json!(message), "{}", name);
    }
}

#[test]
fn schemas_still_list_required_fields() {
    let tools = server().registry().list_tools();
    let required = |name: &str| -> Value {
        let tool = tools.iter().find(|t| t.name == name).unwrap();
        tool.input_schema.get("required").cloned().unwrap_or(Value::Null)
    };

    assert_eq!(required("logi_master_invoice_audit"), json!(["invoice_path"]));
    assert_eq!(required("check_container_status"), json!(["container_id"]));
    assert_eq!(
        required("logi_master_predict"),
        json!(["origin", "destination", "weight"])
    );
    assert_eq!(
        required("logi_master_weather_tie"),
        json!(["route", "departure_date"])
    );
}

#[test]
fn invoice_audit_flags_unknown_incoterm() {
    let result = call(
        &server(),
        "logi_master_invoice_audit",
        json!({ "invoice_path": "HVDC-INV-042.pdf", "incoterm": "ZZZ", "hs_code": "8504.90" }),
    );
    assert_eq!(result.is_error, Some(false));
    let body = body(&result);
    assert_eq!(body["validations"]["incoterm"]["reason"], json!("UNKNOWN_INCOTERM"));
    assert_eq!(body["validations"]["hs_code"]["code"], json!("850490"));
    assert_eq!(body["validations"]["hs_code"]["valid"], json!(true));
}

#[test]
fn weather_tie_invalid_date_is_a_domain_error() {
    let result = call(
        &server(),
        "logi_master_weather_tie",
        json!({ "route": "BUSAN-JEBEL ALI", "departure_date": "31/31/2025" }),
    );
    assert_eq!(result.is_error, Some(true));
    assert_eq!(body(&result)["code"], json!("INVALID_DATE"));
}

#[test]
fn predict_accepts_numeric_strings_for_text_fields() {
    let result = call(
        &server(),
        "logi_master_predict",
        json!({ "origin": 1, "destination": true, "weight": "10" }),
    );
    assert_eq!(result.is_error, Some(false));
    assert_eq!(body(&result)["route"], json!({ "origin": "1", "destination": "true" }));
}
