//! End-to-end tool calls through the server, as an MCP client would make them.

use pediatric_mcp_server::domains::tools::definitions::scores::pews::{
    PEWS_BANDS, PEWS_MAX, PEWS_REACHABLE_MAX,
};
use pediatric_mcp_server::domains::tools::result::classify;
use pediatric_mcp_server::{Config, McpServer};
use serde_json::{Value, json};
use tokio_test::assert_ok;

fn server() -> McpServer {
    assert_ok!(McpServer::new(Config::default()))
}

fn call(name: &str, arguments: Value) -> Value {
    assert_ok!(server().call_tool(name, arguments))
}

fn text(result: &Value) -> &str {
    result["content"][0]["text"].as_str().unwrap_or_default()
}

#[test]
fn test_bsa_for_a_twenty_kilo_child() {
    let result = call("calculate_bsa", json!({ "weight_kg": 20, "height_cm": 110 }));
    assert_eq!(result["isError"], false);

    let structured = &result["structuredContent"];
    assert_eq!(structured["classification"]["label"], "DuBois");
    assert_eq!(structured["primary"]["value"], 0.78);
    assert!(text(&result).contains("Formula Mosteller: 0.78 m²"));
}

#[test]
fn test_maintenance_fluids_for_twenty_five_kilos() {
    let result = call("calculate_maintenance_fluids", json!({ "weight_kg": 25 }));
    assert_eq!(result["isError"], false);
    assert_eq!(result["structuredContent"]["primary"]["value"], 1600.0);
    assert!(text(&result).contains("66.7 ml/h"));
}

#[test]
fn test_apgar_of_eight_is_normal() {
    let result = call(
        "calculate_apgar",
        json!({
            "heart_rate": 2,
            "respiratory_effort": 2,
            "muscle_tone": 1,
            "reflex_irritability": 2,
            "color": 1
        }),
    );
    let classification = &result["structuredContent"]["classification"];
    assert_eq!(result["structuredContent"]["primary"]["value"], 8.0);
    assert_eq!(classification["label"], "NORMALE");
    assert!(
        classification["recommendation"]
            .as_str()
            .unwrap_or_default()
            .starts_with("Nessun intervento necessario")
    );
}

#[test]
fn test_pews_of_five_is_high_risk() {
    let result = call(
        "calculate_pews",
        json!({ "behavior": 1, "cardiovascular": 2, "respiratory": 2, "age_months": 24 }),
    );
    assert_eq!(result["structuredContent"]["primary"]["value"], 5.0);
    assert_eq!(result["structuredContent"]["classification"]["label"], "ALTO");
}

#[test]
fn test_zero_weight_is_rejected_before_calculation() {
    let result = call("calculate_bsa", json!({ "weight_kg": 0, "height_cm": 110 }));
    assert_eq!(result["isError"], true);
    assert!(result.get("structuredContent").is_none_or(Value::is_null));
    assert_eq!(
        text(&result),
        "invalid arguments: weight_kg: value 0 is below minimum 0.1"
    );
}

#[test]
fn test_pews_bands_over_the_whole_scale() {
    // (item, maximum) in the order points are handed out.
    let items = [
        ("behavior", 3),
        ("cardiovascular", 3),
        ("respiratory", 3),
        ("nebulizer_use", 2),
        ("persistent_vomiting", 1),
    ];

    let expected = |total: u32| match total {
        0..=2 => "BASSO",
        3..=4 => "MODERATO",
        5..=6 => "ALTO",
        _ => "CRITICO",
    };

    for total in 0..=PEWS_REACHABLE_MAX {
        let mut remaining = total;
        let mut args = serde_json::Map::new();
        args.insert("age_months".into(), json!(60));
        for (item, max) in items {
            let points = remaining.min(max);
            remaining -= points;
            args.insert(item.into(), json!(points));
        }

        assert_eq!(remaining, 0, "total {total} exceeds the item maxima");

        let result = call("calculate_pews", Value::Object(args));
        assert_eq!(result["structuredContent"]["primary"]["value"], f64::from(total));
        assert_eq!(
            result["structuredContent"]["classification"]["label"],
            expected(total),
            "total {total}"
        );
    }

    // 13 is on the published scale but no inputs reach it.
    for total in 0..=PEWS_MAX {
        let band = assert_ok!(classify(f64::from(total), PEWS_BANDS));
        assert_eq!(band.label, expected(total), "total {total}");
    }
}

#[test]
fn test_null_optional_argument_behaves_as_omitted() {
    let omitted = call(
        "calculate_pews",
        json!({ "behavior": 1, "cardiovascular": 1, "respiratory": 1, "age_months": 12 }),
    );
    let null = call(
        "calculate_pews",
        json!({
            "behavior": 1,
            "cardiovascular": 1,
            "respiratory": 1,
            "age_months": 12,
            "nebulizer_use": null
        }),
    );
    assert_eq!(text(&omitted), text(&null));
}

#[test]
fn test_rome4_constipation_end_to_end() {
    let result = call(
        "assess_rome4_constipation",
        json!({
            "bowel_movements_weekly": 1,
            "fecal_incontinence": false,
            "stool_retention": true,
            "painful_defecation": true,
            "large_fecal_mass": false,
            "large_diameter_stools": false,
            "symptoms_duration_months": 2
        }),
    );
    assert_eq!(result["isError"], false);
    assert_eq!(
        result["structuredContent"]["classification"]["label"],
        "CRITERI ROME IV SODDISFATTI"
    );
    assert!(text(&result).contains("Soddisfatto: Almeno 2 criteri presenti (3/6)"));
}

#[test]
fn test_disabled_tool_is_unknown() {
    let mut config = Config::default();
    config.tools.disabled = vec!["calculate_apgar".to_string()];
    let server = assert_ok!(McpServer::new(config));

    assert_eq!(server.list_tools().len(), 52);
    let result = assert_ok!(server.call_tool("calculate_apgar", json!({})));
    assert_eq!(result["isError"], true);
    assert_eq!(text(&result), "unknown tool: calculate_apgar");
}

#[test]
fn test_fever_fluids_through_the_server() {
    let result = call(
        "calculate_fever_fluid_requirements",
        json!({ "weight_kg": 10, "temperature_celsius": 39, "baseline_fluids_ml": 1000 }),
    );
    assert_eq!(result["isError"], false);
    assert_eq!(result["structuredContent"]["primary"]["value"], 1250.0);
    assert!(text(&result).contains("Per ora: 52.1 ml/h"));
}

#[test]
fn test_head_circumference_accepts_long_sex_name() {
    let result = call(
        "calculate_head_circumference_growth",
        json!({ "age_months": 12, "head_circumference_cm": 46, "gender": "male" }),
    );
    assert_eq!(result["isError"], false);
    assert_eq!(result["structuredContent"]["classification"]["label"], "NORMALE");

    let rejected = call(
        "calculate_head_circumference_growth",
        json!({ "age_months": 12, "head_circumference_cm": 46, "gender": "M" }),
    );
    assert_eq!(rejected["isError"], true);
}
