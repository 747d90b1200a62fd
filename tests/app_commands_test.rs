// ==========================================
// 命令层集成测试
// ==========================================
// 覆盖: JSON 请求 → JSON 响应, 错误 JSON, 配比列表, 工序说明
// ==========================================


use serde_json::Value;
use sourdough_planner::app::{describe_step, generate_schedule, health_check, list_feeding_ratios};
use sourdough_planner::config::PlannerConfig;
use test_helpers::create_test_state;

fn parse(body: &str) -> Value {
    serde_json::from_str(body).expect("命令输出应为合法 JSON")
}

// ==========================================
// generate_schedule
// ==========================================

#[test]
fn test_generate_schedule_success_json() {
    println!("\n=== 测试: generate_schedule 成功路径 ===");
    let state = create_test_state(PlannerConfig::default());

    let body = generate_schedule(
        &state,
        r#"{"starter_amount": 100, "feeding_ratio": "1:5:5", "start_time": "8:00 AM", "hydration": 70}"#,
    )
    .unwrap();
    let json = parse(&body);

    assert_eq!(json["success"], true);
    assert_eq!(json["feeding_ratio"], "1:5:5");
    assert_eq!(json["feeding_ratio_info"]["peak_hours"], 12);
    assert_eq!(json["feeding_ratio_info"]["description"], "Overnight (12-14h)");
    assert_eq!(json["ingredients"]["feeding_policy"], "forward");
    assert_eq!(json["ingredients"]["starter_feeding"]["total_after_feeding"], 1100.0);
    assert_eq!(json["timeline"].as_array().unwrap().len(), 18);
    assert_eq!(json["timeline"][4]["step"], "fold_1");
    assert_eq!(json["days"][0]["steps"][0]["key"], "feed_starter");
    assert_eq!(json["days"][0]["steps"][0]["time"], "8:00 AM");
    println!("✓ 成功响应字段完整");
}

#[test]
fn test_generate_schedule_blank_body_uses_defaults() {
    let state = create_test_state(PlannerConfig::default());

    let blank = generate_schedule(&state, "").unwrap();
    let empty_object = generate_schedule(&state, "{}").unwrap();

    assert_eq!(blank, empty_object);
    assert_eq!(parse(&blank)["start_time"], "8:00 AM");
    assert_eq!(parse(&blank)["flour_type"], "bread flour");
}

#[test]
fn test_generate_schedule_is_byte_identical() {
    let state = create_test_state(PlannerConfig::default());
    let body = r#"{"existing_starter_amount": "60", "feeding_ratio": "1:2:2", "start_time": "10 pm", "hydration": "80"}"#;

    let first = generate_schedule(&state, body).unwrap();
    let second = generate_schedule(&state, body).unwrap();
    assert_eq!(first, second);
    assert_eq!(parse(&first)["start_time"], "10:00 PM");
}

#[test]
fn test_generate_schedule_error_json() {
    println!("\n=== 测试: generate_schedule 错误路径 ===");
    let state = create_test_state(PlannerConfig::default());

    let cases = [
        (r#"{"feeding_ratio": "2:1:1"}"#, "INVALID_RATIO"),
        (r#"{"starter_amount": -1}"#, "INVALID_AMOUNT"),
        (r#"{"start_time": "half past eight"}"#, "INVALID_TIME_FORMAT"),
        (r#"{"hydration": 70.5}"#, "INVALID_HYDRATION"),
        (r#"{"start_date": "tomorrow"}"#, "INVALID_START_DATE"),
        (r#"[]"#, "INVALID_REQUEST"),
        (r#"{"starter_amount": 100"#, "INVALID_REQUEST"),
    ];

    for (body, code) in cases {
        let err = generate_schedule(&state, body).unwrap_err();
        let json = parse(&err);
        assert_eq!(json["success"], false, "{}", body);
        assert_eq!(json["code"], code, "{}", body);
        assert!(!json["error"].as_str().unwrap().is_empty());
        // 失败时不返回部分结果
        assert!(json.get("ingredients").is_none());
        assert!(json.get("days").is_none());
        assert!(json.get("details").is_none());
    }
    println!("✓ 错误码稳定");
}

#[test]
fn test_unreachable_hydration_error_details() {
    let state = create_test_state(PlannerConfig::default());

    let err = generate_schedule(
        &state,
        r#"{"starter_amount": 1, "feeding_ratio": "1:10:10", "hydration": 10}"#,
    )
    .unwrap_err();
    let json = parse(&err);

    assert_eq!(json["code"], "UNREACHABLE_HYDRATION");
    assert_eq!(json["details"]["requested_hydration"], 10);
    assert_eq!(json["details"]["minimum_hydration"], 10.3);
}

#[test]
fn test_generate_schedule_localized() {
    let state = create_test_state(PlannerConfig::default());

    let body = generate_schedule(&state, r#"{"locale": "zh-CN"}"#).unwrap();
    let json = parse(&body);

    assert_eq!(json["locale"], "zh-CN");
    assert_eq!(json["days"][0]["steps"][0]["step"], "喂养酵种");
    assert_eq!(json["feeding_ratio_info"]["description"], "过夜 (12-14 小时)");
    // 日期标签与时间格式不随语言变化
    assert_eq!(json["days"][0]["date_label"], "Saturday, October 17");
    assert_eq!(json["days"][0]["steps"][0]["time"], "8:00 AM");
}

#[test]
fn test_unknown_locale_falls_back() {
    let state = create_test_state(PlannerConfig::default());

    let json = parse(&generate_schedule(&state, r#"{"locale": "xx-YY"}"#).unwrap());
    assert_eq!(json["locale"], "en");
    assert_eq!(json["days"][0]["steps"][0]["step"], "Feed Starter");
}

// ==========================================
// list_feeding_ratios / describe_step / health_check
// ==========================================

#[test]
fn test_list_feeding_ratios() {
    let state = create_test_state(PlannerConfig::default());

    let json = parse(&list_feeding_ratios(&state, None).unwrap());
    let labels: Vec<&str> = json
        .as_array()
        .unwrap()
        .iter()
        .map(|r| r["label"].as_str().unwrap())
        .collect();
    assert_eq!(labels, vec!["1:1:1", "1:2:2", "1:3:3", "1:4:4", "1:5:5", "1:10:10"]);
    assert_eq!(json[0]["description"], "Fast (4-6h), same-day");
    assert_eq!(json[5]["peak_hours"], 20);

    let zh = parse(&list_feeding_ratios(&state, Some("zh-CN")).unwrap());
    assert_eq!(zh[2]["description"], "标准 (8-10 小时)");
}

#[test]
fn test_describe_step() {
    let state = create_test_state(PlannerConfig::default());

    let known = parse(&describe_step(&state, "peak_ready", None).unwrap());
    assert_eq!(known["key"], "peak_ready");
    assert!(!known["step"].as_str().unwrap().is_empty());
    assert!(!known["description"].as_str().unwrap().is_empty());

    let zh = parse(&describe_step(&state, "mix_dough", Some("zh-CN")).unwrap());
    assert_eq!(zh["step"], "和面");

    let unknown = parse(&describe_step(&state, "extra_rest", None).unwrap());
    assert_eq!(unknown["step"], "Extra Rest");
    assert_eq!(unknown["description"], "");
}

#[test]
fn test_health_check() {
    let json = parse(&health_check());
    assert_eq!(json["status"], "healthy");
}
