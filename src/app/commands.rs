// ==========================================
// 酸面包排程计算器 - 命令层
// ==========================================
// 职责: JSON 文本进 / JSON 文本出, 供外部请求处理方调用
// 返回: Ok(成功响应 JSON) / Err(ErrorResponse JSON)
// ==========================================

use serde::Serialize;

use crate::api::error::ApiError;
use crate::api::dto::ScheduleRequest;
use crate::api::step_display::{step_description_for_key, step_name_for_key};
use crate::app::state::AppState;
use crate::i18n::resolve_locale;

// ==========================================
// 公共工具：错误映射、请求解析
// ==========================================

/// 将ApiError转换为JSON字符串
pub fn map_api_error(err: ApiError) -> String {
    let response = err.to_response();
    serde_json::to_string(&response).unwrap_or_else(|_| err.to_string())
}

fn to_json<T: Serialize>(value: &T) -> Result<String, String> {
    serde_json::to_string(value)
        .map_err(|e| map_api_error(ApiError::InternalError(format!("序列化失败: {}", e))))
}

/// 解析请求体；空白请求体视为空对象
fn parse_request(request_json: &str) -> Result<ScheduleRequest, ApiError> {
    let trimmed = request_json.trim();
    if trimmed.is_empty() {
        return Ok(ScheduleRequest::default());
    }

    let value: serde_json::Value = serde_json::from_str(trimmed)
        .map_err(|e| ApiError::InvalidRequest(format!("request body is not valid JSON: {}", e)))?;
    if !value.is_object() {
        return Err(ApiError::InvalidRequest(
            "request body must be a JSON object".to_string(),
        ));
    }

    serde_json::from_value(value).map_err(|e| ApiError::InvalidRequest(e.to_string()))
}

// ==========================================
// 排程相关命令
// ==========================================

/// 生成排程
pub fn generate_schedule(state: &AppState, request_json: &str) -> Result<String, String> {
    let _perf = crate::perf::PerfGuard::new("cmd.generate_schedule");

    let request = parse_request(request_json).map_err(map_api_error)?;
    let response = state
        .schedule_api
        .generate(&request)
        .map_err(map_api_error)?;

    to_json(&response)
}

/// 查询全部喂养配比
pub fn list_feeding_ratios(state: &AppState, locale: Option<&str>) -> Result<String, String> {
    let locale = locale.unwrap_or(&state.config().defaults.locale);
    let ratios = state.schedule_api.list_feeding_ratios(locale);

    to_json(&ratios)
}

/// 查询工序展示信息（未知工序键按标识符生成标题）
pub fn describe_step(state: &AppState, key: &str, locale: Option<&str>) -> Result<String, String> {
    let locale = resolve_locale(locale.unwrap_or(&state.config().defaults.locale));

    to_json(&serde_json::json!({
        "key": key,
        "step": step_name_for_key(key, &locale),
        "description": step_description_for_key(key, &locale),
    }))
}

/// 健康检查
pub fn health_check() -> String {
    serde_json::json!({ "status": "healthy" }).to_string()
}
