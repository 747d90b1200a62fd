// ==========================================
// 酸面包排程计算器 - 工序展示信息
// ==========================================
// 工序 → (名称, 说明) 查 i18n 表
// 无法识别的工序键: 名称按标识符转标题格式, 说明为空
// ==========================================

use crate::domain::types::StepKind;
use crate::i18n::t;

/// 工序展示名称
pub fn step_name(step: StepKind, locale: &str) -> String {
    t(&format!("steps.{}.name", step.as_str()), locale)
}

/// 工序说明
pub fn step_description(step: StepKind, locale: &str) -> String {
    t(&format!("steps.{}.description", step.as_str()), locale)
}

/// 按工序键查询名称 (兼容外部传入的任意键)
pub fn step_name_for_key(key: &str, locale: &str) -> String {
    match key.parse::<StepKind>() {
        Ok(step) => step_name(step, locale),
        Err(_) => humanize_key(key),
    }
}

/// 按工序键查询说明
pub fn step_description_for_key(key: &str, locale: &str) -> String {
    match key.parse::<StepKind>() {
        Ok(step) => step_description(step, locale),
        Err(_) => String::new(),
    }
}

/// "extra_rest" → "Extra Rest"
///
/// 下划线逐个替换为空格; 每段连续字母首字母大写、其余小写
/// ("proof_10x" → "Proof 10X", "a__b" → "A  B")
pub fn humanize_key(key: &str) -> String {
    let mut out = String::with_capacity(key.len());
    let mut prev_is_letter = false;

    for c in key.chars() {
        let c = if c == '_' { ' ' } else { c };
        if c.is_alphabetic() {
            if prev_is_letter {
                out.extend(c.to_lowercase());
            } else {
                out.extend(c.to_uppercase());
            }
            prev_is_letter = true;
        } else {
            out.push(c);
            prev_is_letter = false;
        }
    }

    out
}
