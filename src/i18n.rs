// ==========================================
// 国际化 (i18n) 模块
// ==========================================
// 使用 rust-i18n 库
// 支持英文（默认）和中文
// ==========================================
// 注意: rust_i18n::i18n! 宏已在 lib.rs 中初始化
// 请求路径上显式传入 locale, 不修改全局语言
// ==========================================

/// 缺省语言
pub const DEFAULT_LOCALE: &str = "en";

/// 已支持的语言列表
pub fn available_locales() -> Vec<String> {
    rust_i18n::available_locales!()
        .into_iter()
        .map(|l| l.to_string())
        .collect()
}

/// 规范化请求语言；未知语言回退到缺省语言
///
/// 比较时忽略大小写, "zh_cn" 与 "zh-CN" 等价
pub fn resolve_locale(requested: &str) -> String {
    let wanted = requested.trim().replace('_', "-").to_lowercase();
    available_locales()
        .into_iter()
        .find(|l| l.to_lowercase() == wanted)
        .unwrap_or_else(|| DEFAULT_LOCALE.to_string())
}

/// 翻译消息（无参数）
///
/// # 示例
/// ```no_run
/// use sourdough_planner::i18n::t;
/// let msg = t("steps.bake.name", "en");
/// ```
pub fn t(key: &str, locale: &str) -> String {
    rust_i18n::t!(key, locale = locale).to_string()
}
