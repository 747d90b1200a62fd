// ==========================================
// 酸面包排程计算器 - 命令行入口
// ==========================================
// 用法:
//   sourdough-planner generate [FILE|-]     请求 JSON (省略时读 stdin)
//   sourdough-planner ratios [LOCALE]
//   sourdough-planner step KEY [LOCALE]
//   sourdough-planner health
// stdout 只输出 JSON 响应; 请求被拒绝时退出码为 1
// ==========================================

use anyhow::Context;
use std::io::Read;

use sourdough_planner::app::{
    describe_step, generate_schedule, health_check, list_feeding_ratios, AppState,
};
use sourdough_planner::logging;

const USAGE: &str = "usage: sourdough-planner <generate [FILE|-] | ratios [LOCALE] | step KEY [LOCALE] | health>";

fn read_body(source: Option<String>) -> anyhow::Result<String> {
    match source.as_deref() {
        None | Some("-") => {
            let mut body = String::new();
            std::io::stdin()
                .read_to_string(&mut body)
                .context("读取 stdin 失败")?;
            Ok(body)
        }
        Some(path) => {
            std::fs::read_to_string(path).with_context(|| format!("读取请求文件失败: {}", path))
        }
    }
}

fn main() -> anyhow::Result<()> {
    logging::init_from_env();

    tracing::debug!("{} v{}", sourdough_planner::APP_NAME, sourdough_planner::VERSION);

    let mut args = std::env::args().skip(1);
    let command = args.next().unwrap_or_else(|| "generate".to_string());

    if command == "health" {
        println!("{}", health_check());
        return Ok(());
    }

    let state = AppState::from_env().context("加载配置失败")?;

    let output = match command.as_str() {
        "generate" => {
            let body = read_body(args.next())?;
            generate_schedule(&state, &body)
        }
        "ratios" => list_feeding_ratios(&state, args.next().as_deref()),
        "step" => {
            let key = args.next().context(USAGE)?;
            describe_step(&state, &key, args.next().as_deref())
        }
        other => {
            anyhow::bail!("未知命令: {}\n{}", other, USAGE);
        }
    };

    match output {
        Ok(body) => {
            println!("{}", body);
            Ok(())
        }
        Err(body) => {
            println!("{}", body);
            std::process::exit(1);
        }
    }
}
