// ==========================================
// 日志系统初始化
// ==========================================
// 使用 tracing 和 tracing-subscriber
// 支持环境变量配置日志级别
// ==========================================

use tracing_subscriber::{fmt, EnvFilter};

/// 默认日志级别
pub const DEFAULT_FILTER: &str = "info";

/// 初始化日志系统
///
/// # 环境变量
/// - RUST_LOG: 日志级别过滤器（默认: info）
///   例如: RUST_LOG=debug 或 RUST_LOG=delivery_sheet_prep=trace
///
/// 日志输出到 stderr，stdout 只输出生成的文件路径
pub fn init() {
    install(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER)));
}

/// 以 verbose 标志初始化：命令行 -v 且未设置 RUST_LOG 时提升到 debug
pub fn init_with_verbosity(verbose: bool) {
    if verbose && std::env::var_os("RUST_LOG").is_none() {
        install(EnvFilter::new("debug"));
    } else {
        init();
    }
}

fn install(filter: EnvFilter) {
    // 重复初始化时忽略（库被多次调用的场景）
    let _ = fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_thread_ids(false)
        .with_line_number(true)
        .with_writer(std::io::stderr)
        .try_init();
}

/// 初始化测试环境的日志系统
///
/// 使用更详细的日志级别，便于调试
pub fn init_test() {
    let _ = fmt()
        .with_env_filter(EnvFilter::new("debug"))
        .with_test_writer()
        .try_init();
}
