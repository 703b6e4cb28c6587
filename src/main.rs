// ==========================================
// 納品数シート作成 - 命令行入口
// ==========================================
// 用法: delivery-sheet-prep [DATE] [--source PATH] [--config PATH] [--download-dir DIR]
// 交互模式: 未给出 DATE 时从标准输入询问交货日与源文件
// ==========================================

use anyhow::{Context, Result};
use clap::Parser;
use delivery_sheet_prep::app::{download_file_name, PreparedDownload};
use delivery_sheet_prep::config::layout::DEFAULT_SOURCE_FILE;
use delivery_sheet_prep::config::PrepareConfig;
use delivery_sheet_prep::{logging, DeliveryDate, PrepareOrchestrator};
use std::io::{self, BufRead, Write};
use std::path::{Path, PathBuf};

#[derive(Parser, Debug)]
#[command(
    name = "delivery-sheet-prep",
    version,
    about = "在庫集計表から納品数シートを作成する"
)]
struct Cli {
    /// 出荷日 (YYYY-MM-DD)
    date: Option<String>,

    /// 在庫集計表 (.xlsm)
    #[arg(long, short)]
    source: Option<PathBuf>,

    /// 設定ファイル (JSON)
    #[arg(long, short)]
    config: Option<PathBuf>,

    /// 生成物を YYYYMMDD納品.<ext> としてこのディレクトリにもコピーする
    #[arg(long = "download-dir")]
    download_dir: Option<PathBuf>,

    /// debug ログを出力
    #[arg(long, short)]
    verbose: bool,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    logging::init_with_verbosity(cli.verbose);

    tracing::debug!("{} v{}", delivery_sheet_prep::APP_NAME, delivery_sheet_prep::VERSION);

    let config = match &cli.config {
        Some(path) => PrepareConfig::from_json_file(path)
            .with_context(|| format!("設定ファイルを読み込めません: {}", path.display()))?,
        None => PrepareConfig::discover()?,
    };

    let interactive = cli.date.is_none();
    let date_iso = match cli.date {
        Some(date) => date,
        None => prompt("出荷日 YYYY-MM-DD: ")?,
    };
    let date = DeliveryDate::parse_iso(&date_iso)?;

    let source = match cli.source {
        Some(path) => path,
        None if interactive => {
            let answer = prompt(&format!("在庫集計表(.xlsm) [{}]: ", DEFAULT_SOURCE_FILE))?;
            if answer.is_empty() {
                PathBuf::from(DEFAULT_SOURCE_FILE)
            } else {
                PathBuf::from(answer)
            }
        }
        None => PathBuf::from(DEFAULT_SOURCE_FILE),
    };

    let orchestrator = PrepareOrchestrator::new(config);
    let output = orchestrator.prepare(&source, &date_iso)?;
    println!("✅ 出力ファイル: {}", output.display());

    if let Some(dir) = cli.download_dir {
        let saved = save_download(&output, date, &dir)?;
        println!("⬇ {}", saved.display());
    }
    Ok(())
}

/// 标准输入询问一行（去除首尾空白）
fn prompt(message: &str) -> Result<String> {
    let mut stdout = io::stdout();
    write!(stdout, "{}", message)?;
    stdout.flush()?;

    let mut line = String::new();
    io::stdin().lock().read_line(&mut line)?;
    Ok(line.trim().to_string())
}

fn save_download(output: &Path, date: DeliveryDate, dir: &Path) -> Result<PathBuf> {
    let ext = output
        .extension()
        .map(|e| e.to_string_lossy().into_owned())
        .unwrap_or_default();
    let download = PreparedDownload {
        path: output.to_path_buf(),
        file_name: download_file_name(date, &ext),
    };
    download
        .save_to(dir)
        .with_context(|| format!("ダウンロード先にコピーできません: {}", dir.display()))
}
