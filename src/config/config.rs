use clap::Parser;
use std::io;

/// 互動模式下預設提供的文章網址
pub const DEFAULT_URL: &str = "https://towardsdatascience.com/scraping-flight-data-using-python-e71b97e859d3";

#[derive(Parser, Clone, Debug)]
#[command(
    name = "medium_to_markdown",
    about = "下載網路文章並轉換為 Markdown 格式",
    long_about = "一個將網路文章（例如 Medium 文章）轉換為 Markdown 的工具，結果輸出至標準輸出。\n可使用 `medium_to_markdown <URL> >> file.md` 附加到檔案，或使用 --output 指定檔案。\n不帶任何參數執行時進入互動模式。",
    arg_required_else_help = true
)]
pub struct Cli {
    /// 要轉換的文章網址（http 或 https）
    pub url: String,
    /// 將結果附加到指定檔案，而非輸出至標準輸出
    #[arg(short, long)]
    pub output: Option<String>,
    /// 指定文章區塊的 CSS 選擇器，覆蓋自動偵測
    #[arg(long)]
    pub selector: Option<String>,
    #[arg(long, default_value_t = false)]
    pub no_progress: bool,
    #[arg(long, default_value = "warn", value_parser = ["info", "warn", "error"])]
    pub log_level: String,
}

pub fn validate_output_path(output: &Option<String>) -> io::Result<()> {
    if let Some(path) = output {
        if path.trim().is_empty() {
            return Err(io::Error::new(io::ErrorKind::InvalidInput, "輸出檔案路徑不可為空"));
        }
        if std::path::Path::new(path).is_dir() {
            log::error!("輸出路徑是目錄：{}", path);
            return Err(io::Error::new(
                io::ErrorKind::InvalidInput,
                format!("輸出路徑 '{}' 是目錄，請指定檔案", path)
            ));
        }
    }
    Ok(())
}

pub fn validate_selector(selector: &Option<String>) -> io::Result<()> {
    if let Some(css) = selector {
        scraper::Selector::parse(css).map_err(|e| {
            io::Error::new(io::ErrorKind::InvalidInput, format!("無效的 CSS 選擇器 '{}'：{}", css, e))
        })?;
    }
    Ok(())
}
