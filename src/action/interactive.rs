use dialoguer::{Confirm, Input};
use std::io;

use crate::config::config::{validate_output_path, DEFAULT_URL};
use crate::config::ports::{AppConfig, ConfigPort, ConversionPort};
use crate::models::conversion::ConversionOutput;
use crate::service::config_service::{ConfigService, DefaultConfigAdapter};
use crate::service::fetch::parse_article_url;
use crate::utils::convert::ConversionAdapter;
use crate::utils::utils::setup_logging;

pub async fn process_interactive_mode() -> io::Result<ConversionOutput> {
    setup_logging("warn")?;
    eprintln!("=== 歡迎使用互動模式 ===");
    let url = get_url()?;
    let use_default_config = get_default_config_option()?;

    let config_port: Box<dyn ConfigPort> = if use_default_config {
        eprintln!("使用預設配置：輸出至標準輸出，自動偵測文章區塊");
        Box::new(DefaultConfigAdapter::new(url))
    } else {
        Box::new(InteractiveConfigAdapter::new(url))
    };

    let config = ConfigService::new(config_port).get_config()?;
    let conversion_port: Box<dyn ConversionPort> = Box::new(ConversionAdapter);
    conversion_port.execute(config).await
}

pub fn get_url() -> io::Result<String> {
    Input::new()
        .with_prompt("請輸入文章網址")
        .default(DEFAULT_URL.to_string())
        .validate_with(|input: &String| -> Result<(), String> {
            parse_article_url(input).map(|_| ()).map_err(|e| e.to_string())
        })
        .interact_text()
        .map_err(|e| io::Error::new(io::ErrorKind::Other, format!("網址輸入失敗: {}", e)))
}

pub fn get_default_config_option() -> io::Result<bool> {
    Confirm::new()
        .with_prompt("是否使用預設配置？（輸出至標準輸出、自動偵測文章區塊）")
        .default(true)
        .interact()
        .map_err(|e| io::Error::new(io::ErrorKind::Other, format!("預設配置選擇失敗: {}", e)))
}

pub fn get_output_option() -> io::Result<Option<String>> {
    let to_file = Confirm::new()
        .with_prompt("是否將結果附加到檔案？（預設輸出至標準輸出）")
        .default(false)
        .interact()
        .map_err(|e| io::Error::new(io::ErrorKind::Other, format!("輸出選項輸入失敗: {}", e)))?;
    if !to_file {
        return Ok(None);
    }
    let path = Input::new()
        .with_prompt("輸入輸出檔案路徑（例如：./article.md）")
        .default("article.md".to_string())
        .interact_text()
        .map_err(|e| io::Error::new(io::ErrorKind::Other, format!("輸出路徑輸入失敗: {}", e)))?;
    Ok(Some(path))
}

pub fn get_selector_option() -> io::Result<Option<String>> {
    let css: String = Input::new()
        .with_prompt("輸入文章區塊的 CSS 選擇器（留空為自動偵測）")
        .default(String::new())
        .allow_empty(true)
        .validate_with(|input: &String| -> Result<(), String> {
            if input.trim().is_empty() {
                return Ok(());
            }
            scraper::Selector::parse(input).map(|_| ()).map_err(|e| e.to_string())
        })
        .interact_text()
        .map_err(|e| io::Error::new(io::ErrorKind::Other, format!("選擇器輸入失敗: {}", e)))?;
    let css = css.trim().to_string();
    Ok(if css.is_empty() { None } else { Some(css) })
}

// 交互配置適配器
pub struct InteractiveConfigAdapter {
    url: String,
}

impl InteractiveConfigAdapter {
    pub fn new(url: String) -> Self {
        InteractiveConfigAdapter { url }
    }
}

impl ConfigPort for InteractiveConfigAdapter {
    fn get_config(&self) -> io::Result<AppConfig> {
        let output = get_output_option()?;
        validate_output_path(&output)?;
        let selector = get_selector_option()?;

        Ok(AppConfig {
            url: self.url.clone(),
            output,
            no_progress: false,
            selector,
        })
    }
}
