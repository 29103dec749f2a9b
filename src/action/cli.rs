use std::io;
use clap::Parser;
use crate::action::interactive::process_interactive_mode;
use crate::config::config::{validate_output_path, validate_selector, Cli};
use crate::config::ports::{AppConfig, ConfigPort, ConversionPort};
use crate::models::conversion::ConversionOutput;
use crate::service::config_service::{ConfigService, DefaultConfigAdapter};
use crate::utils::convert::ConversionAdapter;
use crate::utils::utils::setup_logging;

pub async fn process_args(args: Vec<String>) -> io::Result<ConversionOutput> {
    if args.len() == 1 {
        process_interactive_mode().await
    } else {
        process_cli_mode(args).await
    }
}

pub async fn process_cli_mode(args: Vec<String>) -> io::Result<ConversionOutput> {
    let cli = Cli::parse_from(args);
    setup_logging(&cli.log_level)?;

    // 僅提供網址時使用預設配置
    let is_default_config = cli.output.is_none() && cli.selector.is_none() && !cli.no_progress;
    let config_port: Box<dyn ConfigPort> = if is_default_config {
        log::info!("未提供選項參數，使用預設配置：輸出至標準輸出，自動偵測文章區塊");
        Box::new(DefaultConfigAdapter::new(cli.url.clone()))
    } else {
        Box::new(CliConfigAdapter::new(cli))
    };

    let config = ConfigService::new(config_port).get_config()?;
    log::info!("實際使用的配置：{:?}", config);

    let conversion_port: Box<dyn ConversionPort> = Box::new(ConversionAdapter);
    conversion_port.execute(config).await
}

// CLI 配置適配器
pub struct CliConfigAdapter {
    cli: Cli,
}

impl CliConfigAdapter {
    pub fn new(cli: Cli) -> Self {
        CliConfigAdapter { cli }
    }
}

impl ConfigPort for CliConfigAdapter {
    fn get_config(&self) -> io::Result<AppConfig> {
        validate_output_path(&self.cli.output)?;
        validate_selector(&self.cli.selector)?;

        Ok(AppConfig {
            url: self.cli.url.clone(),
            output: self.cli.output.clone(),
            no_progress: self.cli.no_progress,
            selector: self.cli.selector.clone(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn cli(args: &[&str]) -> Cli {
        Cli::try_parse_from(std::iter::once("medium_to_markdown").chain(args.iter().copied())).unwrap()
    }

    #[test]
    fn cli_adapter_copies_flags() {
        let adapter = CliConfigAdapter::new(cli(&["https://example.com/a", "-o", "post.md", "--no-progress"]));
        let config = adapter.get_config().unwrap();
        assert_eq!(config.url, "https://example.com/a");
        assert_eq!(config.output.as_deref(), Some("post.md"));
        assert!(config.no_progress);
        assert_eq!(config.selector, None);
    }

    #[test]
    fn cli_adapter_rejects_bad_selector() {
        let adapter = CliConfigAdapter::new(cli(&["https://example.com/a", "--selector", "a[href"]));
        assert_eq!(adapter.get_config().unwrap_err().kind(), io::ErrorKind::InvalidInput);
    }
}
