use std::io;
use async_trait::async_trait;
use log::{debug, info};
use reqwest::header::CONTENT_TYPE;
use reqwest::{Client, Url};
use scraper::{Html, Selector};
use crate::models::page::FetchedPage;
use crate::service::traits::i_service::FetchServiceTrait;
use crate::utils::utils::format_file_size;

const USER_AGENT: &str = concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION"));

/// 網頁下載服務，每次呼叫只發出一次請求，不重試也不設逾時
pub struct FetchService {
    client: Client,
}

impl FetchService {
    pub fn new() -> io::Result<Self> {
        let client = Client::builder()
            .user_agent(USER_AGENT)
            .build()
            .map_err(|e| io::Error::new(io::ErrorKind::Other, format!("建立 HTTP 客戶端失敗: {}", e)))?;
        Ok(FetchService { client })
    }

    pub fn with_client(client: Client) -> Self {
        FetchService { client }
    }
}

#[async_trait]
impl FetchServiceTrait for FetchService {
    async fn fetch(&self, url: &str) -> io::Result<FetchedPage> {
        let parsed = parse_article_url(url)?;
        info!("開始下載：{}", parsed);

        let response = self
            .client
            .get(parsed)
            .send()
            .await
            .map_err(|e| io::Error::new(io::ErrorKind::Other, format!("下載失敗 '{}': {}", url, e)))?;

        let status = response.status();
        if !status.is_success() {
            return Err(io::Error::new(
                io::ErrorKind::Other,
                format!("伺服器回應錯誤狀態 {}：{}", status, url)
            ));
        }

        if let Some(content_type) = response.headers().get(CONTENT_TYPE) {
            let content_type = content_type.to_str().unwrap_or_default().to_ascii_lowercase();
            if !content_type.contains("html") {
                return Err(io::Error::new(
                    io::ErrorKind::InvalidData,
                    format!("不支援的內容類型 '{}'：{}", content_type, url)
                ));
            }
        }

        let final_url = response.url().to_string();
        let html = response
            .text()
            .await
            .map_err(|e| io::Error::new(io::ErrorKind::Other, format!("讀取回應內容失敗: {}", e)))?;
        info!("下載完成：{}，大小：{}", final_url, format_file_size(html.len()));

        let title = extract_title(&html);
        debug!("頁面標題：{:?}", title);

        Ok(FetchedPage { url: final_url, html, title })
    }
}

/// 解析網址，僅接受 http 與 https
pub fn parse_article_url(url: &str) -> io::Result<Url> {
    let parsed = Url::parse(url.trim()).map_err(|e| {
        io::Error::new(io::ErrorKind::InvalidInput, format!("無效的網址 '{}': {}", url, e))
    })?;
    match parsed.scheme() {
        "http" | "https" => Ok(parsed),
        scheme => Err(io::Error::new(
            io::ErrorKind::InvalidInput,
            format!("不支援的網址協定 '{}'，僅支援 http 與 https", scheme)
        )),
    }
}

pub fn extract_title(html: &str) -> Option<String> {
    let document = Html::parse_document(html);
    let selector = Selector::parse("title").ok()?;
    document
        .select(&selector)
        .next()
        .map(|el| el.text().collect::<String>().trim().to_string())
        .filter(|title| !title.is_empty())
}
