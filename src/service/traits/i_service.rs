use std::io;
use async_trait::async_trait;
use crate::models::page::FetchedPage;

// 文章轉換接口，代表外部的「網址轉文字」能力
#[async_trait]
pub trait ArticleConverter: Send + Sync {
    /// 下載並轉換指定網址的文章
    /// # 參數
    /// - url: 文章網址，必須為 http 或 https
    /// # 回傳
    /// - 成功時返回轉換後的文字，失敗時返回 IO 錯誤（不重試、不分類）
    async fn convert(&self, url: &str) -> io::Result<String>;
}

// 網頁下載服務接口
#[async_trait]
pub trait FetchServiceTrait: Send + Sync {
    /// 對網址發出單一次 GET 請求並取得 HTML
    async fn fetch(&self, url: &str) -> io::Result<FetchedPage>;
}

// Markdown 服務接口，負責從 HTML 擷取文章並轉換
pub trait MarkdownServiceTrait: Send + Sync {
    fn to_markdown(&self, page: &FetchedPage) -> io::Result<String>;
}
