use std::io;
use async_trait::async_trait;
use crate::service::traits::i_service::{ArticleConverter, FetchServiceTrait, MarkdownServiceTrait};

/// 以 HTTP 下載並轉換為 Markdown 的文章轉換器
pub struct HttpArticleConverter {
    fetch_service: Box<dyn FetchServiceTrait>,
    markdown_service: Box<dyn MarkdownServiceTrait>,
}

impl HttpArticleConverter {
    pub fn new(
        fetch_service: Box<dyn FetchServiceTrait>,
        markdown_service: Box<dyn MarkdownServiceTrait>,
    ) -> Self {
        HttpArticleConverter {
            fetch_service,
            markdown_service,
        }
    }
}

#[async_trait]
impl ArticleConverter for HttpArticleConverter {
    async fn convert(&self, url: &str) -> io::Result<String> {
        let page = self.fetch_service.fetch(url).await?;
        self.markdown_service.to_markdown(&page)
    }
}
