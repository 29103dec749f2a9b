use std::io;
use log::{debug, info, warn};
use regex::Regex;
use scraper::{Html, Selector};
use crate::models::page::FetchedPage;
use crate::service::traits::i_service::MarkdownServiceTrait;

/// 自動偵測文章區塊時依序嘗試的選擇器
const ARTICLE_SELECTORS: [&str; 5] = [".postArticle-content", "article", "main", "[role=\"main\"]", "body"];

/// 轉換前移除的元素
const NOISE_TAGS: [&str; 6] = ["script", "style", "noscript", "iframe", "svg", "template"];

/// Markdown 服務，負責選出文章區塊並交由 html2md 轉換
pub struct MarkdownService {
    selector: Option<Selector>,
    noise_patterns: Vec<Regex>,
    blank_lines: Regex,
}

impl MarkdownService {
    /// 創建新的 MarkdownService 實例
    /// # 參數
    /// - selector: 使用者指定的 CSS 選擇器，None 時自動偵測
    pub fn new(selector: Option<&str>) -> io::Result<Self> {
        let selector = selector
            .map(|css| {
                Selector::parse(css).map_err(|e| {
                    io::Error::new(io::ErrorKind::InvalidInput, format!("無效的 CSS 選擇器 '{}'：{}", css, e))
                })
            })
            .transpose()?;

        let noise_patterns = NOISE_TAGS
            .iter()
            .map(|tag| compile(&format!(r"(?is)<{tag}\b[^>]*>.*?</{tag}\s*>")))
            .collect::<io::Result<Vec<_>>>()?;

        Ok(MarkdownService {
            selector,
            noise_patterns,
            blank_lines: compile(r"\n{3,}")?,
        })
    }

    fn strip_noise(&self, html: &str) -> String {
        self.noise_patterns
            .iter()
            .fold(html.to_string(), |acc, re| re.replace_all(&acc, "").into_owned())
    }

    /// 選出要轉換的文章區塊 HTML
    fn select_article(&self, html: &str) -> io::Result<String> {
        let document = Html::parse_document(html);

        if let Some(selector) = &self.selector {
            return document
                .select(selector)
                .next()
                .map(|el| el.inner_html())
                .ok_or_else(|| io::Error::new(io::ErrorKind::NotFound, "指定的 CSS 選擇器在頁面中找不到符合的元素"));
        }

        for css in ARTICLE_SELECTORS {
            let Ok(selector) = Selector::parse(css) else {
                warn!("略過無效的內建選擇器：{}", css);
                continue;
            };
            let found = document
                .select(&selector)
                .find(|el| el.text().any(|t| !t.trim().is_empty()));
            if let Some(el) = found {
                debug!("使用文章區塊：{}", css);
                return Ok(el.inner_html());
            }
        }

        // <head> 內的文字不算文章內容，交由 to_markdown 回報錯誤
        debug!("找不到含文字的文章區塊");
        Ok(String::new())
    }

    /// 整理 html2md 的輸出：統一換行、去除行尾空白、合併多餘空行
    ///
    /// 行尾兩個空白是 Markdown 的強制換行（`<br>`），後面接著文字時保留。
    pub fn normalize(&self, markdown: &str) -> String {
        let unified = markdown.replace("\r\n", "\n");
        let lines = unified.lines().collect::<Vec<_>>();
        let trimmed_lines = lines
            .iter()
            .enumerate()
            .map(|(i, line)| {
                let stripped = line.trim_end();
                let next_has_text = lines.get(i + 1).is_some_and(|next| !next.trim().is_empty());
                if !stripped.is_empty() && line.ends_with("  ") && next_has_text {
                    format!("{}  ", stripped)
                } else {
                    stripped.to_string()
                }
            })
            .collect::<Vec<_>>()
            .join("\n");
        self.blank_lines
            .replace_all(&trimmed_lines, "\n\n")
            .trim_matches('\n')
            .to_string()
    }
}

impl MarkdownServiceTrait for MarkdownService {
    fn to_markdown(&self, page: &FetchedPage) -> io::Result<String> {
        let cleaned = self.strip_noise(&page.html);
        let article_html = self.select_article(&cleaned)?;
        let markdown = self.normalize(&html2md::parse_html(&article_html));

        if markdown.is_empty() {
            return Err(io::Error::new(
                io::ErrorKind::InvalidData,
                format!("頁面沒有可轉換的文章內容：{}", page.url)
            ));
        }
        info!(
            "轉換完成：{}，共 {} 行",
            page.title.as_deref().unwrap_or(&page.url),
            markdown.lines().count()
        );
        Ok(markdown)
    }
}

fn compile(pattern: &str) -> io::Result<Regex> {
    Regex::new(pattern).map_err(|e| io::Error::new(io::ErrorKind::Other, format!("正規表示式編譯失敗: {}", e)))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn page(html: &str) -> FetchedPage {
        FetchedPage {
            url: "https://example.com/post".to_string(),
            html: html.to_string(),
            title: None,
        }
    }

    #[test]
    fn prefers_article_over_navigation() {
        let service = MarkdownService::new(None).unwrap();
        let html = r#"<html><body>
            <nav><a href="/home">Home link</a></nav>
            <article><h1>Title</h1><p>Body text.</p></article>
            <footer>Footer words</footer>
        </body></html>"#;
        let md = service.to_markdown(&page(html)).unwrap();
        assert!(md.contains("Title"));
        assert!(md.contains("Body text."));
        assert!(!md.contains("Home link"));
        assert!(!md.contains("Footer words"));
    }

    #[test]
    fn medium_post_container_wins_over_article() {
        let service = MarkdownService::new(None).unwrap();
        let html = r#"<html><body><article>
            <div class="metabar">Sign in</div>
            <div class="postArticle-content"><p>Story paragraph.</p></div>
        </article></body></html>"#;
        let md = service.to_markdown(&page(html)).unwrap();
        assert!(md.contains("Story paragraph."));
        assert!(!md.contains("Sign in"));
    }

    #[test]
    fn falls_back_to_body() {
        let service = MarkdownService::new(None).unwrap();
        let md = service.to_markdown(&page("<html><body><p>Plain page.</p></body></html>")).unwrap();
        assert!(md.contains("Plain page."));
    }

    #[test]
    fn scripts_and_styles_are_dropped() {
        let service = MarkdownService::new(None).unwrap();
        let html = r#"<html><head><style>p { color: red; }</style></head><body><article>
            <p>Visible.</p>
            <script type="text/javascript">var secretValue = 1;</script>
            <noscript>Enable JavaScript</noscript>
        </article></body></html>"#;
        let md = service.to_markdown(&page(html)).unwrap();
        assert!(md.contains("Visible."));
        assert!(!md.contains("secretValue"));
        assert!(!md.contains("color: red"));
        assert!(!md.contains("Enable JavaScript"));
    }

    #[test]
    fn custom_selector_is_used() {
        let service = MarkdownService::new(Some("div.story")).unwrap();
        let html = r#"<html><body><article><p>Teaser.</p></article><div class="story"><p>Full story.</p></div></body></html>"#;
        let md = service.to_markdown(&page(html)).unwrap();
        assert!(md.contains("Full story."));
        assert!(!md.contains("Teaser."));
    }

    #[test]
    fn custom_selector_without_match_fails() {
        let service = MarkdownService::new(Some("div.missing")).unwrap();
        let err = service.to_markdown(&page("<html><body><p>x</p></body></html>")).unwrap_err();
        assert_eq!(err.kind(), io::ErrorKind::NotFound);
    }

    #[test]
    fn invalid_selector_is_rejected() {
        assert_eq!(MarkdownService::new(Some("p[")).err().unwrap().kind(), io::ErrorKind::InvalidInput);
    }

    #[test]
    fn empty_page_is_an_error() {
        let service = MarkdownService::new(None).unwrap();
        let err = service.to_markdown(&page("<html><body><script>x()</script></body></html>")).unwrap_err();
        assert_eq!(err.kind(), io::ErrorKind::InvalidData);
    }

    #[test]
    fn normalize_collapses_blank_lines() {
        let service = MarkdownService::new(None).unwrap();
        let raw = "\n\n# Title  \r\n\r\n\r\n\r\nBody.\t\n\n\n";
        assert_eq!(service.normalize(raw), "# Title\n\nBody.");
    }

    #[test]
    fn normalize_keeps_hard_breaks_before_text() {
        let service = MarkdownService::new(None).unwrap();
        assert_eq!(service.normalize("a  \nb \t\nc  \n\nd  "), "a  \nb\nc\n\nd");
    }

    #[test]
    fn line_breaks_survive_conversion() {
        let service = MarkdownService::new(None).unwrap();
        let md = service.to_markdown(&page("<html><body><article><p>a<br>b</p></article></body></html>")).unwrap();
        assert_eq!(md, "a  \nb");
    }

    #[test]
    fn title_only_page_is_an_error() {
        let service = MarkdownService::new(None).unwrap();
        let html = "<html><head><title>Just A Title</title></head><body>  </body></html>";
        let err = service.to_markdown(&page(html)).unwrap_err();
        assert_eq!(err.kind(), io::ErrorKind::InvalidData);
    }
}
