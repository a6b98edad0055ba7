use async_trait::async_trait;
use reqwest::header::USER_AGENT;
use scraper::{Html, Selector};
use url::Url;

use crate::fetchers::{DocumentFetcher, FetchError, FetchResult, SourceKind};

/// Generic browser identifier sent to notes hosts.
pub const BROWSER_USER_AGENT: &str = "Mozilla/5.0";

/// Elements whose text counts as the visible content of a notes page.
const VISIBLE_TEXT_SELECTOR: &str = "h1, h2, h3, p";

/// Extracts the text of every heading and paragraph in document order,
/// joined by single spaces.
pub fn extract_visible_text(markup: &str) -> FetchResult<String> {
    let document = Html::parse_document(markup);
    let selector =
        Selector::parse(VISIBLE_TEXT_SELECTOR).map_err(|e| FetchError::Parse(e.to_string()))?;

    Ok(document
        .select(&selector)
        .map(|el| el.text().collect::<String>())
        .collect::<Vec<_>>()
        .join(" "))
}

/// Scrapes the visible text of an arbitrary notes page.
pub struct NotesPageFetcher {
    client: reqwest::Client,
}

impl NotesPageFetcher {
    pub fn new(client: reqwest::Client) -> Self {
        Self { client }
    }
}

#[async_trait]
impl DocumentFetcher for NotesPageFetcher {
    fn kind(&self) -> SourceKind {
        SourceKind::NotesPage
    }

    async fn fetch_text(&self, reference: &str) -> FetchResult<String> {
        let url = Url::parse(reference.trim())
            .ok()
            .filter(|u| matches!(u.scheme(), "http" | "https"))
            .ok_or_else(|| FetchError::MalformedReference(reference.to_string()))?;
        log::debug!("Fetching notes page {url}");

        let res = self
            .client
            .get(url.clone())
            .header(USER_AGENT, BROWSER_USER_AGENT)
            .send()
            .await?;
        if !res.status().is_success() {
            return Err(FetchError::RemoteUnavailable {
                url: url.to_string(),
                status: res.status(),
            });
        }
        let body = res.text().await.map_err(|e| FetchError::Parse(e.to_string()))?;
        extract_visible_text(&body)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn keeps_headings_and_paragraphs_in_order() {
        let html = r#"
            <html>
              <head><title>Not content</title></head>
              <body>
                <h2>Projects</h2>
                <div>sidebar</div>
                <p>Generative <b>art</b> with p5.js</p>
                <h4>footer</h4>
                <h1>About</h1>
                <ul><li>list item</li></ul>
                <h3>Contact</h3>
              </body>
            </html>"#;

        let text = extract_visible_text(html).expect("parse");
        assert_eq!(text, "Projects Generative art with p5.js About Contact");
    }

    #[test]
    fn page_without_text_elements_is_empty() {
        let text = extract_visible_text("<div><span>nothing here</span></div>").expect("parse");
        assert!(text.is_empty());
    }

    #[test]
    fn tolerates_broken_markup() {
        let text = extract_visible_text("<p>unclosed <h1>title").expect("parse");
        assert!(text.contains("unclosed"));
        assert!(text.contains("title"));
    }

    #[tokio::test]
    async fn rejects_non_http_references() {
        let fetcher = NotesPageFetcher::new(reqwest::Client::new());
        for reference in ["not-a-url", "file:///etc/passwd", ""] {
            let result = fetcher.fetch_text(reference).await;
            assert!(matches!(result, Err(FetchError::MalformedReference(_))));
        }
    }
}
