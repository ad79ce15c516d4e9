use scraper::{Html, Selector};
use url::Url;

use crate::domain::search_link::resolve_destination_url;

use super::browser::fetch_page_source;

// The static html results endpoint avoids the dynamically rendered page.
const SEARCH_ENDPOINT: &str = "https://duckduckgo.com/html/";
const SEARCH_LOCALE: &str = "us-en";

pub struct SearchScraper {
    webdriver_url: String,
    headless: bool,
}

#[derive(Debug, PartialEq)]
struct SearchResultEntry {
    title: String,
    link: String,
}

impl SearchScraper {
    pub fn new(webdriver_url: String, headless: bool) -> Self {
        SearchScraper {
            webdriver_url,
            headless,
        }
    }

    /// Returns candidate destination urls in page order. An unreachable
    /// search page or a page without results both come back as an empty
    /// list, not an error.
    pub async fn duckduckgo_search(&self, query: &str) -> Vec<String> {
        let search_url = build_search_url(query);

        let html = match fetch_page_source(&self.webdriver_url, &search_url, self.headless).await {
            Some(html) => html,
            None => return vec![],
        };

        let entries = extract_result_entries(&html);
        log::info!("Found {} results for query: {}", entries.len(), query);

        for entry in entries.iter() {
            log::debug!("{} | {}", entry.title, entry.link);
        }

        entries
            .into_iter()
            .map(|entry| resolve_destination_url(&entry.link))
            .collect()
    }
}

fn build_search_url(query: &str) -> String {
    Url::parse_with_params(SEARCH_ENDPOINT, &[("q", query), ("kl", SEARCH_LOCALE)])
        .unwrap()
        .to_string()
}

fn extract_result_entries(html: &str) -> Vec<SearchResultEntry> {
    let results_selector = Selector::parse("div.results").unwrap();
    let result_selector = Selector::parse("div.result").unwrap();
    let title_selector = Selector::parse("h2 a").unwrap();
    let link_selector = Selector::parse("a.result__a").unwrap();

    let document = Html::parse_document(html);

    let container = match document.select(&results_selector).next() {
        Some(container) => container,
        None => return vec![],
    };

    container
        .select(&result_selector)
        .filter_map(|block| {
            let link = block
                .select(&link_selector)
                .next()
                .and_then(|a_tag| a_tag.value().attr("href"))?;

            let title: String = block
                .select(&title_selector)
                .next()
                .map(|a_tag| a_tag.text().collect())
                .unwrap_or_default();

            Some(SearchResultEntry {
                title: title.trim().to_string(),
                link: link.to_string(),
            })
        })
        .collect()
}
