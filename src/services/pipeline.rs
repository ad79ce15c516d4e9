use async_trait::async_trait;

use crate::domain::company::CompanyInfo;

use super::{company_extractor::CompanyExtractor, search_scraper::SearchScraper};

#[async_trait]
pub trait LinkResolver {
    async fn resolve_links(&self, query: &str) -> Vec<String>;
}

#[async_trait]
pub trait RecordExtractor {
    async fn extract_record(&self, url: &str) -> CompanyInfo;
}

#[async_trait]
impl LinkResolver for SearchScraper {
    async fn resolve_links(&self, query: &str) -> Vec<String> {
        self.duckduckgo_search(query).await
    }
}

#[async_trait]
impl RecordExtractor for CompanyExtractor {
    async fn extract_record(&self, url: &str) -> CompanyInfo {
        self.extract_company_record(url).await
    }
}

/// Resolves the company name to search result links and extracts the record
/// from the top hit only. No fallback to later links when the top page
/// yields nothing.
pub async fn search_company(
    name: &str,
    resolver: &impl LinkResolver,
    extractor: &impl RecordExtractor,
) -> CompanyInfo {
    let links = resolver.resolve_links(name).await;

    match links.first() {
        Some(top_link) => extractor.extract_record(top_link).await,
        None => {
            log::info!("Found no search results for company: {}", name);
            CompanyInfo::default()
        }
    }
}
