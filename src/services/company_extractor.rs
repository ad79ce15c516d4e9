use scraper::{Html, Selector};
use serde_json::Value;

use crate::domain::company::CompanyInfo;

use super::{browser::fetch_page_source, openai_client::OpenaiClient};

// Keeps the prompt below the model's context window on long pages.
const PAGE_TEXT_LIMIT: usize = 12_000;

pub struct CompanyExtractor {
    openai_client: OpenaiClient,
    webdriver_url: String,
    headless: bool,
}

impl CompanyExtractor {
    pub fn new(openai_client: OpenaiClient, webdriver_url: String, headless: bool) -> Self {
        CompanyExtractor {
            openai_client,
            webdriver_url,
            headless,
        }
    }

    /// Best effort extraction of the company record from one page. Any
    /// fetch, model or parse failure comes back as the empty record.
    pub async fn extract_company_record(&self, url: &str) -> CompanyInfo {
        let html = match fetch_page_source(&self.webdriver_url, url, self.headless).await {
            Some(html) => html,
            None => return CompanyInfo::default(),
        };

        let page_text = extract_page_text(&html);
        if page_text.is_empty() {
            log::error!("Found no readable content on page: {}", url);
            return CompanyInfo::default();
        }

        match self.openai_client.extract_company_fields(&page_text).await {
            Ok(reply) => parse_company_record(&reply),
            Err(e) => {
                log::error!("Extraction failed for page {}. Error: {:?}", url, e);
                CompanyInfo::default()
            }
        }
    }
}

fn extract_page_text(html: &str) -> String {
    let body_selector = Selector::parse("body").unwrap();
    let document = Html::parse_document(html);

    let text = document
        .select(&body_selector)
        .next()
        .map(|body| body.text().collect::<Vec<_>>().join(" "))
        .unwrap_or_default();

    text.split_whitespace()
        .collect::<Vec<_>>()
        .join(" ")
        .chars()
        .take(PAGE_TEXT_LIMIT)
        .collect()
}

fn parse_company_record(reply: &str) -> CompanyInfo {
    let value: Value = match serde_json::from_str(reply) {
        Ok(value) => value,
        Err(e) => {
            log::error!("Failed to parse extraction reply as json. Error: {:?}", e);
            return CompanyInfo::default();
        }
    };

    let record = match value {
        Value::Array(items) => match items.into_iter().next() {
            Some(first) => first,
            None => return CompanyInfo::default(),
        },
        other => other,
    };

    match serde_json::from_value(record) {
        Ok(info) => info,
        Err(e) => {
            log::error!(
                "Extraction reply does not match the company record. Error: {:?}",
                e
            );
            CompanyInfo::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::domain::company::CompanyInfo;

    use super::{extract_page_text, parse_company_record};

    #[test]
    fn page_text_strips_tags_and_collapses_whitespace() {
        let html = r#"
            <html><body>
                <h1>Acme   Corp</h1>
                <p>Registered in
                Springfield.</p>
            </body></html>
        "#;
        let text = extract_page_text(html);

        assert_eq!(text, "Acme Corp Registered in Springfield.");
    }

    #[test]
    fn reply_object_parses_into_record() {
        let reply = r#"{"company_name": "Acme Corp", "phone": "+1 555 0100"}"#;
        let record = parse_company_record(reply);

        assert_eq!(record.company_name, Some("Acme Corp".to_string()));
        assert_eq!(record.phone, Some("+1 555 0100".to_string()));
    }

    #[test]
    fn reply_list_parses_into_first_element() {
        let reply = r#"[
            {"company_name": "Acme Corp", "website": "https://www.acme.com"},
            {"company_name": "Acme Holdings"}
        ]"#;
        let record = parse_company_record(reply);

        assert_eq!(record.company_name, Some("Acme Corp".to_string()));
        assert_eq!(record.website, Some("https://www.acme.com".to_string()));
    }

    #[test]
    fn empty_reply_list_yields_empty_record() {
        let record = parse_company_record("[]");

        assert_eq!(record, CompanyInfo::default());
    }

    #[test]
    fn malformed_reply_yields_empty_record() {
        let record = parse_company_record("the page had no contact details");

        assert_eq!(record, CompanyInfo::default());
    }
}
