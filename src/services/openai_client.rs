use std::error::Error;

use async_openai::{
    config::OpenAIConfig,
    types::{
        ChatCompletionRequestSystemMessageArgs, ChatCompletionRequestUserMessageArgs,
        CreateChatCompletionRequestArgs, ResponseFormat, ResponseFormatJsonSchema,
    },
    Client,
};
use serde_json::json;

const EXTRACTION_MODEL: &str = "gpt-4o";

const EXTRACTION_INSTRUCTION: &str = "Extract the company name, legal name, website, address, \
    phone, email, and registration number from this page if available.";

pub struct OpenaiClient {
    client: Client<OpenAIConfig>,
}

impl OpenaiClient {
    pub fn new(api_key: String) -> Self {
        let config = OpenAIConfig::new().with_api_key(api_key);
        OpenaiClient {
            client: Client::with_config(config),
        }
    }

    /// Asks the model to fill the company record schema from page text.
    /// Returns the raw json reply for the caller to parse.
    pub async fn extract_company_fields(&self, page_text: &str) -> Result<String, Box<dyn Error>> {
        let request = CreateChatCompletionRequestArgs::default()
            .model(EXTRACTION_MODEL)
            .response_format(ResponseFormat::JsonSchema {
                json_schema: ResponseFormatJsonSchema {
                    name: "company_info".to_string(),
                    description: None,
                    schema: Some(company_info_schema()),
                    strict: Some(false),
                },
            })
            .messages([
                ChatCompletionRequestSystemMessageArgs::default()
                    .content(EXTRACTION_INSTRUCTION)
                    .build()?
                    .into(),
                ChatCompletionRequestUserMessageArgs::default()
                    .content(page_text)
                    .build()?
                    .into(),
            ])
            .max_tokens(1000_u32)
            .build()?;

        let response = self.client.chat().create(request).await?;

        let first_choice = response
            .choices
            .first()
            .ok_or("No choices in Openai response")?
            .message
            .content
            .clone()
            .ok_or("No content")?;

        Ok(first_choice)
    }
}

fn company_info_schema() -> serde_json::Value {
    json!({
        "type": "object",
        "properties": {
            "company_name": { "type": ["string", "null"] },
            "legal_name": { "type": ["string", "null"] },
            "website": { "type": ["string", "null"] },
            "address": { "type": ["string", "null"] },
            "phone": { "type": ["string", "null"] },
            "email": { "type": ["string", "null"] },
            "registration_number": { "type": ["string", "null"] }
        },
        "additionalProperties": false
    })
}
