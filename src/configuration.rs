use config::{Config, ConfigError, Environment};
use serde::Deserialize;

#[derive(Deserialize, Clone)]
pub struct Settings {
    pub webdriver: WebDriverSettings,
    pub api_keys: ApiKeySettings,
}

#[derive(Deserialize, Clone)]
pub struct WebDriverSettings {
    pub url: String,
}

#[derive(Deserialize, Clone)]
pub struct ApiKeySettings {
    pub openai: String,
}

pub fn get_configuration() -> Result<Settings, ConfigError> {
    // A missing credential means empty-credential calls to the provider,
    // not a startup failure.
    let openai_api_key = std::env::var("OPENAI_API_KEY").unwrap_or_default();

    let settings = Config::builder()
        .set_default("webdriver.url", "http://localhost:4444")?
        .set_default("api_keys.openai", openai_api_key)?
        .add_source(Environment::default().separator("__"))
        .build()?;

    settings.try_deserialize()
}
