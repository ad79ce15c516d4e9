use clap::Parser;
use dossier::{
    configuration::get_configuration,
    services::{search_company, CompanyExtractor, OpenaiClient, SearchScraper},
};
use env_logger::Env;

#[derive(Parser)]
#[command(name = "dossier", about = "Look up a company's legal and contact information")]
struct Cli {
    /// Company name to search for
    name: String,

    /// Run the browser with a visible window
    #[arg(long = "no-headless", action = clap::ArgAction::SetFalse, default_value_t = true)]
    headless: bool,
}

#[tokio::main]
async fn main() {
    env_logger::Builder::from_env(Env::default().default_filter_or("info")).init();

    let cli = Cli::parse();
    let configuration = get_configuration().expect("Failed to read configuration.");

    let openai_client = OpenaiClient::new(configuration.api_keys.openai.clone());
    let resolver = SearchScraper::new(configuration.webdriver.url.clone(), cli.headless);
    let extractor = CompanyExtractor::new(openai_client, configuration.webdriver.url, cli.headless);

    let record = search_company(&cli.name, &resolver, &extractor).await;

    println!("{}", serde_json::to_string_pretty(&record).unwrap());
}
