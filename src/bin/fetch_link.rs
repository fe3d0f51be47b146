// Fetches a fixed URL and prints the target of the first link in the body.
use reqwest::Client;
use scraper::{Html, Selector};
use thiserror::Error;

const URL: &str = "https://example.com/";
const LINK_SELECTOR: &str = "body > div > p > a";

#[derive(Error, Debug)]
pub enum LinkError {
    #[error("request failed: {0}")]
    Network(#[from] reqwest::Error),

    #[error("no element matches `{0}`")]
    MissingElement(&'static str),

    #[error("matched element has no href attribute")]
    MissingHref,
}

/// Pulls the `href` off the first element matching the fixed selector.
fn extract_href(html: &str) -> Result<String, LinkError> {
    let document = Html::parse_document(html);
    let selector = Selector::parse(LINK_SELECTOR).expect("valid selector");

    let element = document
        .select(&selector)
        .next()
        .ok_or(LinkError::MissingElement(LINK_SELECTOR))?;

    element
        .value()
        .attr("href")
        .map(str::to_string)
        .ok_or(LinkError::MissingHref)
}

async fn fetch_link(url: &str) -> Result<String, LinkError> {
    let client = Client::new();
    let body = client.get(url).send().await?.text().await?;
    extract_href(&body)
}

#[tokio::main]
async fn main() {
    match fetch_link(URL).await {
        Ok(href) => println!("{}", href),
        Err(err) => {
            eprintln!("Error: {}", err);
            std::process::exit(1);
        }
    }
}
