// Fetches a fixed URL and prints the response body.
use reqwest::Client;

const URL: &str = "https://example.com/";

async fn fetch_text(url: &str) -> Result<String, reqwest::Error> {
    let client = Client::new();
    let response = client.get(url).send().await?;
    response.text().await
}

#[tokio::main]
async fn main() {
    match fetch_text(URL).await {
        Ok(body) => println!("{}", body),
        Err(err) => {
            eprintln!("Error: {}", err);
            std::process::exit(1);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use wiremock::matchers::{method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    #[tokio::test]
    async fn test_fetch_returns_body() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/"))
            .respond_with(ResponseTemplate::new(200).set_body_string("<html>hi</html>"))
            .mount(&server)
            .await;

        let body = fetch_text(&server.uri()).await.unwrap();
        assert_eq!(body, "<html>hi</html>");
    }

    #[tokio::test]
    async fn test_non_success_status_still_yields_body() {
        // The contract is status-free: a 404 page is still printed
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(404).set_body_string("missing"))
            .mount(&server)
            .await;

        let body = fetch_text(&server.uri()).await.unwrap();
        assert_eq!(body, "missing");
    }

    #[tokio::test]
    async fn test_connection_failure_is_err() {
        // Port 1 is never listening
        let err = fetch_text("http://127.0.0.1:1/").await.unwrap_err();
        assert!(err.is_connect());
    }
}
