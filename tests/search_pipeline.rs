//! End-to-end runs of the search pipeline against a local mock search endpoint.

use mailsift::{
    configuration::SearchSettings, domain::search_query::SearchQuery, services::SearchClient,
    startup::run,
};
use wiremock::matchers::{header, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

const TEST_USER_AGENT: &str = "mailsift-test/1.0";

fn test_query() -> SearchQuery {
    SearchQuery {
        term: "gmail.com".to_string(),
        location: "agency".to_string(),
        platform: "India".to_string(),
        site: "instagram.com".to_string(),
    }
}

fn test_client(endpoint: String) -> SearchClient {
    SearchClient::new(&SearchSettings {
        endpoint,
        user_agent: TEST_USER_AGENT.to_string(),
        timeout_seconds: Some(5),
    })
    .expect("Failed to build search client")
}

async fn run_to_string(client: &SearchClient) -> String {
    let mut out = Vec::new();
    run(client, &test_query(), &mut out)
        .await
        .expect("Failed to write report");
    String::from_utf8(out).expect("Report is not utf-8")
}

#[tokio::test]
async fn sends_query_and_user_agent_then_reports_matches() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/search"))
        .and(query_param(
            "q",
            r#"site:instagram.com "gmail.com" "agency" "India""#,
        ))
        .and(header("user-agent", TEST_USER_AGENT))
        .respond_with(ResponseTemplate::new(200).set_body_string(
            "<html><span>Mail us: studio.in@gmail.com</span> or HELLO@Agency.CO.IN, again studio.in@gmail.com</html>",
        ))
        .expect(1)
        .mount(&server)
        .await;

    let client = test_client(format!("{}/search", server.uri()));
    let output = run_to_string(&client).await;

    assert_eq!(
        output,
        "Extracted emails:\nstudio.in@gmail.com\nHELLO@Agency.CO.IN\nstudio.in@gmail.com\n"
    );
}

#[tokio::test]
async fn reports_no_emails_for_empty_results() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/search"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_string("Your search did not match any documents."),
        )
        .expect(1)
        .mount(&server)
        .await;

    let client = test_client(format!("{}/search", server.uri()));
    let output = run_to_string(&client).await;

    assert_eq!(output, "No emails found in the search results.\n");
}

#[tokio::test]
async fn scans_body_of_non_success_status() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/search"))
        .respond_with(
            ResponseTemplate::new(429).set_body_string("blocked, contact abuse@search.example"),
        )
        .expect(1)
        .mount(&server)
        .await;

    let client = test_client(format!("{}/search", server.uri()));
    let output = run_to_string(&client).await;

    assert_eq!(output, "Extracted emails:\nabuse@search.example\n");
}

#[tokio::test]
async fn fetch_returns_raw_body() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/search"))
        .respond_with(ResponseTemplate::new(200).set_body_string("plain body"))
        .mount(&server)
        .await;

    let client = test_client(format!("{}/search", server.uri()));
    let body = client
        .fetch(&test_query())
        .await
        .expect("Fetch should succeed");

    assert_eq!(body, "plain body");
}

#[tokio::test]
async fn connection_refused_prints_single_error_line() {
    // Bind then drop to get a port nothing listens on
    let port = {
        let listener = std::net::TcpListener::bind("127.0.0.1:0").expect("Failed to bind");
        listener.local_addr().expect("No local addr").port()
    };

    let client = test_client(format!("http://127.0.0.1:{}/search", port));
    assert!(client.fetch(&test_query()).await.is_err());

    let output = run_to_string(&client).await;
    let lines: Vec<&str> = output.lines().collect();

    assert_eq!(lines.len(), 1);
    assert!(lines[0].starts_with("Error fetching data: "));
    assert!(lines[0].len() > "Error fetching data: ".len());
    assert!(!output.contains("Extracted emails:"));
    assert!(!output.contains("No emails found"));
}
