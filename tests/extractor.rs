use serde_json::json;
use wiremock::matchers::{body_partial_json, header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

use jobscout::error::ExtractError;
use jobscout::extractors::{JobExtractor, OpenAiExtractor};

const BOARD_HTML: &str = r#"<html>
  <head><script>analytics();</script><title>Careers</title></head>
  <body>
    <h1>Open roles</h1>
    <div class="job"><a href="/careers/1">Junior Backend Engineer</a> at Acme, Denver, CO</div>
  </body>
</html>"#;

#[tokio::test]
async fn extracts_jobs_from_a_mocked_board() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/careers"))
        .respond_with(ResponseTemplate::new(200).set_body_string(BOARD_HTML))
        .expect(1)
        .mount(&server)
        .await;

    let payload = json!({
        "jobs": [{
            "job_title": "Junior Backend Engineer",
            "company_name": "Acme",
            "job_url": "https://acme.example/careers/1",
            "location": "Denver, CO",
            "date_posted": "2025-06-01",
            "description": "Backend services team"
        }]
    });
    let completion = json!({
        "choices": [{
            "message": {"role": "assistant", "content": payload.to_string()}
        }]
    });

    Mock::given(method("POST"))
        .and(path("/chat/completions"))
        .and(header("Authorization", "Bearer sk-test"))
        .and(body_partial_json(json!({
            "model": "gpt-4o-mini",
            "response_format": {"type": "json_object"}
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(completion))
        .expect(1)
        .mount(&server)
        .await;

    let extractor = OpenAiExtractor::new("sk-test").with_base_url(server.uri());
    let jobs = extractor
        .extract(&format!("{}/careers", server.uri()))
        .await
        .unwrap();

    assert_eq!(jobs.len(), 1);
    assert_eq!(jobs[0].job_title, "Junior Backend Engineer");
    assert_eq!(jobs[0].company_name, "Acme");
    assert_eq!(jobs[0].location, "Denver, CO");

    // The model sees reduced page text, not raw markup.
    let requests = server.received_requests().await.unwrap();
    let chat = requests
        .iter()
        .find(|r| r.url.path() == "/chat/completions")
        .unwrap();
    let body: serde_json::Value = serde_json::from_slice(&chat.body).unwrap();
    let user = body["messages"][1]["content"].as_str().unwrap();
    assert!(user.contains("Junior Backend Engineer"));
    assert!(!user.contains("<script>"));
    assert!(!user.contains("analytics()"));
}

#[tokio::test]
async fn page_fetch_failure_is_reported_with_its_status() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/gone"))
        .respond_with(ResponseTemplate::new(404))
        .mount(&server)
        .await;

    let extractor = OpenAiExtractor::new("sk-test").with_base_url(server.uri());
    let err = extractor
        .extract(&format!("{}/gone", server.uri()))
        .await
        .unwrap_err();

    match err {
        ExtractError::PageStatus { status, .. } => assert_eq!(status.as_u16(), 404),
        other => panic!("expected PageStatus, got {other}"),
    }
}

#[tokio::test]
async fn chat_api_failure_surfaces_the_error_body() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/careers"))
        .respond_with(ResponseTemplate::new(200).set_body_string(BOARD_HTML))
        .mount(&server)
        .await;

    Mock::given(method("POST"))
        .and(path("/chat/completions"))
        .respond_with(ResponseTemplate::new(500).set_body_string("model overloaded"))
        .mount(&server)
        .await;

    let extractor = OpenAiExtractor::new("sk-test").with_base_url(server.uri());
    let err = extractor
        .extract(&format!("{}/careers", server.uri()))
        .await
        .unwrap_err();

    assert!(matches!(err, ExtractError::Api(_)));
    assert!(err.to_string().contains("model overloaded"));
}
