//! Completion client and generator against a local mock API.

use axum::http::{HeaderMap, StatusCode};
use axum::routing::post;
use axum::{Json, Router};
use schoolhub_ai::{
    AiConfig, AiError, CompletionClient, DisabledTrailGenerator, OpenAiTrailGenerator,
    TrailGenerator,
};
use schoolhub_core::trail::{StudentProfile, TrailPrompt, TrailRequest};
use serde_json::{json, Value};

/// Spawn `router` on an ephemeral port and return its base URL.
async fn spawn(router: Router) -> String {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, router).await.unwrap();
    });
    format!("http://{addr}")
}

fn config(api_url: String, api_key: Option<&str>) -> AiConfig {
    AiConfig {
        api_url,
        api_key: api_key.map(str::to_string),
        model: "test-model".into(),
        timeout_secs: 5,
        temperature: 0.2,
    }
}

async fn echo_completion(headers: HeaderMap, Json(body): Json<Value>) -> (StatusCode, Json<Value>) {
    if headers.get("authorization").and_then(|v| v.to_str().ok()) != Some("Bearer sk-test") {
        return (StatusCode::UNAUTHORIZED, Json(json!({"error": "bad key"})));
    }
    let user = body["messages"][1]["content"].as_str().unwrap_or_default();
    let content = json!({
        "title": "Trail",
        "summary": user,
        "activities": [{"title": "Explore", "description": "Look around", "minutes": 10}],
    });
    (
        StatusCode::OK,
        Json(json!({
            "model": body["model"],
            "choices": [{"message": {"role": "assistant", "content": format!("```json\n{content}\n```")}}],
        })),
    )
}

#[tokio::test]
async fn complete_sends_prompt_with_bearer_auth() {
    let url = spawn(Router::new().route("/chat/completions", post(echo_completion))).await;
    let client = CompletionClient::from_config(&config(url, Some("sk-test"))).unwrap();

    let completion = client
        .complete(&TrailPrompt {
            system: "sys".into(),
            user: "hello".into(),
        })
        .await
        .unwrap();

    assert_eq!(completion.model, "test-model");
    assert!(completion.content.contains("\"summary\":\"hello\""));
}

#[tokio::test]
async fn non_success_status_is_api_error() {
    let url = spawn(Router::new().route("/chat/completions", post(echo_completion))).await;
    let client = CompletionClient::from_config(&config(url, Some("wrong"))).unwrap();

    let err = client
        .complete(&TrailPrompt {
            system: "sys".into(),
            user: "hello".into(),
        })
        .await
        .unwrap_err();
    assert!(matches!(err, AiError::ApiError { status: 401, .. }));
}

#[tokio::test]
async fn empty_choices_is_empty_response() {
    let router = Router::new().route(
        "/chat/completions",
        post(|| async { Json(json!({"choices": []})) }),
    );
    let url = spawn(router).await;
    let client = CompletionClient::from_config(&config(url, Some("sk-test"))).unwrap();

    let err = client
        .complete(&TrailPrompt {
            system: "s".into(),
            user: "u".into(),
        })
        .await
        .unwrap_err();
    assert!(matches!(err, AiError::EmptyResponse));
}

#[tokio::test]
async fn generator_parses_fenced_reply() {
    let url = spawn(Router::new().route("/chat/completions", post(echo_completion))).await;
    let client = CompletionClient::from_config(&config(url, Some("sk-test"))).unwrap();
    let generator = OpenAiTrailGenerator::new(client);

    let profile = StudentProfile {
        name: "Meera".into(),
        age: Some(10),
        ..Default::default()
    };
    let request = TrailRequest {
        topic: "Magnets".into(),
        subject: None,
    };
    let trail = generator.generate(&profile, &request).await.unwrap();

    assert_eq!(trail.model, "test-model");
    assert_eq!(trail.plan.title, "Trail");
    assert!(trail.plan.summary.contains("Topic: Magnets"));
    assert_eq!(trail.plan.activities.len(), 1);
}

#[tokio::test]
async fn missing_key_disables_generation() {
    assert!(matches!(
        CompletionClient::from_config(&config("http://unused".into(), None)),
        Err(AiError::NotConfigured)
    ));

    let err = DisabledTrailGenerator
        .generate(
            &StudentProfile::default(),
            &TrailRequest {
                topic: "x".into(),
                subject: None,
            },
        )
        .await
        .unwrap_err();
    assert!(matches!(err, AiError::NotConfigured));
}
