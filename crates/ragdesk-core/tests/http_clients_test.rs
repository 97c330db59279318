//! HTTP clients against a loopback stub service

mod common;

use common::{unreachable_url, StubServer};
use ragdesk_core::rag::ingest::{
    ACCESS_DENIED_MESSAGE, CONNECTION_FAILED_MESSAGE, INGEST_FALLBACK_MESSAGE,
    INGEST_SUCCESS_MESSAGE, PAYLOAD_TOO_LARGE_MESSAGE,
};
use ragdesk_core::{
    AssistantMode, ChatMessage, ChatOrchestrator, ConversationTurn, Dataset, DocumentKind,
    HttpIngestor, HttpLLMClient, HttpRetriever, IngestFailureKind, IngestOutcome, Ingestor,
    LLMClient, LLMServiceConfig, RagDeskError, Retriever,
};
use std::sync::Arc;
use std::time::Duration;

fn ingestor(base_url: &str) -> HttpIngestor {
    HttpIngestor::with_client(reqwest::Client::new(), base_url)
}

fn llm_client(base_url: &str, api_key: Option<&str>) -> HttpLLMClient {
    HttpLLMClient::new(LLMServiceConfig {
        url: base_url.to_string(),
        model: "gpt-4".to_string(),
        api_key: api_key.map(str::to_string),
    })
    .unwrap()
}

fn expect_failure(outcome: IngestOutcome) -> (IngestFailureKind, String) {
    match outcome {
        IngestOutcome::Failed(failure) => (failure.kind, failure.message),
        IngestOutcome::Ingested(receipt) => panic!("expected failure, got {:?}", receipt),
    }
}

#[tokio::test]
async fn test_ingest_success_carries_receipt() {
    let server = StubServer::respond(
        200,
        r#"{"message":"Queued","documentId":"doc-7","ingestedFiles":1}"#,
    )
    .await;

    let outcome = ingestor(&server.base_url)
        .ingest("https://example.com/report.pdf", DocumentKind::Persona)
        .await;

    match outcome {
        IngestOutcome::Ingested(receipt) => {
            assert_eq!(receipt.message, "Queued");
            assert_eq!(receipt.document_id.as_deref(), Some("doc-7"));
            assert_eq!(receipt.ingested_files, Some(1));
            assert_eq!(receipt.dataset, Dataset::Persona);
        }
        other => panic!("unexpected outcome {:?}", other),
    }

    let requests = server.requests();
    assert_eq!(requests.len(), 1);
    assert_eq!(requests[0].method.as_str(), "POST");
    assert_eq!(requests[0].path, "/ingest");
    assert_eq!(requests[0].header("accept"), Some("application/json"));
    assert_eq!(
        requests[0].json(),
        serde_json::json!({"files": ["https://example.com/report.pdf"], "datasetId": "persona_ai"})
    );
}

#[tokio::test]
async fn test_ingest_success_with_numeric_document_id() {
    let server = StubServer::respond(
        200,
        r#"{"message":"Ingested","documentId":42,"ingestedFiles":1}"#,
    )
    .await;

    let outcome = ingestor(&server.base_url)
        .ingest("https://example.com/report.pdf", DocumentKind::General)
        .await;

    match outcome {
        IngestOutcome::Ingested(receipt) => {
            assert_eq!(receipt.message, "Ingested");
            assert_eq!(receipt.document_id.as_deref(), Some("42"));
            assert_eq!(receipt.ingested_files, Some(1));
        }
        other => panic!("unexpected outcome {:?}", other),
    }
}

#[tokio::test]
async fn test_ingest_success_without_message_uses_default() {
    let server = StubServer::respond(200, "{}").await;
    let outcome = ingestor(&server.base_url)
        .ingest("s3://bucket/plan.docx", DocumentKind::General)
        .await;
    assert!(outcome.is_success());
    assert_eq!(outcome.message(), INGEST_SUCCESS_MESSAGE);
}

#[tokio::test]
async fn test_ingest_403_uses_fixed_message() {
    let server = StubServer::respond(403, r#"{"message":"bucket policy denies read"}"#).await;
    let (kind, message) = expect_failure(
        ingestor(&server.base_url)
            .ingest("https://example.com/report.pdf", DocumentKind::General)
            .await,
    );
    assert_eq!(kind, IngestFailureKind::AccessDenied);
    assert_eq!(message, ACCESS_DENIED_MESSAGE);
}

#[tokio::test]
async fn test_ingest_413_uses_fixed_message() {
    let server = StubServer::respond(413, "").await;
    let (kind, message) = expect_failure(
        ingestor(&server.base_url)
            .ingest("https://example.com/huge.pdf", DocumentKind::General)
            .await,
    );
    assert_eq!(kind, IngestFailureKind::PayloadTooLarge);
    assert_eq!(message, PAYLOAD_TOO_LARGE_MESSAGE);
}

#[tokio::test]
async fn test_ingest_other_status_prefers_server_message() {
    let server = StubServer::respond(422, r#"{"message":"Unsupported encoding"}"#).await;
    let (kind, message) = expect_failure(
        ingestor(&server.base_url)
            .ingest("https://example.com/report.txt", DocumentKind::General)
            .await,
    );
    assert_eq!(kind, IngestFailureKind::Upstream);
    assert_eq!(message, "Unsupported encoding");
}

#[tokio::test]
async fn test_ingest_malformed_success_body_is_failure() {
    let server = StubServer::respond(200, "<html>maintenance</html>").await;
    let (kind, message) = expect_failure(
        ingestor(&server.base_url)
            .ingest("https://example.com/report.pdf", DocumentKind::General)
            .await,
    );
    assert_eq!(kind, IngestFailureKind::Upstream);
    assert_eq!(message, INGEST_FALLBACK_MESSAGE);
}

#[tokio::test]
async fn test_ingest_connection_refused() {
    let (kind, message) = expect_failure(
        ingestor(&unreachable_url())
            .ingest("https://example.com/report.pdf", DocumentKind::General)
            .await,
    );
    assert_eq!(kind, IngestFailureKind::Connection);
    assert_eq!(message, CONNECTION_FAILED_MESSAGE);
}

#[tokio::test]
async fn test_ingest_timeout_is_bounded() {
    let server = StubServer::hang().await;
    let client = reqwest::Client::builder()
        .timeout(Duration::from_millis(300))
        .build()
        .unwrap();
    let started = std::time::Instant::now();

    let (kind, message) = expect_failure(
        HttpIngestor::with_client(client, &server.base_url)
            .ingest("https://example.com/report.pdf", DocumentKind::General)
            .await,
    );

    assert!(started.elapsed() < Duration::from_secs(10));
    assert_eq!(kind, IngestFailureKind::Upstream);
    assert_eq!(message, INGEST_FALLBACK_MESSAGE);
}

#[tokio::test]
async fn test_retrieve_returns_fragments_in_order() {
    let server = StubServer::respond(
        200,
        r#"{"results":[{"chunk":"Q3 churn was 4%"},{"chunk":"Top segment: SMB"}]}"#,
    )
    .await;
    let retriever = HttpRetriever::with_client(reqwest::Client::new(), &server.base_url);

    let fragments = retriever
        .retrieve("churn", AssistantMode::SuccessManager)
        .await
        .unwrap();
    let chunks: Vec<_> = fragments.iter().map(|f| f.chunk.as_str()).collect();
    assert_eq!(chunks, vec!["Q3 churn was 4%", "Top segment: SMB"]);

    let requests = server.requests();
    assert_eq!(requests[0].path, "/retrieve");
    assert_eq!(
        requests[0].json(),
        serde_json::json!({"prompt": "churn", "datasetId": "default_dataset"})
    );
}

#[tokio::test]
async fn test_retrieve_missing_results_is_empty_not_error() {
    // A body without `results` is indistinguishable from "no matches".
    let server = StubServer::respond(200, r#"{"status":"ok"}"#).await;
    let retriever = HttpRetriever::with_client(reqwest::Client::new(), &server.base_url);
    let fragments = retriever
        .retrieve("anything", AssistantMode::Persona)
        .await
        .unwrap();
    assert!(fragments.is_empty());
}

#[tokio::test]
async fn test_retrieve_errors() {
    let server = StubServer::respond(500, r#"{"error":"index offline"}"#).await;
    let retriever = HttpRetriever::with_client(reqwest::Client::new(), &server.base_url);
    let err = retriever
        .retrieve("q", AssistantMode::Persona)
        .await
        .unwrap_err();
    assert!(matches!(err, RagDeskError::Retrieval(_)));

    let server = StubServer::respond(200, "not json").await;
    let retriever = HttpRetriever::with_client(reqwest::Client::new(), &server.base_url);
    assert!(retriever.retrieve("q", AssistantMode::Persona).await.is_err());

    let retriever = HttpRetriever::with_client(reqwest::Client::new(), &unreachable_url());
    assert!(retriever.retrieve("q", AssistantMode::Persona).await.is_err());
}

#[tokio::test]
async fn test_completion_request_and_reply() {
    let server = StubServer::respond(
        200,
        r#"{"choices":[{"message":{"role":"assistant","content":"Raise prices 5%."}}]}"#,
    )
    .await;
    let client = llm_client(&server.base_url, Some("sk-test"));

    let reply = client
        .chat_completion(
            vec![ChatMessage::system("sys"), ChatMessage::user("pricing?")],
            AssistantMode::Persona.sampling(),
        )
        .await
        .unwrap();
    assert_eq!(reply.as_deref(), Some("Raise prices 5%."));

    let request = &server.requests()[0];
    assert_eq!(request.path, "/v1/chat/completions");
    assert_eq!(request.header("authorization"), Some("Bearer sk-test"));
    let body = request.json();
    assert_eq!(body["model"], "gpt-4");
    assert_eq!(body["max_tokens"], 1000);
    assert_eq!(body["messages"].as_array().unwrap().len(), 2);
    assert!((body["temperature"].as_f64().unwrap() - 0.9).abs() < 1e-6);
}

#[tokio::test]
async fn test_completion_failures() {
    let server = StubServer::respond(429, r#"{"error":{"message":"rate limited"}}"#).await;
    let client = llm_client(&server.base_url, None);
    let err = client
        .chat_completion(vec![ChatMessage::user("hi")], AssistantMode::SuccessManager.sampling())
        .await
        .unwrap_err();
    assert!(err.to_string().contains("429"));
    assert!(server.requests()[0].header("authorization").is_none());

    let server = StubServer::respond(200, r#"{"choices":[]}"#).await;
    let client = llm_client(&server.base_url, None);
    let err = client
        .chat_completion(vec![ChatMessage::user("hi")], AssistantMode::SuccessManager.sampling())
        .await
        .unwrap_err();
    assert!(matches!(err, RagDeskError::Llm(_)));
}

#[tokio::test]
async fn test_chat_survives_knowledge_base_outage() {
    let rag = StubServer::respond(503, "").await;
    let llm = StubServer::respond(
        200,
        r#"{"choices":[{"message":{"content":"Answer without context."}}]}"#,
    )
    .await;

    let orchestrator = ChatOrchestrator::new(
        Arc::new(HttpRetriever::with_client(reqwest::Client::new(), &rag.base_url)),
        Arc::new(llm_client(&llm.base_url, None)),
    );

    let transcript = vec![ConversationTurn::user("What do customers dislike?")];
    let reply = orchestrator
        .respond(&transcript, AssistantMode::Persona)
        .await
        .unwrap();
    assert_eq!(reply, "Answer without context.");

    assert_eq!(rag.requests()[0].json()["datasetId"], "persona_ai");
    let body = llm.requests()[0].json();
    let system = body["messages"][0]["content"].as_str().unwrap();
    assert_eq!(system, AssistantMode::Persona.system_prompt());
    assert_eq!(body["messages"][1]["content"], "What do customers dislike?");
}

#[tokio::test]
async fn test_chat_injects_retrieved_context() {
    let rag = StubServer::respond(200, r#"{"results":[{"chunk":"Revenue grew 10%"}]}"#).await;
    let llm = StubServer::respond(200, r#"{"choices":[{"message":{"content":"Noted."}}]}"#).await;

    let orchestrator = ChatOrchestrator::new(
        Arc::new(HttpRetriever::with_client(reqwest::Client::new(), &rag.base_url)),
        Arc::new(llm_client(&llm.base_url, None)),
    );
    orchestrator
        .respond(
            &[ConversationTurn::user("How did we do?")],
            AssistantMode::SuccessManager,
        )
        .await
        .unwrap();

    let body = llm.requests()[0].json();
    let system = body["messages"][0]["content"].as_str().unwrap();
    assert!(system.contains("[1] Revenue grew 10%"));
    assert!((body["temperature"].as_f64().unwrap() - 0.7).abs() < 1e-6);
}
