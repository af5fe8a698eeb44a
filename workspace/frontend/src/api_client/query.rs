use common::{QueryRequest, QueryResponse};

/// Submit a free-text question to the query service.
///
/// The response shape is consumed, not validated; whatever subset of
/// fields the service returns is rendered. Errors are returned for the
/// caller to convert into a transcript entry, never retried.
pub async fn submit_query(prompt: &str) -> Result<QueryResponse, String> {
    log::info!("Submitting query: {}", prompt);
    let request = QueryRequest {
        prompt: prompt.to_string(),
    };
    crate::api_client::post("/query", &request).await
}
