use reqwest::Client;

use agentgate_core::{ChatRequest, ChatResponse};

/// Send `user_input` to the REST adapter and print the report.
pub async fn run(url: &str, user_input: &str) -> anyhow::Result<()> {
    let client = Client::new();

    let resp = client
        .post(format!("{url}/chat"))
        .json(&ChatRequest {
            user_input: user_input.to_string(),
        })
        .send()
        .await?;

    if !resp.status().is_success() {
        let status = resp.status();
        let body = resp.text().await?;
        anyhow::bail!("Chat request failed ({status}): {body}");
    }

    let result: ChatResponse = resp.json().await?;
    println!("{}", result.result);

    Ok(())
}

/// Probe `/health` and print the body.
pub async fn health(url: &str) -> anyhow::Result<()> {
    let resp = Client::new().get(format!("{url}/health")).send().await?;

    let status = resp.status();
    let body = resp.text().await?;
    if !status.is_success() {
        anyhow::bail!("Unhealthy ({status}): {body}");
    }

    println!("{body}");
    Ok(())
}
