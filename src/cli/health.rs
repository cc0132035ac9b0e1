use anyhow::{Context, Result};

use crate::core::AppConfig;
use crate::service::HttpTutorService;

pub async fn run(config: AppConfig) -> Result<()> {
    let service = HttpTutorService::from_config(&config);
    let health = service
        .health()
        .await
        .with_context(|| format!("Tutoring service at {} is unreachable", service.api_url()))?;

    println!("status: {}", health.status);
    println!("agent initialized: {}", health.agent_initialized);
    println!("tools: {}", health.tools_count);

    Ok(())
}
