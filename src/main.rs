//! Support triage HTTP service.

use std::sync::Arc;

use anyhow::Context;
use secrecy::ExposeSecret;
use tower::ServiceBuilder;
use tower_http::{timeout::TimeoutLayer, trace::TraceLayer};
use tracing_subscriber::EnvFilter;

use support_triage::adapters::ai::{OpenAIConfig, OpenAIProvider};
use support_triage::adapters::http::{triage_routes, TriageHandlers};
use support_triage::adapters::storage::{NotionConfig, NotionTicketStore};
use support_triage::adapters::triage::{LlmExtractionStrategy, RuleBasedStrategy};
use support_triage::application::AnalyzeEmailHandler;
use support_triage::config::{AiConfig, AppConfig, StoreConfig, TriageStrategyKind};
use support_triage::ports::{AIProvider, TicketStore, TriageStrategy};

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!(error = %e, "failed to install Ctrl+C handler");
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(e) => {
                tracing::error!(error = %e, "failed to install SIGTERM handler");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }
}

fn init_tracing(config: &AppConfig) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&config.server.log_level));

    if config.is_production() {
        tracing_subscriber::fmt().json().with_env_filter(filter).init();
    } else {
        tracing_subscriber::fmt().with_env_filter(filter).init();
    }
}

fn build_strategy(config: &AiConfig) -> anyhow::Result<Arc<dyn TriageStrategy>> {
    match config.strategy {
        TriageStrategyKind::RuleBased => Ok(Arc::new(RuleBasedStrategy::new())),
        TriageStrategyKind::Llm => {
            let api_key = config
                .openai_api_key
                .as_ref()
                .context("llm strategy selected without an OpenAI API key")?;

            let provider = OpenAIProvider::new(
                OpenAIConfig::new(api_key.expose_secret().clone())
                    .with_model(config.model.clone())
                    .with_base_url(config.base_url.clone())
                    .with_timeout(config.timeout()),
            )?;

            let info = provider.provider_info();
            tracing::debug!(provider = %info.name, model = %info.model, "completion provider ready");

            Ok(Arc::new(
                LlmExtractionStrategy::new(Arc::new(provider))
                    .with_temperature(config.temperature)
                    .with_max_tokens(config.max_tokens),
            ))
        }
    }
}

fn build_store(config: &StoreConfig) -> anyhow::Result<Arc<dyn TicketStore>> {
    let store = NotionTicketStore::new(
        NotionConfig::new(config.api_key.expose_secret().clone())
            .with_base_url(config.base_url.clone())
            .with_notion_version(config.notion_version.clone())
            .with_timeout(config.timeout()),
    )?;
    Ok(Arc::new(store))
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = AppConfig::load().context("failed to load configuration")?;
    config.validate().context("invalid configuration")?;

    init_tracing(&config);

    let strategy = build_strategy(&config.ai)?;
    tracing::debug!(strategy = strategy.name(), "triage strategy selected");

    let store = build_store(&config.store)?;
    let handler = AnalyzeEmailHandler::new(strategy, store, config.store.database_id.clone());

    let app = triage_routes(TriageHandlers::new(Arc::new(handler))).layer(
        ServiceBuilder::new()
            .layer(TraceLayer::new_for_http())
            .layer(TimeoutLayer::new(config.server.request_timeout())),
    );

    let addr = config.server.socket_addr()?;
    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .with_context(|| format!("failed to bind {}", addr))?;

    tracing::info!(%addr, "support triage listening");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("server shut down");
    Ok(())
}
