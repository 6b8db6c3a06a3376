use std::{
    net::{IpAddr, SocketAddr},
    time::Duration,
};

use anyhow::Context;
use clap::Parser;
use reqwest::Url;
use summarizer_api::{
    inference::InferenceClient, openai::OpenAIClient, tracing::init_tracing_subscriber,
    AppStateBuilder,
};
use tokio::net::TcpListener;

#[derive(Parser)]
#[command(
    name = "summarizer-api",
    about = "HTTP front-end for a text summarization model"
)]
struct Cli {
    /// Interface to bind
    #[arg(long, env = "HOST", default_value = "0.0.0.0")]
    host: IpAddr,

    /// Port to listen on
    #[arg(long, env = "PORT", default_value = "5001")]
    port: u16,

    /// URL of the summarization model's inference endpoint
    #[arg(long, env = "SUMMARIZER_MODEL_ENDPOINT")]
    model_endpoint: Url,

    /// Bearer token for the inference endpoint
    #[arg(long, env = "SUMMARIZER_MODEL_TOKEN")]
    model_token: Option<String>,

    /// Model name, used in logs
    #[arg(long, env = "SUMMARIZER_MODEL_NAME", default_value = InferenceClient::DEFAULT_MODEL_NAME)]
    model_name: String,

    /// Timeout for a single call to either model backend, in seconds
    #[arg(long, env = "REQUEST_TIMEOUT_SECS", default_value = "120")]
    request_timeout_secs: u64,

    /// API key for the chat model behind /summarize-transcript
    #[arg(long, env = "LLM_API_KEY")]
    llm_api_key: Option<String>,

    /// Base URL of an OpenAI compatible chat-completions API
    #[arg(long, env = "LLM_BASE_URL", default_value = OpenAIClient::DEFAULT_BASE_URL)]
    llm_base_url: String,

    /// Chat model used for transcript summaries
    #[arg(long, env = "LLM_MODEL", default_value = OpenAIClient::DEFAULT_MODEL)]
    llm_model: String,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let _ = dotenvy::dotenv();

    let _guard = sentry::init((
        std::env::var("SENTRY_DSN").unwrap_or_default(),
        sentry::ClientOptions {
            release: sentry::release_name!(),
            environment: Some("production".into()),
            ..Default::default()
        },
    ));

    let cli = Cli::parse();
    init_tracing_subscriber()?;

    let mut summarizer = InferenceClient::new(
        cli.model_endpoint.clone(),
        Duration::from_secs(cli.request_timeout_secs),
    )
    .context("Failed to build inference client")?
    .with_model_name(&cli.model_name);

    if let Some(token) = &cli.model_token {
        summarizer = summarizer.with_token(token);
    }

    tracing::info!(
        model = summarizer.model_name(),
        endpoint = %cli.model_endpoint,
        "Summarization model configured"
    );

    let addr = SocketAddr::new(cli.host, cli.port);
    let listener = TcpListener::bind(addr)
        .await
        .with_context(|| format!("Failed to bind {addr}"))?;

    let builder = AppStateBuilder::new().summarizer(summarizer);

    match cli.llm_api_key {
        Some(api_key) => {
            tracing::info!(model = %cli.llm_model, "Transcript summarization enabled");
            let chat = OpenAIClient::new(api_key, Duration::from_secs(cli.request_timeout_secs))
                .context("Failed to build chat client")?
                .with_base_url(cli.llm_base_url)
                .with_model(cli.llm_model);
            let state = builder.transcript_summarizer(chat).build();
            summarizer_api::serve(listener, summarizer_api::router(state)).await
        }
        None => {
            tracing::warn!("LLM_API_KEY not set, /summarize-transcript will answer with errors");
            summarizer_api::serve(listener, summarizer_api::router(builder.build())).await
        }
    }
}
