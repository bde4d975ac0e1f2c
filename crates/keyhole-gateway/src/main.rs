mod app;
mod cli;
mod error;
mod handlers;
mod model;
mod state;

use crate::app::App;
use crate::cli::CLI;
use crate::state::AppState;
use clap::Parser;
use keyhole_codec::{Codec, CodecSettings};
use keyhole_shortener::{InMemoryRepository, SequenceAllocator, ShortenerService};
use std::sync::Arc;
use tower_http::trace::TraceLayer;
use tracing::info;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt::init();

    let config = CLI::try_parse()?;

    // The codec is built exactly once; a bad alphabet or salt
    // configuration must stop the process before it serves anything.
    let settings = CodecSettings::builder()
        .salt(config.codec_salt)
        .min_length(config.min_code_length)
        .build();
    let codec = Arc::new(Codec::new(settings)?);

    let shortener = Arc::new(ShortenerService::new(
        InMemoryRepository::new(),
        SequenceAllocator::starting_at(config.sequence_start),
        codec,
    ));
    let state = AppState::new(shortener, config.public_base_url);

    let router = App::router(state).layer(TraceLayer::new_for_http());

    let listener = tokio::net::TcpListener::bind(config.listen_addr).await?;
    info!(
        listen_addr = %listener.local_addr()?,
        min_code_length = config.min_code_length,
        sequence_start = config.sequence_start,
        "starting gateway server"
    );

    axum::serve(listener, router).await?;

    Ok(())
}
