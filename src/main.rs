use serenity::async_trait;
use serenity::model::channel::Message;
use serenity::model::gateway::Ready;
use serenity::prelude::*;
use std::sync::Arc;
use tracing::{info, error};
use tracing_subscriber::EnvFilter;

mod api;
mod commands;
mod config;
mod models;
mod services;
mod utils;

use api::rates::RatesClient;
use config::AppConfig;

struct Handler;

struct RatesApi;

impl TypeMapKey for RatesApi {
    type Value = Arc<RatesClient>;
}

struct Settings;

impl TypeMapKey for Settings {
    type Value = Arc<AppConfig>;
}

#[async_trait]
impl EventHandler for Handler {
    async fn message(&self, ctx: Context, msg: Message) {
        commands::handle_message(&ctx, &msg).await;
    }

    async fn ready(&self, _ctx: Context, ready: Ready) {
        info!("{} is connected!", ready.user.name);
    }
}

#[tokio::main]
async fn main() {
    dotenv::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env()
            .add_directive("exrates_bot=debug".parse().unwrap())
            .add_directive("serenity=warn".parse().unwrap()))
        .with_target(true)
        .with_thread_ids(true)
        .init();

    info!("💱 Starting exchange rates bot...");

    let config = match AppConfig::from_env() {
        Ok(c) => c,
        Err(e) => {
            error!("Configuration error: {}", e);
            return;
        }
    };

    info!(
        "Rates API: {} (endpoint: {}, date display: {})",
        config.api_base_url, config.endpoint, config.date_display
    );

    let client = RatesClient::with_base_url(config.api_base_url.clone(), config.endpoint);

    let intents = GatewayIntents::DIRECT_MESSAGES
        | GatewayIntents::MESSAGE_CONTENT
        | GatewayIntents::GUILD_MESSAGES;

    let mut discord = match Client::builder(&config.discord_token, intents)
        .event_handler(Handler)
        .await
    {
        Ok(c) => c,
        Err(e) => {
            error!("Failed to create client: {}", e);
            return;
        }
    };

    {
        let mut data = discord.data.write().await;
        data.insert::<RatesApi>(Arc::new(client));
        data.insert::<Settings>(Arc::new(config));
    }

    if let Err(e) = discord.start().await {
        error!("Client error: {}", e);
    }
}
