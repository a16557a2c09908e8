use chrono::{Datelike, Local};
use serenity::model::channel::Message;
use serenity::prelude::Context;

use crate::services::menu_service;

pub async fn execute(ctx: &Context, msg: &Message, args: &[&str]) -> Result<(), String> {
    let config = {
        let data = ctx.data.read().await;
        data.get::<crate::Settings>()
            .cloned()
            .ok_or("Settings not initialized".to_string())?
    };

    let current_page = args.first().map(|s| s.to_lowercase()).unwrap_or_else(|| "help".to_string());
    let footer = menu_service::footer_text(&config.footer_owner, Local::now().year());
    let embed = menu_service::create_menu_embed(&config.title, &current_page, &footer);

    msg.channel_id
        .send_message(ctx, serenity::builder::CreateMessage::default().embed(embed))
        .await
        .map_err(|e| format!("Failed to send help message: {}", e))?;

    Ok(())
}
