pub mod help;
pub mod rates;

use serenity::model::channel::Message;
use serenity::prelude::Context;
use tracing::{debug, warn};

use crate::utils::check_cooldown;

pub async fn handle_message(ctx: &Context, msg: &Message) {
    if msg.author.bot {
        return;
    }

    let parts: Vec<&str> = msg.content.split_whitespace().collect();
    if parts.is_empty() {
        return;
    }

    let command = parts[0];
    let args = &parts[1..];

    if !matches!(command, "$rates" | "$rate" | "$fx" | "$help" | "$menu") {
        return;
    }

    if let Err((remaining, should_warn)) = check_cooldown(msg.author.id, command).await {
        debug!("{} on cooldown for {} ({}s left)", command, msg.author.id, remaining);
        if should_warn {
            let _ = msg.channel_id.send_message(
                ctx,
                serenity::builder::CreateMessage::default().embed(
                    serenity::builder::CreateEmbed::default()
                        .title("Command Cooldown")
                        .description(format!("⏳ Please wait {} seconds before using this command again.", remaining))
                        .color(0xffa500)
                )
            ).await;
        }
        return;
    }

    let result = match command {
        "$rates" | "$rate" | "$fx" => rates::execute(ctx, msg, args).await,
        "$help" | "$menu" => help::execute(ctx, msg, args).await,
        _ => return,
    };

    if let Err(e) = result {
        warn!("Error executing command {}: {}", command, e);

        let embed = serenity::builder::CreateEmbed::default()
            .title("Command Error")
            .description(format!("❌ {}", e))
            .color(0xff0000);

        let _ = msg.channel_id
            .send_message(ctx, serenity::builder::CreateMessage::default().embed(embed))
            .await;
    }
}
