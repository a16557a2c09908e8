use chrono::{Datelike, Local};
use serenity::model::channel::Message;
use serenity::prelude::Context;

use crate::models::RateQuery;
use crate::services::{date_service, menu_service};
use crate::services::rate_service::{MessageDisplay, RatePanel};

/// Split `[date...] [page]` arguments. A trailing 1-3 digit number is the page.
pub fn parse_rates_args(args: &[&str]) -> (Option<String>, usize) {
    let mut date_parts = args.to_vec();
    let mut page_num = 1;

    if let Some(last) = date_parts.last() {
        let is_page = (1..=3).contains(&last.len()) && last.chars().all(|c| c.is_ascii_digit());
        if is_page {
            if let Ok(num) = last.parse::<usize>() {
                page_num = num;
                date_parts.pop();
            }
        }
    }

    let date_arg = if date_parts.is_empty() {
        None
    } else {
        Some(date_parts.join(" "))
    };

    (date_arg, page_num)
}

pub async fn execute(ctx: &Context, msg: &Message, args: &[&str]) -> Result<(), String> {
    tracing::info!("💱 Rates command called by {} with args: {:?}", msg.author.id, args);

    let today = Local::now().date_naive();
    let (date_arg, page_num) = parse_rates_args(args);

    let query = match date_arg {
        Some(arg) => date_service::parse_date_argument(&arg, today).map_err(|e| {
            tracing::debug!("Rejected date input '{}': {}", arg, e);
            e.to_string()
        })?,
        None => RateQuery::new(today),
    };

    let (client, config) = {
        let data = ctx.data.read().await;
        let client = data
            .get::<crate::RatesApi>()
            .cloned()
            .ok_or("Rates client not initialized".to_string())?;
        let config = data
            .get::<crate::Settings>()
            .cloned()
            .ok_or("Settings not initialized".to_string())?;
        (client, config)
    };

    let mut display = MessageDisplay::new(
        ctx.http.clone(),
        msg.channel_id,
        page_num,
        config.rows_per_page,
        config.title.clone(),
        menu_service::footer_text(&config.footer_owner, today.year()),
    );

    let mut panel = RatePanel::new(client.as_ref(), &mut display, config.date_display);
    let view = panel.load(&query).await?;
    tracing::debug!("Rates for {} shown as table: {}", query.canonical(), view.is_table());

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_args_means_today_first_page() {
        assert_eq!(parse_rates_args(&[]), (None, 1));
    }

    #[test]
    fn test_trailing_number_is_page() {
        assert_eq!(parse_rates_args(&["2025-10-17", "2"]), (Some("2025-10-17".to_string()), 2));
        assert_eq!(parse_rates_args(&["3"]), (None, 3));
    }

    #[test]
    fn test_spaced_date_keeps_year() {
        assert_eq!(
            parse_rates_args(&["17", "10", "2025"]),
            (Some("17 10 2025".to_string()), 1)
        );
    }
}
