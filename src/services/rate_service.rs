use std::sync::Arc;

use serenity::async_trait;
use serenity::builder::{CreateEmbed, CreateEmbedFooter, CreateMessage, EditMessage};
use serenity::http::Http;
use serenity::model::channel::Message;
use serenity::model::id::ChannelId;
use tracing::{debug, error, info};

use crate::api::rates::{ApiError, RateSource};
use crate::models::{RateQuery, RateRow, RateView};
use crate::services::rate_table_service::{build_table_pages, render_rates, DateDisplay};
use crate::utils::Page;

/// Where a rates view is shown. Each call replaces whatever was shown before.
#[async_trait]
pub trait RateDisplay: Send {
    async fn show(&mut self, view: &RateView) -> Result<(), String>;
}

pub fn failure_message(error: &ApiError) -> String {
    format!(
        "Failed to load currency rates: {}. Please try again later or select a different date.",
        error
    )
}

/// Fetch-then-render flow for one rates request
pub struct RatePanel<'a, S: RateSource + ?Sized, D: RateDisplay> {
    source: &'a S,
    display: &'a mut D,
    date_display: DateDisplay,
}

impl<'a, S: RateSource + ?Sized, D: RateDisplay> RatePanel<'a, S, D> {
    pub fn new(source: &'a S, display: &'a mut D, date_display: DateDisplay) -> Self {
        RatePanel {
            source,
            display,
            date_display,
        }
    }

    /// Show loading, fetch once, then show the table or the error.
    /// Returns the final view.
    pub async fn load(&mut self, query: &RateQuery) -> Result<RateView, String> {
        let date = query.canonical();
        info!("Fetching rates for date: {}", date);

        self.display
            .show(&RateView::Loading { date: query.display() })
            .await?;

        let view = match self.source.fetch_rates(&date).await {
            Ok(records) => {
                debug!("Number of rates: {}", records.len());
                render_rates(&query.display(), &records, self.date_display)
            }
            Err(e) => {
                error!("Error fetching rates for {} (status {:?}): {}", date, e.status(), e);
                RateView::Error {
                    message: failure_message(&e),
                }
            }
        };

        self.display.show(&view).await?;
        Ok(view)
    }
}

/// A single Discord message that is edited through each state
pub struct MessageDisplay {
    http: Arc<Http>,
    channel_id: ChannelId,
    message: Option<Message>,
    page_num: usize,
    rows_per_page: usize,
    title: String,
    footer: String,
}

impl MessageDisplay {
    pub fn new(
        http: Arc<Http>,
        channel_id: ChannelId,
        page_num: usize,
        rows_per_page: usize,
        title: String,
        footer: String,
    ) -> Self {
        MessageDisplay {
            http,
            channel_id,
            message: None,
            page_num,
            rows_per_page,
            title,
            footer,
        }
    }

    fn loading_embed(&self, date: &str) -> CreateEmbed {
        CreateEmbed::default()
            .title(format!("💱 {}", self.title))
            .description(format!("⏳ Loading currency rates for {}...", date))
            .color(0xffa500)
    }

    fn error_embed(&self, message: &str) -> CreateEmbed {
        CreateEmbed::default()
            .title(format!("💱 {}", self.title))
            .description(format!("❌ {}", message))
            .footer(CreateEmbedFooter::new(&self.footer))
            .color(0xff0000)
    }

    fn table_embed(&self, date: &str, rows: &[RateRow]) -> CreateEmbed {
        let tables = build_table_pages(rows, self.rows_per_page);
        let total = tables.len();
        let embeds: Vec<CreateEmbed> = tables
            .into_iter()
            .enumerate()
            .map(|(idx, table)| {
                CreateEmbed::default()
                    .title(format!("💱 {}: {} (base EUR)", self.title, date))
                    .description(table)
                    .footer(CreateEmbedFooter::new(format!(
                        "Page {}/{} • {} currencies • {}",
                        idx + 1,
                        total,
                        rows.len(),
                        self.footer
                    )))
                    .color(0x00ff00)
            })
            .collect();

        let mut page = Page::new(embeds);
        if !page.go_to(self.page_num) {
            return self.error_embed(&format!(
                "Invalid page number. This date has {} page(s)",
                page.total_pages()
            ));
        }

        match page.current_embed() {
            Some(embed) if !page.is_last() => embed.clone().field(
                "More",
                format!("`$rates {} {}`", date, page.current_page + 2),
                false,
            ),
            Some(embed) => embed.clone(),
            None => self.error_embed("Nothing to show"),
        }
    }

    fn embed_for(&self, view: &RateView) -> CreateEmbed {
        match view {
            RateView::Loading { date } => self.loading_embed(date),
            RateView::Error { message } => self.error_embed(message),
            RateView::Table { date, rows } => self.table_embed(date, rows),
        }
    }
}

#[async_trait]
impl RateDisplay for MessageDisplay {
    async fn show(&mut self, view: &RateView) -> Result<(), String> {
        let embed = self.embed_for(view);

        match self.message.as_mut() {
            Some(message) => {
                message
                    .edit(&*self.http, EditMessage::new().embed(embed))
                    .await
                    .map_err(|e| format!("Failed to update rates message: {}", e))?;
            }
            None => {
                let sent = self
                    .channel_id
                    .send_message(&*self.http, CreateMessage::new().embed(embed))
                    .await
                    .map_err(|e| format!("Failed to send rates message: {}", e))?;
                self.message = Some(sent);
            }
        }

        Ok(())
    }
}
