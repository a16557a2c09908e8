use serenity::builder::{CreateEmbed, CreateEmbedFooter};

use crate::models::{MenuItem, SubMenuItem};

/// Navigation shared by every bot message. Entries on the same page are
/// highlighted together.
pub const MENU_STRUCTURE: &[MenuItem] = &[
    MenuItem {
        text: "Rates",
        href: Some("$rates"),
        page: Some("rates"),
        submenu: &[],
    },
    MenuItem {
        text: "Dates",
        href: None,
        page: Some("rates"),
        submenu: &[
            SubMenuItem { text: "Today", href: "$rates" },
            SubMenuItem { text: "Pick a date", href: "$rates YYYY-MM-DD" },
            SubMenuItem { text: "Type a date", href: "$rates DD/MM/YYYY" },
            SubMenuItem { text: "Another page", href: "$rates <date> <page>" },
        ],
    },
    MenuItem {
        text: "Help",
        href: Some("$help"),
        page: Some("help"),
        submenu: &[],
    },
];

fn is_active(item: &MenuItem, current_page: &str) -> bool {
    item.page.map_or(false, |page| page.eq_ignore_ascii_case(current_page))
}

/// Render the menu tree as message lines, marking entries for `current_page`
pub fn render_menu(items: &[MenuItem], current_page: &str) -> String {
    let mut lines = Vec::new();

    for item in items {
        let label = if is_active(item, current_page) {
            format!("▶ **{}**", item.text)
        } else {
            format!("• {}", item.text)
        };

        match item.href {
            Some(href) => lines.push(format!("{}: `{}`", label, href)),
            None => lines.push(label),
        }

        for sub in item.submenu {
            lines.push(format!("  ◦ {}: `{}`", sub.text, sub.href));
        }
    }

    lines.join("\n")
}

pub fn footer_text(owner: &str, year: i32) -> String {
    format!("© {} {}. All rights reserved.", year, owner)
}

/// Header, nav and footer in one embed
pub fn create_menu_embed(title: &str, current_page: &str, footer: &str) -> CreateEmbed {
    CreateEmbed::default()
        .title(format!("📖 {}", title))
        .description(render_menu(MENU_STRUCTURE, current_page))
        .footer(CreateEmbedFooter::new(footer))
        .color(0x00b0f4)
}
