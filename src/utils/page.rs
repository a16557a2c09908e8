use serenity::builder::CreateEmbed;

/// A set of embeds shown one at a time
pub struct Page {
    pub pages: Vec<CreateEmbed>,
    pub current_page: usize,
}

impl Page {
    pub fn new(pages: Vec<CreateEmbed>) -> Self {
        Page {
            pages,
            current_page: 0,
        }
    }

    pub fn current_embed(&self) -> Option<&CreateEmbed> {
        self.pages.get(self.current_page)
    }

    /// Move to next page
    pub fn next(&mut self) -> bool {
        if self.current_page + 1 < self.pages.len() {
            self.current_page += 1;
            true
        } else {
            false
        }
    }

    /// Jump to a 1-based page number; false if it does not exist
    pub fn go_to(&mut self, page_num: usize) -> bool {
        if page_num < 1 || page_num > self.pages.len() {
            return false;
        }
        self.current_page = 0;
        for _ in 1..page_num {
            self.next();
        }
        true
    }

    pub fn total_pages(&self) -> usize {
        self.pages.len()
    }

    pub fn is_last(&self) -> bool {
        self.current_page + 1 >= self.pages.len()
    }
}
