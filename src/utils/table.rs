/// A fixed-width text table rendered inside a Discord code block
pub struct Table {
    headers: Vec<String>,
    rows: Vec<Vec<String>>,
    col_widths: Vec<usize>,
    right_aligned: Vec<bool>,
}

fn display_width(s: &str) -> usize {
    s.chars().count()
}

impl Table {
    /// Create a new table with the given headers
    pub fn new(headers: Vec<&str>) -> Self {
        let col_widths = headers.iter().map(|h| display_width(h)).collect();
        let right_aligned = vec![false; headers.len()];
        let headers = headers.iter().map(|h| h.to_string()).collect();
        Table {
            headers,
            rows: Vec::new(),
            col_widths,
            right_aligned,
        }
    }

    /// Right-align a column (numbers read better that way)
    pub fn align_right(mut self, col: usize) -> Self {
        if let Some(flag) = self.right_aligned.get_mut(col) {
            *flag = true;
        }
        self
    }

    /// Add a row to the table
    pub fn add_row(&mut self, row: Vec<&str>) {
        let row_strings: Vec<String> = row.iter().map(|s| s.to_string()).collect();

        for (i, col) in row_strings.iter().enumerate() {
            if i < self.col_widths.len() {
                self.col_widths[i] = self.col_widths[i].max(display_width(col));
            }
        }

        self.rows.push(row_strings);
    }

    /// Render header, separator and body; the output replaces any earlier rendering
    pub fn render(&self) -> String {
        let mut output = String::from("```\n");

        output.push_str(&self.render_row(&self.headers));
        output.push('\n');

        output.push_str(&self.render_separator());
        output.push('\n');

        for row in &self.rows {
            output.push_str(&self.render_row(row));
            output.push('\n');
        }

        output.push_str("```");
        output
    }

    fn render_row(&self, row: &[String]) -> String {
        let mut cells = Vec::with_capacity(row.len());
        for (i, col) in row.iter().enumerate() {
            if i < self.col_widths.len() {
                let width = self.col_widths[i];
                let cell = if self.right_aligned[i] {
                    format!("{:>width$}", col, width = width)
                } else {
                    format!("{:<width$}", col, width = width)
                };
                cells.push(cell);
            }
        }
        cells.join(" | ").trim_end().to_string()
    }

    fn render_separator(&self) -> String {
        self.col_widths
            .iter()
            .map(|&width| "-".repeat(width))
            .collect::<Vec<_>>()
            .join("-+-")
    }
}
