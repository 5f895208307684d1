//! Box-drawn text tables for terminal reports.
//!
//! A [`Table`] is assembled through [`TableBuilder`], which validates the
//! shape of the data up front so that rendering itself cannot fail.

use crate::exceptions::HearthError;
use time::Date;
use unicode_width::UnicodeWidthStr;

pub const ELLIPSIS: &str = "...";
pub const DEFAULT_MAX_LENGTH: usize = 32;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Alignment {
    #[default]
    Left,
    Right,
    Center,
}

/// Pads `text` with spaces to `width` display columns.
///
/// Text that is already at least `width` wide is returned unchanged.
pub fn align(text: &str, width: usize, alignment: Alignment) -> String {
    let total_padding = width.saturating_sub(UnicodeWidthStr::width(text));
    let (left, right) = match alignment {
        Alignment::Left => (0, total_padding),
        Alignment::Right => (total_padding, 0),
        Alignment::Center => {
            let left = total_padding / 2;
            (left, total_padding - left)
        }
    };
    format!("{}{}{}", " ".repeat(left), text, " ".repeat(right))
}

/// Cuts `text` to `max_length` characters and marks the cut with [`ELLIPSIS`].
pub fn truncate(text: &str, max_length: usize) -> String {
    if text.chars().count() <= max_length {
        return text.to_string();
    }
    let mut cut: String = text.chars().take(max_length).collect();
    cut.push_str(ELLIPSIS);
    cut
}

#[derive(Debug, Clone)]
pub struct TableBuilder {
    title: Option<String>,
    show_date: bool,
    rows: Vec<Vec<String>>,
    headers: Vec<String>,
    row_paddings: Option<Vec<usize>>,
    row_alignments: Option<Vec<Alignment>>,
    header_alignments: Option<Vec<Alignment>>,
    wrap_text: bool,
    max_length: usize,
}

impl Default for TableBuilder {
    fn default() -> Self {
        Self {
            title: None,
            show_date: false,
            rows: Vec::new(),
            headers: Vec::new(),
            row_paddings: None,
            row_alignments: None,
            header_alignments: None,
            wrap_text: true,
            max_length: DEFAULT_MAX_LENGTH,
        }
    }
}

impl TableBuilder {
    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    pub fn show_date(mut self, show_date: bool) -> Self {
        self.show_date = show_date;
        self
    }

    pub fn rows<I, R, S>(mut self, rows: I) -> Self
    where
        I: IntoIterator<Item = R>,
        R: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.rows = rows
            .into_iter()
            .map(|row| row.into_iter().map(Into::into).collect())
            .collect();
        self
    }

    pub fn headers<I, S>(mut self, headers: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.headers = headers.into_iter().map(Into::into).collect();
        self
    }

    pub fn row_paddings(mut self, paddings: Vec<usize>) -> Self {
        self.row_paddings = Some(paddings);
        self
    }

    pub fn row_alignments(mut self, alignments: Vec<Alignment>) -> Self {
        self.row_alignments = Some(alignments);
        self
    }

    pub fn header_alignments(mut self, alignments: Vec<Alignment>) -> Self {
        self.header_alignments = Some(alignments);
        self
    }

    pub fn wrap_text(mut self, wrap_text: bool) -> Self {
        self.wrap_text = wrap_text;
        self
    }

    pub fn max_length(mut self, max_length: usize) -> Self {
        self.max_length = max_length;
        self
    }

    /// Validates the table shape and resolves per-column defaults.
    pub fn build(self) -> Result<Table, HearthError> {
        let columns = self
            .rows
            .first()
            .map(Vec::len)
            .unwrap_or(self.headers.len());

        if let Some(pos) = self.rows.iter().position(|row| row.len() != columns) {
            return Err(HearthError::TableConstruction(format!(
                "All rows must have the same number of columns (row {} has {}, expected {})",
                pos,
                self.rows[pos].len(),
                columns
            )));
        }

        if !self.headers.is_empty() && self.headers.len() != columns {
            return Err(HearthError::TableConstruction(format!(
                "Expected {} headers, got {}",
                columns,
                self.headers.len()
            )));
        }

        let row_paddings = per_column("row_paddings", self.row_paddings, columns)?;
        let row_alignments = per_column("row_alignments", self.row_alignments, columns)?;
        let header_alignments = per_column("header_alignments", self.header_alignments, columns)?;

        Ok(Table {
            title: self.title,
            show_date: self.show_date,
            rows: self.rows,
            headers: self.headers,
            row_paddings,
            row_alignments,
            header_alignments,
            wrap_text: self.wrap_text,
            max_length: self.max_length,
        })
    }
}

fn per_column<T: Clone + Default>(
    name: &str,
    values: Option<Vec<T>>,
    columns: usize,
) -> Result<Vec<T>, HearthError> {
    match values {
        None => Ok(vec![T::default(); columns]),
        Some(v) if v.len() == columns => Ok(v),
        Some(v) => Err(HearthError::TableConstruction(format!(
            "{} has {} entries for {} columns",
            name,
            v.len(),
            columns
        ))),
    }
}

#[derive(Debug, Clone)]
pub struct Table {
    title: Option<String>,
    show_date: bool,
    rows: Vec<Vec<String>>,
    headers: Vec<String>,
    row_paddings: Vec<usize>,
    row_alignments: Vec<Alignment>,
    header_alignments: Vec<Alignment>,
    wrap_text: bool,
    max_length: usize,
}

impl Table {
    pub fn builder() -> TableBuilder {
        TableBuilder::default()
    }

    pub fn render(&self) -> String {
        self.render_on(crate::utils::now_local().date())
    }

    /// Renders the table, using `date` for the date line.
    pub fn render_on(&self, date: Date) -> String {
        let rows: Vec<Vec<String>> = if self.wrap_text {
            self.rows
                .iter()
                .map(|row| row.iter().map(|c| truncate(c, self.max_length)).collect())
                .collect()
        } else {
            self.rows.clone()
        };

        let mut widths: Vec<usize> = self
            .row_paddings
            .iter()
            .enumerate()
            .map(|(i, pad)| {
                rows.iter()
                    .map(|row| UnicodeWidthStr::width(row[i].as_str()) + pad)
                    .max()
                    .unwrap_or(0)
            })
            .collect();

        for (width, (header, pad)) in widths
            .iter_mut()
            .zip(self.headers.iter().zip(&self.row_paddings))
        {
            *width = (*width).max(UnicodeWidthStr::width(header.as_str()) + pad);
        }

        let date_line = self.show_date.then(|| format_date(date));
        let banner: Vec<&str> = self
            .title
            .as_deref()
            .into_iter()
            .chain(date_line.as_deref())
            .collect();

        // Widen the last column so the banner fits inside the frame
        let banner_width = banner
            .iter()
            .map(|line| UnicodeWidthStr::width(*line))
            .max()
            .unwrap_or(0);
        let mut inner = inner_width(&widths);
        if banner_width > inner {
            if let Some(last) = widths.last_mut() {
                *last += banner_width - inner;
            }
            inner = banner_width;
        }

        let mut lines = Vec::with_capacity(rows.len() * 2 + 6);
        lines.push(format!("┌{}┐", "┬".repeat(inner)));
        lines.push(format!("├{}┤", "┴".repeat(inner)));

        for line in banner {
            lines.push(format!("│{}│", align(line, inner, Alignment::Center)));
        }

        let has_headers = !self.headers.is_empty();
        if has_headers {
            lines.push(rule('├', '┬', '┤', &widths, inner));
            lines.push(row_line(&self.headers, &widths, &self.header_alignments, inner));
        }

        for (i, row) in rows.iter().enumerate() {
            let join = if i == 0 && !has_headers { '┬' } else { '┼' };
            lines.push(rule('├', join, '┤', &widths, inner));
            lines.push(row_line(row, &widths, &self.row_alignments, inner));
        }

        lines.push(rule('└', '┴', '┘', &widths, inner));

        lines.join("\n")
    }
}

fn format_date(date: Date) -> String {
    let format = time::macros::format_description!("[day]/[month]/[year]");
    date.format(&format).unwrap_or_else(|_| date.to_string())
}

fn inner_width(widths: &[usize]) -> usize {
    if widths.is_empty() {
        return 0;
    }
    widths.iter().map(|w| w + 2).sum::<usize>() + widths.len() - 1
}

fn rule(left: char, join: char, right: char, widths: &[usize], inner: usize) -> String {
    if widths.is_empty() {
        return format!("{}{}{}", left, "─".repeat(inner), right);
    }
    let segments: Vec<String> = widths.iter().map(|w| "─".repeat(w + 2)).collect();
    format!("{}{}{}", left, segments.join(&join.to_string()), right)
}

fn row_line(cells: &[String], widths: &[usize], alignments: &[Alignment], inner: usize) -> String {
    if widths.is_empty() {
        return format!("│{}│", " ".repeat(inner));
    }
    let formatted: Vec<String> = cells
        .iter()
        .zip(widths)
        .zip(alignments)
        .map(|((cell, width), alignment)| format!(" {} ", align(cell, *width, *alignment)))
        .collect();
    format!("│{}│", formatted.join("│"))
}
