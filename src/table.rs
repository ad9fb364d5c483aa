//! Plain-text grid tables with fixed column widths and word wrapping.

use std::io::{self, Write};

use colored::Colorize;
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

use crate::tokenizer::TokenParser;

const TAB_WIDTH: usize = 4;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Style {
    Plain,
    Header,
    Label,
    Match,
    Mismatch,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Cell {
    pub text: String,
    pub style: Style,
}

impl Cell {
    pub fn new(text: impl Into<String>, style: Style) -> Self {
        Self {
            text: text.into(),
            style,
        }
    }
}

impl From<&str> for Cell {
    fn from(text: &str) -> Self {
        Cell::new(text, Style::Plain)
    }
}

impl From<String> for Cell {
    fn from(text: String) -> Self {
        Cell::new(text, Style::Plain)
    }
}

fn paint(text: &str, style: Style, color: bool) -> String {
    if !color {
        return text.to_string();
    }
    match style {
        Style::Plain => text.to_string(),
        Style::Header => text.bold().to_string(),
        Style::Label => text.cyan().to_string(),
        Style::Match => text.green().to_string(),
        Style::Mismatch => text.red().to_string(),
    }
}

/// Terminal columns taken by `text`; wide CJK characters count twice.
pub fn display_width(text: &str) -> usize {
    UnicodeWidthStr::width(text)
}

fn expand_tabs(line: &str) -> String {
    let mut out = String::with_capacity(line.len());
    let mut column = 0;
    for c in line.chars() {
        if c == '\t' {
            let spaces = TAB_WIDTH - column % TAB_WIDTH;
            out.extend(std::iter::repeat(' ').take(spaces));
            column += spaces;
        } else {
            out.push(c);
            column += c.width().unwrap_or(0);
        }
    }
    out
}

/// Splits `word` so the head fits in `width` columns. The head holds at
/// least one character.
fn split_at_width(word: &str, width: usize) -> (&str, &str) {
    let mut used = 0;
    for (i, c) in word.char_indices() {
        let w = c.width().unwrap_or(0);
        if i > 0 && used + w > width {
            return word.split_at(i);
        }
        used += w;
    }
    (word, "")
}

fn wrap_line(line: &str, width: usize, lines: &mut Vec<String>) {
    let mut current = String::new();
    let mut current_width = 0;
    let mut previous_end = 0;
    for token in TokenParser::parse(line) {
        let gap = &line[previous_end..token.start];
        previous_end = token.start + token.text.len();
        let gap_width = display_width(gap);
        let mut word = token.text;
        let mut word_width = display_width(word);
        if current_width + gap_width + word_width <= width {
            current.push_str(gap);
            current.push_str(word);
            current_width += gap_width + word_width;
            continue;
        }
        // Break here; the gap is dropped at the start of the new line.
        if !current.is_empty() {
            lines.push(std::mem::take(&mut current));
        }
        while word_width > width {
            let (head, rest) = split_at_width(word, width);
            lines.push(head.to_string());
            word = rest;
            word_width = display_width(word);
        }
        current.push_str(word);
        current_width = word_width;
    }
    let tail = &line[previous_end..];
    if current_width + display_width(tail) <= width {
        current.push_str(tail);
    }
    lines.push(current);
}

/// Greedy word wrap at `width` display columns. Spacing inside a line is kept
/// as written (tabs expanded), lines only break at whitespace, and words wider
/// than a line are split. Embedded newlines start a new line. Always returns at
/// least one (possibly empty) line.
pub fn wrap(text: &str, width: usize) -> Vec<String> {
    let width = width.max(1);
    let mut lines = Vec::new();
    for raw in text.split('\n') {
        wrap_line(&expand_tabs(raw.trim_end_matches('\r')), width, &mut lines);
    }
    lines
}

#[derive(Debug, Clone)]
pub struct Table {
    title: Option<String>,
    headers: Vec<Cell>,
    widths: Vec<usize>,
    rows: Vec<Vec<Cell>>,
}

impl Table {
    pub fn new(widths: Vec<usize>) -> Self {
        Self {
            title: None,
            headers: Vec::new(),
            widths,
            rows: Vec::new(),
        }
    }

    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    pub fn with_headers<C: Into<Cell>>(mut self, headers: impl IntoIterator<Item = C>) -> Self {
        self.headers = headers
            .into_iter()
            .map(|h| {
                let mut cell = h.into();
                cell.style = Style::Header;
                cell
            })
            .collect();
        self
    }

    pub fn add_row<C: Into<Cell>>(&mut self, row: impl IntoIterator<Item = C>) {
        self.rows.push(row.into_iter().map(Into::into).collect());
    }

    pub fn rows(&self) -> &[Vec<Cell>] {
        &self.rows
    }

    fn separator(&self, fill: char) -> String {
        let mut line = String::from("+");
        for width in &self.widths {
            line.extend(std::iter::repeat(fill).take(width + 2));
            line.push('+');
        }
        line
    }

    fn push_row(&self, out: &mut Vec<String>, row: &[Cell], color: bool) {
        let wrapped: Vec<Vec<String>> = self
            .widths
            .iter()
            .enumerate()
            .map(|(i, width)| match row.get(i) {
                Some(cell) => wrap(&cell.text, *width),
                None => vec![String::new()],
            })
            .collect();
        let height = wrapped.iter().map(Vec::len).max().unwrap_or(1);
        for line_index in 0..height {
            let mut line = String::from("|");
            for (i, width) in self.widths.iter().enumerate() {
                let segment = wrapped[i].get(line_index).map(String::as_str).unwrap_or("");
                let padding = width.saturating_sub(display_width(segment));
                let padded = format!("{}{}", segment, " ".repeat(padding));
                let style = row.get(i).map(|c| c.style).unwrap_or(Style::Plain);
                line.push(' ');
                line.push_str(&paint(&padded, style, color));
                line.push_str(" |");
            }
            out.push(line);
        }
    }

    pub fn render_lines(&self, color: bool) -> Vec<String> {
        let mut out = Vec::new();
        if let Some(title) = &self.title {
            out.push(paint(title, Style::Header, color));
        }
        out.push(self.separator('-'));
        if !self.headers.is_empty() {
            self.push_row(&mut out, &self.headers, color);
            out.push(self.separator('='));
        }
        for row in &self.rows {
            self.push_row(&mut out, row, color);
            out.push(self.separator('-'));
        }
        out
    }

    pub fn render(&self, color: bool) -> String {
        let mut text = self.render_lines(color).join("\n");
        text.push('\n');
        text
    }

    pub fn write_to<W: Write>(&self, out: &mut W, color: bool) -> io::Result<()> {
        out.write_all(self.render(color).as_bytes())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn wrap_breaks_on_words() {
        assert_eq!(wrap("the quick brown fox", 10), vec!["the quick", "brown fox"]);
    }

    #[test]
    fn wrap_splits_long_words() {
        assert_eq!(wrap("abcdefghij xy", 4), vec!["abcd", "efgh", "ij", "xy"]);
        assert_eq!(wrap("ääääää", 3), vec!["äää", "äää"]);
    }

    #[test]
    fn wrap_empty_gives_one_blank_line() {
        assert_eq!(wrap("", 5), vec![String::new()]);
        assert_eq!(wrap("   ", 5), vec!["   "]);
    }

    #[test]
    fn wrap_keeps_inner_spacing() {
        assert_eq!(wrap("a  b\tc", 20), vec!["a  b    c"]);
        assert_eq!(wrap(" lead  x", 20), vec![" lead  x"]);
        assert_eq!(wrap("aa  bb  cc", 6), vec!["aa  bb", "cc"]);
    }

    #[test]
    fn wrap_honours_embedded_newlines() {
        assert_eq!(wrap("one\r\ntwo", 10), vec!["one", "two"]);
    }

    #[test]
    fn wrap_measures_wide_characters() {
        assert_eq!(wrap("你好世界", 6), vec!["你好世", "界"]);
        assert_eq!(wrap("你好 世界", 5), vec!["你好", "世界"]);
        assert!(wrap("日本語のテキスト", 5)
            .iter()
            .all(|line| display_width(line) <= 5));
    }

    #[test]
    fn wide_cells_keep_borders_aligned() {
        let mut table = Table::new(vec![6, 6]).with_headers(["源", "mt"]);
        table.add_row(["你好世界", "abc"]);
        table.add_row(["ｆｕｌｌ", "混合 mixed"]);
        let lines = table.render_lines(false);
        let border = display_width(&lines[0]);
        assert_eq!(border, 19);
        assert!(lines.iter().all(|line| display_width(line) == border));
        assert!(lines.contains(&"| 你好世 | abc    |".to_string()));
    }

    #[test]
    fn renders_grid_with_headers() {
        let mut table = Table::new(vec![3, 5]).with_headers(["A", "B"]);
        table.add_row(["x", "hello"]);
        table.add_row(["yz", ""]);
        let expected = "\
+-----+-------+
| A   | B     |
+=====+=======+
| x   | hello |
+-----+-------+
| yz  |       |
+-----+-------+
";
        assert_eq!(table.render(false), expected);
    }

    #[test]
    fn wrapped_cells_grow_row_height() {
        let mut table = Table::new(vec![4, 6]).with_title("#1");
        table.add_row(["src", "one two three"]);
        let expected = "\
#1
+------+--------+
| src  | one    |
|      | two    |
|      | three  |
+------+--------+
";
        assert_eq!(table.render(false), expected);
    }

    #[test]
    fn short_rows_render_blank_cells() {
        let mut table = Table::new(vec![2, 2]);
        table.add_row(["a"]);
        assert_eq!(table.render_lines(false)[1], "| a  |    |");
    }
}
