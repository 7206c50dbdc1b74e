use super::{is_line_break, LineBreaks, Typesetter};
use crate::error::LayoutError;
use crate::extent::Size;
use crate::metrics::Metrics;
use crate::style::FontConfig;
use crate::units::Pt;

/// Split text into the runs between line breaks, treating `"\r\n"` as one
/// break. A run is ended by each break, so consecutive breaks give empty runs,
/// but the text after the last break is only a run if there is some.
fn split_columns(text: &str) -> Vec<&str> {
    let mut columns = Vec::new();
    let mut start = 0usize;
    let mut chars = text.char_indices().peekable();
    while let Some((i, ch)) = chars.next() {
        if !is_line_break(ch) {
            continue;
        }
        columns.push(&text[start..i]);
        start = i + ch.len_utf8();
        if ch == '\r' {
            if let Some(&(j, '\n')) = chars.peek() {
                start = j + 1;
                chars.next();
            }
        }
    }
    if start < text.len() {
        columns.push(&text[start..]);
    }
    columns
}

impl<M: Metrics> Typesetter<M> {
    /// Calculate how much room `text` needs when it isn't constrained to a box.
    ///
    /// The text is set in a single column of unlimited length, so the size is the
    /// length of that column and the width of one column pitch (the widest
    /// character plus the line space). With [`LineBreaks::Literal`] each line break
    /// starts another column: the size is then the longest column by the sum of all
    /// the column pitches.
    pub fn measure(&self, text: &str, font: &FontConfig) -> Result<Size, LayoutError> {
        font.validate()?;
        Ok(self.measure_unchecked(text, font))
    }

    /// Calculate how much room a title needs, set in the font the typesetter's
    /// [`TitleStyle`](crate::TitleStyle) derives from the body font `font`
    pub fn measure_title(&self, title: &str, font: &FontConfig) -> Result<Size, LayoutError> {
        self.title_style.validate()?;
        let title_font = self.title_style.title_font(font);
        self.measure(title, &title_font)
    }

    fn measure_unchecked(&self, text: &str, font: &FontConfig) -> Size {
        match self.line_breaks {
            LineBreaks::Ordinary if text.is_empty() => Size::default(),
            LineBreaks::Ordinary => self.measure_column(text, font),
            LineBreaks::Literal => split_columns(text)
                .into_iter()
                .map(|column| self.measure_column(column, font))
                .fold(Size::default(), |total, column| Size {
                    writing: total.writing.max(column.writing),
                    cross: total.cross + column.cross,
                }),
        }
    }

    fn measure_column(&self, text: &str, font: &FontConfig) -> Size {
        let count = text.chars().count();
        if count == 0 {
            // an empty line still takes up a column
            return Size {
                writing: Pt::ZERO,
                cross: font.size + font.line_space,
            };
        }

        let run = self.metrics.measure_run(text, font);
        Size {
            writing: run.writing + font.letter_space * (count - 1) as f32,
            cross: run.cross + font.line_space,
        }
    }
}
