use super::{is_line_break, LineBreaks, Typesetter};
use crate::error::LayoutError;
use crate::extent::Extent;
use crate::metrics::Metrics;
use crate::style::FontConfig;
use crate::units::Pt;

/// A run of characters within a string, counted in `char`s rather than bytes
#[derive(Debug, Default, Copy, Clone, PartialEq, Eq, Hash)]
pub struct CharacterRange {
    pub start: usize,
    pub length: usize,
}

impl CharacterRange {
    pub fn new(start: usize, length: usize) -> CharacterRange {
        CharacterRange { start, length }
    }

    /// One past the last character in the range
    pub fn end(&self) -> usize {
        self.start.saturating_add(self.length)
    }

    pub fn is_empty(&self) -> bool {
        self.length == 0
    }

    /// The part of `text` this range covers. Ranges reaching past the end of the
    /// text are cut short.
    pub fn slice<'t>(&self, text: &'t str) -> &'t str {
        let byte_at = |chars: usize| {
            text.char_indices()
                .nth(chars)
                .map(|(i, _)| i)
                .unwrap_or(text.len())
        };
        let start = byte_at(self.start);
        let end = byte_at(self.end());
        &text[start..end]
    }
}

/// How much of a string fits in a box, and how much of the box it uses.
///
/// The extents can exceed the box by up to a hundred-thousandth of its size,
/// the rounding slack allowed when deciding whether something fits.
#[derive(Debug, Default, Copy, Clone, PartialEq)]
pub struct FitResult {
    /// The characters that fit. Always starts at 0.
    pub range: CharacterRange,
    /// How many columns were started
    pub columns: usize,
    /// The cross-axis room used by those columns, including the line space between
    /// them but not after the last one
    pub cross_extent: Pt,
    /// The writing-axis room used by the last column
    pub last_column_extent: Pt,
}

impl FitResult {
    /// Nothing fits: the first character doesn't fit in the box at all, or the
    /// string is empty
    pub fn is_empty(&self) -> bool {
        self.range.is_empty()
    }
}

/// One column of fitted text, positioned for drawing
#[derive(Debug, Default, Copy, Clone, PartialEq)]
pub struct ColumnLayout {
    /// The characters in this column, including any line break that ended it
    pub range: CharacterRange,
    /// Distance from the right edge of the box to the right edge of this column
    pub cross_offset: Pt,
    /// Width of this column
    pub cross_extent: Pt,
    /// Length of this column, from the top of the box
    pub writing_extent: Pt,
}

#[derive(Debug, Default, Copy, Clone)]
struct Cursor {
    /// room taken by closed columns and the line space following each
    committed: Pt,
    closed: usize,
    /// char index where the open column begins
    column_start: usize,
    width: Pt,
    offset: Pt,
    placed: usize,
    /// writing extent of the most recently closed column
    closed_offset: Pt,
}

impl Cursor {
    /// Width the open column would take if it were closed now. A column holding
    /// nothing but a line break is still a column.
    fn closing_width(&self, font: &FontConfig) -> Pt {
        if self.placed == 0 {
            font.size
        } else {
            self.width
        }
    }

    fn close(&mut self, font: &FontConfig, end: usize) -> ColumnLayout {
        let width = self.closing_width(font);
        let column = ColumnLayout {
            range: CharacterRange::new(self.column_start, end - self.column_start),
            cross_offset: self.committed,
            cross_extent: width,
            writing_extent: self.offset,
        };
        *self = Cursor {
            committed: self.committed + width + font.line_space,
            closed: self.closed + 1,
            column_start: end,
            closed_offset: self.offset,
            ..Cursor::default()
        };
        column
    }

    fn columns(&self) -> usize {
        self.closed + usize::from(self.placed > 0)
    }

    /// Cross room used so far, without the line space after the last column
    fn cross_extent(&self, font: &FontConfig) -> Pt {
        if self.placed > 0 {
            self.committed + self.width
        } else if self.closed > 0 {
            self.committed - font.line_space
        } else {
            Pt::ZERO
        }
    }

    fn last_column_extent(&self) -> Pt {
        if self.placed > 0 {
            self.offset
        } else {
            self.closed_offset
        }
    }
}

/// Set `text` column by column into `extent`, handing each finished column to
/// `on_column`, until a character doesn't fit or the text runs out.
fn typeset<M: Metrics>(
    metrics: &M,
    line_breaks: LineBreaks,
    text: &str,
    font: &FontConfig,
    extent: &Extent,
    on_column: &mut dyn FnMut(ColumnLayout),
) -> FitResult {
    let mut cursor = Cursor::default();
    let mut fitted = 0usize;

    let mut chars = text.chars().enumerate().peekable();
    while let Some((ci, ch)) = chars.next() {
        if line_breaks == LineBreaks::Literal && is_line_break(ch) {
            // a break ends the open column. If that column is empty it becomes a
            // blank column, which needs room of its own.
            if cursor.placed == 0
                && !(cursor.committed + cursor.closing_width(font)).fits_within(extent.cross)
            {
                log::trace!("out of room for a blank column at char {ci}");
                break;
            }
            let mut end = ci + 1;
            if ch == '\r' && chars.next_if(|&(_, next)| next == '\n').is_some() {
                end += 1;
            }
            on_column(cursor.close(font, end));
            fitted = end;
            continue;
        }

        let advance = metrics.advance(ch, font);

        let mut next = cursor;
        let mut wrapped = None;
        if next.placed > 0
            && !(next.offset + font.letter_space + advance.writing).fits_within(extent.writing)
        {
            log::trace!("column {} full at char {ci}", next.columns());
            wrapped = Some(next.close(font, ci));
        }

        if !advance.writing.fits_within(extent.writing) {
            log::trace!(
                "{ch:?} at char {ci} is longer ({}) than a column ({})",
                advance.writing,
                extent.writing
            );
            break;
        }

        let width = next.width.max(advance.cross);
        if !(next.committed + width).fits_within(extent.cross) {
            log::trace!("out of room for columns at char {ci}");
            break;
        }

        next.offset = if next.placed == 0 {
            advance.writing
        } else {
            next.offset + font.letter_space + advance.writing
        };
        next.width = width;
        next.placed += 1;

        cursor = next;
        if let Some(column) = wrapped {
            on_column(column);
        }
        fitted = ci + 1;
    }

    if cursor.placed > 0 {
        on_column(ColumnLayout {
            range: CharacterRange::new(cursor.column_start, fitted - cursor.column_start),
            cross_offset: cursor.committed,
            cross_extent: cursor.width,
            writing_extent: cursor.offset,
        });
    }

    FitResult {
        range: CharacterRange::new(0, fitted),
        columns: cursor.columns(),
        cross_extent: cursor.cross_extent(font),
        last_column_extent: cursor.last_column_extent(),
    }
}

impl<M: Metrics> Typesetter<M> {
    /// Calculate the longest prefix of `text` that fits in `extent` when set in `font`.
    ///
    /// Characters are placed down the current column until the next one would
    /// overrun the column, at which point a new column is started to the left.
    /// Fitting stops at the first character for which there is no room for a
    /// column, or which is longer than a column on its own.
    ///
    /// A box too small for even the first character is not an error: the result
    /// is simply empty (see [`FitResult::is_empty`]). The font and extent are
    /// validated before anything is laid out.
    pub fn fit(
        &self,
        text: &str,
        font: &FontConfig,
        extent: &Extent,
    ) -> Result<FitResult, LayoutError> {
        font.validate()?;
        extent.validate()?;
        Ok(self.fit_unchecked(text, font, extent))
    }

    /// Like [`fit`](Typesetter::fit), but also returns where each fitted column
    /// goes, ordered from right to left
    pub fn columns(
        &self,
        text: &str,
        font: &FontConfig,
        extent: &Extent,
    ) -> Result<Vec<ColumnLayout>, LayoutError> {
        font.validate()?;
        extent.validate()?;
        let mut columns = Vec::new();
        typeset(
            &self.metrics,
            self.line_breaks,
            text,
            font,
            extent,
            &mut |column| columns.push(column),
        );
        Ok(columns)
    }

    pub(crate) fn fit_unchecked(&self, text: &str, font: &FontConfig, extent: &Extent) -> FitResult {
        typeset(
            &self.metrics,
            self.line_breaks,
            text,
            font,
            extent,
            &mut |_| {},
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::metrics::MonospaceMetrics;

    fn tight(size: f32) -> FontConfig {
        FontConfig::default()
            .with_size(size)
            .with_letter_space(0.0)
            .with_line_space(0.0)
    }

    fn extent(writing: f32, cross: f32) -> Extent {
        Extent::new(writing, cross).expect("valid extent")
    }

    #[test]
    fn empty_text_fits_nothing() {
        let ts = Typesetter::new(MonospaceMetrics::default());
        let fit = ts.fit("", &FontConfig::default(), &extent(100.0, 100.0)).unwrap();
        assert_eq!(fit, FitResult::default());
        assert!(fit.is_empty());
    }

    #[test]
    fn character_larger_than_box_fits_nothing() {
        let ts = Typesetter::new(MonospaceMetrics::default());
        let font = tight(20.0);

        let too_short = ts.fit("縦書き", &font, &extent(19.0, 100.0)).unwrap();
        assert!(too_short.is_empty());
        assert_eq!(too_short.columns, 0);

        let too_narrow = ts.fit("縦書き", &font, &extent(100.0, 19.0)).unwrap();
        assert!(too_narrow.is_empty());
        assert_eq!(too_narrow.cross_extent, Pt::ZERO);

        let barely_short = ts.fit("縦", &tight(10.0), &extent(9.9995, 100.0)).unwrap();
        assert!(barely_short.is_empty());
    }

    #[test]
    fn letter_space_only_between_characters() {
        let ts = Typesetter::new(MonospaceMetrics::default());
        let font = tight(10.0).with_letter_space(2.0);

        // exactly one character: no trailing letter space needed
        let single = ts.fit("あ", &font, &extent(10.0, 10.0)).unwrap();
        assert_eq!(single.range.length, 1);
        assert_eq!(single.last_column_extent, Pt(10.0));

        // a full column of four: 4 * 10 + 3 * 2
        let full = ts.fit("あいうえお", &font, &extent(46.0, 10.0)).unwrap();
        assert_eq!(full.range.length, 4);
        assert_eq!(full.last_column_extent, Pt(46.0));

        // one point short of the full column
        let short = ts.fit("あいうえお", &font, &extent(45.0, 10.0)).unwrap();
        assert_eq!(short.range.length, 3);
        assert_eq!(short.last_column_extent, Pt(34.0));
    }

    #[test]
    fn line_space_only_between_columns() {
        let ts = Typesetter::new(MonospaceMetrics::default());
        let font = tight(10.0).with_line_space(5.0);

        // two columns need 10 + 5 + 10
        let two = ts.fit("あいうえ", &font, &extent(20.0, 25.0)).unwrap();
        assert_eq!(two.range.length, 4);
        assert_eq!(two.columns, 2);
        assert_eq!(two.cross_extent, Pt(25.0));

        let one = ts.fit("あいうえ", &font, &extent(20.0, 24.0)).unwrap();
        assert_eq!(one.range.length, 2);
        assert_eq!(one.columns, 1);
        assert_eq!(one.cross_extent, Pt(10.0));
    }

    #[test]
    fn wide_character_widens_its_column() {
        struct WideLatin;
        impl Metrics for WideLatin {
            fn advance(&self, ch: char, font: &FontConfig) -> crate::Advance {
                crate::Advance {
                    writing: font.size,
                    cross: if ch == 'W' { font.size * 2.0 } else { font.size },
                }
            }
        }

        let ts = Typesetter::new(WideLatin);
        let font = tight(10.0);
        // the box is only 15 wide, so a 'W' can't join the first column
        let fit = ts.fit("abW", &font, &extent(100.0, 15.0)).unwrap();
        assert_eq!(fit.range.length, 2);
        assert_eq!(fit.cross_extent, Pt(10.0));

        let fit = ts.fit("abW", &font, &extent(100.0, 20.0)).unwrap();
        assert_eq!(fit.range.length, 3);
        assert_eq!(fit.cross_extent, Pt(20.0));
    }

    #[test]
    fn line_breaks_are_ordinary_by_default() {
        let ts = Typesetter::new(MonospaceMetrics::default());
        let fit = ts.fit("ab\ncd", &tight(10.0), &extent(50.0, 10.0)).unwrap();
        assert_eq!(fit.range.length, 5);
        assert_eq!(fit.columns, 1);
        assert_eq!(fit.last_column_extent, Pt(50.0));
    }

    #[test]
    fn literal_line_breaks_start_new_columns() {
        let ts = Typesetter::new(MonospaceMetrics::default()).with_line_breaks(LineBreaks::Literal);
        let font = tight(10.0);

        let fit = ts.fit("ab\ncd", &font, &extent(50.0, 20.0)).unwrap();
        assert_eq!(fit.range.length, 5);
        assert_eq!(fit.columns, 2);
        assert_eq!(fit.cross_extent, Pt(20.0));
        assert_eq!(fit.last_column_extent, Pt(20.0));

        // no room for the second column: the break is consumed, "cd" is not
        let fit = ts.fit("ab\ncd", &font, &extent(50.0, 10.0)).unwrap();
        assert_eq!(fit.range.length, 3);
        assert_eq!(fit.columns, 1);
    }

    #[test]
    fn crlf_is_one_break_and_blank_lines_take_a_column() {
        let ts = Typesetter::new(MonospaceMetrics::default()).with_line_breaks(LineBreaks::Literal);
        let font = tight(10.0);

        let crlf = ts.fit("a\r\nb", &font, &extent(50.0, 20.0)).unwrap();
        assert_eq!(crlf.range.length, 4);
        assert_eq!(crlf.columns, 2);

        let blank = ts.fit("a\n\nb", &font, &extent(50.0, 30.0)).unwrap();
        assert_eq!(blank.range.length, 4);
        assert_eq!(blank.columns, 3);
        assert_eq!(blank.cross_extent, Pt(30.0));
    }

    #[test]
    fn a_trailing_break_takes_no_room() {
        let ts = Typesetter::new(MonospaceMetrics::default()).with_line_breaks(LineBreaks::Literal);
        let fit = ts.fit("ab\n", &tight(10.0), &extent(50.0, 10.0)).unwrap();
        assert_eq!(fit.range.length, 3);
        assert_eq!(fit.columns, 1);
        assert_eq!(fit.cross_extent, Pt(10.0));
        assert_eq!(fit.last_column_extent, Pt(20.0));
    }

    #[test]
    fn blank_lines_are_kept_for_the_next_box() {
        let ts = Typesetter::new(MonospaceMetrics::default()).with_line_breaks(LineBreaks::Literal);
        let font = tight(10.0);

        // the blank column after "ab" has no room, so its break is left over
        let fit = ts.fit("ab\n\ncd", &font, &extent(50.0, 10.0)).unwrap();
        assert_eq!(fit.range, CharacterRange::new(0, 3));
        assert_eq!(fit.columns, 1);

        let fit = ts.fit("ab\n\n", &font, &extent(50.0, 20.0)).unwrap();
        assert_eq!(fit.range.length, 4);
        assert_eq!(fit.columns, 2);
        assert_eq!(fit.cross_extent, Pt(20.0));
        assert_eq!(fit.last_column_extent, Pt::ZERO);
    }

    #[test]
    fn breaks_alone_make_blank_columns() {
        let ts = Typesetter::new(MonospaceMetrics::default()).with_line_breaks(LineBreaks::Literal);
        let font = tight(10.0).with_line_space(2.0);
        let extent = extent(50.0, 100.0);

        let fit = ts.fit("\n\r\n", &font, &extent).unwrap();
        assert_eq!(fit.range.length, 3);
        assert_eq!(fit.columns, 2);
        assert_eq!(fit.cross_extent, Pt(22.0));

        let columns = ts.columns("\n\r\n", &font, &extent).unwrap();
        assert_eq!(
            columns.iter().map(|c| c.range).collect::<Vec<_>>(),
            vec![CharacterRange::new(0, 1), CharacterRange::new(1, 2)]
        );
        assert_eq!(columns[1].cross_offset, Pt(12.0));
        assert!(columns.iter().all(|c| c.cross_extent == Pt(10.0)));
        assert!(columns.iter().all(|c| c.writing_extent == Pt::ZERO));
    }

    #[test]
    fn columns_are_positioned_right_to_left() {
        let ts = Typesetter::new(MonospaceMetrics::default());
        let font = tight(10.0).with_line_space(4.0);
        let columns = ts.columns("あいうえおか", &font, &extent(20.0, 100.0)).unwrap();
        assert_eq!(columns.len(), 3);
        assert_eq!(columns[0].range, CharacterRange::new(0, 2));
        assert_eq!(columns[0].cross_offset, Pt(0.0));
        assert_eq!(columns[1].range, CharacterRange::new(2, 2));
        assert_eq!(columns[1].cross_offset, Pt(14.0));
        assert_eq!(columns[2].range, CharacterRange::new(4, 2));
        assert_eq!(columns[2].cross_offset, Pt(28.0));
        assert!(columns.iter().all(|c| c.cross_extent == Pt(10.0)));
        assert!(columns.iter().all(|c| c.writing_extent == Pt(20.0)));
    }

    #[test]
    fn columns_agree_with_fit() {
        let ts = Typesetter::new(MonospaceMetrics::default()).with_line_breaks(LineBreaks::Literal);
        let font = FontConfig::default();
        let text = "吾輩は猫である。\n名前はまだ無い。\n\nどこで生れたかとんと見当がつかぬ。\n\n";
        for cross in [20.0, 60.0, 100.0, 110.0, 500.0] {
            let extent = extent(120.0, cross);
            let fit = ts.fit(text, &font, &extent).unwrap();
            let columns = ts.columns(text, &font, &extent).unwrap();
            assert_eq!(columns.len(), fit.columns);
            assert_eq!(columns.first().map(|c| c.range.start), Some(0));
            assert_eq!(columns.last().map(|c| c.range.end()), Some(fit.range.end()));
            for pair in columns.windows(2) {
                assert_eq!(pair[0].range.end(), pair[1].range.start);
            }
            let used = columns.last().map(|c| c.cross_offset + c.cross_extent);
            assert_eq!(used, Some(fit.cross_extent));
        }
    }

    #[test]
    fn invalid_config_is_rejected_up_front() {
        let ts = Typesetter::new(MonospaceMetrics::default());
        let bad_font = FontConfig::default().with_size(0.0);
        let err = ts.fit("あ", &bad_font, &extent(10.0, 10.0)).unwrap_err();
        assert!(matches!(err, LayoutError::InvalidConfig(_)));

        let bad_extent = Extent {
            writing: Pt(10.0),
            cross: Pt(0.0),
        };
        let err = ts.fit("あ", &FontConfig::default(), &bad_extent).unwrap_err();
        assert!(matches!(err, LayoutError::InvalidConfig(_)));
    }

    #[test]
    fn slicing_ranges() {
        let text = "縦書きテキスト";
        assert_eq!(CharacterRange::new(0, 3).slice(text), "縦書き");
        assert_eq!(CharacterRange::new(3, 4).slice(text), "テキスト");
        assert_eq!(CharacterRange::new(5, 10).slice(text), "スト");
        assert_eq!(CharacterRange::new(3, 0).slice(text), "");
    }

    #[test]
    fn range_end_saturates() {
        let range = CharacterRange::new(usize::MAX - 1, 5);
        assert_eq!(range.end(), usize::MAX);
        assert_eq!(range.slice("縦書き"), "");
    }
}
