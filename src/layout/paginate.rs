use super::{CharacterRange, TitledFit, Typesetter};
use crate::error::LayoutError;
use crate::extent::Extent;
use crate::metrics::Metrics;
use crate::style::FontConfig;
use std::iter::FusedIterator;

/// A lazy sequence of pages covering a string, produced by
/// [`Typesetter::paginate`].
///
/// Each item is the range of characters on one page. The ranges are in order,
/// don't overlap, and leave no gaps. If a character can't fit on a page even by
/// itself, a single [`LayoutError::UnfittableCharacter`] is produced and the
/// sequence ends.
///
/// Pages only borrow their inputs, so they can be cloned to lay out the same
/// text again, or dropped part way through.
pub struct Pages<'a, M> {
    typesetter: &'a Typesetter<M>,
    text: &'a str,
    font: FontConfig,
    extent: Extent,
    start: usize,
    start_byte: usize,
    offset: usize,
    byte_offset: usize,
    page: usize,
    failed: bool,
}

impl<M> Clone for Pages<'_, M> {
    fn clone(&self) -> Self {
        Pages {
            typesetter: self.typesetter,
            text: self.text,
            font: self.font,
            extent: self.extent,
            start: self.start,
            start_byte: self.start_byte,
            offset: self.offset,
            byte_offset: self.byte_offset,
            page: self.page,
            failed: self.failed,
        }
    }
}

impl<'a, M: Metrics> Pages<'a, M> {
    /// The character offset the next page will start at
    pub fn offset(&self) -> usize {
        self.offset
    }

    /// Go back to the first page
    pub fn restart(&mut self) {
        self.offset = self.start;
        self.byte_offset = self.start_byte;
        self.page = 0;
        self.failed = false;
    }

    /// Lay out every remaining page, stopping at the first unfittable character
    pub fn collect_ranges(self) -> Result<Vec<CharacterRange>, LayoutError> {
        self.collect()
    }
}

impl<M: Metrics> Iterator for Pages<'_, M> {
    type Item = Result<CharacterRange, LayoutError>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.failed || self.byte_offset >= self.text.len() {
            return None;
        }

        let rest = &self.text[self.byte_offset..];
        let fit = self.typesetter.fit_unchecked(rest, &self.font, &self.extent);

        if fit.is_empty() {
            self.failed = true;
            let character = rest.chars().next()?;
            log::warn!(
                "page {} can't fit {character:?} at offset {}",
                self.page,
                self.offset
            );
            return Some(Err(LayoutError::UnfittableCharacter {
                offset: self.offset,
                character,
            }));
        }

        let range = CharacterRange::new(self.offset, fit.range.length);
        self.byte_offset += rest
            .char_indices()
            .nth(fit.range.length)
            .map(|(i, _)| i)
            .unwrap_or(rest.len());
        self.offset = range.end();
        log::debug!(
            "page {}: characters {}..{} in {} columns",
            self.page,
            range.start,
            range.end(),
            fit.columns
        );
        self.page += 1;

        Some(Ok(range))
    }
}

impl<M: Metrics> FusedIterator for Pages<'_, M> {}

impl<M: Metrics> Typesetter<M> {
    /// Split `text` into pages, each holding as much as fits in `extent`.
    ///
    /// Pages are laid out lazily, one per call to `next`. The font and extent are
    /// validated up front.
    pub fn paginate<'a>(
        &'a self,
        text: &'a str,
        font: &FontConfig,
        extent: &Extent,
    ) -> Result<Pages<'a, M>, LayoutError> {
        self.paginate_from(text, 0, font, extent)
    }

    /// Split `text` into pages, starting at the character offset `start` rather
    /// than at the beginning, e.g. to continue after a page laid out some other way
    pub fn paginate_from<'a>(
        &'a self,
        text: &'a str,
        start: usize,
        font: &FontConfig,
        extent: &Extent,
    ) -> Result<Pages<'a, M>, LayoutError> {
        font.validate()?;
        extent.validate()?;

        let start_byte = match text.char_indices().nth(start) {
            Some((i, _)) => i,
            None if start == text.chars().count() => text.len(),
            None => {
                return Err(LayoutError::invalid(format!(
                    "pagination start {start} is past the end of the text"
                )))
            }
        };

        Ok(Pages {
            typesetter: self,
            text,
            font: *font,
            extent: *extent,
            start,
            start_byte,
            offset: start,
            byte_offset: start_byte,
            page: 0,
            failed: false,
        })
    }

    /// Lay out a titled first page, then split the rest of the body into plain pages.
    ///
    /// The title must fit on the first page in its entirety; a title that doesn't
    /// is rejected as an invalid configuration.
    pub fn paginate_titled<'a>(
        &'a self,
        title: &str,
        body: &'a str,
        font: &FontConfig,
        extent: &Extent,
    ) -> Result<(TitledFit, Pages<'a, M>), LayoutError> {
        let first = self.fit_titled(title, body, font, extent)?;
        let title_length = title.chars().count();
        if first.title.range.length < title_length {
            return Err(LayoutError::invalid(format!(
                "title needs more than one page ({} of {} characters fit)",
                first.title.range.length, title_length
            )));
        }
        let rest = self.paginate_from(body, first.body.range.length, font, extent)?;
        Ok((first, rest))
    }
}
