use crate::error::LexError;

/// The smallest acceptable base width for space indentation.
const MIN_SPACE_INDENT: usize = 2;

/// The indentation discipline detected for a source file.
///
/// Detection is lazy: the style stays [`Unknown`](IndentStyle::Unknown)
/// until the first line with a nonzero indentation is seen, then becomes
/// fixed for the rest of the file.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum IndentStyle {
    /// No indented line has been seen yet.
    Unknown,
    /// Indentation uses spaces; the base width is a multiple constraint.
    Spaces,
    /// Indentation uses tabs.
    Tabs,
}

/// How the block structure changes at the start of a logical line.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct IndentDelta {
    /// Number of `INDENT` tokens to emit (`0` or `1`).
    pub indents: usize,
    /// Number of `DEDENT` tokens to emit.
    pub dedents: usize,
}

/// Tracks indentation levels and enforces a consistent discipline.
///
/// The tracker holds the stack of open indentation widths, the detected
/// [`IndentStyle`], and the base width for space indentation. Each
/// contentful line's indentation run is fed through [`advance`], which
/// validates it and reports how many `INDENT`/`DEDENT` tokens the driver
/// must emit.
///
/// [`advance`]: IndentTracker::advance
#[derive(Debug)]
pub struct IndentTracker {
    style:       IndentStyle,
    base_indent: usize,
    tab_size:    usize,
    levels:      Vec<usize>,
}

impl IndentTracker {
    /// Creates a tracker with one open level of width `0`.
    ///
    /// `tab_size` is the number of spaces a tab contributes to the
    /// indentation counter.
    #[must_use]
    pub fn new(tab_size: usize) -> Self {
        Self { style: IndentStyle::Unknown,
               base_indent: 0,
               tab_size: tab_size.max(1),
               levels: vec![0] }
    }

    /// Processes the indentation run of a contentful line.
    ///
    /// The run is measured in a single forward pass, accumulating one per
    /// space and [`tab_size`](IndentTracker::new) per tab. The first nonzero
    /// run fixes the file's style; every later run is checked against it.
    ///
    /// # Errors
    /// - [`LexError::MixedIndentation`] when the run contains both tabs and
    ///   spaces.
    /// - [`LexError::InconsistentIndentStyle`] when the run violates the
    ///   fixed style.
    /// - [`LexError::IndentTooNarrow`] when the detected base width is less
    ///   than two spaces.
    /// - [`LexError::IndentNotMultiple`] when a width is not a multiple of
    ///   the base width under space discipline.
    /// - [`LexError::UnalignedDedent`] when a dedent lands between levels.
    ///
    /// # Returns
    /// The number of `INDENT` and `DEDENT` tokens to emit for this line.
    pub fn advance(&mut self, run: &str, line: usize) -> Result<IndentDelta, LexError> {
        let mut width = 0;
        let mut has_spaces = false;
        let mut has_tabs = false;

        for c in run.chars() {
            match c {
                ' ' => {
                    width += 1;
                    has_spaces = true;
                },
                '\t' => {
                    width += self.tab_size;
                    has_tabs = true;
                },
                _ => {},
            }
        }

        if has_spaces && has_tabs {
            return Err(LexError::MixedIndentation { line, column: 1 });
        }

        self.check_style(width, has_spaces, has_tabs, line)?;

        let current = self.levels.last().copied().unwrap_or(0);

        if width > current {
            self.levels.push(width);
            return Ok(IndentDelta { indents: 1,
                                    dedents: 0, });
        }

        let mut dedents = 0;
        while self.levels.last().copied().unwrap_or(0) > width {
            self.levels.pop();
            dedents += 1;
        }

        if self.levels.last().copied().unwrap_or(0) != width {
            return Err(LexError::UnalignedDedent { found: width,
                                                   line,
                                                   column: 1 });
        }

        Ok(IndentDelta { indents: 0,
                         dedents, })
    }

    /// Closes all still-open levels at end of input.
    ///
    /// # Returns
    /// The number of `DEDENT` tokens to emit.
    pub fn close(&mut self) -> usize {
        let open = self.levels.len().saturating_sub(1);
        self.levels.truncate(1);
        open
    }

    /// Detects the style on the first indented line and enforces it on
    /// every later one.
    fn check_style(&mut self,
                   width: usize,
                   has_spaces: bool,
                   has_tabs: bool,
                   line: usize)
                   -> Result<(), LexError> {
        if width == 0 {
            return Ok(());
        }

        match self.style {
            IndentStyle::Unknown => {
                if has_tabs {
                    self.style = IndentStyle::Tabs;
                } else {
                    if width < MIN_SPACE_INDENT {
                        return Err(LexError::IndentTooNarrow { found: width,
                                                               line,
                                                               column: 1 });
                    }
                    self.style = IndentStyle::Spaces;
                    self.base_indent = width;
                }
                Ok(())
            },
            IndentStyle::Spaces => {
                if has_tabs {
                    return Err(LexError::InconsistentIndentStyle { line, column: 1 });
                }
                if width % self.base_indent != 0 {
                    return Err(LexError::IndentNotMultiple { base: self.base_indent,
                                                             found: width,
                                                             line,
                                                             column: 1 });
                }
                Ok(())
            },
            IndentStyle::Tabs => {
                if has_spaces {
                    return Err(LexError::InconsistentIndentStyle { line, column: 1 });
                }
                Ok(())
            },
        }
    }
}
