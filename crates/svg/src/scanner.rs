//! Low-level tokenizer for path data: numbers, flags and separators.

/// A cursor over path data bytes.
///
/// Path data is ASCII; operating on bytes keeps positions cheap and makes
/// the reported error offsets plain byte indices into the input.
///
/// Every `next_*` method either consumes a complete token or leaves the
/// cursor exactly where it was.
pub(crate) struct Scanner<'l> {
    input: &'l [u8],
    cursor: usize,
}

fn is_separator(byte: u8) -> bool {
    matches!(byte, b' ' | b'\t' | b'\n' | b'\r' | b',')
}

impl<'l> Scanner<'l> {
    pub fn new(input: &'l str) -> Scanner<'l> {
        Scanner {
            input: input.as_bytes(),
            cursor: 0,
        }
    }

    /// Byte offset of the cursor into the input.
    #[inline]
    pub fn position(&self) -> usize {
        self.cursor
    }

    #[inline]
    pub fn at_end(&self) -> bool {
        self.cursor >= self.input.len()
    }

    #[inline]
    pub fn peek(&self) -> Option<u8> {
        self.input.get(self.cursor).copied()
    }

    #[inline]
    pub fn advance(&mut self) {
        self.cursor += 1;
    }

    /// Consumes any run of whitespace and commas.
    pub fn skip_separators(&mut self) {
        while let Some(byte) = self.peek() {
            if !is_separator(byte) {
                break;
            }
            self.advance();
        }
    }

    /// Consumes a number token at the cursor, if there is one.
    ///
    /// Accepts an optional sign, decimal digits with an optional fraction,
    /// and an optional exponent. The exponent marker is only consumed when
    /// at least one exponent digit follows it, so `1e` yields `1` and leaves
    /// the cursor on the `e`. Values that do not fit a finite `f64` are
    /// rejected.
    pub fn next_number(&mut self) -> Option<f64> {
        let start = self.cursor;

        if let Some(b'+') | Some(b'-') = self.peek() {
            self.advance();
        }

        let mut mantissa_digits = 0;
        while let Some(b'0'..=b'9') = self.peek() {
            self.advance();
            mantissa_digits += 1;
        }
        if let Some(b'.') = self.peek() {
            self.advance();
            while let Some(b'0'..=b'9') = self.peek() {
                self.advance();
                mantissa_digits += 1;
            }
        }
        if mantissa_digits == 0 {
            self.cursor = start;
            return None;
        }

        if let Some(b'e') | Some(b'E') = self.peek() {
            let exponent_mark = self.cursor;
            self.advance();
            if let Some(b'+') | Some(b'-') = self.peek() {
                self.advance();
            }
            let mut exponent_digits = 0;
            while let Some(b'0'..=b'9') = self.peek() {
                self.advance();
                exponent_digits += 1;
            }
            if exponent_digits == 0 {
                self.cursor = exponent_mark;
            }
        }

        let text = std::str::from_utf8(&self.input[start..self.cursor]).ok()?;
        match text.parse::<f64>() {
            Ok(value) if value.is_finite() => Some(value),
            _ => {
                self.cursor = start;
                None
            }
        }
    }

    /// Consumes an arc flag: exactly the character `0` or `1`.
    ///
    /// Flags are single characters, never full numbers, which is what lets
    /// `0110` pack two flags and the start of a coordinate together.
    pub fn next_flag(&mut self) -> Option<bool> {
        match self.peek() {
            Some(b'0') => {
                self.advance();
                Some(false)
            }
            Some(b'1') => {
                self.advance();
                Some(true)
            }
            _ => None,
        }
    }
}
