//! Error and warning taxonomy shared by the parser, tree builder, and writer.

use thiserror::Error;

/// Errors that can occur while pushing bytes through a [`JsonParser`](crate::parser::JsonParser).
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParserError {
    /// The input contains a byte that cannot appear at the current position
    /// (e.g. a non-whitespace control character, or a digit where none is
    /// expected).
    #[error("bad byte: `{0:#04x}'")]
    BadByte(u8),

    /// The state stack reached a state this parser does not know how to
    /// handle. This should not happen in practice; it indicates a corrupted
    /// stack (e.g. one shared with another parser instance).
    #[error("bad state")]
    BadState,

    /// A `\` inside a string was followed by a byte that is not a recognized
    /// escape.
    #[error("bad escape")]
    BadEscape,

    /// A `\uXXXX` escape was not followed by exactly four hex digits.
    #[error("bad unicode escape")]
    BadUnicodeEscape,

    /// A `\uXXXX` escape decoded to a code point that cannot be emitted
    /// (currently only ` `).
    #[error("bad unicode code point")]
    BadUnicodeCodepoint,

    /// A leading `0xEF` byte was not followed by a valid UTF-8 BOM suffix.
    #[error("bad UTF-8 byte order mark")]
    BadUtf8Bom,

    /// A leading `0xFE` byte was not followed by a valid UTF-16 BOM suffix.
    #[error("bad UTF-16 byte order mark")]
    BadUtf16Bom,

    /// The state stack underflowed (more pops than pushes). Indicates a
    /// corrupted stack.
    #[error("stack underflow")]
    StackUnderflow,

    /// The state stack ran out of room for another nested container. Raise
    /// the parser's stack capacity to parse more deeply nested input.
    #[error("stack overflow")]
    StackOverflow,

    /// Saw `,` or `]` where an array element was expected.
    #[error("expected array element")]
    ExpectedArrayElement,

    /// Saw something other than `,` or `]` after an array element.
    #[error("expected comma or array end")]
    ExpectedCommaOrArrayEnd,

    /// Saw something other than `"` or `}` where an object key or the end of
    /// the object was expected.
    #[error("expected string or object end")]
    ExpectedStringOrObjectEnd,

    /// Saw something other than `,` or `}` after an object value.
    #[error("expected comma or object end")]
    ExpectedCommaOrObjectEnd,

    /// Saw something other than `"` where an object key was expected (after
    /// a comma).
    #[error("expected object key")]
    ExpectedObjectKey,

    /// Saw something other than `:` after an object key.
    #[error("expected colon")]
    ExpectedColon,

    /// [`fini`](crate::parser::JsonParser::fini) was called but the parser
    /// has not recognized a complete top-level value yet.
    #[error("not done")]
    NotDone,
}

/// Non-fatal conditions the parser reports without aborting the parse.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Warning {
    /// A leading UTF-8 byte order mark (`EF BB BF`) was consumed and
    /// ignored.
    Utf8Bom,

    /// A leading UTF-16 byte order mark (`FE FF` or `FF FE`) was consumed
    /// and ignored.
    Utf16Bom,
}

/// Flags describing the syntactic shape of a just-recognized number,
/// available to [`ParserCallbacks::on_number_end`](crate::parser::ParserCallbacks::on_number_end)
/// so a caller can distinguish an integral literal from a real one without
/// this crate interpreting the number itself (spec Non-goal: no numeric
/// decoding).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct NumberFlags {
    /// `true` if the number contained a `.` fractional part.
    pub has_fraction: bool,
    /// `true` if the number contained an `e`/`E` exponent.
    pub has_exponent: bool,
}

impl NumberFlags {
    /// A number is "integral" (in the JSON-grammar sense, not in the sense
    /// of fitting in any particular machine type) if it has neither a
    /// fractional part nor an exponent.
    pub fn is_integral(&self) -> bool {
        !self.has_fraction && !self.has_exponent
    }
}

/// Errors that can occur while building a [`Tree`](crate::tree::Tree).
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum TreeError {
    /// The underlying parser failed during the scan or parse pass. Wraps
    /// the parser's own error.
    #[error("tree parse failed: {0}")]
    Parse(#[from] ParserError),

    /// [`Tree::new`](crate::tree::Tree::new) pre-scans the input to size its
    /// own parser stack by tracking `{`/`[`/`"` nesting; this fires if
    /// brackets do not balance (so the real parse below would fail anyway,
    /// but the tree cannot yet size a stack to even attempt it).
    #[error("tree stack scan failed")]
    StackScanFailed,

    /// Allocating the tree's single output arena failed.
    #[error("tree output allocation failed")]
    OutputAllocFailed,

    /// Allocating the transient scan/parse scratch space failed.
    #[error("tree scratch allocation failed")]
    ScratchAllocFailed,
}

/// Errors that can occur while driving a [`JsonWriter`](crate::writer::JsonWriter).
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum WriterError {
    /// The call is not valid in the writer's current placement state (e.g.
    /// `array_end` with no open array, a second top-level value without an
    /// enclosing container).
    #[error("bad state")]
    BadState,

    /// A byte passed to `number_data` or `string_data` is not valid at its
    /// position (a non-numeric byte in a number, or a NUL byte in a
    /// string).
    #[error("bad byte: `{0:#04x}'")]
    BadByte(u8),
}
