use crate::error::{NumberFlags, Warning};

/// Event hooks invoked by [`JsonParser`](super::JsonParser) as it recognizes
/// structural boundaries and leaf-value bytes.
///
/// This is the Rust translation of the C API's `jiffy_parser_cbs_t` vtable
/// of optional function pointers: every method has an empty default body,
/// so implementors override only the events they care about. Each method
/// below documents the exact firing order and pairing of its callback.
#[allow(unused_variables)]
pub trait ParserCallbacks {
    /// Fired once, at recognition of a `null` literal.
    fn on_null(&mut self) {}
    /// Fired once, at recognition of a `true` literal.
    fn on_true(&mut self) {}
    /// Fired once, at recognition of a `false` literal.
    fn on_false(&mut self) {}

    /// Fired at the opening `[`.
    fn on_array_start(&mut self) {}
    /// Fired at the closing `]`.
    fn on_array_end(&mut self) {}
    /// Fired before each array element's own events.
    fn on_array_element_start(&mut self) {}
    /// Fired after each array element's own events.
    fn on_array_element_end(&mut self) {}

    /// Fired at the opening `{`.
    fn on_object_start(&mut self) {}
    /// Fired at the closing `}`.
    fn on_object_end(&mut self) {}
    /// Fired before each key's string events.
    fn on_object_key_start(&mut self) {}
    /// Fired at the `:` following a key.
    fn on_object_key_end(&mut self) {}
    /// Fired before each value's own events.
    fn on_object_value_start(&mut self) {}
    /// Fired at the `,` or `}` following a value.
    fn on_object_value_end(&mut self) {}

    /// Fired at the opening `"` of a string (a bare string value or an
    /// object key).
    fn on_string_start(&mut self) {}
    /// Fired once per *decoded* byte of a string: escapes are expanded
    /// before this fires, so this never sees a `\`.
    fn on_string_byte(&mut self, byte: u8) {}
    /// Fired at the closing `"`.
    fn on_string_end(&mut self) {}

    /// Fired on the first byte of a number.
    fn on_number_start(&mut self) {}
    /// Fired once per raw input byte of a number (sign, digits, `.`,
    /// `eE`, exponent sign). The byte that terminates the number is not
    /// included.
    fn on_number_byte(&mut self, byte: u8) {}
    /// Fired at the first byte *after* the number, which is then
    /// reprocessed under the enclosing state. `flags` describes whether a
    /// fractional part and/or exponent were present.
    fn on_number_end(&mut self, flags: NumberFlags) {}

    /// Fired for a recoverable condition (currently: a tolerated leading
    /// byte-order mark). Parsing continues in the same state it was
    /// observed in.
    fn on_warning(&mut self, warning: Warning) {}
}

/// A [`ParserCallbacks`] implementation that ignores every event. Useful as
/// a placeholder, or as a base for counting a subset of events (see
/// [`crate::tree::scan`]).
#[derive(Debug, Default, Clone, Copy)]
pub struct NoopCallbacks;

impl ParserCallbacks for NoopCallbacks {}
