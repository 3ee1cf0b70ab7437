//! A reverse-direction pushdown automaton: accepts structural calls (`null`,
//! `array_start`, `string_data`, ...) and emits well-formed JSON bytes
//! through a [`WriterSink`], enforcing the same placement grammar the
//! parser recognizes but in the opposite direction.
//!
//! Like [`JsonParser`](crate::parser::JsonParser), [`JsonWriter`] never
//! allocates: its placement stack is borrowed from the caller, and every
//! byte it produces is handed straight to the sink.
//!
//! ```
//! use jiffy::writer::{JsonWriter, WriterState, VecSink};
//!
//! let mut stack = [WriterState::Init; 16];
//! let mut sink = VecSink::default();
//! let mut w = JsonWriter::new(&mut stack);
//! w.object_start(&mut sink).unwrap();
//! w.string(b"k", &mut sink).unwrap();
//! w.number(b"1", &mut sink).unwrap();
//! w.object_end(&mut sink).unwrap();
//! w.fini(&mut sink).unwrap();
//! assert_eq!(sink.0, br#"{"k":1}"#);
//! ```

mod sink;
mod state;

pub use sink::{VecSink, WriterSink};
pub use state::WriterState;

use crate::error::WriterError;

/// Progress of a number literal's digit grammar, validated byte-by-byte as
/// `number_data` is called (possibly across several calls).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum NumState {
    Start,
    AfterSign,
    AfterLeadingZero,
    Int,
    AfterDot,
    Frac,
    AfterExp,
    AfterExpSign,
    ExpNum,
}

impl NumState {
    /// Whether a number could legally end here (i.e. has at least one
    /// integer digit, and if a `.` or `e`/`E` was started, at least one
    /// digit follows it too).
    fn is_complete(self) -> bool {
        matches!(
            self,
            NumState::AfterLeadingZero | NumState::Int | NumState::Frac | NumState::ExpNum
        )
    }
}

/// What kind of leaf is currently being written, and its progress. At most
/// one is ever open: strings and numbers don't nest.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Leaf {
    None,
    /// A string is open. `is_key` distinguishes an object key (whose
    /// `string_end` writes `:` and transitions to `ObjectValue`) from a
    /// string used as a value (whose `string_end` behaves like any other
    /// completed value).
    String { is_key: bool },
    Number(NumState),
}

/// A byte-escaping, bytes-out pushdown automaton that accepts structural
/// calls and streams valid JSON to a [`WriterSink`].
///
/// The placement stack is borrowed from the caller for the writer's
/// lifetime: `stack.len()` bounds the maximum container nesting this
/// writer instance can produce. Nesting past that bound fails with
/// [`WriterError::BadState`], same as any other placement violation.
pub struct JsonWriter<'stack> {
    stack: &'stack mut [WriterState],
    depth: usize,
    leaf: Leaf,
    failed: bool,
}

fn escape_byte(byte: u8) -> Option<u8> {
    match byte {
        b'\\' => Some(b'\\'),
        b'/' => Some(b'/'),
        b'"' => Some(b'"'),
        b'\n' => Some(b'n'),
        b'\r' => Some(b'r'),
        b'\t' => Some(b't'),
        0x08 => Some(b'b'),
        0x0C => Some(b'f'),
        0x0B => Some(b'v'),
        _ => None,
    }
}

impl<'stack> JsonWriter<'stack> {
    /// Create a new writer backed by `stack`, which must have room for at
    /// least one frame. The writer starts at [`WriterState::Init`] with a
    /// depth of zero.
    pub fn new(stack: &'stack mut [WriterState]) -> Self {
        stack[0] = WriterState::Init;
        JsonWriter {
            stack,
            depth: 0,
            leaf: Leaf::None,
            failed: false,
        }
    }

    fn state(&self) -> WriterState {
        self.stack[self.depth]
    }

    fn swap(&mut self, state: WriterState) {
        self.stack[self.depth] = state;
    }

    fn push_state(&mut self, state: WriterState) -> Result<(), WriterError> {
        if self.depth + 1 >= self.stack.len() {
            return Err(self.fail());
        }
        self.depth += 1;
        self.stack[self.depth] = state;
        Ok(())
    }

    fn pop_state(&mut self) -> Result<(), WriterError> {
        if self.depth == 0 {
            return Err(self.fail());
        }
        self.depth -= 1;
        Ok(())
    }

    fn fail(&mut self) -> WriterError {
        self.stack[self.depth] = WriterState::Fail;
        self.failed = true;
        WriterError::BadState
    }

    fn check_failed(&self) -> Result<(), WriterError> {
        if self.failed {
            Err(WriterError::BadState)
        } else {
            Ok(())
        }
    }

    /// Check that a value (of any kind) may start here, writing a leading
    /// `,` first if a sibling already preceded it. Does not change state;
    /// the caller transitions state once the value itself is known to be
    /// complete (see [`JsonWriter::leave_value`]), since container values
    /// stay open across many further calls.
    fn enter_value(&mut self, sink: &mut impl WriterSink) -> Result<(), WriterError> {
        match self.state() {
            WriterState::Init | WriterState::ObjectValue => Ok(()),
            WriterState::ArrayStart => Ok(()),
            WriterState::ArrayAfterValue => {
                sink.on_write(b",");
                Ok(())
            }
            _ => Err(self.fail()),
        }
    }

    /// A value just completed in the current frame; advance that frame's
    /// placement state accordingly.
    fn leave_value(&mut self) {
        match self.state() {
            WriterState::Init => self.swap(WriterState::Done),
            WriterState::ArrayStart | WriterState::ArrayAfterValue => {
                self.swap(WriterState::ArrayAfterValue)
            }
            WriterState::ObjectValue => self.swap(WriterState::ObjectAfterValue),
            _ => unreachable!("leave_value called outside a value position"),
        }
    }

    /// Check that a key string may start here, writing a leading `,` first
    /// if a sibling pair already preceded it.
    fn enter_key(&mut self, sink: &mut impl WriterSink) -> Result<(), WriterError> {
        match self.state() {
            WriterState::ObjectKey => Ok(()),
            WriterState::ObjectAfterValue => {
                sink.on_write(b",");
                Ok(())
            }
            _ => Err(self.fail()),
        }
    }

    /// Write the JSON `null` literal.
    pub fn null(&mut self, sink: &mut impl WriterSink) -> Result<(), WriterError> {
        self.check_failed()?;
        self.enter_value(sink)?;
        sink.on_write(b"null");
        self.leave_value();
        Ok(())
    }

    /// Write the JSON `true` literal.
    pub fn r#true(&mut self, sink: &mut impl WriterSink) -> Result<(), WriterError> {
        self.check_failed()?;
        self.enter_value(sink)?;
        sink.on_write(b"true");
        self.leave_value();
        Ok(())
    }

    /// Write the JSON `false` literal.
    pub fn r#false(&mut self, sink: &mut impl WriterSink) -> Result<(), WriterError> {
        self.check_failed()?;
        self.enter_value(sink)?;
        sink.on_write(b"false");
        self.leave_value();
        Ok(())
    }

    /// Start a JSON object. Must be closed with a matching
    /// [`JsonWriter::object_end`].
    pub fn object_start(&mut self, sink: &mut impl WriterSink) -> Result<(), WriterError> {
        self.check_failed()?;
        self.enter_value(sink)?;
        sink.on_write(b"{");
        self.push_state(WriterState::ObjectKey)?;
        Ok(())
    }

    /// Finish the innermost open object.
    pub fn object_end(&mut self, sink: &mut impl WriterSink) -> Result<(), WriterError> {
        self.check_failed()?;
        match self.state() {
            WriterState::ObjectKey | WriterState::ObjectAfterValue => {}
            _ => return Err(self.fail()),
        }
        sink.on_write(b"}");
        self.pop_state()?;
        self.leave_value();
        Ok(())
    }

    /// Start a JSON array. Must be closed with a matching
    /// [`JsonWriter::array_end`].
    pub fn array_start(&mut self, sink: &mut impl WriterSink) -> Result<(), WriterError> {
        self.check_failed()?;
        self.enter_value(sink)?;
        sink.on_write(b"[");
        self.push_state(WriterState::ArrayStart)?;
        Ok(())
    }

    /// Finish the innermost open array.
    pub fn array_end(&mut self, sink: &mut impl WriterSink) -> Result<(), WriterError> {
        self.check_failed()?;
        match self.state() {
            WriterState::ArrayStart | WriterState::ArrayAfterValue => {}
            _ => return Err(self.fail()),
        }
        sink.on_write(b"]");
        self.pop_state()?;
        self.leave_value();
        Ok(())
    }

    /// Start a string: either a value, or (when the current placement
    /// expects one) an object key. Must be closed with
    /// [`JsonWriter::string_end`].
    pub fn string_start(&mut self, sink: &mut impl WriterSink) -> Result<(), WriterError> {
        self.check_failed()?;
        let is_key = match self.state() {
            WriterState::ObjectKey | WriterState::ObjectAfterValue => {
                self.enter_key(sink)?;
                true
            }
            _ => {
                self.enter_value(sink)?;
                false
            }
        };
        sink.on_write(b"\"");
        self.leaf = Leaf::String { is_key };
        Ok(())
    }

    /// Write string content, escaping it as it goes. May be called any
    /// number of times between [`JsonWriter::string_start`] and
    /// [`JsonWriter::string_end`].
    pub fn string_data(&mut self, bytes: &[u8], sink: &mut impl WriterSink) -> Result<(), WriterError> {
        self.check_failed()?;
        if !matches!(self.leaf, Leaf::String { .. }) {
            return Err(self.fail());
        }
        for &byte in bytes {
            if byte == 0 {
                self.failed = true;
                self.swap(WriterState::Fail);
                return Err(WriterError::BadByte(byte));
            }
            match escape_byte(byte) {
                Some(escaped) => sink.on_write(&[b'\\', escaped]),
                None => sink.on_write(&[byte]),
            }
        }
        Ok(())
    }

    /// Finish the open string.
    pub fn string_end(&mut self, sink: &mut impl WriterSink) -> Result<(), WriterError> {
        self.check_failed()?;
        let is_key = match self.leaf {
            Leaf::String { is_key } => is_key,
            _ => return Err(self.fail()),
        };
        sink.on_write(b"\"");
        self.leaf = Leaf::None;
        if is_key {
            sink.on_write(b":");
            self.swap(WriterState::ObjectValue);
        } else {
            self.leave_value();
        }
        Ok(())
    }

    /// One-shot: write a complete string value (or key) in one call.
    pub fn string(&mut self, bytes: &[u8], sink: &mut impl WriterSink) -> Result<(), WriterError> {
        self.string_start(sink)?;
        self.string_data(bytes, sink)?;
        self.string_end(sink)
    }

    /// Start a number value. Must be closed with
    /// [`JsonWriter::number_end`].
    pub fn number_start(&mut self, sink: &mut impl WriterSink) -> Result<(), WriterError> {
        self.check_failed()?;
        self.enter_value(sink)?;
        self.leaf = Leaf::Number(NumState::Start);
        Ok(())
    }

    /// Write number content, validating JSON number syntax byte-by-byte
    /// (optional sign, mandatory digits, optional fraction, optional
    /// exponent). May be called any number of times between
    /// [`JsonWriter::number_start`] and [`JsonWriter::number_end`].
    pub fn number_data(&mut self, bytes: &[u8], sink: &mut impl WriterSink) -> Result<(), WriterError> {
        self.check_failed()?;
        let mut num_state = match self.leaf {
            Leaf::Number(s) => s,
            _ => return Err(self.fail()),
        };
        for &byte in bytes {
            num_state = match (num_state, byte) {
                (NumState::Start, b'+') | (NumState::Start, b'-') => NumState::AfterSign,
                (NumState::Start, b'0') | (NumState::AfterSign, b'0') => {
                    NumState::AfterLeadingZero
                }
                (NumState::Start, b'1'..=b'9') | (NumState::AfterSign, b'1'..=b'9') => {
                    NumState::Int
                }
                (NumState::Int, b'0'..=b'9') => NumState::Int,
                (NumState::AfterLeadingZero, b'.') | (NumState::Int, b'.') => NumState::AfterDot,
                (NumState::AfterLeadingZero, b'e' | b'E') | (NumState::Int, b'e' | b'E') => {
                    NumState::AfterExp
                }
                (NumState::AfterDot, b'0'..=b'9') => NumState::Frac,
                (NumState::Frac, b'0'..=b'9') => NumState::Frac,
                (NumState::Frac, b'e' | b'E') => NumState::AfterExp,
                (NumState::AfterExp, b'+') | (NumState::AfterExp, b'-') => NumState::AfterExpSign,
                (NumState::AfterExp, b'0'..=b'9') => NumState::ExpNum,
                (NumState::AfterExpSign, b'0'..=b'9') => NumState::ExpNum,
                (NumState::ExpNum, b'0'..=b'9') => NumState::ExpNum,
                (_, bad) => {
                    self.leaf = Leaf::Number(num_state);
                    self.failed = true;
                    self.swap(WriterState::Fail);
                    return Err(WriterError::BadByte(bad));
                }
            };
            sink.on_write(&[byte]);
        }
        self.leaf = Leaf::Number(num_state);
        Ok(())
    }

    /// Finish the open number. Fails with [`WriterError::BadState`] if no
    /// digits (or an incomplete fraction/exponent) were written.
    pub fn number_end(&mut self, _sink: &mut impl WriterSink) -> Result<(), WriterError> {
        self.check_failed()?;
        let complete = match self.leaf {
            Leaf::Number(s) => s.is_complete(),
            _ => false,
        };
        self.leaf = Leaf::None;
        if !complete {
            return Err(self.fail());
        }
        self.leave_value();
        Ok(())
    }

    /// One-shot: write a complete number value in one call.
    pub fn number(&mut self, bytes: &[u8], sink: &mut impl WriterSink) -> Result<(), WriterError> {
        self.number_start(sink)?;
        self.number_data(bytes, sink)?;
        self.number_end(sink)
    }

    /// Finalize the writer. Requires depth zero and placement state
    /// `Init` (nothing was ever written) or `Done` (exactly one top-level
    /// value was written and fully closed).
    pub fn fini(&mut self, sink: &mut impl WriterSink) -> Result<(), WriterError> {
        self.check_failed()?;
        if self.depth != 0 || !matches!(self.state(), WriterState::Init | WriterState::Done) {
            return Err(self.fail());
        }
        sink.on_fini();
        Ok(())
    }
}
