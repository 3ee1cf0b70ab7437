//! # Jiffy
//!
//! An incremental JSON parser, tree builder, and streaming writer for
//! memory-constrained and embedded environments.
//!
//! All three pieces share one discipline: working memory is caller-owned or
//! precomputed up front. Nothing in this crate allocates on the parsing hot
//! path, and nesting depth is bounded by a stack the caller provides rather
//! than grown on demand.
//!
//! - [`parser`]: a byte-at-a-time, event-emitting push parser backed by an
//!   explicit state stack. Feed it bytes in whatever chunks you have them.
//! - [`tree`]: a two-pass builder that turns a complete byte slice into an
//!   immutable value tree in exactly one heap allocation.
//! - [`writer`]: the inverse of the parser. It accepts structural calls and
//!   streams well-formed JSON bytes to a sink, validating placement and
//!   number/string grammar as it goes.
//!
//! ## Examples
//!
//! ### Push-based parsing
//!
//! The parser never buffers input itself, so you decide how bytes arrive,
//! one chunk or many, as they become available.
//!
//! ```
//! use jiffy::parser::{JsonParser, ParserCallbacks, ParserState};
//!
//! #[derive(Default)]
//! struct CountStrings(u32);
//!
//! impl ParserCallbacks for CountStrings {
//!     fn on_string_start(&mut self) {
//!         self.0 += 1;
//!     }
//! }
//!
//! let mut stack = [ParserState::Init; 16];
//! let mut parser = JsonParser::new(&mut stack);
//! let mut counter = CountStrings::default();
//!
//! for chunk in [br#"{"name": "#.as_slice(), br#""Elvis"}"#.as_slice()] {
//!     parser.push(chunk, &mut counter).unwrap();
//! }
//! parser.fini(&mut counter).unwrap();
//!
//! assert_eq!(counter.0, 2); // the key and the value are both strings
//! ```
//!
//! ### Building a value tree
//!
//! When the whole document is already in memory, [`tree::Tree`] parses it
//! into a read-only value tree with a single allocation, sized by a first
//! pass over the input.
//!
//! ```
//! use jiffy::tree::Tree;
//!
//! let tree = Tree::new(br#"{"name": "Elvis", "age": 42}"#).unwrap();
//! let root = tree.root().unwrap();
//!
//! assert_eq!(root.object_len(), Some(2));
//! let name = root.object_get_value(0).unwrap();
//! assert_eq!(name.string_bytes(), Some(&b"Elvis"[..]));
//! ```
//!
//! ### Re-serializing with the writer
//!
//! The writer is a pushdown automaton in the opposite direction: it accepts
//! structural calls and emits JSON bytes, validating placement (no stray
//! `}`, no value where a key is expected) the same way the parser validates
//! its input. Driving it from parser events reproduces the input losslessly
//! (modulo whitespace and `\uXXXX` re-encoding).
//!
//! ```
//! use jiffy::parser::{JsonParser, ParserCallbacks, ParserState};
//! use jiffy::writer::{JsonWriter, WriterState, WriterSink, VecSink};
//!
//! struct Reserialize<'w, 's> {
//!     writer: &'w mut JsonWriter<'s>,
//!     sink: VecSink,
//! }
//!
//! impl ParserCallbacks for Reserialize<'_, '_> {
//!     fn on_null(&mut self) {
//!         self.writer.null(&mut self.sink).unwrap();
//!     }
//!     fn on_true(&mut self) {
//!         self.writer.r#true(&mut self.sink).unwrap();
//!     }
//!     fn on_false(&mut self) {
//!         self.writer.r#false(&mut self.sink).unwrap();
//!     }
//!     fn on_array_start(&mut self) {
//!         self.writer.array_start(&mut self.sink).unwrap();
//!     }
//!     fn on_array_end(&mut self) {
//!         self.writer.array_end(&mut self.sink).unwrap();
//!     }
//!     fn on_object_start(&mut self) {
//!         self.writer.object_start(&mut self.sink).unwrap();
//!     }
//!     fn on_object_end(&mut self) {
//!         self.writer.object_end(&mut self.sink).unwrap();
//!     }
//!     fn on_string_start(&mut self) {
//!         self.writer.string_start(&mut self.sink).unwrap();
//!     }
//!     fn on_string_byte(&mut self, byte: u8) {
//!         self.writer.string_data(&[byte], &mut self.sink).unwrap();
//!     }
//!     fn on_string_end(&mut self) {
//!         self.writer.string_end(&mut self.sink).unwrap();
//!     }
//!     fn on_number_start(&mut self) {
//!         self.writer.number_start(&mut self.sink).unwrap();
//!     }
//!     fn on_number_byte(&mut self, byte: u8) {
//!         self.writer.number_data(&[byte], &mut self.sink).unwrap();
//!     }
//!     fn on_number_end(&mut self, _flags: jiffy::error::NumberFlags) {
//!         self.writer.number_end(&mut self.sink).unwrap();
//!     }
//! }
//!
//! let mut parser_stack = [ParserState::Init; 16];
//! let mut writer_stack = [WriterState::Init; 16];
//! let mut writer = JsonWriter::new(&mut writer_stack);
//! let mut out = Reserialize { writer: &mut writer, sink: VecSink::default() };
//!
//! jiffy::parser::parse(&mut parser_stack, br#"[1,true,null]"#, &mut out).unwrap();
//! out.writer.fini(&mut out.sink).unwrap();
//!
//! assert_eq!(out.sink.0, br#"[1,true,null]"#);
//! ```

pub mod error;
pub mod parser;
pub mod tree;
pub mod writer;
