//! A two-pass JSON tree builder: scan the input once to size an output
//! arena exactly, then parse it again straight into that arena, producing
//! an immutable value tree in exactly one heap allocation.
//!
//! ```
//! use jiffy::tree::Tree;
//!
//! let tree = Tree::new(br#"{"a":1,"b":[true,null]}"#).unwrap();
//! let root = tree.root().unwrap();
//! assert_eq!(root.object_len(), Some(2));
//! let b = root.object_get_value(1).unwrap();
//! assert_eq!(b.array_len(), Some(2));
//! ```

mod arena;
mod build;
mod scan;

use crate::error::TreeError;
use crate::parser::{self, ParserState};
use arena::Arena;
use build::Builder;
use scan::ScanCallbacks;

/// The kind of JSON value a [`Value`] handle refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u8)]
pub enum ValueType {
    Null,
    True,
    False,
    Number,
    String,
    Array,
    Object,
}

/// An immutable JSON value tree, materialized in one heap allocation.
///
/// Dropping a `Tree` releases that allocation (and everything reachable
/// from it); there is nothing else to free.
pub struct Tree {
    arena: Arena,
    root: Option<u32>,
}

impl Tree {
    /// Parse `bytes` into a tree, auto-sizing the internal parser stack by
    /// pre-scanning `bytes` for its maximum bracket nesting depth. Fails with
    /// [`TreeError::StackScanFailed`] if brackets do not balance.
    pub fn new(bytes: &[u8]) -> Result<Tree, TreeError> {
        let depth = bracket_depth_scan(bytes)?;
        // Each nesting level can push up to 3 parser stack frames (the
        // value itself, plus an element/value frame and its nested value
        // frame); pad generously since this stack is transient and cheap.
        let capacity = (depth.saturating_mul(3) + 8).max(2);
        let mut stack = vec![ParserState::Init; capacity];
        Tree::new_with_stack(bytes, &mut stack)
    }

    /// Parse `bytes` into a tree using a caller-supplied parser stack,
    /// skipping the bracket pre-scan. `stack` must be large enough for the
    /// deepest container nesting in `bytes`, or parsing fails with
    /// [`crate::error::ParserError::StackOverflow`].
    pub fn new_with_stack(bytes: &[u8], stack: &mut [ParserState]) -> Result<Tree, TreeError> {
        let mut scan = ScanCallbacks::default();
        parser::parse(stack, bytes, &mut scan)?;
        let counts = scan.counts();
        let has_root = counts.num_values > 0;

        let mut arena = Arena::new(counts).ok_or(TreeError::OutputAllocFailed)?;

        let mut builder = Builder::new(&mut arena);
        parser::parse(stack, bytes, &mut builder)?;
        builder.finish();

        Ok(Tree {
            arena,
            root: if has_root { Some(0) } else { None },
        })
    }

    /// The tree's top-level value, or `None` if the input contained none
    /// (the parser itself rejects a truly empty document, so this only
    /// arises in degenerate caller-constructed scans).
    pub fn root(&self) -> Option<Value<'_>> {
        self.root.map(|index| Value { tree: self, index })
    }
}

/// Tracks `{`, `[`, `"` nesting (respecting `\"` inside strings) to size a
/// parser stack without a full parse. Mirrors the original C `jiffy_new`'s
/// pre-scan exactly.
fn bracket_depth_scan(bytes: &[u8]) -> Result<usize, TreeError> {
    let mut depth: i64 = 0;
    let mut max_depth: i64 = 0;
    let mut in_string = false;
    let mut escaped = false;

    for &byte in bytes {
        if in_string {
            if escaped {
                escaped = false;
            } else if byte == b'\\' {
                escaped = true;
            } else if byte == b'"' {
                in_string = false;
            }
            continue;
        }

        match byte {
            b'"' => in_string = true,
            b'{' | b'[' => {
                depth += 1;
                max_depth = max_depth.max(depth);
            }
            b'}' | b']' => {
                depth -= 1;
                if depth < 0 {
                    return Err(TreeError::StackScanFailed);
                }
            }
            _ => {}
        }
    }

    if depth != 0 || in_string {
        return Err(TreeError::StackScanFailed);
    }
    Ok(max_depth as usize)
}

/// A handle to one value inside a [`Tree`]: a tree reference plus an index,
/// the Rust-idiomatic translation of the C API's `jiffy_value_t *` pointer
/// into an arena-and-indices layout.
#[derive(Clone, Copy)]
pub struct Value<'t> {
    tree: &'t Tree,
    index: u32,
}

impl<'t> Value<'t> {
    /// This value's type tag.
    pub fn kind(&self) -> ValueType {
        self.tree.arena.value(self.index).kind
    }

    fn content_bytes(&self) -> &'t [u8] {
        let tree = self.tree;
        let rv = tree.arena.value(self.index);
        tree.arena.content_slice(rv.a, rv.b)
    }

    /// The raw (undecoded) bytes of a number literal, or `None` if this
    /// value is not a number.
    pub fn number_bytes(&self) -> Option<&'t [u8]> {
        (self.kind() == ValueType::Number).then(|| self.content_bytes())
    }

    /// The raw (decoded-escapes-already-applied) bytes of a string literal,
    /// or `None` if this value is not a string.
    pub fn string_bytes(&self) -> Option<&'t [u8]> {
        (self.kind() == ValueType::String).then(|| self.content_bytes())
    }

    /// Number of elements, or `None` if this value is not an array.
    pub fn array_len(&self) -> Option<usize> {
        (self.kind() == ValueType::Array).then(|| self.tree.arena.value(self.index).b as usize)
    }

    /// The `i`th element, or `None` if this value is not an array or `i` is
    /// out of range.
    pub fn array_get(&self, i: usize) -> Option<Value<'t>> {
        let rv = self.tree.arena.value(self.index);
        if rv.kind != ValueType::Array || i >= rv.b as usize {
            return None;
        }
        // Safety: just checked `kind == Array` and `i < rv.b`.
        Some(unsafe { self.array_get_unchecked(i) })
    }

    /// The `i`th element, without checking that this value is an array or
    /// that `i` is in range.
    ///
    /// # Safety
    /// This value must be [`ValueType::Array`] and `i` must be less than
    /// [`Value::array_len`].
    pub unsafe fn array_get_unchecked(&self, i: usize) -> Value<'t> {
        let rv = self.tree.arena.value(self.index);
        let index = self.tree.arena.array_ref(rv.a + i as u32);
        Value { tree: self.tree, index }
    }

    /// Number of key/value pairs, or `None` if this value is not an object.
    pub fn object_len(&self) -> Option<usize> {
        (self.kind() == ValueType::Object).then(|| self.tree.arena.value(self.index).b as usize)
    }

    /// The `i`th pair's key, or `None` if this value is not an object or
    /// `i` is out of range.
    pub fn object_get_key(&self, i: usize) -> Option<Value<'t>> {
        let rv = self.tree.arena.value(self.index);
        if rv.kind != ValueType::Object || i >= rv.b as usize {
            return None;
        }
        // Safety: just checked `kind == Object` and `i < rv.b`.
        Some(unsafe { self.object_get_key_unchecked(i) })
    }

    /// The `i`th pair's key, without checking type or range.
    ///
    /// # Safety
    /// This value must be [`ValueType::Object`] and `i` must be less than
    /// [`Value::object_len`].
    pub unsafe fn object_get_key_unchecked(&self, i: usize) -> Value<'t> {
        let rv = self.tree.arena.value(self.index);
        let index = self.tree.arena.object_ref(rv.a + 2 * i as u32);
        Value { tree: self.tree, index }
    }

    /// The `i`th pair's value, or `None` if this value is not an object or
    /// `i` is out of range.
    pub fn object_get_value(&self, i: usize) -> Option<Value<'t>> {
        let rv = self.tree.arena.value(self.index);
        if rv.kind != ValueType::Object || i >= rv.b as usize {
            return None;
        }
        // Safety: just checked `kind == Object` and `i < rv.b`.
        Some(unsafe { self.object_get_value_unchecked(i) })
    }

    /// The `i`th pair's value, without checking type or range.
    ///
    /// # Safety
    /// This value must be [`ValueType::Object`] and `i` must be less than
    /// [`Value::object_len`].
    pub unsafe fn object_get_value_unchecked(&self, i: usize) -> Value<'t> {
        let rv = self.tree.arena.value(self.index);
        let index = self.tree.arena.object_ref(rv.a + 2 * i as u32 + 1);
        Value { tree: self.tree, index }
    }
}

impl<'t> std::fmt::Debug for Value<'t> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Value").field("kind", &self.kind()).finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn true_literal() {
        let tree = Tree::new(b"true").unwrap();
        assert_eq!(tree.root().unwrap().kind(), ValueType::True);
    }

    #[test]
    fn array_of_numbers() {
        let tree = Tree::new(b"[1,2,3]").unwrap();
        let root = tree.root().unwrap();
        assert_eq!(root.kind(), ValueType::Array);
        assert_eq!(root.array_len(), Some(3));
        assert_eq!(root.array_get(0).unwrap().number_bytes(), Some(&b"1"[..]));
        assert_eq!(root.array_get(1).unwrap().number_bytes(), Some(&b"2"[..]));
        assert_eq!(root.array_get(2).unwrap().number_bytes(), Some(&b"3"[..]));
        assert!(root.array_get(3).is_none());
    }

    #[test]
    fn nested_object() {
        let tree = Tree::new(br#"{"a":1,"b":[true,null]}"#).unwrap();
        let root = tree.root().unwrap();
        assert_eq!(root.object_len(), Some(2));
        assert_eq!(root.object_get_key(0).unwrap().string_bytes(), Some(&b"a"[..]));
        assert_eq!(
            root.object_get_value(0).unwrap().number_bytes(),
            Some(&b"1"[..])
        );
        assert_eq!(root.object_get_key(1).unwrap().string_bytes(), Some(&b"b"[..]));
        let b = root.object_get_value(1).unwrap();
        assert_eq!(b.kind(), ValueType::Array);
        assert_eq!(b.array_len(), Some(2));
        assert_eq!(b.array_get(0).unwrap().kind(), ValueType::True);
        assert_eq!(b.array_get(1).unwrap().kind(), ValueType::Null);
    }

    #[test]
    fn unicode_escape_ascii() {
        let tree = Tree::new(br#""A""#).unwrap();
        assert_eq!(tree.root().unwrap().string_bytes(), Some(&b"A"[..]));
    }

    #[test]
    fn unicode_escape_two_byte_utf8() {
        let tree = Tree::new(br#""é""#).unwrap();
        assert_eq!(
            tree.root().unwrap().string_bytes(),
            Some(&[0xC3, 0xA9][..])
        );
    }

    #[test]
    fn trailing_comma_fails() {
        assert!(Tree::new(b"[1,]").is_err());
    }

    #[test]
    fn unbalanced_brackets_fail_stack_scan() {
        assert_eq!(
            Tree::new(b"[1,2"),
            Err(TreeError::StackScanFailed)
        );
    }

    #[test]
    fn empty_array_and_object() {
        let tree = Tree::new(b"[]").unwrap();
        assert_eq!(tree.root().unwrap().array_len(), Some(0));
        let tree = Tree::new(b"{}").unwrap();
        assert_eq!(tree.root().unwrap().object_len(), Some(0));
    }

    #[test]
    fn array_of_arrays_preserves_order() {
        let tree = Tree::new(b"[[1,2],[3,4,5]]").unwrap();
        let root = tree.root().unwrap();
        assert_eq!(root.array_len(), Some(2));
        assert_eq!(root.array_get(0).unwrap().array_len(), Some(2));
        assert_eq!(root.array_get(1).unwrap().array_len(), Some(3));
        assert_eq!(
            root.array_get(1).unwrap().array_get(2).unwrap().number_bytes(),
            Some(&b"5"[..])
        );
    }

    #[test]
    fn object_preserves_key_order() {
        let tree = Tree::new(br#"{"z":1,"a":2,"m":3}"#).unwrap();
        let root = tree.root().unwrap();
        let keys: Vec<&[u8]> = (0..root.object_len().unwrap())
            .map(|i| root.object_get_key(i).unwrap().string_bytes().unwrap())
            .collect();
        assert_eq!(keys, vec![&b"z"[..], &b"a"[..], &b"m"[..]]);
    }

    #[test]
    fn wrong_accessor_returns_none() {
        let tree = Tree::new(b"1").unwrap();
        let root = tree.root().unwrap();
        assert!(root.string_bytes().is_none());
        assert!(root.array_len().is_none());
        assert!(root.object_len().is_none());
    }
}
