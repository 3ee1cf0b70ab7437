//! Pass 2: write values and content bytes directly into the arena, then a
//! finalization step that fills the array/object ref regions.
//!
//! Mirrors the original C `jiffy` library's `jiffy_tree_parse` container
//! stack and scratch row tables, with one fix: the C row comparator's
//! equal-container tie-break is not a total order, so each row here is
//! stamped with a sequence number at creation and sorted by
//! `(container, seq)` instead.

use crate::error::{NumberFlags, Warning};
use crate::parser::ParserCallbacks;

use super::arena::Arena;
use super::ValueType;

struct ArrayRow {
    container: u32,
    seq: u32,
    val: u32,
}

struct ObjectRow {
    container: u32,
    seq: u32,
    key: u32,
    val: u32,
}

/// What the next value-creating event should be recorded as, set by the
/// immediately preceding `*_start` event. At most one is ever pending: the
/// event that consumes it always fires before another can be set.
enum Pending {
    None,
    ArrayElement(u32),
    ObjectKey(u32),
    ObjectValue(u32, u32),
}

pub(super) struct Builder<'a> {
    arena: &'a mut Arena,
    value_cursor: u32,
    content_cursor: u32,
    content_start: u32,
    leaf_index: u32,
    container_stack: Vec<u32>,
    pending: Pending,
    pending_key: Option<u32>,
    array_rows: Vec<ArrayRow>,
    object_rows: Vec<ObjectRow>,
    next_seq: u32,
}

impl<'a> Builder<'a> {
    pub(super) fn new(arena: &'a mut Arena) -> Self {
        Builder {
            arena,
            value_cursor: 0,
            content_cursor: 0,
            content_start: 0,
            leaf_index: 0,
            container_stack: Vec::new(),
            pending: Pending::None,
            pending_key: None,
            array_rows: Vec::new(),
            object_rows: Vec::new(),
            next_seq: 0,
        }
    }

    fn seq(&mut self) -> u32 {
        let s = self.next_seq;
        self.next_seq += 1;
        s
    }

    fn create_value(&mut self, kind: ValueType) -> u32 {
        let idx = self.value_cursor;
        self.value_cursor += 1;
        self.arena.init_value(idx, kind);

        match std::mem::replace(&mut self.pending, Pending::None) {
            Pending::None => {}
            Pending::ArrayElement(container) => {
                let seq = self.seq();
                self.array_rows.push(ArrayRow {
                    container,
                    seq,
                    val: idx,
                });
            }
            Pending::ObjectKey(container) => {
                debug_assert!(self.pending_key.is_none());
                self.pending_key = Some(idx);
                let _ = container;
            }
            Pending::ObjectValue(container, key) => {
                let seq = self.seq();
                self.object_rows.push(ObjectRow {
                    container,
                    seq,
                    key,
                    val: idx,
                });
            }
        }

        idx
    }

    fn current_container(&self) -> u32 {
        *self
            .container_stack
            .last()
            .expect("container-relative event fired outside any open container")
    }

    /// Sort scratch rows into per-container runs and fill the array/object
    /// ref regions, setting each container's `(first_ref, len)`.
    pub(super) fn finish(mut self) {
        self.array_rows.sort_by_key(|r| (r.container, r.seq));
        self.object_rows.sort_by_key(|r| (r.container, r.seq));

        let mut cursor = 0u32;
        let mut i = 0usize;
        while i < self.array_rows.len() {
            let container = self.array_rows[i].container;
            let start = cursor;
            let mut j = i;
            while j < self.array_rows.len() && self.array_rows[j].container == container {
                self.arena.write_array_ref(cursor, self.array_rows[j].val);
                cursor += 1;
                j += 1;
            }
            self.arena.set_value_range(container, start, (j - i) as u32);
            i = j;
        }

        let mut cursor = 0u32;
        let mut i = 0usize;
        while i < self.object_rows.len() {
            let container = self.object_rows[i].container;
            let start = cursor;
            let mut j = i;
            while j < self.object_rows.len() && self.object_rows[j].container == container {
                self.arena.write_object_ref(cursor, self.object_rows[j].key);
                cursor += 1;
                self.arena.write_object_ref(cursor, self.object_rows[j].val);
                cursor += 1;
                j += 1;
            }
            self.arena.set_value_range(container, start, (j - i) as u32);
            i = j;
        }
    }
}

impl<'a> ParserCallbacks for Builder<'a> {
    fn on_null(&mut self) {
        self.create_value(ValueType::Null);
    }
    fn on_true(&mut self) {
        self.create_value(ValueType::True);
    }
    fn on_false(&mut self) {
        self.create_value(ValueType::False);
    }

    fn on_array_start(&mut self) {
        let idx = self.create_value(ValueType::Array);
        self.container_stack.push(idx);
    }
    fn on_array_end(&mut self) {
        self.container_stack.pop();
    }
    fn on_array_element_start(&mut self) {
        self.pending = Pending::ArrayElement(self.current_container());
    }

    fn on_object_start(&mut self) {
        let idx = self.create_value(ValueType::Object);
        self.container_stack.push(idx);
    }
    fn on_object_end(&mut self) {
        self.container_stack.pop();
    }
    fn on_object_key_start(&mut self) {
        self.pending = Pending::ObjectKey(self.current_container());
    }
    fn on_object_value_start(&mut self) {
        let container = self.current_container();
        let key = self
            .pending_key
            .take()
            .expect("on_object_value_start fired without a preceding key");
        self.pending = Pending::ObjectValue(container, key);
    }

    fn on_string_start(&mut self) {
        self.content_start = self.content_cursor;
        self.leaf_index = self.create_value(ValueType::String);
    }
    fn on_string_byte(&mut self, byte: u8) {
        self.arena.write_content_byte(self.content_cursor, byte);
        self.content_cursor += 1;
    }
    fn on_string_end(&mut self) {
        let len = self.content_cursor - self.content_start;
        self.arena
            .set_value_range(self.leaf_index, self.content_start, len);
    }

    fn on_number_start(&mut self) {
        self.content_start = self.content_cursor;
        self.leaf_index = self.create_value(ValueType::Number);
    }
    fn on_number_byte(&mut self, byte: u8) {
        self.arena.write_content_byte(self.content_cursor, byte);
        self.content_cursor += 1;
    }
    fn on_number_end(&mut self, _flags: NumberFlags) {
        let len = self.content_cursor - self.content_start;
        self.arena
            .set_value_range(self.leaf_index, self.content_start, len);
    }

    fn on_warning(&mut self, _warning: Warning) {}
}
