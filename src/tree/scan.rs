//! Pass 1: count what the output arena will need, without allocating.

use crate::error::{NumberFlags, Warning};
use crate::parser::ParserCallbacks;

use super::arena::Counts;

#[derive(Debug, Default)]
pub(super) struct ScanCallbacks {
    num_values: u32,
    num_array_slots: u32,
    num_object_pairs: u32,
    num_content_bytes: u32,
}

impl ScanCallbacks {
    pub(super) fn counts(&self) -> Counts {
        Counts {
            num_values: self.num_values,
            num_array_slots: self.num_array_slots,
            num_object_pairs: self.num_object_pairs,
            num_content_bytes: self.num_content_bytes,
        }
    }

    fn enter_container(&mut self) {
        self.num_values += 1;
    }
}

impl ParserCallbacks for ScanCallbacks {
    fn on_null(&mut self) {
        self.num_values += 1;
    }
    fn on_true(&mut self) {
        self.num_values += 1;
    }
    fn on_false(&mut self) {
        self.num_values += 1;
    }

    fn on_array_start(&mut self) {
        self.enter_container();
    }
    fn on_array_element_start(&mut self) {
        self.num_array_slots += 1;
    }

    fn on_object_start(&mut self) {
        self.enter_container();
    }
    fn on_object_key_start(&mut self) {
        self.num_object_pairs += 1;
    }

    fn on_string_start(&mut self) {
        self.num_values += 1;
    }
    fn on_string_byte(&mut self, _byte: u8) {
        self.num_content_bytes += 1;
    }

    fn on_number_start(&mut self) {
        self.num_values += 1;
    }
    fn on_number_byte(&mut self, _byte: u8) {
        self.num_content_bytes += 1;
    }
    fn on_number_end(&mut self, _flags: NumberFlags) {}

    fn on_warning(&mut self, _warning: Warning) {}
}
