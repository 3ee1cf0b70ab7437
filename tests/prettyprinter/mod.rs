use jiffy::tree::{Value, ValueType};

/// Demonstrates using [`jiffy::tree::Tree`]'s value accessors to
/// pretty-print a JSON document. Not a perfect pretty-printer, just
/// enough to exercise every accessor on a realistic tree.
pub struct PrettyPrinter {
    result: String,
    level: usize,
}

impl PrettyPrinter {
    pub fn new() -> Self {
        PrettyPrinter {
            result: String::new(),
            level: 0,
        }
    }

    fn indent(&mut self) {
        for _ in 0..self.level {
            self.result.push_str("  ");
        }
    }

    pub fn print(&mut self, value: Value<'_>) {
        match value.kind() {
            ValueType::Null => self.result.push_str("null"),
            ValueType::True => self.result.push_str("true"),
            ValueType::False => self.result.push_str("false"),
            ValueType::Number => {
                self.result
                    .push_str(std::str::from_utf8(value.number_bytes().unwrap()).unwrap());
            }
            ValueType::String => {
                self.result.push('"');
                self.result
                    .push_str(std::str::from_utf8(value.string_bytes().unwrap()).unwrap());
                self.result.push('"');
            }
            ValueType::Array => {
                let len = value.array_len().unwrap();
                if len == 0 {
                    self.result.push_str("[]");
                    return;
                }
                self.result.push_str("[\n");
                self.level += 1;
                for i in 0..len {
                    self.indent();
                    self.print(value.array_get(i).unwrap());
                    if i + 1 < len {
                        self.result.push(',');
                    }
                    self.result.push('\n');
                }
                self.level -= 1;
                self.indent();
                self.result.push(']');
            }
            ValueType::Object => {
                let len = value.object_len().unwrap();
                if len == 0 {
                    self.result.push_str("{}");
                    return;
                }
                self.result.push_str("{\n");
                self.level += 1;
                for i in 0..len {
                    self.indent();
                    self.print(value.object_get_key(i).unwrap());
                    self.result.push_str(": ");
                    self.print(value.object_get_value(i).unwrap());
                    if i + 1 < len {
                        self.result.push(',');
                    }
                    self.result.push('\n');
                }
                self.level -= 1;
                self.indent();
                self.result.push('}');
            }
        }
    }

    pub fn get_result(&self) -> &str {
        &self.result
    }
}
