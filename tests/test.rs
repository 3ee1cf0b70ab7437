use jiffy::error::TreeError;
use jiffy::tree::{Tree, Value, ValueType};
use jiffy::writer::{JsonWriter, VecSink, WriterSink};

mod prettyprinter;

#[test]
fn simple_object() {
    let json = r#"{"name": "Elvis", "age": 42}"#;
    let tree = Tree::new(json.as_bytes()).unwrap();

    let mut printer = prettyprinter::PrettyPrinter::new();
    printer.print(tree.root().unwrap());

    assert_eq!(
        printer.get_result(),
        "{\n  \"name\": \"Elvis\",\n  \"age\": 42\n}"
    );
}

#[test]
fn nested_structure() {
    let json = r#"{"items": [1, 2, {"nested": true}], "empty": {}, "list": []}"#;
    let tree = Tree::new(json.as_bytes()).unwrap();

    let mut printer = prettyprinter::PrettyPrinter::new();
    printer.print(tree.root().unwrap());

    // just exercise every branch without panicking and produce something
    // that round-trips through the tree accessors again below.
    assert!(printer.get_result().contains("\"nested\": true"));
}

/// Write `value` to `writer`/`sink` by depth-first traversal: wiring a tree
/// walk (or, equivalently, parser events) straight into the writer's
/// structural calls reproduces the original input.
fn write_value(value: Value<'_>, writer: &mut JsonWriter<'_>, sink: &mut impl WriterSink) {
    match value.kind() {
        ValueType::Null => writer.null(sink).unwrap(),
        ValueType::True => writer.r#true(sink).unwrap(),
        ValueType::False => writer.r#false(sink).unwrap(),
        ValueType::Number => writer.number(value.number_bytes().unwrap(), sink).unwrap(),
        ValueType::String => writer.string(value.string_bytes().unwrap(), sink).unwrap(),
        ValueType::Array => {
            writer.array_start(sink).unwrap();
            for i in 0..value.array_len().unwrap() {
                write_value(value.array_get(i).unwrap(), writer, sink);
            }
            writer.array_end(sink).unwrap();
        }
        ValueType::Object => {
            writer.object_start(sink).unwrap();
            for i in 0..value.object_len().unwrap() {
                write_value(value.object_get_key(i).unwrap(), writer, sink);
                write_value(value.object_get_value(i).unwrap(), writer, sink);
            }
            writer.object_end(sink).unwrap();
        }
    }
}

fn reserialize(json: &[u8]) -> Vec<u8> {
    let tree = Tree::new(json).unwrap();
    let mut stack = [jiffy::writer::WriterState::Init; 64];
    let mut writer = JsonWriter::new(&mut stack);
    let mut sink = VecSink::default();
    if let Some(root) = tree.root() {
        write_value(root, &mut writer, &mut sink);
    }
    writer.fini(&mut sink).unwrap();
    sink.0
}

fn assert_structurally_equal(a: Value<'_>, b: Value<'_>) {
    assert_eq!(a.kind(), b.kind());
    match a.kind() {
        ValueType::Number => assert_eq!(a.number_bytes(), b.number_bytes()),
        ValueType::String => assert_eq!(a.string_bytes(), b.string_bytes()),
        ValueType::Array => {
            assert_eq!(a.array_len(), b.array_len());
            for i in 0..a.array_len().unwrap() {
                assert_structurally_equal(a.array_get(i).unwrap(), b.array_get(i).unwrap());
            }
        }
        ValueType::Object => {
            assert_eq!(a.object_len(), b.object_len());
            for i in 0..a.object_len().unwrap() {
                assert_structurally_equal(
                    a.object_get_key(i).unwrap(),
                    b.object_get_key(i).unwrap(),
                );
                assert_structurally_equal(
                    a.object_get_value(i).unwrap(),
                    b.object_get_value(i).unwrap(),
                );
            }
        }
        ValueType::Null | ValueType::True | ValueType::False => {}
    }
}

#[test]
fn round_trip_through_writer_reparses_identically() {
    for json in [
        r#"{"a":1,"b":[true,null,false],"c":{"d":"e"}}"#.as_bytes(),
        br#"[1,2.5,-3,4e10,"hi there",null]"#.as_slice(),
        br#"{}"#.as_slice(),
        br#"[]"#.as_slice(),
        br#""just a string""#.as_slice(),
        br#"12345"#.as_slice(),
    ] {
        let reserialized = reserialize(json);
        let original = Tree::new(json).unwrap();
        let roundtripped = Tree::new(&reserialized).unwrap();
        assert_structurally_equal(original.root().unwrap(), roundtripped.root().unwrap());
    }
}

#[test]
fn empty_input_is_not_done() {
    use jiffy::error::ParserError;
    use jiffy::parser::{JsonParser, NoopCallbacks, ParserState};

    let mut stack = [ParserState::Init; 8];
    let mut parser = JsonParser::new(&mut stack);
    let mut cb = NoopCallbacks;
    assert_eq!(parser.fini(&mut cb), Err(ParserError::NotDone));
}

#[test]
fn trailing_comma_in_array_is_rejected_end_to_end() {
    assert!(Tree::new(b"[1,]").is_err());
}

#[test]
fn unbalanced_brackets_fail_tree_stack_scan() {
    assert_eq!(Tree::new(b"{\"a\":"), Err(TreeError::StackScanFailed));
}

#[test]
fn deeply_nested_input_overflows_a_small_stack() {
    use jiffy::error::ParserError;
    use jiffy::parser::{self, NoopCallbacks, ParserState};

    let deep = b"[".repeat(100);
    let mut stack = [ParserState::Init; 4];
    let mut cb = NoopCallbacks;
    assert_eq!(
        parser::parse(&mut stack, &deep, &mut cb),
        Err(ParserError::StackOverflow)
    );
}
