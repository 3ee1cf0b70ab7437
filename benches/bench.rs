use criterion::{criterion_group, criterion_main, Criterion};
use jiffy::parser::{self, NoopCallbacks, ParserState};
use jiffy::tree::Tree;

/// A JSON object with `n` string-keyed entries, each holding the same small
/// nested value. Large enough to exercise containers, strings, and numbers
/// without depending on an external fixture file.
fn make_large(n: usize) -> String {
    let mut large = String::from("{");
    for i in 0..n {
        if large.len() > 1 {
            large.push(',');
        }
        large.push_str(&format!(
            r#""{i}":{{"id":{i},"name":"item-{i}","active":true,"tags":["a","b","c"]}}"#
        ));
    }
    large.push('}');
    large
}

fn bench_parser(c: &mut Criterion) {
    let json = make_large(10_000);
    let bytes = json.as_bytes();

    c.bench_function("parser push (10k objects)", |b| {
        b.iter(|| {
            let mut stack = vec![ParserState::Init; 32];
            let mut cb = NoopCallbacks;
            parser::parse(&mut stack, bytes, &mut cb).unwrap();
        });
    });
}

fn bench_tree(c: &mut Criterion) {
    let json = make_large(10_000);
    let bytes = json.as_bytes();

    c.bench_function("tree construction (10k objects)", |b| {
        b.iter(|| {
            Tree::new(bytes).unwrap();
        });
    });
}

/// A trivial baseline: just count bytes, to put the parser's per-byte
/// overhead in context.
fn bench_byte_count_baseline(c: &mut Criterion) {
    let json = make_large(10_000);
    let bytes = json.as_bytes();

    c.bench_function("byte counting baseline (10k objects)", |b| {
        b.iter(|| bytes.iter().filter(|&&b| b == b'"').count());
    });
}

criterion_group!(benches, bench_parser, bench_tree, bench_byte_count_baseline);
criterion_main!(benches);
