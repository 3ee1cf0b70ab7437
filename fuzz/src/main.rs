use jiffy::tree::Tree;

#[macro_use]
extern crate afl;

fn main() {
    fuzz!(|data: &[u8]| {
        // Tree::new is the highest-level, most allocation-sensitive entry
        // point: it drives the parser twice and owns a heap arena. Fuzzing
        // it exercises the parser's state machine, the bracket-depth
        // pre-scan, and the arena sizing/fill logic all at once. Malformed
        // input is expected to return an error, never panic or leak.
        let _ = Tree::new(data);
    });
}
