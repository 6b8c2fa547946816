//! Count tags per kind with a custom sink, skipping labels.

use std::collections::BTreeMap;

use textags::{Kind, Options, TagEntry, TagSink, parse};

#[derive(Default)]
struct Counter(BTreeMap<Kind, usize>);

impl TagSink for Counter {
    fn accept(&mut self, entry: TagEntry) {
        *self.0.entry(entry.kind).or_default() += 1;
    }
}

fn main() {
    let input = "\
\\chapter{One}\\label{one}
\\section{A}\\section{B}
\\chapter{Two}\\label{two}
\\section{C}
";

    let mut counter = Counter::default();
    parse(input.as_bytes(), &Options::new().disable(Kind::Label), &mut counter);

    for (kind, count) in &counter.0 {
        println!("{count} {}", kind.plural());
    }
}
