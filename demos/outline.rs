//! Print a document outline, indented by scope depth.

use textags::{SCOPE_SEPARATOR, extract};

fn main() {
    let input = "\
\\part{Foundations}
\\chapter{Sets}
\\section[Axioms]{The Axioms of Set Theory}
\\chapter{Relations}
\\label{ch:rel}
\\section*{Orderings}
\\subsection{Well-orderings} % used later
\\include{appendix}
";

    for tag in extract(input) {
        let depth = tag
            .scope
            .as_ref()
            .map_or(0, |scope| scope.name.split(SCOPE_SEPARATOR).count());
        println!(
            "{:>3}  {}{} ({})",
            tag.span.line,
            "  ".repeat(depth),
            tag.name,
            tag.kind
        );
    }
}
