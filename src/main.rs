//! CLI tool to list the structure of LaTeX documents.

use std::fs;
use std::path::Path;
use std::process::ExitCode;

use textags::{KindSet, Options};

fn usage() {
    eprintln!("Usage: textags <command> [--kinds=SPEC] [files...]");
    eprintln!();
    eprintln!("Commands:");
    eprintln!("  tags    Print tags in ctags format, sorted by name");
    eprintln!("  xref    Print a cross reference in source order");
    eprintln!("  kinds   List tag kinds");
    eprintln!("  tokens  Dump the token stream");
    eprintln!();
    eprintln!("Options:");
    eprintln!("  --kinds=SPEC  Enable kinds, e.g. csu, -l or +{{include}}");
    eprintln!();
    eprintln!("Examples:");
    eprintln!("  textags tags thesis.tex chapters/*.tex");
    eprintln!("  textags xref --kinds=-l thesis.tex");
}

fn main() -> ExitCode {
    let args: Vec<String> = std::env::args().collect();

    if args.len() < 2 || args[1] == "--help" || args[1] == "-h" {
        usage();
        return ExitCode::from(2);
    }

    let command = args[1].as_str();
    let mut options = Options::new();
    let mut files = Vec::new();

    for arg in &args[2..] {
        if let Some(spec) = arg.strip_prefix("--kinds=") {
            match KindSet::from_spec(spec) {
                Ok(kinds) => options = options.kinds(kinds),
                Err(e) => {
                    eprintln!("Error: {e}");
                    return ExitCode::from(2);
                }
            }
        } else {
            files.push(arg.as_str());
        }
    }

    match command {
        "kinds" => {
            print!("{}", textags::format_kinds(options.kinds));
            return ExitCode::SUCCESS;
        }
        "tags" | "xref" | "tokens" => {}
        _ => {
            eprintln!("Unknown command: {command}");
            return ExitCode::from(2);
        }
    }

    if files.is_empty() {
        eprintln!("Error: no files specified");
        return ExitCode::from(2);
    }

    let mut had_error = false;
    let mut tag_lines = Vec::new();

    for path in files {
        if !textags::is_tex_path(Path::new(path)) {
            eprintln!("{path}: skipped, not a .tex file");
            continue;
        }

        let content = match fs::read(path) {
            Ok(c) => c,
            Err(e) => {
                eprintln!("{path}: {e}");
                had_error = true;
                continue;
            }
        };

        match command {
            "tags" => {
                let tags = textags::extract_with(&content, &options);
                for tag in &tags {
                    let line = textags::format_tags(std::slice::from_ref(tag), path);
                    tag_lines.push((tag.name.clone(), tag.span.line, line));
                }
            }
            "xref" => {
                let tags = textags::extract_with(&content, &options);
                let source = String::from_utf8_lossy(&content);
                print!("{}", textags::format_xref(&tags, path, &source));
            }
            _ => {
                let mut lexer = textags::Lexer::new(&content);
                while let Ok(token) = lexer.next_token(false) {
                    println!(
                        "{path}:{}:{}\t{}\t{:?}",
                        token.span.line, token.span.column, token.kind, token.text
                    );
                }
            }
        }
    }

    // Tag files are sorted by name; ties keep source order.
    tag_lines.sort_by(|a, b| a.0.cmp(&b.0).then(a.1.cmp(&b.1)));
    for (_, _, line) in &tag_lines {
        print!("{line}");
    }

    if had_error {
        ExitCode::FAILURE
    } else {
        ExitCode::SUCCESS
    }
}
