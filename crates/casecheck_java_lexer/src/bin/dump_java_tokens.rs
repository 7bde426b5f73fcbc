//! Dumps the token stream for a Java file.
//!
//! Usage:
//!   cat MyClass.java | cargo run --bin dump_java_tokens
//!   cargo run --bin dump_java_tokens < MyClass.java
//!
//! Or after building:
//!   cat MyClass.java | ./target/release/dump_java_tokens

use casecheck_java_lexer::JavaLexer;
use casecheck_source_file::{LineIndex, SourceCode};
use std::io::{self, Read};

fn main() {
    // Read source from stdin
    let mut source = String::new();
    if let Err(e) = io::stdin().read_to_string(&mut source) {
        eprintln!("Error reading stdin: {}", e);
        std::process::exit(1);
    }

    if source.trim().is_empty() {
        eprintln!("Error: No input provided. Pipe a Java file to stdin.");
        eprintln!("Usage: cat MyClass.java | dump_java_tokens");
        std::process::exit(1);
    }

    let line_index = LineIndex::from_source_text(&source);
    let source_code = SourceCode::new(&source, &line_index);

    // Format: line:col kind "text preview..."
    for token in JavaLexer::new(&source) {
        match token {
            Ok(token) => {
                let loc = source_code.line_column(token.range.start());
                let text: String = token
                    .text
                    .chars()
                    .take(40)
                    .map(|c| if c == '\n' { '↵' } else { c })
                    .collect();
                println!("{:>4}:{:<3} {:?} \"{}\"", loc.line, loc.column, token.kind, text);
            }
            Err(err) => {
                let loc = source_code.line_column(err.offset());
                eprintln!("Error at {}: {}", loc, err);
                std::process::exit(1);
            }
        }
    }
}
