#![allow(dead_code)]

pub mod repository;

/// Remove ANSI color escapes from rendered output
pub fn strip_escapes(output: &str) -> String {
    let mut plain = String::new();
    let mut chars = output.chars();
    while let Some(c) = chars.next() {
        if c == '\x1b' {
            for c in chars.by_ref() {
                if c == 'm' {
                    break;
                }
            }
        } else {
            plain.push(c);
        }
    }
    plain
}
