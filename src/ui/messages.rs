use ansi_term::{Colour, Style};
use std::fmt;

/// Icons
const ICON_INFO: &str = "ℹ️";
const ICON_OK: &str = "✅";
const ICON_WARN: &str = "⚠️";
const ICON_ERR: &str = "❌";

/// Plain informational line, no decoration.
pub fn plain<T: fmt::Display>(msg: T) {
    println!("{}", msg);
}

pub fn info<T: fmt::Display>(msg: T) {
    println!("{} {}", Colour::Blue.bold().paint(ICON_INFO), msg);
}

pub fn success<T: fmt::Display>(msg: T) {
    println!(
        "{} {}",
        Colour::Green.bold().paint(ICON_OK),
        Colour::Green.paint(msg.to_string())
    );
}

pub fn warning<T: fmt::Display>(msg: T) {
    println!(
        "{} {}",
        Colour::Yellow.bold().paint(ICON_WARN),
        Colour::Yellow.paint(msg.to_string())
    );
}

pub fn error<T: fmt::Display>(msg: T) {
    eprintln!(
        "{} {}",
        Colour::Red.bold().paint(ICON_ERR),
        Colour::Red.paint(msg.to_string())
    );
}

/// Optional: formatted section header
pub fn header<T: fmt::Display>(msg: T) {
    println!("\n{}\n", Style::new().bold().paint(msg.to_string()));
}
