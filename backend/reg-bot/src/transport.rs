//! Console transport: one stdin line per inbound message, replies printed.
//!
//! Line formats:
//! * `<identity> <text>`
//! * `<identity> /contact <phone> [owner]` (owner defaults to the sender)

use reg_dialogue::{Inbound, Keyboard, Reply, TextFormat};

use std::fmt::Write;

const CONTACT_COMMAND: &str = "/contact";

pub const USAGE: &str = "usage: <identity> <text> | <identity> /contact <phone> [owner]";

/// Parse one console line. Blank lines and lines without a message are `None`.
pub fn parse_line(line: &str) -> Option<Inbound> {
    let line = line.trim();
    let (identity, rest) = line.split_once(char::is_whitespace)?;
    let rest = rest.trim();
    if rest.is_empty() {
        return None;
    }

    let Some(args) = rest.strip_prefix(CONTACT_COMMAND) else {
        return Some(Inbound::text(identity, rest));
    };
    if !args.is_empty() && !args.starts_with(char::is_whitespace) {
        // e.g. "/contacts", plain text
        return Some(Inbound::text(identity, rest));
    }

    let mut parts = args.split_whitespace();
    let phone = parts.next()?;
    let owner = parts.next().unwrap_or(identity);
    Some(Inbound::contact(identity, phone, Some(owner.to_string())))
}

pub fn render(identity: &str, reply: &Reply) -> String {
    let mut out = String::new();
    let marker = match reply.format {
        TextFormat::Plain => "",
        TextFormat::Markdown => " (md)",
    };
    let _ = writeln!(out, "[to {identity}]{marker}");
    for line in reply.text.lines() {
        let _ = writeln!(out, "  {line}");
    }

    if let Some(photo) = &reply.photo {
        let _ = writeln!(out, "  [photo: {}]", photo.display());
    }
    if let Some(document) = &reply.document {
        let _ = writeln!(
            out,
            "  [document: {} ({} bytes)]",
            document.file_name,
            document.bytes.len()
        );
    }
    if let Some(keyboard) = reply.keyboard {
        render_keyboard(&mut out, keyboard);
    }
    out
}

fn render_keyboard(out: &mut String, keyboard: Keyboard) {
    if keyboard == Keyboard::Remove {
        let _ = writeln!(out, "  (keyboard removed)");
        return;
    }

    let one_time = if keyboard.one_time() { " one-time" } else { "" };
    let _ = writeln!(out, "  keyboard{one_time}:");
    for row in keyboard.rows() {
        let buttons: Vec<String> = row
            .iter()
            .map(|b| {
                if b.request_contact {
                    format!("[ {} (contact) ]", b.label)
                } else {
                    format!("[ {} ]", b.label)
                }
            })
            .collect();
        let _ = writeln!(out, "    {}", buttons.join(" "));
    }
}
