//! Serialization of a [`TsDocument`] in `lupdate` layout

use crate::error::{CatalogError, CatalogResult};
use crate::model::{Message, TsDocument};
use quick_xml::escape::escape;
use std::fmt::Write as _;
use std::fs;
use std::path::Path;
use tracing::{debug, info};

const MESSAGE_INDENT: &str = "    ";
const FIELD_INDENT: &str = "        ";

/// Serialize a document to a string.
///
/// Parsing the output yields a document equal to `document`.
pub fn write_string(document: &TsDocument) -> String {
    let mut out = String::with_capacity(256 + document.message_count() * 192);

    out.push_str("<?xml version=\"1.0\" encoding=\"utf-8\"?>\n");
    if document.doctype {
        out.push_str("<!DOCTYPE TS>\n");
    }

    out.push_str("<TS");
    push_attribute(&mut out, "version", &document.version);
    if let Some(language) = &document.language {
        push_attribute(&mut out, "language", language);
    }
    if let Some(source_language) = &document.source_language {
        push_attribute(&mut out, "sourcelanguage", source_language);
    }
    out.push_str(">\n");

    for context in &document.contexts {
        out.push_str("<context>\n");
        push_element(&mut out, MESSAGE_INDENT, "name", &context.name);
        for message in &context.messages {
            write_message(&mut out, message);
        }
        out.push_str("</context>\n");
    }

    out.push_str("</TS>\n");
    out
}

/// Serialize a document to a file, replacing it if it exists
pub fn write_file<P: AsRef<Path>>(document: &TsDocument, path: P) -> CatalogResult<()> {
    let path = path.as_ref();
    debug!("Writing translation catalog: {:?}", path);

    fs::write(path, write_string(document)).map_err(|source| CatalogError::Io {
        path: path.to_path_buf(),
        source,
    })?;

    info!(
        "Wrote {} messages in {} contexts to {:?}",
        document.message_count(),
        document.contexts.len(),
        path
    );
    Ok(())
}

fn write_message(out: &mut String, message: &Message) {
    let _ = writeln!(out, "{MESSAGE_INDENT}<message>");

    for location in &message.locations {
        let _ = write!(out, "{FIELD_INDENT}<location");
        push_attribute(out, "filename", &location.filename);
        if let Some(line) = &location.line {
            push_attribute(out, "line", line);
        }
        out.push_str("/>\n");
    }

    push_element(out, FIELD_INDENT, "source", &message.source);
    if let Some(comment) = &message.comment {
        push_element(out, FIELD_INDENT, "comment", comment);
    }
    if let Some(extra) = &message.extra_comment {
        push_element(out, FIELD_INDENT, "extracomment", extra);
    }
    if let Some(note) = &message.translator_comment {
        push_element(out, FIELD_INDENT, "translatorcomment", note);
    }

    let translation = &message.translation;
    let _ = write!(out, "{FIELD_INDENT}<translation");
    if let Some(kind) = translation.status.as_attribute() {
        push_attribute(out, "type", kind);
    }
    if let Some(encoding) = &translation.encoding {
        push_attribute(out, "encoding", encoding);
    }
    out.push('>');
    push_text(out, &translation.text);
    out.push_str("</translation>\n");

    let _ = writeln!(out, "{MESSAGE_INDENT}</message>");
}

fn push_element(out: &mut String, indent: &str, tag: &str, text: &str) {
    let _ = write!(out, "{indent}<{tag}>");
    push_text(out, text);
    let _ = writeln!(out, "</{tag}>");
}

/// Escapes character data. Control characters XML cannot carry become
/// `<byte value="x.."/>` elements, as `lupdate` writes them.
fn push_text(out: &mut String, text: &str) {
    let mut start = 0;
    for (i, c) in text.char_indices() {
        if c < ' ' && c != '\t' && c != '\n' {
            out.push_str(&escape(&text[start..i]));
            let _ = write!(out, "<byte value=\"x{:x}\"/>", u32::from(c));
            start = i + c.len_utf8();
        }
    }
    out.push_str(&escape(&text[start..]));
}

fn push_attribute(out: &mut String, name: &str, value: &str) {
    let _ = write!(out, " {name}=\"{}\"", escape(value));
}
