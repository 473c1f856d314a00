//! `.ts` XML parsing into a [`TsDocument`]

use crate::error::{CatalogError, CatalogResult};
use crate::model::{ContextBlock, Location, Message, Translation, TranslationStatus, TsDocument};
use quick_xml::events::{BytesStart, Event};
use quick_xml::Reader;
use std::fs;
use std::path::Path;
use tracing::{debug, error};

/// Parse a `.ts` document from a string
pub fn parse_str(input: &str) -> CatalogResult<TsDocument> {
    let input = input.strip_prefix('\u{feff}').unwrap_or(input);
    TsParser::new(input).parse_document()
}

/// Parse a `.ts` document from a file
pub fn parse_file<P: AsRef<Path>>(path: P) -> CatalogResult<TsDocument> {
    let path = path.as_ref();
    debug!("Parsing translation catalog: {:?}", path);

    let content = fs::read_to_string(path).map_err(|source| CatalogError::Io {
        path: path.to_path_buf(),
        source,
    })?;

    parse_str(&content).map_err(|e| {
        error!("Failed to parse translation catalog {:?}: {}", path, e);
        e
    })
}

struct TsParser<'a> {
    reader: Reader<&'a [u8]>,
}

impl<'a> TsParser<'a> {
    fn new(input: &'a str) -> Self {
        let mut reader = Reader::from_str(input);
        reader.config_mut().trim_text(false);
        Self { reader }
    }

    fn error(&self, message: impl Into<String>) -> CatalogError {
        CatalogError::parse(self.reader.buffer_position() as u64, message)
    }

    fn next_event(&mut self) -> CatalogResult<Event<'a>> {
        self.reader
            .read_event()
            .map_err(|e| self.error(e.to_string()))
    }

    fn parse_document(&mut self) -> CatalogResult<TsDocument> {
        let mut doctype = false;

        loop {
            match self.next_event()? {
                Event::DocType(_) => doctype = true,
                Event::Start(e) => {
                    let mut document = self.document_header(&e, doctype)?;
                    self.parse_contexts(&mut document)?;
                    self.expect_trailer()?;
                    return Ok(document);
                }
                Event::Empty(e) => {
                    let document = self.document_header(&e, doctype)?;
                    self.expect_trailer()?;
                    return Ok(document);
                }
                Event::Text(t) if is_blank(&t) => {}
                Event::Decl(_) | Event::Comment(_) | Event::PI(_) => {}
                Event::Eof => return Err(self.error("document has no <TS> root element")),
                other => {
                    return Err(self.error(format!("unexpected content before <TS>: {other:?}")))
                }
            }
        }
    }

    fn document_header(&self, start: &BytesStart<'_>, doctype: bool) -> CatalogResult<TsDocument> {
        if start.name().as_ref() != b"TS" {
            return Err(self.error(format!(
                "root element is <{}>, expected <TS>",
                String::from_utf8_lossy(start.name().as_ref())
            )));
        }

        let mut document = TsDocument::new(None);
        document.doctype = doctype;
        document.version = self.attribute(start, "version")?.unwrap_or_default();
        document.language = self.attribute(start, "language")?;
        document.source_language = self.attribute(start, "sourcelanguage")?;
        Ok(document)
    }

    fn expect_trailer(&mut self) -> CatalogResult<()> {
        loop {
            match self.next_event()? {
                Event::Eof => return Ok(()),
                Event::Text(t) if is_blank(&t) => {}
                Event::Comment(_) | Event::PI(_) => {}
                _ => return Err(self.error("content after the closing </TS>")),
            }
        }
    }

    fn parse_contexts(&mut self, document: &mut TsDocument) -> CatalogResult<()> {
        loop {
            match self.next_event()? {
                Event::Start(e) if e.name().as_ref() == b"context" => {
                    let context = self.parse_context()?;
                    document.contexts.push(context);
                }
                Event::Empty(e) if e.name().as_ref() == b"context" => {
                    return Err(self.error("<context> without a <name>"));
                }
                Event::Start(e) if e.name().as_ref() == b"message" => {
                    return Err(self.error("<message> outside of a <context>"));
                }
                Event::Start(e) => {
                    debug!(
                        "Skipping unsupported element <{}> in <TS>",
                        String::from_utf8_lossy(e.name().as_ref())
                    );
                    self.skip_element(e.name().as_ref().to_vec())?;
                }
                Event::End(e) if e.name().as_ref() == b"TS" => return Ok(()),
                Event::Eof => return Err(self.error("unexpected end of document inside <TS>")),
                _ => {}
            }
        }
    }

    fn parse_context(&mut self) -> CatalogResult<ContextBlock> {
        let mut name = None;
        let mut messages = Vec::new();

        loop {
            match self.next_event()? {
                Event::Start(e) if e.name().as_ref() == b"name" => {
                    name = Some(self.read_text(b"name")?);
                }
                Event::Empty(e) if e.name().as_ref() == b"name" => name = Some(String::new()),
                Event::Start(e) if e.name().as_ref() == b"message" => {
                    messages.push(self.parse_message()?);
                }
                Event::Empty(e) if e.name().as_ref() == b"message" => {
                    return Err(self.error("<message> without a <source>"));
                }
                Event::Start(e) => {
                    debug!(
                        "Skipping unsupported element <{}> in <context>",
                        String::from_utf8_lossy(e.name().as_ref())
                    );
                    self.skip_element(e.name().as_ref().to_vec())?;
                }
                Event::End(e) if e.name().as_ref() == b"context" => break,
                Event::Eof => {
                    return Err(self.error("unexpected end of document inside <context>"))
                }
                _ => {}
            }
        }

        let name = name.ok_or_else(|| self.error("<context> without a <name>"))?;
        Ok(ContextBlock { name, messages })
    }

    fn parse_message(&mut self) -> CatalogResult<Message> {
        let mut locations = Vec::new();
        let mut source = None;
        let mut comment = None;
        let mut extra_comment = None;
        let mut translator_comment = None;
        let mut translation = None;

        loop {
            match self.next_event()? {
                Event::Empty(e) if e.name().as_ref() == b"location" => {
                    locations.push(self.location(&e)?);
                }
                Event::Start(e) if e.name().as_ref() == b"location" => {
                    locations.push(self.location(&e)?);
                    self.skip_element(b"location".to_vec())?;
                }
                Event::Start(e) => match e.name().as_ref() {
                    b"source" => source = Some(self.read_text(b"source")?),
                    b"comment" => comment = Some(self.read_text(b"comment")?),
                    b"extracomment" => extra_comment = Some(self.read_text(b"extracomment")?),
                    b"translatorcomment" => {
                        translator_comment = Some(self.read_text(b"translatorcomment")?);
                    }
                    b"translation" => {
                        let mut parsed = self.translation_header(&e)?;
                        parsed.text = self.read_text(b"translation")?;
                        translation = Some(parsed);
                    }
                    other => {
                        debug!(
                            "Skipping unsupported element <{}> in <message>",
                            String::from_utf8_lossy(other)
                        );
                        self.skip_element(other.to_vec())?;
                    }
                },
                Event::Empty(e) => match e.name().as_ref() {
                    b"source" => source = Some(String::new()),
                    b"comment" => comment = Some(String::new()),
                    b"extracomment" => extra_comment = Some(String::new()),
                    b"translatorcomment" => translator_comment = Some(String::new()),
                    b"translation" => translation = Some(self.translation_header(&e)?),
                    _ => {}
                },
                Event::End(e) if e.name().as_ref() == b"message" => break,
                Event::Eof => {
                    return Err(self.error("unexpected end of document inside <message>"))
                }
                _ => {}
            }
        }

        let source = source.ok_or_else(|| self.error("<message> without a <source>"))?;
        let translation = translation.unwrap_or_else(|| Translation::unfinished(""));

        Ok(Message {
            locations,
            source,
            comment,
            extra_comment,
            translator_comment,
            translation,
        })
    }

    fn location(&self, start: &BytesStart<'_>) -> CatalogResult<Location> {
        let filename = self
            .attribute(start, "filename")?
            .ok_or_else(|| self.error("<location> without a filename"))?;
        let line = self.attribute(start, "line")?;
        Ok(Location { filename, line })
    }

    fn translation_header(&self, start: &BytesStart<'_>) -> CatalogResult<Translation> {
        let status = match self.attribute(start, "type")? {
            None => TranslationStatus::Finished,
            Some(value) => TranslationStatus::from_attribute(&value)
                .ok_or_else(|| self.error(format!("unknown translation type '{value}'")))?,
        };

        Ok(Translation {
            text: String::new(),
            status,
            encoding: self.attribute(start, "encoding")?,
        })
    }

    fn attribute(&self, start: &BytesStart<'_>, name: &str) -> CatalogResult<Option<String>> {
        let attribute = start
            .try_get_attribute(name)
            .map_err(|e| self.error(e.to_string()))?;

        attribute
            .map(|a| {
                a.unescape_value()
                    .map(|v| v.into_owned())
                    .map_err(|e| self.error(e.to_string()))
            })
            .transpose()
    }

    /// Collects the character data of an element up to its end tag.
    fn read_text(&mut self, tag: &[u8]) -> CatalogResult<String> {
        let mut text = String::new();

        loop {
            match self.next_event()? {
                Event::Text(t) => {
                    let unescaped = t.unescape().map_err(|e| self.error(e.to_string()))?;
                    text.push_str(&unescaped);
                }
                Event::CData(c) => text.push_str(&String::from_utf8_lossy(&c.into_inner())),
                Event::Start(e) => {
                    debug!(
                        "Skipping nested element <{}> in <{}>",
                        String::from_utf8_lossy(e.name().as_ref()),
                        String::from_utf8_lossy(tag)
                    );
                    self.skip_element(e.name().as_ref().to_vec())?;
                }
                Event::Empty(e) if e.name().as_ref() == b"byte" => {
                    let value = self.attribute(&e, "value")?.unwrap_or_default();
                    let decoded = decode_byte(&value)
                        .ok_or_else(|| self.error(format!("invalid <byte> value {value:?}")))?;
                    text.push(decoded);
                }
                Event::Empty(e) => {
                    debug!(
                        "Skipping empty element <{}/> in <{}>",
                        String::from_utf8_lossy(e.name().as_ref()),
                        String::from_utf8_lossy(tag)
                    );
                }
                Event::End(e) if e.name().as_ref() == tag => return Ok(text),
                Event::Eof => {
                    return Err(self.error(format!(
                        "unexpected end of document inside <{}>",
                        String::from_utf8_lossy(tag)
                    )))
                }
                _ => {}
            }
        }
    }

    fn skip_element(&mut self, tag: Vec<u8>) -> CatalogResult<()> {
        let mut depth = 0usize;

        loop {
            match self.next_event()? {
                Event::Start(e) if e.name().as_ref() == tag.as_slice() => depth += 1,
                Event::End(e) if e.name().as_ref() == tag.as_slice() => {
                    if depth == 0 {
                        return Ok(());
                    }
                    depth -= 1;
                }
                Event::Eof => {
                    return Err(self.error(format!(
                        "unexpected end of document inside <{}>",
                        String::from_utf8_lossy(&tag)
                    )))
                }
                _ => {}
            }
        }
    }
}

/// Decodes the `value` of an `lupdate` `<byte>` escape: `x` followed by hex
/// digits, or a decimal code.
fn decode_byte(value: &str) -> Option<char> {
    let code = match value.strip_prefix('x') {
        Some(hex) => u32::from_str_radix(hex, 16).ok()?,
        None => value.parse().ok()?,
    };
    char::from_u32(code)
}

fn is_blank(text: &[u8]) -> bool {
    text.iter().all(u8::is_ascii_whitespace)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tscat_common::test_utils::ts_fixtures::{FRENCH_TS, GERMAN_TS, MALFORMED_TS};

    #[test]
    fn test_parse_german_fixture() {
        let doc = parse_str(GERMAN_TS).unwrap();

        assert_eq!(doc.version, "2.1");
        assert_eq!(doc.language.as_deref(), Some("de_DE"));
        assert!(doc.doctype);
        assert_eq!(doc.contexts.len(), 3);
        assert_eq!(doc.message_count(), 6);

        let about = doc.context("AboutBox").unwrap();
        let first = &about.messages[0];
        assert_eq!(first.source, "About Papagayo-NG");
        assert_eq!(first.translation.text, "Über Papagayo-NG");
        assert_eq!(first.translation.status, TranslationStatus::Finished);
        assert_eq!(first.locations[0].filename, "rsrc/about_box.ui");
        assert_eq!(first.locations[0].line_number(), Some(38));
    }

    #[test]
    fn test_parse_keeps_trailing_whitespace() {
        let doc = parse_str(GERMAN_TS).unwrap();
        let waveform = doc.context("WaveformView").unwrap();
        assert_eq!(waveform.messages[0].source, "Phrase: ");
        assert_eq!(waveform.messages[0].translation.text, "Satz: ");
    }

    #[test]
    fn test_parse_unfinished_marker() {
        let doc = parse_str(FRENCH_TS).unwrap();
        assert!(doc
            .messages()
            .all(|(_, m)| m.translation.status == TranslationStatus::Unfinished));
    }

    #[test]
    fn test_parse_entities_and_cdata() {
        let doc = parse_str(
            r#"<TS version="2.1"><context><name>AboutBox</name><message>
            <source>&lt;b&gt;Tom &amp; Jerry&apos;s &quot;Show&quot;&#33;</source>
            <translation><![CDATA[<b>raw</b>]]></translation>
            </message></context></TS>"#,
        )
        .unwrap();

        let message = &doc.contexts[0].messages[0];
        assert_eq!(message.source, "<b>Tom & Jerry's \"Show\"!");
        assert_eq!(message.translation.text, "<b>raw</b>");
        assert!(!doc.doctype);
    }

    #[test]
    fn test_parse_byte_escapes() {
        let doc = parse_str(
            r#"<TS version="2.1"><context><name>CLI</name><message>
            <source>Bell<byte value="x7"/>Tab<byte value="9"/><br/>End</source>
            <translation>Glocke<byte value="x1f"/></translation>
            </message></context></TS>"#,
        )
        .unwrap();

        let message = &doc.contexts[0].messages[0];
        assert_eq!(message.source, "Bell\u{7}Tab\tEnd");
        assert_eq!(message.translation.text, "Glocke\u{1f}");
    }

    #[test]
    fn test_parse_rejects_bad_byte_value() {
        let result = parse_str(
            r#"<TS version="2.1"><context><name>CLI</name><message>
            <source>x<byte value="xzz"/></source></message></context></TS>"#,
        );
        assert!(matches!(result, Err(CatalogError::Parse { .. })));
    }

    #[test]
    fn test_parse_empty_translation_element_and_bom() {
        let input = "\u{feff}<TS version=\"2.1\"><context><name>CLI</name><message>\
            <source>Set FPS for Input.</source><translation type=\"unfinished\"/>\
            </message></context></TS>";
        let doc = parse_str(input).unwrap();
        let translation = &doc.contexts[0].messages[0].translation;
        assert_eq!(translation.text, "");
        assert_eq!(translation.status, TranslationStatus::Unfinished);
    }

    #[test]
    fn test_parse_comments_and_encoding() {
        let doc = parse_str(
            r#"<TS version="2.1" sourcelanguage="en"><context><name>LipsyncFrame</name>
            <message><location filename="a.ui" line="+3"/><location filename="b.py"/>
            <source>Open</source><comment>menu</comment>
            <extracomment>File menu</extracomment><translatorcomment>check</translatorcomment>
            <translation encoding="UTF-8">Öffnen</translation></message></context></TS>"#,
        )
        .unwrap();

        assert_eq!(doc.source_language.as_deref(), Some("en"));
        let message = &doc.contexts[0].messages[0];
        assert_eq!(message.locations.len(), 2);
        assert_eq!(message.locations[0].line.as_deref(), Some("+3"));
        assert_eq!(message.locations[1].line, None);
        assert_eq!(message.comment.as_deref(), Some("menu"));
        assert_eq!(message.extra_comment.as_deref(), Some("File menu"));
        assert_eq!(message.translator_comment.as_deref(), Some("check"));
        assert_eq!(message.translation.encoding.as_deref(), Some("UTF-8"));
    }

    #[test]
    fn test_parse_skips_numerus_forms() {
        let doc = parse_str(
            r#"<TS version="2.1"><context><name>X</name><message numerus="yes">
            <source>%n file(s)</source><translation><numerusform>%n Datei</numerusform>
            <numerusform>%n Dateien</numerusform></translation></message></context></TS>"#,
        )
        .unwrap();
        assert_eq!(doc.contexts[0].messages[0].source, "%n file(s)");
    }

    #[test]
    fn test_parse_errors() {
        assert!(matches!(parse_str(MALFORMED_TS), Err(CatalogError::Parse { .. })));
        assert!(matches!(parse_str(""), Err(CatalogError::Parse { .. })));
        assert!(matches!(
            parse_str("<catalog></catalog>"),
            Err(CatalogError::Parse { .. })
        ));
        assert!(matches!(
            parse_str("<TS><message><source>x</source></message></TS>"),
            Err(CatalogError::Parse { .. })
        ));
        assert!(matches!(
            parse_str("<TS><context><message><translation>x</translation></message></context></TS>"),
            Err(CatalogError::Parse { .. })
        ));
        assert!(matches!(
            parse_str(
                r#"<TS><context><name>A</name><message><source>x</source><translation type="done">y</translation></message></context></TS>"#
            ),
            Err(CatalogError::Parse { .. })
        ));
        assert!(matches!(
            parse_str("<TS><context><name>A</name></context>"),
            Err(CatalogError::Parse { .. })
        ));
    }

    #[test]
    fn test_parse_file_missing() {
        let result = parse_file("/definitely/not/here/de_de.ts");
        assert!(matches!(result, Err(CatalogError::Io { .. })));
    }
}
