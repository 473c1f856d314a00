//! Property tests for lookup fallback and serialization

use proptest::prelude::*;
use tscat_catalog::{
    parser, writer, ContextBlock, LocaleCatalog, LocaleTag, Location, Message, Translation,
    TranslationStatus, TsDocument,
};

fn text() -> impl Strategy<Value = String> {
    "[a-zA-Z0-9 <>&'\"{}%.:\\x01\\x1f\täöüéÀ-]{0,24}"
}

fn status() -> impl Strategy<Value = TranslationStatus> {
    prop_oneof![
        Just(TranslationStatus::Finished),
        Just(TranslationStatus::Unfinished),
        Just(TranslationStatus::Vanished),
        Just(TranslationStatus::Obsolete),
    ]
}

fn location() -> impl Strategy<Value = Location> {
    (
        "[a-z_/]{1,12}\\.(ui|py)",
        prop::option::of(prop_oneof!["[1-9][0-9]{0,3}", "[+-][0-9]{1,3}"]),
    )
        .prop_map(|(filename, line)| Location { filename, line })
}

fn translation() -> impl Strategy<Value = Translation> {
    (text(), status(), prop::option::of(prop_oneof![
        Just("UTF-8".to_string()),
        Just("ISO-8859-1".to_string())
    ]))
        .prop_map(|(text, status, encoding)| Translation {
            text,
            status,
            encoding,
        })
}

fn message() -> impl Strategy<Value = Message> {
    (
        text(),
        translation(),
        prop::collection::vec(location(), 0..3),
        prop::option::of(text()),
        prop::option::of(text()),
        prop::option::of(text()),
    )
        .prop_map(
            |(source, translation, locations, comment, extra_comment, translator_comment)| {
                let mut message = Message::new(source, translation);
                message.locations = locations;
                message.comment = comment;
                message.extra_comment = extra_comment;
                message.translator_comment = translator_comment;
                message
            },
        )
}

fn document() -> impl Strategy<Value = TsDocument> {
    (
        prop::collection::vec(("[A-Za-z_]{1,16}", prop::collection::vec(message(), 0..6)), 0..5),
        any::<bool>(),
    )
        .prop_map(|(contexts, doctype)| {
            let mut doc = TsDocument::new(Some("de_DE".to_string()));
            doc.doctype = doctype;
            doc.contexts = contexts
                .into_iter()
                .map(|(name, messages)| ContextBlock { name, messages })
                .collect();
            doc
        })
}

proptest! {
    #[test]
    fn roundtrip_preserves_document(doc in document()) {
        let written = writer::write_string(&doc);
        let reparsed = parser::parse_str(&written).unwrap();
        prop_assert_eq!(reparsed, doc);
    }

    #[test]
    fn resolve_follows_completion_state(doc in document()) {
        let catalog = LocaleCatalog::from_document(&doc, &LocaleTag::parse("de_DE").unwrap());

        for (context, message) in doc.messages() {
            let comment = message.comment.as_deref().unwrap_or("");
            let entry = catalog.entry(context, &message.source, comment).unwrap();
            let resolved = catalog.resolve_disambiguated(context, &message.source, comment);

            if entry.is_finished() && !entry.translation().is_empty() {
                prop_assert_eq!(resolved, entry.translation());
            } else {
                prop_assert_eq!(resolved, message.source.as_str());
            }
            let again = catalog.resolve_disambiguated(context, &message.source, comment);
            prop_assert_eq!(again, resolved);
        }
    }

    #[test]
    fn identity_returns_source(context in text(), source in text()) {
        let catalog = LocaleCatalog::identity(LocaleTag::parse("fr_FR").unwrap());
        prop_assert_eq!(catalog.resolve(&context, &source), source.as_str());
    }
}
