//! Qt Linguist translation catalogs for Papagayo-NG.
//!
//! This crate reads and writes Qt Linguist translation sources (`.ts`) and
//! resolves `(context, source)` pairs against them. It includes:
//!
//! - A lossless `.ts` document model with a parser and an `lupdate`-style writer
//! - Per-locale lookup catalogs that fall back to the source text
//! - Locating catalog files for a locale tag the way `QTranslator` does
//! - A process-wide translator that degrades to an identity catalog on errors
//! - Completion statistics per context
//!
//! # Example
//!
//! ```rust
//! use tscat_catalog::{parser, LocaleCatalog, LocaleTag};
//!
//! # fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let document = parser::parse_str(
//!     r#"<TS version="2.1" language="de_DE"><context><name>AboutBox</name>
//!     <message><source>About Papagayo-NG</source>
//!     <translation>Über Papagayo-NG</translation></message></context></TS>"#,
//! )?;
//! let catalog = LocaleCatalog::from_document(&document, &LocaleTag::parse("de_DE")?);
//!
//! assert_eq!(catalog.resolve("AboutBox", "About Papagayo-NG"), "Über Papagayo-NG");
//! assert_eq!(catalog.resolve("AboutBox", "OK"), "OK");
//! # Ok(())
//! # }
//! ```

pub mod catalog;
pub mod error;
pub mod locale;
pub mod model;
pub mod parser;
pub mod resource;
pub mod stats;
pub mod translator;
pub mod writer;

pub use catalog::{LocaleCatalog, MessageKey, TranslationEntry};
pub use error::{CatalogError, CatalogResult};
pub use locale::LocaleTag;
pub use model::{ContextBlock, Location, Message, Translation, TranslationStatus, TsDocument};
pub use resource::ResourceManager;
pub use stats::{CatalogStats, ContextStats, DocumentStats};
pub use translator::{InstallOutcome, Translator};
