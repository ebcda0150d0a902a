//! Everything related to Bilibili emote packages: fetching the package document, saving it and
//! downloading the images it references.
pub mod document;
pub mod emote;
pub mod extractor;
pub mod queue;

/// Default request prefix. The identifiers are appended verbatim right after `ids=`.
pub const BILIBILI_EMOTE_API: &str = "https://api.bilibili.com/x/emote/package?ids=";

/// Fixed query parameters appended after the identifiers.
pub const BILIBILI_EMOTE_QUERY: &str = "&&business=reply";

/// File name used when an image URL has no `/` in it.
pub const FALLBACK_FILE_NAME: &str = "qwq.webp";
