//! Link extraction from raw page markup.
//!
//! This module turns one page's HTML into the ordered sequence of page ids
//! it links to. It is the only stage that touches markup; everything
//! downstream works on integer ids.
//!
//! Extraction is best-effort: the crawler corpus contains pages with
//! missing attributes, non-numeric targets, and outright garbage, and
//! none of that is an error - unparseable references are skipped.

mod links;

pub use links::extract_links;
