//! Output artifact generators: sitemap, RSS feed, search index, and the
//! generator marker tag.

pub mod inject;
pub mod rss;
pub mod search;
pub mod sitemap;
