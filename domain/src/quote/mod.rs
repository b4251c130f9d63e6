//! Quote selection domain
//!
//! - [`entities::Quote`]: a quote with its author and categories
//! - [`corpus::QuoteCorpus`]: the immutable quote collection and its filtering
//! - [`category::CategoryKey`]: normalized key that partitions usage tracking
//! - [`synonyms::SynonymTable`]: category expansion data
//! - [`usage::UsageTracker`]: per-category rounds of non-repeating draws
//! - [`policy::NoMatchPolicy`]: what to do when a category matches nothing

pub mod category;
pub mod corpus;
pub mod entities;
pub mod policy;
pub mod synonyms;
pub mod usage;
