pub mod fetch_quote;
pub mod select_quote;
