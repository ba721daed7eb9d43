pub mod email;
pub mod search_query;
