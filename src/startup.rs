use std::{error::Error, io::Write};

use crate::{
    domain::{email::extract_emails, search_query::SearchQuery},
    services::{report, RequestError, SearchClient},
};

/// Runs one search for `query` and writes the outcome to `out`.
///
/// A request failure is written as a single error line and ends the run without scanning.
pub async fn run(
    client: &SearchClient,
    query: &SearchQuery,
    out: &mut impl Write,
) -> std::io::Result<()> {
    match client.fetch(query).await {
        Ok(body) => {
            let emails = extract_emails(&body);
            log::info!("Extracted {} emails for query: {}", emails.len(), query.build());
            report(&emails, out)
        }
        Err(e) => writeln!(out, "Error fetching data: {}", describe(&e)),
    }
}

// reqwest keeps the actual cause (refused, dns, timeout) in the source chain
fn describe(error: &RequestError) -> String {
    let mut message = error.to_string();
    let mut source = error.source();
    while let Some(cause) = source {
        message.push_str(": ");
        message.push_str(&cause.to_string());
        source = cause.source();
    }
    message
}
