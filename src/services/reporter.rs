use std::io::Write;

pub const EMAILS_HEADER: &str = "Extracted emails:";
pub const NO_EMAILS_MESSAGE: &str = "No emails found in the search results.";

pub fn report(emails: &[String], out: &mut impl Write) -> std::io::Result<()> {
    if emails.is_empty() {
        return writeln!(out, "{}", NO_EMAILS_MESSAGE);
    }

    writeln!(out, "{}", EMAILS_HEADER)?;
    for email in emails {
        writeln!(out, "{}", email)?;
    }

    Ok(())
}
