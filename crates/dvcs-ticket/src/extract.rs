//! Ticket extraction from titles, branch names and commit messages

use crate::pattern::{Ticket, TicketPattern};
use log::{debug, info};

/// Extract the ticket token at the start of `text`
///
/// Tokens anywhere else in the string do not count. The token is returned
/// with its original casing.
pub fn extract_leading_ticket(pattern: &TicketPattern, text: &str) -> Option<Ticket> {
    match pattern.find_leading(text) {
        Some(token) => {
            if pattern.is_bypass(token) {
                debug!("String {text:?} carries the bypass marker");
            }
            Some(Ticket::new(token))
        }
        None => {
            info!("String {text:?} failed check");
            None
        }
    }
}

/// Extract one ticket per commit message, in commit order
///
/// Messages that do not start with a ticket are dropped, so the result can be
/// shorter than the input.
pub fn extract_commit_tickets<I, S>(pattern: &TicketPattern, messages: I) -> Vec<Ticket>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    messages
        .into_iter()
        .filter_map(|message| pattern.find_leading(message.as_ref()).map(Ticket::new))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pattern() -> TicketPattern {
        TicketPattern::default()
    }

    #[test]
    fn test_extract_leading_ticket() {
        let cases = [
            ("testing", None),
            ("NO_JIRA other stuff", Some("NO_JIRA")),
            ("AAP-1234 other stuff", Some("AAP-1234")),
            ("aap-1234-some-branch", Some("aap-1234")),
            ("fix things AAP-9", None),
            ("ABC-0909 wrong project", None),
            ("", None),
        ];

        for (input, expected) in cases {
            let result = extract_leading_ticket(&pattern(), input);
            assert_eq!(
                result.as_ref().map(Ticket::as_str),
                expected,
                "input {input:?}"
            );
        }
    }

    #[test]
    fn test_extract_commit_tickets_drops_non_matches() {
        let messages = [
            "Update readme",
            "AAP-7 add the widget",
            "Merge branch 'main' into aap-7",
        ];
        let tickets = extract_commit_tickets(&pattern(), messages);
        assert_eq!(tickets, vec![Ticket::new("AAP-7")]);
    }

    #[test]
    fn test_extract_commit_tickets_keeps_order() {
        let messages = vec![
            "NO_JIRA bump deps".to_string(),
            "aap-2 second".to_string(),
            "AAP-1 first".to_string(),
        ];
        let tickets = extract_commit_tickets(&pattern(), &messages);
        let tokens: Vec<&str> = tickets.iter().map(Ticket::as_str).collect();
        assert_eq!(tokens, ["NO_JIRA", "aap-2", "AAP-1"]);
    }

    #[test]
    fn test_extract_commit_tickets_empty() {
        let tickets = extract_commit_tickets(&pattern(), Vec::<String>::new());
        assert!(tickets.is_empty());
    }
}
