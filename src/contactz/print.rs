use colored::Colorize;
use contactz::api::{CmdMessage, MessageLevel};
use contactz::config::ContactzConfig;
use contactz::index::DisplayContact;
use unicode_width::UnicodeWidthStr;

const NAME_MAX_WIDTH: usize = 40;

pub(crate) fn print_messages(messages: &[CmdMessage]) {
    for message in messages {
        match message.level {
            MessageLevel::Info => println!("{}", message.content.dimmed()),
            MessageLevel::Success => println!("{}", message.content.green()),
            MessageLevel::Warning => println!("{}", message.content.yellow()),
            MessageLevel::Error => println!("{}", message.content.red()),
        }
    }
}

pub(crate) fn print_contacts(contacts: &[DisplayContact]) {
    for line in list_lines(contacts) {
        println!("{}", line);
    }
}

pub(crate) fn print_full_contacts(contacts: &[DisplayContact]) {
    for (i, dc) in contacts.iter().enumerate() {
        if i > 0 {
            println!("--------------------------------");
        }
        println!("{} {}", dc.index.to_string().yellow(), dc.contact.name.bold());
        println!("{}", dc.contact);
    }
}

pub(crate) fn print_config(config: &ContactzConfig) {
    for key in ContactzConfig::keys() {
        if let Some(value) = config.get(key) {
            println!("{} = {}", key, value);
        }
    }
}

/// `  1. Ann     - 555-1000` with names padded to a common display width.
fn list_lines(contacts: &[DisplayContact]) -> Vec<String> {
    let idx_width = contacts
        .iter()
        .map(|dc| dc.index.to_string().len())
        .max()
        .unwrap_or(1);
    let name_width = contacts
        .iter()
        .map(|dc| dc.contact.name.width())
        .max()
        .unwrap_or(0)
        .min(NAME_MAX_WIDTH);

    contacts
        .iter()
        .map(|dc| {
            let name = truncate_to_width(&dc.contact.name, NAME_MAX_WIDTH);
            let padding = name_width.saturating_sub(name.width());
            format!(
                "{:>idx_width$}. {}{} - {}",
                dc.index,
                name,
                " ".repeat(padding),
                dc.contact.phone_number,
                idx_width = idx_width
            )
        })
        .collect()
}

fn truncate_to_width(s: &str, max_width: usize) -> String {
    use unicode_width::UnicodeWidthChar;

    if s.width() <= max_width {
        return s.to_string();
    }

    let mut result = String::new();
    let mut current_width = 0;
    for c in s.chars() {
        let char_width = c.width().unwrap_or(0);
        if current_width + char_width > max_width.saturating_sub(1) {
            break;
        }
        result.push(c);
        current_width += char_width;
    }
    result.push('…');
    result
}

#[cfg(test)]
mod tests {
    use super::*;
    use contactz::index::index_contacts;
    use contactz::model::Contact;

    #[test]
    fn list_lines_align_phone_numbers() {
        let contacts = index_contacts(vec![
            Contact::new("Ann", "555-1000", ""),
            Contact::new("Bartholomew", "555-2000", ""),
        ]);
        let lines = list_lines(&contacts);
        assert_eq!(lines[0], "1. Ann         - 555-1000");
        assert_eq!(lines[1], "2. Bartholomew - 555-2000");
    }

    #[test]
    fn list_lines_right_align_two_digit_indexes() {
        let contacts = index_contacts(
            (0..10)
                .map(|i| Contact::new(format!("N{}", i), "1", ""))
                .collect(),
        );
        let lines = list_lines(&contacts);
        assert_eq!(lines[0], " 1. N0 - 1");
        assert_eq!(lines[9], "10. N9 - 1");
    }

    #[test]
    fn truncates_long_names() {
        let long = "x".repeat(60);
        let truncated = truncate_to_width(&long, 10);
        assert_eq!(truncated.width(), 10);
        assert!(truncated.ends_with('…'));
    }

    #[test]
    fn short_names_are_untouched() {
        assert_eq!(truncate_to_width("Ann", 10), "Ann");
    }
}
