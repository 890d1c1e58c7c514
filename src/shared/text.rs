//! Display helpers shared by the front end and the use cases.

use chrono::NaiveDate;

/// Keeps the first `word_limit` words, appending "..." when anything was cut.
pub fn truncate_words(text: &str, word_limit: usize) -> String {
    let words: Vec<&str> = text.split(' ').collect();
    if words.len() <= word_limit {
        return text.to_string();
    }
    format!("{}...", words[..word_limit].join(" "))
}

/// `public-agency` -> `Public Agency`.
pub fn title_case(value: &str) -> String {
    value
        .split('-')
        .map(|word| {
            let mut chars = word.chars();
            match chars.next() {
                Some(first) => first.to_uppercase().chain(chars).collect(),
                None => String::new(),
            }
        })
        .collect::<Vec<String>>()
        .join(" ")
}

/// `September 15, 2025`.
pub fn long_date(date: NaiveDate) -> String {
    date.format("%B %-d, %Y").to_string()
}

/// `Sep 15, 2025`.
pub fn short_date(date: NaiveDate) -> String {
    date.format("%b %-d, %Y").to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_truncate_words() {
        assert_eq!(truncate_words("one two three", 5), "one two three");
        assert_eq!(truncate_words("one two three four", 2), "one two...");
    }

    #[test]
    fn test_title_case() {
        assert_eq!(title_case("public-agency"), "Public Agency");
        assert_eq!(title_case("employer"), "Employer");
    }

    #[test]
    fn test_date_formats() {
        let date = NaiveDate::from_ymd_opt(2025, 9, 5).unwrap();
        assert_eq!(long_date(date), "September 5, 2025");
        assert_eq!(short_date(date), "Sep 5, 2025");
    }
}
