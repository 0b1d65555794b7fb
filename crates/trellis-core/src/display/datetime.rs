//! Date display utilities.

use std::fmt;

use jiff::civil::Date;

/// A wrapper around a calendar `Date` that formats it for people.
///
/// The format is `Mon DD, YYYY`, for example `Feb 15, 2024`.
pub struct DisplayDate<'a>(pub &'a Date);

impl<'a> fmt::Display for DisplayDate<'a> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.strftime("%b %d, %Y"))
    }
}

/// Short card format without the year, for example `Feb 15`.
pub struct ShortDate<'a>(pub &'a Date);

impl<'a> fmt::Display for ShortDate<'a> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.strftime("%b %d"))
    }
}

#[cfg(test)]
mod tests {
    use jiff::civil::date;

    use super::*;

    #[test]
    fn test_display_date_format() {
        let due = date(2024, 2, 5);
        assert_eq!(DisplayDate(&due).to_string(), "Feb 05, 2024");
        assert_eq!(ShortDate(&due).to_string(), "Feb 05");
    }
}
