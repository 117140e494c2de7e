use tracing::trace;

const BLANK: char = ' ';
const COMMA: char = ',';

/// Replace every comma with a blank, trim both ends and squash every run of
/// whitespace into a single blank.
///
/// Any Unicode whitespace counts as a separator, not only the ASCII blank:
/// tabs, no-break spaces and ideographic spaces are all collapsed.
///
/// `"  May   14  ,  1945  "` becomes `"May 14 1945"`.
pub fn collapse_whitespace(s: &str) -> String {
    let mut collapsed = String::with_capacity(s.len());

    for word in s.split(|c: char| c == COMMA || c.is_whitespace()) {
        if word.is_empty() {
            continue;
        }

        if !collapsed.is_empty() {
            collapsed.push(BLANK);
        }
        collapsed.push_str(word);
    }

    collapsed
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
/// The three raw pieces of a traditional date, in the order they are written
pub struct DateTokens<'a> {
    pub month: &'a str,
    pub day: &'a str,
    pub year: &'a str,
}

impl<'a> DateTokens<'a> {
    /// Split a collapsed date on its first and last blank.
    ///
    /// Anything between those two blanks is the day, so extra words end up
    /// inside the day token. A string with a single blank has an empty day,
    /// and a string with no blank at all is taken to be just a month name.
    pub fn split(collapsed: &'a str) -> Self {
        let tokens = match (collapsed.find(BLANK), collapsed.rfind(BLANK)) {
            (Some(first), Some(last)) if first < last => DateTokens {
                month: &collapsed[..first],
                day: &collapsed[first + 1..last],
                year: &collapsed[last + 1..],
            },
            (Some(only), _) => DateTokens {
                month: &collapsed[..only],
                day: "",
                year: &collapsed[only + 1..],
            },
            _ => DateTokens {
                month: collapsed,
                day: "",
                year: "",
            },
        };

        trace!(?tokens, "split collapsed date");
        tokens
    }

    /// Peel the year and then the day off the end of an uncollapsed date.
    ///
    /// When a comma is present the year is whatever follows the last comma,
    /// otherwise it is whatever follows the last whitespace. The day is then
    /// the last word of what remains and the month is everything before it.
    pub fn strip_suffixes(raw: &'a str) -> Self {
        let date = raw.trim();

        let (rest, year) = match date.rsplit_once(COMMA) {
            Some((rest, year)) => (rest.trim(), year.trim()),
            None => match date.rsplit_once(char::is_whitespace) {
                Some((rest, year)) => (rest.trim(), year),
                None => ("", date),
            },
        };

        let (month, day) = match rest.rsplit_once(char::is_whitespace) {
            Some((month, day)) => (month.trim(), day),
            None => ("", rest),
        };

        let tokens = DateTokens { month, day, year };
        trace!(?tokens, "stripped date suffixes");
        tokens
    }
}
