use std::borrow::Cow;
use std::fs::File;
use std::io::{self, BufRead, BufReader, Write};
use std::path::Path;

use tracing::{debug, info};

use crate::{normalize_with, Error, Strategy};

/// Message written once every line has been converted
pub const FAREWELL: &str = "Goodbye.";

/// Prompt shown when no input source was given on the command line
pub const PROMPT: &str = "Enter filename:>";

/// Name that selects standard input instead of a file
pub const STDIN_NAME: &str = "-";

/// Wrap a string in double quotes
pub fn quoted(s: &str) -> String {
    format!("\"{s}\"")
}

/// Converts a stream of traditional dates, one per line
#[derive(Copy, Clone, Debug, Default)]
pub struct Converter {
    strategy: Strategy,
}

impl Converter {
    pub fn new(strategy: Strategy) -> Self {
        Self { strategy }
    }

    /// Write `"<normal date>" : "<original line>"` for every non-empty line
    /// of `input`, followed by [`FAREWELL`].
    ///
    /// Lines end at `\n`, `\r\n` or a lone `\r`. Bytes that are not UTF-8
    /// are replaced rather than ending the run. Lines are not trimmed before
    /// the emptiness check, so a line holding only blanks is still converted.
    /// Returns the number of lines converted.
    pub fn run<R: BufRead, W: Write>(&self, mut input: R, mut output: W) -> Result<usize, Error> {
        let mut converted = 0;
        let mut buf = Vec::new();

        loop {
            buf.clear();
            if input.read_until(b'\n', &mut buf)? == 0 {
                break;
            }

            for raw in buf.split(|&b| b == b'\n' || b == b'\r') {
                if raw.is_empty() {
                    continue;
                }

                let line = String::from_utf8_lossy(raw);
                if let Cow::Owned(_) = line {
                    debug!(line = %line, "replaced invalid utf-8 in line");
                }

                let normal = normalize_with(&line, self.strategy);
                writeln!(output, "{} : {}", quoted(&normal), quoted(&line))?;
                converted += 1;
            }
        }

        writeln!(output, "{FAREWELL}")?;
        output.flush()?;

        info!(converted, strategy = ?self.strategy, "finished converting dates");
        Ok(converted)
    }
}

/// Open the named input source, where [`STDIN_NAME`] means standard input
pub fn open_source(name: &str) -> Result<Box<dyn BufRead>, Error> {
    if name == STDIN_NAME {
        debug!("reading dates from stdin");
        return Ok(Box::new(io::stdin().lock()));
    }

    let path = Path::new(name);
    let file = File::open(path).map_err(|source| Error::UnreadableSource {
        path: path.to_path_buf(),
        source,
    })?;

    debug!(path = %path.display(), "reading dates from file");
    Ok(Box::new(BufReader::new(file)))
}

/// Show [`PROMPT`] on `output` and return the trimmed line read from `input`
pub fn prompt_for_source<R: BufRead, W: Write>(mut input: R, mut output: W) -> Result<String, Error> {
    write!(output, "{PROMPT}")?;
    output.flush()?;

    let mut response = String::new();
    input.read_line(&mut response)?;

    Ok(response.trim().to_string())
}

#[cfg(test)]
mod tests {
    use std::fs::File;
    use std::io::{Cursor, Write};
    use std::path::Path;

    use crate::convert::*;
    use crate::{Error, Strategy};

    fn convert(input: &str, strategy: Strategy) -> (String, usize) {
        let mut output = Vec::new();
        let converted = Converter::new(strategy)
            .run(Cursor::new(input), &mut output)
            .unwrap();

        (String::from_utf8(output).unwrap(), converted)
    }

    #[test]
    fn test_quoted() {
        assert_eq!(quoted("19870614"), "\"19870614\"");
        assert_eq!(quoted(""), "\"\"");
    }

    #[test]
    fn test_run() {
        let (output, converted) = convert(
            "June 14, 1987\n\n  May   14  ,  1945  \nBlah 14, 1987\n",
            Strategy::Collapse,
        );

        assert_eq!(converted, 3);
        assert_eq!(
            output,
            "\"19870614\" : \"June 14, 1987\"\n\
             \"19450514\" : \"  May   14  ,  1945  \"\n\
             \"19870014\" : \"Blah 14, 1987\"\n\
             Goodbye.\n"
        );
    }

    #[test]
    fn test_run_suffix_strip() {
        let (output, converted) = convert("March 4, 2000", Strategy::SuffixStrip);

        assert_eq!(converted, 1);
        assert_eq!(output, "\"20000304\" : \"March 4, 2000\"\nGoodbye.\n");
    }

    #[test]
    fn test_run_empty_input() {
        let (output, converted) = convert("", Strategy::default());

        assert_eq!(converted, 0);
        assert_eq!(output, "Goodbye.\n");
    }

    #[test]
    fn test_run_crlf() {
        let (output, converted) = convert("June 14 1987\r\n\r\n", Strategy::default());

        assert_eq!(converted, 1);
        assert_eq!(output, "\"19870614\" : \"June 14 1987\"\nGoodbye.\n");
    }

    #[test]
    fn test_run_lone_carriage_returns() {
        let (output, converted) = convert("June 14, 1987\rMarch 4, 2000\r", Strategy::default());

        assert_eq!(converted, 2);
        assert_eq!(
            output,
            "\"19870614\" : \"June 14, 1987\"\n\
             \"20000304\" : \"March 4, 2000\"\n\
             Goodbye.\n"
        );
    }

    #[test]
    fn test_run_invalid_utf8_line() {
        let mut output = Vec::new();
        let converted = Converter::default()
            .run(
                Cursor::new(&b"June 14, 1987\nAo\xfbt 3, 1999\nMarch 4, 2000\n"[..]),
                &mut output,
            )
            .unwrap();
        let output = String::from_utf8(output).unwrap();

        assert_eq!(converted, 3);
        assert_eq!(
            output,
            "\"19870614\" : \"June 14, 1987\"\n\
             \"19990003\" : \"Ao\u{FFFD}t 3, 1999\"\n\
             \"20000304\" : \"March 4, 2000\"\n\
             Goodbye.\n"
        );
    }

    #[test]
    fn test_blank_line_is_not_empty() {
        let (output, converted) = convert("   \n", Strategy::default());

        assert_eq!(converted, 1);
        assert_eq!(output, "\"00000000\" : \"   \"\nGoodbye.\n");
    }

    #[test]
    fn test_prompt_for_source() {
        let mut output = Vec::new();
        let name = prompt_for_source(Cursor::new("  dates.txt  \n"), &mut output).unwrap();

        assert_eq!(name, "dates.txt");
        assert_eq!(output, PROMPT.as_bytes());
    }

    #[test]
    fn test_open_source_file() {
        let path = std::env::temp_dir().join(format!("tradate-{}.txt", std::process::id()));
        let mut file = File::create(&path).unwrap();
        writeln!(file, "December 25, 1999").unwrap();
        drop(file);

        let source = open_source(path.to_str().unwrap()).unwrap();
        let mut output = Vec::new();
        let converted = Converter::default().run(source, &mut output).unwrap();
        std::fs::remove_file(&path).unwrap();

        assert_eq!(converted, 1);
        assert!(String::from_utf8(output)
            .unwrap()
            .starts_with("\"19991225\" : \"December 25, 1999\""));
    }

    #[test]
    fn test_open_missing_source() {
        let result = open_source("/nonexistent/tradate/dates.txt");

        match result {
            Err(Error::UnreadableSource { path, .. }) => {
                assert_eq!(path, Path::new("/nonexistent/tradate/dates.txt"));
            }
            _ => panic!("expected an unreadable source error"),
        }
    }
}
