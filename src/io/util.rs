use super::{Listing, error::Error};
use std::io::BufRead;
use std::str::FromStr;

/// A non-empty data line of a topology listing, split into whitespace fields
/// with any trailing `;` comment kept aside.
#[derive(Debug, Clone, PartialEq)]
pub struct DataLine {
    pub line: usize,
    pub fields: Vec<String>,
    pub comment: Option<String>,
}

impl DataLine {
    pub fn field<T: FromStr>(&self, listing: Listing, idx: usize, what: &str) -> Result<T, Error> {
        let raw = self.fields.get(idx).ok_or_else(|| {
            Error::parse(listing, self.line, format!("missing {what} (column {})", idx + 1))
        })?;
        raw.parse::<T>()
            .map_err(|_| Error::parse(listing, self.line, format!("invalid {what} '{raw}'")))
    }

    pub fn require_columns(&self, listing: Listing, min: usize) -> Result<(), Error> {
        if self.fields.len() < min {
            return Err(Error::parse(
                listing,
                self.line,
                format!(
                    "expected at least {min} columns, found {}",
                    self.fields.len()
                ),
            ));
        }
        Ok(())
    }

    pub fn rest(&self, from: usize) -> Vec<String> {
        self.fields.iter().skip(from).cloned().collect()
    }
}

/// Collects the data lines of a listing. Blank lines, comment-only lines
/// (`;` or `#`), and `[ section ]` headers are skipped.
pub fn collect_data_lines<R: BufRead>(reader: R) -> Result<Vec<DataLine>, Error> {
    let mut out = Vec::new();

    for (i, line) in reader.lines().enumerate() {
        let line = line.map_err(|e| Error::Io { source: e })?;
        let (data, comment) = match line.split_once(';') {
            Some((data, comment)) => (data, Some(comment.trim().to_string())),
            None => (line.as_str(), None),
        };

        let trimmed = data.trim();
        if trimmed.is_empty() || trimmed.starts_with('#') || trimmed.starts_with('[') {
            continue;
        }

        out.push(DataLine {
            line: i + 1,
            fields: trimmed.split_whitespace().map(str::to_string).collect(),
            comment,
        });
    }

    Ok(out)
}

/// Whether `comment` contains `marker` as a whole word, ignoring case.
pub fn comment_has_marker(comment: Option<&str>, marker: &str) -> bool {
    let Some(comment) = comment else {
        return false;
    };
    comment
        .split(|c: char| !c.is_ascii_alphanumeric() && c != '_' && c != '-')
        .any(|word| word.eq_ignore_ascii_case(marker))
}

/// Scientific notation with a signed two-digit exponent (`4.937284e-06`).
pub fn sci(value: f64, precision: usize) -> String {
    let s = format!("{:.*e}", precision, value);
    match s.split_once('e') {
        Some((mantissa, exp)) => {
            let (sign, digits) = match exp.strip_prefix('-') {
                Some(d) => ('-', d),
                None => ('+', exp),
            };
            format!("{mantissa}e{sign}{digits:0>2}")
        }
        None => s,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    #[test]
    fn skips_headers_comments_and_blank_lines() {
        let text = "[ atoms ]\n; nr type\n\n   1  CA  1 ALA CA 1 ; first\n#ifdef X\n2 CB 1 ALA CB 2\n";
        let lines = collect_data_lines(Cursor::new(text)).unwrap();

        assert_eq!(lines.len(), 2);
        assert_eq!(lines[0].line, 4);
        assert_eq!(lines[0].fields, vec!["1", "CA", "1", "ALA", "CA", "1"]);
        assert_eq!(lines[0].comment.as_deref(), Some("first"));
        assert_eq!(lines[1].line, 6);
        assert_eq!(lines[1].comment, None);
    }

    #[test]
    fn field_reports_line_and_column() {
        let lines = collect_data_lines(Cursor::new("x 2\n")).unwrap();
        let err = lines[0].field::<usize>(Listing::Atoms, 0, "serial number").unwrap_err();
        assert_eq!(
            err.to_string(),
            "failed to parse atom listing: invalid serial number 'x' (at line 1)"
        );

        let err = lines[0].field::<usize>(Listing::Atoms, 5, "charge group").unwrap_err();
        assert!(err.to_string().contains("missing charge group (column 6)"));
    }

    #[test]
    fn marker_matches_whole_words_only() {
        assert!(comment_has_marker(Some("acid"), "acid"));
        assert!(comment_has_marker(Some("ASP-GLU, Acid state"), "acid"));
        assert!(!comment_has_marker(Some("acidic"), "acid"));
        assert!(!comment_has_marker(None, "acid"));
    }

    #[test]
    fn sci_uses_gromacs_exponents() {
        assert_eq!(sci(4.937284e-06, 6), "4.937284e-06");
        assert_eq!(sci(0.0, 6), "0.000000e+00");
        assert_eq!(sci(1.5e12, 3), "1.500e+12");
        assert_eq!(sci(-2.0e-120, 2), "-2.00e-120");
    }
}
