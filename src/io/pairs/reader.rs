use crate::io::{Listing, error::Error, util};
use crate::model::interaction::PairRecord;
use std::io::BufRead;

/// Reads a pair listing. A pair is acid-specific when its trailing comment
/// carries `acid_marker` as a whole word.
pub fn read<R: BufRead>(reader: R, acid_marker: &str) -> Result<Vec<PairRecord>, Error> {
    let lines = util::collect_data_lines(reader)?;
    let mut pairs = Vec::with_capacity(lines.len());

    for line in &lines {
        line.require_columns(Listing::Pairs, 3)?;

        let ai = line.field::<usize>(Listing::Pairs, 0, "first atom index")?;
        let aj = line.field::<usize>(Listing::Pairs, 1, "second atom index")?;
        line.field::<u32>(Listing::Pairs, 2, "function type")?;

        pairs.push(PairRecord {
            ai,
            aj,
            parameters: line.rest(2),
            acid: util::comment_has_marker(line.comment.as_deref(), acid_marker),
        });
    }

    Ok(pairs)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    #[test]
    fn reads_pairs_and_acid_marker() {
        let text = "\
[ pairs ]
;  ai  aj  type  c6            c12
    1   8     1  1.1046e-01    5.6240e-03
    3  12     1  9.2320e-02    3.9820e-03 ; acid
    4  15     1  9.2320e-02    3.9820e-03 ; acidic side chain
";
        let pairs = read(Cursor::new(text), "acid").unwrap();

        assert_eq!(pairs.len(), 3);
        assert_eq!((pairs[0].ai, pairs[0].aj), (1, 8));
        assert_eq!(pairs[0].parameters, vec!["1", "1.1046e-01", "5.6240e-03"]);
        assert!(!pairs[0].acid);
        assert!(pairs[1].acid);
        assert!(!pairs[2].acid);
    }

    #[test]
    fn custom_marker() {
        let pairs = read(Cursor::new("1 2 1 0.1 0.2 ; lowph\n"), "lowph").unwrap();
        assert!(pairs[0].acid);
    }

    #[test]
    fn rejects_bad_function_type() {
        let err = read(Cursor::new("1 2 lj 0.1 0.2\n"), "acid").unwrap_err();
        assert!(err.to_string().contains("invalid function type 'lj'"));
    }
}
