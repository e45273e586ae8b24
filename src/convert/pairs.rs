use super::error::{Error, Table};
use crate::model::interaction::PairRecord;
use crate::model::topology::{AtomDictionary, MergedPair, MergedPairs};
use log::{debug, info};
use std::collections::HashSet;

type PairKey = (String, String);

/// Merges peptide and fibril pairs on their unordered atom-type pair.
///
/// The neutral set takes peptide pairs first, then fibril pairs not already
/// present, so peptide parameters win on overlap and the first occurrence
/// wins within a dataset. The acidic set is the neutral set followed by the
/// acid-marked pairs whose type pair is still new.
pub fn merge_pairs(
    peptide: &[PairRecord],
    peptide_dict: &AtomDictionary,
    fibril: &[PairRecord],
    fibril_dict: &AtomDictionary,
) -> Result<MergedPairs, Error> {
    let peptide = resolve(peptide, peptide_dict)?;
    let fibril = resolve(fibril, fibril_dict)?;
    let resolved: Vec<(MergedPair, bool)> = peptide.into_iter().chain(fibril).collect();

    let mut neutral = Vec::new();
    let mut seen: HashSet<PairKey> = HashSet::new();
    let mut dropped = 0usize;
    for (pair, _) in resolved.iter().filter(|(_, acid)| !*acid) {
        if !push_unique(&mut neutral, &mut seen, pair) {
            dropped += 1;
        }
    }

    let mut acidic = neutral.clone();
    for (pair, _) in resolved.iter().filter(|(_, acid)| *acid) {
        if !push_unique(&mut acidic, &mut seen, pair) {
            dropped += 1;
        }
    }

    info!(
        "merged pairs: {} neutral, {} acidic ({} duplicates dropped)",
        neutral.len(),
        acidic.len(),
        dropped
    );

    Ok(MergedPairs { neutral, acidic })
}

fn resolve(pairs: &[PairRecord], dict: &AtomDictionary) -> Result<Vec<(MergedPair, bool)>, Error> {
    pairs
        .iter()
        .map(|p| -> Result<(MergedPair, bool), Error> {
            let type_of = |serial: usize| {
                dict.types
                    .get(&serial)
                    .cloned()
                    .ok_or_else(|| Error::lookup(dict.dataset, Table::AtomTypes, serial))
            };
            let pair = MergedPair {
                dataset: dict.dataset,
                type_i: type_of(p.ai)?,
                type_j: type_of(p.aj)?,
                parameters: p.parameters.clone(),
            };
            Ok((pair, p.acid))
        })
        .collect()
}

fn push_unique(out: &mut Vec<MergedPair>, seen: &mut HashSet<PairKey>, pair: &MergedPair) -> bool {
    let (a, b) = pair.key();
    if !seen.insert((a.to_string(), b.to_string())) {
        debug!(
            "dropping duplicate {} pair {} {}",
            pair.dataset, pair.type_i, pair.type_j
        );
        return false;
    }
    out.push(pair.clone());
    true
}
