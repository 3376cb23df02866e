//! Item matching components
//!
//! This module contains components to do with finding matches for a given item: abbreviated
//! long-option name lookup with ambiguity detection, and (behind the `suggestions` feature)
//! "did you mean" hinting for unrecognized long options.

/// Find a match for a name (a long option), optionally allowing for unambiguous abbreviations
///
/// Returns `Err(())` if more than one candidate is an equally-valid abbreviated match and no exact
/// match exists (ambiguous); otherwise `Ok(Some(_))` or `Ok(None)`.
pub fn find_name_match<'a, T>(needle: &str, haystack: impl Iterator<Item = &'a T>,
    get_name: impl Fn(&'a T) -> &'a str, abbreviations: bool) -> Result<Option<&'a T>, ()>
{
    let mut matched: Option<&T> = None;
    let mut ambiguity = false;
    for candidate in haystack {
        let cand_name = get_name(candidate);
        // Exact match overrules any previously found partial match/ambiguity.
        if cand_name == needle {
            matched = Some(candidate);
            ambiguity = false;
            break;
        }
        else if abbreviations && !ambiguity && needle.len() < cand_name.len()
            && cand_name.as_bytes()[..needle.len()] == *needle.as_bytes()
        {
            match matched {
                Some(_) => { ambiguity = true; },
                None => { matched = Some(candidate); },
            }
        }
    }
    match ambiguity {
        true => Err(()),
        false => Ok(matched),
    }
}

/// Find the best `jaro_winkler` match for an unrecognized name among candidates
///
/// Filters out any candidate scoring below `0.8`, and returns the first candidate with the
/// highest score, matching the behaviour of `OptionSet::suggest` elsewhere in this crate.
#[cfg(feature = "suggestions")]
pub fn suggest<'a, T: 'a>(unknown: &str, candidates: impl Iterator<Item = &'a T>,
    get_name: impl Fn(&'a T) -> &'a str) -> Option<&'a str>
{
    let mut best: Option<(&str, f64)> = None;
    for candidate in candidates {
        let name = get_name(candidate);
        let score = strsim::jaro_winkler(unknown, name);
        if score < 0.8 {
            continue;
        }
        match best {
            Some((_, best_score)) if best_score >= score => {},
            _ => { best = Some((name, score)); },
        }
    }
    best.map(|(name, _)| name)
}
