// src/latex/normalize.rs
//! Deduplication of overlapping descriptive fragments.

const FRAGMENT_SEPARATOR: &str = ", ";

/// Keep the most specific phrasing among fragments describing one entity.
///
/// Fragments are compared case-insensitively after trimming. A fragment that
/// is contained in an accepted one is dropped; one that contains accepted
/// fragments replaces the first of them in place and removes the rest.
pub fn dedupe_fragments<'a, I>(fragments: I) -> Vec<String>
where
    I: IntoIterator<Item = Option<&'a str>>,
{
    let mut accepted: Vec<String> = Vec::new();

    for fragment in fragments.into_iter().flatten() {
        let fragment = fragment.trim();
        if fragment.is_empty() {
            continue;
        }
        let lowered = fragment.to_lowercase();

        if accepted
            .iter()
            .any(|kept| kept.to_lowercase().contains(&lowered))
        {
            continue;
        }

        let superseded: Vec<usize> = accepted
            .iter()
            .enumerate()
            .filter(|(_, kept)| lowered.contains(&kept.to_lowercase()))
            .map(|(idx, _)| idx)
            .collect();

        match superseded.split_first() {
            Some((&first, rest)) => {
                accepted[first] = fragment.to_string();
                for &idx in rest.iter().rev() {
                    accepted.remove(idx);
                }
            }
            None => accepted.push(fragment.to_string()),
        }
    }

    accepted
}

/// [`dedupe_fragments`] joined with `", "`.
pub fn normalize_fragments<'a, I>(fragments: I) -> String
where
    I: IntoIterator<Item = Option<&'a str>>,
{
    dedupe_fragments(fragments).join(FRAGMENT_SEPARATOR)
}
