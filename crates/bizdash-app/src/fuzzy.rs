//! Subsequence matching used by the command palette.

const MATCH: i32 = 10;
const ADJACENT: i32 = 15;
const WORD_START: i32 = 10;
const PREFIX: i32 = 20;

/// Indices of `candidates` containing every query character in order,
/// best score first. Ties keep the original order.
pub fn fuzzy_filter<S: AsRef<str>>(query: &str, candidates: &[S]) -> Vec<usize> {
    let needle: Vec<char> = query.trim().to_lowercase().chars().collect();
    if needle.is_empty() {
        return (0..candidates.len()).collect();
    }

    let mut scored: Vec<(usize, i32)> = candidates
        .iter()
        .enumerate()
        .filter_map(|(idx, c)| score(&needle, c.as_ref()).map(|s| (idx, s)))
        .collect();

    scored.sort_by(|a, b| b.1.cmp(&a.1).then(a.0.cmp(&b.0)));
    scored.into_iter().map(|(idx, _)| idx).collect()
}

/// `None` when `needle` is not a subsequence of `candidate`.
fn score(needle: &[char], candidate: &str) -> Option<i32> {
    let hay: Vec<char> = candidate.to_lowercase().chars().collect();

    let mut total = 0;
    let mut next = 0;
    let mut last_hit: Option<usize> = None;

    for (pos, ch) in hay.iter().enumerate() {
        if next == needle.len() {
            break;
        }
        if *ch != needle[next] {
            continue;
        }

        total += MATCH;
        if pos == 0 {
            total += PREFIX;
        }
        if last_hit.is_some_and(|prev| prev + 1 == pos) {
            total += ADJACENT;
        }
        if pos == 0 || !hay[pos - 1].is_alphanumeric() {
            total += WORD_START;
        }

        last_hit = Some(pos);
        next += 1;
    }

    if next < needle.len() {
        return None;
    }

    // shorter candidates win ties
    Some(total - hay.len() as i32 / 5)
}
