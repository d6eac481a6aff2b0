use crate::report::BrowserShare;

/// Label of the synthetic overflow entry appended by
/// [`summarize_top_browsers`].
pub const OTHERS_LABEL: &str = "Others";

/// Compress a ranked browser list to exactly `max_results` entries.
///
/// Keeps the first `max_results - 1` entries unchanged, in input order, and
/// appends a single synthetic entry labelled [`OTHERS_LABEL`] whose session
/// count is the sum over everything from position `max_results - 1` onward.
/// The input is expected to already be sorted descending by sessions; this
/// function never sorts.
///
/// Callers must ensure `max_results < ranked.len()`; lists that already fit
/// are returned unchanged at the facade level and never reach this function.
/// With `max_results` of 0 or 1 the kept prefix is empty and the result is a
/// single overflow entry summing every session in the input.
pub fn summarize_top_browsers(ranked: Vec<BrowserShare>, max_results: usize) -> Vec<BrowserShare> {
    let mut summarized = ranked;
    let overflow: u64 = summarized
        .split_off(max_results.saturating_sub(1))
        .into_iter()
        .map(|share| share.sessions)
        .sum();
    summarized.push(BrowserShare::new(OTHERS_LABEL, overflow));
    summarized
}
