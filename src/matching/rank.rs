use crate::core::types::SpanMatch;

/// Order one query's matches and drop redundant duplicates.
///
/// Sort key: ascending start, then descending window length, then
/// descending ratio. A match fully subsumed by an earlier-ordered match
/// from the same query is redundant and removed; partial overlaps survive
/// here because cross-match overlap resolution belongs to the downstream
/// ruler. The result is stable under repeated invocation — consumers rely
/// on reproducible ordering.
#[must_use]
pub fn rank(mut matches: Vec<SpanMatch>) -> Vec<SpanMatch> {
    matches.sort_by(|a, b| {
        a.start
            .cmp(&b.start)
            .then(b.len().cmp(&a.len()))
            .then(b.ratio.cmp(&a.ratio))
    });

    let mut kept: Vec<SpanMatch> = Vec::with_capacity(matches.len());
    for m in matches {
        if !kept.iter().any(|k| m.subsumed_by(k)) {
            kept.push(m);
        }
    }
    kept
}
