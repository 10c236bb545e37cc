use super::manifest::ManifestEntry;

/// Rank manifest entries for a query.
///
/// Buckets, in order: exact seq match, any field starting with the query,
/// any field containing it. Manifest order is kept within a bucket. A blank
/// query returns every entry.
pub(crate) fn search_ranked<'a>(entries: &'a [ManifestEntry], query: &str) -> Vec<&'a ManifestEntry> {
    let q = query.trim().to_lowercase();
    if q.is_empty() {
        return entries.iter().collect();
    }

    let mut exact = Vec::new();
    let mut starts = Vec::new();
    let mut contains = Vec::new();

    for entry in entries {
        let seq = entry.seq.to_lowercase();
        let fields = [
            entry.date.to_lowercase(),
            seq.clone(),
            entry.title.to_lowercase(),
            entry.desc.to_lowercase(),
        ];

        if seq == q {
            exact.push(entry);
        } else if fields.iter().any(|f| f.starts_with(&q)) {
            starts.push(entry);
        } else if fields.iter().any(|f| f.contains(&q)) {
            contains.push(entry);
        }
    }

    exact.extend(starts);
    exact.extend(contains);
    exact
}
