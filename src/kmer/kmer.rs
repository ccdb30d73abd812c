/// Number of k-mers a sequence of `len` characters yields, `max(0, len - k + 1)`.
pub fn kmer_count(len: usize, k: usize) -> usize {
    (len + 1).saturating_sub(k)
}

/// Sliding windows of `k` characters over a read, positions `0..=len-k`.
///
/// Windows are cut on character boundaries, so any character of the read,
/// including multibyte ones, passes through unchanged. Reads shorter than `k`
/// and `k == 0` yield nothing.
pub fn kmer_windows(seq: &str, k: usize) -> impl Iterator<Item = &str> + '_ {
    let bounds: Vec<usize> = seq
        .char_indices()
        .map(|(i, _)| i)
        .chain(std::iter::once(seq.len()))
        .collect();
    let count = if k == 0 {
        0
    } else {
        kmer_count(bounds.len() - 1, k)
    };
    (0..count).map(move |i| &seq[bounds[i]..bounds[i + k]])
}

/// Splits a k-mer into its (k-1)-mer prefix and suffix, the source and
/// destination of the edge it represents.
pub fn split_kmer(kmer: &str) -> (&str, &str) {
    let last = kmer.char_indices().last().map_or(0, |(i, _)| i);
    let first_len = kmer.chars().next().map_or(0, char::len_utf8);
    (&kmer[..last], &kmer[first_len..])
}
