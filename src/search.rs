//! LCP-accelerated binary search for pattern occurrences (§4.8), followed
//! by a linear expansion to every other occurrence adjacent to the match in
//! `SA` order (§4.9). Mirrors `searchPrivate`/`findAllOccurances` in
//! `examples/original_source/src/suffixArray.cpp`.

use crate::lcp::EnhancedLcp;

/// Length of the common prefix of `a` and `b`.
fn common_prefix_len(a: &[u32], b: &[u32]) -> usize {
    a.iter().zip(b.iter()).take_while(|(x, y)| x == y).count()
}

/// Every occurrence of `pattern` in the text encoded as `s`, via `sa`/`lcp`.
/// `pattern` must already be encoded the same way as `s` (§4.1's byte+1
/// mapping), but carries no sentinel of its own.
pub fn search(s: &[u32], sa: &[u32], lcp: &EnhancedLcp, pattern: &[u32]) -> Vec<usize> {
    if pattern.is_empty() {
        return Vec::new();
    }

    let mut low = 0usize;
    let mut high = sa.len() - 1;

    let mut llen = common_prefix_len(pattern, &s[sa[low] as usize..]);
    let mut hlen = common_prefix_len(pattern, &s[sa[high] as usize..]);

    if hlen == pattern.len() {
        return expand(sa, lcp.adjacent(), high, pattern.len());
    }
    if llen == pattern.len() {
        return expand(sa, lcp.adjacent(), low, pattern.len());
    }

    while low + 1 < high {
        let mid = (low + high) / 2;
        let lcp_h = lcp.range(mid, high);
        let lcp_l = lcp.range(low, mid);

        if llen <= lcp_h && lcp_h < hlen {
            low = mid;
            llen = lcp_h;
        } else if llen <= hlen && hlen < lcp_h {
            high = mid;
        } else if hlen <= lcp_l && lcp_l < llen {
            high = mid;
            hlen = lcp_l;
        } else if hlen <= llen && llen < lcp_l {
            low = mid;
        } else {
            let start = llen.max(hlen);
            let suffix = &s[sa[mid] as usize + start..];
            let matched = start + common_prefix_len(&pattern[start..], suffix);

            if matched == pattern.len() {
                return expand(sa, lcp.adjacent(), mid, pattern.len());
            } else if suffix[matched - start] < pattern[matched] {
                low = mid;
                llen = matched;
            } else {
                high = mid;
                hlen = matched;
            }
        }
    }

    Vec::new()
}

/// Starting from a single known match at `SA[hit]`, walks outward in both
/// directions while the adjacent LCP stays at least as long as the pattern —
/// every such neighbor shares the same prefix, hence is also a match (§4.9).
fn expand(sa: &[u32], adjacent: &[u32], hit: usize, pattern_len: usize) -> Vec<usize> {
    let mut matches = vec![sa[hit] as usize];

    let mut i = hit;
    while i > 0 && adjacent[i] as usize >= pattern_len {
        i -= 1;
        matches.push(sa[i] as usize);
    }

    let mut i = hit + 1;
    while i < sa.len() && adjacent[i] as usize >= pattern_len {
        matches.push(sa[i] as usize);
        i += 1;
    }

    matches
}
