//! Randomized agreement testing against a brute-force oracle, in the style
//! of the teacher's `src/tests.rs`: generate random byte strings and
//! patterns over a small alphabet (to force repeats and LMS collisions) and
//! check `SuffixIndex::search` against a naive scan.

use crate::SuffixIndex;
use rand::random;
use std::ops::Range;

fn naive_search(s: &[u8], pattern: &[u8]) -> Vec<usize> {
    if pattern.is_empty() || pattern.len() > s.len() {
        return Vec::new();
    }
    (0..=s.len() - pattern.len())
        .filter(|&i| &s[i..i + pattern.len()] == pattern)
        .collect()
}

fn gen_bytes(len: Range<usize>, scale: Range<u8>) -> Vec<u8> {
    let n = len.start + random::<usize>() % (len.end - len.start);
    let k = scale.start + random::<u8>() % (scale.end - scale.start);
    let mut v = Vec::with_capacity(n);
    for _ in 0..n {
        v.push(random::<u8>() % k);
    }
    v
}

fn gen_sample(
    text_len: Range<usize>,
    pattern_len: Range<usize>,
    trailing_len: Range<usize>,
    scale: Range<u8>,
) -> (Vec<u8>, Vec<u8>) {
    let text = gen_bytes(text_len, scale.clone());
    let plen = pattern_len.start + random::<usize>() % (pattern_len.end - pattern_len.start);
    let pstart = random::<usize>() % (text.len().saturating_sub(plen) + 1);
    let mut pattern: Vec<u8> = text[pstart..Ord::min(text.len(), pstart + plen)].into();
    pattern.append(&mut gen_bytes(trailing_len, scale));
    (text, pattern)
}

fn check(text: &[u8], pattern: &[u8]) {
    let index = SuffixIndex::new(text);
    let mut got = index.search(pattern);
    got.sort_unstable();
    let want = naive_search(text, pattern);
    assert_eq!(
        got, want,
        "text={:?} pattern={:?} sa={:?}",
        text,
        pattern,
        index.sa()
    );
}

#[test]
fn random_small_alphabet_samples() {
    const SAMPLES: usize = 500;
    const TEXT_LEN: Range<usize> = 0..300;
    const PATTERN_LEN: Range<usize> = 0..12;
    const TRAILING_LEN: Range<usize> = 0..2;
    const SCALE: Range<u8> = 1..4;

    for _ in 0..SAMPLES {
        let (text, pattern) = gen_sample(TEXT_LEN, PATTERN_LEN, TRAILING_LEN, SCALE);
        check(&text, &pattern);
    }
}

#[test]
fn random_wide_alphabet_samples() {
    const SAMPLES: usize = 300;
    const TEXT_LEN: Range<usize> = 0..500;
    const PATTERN_LEN: Range<usize> = 0..8;
    const TRAILING_LEN: Range<usize> = 0..4;
    const SCALE: Range<u8> = 32..255;

    for _ in 0..SAMPLES {
        let (text, pattern) = gen_sample(TEXT_LEN, PATTERN_LEN, TRAILING_LEN, SCALE);
        check(&text, &pattern);
    }
}

#[test]
fn random_samples_force_recursion() {
    // Small scale plus text well above the naive-sort threshold maximizes
    // LMS-substring collisions, forcing several levels of SA-IS recursion.
    const SAMPLES: usize = 100;
    const TEXT_LEN: Range<usize> = 200..2000;
    const PATTERN_LEN: Range<usize> = 0..16;
    const TRAILING_LEN: Range<usize> = 0..2;
    const SCALE: Range<u8> = 1..3;

    for _ in 0..SAMPLES {
        let (text, pattern) = gen_sample(TEXT_LEN, PATTERN_LEN, TRAILING_LEN, SCALE);
        check(&text, &pattern);
    }
}
