use rand::seq::SliceRandom;
use rand::Rng;
use std::num::IntErrorKind;

pub const DEFAULT_SAMPLE_SIZE: usize = 5;

/// Resolve the requested sample size from a raw `--number` value.
///
/// A missing, non-numeric or negative value falls back to the default.
/// A count too large for `usize` saturates, so sampling clamps it.
pub fn parse_sample_size(raw: Option<&str>) -> usize {
    let Some(raw) = raw else {
        return DEFAULT_SAMPLE_SIZE;
    };

    match raw.trim().parse::<usize>() {
        Ok(n) => n,
        Err(e) if *e.kind() == IntErrorKind::PosOverflow => usize::MAX,
        Err(_) => DEFAULT_SAMPLE_SIZE,
    }
}

/// Draw up to `n` distinct configs uniformly at random.
pub fn sample(configs: &[String], n: usize) -> Vec<String> {
    let mut rng = rand::thread_rng();
    sample_with(configs, n, &mut rng)
}

pub fn sample_with<R: Rng + ?Sized>(configs: &[String], n: usize, rng: &mut R) -> Vec<String> {
    let mut picked: Vec<String> = configs.to_vec();
    picked.shuffle(rng);
    picked.truncate(n.min(configs.len()));
    picked
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;
    use std::collections::HashSet;

    fn configs(n: usize) -> Vec<String> {
        (0..n).map(|i| format!("vmess://{}", i)).collect()
    }

    #[test]
    fn sample_size_falls_back_to_default() {
        assert_eq!(parse_sample_size(None), 5);
        assert_eq!(parse_sample_size(Some("abc")), 5);
        assert_eq!(parse_sample_size(Some("-3")), 5);
        assert_eq!(parse_sample_size(Some("")), 5);
        assert_eq!(parse_sample_size(Some("12")), 12);
        assert_eq!(parse_sample_size(Some("0")), 0);
        assert_eq!(parse_sample_size(Some("-99999999999999999999")), 5);
    }

    #[test]
    fn huge_count_saturates_and_clamps() {
        let n = parse_sample_size(Some("99999999999999999999"));
        assert_eq!(n, usize::MAX);

        let all = configs(20);
        let picked = sample(&all, n);
        assert_eq!(picked.len(), 20);
        let unique: HashSet<_> = picked.iter().collect();
        assert_eq!(unique.len(), 20);
    }

    #[test]
    fn samples_distinct_members() {
        let all = configs(50);
        for n in [0, 1, 5, 49, 50] {
            let picked = sample(&all, n);
            assert_eq!(picked.len(), n);
            let unique: HashSet<_> = picked.iter().collect();
            assert_eq!(unique.len(), n);
            assert!(picked.iter().all(|p| all.contains(p)));
        }
    }

    #[test]
    fn clamps_to_available() {
        let all = configs(5);
        let picked = sample(&all, 8);
        assert_eq!(picked.len(), 5);
        let unique: HashSet<_> = picked.iter().collect();
        assert_eq!(unique.len(), 5);
    }

    #[test]
    fn seeded_rng_is_reproducible() {
        let all = configs(20);
        let a = sample_with(&all, 4, &mut StdRng::seed_from_u64(7));
        let b = sample_with(&all, 4, &mut StdRng::seed_from_u64(7));
        assert_eq!(a, b);
    }

    #[test]
    fn empty_input_gives_empty_sample() {
        assert!(sample(&[], 5).is_empty());
    }
}
