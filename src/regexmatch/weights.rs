use serde::{Deserialize, Serialize};

/// Edit counts reported by an approximate-regex engine for one hit:
/// how many substitutions, insertions, and deletions the engine applied
/// to make the pattern fit.
///
/// The bundled engine is exact, so its hits carry all-zero counts; the
/// field exists so a fuzzy engine can be slotted in without changing the
/// scoring policy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct FuzzyCounts {
    pub subs: u32,
    pub ins: u32,
    pub dels: u32,
}

impl FuzzyCounts {
    #[must_use]
    pub fn is_zero(&self) -> bool {
        *self == Self::default()
    }
}

/// Weighting scheme for turning edit counts into a ratio.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum CountWeights {
    /// Substitutions cost double an insertion or deletion
    #[default]
    Indel,
    /// Uniform costs (plain Levenshtein)
    Lev,
}

impl CountWeights {
    /// (insertion, deletion, substitution) weights
    #[must_use]
    pub fn weights(self) -> (u32, u32, u32) {
        match self {
            Self::Indel => (1, 1, 2),
            Self::Lev => (1, 1, 1),
        }
    }
}

/// Normalize a hit's edit counts to a ratio in [0, 100].
///
/// `match_len` is the character length of the matched text. The maximum
/// possible weighted distance between the pattern side and the matched
/// side is computed from the weights and the implied pattern length
/// (matched length minus insertions plus deletions), then the weighted
/// count total is scaled against it. All-zero counts short-circuit to
/// 100.
#[must_use]
pub fn normalize_counts(match_len: usize, counts: FuzzyCounts, scheme: CountWeights) -> u32 {
    if counts.is_zero() {
        return 100;
    }

    let (w_ins, w_del, w_sub) = scheme.weights();
    let s2_len = match_len as i64;
    let s1_len = s2_len - i64::from(counts.ins) + i64::from(counts.dels);

    let weighted_total =
        i64::from(counts.ins * w_ins) + i64::from(counts.dels * w_del) + i64::from(counts.subs * w_sub);

    let mut dist_max = if w_sub <= w_ins + w_del {
        s1_len.min(s2_len) * i64::from(w_sub)
    } else {
        s1_len * i64::from(w_del) + s2_len * i64::from(w_ins)
    };
    if s1_len > s2_len {
        dist_max += (s1_len - s2_len) * i64::from(w_del);
    } else if s1_len < s2_len {
        dist_max += (s2_len - s1_len) * i64::from(w_ins);
    }

    if dist_max <= 0 {
        return 0;
    }

    #[allow(clippy::cast_precision_loss, clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    let ratio = (100.0 - 100.0 * weighted_total as f64 / dist_max as f64).round() as i64;
    ratio.clamp(0, 100) as u32
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_zero_counts_score_100() {
        assert_eq!(normalize_counts(10, FuzzyCounts::default(), CountWeights::Indel), 100);
    }

    #[test]
    fn test_single_substitution_indel_vs_lev() {
        let counts = FuzzyCounts {
            subs: 1,
            ins: 0,
            dels: 0,
        };
        // indel weights a substitution at 2 against a max of 2 * len
        assert_eq!(normalize_counts(10, counts, CountWeights::Indel), 90);
        // lev weights it at 1 against a max of len
        assert_eq!(normalize_counts(10, counts, CountWeights::Lev), 90);
    }

    #[test]
    fn test_insertion_shrinks_pattern_side() {
        let counts = FuzzyCounts {
            subs: 0,
            ins: 2,
            dels: 0,
        };
        // s1 = 8, s2 = 10 under indel: dist_max = 8*2 + 2*1 = 18, total 2
        assert_eq!(normalize_counts(10, counts, CountWeights::Indel), 89);
    }

    #[test]
    fn test_heavily_edited_match_scores_low() {
        let counts = FuzzyCounts {
            subs: 4,
            ins: 0,
            dels: 0,
        };
        // 8 weighted edits against a max of 10 under indel on len 5:
        // s1 = s2 = 5, dist_max = 10, ratio = 20
        assert_eq!(normalize_counts(5, counts, CountWeights::Indel), 20);
    }
}
