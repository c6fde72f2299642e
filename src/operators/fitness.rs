use crate::genome::{Genome, Target};

/// Sum of absolute per-position code differences. Lower is better, 0 is an
/// exact match.
///
/// Positions beyond the shorter of the two sequences are not compared.
pub fn fitness(genome: &Genome, target: &Target) -> u32 {
    genome
        .codes()
        .iter()
        .zip(target.codes())
        .map(|(&g, &t)| u32::from(g.abs_diff(t)))
        .sum()
}

/// Selection weight for a score: `1.0` for a perfect match, `1 / score`
/// otherwise.
pub fn weight(score: u32) -> f32 {
    if score == 0 { 1.0 } else { 1.0 / score as f32 }
}
