use crate::RandomSource;
use crate::genome::{Genome, random_char};

/// Maps a uniform draw in `[0, 1)` onto `[0, len)` by truncation.
fn scaled_index<R: RandomSource>(len: usize, rng: &mut R) -> usize {
    (rng.next_f32() * len as f32) as usize
}

/// Single-point crossover at a uniformly drawn cut point.
pub fn crossover<R: RandomSource>(dna1: &Genome, dna2: &Genome, rng: &mut R) -> (Genome, Genome) {
    let pos = scaled_index(dna1.len(), rng);
    crossover_at(dna1, dna2, pos)
}

/// Crossover at a known cut point.
///
/// `child1 = dna1[..pos] + dna2[pos..]` and `child2 = dna1[pos..] + dna2[..pos]`.
/// The second child is not the mirror of the first: `dna2[pos..]` only ever
/// reaches `child1`. `pos` is clamped to the shorter parent.
pub fn crossover_at(dna1: &Genome, dna2: &Genome, pos: usize) -> (Genome, Genome) {
    let (a, b) = (dna1.codes(), dna2.codes());
    let pos = pos.min(a.len()).min(b.len());

    let child1 = [&a[..pos], &b[pos..]].concat();
    let child2 = [&a[pos..], &b[..pos]].concat();
    (Genome::from_codes(child1), Genome::from_codes(child2))
}

/// With probability `chance`, replaces one random position with a fresh
/// random character.
///
/// Always consumes one draw for the roll; a successful roll consumes one more
/// for the position and one for the character. Empty genomes are returned
/// unchanged.
pub fn mutate<R: RandomSource>(dna: Genome, chance: f32, rng: &mut R) -> Genome {
    if rng.next_f32() >= chance || dna.is_empty() {
        return dna;
    }
    let mut codes = dna.codes().to_vec();
    let pos = scaled_index(codes.len(), rng).min(codes.len() - 1);
    codes[pos] = random_char(rng);
    Genome::from_codes(codes)
}
