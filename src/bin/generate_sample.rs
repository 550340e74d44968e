use std::path::Path;

use anyhow::{Context, Result};
use scripture_viz::data::model::FrequencyRecord;

/// Vocabulary of the synthetic corpus, most frequent first. Mixes function
/// words, thematic terms and ordinary content words.
const VOCABULARY: &[&str] = &[
    "the", "and", "of", "to", "that", "in", "he", "shall", "unto", "I", "his", "a", "for",
    "they", "be", "is", "him", "LORD", "not", "them", "it", "with", "all", "thou", "thy",
    "was", "God", "which", "my", "me", "said", "but", "ye", "their", "have", "will", "thee",
    "from", "as", "are", "when", "this", "out", "were", "upon", "man", "by", "you", "Israel",
    "king", "son", "up", "there", "hath", "then", "people", "came", "had", "house", "into",
    "on", "her", "come", "one", "we", "children", "before", "your", "also", "day", "land",
    "men", "against", "hand", "Jesus", "saying", "Christ", "holy", "heaven", "earth", "David",
    "Moses", "sin", "love", "faith", "Jerusalem", "spirit", "father", "prophet", "blessing",
    "hope", "angel", "pray", "worship", "hell", "glory", "peace", "mercy", "grace", "truth",
    "light", "water", "bread", "covenant", "temple", "servant", "voice", "fire", "wilderness",
    "mountain", "sword", "priest", "sabbath", "altar", "gold", "silver", "river", "lamb",
];

/// Minimal deterministic PRNG (xoshiro256**)
struct SimpleRng {
    state: [u64; 4],
}

impl SimpleRng {
    fn new(seed: u64) -> Self {
        let mut s = [0u64; 4];
        let mut x = seed;
        for slot in &mut s {
            x = x.wrapping_mul(6364136223846793005).wrapping_add(1);
            *slot = x;
        }
        SimpleRng { state: s }
    }

    fn next_u64(&mut self) -> u64 {
        let result = (self.state[1].wrapping_mul(5))
            .rotate_left(7)
            .wrapping_mul(9);
        let t = self.state[1] << 17;
        self.state[2] ^= self.state[0];
        self.state[3] ^= self.state[1];
        self.state[1] ^= self.state[2];
        self.state[0] ^= self.state[3];
        self.state[2] ^= t;
        self.state[3] = self.state[3].rotate_left(45);
        result
    }

    fn next_f64(&mut self) -> f64 {
        (self.next_u64() >> 11) as f64 / (1u64 << 53) as f64
    }
}

/// Zipf-like count for the word at `rank` (0-based), with ±20 % jitter.
fn zipf_count(rank: usize, top: f64, rng: &mut SimpleRng) -> u64 {
    let base = top / (rank as f64 + 1.0);
    let jitter = 0.8 + 0.4 * rng.next_f64();
    (base * jitter).round().max(1.0) as u64
}

fn main() -> Result<()> {
    let mut rng = SimpleRng::new(42);

    let output_path = Path::new("./tmp/bible_word_count.txt");
    if let Some(parent) = output_path.parent() {
        std::fs::create_dir_all(parent).context("creating output directory")?;
    }

    let mut writer = csv::WriterBuilder::new()
        .delimiter(b'\t')
        .has_headers(false)
        .from_path(output_path)
        .context("creating output file")?;

    for (rank, &word) in VOCABULARY.iter().enumerate() {
        let count = zipf_count(rank, 64_000.0, &mut rng);
        writer
            .serialize(FrequencyRecord::new(word, count))
            .with_context(|| format!("writing '{word}'"))?;
    }
    writer.flush().context("flushing output file")?;

    println!(
        "Wrote {} word counts to {}",
        VOCABULARY.len(),
        output_path.display()
    );
    Ok(())
}
