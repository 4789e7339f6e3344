use std::collections::BTreeMap;

use anyhow::{Context, Result};

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

    /// Uniform integer in `0..n`.
    fn below(&mut self, n: u64) -> u64 {
        (self.next_f64() * n as f64) as u64
    }
}

/// (placename, type, type_biased, typical yearly count)
const PLACES: &[(&str, &str, &str, u64)] = &[
    ("Australia", "country", "country", 120),
    ("Oceania", "continent", "continent", 15),
    ("New South Wales", "state", "state", 60),
    ("Northern Territory", "territory", "territory", 12),
    ("Sydney", "city", "city", 80),
    ("Melbourne", "city", "city", 70),
    ("Perth", "city", "city", 25),
    ("Darwin", "city", "territory", 6),
    ("Kimberley", "region", "region", 9),
    ("Bondi", "suburb", "city", 4),
    ("Uluru", "landmark", "region", 3),
    ("England", "country", "others", 40),
    ("London", "city", "others", 35),
];

fn main() -> Result<()> {
    let mut rng = SimpleRng::new(42);
    let years = 1990..=2020;

    // (placename, year) → count_year, skipping some years so places differ.
    let mut counts: BTreeMap<(usize, i32), u64> = BTreeMap::new();
    for (p, &(_, _, _, typical)) in PLACES.iter().enumerate() {
        for year in years.clone() {
            if rng.below(4) == 0 {
                continue;
            }
            let count = typical / 2 + rng.below(typical + 1);
            counts.insert((p, year), count);
        }
    }

    let mut totals = vec![0u64; PLACES.len()];
    for (&(p, _), &count) in &counts {
        totals[p] += count;
    }

    let output_path = "location_counts_by_year.csv";
    let mut writer = csv::Writer::from_path(output_path).context("creating output file")?;
    writer.write_record(["", "placename", "year", "type", "type_biased", "count_year", "count_total"])?;

    for (index, (&(p, year), &count)) in counts.iter().enumerate() {
        let (name, kind, biased, _) = PLACES[p];
        writer.write_record([
            index.to_string(),
            name.to_string(),
            year.to_string(),
            kind.to_string(),
            biased.to_string(),
            count.to_string(),
            totals[p].to_string(),
        ])?;
    }
    writer.flush().context("flushing output file")?;

    println!("Wrote {} rows for {} placenames to {output_path}", counts.len(), PLACES.len());
    Ok(())
}
