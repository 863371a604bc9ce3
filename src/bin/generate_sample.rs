use anyhow::{Context, Result};
use job_market_dashboard::data::model::JobPosting;

const OUTPUT_PATH: &str = "cleaned_job_market_data.csv";
const ROWS: usize = 2_000;

/// (city, relative pay level, share of tech postings)
const CITIES: [(&str, f64, f64); 12] = [
    ("Bengaluru", 1.35, 0.70),
    ("Hyderabad", 1.25, 0.65),
    ("Pune", 1.15, 0.60),
    ("Gurugram", 1.20, 0.55),
    ("Mumbai", 1.18, 0.40),
    ("Noida", 1.05, 0.50),
    ("Chennai", 1.08, 0.55),
    ("Delhi", 1.02, 0.35),
    ("Kolkata", 0.88, 0.30),
    ("Ahmedabad", 0.85, 0.30),
    ("Jaipur", 0.78, 0.25),
    ("Kochi", 0.80, 0.35),
];

/// Seedable SplitMix64 generator.
struct SampleRng(u64);

impl SampleRng {
    fn next_u64(&mut self) -> u64 {
        self.0 = self.0.wrapping_add(0x9E37_79B9_7F4A_7C15);
        let mut z = self.0;
        z = (z ^ (z >> 30)).wrapping_mul(0xBF58_476D_1CE4_E5B9);
        z = (z ^ (z >> 27)).wrapping_mul(0x94D0_49BB_1331_11EB);
        z ^ (z >> 31)
    }

    /// Uniform in `[0, 1)`.
    fn unit(&mut self) -> f64 {
        (self.next_u64() >> 11) as f64 * (1.0 / (1u64 << 53) as f64)
    }

    /// Uniform index in `0..n`.
    fn below(&mut self, n: usize) -> usize {
        (self.unit() * n as f64) as usize
    }

    /// Multiplicative pay noise around 1.0, approximately normal (Irwin-Hall of 12 uniforms).
    fn pay_noise(&mut self, spread: f64) -> f64 {
        let z: f64 = (0..12).map(|_| self.unit()).sum::<f64>() - 6.0;
        1.0 + spread * z
    }
}

fn generate_posting(rng: &mut SampleRng) -> JobPosting {
    let (city, pay_level, tech_share) = CITIES[rng.below(CITIES.len())];
    let is_tech = rng.unit() < tech_share;

    // Experience comes in half-year steps so the trend chart has repeated values.
    let average_experience = (rng.below(31) as f64) * 0.5;

    let base = 250_000.0 + average_experience * 85_000.0 + if is_tech { 150_000.0 } else { 0.0 };
    let noise = rng.pay_noise(0.15).max(0.4);
    let average_salary = (base * pay_level * noise / 1_000.0).round() * 1_000.0;

    JobPosting {
        location: city.to_string(),
        is_tech,
        average_salary,
        average_experience,
    }
}

fn main() -> Result<()> {
    let mut rng = SampleRng(42);

    let mut writer = csv::Writer::from_path(OUTPUT_PATH)
        .with_context(|| format!("creating {OUTPUT_PATH}"))?;
    for _ in 0..ROWS {
        writer
            .serialize(generate_posting(&mut rng))
            .context("writing posting")?;
    }
    writer.flush().context("flushing CSV writer")?;

    println!("Wrote {ROWS} postings across {} cities to {OUTPUT_PATH}", CITIES.len());
    Ok(())
}
