use std::path::Path;

use anyhow::{Context, Result};
use bsc_filter::{save_catalog, Catalog, StarRecord};
use serde_json::{Map, Value as JsonValue};

const SPECTRAL_CLASSES: [&str; 7] = ["O", "B", "A", "F", "G", "K", "M"];
const LUMINOSITY_CLASSES: [&str; 4] = ["V", "IV", "III", "II"];

const SEED: u64 = 42;
const N_STARS: usize = 500;

/// Deterministic star generator (splitmix64 stream)
struct StarRng {
    state: u64,
}

impl StarRng {
    fn new(seed: u64) -> Self {
        StarRng { state: seed }
    }

    fn next_u64(&mut self) -> u64 {
        self.state = self.state.wrapping_add(0x9e37_79b9_7f4a_7c15);
        let mut z = self.state;
        z = (z ^ (z >> 30)).wrapping_mul(0xbf58_476d_1ce4_e5b9);
        z = (z ^ (z >> 27)).wrapping_mul(0x94d0_49bb_1331_11eb);
        z ^ (z >> 31)
    }

    /// Uniform in `[lo, hi)`.
    fn uniform(&mut self, lo: f64, hi: f64) -> f64 {
        let unit = (self.next_u64() >> 11) as f64 / (1u64 << 53) as f64;
        lo + (hi - lo) * unit
    }

    fn pick<'a>(&mut self, items: &[&'a str]) -> &'a str {
        items[(self.next_u64() % items.len() as u64) as usize]
    }
}

/// Right ascension in hours as `hh:mm:ss.s`.
fn format_ra(hours: f64) -> String {
    let tenths = (hours * 36000.0).round() as u64 % (24 * 36000);
    let (h, rem) = (tenths / 36000, tenths % 36000);
    let (m, rem) = (rem / 600, rem % 600);
    format!("{h:02}:{m:02}:{:02}.{}", rem / 10, rem % 10)
}

/// Declination in degrees as `±dd:mm:ss`.
fn format_dec(degrees: f64) -> String {
    let sign = if degrees < 0.0 { '-' } else { '+' };
    let secs = (degrees.abs() * 3600.0).round() as u64;
    format!(
        "{sign}{:02}:{:02}:{:02}",
        secs / 3600,
        (secs % 3600) / 60,
        secs % 60
    )
}

fn generate_star(rng: &mut StarRng) -> StarRecord {
    let ra = rng.uniform(0.0, 24.0);
    // Uniform on the sphere
    let dec = rng.uniform(-1.0, 1.0).asin().to_degrees();
    // Skewed toward the faint end, like the real catalogue
    let mag = -1.5 + 8.0 * rng.uniform(0.0, 1.0).sqrt();
    let spectral = format!(
        "{}{}{}",
        rng.pick(&SPECTRAL_CLASSES),
        rng.next_u64() % 10,
        rng.pick(&LUMINOSITY_CLASSES)
    );

    let mut fields = Map::new();
    fields.insert("RA".into(), JsonValue::String(format_ra(ra)));
    fields.insert("DEC".into(), JsonValue::String(format_dec(dec)));
    fields.insert("MAG".into(), JsonValue::String(format!("{mag:.2}")));
    fields.insert("Title HD".into(), JsonValue::String(spectral));
    StarRecord::new(fields)
}

fn generate_catalog(seed: u64, n_stars: usize) -> Catalog {
    let mut rng = StarRng::new(seed);
    Catalog::from_records((0..n_stars).map(|_| generate_star(&mut rng)).collect())
}

fn main() -> Result<()> {
    let catalog = generate_catalog(SEED, N_STARS);

    let output_path = Path::new("sample_bsc.json");
    save_catalog(output_path, &catalog)
        .with_context(|| format!("writing sample catalog to {output_path:?}"))?;

    println!("Wrote {} stars to {}", catalog.len(), output_path.display());
    Ok(())
}
