//! Generate a deterministic synthetic `autos.csv` in the original snapshot
//! layout: 20 camelCase columns, decorated price/odometer strings, Latin-1
//! bytes. Includes a sprinkle of the outliers the real snapshot has (zero
//! prices, impossible registration years) so the plausibility filters have
//! something to remove.

use serde::Serialize;

use autos_eda::data::schema::COLUMN_RENAMES;

/// One row in the original snapshot layout. Serialized through
/// `csv::Writer::serialize`, so field order and renames define the header;
/// a unit test pins it against [`COLUMN_RENAMES`].
#[derive(Debug, Serialize)]
struct SnapshotRow {
    #[serde(rename = "dateCrawled")]
    date_crawled: String,
    name: String,
    seller: String,
    #[serde(rename = "offerType")]
    offer_type: String,
    /// Decorated, e.g. "$5,000".
    price: String,
    abtest: String,
    #[serde(rename = "vehicleType")]
    vehicle_type: String,
    #[serde(rename = "yearOfRegistration")]
    year_of_registration: u64,
    gearbox: String,
    #[serde(rename = "powerPS")]
    power_ps: u64,
    model: String,
    /// Decorated, e.g. "150,000km".
    odometer: String,
    #[serde(rename = "monthOfRegistration")]
    month_of_registration: u64,
    #[serde(rename = "fuelType")]
    fuel_type: String,
    brand: String,
    #[serde(rename = "notRepairedDamage")]
    not_repaired_damage: String,
    #[serde(rename = "dateCreated")]
    date_created: String,
    #[serde(rename = "nrOfPictures")]
    nr_of_pictures: u64,
    #[serde(rename = "postalCode")]
    postal_code: u64,
    #[serde(rename = "lastSeen")]
    last_seen: String,
}

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

    /// Uniform integer in [lo, hi).
    fn range(&mut self, lo: u64, hi: u64) -> u64 {
        lo + self.next_u64() % (hi - lo)
    }

    fn pick<'a, T>(&mut self, items: &'a [T]) -> &'a T {
        &items[(self.next_u64() % items.len() as u64) as usize]
    }
}

/// (brand, cumulative share, typical price range)
const BRANDS: &[(&str, f64, (u64, u64))] = &[
    ("volkswagen", 0.21, (1_500, 9_000)),
    ("bmw", 0.32, (4_000, 15_000)),
    ("opel", 0.43, (1_000, 5_000)),
    ("mercedes_benz", 0.53, (4_000, 16_000)),
    ("audi", 0.62, (4_500, 16_000)),
    ("ford", 0.69, (1_200, 5_500)),
    ("renault", 0.74, (1_000, 4_000)),
    ("peugeot", 0.77, (1_000, 4_500)),
    ("fiat", 0.80, (900, 4_000)),
    ("seat", 0.82, (1_500, 6_000)),
    ("skoda", 0.84, (2_000, 7_000)),
    ("mazda", 0.86, (1_500, 6_000)),
    ("nissan", 0.88, (1_500, 6_000)),
    ("citroen", 0.90, (1_000, 4_500)),
    ("toyota", 0.92, (2_000, 7_500)),
    ("hyundai", 0.94, (2_000, 7_000)),
    ("volvo", 0.96, (2_500, 9_000)),
    ("mini", 0.98, (5_000, 14_000)),
    ("smart", 1.00, (1_500, 5_000)),
];

const NAMES: &[&str] = &[
    "Golf_3_1.6",
    "Grüner_Kombi_mit_Anhängerkupplung",
    "Schönes_Cabrio",
    "Zuverlässiger_Kleinwagen",
    "Limousine_Vollausstattung",
    "Coupé_Tüv_neu",
    "Familienauto_8_fach_bereift",
    "Oldtimer_für_Bastler",
];

const VEHICLE_TYPES: &[&str] = &["limousine", "kleinwagen", "kombi", "bus", "cabrio", "coupe", ""];
const GEARBOXES: &[&str] = &["manuell", "manuell", "automatik", ""];
const FUEL_TYPES: &[&str] = &["benzin", "benzin", "diesel", ""];
const DAMAGE: &[&str] = &["nein", "nein", "nein", "ja", ""];
const ODOMETERS: &[u64] = &[
    5_000, 10_000, 20_000, 30_000, 40_000, 50_000, 60_000, 70_000, 80_000, 90_000, 100_000,
    125_000, 150_000, 150_000, 150_000,
];

fn thousands(n: u64) -> String {
    let digits = n.to_string();
    let mut out = String::new();
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}

fn pick_brand(rng: &mut SimpleRng) -> &'static (&'static str, f64, (u64, u64)) {
    let roll = rng.next_f64();
    BRANDS
        .iter()
        .find(|&&(_, cumulative, _)| roll < cumulative)
        .unwrap_or(&BRANDS[BRANDS.len() - 1])
}

fn synthesize_row(rng: &mut SimpleRng, row_id: u64) -> SnapshotRow {
    let &(brand, _, (price_lo, price_hi)) = pick_brand(rng);

    // ~2% zero prices and a few absurd registration years, like the real
    // snapshot.
    let price = if rng.next_f64() < 0.02 {
        0
    } else {
        rng.range(price_lo, price_hi)
    };
    let year = match row_id % 167 {
        0 => 5000,
        83 => 1111,
        _ => rng.range(1995, 2017),
    };

    let crawl_day = rng.range(5, 31);
    let created_day = crawl_day.saturating_sub(rng.range(0, 5)).max(1);
    let seen_day = rng.range(1, 7);

    SnapshotRow {
        date_crawled: format!(
            "2016-03-{:02} {:02}:{:02}:{:02}",
            crawl_day,
            rng.range(0, 24),
            rng.range(0, 60),
            rng.range(0, 60)
        ),
        name: (*rng.pick(NAMES)).to_string(),
        seller: "privat".to_string(),
        offer_type: "Angebot".to_string(),
        price: format!("${}", thousands(price)),
        abtest: (if rng.next_f64() < 0.5 { "test" } else { "control" }).to_string(),
        vehicle_type: (*rng.pick(VEHICLE_TYPES)).to_string(),
        year_of_registration: year,
        gearbox: (*rng.pick(GEARBOXES)).to_string(),
        power_ps: rng.range(45, 240),
        model: (if rng.next_f64() < 0.9 { "golf" } else { "" }).to_string(),
        odometer: format!("{}km", thousands(*rng.pick(ODOMETERS))),
        month_of_registration: rng.range(0, 13),
        fuel_type: (*rng.pick(FUEL_TYPES)).to_string(),
        brand: brand.to_string(),
        not_repaired_damage: (*rng.pick(DAMAGE)).to_string(),
        date_created: format!("2016-03-{created_day:02} 00:00:00"),
        nr_of_pictures: 0,
        postal_code: rng.range(1_067, 99_998),
        last_seen: format!(
            "2016-04-{:02} {:02}:{:02}:{:02}",
            seen_day,
            rng.range(0, 24),
            rng.range(0, 60),
            rng.range(0, 60)
        ),
    }
}

fn main() {
    let mut rng = SimpleRng::new(42);
    let row_count = 500u64;

    let mut writer = csv::Writer::from_writer(Vec::new());
    for row_id in 0..row_count {
        let row = synthesize_row(&mut rng, row_id);
        writer.serialize(&row).expect("Failed to write record");
    }

    let utf8 = writer.into_inner().expect("Failed to flush CSV buffer");
    let text = String::from_utf8(utf8).expect("CSV output is valid UTF-8");

    // The real snapshot is Latin-1; re-encode so the loader's decode path
    // gets exercised on the umlauts in the car names.
    let (bytes, _, unmappable) = encoding_rs::WINDOWS_1252.encode(&text);
    assert!(!unmappable, "sample text must be representable in Latin-1");

    let output_path = "autos.csv";
    std::fs::write(output_path, &bytes).expect("Failed to write output file");

    println!(
        "Wrote {row_count} listings ({} columns) to {output_path}",
        COLUMN_RENAMES.len()
    );
}
