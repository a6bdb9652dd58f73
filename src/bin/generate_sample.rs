use std::path::Path;
use std::sync::Arc;

use anyhow::{Context, Result};
use arrow::array::{Float64Array, Int64Array, StringArray};
use arrow::datatypes::{DataType, Field, Schema};
use arrow::record_batch::RecordBatch;
use parquet::arrow::ArrowWriter;

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

    /// Uniform in `[lo, hi)`.
    fn range(&mut self, lo: f64, hi: f64) -> f64 {
        let unit = (self.next_u64() >> 11) as f64 / (1u64 << 53) as f64;
        lo + unit * (hi - lo)
    }
}

struct Product {
    id: i64,
    name: String,
    brand: &'static str,
    price: f64,
    rating: f64,
}

const CATALOGUE: &[(&str, &[&str], f64)] = &[
    ("apple", &["iphone 15 pro", "iphone 14", "iphone se"], 900.0),
    ("samsung", &["galaxy s23 ultra", "galaxy a54", "galaxy z flip5"], 700.0),
    ("xiaomi", &["redmi note 12", "poco x5", "13t pro"], 300.0),
    ("google", &["pixel 8", "pixel 7a"], 600.0),
];

fn generate(rng: &mut SimpleRng) -> Vec<Product> {
    let mut products = Vec::new();
    let mut id = 0;
    for &(brand, models, base_price) in CATALOGUE {
        for model in models {
            id += 1;
            // whole-dollar prices and one-decimal ratings, like a hand-made fixture
            let price = (base_price * rng.range(0.6, 1.4)).round();
            let rating = (rng.range(3.5, 5.0) * 10.0).round() / 10.0;
            products.push(Product {
                id,
                name: model.to_string(),
                brand,
                price,
                rating,
            });
        }
    }
    products
}

fn write_csv(path: &Path, products: &[Product]) -> Result<()> {
    let mut writer = csv::Writer::from_path(path).context("creating CSV file")?;
    writer.write_record(["id", "name", "brand", "price", "rating"])?;
    for p in products {
        writer.write_record([
            p.id.to_string(),
            p.name.clone(),
            p.brand.to_string(),
            p.price.to_string(),
            p.rating.to_string(),
        ])?;
    }
    writer.flush().context("flushing CSV file")?;
    Ok(())
}

fn write_parquet(path: &Path, products: &[Product]) -> Result<()> {
    let schema = Arc::new(Schema::new(vec![
        Field::new("id", DataType::Int64, false),
        Field::new("name", DataType::Utf8, false),
        Field::new("brand", DataType::Utf8, false),
        Field::new("price", DataType::Float64, false),
        Field::new("rating", DataType::Float64, false),
    ]));

    let batch = RecordBatch::try_new(
        schema.clone(),
        vec![
            Arc::new(Int64Array::from_iter_values(products.iter().map(|p| p.id))),
            Arc::new(StringArray::from_iter_values(products.iter().map(|p| &p.name))),
            Arc::new(StringArray::from_iter_values(products.iter().map(|p| p.brand))),
            Arc::new(Float64Array::from_iter_values(products.iter().map(|p| p.price))),
            Arc::new(Float64Array::from_iter_values(products.iter().map(|p| p.rating))),
        ],
    )
    .context("building record batch")?;

    let file = std::fs::File::create(path).context("creating parquet file")?;
    let mut writer = ArrowWriter::try_new(file, schema, None).context("creating parquet writer")?;
    writer.write(&batch).context("writing parquet batch")?;
    writer.close().context("closing parquet writer")?;
    Ok(())
}

fn main() -> Result<()> {
    let mut rng = SimpleRng::new(42);
    let products = generate(&mut rng);

    let csv_path = Path::new("sample_products.csv");
    let parquet_path = Path::new("sample_products.parquet");
    write_csv(csv_path, &products)?;
    write_parquet(parquet_path, &products)?;

    println!(
        "Wrote {} products to {} and {}",
        products.len(),
        csv_path.display(),
        parquet_path.display()
    );
    Ok(())
}
