use std::path::{Path, PathBuf};

use serde_json::{json, Value};

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

    /// Uniform in [-spread, spread].
    fn uniform(&mut self, spread: f64) -> f64 {
        (self.next_f64() * 2.0 - 1.0) * spread
    }
}

/// One dense layer with fan-in-scaled random weights and zero biases.
fn random_layer(rng: &mut SimpleRng, inputs: usize, outputs: usize, activation: &str) -> Value {
    let spread = 1.0 / (inputs as f64).sqrt();
    let weights: Vec<Vec<f64>> = (0..outputs)
        .map(|_| (0..inputs).map(|_| rng.uniform(spread)).collect())
        .collect();
    let biases = vec![0.0; outputs];
    json!({ "weights": weights, "biases": biases, "activation": activation })
}

fn write_json(path: &Path, value: &Value) {
    let text = serde_json::to_string_pretty(value).expect("Failed to serialize artifact");
    std::fs::write(path, text)
        .unwrap_or_else(|e| panic!("Failed to write {}: {e}", path.display()));
}

fn main() {
    let out_dir: PathBuf = std::env::args_os()
        .nth(1)
        .map(Into::into)
        .unwrap_or_else(|| "artifacts".into());
    std::fs::create_dir_all(&out_dir).expect("Failed to create output directory");

    let mut rng = SimpleRng::new(42);

    // 3 → 8 → 3 network. The weights are random, so the predictions are
    // stand-ins, but the bundle exercises the full load/predict path and is
    // identical on every run thanks to the fixed seed.
    let model = json!({
        "layers": [
            random_layer(&mut rng, 3, 8, "relu"),
            random_layer(&mut rng, 8, 3, "linear")
        ]
    });

    // Inputs normalized over the fitted sensor ranges.
    let scaler_x = json!({
        "kind": "min_max",
        "data_min": [10.0, 1000.0, 0.0],
        "data_max": [100000.0, 50000.0, 1440.0]
    });

    // Outputs denormalized around typical silica-aerogel statistics:
    // surface area (m²/g), pore diameter (nm), pore volume (cm³/g).
    let scaler_y = json!({
        "kind": "standard",
        "mean": [520.0, 11.5, 1.25],
        "scale": [140.0, 3.8, 0.45]
    });

    let limits = json!({
        "frequency": { "min": 10.0, "max": 100000.0 },
        "impedance": { "min": 1000.0, "max": 50000.0 },
        "time": { "min": 0.0, "max": 1440.0 }
    });

    write_json(&out_dir.join("model.json"), &model);
    write_json(&out_dir.join("scaler_x.json"), &scaler_x);
    write_json(&out_dir.join("scaler_y.json"), &scaler_y);
    write_json(&out_dir.join("limits.json"), &limits);

    println!(
        "Wrote demo model bundle (3\u{2192}8\u{2192}3 network, 2 scalers, limits) to {}",
        out_dir.display()
    );
}
