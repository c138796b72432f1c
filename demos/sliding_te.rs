use rand::{SeedableRng, rngs::StdRng};
use rand_distr::{Distribution, Normal};
use tracing_subscriber::EnvFilter;
use windowed_te::estimators::config::WindowConfig;
use windowed_te::estimators::transfer_entropy::TransferEntropy;

/// Source noise and a destination that follows it one step later for the
/// middle third of the series and is independent noise elsewhere.
fn generate_coupled_pair(size: usize, noise: f64, seed: u64) -> (Vec<f64>, Vec<f64>) {
    let mut rng = StdRng::seed_from_u64(seed);
    let normal = Normal::new(0.0, 1.0).unwrap();
    let source: Vec<f64> = (0..size).map(|_| normal.sample(&mut rng)).collect();

    let mut destination = Vec::with_capacity(size);
    destination.push(normal.sample(&mut rng));
    for t in 1..size {
        let coupled = t > size / 3 && t < 2 * size / 3;
        let value = if coupled {
            source[t - 1] + noise * normal.sample(&mut rng)
        } else {
            normal.sample(&mut rng)
        };
        destination.push(value);
    }
    (source, destination)
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let (source, destination) = generate_coupled_pair(1500, 0.1, 12);
    let config = WindowConfig::new(200, 50, 4);

    let forward = TransferEntropy::new_sliding(&source, &destination, config)
        .expect("valid configuration");
    let backward = TransferEntropy::new_sliding(&destination, &source, config)
        .expect("valid configuration");

    println!("window_end,te_x_to_y,te_y_to_x");
    for (f, b) in forward.iter().zip(backward.iter()) {
        println!("{},{:.6},{:.6}", f.end, f.value, b.value);
    }
}
