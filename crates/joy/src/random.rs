//! Random numbers for generative sketches, backed by the thread-local generator.

use rand::Rng;

/// A random number in `[0, 1)`.
pub fn random() -> f64 {
    rand::thread_rng().r#gen::<f64>()
}

/// A random number in `[0, n)`.
pub fn random_upto(n: f64) -> f64 {
    n * random()
}

/// A random number between `a` and `b`.
pub fn random_between(a: f64, b: f64) -> f64 {
    a + (b - a) * random()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn random_values_stay_in_range() {
        for _ in 0..100 {
            let v = random();
            assert!((0.0..1.0).contains(&v));
            assert!((0.0..10.0).contains(&random_upto(10.0)));
            assert!((5.0..10.0).contains(&random_between(5.0, 10.0)));
        }
    }
}
