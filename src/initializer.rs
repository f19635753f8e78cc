use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

use std::f64::consts::PI;

/// Implement Initializer for the struct reference as well
macro_rules! impl_ref {
    ($struct:ty) => {
        impl Initializer for &mut $struct {
            fn sample(&mut self) -> f32 {
                <$struct as Initializer>::sample(self)
            }
        }
    };
}

/// Source of the weights and biases drawn once at build time.
pub trait Initializer {
    fn sample(&mut self) -> f32;
}

/// Standard-normal sampler built on the Box-Muller transform.
/// Every instance is seeded from entropy; draws are not reproducible
/// across runs and no fixed-seed mode exists.
pub struct BoxMuller {
    rng: SmallRng,
}

impl BoxMuller {
    pub fn new() -> BoxMuller {
        BoxMuller {
            rng: SmallRng::from_entropy(),
        }
    }
}

impl Default for BoxMuller {
    fn default() -> Self {
        Self::new()
    }
}

impl Initializer for BoxMuller {
    fn sample(&mut self) -> f32 {
        // uniform draws of exactly 0 are rejected so ln stays in domain
        let mut u = 0f64;
        let mut v = 0f64;
        while u == 0. {
            u = self.rng.gen::<f64>();
        }
        while v == 0. {
            v = self.rng.gen::<f64>();
        }
        ((-2. * u.ln()).sqrt() * (2. * PI * v).cos()) as f32
    }
}
impl_ref!(BoxMuller);

/// This initializer accepts an iterator over f32 values and hands them out
/// as the weight/bias draws. Panics if a draw is requested but the iterator
/// returns None. Intended for deterministic tests.
pub struct Fixed<T: Iterator<Item = f32>> {
    iter: T,
}

impl<I: Iterator<Item = f32>> Fixed<I> {
    pub fn new<T: IntoIterator<Item = f32, IntoIter = I>>(draws: T) -> Self {
        Self {
            iter: draws.into_iter(),
        }
    }
}

impl<I: Iterator<Item = f32>> Initializer for Fixed<I> {
    fn sample(&mut self) -> f32 {
        self.iter.next().expect("Ran out of draws")
    }
}

impl<I: Iterator<Item = f32>> Initializer for &mut Fixed<I> {
    fn sample(&mut self) -> f32 {
        (*self).sample()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn box_muller_is_finite() {
        let mut init = BoxMuller::new();
        for _ in 0..1000 {
            assert!(init.sample().is_finite());
        }
    }

    #[test]
    fn box_muller_actually_varies() {
        let mut init = BoxMuller::new();
        let first = init.sample();
        let varied = (0..100).any(|_| init.sample() != first);
        assert!(varied, "100 draws produced a constant value");
    }

    #[test]
    fn fixed_replays_its_draws() {
        let mut init = Fixed::new(vec![1., 2., 3.]);
        assert_eq!(init.sample(), 1.);
        assert_eq!(init.sample(), 2.);
        assert_eq!(init.sample(), 3.);
    }

    #[test]
    #[should_panic(expected = "Ran out of draws")]
    fn fixed_panics_when_exhausted() {
        let mut init = Fixed::new(vec![1.]);
        init.sample();
        init.sample();
    }
}
