//! Vector distances.

/// Euclidean distance. Vectors must have equal length.
///
/// On unit vectors this is `sqrt(2 - 2 * cos)`, so a threshold on it is a
/// threshold on cosine similarity.
pub fn euclidean(a: &[f32], b: &[f32]) -> f64 {
    a.iter()
        .zip(b.iter())
        .map(|(x, y)| {
            let d = *x as f64 - *y as f64;
            d * d
        })
        .sum::<f64>()
        .sqrt()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::algorithms::normalize::l2_normalize;

    #[test]
    fn identical_vectors_are_at_distance_zero() {
        let v = vec![1.0, 2.0, 3.0];
        assert_eq!(euclidean(&v, &v), 0.0);
    }

    #[test]
    fn orthogonal_unit_vectors_are_sqrt_two_apart() {
        assert!((euclidean(&[1.0, 0.0], &[0.0, 1.0]) - 2f64.sqrt()).abs() < 1e-9);
    }

    #[test]
    fn unit_distance_tracks_cosine() {
        let mut a = vec![1.0, 2.0, 0.5];
        let mut b = vec![-0.3, 1.0, 2.0];
        l2_normalize(&mut a);
        l2_normalize(&mut b);
        let cos: f64 = a.iter().zip(&b).map(|(x, y)| *x as f64 * *y as f64).sum();
        assert!((euclidean(&a, &b) - (2.0 - 2.0 * cos).sqrt()).abs() < 1e-6);
    }
}
