use paddock_core::{containers::PointCloud, nalgebra::Vector3};
use rand::{distributions::Uniform, prelude::Distribution, Rng};

/// Distribution for sampling random positions and normals that fit the fixed-point text encoding
pub struct TestVectorDistribution;

impl Distribution<Vector3<f64>> for TestVectorDistribution {
    fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> Vector3<f64> {
        let range = Uniform::new(-1000.0, 1000.0);
        Vector3::new(rng.sample(&range), rng.sample(&range), rng.sample(&range))
    }
}

/// Distribution for sampling colors that are exactly representable as 8-bit channels
pub struct TestColorDistribution;

impl Distribution<Vector3<f64>> for TestColorDistribution {
    fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> Vector3<f64> {
        Vector3::new(
            rng.gen::<u8>() as f64 / 255.0,
            rng.gen::<u8>() as f64 / 255.0,
            rng.gen::<u8>() as f64 / 255.0,
        )
    }
}

pub fn random_point_cloud<R: Rng>(
    rng: &mut R,
    count: usize,
    with_normals: bool,
    with_colors: bool,
) -> PointCloud {
    let positions = (0..count)
        .map(|_| rng.sample(TestVectorDistribution))
        .collect();
    let normals = if with_normals {
        (0..count)
            .map(|_| rng.sample(TestVectorDistribution).normalize())
            .collect()
    } else {
        vec![]
    };
    let colors = if with_colors {
        (0..count)
            .map(|_| rng.sample(TestColorDistribution))
            .collect()
    } else {
        vec![]
    };
    PointCloud::from_attributes(positions, normals, colors)
        .expect("Random attributes have matching lengths")
}

/// Asserts that two attribute arrays are equal up to the precision of the text encoding
pub fn assert_vectors_approx_eq(expected: &[Vector3<f64>], actual: &[Vector3<f64>], epsilon: f64) {
    assert_eq!(expected.len(), actual.len());
    for (idx, (expected, actual)) in expected.iter().zip(actual.iter()).enumerate() {
        for component in 0..3 {
            let delta = (expected[component] - actual[component]).abs();
            assert!(
                delta <= epsilon,
                "Component {} of value {} differs: expected {}, got {}",
                component,
                idx,
                expected[component],
                actual[component]
            );
        }
    }
}
