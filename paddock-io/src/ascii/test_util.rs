use paddock_core::nalgebra::Vector3;

pub(crate) const XYZ_BYTES: &[u8] = b"1.0000000000 2.0000000000 3.0000000000\n\
4.0000000000 5.0000000000 6.0000000000\n\
7.0000000000 8.0000000000 9.0000000000\n";

pub(crate) const XYZN_BYTES: &[u8] =
    b"1.0000000000 2.0000000000 3.0000000000 0.1000000000 0.2000000000 0.3000000000\n\
4.0000000000 5.0000000000 6.0000000000 0.4000000000 0.5000000000 0.6000000000\n\
7.0000000000 8.0000000000 9.0000000000 0.7000000000 0.8000000000 0.9000000000\n";

pub(crate) const XYZRGB_BYTES: &[u8] = b"1.0000000000 2.0000000000 3.0000000000 255 0 0\n\
4.0000000000 5.0000000000 6.0000000000 0 255 0\n\
7.0000000000 8.0000000000 9.0000000000 0 0 255\n";

pub(crate) fn test_data_positions() -> Vec<Vector3<f64>> {
    vec![
        Vector3::new(1.0, 2.0, 3.0),
        Vector3::new(4.0, 5.0, 6.0),
        Vector3::new(7.0, 8.0, 9.0),
    ]
}

pub(crate) fn test_data_normals() -> Vec<Vector3<f64>> {
    vec![
        Vector3::new(0.1, 0.2, 0.3),
        Vector3::new(0.4, 0.5, 0.6),
        Vector3::new(0.7, 0.8, 0.9),
    ]
}

pub(crate) fn test_data_colors() -> Vec<Vector3<f64>> {
    vec![
        Vector3::new(1.0, 0.0, 0.0),
        Vector3::new(0.0, 1.0, 0.0),
        Vector3::new(0.0, 0.0, 1.0),
    ]
}
