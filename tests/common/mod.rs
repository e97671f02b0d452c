use mlmatrix::Matrix;

/// Route engine logs through the test harness, filterable with `MLMATRIX_LOG`.
pub fn init_logging() {
    let _ = env_logger::Builder::from_env(env_logger::Env::default().filter_or("MLMATRIX_LOG", "warn"))
        .is_test(true)
        .try_init();
}

#[allow(dead_code)]
pub fn assert_close(a: &Matrix, b: &Matrix, eps: f64) {
    assert_eq!(a.shape(), b.shape(), "shape mismatch");
    for (x, y) in a.iter().zip(b.iter()) {
        assert!((x - y).abs() <= eps, "{} differs from {} by more than {}\n{}\n{}", x, y, eps, a, b);
    }
}
