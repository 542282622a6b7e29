/// Metrics for the `dbmetrics` namespace.
///
/// Generated by promc. DO NOT EDIT.
pub mod dbmetrics {
    use std::sync::LazyLock;

    /// Number of active users.
    pub static ACTIVE_USERS: LazyLock<prometheus::Gauge> = LazyLock::new(|| {
        let metric = prometheus::Gauge::with_opts(prometheus::Opts::new("active_users", "Number of active users.")).expect("metric 'active_users' should have a valid definition");
        prometheus::register(Box::new(metric.clone())).expect("metric 'active_users' should only be registered once");
        metric
    });

    /// Sets `active_users` to `value`.
    pub fn set_active_users(value: f64) {
        ACTIVE_USERS.set(value);
    }
}
