/// Metrics for the `appmetrics` namespace.
///
/// Generated by promc. DO NOT EDIT.
pub mod appmetrics {
    use std::sync::LazyLock;

    /// Total number of HTTP requests.
    pub static HTTP_REQUESTS_TOTAL: LazyLock<prometheus::CounterVec> = LazyLock::new(|| {
        let metric = prometheus::CounterVec::new(prometheus::Opts::new("http_requests_total", "Total number of HTTP requests."), &["method", "status"]).expect("metric 'http_requests_total' should have a valid definition");
        prometheus::register(Box::new(metric.clone())).expect("metric 'http_requests_total' should only be registered once");
        metric
    });

    /// Label values for [`HTTP_REQUESTS_TOTAL`].
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub struct HttpRequestsTotalLabels<'a> {
        /// Value of the `method` label.
        pub method: &'a str,
        /// Value of the `status` label.
        pub status: &'a str,
    }

    /// Increments `http_requests_total` by `value`.
    pub fn increment_http_requests_total(labels: HttpRequestsTotalLabels<'_>, value: f64) {
        HTTP_REQUESTS_TOTAL.with_label_values(&[labels.method, labels.status]).inc_by(value);
    }

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

    /// Request latency.
    pub static REQUEST_DURATION_SECONDS: LazyLock<prometheus::HistogramVec> = LazyLock::new(|| {
        let metric = prometheus::HistogramVec::new(prometheus::HistogramOpts::new("request_duration_seconds", "Request latency.").buckets(vec![0.1, 0.5, 1.0]), &["method"]).expect("metric 'request_duration_seconds' should have a valid definition");
        prometheus::register(Box::new(metric.clone())).expect("metric 'request_duration_seconds' should only be registered once");
        metric
    });

    /// Label values for [`REQUEST_DURATION_SECONDS`].
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub struct RequestDurationSecondsLabels<'a> {
        /// Value of the `method` label.
        pub method: &'a str,
    }

    /// Records `value` in `request_duration_seconds`.
    pub fn observe_request_duration_seconds(labels: RequestDurationSecondsLabels<'_>, value: f64) {
        REQUEST_DURATION_SECONDS.with_label_values(&[labels.method]).observe(value);
    }

    /// The `queue_wait_seconds` histogram.
    pub static QUEUE_WAIT_SECONDS: LazyLock<prometheus::HistogramVec> = LazyLock::new(|| {
        let metric = prometheus::HistogramVec::new(prometheus::HistogramOpts::new("queue_wait_seconds", "queue_wait_seconds").buckets(vec![0.005, 0.01, 0.025, 0.05, 0.1, 0.25, 0.5, 1.0, 2.5, 5.0, 10.0]), &["type"]).expect("metric 'queue_wait_seconds' should have a valid definition");
        prometheus::register(Box::new(metric.clone())).expect("metric 'queue_wait_seconds' should only be registered once");
        metric
    });

    /// Label values for [`QUEUE_WAIT_SECONDS`].
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub struct QueueWaitSecondsLabels<'a> {
        /// Value of the `type` label.
        pub r#type: &'a str,
    }

    /// Records `value` in `queue_wait_seconds`.
    pub fn observe_queue_wait_seconds(labels: QueueWaitSecondsLabels<'_>, value: f64) {
        QUEUE_WAIT_SECONDS.with_label_values(&[labels.r#type]).observe(value);
    }

    /// The `payload_bytes` summary.
    pub static PAYLOAD_BYTES: LazyLock<prometheus::Histogram> = LazyLock::new(|| {
        let metric = prometheus::Histogram::with_opts(prometheus::HistogramOpts::new("payload_bytes", "payload_bytes").buckets(vec![0.005, 0.01, 0.025, 0.05, 0.1, 0.25, 0.5, 1.0, 2.5, 5.0, 10.0])).expect("metric 'payload_bytes' should have a valid definition");
        prometheus::register(Box::new(metric.clone())).expect("metric 'payload_bytes' should only be registered once");
        metric
    });

    /// Records `value` in `payload_bytes`.
    pub fn observe_payload_bytes(value: f64) {
        PAYLOAD_BYTES.observe(value);
    }
}
