use lazy_static::lazy_static;

use crate::model::MetricSelector;

const KVSTORE_URI: &str = "/kvstore/v1/{db_name}/{table_name}";

pub const JVM_INFO_PREFIX: &str = "jvm_info_total";

fn kvstore_requests(series: &str, method: &str) -> MetricSelector {
    MetricSelector::new(format!("http_server_requests_seconds_{}", series))
        .with_label("method", method)
        .with_label("outcome", "SUCCESS")
        .with_label("status", "200")
        .with_label("uri", KVSTORE_URI)
}

fn bridge_queries(series: &str) -> MetricSelector {
    MetricSelector::new(format!("grpc_client_processing_duration_seconds_{}", series))
        .with_label("method", "ExecuteQuery")
        .with_label("methodType", "UNARY")
        .with_label("service", "stargate.StargateBridge")
        .with_label("statusCode", "OK")
}

lazy_static! {
    pub static ref GET_COUNT: MetricSelector = kvstore_requests("count", "GET");
    pub static ref GET_SUM: MetricSelector = kvstore_requests("sum", "GET");
    pub static ref PUT_COUNT: MetricSelector = kvstore_requests("count", "PUT");
    pub static ref PUT_SUM: MetricSelector = kvstore_requests("sum", "PUT");
    pub static ref NETWORK_IO_COUNT: MetricSelector = bridge_queries("count");
    pub static ref NETWORK_IO_SUM: MetricSelector = bridge_queries("sum");
    pub static ref SYSTEM_CPU_COUNT: MetricSelector = MetricSelector::new("system_cpu_count");
    pub static ref JVM_THREADS_PEAK: MetricSelector =
        MetricSelector::new("jvm_threads_peak_threads");
}
