use serde::Serialize;

use super::keys::*;
use super::lookup::{ExactLookup, Lookup};
use crate::error::Result;
use crate::model::{RawMetricMap, SampleValue};

/// Request, network and JVM figures derived from one metrics dump.
///
/// Divisions are plain IEEE-754: a zero count yields `inf` or `NaN`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Report {
    pub get_counts: SampleValue,
    pub get_sum: SampleValue,
    pub get_latency: SampleValue,
    pub put_counts: SampleValue,
    pub put_sum: SampleValue,
    pub put_latency: SampleValue,
    pub read_write_ratio: SampleValue,
    pub average_latency: SampleValue,
    pub network_io_count: SampleValue,
    pub network_io_sum: SampleValue,
    pub network_io_latency: SampleValue,
    pub jvm_info: SampleValue,
    pub system_cpu_count: SampleValue,
    pub jvm_threads_peak_threads: SampleValue,
}

impl Report {
    pub fn derive(raw: &RawMetricMap) -> Result<Self> {
        Self::derive_with(&ExactLookup::new(raw))
    }

    pub fn derive_with(lookup: &dyn Lookup) -> Result<Self> {
        let get_counts = lookup.get(&GET_COUNT)?;
        let get_sum = lookup.get(&GET_SUM)?;
        let put_counts = lookup.get(&PUT_COUNT)?;
        let put_sum = lookup.get(&PUT_SUM)?;
        let network_io_count = lookup.get(&NETWORK_IO_COUNT)?;
        let network_io_sum = lookup.get(&NETWORK_IO_SUM)?;
        let jvm_info = lookup.last_with_prefix(JVM_INFO_PREFIX)?;
        let system_cpu_count = lookup.get(&SYSTEM_CPU_COUNT)?;
        let jvm_threads_peak_threads = lookup.get(&JVM_THREADS_PEAK)?;

        let report = Self {
            get_counts,
            get_sum,
            get_latency: get_sum / get_counts,
            put_counts,
            put_sum,
            put_latency: put_sum / put_counts,
            read_write_ratio: get_counts / put_counts,
            average_latency: (get_sum + put_sum) / (get_counts + put_counts),
            network_io_count,
            network_io_sum,
            network_io_latency: network_io_sum / network_io_count,
            jvm_info,
            system_cpu_count,
            jvm_threads_peak_threads,
        };

        tracing::info!(
            requests = get_counts + put_counts,
            average_latency = report.average_latency,
            "report derived"
        );
        Ok(report)
    }

    /// All fields in presentation order.
    pub fn fields(&self) -> [(&'static str, SampleValue); 14] {
        [
            ("get_counts", self.get_counts),
            ("get_sum", self.get_sum),
            ("get_latency", self.get_latency),
            ("put_counts", self.put_counts),
            ("put_sum", self.put_sum),
            ("put_latency", self.put_latency),
            ("read_write_ratio", self.read_write_ratio),
            ("average_latency", self.average_latency),
            ("network_io_count", self.network_io_count),
            ("network_io_sum", self.network_io_sum),
            ("network_io_latency", self.network_io_latency),
            ("jvm_info", self.jvm_info),
            ("system_cpu_count", self.system_cpu_count),
            ("jvm_threads_peak_threads", self.jvm_threads_peak_threads),
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorKind;

    fn raw(get: (f64, f64), put: (f64, f64)) -> RawMetricMap {
        let mut raw = RawMetricMap::new();
        raw.insert(GET_COUNT.exposition(), get.0);
        raw.insert(GET_SUM.exposition(), get.1);
        raw.insert(PUT_COUNT.exposition(), put.0);
        raw.insert(PUT_SUM.exposition(), put.1);
        raw.insert(NETWORK_IO_COUNT.exposition(), 54625.0);
        raw.insert(NETWORK_IO_SUM.exposition(), 109.25);
        raw.insert(
            r#"jvm_info_total{runtime="OpenJDK Runtime Environment",vendor="Red Hat, Inc.",version="17.0.2+8-LTS",}"#,
            1.0,
        );
        raw.insert(SYSTEM_CPU_COUNT.exposition(), 8.0);
        raw.insert(JVM_THREADS_PEAK.exposition(), 42.0);
        raw
    }

    #[test]
    fn test_latency() -> Result<()> {
        let report = Report::derive(&raw((100.0, 50.0), (100.0, 30.0)))?;
        assert_eq!(report.get_latency, 0.5);
        assert_eq!(report.average_latency, 0.4);
        assert_eq!(report.network_io_latency, 0.002);
        Ok(())
    }

    #[test]
    fn test_read_write_ratio() -> Result<()> {
        let report = Report::derive(&raw((300.0, 1.0), (100.0, 1.0)))?;
        assert_eq!(report.read_write_ratio, 3.0);
        Ok(())
    }

    #[test]
    fn test_lookups() -> Result<()> {
        let report = Report::derive(&raw((100.0, 50.0), (100.0, 30.0)))?;
        assert_eq!(report.jvm_info, 1.0);
        assert_eq!(report.system_cpu_count, 8.0);
        assert_eq!(report.jvm_threads_peak_threads, 42.0);
        assert_eq!(report.put_sum, 30.0);
        Ok(())
    }

    #[test]
    fn test_zero_counts_propagate() -> Result<()> {
        let report = Report::derive(&raw((0.0, 0.0), (0.0, 2.0)))?;
        assert!(report.get_latency.is_nan());
        assert_eq!(report.put_latency, f64::INFINITY);
        assert!(report.read_write_ratio.is_nan());
        assert_eq!(report.average_latency, f64::INFINITY);
        Ok(())
    }

    #[test]
    fn test_missing_put_fails() {
        let full = raw((100.0, 50.0), (100.0, 30.0));
        let mut without_put = RawMetricMap::new();
        for (identity, value) in full.iter() {
            if identity != &PUT_COUNT.exposition() {
                without_put.insert(identity.clone(), value);
            }
        }

        let err = Report::derive(&without_put).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::KeyNotFound);
        assert_eq!(
            err.message(),
            format!("required metric not found: {}", PUT_COUNT.exposition())
        );
    }

    #[test]
    fn test_missing_jvm_info_fails() {
        let mut without_jvm = RawMetricMap::new();
        for (identity, value) in raw((1.0, 1.0), (1.0, 1.0)).iter() {
            if !identity.starts_with(JVM_INFO_PREFIX) {
                without_jvm.insert(identity.clone(), value);
            }
        }

        let err = Report::derive(&without_jvm).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::KeyNotFound);
    }

    #[test]
    fn test_fields_order() -> Result<()> {
        let report = Report::derive(&raw((100.0, 50.0), (100.0, 30.0)))?;
        let names: Vec<_> = report.fields().iter().map(|(name, _)| *name).collect();
        assert_eq!(
            names,
            vec![
                "get_counts",
                "get_sum",
                "get_latency",
                "put_counts",
                "put_sum",
                "put_latency",
                "read_write_ratio",
                "average_latency",
                "network_io_count",
                "network_io_sum",
                "network_io_latency",
                "jvm_info",
                "system_cpu_count",
                "jvm_threads_peak_threads",
            ]
        );
        Ok(())
    }
}
