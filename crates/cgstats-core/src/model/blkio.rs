//! Block I/O cgroup metrics (cgroup v1 `blkio` controller).

use std::fmt;

use serde::{Deserialize, Serialize};

/// One row of a `blkio.*_recursive` file.
///
/// Example line from `blkio.io_service_bytes_recursive`:
/// `8:0 Read 4096`
#[derive(Clone, Serialize, Deserialize, Debug, PartialEq, Eq, Default)]
pub struct BlkioStatEntry {
    /// Block device major number.
    pub major: u64,
    /// Block device minor number.
    pub minor: u64,
    /// Operation class: `Read`, `Write`, `Sync`, `Async`, `Discard`, `Total`.
    /// Empty for files without an operation column (`blkio.sectors_recursive`).
    #[serde(default)]
    pub op: String,
    /// Counter value.
    pub value: u64,
}

impl BlkioStatEntry {
    pub fn new(major: u64, minor: u64, op: impl Into<String>, value: u64) -> Self {
        Self {
            major,
            minor,
            op: op.into(),
            value,
        }
    }
}

impl fmt::Display for BlkioStatEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.op.is_empty() {
            write!(f, "{}:{} {}", self.major, self.minor, self.value)
        } else {
            write!(f, "{}:{} {} {}", self.major, self.minor, self.op, self.value)
        }
    }
}

/// Block I/O statistics.
///
/// Every field is the parsed content of the matching
/// `/sys/fs/cgroup/blkio/blkio.<name>` file, in file order.
#[derive(Clone, Serialize, Deserialize, Debug, PartialEq, Eq, Default)]
#[serde(default)]
pub struct BlkioStats {
    /// Bytes transferred per device and operation.
    pub io_service_bytes_recursive: Vec<BlkioStatEntry>,
    /// Number of I/O operations per device and operation.
    pub io_serviced_recursive: Vec<BlkioStatEntry>,
    /// Requests queued at the time of reading.
    pub io_queued_recursive: Vec<BlkioStatEntry>,
    /// Time spent servicing requests (ns).
    pub io_service_time_recursive: Vec<BlkioStatEntry>,
    /// Time requests spent waiting in scheduler queues (ns).
    pub io_wait_time_recursive: Vec<BlkioStatEntry>,
    /// Requests merged into other requests.
    pub io_merged_recursive: Vec<BlkioStatEntry>,
    /// Disk time allocated per device (ms).
    pub io_time_recursive: Vec<BlkioStatEntry>,
    /// Sectors transferred per device.
    pub sectors_recursive: Vec<BlkioStatEntry>,
}
