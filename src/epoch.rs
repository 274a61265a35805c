use crate::thrift::TMVStartEpochTask;

/// Epoch bounds handed to an incremental maintenance task.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct EpochInfo {
    pub epoch_id: i64,
    pub txn_id: i64,
    pub max_exec_millis: i64,
    pub max_scan_rows: i64,
}

impl EpochInfo {
    pub fn from_start_epoch_task(start_epoch: &TMVStartEpochTask) -> Self {
        Self {
            epoch_id: start_epoch.epoch.epoch_id,
            txn_id: start_epoch.epoch.txn_id,
            max_exec_millis: start_epoch.max_exec_millis,
            max_scan_rows: start_epoch.max_scan_rows,
        }
    }
}
