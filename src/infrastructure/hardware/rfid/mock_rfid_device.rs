//! Mock RFID Device - 测试与无硬件环境下的读写器
//!
//! 读取结果按入队顺序弹出，队列为空视作超时内无标签在场；
//! 写入的块全部记录，可供断言。

use async_trait::async_trait;
use std::collections::VecDeque;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Mutex;

use crate::application::ports::{HardwareError, RfidDevicePort, TagScan};
use crate::domain::tag::BlockPayload;

/// Mock RFID Device
#[derive(Default)]
pub struct MockRfidDevice {
    scans: Mutex<VecDeque<TagScan>>,
    writes: Mutex<Vec<BlockPayload>>,
    fail_reads: AtomicBool,
    fail_writes: AtomicBool,
}

impl MockRfidDevice {
    pub fn new() -> Self {
        Self::default()
    }

    /// 预置一次读卡结果
    pub fn queue_scan(&self, scan: TagScan) {
        self.scans.lock().unwrap().push_back(scan);
    }

    /// 已写入硬件的所有数据块
    pub fn written_blocks(&self) -> Vec<BlockPayload> {
        self.writes.lock().unwrap().clone()
    }

    /// 让后续读取返回设备错误
    pub fn set_fail_reads(&self, fail: bool) {
        self.fail_reads.store(fail, Ordering::SeqCst);
    }

    /// 让后续写入返回设备错误
    pub fn set_fail_writes(&self, fail: bool) {
        self.fail_writes.store(fail, Ordering::SeqCst);
    }
}

#[async_trait]
impl RfidDevicePort for MockRfidDevice {
    async fn read_tag(&self) -> Result<TagScan, HardwareError> {
        if self.fail_reads.load(Ordering::SeqCst) {
            return Err(HardwareError::ReadFailed("mock read failure".to_string()));
        }

        match self.scans.lock().unwrap().pop_front() {
            Some(scan) => {
                tracing::debug!(uid = %scan.uid, "MockRfidDevice: returning queued scan");
                Ok(scan)
            }
            None => Err(HardwareError::Timeout),
        }
    }

    async fn write_tag(&self, payload: BlockPayload) -> Result<(), HardwareError> {
        if self.fail_writes.load(Ordering::SeqCst) {
            return Err(HardwareError::WriteFailed("mock write failure".to_string()));
        }

        tracing::debug!(
            text = %payload.to_trimmed_string(),
            "MockRfidDevice: recording write"
        );
        self.writes.lock().unwrap().push(payload);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_scans_pop_in_order() {
        let device = MockRfidDevice::new();
        device.queue_scan(TagScan {
            uid: "AA".to_string(),
            text: "FIRST111".to_string(),
        });
        device.queue_scan(TagScan {
            uid: "BB".to_string(),
            text: "SECOND22".to_string(),
        });

        assert_eq!(device.read_tag().await.unwrap().text, "FIRST111");
        assert_eq!(device.read_tag().await.unwrap().text, "SECOND22");
        assert!(matches!(
            device.read_tag().await.unwrap_err(),
            HardwareError::Timeout
        ));
    }

    #[tokio::test]
    async fn test_writes_are_recorded() {
        let device = MockRfidDevice::new();
        device
            .write_tag(BlockPayload::from_text("XJ29KQ7T"))
            .await
            .unwrap();

        let writes = device.written_blocks();
        assert_eq!(writes.len(), 1);
        assert_eq!(writes[0].as_bytes(), b"XJ29KQ7T        ");
    }
}
