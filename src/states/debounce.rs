// 防抖调度
// 在延迟之后执行任务；延迟期内再次调度会取消尚未触发的旧任务。
// 已经触发的任务不会被取消，过期结果由 RequestGuard 丢弃。

use std::future::Future;
use std::time::Duration;
use tokio::task::JoinHandle;
use log::debug;

#[derive(Debug, Default)]
pub struct Debouncer {
    pending: Option<JoinHandle<()>>,
}

impl Debouncer {
    pub fn new() -> Self {
        Self::default()
    }

    /// 必须在 tokio 运行时内调用
    pub fn schedule<F>(&mut self, delay: Duration, task: F)
    where
        F: Future<Output = ()> + Send + 'static,
    {
        self.cancel();
        self.pending = Some(tokio::spawn(async move {
            if !delay.is_zero() {
                tokio::time::sleep(delay).await;
            }
            tokio::spawn(task);
        }));
    }

    pub fn cancel(&mut self) {
        if let Some(handle) = self.pending.take() {
            if !handle.is_finished() {
                debug!("取消尚未触发的防抖任务");
                handle.abort();
            }
        }
    }

    // 是否有尚未触发的任务
    pub fn is_pending(&self) -> bool {
        self.pending.as_ref().map_or(false, |h| !h.is_finished())
    }
}

impl Drop for Debouncer {
    fn drop(&mut self) {
        self.cancel();
    }
}
