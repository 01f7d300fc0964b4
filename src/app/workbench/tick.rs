use super::Workbench;
use crate::kernel::Action as KernelAction;
use std::sync::mpsc;
use std::time::Instant;

impl Workbench {
    /// 主循环每轮调用：过期定时状态、收集日志、检查设置文件
    pub fn tick(&mut self, now: Instant) -> bool {
        let mut changed = false;
        changed |= self.dispatch_kernel(KernelAction::Tick { now });
        changed |= self.poll_logs();
        changed |= self.poll_settings(now);
        changed
    }

    fn poll_logs(&mut self) -> bool {
        let Some(rx) = self.log_rx.take() else {
            return false;
        };

        let mut changed = false;
        let mut drained = 0usize;
        let mut disconnected = false;

        loop {
            match rx.try_recv() {
                Ok(line) => {
                    changed = true;
                    drained += 1;
                    self.logs.push_back(line);
                    while self.logs.len() > super::LOG_BUFFER_CAP {
                        self.logs.pop_front();
                    }
                    if drained >= super::MAX_LOG_DRAIN_PER_TICK {
                        break;
                    }
                }
                Err(mpsc::TryRecvError::Empty) => break,
                Err(mpsc::TryRecvError::Disconnected) => {
                    disconnected = true;
                    break;
                }
            }
        }

        if !disconnected {
            self.log_rx = Some(rx);
        }

        changed
    }

    fn poll_settings(&mut self, now: Instant) -> bool {
        let Some(path) = self.settings_path.as_ref() else {
            return false;
        };

        if now.saturating_duration_since(self.last_settings_check) < super::SETTINGS_CHECK_INTERVAL
        {
            return false;
        }
        self.last_settings_check = now;

        let modified = std::fs::metadata(path).and_then(|m| m.modified()).ok();
        if modified.is_some() && modified != self.last_settings_modified {
            self.last_settings_modified = modified;
            return self.reload_settings();
        }

        false
    }
}
