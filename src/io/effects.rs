use std::cell::Cell;

use serde::Serialize;

thread_local! {
    static IO_EFFECTS: Cell<IoEffectsSnapshot> = Cell::new(IoEffectsSnapshot::EMPTY);
}

/// スレッドごとに記録される IO 効果カウンタのスナップショット。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct IoEffectsSnapshot {
    pub console_writes: u64,
    pub file_reads: u64,
    pub file_writes: u64,
    pub bytes_read: u64,
    pub bytes_written: u64,
}

impl IoEffectsSnapshot {
    pub const EMPTY: Self = Self {
        console_writes: 0,
        file_reads: 0,
        file_writes: 0,
        bytes_read: 0,
        bytes_written: 0,
    };
}

/// コンソールへの書き込みを記録する。
pub(crate) fn record_console_write() {
    IO_EFFECTS.with(|slot| {
        let mut current = slot.get();
        current.console_writes = current.console_writes.saturating_add(1);
        slot.set(current);
    });
}

/// ファイル読み込みを記録する。
pub(crate) fn record_file_read(bytes: usize) {
    IO_EFFECTS.with(|slot| {
        let mut current = slot.get();
        current.file_reads = current.file_reads.saturating_add(1);
        current.bytes_read = current.bytes_read.saturating_add(bytes as u64);
        slot.set(current);
    });
}

/// ファイル書き込みを記録する。
pub(crate) fn record_file_write(bytes: usize) {
    IO_EFFECTS.with(|slot| {
        let mut current = slot.get();
        current.file_writes = current.file_writes.saturating_add(1);
        current.bytes_written = current.bytes_written.saturating_add(bytes as u64);
        slot.set(current);
    });
}

/// 記録済みの効果を取り出し、カウンタを初期化する。
pub fn take_io_effects_snapshot() -> IoEffectsSnapshot {
    IO_EFFECTS.with(|slot| slot.replace(IoEffectsSnapshot::EMPTY))
}
