// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use redis::Cmd;
use std::fmt;
use std::time::Duration;

use crate::utils::errors::{StoreError, StoreResult};

/// 时间单位
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TimeUnit {
    Milliseconds,
    Seconds,
    Minutes,
    Hours,
    Days,
}

impl TimeUnit {
    /// 每单位对应的毫秒数
    pub fn millis_per_unit(self) -> u64 {
        match self {
            TimeUnit::Milliseconds => 1,
            TimeUnit::Seconds => 1_000,
            TimeUnit::Minutes => 60_000,
            TimeUnit::Hours => 3_600_000,
            TimeUnit::Days => 86_400_000,
        }
    }

    /// 将数量转换为时长
    pub fn to_duration(self, amount: u64) -> Duration {
        Duration::from_millis(amount.saturating_mul(self.millis_per_unit()))
    }

    /// 将毫秒数换算为当前单位（向下取整）
    pub fn convert_millis(self, millis: i64) -> i64 {
        millis / self.millis_per_unit() as i64
    }
}

/// 键的剩余生存时间
///
/// 对应 TTL 命令的返回约定：-2 表示键不存在，-1 表示键没有过期时间
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyExpiry {
    /// 键不存在
    Missing,
    /// 键存在但没有设置过期时间
    Persistent,
    /// 键将在指定时长后过期
    ExpiresIn(Duration),
}

impl KeyExpiry {
    /// 从 TTL 命令的秒数结果解析
    pub fn from_ttl_seconds(ttl: i64) -> Self {
        match ttl {
            -2 => KeyExpiry::Missing,
            t if t < 0 => KeyExpiry::Persistent,
            t => KeyExpiry::ExpiresIn(Duration::from_secs(t as u64)),
        }
    }

    /// 还原为 TTL 风格的秒数
    pub fn as_seconds(&self) -> i64 {
        match self {
            KeyExpiry::Missing => -2,
            KeyExpiry::Persistent => -1,
            KeyExpiry::ExpiresIn(d) => d.as_secs() as i64,
        }
    }
}

impl fmt::Display for KeyExpiry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_seconds())
    }
}

/// 过期时长的毫秒数，不足一毫秒的时长被拒绝
///
/// 零时长在 EXPIRE 下会直接删除键，因此在本地拦截
fn timeout_millis(timeout: Duration) -> StoreResult<u128> {
    let millis = timeout.as_millis();
    if millis == 0 {
        return Err(StoreError::InvalidArgument(format!(
            "timeout must be at least 1ms, got {:?}",
            timeout
        )));
    }
    Ok(millis)
}

/// 为 SET 类命令追加过期参数
///
/// 整秒使用 `EX`，否则使用 `PX`
pub(crate) fn push_timeout(cmd: &mut Cmd, timeout: Duration) -> StoreResult<()> {
    let millis = timeout_millis(timeout)?;
    if millis % 1_000 == 0 {
        cmd.arg("EX").arg(timeout.as_secs());
    } else {
        cmd.arg("PX").arg(millis as u64);
    }
    Ok(())
}

/// 根据时长精度选择 EXPIRE 或 PEXPIRE
pub(crate) fn expire_command(key: &str, timeout: Duration) -> StoreResult<Cmd> {
    let millis = timeout_millis(timeout)?;
    if millis % 1_000 == 0 {
        let mut cmd = redis::cmd("EXPIRE");
        cmd.arg(key).arg(timeout.as_secs());
        Ok(cmd)
    } else {
        let mut cmd = redis::cmd("PEXPIRE");
        cmd.arg(key).arg(millis as u64);
        Ok(cmd)
    }
}
