// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;
use std::time::Duration;
use tracing::info;

use crate::demo::report::{format_list, format_map, format_optional, ScenarioReport};
use crate::domain::models::user::User;
use crate::infrastructure::cache::executor::CommandExecutor;
use crate::infrastructure::cache::expiry::TimeUnit;
use crate::infrastructure::cache::template::RedisTemplate;
use crate::utils::errors::{StoreError, StoreResult};

/// 演示场景，每个场景对应一类数据结构
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Scenario {
    String,
    Hash,
    List,
    Set,
    ZSet,
    Other,
}

impl Scenario {
    /// 默认执行顺序
    pub const ALL: [Scenario; 6] = [
        Scenario::String,
        Scenario::Hash,
        Scenario::List,
        Scenario::Set,
        Scenario::ZSet,
        Scenario::Other,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            Scenario::String => "string",
            Scenario::Hash => "hash",
            Scenario::List => "list",
            Scenario::Set => "set",
            Scenario::ZSet => "zset",
            Scenario::Other => "other",
        }
    }

    /// 执行场景
    pub async fn run<E: CommandExecutor>(
        &self,
        template: &RedisTemplate<E>,
        keys: &KeySpace,
    ) -> StoreResult<ScenarioReport> {
        info!(scenario = self.name(), "Running scenario");
        let report = match self {
            Scenario::String => string_api(template, keys).await?,
            Scenario::Hash => hash_api(template, keys).await?,
            Scenario::List => list_api(template, keys).await?,
            Scenario::Set => set_api(template, keys).await?,
            Scenario::ZSet => zset_api(template, keys).await?,
            Scenario::Other => other_api(template, keys).await?,
        };
        info!(
            scenario = self.name(),
            results = report.lines.len(),
            "Scenario finished"
        );
        Ok(report)
    }
}

impl fmt::Display for Scenario {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Scenario {
    type Err = StoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let name = s.trim().to_ascii_lowercase();
        Scenario::ALL
            .iter()
            .copied()
            .find(|scenario| scenario.name() == name)
            .ok_or_else(|| StoreError::InvalidArgument(format!("unknown scenario: {}", s)))
    }
}

/// 演示键的命名空间
#[derive(Debug, Clone, Default)]
pub struct KeySpace {
    prefix: String,
}

impl KeySpace {
    pub fn new(prefix: impl Into<String>) -> Self {
        Self {
            prefix: prefix.into(),
        }
    }

    pub fn key(&self, name: &str) -> String {
        format!("{}{}", self.prefix, name)
    }
}

/// 解析场景名称，任一名称无效时整体失败
pub fn parse_scenarios<S: AsRef<str>>(names: &[S]) -> StoreResult<Vec<Scenario>> {
    if names.is_empty() {
        return Ok(Scenario::ALL.to_vec());
    }
    names.iter().map(|name| name.as_ref().parse()).collect()
}

/// 依次执行场景
pub async fn run_scenarios<E: CommandExecutor>(
    template: &RedisTemplate<E>,
    scenarios: &[Scenario],
    keys: &KeySpace,
) -> StoreResult<Vec<ScenarioReport>> {
    let mut reports = Vec::with_capacity(scenarios.len());
    for scenario in scenarios {
        reports.push(scenario.run(template, keys).await?);
    }
    Ok(reports)
}

/// 字符串操作
pub async fn string_api<E: CommandExecutor>(
    template: &RedisTemplate<E>,
    keys: &KeySpace,
) -> StoreResult<ScenarioReport> {
    let mut report = ScenarioReport::new(Scenario::String.name());
    let ops = template.ops_for_value();

    // 1.添加一个数据
    ops.set(&keys.key("username"), "zhangsan").await?;

    // 2.添加一个有时效性的数据
    ops.set_with_timeout(
        &keys.key("password"),
        "123456",
        TimeUnit::Minutes.to_duration(1),
    )
    .await?;

    // 3.对一个数据进行加减操作
    let age = keys.key("age");
    ops.set(&age, &20.to_string()).await?;
    ops.increment(&age, 10).await?;
    let current = ops.decrement(&age, 5).await?;
    report.record("age", current);

    // 4.键存在时才设置
    let flag = ops.set_if_present(&keys.key("username"), "zhangsan_fix").await?;
    report.record("flag", flag);

    // 5.键不存在时才设置
    let flag_age = ops.set_if_absent(&age, "100").await?;
    report.record("flagAge", flag_age);
    let flag_new_age = ops.set_if_absent(&keys.key("NewAge"), "200").await?;
    report.record("flagNewAge", flag_new_age);

    // 6.存入一个自定义对象
    let user = User::builder()
        .id(1)
        .username("zhangsan")
        .password("123456")
        .build();
    let json = user.to_json()?;
    ops.set(&keys.key("user"), &json).await?;
    report.record("user", json);

    Ok(report)
}

/// 哈希操作
pub async fn hash_api<E: CommandExecutor>(
    template: &RedisTemplate<E>,
    keys: &KeySpace,
) -> StoreResult<ScenarioReport> {
    let mut report = ScenarioReport::new(Scenario::Hash.name());
    let ops = template.ops_for_hash();
    let user2 = keys.key("user2");

    // 1.添加一个数据
    ops.put(&keys.key("user1"), "username", "zhangsan").await?;

    // 2.添加多个数据
    let mut map = BTreeMap::new();
    map.insert("username".to_string(), "zhangsan".to_string());
    map.insert("password".to_string(), "123456".to_string());
    map.insert("age".to_string(), "20".to_string());
    ops.put_all(&user2, &map).await?;

    // 3.获取指定字段的值
    let username = ops.get(&user2, "username").await?;
    report.record("username", format_optional(username));

    // 4.获取所有字段名
    let field_names = ops.keys(&user2).await?;
    report.record("keys", format_list(field_names));

    // 5.获取所有字段值
    let values = ops.values(&user2).await?;
    report.record("values", format_list(values));

    // 6.获取所有键值对
    let entries = ops.entries(&user2).await?;
    report.record("entries", format_map(&entries));

    // 7.数值字段自增/自减
    let increment = ops.increment(&user2, "age", 10).await?;
    report.record("increment", increment);

    // 8.删除数据
    ops.delete(&user2, &["age"]).await?;

    // 9.判断字段是否存在
    let flag = ops.has_key(&user2, "age").await?;
    report.record("flag", flag);

    // 10.获取长度
    let size = ops.size(&user2).await?;
    report.record("size", size);

    Ok(report)
}

/// 列表操作
pub async fn list_api<E: CommandExecutor>(
    template: &RedisTemplate<E>,
    keys: &KeySpace,
) -> StoreResult<ScenarioReport> {
    let mut report = ScenarioReport::new(Scenario::List.name());
    let ops = template.ops_for_list();
    let list = keys.key("list");

    // 1.添加数据：单个元素、多个元素、一个列表
    ops.left_push(&list, "b").await?;
    ops.left_push_all(&list, &["b", "c"]).await?;
    let items = vec!["d".to_string(), "e".to_string()];
    ops.left_push_all(&list, &items).await?;

    // 2.指定位置设置元素
    ops.set(&list, 2, "a").await?;

    // 3.查询元素个数
    let size = ops.size(&list).await?;
    report.record("size", size);

    // 4.范围查询
    let range = ops.range(&list, 0, 3).await?;
    report.record("range", format_list(range));

    // 5.弹出左边一个元素
    let left_pop = ops.left_pop(&list).await?;
    report.record("leftPop", format_optional(left_pop));

    // 6.删除元素，count 为正数时从左边开始删除
    let removed = ops.remove(&list, 1, "b").await?;
    report.record("remove", removed);

    Ok(report)
}

/// 集合操作
pub async fn set_api<E: CommandExecutor>(
    template: &RedisTemplate<E>,
    keys: &KeySpace,
) -> StoreResult<ScenarioReport> {
    let mut report = ScenarioReport::new(Scenario::Set.name());
    let ops = template.ops_for_set();
    let set = keys.key("set");
    let set2 = keys.key("set2");

    // 1.添加元素
    let add = ops.add(&set, &["a", "b", "c"]).await?;
    report.record("add", add);

    // 2.判断元素是否存在
    let member = ops.is_member(&set, "a").await?;
    report.record("member", member);

    // 3.获取集合
    let members = ops.members(&set).await?;
    report.record("set", format_list(members));

    // 4.交集
    ops.add(&set2, &["c", "d", "e"]).await?;
    let intersection = ops.intersect(&set, &set2).await?;
    report.record("intersection", format_list(intersection));

    // 5.并集
    let union = ops.union(&set, &set2).await?;
    report.record("union", format_list(union));

    // 6.删除元素
    ops.remove(&set, &["c"]).await?;

    Ok(report)
}

/// 有序集合操作
pub async fn zset_api<E: CommandExecutor>(
    template: &RedisTemplate<E>,
    keys: &KeySpace,
) -> StoreResult<ScenarioReport> {
    let mut report = ScenarioReport::new(Scenario::ZSet.name());
    let ops = template.ops_for_zset();
    let zset = keys.key("zset");

    // 1.添加元素
    for (member, score) in [("a", 1.0), ("b", 2.0), ("c", 3.0), ("d", 4.0), ("e", 5.0), ("f", 6.0)] {
        ops.add(&zset, member, score).await?;
    }

    // 2.查询元素
    let range = ops.range(&zset, 0, -1).await?;
    report.record("range", format_list(range));

    // 3.元素个数
    let size = ops.z_card(&zset).await?;
    report.record("size", size);

    // 4.删除元素
    let remove = ops.remove(&zset, &["b"]).await?;
    report.record("remove", remove);

    // 5.查询分值
    let score = ops.score(&zset, "c").await?;
    report.record("score", format_optional(score));

    // 6.增加/减少分值
    let score_a = ops.increment_score(&zset, "a", 10.0).await?;
    report.record("scoreA", score_a);
    let score_c = ops.increment_score(&zset, "c", -10.0).await?;
    report.record("scoreC", score_c);

    Ok(report)
}

/// 键过期与删除
pub async fn other_api<E: CommandExecutor>(
    template: &RedisTemplate<E>,
    keys: &KeySpace,
) -> StoreResult<ScenarioReport> {
    let mut report = ScenarioReport::new(Scenario::Other.name());

    // 1.设置过期时间
    let expired = template
        .expire(&keys.key("username"), Duration::from_secs(10))
        .await?;
    report.record("expireSet", expired);

    // 2.获取剩余生存时间
    let expire = template.get_expire(&keys.key("zset")).await?;
    report.record("expire", expire);

    // 3.删除键
    let deleted = template.delete(&keys.key("zset")).await?;
    report.record("delete", deleted);

    Ok(report)
}
