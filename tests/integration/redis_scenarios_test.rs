// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use crate::integration::helpers::start_redis;
use redis_demo::demo::scenarios::{run_scenarios, KeySpace, Scenario};
use redis_demo::domain::models::user::User;
use redis_demo::infrastructure::cache::expiry::KeyExpiry;

#[tokio::test]
#[ignore = "requires Docker"]
async fn test_all_scenarios_against_real_redis() {
    let redis = start_redis().await;
    let keys = KeySpace::default();

    let reports = run_scenarios(&redis.template, &Scenario::ALL, &keys)
        .await
        .expect("scenarios should run");
    assert_eq!(reports.len(), 6);

    let string = &reports[0];
    assert_eq!(string.value("age"), Some("25"));
    assert_eq!(string.value("flag"), Some("true"));
    assert_eq!(string.value("flagAge"), Some("false"));
    assert_eq!(string.value("flagNewAge"), Some("true"));

    let hash = &reports[1];
    assert_eq!(hash.value("increment"), Some("30"));
    assert_eq!(hash.value("flag"), Some("false"));
    assert_eq!(hash.value("size"), Some("2"));

    let list = &reports[2];
    assert_eq!(list.value("size"), Some("5"));
    assert_eq!(list.value("range"), Some("[e, d, a, b]"));
    assert_eq!(list.value("leftPop"), Some("e"));

    let set = &reports[3];
    assert_eq!(set.value("intersection"), Some("[c]"));
    assert_eq!(set.value("union"), Some("[a, b, c, d, e]"));

    let zset = &reports[4];
    assert_eq!(zset.value("range"), Some("[a, b, c, d, e, f]"));
    assert_eq!(zset.value("score"), Some("3"));
    assert_eq!(zset.value("scoreC"), Some("-7"));

    let other = &reports[5];
    assert_eq!(other.value("expire"), Some("-1"));
    assert_eq!(other.value("delete"), Some("true"));

    // 过期时间与对象存储
    let template = &redis.template;
    assert!(matches!(
        template.get_expire("password").await.unwrap(),
        KeyExpiry::ExpiresIn(_)
    ));
    let user: Option<User> = template.ops_for_value().get_json("user").await.unwrap();
    assert_eq!(user.and_then(|u| u.username).as_deref(), Some("zhangsan"));
    assert!(!template.has_key("zset").await.unwrap());
}

#[tokio::test]
#[ignore = "requires Docker"]
async fn test_list_set_out_of_range_is_server_error() {
    let redis = start_redis().await;
    let ops = redis.template.ops_for_list();

    ops.right_push("short", "only").await.unwrap();
    assert!(ops.set("short", 5, "x").await.is_err());
}
