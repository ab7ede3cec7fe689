// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use crate::unit::helpers::mock_executor::{args, bulk, template};
use redis::Value;
use redis_demo::infrastructure::cache::expiry::{KeyExpiry, TimeUnit};
use redis_demo::infrastructure::cache::template::DataType;
use redis_demo::utils::errors::StoreError;
use std::time::Duration;

#[tokio::test]
async fn test_expire_and_get_expire() {
    let template = template(vec![Value::Int(1), Value::Int(-1), Value::Int(-2), Value::Int(8)]);

    assert!(template
        .expire("username", Duration::from_secs(10))
        .await
        .unwrap());
    assert_eq!(template.get_expire("zset").await.unwrap(), KeyExpiry::Persistent);
    assert_eq!(template.get_expire("gone").await.unwrap(), KeyExpiry::Missing);
    assert_eq!(
        template.get_expire("username").await.unwrap(),
        KeyExpiry::ExpiresIn(Duration::from_secs(8))
    );

    assert_eq!(
        template.executor().commands(),
        vec![
            args(&["EXPIRE", "username", "10"]),
            args(&["TTL", "zset"]),
            args(&["TTL", "gone"]),
            args(&["TTL", "username"]),
        ]
    );
}

#[tokio::test]
async fn test_expire_with_unit_and_pttl() {
    let template = template(vec![Value::Int(1), Value::Int(90_500), Value::Int(-2)]);

    assert!(template
        .expire_with_unit("password", 2, TimeUnit::Minutes)
        .await
        .unwrap());
    assert_eq!(
        template
            .get_expire_with_unit("password", TimeUnit::Seconds)
            .await
            .unwrap(),
        90
    );
    assert_eq!(
        template
            .get_expire_with_unit("gone", TimeUnit::Seconds)
            .await
            .unwrap(),
        -2
    );

    assert_eq!(
        template.executor().commands(),
        vec![
            args(&["EXPIRE", "password", "120"]),
            args(&["PTTL", "password"]),
            args(&["PTTL", "gone"]),
        ]
    );
}

#[tokio::test]
async fn test_sub_millisecond_expire_is_rejected_locally() {
    let template = template(vec![]);

    // Given: 不足一毫秒的时长，EXPIRE key 0 会删除键
    let err = template
        .expire("username", Duration::from_micros(500))
        .await
        .unwrap_err();

    // Then: 本地拒绝，不发送任何命令
    assert!(matches!(err, StoreError::InvalidArgument(_)));
    assert!(template.executor().commands().is_empty());
}

#[tokio::test]
async fn test_status_reply_must_be_ok() {
    let template = template(vec![bulk("QUEUED"), Value::Nil]);

    let err = template.rename("user1", "user9").await.unwrap_err();
    match err {
        StoreError::UnexpectedReply { command, reply } => {
            assert_eq!(command, "RENAME");
            assert_eq!(reply, "QUEUED");
        }
        other => panic!("unexpected error: {other}"),
    }

    let err = template.ops_for_list().set("list", 9, "x").await.unwrap_err();
    assert!(matches!(err, StoreError::UnexpectedReply { .. }));
}

#[tokio::test]
async fn test_delete_and_has_key() {
    let template = template(vec![Value::Int(1), Value::Int(0), Value::Int(2), Value::Int(0)]);

    assert!(template.delete("zset").await.unwrap());
    assert!(!template.delete("zset").await.unwrap());
    assert_eq!(template.delete_many(&["a", "b", "c"]).await.unwrap(), 2);
    assert!(!template.has_key("zset").await.unwrap());
    assert_eq!(template.delete_many::<&str>(&[]).await.unwrap(), 0);

    assert_eq!(
        template.executor().commands(),
        vec![
            args(&["DEL", "zset"]),
            args(&["DEL", "zset"]),
            args(&["DEL", "a", "b", "c"]),
            args(&["EXISTS", "zset"]),
        ]
    );
}

#[tokio::test]
async fn test_persist_type_rename() {
    let template = template(vec![
        Value::Int(1),
        Value::SimpleString("zset".to_string()),
        Value::SimpleString("none".to_string()),
        Value::Okay,
    ]);

    assert!(template.persist("username").await.unwrap());
    assert_eq!(template.key_type("zset").await.unwrap(), DataType::ZSet);
    assert_eq!(template.key_type("gone").await.unwrap(), DataType::None);
    template.rename("user1", "user9").await.unwrap();

    assert_eq!(
        template.executor().commands(),
        vec![
            args(&["PERSIST", "username"]),
            args(&["TYPE", "zset"]),
            args(&["TYPE", "gone"]),
            args(&["RENAME", "user1", "user9"]),
        ]
    );
}

#[tokio::test]
async fn test_unexpected_reply_is_reported() {
    let template = template(vec![Value::Okay]);

    let err = template.get_expire("zset").await.unwrap_err();
    match err {
        StoreError::UnexpectedReply { command, .. } => assert_eq!(command, "TTL"),
        other => panic!("unexpected error: {other}"),
    }
}

#[tokio::test]
async fn test_clones_share_executor() {
    let template = template(vec![Value::Int(1), Value::Int(1)]);
    let clone = template.clone();

    template.has_key("a").await.unwrap();
    clone.has_key("b").await.unwrap();

    assert_eq!(template.executor().commands().len(), 2);
    assert_eq!(clone.executor().remaining_replies(), 0);
}
