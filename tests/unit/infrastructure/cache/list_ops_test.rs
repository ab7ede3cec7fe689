// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use crate::unit::helpers::mock_executor::{args, bulk, bulks, template};
use redis::Value;

#[tokio::test]
async fn test_left_push_variants() {
    let template = template(vec![Value::Int(1), Value::Int(3), Value::Int(5)]);
    let ops = template.ops_for_list();

    assert_eq!(ops.left_push("list", "b").await.unwrap(), 1);
    assert_eq!(ops.left_push_all("list", &["b", "c"]).await.unwrap(), 3);
    let items = vec!["d".to_string(), "e".to_string()];
    assert_eq!(ops.left_push_all("list", &items).await.unwrap(), 5);

    assert_eq!(
        template.executor().commands(),
        vec![
            args(&["LPUSH", "list", "b"]),
            args(&["LPUSH", "list", "b", "c"]),
            args(&["LPUSH", "list", "d", "e"]),
        ]
    );
}

#[tokio::test]
async fn test_push_all_empty_reports_length() {
    let template = template(vec![Value::Int(4)]);

    let len = template
        .ops_for_list()
        .right_push_all::<&str>("list", &[])
        .await
        .unwrap();

    assert_eq!(len, 4);
    assert_eq!(template.executor().commands(), vec![args(&["LLEN", "list"])]);
}

#[tokio::test]
async fn test_set_size_range_pop() {
    let template = template(vec![
        Value::Okay,
        Value::Int(5),
        bulks(&["e", "d", "a", "b"]),
        bulk("e"),
        Value::Nil,
    ]);
    let ops = template.ops_for_list();

    ops.set("list", 2, "a").await.unwrap();
    assert_eq!(ops.size("list").await.unwrap(), 5);
    assert_eq!(ops.range("list", 0, 3).await.unwrap(), vec!["e", "d", "a", "b"]);
    assert_eq!(ops.left_pop("list").await.unwrap().as_deref(), Some("e"));
    assert_eq!(ops.right_pop("empty").await.unwrap(), None);

    assert_eq!(
        template.executor().commands(),
        vec![
            args(&["LSET", "list", "2", "a"]),
            args(&["LLEN", "list"]),
            args(&["LRANGE", "list", "0", "3"]),
            args(&["LPOP", "list"]),
            args(&["RPOP", "empty"]),
        ]
    );
}

#[tokio::test]
async fn test_remove_count_direction() {
    let template = template(vec![Value::Int(1), Value::Int(2), Value::Int(0)]);
    let ops = template.ops_for_list();

    assert_eq!(ops.remove("list", 1, "b").await.unwrap(), 1);
    assert_eq!(ops.remove("list", 0, "b").await.unwrap(), 2);
    assert_eq!(ops.remove("list", -1, "z").await.unwrap(), 0);

    assert_eq!(
        template.executor().commands(),
        vec![
            args(&["LREM", "list", "1", "b"]),
            args(&["LREM", "list", "0", "b"]),
            args(&["LREM", "list", "-1", "z"]),
        ]
    );
}

#[tokio::test]
async fn test_index_and_trim() {
    let template = template(vec![bulk("d"), Value::Okay, Value::Int(1)]);
    let ops = template.ops_for_list();

    assert_eq!(ops.index("list", -1).await.unwrap().as_deref(), Some("d"));
    ops.trim("list", 0, 1).await.unwrap();

    // LSET 必须返回 OK
    assert!(ops.set("list", 9, "x").await.is_err());

    assert_eq!(
        template.executor().commands(),
        vec![
            args(&["LINDEX", "list", "-1"]),
            args(&["LTRIM", "list", "0", "1"]),
            args(&["LSET", "list", "9", "x"]),
        ]
    );
}
