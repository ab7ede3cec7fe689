// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use crate::unit::helpers::mock_executor::{args, bulk, bulks, template};
use redis::Value;

#[tokio::test]
async fn test_add_and_range() {
    let template = template(vec![
        Value::Int(1),
        Value::Int(0),
        bulks(&["a", "b"]),
        Value::Int(2),
    ]);
    let ops = template.ops_for_zset();

    assert!(ops.add("zset", "a", 1.0).await.unwrap());
    // 成员已存在时只更新分值
    assert!(!ops.add("zset", "b", 2.5).await.unwrap());
    assert_eq!(ops.range("zset", 0, -1).await.unwrap(), vec!["a", "b"]);
    assert_eq!(ops.z_card("zset").await.unwrap(), 2);

    assert_eq!(
        template.executor().commands(),
        vec![
            args(&["ZADD", "zset", "1", "a"]),
            args(&["ZADD", "zset", "2.5", "b"]),
            args(&["ZRANGE", "zset", "0", "-1"]),
            args(&["ZCARD", "zset"]),
        ]
    );
}

#[tokio::test]
async fn test_remove_score_increment() {
    let template = template(vec![
        Value::Int(1),
        bulk("3"),
        Value::Nil,
        bulk("11"),
        bulk("-7"),
    ]);
    let ops = template.ops_for_zset();

    assert_eq!(ops.remove("zset", &["b"]).await.unwrap(), 1);
    assert_eq!(ops.score("zset", "c").await.unwrap(), Some(3.0));
    assert_eq!(ops.score("zset", "b").await.unwrap(), None);
    assert_eq!(ops.increment_score("zset", "a", 10.0).await.unwrap(), 11.0);
    assert_eq!(ops.increment_score("zset", "c", -10.0).await.unwrap(), -7.0);

    assert_eq!(
        template.executor().commands(),
        vec![
            args(&["ZREM", "zset", "b"]),
            args(&["ZSCORE", "zset", "c"]),
            args(&["ZSCORE", "zset", "b"]),
            args(&["ZINCRBY", "zset", "10", "a"]),
            args(&["ZINCRBY", "zset", "-10", "c"]),
        ]
    );
}

#[tokio::test]
async fn test_range_with_scores_and_reverse() {
    let template = template(vec![
        bulks(&["a", "1", "c", "3"]),
        bulks(&["c", "a"]),
    ]);
    let ops = template.ops_for_zset();

    assert_eq!(
        ops.range_with_scores("zset", 0, -1).await.unwrap(),
        vec![("a".to_string(), 1.0), ("c".to_string(), 3.0)]
    );
    assert_eq!(ops.reverse_range("zset", 0, -1).await.unwrap(), vec!["c", "a"]);

    assert_eq!(
        template.executor().commands(),
        vec![
            args(&["ZRANGE", "zset", "0", "-1", "WITHSCORES"]),
            args(&["ZREVRANGE", "zset", "0", "-1"]),
        ]
    );
}

#[tokio::test]
async fn test_score_bounds_count_rank() {
    let template = template(vec![
        bulks(&["a", "c"]),
        Value::Int(5),
        Value::Int(0),
        Value::Nil,
    ]);
    let ops = template.ops_for_zset();

    assert_eq!(ops.range_by_score("zset", 1.0, 3.0).await.unwrap(), vec!["a", "c"]);
    assert_eq!(
        ops.count("zset", f64::NEG_INFINITY, f64::INFINITY).await.unwrap(),
        5
    );
    assert_eq!(ops.rank("zset", "a").await.unwrap(), Some(0));
    assert_eq!(ops.reverse_rank("zset", "z").await.unwrap(), None);

    assert_eq!(
        template.executor().commands(),
        vec![
            args(&["ZRANGEBYSCORE", "zset", "1", "3"]),
            args(&["ZCOUNT", "zset", "-inf", "+inf"]),
            args(&["ZRANK", "zset", "a"]),
            args(&["ZREVRANK", "zset", "z"]),
        ]
    );
}

#[tokio::test]
async fn test_range_with_scores_resp3_and_infinite_scores() {
    let template = template(vec![
        Value::Array(vec![
            Value::Array(vec![bulk("a"), Value::Double(1.0)]),
            Value::Array(vec![bulk("b"), Value::Double(2.5)]),
        ]),
        bulks(&["low", "-inf", "high", "inf"]),
        bulk("inf"),
    ]);
    let ops = template.ops_for_zset();

    // RESP3 返回嵌套数组与双精度分值
    assert_eq!(
        ops.range_with_scores("zset", 0, -1).await.unwrap(),
        vec![("a".to_string(), 1.0), ("b".to_string(), 2.5)]
    );
    // RESP2 以文本返回无穷分值
    assert_eq!(
        ops.range_with_scores("bounds", 0, -1).await.unwrap(),
        vec![
            ("low".to_string(), f64::NEG_INFINITY),
            ("high".to_string(), f64::INFINITY)
        ]
    );
    assert_eq!(ops.score("bounds", "high").await.unwrap(), Some(f64::INFINITY));
}
