use async_trait::async_trait;
use redis::{Cmd, Value};
use redis_demo::infrastructure::cache::executor::{command_args, CommandExecutor};
use redis_demo::infrastructure::cache::template::RedisTemplate;
use redis_demo::utils::errors::{StoreError, StoreResult};
use std::collections::VecDeque;
use std::sync::Mutex;

/// 脚本化执行器
///
/// 记录收到的命令，并按顺序返回预先设定的响应
pub struct ScriptedExecutor {
    replies: Mutex<VecDeque<Value>>,
    commands: Mutex<Vec<Vec<String>>>,
}

impl ScriptedExecutor {
    pub fn new(replies: Vec<Value>) -> Self {
        Self {
            replies: Mutex::new(replies.into()),
            commands: Mutex::new(Vec::new()),
        }
    }

    pub fn commands(&self) -> Vec<Vec<String>> {
        self.commands.lock().unwrap().clone()
    }

    pub fn remaining_replies(&self) -> usize {
        self.replies.lock().unwrap().len()
    }
}

#[async_trait]
impl CommandExecutor for ScriptedExecutor {
    async fn execute(&self, cmd: Cmd) -> StoreResult<Value> {
        let args = command_args(&cmd);
        self.commands.lock().unwrap().push(args.clone());
        self.replies
            .lock()
            .unwrap()
            .pop_front()
            .ok_or_else(|| StoreError::InvalidArgument(format!("no scripted reply for {:?}", args)))
    }
}

pub fn template(replies: Vec<Value>) -> RedisTemplate<ScriptedExecutor> {
    RedisTemplate::new(ScriptedExecutor::new(replies))
}

pub fn bulk(text: &str) -> Value {
    Value::BulkString(text.as_bytes().to_vec())
}

pub fn bulks(items: &[&str]) -> Value {
    Value::Array(items.iter().map(|item| bulk(item)).collect())
}

/// 将字符串切片转为命令参数，便于断言
pub fn args(items: &[&str]) -> Vec<String> {
    items.iter().map(|item| item.to_string()).collect()
}
