use std::fs;

use log::info;

use super::ConfigError;

/// Built-in persona for the gift advisor. Kept in Chinese to match the
/// shopping-widget frontend it serves.
pub const SYSTEM_PROMPT: &str = "你是一个专业的礼物推荐顾问，名字叫\"品答答\"。你的任务是通过对话帮助用户找到最合适的礼物。

你需要：
1. 友好、热情地与用户交流
2. 通过提问收集信息：送礼对象、场合、预算、对方喜好等
3. 根据收集的信息，推荐合适的礼物
4. 回答要简洁、有条理，适当使用emoji让对话更生动
5. 如果用户提供的信息不够，主动追问关键信息

礼物推荐范围包括：
- 数码产品：耳机、手表、键盘等
- 美妆护肤：口红、香水、护肤套装
- 时尚配饰：包包、首饰、围巾
- 运动装备：球鞋、运动包、健身器材
- 创意礼物：定制礼物、手工制品、纪念品

请保持回复简洁（100字以内），不要过于冗长。";

/// Resolve the system prompt: a configured file overrides the built-in one.
pub fn load_system_prompt(path: Option<&str>) -> Result<String, ConfigError> {
    match path {
        Some(path) => {
            let text = fs::read_to_string(path)
                .map_err(|e| ConfigError::PromptFile(path.to_string(), e))?;
            if text.trim().is_empty() {
                return Err(ConfigError::EmptyPromptFile(path.to_string()));
            }
            info!("Loaded system prompt override from {}", path);
            Ok(text)
        }
        None => Ok(SYSTEM_PROMPT.to_string()),
    }
}
