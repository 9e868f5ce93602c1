//! 交互式菜单
//!
//! 未提供 `--generate` 时使用。菜单只负责输入输出，生成和写入都交给 `SeedService`。
//! 任何错误只提示并回到主菜单，只有选择退出或输入结束才会离开循环。

use std::io::{self, BufRead, Write};

use tracing::{error, info, warn};
use txseed_shared::error::SeedError;

use super::commands::OutputTarget;
use super::runner::{GenerateRequest, execute};
use crate::service::SeedService;
use crate::sinks::pretty_user;

const RULE: &str = "===============================";

/// 菜单循环的下一步
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Step {
    Continue,
    Quit,
}

/// 交互式菜单
pub struct Menu<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Menu<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    /// 取回输出端
    pub fn into_output(self) -> W {
        self.output
    }

    /// 运行菜单循环
    pub async fn run(&mut self, service: &SeedService) -> io::Result<()> {
        loop {
            self.print_main_menu()?;

            let Some(line) = self.prompt("请选择操作: ")? else {
                return Ok(());
            };

            let step = match parse_number(&line) {
                Ok(1) => self.generate_flow(service).await?,
                Ok(2) => self.preview(service)?,
                Ok(3) => {
                    info!("Exiting program");
                    writeln!(self.output, "正在退出...")?;
                    Step::Quit
                }
                Ok(_) => {
                    warn!("Invalid option selected");
                    writeln!(self.output, "无效选项")?;
                    Step::Continue
                }
                Err(e) => {
                    error!("Invalid value entered");
                    writeln!(self.output, "{}", e)?;
                    Step::Continue
                }
            };

            if step == Step::Quit {
                return Ok(());
            }
        }
    }

    /// 生成文档流程：数量 -> 输出目标 -> 连接串或文件名
    async fn generate_flow(&mut self, service: &SeedService) -> io::Result<Step> {
        let Some(line) = self.prompt("需要生成多少条文档? ")? else {
            return Ok(Step::Quit);
        };
        let count = match parse_number(&line) {
            Ok(count) => count,
            Err(_) => {
                error!("Invalid value for number of documents");
                writeln!(self.output, "文档数量无效！")?;
                return Ok(Step::Continue);
            }
        };

        self.print_generation_menu()?;
        let Some(line) = self.prompt("请选择输出方式: ")? else {
            return Ok(Step::Quit);
        };

        let request = match parse_number(&line) {
            Ok(1) => {
                let Some(connection) = self.prompt("MongoDB 连接串（留空使用配置）: ")? else {
                    return Ok(Step::Quit);
                };
                GenerateRequest {
                    count,
                    target: OutputTarget::Mongo,
                    connection: Some(connection),
                    filename: None,
                }
            }
            Ok(2) => {
                let Some(filename) = self.prompt("JSON 文件名（不含扩展名）: ")? else {
                    return Ok(Step::Quit);
                };
                GenerateRequest {
                    count,
                    target: OutputTarget::Json,
                    connection: None,
                    filename: Some(filename),
                }
            }
            _ => {
                warn!("Invalid output option selected");
                writeln!(self.output, "无效选项")?;
                return Ok(Step::Continue);
            }
        };

        match execute(service, &request).await {
            Ok(outcome) => writeln!(self.output, "{}", outcome)?,
            Err(e) => {
                error!(error = %e, output = request.target.name(), "Error");
                writeln!(self.output, "错误: {}", e)?;
            }
        }

        Ok(Step::Continue)
    }

    /// 预览一个示例用户
    fn preview(&mut self, service: &SeedService) -> io::Result<Step> {
        match service.sample_user().and_then(|user| pretty_user(&user)) {
            Ok(text) => writeln!(self.output, "{}", text)?,
            Err(e) => {
                error!(error = %e, "生成示例用户失败");
                writeln!(self.output, "错误: {}", e)?;
            }
        }
        Ok(Step::Continue)
    }

    fn print_main_menu(&mut self) -> io::Result<()> {
        writeln!(self.output, "{}", RULE)?;
        writeln!(self.output, "          数据生成器")?;
        writeln!(self.output, "{}", RULE)?;
        writeln!(self.output, "[1] 生成文档")?;
        writeln!(self.output, "[2] 预览示例用户")?;
        writeln!(self.output, "[3] 退出")?;
        writeln!(self.output, "{}", RULE)
    }

    fn print_generation_menu(&mut self) -> io::Result<()> {
        writeln!(self.output, "{}", RULE)?;
        writeln!(self.output, "          输出方式")?;
        writeln!(self.output, "{}", RULE)?;
        writeln!(self.output, "[1] 保存到 MongoDB")?;
        writeln!(self.output, "[2] 保存为 JSON 文件")?;
        writeln!(self.output, "{}", RULE)
    }

    /// 打印提示并读取一行，输入结束时返回 None
    fn prompt(&mut self, label: &str) -> io::Result<Option<String>> {
        write!(self.output, "{}", label)?;
        self.output.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        Ok(Some(line.trim().to_string()))
    }
}

/// 解析菜单中的数字输入
fn parse_number(input: &str) -> Result<usize, SeedError> {
    let input = input.trim();
    input
        .parse()
        .map_err(|_| SeedError::InvalidInput(format!("'{}' 不是有效的数字", input)))
}
