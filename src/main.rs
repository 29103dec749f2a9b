use std::process::ExitCode;

use medium_to_markdown::action::cli::process_args;

#[tokio::main]
async fn main() -> ExitCode {
    let args: Vec<String> = std::env::args().collect();
    match process_args(args).await {
        Ok(output) => {
            log::info!("程式執行完成：{}，輸出 {} 位元組", output.url, output.bytes_written);
            ExitCode::SUCCESS
        }
        Err(e) => {
            log::error!("程式執行失敗：{}", e);
            eprintln!("轉換失敗：{}", e);
            ExitCode::FAILURE
        }
    }
}
