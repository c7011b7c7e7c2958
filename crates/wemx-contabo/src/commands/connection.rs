use colored::Colorize;
use wemx_service::{ConnectionTest, Service};
use wemx_service_contabo::ContaboService;

pub async fn handle(service: &ContaboService) -> anyhow::Result<()> {
    println!("{}", "Connecting to the Contabo API...".blue());

    match service.test_connection().await {
        ConnectionTest::Success(message) => {
            println!("{} {}", "✓".green(), message);
            Ok(())
        }
        ConnectionTest::Failure(message) => {
            // ホスト向けのメッセージは HTML 改行を含む
            let message = message.replace("<br>", "\n");
            eprintln!("{} {}", "✗".red(), message);
            anyhow::bail!("connection test failed")
        }
    }
}
