use super::print_json;
use colored::Colorize;
use wemx_service_contabo::{ContaboApi, CreateServerRequest};

pub async fn images(api: &ContaboApi) -> anyhow::Result<()> {
    print_json(&api.get_images().await?)
}

pub async fn list(api: &ContaboApi) -> anyhow::Result<()> {
    print_json(&api.get_servers().await?)
}

pub async fn show(api: &ContaboApi, id: &str) -> anyhow::Result<()> {
    print_json(&api.get_server(id).await?)
}

pub async fn logs(api: &ContaboApi, id: &str) -> anyhow::Result<()> {
    print_json(&api.get_server_logs(id).await?)
}

pub async fn create(
    api: &ContaboApi,
    display_name: String,
    image: String,
    product: String,
    region: String,
    period: u32,
) -> anyhow::Result<()> {
    println!(
        "{} {} ({} / {})",
        "Creating".blue(),
        display_name.cyan(),
        product,
        region
    );

    let request = CreateServerRequest {
        display_name,
        image,
        product,
        region,
        period,
    };
    print_json(&api.create_server(&request).await?)
}

pub async fn start(api: &ContaboApi, id: &str) -> anyhow::Result<()> {
    let body = api.start_server(id).await?;
    done("started", id);
    print_json(&body)
}

pub async fn stop(api: &ContaboApi, id: &str) -> anyhow::Result<()> {
    let body = api.stop_server(id).await?;
    done("stopped", id);
    print_json(&body)
}

pub async fn shutdown(api: &ContaboApi, id: &str) -> anyhow::Result<()> {
    let body = api.shutdown_server(id).await?;
    done("shut down", id);
    print_json(&body)
}

pub async fn rescue(api: &ContaboApi, id: &str) -> anyhow::Result<()> {
    let body = api.enable_rescue_mode(id).await?;
    done("rescue mode enabled", id);
    print_json(&body)
}

/// 失敗しても終了コードは 0 (診断ログに CRITICAL で記録済み)
pub async fn cancel(api: &ContaboApi, id: &str) {
    match api.try_cancel_server(id).await {
        Ok(_) => println!("{} cancellation requested for {}", "✓".green(), id.cyan()),
        Err(e) => eprintln!(
            "{} cancellation of {} failed and was logged: {}",
            "⚠".yellow(),
            id.cyan(),
            e
        ),
    }
}

pub async fn reset_password(api: &ContaboApi, id: &str, password: &str) -> anyhow::Result<()> {
    let body = api.reset_password(id, password).await?;
    done("root password reset", id);
    print_json(&body)
}

fn done(what: &str, id: &str) {
    println!("{} {}: {}", "✓".green(), id.cyan(), what);
}
