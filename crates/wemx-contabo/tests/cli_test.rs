#![allow(deprecated)] // TODO: cargo_bin → cargo_bin_cmd! へ移行

use assert_cmd::Command;
use predicates::prelude::*;
use std::io::Write;

const CREDENTIAL_VARS: [&str; 4] = [
    "CONTABO_CLIENT_ID",
    "CONTABO_CLIENT_SECRET",
    "CONTABO_USERNAME",
    "CONTABO_USER_PASSWORD",
];

/// 環境変数の影響を受けないコマンドを作成
fn contabo() -> Command {
    let mut cmd = Command::cargo_bin("contabo").unwrap();
    cmd.env_remove("WEMX_SETTINGS_PATH")
        .env_remove("CONTABO_AUTH_URL")
        .env_remove("CONTABO_API_URL")
        .env_remove("RUST_LOG");
    for var in CREDENTIAL_VARS {
        cmd.env_remove(var);
    }
    cmd
}

/// 到達不能なエンドポイントと認証情報を設定
fn offline_contabo() -> Command {
    let mut cmd = contabo();
    cmd.env("CONTABO_AUTH_URL", "http://127.0.0.1:9/token")
        .env("CONTABO_API_URL", "http://127.0.0.1:9")
        .env("CONTABO_CLIENT_ID", "id")
        .env("CONTABO_CLIENT_SECRET", "secret")
        .env("CONTABO_USERNAME", "user@example.com")
        .env("CONTABO_USER_PASSWORD", "pw");
    cmd
}

/// CLIヘルプが正しく表示されることを確認
#[test]
fn test_cli_help() {
    contabo()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("test-connection"))
        .stdout(predicate::str::contains("servers"))
        .stdout(predicate::str::contains("cancel"))
        .stdout(predicate::str::contains("reset-password"));
}

/// バージョン表示が正しく動作することを確認
#[test]
fn test_cli_version() {
    contabo()
        .arg("version")
        .assert()
        .success()
        .stdout(predicate::str::contains("wemx-contabo"));
}

/// createコマンドのヘルプにデフォルト値が表示されることを確認
#[test]
fn test_create_help() {
    contabo()
        .args(["create", "--help"])
        .assert()
        .success()
        .stdout(predicate::str::contains("--name"))
        .stdout(predicate::str::contains("V1"))
        .stdout(predicate::str::contains("EU"));
}

/// 認証情報なしでカタログを表示できることを確認
#[test]
fn test_catalog_regions() {
    contabo()
        .args(["catalog", "regions"])
        .assert()
        .success()
        .stdout(predicate::str::contains("US-central"))
        .stdout(predicate::str::contains("(default)"))
        .stdout(predicate::str::contains("V16").not());
}

#[test]
fn test_catalog_products() {
    contabo()
        .args(["catalog", "products"])
        .assert()
        .success()
        .stdout(predicate::str::contains("V16"))
        .stdout(predicate::str::contains("US-central").not());
}

#[test]
fn test_catalog_all() {
    contabo()
        .arg("catalog")
        .assert()
        .success()
        .stdout(predicate::str::contains("Products"))
        .stdout(predicate::str::contains("Regions"));
}

#[test]
fn test_catalog_unknown_kind() {
    contabo().args(["catalog", "images"]).assert().failure();
}

/// 認証情報が未設定の場合、接続テストが失敗することを確認
#[test]
fn test_connection_without_credentials() {
    contabo()
        .arg("test-connection")
        .assert()
        .failure()
        .stdout(predicate::str::contains("Connecting to the Contabo API"))
        .stderr(predicate::str::contains("Missing configuration value"))
        .stderr(predicate::str::contains("<br>").not());
}

/// 設定ファイルの値が不足している場合
#[test]
fn test_connection_with_incomplete_settings_file() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(file, "contabo::client_id: my-client").unwrap();

    contabo()
        .arg("--settings")
        .arg(file.path())
        .arg("test-connection")
        .assert()
        .failure()
        .stderr(predicate::str::contains(
            "encrypted::contabo::client_secret",
        ));
}

#[test]
fn test_missing_settings_file() {
    contabo()
        .args(["--settings", "/nonexistent/wemx/settings.yaml", "servers"])
        .assert()
        .failure();
}

/// API に接続できない場合は接続エラー
#[test]
fn test_servers_unreachable() {
    offline_contabo()
        .arg("servers")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Failed to connect to the API"));
}

/// キャンセルの失敗は診断ログに記録され、終了コードは 0
#[test]
fn test_cancel_failure_is_not_fatal() {
    offline_contabo()
        .args(["cancel", "42"])
        .assert()
        .success()
        .stdout(predicate::str::contains("cancellation requested").not())
        .stderr(predicate::str::contains("failed and was logged"))
        .stderr(predicate::str::contains("contabo::cancel::server::42"))
        .stderr(predicate::str::contains("CRITICAL"));
}

/// 不正な ID はリクエスト前に拒否され、キャンセルはやはり終了コード 0
#[test]
fn test_cancel_rejects_unsafe_id() {
    offline_contabo()
        .args(["cancel", "42/actions/start"])
        .assert()
        .success()
        .stderr(predicate::str::contains("Invalid server id"))
        .stderr(predicate::str::contains("Failed to connect").not());
}

#[test]
fn test_start_rejects_unsafe_id() {
    offline_contabo()
        .args(["start", "42?x="])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid server id"));
}

#[test]
fn test_reset_password_requires_password() {
    offline_contabo()
        .env_remove("CONTABO_ROOT_PASSWORD")
        .args(["reset-password", "42"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("--password"));
}
