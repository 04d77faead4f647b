//! MCP handler tests
mod common;

use common::{get_test_handler, read_todo_file, todo_path};
use std::fs;
use toolbelt::{RateTable, ToolbeltServerHandler};

#[tokio::test]
async fn test_convert() {
    let (server, _dir) = get_test_handler();

    let result = server
        .handle_convert(1.0, "USD".to_string(), "GHS".to_string())
        .await
        .unwrap();
    assert_eq!(result, "Converted Amount: 10.50 GHS");

    let result = server
        .handle_convert(100.0, "ghs".to_string(), "usd".to_string())
        .await
        .unwrap();
    assert_eq!(result, "Converted Amount: 9.52 USD");
}

#[tokio::test]
async fn test_convert_rejects_unknown_currency_and_bad_amount() {
    let (server, _dir) = get_test_handler();

    let result = server
        .handle_convert(1.0, "JPY".to_string(), "GHS".to_string())
        .await;
    assert!(result.is_err());

    let result = server
        .handle_convert(f64::NAN, "USD".to_string(), "GHS".to_string())
        .await;
    assert!(result.is_err());
}

#[tokio::test]
async fn test_currencies_lists_sorted_codes() {
    let (server, _dir) = get_test_handler();

    let result = server.handle_currencies().await.unwrap();
    let eur = result.find("EUR").unwrap();
    let usd = result.find("USD").unwrap();
    assert!(eur < usd);
}

#[tokio::test]
async fn test_todo_add_list_delete() {
    let (server, dir) = get_test_handler();

    assert_eq!(
        server.handle_todo_list().await.unwrap(),
        "No tasks in your list."
    );

    server.handle_todo_add("read".to_string()).await.unwrap();
    server.handle_todo_add(" write ".to_string()).await.unwrap();
    assert_eq!(read_todo_file(&dir), "read\nwrite\n");

    let list = server.handle_todo_list().await.unwrap();
    assert!(list.contains("1. read\n2. write\n"));

    server.handle_todo_delete(1).await.unwrap();
    assert_eq!(read_todo_file(&dir), "write\n");
}

#[tokio::test]
async fn test_todo_errors() {
    let (server, dir) = get_test_handler();

    assert!(server.handle_todo_add("   ".to_string()).await.is_err());
    assert!(server.handle_todo_delete(1).await.is_err());
    assert!(!todo_path(&dir).exists());
}

#[tokio::test]
async fn test_existing_todo_file_is_loaded() {
    let (_server, dir) = get_test_handler();
    fs::write(todo_path(&dir), "existing task\n").unwrap();

    let server = ToolbeltServerHandler::new(todo_path(&dir), RateTable::default()).unwrap();
    let list = server.handle_todo_list().await.unwrap();
    assert!(list.contains("1. existing task"));
}

#[tokio::test]
async fn test_todo_add_rejects_multi_line_task() {
    let (server, dir) = get_test_handler();

    server.handle_todo_add("keep".to_string()).await.unwrap();
    assert!(
        server
            .handle_todo_add("first\nsecond".to_string())
            .await
            .is_err()
    );
    assert!(
        server
            .handle_todo_add("first\r\nsecond".to_string())
            .await
            .is_err()
    );
    assert_eq!(read_todo_file(&dir), "keep\n");

    // Reloading the file yields the same single task
    let reloaded = ToolbeltServerHandler::new(todo_path(&dir), RateTable::default()).unwrap();
    let list = reloaded.handle_todo_list().await.unwrap();
    assert_eq!(list, "Your To-Do List:\n1. keep\n");
}
