use api_server::{AppState, ServerConfig};
use tempfile::TempDir;
use tm_client::{
    ClientConfig, ClientError, FormError, HttpTaskApi, Outcome, StatusFilter, TaskApi, TaskDraft,
    TaskManager,
};
use tm_core::task::TaskStatus;
use uuid::Uuid;

async fn start_server() -> (ClientConfig, TempDir) {
    let temp_dir = TempDir::new().unwrap();
    let config = ServerConfig {
        data_dir: temp_dir.path().to_path_buf(),
        ..Default::default()
    };
    let state = AppState::new(&config).await.unwrap();

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        api_server::serve(listener, state).await.unwrap();
    });

    (ClientConfig::new(format!("http://{}", addr)), temp_dir)
}

#[tokio::test]
async fn create_then_list_round_trips_fields() {
    let (config, _tmp) = start_server().await;
    let api = HttpTaskApi::new(config);

    let created = api
        .create_task(&TaskDraft::new("Buy milk", "2%"))
        .await
        .unwrap();
    assert_eq!(created.status, TaskStatus::Pending);

    let tasks = api.list_tasks().await.unwrap();
    assert_eq!(tasks.len(), 1);
    assert_eq!(tasks[0].id, created.id);
    assert_eq!(tasks[0].title, "Buy milk");
    assert_eq!(tasks[0].description.as_deref(), Some("2%"));
    assert_eq!(tasks[0].status, TaskStatus::Pending);
}

#[tokio::test]
async fn update_of_unknown_id_is_a_not_found_status() {
    let (config, _tmp) = start_server().await;
    let api = HttpTaskApi::new(config);

    let err = api
        .update_task(Uuid::new_v4(), &TaskDraft::new("ghost", "none"))
        .await
        .unwrap_err();

    match err {
        ClientError::Status { status, message } => {
            assert_eq!(status, 404);
            assert!(message.contains("not found"));
        }
        e => panic!("Expected Status error, got: {:?}", e),
    }
}

#[tokio::test]
async fn manager_drives_full_lifecycle() {
    let (config, _tmp) = start_server().await;
    let mut manager = TaskManager::new(HttpTaskApi::new(config));
    assert_eq!(manager.refresh().await, Outcome::Applied);
    assert!(manager.state().all_tasks().is_empty());

    for (title, description) in [("Buy milk", "2%"), ("Pay rent", "before the 1st")] {
        let form = manager.form_mut();
        form.title = title.to_string();
        form.description = description.to_string();
        assert_eq!(manager.submit_form().await, Ok(Outcome::Applied));
    }
    assert_eq!(manager.state().all_tasks().len(), 2);

    // Edit the second task to completed
    let rent = manager.state().all_tasks()[1].clone();
    manager.select_for_edit(rent.clone());
    manager.form_mut().status = TaskStatus::Completed;
    assert_eq!(manager.submit_form().await, Ok(Outcome::Applied));
    assert!(manager.state().editing_task().is_none());

    manager.set_status_filter(StatusFilter::Completed);
    let visible = manager.state().visible_tasks();
    assert_eq!(visible.len(), 1);
    assert_eq!(visible[0].id, rent.id);
    assert!(visible[0].updated_at >= rent.updated_at);

    // Blank description never reaches the server
    let form = manager.form_mut();
    form.title = "Incomplete".to_string();
    form.description = " ".to_string();
    assert_eq!(manager.submit_form().await, Err(FormError::DescriptionRequired));
    assert_eq!(manager.state().all_tasks().len(), 2);

    assert_eq!(manager.remove_task(rent.id).await, Outcome::Applied);
    assert_eq!(manager.state().all_tasks().len(), 1);
    assert!(manager.state().visible_tasks().is_empty());

    // Deleting again still succeeds
    assert_eq!(manager.remove_task(rent.id).await, Outcome::Applied);
    assert_eq!(manager.state().error_message(), None);
}

#[tokio::test]
async fn unreachable_server_sets_error_message() {
    // Bind then drop to get a port with nothing listening
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);

    let mut manager = TaskManager::new(HttpTaskApi::new(ClientConfig::new(format!(
        "http://{}",
        addr
    ))));

    assert_eq!(manager.refresh().await, Outcome::Failed);
    assert!(!manager.state().is_loading());
    assert!(manager
        .state()
        .error_message()
        .unwrap()
        .starts_with("Failed to fetch tasks"));
}
