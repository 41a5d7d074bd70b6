use tasklist_core::Task;

#[test]
fn completion_time_none_while_open() {
    let task = Task {
        id: 7,
        description: "water the plants".to_string(),
        done: false,
        created_at: 1_700_000_000,
        completed_at: 0,
    };

    assert_eq!(task.completion_time(), None);
}

#[test]
fn completion_time_set_once_done() {
    let task = Task {
        id: 7,
        description: "water the plants".to_string(),
        done: true,
        created_at: 1_700_000_000,
        completed_at: 1_700_000_600,
    };

    assert_eq!(task.completion_time(), Some(1_700_000_600));
}

#[test]
fn task_serialization_uses_expected_wire_fields() {
    let task = Task {
        id: 3,
        description: "ship the release".to_string(),
        done: true,
        created_at: 1_700_000_000,
        completed_at: 1_700_003_600,
    };

    let json = serde_json::to_value(&task).unwrap();
    assert_eq!(json["id"], 3);
    assert_eq!(json["description"], "ship the release");
    assert_eq!(json["done"], true);
    assert_eq!(json["created_at"], 1_700_000_000_i64);
    assert_eq!(json["completed_at"], 1_700_003_600_i64);

    let decoded: Task = serde_json::from_value(json).unwrap();
    assert_eq!(decoded, task);
}
