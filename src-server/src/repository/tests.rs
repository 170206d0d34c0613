//! Repository Integration Tests
//!
//! Tests for the in-memory task repository.

#[cfg(test)]
mod tests {
    use crate::domain::{DomainError, Task};
    use crate::repository::{InMemoryTaskRepository, Repository};

    fn draft(text: &str) -> Task {
        // ID will be assigned by the repository
        Task::new(0, text.to_string())
    }

    #[tokio::test]
    async fn test_create_task() {
        let repo = InMemoryTaskRepository::new();

        let created = repo.create(&draft("Test task")).await.expect("Failed to create");

        assert_eq!(created.id, 1);
        assert_eq!(created.text, "Test task");
        assert!(!created.completed);
    }

    #[tokio::test]
    async fn test_create_rejects_empty_text() {
        let repo = InMemoryTaskRepository::new();

        let err = repo.create(&draft("")).await.unwrap_err();
        assert!(matches!(err, DomainError::InvalidInput(_)));
        assert!(repo.list().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_ids_are_unique_and_increasing() {
        let repo = InMemoryTaskRepository::seeded();

        let a = repo.create(&draft("A")).await.unwrap();
        repo.delete(a.id).await.unwrap();
        let b = repo.create(&draft("B")).await.unwrap();

        assert_eq!(a.id, 4);
        assert_eq!(b.id, 5);
    }

    #[tokio::test]
    async fn test_list_keeps_insertion_order() {
        let repo = InMemoryTaskRepository::seeded();
        repo.create(&draft("Fourth")).await.unwrap();

        let ids: Vec<u32> = repo.list().await.unwrap().iter().map(|t| t.id).collect();
        assert_eq!(ids, vec![1, 2, 3, 4]);
    }

    #[tokio::test]
    async fn test_find_by_id() {
        let repo = InMemoryTaskRepository::seeded();

        let found = repo.find_by_id(2).await.expect("Find failed");
        assert_eq!(found.unwrap().text, "Build a TO-DO app");
        assert!(repo.find_by_id(999).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_update_task() {
        let repo = InMemoryTaskRepository::seeded();

        let mut task = repo.find_by_id(1).await.unwrap().unwrap();
        task.completed = true;

        let updated = repo.update(&task).await.expect("Update failed");
        assert!(updated.completed);
        assert!(repo.find_by_id(1).await.unwrap().unwrap().completed);
    }

    #[tokio::test]
    async fn test_update_unknown_id() {
        let repo = InMemoryTaskRepository::seeded();

        let err = repo.update(&Task::new(999, "Ghost".to_string())).await.unwrap_err();
        assert!(matches!(err, DomainError::NotFound(_)));
    }

    #[tokio::test]
    async fn test_delete_task() {
        let repo = InMemoryTaskRepository::seeded();

        repo.delete(2).await.expect("Delete failed");

        let ids: Vec<u32> = repo.list().await.unwrap().iter().map(|t| t.id).collect();
        assert_eq!(ids, vec![1, 3]);
        assert!(matches!(repo.delete(2).await, Err(DomainError::NotFound(_))));
    }

    #[tokio::test]
    async fn test_reset_restores_seed() {
        let repo = InMemoryTaskRepository::seeded();
        repo.delete(1).await.unwrap();
        repo.create(&draft("Extra")).await.unwrap();

        repo.reset().await;

        let ids: Vec<u32> = repo.list().await.unwrap().iter().map(|t| t.id).collect();
        assert_eq!(ids, vec![1, 2, 3]);
        assert_eq!(repo.create(&draft("Again")).await.unwrap().id, 4);
    }
}
