// src/db/store.rs

use std::sync::Arc;
use tokio::sync::RwLock;

// Todo registro guardado em memória precisa expor o seu ID
pub trait Record: Clone + Send + Sync + 'static {
    fn id(&self) -> &str;
}

/// Coleção em memória, na ordem de inserção, que vive enquanto o processo viver.
///
/// Cada store tem o seu próprio lock: toda operação (inclusive "achar e alterar"
/// e "achar e remover") acontece como um passo só.
/// As buscas são varreduras lineares, sem índice.
#[derive(Clone)]
pub struct MemoryStore<T> {
    records: Arc<RwLock<Vec<T>>>,
}

impl<T: Record> Default for MemoryStore<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Record> MemoryStore<T> {
    pub fn new() -> Self {
        Self::with_records(Vec::new())
    }

    pub fn with_records(records: Vec<T>) -> Self {
        Self {
            records: Arc::new(RwLock::new(records)),
        }
    }

    pub async fn append(&self, record: T) {
        self.records.write().await.push(record);
    }

    // Cópia do conteúdo inteiro
    pub async fn all(&self) -> Vec<T> {
        self.records.read().await.clone()
    }

    pub async fn len(&self) -> usize {
        self.records.read().await.len()
    }

    pub async fn find<P>(&self, predicate: P) -> Option<T>
    where
        P: Fn(&T) -> bool,
    {
        self.records.read().await.iter().find(|r| predicate(r)).cloned()
    }

    pub async fn find_by_id(&self, id: &str) -> Option<T> {
        self.find(|r| r.id() == id).await
    }

    pub async fn filter<P>(&self, predicate: P) -> Vec<T>
    where
        P: Fn(&T) -> bool,
    {
        self.records
            .read()
            .await
            .iter()
            .filter(|r| predicate(r))
            .cloned()
            .collect()
    }

    /// Aplica `change` no primeiro registro com esse ID.
    /// Retorna `false` (sem tocar em nada) quando não existe.
    pub async fn update_by_id<F>(&self, id: &str, change: F) -> bool
    where
        F: FnOnce(&mut T),
    {
        let mut records = self.records.write().await;
        match records.iter_mut().find(|r| r.id() == id) {
            Some(record) => {
                change(record);
                true
            }
            None => false,
        }
    }

    /// Remove pela posição do primeiro registro com esse ID.
    pub async fn remove_by_id(&self, id: &str) -> Option<T> {
        let mut records = self.records.write().await;
        let index = records.iter().position(|r| r.id() == id)?;
        Some(records.remove(index))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Clone, PartialEq)]
    struct Item {
        id: String,
        label: String,
    }

    impl Record for Item {
        fn id(&self) -> &str {
            &self.id
        }
    }

    fn item(id: &str, label: &str) -> Item {
        Item {
            id: id.into(),
            label: label.into(),
        }
    }

    #[tokio::test]
    async fn keeps_insertion_order() {
        let store = MemoryStore::new();
        store.append(item("b", "x")).await;
        store.append(item("a", "y")).await;
        store.append(item("c", "x")).await;

        let ids: Vec<String> = store.all().await.into_iter().map(|i| i.id).collect();
        assert_eq!(ids, vec!["b", "a", "c"]);

        let xs: Vec<String> = store
            .filter(|i| i.label == "x")
            .await
            .into_iter()
            .map(|i| i.id)
            .collect();
        assert_eq!(xs, vec!["b", "c"]);
    }

    #[tokio::test]
    async fn update_and_remove_miss_leave_store_untouched() {
        let store = MemoryStore::with_records(vec![item("a", "x")]);

        assert!(!store.update_by_id("zzz", |i| i.label = "changed".into()).await);
        assert!(store.remove_by_id("zzz").await.is_none());
        assert_eq!(store.all().await, vec![item("a", "x")]);
    }

    #[tokio::test]
    async fn remove_takes_only_the_matching_record() {
        let store = MemoryStore::with_records(vec![item("a", "1"), item("b", "2"), item("c", "3")]);

        let removed = store.remove_by_id("b").await;
        assert_eq!(removed, Some(item("b", "2")));
        assert_eq!(store.len().await, 2);
        assert!(store.find_by_id("b").await.is_none());
        assert_eq!(store.find_by_id("c").await, Some(item("c", "3")));
    }

    #[tokio::test]
    async fn concurrent_appends_are_all_kept() {
        let store = MemoryStore::new();
        let mut tasks = Vec::new();
        for n in 0..50 {
            let store = store.clone();
            tasks.push(tokio::spawn(async move {
                store.append(item(&n.to_string(), "x")).await;
            }));
        }
        for task in tasks {
            task.await.unwrap();
        }
        assert_eq!(store.len().await, 50);
    }
}
