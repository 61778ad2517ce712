use crate::domain::model::book::{Book, BookPatch};
use crate::domain::model::collection::{Collection, Listing, SearchField};
use crate::domain::model::stats::ReadingStats;
use crate::domain::repository::CollectionRepository;

use super::error::AppError;

/// 蔵書コレクションに対するユースケース。
/// 起動時に1度だけloadし、以降は mutate → save のパターンで操作する。
pub struct BookStore<R: CollectionRepository> {
    repo: R,
    collection: Collection,
}

impl<R: CollectionRepository> BookStore<R> {
    /// リポジトリから読み込んでStoreを作る。
    /// 保存先が無い・壊れている場合は空コレクションで始める（エラーにしない）。
    pub fn open(repo: R) -> Self {
        let collection = match repo.load() {
            Ok(Some(collection)) => collection,
            Ok(None) => Collection::new(),
            Err(e) => {
                tracing::warn!(error = %e, "stored collection unreadable, starting empty");
                Collection::new()
            }
        };
        Self { repo, collection }
    }

    pub fn collection(&self) -> &Collection {
        &self.collection
    }

    /// 現在のコレクション全体を保存する（上書き）。
    pub fn save(&self) -> Result<(), AppError> {
        self.repo.save(&self.collection).map_err(|e| {
            tracing::warn!(error = %e, "failed to persist collection");
            AppError::Storage(Box::new(e))
        })
    }

    /// 末尾に追加して永続化する。
    pub fn add(&mut self, book: Book) -> Result<(), AppError> {
        tracing::debug!(title = book.title(), "adding book");
        self.collection.add(book);
        self.save()
    }

    /// titleに最初に一致したBookを削除して永続化する。
    pub fn delete(&mut self, title: &str) -> Result<Book, AppError> {
        let removed = self.collection.remove(title)?;
        tracing::debug!(title = removed.title(), "deleted book");
        self.save()?;
        Ok(removed)
    }

    pub fn search(&self, field: SearchField, text: &str) -> Vec<Listing<'_>> {
        self.collection.search(field, text)
    }

    /// titleに最初に一致したBookを部分更新して永続化する。
    pub fn update(&mut self, title: &str, patch: BookPatch) -> Result<Book, AppError> {
        let updated = self.collection.update(title, patch)?.clone();
        tracing::debug!(title = updated.title(), "updated book");
        self.save()?;
        Ok(updated)
    }

    pub fn list(&self) -> Vec<Listing<'_>> {
        self.collection.listings()
    }

    pub fn reading_stats(&self) -> ReadingStats {
        self.collection.reading_stats()
    }
}
