use super::model::collection::Collection;

/// 永続化の抽象。Infra層が実装する。
pub trait CollectionRepository {
    type Error: std::error::Error + Send + Sync + 'static;

    /// 保存先が存在しなければ`Ok(None)`。
    fn load(&self) -> Result<Option<Collection>, Self::Error>;
    fn save(&self, collection: &Collection) -> Result<(), Self::Error>;
}
