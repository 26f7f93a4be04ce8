use crate::shared::{file_name, same_category};
use serde::{Deserialize, Serialize};

/// Товар каталога: одна запись на одно изображение
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Product {
    /// Порядковый номер в пределах одной сгенерированной коллекции
    pub id: u32,
    /// Имя папки, из которой взято изображение (как в источнике, без trim)
    pub category: String,
    /// Ссылка на изображение; существование файла не проверяется
    pub image: String,
}

impl Product {
    pub fn new(id: u32, category: impl Into<String>, image: impl Into<String>) -> Self {
        Self {
            id,
            category: category.into(),
            image: image.into(),
        }
    }

    /// Имя файла изображения
    pub fn file_name(&self) -> &str {
        file_name(&self.image)
    }

    pub fn in_category(&self, category: &str) -> bool {
        same_category(&self.category, category)
    }
}
