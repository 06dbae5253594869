pub mod article;
pub mod category;
pub mod excerpt;
pub mod input;

pub use article::{Article, ArticleId};
pub use category::Category;
pub use excerpt::derive_excerpt;
pub use input::{
    ArticleField, ArticleFields, ArticleInput, DATE_FORMAT, SaveMode, ValidationError,
};
