//! Biofuel marketplace: catalog model plus its board, add and inquiry forms.

mod catalog;
mod view;

pub use catalog::{
    Catalog, CategoryFilter, Inquiry, Product, ProductDraft, CATEGORY_OPTIONS, UNIT_OPTIONS,
};
pub use view::MarketplaceBoard;
