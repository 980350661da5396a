//! In-memory biofuel catalog with search and category filtering.

use time::OffsetDateTime;
use tracing::info;

use crate::core::format::{capitalize_first, format_price_range};

pub const CATEGORY_OPTIONS: [&str; 3] = ["Ethanol Feedstock", "Biomass", "Biodiesel"];
pub const UNIT_OPTIONS: [&str; 3] = ["per metric ton", "per kg", "per liter"];

const ALL_TOKEN: &str = "all";

#[derive(Debug, Clone, PartialEq)]
pub struct Product {
    pub id: u64,
    pub name: String,
    pub description: String,
    pub price_range: String,
    pub unit: String,
    pub category: String,
    pub available: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum CategoryFilter {
    #[default]
    All,
    Only(String),
}

impl CategoryFilter {
    pub fn from_token(token: &str) -> Self {
        if token == ALL_TOKEN {
            CategoryFilter::All
        } else {
            CategoryFilter::Only(token.to_string())
        }
    }

    pub fn token(&self) -> &str {
        match self {
            CategoryFilter::All => ALL_TOKEN,
            CategoryFilter::Only(category) => category,
        }
    }

    /// Chip label: first letter upper-cased.
    pub fn label(&self) -> String {
        capitalize_first(self.token())
    }

    pub fn matches(&self, product: &Product) -> bool {
        match self {
            CategoryFilter::All => true,
            CategoryFilter::Only(category) => product.category == *category,
        }
    }
}

/// Add-product form values.
#[derive(Debug, Clone, PartialEq)]
pub struct ProductDraft {
    pub name: String,
    pub description: String,
    pub price_min: String,
    pub price_max: String,
    pub unit: String,
    pub category: String,
    pub available: bool,
}

impl Default for ProductDraft {
    fn default() -> Self {
        Self {
            name: String::new(),
            description: String::new(),
            price_min: String::new(),
            price_max: String::new(),
            unit: String::new(),
            category: CATEGORY_OPTIONS[0].to_string(),
            available: true,
        }
    }
}

impl ProductDraft {
    /// Every required field holds something other than whitespace.
    pub fn is_complete(&self) -> bool {
        [
            &self.name,
            &self.description,
            &self.price_min,
            &self.price_max,
            &self.unit,
            &self.category,
        ]
        .iter()
        .all(|field| !field.trim().is_empty())
    }
}

/// Buyer inquiry about a listing. Recorded in the log only.
#[derive(Debug, Clone, PartialEq)]
pub struct Inquiry {
    pub product_id: u64,
    pub quantity: String,
    pub message: String,
}

impl Inquiry {
    pub fn record(&self, product: &Product) {
        info!(
            product_id = self.product_id,
            product = %product.name,
            quantity = %self.quantity,
            message = %self.message,
            "marketplace inquiry"
        );
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Catalog {
    products: Vec<Product>,
}

impl Catalog {
    pub fn new(products: Vec<Product>) -> Self {
        Self { products }
    }

    /// The six starter listings.
    pub fn seeded() -> Self {
        let seed = |id, name: &str, description: &str, price: &str, unit: &str, category: &str| {
            Product {
                id,
                name: name.to_string(),
                description: description.to_string(),
                price_range: price.to_string(),
                unit: unit.to_string(),
                category: category.to_string(),
                available: true,
            }
        };

        Self::new(vec![
            seed(
                1,
                "Sugarcane for Ethanol",
                "Used extensively for ethanol production in states like Maharashtra and Uttar Pradesh.",
                "₹3,000 - ₹3,500",
                "per metric ton",
                "Ethanol Feedstock",
            ),
            seed(
                2,
                "Corn for Ethanol",
                "Growing as a feedstock for ethanol due to high yields and government incentives.",
                "₹20 - ₹25",
                "per kg",
                "Ethanol Feedstock",
            ),
            seed(
                3,
                "Rice Husk Pellets",
                "Used in industrial boilers and stoves as a clean fuel.",
                "₹6,000 - ₹12,000",
                "per metric ton",
                "Biomass",
            ),
            seed(
                4,
                "Biomass Wood Pellets",
                "Popular for heating and electricity generation due to low emissions.",
                "₹6,000 - ₹12,000",
                "per metric ton",
                "Biomass",
            ),
            seed(
                5,
                "Jatropha Seeds",
                "Processed for biodiesel production, especially in arid regions.",
                "₹20 - ₹30",
                "per kg",
                "Biodiesel",
            ),
            seed(
                6,
                "Used Cooking Oil (UCO)",
                "Repurposed for biodiesel production.",
                "₹50 - ₹70",
                "per liter",
                "Biodiesel",
            ),
        ])
    }

    pub fn products(&self) -> &[Product] {
        &self.products
    }

    pub fn len(&self) -> usize {
        self.products.len()
    }

    /// Drop everything added this session and go back to the seed listings.
    pub fn reset(&mut self) {
        info!(listings = self.products.len(), "catalog reset to seed listings");
        *self = Self::seeded();
    }

    pub fn get(&self, id: u64) -> Option<&Product> {
        self.products.iter().find(|product| product.id == id)
    }

    /// Prepend a listing built from `draft`. Incomplete drafts add nothing.
    pub fn add_product(&mut self, draft: &ProductDraft) -> Option<&Product> {
        if !draft.is_complete() {
            return None;
        }

        let product = Product {
            id: self.next_id(now_millis()),
            name: draft.name.trim().to_string(),
            description: draft.description.trim().to_string(),
            price_range: format_price_range(&draft.price_min, &draft.price_max),
            unit: draft.unit.clone(),
            category: draft.category.clone(),
            available: draft.available,
        };
        info!(id = product.id, name = %product.name, category = %product.category, "listing added");

        self.products.insert(0, product);
        self.products.first()
    }

    /// Time-based id, bumped past every existing id so it stays unique.
    fn next_id(&self, now_ms: u64) -> u64 {
        let highest = self.products.iter().map(|p| p.id).max().unwrap_or(0);
        now_ms.max(highest + 1)
    }

    /// Products in catalog order whose category matches and whose name or
    /// description contains `search` (case-insensitive).
    pub fn filter<'a>(
        &'a self,
        search: &str,
        category: &'a CategoryFilter,
    ) -> impl Iterator<Item = &'a Product> + 'a {
        let needle = search.to_lowercase();
        self.products.iter().filter(move |product| {
            category.matches(product)
                && (product.name.to_lowercase().contains(&needle)
                    || product.description.to_lowercase().contains(&needle))
        })
    }

    /// `all` followed by each distinct category in first-appearance order.
    pub fn categories(&self) -> Vec<CategoryFilter> {
        let mut out = vec![CategoryFilter::All];
        for product in &self.products {
            let candidate = CategoryFilter::Only(product.category.clone());
            if !out.contains(&candidate) {
                out.push(candidate);
            }
        }
        out
    }
}

fn now_millis() -> u64 {
    let nanos = OffsetDateTime::now_utc().unix_timestamp_nanos();
    u64::try_from(nanos / 1_000_000).unwrap_or(0)
}
