use std::collections::BTreeMap;

use crate::{
    error::{AppError, AppResult},
    models::{Category, ItemId, MenuItem, OrderLine},
};

/// Editable columns of a menu item, each carrying an already validated value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldUpdate {
    Name(String),
    Price(i64),
    Category(Category),
    Stock(i32),
}

impl FieldUpdate {
    /// Parses a `field`/`value` pair as typed by an admin. Applies the same
    /// constraints as [`MenuStore::add`].
    pub fn parse(field: &str, value: &str) -> AppResult<Self> {
        let value = value.trim();
        match field.trim() {
            "name" => Ok(FieldUpdate::Name(validate_name(value)?)),
            "price" => {
                let price = value.parse::<i64>().map_err(|_| {
                    AppError::Validation(format!("price must be a whole number, got '{value}'"))
                })?;
                Ok(FieldUpdate::Price(validate_price(price)?))
            }
            "category" => Ok(FieldUpdate::Category(value.parse()?)),
            "stock" => {
                let stock = value.parse::<i64>().map_err(|_| {
                    AppError::Validation(format!("stock must be a whole number, got '{value}'"))
                })?;
                Ok(FieldUpdate::Stock(validate_stock(stock)?))
            }
            other => Err(AppError::Validation(format!(
                "unknown field '{other}', expected one of name, price, category, stock"
            ))),
        }
    }
}

pub fn validate_name(name: &str) -> AppResult<String> {
    let name = name.trim();
    if name.is_empty() {
        return Err(AppError::Validation("item name cannot be empty".into()));
    }
    Ok(name.to_string())
}

pub fn validate_price(price: i64) -> AppResult<i64> {
    if price <= 0 {
        return Err(AppError::Validation("price must be positive".into()));
    }
    Ok(price)
}

pub fn validate_stock(stock: i64) -> AppResult<i32> {
    if stock < 0 {
        return Err(AppError::Validation("stock cannot be negative".into()));
    }
    i32::try_from(stock).map_err(|_| AppError::Validation("stock is too large".into()))
}

#[derive(Debug, Clone, Default)]
pub struct MenuStore {
    items: BTreeMap<ItemId, MenuItem>,
    // Highest id ever handed out, so a deleted id is never reused.
    last_id: ItemId,
}

impl MenuStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// The menu a freshly started cafe opens with.
    pub fn seeded() -> Self {
        let mut store = Self::new();
        for (name, price, category, stock) in [
            ("Coffee", 50, Category::Beverage, 100),
            ("Tea", 30, Category::Beverage, 80),
            ("Pastry", 200, Category::Food, 50),
        ] {
            store.insert(name.to_string(), price, category, stock);
        }
        store
    }

    pub fn add(&mut self, name: &str, price: i64, category: &str, stock: i64) -> AppResult<MenuItem> {
        let name = validate_name(name)?;
        let price = validate_price(price)?;
        let category = category.parse::<Category>()?;
        let stock = validate_stock(stock)?;
        Ok(self.insert(name, price, category, stock))
    }

    fn insert(&mut self, name: String, price: i64, category: Category, stock: i32) -> MenuItem {
        let max_existing = self.items.keys().next_back().copied().unwrap_or(0);
        let id = self.last_id.max(max_existing) + 1;
        self.last_id = id;
        let item = MenuItem {
            id,
            name,
            price,
            category,
            stock,
        };
        self.items.insert(id, item.clone());
        item
    }

    /// All items in id order, or only the orderable ones.
    pub fn list(&self, include_out_of_stock: bool) -> Vec<MenuItem> {
        self.items
            .values()
            .filter(|item| include_out_of_stock || item.in_stock())
            .cloned()
            .collect()
    }

    pub fn get(&self, id: ItemId) -> Option<&MenuItem> {
        self.items.get(&id)
    }

    pub fn find(&self, id: ItemId) -> AppResult<&MenuItem> {
        self.get(id)
            .ok_or_else(|| AppError::NotFound(format!("menu item {id}")))
    }

    pub fn category_of(&self, id: ItemId) -> Option<Category> {
        self.get(id).map(|item| item.category)
    }

    pub fn update(&mut self, id: ItemId, update: FieldUpdate) -> AppResult<MenuItem> {
        let item = self
            .items
            .get_mut(&id)
            .ok_or_else(|| AppError::NotFound(format!("menu item {id}")))?;
        match update {
            FieldUpdate::Name(name) => item.name = name,
            FieldUpdate::Price(price) => item.price = price,
            FieldUpdate::Category(category) => item.category = category,
            FieldUpdate::Stock(stock) => item.stock = stock,
        }
        Ok(item.clone())
    }

    /// Removes the item when `confirmed`; otherwise only checks it exists.
    pub fn delete(&mut self, id: ItemId, confirmed: bool) -> AppResult<Option<MenuItem>> {
        if !self.items.contains_key(&id) {
            return Err(AppError::NotFound(format!("menu item {id}")));
        }
        if !confirmed {
            return Ok(None);
        }
        Ok(self.items.remove(&id))
    }

    pub fn any_in_stock(&self) -> bool {
        self.items.values().any(MenuItem::in_stock)
    }

    pub fn in_stock_of(&self, category: Category) -> Vec<&MenuItem> {
        self.items
            .values()
            .filter(|item| item.category == category && item.in_stock())
            .collect()
    }

    pub fn in_stock_items(&self) -> Vec<&MenuItem> {
        self.items.values().filter(|item| item.in_stock()).collect()
    }

    /// Checks availability and takes `quantity` out of stock in one step,
    /// returning the priced line for it.
    pub fn reserve(&mut self, id: ItemId, quantity: i64) -> AppResult<OrderLine> {
        let item = self
            .items
            .get_mut(&id)
            .ok_or_else(|| AppError::NotFound(format!("menu item {id}")))?;
        if !item.in_stock() {
            return Err(AppError::OutOfStock(format!("{} is out of stock", item.name)));
        }
        if quantity <= 0 {
            return Err(AppError::InvalidQuantity(
                "quantity must be positive".into(),
            ));
        }
        if quantity > i64::from(item.stock) {
            return Err(AppError::OutOfStock(format!(
                "only {} {} available",
                item.stock, item.name
            )));
        }
        // quantity <= stock, which fits in i32
        let quantity = quantity as i32;
        let line = OrderLine::new(item, quantity)?;
        item.stock -= quantity;
        Ok(line)
    }

    /// Puts `quantity` back on an item's stock. Items deleted since the
    /// reservation are skipped.
    pub fn release(&mut self, id: ItemId, quantity: i32) {
        if let Some(item) = self.items.get_mut(&id) {
            item.stock = item.stock.saturating_add(quantity);
        }
    }
}
