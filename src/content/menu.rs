use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::common::ContentError;

/// A flat price, or separate glass and bottle prices for wine.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Price {
    Flat(String),
    Tiered {
        #[serde(default, skip_serializing_if = "Option::is_none")]
        glass: Option<String>,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        bottle: Option<String>,
    },
}

impl Price {
    pub fn flat(amount: impl Into<String>) -> Self {
        Self::Flat(amount.into())
    }

    pub fn tiered(glass: Option<&str>, bottle: Option<&str>) -> Self {
        Self::Tiered {
            glass: glass.map(str::to_string),
            bottle: bottle.map(str::to_string),
        }
    }

    /// Label/amount pairs in display order. Flat prices carry no label.
    pub fn parts(&self) -> Vec<(Option<&'static str>, &str)> {
        match self {
            Self::Flat(amount) => vec![(None, amount.as_str())],
            Self::Tiered { glass, bottle } => {
                let mut parts = Vec::with_capacity(2);
                if let Some(glass) = glass {
                    parts.push((Some("Glass"), glass.as_str()));
                }
                if let Some(bottle) = bottle {
                    parts.push((Some("Bottle"), bottle.as_str()));
                }
                parts
            }
        }
    }
}

impl std::fmt::Display for Price {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let parts = self
            .parts()
            .into_iter()
            .map(|(label, amount)| match label {
                Some(label) => format!("{label} {amount}"),
                None => amount.to_string(),
            })
            .collect::<Vec<_>>();

        write!(f, "{}", parts.join(" / "))
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct MenuItem {
    pub name: String,
    pub price: Price,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub vegetarian: bool,
}

impl MenuItem {
    pub fn new(name: &str, price: Price, description: &str) -> Self {
        Self {
            name: name.to_string(),
            price,
            description: description.to_string(),
            vegetarian: false,
        }
    }

    pub fn vegetarian(mut self) -> Self {
        self.vegetarian = true;
        self
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct MenuCategory {
    pub category_name: String,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub category_notes: Vec<String>,
    /// Display order.
    pub items: Vec<MenuItem>,
}

impl MenuCategory {
    pub fn new(category_name: &str, items: Vec<MenuItem>) -> Self {
        Self {
            category_name: category_name.to_string(),
            category_notes: Vec::new(),
            items,
        }
    }

    pub fn with_notes(mut self, notes: &[&str]) -> Self {
        self.category_notes = notes.iter().map(|n| n.to_string()).collect();
        self
    }

    pub fn vegetarian_count(&self) -> usize {
        self.items.iter().filter(|i| i.vegetarian).count()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Menu {
    pub menu_name: String,
    pub slug: String,
    pub categories: Vec<MenuCategory>,
}

impl Menu {
    pub fn new(menu_name: &str, slug: &str, categories: Vec<MenuCategory>) -> Self {
        Self {
            menu_name: menu_name.to_string(),
            slug: slug.to_string(),
            categories,
        }
    }

    pub fn items(&self) -> impl Iterator<Item = &MenuItem> {
        self.categories.iter().flat_map(|c| c.items.iter())
    }

    /// Parses a menu authored as JSON and validates it.
    pub fn from_json(json: &str) -> Result<Self, ContentError> {
        let value: Value = serde_json::from_str(json)?;
        reject_legacy_vegetarian(&value)?;

        let menu: Menu = serde_json::from_value(value)?;
        menu.validate()?;
        Ok(menu)
    }

    pub fn validate(&self) -> Result<(), ContentError> {
        require_text(&self.menu_name, "menu name")?;
        require_text(&self.slug, &format!("slug of menu {:?}", self.menu_name))?;

        if self.categories.is_empty() {
            return Err(ContentError::Empty(format!(
                "category list of menu {:?}",
                self.menu_name
            )));
        }

        for category in &self.categories {
            require_text(
                &category.category_name,
                &format!("category name in menu {:?}", self.menu_name),
            )?;

            if category.items.is_empty() {
                return Err(ContentError::Empty(format!(
                    "item list of category {:?}",
                    category.category_name
                )));
            }

            for item in &category.items {
                item.validate(&category.category_name)?;
            }
        }

        Ok(())
    }
}

impl MenuItem {
    fn validate(&self, category_name: &str) -> Result<(), ContentError> {
        require_text(&self.name, &format!("item name in category {:?}", category_name))?;

        match &self.price {
            Price::Flat(amount) => {
                require_text(amount, &format!("price of item {:?}", self.name))
            }
            Price::Tiered { glass, bottle } => {
                let filled = [glass, bottle]
                    .into_iter()
                    .flatten()
                    .any(|p| !p.trim().is_empty());
                if filled {
                    Ok(())
                } else {
                    Err(ContentError::EmptyTieredPrice(self.name.clone()))
                }
            }
        }
    }
}

pub(crate) fn require_text(value: &str, what: &str) -> Result<(), ContentError> {
    if value.trim().is_empty() {
        Err(ContentError::Empty(what.to_string()))
    } else {
        Ok(())
    }
}

fn reject_legacy_vegetarian(value: &Value) -> Result<(), ContentError> {
    let menu = value
        .get("menu_name")
        .and_then(Value::as_str)
        .unwrap_or_default();

    let items = value
        .get("categories")
        .and_then(Value::as_array)
        .into_iter()
        .flatten()
        .filter_map(|c| c.get("items").and_then(Value::as_array))
        .flatten();

    for item in items {
        if item.get("is_vegetarian").is_some() {
            return Err(ContentError::LegacyVegetarianField {
                menu: menu.to_string(),
                item: item
                    .get("name")
                    .and_then(Value::as_str)
                    .unwrap_or_default()
                    .to_string(),
            });
        }
    }

    Ok(())
}
