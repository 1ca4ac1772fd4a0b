use serde::{Deserialize, Serialize};
use std::fmt;

use crate::models::cart::NamedRef;

/// Id de catálogo: el backend usa números, algunas listas usan códigos
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ItemId {
    Number(i64),
    Text(String),
}

impl ItemId {
    pub fn as_number(&self) -> Option<i64> {
        match self {
            ItemId::Number(n) => Some(*n),
            ItemId::Text(s) => s.trim().parse().ok(),
        }
    }
}

impl fmt::Display for ItemId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ItemId::Number(n) => write!(f, "{}", n),
            ItemId::Text(s) => f.write_str(s),
        }
    }
}

/// Entidad genérica del selector (escuela, clase...)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SelectItem {
    pub id: ItemId,
    pub name: String,
    /// Campos adicionales que el selector no interpreta
    #[serde(flatten)]
    pub extra: serde_json::Map<String, serde_json::Value>,
}

impl SelectItem {
    pub fn new(id: impl Into<ItemId>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            extra: serde_json::Map::new(),
        }
    }

    /// Referencia para el payload del carrito; None si el id no es numérico
    pub fn to_named_ref(&self) -> Option<NamedRef> {
        Some(NamedRef {
            id: self.id.as_number()?,
            name: self.name.clone(),
        })
    }
}

impl From<i64> for ItemId {
    fn from(value: i64) -> Self {
        ItemId::Number(value)
    }
}

impl From<&str> for ItemId {
    fn from(value: &str) -> Self {
        ItemId::Text(value.to_string())
    }
}

impl From<String> for ItemId {
    fn from(value: String) -> Self {
        ItemId::Text(value)
    }
}

/// Artículo de una lista de fournitures
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EquipmentItem {
    pub id: i64,
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    /// Cantidad sugerida por la lista de la escuela
    #[serde(default = "default_quantity")]
    pub quantity: u32,
}

fn default_quantity() -> u32 {
    1
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn select_item_keeps_extra_fields() {
        let json = r#"{"id": 4, "name": "Collège Victor Hugo", "city": "Lyon"}"#;
        let item: SelectItem = serde_json::from_str(json).unwrap();

        assert_eq!(item.id, ItemId::Number(4));
        assert_eq!(item.extra.get("city").and_then(|v| v.as_str()), Some("Lyon"));
    }

    #[test]
    fn text_ids_convert_when_numeric() {
        let item: SelectItem = serde_json::from_str(r#"{"id": "12", "name": "6e"}"#).unwrap();
        assert_eq!(item.to_named_ref(), Some(NamedRef { id: 12, name: "6e".into() }));

        let coded = SelectItem::new("CM1-B", "CM1 B");
        assert_eq!(coded.to_named_ref(), None);
        assert_eq!(coded.id.to_string(), "CM1-B");
    }

    #[test]
    fn equipment_quantity_defaults_to_one() {
        let item: EquipmentItem = serde_json::from_str(r#"{"id": 9, "name": "Règle 30 cm"}"#).unwrap();
        assert_eq!(item.quantity, 1);
        assert_eq!(item.description, None);
    }
}
