use serde::{Deserialize, Serialize};

/// Referencia {id, name} a una escuela o a una clase dentro de una entrada del carrito
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NamedRef {
    pub id: i64,
    pub name: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CartItem {
    pub id: i64,
    pub name: String,
    /// Entre 0 y 99
    pub quantity: u32,
}

/// Selección guardada (escuela + clase + artículos), id y timestamp asignados por el servidor
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CartEntry {
    pub id: String,
    /// Milisegundos desde epoch
    pub timestamp: i64,
    pub school: NamedRef,
    pub grade: NamedRef,
    #[serde(default)]
    pub items: Vec<CartItem>,
}

impl CartEntry {
    pub fn total_quantity(&self) -> u32 {
        self.items.iter().map(|item| item.quantity).sum()
    }

    /// Fecha legible para la vista del carrito
    pub fn formatted_date(&self) -> String {
        chrono::DateTime::from_timestamp_millis(self.timestamp)
            .map(|date| date.format("%d/%m/%Y %H:%M").to_string())
            .unwrap_or_default()
    }
}

/// Cuerpo de POST /cart
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CartEntryPayload {
    pub school: NamedRef,
    pub grade: NamedRef,
    pub items: Vec<CartItem>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cart_entry_reads_server_shape() {
        let json = r#"{
            "id": "c-17",
            "timestamp": 1700000000000,
            "school": {"id": 3, "name": "École Jules Ferry"},
            "grade": {"id": 12, "name": "CE2"},
            "items": [
                {"id": 1, "name": "Cahier 96 pages", "quantity": 4},
                {"id": 2, "name": "Trousse", "quantity": 1}
            ]
        }"#;
        let entry: CartEntry = serde_json::from_str(json).unwrap();

        assert_eq!(entry.id, "c-17");
        assert_eq!(entry.grade.name, "CE2");
        assert_eq!(entry.total_quantity(), 5);
        assert_eq!(entry.formatted_date(), "14/11/2023 22:13");
    }

    #[test]
    fn missing_items_default_to_empty() {
        let json = r#"{"id":"x","timestamp":0,"school":{"id":1,"name":"A"},"grade":{"id":2,"name":"B"}}"#;
        let entry: CartEntry = serde_json::from_str(json).unwrap();
        assert!(entry.items.is_empty());
        assert_eq!(entry.total_quantity(), 0);
    }
}
