//! Rows of the `history` and `favourite` tables.

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HistoryRecord {
    pub id: i64,           // ⇔ history.id
    pub timestamp: String, // ⇔ history.name (TEXT "%Y-%m-%d %H:%M:%S%.6f")
    pub data: String,      // ⇔ history.data (encoded ledger)
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FavouriteRecord {
    pub id: i64,       // ⇔ favourite.id
    pub label: String, // ⇔ favourite.name
    pub data: String,  // ⇔ favourite.data (encoded ledger)
}
